//! Application configuration, stored as RON.

use std::fs;
use std::path::{Path, PathBuf};

use feed_core::VerticalConfig;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub verticals: Vec<VerticalConfig>,
    /// JSON array of raw records served by the in-memory source.
    pub fixtures: Option<PathBuf>,
    /// Also write logs to this file.
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            verticals: vec![VerticalConfig::default()],
            fixtures: None,
            log_file: None,
        }
    }
}

/// Where a loaded configuration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigOrigin {
    File,
    /// The file was missing.
    Defaults,
}

impl AppConfig {
    /// Reads `path`; a missing file yields the default configuration.
    ///
    /// Nothing is logged here since the logger depends on the result.
    pub fn load(path: &Path) -> Result<(Self, ConfigOrigin), AppError> {
        let content = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok((Self::default(), ConfigOrigin::Defaults));
            }
            Err(source) => {
                return Err(AppError::ConfigRead {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config: Self = ron::from_str(&content).map_err(|err| AppError::ConfigParse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        Ok((config, ConfigOrigin::File))
    }

    /// Log file path, relative paths taken from `base_dir` like fixtures.
    pub fn log_path(&self, base_dir: &Path) -> Option<PathBuf> {
        self.log_file.as_ref().map(|path| base_dir.join(path))
    }

    /// Looks up a vertical by name; `None` picks the first one.
    pub fn vertical(&self, name: Option<&str>) -> Result<&VerticalConfig, AppError> {
        let found = match name {
            Some(name) => self.verticals.iter().find(|vertical| vertical.name == name),
            None => self.verticals.first(),
        };
        found.ok_or_else(|| AppError::UnknownVertical(name.unwrap_or("<none>").to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let (config, origin) = AppConfig::load(&temp.path().join("feed.ron")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(origin, ConfigOrigin::Defaults);
        assert_eq!(config.vertical(None).unwrap().name, "feed");
    }

    #[test]
    fn parses_verticals_with_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("feed.ron");
        fs::write(
            &path,
            r#"(
                verticals: [
                    (name: "feat11", header_prefix: Some("Feat11")),
                    (name: "feat13", page_size: 5, enable_logging: false),
                ],
                fixtures: Some("records.json"),
            )"#,
        )
        .unwrap();

        let (config, origin) = AppConfig::load(&path).unwrap();
        assert_eq!(origin, ConfigOrigin::File);
        assert_eq!(config.fixtures, Some(PathBuf::from("records.json")));
        assert_eq!(config.log_file, None);

        let feat11 = config.vertical(Some("feat11")).unwrap();
        assert_eq!(feat11.header_prefix.as_deref(), Some("Feat11"));
        assert_eq!(feat11.page_size, 20);

        let feat13 = config.vertical(Some("feat13")).unwrap();
        assert_eq!(feat13.page_size, 5);
        assert!(!feat13.enable_logging);
    }

    #[test]
    fn log_file_resolves_against_config_dir() {
        let config = AppConfig {
            log_file: Some(PathBuf::from("feed.log")),
            ..AppConfig::default()
        };
        let base = Path::new("/etc/feed");

        assert_eq!(config.log_path(base), Some(PathBuf::from("/etc/feed/feed.log")));
        assert_eq!(AppConfig::default().log_path(base), None);

        let absolute = AppConfig {
            log_file: Some(PathBuf::from("/var/log/feed.log")),
            ..AppConfig::default()
        };
        assert_eq!(
            absolute.log_path(base),
            Some(PathBuf::from("/var/log/feed.log"))
        );
    }

    #[test]
    fn unknown_vertical_is_an_error() {
        let config = AppConfig::default();
        let err = config.vertical(Some("feat99")).unwrap_err();
        assert!(matches!(err, AppError::UnknownVertical(name) if name == "feat99"));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("feed.ron");
        fs::write(&path, "(verticals: 3)").unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, AppError::ConfigParse { .. }));
    }
}
