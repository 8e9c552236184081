use serde::{Deserialize, Serialize};

/// Settings for one feed vertical. Every vertical runs the same pipeline;
/// only these values differ between them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerticalConfig {
    pub name: String,
    /// Maximum number of child records fetched per snapshot.
    pub page_size: usize,
    /// Log snapshot checksums while building views.
    pub enable_logging: bool,
    /// Prepended to the loaded header: `"{prefix} Feed (n)"`.
    pub header_prefix: Option<String>,
}

impl VerticalConfig {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl Default for VerticalConfig {
    fn default() -> Self {
        Self {
            name: "feed".to_string(),
            page_size: 20,
            enable_logging: true,
            header_prefix: None,
        }
    }
}
