use std::io;
use std::path::PathBuf;

use feed_source::SourceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read config {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {path:?}: {message}")]
    ConfigParse { path: PathBuf, message: String },
    #[error("failed to read fixtures {path:?}: {source}")]
    FixtureRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to load fixtures: {0}")]
    Fixture(#[from] SourceError),
    #[error("unknown vertical: {0}")]
    UnknownVertical(String),
    #[error("render failed: {0}")]
    Render(#[from] io::Error),
}
