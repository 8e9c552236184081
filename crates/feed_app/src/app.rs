use std::fs;
use std::io::Write;
use std::path::Path;

use feed_core::{RenderTarget, VerticalConfig};
use feed_logging::feed_info;
use feed_source::{FeedService, InMemoryRecordSource, StubNetworkClient};

use crate::cli::Command;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::render::TextRenderer;

/// Loads the record fixtures named by the config, relative to `base_dir`.
pub fn load_source(config: &AppConfig, base_dir: &Path) -> Result<InMemoryRecordSource, AppError> {
    let Some(fixtures) = &config.fixtures else {
        return Ok(InMemoryRecordSource::new());
    };
    let path = base_dir.join(fixtures);
    let json = fs::read_to_string(&path).map_err(|source| AppError::FixtureRead {
        path: path.clone(),
        source,
    })?;
    let source = InMemoryRecordSource::from_json(&json)?;
    feed_info!("Loaded {} records from {:?}", source.len(), path);
    Ok(source)
}

/// Runs one command against a vertical and renders the result to `out`.
pub fn execute<W: Write>(
    vertical: &VerticalConfig,
    source: InMemoryRecordSource,
    command: &Command,
    out: W,
) -> Result<(), AppError> {
    let service = FeedService::new(source, StubNetworkClient::default(), vertical.clone());
    let mut renderer = TextRenderer::new(out);

    let state = match command {
        Command::Run { key } => service.run(*key),
        Command::Demo { count } => service.demo(*count),
        Command::Ping { path } => {
            let code = service.ping(path);
            let mut out = renderer.into_inner();
            writeln!(out, "{path}: {code}")?;
            return Ok(());
        }
    };
    renderer.render(&state)?;
    Ok(())
}
