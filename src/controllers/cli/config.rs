use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::actions::render::render_request::RenderRequest;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads a JSON render request. Missing fields take their default values.
pub fn load_config(path: &Path) -> Result<RenderRequest, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let request = serde_json::from_str(&text).map_err(|source| ConfigError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("loaded render config from {}", path.display());

    Ok(request)
}
