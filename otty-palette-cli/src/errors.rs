use std::path::PathBuf;

use otty_palette::PaletteError;
use thiserror::Error;

/// Errors emitted while loading configuration and palette input.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("i/o failed")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Palette(#[from] PaletteError),
}
