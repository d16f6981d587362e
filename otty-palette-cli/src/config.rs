use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::errors::CliError;

/// User defaults read from `~/.config/otty/palette.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct PaletteConfig {
    /// Format id used when `--format` is not given.
    pub(crate) format: Option<String>,
    /// Output file used when `--output` is not given.
    pub(crate) output: Option<PathBuf>,
}

/// Load the config from `path`, or from the default location.
///
/// A missing file yields the defaults.
pub(crate) fn load_config(
    path: Option<&Path>,
) -> Result<PaletteConfig, CliError> {
    match path {
        Some(path) => load_config_from(path),
        None => load_config_from(&config_path()),
    }
}

fn load_config_from(path: &Path) -> Result<PaletteConfig, CliError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            debug!("no config at {}", path.display());
            return Ok(PaletteConfig::default());
        },
        Err(source) => {
            return Err(CliError::Read {
                path: path.to_path_buf(),
                source,
            });
        },
    };

    let parsed = serde_json::from_str(&data)?;
    debug!("loaded config from {}", path.display());
    Ok(parsed)
}

fn config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("otty")
            .join("palette.json");
    }

    std::env::temp_dir().join("otty").join("palette.json")
}
