//! Decoding palette files into a [`Palette`].

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use log::debug;
use otty_palette::{Palette, PaletteError, Rgb};
use serde::Deserialize;

use crate::errors::CliError;

/// JSON palette: a bare list of colors or an object with a `colors` list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PaletteFile {
    List(Vec<String>),
    Scheme {
        #[serde(default)]
        name: Option<String>,
        colors: Vec<String>,
    },
}

/// Read a palette from `path`, or from stdin when it is `None` or `-`.
pub(crate) fn read_palette(path: Option<&Path>) -> Result<Palette, CliError> {
    let input = match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .map_err(|source| CliError::Read {
                path: path.to_path_buf(),
                source,
            })?,
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        },
    };

    decode_palette(&input)
}

/// Decode JSON input when it looks like JSON, color lines otherwise.
pub(crate) fn decode_palette(input: &str) -> Result<Palette, CliError> {
    let trimmed = input.trim_start();
    if !(trimmed.starts_with('[') || trimmed.starts_with('{')) {
        return Ok(Palette::parse_lines(input)?);
    }

    let colors = match serde_json::from_str::<PaletteFile>(trimmed)? {
        PaletteFile::List(colors) => colors,
        PaletteFile::Scheme { name, colors } => {
            if let Some(name) = name {
                debug!("decoding scheme {name:?}");
            }
            colors
        },
    };

    let palette = colors
        .iter()
        .enumerate()
        .map(|(idx, value)| {
            Rgb::parse(value).ok_or_else(|| PaletteError::InvalidColor {
                line: idx + 1,
                value: value.clone(),
            })
        })
        .collect::<Result<Palette, _>>()?;

    Ok(palette)
}
