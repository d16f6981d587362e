use thiserror::Error;

/// Errors originating from palette construction and format lookup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaletteError {
    #[error("unknown output format: {0}")]
    UnknownFormat(String),

    #[error("color {index} has {channels} channels, expected 3 or 4")]
    MalformedColor { index: usize, channels: usize },

    #[error("line {line}: cannot parse color {value:?}")]
    InvalidColor { line: usize, value: String },
}

pub type Result<T> = std::result::Result<T, PaletteError>;
