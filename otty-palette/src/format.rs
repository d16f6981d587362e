//! Registry of the supported output formats.

use std::fmt::{self, Display, Formatter};

use log::debug;

use crate::color::Palette;
use crate::encoders;
use crate::error::{PaletteError, Result};

type EncodeFn = fn(&Palette) -> String;

/// An output format: the id used to select it, a label for help output and
/// the encoder producing the file contents.
#[derive(Clone, Copy)]
pub struct FormatDescriptor {
    id: &'static str,
    label: &'static str,
    encode: EncodeFn,
}

impl FormatDescriptor {
    const fn new(
        id: &'static str,
        label: &'static str,
        encode: EncodeFn,
    ) -> Self {
        Self { id, label, encode }
    }

    /// Stable identifier, e.g. `konsole`.
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Human readable name of the target terminal.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Render `palette` in this format.
    pub fn encode(&self, palette: &Palette) -> String {
        debug!("encoding {} colors as {}", palette.len(), self.id);
        (self.encode)(palette)
    }
}

impl fmt::Debug for FormatDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatDescriptor")
            .field("id", &self.id)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

impl Display for FormatDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.id)
    }
}

impl PartialEq for FormatDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for FormatDescriptor {}

// New formats are appended; ids are never renamed or reordered.
static FORMATS: [FormatDescriptor; 11] = [
    FormatDescriptor::new(
        "default",
        "Default output (colors only)",
        encoders::colors,
    ),
    FormatDescriptor::new("xfce", "XFCE4Terminal", encoders::xfce),
    FormatDescriptor::new("lilyterm", "LilyTerm", encoders::lilyterm),
    FormatDescriptor::new("terminator", "Terminator", encoders::terminator),
    FormatDescriptor::new("roxterm", "ROXTerm", encoders::roxterm),
    FormatDescriptor::new("xterm", "rxvt/xterm/aterm", encoders::xterm),
    FormatDescriptor::new("konsole", "Konsole", encoders::konsole),
    FormatDescriptor::new("iterm2", "iTerm2", encoders::iterm2),
    FormatDescriptor::new("urxvt", "urxvt", encoders::urxvt),
    FormatDescriptor::new("chrome", "Chrome Shell", encoders::chrome),
    FormatDescriptor::new(
        "osxterminal",
        "OS X Terminal",
        encoders::osx_terminal,
    ),
];

/// All formats in declaration order.
pub fn list() -> &'static [FormatDescriptor] {
    &FORMATS
}

/// Look up a format by its exact, case-sensitive id.
pub fn find(id: &str) -> Result<&'static FormatDescriptor> {
    FORMATS
        .iter()
        .find(|format| format.id == id)
        .ok_or_else(|| PaletteError::UnknownFormat(id.to_string()))
}

/// Encode `palette` with the format named `id`.
pub fn encode(id: &str, palette: &Palette) -> Result<String> {
    Ok(find(id)?.encode(palette))
}
