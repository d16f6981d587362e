//! Export terminal color palettes to the configuration formats of common
//! terminal emulators.
//!
//! A [`Palette`] is an ordered list of [`Rgb`] colors where the position is
//! the ANSI index. The [`format`] registry maps a stable identifier to an
//! encoder that renders the palette as file contents:
//!
//! ```
//! use otty_palette::{Palette, Rgb, format};
//!
//! let palette = Palette::new(vec![Rgb::new(0, 0, 0), Rgb::new(0x10, 0x20, 0x40)]);
//! let out = format::find("xterm")?.encode(&palette);
//!
//! assert_eq!(out, "! Terminal colors\n*color0: #000000\n*color1: #102040\n");
//! # Ok::<(), otty_palette::PaletteError>(())
//! ```

mod color;
mod encoders;
mod error;
pub mod format;

pub use color::{Palette, Rgb};
pub use error::{PaletteError, Result};
pub use format::FormatDescriptor;
