//! Palette encoders, one function per output format.
//!
//! Every encoder is a pure `fn(&Palette) -> String`: no I/O, no clock, no
//! failure. Lookup by name lives in [`crate::format`].

mod hex;
mod iterm2;
mod konsole;
mod osx_terminal;
mod plist;

pub(crate) use hex::{
    chrome, colors, lilyterm, roxterm, terminator, urxvt, xfce, xterm,
};
pub(crate) use iterm2::iterm2;
pub(crate) use konsole::konsole;
pub(crate) use osx_terminal::osx_terminal;
