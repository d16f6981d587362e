//! Line oriented formats that carry colors as `#rrggbb` strings.

use log::warn;

use crate::color::{Palette, Rgb};

/// Size advertised in the ROXTerm header, whatever the palette length.
const ROXTERM_PALETTE_SIZE: usize = 16;

/// One `#rrggbb` line per color.
pub(crate) fn colors(palette: &Palette) -> String {
    palette.iter().map(|color| format!("{color}\n")).collect()
}

/// `ColorPalette=` with every channel written twice, i.e. 16-bit hex.
pub(crate) fn xfce(palette: &Palette) -> String {
    let mut out = String::from("ColorPalette=");
    for &Rgb { r, g, b } in palette {
        out.push_str(&format!(
            "#{r:02x}{r:02x}{g:02x}{g:02x}{b:02x}{b:02x};"
        ));
    }
    out.push('\n');
    out
}

pub(crate) fn lilyterm(palette: &Palette) -> String {
    indexed_lines(palette, |idx, color| format!("Color{idx} = {color}"))
}

/// A single quoted, `:` separated `palette` entry.
pub(crate) fn terminator(palette: &Palette) -> String {
    let colors: Vec<String> =
        palette.iter().map(|color| color.to_string()).collect();

    format!("palette = \"{}\"\n", colors.join(":"))
}

pub(crate) fn roxterm(palette: &Palette) -> String {
    if palette.len() != ROXTERM_PALETTE_SIZE {
        warn!(
            "roxterm header declares {ROXTERM_PALETTE_SIZE} colors, palette has {}",
            palette.len()
        );
    }

    let mut out = String::from("[roxterm colour scheme]\n");
    out.push_str(&format!("pallete_size={ROXTERM_PALETTE_SIZE}\n"));
    out.push_str(&indexed_lines(palette, |idx, color| {
        format!("color{idx} = {color}")
    }));
    out
}

/// X resources for rxvt, xterm and aterm.
pub(crate) fn xterm(palette: &Palette) -> String {
    let mut out = String::from("! Terminal colors\n");
    out.push_str(&indexed_lines(palette, |idx, color| {
        format!("*color{idx}: {color}")
    }));
    out
}

pub(crate) fn urxvt(palette: &Palette) -> String {
    indexed_lines(palette, |idx, color| format!("URxvt*color{idx}: {color}"))
}

/// Chrome Secure Shell `color-palette-overrides` object keyed by index.
pub(crate) fn chrome(palette: &Palette) -> String {
    let entries: Vec<String> = palette
        .iter()
        .enumerate()
        .map(|(idx, color)| format!(" \"{idx}\":  \"{color}\" "))
        .collect();

    format!("{{{}}}\n", entries.join(", "))
}

fn indexed_lines<F>(palette: &Palette, line: F) -> String
where
    F: Fn(usize, &Rgb) -> String,
{
    palette
        .iter()
        .enumerate()
        .map(|(idx, color)| line(idx, color) + "\n")
        .collect()
}
