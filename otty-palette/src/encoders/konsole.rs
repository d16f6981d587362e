use crate::color::Palette;

/// Index of the first bright color.
const INTENSE_OFFSET: usize = 8;

/// Konsole `.colorscheme` stanzas with decimal channels.
///
/// Bright colors (index 8 and up) are written as the `Intense` variant of
/// the normal slot they brighten.
pub(crate) fn konsole(palette: &Palette) -> String {
    let mut out = String::new();
    for (idx, color) in palette.iter().enumerate() {
        let section = if idx >= INTENSE_OFFSET {
            format!("Color{}Intense", idx - INTENSE_OFFSET)
        } else {
            format!("Color{idx}")
        };

        out.push_str(&format!("[{section}]\n"));
        out.push_str(&format!("Color={},{},{}\n", color.r, color.g, color.b));
        out.push_str("Transparency=false\n\n");
    }
    out
}
