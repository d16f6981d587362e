use crate::color::Palette;

use super::plist;

/// iTerm2 `.itermcolors` property list.
///
/// Components are written Blue, Green, Red, each as `channel / 255` with 17
/// fractional digits. The order must match previously exported files.
pub(crate) fn iterm2(palette: &Palette) -> String {
    let mut out = String::new();
    plist::open(&mut out);

    for (idx, color) in palette.iter().enumerate() {
        let [red, green, blue] = color.to_unit();

        out.push_str(&format!("\t<key>Ansi {idx} Color</key>\n"));
        out.push_str("\t<dict>\n");
        push_component(&mut out, "Blue", blue);
        push_component(&mut out, "Green", green);
        push_component(&mut out, "Red", red);
        out.push_str("\t</dict>\n");
    }

    plist::close(&mut out);
    out
}

fn push_component(out: &mut String, name: &str, value: f64) {
    out.push_str(&format!("\t\t<key>{name} Component</key>\n"));
    out.push_str(&format!("\t\t<real>{value:.17}</real>\n"));
}
