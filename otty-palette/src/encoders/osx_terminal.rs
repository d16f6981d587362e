//! macOS Terminal `.terminal` settings.
//!
//! Terminal keeps every color as an `NSKeyedArchiver` archive of an
//! `NSColor`, base64 encoded into a `<data>` element. The archive is
//! normally a binary plist but Terminal reads the XML flavour as well, so
//! the archive is produced from a text template:
//!
//! 1. format the color as `"r g b"` unit floats,
//! 2. base64 that string into the archive's `NSRGB` slot,
//! 3. base64 the whole archive into the settings document.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use log::warn;

use crate::color::{Palette, Rgb};

use super::plist;

/// Names Terminal uses for the eight normal ANSI slots.
const COLOR_NAMES: [&str; 8] = [
    "Black", "Red", "Green", "Yellow", "Blue", "Magenta", "Cyan", "White",
];

/// Number of slots Terminal has a key for.
const SLOT_COUNT: usize = COLOR_NAMES.len() * 2;

const ARCHIVE_BEFORE_RGB: &str = "<dict><key>$archiver</key><string>NSKeyedArchiver</string><key>$objects</key><array><string>$null</string><dict><key>$class</key><dict><key>CF$UID</key><integer>2</integer></dict><key>NSColorSpace</key><integer>1</integer><key>NSRGB</key><data>";

const ARCHIVE_AFTER_RGB: &str = "</data></dict><dict><key>$classes</key><array><string>NSColor</string><string>NSObject</string></array><key>$classname</key><string>NSColor</string></dict></array><key>$top</key><dict><key>root</key><dict><key>CF$UID</key><integer>1</integer></dict></dict><key>$version</key><integer>100000</integer></dict></plist>";

pub(crate) fn osx_terminal(palette: &Palette) -> String {
    if palette.len() > SLOT_COUNT {
        warn!(
            "osx terminal has {SLOT_COUNT} ansi slots, dropping {} colors",
            palette.len() - SLOT_COUNT
        );
    }

    let mut out = String::new();
    plist::open(&mut out);

    for (idx, color) in palette.iter().enumerate() {
        let Some(key) = slot_key(idx) else {
            break;
        };

        let components = rgb_components(*color);
        let archive = archive_color(&components);

        out.push_str(&format!("\t<key>{key}</key>\n"));
        out.push_str("\t<data>\n");
        out.push_str(&format!("\t{}\n", encode_archive(&archive)));
        out.push_str("\t</data>\n");
    }

    // Terminal reports the file as corrupt without a type.
    out.push_str("\t<key>type</key>\n");
    out.push_str("\t<string>Window Settings</string>\n");

    plist::close(&mut out);
    out
}

/// Settings key for the ANSI slot, `None` past the bright colors.
fn slot_key(idx: usize) -> Option<String> {
    match idx {
        0..8 => Some(format!("ANSI{}Color", COLOR_NAMES[idx])),
        8..SLOT_COUNT => Some(format!(
            "ANSIBright{}Color",
            COLOR_NAMES[idx - COLOR_NAMES.len()]
        )),
        // Terminal has no key past ANSIBrightWhite.
        _ => None,
    }
}

/// Step 1: space separated unit floats with ten fractional digits.
fn rgb_components(color: Rgb) -> String {
    let [r, g, b] = color.to_unit();
    format!("{r:.10} {g:.10} {b:.10}")
}

/// Step 2: the archived `NSColor` with the components in its `NSRGB` slot.
fn archive_color(components: &str) -> String {
    let nsrgb = STANDARD.encode(components.as_bytes());
    format!(
        "{}{ARCHIVE_BEFORE_RGB}{nsrgb}{ARCHIVE_AFTER_RGB}",
        plist::inline_header()
    )
}

/// Step 3: the archive as it is embedded in the settings document.
fn encode_archive(archive: &str) -> String {
    STANDARD.encode(archive.as_bytes())
}
