use base64::{Engine as _, engine::general_purpose::STANDARD};
use otty_palette::{Palette, Rgb, format};

/// Entry `i` is `(i * 16, i * 32, i * 64)` wrapped to a byte.
fn stepped_palette() -> Palette {
    (0u32..16)
        .map(|i| {
            Rgb::new(
                (i * 16 % 256) as u8,
                (i * 32 % 256) as u8,
                (i * 64 % 256) as u8,
            )
        })
        .collect()
}

fn is_hex(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_hexdigit())
}

fn encode(id: &str, palette: &Palette) -> String {
    format::encode(id, palette).expect("format is registered")
}

#[test]
fn every_format_is_deterministic() {
    let palette = stepped_palette();
    for descriptor in format::list() {
        assert_eq!(
            descriptor.encode(&palette),
            descriptor.encode(&palette.clone()),
            "{descriptor} output changed between calls"
        );
    }
}

const PLIST_EMPTY_TAIL: &str =
    "<plist version=\"1.0\">\n<dict>\n</dict>\n</plist>\n";

#[test]
fn empty_palette_keeps_every_format_well_formed() {
    let empty = Palette::default();
    for descriptor in format::list() {
        let out = descriptor.encode(&empty);
        match descriptor.id() {
            "default" | "lilyterm" | "konsole" | "urxvt" => {
                assert_eq!(out, "", "{descriptor}")
            },
            "xfce" => assert_eq!(out, "ColorPalette=\n"),
            "terminator" => assert_eq!(out, "palette = \"\"\n"),
            "roxterm" => {
                assert_eq!(out, "[roxterm colour scheme]\npallete_size=16\n")
            },
            "xterm" => assert_eq!(out, "! Terminal colors\n"),
            "chrome" => assert_eq!(out, "{}\n"),
            "iterm2" => assert!(out.ends_with(PLIST_EMPTY_TAIL), "{out}"),
            "osxterminal" => {
                assert!(out.contains("<dict>\n"));
                assert!(out.ends_with(
                    "\t<string>Window Settings</string>\n</dict>\n</plist>\n"
                ));
                assert!(!out.contains("<data>"));
            },
            other => panic!("unchecked format {other}"),
        }
    }
}

#[test]
fn long_palette_is_encoded_to_the_end() {
    let long: Palette = (0..=255u8).map(|v| Rgb::new(v, v, v)).collect();
    for descriptor in format::list() {
        let out = descriptor.encode(&long);
        let last = match descriptor.id() {
            "default" => "#ffffff",
            "xfce" => "#ffffffffffff;",
            "lilyterm" => "Color255 = #ffffff",
            "terminator" => "#ffffff\"",
            "roxterm" => "color255 = #ffffff",
            "xterm" => "*color255: #ffffff",
            "konsole" => "[Color247Intense]",
            "iterm2" => "<key>Ansi 255 Color</key>",
            "urxvt" => "URxvt*color255: #ffffff",
            "chrome" => "\"255\":  \"#ffffff\" }",
            "osxterminal" => "<key>ANSIBrightWhiteColor</key>",
            other => panic!("unchecked format {other}"),
        };
        assert!(out.contains(last), "{descriptor} is missing {last:?}");
    }
}

#[test]
fn end_to_end_default_and_urxvt() {
    let palette = stepped_palette();

    let default = encode("default", &palette);
    let mut lines = default.lines();
    assert_eq!(lines.next(), Some("#000000"));
    assert_eq!(lines.next(), Some("#102040"));
    assert_eq!(default.lines().count(), 16);

    let urxvt = encode("urxvt", &palette);
    assert_eq!(urxvt.lines().next(), Some("URxvt*color0: #000000"));
    assert_eq!(urxvt.lines().nth(1), Some("URxvt*color1: #102040"));
}

#[test]
fn hex_formats_emit_six_digit_colors() {
    let palette = stepped_palette();
    for id in ["default", "lilyterm", "roxterm", "xterm", "urxvt"] {
        let out = encode(id, &palette);
        let colors: Vec<&str> = out
            .lines()
            .filter_map(|line| line.rsplit_once('#'))
            .map(|(_, hex)| hex)
            .collect();

        assert_eq!(colors.len(), palette.len(), "{id}");
        assert!(colors.iter().all(|hex| is_hex(hex, 6)), "{id}: {out}");
    }
}

#[test]
fn xfce_entries_are_twelve_digits() {
    let out = encode("xfce", &stepped_palette());
    let body = out
        .trim_end()
        .strip_prefix("ColorPalette=")
        .expect("xfce prefix");
    let entries: Vec<&str> =
        body.split(';').filter(|entry| !entry.is_empty()).collect();

    assert_eq!(entries.len(), 16);
    for entry in entries {
        let hex = entry.strip_prefix('#').expect("entry starts with #");
        assert!(is_hex(hex, 12), "{entry}");
    }
    assert!(out.contains("#101020204040;"));
}

#[test]
fn konsole_intense_stanzas_match_bright_colors() {
    let palette = stepped_palette();
    let out = encode("konsole", &palette);

    for i in 8..16 {
        let color = palette[i];
        let stanza = format!(
            "[Color{}Intense]\nColor={},{},{}\nTransparency=false\n\n",
            i - 8,
            color.r,
            color.g,
            color.b
        );
        assert!(out.contains(&stanza), "missing {stanza:?}");
    }
    assert_eq!(out.matches("Intense]").count(), 8);
}

#[test]
fn terminator_joins_with_colons() {
    let out = encode("terminator", &stepped_palette());
    let body = out
        .strip_prefix("palette = \"")
        .and_then(|rest| rest.strip_suffix("\"\n"))
        .expect("quoted palette");

    assert!(!body.ends_with(':'));
    let colors: Vec<&str> = body.split(':').collect();
    assert_eq!(colors.len(), 16);
    assert_eq!(colors[1], "#102040");
}

#[test]
fn chrome_keys_are_indices_without_trailing_comma() {
    let out = encode("chrome", &stepped_palette());

    assert!(out.starts_with("{ \"0\":  \"#000000\" ,"));
    assert!(out.ends_with(" \"15\":  \"#f0e0c0\" }\n"));
    assert!(!out.trim_end().trim_end_matches('}').trim_end().ends_with(','));
}

fn iterm_reals(out: &str) -> Vec<f64> {
    out.lines()
        .filter_map(|line| {
            line.trim()
                .strip_prefix("<real>")
                .and_then(|rest| rest.strip_suffix("</real>"))
        })
        .map(|value| value.parse().expect("valid float"))
        .collect()
}

#[test]
fn iterm2_components_round_trip_every_channel_value() {
    let palette: Palette =
        (0..=255u8).map(|v| Rgb::new(v, 255 - v, v / 2)).collect();
    let out = encode("iterm2", &palette);
    let reals = iterm_reals(&out);

    assert_eq!(reals.len(), 256 * 3);
    for (color, chunk) in palette.iter().zip(reals.chunks(3)) {
        let [blue, green, red] = [chunk[0], chunk[1], chunk[2]];
        assert_eq!((red * 255.0).round() as u8, color.r);
        assert_eq!((green * 255.0).round() as u8, color.g);
        assert_eq!((blue * 255.0).round() as u8, color.b);
    }
}

#[test]
fn iterm2_uses_seventeen_fraction_digits() {
    let out = encode("iterm2", &stepped_palette());
    let first = out
        .lines()
        .find_map(|line| line.trim().strip_prefix("<real>"))
        .and_then(|rest| rest.strip_suffix("</real>"))
        .expect("at least one component");

    let (_, fraction) = first.split_once('.').expect("decimal point");
    assert_eq!(fraction.len(), 17);
    assert!(out.contains("\t<key>Ansi 15 Color</key>\n"));
}

/// Decode the `NSRGB` payload of every `<data>` block.
fn osx_components(out: &str) -> Vec<String> {
    let lines: Vec<&str> = out.lines().collect();
    lines
        .windows(2)
        .filter(|pair| pair[0] == "\t<data>")
        .map(|pair| {
            let archive = STANDARD
                .decode(pair[1].trim())
                .expect("outer layer is base64");
            let archive = String::from_utf8(archive).expect("archive is utf-8");
            let (_, rest) = archive
                .split_once("<key>NSRGB</key><data>")
                .expect("archive has NSRGB");
            let (nsrgb, _) =
                rest.split_once("</data>").expect("NSRGB data is closed");
            let components =
                STANDARD.decode(nsrgb).expect("inner layer is base64");
            String::from_utf8(components).expect("components are ascii")
        })
        .collect()
}

#[test]
fn osx_terminal_nests_two_base64_layers() {
    let out = encode("osxterminal", &stepped_palette());
    let components = osx_components(&out);

    assert_eq!(components.len(), 16);
    for text in &components {
        let values: Vec<&str> = text.split(' ').collect();
        assert_eq!(values.len(), 3, "{text}");
        for value in values {
            let (_, fraction) = value.split_once('.').expect("decimal point");
            assert_eq!(fraction.len(), 10, "{value}");
            let parsed: f64 = value.parse().expect("valid float");
            assert!((0.0..=1.0).contains(&parsed));
        }
    }
    assert_eq!(components[1], "0.0627450980 0.1254901961 0.2509803922");
}

#[test]
fn osx_terminal_components_round_trip_every_channel_value() {
    let values: Vec<u8> = (0..=255u8).collect();
    for chunk in values.chunks(16) {
        let palette: Palette =
            chunk.iter().map(|&v| Rgb::new(v, 255 - v, v / 3)).collect();
        let out = encode("osxterminal", &palette);

        for (color, text) in palette.iter().zip(osx_components(&out)) {
            let channels: Vec<u8> = text
                .split(' ')
                .map(|value| {
                    let parsed: f64 = value.parse().expect("valid float");
                    (parsed * 255.0).round() as u8
                })
                .collect();
            assert_eq!(channels, [color.r, color.g, color.b]);
        }
    }
}

#[test]
fn osx_terminal_names_bright_slots() {
    let out = encode("osxterminal", &stepped_palette());

    assert!(out.contains("\t<key>ANSIBlackColor</key>\n\t<data>\n\t"));
    assert!(out.contains("\t<key>ANSIBrightWhiteColor</key>\n"));
    assert!(out.ends_with(
        "\t<key>type</key>\n\t<string>Window Settings</string>\n</dict>\n</plist>\n"
    ));
}
