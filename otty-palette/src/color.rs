//! Palette colors and their textual forms.

use std::{
    fmt::{self, Display, Formatter},
    ops::Index,
    slice,
    str::FromStr,
};

use crate::error::{PaletteError, Result};

/// 8-bit per channel RGB color. Alpha is never carried.
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from raw channels.
    ///
    /// Three channels are read as RGB, a fourth one is treated as alpha and
    /// dropped. Anything else is rejected instead of being zero-filled.
    pub fn try_from_channels(channels: &[u8]) -> Result<Self> {
        match *channels {
            [r, g, b] | [r, g, b, _] => Ok(Self { r, g, b }),
            _ => Err(PaletteError::MalformedColor {
                index: 0,
                channels: channels.len(),
            }),
        }
    }

    /// Truncate 16-bit channels to their high byte.
    pub const fn from_rgb16(r: u16, g: u16, b: u16) -> Self {
        Self {
            r: (r >> 8) as u8,
            g: (g >> 8) as u8,
            b: (b >> 8) as u8,
        }
    }

    /// Channels scaled to `0.0..=1.0` in R, G, B order.
    pub fn to_unit(self) -> [f64; 3] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        ]
    }

    /// Parse any color form accepted in palette files.
    ///
    /// Besides `#rrggbb` and `0xrrggbb` this understands the XParseColor
    /// syntax used by X resources: `#rgb`, `#rrrgggbbb`, `#rrrrggggbbbb`
    /// and `rgb:r/g/b` with one to four digits per component.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        s.parse().ok().or_else(|| xparse_color(s))
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, ()> {
        let chars = if let Some(rest) = s.strip_prefix("0x") {
            rest
        } else if let Some(rest) = s.strip_prefix('#') {
            rest
        } else {
            return Err(());
        };

        if chars.len() != 6 || !chars.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(());
        }

        let r = u8::from_str_radix(&chars[0..=1], 16).map_err(|_| ())?;
        let g = u8::from_str_radix(&chars[2..=3], 16).map_err(|_| ())?;
        let b = u8::from_str_radix(&chars[4..=5], 16).map_err(|_| ())?;

        Ok(Self { r, g, b })
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

/// Parse colors in XParseColor format.
fn xparse_color(s: &str) -> Option<Rgb> {
    if let Some(digits) = s.strip_prefix('#') {
        parse_sharp_color(digits)
    } else if let Some(spec) = s.strip_prefix("rgb:") {
        parse_rgb_spec(spec)
    } else {
        None
    }
}

/// `#rgb` through `#rrrrggggbbbb`, keeping the high byte of each component.
fn parse_sharp_color(digits: &str) -> Option<Rgb> {
    let width = digits.len() / 3;
    if !(1..=4).contains(&width)
        || digits.len() != width * 3
        || !digits.bytes().all(|b| b.is_ascii_hexdigit())
    {
        return None;
    }

    let high_byte = |part: &str| {
        let value = hex_value(part)?;
        Some(((value << (16 - 4 * part.len())) >> 8) as u8)
    };

    let (r, rest) = digits.split_at(width);
    let (g, b) = rest.split_at(width);

    Some(Rgb {
        r: high_byte(r)?,
        g: high_byte(g)?,
        b: high_byte(b)?,
    })
}

/// `r/g/b` with one to four digits each, scaled to a byte.
fn parse_rgb_spec(spec: &str) -> Option<Rgb> {
    let parts: Vec<&str> = spec.split('/').collect();
    let [r, g, b] = *parts.as_slice() else {
        return None;
    };

    let scale = |part: &str| {
        let value = hex_value(part)?;
        let max = (1u32 << (4 * part.len())) - 1;
        Some((value * 255 / max) as u8)
    };

    Some(Rgb {
        r: scale(r)?,
        g: scale(g)?,
        b: scale(b)?,
    })
}

/// Value of one to four hex digits.
fn hex_value(part: &str) -> Option<u32> {
    if part.is_empty()
        || part.len() > 4
        || !part.bytes().all(|b| b.is_ascii_hexdigit())
    {
        return None;
    }
    u32::from_str_radix(part, 16).ok()
}

/// Ordered list of colors where the position is the ANSI index.
///
/// * `0..8`  – normal colors
/// * `8..16` – bright (intense) variants
///
/// No length is enforced; encoders walk whatever they are given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette(Vec<Rgb>);

impl Palette {
    pub fn new(colors: Vec<Rgb>) -> Self {
        Self(colors)
    }

    /// Build a palette from raw channel tuples, failing on the first entry
    /// that is not three (or four, with alpha) channels wide.
    pub fn try_from_channels<I, C>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = C>,
        C: AsRef<[u8]>,
    {
        entries
            .into_iter()
            .enumerate()
            .map(|(index, channels)| {
                Rgb::try_from_channels(channels.as_ref()).map_err(|err| {
                    match err {
                        PaletteError::MalformedColor { channels, .. } => {
                            PaletteError::MalformedColor { index, channels }
                        },
                        other => other,
                    }
                })
            })
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    /// Parse a palette with one color per line.
    ///
    /// Blank lines and lines starting with `!` or `//` are ignored.
    pub fn parse_lines(input: &str) -> Result<Self> {
        let mut colors = Vec::new();
        for (idx, line) in input.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('!') || line.starts_with("//")
            {
                continue;
            }

            let color =
                Rgb::parse(line).ok_or_else(|| PaletteError::InvalidColor {
                    line: idx + 1,
                    value: line.to_string(),
                })?;
            colors.push(color);
        }

        Ok(Self(colors))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Rgb> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Rgb] {
        &self.0
    }
}

impl From<Vec<Rgb>> for Palette {
    fn from(colors: Vec<Rgb>) -> Self {
        Self(colors)
    }
}

impl FromIterator<Rgb> for Palette {
    fn from_iter<I: IntoIterator<Item = Rgb>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Rgb;
    type IntoIter = slice::Iter<'a, Rgb>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Index<usize> for Palette {
    type Output = Rgb;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}
