// RGBA colors for the sprite, plus the two literal forms we accept:
// channel tuples and `#RRGGBB` strings.
use crate::error::Error;
use std::str::FromStr;

/// Back half of the needle and the cross tick.
pub const NEEDLE_GRAY: Color = Color::rgb(0x64, 0x64, 0x64);
/// Front (north-pointing) half of the needle.
pub const NEEDLE_RED: Color = Color::rgb(0xFF, 0x14, 0x14);

/// Four 8-bit channels, straight (not premultiplied) alpha.
/// `Default` is fully transparent black.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Opaque color (alpha = 255).
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Pack as 0x00RRGGBB for minifb. Alpha is dropped, so a transparent
    /// pixel shows up as whatever its RGB says (black for the default).
    #[inline]
    pub fn to_0rgb(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    #[inline]
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }
}

impl FromStr for Color {
    type Err = Error;

    /// `#RRGGBB`, hex digits in either case. Alpha is always 255.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| Error::ColorDecode(format!("{s:?}: missing leading '#'")))?;

        // from_str_radix alone would accept a '+' sign, so check the digits first.
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::ColorDecode(format!("{s:?}: expected 6 hex digits")));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|e| Error::ColorDecode(format!("{s:?}: {e}")))
        };
        Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::rgb(r, g, b)
    }
}

impl From<(u8, u8, u8, u8)> for Color {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Color::rgba(r, g, b, a)
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Color::rgba(r, g, b, a)
    }
}

impl From<Color> for [u8; 4] {
    fn from(c: Color) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn decodes_hex_literals() {
        let red: Color = "#FF1414".parse().unwrap();
        assert_eq!(red, Color::rgba(255, 20, 20, 255));
        assert_eq!("#ff1414".parse::<Color>().unwrap(), red);
        assert_eq!("#646464".parse::<Color>().unwrap(), NEEDLE_GRAY);
        assert_eq!(red, NEEDLE_RED);
    }

    #[test]
    fn rejects_malformed_hex() {
        for bad in ["#ZZZZZZ", "FF1414", "#FF141", "#FF14141", "#+F1414", "", "#", "#ÿÿÿ"] {
            assert!(
                matches!(bad.parse::<Color>(), Err(Error::ColorDecode(_))),
                "{bad:?} should not decode"
            );
        }
    }

    #[test]
    fn tuples_default_to_opaque() {
        assert_eq!(Color::from((100, 100, 100)), Color::rgba(100, 100, 100, 255));
        assert_eq!(Color::from((1, 2, 3, 4)), Color::rgba(1, 2, 3, 4));
        assert_eq!(<[u8; 4]>::from(Color::from([9, 8, 7, 6])), [9, 8, 7, 6]);
    }

    #[test]
    fn default_is_transparent_black() {
        assert_eq!(Color::default(), Color::TRANSPARENT);
        assert!(Color::default().is_transparent());
    }

    #[test]
    fn packs_for_window_without_alpha() {
        assert_eq!(NEEDLE_RED.to_0rgb(), 0x00_FF_14_14);
        assert_eq!(Color::rgba(1, 2, 3, 0).to_0rgb(), 0x00_01_02_03);
    }
}
