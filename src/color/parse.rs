use thiserror::Error;

use crate::color::model::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,
    #[error("missing leading '#'")]
    MissingHash,
    #[error("invalid hex length")]
    InvalidLength,
    #[error("invalid hex digits")]
    InvalidHex,
}

/// Parse the digits of a hex color (without the `#`).
///
/// The allowed formats are:
/// * RGB
/// * RRGGBB
///
/// Digits are case-insensitive. The short form expands each nibble, so
/// `0f0` is the same color as `00ff00`.
fn parse_hex(hex: &str) -> Result<Color, ColorParseError> {
    use ColorParseError::*;

    let nibble = |c: u8| -> Option<u8> {
        match c {
            b'0'..=b'9' => Some(c - b'0'),
            b'a'..=b'f' => Some(c - b'a' + 10),
            b'A'..=b'F' => Some(c - b'A' + 10),
            _ => None,
        }
    };

    let bytes = hex.as_bytes();
    let (r, g, b) = match bytes.len() {
        3 => {
            // RGB
            let r = nibble(bytes[0]).ok_or(InvalidHex)?;
            let g = nibble(bytes[1]).ok_or(InvalidHex)?;
            let b = nibble(bytes[2]).ok_or(InvalidHex)?;

            (r * 17, g * 17, b * 17)
        }
        6 => {
            // RRGGBB
            let nibble2 = |hi: u8, lo: u8| -> Result<u8, ColorParseError> {
                let h = nibble(hi).ok_or(InvalidHex)?;
                let l = nibble(lo).ok_or(InvalidHex)?;

                Ok(h << 4 | l)
            };

            (
                nibble2(bytes[0], bytes[1])?,
                nibble2(bytes[2], bytes[3])?,
                nibble2(bytes[4], bytes[5])?,
            )
        }
        _ => return Err(InvalidLength),
    };

    Ok(Color::rgb(r, g, b))
}

/// Parse a `#RGB` or `#RRGGBB` color.
///
/// Nothing is trimmed: surrounding whitespace is an error, as are alpha
/// forms, named colors and CSS functions.
pub fn parse_color(s: &str) -> Result<Color, ColorParseError> {
    use ColorParseError::*;

    if s.is_empty() {
        return Err(Empty);
    }

    let hex = s.strip_prefix('#').ok_or(MissingHash)?;
    parse_hex(hex)
}

impl core::str::FromStr for Color {
    type Err = ColorParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}
impl TryFrom<&str> for Color {
    type Error = ColorParseError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_color(value)
    }
}
