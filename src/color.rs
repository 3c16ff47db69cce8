//! `#RRGGBB` decoding and the RGB value type.

use std::fmt;
use std::str::FromStr;

use crate::error::HexError;

/// Minimum accepted length: `#` plus three channel pairs.
const HEX_COLOR_LEN: usize = 7;

/// One 24-bit color, ordered (red, green, blue).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Decode `#RRGGBB`.
    ///
    /// Channel pairs are read at fixed offsets 1, 3 and 5; anything after
    /// offset 6 is ignored. Upper- and lower-case digits are both accepted.
    pub fn from_hex(input: &str) -> Result<Self, HexError> {
        if input.len() < HEX_COLOR_LEN {
            return Err(HexError::TooShort { len: input.len() });
        }
        if !input.starts_with('#') {
            return Err(HexError::MissingHash);
        }
        Ok(Self {
            r: channel(input, 1)?,
            g: channel(input, 3)?,
            b: channel(input, 5)?,
        })
    }

    /// Lower-case `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channel-wise complement (`255 - c`).
    pub const fn inverted(self) -> Self {
        Self {
            r: 255 - self.r,
            g: 255 - self.g,
            b: 255 - self.b,
        }
    }
}

fn channel(input: &str, offset: usize) -> Result<u8, HexError> {
    // Callers guarantee at least HEX_COLOR_LEN bytes, so the byte slice is in range.
    let invalid = || HexError::InvalidDigit {
        offset,
        pair: String::from_utf8_lossy(&input.as_bytes()[offset..offset + 2]).into_owned(),
    };
    let pair = input.get(offset..offset + 2).ok_or_else(invalid)?;
    // from_str_radix accepts a leading `+`, which is not a hex digit.
    if !pair.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    u8::from_str_radix(pair, 16).map_err(|_| invalid())
}

impl FromStr for Rgb {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}
