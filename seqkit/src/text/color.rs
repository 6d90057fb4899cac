use std::fmt;

use crate::error::{Error, Result};

/// Expand a three digit hex color into six digits.
///
/// ```
/// use seqkit::extend_hex;
///
/// assert_eq!(extend_hex("#03f"), "#0033ff");
/// assert_eq!(extend_hex("05a"), "#0055aa");
/// ```
pub fn extend_hex(hex: &str) -> String {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let mut extended = String::with_capacity(1 + digits.len() * 2);
    extended.push('#');
    for c in digits.chars() {
        extended.push(c);
        extended.push(c);
    }
    extended
}

/// A color with an optional alpha channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: Option<u8>,
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.a {
            Some(a) => write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, a),
            None => write!(f, "rgb({}, {}, {})", self.r, self.g, self.b),
        }
    }
}

/// Parse a hex color of 3, 6 or 8 digits, with or without a leading `#`.
///
/// Eight digits carry an alpha channel as the last byte.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let digits = match digits.len() {
        3 => extend_hex(digits)[1..].to_string(),
        6 | 8 => digits.to_string(),
        _ => return Err(invalid(hex)),
    };
    let bytes = hex::decode(&digits).map_err(|_| invalid(hex))?;
    match bytes[..] {
        [r, g, b] => Ok(Rgb { r, g, b, a: None }),
        [r, g, b, a] => Ok(Rgb {
            r,
            g,
            b,
            a: Some(a),
        }),
        _ => Err(invalid(hex)),
    }
}

fn invalid(hex: &str) -> Error {
    tracing::debug!(hex, "not a hex color");
    Error::InvalidHexColor(hex.to_string())
}
