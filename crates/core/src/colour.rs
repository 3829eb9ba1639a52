// SPDX-License-Identifier: MIT

//!
//! The colour type used by segments and timeline styles
//!

use log::warn;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt::{self, Display};
use thiserror::Error;

/// Errors that can arise in relation to a [`Colour`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColourError {
    #[error("`{0}` is not a hex colour (expected #rrggbb)")]
    InvalidHex(String),
}

/// The `Colour` type.  (De)serialised as a `#rrggbb` string.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Colour {
    r: u8,
    g: u8,
    b: u8,
}

impl TryFrom<String> for Colour {
    type Error = ColourError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Colour::from_hex(value)
    }
}

impl From<Colour> for String {
    fn from(value: Colour) -> Self {
        value.to_hex()
    }
}

impl Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Colour {
    /// White
    pub const WHITE: Colour = Colour::from_rgb(0xff, 0xff, 0xff);

    /// Create a colour from RGB values
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Colour { r, g, b }
    }

    /// Create a colour from a hex colour (e.g. `#ab66ef`, `ab66ef`, `#ab66efff`).
    /// If the hex value has an alpha component, it is removed.
    pub fn from_hex<S: Into<String>>(hex_colour: S) -> Result<Self, ColourError> {
        let original = hex_colour.into();
        let invalid = || ColourError::InvalidHex(original.clone());

        let digits = original.trim().trim_start_matches('#');
        if !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        // Drop the alpha component (only ASCII remains so byte slicing is safe)
        let digits = match digits.len() {
            6 => digits,
            8 => &digits[..6],
            _ => return Err(invalid()),
        };

        let component = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };
        Ok(Colour::from_rgb(
            component(0..2)?,
            component(2..4)?,
            component(4..6)?,
        ))
    }

    /// Get a colour as RGB values
    pub fn as_rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// To get RGB as, say, #0affc3 (for CSS)
    pub fn to_hex(&self) -> String {
        // {:02x} means print as hex, requesting 2 chars (pad left with "0" if only 1 char otherwise)
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Get a lighter shade of the specified colour
    pub fn lightened_colour(colour: Colour) -> Colour {
        let old_r: f64 = colour.r.into();
        let old_g: f64 = colour.g.into();
        let old_b: f64 = colour.b.into();
        let new_r: f64 = (old_r + (0.5 * (255.0 - old_r))).round();
        let new_g: f64 = (old_g + (0.5 * (255.0 - old_g))).round();
        let new_b: f64 = (old_b + (0.5 * (255.0 - old_b))).round();
        Colour::from_rgb(new_r as u8, new_g as u8, new_b as u8)
    }
}

/// Deserialize an optional colour from user input.  A missing, non-string, or
/// invalid colour becomes `None` (and the renderer's default is used) rather
/// than failing the whole document.
pub(crate) fn deserialize_optional_colour<'de, D>(
    deserializer: D,
) -> Result<Option<Colour>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        None | Some(Value::Null) => None,
        Some(Value::String(raw)) => match Colour::from_hex(raw) {
            Ok(colour) => Some(colour),
            Err(error) => {
                warn!("ignoring colour: {error}");
                None
            }
        },
        Some(other) => {
            warn!("ignoring colour `{other}`: expected a #rrggbb string");
            None
        }
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_hex() {
        let colour = Colour::from_hex("#3b82f6").unwrap();
        assert_eq!(colour.as_rgb(), (0x3b, 0x82, 0xf6));
        assert_eq!(Colour::from_hex("3b82f6").unwrap(), colour);
        assert_eq!(Colour::from_hex("#3b82f6ff").unwrap(), colour);

        assert!(Colour::from_hex("").is_err());
        assert!(Colour::from_hex("#3b82f").is_err());
        assert!(Colour::from_hex("#3b82fz").is_err());
        assert!(Colour::from_hex("#ééé").is_err());
    }

    #[test]
    fn hex_round_trip_through_serde() {
        let colour = Colour::from_rgb(0x0a, 0xff, 0xc3);
        let json = serde_json::to_string(&colour).unwrap();
        assert_eq!(json, r##""#0affc3""##);
        assert_eq!(serde_json::from_str::<Colour>(&json).unwrap(), colour);
        assert!(serde_json::from_str::<Colour>(r#""green""#).is_err());
    }

    #[test]
    fn lightened() {
        let black = Colour::from_rgb(0, 0, 0);
        assert_eq!(Colour::lightened_colour(black).as_rgb(), (128, 128, 128));
        assert_eq!(Colour::lightened_colour(Colour::WHITE), Colour::WHITE);
    }
}
