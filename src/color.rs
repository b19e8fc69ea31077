//! Color types for data-point styling.
//!
//! Provides an 8-bit RGBA representation with hex-string formatting and
//! parsing. The hex form is the canonical textual representation used by
//! [`DataPoint`](crate::point::DataPoint)'s debug output.

use crate::error::{Error, Result};

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Opaque red. Default color of a freshly constructed data point.
    pub const RED: Self = Self::new(255, 0, 0, 255);
    /// Opaque green.
    pub const GREEN: Self = Self::new(0, 255, 0, 255);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(0, 0, 255, 255);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create a color with modified alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Format as a `#rrggbb` hex string, with an `aa` suffix only when
    /// the color is not fully opaque.
    #[must_use]
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// Parse a hex color string.
    ///
    /// Accepts `#rgb`, `#rrggbb` and `#rrggbbaa` forms; the leading `#`
    /// is optional.
    pub fn from_hex(s: &str) -> Result<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        let invalid = || Error::InvalidColor(s.to_string());

        let byte = |range: std::ops::Range<usize>| -> Result<u8> {
            u8::from_str_radix(digits.get(range).ok_or_else(invalid)?, 16)
                .map_err(|_| invalid())
        };

        match digits.len() {
            3 => {
                let nibble = |i: usize| -> Result<u8> {
                    let n = u8::from_str_radix(digits.get(i..=i).ok_or_else(invalid)?, 16)
                        .map_err(|_| invalid())?;
                    Ok(n << 4 | n)
                };
                Ok(Self::rgb(nibble(0)?, nibble(1)?, nibble(2)?))
            }
            6 => Ok(Self::rgb(byte(0..2)?, byte(2..4)?, byte(4..6)?)),
            8 => Ok(Self::new(byte(0..2)?, byte(2..4)?, byte(4..6)?, byte(6..8)?)),
            _ => Err(invalid()),
        }
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Linear interpolation between two colors.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let inv_t = 1.0 - t;

        Self::new(
            (f32::from(self.r) * inv_t + f32::from(other.r) * t) as u8,
            (f32::from(self.g) * inv_t + f32::from(other.g) * t) as u8,
            (f32::from(self.b) * inv_t + f32::from(other.b) * t) as u8,
            (f32::from(self.a) * inv_t + f32::from(other.a) * t) as u8,
        )
    }
}

impl std::fmt::Display for Rgba {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::str::FromStr for Rgba {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_constants() {
        assert_eq!(Rgba::BLACK, Rgba::rgb(0, 0, 0));
        assert_eq!(Rgba::WHITE, Rgba::rgb(255, 255, 255));
        assert_eq!(Rgba::RED.r, 255);
        assert_eq!(Rgba::GREEN.g, 255);
        assert_eq!(Rgba::BLUE.b, 255);
    }

    #[test]
    fn test_to_hex_opaque() {
        assert_eq!(Rgba::RED.to_hex(), "#ff0000");
        assert_eq!(Rgba::rgb(18, 52, 86).to_hex(), "#123456");
    }

    #[test]
    fn test_to_hex_with_alpha() {
        assert_eq!(Rgba::new(255, 0, 0, 128).to_hex(), "#ff000080");
        assert_eq!(Rgba::TRANSPARENT.to_hex(), "#00000000");
    }

    #[test]
    fn test_from_hex_forms() {
        assert_eq!(Rgba::from_hex("#ff0000").unwrap(), Rgba::RED);
        assert_eq!(Rgba::from_hex("ff0000").unwrap(), Rgba::RED);
        assert_eq!(Rgba::from_hex("#f00").unwrap(), Rgba::RED);
        assert_eq!(
            Rgba::from_hex("#ff000080").unwrap(),
            Rgba::new(255, 0, 0, 128)
        );
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert!(Rgba::from_hex("#zz0000").is_err());
        assert!(Rgba::from_hex("#ff00").is_err());
        assert!(Rgba::from_hex("").is_err());
        assert!(matches!(
            Rgba::from_hex("#nope"),
            Err(Error::InvalidColor(_))
        ));
    }

    #[test]
    fn test_hex_round_trip() {
        for color in [Rgba::RED, Rgba::rgb(1, 2, 3), Rgba::new(9, 8, 7, 6)] {
            assert_eq!(Rgba::from_hex(&color.to_hex()).unwrap(), color);
        }
    }

    #[test]
    fn test_display_matches_hex() {
        assert_eq!(Rgba::BLUE.to_string(), "#0000ff");
    }

    #[test]
    fn test_rgba_lerp() {
        let mid = Rgba::BLACK.lerp(Rgba::WHITE, 0.5);
        assert_eq!(mid.r, 127);
        assert_eq!(mid.g, 127);
        assert_eq!(mid.b, 127);
    }
}
