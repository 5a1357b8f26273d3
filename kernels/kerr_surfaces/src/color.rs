// Hex RGB colors for surface styling

use serde::{Deserialize, Serialize};

// An sRGB color, configured as a "#rrggbb" string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    // Parse a "#rrggbb" hex string
    pub fn from_hex(hex: &str) -> Result<Self, String> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| format!("Invalid color: '{}'. Expected '#rrggbb'", hex))?;
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(format!("Invalid color: '{}'. Expected 6 hex digits", hex));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| format!("Invalid color: '{}'. Bad hex digit", hex))
        };

        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    // RGBA bytes with the given opacity folded into the alpha channel
    pub fn to_rgba_u8(&self, opacity: f64) -> [u8; 4] {
        let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        [self.r, self.g, self.b, alpha]
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rgb::from_hex(&value)
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default_palette() {
        assert_eq!(Rgb::from_hex("#d3d3d3").unwrap(), Rgb::new(0xd3, 0xd3, 0xd3));
        assert_eq!(Rgb::from_hex("#f08080").unwrap(), Rgb::new(0xf0, 0x80, 0x80));
    }

    #[test]
    fn test_reject_malformed_colors() {
        assert!(Rgb::from_hex("d3d3d3").is_err(), "missing # should be rejected");
        assert!(Rgb::from_hex("#d3d3").is_err(), "short strings should be rejected");
        assert!(Rgb::from_hex("#d3d3dg").is_err(), "non-hex digits should be rejected");
    }

    #[test]
    fn test_hex_round_trip() {
        let color = Rgb::new(0x90, 0xee, 0x90);
        assert_eq!(Rgb::from_hex(&color.to_hex()).unwrap(), color);
    }

    #[test]
    fn test_opacity_maps_to_alpha() {
        let color = Rgb::new(10, 20, 30);
        assert_eq!(color.to_rgba_u8(1.0), [10, 20, 30, 255]);
        assert_eq!(color.to_rgba_u8(0.0), [10, 20, 30, 0]);
        // Out-of-range opacities clamp instead of wrapping
        assert_eq!(color.to_rgba_u8(2.0)[3], 255);
    }
}
