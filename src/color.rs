//! Rgb and Hsl value types — the public color representations for swatchbook.
//!
//! Stores RGB as 8-bit channels and HSL as degrees/percentages. Uses direct
//! math for color space conversions and hex parsing/formatting.

use crate::math;

/// RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// HSL color: hue in degrees [0,360), saturation and lightness as
/// percentages in [0,100].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Rgb {
    /// Create from 0–255 channel values.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a 6-digit hex string, with or without a leading `#`,
    /// case-insensitive.
    ///
    /// Shorthand (`#abc`) and alpha (`#rrggbbaa`) forms are not accepted;
    /// any input that is not exactly six hex digits returns `None`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let stripped = hex.strip_prefix('#').unwrap_or(hex);
        if stripped.len() != 6 || !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let r = u8::from_str_radix(&stripped[0..2], 16).ok()?;
        let g = u8::from_str_radix(&stripped[2..4], 16).ok()?;
        let b = u8::from_str_radix(&stripped[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    /// Format as lowercase `#rrggbb`.
    ///
    /// Round-trip contract: `Rgb::from_hex(&rgb.to_hex()) == Some(rgb)`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert to HSL. Hue in degrees, saturation and lightness as
    /// percentages. No rounding is applied at this stage.
    pub fn to_hsl(&self) -> Hsl {
        let (h, s, l) = math::rgb_to_hsl(
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        );
        Hsl {
            h,
            s: s * 100.0,
            l: l * 100.0,
        }
    }

    /// Create from HSL. Channels are rounded to the nearest integer.
    pub fn from_hsl(hsl: Hsl) -> Self {
        let (r, g, b) = math::hsl_to_rgb(hsl.h, hsl.s / 100.0, hsl.l / 100.0);
        Self {
            r: (r * 255.0).round() as u8,
            g: (g * 255.0).round() as u8,
            b: (b * 255.0).round() as u8,
        }
    }
}

impl Hsl {
    /// Create from degrees / percentage values.
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Convert to a lowercase `#rrggbb` string, rounding each channel.
    pub fn to_hex(&self) -> String {
        Rgb::from_hsl(*self).to_hex()
    }

    /// This color with its hue rotated by `degrees`, wrapped mod 360.
    pub fn rotate_hue(&self, degrees: f64) -> Self {
        Self {
            h: (self.h + degrees).rem_euclid(360.0),
            s: self.s,
            l: self.l,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        assert_eq!(Rgb::from_hex("#460E2F"), Some(Rgb::new(0x46, 0x0e, 0x2f)));
        assert_eq!(Rgb::from_hex("f68b29"), Some(Rgb::new(0xf6, 0x8b, 0x29)));
        assert_eq!(Rgb::from_hex("#FFFFFF"), Some(Rgb::new(255, 255, 255)));
    }

    #[test]
    fn rejects_everything_else() {
        assert_eq!(Rgb::from_hex("#abc"), None);
        assert_eq!(Rgb::from_hex("#abcd"), None);
        assert_eq!(Rgb::from_hex("#aabbccdd"), None);
        assert_eq!(Rgb::from_hex("not-a-color"), None);
        assert_eq!(Rgb::from_hex(""), None);
        assert_eq!(Rgb::from_hex("#12345g"), None);
    }

    #[test]
    fn format_normalizes_to_lowercase() {
        let rgb = Rgb::from_hex("#460E2F").unwrap();
        assert_eq!(rgb.to_hex(), "#460e2f");
    }

    #[test]
    fn hex_round_trip_is_exact() {
        for hex in ["#000000", "#ffffff", "#460e2f", "#f68b29", "#01ab9c"] {
            let rgb = Rgb::from_hex(hex).unwrap();
            assert_eq!(rgb.to_hex(), hex);
            assert_eq!(Rgb::from_hex(&rgb.to_hex()), Some(rgb));
        }
    }

    #[test]
    fn red_to_hsl() {
        let hsl = Rgb::new(255, 0, 0).to_hsl();
        assert_eq!(hsl.h, 0.0);
        assert_eq!(hsl.s, 100.0);
        assert_eq!(hsl.l, 50.0);
    }

    #[test]
    fn hsl_round_trip_within_one_per_channel() {
        for hex in ["#460e2f", "#f68b29", "#2a5a3b", "#1b4b7a", "#d2ddde"] {
            let rgb = Rgb::from_hex(hex).unwrap();
            let back = Rgb::from_hsl(rgb.to_hsl());
            assert!((rgb.r as i16 - back.r as i16).abs() <= 1, "{hex} r");
            assert!((rgb.g as i16 - back.g as i16).abs() <= 1, "{hex} g");
            assert!((rgb.b as i16 - back.b as i16).abs() <= 1, "{hex} b");
        }
    }

    #[test]
    fn rotate_hue_wraps() {
        let hsl = Hsl::new(350.0, 100.0, 50.0);
        let rotated = hsl.rotate_hue(30.0);
        assert_eq!(rotated.h, 20.0);
        assert_eq!(rotated.s, 100.0);
        assert_eq!(rotated.l, 50.0);
    }
}
