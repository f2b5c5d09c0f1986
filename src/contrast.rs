//! WCAG 2.x relative luminance and contrast ratio.

use crate::color::Rgb;

/// Minimum contrast ratio for AA conformance on normal-size text.
pub const AA_NORMAL_TEXT: f64 = 4.5;

/// Relative luminance per WCAG 2.x.
///
/// Each channel is normalized to 0.0–1.0, linearized (values at or below
/// 0.03928 scale by 1/12.92, the rest gamma-correct with exponent 2.4), and
/// weighted 0.2126 / 0.7152 / 0.0722.
pub fn luminance(rgb: Rgb) -> f64 {
    let linear = |c: u8| {
        let v = c as f64 / 255.0;
        if v <= 0.03928 {
            v / 12.92
        } else {
            ((v + 0.055) / 1.055).powf(2.4)
        }
    };
    linear(rgb.r) * 0.2126 + linear(rgb.g) * 0.7152 + linear(rgb.b) * 0.0722
}

/// Contrast ratio between two hex colors, rounded to 2 decimal places.
///
/// Valid results fall in [1.0, 21.0]. If either input is not a parseable
/// 6-digit hex string, returns the 0.0 sentinel; callers must not read 0.0
/// as a real ratio.
pub fn contrast_ratio(hex_a: &str, hex_b: &str) -> f64 {
    let (Some(a), Some(b)) = (Rgb::from_hex(hex_a), Rgb::from_hex(hex_b)) else {
        return 0.0;
    };

    let la = luminance(a);
    let lb = luminance(b);
    let ratio = if la > lb {
        (la + 0.05) / (lb + 0.05)
    } else {
        (lb + 0.05) / (la + 0.05)
    };

    (ratio * 100.0).round() / 100.0
}

/// Whether a ratio from [`contrast_ratio`] passes AA for normal text.
/// The 0.0 sentinel never passes.
pub fn passes_aa(ratio: f64) -> bool {
    ratio >= AA_NORMAL_TEXT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_and_white_endpoints() {
        assert_eq!(luminance(Rgb::new(0, 0, 0)), 0.0);
        assert!((luminance(Rgb::new(255, 255, 255)) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn maximum_ratio_is_21() {
        assert_eq!(contrast_ratio("#FFFFFF", "#000000"), 21.0);
    }

    #[test]
    fn self_contrast_is_one() {
        for hex in ["#460e2f", "#f68b29", "#ffffff", "#000000"] {
            assert_eq!(contrast_ratio(hex, hex), 1.0);
        }
    }

    #[test]
    fn ratio_is_symmetric() {
        let pairs = [
            ("#460e2f", "#ffffff"),
            ("#f68b29", "#212120"),
            ("#2a5a3b", "#d2ddde"),
        ];
        for (a, b) in pairs {
            assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
        }
    }

    #[test]
    fn unparseable_input_yields_sentinel() {
        assert_eq!(contrast_ratio("#abc123", "not-a-color"), 0.0);
        assert_eq!(contrast_ratio("nope", "#abc123"), 0.0);
        assert_eq!(contrast_ratio("#abc", "#abc123"), 0.0);
    }

    #[test]
    fn aa_threshold() {
        assert!(passes_aa(contrast_ratio("#ffffff", "#460e2f")));
        assert!(!passes_aa(contrast_ratio("#ffffff", "#f68b29")));
        assert!(!passes_aa(0.0));
    }
}
