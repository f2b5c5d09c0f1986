//! Color math — direct conversions without external dependencies.
//! Channels are normalized f64 in 0.0–1.0; hue is in degrees.

/// RGB → HSL. Channels 0.0–1.0. Returns (h in [0,360), s 0.0–1.0, l 0.0–1.0).
///
/// Achromatic inputs (max == min) report hue 0 and saturation 0.
pub(crate) fn rgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h6 = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    ((h6 * 60.0).rem_euclid(360.0), s, l)
}

/// HSL → RGB. Hue in degrees (any value, wrapped mod 360), s and l 0.0–1.0.
/// Returns unrounded channels in 0.0–1.0.
pub(crate) fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let a = s * l.min(1.0 - l);
    let f = |n: f64| {
        let k = (n + h / 30.0).rem_euclid(12.0);
        l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0)
    };
    (f(0.0), f(8.0), f(4.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primaries_to_hsl() {
        assert_eq!(rgb_to_hsl(1.0, 0.0, 0.0), (0.0, 1.0, 0.5));
        assert_eq!(rgb_to_hsl(0.0, 1.0, 0.0), (120.0, 1.0, 0.5));
        assert_eq!(rgb_to_hsl(0.0, 0.0, 1.0), (240.0, 1.0, 0.5));
    }

    #[test]
    fn achromatic_has_zero_hue_and_saturation() {
        assert_eq!(rgb_to_hsl(0.5, 0.5, 0.5), (0.0, 0.0, 0.5));
        assert_eq!(rgb_to_hsl(1.0, 1.0, 1.0), (0.0, 0.0, 1.0));
    }

    #[test]
    fn hsl_to_rgb_primaries() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), (1.0, 0.0, 0.0));
        assert_eq!(hsl_to_rgb(120.0, 1.0, 0.5), (0.0, 1.0, 0.0));
        assert_eq!(hsl_to_rgb(240.0, 1.0, 0.5), (0.0, 0.0, 1.0));
    }

    #[test]
    fn hue_wraps_past_360() {
        assert_eq!(hsl_to_rgb(360.0, 1.0, 0.5), hsl_to_rgb(0.0, 1.0, 0.5));
        let (r1, g1, b1) = hsl_to_rgb(390.0, 1.0, 0.5);
        let (r2, g2, b2) = hsl_to_rgb(30.0, 1.0, 0.5);
        assert!((r1 - r2).abs() < 1e-12);
        assert!((g1 - g2).abs() < 1e-12);
        assert!((b1 - b2).abs() < 1e-12);
    }
}
