//! Color-wheel harmonies: fixed hue rotations of a base color.
//!
//! Every generator converts the base hex to HSL, rotates the hue, and
//! formats the result back to hex. An unparseable base falls back to
//! HSL (0, 0, 0) rather than failing, so output is always defined.

use crate::color::{Hsl, Rgb};

/// Harmony kinds the palette viewer offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Harmony {
    Complementary,
    Analogous,
    Triadic,
}

impl Harmony {
    /// The swatches for this harmony, in display order: one color for
    /// complementary, two for analogous and triadic.
    pub fn colors(&self, hex: &str) -> Vec<String> {
        match self {
            Harmony::Complementary => vec![complementary(hex)],
            Harmony::Analogous => analogous(hex).to_vec(),
            Harmony::Triadic => triadic(hex).to_vec(),
        }
    }
}

fn base_hsl(hex: &str) -> Hsl {
    Rgb::from_hex(hex)
        .map(|rgb| rgb.to_hsl())
        .unwrap_or(Hsl::new(0.0, 0.0, 0.0))
}

/// Hex color 180° across the hue circle from `hex`.
pub fn complementary(hex: &str) -> String {
    base_hsl(hex).rotate_hue(180.0).to_hex()
}

/// Hex colors at +30° and +330° from `hex`, in that order.
pub fn analogous(hex: &str) -> [String; 2] {
    let hsl = base_hsl(hex);
    [hsl.rotate_hue(30.0).to_hex(), hsl.rotate_hue(330.0).to_hex()]
}

/// Hex colors at +120° and +240° from `hex`, in that order.
pub fn triadic(hex: &str) -> [String; 2] {
    let hsl = base_hsl(hex);
    [hsl.rotate_hue(120.0).to_hex(), hsl.rotate_hue(240.0).to_hex()]
}

/// The fixed 5-color suggestion set: complementary, both triadics, both
/// analogous, in that order.
pub fn combination_suggestions(hex: &str) -> [String; 5] {
    let hsl = base_hsl(hex);
    [
        hsl.rotate_hue(180.0).to_hex(),
        hsl.rotate_hue(120.0).to_hex(),
        hsl.rotate_hue(240.0).to_hex(),
        hsl.rotate_hue(30.0).to_hex(),
        hsl.rotate_hue(330.0).to_hex(),
    ]
}
