//! # swatchbook
//!
//! Color conversion, WCAG contrast, and harmony generation for design
//! style guides.
//!
//! The crate is the pure-math core behind a palette reference viewer:
//! hex ↔ RGB ↔ HSL conversion, relative luminance and contrast ratio, and
//! color-wheel harmonies (complementary, analogous, triadic). It also
//! carries the viewer's static palette data, an injected async
//! color-naming capability, and a clipboard helper for copying hex codes.
//!
//! ## Usage
//!
//! ```rust
//! use swatchbook::{complementary, contrast_ratio, passes_aa, Rgb};
//!
//! let purple = Rgb::from_hex("#460E2F").unwrap();
//! assert_eq!(purple.to_hex(), "#460e2f");
//! assert!(passes_aa(contrast_ratio("#460E2F", "#FFFFFF")));
//! assert_eq!(complementary("#ff0000"), "#00ffff");
//! ```
//!
//! Malformed color strings never panic or error out of the library: parsing
//! returns `None`, contrast returns a `0.0` sentinel, and harmonies fall
//! back to black-derived output.

#[cfg(feature = "clipboard")]
mod clipboard;
mod color;
mod contrast;
mod harmony;
mod math;
mod naming;
mod palette;

#[cfg(feature = "clipboard")]
pub use clipboard::copy_hex;
pub use color::{Hsl, Rgb};
pub use contrast::{contrast_ratio, luminance, passes_aa, AA_NORMAL_TEXT};
pub use harmony::{analogous, combination_suggestions, complementary, triadic, Harmony};
#[cfg(feature = "naming-http")]
pub use naming::ColorPizzaNamer;
pub use naming::{ColorNamer, UnknownNamer, UNKNOWN_NAME};
pub use palette::{default_palette, ColorCategory, ColorSet, Shade};
