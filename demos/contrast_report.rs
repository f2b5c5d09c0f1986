//! Standalone demo: prints contrast and harmony info for the default palette.

use swatchbook::{combination_suggestions, contrast_ratio, default_palette, passes_aa};

fn main() {
    for category in default_palette() {
        println!("{}", category.title);
        for set in category.colors {
            let on_white = contrast_ratio(set.base, "#FFFFFF");
            let on_black = contrast_ratio(set.base, "#000000");
            println!(
                "  {:<14} {}  vs white {:>5} ({})  vs black {:>5} ({})",
                set.name,
                set.base,
                on_white,
                if passes_aa(on_white) { "AA" } else { "--" },
                on_black,
                if passes_aa(on_black) { "AA" } else { "--" },
            );
            println!("    suggestions: {}", combination_suggestions(set.base).join(", "));
        }
        println!();
    }
}
