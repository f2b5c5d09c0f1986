//! Static style-guide palette data: brand color groups with a base hue and
//! ten tint/shade steps each.
//!
//! The library treats this purely as display data for the palette viewer;
//! no validation is performed on the hex strings here.

/// One tint/shade step, keyed 50–900 in the usual design-token scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shade {
    pub key: u16,
    pub hex: &'static str,
}

/// A named brand color with its base hex, shade ramp, and usage guidance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSet {
    pub name: &'static str,
    pub base: &'static str,
    pub shades: [Shade; 10],
    pub usage: &'static str,
}

/// A titled group of color sets (primary, secondary, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorCategory {
    pub title: &'static str,
    pub colors: &'static [ColorSet],
}

impl ColorSet {
    /// Hex value for a shade key (50, 100, ..., 900), if present.
    pub fn shade(&self, key: u16) -> Option<&'static str> {
        self.shades.iter().find(|s| s.key == key).map(|s| s.hex)
    }
}

const fn ramp(hexes: [&'static str; 10]) -> [Shade; 10] {
    const KEYS: [u16; 10] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];
    let mut shades = [Shade { key: 0, hex: "" }; 10];
    let mut i = 0;
    while i < 10 {
        shades[i] = Shade {
            key: KEYS[i],
            hex: hexes[i],
        };
        i += 1;
    }
    shades
}

const ROYAL_PURPLE: ColorSet = ColorSet {
    name: "Royal Purple",
    base: "#460E2F",
    shades: ramp([
        "#FCF5F8", "#F5D9E5", "#E8B3CC", "#D98DB3", "#A03D6B", "#460E2F", "#3D0C28", "#340A22",
        "#2B081C", "#220615",
    ]),
    usage: "Primary brand color, headers, icons",
};

const SUNSET_ORANGE: ColorSet = ColorSet {
    name: "Sunset Orange",
    base: "#F68B29",
    shades: ramp([
        "#FEF6EC", "#FDE7CC", "#FBCE99", "#F9B566", "#F7A143", "#F68B29", "#E17311", "#BC600E",
        "#964D0B", "#713A09",
    ]),
    usage: "Call-to-action buttons, highlights",
};

const FOREST_GREEN: ColorSet = ColorSet {
    name: "Forest Green",
    base: "#2A5A3B",
    shades: ramp([
        "#F5F9F6", "#DCE8DF", "#B9D1C0", "#96BAA1", "#73A382", "#2A5A3B", "#244D32", "#1E4029",
        "#183320", "#122617",
    ]),
    usage: "Nature elements, sustainability themes",
};

const OCEAN_BLUE: ColorSet = ColorSet {
    name: "Ocean Blue",
    base: "#1B4B7A",
    shades: ramp([
        "#F4F7FB", "#D5E2F0", "#ABC5E1", "#81A8D2", "#578BC3", "#1B4B7A", "#174068", "#133556",
        "#0F2A44", "#0B1F32",
    ]),
    usage: "Trust, stability, water elements",
};

const SLATE: ColorSet = ColorSet {
    name: "Slate",
    base: "#212120",
    shades: ramp([
        "#F5F5F5", "#E6E6E6", "#CCCCCC", "#B3B3B3", "#999999", "#212120", "#1C1C1B", "#171716",
        "#121211", "#0D0D0C",
    ]),
    usage: "Primary text, deep backgrounds",
};

const MIST: ColorSet = ColorSet {
    name: "Mist",
    base: "#D2DDDE",
    shades: ramp([
        "#FCFDFD", "#F5F8F8", "#EBF1F1", "#E1E9EA", "#D7E1E2", "#D2DDDE", "#A7B9BB", "#7D9598",
        "#537074", "#294C51",
    ]),
    usage: "Borders, dividers, subtle backgrounds",
};

const RUBY_RED: ColorSet = ColorSet {
    name: "Ruby Red",
    base: "#9A1B22",
    shades: ramp([
        "#FEF4F5", "#FBD7D9", "#F7AFB3", "#F3878D", "#EF5F67", "#9A1B22", "#83171D", "#6C1318",
        "#550F13", "#3E0B0E",
    ]),
    usage: "Error messages, validation, alerts",
};

const SUCCESS_GREEN: ColorSet = ColorSet {
    name: "Success Green",
    base: "#2D7A3F",
    shades: ramp([
        "#F5FAF6", "#DCF0E0", "#B9E1C1", "#96D2A2", "#73C383", "#2D7A3F", "#266835", "#1F562B",
        "#184421", "#113217",
    ]),
    usage: "Success messages, confirmations",
};

static DEFAULT_PALETTE: [ColorCategory; 5] = [
    ColorCategory {
        title: "Primary Colors",
        colors: &[ROYAL_PURPLE],
    },
    ColorCategory {
        title: "Secondary Colors",
        colors: &[SUNSET_ORANGE],
    },
    ColorCategory {
        title: "Accent Colors",
        colors: &[FOREST_GREEN, OCEAN_BLUE],
    },
    ColorCategory {
        title: "Neutral Colors",
        colors: &[SLATE, MIST],
    },
    ColorCategory {
        title: "Feedback Colors",
        colors: &[RUBY_RED, SUCCESS_GREEN],
    },
];

/// The palette the style-guide viewer ships with.
pub fn default_palette() -> &'static [ColorCategory] {
    &DEFAULT_PALETTE
}
