//! Channel-name vocabulary and classification
//!
//! Aesthetic channels fall into two positional families (anchored on `x`
//! and `y`) plus the non-positional channels shown in legends. Channel
//! names are not a closed set, since a mapping may bind arbitrary names,
//! but only the names listed here participate in scale lookup, label
//! derivation and position classification.

/// The x-position family
pub const X_AESTHETICS: &[&str] = &["x", "xmin", "xmax", "xend", "xintercept"];

/// The y-position family
pub const Y_AESTHETICS: &[&str] = &["y", "ymin", "ymax", "yend", "yintercept"];

/// Both positional families
pub const POSITION_AESTHETICS: &[&str] = &[
    "x",
    "xmin",
    "xmax",
    "xend",
    "xintercept",
    "y",
    "ymin",
    "ymax",
    "yend",
    "yintercept",
];

/// Known aesthetic channel vocabulary (canonical spellings only)
pub const ALL_AESTHETICS: &[&str] = &[
    "alpha",
    "angle",
    "color",
    "fill",
    "group",
    "intercept",
    "label",
    "lineheight",
    "linetype",
    "lower",
    "middle",
    "radius",
    "sample",
    "shape",
    "size",
    "slope",
    "stroke",
    "upper",
    "weight",
    "x",
    "xmin",
    "xmax",
    "xend",
    "xintercept",
    "y",
    "ymin",
    "ymax",
    "yend",
    "yintercept",
];

/// Channels that participate in scale lookup and label derivation
pub const SCALED_AESTHETICS: &[&str] = &[
    "x",
    "y",
    "alpha",
    "color",
    "fill",
    "linetype",
    "shape",
    "size",
    "stroke",
];

/// Canonicalize the legacy `colour` spelling in a channel name
pub fn rename_aesthetic(name: &str) -> String {
    name.replace("colour", "color")
}

/// Canonicalize the legacy spelling in a list of channel names
pub fn rename_aesthetics(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| rename_aesthetic(name)).collect()
}

/// Look up the scale family root for an aesthetic channel
///
/// Any member of a positional family resolves to the family root (`x` or
/// `y`); every other channel is its own scale.
pub fn aes_to_scale(name: &str) -> &str {
    if X_AESTHETICS.contains(&name) {
        "x"
    } else if Y_AESTHETICS.contains(&name) {
        "y"
    } else {
        name
    }
}

/// Check if every channel name belongs to a positional family
pub fn is_position_aes(names: &[&str]) -> bool {
    names
        .iter()
        .all(|name| matches!(aes_to_scale(name), "x" | "y"))
}
