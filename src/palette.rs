//! Built-in palette registry.
//!
//! Any name that is not registered (conventionally [`RANDOM`]) selects hue
//! mode, where shapes cycle freely around the color wheel.

/// Sentinel palette name meaning "no palette, cycle hues".
pub const RANDOM: &str = "Random";

static PALETTES: &[(&str, &[&str])] = &[
    (
        "Aurora",
        &["#00c9a7", "#845ec2", "#2c73d2", "#c4fcef", "#008f7a"],
    ),
    (
        "Sunset",
        &["#ff6f61", "#ffb347", "#ffd166", "#ef476f", "#8e44ad"],
    ),
    ("Ocean", &["#03045e", "#0077b6", "#00b4d8", "#90e0ef", "#caf0f8"]),
    ("Forest", &["#2d6a4f", "#40916c", "#74c69d", "#b7e4c7", "#d8f3dc"]),
    ("Neon", &["#ff00ff", "#00ffff", "#39ff14", "#ffff00", "#ff3131"]),
    ("Pastel", &["#ffadad", "#ffd6a5", "#fdffb6", "#caffbf", "#bdb2ff"]),
    ("Ember", &["#370617", "#9d0208", "#dc2f02", "#f48c06", "#ffba08"]),
];

/// Colors registered under `name`, or `None` for hue mode.
pub fn lookup(name: &str) -> Option<&'static [&'static str]> {
    PALETTES
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, colors)| *colors)
}

/// Registered palette names, in registry order.
pub fn names() -> impl Iterator<Item = &'static str> {
    PALETTES.iter().map(|(name, _)| *name)
}
