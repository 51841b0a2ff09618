//! Display colors for lifecycle stages

use std::collections::BTreeMap;

/// Neutral fallback for statuses without a configured color.
pub const DEFAULT_COLOR: &str = "#888888";

/// Default hex color per canonical stage.
pub const STATUS_COLORS: &[(&str, &str)] = &[
    ("Start", "#45475a"),
    ("Applied", "#89b4fa"),
    ("Online Assessment", "#fab387"),
    ("Technical Screen", "#a6e3a1"),
    ("Final Round", "#f9e2af"),
    ("Offer", "#cba6f7"),
    ("Offer Accepted", "#94e2d5"),
    ("Offer Declined", "#eba0ac"),
    ("Rejected", "#f38ba8"),
    ("Withdrew", "#6c7086"),
];

/// The default palette as an owned map, for use as a config default.
pub fn default_colors() -> BTreeMap<String, String> {
    STATUS_COLORS
        .iter()
        .map(|(status, color)| (status.to_string(), color.to_string()))
        .collect()
}

/// Read-only status-to-color mapping with a neutral default.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPalette {
    colors: BTreeMap<String, String>,
}

impl ColorPalette {
    /// Build a palette from a configured color map.
    pub fn new(colors: BTreeMap<String, String>) -> Self {
        ColorPalette { colors }
    }

    /// Look up the color for a status, falling back to the neutral default.
    pub fn color_for(&self, status: &str) -> &str {
        self.colors
            .get(status)
            .map(String::as_str)
            .unwrap_or(DEFAULT_COLOR)
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        ColorPalette {
            colors: default_colors(),
        }
    }
}
