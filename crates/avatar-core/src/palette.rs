//! Theme names and per-theme color palettes
//!
//! Exactly two palettes exist: an 8-entry light palette and a 12-entry dark
//! palette. Both are immutable constants; the active theme is supplied by
//! the caller's theme subsystem, never derived or persisted here.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A color represented as an RGB hex string (e.g., "#4EA9DC")
pub type Color = String;

/// Error returned when parsing an unknown theme name
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown theme: {0}")]
pub struct UnknownTheme(pub String);

/// Theme name enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl ThemeName {
    /// Get the color scheme name
    pub fn color_scheme(&self) -> &'static str {
        match self {
            ThemeName::Light => "light",
            ThemeName::Dark => "dark",
        }
    }

    /// Check if this is the dark theme
    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeName::Dark)
    }
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeName::Light => write!(f, "Light"),
            ThemeName::Dark => write!(f, "Dark"),
        }
    }
}

impl std::str::FromStr for ThemeName {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeName::Light),
            "dark" => Ok(ThemeName::Dark),
            _ => Err(UnknownTheme(s.to_string())),
        }
    }
}

/// Light-theme avatar palette: mid-tone hues that hold up on white
pub const LIGHT_PALETTE: [&str; 8] = [
    "#4EA9DC", // sky blue
    "#DC695A", // coral
    "#65BA82", // sage
    "#A584D9", // lavender
    "#D4A03C", // amber
    "#42BDBD", // teal
    "#D578A5", // rose
    "#91BA41", // lime
];

/// Dark-theme avatar palette: lifted pastels that hold up on near-black
pub const DARK_PALETTE: [&str; 12] = [
    "#7FB5E8", // light blue
    "#E89B8F", // salmon
    "#8FD4A8", // mint
    "#C4A8E8", // lilac
    "#E8C878", // gold
    "#7FD4D4", // aqua
    "#E8A8C8", // pink
    "#B8D478", // pear
    "#9FA8E8", // periwinkle
    "#E8B88F", // peach
    "#8FC8B8", // seafoam
    "#D4A8C4", // mauve
];

/// Get the avatar palette for a theme
pub fn palette(theme: ThemeName) -> &'static [&'static str] {
    match theme {
        ThemeName::Light => &LIGHT_PALETTE,
        ThemeName::Dark => &DARK_PALETTE,
    }
}

/// Parse a hex color string to RGB components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() < 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Convert RGB to hex string
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}
