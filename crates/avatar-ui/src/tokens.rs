//! Avatar sizing and rounding tokens

use serde::{Deserialize, Serialize};

use avatar_core::ThemeName;

/// Rounded-square corner ratio used by the light theme
pub const LIGHT_CORNER_RATIO: f32 = 0.2;

/// Avatar size presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AvatarSize {
    /// Extra small (20px)
    Xs,
    /// Small (24px)
    Sm,
    /// Medium (32px) - default
    #[default]
    Md,
    /// Large (48px)
    Lg,
    /// Extra large (64px)
    Xl,
    /// Custom size
    Custom(u32),
}

impl AvatarSize {
    /// Get pixel size
    pub fn pixels(&self) -> u32 {
        match self {
            AvatarSize::Xs => 20,
            AvatarSize::Sm => 24,
            AvatarSize::Md => 32,
            AvatarSize::Lg => 48,
            AvatarSize::Xl => 64,
            AvatarSize::Custom(size) => *size,
        }
    }
}

/// Corner radius of the avatar area for a theme: fully circular in dark,
/// moderately rounded-square in light
pub fn corner_radius(theme: ThemeName, size_px: f32) -> f32 {
    match theme {
        ThemeName::Dark => size_px / 2.0,
        ThemeName::Light => size_px * LIGHT_CORNER_RATIO,
    }
}
