//! Ready-to-draw avatar compositions
//!
//! Scales the engine's unit-square assignments into a target pixel size and
//! derives each cell's glyph: the uppercased first letter of the occupant's
//! label, or the overflow marker. The host framework only has to fill
//! rectangles, clip to the corner radius, and center the glyphs.

use serde::{Deserialize, Serialize};

use avatar_core::{ResolvedAssignment, ThemeName, OVERFLOW_GLYPH};

use crate::tokens::{corner_radius, AvatarSize};

/// One drawable cell in pixel coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellStyle {
    /// Left edge in pixels
    pub x: f32,
    /// Top edge in pixels
    pub y: f32,
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
    /// Fill color
    pub background: avatar_core::Color,
    /// Centered glyph: an initial, the overflow marker, or empty for a
    /// neutral cell
    pub glyph: String,
    /// Whether the glyph is the overflow marker
    pub is_overflow_marker: bool,
}

/// A complete avatar ready for the host renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarComposition {
    /// Edge length of the avatar square in pixels
    pub size: f32,
    /// Corner radius of the clipped avatar area
    pub corner_radius: f32,
    /// Drawable cells, in assignment order
    pub cells: Vec<CellStyle>,
}

impl AvatarComposition {
    /// Scale resolved assignments into a drawable composition
    pub fn compose(
        assignments: &[ResolvedAssignment],
        size: AvatarSize,
        theme: ThemeName,
    ) -> Self {
        let px = size.pixels() as f32;
        let cells = assignments
            .iter()
            .map(|assignment| {
                let rect = &assignment.slot.rect;
                let glyph = if assignment.is_overflow_marker {
                    OVERFLOW_GLYPH.to_string()
                } else {
                    assignment.participant.initial()
                };
                CellStyle {
                    x: rect.x * px,
                    y: rect.y * px,
                    width: rect.width * px,
                    height: rect.height * px,
                    background: assignment.color.clone(),
                    glyph,
                    is_overflow_marker: assignment.is_overflow_marker,
                }
            })
            .collect();

        Self {
            size: px,
            corner_radius: corner_radius(theme, px),
            cells,
        }
    }
}
