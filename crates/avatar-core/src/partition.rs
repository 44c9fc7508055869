//! The partition operation
//!
//! Turns a participant list and a theme into the 1-4 cell assignments a
//! renderer draws. The operation is pure and total: any input, including an
//! empty participant list, yields a valid assignment list, and repeated
//! calls with the same set content (in any order) yield identical colors,
//! labels, and geometry.

use serde::{Deserialize, Serialize};

use crate::config::ColorStrategy;
use crate::digest::{group_digest, label_digest};
use crate::layout::{layout_for, LayoutSlot};
use crate::palette::{palette, Color, ThemeName};
use crate::participant::Participant;
use crate::zone::pair_colors;

/// Glyph shown in place of a participant initial when the group does not
/// fit in four cells
pub const OVERFLOW_GLYPH: &str = "*";

/// One rendered cell: who, what color, where
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedAssignment {
    /// The participant occupying this cell
    pub participant: Participant,
    /// Cell fill color
    pub color: Color,
    /// Cell geometry within the unit square
    pub slot: LayoutSlot,
    /// Whether this cell shows the overflow marker instead of an initial
    pub is_overflow_marker: bool,
}

/// Flat single-participant color: the theme palette indexed by the label
/// digest.
///
/// This is also the fallback used by callers when no partition has been
/// cached for a conversation yet (e.g. coloring a sender name in a message
/// list without forcing a full avatar computation).
pub fn flat_color(label: &str, theme: ThemeName) -> Color {
    let pal = palette(theme);
    pal[(label_digest(label) % pal.len() as u64) as usize].to_string()
}

/// Partition a participant set into colored cells.
///
/// Layout variant, zone choice, and overflow placement all derive from the
/// order-invariant group digest; per-cell colors derive from each
/// participant's own label digest (or the zone mechanism for pairs under
/// [`ColorStrategy::ZonedPair`]). Input order decides only which participant
/// lands in which cell, so callers wanting bit-identical output across call
/// sites must pass a stable order.
pub fn partition(
    participants: &[Participant],
    theme: ThemeName,
    strategy: ColorStrategy,
) -> Vec<ResolvedAssignment> {
    let digest = group_digest(participants);
    let slots = layout_for(participants.len(), digest);

    // An empty list renders as a single neutral cell with the digest-0 color.
    if participants.is_empty() {
        return vec![ResolvedAssignment {
            participant: Participant::new(""),
            color: flat_color("", theme),
            slot: slots[0],
            is_overflow_marker: false,
        }];
    }

    let visible = &participants[..participants.len().min(4)];
    let colors: Vec<Color> = match (visible.len(), strategy) {
        (2, ColorStrategy::ZonedPair) => {
            let (first, second) = pair_colors(&visible[0], &visible[1], digest, theme);
            vec![first, second]
        }
        _ => visible
            .iter()
            .map(|p| flat_color(p.label(), theme))
            .collect(),
    };

    let mut assignments: Vec<ResolvedAssignment> = visible
        .iter()
        .zip(slots)
        .zip(colors)
        .map(|((participant, slot), color)| ResolvedAssignment {
            participant: participant.clone(),
            color,
            slot,
            is_overflow_marker: false,
        })
        .collect();

    // Overflow reduction: one deterministic cell trades its initial for the
    // marker glyph, keeping the color it already resolved to. Hidden
    // participants beyond the fourth are not enumerated here.
    if participants.len() > 4 {
        let overflow_slot = (digest % 4) as usize;
        assignments[overflow_slot].is_overflow_marker = true;
    }

    tracing::trace!(
        count = participants.len(),
        theme = %theme,
        group_digest = digest,
        cells = assignments.len(),
        "partitioned group avatar"
    );

    assignments
}
