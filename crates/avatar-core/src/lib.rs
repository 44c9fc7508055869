//! Group-avatar partitioning and deterministic color assignment
//!
//! This crate computes the visual partition of a group avatar: how many
//! colored cells to draw, which participant occupies which cell, and which
//! color each participant receives. Given the same participant set (in any
//! order) and the same theme, every render site in the application arrives
//! at the same result, with no persisted state and no network round-trip.
//!
//! # Modules
//!
//! - [`participant`] - Participant identity supplied by the application layer
//! - [`digest`] - Deterministic label and group digests
//! - [`palette`] - Theme names and per-theme color palettes
//! - [`zone`] - Curated palette zones for two-participant avatars
//! - [`layout`] - Fixed geometric partitions of the avatar square
//! - [`partition`] - The partition operation and flat single-color fallback
//! - [`config`] - Color strategy selection and engine configuration
//!
//! # Example
//!
//! ```rust
//! use avatar_core::{partition, ColorStrategy, Participant, ThemeName};
//!
//! let participants = vec![
//!     Participant::new("ann@example.com").with_display_name("Ann"),
//!     Participant::new("bob@example.com").with_display_name("Bob"),
//! ];
//! let cells = partition(&participants, ThemeName::Light, ColorStrategy::ZonedPair);
//! assert_eq!(cells.len(), 2);
//! assert_ne!(cells[0].color, cells[1].color);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod digest;
pub mod layout;
pub mod palette;
pub mod participant;
pub mod partition;
pub mod zone;

pub use config::{AvatarConfig, ColorStrategy, UnknownStrategy};
pub use digest::{group_digest, label_digest};
pub use layout::{layout_for, LayoutSlot, Rect, SplitOrientation, WideEdge, CELL_GAP};
pub use palette::{
    palette, parse_hex_color, rgb_to_hex, Color, ThemeName, UnknownTheme, DARK_PALETTE,
    LIGHT_PALETTE,
};
pub use participant::Participant;
pub use partition::{flat_color, partition, ResolvedAssignment, OVERFLOW_GLYPH};
pub use zone::{pair_colors, zones};
