//! Render contract for partitioned group avatars
//!
//! This crate is the boundary between the engine and whatever UI framework
//! hosts it: pure data in (resolved assignments, a size, a theme), pure
//! data out (pixel rectangles, fill colors, glyphs, rounding). No drawing
//! happens here.
//!
//! # Modules
//!
//! - [`tokens`] - Avatar size presets and rounding constants
//! - [`composition`] - Scaled, ready-to-draw cell styles

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod composition;
pub mod tokens;

pub use composition::{AvatarComposition, CellStyle};
pub use tokens::{corner_radius, AvatarSize, LIGHT_CORNER_RATIO};
