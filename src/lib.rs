//! Mosaic Avatar: deterministic group-avatar rendering for messaging UIs
//!
//! Ties the partition engine, the conversation color cache, and the render
//! contract together behind the two entry points render sites actually
//! call:
//!
//! - [`render_group_avatar`] for list rows, conversation headers, and any
//!   other place a partitioned avatar is drawn;
//! - [`sender_color`] for views that only need the color already decided
//!   for one participant (message-bubble sender names), with a flat-color
//!   fallback when the conversation has not been rendered yet.
//!
//! # Example
//!
//! ```rust
//! use mosaic_avatar::{
//!     render_group_avatar, sender_color, AvatarConfig, AvatarSize,
//!     ConversationColorCache, Participant, ThemeName,
//! };
//!
//! let config = AvatarConfig::default();
//! let cache = ConversationColorCache::new(config.cache_capacity);
//! let participants = vec![
//!     Participant::new("ann@example.com").with_display_name("Ann"),
//!     Participant::new("bob@example.com").with_display_name("Bob"),
//! ];
//!
//! let avatar = render_group_avatar(
//!     &participants,
//!     ThemeName::Light,
//!     AvatarSize::Md,
//!     Some("conv-1"),
//!     &cache,
//!     &config,
//! );
//! assert_eq!(avatar.cells.len(), 2);
//!
//! // A message bubble elsewhere reuses the decided color
//! let color = sender_color(&cache, "conv-1", "bob@example.com", "Bob", ThemeName::Light);
//! assert_eq!(color, avatar.cells[1].background);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use avatar_core::{
    flat_color, group_digest, label_digest, partition, AvatarConfig, Color, ColorStrategy,
    Participant, ResolvedAssignment, ThemeName, OVERFLOW_GLYPH,
};
pub use avatar_state::{ConversationColorCache, ConversationColors};
pub use avatar_ui::{AvatarComposition, AvatarSize, CellStyle};

/// Render a partitioned group avatar.
///
/// Computes the partition, records it in the conversation color cache when
/// a conversation id is supplied, and scales the result into a drawable
/// composition. Pure apart from the cache write, which every render site
/// performs with identical content for the same input.
pub fn render_group_avatar(
    participants: &[Participant],
    theme: ThemeName,
    size: AvatarSize,
    conversation_id: Option<&str>,
    cache: &ConversationColorCache,
    config: &AvatarConfig,
) -> AvatarComposition {
    let assignments = partition(participants, theme, config.strategy);
    if let Some(id) = conversation_id {
        cache.store(id, &assignments);
    }
    AvatarComposition::compose(&assignments, size, theme)
}

/// Color for one participant of a conversation.
///
/// Returns the cached color when the conversation has been rendered in this
/// process lifetime; otherwise falls back to the flat single-participant
/// color for the label, without computing a partition.
pub fn sender_color(
    cache: &ConversationColorCache,
    conversation_id: &str,
    identifier: &str,
    label: &str,
    theme: ThemeName,
) -> Color {
    cache
        .lookup(conversation_id, identifier)
        .unwrap_or_else(|| flat_color(label, theme))
}
