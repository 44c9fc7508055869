//! Conversation color cache
//!
//! Records the participant-to-color mapping resolved by the most recent
//! partition of each conversation, so other UI elements (sender names in a
//! message list, mention chips) can reuse the decided color without
//! recomputing the partition or risking a different outcome from a
//! different input ordering.
//!
//! The partition operation is pure, so every writer for a given
//! conversation produces bit-identical content and last-writer-wins is
//! correct without coordination; the lock below only protects the container
//! itself on multi-threaded hosts. Entries are cheap and idempotently
//! regenerable, so the cache is LRU-bounded rather than explicitly
//! invalidated.

use std::num::NonZeroUsize;

use lru::LruCache;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use avatar_core::{Color, ResolvedAssignment};

/// Colors most recently resolved for one conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationColors {
    /// Colors actually used, in cell order
    pub resolved_palette: Vec<Color>,
    /// Participant identifiers in the order consulted
    pub participant_order: Vec<String>,
}

impl ConversationColors {
    fn from_assignments(assignments: &[ResolvedAssignment]) -> Self {
        Self {
            resolved_palette: assignments.iter().map(|a| a.color.clone()).collect(),
            participant_order: assignments
                .iter()
                .map(|a| a.participant.identifier.clone())
                .collect(),
        }
    }

    /// Color recorded for an identifier, if it occupies a cell
    pub fn color_for(&self, identifier: &str) -> Option<Color> {
        self.participant_order
            .iter()
            .position(|id| id == identifier)
            .map(|index| self.resolved_palette[index].clone())
    }
}

/// Process-lifetime store of resolved conversation colors.
///
/// Constructed once per session and injected into the render sites that
/// need it. Lookups that miss return `None`; callers fall back to
/// `avatar_core::flat_color` rather than blocking on a partition.
#[derive(Debug)]
pub struct ConversationColorCache {
    entries: Mutex<LruCache<String, ConversationColors>>,
}

impl ConversationColorCache {
    /// Create a cache bounded to `capacity` conversations
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Record the assignments of a completed partition, unconditionally
    /// overwriting any prior entry for the conversation
    pub fn store(&self, conversation_id: &str, assignments: &[ResolvedAssignment]) {
        let entry = ConversationColors::from_assignments(assignments);
        tracing::trace!(
            conversation_id,
            cells = entry.resolved_palette.len(),
            "cached conversation colors"
        );
        self.entries
            .lock()
            .put(conversation_id.to_string(), entry);
    }

    /// Color decided for a participant in a conversation, if that
    /// conversation has been rendered in this process lifetime
    pub fn lookup(&self, conversation_id: &str, identifier: &str) -> Option<Color> {
        let mut entries = self.entries.lock();
        // `get` bumps recency, keeping hot conversations resident
        entries
            .get(conversation_id)
            .and_then(|entry| entry.color_for(identifier))
    }

    /// Full entry for a conversation, if cached
    pub fn entry(&self, conversation_id: &str) -> Option<ConversationColors> {
        self.entries.lock().get(conversation_id).cloned()
    }

    /// Number of conversations currently cached
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}
