//! Deterministic identity digests
//!
//! The digest is a plain code-point checksum, not a cryptographic hash. It
//! only has to be stable across processes and spread labels evenly enough
//! over a palette of 8 or 12 entries. Anagrams collide; that is accepted for
//! visual variety and must not be "fixed" silently, since changing the digest
//! re-colors every existing conversation.

use crate::participant::Participant;

/// Digest of a single label: the sum of its character code points.
///
/// No modulus is applied here; callers reduce by palette length or variant
/// count at the point of use. The empty string digests to 0.
pub fn label_digest(label: &str) -> u64 {
    label
        .chars()
        .fold(0u64, |acc, c| acc.wrapping_add(u64::from(u32::from(c))))
}

/// Digest of an entire participant set.
///
/// Sums [`label_digest`] over every participant's resolved label, so the
/// result is invariant to participant ordering.
pub fn group_digest(participants: &[Participant]) -> u64 {
    participants
        .iter()
        .fold(0u64, |acc, p| acc.wrapping_add(label_digest(p.label())))
}
