//! Shared render-site state for the avatar engine
//!
//! This crate holds the one piece of shared mutable state the engine has:
//! the conversation color cache. It is created once per application session
//! by the composition root and handed to whatever render sites need it;
//! nothing here is a global.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod color_cache;

pub use color_cache::{ConversationColorCache, ConversationColors};
