//! Conversation participant identity
//!
//! Participants are supplied by the application layer (contact list, message
//! sync) and carry only what the engine needs: a stable identifier and an
//! optional display name. Everything else about a contact is out of scope.

use serde::{Deserialize, Serialize};

/// A conversation participant as seen by the avatar engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    /// Stable identifier, e.g. an email address
    pub identifier: String,
    /// Display name from the address book, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl Participant {
    /// Create a participant from an identifier
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            display_name: None,
        }
    }

    /// Set the display name
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// The label used for hashing and initials: the display name when present
    /// and non-empty, otherwise the identifier.
    pub fn label(&self) -> &str {
        match &self.display_name {
            Some(name) if !name.is_empty() => name,
            _ => &self.identifier,
        }
    }

    /// Uppercased first character of the label, empty if the label is empty
    pub fn initial(&self) -> String {
        self.label()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}
