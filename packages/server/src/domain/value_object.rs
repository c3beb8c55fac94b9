//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use std::fmt;

/// Chat message value object.
///
/// Carries the text a user sent or the transformed reply. The text is never
/// modified in place; transformations build a new `Message`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Message(String);

impl Message {
    /// Create a new Message.
    ///
    /// Any text is accepted, including the empty string.
    pub fn new(text: String) -> Self {
        Self(text)
    }

    /// Get the inner text.
    pub fn text(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_text(self) -> String {
        self.0
    }

    /// Build a new message with the text upper-cased.
    pub fn to_uppercase(&self) -> Self {
        Self(self.0.to_uppercase())
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
