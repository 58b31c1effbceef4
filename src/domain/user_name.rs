//! src/domain/user_name.rs

/// An optional display name, stored trimmed. A missing or whitespace-only
/// name is stored as absent rather than as an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName(String);

impl UserName {
    /// Trims the input; returns `None` if nothing is left.
    pub fn parse(s: String) -> Option<UserName> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
