//! src/domain/user_id.rs

use crate::domain::ValidationError;

/// A caller-supplied user id, trimmed. Whether the id actually exists is a
/// lookup concern; this type only guards against blank input.
#[derive(Debug, Clone)]
pub struct UserId(String);

impl UserId {
    pub fn parse(s: String) -> Result<UserId, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::UserIdRequired);
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
