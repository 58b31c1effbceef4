//! src/domain/user_email.rs

use crate::domain::ValidationError;

/// A normalized email address: trimmed, lower-cased and shaped like
/// `local@domain.tld`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserEmail(String);

impl UserEmail {
    /// Returns an instance of `UserEmail` if the input satisfies all
    /// our validation constraints on user emails.
    /// Surrounding whitespace is stripped and the address is lower-cased
    /// before storage, so `" A@B.com "` and `"a@b.com"` are the same email.
    pub fn parse(s: String) -> Result<UserEmail, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmailRequired);
        }
        if !has_valid_shape(trimmed) {
            return Err(ValidationError::InvalidEmail(s));
        }
        Ok(Self(trimmed.to_lowercase()))
    }
}

/// Checks the `local@domain.tld` shape: exactly one `@`, no whitespace,
/// non-empty local part, and a dot somewhere strictly inside the domain.
fn has_valid_shape(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + c.len_utf8() < domain.len())
}

impl AsRef<str> for UserEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
