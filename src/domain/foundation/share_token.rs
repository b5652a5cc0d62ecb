//! Share token value object for public calculation lookup.

use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Length of every share token.
pub const SHARE_TOKEN_LEN: usize = 10;

/// Random, fixed-length token granting unauthenticated read access to a
/// frozen calculation record.
///
/// Tokens are generated here; uniqueness across records of one kind is
/// enforced by the store implementation, which must collision-check
/// before insert.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShareToken(String);

impl ShareToken {
    /// Generates a new random alphanumeric token.
    pub fn generate() -> Self {
        let token: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(SHARE_TOKEN_LEN)
            .map(char::from)
            .collect();
        Self(token)
    }

    /// Validates and wraps an externally supplied token string.
    pub fn try_new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.len() != SHARE_TOKEN_LEN {
            return Err(ValidationError::invalid_format(
                "share_token",
                format!("expected {} characters, got {}", SHARE_TOKEN_LEN, value.len()),
            ));
        }
        if !value.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ValidationError::invalid_format(
                "share_token",
                "expected only ASCII alphanumeric characters",
            ));
        }
        Ok(Self(value))
    }

    /// Returns the token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShareToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
