//! Identifier types used across the Agora client stack
//!
//! Principals are the stable account identifiers the backend services use;
//! posts and badges carry their own ids. All identifiers are validated at the
//! parse boundary and opaque afterwards.

use crate::errors::AgoraError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable account identifier assigned by the backend services
///
/// Textual and opaque: the client never derives meaning from its contents,
/// only forwards it on calls that need an owner. Validated once at the parse
/// boundary (non-empty, lowercase alphanumeric segments joined by `-`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Principal(String);

impl Principal {
    /// Parse a principal from its textual form.
    pub fn from_text(text: impl Into<String>) -> Result<Self, AgoraError> {
        let text = text.into();
        if text.is_empty() {
            return Err(AgoraError::invalid("principal must not be empty"));
        }
        let valid = text
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if !valid || text.starts_with('-') || text.ends_with('-') {
            return Err(AgoraError::invalid(format!(
                "principal has invalid form: {text}"
            )));
        }
        Ok(Self(text))
    }

    /// The textual form of this principal.
    pub fn as_text(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Principal {
    type Err = AgoraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s)
    }
}

/// Post identifier assigned by the profile service
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct PostId(pub u64);

impl PostId {
    /// Get the raw id value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "post-{}", self.0)
    }
}

impl From<u64> for PostId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// NFT badge identifier assigned by the registry
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BadgeId(pub String);

impl BadgeId {
    /// Create a badge id from its textual form
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The textual form of this badge id
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BadgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn principal_accepts_canonical_text() {
        let p = Principal::from_text("w7x7r-cok77-xa").unwrap();
        assert_eq!(p.as_text(), "w7x7r-cok77-xa");
        assert_eq!(p.to_string(), "w7x7r-cok77-xa");
    }

    #[test]
    fn principal_rejects_bad_forms() {
        assert!(Principal::from_text("").is_err());
        assert!(Principal::from_text("UPPER").is_err());
        assert!(Principal::from_text("-leading").is_err());
        assert!(Principal::from_text("trailing-").is_err());
        assert!(Principal::from_text("with space").is_err());
    }

    #[test]
    fn principal_round_trips_through_fromstr() {
        let p: Principal = "abc-123".parse().unwrap();
        assert_eq!(p, Principal::from_text("abc-123").unwrap());
    }
}
