// Rust guideline compliant 2026-02-06

//! Identifier recognition for titles and people.
//!
//! Title identifiers start with `tt`, person identifiers with `nm`, each
//! followed by digits (for example `tt0816692` or `nm0000138`).

use crate::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

static IDENTIFIER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(tt|nm)\d+$").unwrap_or_else(|e| panic!("invalid identifier pattern: {e}"))
});

/// Kind of record an identifier points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    /// A film, series or episode (`tt` prefix).
    Title,
    /// A person (`nm` prefix).
    Person,
}

impl IdKind {
    /// Classifies an identifier by its prefix.
    ///
    /// # Returns
    ///
    /// `None` when the identifier has neither a `tt` nor an `nm` prefix.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        if id.starts_with("tt") {
            Some(IdKind::Title)
        } else if id.starts_with("nm") {
            Some(IdKind::Person)
        } else {
            None
        }
    }

    /// Classifies an identifier, failing for unsupported prefixes.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidIdentifier` if the prefix is not `tt` or `nm`.
    pub fn require(id: &str) -> Result<Self> {
        Self::from_id(id).ok_or_else(|| Error::InvalidIdentifier(id.to_string()))
    }
}

/// Returns whether the text is a literal identifier.
///
/// Literal identifiers bypass name resolution entirely.
#[must_use]
pub fn is_identifier(text: &str) -> bool {
    IDENTIFIER_PATTERN.is_match(text)
}
