// Rust guideline compliant 2026-02-09

//! Collaborator traits for the remote sources.

use crate::error::Result;
use filmcheck_core::{Candidate, DetailRecord, IdKind, PersonDetail, TitleDetail};

/// Returns ranked candidates for a free-text query.
pub trait SuggestionSource {
    /// Fetches candidates for `text`, most relevant first.
    ///
    /// # Errors
    ///
    /// Returns `SourceUnavailable` for non-success responses and `NoData`
    /// when the payload carries no candidate list.
    fn suggest(&self, text: &str) -> Result<Vec<Candidate>>;
}

/// Returns detail records by identifier.
pub trait DetailSource {
    /// Fetches a title record by `tt` identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the record is missing.
    fn title(&self, id: &str) -> Result<TitleDetail>;

    /// Fetches a person record by `nm` identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the record is missing.
    fn person(&self, id: &str) -> Result<PersonDetail>;

    /// Fetches the record matching the identifier's prefix.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdentifier` for ids without a `tt` or `nm` prefix,
    /// or any error from the underlying fetch.
    fn fetch_detail(&self, id: &str) -> Result<DetailRecord> {
        match IdKind::require(id)? {
            IdKind::Title => Ok(DetailRecord::Title(self.title(id)?)),
            IdKind::Person => Ok(DetailRecord::Person(self.person(id)?)),
        }
    }
}
