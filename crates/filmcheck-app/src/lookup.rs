// Rust guideline compliant 2026-02-09

//! Lookup workflow: free text or identifier in, detail record out.
//!
//! The workflow owns the order of calls (suggestion fetch, resolution,
//! user choice, detail fetch). Display and prompting are delegated to an
//! [`Interaction`] so the workflow runs without a terminal in tests.

use crate::error::{AppError, Result};
use crate::sources::{DetailSource, SuggestionSource};
use filmcheck_core::{
    is_identifier, resolve_with, Candidate, ChoiceScope, DetailRecord, KindFilter, Query,
    ResolutionOutcome,
};
use tracing::debug;

/// Input of a lookup run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    /// Name or identifier, words joined by single spaces.
    pub text: String,
    /// Skip the exact match scan and always offer every candidate.
    pub exact_only: bool,
    /// Identifier prefix constraint for exact matches.
    pub kind_filter: KindFilter,
}

impl LookupRequest {
    /// Builds a request from command-line words.
    #[must_use]
    pub fn from_words(words: &[String], exact_only: bool, kind_filter: KindFilter) -> Self {
        Self {
            text: words.join(" "),
            exact_only,
            kind_filter,
        }
    }
}

/// Terminal result of a lookup run.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupResult {
    /// The query resolved and the record was fetched.
    Found(DetailRecord),
    /// The user cancelled the choice.
    Cancelled,
    /// The suggestion source returned no candidates.
    Empty,
}

/// Progress notices emitted during a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice<'a> {
    /// Lookup started for this text.
    Searching(&'a str),
    /// The text is a literal identifier; resolution is skipped.
    SearchingById(&'a str),
    /// Exactly one candidate matched the text.
    ExactMatch(&'a Candidate),
    /// Several candidates matched the text; only those are offered.
    MultipleExactMatches(&'a [Candidate]),
    /// The identifier whose details will be fetched.
    Selected(&'a str),
}

/// Display and prompt collaborator of the lookup workflow.
pub trait Interaction {
    /// Reports progress.
    fn notify(&mut self, notice: Notice<'_>);

    /// Shows the full candidate list returned by the suggestion source.
    fn show_candidates(&mut self, candidates: &[Candidate]);

    /// Asks for a zero-based index into `choices`; negative cancels.
    ///
    /// # Errors
    ///
    /// Returns an error if input cannot be read.
    fn choose(&mut self, choices: &[Candidate]) -> filmcheck_core::Result<i64>;
}

/// Runs one lookup.
///
/// # Arguments
///
/// * `request` - Text and resolution flags
/// * `suggestions` - Source of candidates for free text
/// * `details` - Source of detail records
/// * `interaction` - Display and prompt collaborator
///
/// # Returns
///
/// The fetched record, or `Cancelled` / `Empty`.
///
/// # Errors
///
/// Returns an error if:
/// - The text is blank
/// - A source fails
/// - The user picks an index out of range
/// - The resolved identifier has an unsupported prefix
pub fn lookup<S, D, I>(
    request: &LookupRequest,
    suggestions: &S,
    details: &D,
    interaction: &mut I,
) -> Result<LookupResult>
where
    S: SuggestionSource + ?Sized,
    D: DetailSource + ?Sized,
    I: Interaction + ?Sized,
{
    let text = request.text.trim();
    if text.is_empty() {
        return Err(AppError::InvalidInput("Name is empty".to_string()));
    }
    interaction.notify(Notice::Searching(text));

    if is_identifier(text) {
        interaction.notify(Notice::SearchingById(text));
        return Ok(LookupResult::Found(details.fetch_detail(text)?));
    }

    let candidates = suggestions.suggest(text)?;
    if !candidates.is_empty() {
        interaction.show_candidates(&candidates);
    }

    let query = Query {
        text: text.to_string(),
        exact_only: request.exact_only,
        kind_filter: request.kind_filter,
    };

    let mut prompted = false;
    let outcome = resolve_with(&query, &candidates, |choices, scope| {
        prompted = true;
        if scope == ChoiceScope::ExactMatches {
            interaction.notify(Notice::MultipleExactMatches(choices));
        }
        interaction.choose(choices)
    })?;
    debug!(?outcome, prompted, "resolution");

    let id = match outcome {
        ResolutionOutcome::Empty => return Ok(LookupResult::Empty),
        ResolutionOutcome::Unambiguous(id) => id,
        // resolve_with never leaves a choice pending.
        ResolutionOutcome::Cancelled | ResolutionOutcome::Choice(_) => {
            return Ok(LookupResult::Cancelled)
        }
    };

    if !prompted {
        if let Some(candidate) = candidates.iter().find(|c| c.id == id) {
            interaction.notify(Notice::ExactMatch(candidate));
        }
    }

    interaction.notify(Notice::Selected(&id));
    Ok(LookupResult::Found(details.fetch_detail(&id)?))
}
