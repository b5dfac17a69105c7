// Rust guideline compliant 2026-02-06

//! Disambiguation of free-text queries into a single identifier.
//!
//! Resolution runs as a small state machine:
//!
//! - Start → Empty (no candidates)
//! - Start → ExactScan
//! - ExactScan → Unambiguous (exactly one exact match)
//! - ExactScan → ChoicePending (zero or several exact matches)
//! - ChoicePending → Unambiguous | Cancelled | InvalidSelection
//!
//! All functions here are pure. Displaying candidates and reading the
//! user's choice is left to the caller.

use crate::{Candidate, Error, Query, Result};

/// Outcome of resolving a query against a candidate list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome {
    /// The query resolved to exactly one identifier.
    Unambiguous(String),
    /// The user must choose among these candidates.
    Choice(Vec<Candidate>),
    /// The user cancelled the choice.
    Cancelled,
    /// The suggestion source returned no candidates.
    Empty,
}

/// Which candidates a pending choice was drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceScope {
    /// Every candidate, because nothing matched exactly or `exact_only` is set.
    AllCandidates,
    /// Only the candidates that matched the query exactly.
    ExactMatches,
}

/// Result of the exact-match scan, before any user input.
enum Scan {
    Empty,
    Unambiguous(String),
    Pending(Vec<Candidate>, ChoiceScope),
}

fn scan(query: &Query, candidates: &[Candidate]) -> Scan {
    if candidates.is_empty() {
        return Scan::Empty;
    }

    if query.exact_only {
        return Scan::Pending(candidates.to_vec(), ChoiceScope::AllCandidates);
    }

    let matches = exact_matches(query, candidates);
    match matches.as_slice() {
        [] => Scan::Pending(candidates.to_vec(), ChoiceScope::AllCandidates),
        [single] => Scan::Unambiguous(single.id.clone()),
        _ => Scan::Pending(
            matches.into_iter().cloned().collect(),
            ChoiceScope::ExactMatches,
        ),
    }
}

/// Collects the candidates that exactly match the query.
///
/// A candidate matches when its id starts with the prefix required by the
/// query's kind filter and its label equals the query text, ignoring case.
/// Input order is preserved. The `exact_only` flag is not consulted here.
///
/// # Arguments
///
/// * `query` - The lookup request
/// * `candidates` - Candidates in relevance order
///
/// # Returns
///
/// References to the matching candidates.
pub fn exact_matches<'a>(query: &Query, candidates: &'a [Candidate]) -> Vec<&'a Candidate> {
    let prefix = query.kind_filter.prefix();
    let text = query.text.to_lowercase();

    candidates
        .iter()
        .filter(|c| c.id.starts_with(prefix) && c.label.to_lowercase() == text)
        .collect()
}

/// Resolves a query against candidates without consulting the user.
///
/// # Arguments
///
/// * `query` - The lookup request
/// * `candidates` - Candidates in relevance order (may be empty)
///
/// # Returns
///
/// - `Empty` when there are no candidates
/// - `Unambiguous` when exactly one exact match exists
/// - `Choice` over the exact matches when there are several
/// - `Choice` over every candidate when there are none or `exact_only` is set
pub fn resolve(query: &Query, candidates: &[Candidate]) -> ResolutionOutcome {
    match scan(query, candidates) {
        Scan::Empty => ResolutionOutcome::Empty,
        Scan::Unambiguous(id) => ResolutionOutcome::Unambiguous(id),
        Scan::Pending(choices, _) => ResolutionOutcome::Choice(choices),
    }
}

/// Applies the user's zero-based index to a list of choices.
///
/// # Arguments
///
/// * `choices` - The candidates that were offered
/// * `index` - Index entered by the user; any negative value cancels
///
/// # Returns
///
/// `Unambiguous` with the chosen id, or `Cancelled`.
///
/// # Errors
///
/// Returns `Error::InvalidSelection` if the index is past the end of `choices`.
pub fn select(choices: &[Candidate], index: i64) -> Result<ResolutionOutcome> {
    if index < 0 {
        return Ok(ResolutionOutcome::Cancelled);
    }

    usize::try_from(index)
        .ok()
        .and_then(|i| choices.get(i))
        .map(|c| ResolutionOutcome::Unambiguous(c.id.clone()))
        .ok_or(Error::InvalidSelection {
            index,
            len: choices.len(),
        })
}

/// Resolves a query, asking `chooser` for an index only when a choice is pending.
///
/// # Arguments
///
/// * `query` - The lookup request
/// * `candidates` - Candidates in relevance order
/// * `chooser` - Called with the pending choices and where they came from;
///   returns the selected index
///
/// # Returns
///
/// A terminal outcome: `Unambiguous`, `Cancelled` or `Empty`. Never `Choice`.
///
/// # Errors
///
/// Returns an error if the chooser fails or the index is out of range.
pub fn resolve_with<F>(query: &Query, candidates: &[Candidate], chooser: F) -> Result<ResolutionOutcome>
where
    F: FnOnce(&[Candidate], ChoiceScope) -> Result<i64>,
{
    match scan(query, candidates) {
        Scan::Empty => Ok(ResolutionOutcome::Empty),
        Scan::Unambiguous(id) => Ok(ResolutionOutcome::Unambiguous(id)),
        Scan::Pending(choices, scope) => {
            let index = chooser(&choices, scope)?;
            select(&choices, index)
        }
    }
}
