// Rust guideline compliant 2026-02-09

//! Implementation of the lookup command.
//!
//! Resolves a name or identifier to a title or person and prints its
//! details, asking the user to pick a candidate when the name is ambiguous.

use crate::prompt::read_index;
use crate::terminal::{print_info, print_success};
use crate::OutputFormatter;
use anyhow::Result;
use filmcheck_app::{
    lookup, DetailSource, Interaction, LookupRequest, LookupResult, Notice, SuggestionSource,
};
use filmcheck_core::Candidate;
use std::io::{self, BufRead, Write};

/// Terminal-backed [`Interaction`].
///
/// The full candidate list goes to stdout. Status lines go to stderr. The
/// narrowed exact-match table and the prompt go to `output`, so stdout only
/// ever carries the candidate list and the final result.
pub struct TerminalInteraction<'a, R, W> {
    formatter: &'a dyn OutputFormatter,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> TerminalInteraction<'a, R, W> {
    /// Creates an interaction reading answers from `input` and writing
    /// prompts to `output`.
    pub fn new(formatter: &'a dyn OutputFormatter, input: R, output: W) -> Self {
        Self {
            formatter,
            input,
            output,
        }
    }
}

impl<R: BufRead, W: Write> Interaction for TerminalInteraction<'_, R, W> {
    fn notify(&mut self, notice: Notice<'_>) {
        match notice {
            Notice::Searching(text) => print_info(&format!("Searching for: {}", text)),
            Notice::SearchingById(id) => print_info(&format!("Searching by id: {}", id)),
            Notice::ExactMatch(candidate) => {
                print_success(&format!(
                    "Found exact match: {} ({})",
                    candidate.label, candidate.id
                ));
                print_info("To choose among all search candidates, use the --search option");
            }
            Notice::MultipleExactMatches(matches) => {
                print_info("Found multiple exact matches:");
                let _ = writeln!(self.output, "{}", self.formatter.format_candidates(matches));
            }
            Notice::Selected(id) => print_info(&format!("Selected id: {}", id)),
        }
    }

    fn show_candidates(&mut self, candidates: &[Candidate]) {
        println!("{}", self.formatter.format_candidates(candidates));
    }

    fn choose(&mut self, _choices: &[Candidate]) -> filmcheck_core::Result<i64> {
        Ok(read_index(&mut self.input, &mut self.output)?)
    }
}

/// Formats the final result of a lookup.
///
/// # Returns
///
/// The text to print on stdout.
pub fn render_result(result: &LookupResult, formatter: &dyn OutputFormatter) -> String {
    match result {
        LookupResult::Found(record) => formatter.format_record(record),
        LookupResult::Cancelled => formatter.format_message("Cancelled"),
        LookupResult::Empty => formatter.format_message("No data found"),
    }
}

/// Runs a lookup against the given sources and prints the result.
///
/// # Arguments
///
/// * `request` - Name or identifier plus resolution flags
/// * `suggestions` - Suggestion source for free-text names
/// * `details` - Detail source for the resolved identifier
/// * `formatter` - The output formatter to use
///
/// # Returns
///
/// Ok when the lookup ended in a record, a cancel, or no data.
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty
/// - A remote source fails or returns no usable payload
/// - The selected index is out of range
pub fn execute<S, D>(
    request: &LookupRequest,
    suggestions: &S,
    details: &D,
    formatter: &dyn OutputFormatter,
) -> Result<()>
where
    S: SuggestionSource + ?Sized,
    D: DetailSource + ?Sized,
{
    let stdin = io::stdin();
    let mut interaction = TerminalInteraction::new(formatter, stdin.lock(), io::stderr());

    let result = lookup(request, suggestions, details, &mut interaction)?;
    println!("{}", render_result(&result, formatter));
    Ok(())
}
