// Rust guideline compliant 2026-02-06

//! Output formatting module for the Film Checker CLI.
//!
//! This module provides functionality for formatting candidates and
//! detail records in various output formats (JSON, table, plain text).

use crate::terminal::wrap_text;
use filmcheck_app::{AppError, ErrorEnvelope};
use filmcheck_core::{
    Candidate, DetailRecord, NameCredit, NameRef, OutputFormat, PersonDetail, TitleDetail,
};
use serde_json::json;
use std::fmt::Write as _;
use std::io::Write as _;
use tabled::{builder::Builder, settings::Style};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

const SEPARATOR_WIDTH: usize = 20;
const INDENT: &str = "    ";

/// Output formatter trait.
///
/// Defines the interface for formatting lookup data in different output formats.
pub trait OutputFormatter {
    /// Formats a candidate list; the position in the list is the index the
    /// user enters at the prompt.
    fn format_candidates(&self, candidates: &[Candidate]) -> String;

    /// Formats a title record.
    fn format_title(&self, title: &TitleDetail) -> String;

    /// Formats a person record.
    fn format_person(&self, person: &PersonDetail) -> String;

    /// Formats an informational result message (cancelled, no data).
    fn format_message(&self, message: &str) -> String;

    /// Formats an error message for display.
    fn format_error(&self, error: &str) -> String;

    /// Formats either kind of detail record.
    fn format_record(&self, record: &DetailRecord) -> String {
        match record {
            DetailRecord::Title(title) => self.format_title(title),
            DetailRecord::Person(person) => self.format_person(person),
        }
    }

    /// Formats an application error.
    fn format_app_error(&self, error: &AppError) -> String {
        self.format_error(&error.to_string())
    }
}

/// JSON output formatter.
///
/// Formats records as valid JSON for machine consumption.
pub struct JsonFormatter;

impl JsonFormatter {
    fn pretty(value: &serde_json::Value) -> String {
        serde_json::to_string_pretty(value)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize output" }).to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_candidates(&self, candidates: &[Candidate]) -> String {
        Self::pretty(&json!({
            "candidates": candidates,
            "total": candidates.len(),
        }))
    }

    fn format_title(&self, title: &TitleDetail) -> String {
        Self::pretty(&json!({ "title": title }))
    }

    fn format_person(&self, person: &PersonDetail) -> String {
        Self::pretty(&json!({ "person": person }))
    }

    fn format_message(&self, message: &str) -> String {
        json!({ "message": message }).to_string()
    }

    fn format_error(&self, error: &str) -> String {
        json!({ "error": error }).to_string()
    }

    fn format_app_error(&self, error: &AppError) -> String {
        serde_json::to_string(&ErrorEnvelope::from_error(error))
            .unwrap_or_else(|_| json!({ "error": error.to_string() }).to_string())
    }
}

/// Table output formatter.
///
/// Formats candidates as a boxed table and records as labelled sections.
pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    /// Creates a new table formatter.
    ///
    /// # Arguments
    /// * `use_color` - Whether to use colored output
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }
}

impl OutputFormatter for TableFormatter {
    fn format_candidates(&self, candidates: &[Candidate]) -> String {
        if candidates.is_empty() {
            return "No candidates found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["#", "id", "name", "summary"]);

        for (index, candidate) in candidates.iter().enumerate() {
            builder.push_record(vec![
                index.to_string(),
                candidate.id.clone(),
                candidate.label.clone(),
                candidate.summary.clone(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        table.to_string()
    }

    fn format_title(&self, title: &TitleDetail) -> String {
        format!("{}\n{}", "-".repeat(SEPARATOR_WIDTH), render_title(title))
    }

    fn format_person(&self, person: &PersonDetail) -> String {
        format!("{}\n{}", "-".repeat(SEPARATOR_WIDTH), render_person(person))
    }

    fn format_message(&self, message: &str) -> String {
        message.to_string()
    }

    fn format_error(&self, error: &str) -> String {
        if !self.use_color {
            return format!("Error: {}", error);
        }

        let mut buffer = Buffer::ansi();
        let _ = buffer.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
        let _ = write!(buffer, "Error:");
        let _ = buffer.reset();
        let _ = write!(buffer, " {}", error);
        String::from_utf8_lossy(buffer.as_slice()).to_string()
    }
}

/// Plain text output formatter.
///
/// Formats data as simple plain text without colors or tables.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_candidates(&self, candidates: &[Candidate]) -> String {
        if candidates.is_empty() {
            return "No candidates found.".to_string();
        }

        let mut output = String::new();
        for (index, candidate) in candidates.iter().enumerate() {
            let _ = writeln!(
                output,
                "{} {} {} {}",
                index, candidate.id, candidate.label, candidate.summary
            );
        }
        output
    }

    fn format_title(&self, title: &TitleDetail) -> String {
        render_title(title)
    }

    fn format_person(&self, person: &PersonDetail) -> String {
        render_person(person)
    }

    fn format_message(&self, message: &str) -> String {
        message.to_string()
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format
/// * `use_color` - Whether to use colored output (ignored for JSON and plain)
///
/// # Returns
/// A boxed OutputFormatter instance
pub fn create_formatter(format: OutputFormat, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter::new(use_color)),
        OutputFormat::Plain => Box::new(PlainFormatter),
    }
}

fn credit_line(name: &NameRef, characters: &[String]) -> String {
    let display = name.display_name.as_deref().unwrap_or("?");
    let mut line = format!("{}{} ({})", INDENT, display, name.id);
    if !characters.is_empty() {
        let _ = write!(line, ", {}", characters.join(", "));
    }
    line
}

/// Writes a credit section; credits without a person are left out.
fn push_credits(output: &mut String, heading: &str, credits: &[NameCredit]) {
    let named: Vec<(&NameRef, &[String])> = credits
        .iter()
        .filter_map(|c| c.name.as_ref().map(|name| (name, c.characters.as_slice())))
        .collect();
    push_section(output, heading, &named, |&(name, characters)| credit_line(name, characters));
}

fn push_section<T>(output: &mut String, heading: &str, items: &[T], line: impl Fn(&T) -> String) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(output, "{}: ({})", heading, items.len());
    for item in items {
        let _ = writeln!(output, "{}", line(item));
    }
}

/// Renders a title record in human-readable form.
pub fn render_title(title: &TitleDetail) -> String {
    let mut output = String::new();

    let primary = title.primary_title.as_deref().unwrap_or("(untitled)");
    let _ = write!(output, "{} ({})", primary, title.id);
    if let Some(original) = title.original_title.as_deref() {
        if original != primary {
            let _ = write!(output, ", {}", original);
        }
    }
    output.push('\n');

    if let Some(kind) = &title.kind {
        let _ = writeln!(output, "Type: {}", kind);
    }

    match (title.start_year, title.end_year) {
        (Some(start), Some(end)) => {
            let _ = writeln!(output, "Released in {} - {}", start, end);
        }
        (Some(start), None) => {
            let _ = writeln!(output, "Released in {}", start);
        }
        (None, Some(end)) => {
            let _ = writeln!(output, "Ended in {}", end);
        }
        (None, None) => {}
    }

    if let Some(minutes) = title.runtime_minutes {
        let _ = writeln!(output, "Runtime: {} minutes", minutes);
    }
    if let Some(adult) = title.is_adult {
        let _ = writeln!(output, "Adult: {}", if adult { "yes" } else { "no" });
    }
    if let Some(plot) = &title.plot {
        let _ = writeln!(output, "Plot: {}", wrap_text(plot, "Plot: ".len()));
    }
    if let Some(rating) = &title.rating {
        if let Some(score) = rating.aggregate_rating {
            let _ = writeln!(
                output,
                "Rating: {} ({} votes)",
                score,
                rating.votes_count.unwrap_or(0)
            );
        }
    }
    if !title.genres.is_empty() {
        let _ = writeln!(output, "Genres: {}", title.genres.join(", "));
    }

    push_section(&mut output, "Certificates", &title.certificates, |c| {
        let country = c
            .country
            .as_ref()
            .and_then(|country| country.name.as_deref())
            .unwrap_or("?");
        format!("{}{}: {}", INDENT, country, c.rating.as_deref().unwrap_or("?"))
    });
    push_section(&mut output, "Spoken languages", &title.spoken_languages, |l| {
        format!("{}{}", INDENT, l.name.as_deref().or(l.code.as_deref()).unwrap_or("?"))
    });
    push_section(&mut output, "Origin countries", &title.origin_countries, |c| {
        format!("{}{}", INDENT, c.name.as_deref().or(c.code.as_deref()).unwrap_or("?"))
    });

    if let Some(review) = &title.critic_review {
        if let Some(score) = review.score {
            let _ = writeln!(
                output,
                "Critic review: {} ({} reviews)",
                score,
                review.review_count.unwrap_or(0)
            );
        }
    }

    push_credits(&mut output, "Directors", &title.directors);
    push_credits(&mut output, "Writers", &title.writers);
    push_credits(&mut output, "Casts", &title.casts);

    output
}

/// Renders a person record in human-readable form.
pub fn render_person(person: &PersonDetail) -> String {
    let mut output = String::new();

    let name = person.display_name.as_deref().unwrap_or("(unnamed)");
    let _ = write!(output, "{} ({})", name, person.id);
    if !person.alternate_names.is_empty() {
        let _ = write!(output, ", also known as ({})", person.alternate_names.join(", "));
    }
    output.push('\n');

    if let Some(line) = life_event("Born", person.birth_year, &[person.birth_location.as_deref()]) {
        let _ = writeln!(output, "{}", line);
    }
    if let Some(line) = life_event(
        "Died",
        person.death_year,
        &[person.death_location.as_deref(), person.dead_reason.as_deref()],
    ) {
        let _ = writeln!(output, "{}", line);
    }

    push_section(&mut output, "Known for", &person.known_for, |k| {
        format!(
            "{}{} ({})",
            INDENT,
            k.primary_title.as_deref().unwrap_or("?"),
            k.id
        )
    });

    output
}

fn life_event(verb: &str, year: Option<i32>, details: &[Option<&str>]) -> Option<String> {
    let mut parts: Vec<String> = Vec::new();
    if let Some(year) = year {
        parts.push(year.to_string());
    }
    parts.extend(details.iter().flatten().map(|s| s.to_string()));

    if parts.is_empty() {
        None
    } else {
        Some(format!("{} in {}", verb, parts.join(", ")))
    }
}
