// Rust guideline compliant 2026-02-06

//! Terminal UI utilities for the Film Checker CLI.
//!
//! This module provides color support, terminal width detection,
//! and status messages on stderr.

use std::env;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

static COLOR_ENABLED: AtomicBool = AtomicBool::new(true);

/// Enables or disables colored status messages for the current process.
fn set_color_enabled(enabled: bool) {
    COLOR_ENABLED.store(enabled, Ordering::Relaxed);
}

fn color_choice() -> ColorChoice {
    if COLOR_ENABLED.load(Ordering::Relaxed) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Determines if colored output should be used.
///
/// Respects the NO_COLOR environment variable and terminal capabilities.
///
/// # Returns
/// `true` if colored output should be used, `false` otherwise
fn should_use_color() -> bool {
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    atty::is(atty::Stream::Stdout)
}

/// Decides colour for the whole run and applies it to status messages.
///
/// # Arguments
/// * `no_color` - Whether `--no-color` was given
///
/// # Returns
/// `true` if tables and errors should be coloured
pub fn init_color(no_color: bool) -> bool {
    let enabled = !no_color && should_use_color();
    set_color_enabled(enabled);
    enabled
}

/// Terminal width in columns, or 80 if it cannot be determined.
fn get_terminal_width() -> usize {
    term_size::dimensions().map(|(w, _)| w).unwrap_or(80)
}

/// Wraps text to fit within the terminal width.
///
/// Continuation lines are indented by `indent` spaces; the first line is not.
///
/// # Arguments
/// * `text` - The text to wrap
/// * `indent` - The indentation level (in spaces)
///
/// # Returns
/// The wrapped text
pub fn wrap_text(text: &str, indent: usize) -> String {
    wrap_to_width(text, indent, get_terminal_width())
}

fn wrap_to_width(text: &str, indent: usize, width: usize) -> String {
    let available_width = width.saturating_sub(indent);

    if available_width < 10 {
        return text.to_string();
    }

    let mut result = String::new();
    let indent_str = " ".repeat(indent);

    for (i, line) in text.lines().enumerate() {
        if i > 0 {
            result.push('\n');
            result.push_str(&indent_str);
        }

        if line.chars().count() <= available_width {
            result.push_str(line);
            continue;
        }

        let mut current_line = String::new();
        for word in line.split_whitespace() {
            if current_line.is_empty() {
                current_line.push_str(word);
            } else if current_line.chars().count() + 1 + word.chars().count() <= available_width {
                current_line.push(' ');
                current_line.push_str(word);
            } else {
                result.push_str(&current_line);
                result.push('\n');
                result.push_str(&indent_str);
                current_line = word.to_string();
            }
        }
        result.push_str(&current_line);
    }

    result
}

/// Prints a status message with a colored prefix to stderr.
///
/// # Arguments
/// * `prefix` - The prefix text
/// * `prefix_color` - The color for the prefix
/// * `message` - The message text
pub fn print_status(prefix: &str, prefix_color: Color, message: &str) {
    let mut stderr = StandardStream::stderr(color_choice());
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(prefix_color)).set_bold(true));
    let _ = write!(stderr, "{}", prefix);
    let _ = stderr.reset();
    let _ = writeln!(stderr, " {}", message);
}

/// Prints a success message.
pub fn print_success(message: &str) {
    print_status("✓", Color::Green, message);
}

/// Prints an info message.
pub fn print_info(message: &str) {
    print_status("ℹ", Color::Cyan, message);
}
