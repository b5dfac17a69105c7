// Rust guideline compliant 2026-02-06

//! Interactive index prompt.

use std::io::{self, BufRead, Write};

/// Text shown before reading an index.
pub const PROMPT: &str = "Enter index of what you are searching for (empty to cancel)";

/// Index returned when the user enters nothing.
pub const CANCEL_INDEX: i64 = -1;

/// Parses one line of prompt input.
///
/// # Returns
///
/// - `Some(CANCEL_INDEX)` for blank input
/// - `Some(n)` for an integer
/// - `None` when the input is not an integer
#[must_use]
pub fn parse_index(input: &str) -> Option<i64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Some(CANCEL_INDEX);
    }
    trimmed.parse().ok()
}

/// Reads an index, repeating the prompt until the input is an integer.
///
/// Blocks until a line is entered. End of input cancels.
///
/// # Arguments
///
/// * `input` - Source of user input
/// * `output` - Where the prompt is written
///
/// # Errors
///
/// Returns an error if reading input or writing the prompt fails.
pub fn read_index<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<i64> {
    loop {
        write!(output, "{} [{}]: ", PROMPT, CANCEL_INDEX)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(CANCEL_INDEX);
        }

        match parse_index(&line) {
            Some(index) => return Ok(index),
            None => writeln!(output, "Error: '{}' is not a valid integer.", line.trim())?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_index_values() {
        assert_eq!(parse_index("3\n"), Some(3));
        assert_eq!(parse_index("  -1 "), Some(-1));
        assert_eq!(parse_index("\n"), Some(CANCEL_INDEX));
        assert_eq!(parse_index("two"), None);
    }

    #[test]
    fn test_read_index_returns_number() {
        let mut input = Cursor::new("2\n");
        let mut output = Vec::new();
        assert_eq!(read_index(&mut input, &mut output).unwrap(), 2);
        assert!(String::from_utf8(output).unwrap().contains(PROMPT));
    }

    #[test]
    fn test_read_index_reprompts_on_garbage() {
        let mut input = Cursor::new("abc\n7\n");
        let mut output = Vec::new();
        assert_eq!(read_index(&mut input, &mut output).unwrap(), 7);

        let written = String::from_utf8(output).unwrap();
        assert!(written.contains("'abc' is not a valid integer"));
        assert_eq!(written.matches(PROMPT).count(), 2);
    }

    #[test]
    fn test_read_index_blank_line_cancels() {
        let mut input = Cursor::new("\n");
        let mut output = Vec::new();
        assert_eq!(read_index(&mut input, &mut output).unwrap(), CANCEL_INDEX);
    }

    #[test]
    fn test_read_index_eof_cancels() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        assert_eq!(read_index(&mut input, &mut output).unwrap(), CANCEL_INDEX);
    }
}
