//! Parsing of the line-oriented input the shells collect from users.

use crate::error::SuggestError;

/// Suggestions returned when the user gives no usable count.
pub const DEFAULT_COUNT: usize = 3;

const QUIT_COMMAND: &str = "quit";

/// Outcome of reading a requested suggestion count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountInput {
    /// Nothing was entered.
    Default(usize),
    /// A strictly positive integer.
    Parsed(usize),
    /// Unusable input; the shell reports it and continues with `fallback`.
    Invalid { fallback: usize },
}

impl CountInput {
    pub fn value(self) -> usize {
        match self {
            CountInput::Default(n) | CountInput::Parsed(n) => n,
            CountInput::Invalid { fallback } => fallback,
        }
    }
}

/// Split a candidate list typed on one line.
///
/// Commas and spaces both separate terms. Pieces are trimmed and blank ones dropped, so
/// `"gros, gras,,graisse"` gives three terms. Order and duplicates are preserved.
pub fn split_candidates(line: &str) -> Vec<String> {
    line.split([',', ' '])
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read a requested count, falling back to `default` for blank or invalid input.
pub fn parse_count(input: &str, default: usize) -> CountInput {
    let input = input.trim();
    if input.is_empty() {
        return CountInput::Default(default);
    }
    match parse_positive_count(input) {
        Ok(n) => CountInput::Parsed(n),
        Err(_) => CountInput::Invalid { fallback: default },
    }
}

/// Strict variant used for command-line arguments: only positive integers pass.
pub fn parse_positive_count(input: &str) -> Result<usize, SuggestError> {
    match input.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(SuggestError::InvalidCount {
            input: input.to_string(),
        }),
    }
}

/// Whether an entered search term ends the interactive session.
pub fn is_quit(term: &str) -> bool {
    let term = term.trim();
    term.is_empty() || term.eq_ignore_ascii_case(QUIT_COMMAND)
}
