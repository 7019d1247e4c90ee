//! Line-oriented suggestion session: ask for a term, a candidate list and a count,
//! print the best matches, repeat until the user quits.

use crate::error::Result;
use crate::input::{CountInput, is_quit, parse_count, split_candidates};
use crate::matcher::suggest;
use crate::render::result_block;
use inquire::{InquireError, Text};
use std::io::{BufRead, IsTerminal, Write};
use tracing::{debug, info};

const TITLE: &str = "=== Term Suggestions ===";
const TERM_PROMPT: &str = "Search term (or 'quit' to exit):";
const CANDIDATES_PROMPT: &str = "Candidate terms (separated by commas or spaces):";
const GOODBYE: &str = "Goodbye!";
const EMPTY_LIST: &str = "Empty list. Please try again.";
const NO_VALID_TERMS: &str = "No valid term found. Please try again.";

pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal()
}

/// Source of answers for the session. `Ok(None)` means the input has ended.
pub trait LinePrompter {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Prompts through `inquire` on a terminal.
pub struct InquirePrompter;

impl LinePrompter for InquirePrompter {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match Text::new(prompt).prompt() {
            Ok(line) => Ok(Some(line)),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Reads plain lines, for piped input.
pub struct StdinPrompter<R, W> {
    reader: R,
    echo: W,
}

impl<R: BufRead, W: Write> StdinPrompter<R, W> {
    pub fn new(reader: R, echo: W) -> Self {
        Self { reader, echo }
    }
}

impl<R: BufRead, W: Write> LinePrompter for StdinPrompter<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.echo, "{prompt} ")?;
        self.echo.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Runs rounds until the user quits or input ends.
pub fn run_session<P, W>(prompter: &mut P, out: &mut W, default_count: usize) -> Result<()>
where
    P: LinePrompter,
    W: Write,
{
    writeln!(out, "{TITLE}")?;
    writeln!(out)?;

    let mut rounds = 0usize;
    while run_round(prompter, out, default_count)? {
        rounds += 1;
    }

    info!(rounds, "session finished");
    writeln!(out, "{GOODBYE}")?;
    Ok(())
}

/// One question-and-answer round. Returns false once the session should stop.
fn run_round<P, W>(prompter: &mut P, out: &mut W, default_count: usize) -> Result<bool>
where
    P: LinePrompter,
    W: Write,
{
    let Some(term) = prompter.read_line(TERM_PROMPT)? else {
        return Ok(false);
    };
    let term = term.trim().to_string();
    if is_quit(&term) {
        return Ok(false);
    }

    let Some(line) = prompter.read_line(CANDIDATES_PROMPT)? else {
        return Ok(false);
    };
    if line.trim().is_empty() {
        writeln!(out, "{EMPTY_LIST}")?;
        writeln!(out)?;
        return Ok(true);
    }
    let candidates = split_candidates(&line);
    if candidates.is_empty() {
        writeln!(out, "{NO_VALID_TERMS}")?;
        writeln!(out)?;
        return Ok(true);
    }

    let count_prompt = format!("Number of suggestions to return (default: {default_count}):");
    let count_line = prompter.read_line(&count_prompt)?.unwrap_or_default();
    let count = parse_count(&count_line, default_count);
    if let CountInput::Invalid { fallback } = count {
        writeln!(out, "Invalid number, using the default value ({fallback}).")?;
    }
    let count = count.value();

    let suggestions = suggest(&term, &candidates, count);
    debug!(term = %term, count, found = suggestions.len(), "round complete");

    writeln!(out)?;
    write!(out, "{}", result_block(&term, &candidates, count, &suggestions))?;
    writeln!(out)?;
    Ok(true)
}
