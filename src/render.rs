use crate::config::OutputFormat;
use crate::error::Result;
use crate::matcher::Suggestion;
use serde::Serialize;
use std::fmt::Write as _;

const NO_SUGGESTION: &str = "No suggestion";

#[derive(Serialize)]
struct MatchReport<'a, T: Serialize> {
    term: &'a str,
    count: usize,
    suggestions: T,
}

/// Output of `termsuggest match`, without a trailing newline.
pub fn render_match(
    term: &str,
    count: usize,
    suggestions: &[Suggestion],
    format: OutputFormat,
    explain: bool,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(suggestions, explain)),
        OutputFormat::Json if explain => Ok(serde_json::to_string_pretty(&MatchReport {
            term,
            count,
            suggestions,
        })?),
        OutputFormat::Json => {
            let terms: Vec<&str> = suggestions.iter().map(|s| s.term.as_str()).collect();
            Ok(serde_json::to_string_pretty(&MatchReport {
                term,
                count,
                suggestions: terms,
            })?)
        }
    }
}

fn render_text(suggestions: &[Suggestion], explain: bool) -> String {
    suggestions
        .iter()
        .map(|s| {
            if explain {
                format!("{}\t{}\t{}", s.term, s.score, s.length_delta)
            } else {
                s.term.clone()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The block printed after each round of the interactive session.
pub fn result_block(
    term: &str,
    candidates: &[String],
    count: usize,
    suggestions: &[String],
) -> String {
    let found = if suggestions.is_empty() {
        NO_SUGGESTION.to_string()
    } else {
        suggestions.join(", ")
    };

    let mut out = String::new();
    let _ = writeln!(out, "--- Results ---");
    let _ = writeln!(out, "Search term: '{term}'");
    let _ = writeln!(out, "Candidates: [{}]", candidates.join(", "));
    let _ = writeln!(out, "Requested suggestions: {count}");
    let _ = writeln!(out, "Suggestions found: {found}");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Suggestion> {
        vec![
            Suggestion {
                term: "gros".into(),
                score: 0,
                length_delta: 0,
            },
            Suggestion {
                term: "gras".into(),
                score: 1,
                length_delta: 0,
            },
        ]
    }

    #[test]
    fn text_lists_one_term_per_line() {
        let out = render_match("gros", 2, &sample(), OutputFormat::Text, false).unwrap();
        assert_eq!(out, "gros\ngras");
    }

    #[test]
    fn text_explain_adds_score_columns() {
        let out = render_match("gros", 2, &sample(), OutputFormat::Text, true).unwrap();
        assert_eq!(out, "gros\t0\t0\ngras\t1\t0");
    }

    #[test]
    fn json_lists_terms() {
        let out = render_match("gros", 2, &sample(), OutputFormat::Json, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["term"], "gros");
        assert_eq!(value["count"], 2);
        assert_eq!(value["suggestions"], serde_json::json!(["gros", "gras"]));
    }

    #[test]
    fn json_explain_includes_scores() {
        let out = render_match("gros", 2, &sample(), OutputFormat::Json, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["suggestions"][1]["term"], "gras");
        assert_eq!(value["suggestions"][1]["score"], 1);
        assert_eq!(value["suggestions"][1]["length_delta"], 0);
    }

    #[test]
    fn empty_text_output() {
        let out = render_match("gros", 3, &[], OutputFormat::Text, false).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn result_block_lists_everything() {
        let block = result_block(
            "gros",
            &["gros".into(), "gras".into()],
            2,
            &["gros".into(), "gras".into()],
        );
        assert!(block.contains("Search term: 'gros'"));
        assert!(block.contains("Candidates: [gros, gras]"));
        assert!(block.contains("Requested suggestions: 2"));
        assert!(block.contains("Suggestions found: gros, gras"));
    }

    #[test]
    fn result_block_without_matches() {
        let block = result_block("gros", &["go".into()], 3, &[]);
        assert!(block.contains("Suggestions found: No suggestion"));
    }
}
