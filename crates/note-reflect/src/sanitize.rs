//! Cleanup helpers for raw model completions.

use note_enrich::EnrichmentError;

const QUOTES: &[char] = &['"', '\'', '`', '\u{201c}', '\u{201d}', '\u{2018}', '\u{2019}'];

/// Quotes plus the punctuation models like to wrap single words in.
pub const QUOTE_AND_PUNCT: &[char] = &[
    '"', '\'', '`', '\u{201c}', '\u{201d}', '\u{2018}', '\u{2019}', '.', ',', '!', '?', ';', ':',
    '(', ')', '[', ']', '*', '_', '-',
];

/// Collapse every whitespace run (including newlines) to one space and trim.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Trim surrounding quote characters and whitespace.
pub fn strip_quotes(text: &str) -> &str {
    text.trim().trim_matches(QUOTES).trim()
}

/// Remove the first matching prefix, compared case-insensitively.
///
/// `prefixes` must be ASCII and ordered longest first.
pub fn strip_prefix_ci<'a>(text: &'a str, prefixes: &[&str]) -> &'a str {
    for prefix in prefixes {
        if let Some(head) = text.get(..prefix.len()) {
            if head.eq_ignore_ascii_case(prefix) {
                return text[prefix.len()..].trim_start();
            }
        }
    }
    text
}

/// First non-blank line, trimmed.
pub fn first_line(text: &str) -> &str {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("")
}

/// Trace why a component fell back to its local strategy.
pub fn log_fallback(component: &'static str, error: &EnrichmentError) {
    match error {
        EnrichmentError::Disabled => {}
        EnrichmentError::Rejected(reason) => {
            tracing::debug!(component, reason = %reason, "enrichment rejected, using local result");
        }
        other => {
            tracing::warn!(component, error = %other, "enrichment unavailable, using local result");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_newlines_and_runs() {
        assert_eq!(collapse_whitespace("  a\n\n b \t c  "), "a b c");
    }

    #[test]
    fn strips_straight_and_curly_quotes() {
        assert_eq!(strip_quotes("\"hello\""), "hello");
        assert_eq!(strip_quotes("  \u{201c}hi there\u{201d} "), "hi there");
        assert_eq!(strip_quotes("'x'"), "x");
    }

    #[test]
    fn strips_prefix_case_insensitively() {
        let prefixes = ["here is a summary:", "summary:"];
        assert_eq!(strip_prefix_ci("SUMMARY: A day.", &prefixes), "A day.");
        assert_eq!(strip_prefix_ci("Here is a summary: Walk.", &prefixes), "Walk.");
        assert_eq!(strip_prefix_ci("A plain day.", &prefixes), "A plain day.");
    }

    #[test]
    fn prefix_check_respects_char_boundaries() {
        assert_eq!(strip_prefix_ci("ééééé", &["summary:"]), "ééééé");
    }

    #[test]
    fn first_line_skips_blank_lines() {
        assert_eq!(first_line("\n\n  You matter.  \nSecond"), "You matter.");
        assert_eq!(first_line(""), "");
    }
}
