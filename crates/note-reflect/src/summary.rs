//! Short synopsis extraction.
//!
//! Local extraction keeps the first one or two substantial sentences.
//! Model summaries are accepted only if they do not simply echo the entry.

use std::sync::Arc;

use note_enrich::{Enricher, EnrichmentError};

use crate::sanitize::{collapse_whitespace, log_fallback, strip_prefix_ci, strip_quotes};

/// Returned when no sentence is long enough to quote.
pub const GENERIC_SUMMARY: &str = "A brief moment of reflection was captured today.";

/// Entries shorter than this (in characters) never go to the model.
pub const MIN_ENRICH_CHARS: usize = 30;

/// Fragments at or below this length (trimmed, in characters) are dropped.
const MIN_SENTENCE_CHARS: usize = 10;

/// Model summaries shorter than this are rejected.
const MIN_SUMMARY_CHARS: usize = 10;

/// Boilerplate openers models put before the summary, longest first.
const BOILERPLATE: &[&str] = &[
    "here is an objective summary of the journal entry:",
    "here's an objective summary of the journal entry:",
    "here is a summary of the journal entry:",
    "here's a summary of the journal entry:",
    "here is an objective summary:",
    "here's an objective summary:",
    "here is a summary:",
    "here's a summary:",
    "objective summary:",
    "summary:",
];

pub struct Summarizer {
    enricher: Option<Arc<dyn Enricher>>,
}

impl Summarizer {
    pub fn new(enricher: Option<Arc<dyn Enricher>>) -> Self {
        Self { enricher }
    }

    /// Summarize `text`, never failing and never returning an empty string.
    pub async fn summarize(&self, text: &str) -> String {
        if text.chars().count() < MIN_ENRICH_CHARS {
            return summarize_local(text);
        }
        match self.attempt(text).await {
            Ok(summary) => summary,
            Err(error) => {
                log_fallback("summary", &error);
                summarize_local(text)
            }
        }
    }

    /// Ask the enricher for a summary, clean it and check it is not an echo.
    ///
    /// # Errors
    ///
    /// [`EnrichmentError::Disabled`] without an enricher, the enricher's own
    /// error, or [`EnrichmentError::Rejected`] for echoed or too-short replies.
    pub async fn attempt(&self, text: &str) -> Result<String, EnrichmentError> {
        let enricher = self.enricher.as_ref().ok_or(EnrichmentError::Disabled)?;
        let raw = enricher.summarize(text).await?;
        let summary = clean_summary(&raw);
        validate_summary(&summary, text)?;
        Ok(summary)
    }
}

/// First one or two sentences longer than ten characters.
#[must_use]
pub fn summarize_local(text: &str) -> String {
    let mut sentences = text
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_SENTENCE_CHARS);

    match (sentences.next(), sentences.next()) {
        (None, _) => GENERIC_SUMMARY.to_string(),
        (Some(only), None) => format!("{only}."),
        (Some(first), Some(second)) => format!("{first}. {second}."),
    }
}

fn clean_summary(raw: &str) -> String {
    let collapsed = collapse_whitespace(raw);
    let without_prefix = strip_prefix_ci(strip_quotes(&collapsed), BOILERPLATE);
    strip_quotes(without_prefix).to_string()
}

fn validate_summary(summary: &str, input: &str) -> Result<(), EnrichmentError> {
    if summary.chars().count() < MIN_SUMMARY_CHARS {
        return Err(EnrichmentError::Rejected("summary too short".into()));
    }
    let summary_lower = summary.to_lowercase();
    let input_lower = input.to_lowercase();
    if summary_lower == input_lower {
        return Err(EnrichmentError::Rejected("summary repeats the entry".into()));
    }
    if input_lower.starts_with(&summary_lower) {
        return Err(EnrichmentError::Rejected("summary is a prefix of the entry".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn no_usable_sentence_gives_generic() {
        assert_eq!(summarize_local(""), GENERIC_SUMMARY);
        assert_eq!(summarize_local("Good day."), GENERIC_SUMMARY);
        assert_eq!(summarize_local("Ok. Fine! Sure?"), GENERIC_SUMMARY);
    }

    #[test]
    fn single_sentence_gets_period() {
        assert_eq!(
            summarize_local("Spent the whole afternoon reading"),
            "Spent the whole afternoon reading."
        );
    }

    #[test]
    fn joins_first_two_sentences() {
        let text = "Today I went to the gym and worked out for an hour. \
                    Then I came home and made a healthy dinner! Later I slept early.";
        assert_eq!(
            summarize_local(text),
            "Today I went to the gym and worked out for an hour. \
             Then I came home and made a healthy dinner."
        );
    }

    #[test]
    fn skips_short_fragments_between_sentences() {
        let text = "Wow. What an incredible sunrise this morning... Yes! Went swimming afterwards.";
        assert_eq!(
            summarize_local(text),
            "What an incredible sunrise this morning. Went swimming afterwards."
        );
    }

    #[test]
    fn long_repetitive_text_shrinks() {
        let text = "Today was an amazing day! ".repeat(100);
        let summary = summarize_local(&text);
        assert!(summary.len() < text.len());
        assert_eq!(summary, "Today was an amazing day. Today was an amazing day.");
    }

    #[test]
    fn unicode_and_special_characters_do_not_panic() {
        let emoji = "Today was wonderful! \u{1f60a} I felt so happy \u{1f389} and grateful \u{1f496}";
        assert!(!summarize_local(emoji).is_empty());
        let special = "Today I felt great! @#$%^&*() <test> \"quotes\" 'apostrophes' [brackets]";
        assert!(!summarize_local(special).is_empty());
        let multiline = "Today was great!\n\nI did multiple things:\n- Exercise\n- Reading\n- Meditation";
        assert!(!summarize_local(multiline).is_empty());
    }

    #[test]
    fn cleans_boilerplate_quotes_and_whitespace() {
        assert_eq!(
            clean_summary("Here is a summary:\n\n\"The writer   enjoyed\na quiet walk.\""),
            "The writer enjoyed a quiet walk."
        );
        assert_eq!(
            clean_summary("\"Summary: A calm evening at home.\""),
            "A calm evening at home."
        );
    }

    #[test]
    fn rejects_echoes_and_short_replies() {
        let input = "Short test content for summary generation";
        assert!(validate_summary("short test content for summary generation", input).is_err());
        assert!(validate_summary("Short test content", input).is_err());
        assert!(validate_summary("Too short", input).is_err());
        assert!(validate_summary("The author tested summaries.", input).is_ok());
    }

    #[tokio::test]
    async fn short_text_skips_enrichment() {
        let summarizer = Summarizer::new(None);
        assert_eq!(summarizer.summarize("Good.").await, GENERIC_SUMMARY);
    }
}
