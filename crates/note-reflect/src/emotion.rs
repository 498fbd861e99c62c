//! Keyword-lexicon emotion classification.

use std::sync::Arc;

use note_core::enums::Emotion;
use note_enrich::{Enricher, EnrichmentError};

use crate::lexicon::ReflectionTables;
use crate::sanitize::{QUOTE_AND_PUNCT, log_fallback};

/// Scores text against the emotion lexicon, optionally deferring to an
/// external model for a free-form label.
pub struct EmotionClassifier {
    tables: Arc<ReflectionTables>,
    enricher: Option<Arc<dyn Enricher>>,
}

impl EmotionClassifier {
    pub fn new(tables: Arc<ReflectionTables>, enricher: Option<Arc<dyn Enricher>>) -> Self {
        Self { tables, enricher }
    }

    /// Classify `text`, never failing.
    pub async fn classify(&self, text: &str) -> String {
        match self.attempt(text).await {
            Ok(label) => label,
            Err(error) => {
                log_fallback("emotion", &error);
                self.classify_local(text).as_str().to_string()
            }
        }
    }

    /// Ask the enricher for a label and validate it.
    ///
    /// # Errors
    ///
    /// [`EnrichmentError::Disabled`] without an enricher, the enricher's own
    /// error, or [`EnrichmentError::Rejected`] when the reply is not a single
    /// alphabetic word of at least two letters.
    pub async fn attempt(&self, text: &str) -> Result<String, EnrichmentError> {
        let enricher = self.enricher.as_ref().ok_or(EnrichmentError::Disabled)?;
        let raw = enricher.classify_emotion(text).await?;
        clean_emotion_word(&raw)
            .ok_or_else(|| EnrichmentError::Rejected(format!("not an emotion word: {raw:?}")))
    }

    /// Lexicon score: distinct keyword hits per category. Ties keep the
    /// earlier category; all-zero is `Neutral`.
    #[must_use]
    pub fn classify_local(&self, text: &str) -> Emotion {
        let lower = text.to_lowercase();
        let mut best = Emotion::Neutral;
        let mut best_score = 0;

        for (emotion, keywords) in self.tables.keywords() {
            let score = keywords
                .iter()
                .filter(|keyword| lower.contains(keyword.as_str()))
                .count();
            if score > best_score {
                best_score = score;
                best = *emotion;
            }
        }

        best
    }
}

/// Normalize a model reply to one lowercase ASCII word: first token, then
/// surrounding quotes and punctuation stripped.
fn clean_emotion_word(raw: &str) -> Option<String> {
    let token = raw.split_whitespace().next()?;
    let word = token.trim_matches(QUOTE_AND_PUNCT).to_ascii_lowercase();
    (word.len() >= 2 && word.chars().all(|c| c.is_ascii_lowercase())).then_some(word)
}
