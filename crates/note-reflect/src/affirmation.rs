//! Supportive affirmations keyed by emotion.

use std::sync::Arc;

use note_enrich::{Enricher, EnrichmentError};

use crate::lexicon::ReflectionTables;
use crate::sanitize::{first_line, log_fallback, strip_quotes};

/// Model affirmations shorter than this are rejected.
const MIN_AFFIRMATION_CHARS: usize = 5;

/// Used only if custom tables somehow yield no template.
const LAST_RESORT: &str = "Every day is a new opportunity for growth and discovery.";

pub struct AffirmationSelector {
    tables: Arc<ReflectionTables>,
    enricher: Option<Arc<dyn Enricher>>,
}

impl AffirmationSelector {
    pub fn new(tables: Arc<ReflectionTables>, enricher: Option<Arc<dyn Enricher>>) -> Self {
        Self { tables, enricher }
    }

    /// An affirmation for `emotion`, never failing.
    pub async fn select(&self, emotion: &str) -> String {
        match self.attempt(emotion).await {
            Ok(affirmation) => affirmation,
            Err(error) => {
                log_fallback("affirmation", &error);
                self.select_local(emotion)
            }
        }
    }

    /// Ask the enricher for an affirmation.
    ///
    /// Known emotions are described with their table phrase; free-form labels
    /// are passed through as-is.
    ///
    /// # Errors
    ///
    /// [`EnrichmentError::Disabled`] without an enricher, the enricher's own
    /// error, or [`EnrichmentError::Rejected`] when the reply is too short.
    pub async fn attempt(&self, emotion: &str) -> Result<String, EnrichmentError> {
        let enricher = self.enricher.as_ref().ok_or(EnrichmentError::Disabled)?;
        let description = self.tables.description_for(emotion).unwrap_or(emotion);
        let raw = enricher.generate_affirmation(description).await?;
        let affirmation = strip_quotes(first_line(strip_quotes(&raw)));
        if affirmation.chars().count() < MIN_AFFIRMATION_CHARS {
            return Err(EnrichmentError::Rejected(format!(
                "affirmation too short: {affirmation:?}"
            )));
        }
        Ok(affirmation.to_string())
    }

    /// A uniformly random template for `emotion` (neutral for unknown labels).
    #[must_use]
    pub fn select_local(&self, emotion: &str) -> String {
        let templates = self.tables.affirmations_for(emotion);
        if templates.is_empty() {
            return LAST_RESORT.to_string();
        }
        templates[random_index(templates.len())].clone()
    }
}

/// Index in `0..len`; falls back to 0 if the OS random source fails.
fn random_index(len: usize) -> usize {
    let mut bytes = [0u8; 8];
    match getrandom::fill(&mut bytes) {
        Ok(()) => {
            let value = u64::from_le_bytes(bytes);
            usize::try_from(value % len as u64).unwrap_or(0)
        }
        Err(error) => {
            tracing::debug!(%error, "random source unavailable, using first template");
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use note_core::enums::Emotion;
    use rstest::rstest;

    fn selector() -> AffirmationSelector {
        AffirmationSelector::new(Arc::new(ReflectionTables::standard()), None)
    }

    #[test]
    fn every_known_label_gets_one_of_its_templates() {
        let tables = ReflectionTables::standard();
        let selector = selector();
        for emotion in Emotion::ALL {
            let picked = selector.select_local(emotion.as_str());
            assert!(tables.affirmations_for(emotion.as_str()).contains(&picked));
        }
    }

    #[rstest]
    #[case("wistful")]
    #[case("")]
    #[case("UNKNOWN")]
    fn unknown_labels_use_neutral_templates(#[case] label: &str) {
        let tables = ReflectionTables::standard();
        let picked = selector().select_local(label);
        assert!(!picked.is_empty());
        assert!(tables.affirmations_for("neutral").contains(&picked));
    }

    #[test]
    fn random_index_stays_in_range() {
        for len in 1..10 {
            for _ in 0..20 {
                assert!(random_index(len) < len);
            }
        }
    }

    #[tokio::test]
    async fn without_enricher_uses_templates() {
        let affirmation = selector().select("tired").await;
        assert!(
            ReflectionTables::standard()
                .affirmations_for("tired")
                .contains(&affirmation)
        );
    }
}
