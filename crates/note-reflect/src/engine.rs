use std::sync::Arc;

use note_config::EnrichmentConfig;
use note_core::entities::HabitRef;
use note_core::responses::{Reflection, ReflectionRequest};
use note_enrich::{ChatClient, Enricher, EnrichmentError};

use crate::affirmation::AffirmationSelector;
use crate::emotion::EmotionClassifier;
use crate::habits::HabitMatcher;
use crate::lexicon::ReflectionTables;
use crate::summary::Summarizer;

/// Composes the four reflection components into one [`Reflection`].
///
/// Stateless per call and `Send + Sync`; share it behind an `Arc`.
pub struct ReflectionEngine {
    classifier: EmotionClassifier,
    summarizer: Summarizer,
    affirmations: AffirmationSelector,
    habits: HabitMatcher,
    enriched: bool,
}

impl ReflectionEngine {
    pub fn new(tables: Arc<ReflectionTables>, enricher: Option<Arc<dyn Enricher>>) -> Self {
        Self {
            enriched: enricher.is_some(),
            classifier: EmotionClassifier::new(Arc::clone(&tables), enricher.clone()),
            summarizer: Summarizer::new(enricher.clone()),
            affirmations: AffirmationSelector::new(Arc::clone(&tables), enricher),
            habits: HabitMatcher::new(tables),
        }
    }

    /// Standard tables, no enrichment.
    #[must_use]
    pub fn local() -> Self {
        Self::new(Arc::new(ReflectionTables::standard()), None)
    }

    /// Standard tables plus a chat-completions client when enrichment is
    /// configured. Anything short of a usable client yields a local engine.
    #[must_use]
    pub fn from_config(config: &EnrichmentConfig) -> Self {
        let enricher: Option<Arc<dyn Enricher>> = match ChatClient::from_config(config) {
            Ok(client) => {
                tracing::debug!(provider = %config.provider, model = %config.model, "enrichment enabled");
                Some(Arc::new(client))
            }
            Err(EnrichmentError::Disabled) => None,
            Err(error) => {
                tracing::warn!(%error, "could not build enrichment client, using local reflection");
                None
            }
        };
        Self::new(Arc::new(ReflectionTables::standard()), enricher)
    }

    /// Whether an enricher is attached.
    #[must_use]
    pub const fn is_enriched(&self) -> bool {
        self.enriched
    }

    /// Reflect on `content` against the user's habits.
    ///
    /// Content validation belongs to the caller; this never fails.
    pub async fn reflect(&self, content: &str, habits: &[HabitRef]) -> Reflection {
        let emotion = self.classifier.classify(content).await;
        let summary = self.summarizer.summarize(content).await;
        let affirmation = self.affirmations.select(&emotion).await;
        let detected_habits = self.habits.detect(content, habits);

        tracing::debug!(
            %emotion,
            detected = detected_habits.len(),
            enriched = self.enriched,
            "reflection computed"
        );

        Reflection {
            summary,
            emotion,
            affirmation,
            detected_habits,
        }
    }

    pub async fn reflect_request(&self, request: &ReflectionRequest) -> Reflection {
        self.reflect(&request.content, &request.habits).await
    }
}

impl Default for ReflectionEngine {
    fn default() -> Self {
        Self::local()
    }
}
