//! # note-reflect
//!
//! The NeuralNote reflection engine. For each journal entry it derives an
//! emotion label, a short summary, a supportive affirmation and the list of
//! tracked habits the entry mentions.
//!
//! Every component has a deterministic local strategy driven by
//! [`ReflectionTables`]. When an [`Enricher`](note_enrich::Enricher) is
//! attached, each component asks it once and keeps the model's answer only
//! if it passes validation. Failures never surface to the caller.

pub mod affirmation;
pub mod emotion;
mod engine;
pub mod habits;
pub mod lexicon;
mod sanitize;
pub mod summary;

pub use affirmation::AffirmationSelector;
pub use emotion::EmotionClassifier;
pub use engine::ReflectionEngine;
pub use habits::HabitMatcher;
pub use lexicon::ReflectionTables;
pub use summary::Summarizer;
