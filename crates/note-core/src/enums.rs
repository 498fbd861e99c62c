//! Emotion labels for NeuralNote.
//!
//! The lexicon categories have a fixed declaration order that doubles as the
//! tie-break order for classification. `Neutral` is the fallback label and is
//! never scored.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Emotion
// ---------------------------------------------------------------------------

/// A fixed emotion label produced by the local classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Emotion {
    Happy,
    Sad,
    Anxious,
    Angry,
    Calm,
    Motivated,
    Tired,
    Neutral,
}

impl Emotion {
    /// Scored categories in declaration order. Earlier entries win ties.
    pub const CATEGORIES: [Self; 7] = [
        Self::Happy,
        Self::Sad,
        Self::Anxious,
        Self::Angry,
        Self::Calm,
        Self::Motivated,
        Self::Tired,
    ];

    /// Every label, including the `Neutral` fallback.
    pub const ALL: [Self; 8] = [
        Self::Happy,
        Self::Sad,
        Self::Anxious,
        Self::Angry,
        Self::Calm,
        Self::Motivated,
        Self::Tired,
        Self::Neutral,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Sad => "sad",
            Self::Anxious => "anxious",
            Self::Angry => "angry",
            Self::Calm => "calm",
            Self::Motivated => "motivated",
            Self::Tired => "tired",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Emotion {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|emotion| emotion.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("unknown emotion label: {s}")))
    }
}
