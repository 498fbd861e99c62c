use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::responses::Reflection;

/// A free-text journal entry. The derived fields stay `None` until a
/// reflection has been computed for the current content.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: String,
    pub user_id: String,
    pub content: String,
    pub summary: Option<String>,
    pub emotion: Option<String>,
    pub affirmation: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl JournalEntry {
    /// Flatten a reflection into the entry's derived fields.
    pub fn apply_reflection(&mut self, reflection: &Reflection) {
        self.summary = Some(reflection.summary.clone());
        self.emotion = Some(reflection.emotion.clone());
        self.affirmation = Some(reflection.affirmation.clone());
    }
}
