use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Link between a habit and the journal entry that completed it.
/// Unique per `(habit_id, journal_entry_id)` pair.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HabitCompletion {
    pub id: String,
    pub habit_id: String,
    pub journal_entry_id: String,
    pub completed_at: DateTime<Utc>,
}
