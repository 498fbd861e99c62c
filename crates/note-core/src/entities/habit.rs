use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A habit a user tracks. Completions link habits to journal entries.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Habit {
    /// The `{id, name}` view the habit matcher works on.
    #[must_use]
    pub fn to_ref(&self) -> HabitRef {
        HabitRef {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}

/// Minimal habit reference supplied with a reflection request.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
pub struct HabitRef {
    pub id: String,
    pub name: String,
}

impl HabitRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
