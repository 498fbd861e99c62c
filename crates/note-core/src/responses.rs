//! Request and response shapes exchanged with the request layer.
//!
//! These structs define the JSON contracts for reflections, the per-user
//! dashboard, application-wide statistics and enrichment provider info.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Habit, HabitRef, JournalEntry};

/// Default dashboard lookback window in days.
pub const DEFAULT_WINDOW_DAYS: u32 = 30;

/// Default number of recent entries on the dashboard.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

const fn default_window_days() -> u32 {
    DEFAULT_WINDOW_DAYS
}

const fn default_recent_limit() -> usize {
    DEFAULT_RECENT_LIMIT
}

// ---------------------------------------------------------------------------
// Reflection
// ---------------------------------------------------------------------------

/// Input to the reflection engine.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReflectionRequest {
    pub content: String,
    #[serde(default)]
    pub habits: Vec<HabitRef>,
}

/// Derived signals for one journal entry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Reflection {
    pub summary: String,
    pub emotion: String,
    pub affirmation: String,
    pub detected_habits: Vec<String>,
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// Input to the dashboard aggregator.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardRequest {
    pub user_id: String,
    #[serde(default = "default_window_days")]
    pub window_days: u32,
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

impl DashboardRequest {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            window_days: DEFAULT_WINDOW_DAYS,
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }
}

/// Headline numbers of the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_entries: u32,
    pub total_habits: u32,
    pub current_streak: u32,
    pub habit_completion_rate: f64,
}

/// A journal entry together with the habits it completed.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EntryWithHabits {
    #[serde(flatten)]
    pub entry: JournalEntry,
    pub completed_habits: Vec<Habit>,
}

/// Completion count for one habit inside the dashboard window.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HabitCompletionCount {
    pub id: String,
    pub name: String,
    pub completion_count: u32,
}

/// Entry count for one local calendar day.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DayActivity {
    /// `YYYY-MM-DD` in the configured timezone.
    pub date: String,
    /// Short weekday name, e.g. `Mon`.
    pub day_name: String,
    pub entry_count: u32,
}

/// Full dashboard payload for one user.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub stats: DashboardStats,
    pub recent_entries: Vec<EntryWithHabits>,
    pub emotion_distribution: BTreeMap<String, u32>,
    pub habit_completions: Vec<HabitCompletionCount>,
    pub weekly_activity: Vec<DayActivity>,
}

// ---------------------------------------------------------------------------
// Global statistics
// ---------------------------------------------------------------------------

/// Application-wide counters.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GlobalSummary {
    pub total_users: u32,
    pub total_entries: u32,
    pub total_habits: u32,
    pub total_completions: u32,
    pub entries_last_week: u32,
}

/// Derived engagement ratios, rounded to two decimals.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GlobalInsights {
    pub avg_habits_per_user: f64,
    pub emotion_distribution: BTreeMap<String, u32>,
    pub avg_entries_per_user: f64,
    pub completion_rate: f64,
}

/// Response of the application-wide statistics query.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GlobalStats {
    pub timestamp: DateTime<Utc>,
    pub summary: GlobalSummary,
    pub insights: GlobalInsights,
}

// ---------------------------------------------------------------------------
// Provider info
// ---------------------------------------------------------------------------

/// Which models serve each enrichment task.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProviderModels {
    pub summarization: String,
    pub affirmation: String,
}

/// Describes the active enrichment provider without leaking credentials.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProviderInfo {
    pub provider: String,
    pub has_api_key: bool,
    pub api_key_preview: String,
    pub models: ProviderModels,
}
