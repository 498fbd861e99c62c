//! Per-user dashboard aggregation.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;

use note_config::DashboardConfig;
use note_core::entities::{Habit, HabitCompletion, JournalEntry};
use note_core::responses::{
    DashboardRequest, DashboardResponse, DashboardStats, DayActivity, EntryWithHabits,
    HabitCompletionCount,
};

use crate::calendar::{iso_date, local_date, short_day_name, trailing_days};
use crate::error::DashboardError;
use crate::memory::completed_habits_of;
use crate::source::HistorySource;
use crate::streak::current_streak;

const WEEK_DAYS: u32 = 7;

/// Computes dashboard payloads from stored history.
///
/// Read-only: for a fixed `now` the same history always produces the same
/// response.
#[derive(Debug, Clone, Copy)]
pub struct DashboardAggregator {
    tz: Tz,
}

impl DashboardAggregator {
    #[must_use]
    pub const fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Aggregator using the configured timezone.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Config`] for an unknown timezone name.
    pub fn from_config(config: &DashboardConfig) -> Result<Self, DashboardError> {
        Ok(Self::new(config.tz()?))
    }

    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.tz
    }

    /// Aggregate as of the current instant.
    ///
    /// # Errors
    ///
    /// See [`Self::aggregate_at`].
    pub fn aggregate<S: HistorySource + ?Sized>(
        &self,
        source: &S,
        request: &DashboardRequest,
    ) -> Result<DashboardResponse, DashboardError> {
        self.aggregate_at(source, request, Utc::now())
    }

    /// Aggregate as of `now`.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown user, `Validation` for a zero-day window or
    /// one reaching past the earliest representable date, or any error from
    /// `source`.
    pub fn aggregate_at<S: HistorySource + ?Sized>(
        &self,
        source: &S,
        request: &DashboardRequest,
        now: DateTime<Utc>,
    ) -> Result<DashboardResponse, DashboardError> {
        if request.window_days == 0 {
            return Err(DashboardError::Validation(
                "windowDays must be at least 1".into(),
            ));
        }
        let start = window_start(now, request.window_days)?;
        let user = source.require_user(&request.user_id)?;
        let entries = source.entries_for_user(&user.id)?;
        let habits = source.habits_for_user(&user.id)?;
        let completions = source.completions_for_user(&user.id)?;

        let in_window = |ts: DateTime<Utc>| ts >= start && ts <= now;

        let window_entries: Vec<&JournalEntry> =
            entries.iter().filter(|e| in_window(e.created_at)).collect();

        let mut emotion_distribution: BTreeMap<String, u32> = BTreeMap::new();
        for emotion in window_entries.iter().filter_map(|e| e.emotion.as_deref()) {
            *emotion_distribution.entry(emotion.to_string()).or_default() += 1;
        }

        let habit_completions = completion_counts(&habits, &completions, start, now);

        let today = local_date(now, self.tz);
        let days: BTreeSet<_> = entries
            .iter()
            .map(|e| local_date(e.created_at, self.tz))
            .collect();

        let weekly_activity = trailing_days(today, WEEK_DAYS)
            .into_iter()
            .map(|day| DayActivity {
                date: iso_date(day),
                day_name: short_day_name(day),
                entry_count: count_u32(
                    entries
                        .iter()
                        .filter(|e| local_date(e.created_at, self.tz) == day),
                ),
            })
            .collect();

        let mut recent: Vec<&JournalEntry> = entries.iter().collect();
        recent.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        let recent_entries = recent
            .into_iter()
            .take(request.recent_limit)
            .map(|entry| EntryWithHabits {
                completed_habits: completed_habits_of(&entry.id, &habits, &completions),
                entry: entry.clone(),
            })
            .collect();

        let stats = DashboardStats {
            total_entries: count_u32(window_entries.iter()),
            total_habits: count_u32(habits.iter()),
            current_streak: current_streak(&days, today),
            habit_completion_rate: completion_rate(&habit_completions),
        };

        tracing::debug!(
            user = %user.id,
            window_days = request.window_days,
            entries = stats.total_entries,
            streak = stats.current_streak,
            "dashboard aggregated"
        );

        Ok(DashboardResponse {
            stats,
            recent_entries,
            emotion_distribution,
            habit_completions,
            weekly_activity,
        })
    }
}

impl Default for DashboardAggregator {
    fn default() -> Self {
        Self::new(chrono_tz::UTC)
    }
}

/// `now - window_days`, or `Validation` when that falls outside the
/// representable date range.
fn window_start(now: DateTime<Utc>, window_days: u32) -> Result<DateTime<Utc>, DashboardError> {
    Duration::try_days(i64::from(window_days))
        .and_then(|window| now.checked_sub_signed(window))
        .ok_or_else(|| {
            DashboardError::Validation(format!("windowDays {window_days} is out of range"))
        })
}

/// Per-habit completion counts with `completedAt` in `[start, end]`, one row
/// per habit in the order given, zero counts included.
pub(crate) fn completion_counts(
    habits: &[Habit],
    completions: &[HabitCompletion],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Vec<HabitCompletionCount> {
    habits
        .iter()
        .map(|habit| HabitCompletionCount {
            id: habit.id.clone(),
            name: habit.name.clone(),
            completion_count: count_u32(completions.iter().filter(|c| {
                c.habit_id == habit.id && c.completed_at >= start && c.completed_at <= end
            })),
        })
        .collect()
}

/// Mean completions per habit, zero-count habits included.
fn completion_rate(counts: &[HabitCompletionCount]) -> f64 {
    if counts.is_empty() {
        return 0.0;
    }
    let total: u32 = counts.iter().map(|c| c.completion_count).sum();
    f64::from(total) / f64::from(count_u32(counts.iter()))
}

fn count_u32<I: Iterator>(iter: I) -> u32 {
    u32::try_from(iter.count()).unwrap_or(u32::MAX)
}
