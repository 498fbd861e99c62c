//! Application-wide usage statistics.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};

use note_core::responses::{GlobalInsights, GlobalStats, GlobalSummary};

use crate::error::DashboardError;
use crate::source::HistorySource;

/// Global counters and ratios as of the current instant.
///
/// # Errors
///
/// Any error from `source`.
pub fn global_stats<S: HistorySource + ?Sized>(source: &S) -> Result<GlobalStats, DashboardError> {
    global_stats_at(source, Utc::now())
}

/// Global counters and ratios as of `now`.
///
/// `avgHabitsPerUser` averages over users that have at least one habit.
///
/// # Errors
///
/// Any error from `source`.
pub fn global_stats_at<S: HistorySource + ?Sized>(
    source: &S,
    now: DateTime<Utc>,
) -> Result<GlobalStats, DashboardError> {
    let week_ago = now - Duration::days(7);

    let mut total_entries = 0u32;
    let mut total_habits = 0u32;
    let mut total_completions = 0u32;
    let mut entries_last_week = 0u32;
    let mut users_with_habits = 0u32;
    let mut emotion_distribution: BTreeMap<String, u32> = BTreeMap::new();

    let users = source.users()?;
    for user in &users {
        let entries = source.entries_for_user(&user.id)?;
        let habits = source.habits_for_user(&user.id)?;
        let completions = source.completions_for_user(&user.id)?;

        total_entries += saturating_len(entries.len());
        total_habits += saturating_len(habits.len());
        total_completions += saturating_len(completions.len());
        if !habits.is_empty() {
            users_with_habits += 1;
        }

        for entry in &entries {
            if entry.created_at > week_ago {
                entries_last_week += 1;
            }
            if let Some(emotion) = entry.emotion.as_deref() {
                *emotion_distribution.entry(emotion.to_string()).or_default() += 1;
            }
        }
    }
    let total_users = saturating_len(users.len());

    Ok(GlobalStats {
        timestamp: now,
        summary: GlobalSummary {
            total_users,
            total_entries,
            total_habits,
            total_completions,
            entries_last_week,
        },
        insights: GlobalInsights {
            avg_habits_per_user: ratio(total_habits, users_with_habits),
            emotion_distribution,
            avg_entries_per_user: ratio(total_entries, total_users),
            completion_rate: ratio(total_completions, total_habits),
        },
    })
}

/// `num / den` rounded to two decimals; 0 when `den` is 0.
fn ratio(num: u32, den: u32) -> f64 {
    if den == 0 {
        return 0.0;
    }
    (f64::from(num) / f64::from(den) * 100.0).round() / 100.0
}

fn saturating_len(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}
