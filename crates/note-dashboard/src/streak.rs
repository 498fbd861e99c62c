//! Consecutive-day journaling streak.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::calendar::previous_day;

/// Length of the run of consecutive journaling days ending today, or ending
/// yesterday when today has no entry yet. Anything older is no streak.
#[must_use]
pub fn current_streak(days: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    let yesterday = previous_day(today);
    let mut cursor = if days.contains(&today) {
        today
    } else if days.contains(&yesterday) {
        yesterday
    } else {
        return 0;
    };

    let mut streak = 0;
    while days.contains(&cursor) {
        streak += 1;
        let prev = previous_day(cursor);
        if prev == cursor {
            break;
        }
        cursor = prev;
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;
    use rstest::rstest;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn days_ago(offsets: &[u64]) -> BTreeSet<NaiveDate> {
        offsets
            .iter()
            .map(|n| today().checked_sub_days(Days::new(*n)).unwrap())
            .collect()
    }

    #[rstest]
    #[case(&[], 0)]
    #[case(&[0], 1)]
    #[case(&[0, 1], 2)]
    #[case(&[1], 1)]
    #[case(&[1, 2, 3], 3)]
    #[case(&[3], 0)]
    #[case(&[2, 3, 4], 0)]
    #[case(&[0, 1, 3, 4], 2)]
    #[case(&[0, 2], 1)]
    fn streak_cases(#[case] offsets: &[u64], #[case] expected: u32) {
        assert_eq!(current_streak(&days_ago(offsets), today()), expected);
    }

    #[test]
    fn future_dates_do_not_count() {
        let mut days = days_ago(&[0]);
        days.insert(today().succ_opt().unwrap());
        assert_eq!(current_streak(&days, today()), 1);
    }
}
