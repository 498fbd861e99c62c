//! Calendar-day helpers in an explicit timezone.

use chrono::{DateTime, Days, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

/// Local calendar date of `ts` in `tz`.
#[must_use]
pub fn local_date(ts: DateTime<Utc>, tz: Tz) -> NaiveDate {
    ts.with_timezone(&tz).date_naive()
}

/// The day before `date`, saturating at the minimum date.
#[must_use]
pub fn previous_day(date: NaiveDate) -> NaiveDate {
    date.checked_sub_days(Days::new(1)).unwrap_or(date)
}

/// The `n` days ending at `today`, oldest first.
#[must_use]
pub fn trailing_days(today: NaiveDate, n: u32) -> Vec<NaiveDate> {
    (0..u64::from(n))
        .rev()
        .filter_map(|back| today.checked_sub_days(Days::new(back)))
        .collect()
}

/// First instant of `date` in `tz`. A day whose midnight falls in a DST gap
/// starts an hour later.
#[must_use]
pub fn start_of_day(date: NaiveDate, tz: Tz) -> Option<DateTime<Utc>> {
    [0, 1].into_iter().find_map(|hour| {
        let local = date.and_hms_opt(hour, 0, 0)?;
        tz.from_local_datetime(&local)
            .earliest()
            .map(|dt| dt.with_timezone(&Utc))
    })
}

/// Inclusive UTC bounds covering local days `from..=to`. `None` when `from`
/// is after `to` or the range leaves the calendar.
#[must_use]
pub fn local_day_range(
    from: NaiveDate,
    to: NaiveDate,
    tz: Tz,
) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    if from > to {
        return None;
    }
    let start = start_of_day(from, tz)?;
    let next = start_of_day(to.checked_add_days(Days::new(1))?, tz)?;
    let end = next.checked_sub_signed(chrono::Duration::nanoseconds(1))?;
    Some((start, end))
}

/// `YYYY-MM-DD`.
#[must_use]
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Short English weekday name, e.g. `Mon`.
#[must_use]
pub fn short_day_name(date: NaiveDate) -> String {
    date.format("%a").to_string()
}
