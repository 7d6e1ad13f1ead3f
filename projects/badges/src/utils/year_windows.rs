use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// One calendar year of history, clamped to `now` for the current year.
/// GitHub rejects `contributionsCollection` ranges longer than a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearWindow {
    pub year: i32,
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

/// Windows from the account's creation year through the current year, both
/// inclusive, oldest first. All boundaries are UTC.
pub fn year_windows(created_at: DateTime<Utc>, now: DateTime<Utc>) -> Vec<YearWindow> {
    if created_at > now {
        return Vec::new();
    }

    (created_at.year()..=now.year())
        .filter_map(|year| {
            let from = NaiveDate::from_ymd_opt(year, 1, 1)?.and_hms_opt(0, 0, 0)?.and_utc();
            let end = NaiveDate::from_ymd_opt(year, 12, 31)?.and_hms_opt(23, 59, 59)?.and_utc();

            Some(YearWindow { year, from, to: end.min(now) })
        })
        .collect()
}
