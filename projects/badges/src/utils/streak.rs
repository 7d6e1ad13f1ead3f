use chrono::NaiveDate;

use crate::models::{ContributionDay, StreakStats};

/// Computes totals, the longest streak and the current streak from a day
/// series. `today` decides whether a zero-count most recent day is still
/// in progress and so does not break the current streak.
///
/// A run only continues across calendar-adjacent dates. A date missing from
/// the series, such as a year whose fetch failed, ends the run like a
/// zero-count day.
pub fn compute_streak_stats(days: &[ContributionDay], today: NaiveDate) -> StreakStats {
    let mut sorted = days.to_vec();
    sorted.sort_by_key(|day| day.date);

    let mut total_contributions = 0u64;
    let mut first_contribution = None;

    let mut running = 0u32;
    let mut running_start = None;
    let mut longest_streak = 0u32;
    let mut longest_streak_start = None;
    let mut longest_streak_end = None;
    let mut previous: Option<NaiveDate> = None;

    for day in &sorted {
        total_contributions += u64::from(day.count);

        let adjacent = previous.is_some_and(|prev| follows(prev, day.date));
        previous = Some(day.date);

        if day.count == 0 {
            running = 0;
            continue;
        }

        if !adjacent {
            running = 0;
        }

        first_contribution.get_or_insert(day.date);

        if running == 0 {
            running_start = Some(day.date);
        }
        running += 1;

        // Strict comparison: ties keep the earlier run.
        if running > longest_streak {
            longest_streak = running;
            longest_streak_start = running_start;
            longest_streak_end = Some(day.date);
        }
    }

    let first_contribution_date = first_contribution
        .or_else(|| sorted.first().map(|day| day.date))
        .unwrap_or(today);

    let mut recent = sorted.iter().rev().peekable();
    let mut later = None;
    if let Some(skipped) = recent.next_if(|day| day.date == today && day.count == 0) {
        tracing::trace!(%today, "today has no contributions yet, not breaking the streak");
        later = Some(skipped.date);
    }

    let mut current_streak = 0u32;
    let mut current_streak_start = None;
    let mut current_streak_end = None;

    for day in recent {
        if day.count == 0 || later.is_some_and(|next| !follows(day.date, next)) {
            break;
        }
        later = Some(day.date);
        current_streak_end.get_or_insert(day.date);
        current_streak_start = Some(day.date);
        current_streak += 1;
    }

    StreakStats {
        total_contributions,
        current_streak,
        current_streak_start,
        current_streak_end,
        longest_streak,
        longest_streak_start,
        longest_streak_end,
        first_contribution_date,
    }
}

fn follows(prev: NaiveDate, date: NaiveDate) -> bool {
    prev.succ_opt() == Some(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn series(start: NaiveDate, counts: &[u32]) -> Vec<ContributionDay> {
        start
            .iter_days()
            .zip(counts)
            .map(|(date, count)| ContributionDay::new(date, *count))
            .collect()
    }

    #[test]
    fn gap_splits_longest_and_current() {
        let days = series(date(2024, 1, 1), &[1, 1, 0, 1]);

        let stats = compute_streak_stats(&days, date(2024, 1, 4));

        assert_eq!(stats.total_contributions, 3);
        assert_eq!(stats.longest_streak, 2);
        assert_eq!(stats.longest_streak_start, Some(date(2024, 1, 1)));
        assert_eq!(stats.longest_streak_end, Some(date(2024, 1, 2)));
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.current_streak_start, Some(date(2024, 1, 4)));
        assert_eq!(stats.current_streak_end, Some(date(2024, 1, 4)));
    }

    #[test]
    fn zero_days_after_the_last_contribution_end_the_current_streak() {
        let days = series(date(2024, 1, 1), &[1, 1, 0, 1, 0, 0]);

        let stats = compute_streak_stats(&days, date(2024, 1, 6));

        assert_eq!(stats.longest_streak, 2);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.current_streak_start, None);
        assert_eq!(stats.current_streak_end, None);
    }

    #[test]
    fn empty_today_does_not_break_the_streak() {
        let days = series(date(2024, 1, 1), &[0, 2, 3, 0]);

        let stats = compute_streak_stats(&days, date(2024, 1, 4));

        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.current_streak_start, Some(date(2024, 1, 2)));
        assert_eq!(stats.current_streak_end, Some(date(2024, 1, 3)));
    }

    #[test]
    fn empty_yesterday_breaks_the_streak() {
        let days = series(date(2024, 1, 1), &[0, 2, 3, 0]);

        let stats = compute_streak_stats(&days, date(2024, 1, 5));

        assert_eq!(stats.current_streak, 0);
    }

    #[test]
    fn all_nonzero_series_is_one_streak() {
        let days = series(date(2023, 12, 20), &[4; 30]);
        let today = date(2024, 1, 18);

        let stats = compute_streak_stats(&days, today);

        assert_eq!(stats.longest_streak, 30);
        assert_eq!(stats.current_streak, 30);
        assert_eq!(stats.current_streak_start, Some(date(2023, 12, 20)));
        assert_eq!(stats.current_streak_end, Some(today));
        assert_eq!(stats.total_contributions, 120);
    }

    #[test]
    fn all_zero_series_has_no_streaks() {
        let days = series(date(2024, 2, 1), &[0; 10]);

        let stats = compute_streak_stats(&days, date(2024, 2, 10));

        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.longest_streak, 0);
        assert_eq!(stats.longest_streak_start, None);
        assert_eq!(stats.longest_streak_end, None);
        assert_eq!(stats.current_streak_start, None);
        assert_eq!(stats.first_contribution_date, date(2024, 2, 1));
    }

    #[test]
    fn single_day_series() {
        let day = date(2024, 5, 5);

        let stats = compute_streak_stats(&[ContributionDay::new(day, 9)], day);

        assert_eq!(
            stats,
            StreakStats {
                total_contributions: 9,
                current_streak: 1,
                current_streak_start: Some(day),
                current_streak_end: Some(day),
                longest_streak: 1,
                longest_streak_start: Some(day),
                longest_streak_end: Some(day),
                first_contribution_date: day,
            }
        );
    }

    #[test]
    fn empty_series_falls_back_to_today() {
        let today = date(2024, 7, 1);

        let stats = compute_streak_stats(&[], today);

        assert_eq!(stats.total_contributions, 0);
        assert_eq!(stats.longest_streak, 0);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.first_contribution_date, today);
    }

    #[test]
    fn equal_runs_keep_the_first() {
        let days = series(date(2024, 1, 1), &[1, 1, 0, 1, 1, 0]);

        let stats = compute_streak_stats(&days, date(2024, 1, 6));

        assert_eq!(stats.longest_streak, 2);
        assert_eq!(stats.longest_streak_start, Some(date(2024, 1, 1)));
        assert_eq!(stats.longest_streak_end, Some(date(2024, 1, 2)));
    }

    #[test]
    fn first_contribution_skips_leading_zero_days() {
        let days = series(date(2024, 1, 1), &[0, 0, 0, 5, 0]);

        let stats = compute_streak_stats(&days, date(2024, 1, 5));

        assert_eq!(stats.first_contribution_date, date(2024, 1, 4));
        assert_eq!(stats.current_streak, 1);
    }

    #[test]
    fn input_order_does_not_matter() {
        let mut days = series(date(2024, 1, 1), &[3, 0, 1, 1, 1, 0, 2]);
        let today = date(2024, 1, 7);
        let expected = compute_streak_stats(&days, today);

        days.reverse();
        days.swap(1, 4);

        assert_eq!(compute_streak_stats(&days, today), expected);
        assert_eq!(expected.longest_streak, 3);
        assert_eq!(expected.longest_streak_start, Some(date(2024, 1, 3)));
    }

    #[test]
    fn missing_dates_split_runs() {
        let mut days = series(date(2021, 12, 30), &[1, 1]);
        days.extend(series(date(2023, 1, 1), &[1, 1]));
        let today = date(2023, 1, 2);

        let stats = compute_streak_stats(&days, today);

        assert_eq!(stats.longest_streak, 2);
        assert_eq!(stats.longest_streak_start, Some(date(2021, 12, 30)));
        assert_eq!(stats.longest_streak_end, Some(date(2021, 12, 31)));
        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.current_streak_start, Some(date(2023, 1, 1)));
        assert_eq!(stats.current_streak_end, Some(today));
    }

    #[test]
    fn missing_yesterday_breaks_a_streak_held_over_an_empty_today() {
        let mut days = series(date(2024, 1, 1), &[3, 3]);
        days.push(ContributionDay::new(date(2024, 1, 5), 0));

        let stats = compute_streak_stats(&days, date(2024, 1, 5));

        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.current_streak_start, None);
    }

    #[test]
    fn streaks_never_exceed_series_length() {
        let patterns: [&[u32]; 4] = [&[1, 0, 1], &[0], &[2, 2, 2, 2], &[0, 1, 1, 0, 1, 1, 1]];

        for counts in patterns {
            let days = series(date(2024, 3, 1), counts);
            let today = days.last().map(|d| d.date).unwrap();

            let stats = compute_streak_stats(&days, today);

            assert!(stats.longest_streak as usize <= days.len());
            assert!(stats.current_streak <= stats.longest_streak);
        }
    }
}
