use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

use crate::models::{ContributionDay, RepoContribution};

/// Per-day counts merged across year windows, one entry per date.
#[derive(Debug, Default, Clone)]
pub struct DailyContributions {
    by_date: BTreeMap<NaiveDate, u32>,
}

impl DailyContributions {
    /// A date seen in two windows keeps the larger count instead of being
    /// counted twice.
    pub fn merge_day(&mut self, day: ContributionDay) {
        let count = self.by_date.entry(day.date).or_insert(0);
        *count = (*count).max(day.count);
    }

    pub fn extend(&mut self, days: impl IntoIterator<Item = ContributionDay>) {
        for day in days {
            self.merge_day(day);
        }
    }

    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.by_date.values().map(|count| u64::from(*count)).sum()
    }

    /// Ascending by date.
    pub fn into_days(self) -> Vec<ContributionDay> {
        self.by_date
            .into_iter()
            .map(|(date, count)| ContributionDay { date, count })
            .collect()
    }
}

/// Repository contributions keyed by `name_with_owner`, in first-seen order.
#[derive(Debug, Default, Clone)]
pub struct RepoContributions {
    entries: Vec<RepoContribution>,
    index: HashMap<String, usize>,
}

impl RepoContributions {
    /// Sums the contribution count into an existing entry. Stars, url and
    /// visibility follow the latest observation.
    pub fn merge(&mut self, repo: RepoContribution) {
        match self.index.get(&repo.name_with_owner) {
            Some(&position) => {
                let entry = &mut self.entries[position];
                entry.contribution_count = entry.contribution_count.saturating_add(repo.contribution_count);
                entry.stargazer_count = repo.stargazer_count;
                entry.url = repo.url;
                entry.is_private = repo.is_private;
            }
            None => {
                self.index.insert(repo.name_with_owner.clone(), self.entries.len());
                self.entries.push(repo);
            }
        }
    }

    pub fn extend(&mut self, repos: impl IntoIterator<Item = RepoContribution>) {
        for repo in repos {
            self.merge(repo);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_vec(self) -> Vec<RepoContribution> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn day(y: i32, m: u32, d: u32, count: u32) -> ContributionDay {
        ContributionDay::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), count)
    }

    fn repo(name: &str, contributions: u32) -> RepoContribution {
        RepoContribution {
            name_with_owner: name.to_string(),
            stargazer_count: 1,
            contribution_count: contributions,
            url: format!("https://github.com/{name}"),
            is_private: false,
        }
    }

    #[test]
    fn overlapping_days_keep_the_maximum() {
        let mut days = DailyContributions::default();

        days.extend([day(2023, 12, 31, 2), day(2024, 1, 1, 1)]);
        days.extend([day(2023, 12, 31, 5), day(2024, 1, 1, 0)]);

        assert_eq!(days.into_days(), vec![day(2023, 12, 31, 5), day(2024, 1, 1, 1)]);
    }

    #[test]
    fn merging_a_series_twice_is_idempotent() {
        let series = vec![day(2024, 1, 1, 3), day(2024, 1, 2, 0), day(2024, 1, 3, 7)];

        let mut once = DailyContributions::default();
        once.extend(series.clone());

        let mut twice = DailyContributions::default();
        twice.extend(series.clone());
        twice.extend(series);

        assert_eq!(once.total(), 10);
        assert_eq!(twice.total(), once.total());
        assert_eq!(twice.len(), 3);
    }

    #[test]
    fn days_come_out_sorted() {
        let mut days = DailyContributions::default();

        days.extend([day(2024, 3, 1, 1), day(2022, 5, 1, 1), day(2023, 1, 1, 1)]);

        let dates: Vec<NaiveDate> = days.into_days().into_iter().map(|d| d.date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
    }

    #[test]
    fn repository_counts_are_summed_across_years() {
        let mut repos = RepoContributions::default();

        repos.merge(repo("octocat/a", 5));
        repos.merge(repo("octocat/a", 3));

        let merged = repos.into_vec();
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].contribution_count, 8);
    }

    #[test]
    fn summed_counts_saturate_instead_of_overflowing() {
        let mut repos = RepoContributions::default();

        repos.merge(repo("octocat/a", u32::MAX - 1));
        repos.merge(repo("octocat/a", 5));

        assert_eq!(repos.into_vec()[0].contribution_count, u32::MAX);
    }

    #[test]
    fn repositories_keep_first_seen_order() {
        let mut repos = RepoContributions::default();

        repos.extend([repo("b/two", 1), repo("a/one", 1), repo("b/two", 4), repo("c/three", 2)]);

        let names: Vec<String> = repos.into_vec().into_iter().map(|r| r.name_with_owner).collect();
        assert_eq!(names, vec!["b/two", "a/one", "c/three"]);
    }

    #[test]
    fn latest_observation_refreshes_metadata() {
        let mut repos = RepoContributions::default();
        let mut newer = repo("octocat/a", 1);
        newer.stargazer_count = 99;
        newer.is_private = true;

        repos.merge(repo("octocat/a", 1));
        repos.merge(newer);

        let merged = repos.into_vec();
        assert_eq!(merged[0].stargazer_count, 99);
        assert!(merged[0].is_private);
        assert_eq!(merged[0].contribution_count, 2);
    }
}
