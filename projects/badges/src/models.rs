use chrono::NaiveDate;

/// Contribution total for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContributionDay {
    pub date: NaiveDate,
    pub count: u32,
}

impl ContributionDay {
    pub fn new(date: NaiveDate, count: u32) -> Self {
        Self { date, count }
    }
}

/// Commit contributions to one repository, summed over the fetched windows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoContribution {
    pub name_with_owner: String,
    pub stargazer_count: u32,
    pub contribution_count: u32,
    pub url: String,
    pub is_private: bool,
}

pub const PLACEHOLDER_REPOSITORY: &str = "No public contributions yet";

impl RepoContribution {
    /// Row shown when no public repository survives ranking.
    pub fn placeholder() -> Self {
        Self {
            name_with_owner: PLACEHOLDER_REPOSITORY.to_string(),
            stargazer_count: 0,
            contribution_count: 0,
            url: String::new(),
            is_private: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreakStats {
    pub total_contributions: u64,
    pub current_streak: u32,
    pub current_streak_start: Option<NaiveDate>,
    pub current_streak_end: Option<NaiveDate>,
    pub longest_streak: u32,
    pub longest_streak_start: Option<NaiveDate>,
    pub longest_streak_end: Option<NaiveDate>,
    pub first_contribution_date: NaiveDate,
}
