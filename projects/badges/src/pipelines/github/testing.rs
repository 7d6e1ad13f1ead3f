use chrono::{DateTime, Utc};
use interfaces_github_contributions::index::GitHubGraphQLError;
use std::cell::RefCell;
use std::collections::HashMap;

use super::api::ContributionsApi;
use crate::models::{ContributionDay, RepoContribution};
use crate::utils::year_windows::YearWindow;

/// In-memory API: years without canned data fail like a broken request.
#[derive(Default)]
pub(crate) struct FakeApi {
    pub created_at: Option<DateTime<Utc>>,
    pub days: HashMap<i32, Vec<ContributionDay>>,
    pub repos: HashMap<i32, Vec<RepoContribution>>,
    pub requested_years: RefCell<Vec<i32>>,
}

fn year_failed(year: i32) -> GitHubGraphQLError {
    GitHubGraphQLError::GraphQL {
        messages: vec![format!("Something went wrong while executing your query for {year}")],
    }
}

impl ContributionsApi for FakeApi {
    async fn user_created_at(&self, login: &str) -> Result<DateTime<Utc>, GitHubGraphQLError> {
        self.created_at
            .ok_or_else(|| GitHubGraphQLError::UserNotFound { login: login.to_string() })
    }

    async fn contribution_days(
        &self,
        _login: &str,
        window: &YearWindow,
    ) -> Result<Vec<ContributionDay>, GitHubGraphQLError> {
        self.requested_years.borrow_mut().push(window.year);
        self.days.get(&window.year).cloned().ok_or_else(|| year_failed(window.year))
    }

    async fn repository_contributions(
        &self,
        _login: &str,
        window: &YearWindow,
    ) -> Result<Vec<RepoContribution>, GitHubGraphQLError> {
        self.requested_years.borrow_mut().push(window.year);
        self.repos.get(&window.year).cloned().ok_or_else(|| year_failed(window.year))
    }
}
