use chrono::{DateTime, Utc};
use interfaces_github_contributions::index::{GitHubGraphQLClient, GitHubGraphQLError};

use crate::models::{ContributionDay, RepoContribution};
use crate::utils::year_windows::YearWindow;

/// The queries the badge pipelines need, one window at a time.
#[allow(async_fn_in_trait)]
pub trait ContributionsApi {
    async fn user_created_at(&self, login: &str) -> Result<DateTime<Utc>, GitHubGraphQLError>;

    async fn contribution_days(
        &self,
        login: &str,
        window: &YearWindow,
    ) -> Result<Vec<ContributionDay>, GitHubGraphQLError>;

    async fn repository_contributions(
        &self,
        login: &str,
        window: &YearWindow,
    ) -> Result<Vec<RepoContribution>, GitHubGraphQLError>;
}

impl ContributionsApi for GitHubGraphQLClient {
    async fn user_created_at(&self, login: &str) -> Result<DateTime<Utc>, GitHubGraphQLError> {
        self.fetch_user_created_at(login).await
    }

    async fn contribution_days(
        &self,
        login: &str,
        window: &YearWindow,
    ) -> Result<Vec<ContributionDay>, GitHubGraphQLError> {
        let calendar = self
            .fetch_contribution_calendar(login, window.from, window.to)
            .await?;

        Ok(calendar
            .days()
            .map(|day| ContributionDay::new(day.date, day.contribution_count))
            .collect())
    }

    async fn repository_contributions(
        &self,
        login: &str,
        window: &YearWindow,
    ) -> Result<Vec<RepoContribution>, GitHubGraphQLError> {
        let contributions = self
            .fetch_commit_contributions_by_repository(login, window.from, window.to)
            .await?;

        Ok(contributions
            .into_iter()
            .map(|entry| RepoContribution {
                name_with_owner: entry.repository.name_with_owner,
                stargazer_count: entry.repository.stargazer_count,
                contribution_count: entry.contributions.total_count,
                url: entry.repository.url,
                is_private: entry.repository.is_private,
            })
            .collect())
    }
}
