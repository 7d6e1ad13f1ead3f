use chrono::{DateTime, Utc};
use interfaces_github_contributions::index::GitHubGraphQLError;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::RepoContribution;
use crate::pipelines::github::api::ContributionsApi;
use crate::utils::{
    aggregate::RepoContributions,
    badge::render_top_repos_badge,
    ranking::rank_top_repositories,
    svg::SvgDocument,
    theme::Theme,
    year_windows::year_windows,
};

#[derive(Debug, Error)]
pub enum BuildTopReposBadgeError {
    #[error("FetchUserCreatedAt: {source}")]
    FetchUserCreatedAt {
        #[from]
        source: GitHubGraphQLError,
    },
}

pub struct TopReposBadge {
    pub repositories: Vec<RepoContribution>,
    pub document: SvgDocument,
}

pub async fn fetch_repository_contributions<A: ContributionsApi>(
    api: &A,
    login: &str,
    created_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> RepoContributions {
    let mut aggregation = RepoContributions::default();

    for window in year_windows(created_at, now) {
        match api.repository_contributions(login, &window).await {
            Ok(repos) => {
                debug!(year = window.year, repositories = repos.len(), "commit contributions fetched");
                aggregation.extend(repos);
            }
            Err(err) => {
                warn!(year = window.year, error = %err, "skipping year, commit contributions unavailable");
            }
        }
    }

    aggregation
}

pub async fn build_top_repos_badge<A: ContributionsApi>(
    api: &A,
    login: &str,
    limit: usize,
    now: DateTime<Utc>,
    theme: &Theme,
) -> Result<TopReposBadge, BuildTopReposBadgeError> {
    let created_at = api.user_created_at(login).await?;
    info!(login, %created_at, "fetching repository contributions");

    let merged = fetch_repository_contributions(api, login, created_at, now).await;
    let contributed = merged.len();

    let repositories = rank_top_repositories(merged.into_vec(), limit);
    info!(login, contributed, shown = repositories.len(), "repositories ranked");

    let document = render_top_repos_badge(login, &repositories, theme);

    Ok(TopReposBadge { repositories, document })
}
