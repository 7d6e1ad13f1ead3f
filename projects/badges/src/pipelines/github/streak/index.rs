use chrono::{DateTime, Utc};
use interfaces_github_contributions::index::GitHubGraphQLError;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::StreakStats;
use crate::pipelines::github::api::ContributionsApi;
use crate::utils::{
    aggregate::DailyContributions,
    badge::render_streak_badge,
    streak::compute_streak_stats,
    svg::SvgDocument,
    theme::Theme,
    year_windows::year_windows,
};

#[derive(Debug, Error)]
pub enum BuildStreakBadgeError {
    #[error("FetchUserCreatedAt: {source}")]
    FetchUserCreatedAt {
        #[from]
        source: GitHubGraphQLError,
    },
}

pub struct StreakBadge {
    pub stats: StreakStats,
    pub document: SvgDocument,
}

/// Walks the account's history one calendar year at a time. A year whose
/// request fails is logged and left out; the rest still count.
pub async fn fetch_contribution_days<A: ContributionsApi>(
    api: &A,
    login: &str,
    created_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> DailyContributions {
    let mut aggregation = DailyContributions::default();

    for window in year_windows(created_at, now) {
        match api.contribution_days(login, &window).await {
            Ok(days) => {
                debug!(year = window.year, days = days.len(), "contribution calendar fetched");
                aggregation.extend(days);
            }
            Err(err) => {
                warn!(year = window.year, error = %err, "skipping year, contribution calendar unavailable");
            }
        }
    }

    aggregation
}

pub async fn build_streak_badge<A: ContributionsApi>(
    api: &A,
    login: &str,
    now: DateTime<Utc>,
    theme: &Theme,
) -> Result<StreakBadge, BuildStreakBadgeError> {
    let created_at = api.user_created_at(login).await?;
    info!(login, %created_at, "fetching contribution history");

    let days = fetch_contribution_days(api, login, created_at, now)
        .await
        .into_days();

    let today = now.date_naive();
    let stats = compute_streak_stats(&days, today);

    info!(
        login,
        days = days.len(),
        total = stats.total_contributions,
        current = stats.current_streak,
        longest = stats.longest_streak,
        "streak stats computed"
    );

    let document = render_streak_badge(&stats, today, theme);

    Ok(StreakBadge { stats, document })
}
