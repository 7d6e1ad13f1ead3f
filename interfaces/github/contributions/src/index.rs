use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::models::{
    CalendarCollection, CommitContributionsByRepository, ContributionCalendar, GraphQLResponse,
    RepositoryCollection, UserContributions, UserCreatedAt, UserData,
};

pub const GITHUB_GRAPHQL_URL: &str = "https://api.github.com/graphql";

/// Most repositories GitHub returns per `commitContributionsByRepository` call.
pub const MAX_REPOSITORIES_PER_WINDOW: u32 = 100;

pub struct GitHubGraphQLResult {
    pub body: String,
    pub status: StatusCode,
}

#[derive(Clone)]
pub struct GitHubGraphQLClient {
    client: Client,
    token: String,
    endpoint: String,
}

impl std::fmt::Debug for GitHubGraphQLClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubGraphQLClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl GitHubGraphQLClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            token: token.into(),
            endpoint: GITHUB_GRAPHQL_URL.to_string(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn post_query(
        &self,
        query: &str,
        variables: Value,
    ) -> Result<GitHubGraphQLResult, GitHubGraphQLError> {
        let payload = serde_json::json!({
            "query": query,
            "variables": variables,
        });

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Content-Type", "application/json")
            .header("User-Agent", "contribution-badges")
            .json(&payload)
            .send()
            .await
            .map_err(|source| GitHubGraphQLError::RequestSend { source })?;

        let status = response.status();

        let body = response
            .text()
            .await
            .map_err(|source| GitHubGraphQLError::ResponseRead { source })?;

        debug!(%status, bytes = body.len(), "GraphQL response received");

        Ok(GitHubGraphQLResult { body, status })
    }

    pub async fn fetch_user_created_at(
        &self,
        login: &str,
    ) -> Result<DateTime<Utc>, GitHubGraphQLError> {
        let graphql_query = r#"
            query getUserCreatedAt($login: String!) {
                user(login: $login) {
                    createdAt
                }
            }
        "#;

        let result = self
            .post_query(graphql_query, serde_json::json!({ "login": login }))
            .await?;
        let data: UserData<UserCreatedAt> = decode_response(result)?;

        data.user
            .map(|user| user.created_at)
            .ok_or_else(|| GitHubGraphQLError::UserNotFound { login: login.to_string() })
    }

    pub async fn fetch_contribution_calendar(
        &self,
        login: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<ContributionCalendar, GitHubGraphQLError> {
        let graphql_query = r#"
            query getContributionCalendar($login: String!, $from: DateTime!, $to: DateTime!) {
                user(login: $login) {
                    contributionsCollection(from: $from, to: $to) {
                        contributionCalendar {
                            totalContributions
                            weeks {
                                contributionDays {
                                    date
                                    contributionCount
                                }
                            }
                        }
                    }
                }
            }
        "#;

        let variables = serde_json::json!({
            "login": login,
            "from": from,
            "to": to,
        });

        let result = self.post_query(graphql_query, variables).await?;
        let data: UserData<UserContributions<CalendarCollection>> = decode_response(result)?;

        data.user
            .map(|user| user.contributions_collection.contribution_calendar)
            .ok_or_else(|| GitHubGraphQLError::UserNotFound { login: login.to_string() })
    }

    pub async fn fetch_commit_contributions_by_repository(
        &self,
        login: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<CommitContributionsByRepository>, GitHubGraphQLError> {
        let graphql_query = r#"
            query getCommitContributions($login: String!, $from: DateTime!, $to: DateTime!, $max: Int!) {
                user(login: $login) {
                    contributionsCollection(from: $from, to: $to) {
                        commitContributionsByRepository(maxRepositories: $max) {
                            contributions {
                                totalCount
                            }
                            repository {
                                nameWithOwner
                                stargazerCount
                                url
                                isPrivate
                            }
                        }
                    }
                }
            }
        "#;

        let variables = serde_json::json!({
            "login": login,
            "from": from,
            "to": to,
            "max": MAX_REPOSITORIES_PER_WINDOW,
        });

        let result = self.post_query(graphql_query, variables).await?;
        let data: UserData<UserContributions<RepositoryCollection>> = decode_response(result)?;

        data.user
            .map(|user| user.contributions_collection.commit_contributions_by_repository)
            .ok_or_else(|| GitHubGraphQLError::UserNotFound { login: login.to_string() })
    }
}

/// Checks the HTTP status and the GraphQL `errors` list, then hands back `data`.
pub fn decode_response<T: DeserializeOwned>(
    result: GitHubGraphQLResult,
) -> Result<T, GitHubGraphQLError> {
    let GitHubGraphQLResult { body, status } = result;

    if !status.is_success() {
        return Err(GitHubGraphQLError::UnexpectedStatus { status, body });
    }

    let parsed: GraphQLResponse<T> = serde_json::from_str(&body)?;

    if !parsed.errors.is_empty() {
        return Err(GitHubGraphQLError::GraphQL {
            messages: parsed.errors.into_iter().map(|error| error.message).collect(),
        });
    }

    parsed.data.ok_or(GitHubGraphQLError::DataMissing)
}

#[derive(Debug, Error)]
pub enum GitHubGraphQLError {
    #[error("RequestSend: {source}")]
    RequestSend {
        source: reqwest::Error,
    },

    #[error("ResponseRead: {source}")]
    ResponseRead {
        source: reqwest::Error,
    },

    #[error("UnexpectedStatus: {status}: {body}")]
    UnexpectedStatus {
        status: StatusCode,
        body: String,
    },

    #[error("DeserializeResponseBody: {source}")]
    DeserializeResponseBody {
        #[from]
        source: serde_json::Error,
    },

    #[error("GraphQL: {}", .messages.join("; "))]
    GraphQL {
        messages: Vec<String>,
    },

    #[error("Missing data field in GraphQL response")]
    DataMissing,

    #[error("UserNotFound: {login}")]
    UserNotFound {
        login: String,
    },
}
