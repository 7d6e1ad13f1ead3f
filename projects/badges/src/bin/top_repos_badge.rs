use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use projects_badges::{
    cli::TopReposArgs,
    config::{Config, ConfigError},
    output::{write_svg, WriteSvgError},
    pipelines::github::top_repos::index::{build_top_repos_badge, BuildTopReposBadgeError},
    utils::theme::Theme,
};
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum MainError {
    #[error("TracingInit: {source}")]
    TracingInit {
        #[source]
        source: utils_trace::TracingInitError,
    },
    #[error("Config: {source}")]
    Config {
        #[source]
        source: ConfigError,
    },
    #[error("BuildTopReposBadge: {source}")]
    BuildTopReposBadge {
        #[source]
        source: BuildTopReposBadgeError,
    },
    #[error("WriteSvg: {source}")]
    WriteSvg {
        #[source]
        source: WriteSvgError,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), MainError> {
    let args = TopReposArgs::parse();

    utils_trace::init("info")
        .map_err(|source| MainError::TracingInit { source })?;

    run(args).await.inspect_err(|err| error!("{err}"))
}

async fn run(args: TopReposArgs) -> Result<(), MainError> {
    let config = Config::from_env()
        .map_err(|source| MainError::Config { source })?;
    let client = config.client();
    let theme = Theme::from(args.common.theme);

    let badge = build_top_repos_badge(
        &client,
        &args.common.username,
        usize::from(args.limit),
        Utc::now(),
        &theme,
    )
    .await
    .map_err(|source| MainError::BuildTopReposBadge { source })?;

    write_svg(&args.common.output_path("top-repos"), &badge.document.to_svg_string())
        .await
        .map_err(|source| MainError::WriteSvg { source })?;

    Ok(())
}
