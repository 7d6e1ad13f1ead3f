use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use projects_badges::{
    cli::StreakArgs,
    config::{Config, ConfigError},
    output::{write_svg, WriteSvgError},
    pipelines::github::streak::index::{build_streak_badge, BuildStreakBadgeError},
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
    #[error("BuildStreakBadge: {source}")]
    BuildStreakBadge {
        #[source]
        source: BuildStreakBadgeError,
    },
    #[error("WriteSvg: {source}")]
    WriteSvg {
        #[source]
        source: WriteSvgError,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), MainError> {
    let args = StreakArgs::parse();

    utils_trace::init("info")
        .map_err(|source| MainError::TracingInit { source })?;

    run(args).await.inspect_err(|err| error!("{err}"))
}

async fn run(args: StreakArgs) -> Result<(), MainError> {
    let config = Config::from_env()
        .map_err(|source| MainError::Config { source })?;
    let client = config.client();
    let theme = Theme::from(args.common.theme);

    let badge = build_streak_badge(&client, &args.common.username, Utc::now(), &theme)
        .await
        .map_err(|source| MainError::BuildStreakBadge { source })?;

    write_svg(&args.common.output_path("streak"), &badge.document.to_svg_string())
        .await
        .map_err(|source| MainError::WriteSvg { source })?;

    Ok(())
}
