use clap::{Args, Parser};
use std::path::PathBuf;

use crate::output::default_output_path;
use crate::utils::theme::ThemeName;

#[derive(Args, Clone, Debug)]
pub struct CommonArgs {
    #[arg(help = "GitHub username")]
    pub username: String,

    #[arg(short, long, help = "Where to write the SVG [default: generated/<username>-<badge>.svg]")]
    pub output: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = ThemeName::Dark, help = "Colour theme")]
    pub theme: ThemeName,
}

impl CommonArgs {
    pub fn output_path(&self, kind: &str) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.username, kind))
    }
}

#[derive(Parser, Debug)]
#[command(name = "streak_badge")]
#[command(about = "Render a GitHub contribution streak badge as SVG")]
#[command(version)]
pub struct StreakArgs {
    #[clap(flatten)]
    pub common: CommonArgs,
}

#[derive(Parser, Debug)]
#[command(name = "top_repos_badge")]
#[command(about = "Render a badge of the repositories a GitHub user committed to most")]
#[command(version)]
pub struct TopReposArgs {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[arg(
        short = 'n',
        long,
        default_value_t = 5,
        value_parser = clap::value_parser!(u16).range(1..),
        help = "Number of repositories to show"
    )]
    pub limit: u16,
}
