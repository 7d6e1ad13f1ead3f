use chrono::NaiveDate;

use super::format::{format_count, format_range};
use super::svg::{Element, FontWeight, Stroke, SvgDocument, TextAnchor};
use super::theme::Theme;
use crate::models::{RepoContribution, StreakStats};

pub const STREAK_CARD_WIDTH: f64 = 495.0;
pub const STREAK_CARD_HEIGHT: f64 = 195.0;

pub const REPO_CARD_WIDTH: f64 = 495.0;
const REPO_HEADER_HEIGHT: f64 = 50.0;
const REPO_ROW_HEIGHT: f64 = 25.0;
const REPO_FOOTER_PADDING: f64 = 15.0;

fn text(
    x: f64,
    y: f64,
    content: impl Into<String>,
    size: f64,
    weight: FontWeight,
    anchor: TextAnchor,
    fill: &str,
) -> Element {
    Element::Text {
        x,
        y,
        content: content.into(),
        size,
        weight,
        anchor,
        fill: fill.to_string(),
    }
}

fn card(doc: &mut SvgDocument, theme: &Theme) {
    let (width, height) = (doc.width - 1.0, doc.height - 1.0);
    doc.push(Element::Rect {
        x: 0.5,
        y: 0.5,
        width,
        height,
        rx: 4.5,
        fill: theme.background.to_string(),
        stroke: Some(Stroke::new(theme.border, 1.0)),
    });
}

/// Three-column card: total contributions, current streak, longest streak.
pub fn render_streak_badge(stats: &StreakStats, today: NaiveDate, theme: &Theme) -> SvgDocument {
    let mut doc = SvgDocument::new(STREAK_CARD_WIDTH, STREAK_CARD_HEIGHT);
    card(&mut doc, theme);

    let column = STREAK_CARD_WIDTH / 3.0;
    let (left, middle, right) = (column / 2.0, column * 1.5, column * 2.5);

    for x in [column, column * 2.0] {
        doc.push(Element::Line {
            x1: x,
            y1: 28.0,
            x2: x,
            y2: 170.0,
            stroke: Stroke::new(theme.divider, 1.0),
        });
    }

    // Total contributions
    doc.push(text(left, 79.0, format_count(stats.total_contributions), 28.0, FontWeight::Bold, TextAnchor::Middle, theme.value))
        .push(text(left, 115.0, "Total Contributions", 14.0, FontWeight::Normal, TextAnchor::Middle, theme.text))
        .push(text(
            left,
            145.0,
            format_range(stats.first_contribution_date, today, today),
            12.0,
            FontWeight::Normal,
            TextAnchor::Middle,
            theme.muted,
        ));

    // Current streak
    let current_range = match (stats.current_streak_start, stats.current_streak_end) {
        (Some(start), Some(end)) => format_range(start, end, today),
        _ => "No current streak".to_string(),
    };
    doc.push(Element::Circle {
        cx: middle,
        cy: 71.0,
        r: 40.0,
        fill: None,
        stroke: Some(Stroke::new(theme.ring, 5.0)),
    })
    .push(text(middle, 80.0, format_count(u64::from(stats.current_streak)), 28.0, FontWeight::Bold, TextAnchor::Middle, theme.value))
    .push(text(middle, 140.0, "Current Streak", 14.0, FontWeight::Bold, TextAnchor::Middle, theme.accent))
    .push(text(middle, 165.0, current_range, 12.0, FontWeight::Normal, TextAnchor::Middle, theme.muted));

    // Longest streak
    let longest_range = match (stats.longest_streak_start, stats.longest_streak_end) {
        (Some(start), Some(end)) => format_range(start, end, today),
        _ => "No streak yet".to_string(),
    };
    doc.push(text(right, 79.0, format_count(u64::from(stats.longest_streak)), 28.0, FontWeight::Bold, TextAnchor::Middle, theme.value))
        .push(text(right, 115.0, "Longest Streak", 14.0, FontWeight::Normal, TextAnchor::Middle, theme.text))
        .push(text(right, 145.0, longest_range, 12.0, FontWeight::Normal, TextAnchor::Middle, theme.muted));

    doc
}

pub fn repo_card_height(rows: usize) -> f64 {
    REPO_HEADER_HEIGHT + rows as f64 * REPO_ROW_HEIGHT + REPO_FOOTER_PADDING
}

/// Title row followed by one row per repository: rank, name, stars, commits.
pub fn render_top_repos_badge(login: &str, repos: &[RepoContribution], theme: &Theme) -> SvgDocument {
    let mut doc = SvgDocument::new(REPO_CARD_WIDTH, repo_card_height(repos.len()));
    card(&mut doc, theme);

    doc.push(text(
        25.0,
        35.0,
        format!("{login}'s Top Contributed Repositories"),
        18.0,
        FontWeight::Bold,
        TextAnchor::Start,
        theme.title,
    ));

    for (rank, repo) in repos.iter().enumerate() {
        let y = REPO_HEADER_HEIGHT + rank as f64 * REPO_ROW_HEIGHT + 17.0;

        doc.push(text(25.0, y, format!("{}.", rank + 1), 14.0, FontWeight::Normal, TextAnchor::Start, theme.muted))
            .push(text(50.0, y, repo.name_with_owner.as_str(), 14.0, FontWeight::Bold, TextAnchor::Start, theme.text))
            .push(text(
                380.0,
                y,
                format!("\u{2605} {}", format_count(u64::from(repo.stargazer_count))),
                13.0,
                FontWeight::Normal,
                TextAnchor::End,
                theme.muted,
            ))
            .push(text(
                470.0,
                y,
                format!("{} commits", format_count(u64::from(repo.contribution_count))),
                13.0,
                FontWeight::Normal,
                TextAnchor::End,
                theme.accent,
            ));
    }

    doc
}
