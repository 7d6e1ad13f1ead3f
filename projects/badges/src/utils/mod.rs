pub mod aggregate;
pub mod badge;
pub mod format;
pub mod ranking;
pub mod streak;
pub mod svg;
pub mod theme;
pub mod year_windows;
