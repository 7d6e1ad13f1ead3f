use clap::ValueEnum;

/// Built-in colour sets selectable from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub background: &'static str,
    pub border: &'static str,
    pub title: &'static str,
    pub text: &'static str,
    pub value: &'static str,
    pub accent: &'static str,
    pub ring: &'static str,
    pub muted: &'static str,
    pub divider: &'static str,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            background: "#0d1117",
            border: "#30363d",
            title: "#58a6ff",
            text: "#c9d1d9",
            value: "#f0f6fc",
            accent: "#f78166",
            ring: "#f78166",
            muted: "#8b949e",
            divider: "#30363d",
        }
    }

    pub fn light() -> Self {
        Self {
            background: "#fffefe",
            border: "#e4e2e2",
            title: "#2f80ed",
            text: "#434d58",
            value: "#151515",
            accent: "#fb8c00",
            ring: "#fb8c00",
            muted: "#464646",
            divider: "#e4e2e2",
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl From<ThemeName> for Theme {
    fn from(name: ThemeName) -> Self {
        match name {
            ThemeName::Dark => Theme::dark(),
            ThemeName::Light => Theme::light(),
        }
    }
}
