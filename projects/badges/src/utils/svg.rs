//! Minimal SVG document model.
//!
//! Badges are assembled as a flat list of typed primitives and serialized
//! once at the end, so layout can be asserted on without parsing markup.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    fn as_str(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Normal,
    Bold,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub color: String,
    pub width: f64,
}

impl Stroke {
    pub fn new(color: impl Into<String>, width: f64) -> Self {
        Self { color: color.into(), width }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        rx: f64,
        fill: String,
        stroke: Option<Stroke>,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: Stroke,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        fill: Option<String>,
        stroke: Option<Stroke>,
    },
    Text {
        x: f64,
        y: f64,
        content: String,
        size: f64,
        weight: FontWeight,
        anchor: TextAnchor,
        fill: String,
    },
}

impl Element {
    /// Visible text of a `Text` element.
    pub fn text(&self) -> Option<&str> {
        match self {
            Element::Text { content, .. } => Some(content.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    pub width: f64,
    pub height: f64,
    pub font_family: String,
    elements: Vec<Element>,
}

pub const DEFAULT_FONT_FAMILY: &str = "'Segoe UI', Ubuntu, 'Helvetica Neue', Sans-Serif";

impl SvgDocument {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            elements: Vec::new(),
        }
    }

    pub fn push(&mut self, element: Element) -> &mut Self {
        self.elements.push(element);
        self
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// All text content in document order.
    pub fn texts(&self) -> Vec<&str> {
        self.elements.iter().filter_map(Element::text).collect()
    }

    pub fn to_svg_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SvgDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="{font}">"#,
            w = num(self.width),
            h = num(self.height),
            font = escape_xml(&self.font_family),
        )?;
        for element in &self.elements {
            writeln!(f, "  {element}")?;
        }
        writeln!(f, "</svg>")
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Rect { x, y, width, height, rx, fill, stroke } => {
                write!(
                    f,
                    r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{}""#,
                    num(*x),
                    num(*y),
                    num(*width),
                    num(*height),
                    num(*rx),
                    escape_xml(fill),
                )?;
                write_stroke(f, stroke.as_ref())?;
                write!(f, "/>")
            }
            Element::Line { x1, y1, x2, y2, stroke } => {
                write!(
                    f,
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
                    num(*x1),
                    num(*y1),
                    num(*x2),
                    num(*y2),
                )?;
                write_stroke(f, Some(stroke))?;
                write!(f, "/>")
            }
            Element::Circle { cx, cy, r, fill, stroke } => {
                write!(
                    f,
                    r#"<circle cx="{}" cy="{}" r="{}" fill="{}""#,
                    num(*cx),
                    num(*cy),
                    num(*r),
                    fill.as_deref().map(escape_xml).unwrap_or_else(|| "none".to_string()),
                )?;
                write_stroke(f, stroke.as_ref())?;
                write!(f, "/>")
            }
            Element::Text { x, y, content, size, weight, anchor, fill } => {
                write!(
                    f,
                    r#"<text x="{}" y="{}" font-size="{}" text-anchor="{}" fill="{}""#,
                    num(*x),
                    num(*y),
                    num(*size),
                    anchor.as_str(),
                    escape_xml(fill),
                )?;
                if *weight == FontWeight::Bold {
                    write!(f, r#" font-weight="bold""#)?;
                }
                write!(f, ">{}</text>", escape_xml(content))
            }
        }
    }
}

fn write_stroke(f: &mut fmt::Formatter<'_>, stroke: Option<&Stroke>) -> fmt::Result {
    match stroke {
        Some(stroke) => write!(
            f,
            r#" stroke="{}" stroke-width="{}""#,
            escape_xml(&stroke.color),
            num(stroke.width)
        ),
        None => Ok(()),
    }
}

/// Coordinates without a trailing `.0`.
fn num(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        let formatted = format!("{value:.2}");
        formatted.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

pub fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
