//! Viewport geometry and trigger start positions.
//!
//! A start position pairs an edge of the trigger element with a line in the
//! viewport: `"top 85%"` fires once the element's top edge has risen to 85%
//! of the way down the viewport. Element rectangles are in document space.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use vitrine_core::{Rect, VitrineError};

/// Opaque handle to a host element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u32);

/// The visible window onto the document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Document scroll offset.
    pub scroll_y: f32,
    /// Viewport width.
    pub width: f32,
    /// Viewport height.
    pub height: f32,
}

impl Viewport {
    /// Creates a viewport scrolled to the top.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            scroll_y: 0.0,
            width,
            height,
        }
    }
}

/// Which line of the element is compared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Edge {
    /// Top edge.
    Top,
    /// Vertical center.
    Center,
    /// Bottom edge.
    Bottom,
}

/// Where the viewport line sits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportLine {
    /// Fraction of the viewport height from its top (0.85 = 85%).
    Fraction(f32),
    /// Pixels from the viewport top.
    Pixels(f32),
}

/// A viewport-crossing threshold such as `"top 85%"`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct TriggerStart {
    /// Element line.
    pub edge: Edge,
    /// Viewport line.
    pub line: ViewportLine,
}

impl TriggerStart {
    /// `"top 85%"`, the default reveal threshold.
    pub const TOP_85: Self = Self {
        edge: Edge::Top,
        line: ViewportLine::Fraction(0.85),
    };

    /// `"top 80%"`, used by counter containers and marquee labels.
    pub const TOP_80: Self = Self {
        edge: Edge::Top,
        line: ViewportLine::Fraction(0.80),
    };

    /// Document Y of the element line.
    #[must_use]
    pub fn element_line(&self, rect: &Rect) -> f32 {
        match self.edge {
            Edge::Top => rect.y,
            Edge::Center => rect.y + rect.height * 0.5,
            Edge::Bottom => rect.bottom(),
        }
    }

    /// Document Y of the viewport line.
    #[must_use]
    pub fn viewport_line(&self, viewport: &Viewport) -> f32 {
        let offset = match self.line {
            ViewportLine::Fraction(f) => viewport.height * f,
            ViewportLine::Pixels(px) => px,
        };
        viewport.scroll_y + offset
    }

    /// Returns true once the element line has reached the viewport line.
    ///
    /// Elements already scrolled past count as crossed.
    #[must_use]
    pub fn is_crossed(&self, rect: &Rect, viewport: &Viewport) -> bool {
        self.element_line(rect) <= self.viewport_line(viewport)
    }
}

impl Default for TriggerStart {
    fn default() -> Self {
        Self::TOP_85
    }
}

fn parse_edge(token: &str) -> Option<Edge> {
    match token {
        "top" => Some(Edge::Top),
        "center" => Some(Edge::Center),
        "bottom" => Some(Edge::Bottom),
        _ => None,
    }
}

fn parse_line(token: &str) -> Option<ViewportLine> {
    match token {
        "top" => return Some(ViewportLine::Fraction(0.0)),
        "center" => return Some(ViewportLine::Fraction(0.5)),
        "bottom" => return Some(ViewportLine::Fraction(1.0)),
        _ => {}
    }
    if let Some(percent) = token.strip_suffix('%') {
        return percent.parse::<f32>().ok().map(|p| ViewportLine::Fraction(p / 100.0));
    }
    let pixels = token.strip_suffix("px").unwrap_or(token);
    pixels.parse::<f32>().ok().map(ViewportLine::Pixels)
}

impl FromStr for TriggerStart {
    type Err = VitrineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let invalid = || VitrineError::InvalidStart(s.to_string());

        let edge = tokens.next().and_then(parse_edge).ok_or_else(invalid)?;
        let line = tokens.next().and_then(parse_line).ok_or_else(invalid)?;
        if tokens.next().is_some() {
            return Err(invalid());
        }
        Ok(Self { edge, line })
    }
}

impl TryFrom<String> for TriggerStart {
    type Error = VitrineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for TriggerStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let edge = match self.edge {
            Edge::Top => "top",
            Edge::Center => "center",
            Edge::Bottom => "bottom",
        };
        match self.line {
            ViewportLine::Fraction(fraction) => write!(f, "{edge} {}%", fraction * 100.0),
            ViewportLine::Pixels(px) => write!(f, "{edge} {px}px"),
        }
    }
}
