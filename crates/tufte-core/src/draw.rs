// File: crates/tufte-core/src/draw.rs
// Summary: Minimal, renderer-agnostic drawing-primitive API plus a recording implementation.

use crate::types::{Point, Rgba};

/// The four axis spines of a plot area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Spine {
    Left,
    Right,
    Top,
    Bottom,
}

impl Spine {
    pub const ALL: [Spine; 4] = [Spine::Left, Spine::Right, Spine::Top, Spine::Bottom];
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    /// Line width in pixels.
    pub width: f32,
}

impl Stroke {
    pub const fn new(color: Rgba, width: f32) -> Self {
        Self { color, width }
    }
}

impl Default for Stroke {
    fn default() -> Self { Self::new(Rgba::BLACK, 1.0) }
}

/// Which point of the text box sits on the anchor position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    /// Text ends at the point, vertically centred (left-axis labels).
    Right,
    /// Text starts at the point, vertically centred.
    Left,
    /// Text hangs below the point, horizontally centred (bottom-axis labels).
    Top,
    /// Text sits above the point, horizontally centred.
    Bottom,
}

/// Drawing primitives a plotting backend must provide. Coordinates are in data space.
pub trait Surface {
    /// Data extents mapped onto the plot area.
    fn set_limits(&mut self, x: (f64, f64), y: (f64, f64));
    fn line(&mut self, from: Point, to: Point, stroke: &Stroke);
    /// Filled closed polygon.
    fn fill(&mut self, polygon: &[Point], color: Rgba);
    /// Round marker; `radius` in pixels.
    fn marker(&mut self, at: Point, radius: f32, color: Rgba);
    fn text(&mut self, at: Point, text: &str, anchor: Anchor, color: Rgba);
    fn hide_spine(&mut self, spine: Spine);
}

/// A recorded drawing primitive.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    Limits { x: (f64, f64), y: (f64, f64) },
    Line { from: Point, to: Point, stroke: Stroke },
    Fill { polygon: Vec<Point>, color: Rgba },
    Marker { at: Point, radius: f32, color: Rgba },
    Text { at: Point, text: String, anchor: Anchor, color: Rgba },
}

/// Display list of primitives; spine visibility is tracked separately.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCmd>,
    hidden: Vec<Spine>,
}

impl RecordingSurface {
    pub fn new() -> Self { Self::default() }

    pub fn is_spine_visible(&self, spine: Spine) -> bool {
        !self.hidden.contains(&spine)
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCmd::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCmd::Line { from, to, .. } => Some((*from, *to)),
            _ => None,
        })
    }

    /// Replay the recorded primitives onto another surface.
    pub fn replay<S: Surface + ?Sized>(&self, target: &mut S) {
        for spine in &self.hidden {
            target.hide_spine(*spine);
        }
        for c in &self.commands {
            match c {
                DrawCmd::Limits { x, y } => target.set_limits(*x, *y),
                DrawCmd::Line { from, to, stroke } => target.line(*from, *to, stroke),
                DrawCmd::Fill { polygon, color } => target.fill(polygon, *color),
                DrawCmd::Marker { at, radius, color } => target.marker(*at, *radius, *color),
                DrawCmd::Text { at, text, anchor, color } => target.text(*at, text, *anchor, *color),
            }
        }
    }
}

impl Surface for RecordingSurface {
    fn set_limits(&mut self, x: (f64, f64), y: (f64, f64)) {
        self.commands.push(DrawCmd::Limits { x, y });
    }
    fn line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        self.commands.push(DrawCmd::Line { from, to, stroke: *stroke });
    }
    fn fill(&mut self, polygon: &[Point], color: Rgba) {
        self.commands.push(DrawCmd::Fill { polygon: polygon.to_vec(), color });
    }
    fn marker(&mut self, at: Point, radius: f32, color: Rgba) {
        self.commands.push(DrawCmd::Marker { at, radius, color });
    }
    fn text(&mut self, at: Point, text: &str, anchor: Anchor, color: Rgba) {
        self.commands.push(DrawCmd::Text { at, text: text.to_string(), anchor, color });
    }
    fn hide_spine(&mut self, spine: Spine) {
        if !self.hidden.contains(&spine) {
            self.hidden.push(spine);
        }
    }
}
