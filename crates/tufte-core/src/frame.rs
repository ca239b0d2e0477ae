// File: crates/tufte-core/src/frame.rs
// Summary: Minimal-ink axis decoration: hidden spines, range frames bounded to the data, knockout grid lines.

use crate::draw::{Anchor, Spine, Stroke, Surface};
use crate::error::Result;
use crate::ticks::{data_min_max, format_tick, generate_ticks_with, TickOptions};
use crate::types::{Point, Rgba};

/// Hide the top and right spines; keep outward ticks and no grid.
pub fn apply_tufte_style<S: Surface + ?Sized>(surface: &mut S) {
    surface.hide_spine(Spine::Top);
    surface.hide_spine(Spine::Right);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisSide {
    Left,
    Bottom,
}

impl AxisSide {
    fn spine(self) -> Spine {
        match self {
            AxisSide::Left => Spine::Left,
            AxisSide::Bottom => Spine::Bottom,
        }
    }
}

/// An axis line that spans only the data range, with ticks at both exact ends.
#[derive(Clone, Debug, PartialEq)]
pub struct RangeFrame {
    pub side: AxisSide,
    pub ticks: Vec<f64>,
    pub labels: Vec<String>,
    pub stroke: Stroke,
}

impl RangeFrame {
    pub fn new(side: AxisSide, min: f64, max: f64, opts: &TickOptions, decimals: usize) -> Result<Self> {
        let ticks = generate_ticks_with(min, max, opts)?;
        Ok(Self::from_ticks(side, ticks, decimals))
    }

    pub fn from_ticks(side: AxisSide, ticks: Vec<f64>, decimals: usize) -> Self {
        let labels = ticks.iter().map(|&t| format_tick(t, decimals)).collect();
        Self { side, ticks, labels, stroke: Stroke::default() }
    }

    /// Data range covered by the frame.
    pub fn span(&self) -> Option<(f64, f64)> {
        Some((*self.ticks.first()?, *self.ticks.last()?))
    }

    /// Draw at `cross` on the other axis; `tick_len` is in that axis' data units.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, cross: f64, tick_len: f64) {
        surface.hide_spine(self.side.spine());
        let Some((lo, hi)) = self.span() else { return; };

        let at = |along: f64, off: f64| match self.side {
            AxisSide::Left => Point::new(cross - off, along),
            AxisSide::Bottom => Point::new(along, cross - off),
        };
        let anchor = match self.side {
            AxisSide::Left => Anchor::Right,
            AxisSide::Bottom => Anchor::Top,
        };

        surface.line(at(lo, 0.0), at(hi, 0.0), &self.stroke);
        for (t, label) in self.ticks.iter().zip(&self.labels) {
            surface.line(at(*t, 0.0), at(*t, tick_len), &self.stroke);
            surface.text(at(*t, tick_len * 1.5), label, anchor, self.stroke.color);
        }
    }
}

/// Background-colored horizontal lines cut through bars at every tick but the first.
pub fn knockout_lines<S: Surface + ?Sized>(surface: &mut S, ticks: &[f64], x0: f64, x1: f64, background: Rgba) {
    let stroke = Stroke::new(background, 1.0);
    for &t in ticks.iter().skip(1) {
        surface.line(Point::new(x0, t), Point::new(x1, t), &stroke);
    }
}

/// `[lo, hi]` widened by `margin` of its span on each side.
pub fn padded_range(lo: f64, hi: f64, margin: f64) -> (f64, f64) {
    let pad = (hi - lo) * margin;
    if pad > 0.0 { (lo - pad, hi + pad) } else { (lo - 0.5, hi + 0.5) }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameOptions {
    pub ticks: TickOptions,
    /// Fraction of the data span left empty around the marks.
    pub margin: f64,
    pub decimals: usize,
    /// Tick mark length as a fraction of the cross axis span.
    pub tick_frac: f64,
}

impl Default for FrameOptions {
    fn default() -> Self {
        Self { ticks: TickOptions::default(), margin: 0.05, decimals: 2, tick_frac: 0.015 }
    }
}

/// Set padded limits and draw left/bottom range frames for x/y data, as scatter,
/// line and time-series plots do. Returns the frames that were drawn.
pub fn decorate_xy<S: Surface + ?Sized>(
    surface: &mut S,
    xs: &[f64],
    ys: &[f64],
    opts: &FrameOptions,
) -> Result<(RangeFrame, RangeFrame)> {
    let (xmin, xmax) = data_min_max(xs)?;
    let (ymin, ymax) = data_min_max(ys)?;
    let xlim = padded_range(xmin, xmax, opts.margin);
    let ylim = padded_range(ymin, ymax, opts.margin);
    surface.set_limits(xlim, ylim);
    apply_tufte_style(surface);

    let x_frame = RangeFrame::new(AxisSide::Bottom, xmin, xmax, &opts.ticks, opts.decimals)?;
    let y_frame = RangeFrame::new(AxisSide::Left, ymin, ymax, &opts.ticks, opts.decimals)?;
    x_frame.draw(surface, ylim.0, (ylim.1 - ylim.0) * opts.tick_frac);
    y_frame.draw(surface, xlim.0, (xlim.1 - xlim.0) * opts.tick_frac);
    Ok((x_frame, y_frame))
}
