// File: crates/tufte-core/src/scale.rs
// Summary: Linear data-to-pixel mapping used by drawing backends.

/// Data value along one axis.
pub type Value = f64;

/// Maps a data interval onto a pixel interval. `px_end` may be smaller than
/// `px_start` (screen Y grows downward).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub vmin: Value,
    pub vmax: Value,
    pub px_start: f32,
    pub px_end: f32,
}

impl LinearScale {
    /// A degenerate domain is widened by one unit so mapping never divides by zero.
    pub fn new(vmin: Value, vmax: Value, px_start: f32, px_end: f32) -> Self {
        let mut s = Self { vmin, vmax, px_start, px_end };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    #[inline]
    pub fn to_px(&self, v: Value) -> f32 {
        let span = self.vmax - self.vmin;
        self.px_start + ((v - self.vmin) / span) as f32 * (self.px_end - self.px_start)
    }
}
