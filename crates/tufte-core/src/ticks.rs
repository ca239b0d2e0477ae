// File: crates/tufte-core/src/ticks.rs
// Summary: "Nice" tick placement (1/2/5 x 10^n steps) pinned to exact data endpoints, plus range helpers.

use crate::error::{Result, TufteError};

/// Largest accepted `max_interior_ticks` hint.
pub const MAX_INTERIOR_TICKS: usize = 10_000;

/// Tick placement parameters, passed explicitly per call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickOptions {
    /// Approximate number of interior divisions; the result may hold fewer.
    pub max_interior_ticks: usize,
    /// Interior values with a magnitude below this are snapped to exactly 0.
    pub snap_tolerance: f64,
}

impl Default for TickOptions {
    fn default() -> Self {
        Self { max_interior_ticks: 5, snap_tolerance: 1e-3 }
    }
}

impl TickOptions {
    pub fn with_max_interior_ticks(mut self, n: usize) -> Self {
        self.max_interior_ticks = n;
        self
    }
}

/// Ticks over `[min_val, max_val]` with the default snap tolerance.
pub fn generate_ticks(min_val: f64, max_val: f64, max_interior_ticks: usize) -> Result<Vec<f64>> {
    let opts = TickOptions { max_interior_ticks, ..TickOptions::default() };
    generate_ticks_with(min_val, max_val, &opts)
}

/// Ticks over `[min_val, max_val]`.
///
/// The first and last elements are always the exact endpoints. Interior
/// values are multiples of a nice step strictly inside the range, and the
/// whole sequence is strictly increasing. A degenerate range yields `[min_val]`.
pub fn generate_ticks_with(min_val: f64, max_val: f64, opts: &TickOptions) -> Result<Vec<f64>> {
    if !min_val.is_finite() || !max_val.is_finite() {
        return Err(TufteError::invalid(format!("non-finite range [{min_val}, {max_val}]")));
    }
    if min_val > max_val {
        return Err(TufteError::invalid(format!("min {min_val} is greater than max {max_val}")));
    }
    if min_val == max_val {
        return Ok(vec![min_val]);
    }

    if opts.max_interior_ticks > MAX_INTERIOR_TICKS {
        return Err(TufteError::invalid(format!(
            "max_interior_ticks {} exceeds {MAX_INTERIOR_TICKS}",
            opts.max_interior_ticks
        )));
    }

    let raw_step = (max_val - min_val) / (opts.max_interior_ticks as f64 + 1.0);
    if !(raw_step.is_finite() && raw_step > 0.0) {
        return Err(TufteError::invalid(format!("cannot derive a step for [{min_val}, {max_val}]")));
    }
    let step = nice_step(raw_step);

    let first = (min_val / step).ceil();
    let steps = ((max_val / step).floor() - first).max(0.0) as usize;
    let mut ticks = Vec::with_capacity(steps + 3);
    ticks.push(min_val);

    // one extra candidate absorbs rounding in the floor above
    for i in 0..=steps + 1 {
        let raw = (first + i as f64) * step;
        if raw > max_val {
            break;
        }
        if raw == min_val || raw == max_val {
            continue;
        }
        let t = if raw.abs() < opts.snap_tolerance { 0.0 } else { raw };
        // snapping can push a value onto or past its neighbours
        let last = ticks[ticks.len() - 1];
        if t > last && t < max_val {
            ticks.push(t);
        }
    }

    ticks.push(max_val);
    Ok(ticks)
}

/// Round `raw_step` up to the nearest 1, 2, 5 or 10 times a power of ten.
pub fn nice_step(raw_step: f64) -> f64 {
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let residual = raw_step / magnitude;
    let multiplier = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    multiplier * magnitude
}

/// Smallest and largest value of `data`.
pub fn data_min_max(data: &[f64]) -> Result<(f64, f64)> {
    if data.is_empty() {
        return Err(TufteError::invalid("data is empty"));
    }
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in data {
        if v.is_nan() {
            return Err(TufteError::invalid("data contains NaN"));
        }
        lo = lo.min(v);
        hi = hi.max(v);
    }
    Ok((lo, hi))
}

/// Fixed-point tick label that never prints a negative zero.
pub fn format_tick(value: f64, decimals: usize) -> String {
    let s = format!("{value:.decimals$}");
    match s.strip_prefix('-') {
        Some(rest) if rest.bytes().all(|b| b == b'0' || b == b'.') => rest.to_string(),
        _ => s,
    }
}

/// `steps` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps)
        .map(|i| if i + 1 == steps { end } else { start + step * i as f64 })
        .collect()
}
