// File: crates/tufte-core/src/summary.rs
// Summary: Data preparation for quartile, Pareto, sparkline and histogram charts.

use crate::error::{Result, TufteError};
use crate::ticks::{data_min_max, linspace};

/// Percentile `p` (0..=100) of ascending `sorted`, linearly interpolated between closest ranks.
pub fn percentile(sorted: &[f64], p: f64) -> Result<f64> {
    if sorted.is_empty() {
        return Err(TufteError::invalid("data is empty"));
    }
    if !(0.0..=100.0).contains(&p) {
        return Err(TufteError::invalid(format!("percentile {p} outside 0..=100")));
    }
    let rank = p / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    Ok(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

fn sorted_finite(values: &[f64]) -> Result<Vec<f64>> {
    if values.is_empty() {
        return Err(TufteError::invalid("data is empty"));
    }
    if values.iter().any(|v| v.is_nan()) {
        return Err(TufteError::invalid("data contains NaN"));
    }
    let mut v = values.to_vec();
    v.sort_by(f64::total_cmp);
    Ok(v)
}

/// Box-less quartile plot statistics: median dot, blank IQR, whiskers, stray outliers.
#[derive(Clone, Debug, PartialEq)]
pub struct QuartileSummary {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub lower_fence: f64,
    pub upper_fence: f64,
    /// Smallest value inside the fences.
    pub whisker_low: f64,
    /// Largest value inside the fences.
    pub whisker_high: f64,
    /// Values outside the fences, ascending.
    pub outliers: Vec<f64>,
}

impl QuartileSummary {
    pub fn from_values(values: &[f64]) -> Result<Self> {
        let sorted = sorted_finite(values)?;
        let q1 = percentile(&sorted, 25.0)?;
        let median = percentile(&sorted, 50.0)?;
        let q3 = percentile(&sorted, 75.0)?;
        let iqr = q3 - q1;
        let lower_fence = q1 - 1.5 * iqr;
        let upper_fence = q3 + 1.5 * iqr;

        let inside = |v: &f64| *v >= lower_fence && *v <= upper_fence;
        let mut kept = sorted.iter().copied().filter(inside);
        let (whisker_low, whisker_high) = match kept.next() {
            Some(first) => (first, kept.last().unwrap_or(first)),
            None => (sorted[0], sorted[sorted.len() - 1]),
        };
        let outliers = sorted.iter().copied().filter(|v| !inside(v)).collect();

        Ok(Self { q1, median, q3, lower_fence, upper_fence, whisker_low, whisker_high, outliers })
    }

    /// Lowest and highest value the plot must show, outliers included.
    pub fn extent(&self) -> (f64, f64) {
        let lo = self.outliers.first().map_or(self.whisker_low, |o| o.min(self.whisker_low));
        let hi = self.outliers.last().map_or(self.whisker_high, |o| o.max(self.whisker_high));
        (lo, hi)
    }
}

/// One summary per distinct category, in first-seen order.
pub fn quartile_groups<S: AsRef<str>>(categories: &[S], values: &[f64]) -> Result<Vec<(String, QuartileSummary)>> {
    if categories.len() != values.len() {
        return Err(TufteError::invalid(format!(
            "categories ({}) and values ({}) must have the same length",
            categories.len(),
            values.len()
        )));
    }
    if values.is_empty() {
        return Err(TufteError::invalid("data is empty"));
    }
    let labels: Vec<&str> = categories.iter().map(|c| c.as_ref()).collect();
    let mut order: Vec<&str> = Vec::new();
    for &label in &labels {
        if !order.contains(&label) {
            order.push(label);
        }
    }
    order
        .into_iter()
        .map(|cat| {
            let group: Vec<f64> = labels
                .iter()
                .zip(values)
                .filter(|(label, _)| **label == cat)
                .map(|(_, &v)| v)
                .collect();
            QuartileSummary::from_values(&group).map(|s| (cat.to_string(), s))
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParetoEntry {
    pub label: String,
    pub value: f64,
    /// Running share of the total, in percent; the last entry is 100.
    pub cumulative_pct: f64,
}

/// Categories sorted by descending value with their cumulative percentage.
pub fn pareto<S: AsRef<str>>(categories: &[S], values: &[f64]) -> Result<Vec<ParetoEntry>> {
    if categories.len() != values.len() {
        return Err(TufteError::invalid("categories and values must have the same length"));
    }
    if values.is_empty() {
        return Err(TufteError::invalid("data is empty"));
    }
    if values.iter().any(|v| !v.is_finite() || *v < 0.0) {
        return Err(TufteError::invalid("pareto values must be finite and non-negative"));
    }
    let mut idx: Vec<usize> = (0..values.len()).collect();
    idx.sort_by(|&a, &b| values[b].total_cmp(&values[a]));

    // summed in output order so the running total ends exactly on it
    let total: f64 = idx.iter().map(|&i| values[i]).sum();
    if total <= 0.0 {
        return Err(TufteError::invalid("pareto values sum to zero"));
    }

    let mut running = 0.0;
    Ok(idx
        .into_iter()
        .map(|i| {
            running += values[i];
            ParetoEntry {
                label: categories[i].as_ref().to_string(),
                value: values[i],
                cumulative_pct: 100.0 * (running / total),
            }
        })
        .collect())
}

/// Emphasised points of a sparkline, as (index, value).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SparkMarkers {
    pub first: (usize, f64),
    pub last: (usize, f64),
    pub min: (usize, f64),
    pub max: (usize, f64),
}

impl SparkMarkers {
    pub fn from_values(values: &[f64]) -> Result<Self> {
        let (lo, hi) = data_min_max(values)?;
        // first occurrence wins on ties
        let pos = |target: f64| values.iter().position(|&v| v == target).unwrap_or(0);
        let n = values.len();
        Ok(Self {
            first: (0, values[0]),
            last: (n - 1, values[n - 1]),
            min: (pos(lo), lo),
            max: (pos(hi), hi),
        })
    }
}

/// Equal-width bin counts.
#[derive(Clone, Debug, PartialEq)]
pub struct Histogram {
    /// `counts.len() + 1` ascending bin edges.
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

/// Bin `data` into `bins` equal-width buckets over its range. The last bin is closed on the right.
pub fn histogram(data: &[f64], bins: usize) -> Result<Histogram> {
    if bins == 0 {
        return Err(TufteError::invalid("bins must be positive"));
    }
    let (mut lo, mut hi) = data_min_max(data)?;
    if !lo.is_finite() || !hi.is_finite() {
        return Err(TufteError::invalid("histogram data must be finite"));
    }
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }
    let edges = linspace(lo, hi, bins + 1);
    let width = (hi - lo) / bins as f64;
    let mut counts = vec![0usize; bins];
    for &v in data {
        let i = (((v - lo) / width).floor() as usize).min(bins - 1);
        counts[i] += 1;
    }
    Ok(Histogram { edges, counts })
}
