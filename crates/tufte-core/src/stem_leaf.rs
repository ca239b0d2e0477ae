// File: crates/tufte-core/src/stem_leaf.rs
// Summary: Stem-and-leaf bucketing over integer or float series, rendered as plain text, Markdown, CSV or LaTeX.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TufteError};

/// A single loosely-typed input value, classified into a `NumericSeries` once.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

/// Homogeneous numeric input for the stem-and-leaf table.
#[derive(Clone, Debug, PartialEq)]
pub enum NumericSeries {
    Integer(Vec<i64>),
    Float(Vec<f64>),
}

impl NumericSeries {
    /// Classify a mixed-source sequence. Fails if integral and floating values are mixed.
    pub fn classify(values: &[Number]) -> Result<Self> {
        match values.first() {
            None => Err(TufteError::invalid("data is empty")),
            Some(Number::Int(_)) => values
                .iter()
                .map(|v| match *v { Number::Int(i) => Ok(i), Number::Float(_) => Err(TufteError::UnsupportedDataShape) })
                .collect::<Result<Vec<_>>>()
                .map(Self::Integer),
            Some(Number::Float(_)) => values
                .iter()
                .map(|v| match *v { Number::Float(f) => Ok(f), Number::Int(_) => Err(TufteError::UnsupportedDataShape) })
                .collect::<Result<Vec<_>>>()
                .map(Self::Float),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Integer(v) => v.len(),
            Self::Float(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

impl From<Vec<i64>> for NumericSeries {
    fn from(v: Vec<i64>) -> Self { Self::Integer(v) }
}

impl From<Vec<f64>> for NumericSeries {
    fn from(v: Vec<f64>) -> Self { Self::Float(v) }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StemLeafFormat {
    #[default]
    Plain,
    Markdown,
    Csv,
    Latex,
}

impl StemLeafFormat {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Markdown => "markdown",
            Self::Csv => "csv",
            Self::Latex => "latex",
        }
    }
}

impl fmt::Display for StemLeafFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StemLeafFormat {
    type Err = TufteError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" | "text" => Ok(Self::Plain),
            "markdown" | "md" => Ok(Self::Markdown),
            "csv" => Ok(Self::Csv),
            "latex" | "tex" => Ok(Self::Latex),
            other => Err(TufteError::invalid(format!("unsupported format '{other}'"))),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StemLeafOptions {
    pub format: StemLeafFormat,
    /// Fractional digits kept in float leaves.
    pub decimals: usize,
}

impl Default for StemLeafOptions {
    fn default() -> Self {
        Self { format: StemLeafFormat::Plain, decimals: 2 }
    }
}

/// Upper bound on table rows, empty gap rows included.
pub const MAX_STEM_ROWS: usize = 10_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StemRow {
    pub stem: i64,
    /// Row holds negative values. Only matters for stem 0, which splits into "-0" and "0".
    pub negative: bool,
    pub leaves: Vec<String>,
}

impl StemRow {
    pub fn new(stem: i64, leaves: Vec<String>) -> Self {
        Self { stem, negative: stem < 0, leaves }
    }

    /// Row below stem 0 carrying negative single-digit integers.
    pub fn negative_zero(leaves: Vec<String>) -> Self {
        Self { stem: 0, negative: true, leaves }
    }

    pub fn label(&self) -> String {
        if self.negative && self.stem == 0 { "-0".to_string() } else { self.stem.to_string() }
    }
}

/// Bucketed stem-and-leaf rows, one per stem from the lowest to the highest observed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StemTable {
    pub rows: Vec<StemRow>,
}

impl StemTable {
    /// Sort `data` once and bucket it. Gaps between stems become empty rows.
    ///
    /// Buckets are keyed by an ordered slot: integer slot `-1` is the "-0" row,
    /// so `-5` and `5` land in different rows. Float stems are `floor(v)` and
    /// need no extra row.
    pub fn build(data: &NumericSeries, decimals: usize) -> Result<Self> {
        if data.is_empty() {
            return Err(TufteError::invalid("data is empty"));
        }
        let mut buckets: BTreeMap<i64, Vec<String>> = BTreeMap::new();
        let integer = matches!(data, NumericSeries::Integer(_));
        match data {
            NumericSeries::Integer(values) => {
                let mut sorted = values.clone();
                sorted.sort_unstable();
                for v in sorted {
                    let leaf = (v % 10).unsigned_abs();
                    let slot = if v < 0 { v / 10 - 1 } else { v / 10 };
                    buckets.entry(slot).or_default().push(leaf.to_string());
                }
            }
            NumericSeries::Float(values) => {
                if decimals == 0 {
                    return Err(TufteError::invalid("float leaves need at least one decimal"));
                }
                if values.iter().any(|v| !v.is_finite()) {
                    return Err(TufteError::invalid("data contains NaN or infinite values"));
                }
                let mut sorted = values.clone();
                sorted.sort_by(f64::total_cmp);
                for v in sorted {
                    let stem = v.floor();
                    // i64::MAX as f64 rounds up to 2^63, hence the strict bound
                    if !(stem >= i64::MIN as f64 && stem < i64::MAX as f64) {
                        return Err(TufteError::invalid(format!("value {v} has a stem outside the i64 range")));
                    }
                    buckets.entry(stem as i64).or_default().push(float_leaf(v - stem, decimals));
                }
            }
        }

        let (lo, hi) = match (buckets.keys().next(), buckets.keys().next_back()) {
            (Some(&lo), Some(&hi)) => (lo, hi),
            _ => return Err(TufteError::invalid("data is empty")),
        };
        match hi.checked_sub(lo) {
            Some(span) if (span as u64) < MAX_STEM_ROWS as u64 => {}
            _ => {
                return Err(TufteError::invalid(format!(
                    "stems {lo}..={hi} would need more than {MAX_STEM_ROWS} rows"
                )))
            }
        }
        let rows = (lo..=hi)
            .map(|slot| {
                let leaves = buckets.remove(&slot).unwrap_or_default();
                match slot {
                    -1 if integer => StemRow::negative_zero(leaves),
                    s if integer && s < -1 => StemRow::new(s + 1, leaves),
                    s => StemRow::new(s, leaves),
                }
            })
            .collect();
        Ok(Self { rows })
    }

    pub fn max_leaves(&self) -> usize {
        self.rows.iter().map(|r| r.leaves.len()).max().unwrap_or(0)
    }

    fn stem_width(&self) -> usize {
        self.rows.iter().map(|r| r.label().len()).max().unwrap_or(0).max(5)
    }

    pub fn render(&self, format: StemLeafFormat) -> Result<String> {
        match format {
            StemLeafFormat::Plain => Ok(self.render_plain()),
            StemLeafFormat::Markdown => Ok(self.render_markdown()),
            StemLeafFormat::Csv => self.render_csv(),
            StemLeafFormat::Latex => Ok(self.render_latex()),
        }
    }

    fn render_plain(&self) -> String {
        let w = self.stem_width();
        let mut lines = vec![format!("{:>w$} | Leaves", "Stem")];
        for r in &self.rows {
            lines.push(format!("{:>w$} | {}", r.label(), r.leaves.join(" ")));
        }
        lines.join("\n")
    }

    fn render_markdown(&self) -> String {
        let w = self.stem_width();
        let mut lines = vec![format!("| {:>w$} | Leaves |", "Stem"), "|------:|:-------|".to_string()];
        for r in &self.rows {
            lines.push(format!("| {:>w$} | {} |", r.label(), r.leaves.join(" ")));
        }
        lines.join("\n")
    }

    fn render_csv(&self) -> Result<String> {
        let mut wtr = csv::WriterBuilder::new().flexible(true).from_writer(Vec::new());
        let render_err = |e: csv::Error| TufteError::Render(e.to_string());
        wtr.write_record(["Stem", "Leaves"]).map_err(render_err)?;
        for r in &self.rows {
            let mut record = vec![r.label()];
            if r.leaves.is_empty() {
                record.push(String::new());
            } else {
                record.extend(r.leaves.iter().cloned());
            }
            wtr.write_record(&record).map_err(render_err)?;
        }
        let bytes = wtr.into_inner().map_err(|e| TufteError::Render(e.to_string()))?;
        let text = String::from_utf8(bytes).map_err(|e| TufteError::Render(e.to_string()))?;
        Ok(text.trim_end_matches('\n').to_string())
    }

    fn render_latex(&self) -> String {
        let n = self.max_leaves();
        let mut lines = vec![
            format!("\\begin{{tabular}}{{r|{}}}", "l".repeat(n)),
            format!("Stem & \\multicolumn{{{n}}}{{l}}{{Leaves}} \\\\ \\hline"),
        ];
        for r in &self.rows {
            let mut cells: Vec<&str> = r.leaves.iter().map(String::as_str).collect();
            cells.resize(n, "");
            lines.push(format!("{} & {} \\\\", r.label(), cells.join(" & ")));
        }
        lines.push("\\end{tabular}".to_string());
        lines.join("\n")
    }
}

/// ".dd" rendering of a fractional remainder in [0, 1).
fn float_leaf(frac: f64, decimals: usize) -> String {
    let s = format!("{frac:.decimals$}");
    match s.split_once('.') {
        Some((_, digits)) => format!(".{digits}"),
        None => format!(".{}", "0".repeat(decimals)),
    }
}

/// Build and render a stem-and-leaf table.
pub fn stem_and_leaf(data: &NumericSeries, format: StemLeafFormat, decimals: usize) -> Result<String> {
    StemTable::build(data, decimals)?.render(format)
}

pub fn stem_and_leaf_with(data: &NumericSeries, opts: &StemLeafOptions) -> Result<String> {
    stem_and_leaf(data, opts.format, opts.decimals)
}
