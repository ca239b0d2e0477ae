// File: crates/demo/src/main.rs
// Summary: Demo loads one numeric CSV column, prints ticks and a stem-and-leaf table, and renders a
// line plot and a histogram with minimal-ink decoration to PNGs.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use tufte_core::frame::padded_range;
use tufte_core::{
    decorate_xy, generate_ticks, histogram, knockout_lines, stem_and_leaf, AxisSide, FrameOptions, Number,
    NumericSeries, Point, RangeFrame, Rgba, SparkMarkers, Spine, StemLeafFormat, Stroke, Surface, TickOptions,
    TufteError,
};
use tufte_render_skia::{style, RenderOptions, SkiaSurface};

fn main() -> Result<()> {
    // Args: [CSV_PATH] [COLUMN] [FORMAT] [STYLE]; without a path a built-in sample is used.
    let mut args = std::env::args().skip(1);
    let path = args.next().map(PathBuf::from);
    let column = args.next();
    let format: StemLeafFormat = match args.next() {
        Some(f) => f.parse()?,
        None => StemLeafFormat::Plain,
    };
    let style = style::find(args.next().as_deref().unwrap_or("tufte"));

    let (values, label) = match &path {
        Some(p) => {
            println!("Using input file: {}", p.display());
            let values = load_column(p, column.as_deref())
                .with_context(|| format!("failed to load CSV '{}'", p.display()))?;
            (values, p.file_stem().and_then(|s| s.to_str()).unwrap_or("data").to_string())
        }
        None => {
            println!("No input file given; using built-in sample");
            (sample_values(), "sample".to_string())
        }
    };
    if values.is_empty() {
        anyhow::bail!("no numeric values loaded; check the column name and delimiter.");
    }
    println!("Loaded {} values", values.len());

    let series = match NumericSeries::classify(&values) {
        Ok(s) => s,
        Err(TufteError::UnsupportedDataShape) => {
            eprintln!("Warning: column mixes integers and decimals; treating every value as float.");
            NumericSeries::Float(values.iter().map(as_f64).collect())
        }
        Err(e) => return Err(e.into()),
    };
    let ys: Vec<f64> = values.iter().map(as_f64).collect();

    let (lo, hi) = tufte_core::data_min_max(&ys)?;
    println!("Range: [{:.4}, {:.4}]", lo, hi);
    println!("Ticks: {:?}", generate_ticks(lo, hi, TickOptions::default().max_interior_ticks)?);

    println!("\nStem-and-leaf ({format}):\n");
    println!("{}", stem_and_leaf(&series, format, 2)?);

    let opts = RenderOptions { style, ..RenderOptions::default() };
    println!("Style: {}", opts.style.name);

    let out_line = out_name_with(&label, "line");
    render_line(&ys, &opts)?.render_to_png(&out_line)?;
    println!("\nWrote {}", out_line.display());

    let out_hist = out_name_with(&label, "histogram");
    render_histogram(&ys, 10, &opts)?.render_to_png(&out_hist)?;
    println!("Wrote {}", out_hist.display());
    Ok(())
}

/// Index-vs-value line with range frames and emphasised first/last/min/max points.
fn render_line(ys: &[f64], opts: &RenderOptions) -> Result<SkiaSurface> {
    let xs: Vec<f64> = (0..ys.len()).map(|i| i as f64).collect();
    let mut surface = SkiaSurface::new(opts)?;
    let frame_opts = FrameOptions { decimals: 1, ..FrameOptions::default() };
    decorate_xy(&mut surface, &xs, ys, &frame_opts)?;

    let ink = Stroke::new(Rgba::BLACK, 1.0);
    for (i, w) in ys.windows(2).enumerate() {
        surface.line(Point::new(i as f64, w[0]), Point::new(i as f64 + 1.0, w[1]), &ink);
    }
    let marks = SparkMarkers::from_values(ys)?;
    for (i, v) in [marks.first, marks.last] {
        surface.marker(Point::new(i as f64, v), 2.5, Rgba::BLACK);
    }
    for (i, v) in [marks.min, marks.max] {
        surface.marker(Point::new(i as f64, v), 2.5, Rgba::new(200, 30, 30, 255));
    }
    Ok(surface)
}

/// Gray bars, white knockout lines at count ticks, and a range frame under the bins.
fn render_histogram(ys: &[f64], bins: usize, opts: &RenderOptions) -> Result<SkiaSurface> {
    let h = histogram(ys, bins)?;
    let (x0, x1) = (h.edges[0], h.edges[h.edges.len() - 1]);
    let ymax = h.max_count() as f64;

    let mut surface = SkiaSurface::new(opts)?;
    let ylim = (0.0, ymax * 1.05);
    surface.set_limits(padded_range(x0, x1, 0.02), ylim);
    for spine in [Spine::Top, Spine::Right, Spine::Left] {
        surface.hide_spine(spine);
    }

    let bar_pad = (x1 - x0) / bins as f64 * 0.2;
    for (i, &count) in h.counts.iter().enumerate() {
        let (l, r) = (h.edges[i] + bar_pad, h.edges[i + 1] - bar_pad);
        let c = count as f64;
        surface.fill(&[Point::new(l, 0.0), Point::new(r, 0.0), Point::new(r, c), Point::new(l, c)], Rgba::INK_GRAY);
    }

    let count_ticks = generate_ticks(0.0, ymax, 5)?;
    knockout_lines(&mut surface, &count_ticks, x0, x1, Rgba::WHITE);
    RangeFrame::from_ticks(AxisSide::Left, count_ticks, 0).draw(&mut surface, x0, (x1 - x0) * 0.01);
    let bin_ticks = TickOptions::default().with_max_interior_ticks(bins.min(8));
    RangeFrame::new(AxisSide::Bottom, x0, x1, &bin_ticks, 1)?.draw(&mut surface, 0.0, ymax * 0.02);
    Ok(surface)
}

/// Produce output file name like target/out/tufte_<label>_<suffix>.png
fn out_name_with(label: &str, suffix: &str) -> PathBuf {
    let short = label.split('_').take(3).collect::<Vec<_>>().join("_");
    let mut out = PathBuf::from("target/out");
    if short.is_empty() {
        out.push(format!("tufte_{}.png", suffix));
    } else {
        out.push(format!("tufte_{}_{}.png", short, suffix));
    }
    out
}

/// Load one numeric column. Picks `column` by header (case-insensitive) or the first column
/// whose first row parses as a number.
fn load_column(path: &Path, column: Option<&str>) -> Result<Vec<Number>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    println!("Headers: {:?}", headers);

    let records = rdr.records().collect::<std::result::Result<Vec<_>, _>>()?;
    let ix = match column {
        Some(name) => {
            let want = name.to_lowercase();
            headers
                .iter()
                .position(|h| *h == want)
                .with_context(|| format!("column '{name}' not found"))?
        }
        None => records
            .first()
            .and_then(|r| r.iter().position(|cell| parse_number(cell).is_some()))
            .context("no numeric column found")?,
    };
    println!("Column: {}", headers.get(ix).map(String::as_str).unwrap_or("?"));

    let mut skipped = 0usize;
    let mut out = Vec::with_capacity(records.len());
    for rec in &records {
        match rec.get(ix).and_then(parse_number) {
            Some(n) => out.push(n),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        println!("Skipped {} non-numeric rows", skipped);
    }
    Ok(out)
}

fn parse_number(s: &str) -> Option<Number> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(i) = s.parse::<i64>() {
        return Some(Number::Int(i));
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite()).map(Number::Float)
}

fn as_f64(n: &Number) -> f64 {
    match *n {
        Number::Int(i) => i as f64,
        Number::Float(f) => f,
    }
}

/// Deterministic wavy sample with a little drift.
fn sample_values() -> Vec<Number> {
    (0..60)
        .map(|i| {
            let t = i as f64 * 0.25;
            Number::Float(5.0 * t.sin() + 0.3 * t + ((i * 7919) % 13) as f64 * 0.05)
        })
        .collect()
}
