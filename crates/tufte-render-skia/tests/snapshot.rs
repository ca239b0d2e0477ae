// File: crates/tufte-render-skia/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow for a label-free range-frame chart.
// Behavior:
// - Records a decorated line chart, drops text primitives (font variance), replays onto Skia.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use tufte_core::draw::DrawCmd;
use tufte_core::{decorate_xy, FrameOptions, Point, RecordingSurface, Stroke, Surface};
use tufte_render_skia::{RenderOptions, SkiaSurface};

fn render_bytes() -> Vec<u8> {
    let xs: Vec<f64> = (0..12).map(f64::from).collect();
    let ys: Vec<f64> = xs.iter().map(|x| (x * 0.6).sin() * 4.0).collect();

    let mut rec = RecordingSurface::new();
    decorate_xy(&mut rec, &xs, &ys, &FrameOptions::default()).expect("decorate");
    let line = Stroke::default();
    for w in xs.iter().zip(&ys).collect::<Vec<_>>().windows(2) {
        rec.line(Point::new(*w[0].0, *w[0].1), Point::new(*w[1].0, *w[1].1), &line);
    }
    rec.commands.retain(|c| !matches!(c, DrawCmd::Text { .. }));

    let mut surface = SkiaSurface::new(&RenderOptions::default()).expect("raster surface");
    rec.replay(&mut surface);
    surface.finish_png().expect("encode png")
}

#[test]
fn golden_range_frame_chart() {
    let bytes = render_bytes();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("range_frame.png");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}
