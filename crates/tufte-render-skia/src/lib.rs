// File: crates/tufte-render-skia/src/lib.rs
// Summary: Skia CPU raster implementation of the tufte-core `Surface` primitives, with PNG output.

pub mod style;
pub mod text;

use anyhow::Result;
use skia_safe as skia;

use tufte_core::types::{HEIGHT, WIDTH};
use tufte_core::{Anchor, Insets, LinearScale, Point, Rgba, Spine, Stroke, Surface};

pub use style::Style;
pub use text::TextShaper;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub style: Style,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            style: Style::tufte(),
        }
    }
}

/// Raster surface drawing in data coordinates. Until `set_limits` is called the
/// data space is the unit square.
pub struct SkiaSurface {
    surface: skia::Surface,
    width: i32,
    height: i32,
    insets: Insets,
    style: Style,
    x: LinearScale,
    y: LinearScale,
    hidden: Vec<Spine>,
    shaper: TextShaper,
}

impl SkiaSurface {
    pub fn new(opts: &RenderOptions) -> Result<Self> {
        if opts.width as i64 <= opts.insets.hsum() as i64 || opts.height as i64 <= opts.insets.vsum() as i64 {
            anyhow::bail!("insets leave no plot area in a {}x{} surface", opts.width, opts.height);
        }
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        surface.canvas().clear(opts.style.background);

        let (l, t, r, b) = plot_rect(opts.width, opts.height, &opts.insets);
        Ok(Self {
            surface,
            width: opts.width,
            height: opts.height,
            insets: opts.insets,
            style: opts.style,
            x: LinearScale::new(0.0, 1.0, l, r),
            y: LinearScale::new(0.0, 1.0, b, t),
            hidden: Vec::new(),
            shaper: TextShaper::new(),
        })
    }

    pub fn size(&self) -> (i32, i32) { (self.width, self.height) }

    #[inline]
    fn px(&self, p: Point) -> (f32, f32) {
        (self.x.to_px(p.x), self.y.to_px(p.y))
    }

    fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(width);
        paint.set_color(color);
        paint
    }

    fn fill_paint(color: Rgba) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(style::to_color(color));
        paint
    }

    /// Draw the spines that were not hidden along the plot rectangle edges.
    fn draw_spines(&mut self) {
        let (l, t, r, b) = plot_rect(self.width, self.height, &self.insets);
        let paint = Self::stroke_paint(self.style.spine, self.style.spine_width);
        let visible: Vec<Spine> = Spine::ALL.into_iter().filter(|s| !self.hidden.contains(s)).collect();
        let canvas = self.surface.canvas();
        for spine in visible {
            let (from, to) = match spine {
                Spine::Left => ((l, t), (l, b)),
                Spine::Right => ((r, t), (r, b)),
                Spine::Top => ((l, t), (r, t)),
                Spine::Bottom => ((l, b), (r, b)),
            };
            canvas.draw_line(from, to, &paint);
        }
    }

    /// Finish drawing (visible spines) and encode the surface as PNG bytes.
    pub fn finish_png(mut self) -> Result<Vec<u8>> {
        self.draw_spines();
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Finish drawing and write a PNG to `output_png_path`, creating parent directories.
    pub fn render_to_png(self, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.finish_png()?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }
}

impl Surface for SkiaSurface {
    fn set_limits(&mut self, x: (f64, f64), y: (f64, f64)) {
        self.x = LinearScale::new(x.0, x.1, self.x.px_start, self.x.px_end);
        self.y = LinearScale::new(y.0, y.1, self.y.px_start, self.y.px_end);
    }

    fn line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        let paint = Self::stroke_paint(style::to_color(stroke.color), stroke.width);
        let (a, b) = (self.px(from), self.px(to));
        self.surface.canvas().draw_line(a, b, &paint);
    }

    fn fill(&mut self, polygon: &[Point], color: Rgba) {
        let Some((first, rest)) = polygon.split_first() else { return; };
        let mut path = skia::Path::new();
        path.move_to(self.px(*first));
        for p in rest {
            path.line_to(self.px(*p));
        }
        path.close();
        self.surface.canvas().draw_path(&path, &Self::fill_paint(color));
    }

    fn marker(&mut self, at: Point, radius: f32, color: Rgba) {
        let center = self.px(at);
        self.surface.canvas().draw_circle(center, radius.max(0.5), &Self::fill_paint(color));
    }

    fn text(&mut self, at: Point, text: &str, anchor: Anchor, color: Rgba) {
        let (x, y) = self.px(at);
        let size = self.style.font_size;
        let canvas = self.surface.canvas();
        self.shaper.draw_anchored(canvas, text, x, y, anchor, size, style::to_color(color));
    }

    fn hide_spine(&mut self, spine: Spine) {
        if !self.hidden.contains(&spine) {
            self.hidden.push(spine);
        }
    }
}

/// Plot rectangle (left, top, right, bottom) in pixels.
fn plot_rect(width: i32, height: i32, insets: &Insets) -> (f32, f32, f32, f32) {
    (
        insets.left as f32,
        insets.top as f32,
        (width - insets.right as i32) as f32,
        (height - insets.bottom as i32) as f32,
    )
}
