// File: crates/tufte-render-skia/src/text.rs
// Summary: Paragraph-based label shaping with anchor-aware placement for tick and value labels.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use tufte_core::Anchor;

/// Gap between an anchor point and the nearest edge of its label, in pixels.
const LABEL_GAP: f32 = 3.0;

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        // serif faces first
        ts.set_font_families(&["Palatino", "Georgia", "DejaVu Serif", "Times New Roman", "serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `text` so that the `anchor` side of its box sits at (x, y).
    pub fn draw_anchored(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, anchor: Anchor, size: f32, color: skia::Color) {
        let mut p = self.layout(text, size, color);
        let w = p.longest_line();
        let h = p.height();
        let origin = match anchor {
            Anchor::Right => (x - w - LABEL_GAP, y - h * 0.5),
            Anchor::Left => (x + LABEL_GAP, y - h * 0.5),
            Anchor::Top => (x - w * 0.5, y + LABEL_GAP),
            Anchor::Bottom => (x - w * 0.5, y - h - LABEL_GAP),
        };
        p.paint(canvas, origin);
    }
}
