// File: crates/tufte-render-skia/src/style.rs
// Summary: Minimal-ink palettes and stroke sizes for the Skia adapter.

use skia_safe as skia;
use tufte_core::Rgba;

#[derive(Clone, Copy, Debug)]
pub struct Style {
    pub name: &'static str,
    pub background: skia::Color,
    /// Color of spines that remain visible.
    pub spine: skia::Color,
    pub spine_width: f32,
    pub font_size: f32,
}

impl Style {
    /// Off-white paper, soft black ink.
    pub fn tufte() -> Self {
        Self {
            name: "tufte",
            background: skia::Color::from_argb(255, 255, 255, 248),
            spine: skia::Color::from_argb(255, 40, 40, 40),
            spine_width: 1.0,
            font_size: 12.0,
        }
    }

    pub fn plain() -> Self {
        Self {
            name: "plain",
            background: skia::Color::WHITE,
            spine: skia::Color::BLACK,
            spine_width: 1.0,
            font_size: 12.0,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            spine: skia::Color::from_argb(255, 180, 180, 190),
            spine_width: 1.0,
            font_size: 12.0,
        }
    }
}

impl Default for Style {
    fn default() -> Self { Self::tufte() }
}

/// Built-in style presets.
pub fn presets() -> Vec<Style> {
    vec![Style::tufte(), Style::plain(), Style::dark()]
}

/// Find a style by its `name`, falling back to tufte.
pub fn find(name: &str) -> Style {
    presets().into_iter().find(|s| s.name.eq_ignore_ascii_case(name)).unwrap_or_default()
}

pub fn to_color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}
