// File: crates/flint-charts/src/style.rs
// Summary: House style: palette, figure geometry, brand strings, and one-time
// font registration. Built once, immutable, shared by every call.

use std::sync::{Once, OnceLock};

use plotters::style::RGBColor;

/// Default surface width in pixels.
pub const WIDTH: u32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: u32 = 640;

/// Process-wide visual defaults. Never mutated after construction; the
/// drawer and formatter take it by reference.
#[derive(Clone, Debug)]
pub struct Style {
    pub size: (u32, u32),
    /// Series color cycle.
    pub palette: Vec<RGBColor>,
    pub background: RGBColor,
    pub foreground: RGBColor,
    /// Ticks, footer and other secondary text.
    pub muted: RGBColor,
    pub grid: RGBColor,
    /// Logo glyph and highlights.
    pub accent: RGBColor,
    pub brand_notice: &'static str,
    pub wordmark: &'static str,
    pub line_width: u32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            size: (WIDTH, HEIGHT),
            palette: vec![
                RGBColor(0x00, 0x55, 0x8c), // deep blue
                RGBColor(0xed, 0x8b, 0x00), // amber
                RGBColor(0x00, 0x7a, 0x78), // teal
                RGBColor(0x84, 0x34, 0x4e), // maroon
                RGBColor(0x5c, 0x7f, 0x92), // slate
                RGBColor(0xa8, 0xb4, 0x00), // olive
                RGBColor(0x80, 0x2f, 0x2d), // brick
                RGBColor(0x59, 0xa7, 0xd7), // sky
            ],
            background: RGBColor(0xff, 0xff, 0xff),
            foreground: RGBColor(0x33, 0x33, 0x33),
            muted: RGBColor(0x75, 0x75, 0x75),
            grid: RGBColor(0xd9, 0xd9, 0xd9),
            accent: RGBColor(0x00, 0x55, 0x8c),
            brand_notice: "Produced with Flint Charts.",
            wordmark: "FLINT CHARTS",
            line_width: 3,
        }
    }
}

impl Style {
    /// Color for series `idx`, cycling through the palette.
    pub fn series_color(&self, idx: usize) -> RGBColor {
        self.palette[idx % self.palette.len()]
    }
}

/// The house style, constructed on first use.
pub fn house() -> &'static Style {
    static HOUSE: OnceLock<Style> = OnceLock::new();
    HOUSE.get_or_init(Style::default)
}

static FONT_INIT: Once = Once::new();

/// Register the bundled fallback "sans-serif" face for the ab_glyph text
/// path, which does not discover OS fonts. Safe to call many times.
pub(crate) fn ensure_fonts_registered() {
    FONT_INIT.call_once(|| {
        let _ = plotters::style::register_font(
            "sans-serif",
            plotters::style::FontStyle::Normal,
            include_bytes!("../assets/DejaVuSans.ttf"),
        );
        let _ = plotters::style::register_font(
            "sans-serif",
            plotters::style::FontStyle::Bold,
            include_bytes!("../assets/DejaVuSans-Bold.ttf"),
        );
    });
}
