// File: crates/flint-charts/src/render.rs
// Summary: Serializes a formatted figure to pixels or SVG markup. Layout is
// computed from insets grown per content; ticks, grid, spines, legend, footer
// and the wordmark are drawn explicitly in pixel space.

use std::fmt;
use std::io::Cursor;
use std::str::FromStr;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontTransform;
use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;

use crate::error::{Error, Result};
use crate::figure::{Figure, Geom, HAlign, VAlign};
use crate::style::{ensure_fonts_registered, Style};

/// Supported serialization formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ImageFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(ImageFormat::Png),
            "svg" => Ok(ImageFormat::Svg),
            _ => Err(Error::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Wrap a backend failure; the backend error types are not uniform, so the
/// debug rendering is kept as the message.
fn rmap<E: fmt::Debug>(e: E) -> Error {
    Error::Render(format!("{e:?}"))
}

/// Draw into an RGB buffer and encode it as PNG.
pub fn render_png_bytes(fig: &Figure, style: &Style) -> Result<Vec<u8>> {
    ensure_fonts_registered();
    let (w, h) = fig.size;
    let mut buf = vec![0u8; (w * h * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buf, (w, h)).into_drawing_area();
        draw_figure(&root, fig, style)?;
        root.present().map_err(rmap)?;
    }
    let img = image::RgbImage::from_raw(w, h, buf)
        .ok_or_else(|| Error::Render("pixel buffer size mismatch".to_string()))?;
    let mut out = Vec::new();
    img.write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
        .map_err(rmap)?;
    Ok(out)
}

/// Draw into an SVG document string.
pub fn render_svg_string(fig: &Figure, style: &Style) -> Result<String> {
    ensure_fonts_registered();
    let mut out = String::new();
    {
        let root = SVGBackend::with_string(&mut out, fig.size).into_drawing_area();
        draw_figure(&root, fig, style)?;
        root.present().map_err(rmap)?;
    }
    Ok(out)
}

// ---- layout -----------------------------------------------------------------

const TITLE_SIZE: f64 = 20.0;
const LABEL_SIZE: f64 = 15.0;
const TICK_SIZE: f64 = 13.0;
const FOOTER_SIZE: f64 = 12.0;
const FOOTER_BAND: u32 = 30;

/// Margins around the plot rectangle, in pixels.
#[derive(Clone, Copy, Debug)]
struct Insets {
    top: u32,
    right: u32,
    bottom: u32,
    left: u32,
}

/// Width estimate for layout; one glyph is roughly 0.6 em wide in the
/// bundled face.
fn text_width(text: &str, size: f64) -> u32 {
    let longest = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
    (longest as f64 * size * 0.6).ceil() as u32
}

fn line_count(text: &str) -> u32 {
    text.lines().count().max(1) as u32
}

/// Grow the margins to fit the figure's text content.
fn compute_insets(fig: &Figure) -> Insets {
    let axes = &fig.axes;
    let mut ins = Insets { top: 20, right: 24, bottom: 16, left: 16 };

    if let Some(title) = &axes.title {
        ins.top += 10 + line_count(title) * (TITLE_SIZE as u32 + 6);
    }
    if axes.legend {
        ins.top += 22;
    }

    let ytick_w = axes
        .yticks
        .iter()
        .map(|t| text_width(&t.label, TICK_SIZE))
        .max()
        .unwrap_or(0);
    ins.left += ytick_w + 8;
    if axes.ylabel.is_some() {
        ins.left += LABEL_SIZE as u32 + 10;
    }

    if axes.rot >= 45.0 {
        let xtick_w = axes
            .xticks
            .iter()
            .map(|t| text_width(&t.label, TICK_SIZE))
            .max()
            .unwrap_or(0);
        ins.bottom += xtick_w + 8;
    } else {
        let lines = axes
            .xticks
            .iter()
            .map(|t| line_count(&t.label))
            .max()
            .unwrap_or(1);
        ins.bottom += lines * (TICK_SIZE as u32 + 4) + 4;
    }
    if axes.xlabel.is_some() {
        ins.bottom += LABEL_SIZE as u32 + 8;
    }
    ins.bottom += FOOTER_BAND;

    // End-of-series labels hang past the right edge of the plot.
    let overhang = axes
        .annotations
        .iter()
        .filter(|a| a.halign == HAlign::Left && a.dx > 0)
        .map(|a| a.dx as u32 + text_width(&a.text, a.size))
        .max()
        .unwrap_or(0);
    ins.right = ins.right.max(overhang + 8);

    ins
}

// ---- drawing ----------------------------------------------------------------

/// Render the whole figure onto `root`. Works for any backend; positions are
/// computed here so bitmap and SVG output agree.
fn draw_figure<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    fig: &Figure,
    style: &Style,
) -> Result<()> {
    let (w, h) = fig.size;
    let axes = &fig.axes;
    let ins = compute_insets(fig);

    root.fill(&style.background).map_err(rmap)?;

    let left = ins.left as i32;
    let right = (w.saturating_sub(ins.right) as i32).max(left + 1);
    let top = ins.top as i32;
    let bottom = (h.saturating_sub(ins.bottom) as i32).max(top + 1);
    let plot_w = (right - left).max(1) as f64;
    let plot_h = (bottom - top).max(1) as f64;

    let (x0, x1) = axes.xlim;
    let (y0, y1) = axes.ylim;
    let map_x = |x: f64| left + ((x - x0) / (x1 - x0) * plot_w).round() as i32;
    let map_y = |y: f64| bottom - ((y - y0) / (y1 - y0) * plot_h).round() as i32;
    let clamp_x = |px: i32| px.clamp(left, right);
    let clamp_y = |py: i32| py.clamp(top, bottom);

    let tick_font = font(TICK_SIZE, style.muted);
    let label_font = font(LABEL_SIZE, style.foreground);

    // Grid lines under everything else.
    if axes.grid {
        if axes.horizontal {
            for t in &axes.xticks {
                let px = map_x(t.pos);
                if px >= left && px <= right {
                    draw_line(root, (px, top), (px, bottom), style.grid, 1)?;
                }
            }
        } else {
            for t in &axes.yticks {
                let py = map_y(t.pos);
                if py >= top && py <= bottom {
                    draw_line(root, (left, py), (right, py), style.grid, 1)?;
                }
            }
        }
    }

    // Series geometry.
    for series in &axes.series {
        match &series.geom {
            Geom::Line { points, width } => {
                let path: Vec<(i32, i32)> = points
                    .iter()
                    .map(|&(x, y)| (clamp_x(map_x(x)), clamp_y(map_y(y))))
                    .collect();
                root.draw(&PathElement::new(path, series.color.stroke_width(*width)))
                    .map_err(rmap)?;
            }
            Geom::Points { points } => {
                for &(x, y) in points {
                    if x < x0 || x > x1 || y < y0 || y > y1 {
                        continue;
                    }
                    root.draw(&Circle::new((map_x(x), map_y(y)), 4, series.color.filled()))
                        .map_err(rmap)?;
                }
            }
            Geom::Band { lower, upper } => {
                let mut ring: Vec<(i32, i32)> = lower
                    .iter()
                    .map(|&(x, y)| (clamp_x(map_x(x)), clamp_y(map_y(y))))
                    .collect();
                ring.extend(
                    upper
                        .iter()
                        .rev()
                        .map(|&(x, y)| (clamp_x(map_x(x)), clamp_y(map_y(y)))),
                );
                root.draw(&Polygon::new(ring, series.color.filled())).map_err(rmap)?;
            }
            Geom::Bars { bars, horizontal } => {
                for bar in bars {
                    let rect = if *horizontal {
                        [
                            (clamp_x(map_x(bar.base)), clamp_y(map_y(bar.lo))),
                            (clamp_x(map_x(bar.value)), clamp_y(map_y(bar.hi))),
                        ]
                    } else {
                        [
                            (clamp_x(map_x(bar.lo)), clamp_y(map_y(bar.base))),
                            (clamp_x(map_x(bar.hi)), clamp_y(map_y(bar.value))),
                        ]
                    };
                    root.draw(&Rectangle::new(rect, series.color.filled())).map_err(rmap)?;
                }
            }
        }
    }

    // Tick labels (and marks plus axis lines when spines are on).
    if axes.spines {
        draw_line(root, (left, top), (left, bottom), style.foreground, 1)?;
        draw_line(root, (left, bottom), (right, bottom), style.foreground, 1)?;
    }
    for t in &axes.xticks {
        let px = map_x(t.pos);
        if px < left || px > right {
            continue;
        }
        if axes.spines {
            draw_line(root, (px, bottom), (px, bottom + 4), style.foreground, 1)?;
        }
        if t.label.is_empty() {
            continue;
        }
        if axes.rot >= 45.0 {
            let vertical = tick_font
                .clone()
                .transform(FontTransform::Rotate270)
                .pos(Pos::new(HPos::Right, VPos::Center));
            root.draw(&Text::new(t.label.clone(), (px, bottom + 6), vertical))
                .map_err(rmap)?;
        } else {
            draw_multiline(
                root,
                &t.label,
                (px, bottom + 6),
                &tick_font,
                HPos::Center,
                VPos::Top,
                TICK_SIZE,
            )?;
        }
    }
    for t in &axes.yticks {
        let py = map_y(t.pos);
        if py < top || py > bottom || t.label.is_empty() {
            continue;
        }
        if axes.spines {
            draw_line(root, (left - 4, py), (left, py), style.foreground, 1)?;
        }
        draw_multiline(
            root,
            &t.label,
            (left - 6, py),
            &tick_font,
            HPos::Right,
            VPos::Center,
            TICK_SIZE,
        )?;
    }

    // Annotations in data space with a pixel nudge.
    for a in &axes.annotations {
        let pos = Pos::new(hpos(a.halign), vpos(a.valign));
        let f = font(a.size, style.foreground).pos(pos);
        let at = (map_x(a.x) + a.dx, map_y(a.y) + a.dy);
        root.draw(&Text::new(a.text.clone(), at, f)).map_err(rmap)?;
    }

    // Title, centered over the plot.
    if let Some(title) = &axes.title {
        let f = bold_font(TITLE_SIZE, style.foreground);
        draw_multiline(
            root,
            title,
            ((left + right) / 2, 10),
            &f,
            HPos::Center,
            VPos::Top,
            TITLE_SIZE,
        )?;
    }

    // Axis titles.
    if let Some(xlabel) = &axes.xlabel {
        let f = label_font.clone().pos(Pos::new(HPos::Center, VPos::Bottom));
        let y = h as i32 - FOOTER_BAND as i32 - 4;
        root.draw(&Text::new(xlabel.clone(), ((left + right) / 2, y), f)).map_err(rmap)?;
    }
    if let Some(ylabel) = &axes.ylabel {
        let f = label_font
            .clone()
            .transform(FontTransform::Rotate270)
            .pos(Pos::new(HPos::Center, VPos::Top));
        root.draw(&Text::new(ylabel.clone(), (6, (top + bottom) / 2), f)).map_err(rmap)?;
    }

    if axes.legend {
        draw_legend(root, fig, style, left, right)?;
    }

    // Attribution footer, right-aligned in the bottom band.
    if let Some(footer) = &axes.footer {
        let f = font(FOOTER_SIZE, style.muted).pos(Pos::new(HPos::Right, VPos::Bottom));
        root.draw(&Text::new(footer.clone(), (right, h as i32 - 8), f)).map_err(rmap)?;
    }

    draw_wordmark(root, fig, style)?;

    Ok(())
}

/// Swatch-and-name legend row across the top of the plot.
fn draw_legend<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    fig: &Figure,
    style: &Style,
    left: i32,
    right: i32,
) -> Result<()> {
    let y = fig.axes.title.as_ref().map_or(8, |t| 16 + line_count(t) as i32 * (TITLE_SIZE as i32 + 6));
    let f = font(TICK_SIZE, style.foreground).pos(Pos::new(HPos::Left, VPos::Center));
    let mut x = left;
    for (name, color) in &fig.axes.legend_entries {
        root.draw(&Rectangle::new(
            [(x, y - 5), (x + 10, y + 5)],
            color.filled(),
        ))
        .map_err(rmap)?;
        root.draw(&Text::new(name.clone(), (x + 15, y), f.clone())).map_err(rmap)?;
        x += 15 + text_width(name, TICK_SIZE) as i32 + 18;
        if x > right {
            break;
        }
    }
    Ok(())
}

/// Brand wordmark in the lower-left corner, sized to a box one-third of the
/// figure width.
fn draw_wordmark<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    fig: &Figure,
    style: &Style,
) -> Result<()> {
    let (w, h) = fig.size;
    let box_w = (w / 3) as f64;
    let glyphs = style.wordmark.chars().count().max(1) as f64;
    let size = (box_w / (glyphs * 0.6)).min(16.0).max(8.0);
    let f = bold_font(size, style.accent).pos(Pos::new(HPos::Left, VPos::Bottom));
    root.draw(&Text::new(style.wordmark.to_string(), (10, h as i32 - 8), f))
        .map_err(rmap)?;
    Ok(())
}

// ---- primitives -------------------------------------------------------------

fn font(size: f64, color: RGBColor) -> TextStyle<'static> {
    ("sans-serif", size).into_font().color(&color)
}

fn bold_font(size: f64, color: RGBColor) -> TextStyle<'static> {
    FontDesc::new(FontFamily::SansSerif, size, FontStyle::Bold).color(&color)
}

fn draw_line<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    from: (i32, i32),
    to: (i32, i32),
    color: RGBColor,
    width: u32,
) -> Result<()> {
    root.draw(&PathElement::new(vec![from, to], color.stroke_width(width)))
        .map_err(rmap)
}

/// Text with embedded newlines drawn line by line; the anchor applies to the
/// whole block.
fn draw_multiline<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    text: &str,
    at: (i32, i32),
    style: &TextStyle<'static>,
    hpos: HPos,
    vpos: VPos,
    size: f64,
) -> Result<()> {
    let lines: Vec<&str> = text.lines().collect();
    let step = size as i32 + 4;
    let block = (lines.len().saturating_sub(1)) as i32 * step;
    let first_y = match vpos {
        VPos::Top => at.1,
        VPos::Center => at.1 - block / 2,
        VPos::Bottom => at.1 - block,
    };
    let f = style.clone().pos(Pos::new(hpos, vpos));
    for (i, line) in lines.iter().enumerate() {
        root.draw(&Text::new((*line).to_string(), (at.0, first_y + i as i32 * step), f.clone()))
            .map_err(rmap)?;
    }
    Ok(())
}

fn hpos(h: HAlign) -> HPos {
    match h {
        HAlign::Left => HPos::Left,
        HAlign::Center => HPos::Center,
        HAlign::Right => HPos::Right,
    }
}

fn vpos(v: VAlign) -> VPos {
    match v {
        VAlign::Top => VPos::Top,
        VAlign::Center => VPos::Center,
        VAlign::Bottom => VPos::Bottom,
    }
}
