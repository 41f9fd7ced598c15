// File: crates/flint-charts/src/lib.rs
// Summary: Library entry point; exports the public API for building, styling
// and serializing house-style charts.

pub mod data;
pub mod draw;
pub mod error;
pub mod figure;
pub mod format;
pub mod options;
pub mod render;
pub mod style;
pub mod ticks;

pub use data::{Column, Dataset, Index};
pub use error::{Error, Result};
pub use figure::{Axes, Figure, Tick};
pub use options::{ChartKind, ChartOptions};
pub use render::ImageFormat;
pub use style::Style;

use std::fs;
use std::path::{Path, PathBuf};

/// Build the figure for `kind` without serializing it: the drawer produces
/// the geometry, the formatter applies the house style. Callers can inspect
/// limits, ticks and advisories directly.
pub fn create_figure(data: &Dataset, kind: ChartKind, opts: &ChartOptions) -> Result<Figure> {
    let style = style::house();
    let mut fig = draw::draw_chart(data, kind, opts, style)?;
    format::format_figure(&mut fig, data, kind, opts, style);
    log::debug!(
        "figure built: kind={kind} series={} size={}x{}",
        fig.axes.series.len(),
        fig.size.0,
        fig.size.1
    );
    Ok(fig)
}

/// Build and serialize a chart to an in-memory image buffer.
pub fn create_image(
    data: &Dataset,
    kind: ChartKind,
    format: ImageFormat,
    opts: &ChartOptions,
) -> Result<Vec<u8>> {
    let fig = create_figure(data, kind, opts)?;
    let style = style::house();
    match format {
        ImageFormat::Png => render::render_png_bytes(&fig, style),
        ImageFormat::Svg => render::render_svg_string(&fig, style).map(String::into_bytes),
    }
}

/// Build a chart and write it to `outfile`, creating parent directories as
/// needed. The encoding comes from `format` when given, otherwise from the
/// file extension. Returns the path written.
pub fn save_fig(
    outfile: impl AsRef<Path>,
    data: &Dataset,
    kind: ChartKind,
    format: Option<ImageFormat>,
    opts: &ChartOptions,
) -> Result<PathBuf> {
    let outfile = outfile.as_ref();
    let format = match format {
        Some(f) => f,
        None => outfile
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| Error::UnsupportedFormat(outfile.display().to_string()))?
            .parse()?,
    };
    if let Some(parent) = outfile.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let bytes = create_image(data, kind, format, opts)?;
    fs::write(outfile, bytes)?;
    log::info!("wrote {}", outfile.display());
    Ok(outfile.to_path_buf())
}
