// File: crates/flint-charts/src/draw.rs
// Summary: Chart drawers: one routine per kind, producing an unformatted
// figure with the chosen geometry and kind-specific annotations.

use plotters::style::RGBColor;

use crate::data::Dataset;
use crate::error::{Error, Result};
use crate::figure::{Annotation, Bar, Figure, Geom, HAlign, SeriesGeom, Tick, VAlign};
use crate::options::{ChartKind, ChartOptions};
use crate::style::Style;
use crate::ticks::group_thousands;

/// Fraction of one index slot covered by a bar group; the remaining third
/// separates neighboring groups.
const GROUP_WIDTH: f64 = 2.0 / 3.0;

/// Below this many index points, auto tick spacing produces misleading gaps,
/// so every kind that plots against the index ticks each data point.
const FORCE_TICK_BELOW: usize = 6;

/// Build the unformatted figure for `kind`. Dispatch is closed over
/// `ChartKind`; unknown kind strings already failed at parse time.
pub fn draw_chart(
    data: &Dataset,
    kind: ChartKind,
    opts: &ChartOptions,
    style: &Style,
) -> Result<Figure> {
    if data.is_empty() {
        return Err(Error::EmptyData);
    }
    if kind.needs_numeric_index() && data.index().as_numeric().is_none() {
        return Err(Error::NonNumericIndex { kind: kind.name().to_string() });
    }

    let mut fig = Figure::new(opts.size.unwrap_or(style.size));
    fig.axes.horizontal = kind.is_horizontal();
    let colors = series_colors(data.columns().len(), opts, style)?;

    match kind {
        ChartKind::Line => draw_line(&mut fig, data, opts, &colors, style),
        ChartKind::StackedArea => draw_stacked_area(&mut fig, data, opts, &colors),
        ChartKind::Scatter => draw_scatter(&mut fig, data, &colors),
        ChartKind::VerticalBar | ChartKind::HorizontalBar => {
            draw_grouped_bars(&mut fig, data, opts, &colors, kind.is_horizontal())
        }
        ChartKind::StackedVerticalBar | ChartKind::StackedHorizontalBar => {
            draw_stacked_bars(&mut fig, data, &colors, kind.is_horizontal())
        }
    }

    fig.axes.legend_entries = data
        .columns()
        .iter()
        .zip(&colors)
        .map(|(col, &color)| (col.name.clone(), color))
        .collect();

    Ok(fig)
}

// ---- per-kind drawers -------------------------------------------------------

fn draw_line(
    fig: &mut Figure,
    data: &Dataset,
    opts: &ChartOptions,
    colors: &[RGBColor],
    style: &Style,
) {
    let idx = data.index().as_numeric().expect("checked by dispatch");
    let width = opts.line_thickness.unwrap_or(style.line_width);

    for (j, col) in data.columns().iter().enumerate() {
        let points: Vec<(f64, f64)> =
            idx.iter().copied().zip(col.values.iter().copied()).collect();
        if opts.label_lines {
            if let Some(&(x, y)) = points.last() {
                fig.axes.annotations.push(Annotation {
                    x,
                    y,
                    dx: 8,
                    dy: 0,
                    text: format!("{}: {}", col.name, group_thousands(y)),
                    size: 14.0,
                    halign: HAlign::Left,
                    valign: VAlign::Center,
                });
            }
        }
        fig.axes.series.push(SeriesGeom {
            name: col.name.clone(),
            color: colors[j],
            geom: Geom::Line { points, width },
        });
    }

    fig.axes.legend = data.columns().len() > 1 && !opts.label_lines;
    seed_index_axis(fig, data);
}

fn draw_stacked_area(
    fig: &mut Figure,
    data: &Dataset,
    opts: &ChartOptions,
    colors: &[RGBColor],
) {
    let idx = data.index().as_numeric().expect("checked by dispatch");
    let mut cum = vec![0.0f64; idx.len()];

    // Horizontal midpoint of the plotted range, for band labels.
    let x_mid = (idx[0] + idx[idx.len() - 1]) / 2.0;
    let i_mid = idx
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            (*a - x_mid).abs().partial_cmp(&(*b - x_mid).abs()).expect("finite index")
        })
        .map(|(i, _)| i)
        .unwrap_or(0);

    for (j, col) in data.columns().iter().enumerate() {
        let lower: Vec<(f64, f64)> = idx.iter().copied().zip(cum.iter().copied()).collect();
        for (c, v) in cum.iter_mut().zip(col.values.iter()) {
            *c += v;
        }
        let upper: Vec<(f64, f64)> = idx.iter().copied().zip(cum.iter().copied()).collect();

        if opts.label_area {
            let y = (lower[i_mid].1 + upper[i_mid].1) / 2.0;
            fig.axes.annotations.push(Annotation {
                x: idx[i_mid],
                y,
                dx: 0,
                dy: 0,
                text: col.name.clone(),
                size: 14.0,
                halign: HAlign::Center,
                valign: VAlign::Center,
            });
        }
        fig.axes.series.push(SeriesGeom {
            name: col.name.clone(),
            color: colors[j],
            geom: Geom::Band { lower, upper },
        });
    }

    fig.axes.legend = data.columns().len() > 1 && !opts.label_area;
    seed_index_axis(fig, data);
}

fn draw_scatter(fig: &mut Figure, data: &Dataset, colors: &[RGBColor]) {
    let idx = data.index().as_numeric().expect("checked by dispatch");

    for (j, col) in data.columns().iter().enumerate() {
        let points: Vec<(f64, f64)> =
            idx.iter().copied().zip(col.values.iter().copied()).collect();
        fig.axes.series.push(SeriesGeom {
            name: col.name.clone(),
            color: colors[j],
            geom: Geom::Points { points },
        });
    }

    // Legend only when more than one column is plotted.
    fig.axes.legend = data.columns().len() > 1;
    seed_index_axis(fig, data);
}

fn draw_grouped_bars(
    fig: &mut Figure,
    data: &Dataset,
    opts: &ChartOptions,
    colors: &[RGBColor],
    horizontal: bool,
) {
    let ncols = data.columns().len();
    let slot = GROUP_WIDTH / ncols as f64;
    let label_size = (18.0 - 3.0 * ncols as f64).max(6.0);

    for (j, col) in data.columns().iter().enumerate() {
        // Percentage labels when the whole series sits below 1.
        let as_percent =
            col.values.iter().copied().fold(f64::NEG_INFINITY, f64::max) < 1.0;
        let mut bars = Vec::with_capacity(col.values.len());
        for (i, &v) in col.values.iter().enumerate() {
            let lo = i as f64 - GROUP_WIDTH / 2.0 + j as f64 * slot;
            let bar = Bar { lo, hi: lo + slot, base: 0.0, value: v };
            if opts.label_bars {
                fig.axes.annotations.push(bar_label(&bar, v, as_percent, label_size, horizontal));
            }
            bars.push(bar);
        }
        fig.axes.series.push(SeriesGeom {
            name: col.name.clone(),
            color: colors[j],
            geom: Geom::Bars { bars, horizontal },
        });
    }

    fig.axes.legend = ncols > 1;
    seed_category_axis(fig, data.len(), horizontal);
}

fn draw_stacked_bars(
    fig: &mut Figure,
    data: &Dataset,
    colors: &[RGBColor],
    horizontal: bool,
) {
    let mut cum = vec![0.0f64; data.len()];
    let mut stacked = Vec::with_capacity(data.columns().len());

    for (j, col) in data.columns().iter().enumerate() {
        let mut bars = Vec::with_capacity(col.values.len());
        for (i, &v) in col.values.iter().enumerate() {
            let lo = i as f64 - GROUP_WIDTH / 2.0;
            bars.push(Bar { lo, hi: lo + GROUP_WIDTH, base: cum[i], value: cum[i] + v });
            cum[i] += v;
        }
        stacked.push(SeriesGeom {
            name: col.name.clone(),
            color: colors[j],
            geom: Geom::Bars { bars, horizontal },
        });
    }

    // Bottoms are cumulative in column order; draw order is reversed so the
    // first column lands on top.
    stacked.reverse();
    fig.axes.series.extend(stacked);

    fig.axes.legend = data.columns().len() > 1;
    seed_category_axis(fig, data.len(), horizontal);
}

// ---- helpers ----------------------------------------------------------------

fn bar_label(bar: &Bar, v: f64, as_percent: bool, size: f64, horizontal: bool) -> Annotation {
    let text = if as_percent {
        format!("{:.0}%", v * 100.0)
    } else {
        group_thousands(v)
    };
    let pos = (bar.lo + bar.hi) / 2.0;
    if horizontal {
        Annotation {
            x: bar.value,
            y: pos,
            dx: 4,
            dy: 0,
            text,
            size,
            halign: HAlign::Left,
            valign: VAlign::Center,
        }
    } else {
        Annotation {
            x: pos,
            y: bar.value,
            dx: 0,
            dy: -4,
            text,
            size,
            halign: HAlign::Center,
            valign: VAlign::Bottom,
        }
    }
}

/// Provisional limits for kinds plotted over the numeric index, plus forced
/// per-point ticks for sparse data.
fn seed_index_axis(fig: &mut Figure, data: &Dataset) {
    let (lo, hi) = data.index_range().expect("checked by dispatch");
    fig.axes.xlim = (lo, if hi > lo { hi } else { lo + 1.0 });
    fig.axes.ylim = (0.0, data.value_max().max(1.0));
    if data.len() < FORCE_TICK_BELOW {
        let idx = data.index().as_numeric().expect("checked by dispatch");
        fig.axes.xticks = idx.iter().map(|&p| Tick::at(p)).collect();
    }
}

/// Provisional limits and per-group ticks for bar kinds: one slot per index
/// value, centered on 0..n-1, padded so edge bars are not clipped.
fn seed_category_axis(fig: &mut Figure, n: usize, horizontal: bool) {
    let span = (-GROUP_WIDTH, (n - 1) as f64 + GROUP_WIDTH);
    let ticks: Vec<Tick> = (0..n).map(|i| Tick::at(i as f64)).collect();
    if horizontal {
        fig.axes.ylim = span;
        fig.axes.yticks = ticks;
    } else {
        fig.axes.xlim = span;
        fig.axes.xticks = ticks;
    }
}

fn series_colors(n: usize, opts: &ChartOptions, style: &Style) -> Result<Vec<RGBColor>> {
    match &opts.color {
        None => Ok((0..n).map(|j| style.series_color(j)).collect()),
        Some(hexes) => {
            if hexes.is_empty() {
                return Err(Error::InvalidOption {
                    option: "color".to_string(),
                    value: "(empty list)".to_string(),
                });
            }
            let parsed: Vec<RGBColor> =
                hexes.iter().map(|h| parse_hex(h)).collect::<Result<_>>()?;
            Ok((0..n).map(|j| parsed[j % parsed.len()]).collect())
        }
    }
}

fn parse_hex(s: &str) -> Result<RGBColor> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    let invalid = || Error::InvalidOption { option: "color".to_string(), value: s.to_string() };
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let byte = |r: &str| u8::from_str_radix(r, 16).map_err(|_| invalid());
    Ok(RGBColor(byte(&hex[0..2])?, byte(&hex[2..4])?, byte(&hex[4..6])?))
}
