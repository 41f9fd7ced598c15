// File: crates/flint-charts/src/format.rs
// Summary: Figure formatter: finalizes axis limits, tick labels, titles,
// footer and cosmetic flags on a drawer-produced figure. Every figure passes
// through here exactly once.

use crate::data::{Dataset, Index};
use crate::figure::{Figure, Tick};
use crate::options::{ChartKind, ChartOptions};
use crate::style::Style;
use crate::ticks::{self, format_tick_labels, looks_like_years};

/// Interval count the tick locator aims for on an auto axis.
const TARGET_TICKS: usize = 5;

/// Category labels on horizontal bars wrap at this many characters.
const HBAR_WRAP: usize = 30;

/// Year labels on a vertical bar axis thin to every second one past this
/// many categories.
const YEAR_THIN_ABOVE: usize = 12;

/// Finalize a drawer-produced figure in place. Limit negotiation, tick and
/// label normalization, text cleanup, footer resolution, and the layout
/// advisories. Infallible: anything questionable becomes an advisory.
pub fn format_figure(
    fig: &mut Figure,
    data: &Dataset,
    kind: ChartKind,
    opts: &ChartOptions,
    style: &Style,
) {
    apply_limits(fig, data, kind, opts);
    apply_value_ticks(fig, opts);
    if kind.is_bar() {
        apply_category_labels(fig, data, kind, opts);
    } else {
        apply_index_ticks(fig, opts);
    }

    fig.axes.title = opts.title.as_deref().map(clean_text);
    apply_axis_titles(fig, data, opts);

    fig.axes.footer = Some(match &opts.source {
        Some(src) => clean_text(src),
        None => style.brand_notice.to_string(),
    });

    fig.axes.grid = opts.grid;
    fig.axes.spines = opts.spines;
    fig.axes.rot = opts.rot.unwrap_or(0.0);
}

// ---- limits -----------------------------------------------------------------

fn apply_limits(fig: &mut Figure, data: &Dataset, kind: ChartKind, opts: &ChartOptions) {
    let data_max = match kind {
        ChartKind::StackedArea
        | ChartKind::StackedVerticalBar
        | ChartKind::StackedHorizontalBar => data.stacked_max(),
        _ => data.value_max(),
    };

    if fig.axes.horizontal {
        let lo = opts.xmin.unwrap_or(0.0);
        let hi = opts.xmax.unwrap_or_else(|| auto_max(lo, data_max));
        fig.axes.xlim = widen((lo, hi));
        if let Some(v) = opts.ymin {
            fig.axes.ylim.0 = v;
        }
        if let Some(v) = opts.ymax {
            fig.axes.ylim.1 = v;
        }
        fig.axes.ylim = widen(fig.axes.ylim);
    } else {
        let lo = opts.ymin.unwrap_or(0.0);
        let hi = opts.ymax.unwrap_or_else(|| auto_max(lo, data_max));
        fig.axes.ylim = widen((lo, hi));
        if let Some(v) = opts.xmin {
            fig.axes.xlim.0 = v;
        }
        if let Some(v) = opts.xmax {
            fig.axes.xlim.1 = v;
        }
        fig.axes.xlim = widen(fig.axes.xlim);
    }
}

/// Next nice tick above the data maximum, used when no explicit maximum was
/// given.
fn auto_max(lo: f64, data_max: f64) -> f64 {
    if !data_max.is_finite() || data_max <= lo {
        return lo + 1.0;
    }
    ticks::nice_ceil(lo, data_max, TARGET_TICKS)
}

/// Degenerate ranges draw as a blank axis; give them a unit of room.
fn widen(lim: (f64, f64)) -> (f64, f64) {
    if lim.1 > lim.0 {
        lim
    } else {
        (lim.0, lim.0 + 1.0)
    }
}

// ---- ticks ------------------------------------------------------------------

/// Value-axis ticks: x on horizontal kinds, y otherwise. Caller locations and
/// labels win; derived labels get thousands grouping and the K collapse.
fn apply_value_ticks(fig: &mut Figure, opts: &ChartOptions) {
    let horizontal = fig.axes.horizontal;
    let (lim, loc, labels, year) = if horizontal {
        (fig.axes.xlim, &opts.xtick_loc, &opts.xticklabels, opts.xyear)
    } else {
        (fig.axes.ylim, &opts.ytick_loc, &opts.yticklabels, opts.yyear)
    };

    let positions = match loc {
        Some(given) => given.clone(),
        None => ticks::locate(lim.0, lim.1, TARGET_TICKS, year),
    };
    let mut resolved = resolve_labels(fig, &positions, labels.as_deref(), year);

    // The zero tick at the origin reads as clutter on the value axis when
    // labels were derived rather than supplied.
    if !horizontal && labels.is_none() {
        for t in &mut resolved {
            if t.pos == 0.0 {
                t.label.clear();
            }
        }
    }

    if horizontal {
        fig.axes.xticks = resolved;
    } else {
        fig.axes.yticks = resolved;
    }
}

/// Index-axis ticks for line, scatter and stacked area. Sparse data already
/// carries a seeded tick per point; those positions are kept and labeled.
fn apply_index_ticks(fig: &mut Figure, opts: &ChartOptions) {
    let positions = match &opts.xtick_loc {
        Some(given) => given.clone(),
        None if !fig.axes.xticks.is_empty() => {
            fig.axes.xticks.iter().map(|t| t.pos).collect()
        }
        None => ticks::locate(fig.axes.xlim.0, fig.axes.xlim.1, TARGET_TICKS, opts.xyear),
    };
    fig.axes.xticks =
        resolve_labels(fig, &positions, opts.xticklabels.as_deref(), opts.xyear);
}

/// Zip positions with caller labels, or derive labels from the values.
/// A count mismatch is an advisory; extra labels drop, missing ones blank.
fn resolve_labels(
    fig: &mut Figure,
    positions: &[f64],
    labels: Option<&[String]>,
    year: bool,
) -> Vec<Tick> {
    let texts = match labels {
        Some(given) => {
            if given.len() != positions.len() {
                fig.advise(format!(
                    "{} tick labels supplied for {} ticks; pairing what fits",
                    given.len(),
                    positions.len()
                ));
            }
            positions
                .iter()
                .enumerate()
                .map(|(i, _)| given.get(i).cloned().unwrap_or_default())
                .collect::<Vec<_>>()
        }
        None => format_tick_labels(positions, year),
    };
    positions
        .iter()
        .zip(texts)
        .map(|(&pos, label)| Tick { pos, label })
        .collect()
}

// ---- bar category labels ----------------------------------------------------

/// Position-axis labels for bar kinds come straight from the dataset index,
/// then pass kind-specific crowding fixes.
fn apply_category_labels(
    fig: &mut Figure,
    data: &Dataset,
    kind: ChartKind,
    opts: &ChartOptions,
) {
    let horizontal = kind.is_horizontal();
    let supplied = if horizontal { &opts.yticklabels } else { &opts.xticklabels };
    let mut labels = match supplied {
        Some(given) => given.clone(),
        None => index_labels(data),
    };
    if let Some(given) = supplied {
        if given.len() != data.len() {
            fig.advise(format!(
                "{} category labels supplied for {} groups; pairing what fits",
                given.len(),
                data.len()
            ));
        }
    }
    labels.resize(data.len(), String::new());

    if horizontal {
        for l in &mut labels {
            *l = ticks::wrap(l, HBAR_WRAP);
        }
    } else {
        if looks_like_years(&labels) && labels.len() > YEAR_THIN_ABOVE {
            for (i, l) in labels.iter_mut().enumerate() {
                if i % 2 == 1 {
                    l.clear();
                }
            }
        }
        suggest_horizontal_layout(fig, &labels);
    }

    let ticks: Vec<Tick> = labels
        .into_iter()
        .enumerate()
        .map(|(i, label)| Tick { pos: i as f64, label })
        .collect();
    if horizontal {
        fig.axes.yticks = ticks;
    } else {
        fig.axes.xticks = ticks;
    }
}

/// Display form of the index for bar group labels. Numeric values print
/// bare, so four-digit years read as years.
fn index_labels(data: &Dataset) -> Vec<String> {
    match data.index() {
        Index::Labels(v) => v.clone(),
        Index::Numeric(v) => v
            .iter()
            .map(|&x| {
                if x.fract().abs() < 1e-9 {
                    format!("{}", x as i64)
                } else {
                    format!("{x}")
                }
            })
            .collect(),
    }
}

/// Long category labels crowd a vertical layout; suggest turning the chart
/// sideways. Thresholds follow house practice for when labels start
/// colliding.
fn suggest_horizontal_layout(fig: &mut Figure, labels: &[String]) {
    let longest = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let total: usize = labels.iter().map(|l| l.chars().count()).sum();
    if longest > 9 || total > 49 || (longest > 6 && labels.len() > 7) {
        fig.advise("long category labels; consider horizontal_bar for readability");
    }
}

// ---- text -------------------------------------------------------------------

/// Expand literal `\n` markers and set year ranges with an en-dash.
fn clean_text(text: &str) -> String {
    en_dash_year_ranges(&text.replace("\\n", "\n"))
}

/// Rewrite every `dddd-dddd` year range with an en-dash. Digit runs longer
/// than four on either side are left alone.
fn en_dash_year_ranges(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '-' && is_year_boundary(&chars, i) {
            out.push('\u{2013}');
        } else {
            out.push(chars[i]);
        }
        i += 1;
    }
    out
}

fn is_year_boundary(chars: &[char], dash: usize) -> bool {
    let digits_before = chars[..dash]
        .iter()
        .rev()
        .take_while(|c| c.is_ascii_digit())
        .count();
    let digits_after = chars[dash + 1..]
        .iter()
        .take_while(|c| c.is_ascii_digit())
        .count();
    digits_before == 4 && digits_after == 4
}

// ---- axis titles ------------------------------------------------------------

/// Default axis titles: index name on the position axis, first column name on
/// the value axis; horizontal kinds swap. Explicit labels and `_off` flags
/// win.
fn apply_axis_titles(fig: &mut Figure, data: &Dataset, opts: &ChartOptions) {
    let index_title = data.index_name.clone();
    let value_title = data.columns().first().map(|c| c.name.clone());
    let (x_default, y_default) = if fig.axes.horizontal {
        (value_title, index_title)
    } else {
        (index_title, value_title)
    };

    fig.axes.xlabel = if opts.xlabel_off {
        None
    } else {
        opts.xlabel.as_deref().map(clean_text).or(x_default)
    };
    fig.axes.ylabel = if opts.ylabel_off {
        None
    } else {
        opts.ylabel.as_deref().map(clean_text).or(y_default)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_ranges_get_en_dashes() {
        assert_eq!(en_dash_year_ranges("Growth, 1970-2016"), "Growth, 1970\u{2013}2016");
        assert_eq!(en_dash_year_ranges("1970-2016 and 1880-1890"), "1970\u{2013}2016 and 1880\u{2013}1890");
        assert_eq!(en_dash_year_ranges("12345-2016"), "12345-2016");
        assert_eq!(en_dash_year_ranges("part-time"), "part-time");
    }

    #[test]
    fn escaped_newlines_expand() {
        assert_eq!(clean_text("top\\nbottom"), "top\nbottom");
    }

    #[test]
    fn widen_keeps_ordered_ranges() {
        assert_eq!(widen((1.0, 20.0)), (1.0, 20.0));
        assert_eq!(widen((5.0, 5.0)), (5.0, 6.0));
    }
}
