// File: crates/flint-charts/src/ticks.rs
// Summary: Tick placement and label formatting heuristics shared by every
// chart kind: nice-step locator, thousands grouping, "K" collapsing, year
// labels and category-label wrapping.

use num_format::{Locale, ToFormattedString};

/// Largest tick value at which labels stay un-collapsed; at or above this
/// they are reported in K-suffixed thousands to prevent label overflow.
pub const ABBREVIATE_AT: f64 = 1_000_000.0;

/// Pick a tick step of 1/2/2.5/5 times a power of ten, at least `raw`.
fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let mag = 10f64.powf(raw.log10().floor());
    for mult in [1.0, 2.0, 2.5, 5.0, 10.0] {
        let step = mult * mag;
        if step >= raw - mag * 1e-9 {
            return step;
        }
    }
    10.0 * mag
}

/// Tick positions across `[min, max]` on nice-step multiples, aiming for
/// roughly `target` intervals. `integer` restricts steps to whole numbers
/// (year axes never land on fractional ticks).
pub fn locate(min: f64, max: f64, target: usize, integer: bool) -> Vec<f64> {
    let span = max - min;
    if !span.is_finite() || span <= 0.0 {
        return vec![min];
    }
    let mut step = nice_step(span / target.max(1) as f64);
    if integer && step < 1.0 {
        step = 1.0;
    }
    if integer && (step - 2.5).abs() < f64::EPSILON {
        step = 2.0;
    }
    let first = (min / step).ceil();
    let mut out = Vec::new();
    let mut k = first;
    while k * step <= max + step * 1e-9 {
        // Re-multiply from the step index to avoid accumulation noise.
        out.push(k * step);
        k += 1.0;
    }
    if out.is_empty() {
        out.push(min);
    }
    out
}

/// Smallest nice-step multiple at or above `v`, used when the caller gave no
/// explicit axis maximum.
pub fn nice_ceil(min: f64, v: f64, target: usize) -> f64 {
    let span = v - min;
    if !span.is_finite() || span <= 0.0 {
        return v;
    }
    let step = nice_step(span / target.max(1) as f64);
    (v / step).ceil() * step
}

/// Thousands-separated integer rendering, zero decimal places.
pub fn group_thousands(v: f64) -> String {
    (v.round() as i64).to_formatted_string(&Locale::en)
}

/// Thousands-separated rendering with one decimal kept, for collapsed ticks
/// that do not sit on a whole thousand (e.g. `1,250.5`).
fn group_one_decimal(v: f64) -> String {
    let neg = v < 0.0;
    let scaled = (v.abs() * 10.0).round() as i64;
    let whole = (scaled / 10).to_formatted_string(&Locale::en);
    let frac = scaled % 10;
    format!("{}{whole}.{frac}", if neg { "-" } else { "" })
}

/// Derive display labels from tick values.
///
/// Year axes render bare integers regardless of magnitude. Otherwise, once
/// the largest tick reaches `ABBREVIATE_AT`, every tick is divided by 1,000
/// and suffixed "K" (zero ticks go blank); ticks off the whole-thousand grid
/// keep one decimal. Below the threshold, plain thousands grouping.
pub fn format_tick_labels(ticks: &[f64], year: bool) -> Vec<String> {
    if year {
        return ticks.iter().map(|t| format!("{}", t.round() as i64)).collect();
    }
    let max = ticks.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max >= ABBREVIATE_AT {
        let fractional = ticks.iter().any(|t| (t % 1000.0).abs() > 1e-9);
        return ticks
            .iter()
            .map(|&t| {
                if t == 0.0 {
                    String::new()
                } else if fractional {
                    format!("{}K", group_one_decimal(t / 1000.0))
                } else {
                    format!("{}K", group_thousands(t / 1000.0))
                }
            })
            .collect();
    }
    ticks.iter().map(|&t| group_thousands(t)).collect()
}

/// True when every label reads as a 4-digit year.
pub fn looks_like_years(labels: &[String]) -> bool {
    !labels.is_empty()
        && labels
            .iter()
            .all(|l| l.len() == 4 && l.chars().all(|c| c.is_ascii_digit()))
}

/// Word-wrap a category label to `width` characters per line.
pub fn wrap(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut line_len = 0usize;
    for word in text.split_whitespace() {
        if line_len == 0 {
            out.push_str(word);
            line_len = word.chars().count();
        } else if line_len + 1 + word.chars().count() <= width {
            out.push(' ');
            out.push_str(word);
            line_len += 1 + word.chars().count();
        } else {
            out.push('\n');
            out.push_str(word);
            line_len = word.chars().count();
        }
    }
    out
}
