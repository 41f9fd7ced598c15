// File: crates/flint-charts/src/options.rs
// Summary: Chart kind enumeration and the flat option set every chart accepts.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// The closed set of supported chart kinds. Anything else fails with
/// `Error::UnsupportedKind` before any drawing occurs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    StackedArea,
    Scatter,
    VerticalBar,
    HorizontalBar,
    StackedVerticalBar,
    StackedHorizontalBar,
}

impl ChartKind {
    pub const ALL: [ChartKind; 7] = [
        ChartKind::Line,
        ChartKind::StackedArea,
        ChartKind::Scatter,
        ChartKind::VerticalBar,
        ChartKind::HorizontalBar,
        ChartKind::StackedVerticalBar,
        ChartKind::StackedHorizontalBar,
    ];

    /// Bars laid out along the y axis (values grow rightward).
    pub fn is_horizontal(self) -> bool {
        matches!(self, ChartKind::HorizontalBar | ChartKind::StackedHorizontalBar)
    }

    pub fn is_bar(self) -> bool {
        matches!(
            self,
            ChartKind::VerticalBar
                | ChartKind::HorizontalBar
                | ChartKind::StackedVerticalBar
                | ChartKind::StackedHorizontalBar
        )
    }

    /// Kinds that plot column values against a numeric index axis.
    pub fn needs_numeric_index(self) -> bool {
        matches!(self, ChartKind::Line | ChartKind::StackedArea | ChartKind::Scatter)
    }

    pub fn name(self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::StackedArea => "stacked_area",
            ChartKind::Scatter => "scatter",
            ChartKind::VerticalBar => "vertical_bar",
            ChartKind::HorizontalBar => "horizontal_bar",
            ChartKind::StackedVerticalBar => "stacked_vbar",
            ChartKind::StackedHorizontalBar => "stacked_hbar",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChartKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "line" => Ok(ChartKind::Line),
            "stacked_area" => Ok(ChartKind::StackedArea),
            "scatter" => Ok(ChartKind::Scatter),
            "vertical_bar" => Ok(ChartKind::VerticalBar),
            "horizontal_bar" => Ok(ChartKind::HorizontalBar),
            "stacked_vbar" => Ok(ChartKind::StackedVerticalBar),
            "stacked_hbar" => Ok(ChartKind::StackedHorizontalBar),
            _ => Err(Error::UnsupportedKind(s.to_string())),
        }
    }
}

/// Every recognized chart option, declared and defaulted. No field depends on
/// another except that tick label lists are paired against the ticks actually
/// placed (validated by the formatter, advisory on mismatch).
#[derive(Clone, Debug, Default)]
pub struct ChartOptions {
    pub title: Option<String>,
    pub source: Option<String>,
    pub xlabel: Option<String>,
    pub ylabel: Option<String>,
    pub xlabel_off: bool,
    pub ylabel_off: bool,
    pub xmin: Option<f64>,
    pub xmax: Option<f64>,
    pub ymin: Option<f64>,
    pub ymax: Option<f64>,
    pub xtick_loc: Option<Vec<f64>>,
    pub ytick_loc: Option<Vec<f64>>,
    pub xticklabels: Option<Vec<String>>,
    pub yticklabels: Option<Vec<String>>,
    /// Render x ticks as bare integer years (no separators, no K-collapse).
    pub xyear: bool,
    pub yyear: bool,
    /// X tick label rotation in degrees.
    pub rot: Option<f64>,
    pub grid: bool,
    pub spines: bool,
    pub label_lines: bool,
    pub label_area: bool,
    pub label_bars: bool,
    /// Hex colors overriding the house palette cycle, e.g. "#00558C".
    pub color: Option<Vec<String>>,
    pub line_thickness: Option<u32>,
    /// Figure size in pixels; falls back to the house default.
    pub size: Option<(u32, u32)>,
}

impl ChartOptions {
    /// String boundary for loosely-typed callers (CLI `--set`, config files).
    /// Unknown names fail hard; recognized names parse into the typed field.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<()> {
        let invalid = || Error::InvalidOption {
            option: key.to_string(),
            value: value.to_string(),
        };
        match key {
            "title" => self.title = Some(value.to_string()),
            "source" => self.source = Some(value.to_string()),
            "xlabel" => self.xlabel = Some(value.to_string()),
            "ylabel" => self.ylabel = Some(value.to_string()),
            "xlabel_off" => self.xlabel_off = parse_bool(value).ok_or_else(invalid)?,
            "ylabel_off" => self.ylabel_off = parse_bool(value).ok_or_else(invalid)?,
            "xmin" => self.xmin = Some(value.parse().map_err(|_| invalid())?),
            "xmax" => self.xmax = Some(value.parse().map_err(|_| invalid())?),
            "ymin" => self.ymin = Some(value.parse().map_err(|_| invalid())?),
            "ymax" => self.ymax = Some(value.parse().map_err(|_| invalid())?),
            "xtick_loc" => self.xtick_loc = Some(parse_floats(value).ok_or_else(invalid)?),
            "ytick_loc" => self.ytick_loc = Some(parse_floats(value).ok_or_else(invalid)?),
            "xticklabels" => self.xticklabels = Some(parse_strings(value)),
            "yticklabels" => self.yticklabels = Some(parse_strings(value)),
            "xyear" => self.xyear = parse_bool(value).ok_or_else(invalid)?,
            "yyear" => self.yyear = parse_bool(value).ok_or_else(invalid)?,
            "rot" => self.rot = Some(value.parse().map_err(|_| invalid())?),
            "grid" => self.grid = parse_bool(value).ok_or_else(invalid)?,
            "spines" => self.spines = parse_bool(value).ok_or_else(invalid)?,
            "label_lines" => self.label_lines = parse_bool(value).ok_or_else(invalid)?,
            "label_area" => self.label_area = parse_bool(value).ok_or_else(invalid)?,
            "label_bars" => self.label_bars = parse_bool(value).ok_or_else(invalid)?,
            "color" => self.color = Some(parse_strings(value)),
            "line_thickness" => self.line_thickness = Some(value.parse().map_err(|_| invalid())?),
            "size" => self.size = Some(parse_size(value).ok_or_else(invalid)?),
            _ => return Err(Error::UnknownOption(key.to_string())),
        }
        Ok(())
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Some(true),
        "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

fn parse_floats(s: &str) -> Option<Vec<f64>> {
    s.split(',')
        .map(|p| p.trim().parse::<f64>().ok())
        .collect()
}

fn parse_strings(s: &str) -> Vec<String> {
    s.split(',').map(|p| p.trim().to_string()).collect()
}

fn parse_size(s: &str) -> Option<(u32, u32)> {
    let (w, h) = s.split_once(['x', 'X'])?;
    Some((w.trim().parse().ok()?, h.trim().parse().ok()?))
}
