// File: crates/flint-charts/src/figure.rs
// Summary: In-memory figure model: one coordinate system, series geometry,
// annotations, and the style flags the renderer consumes.

use plotters::style::RGBColor;

/// A labeled position along an axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub pos: f64,
    pub label: String,
}

impl Tick {
    pub fn at(pos: f64) -> Self {
        Self { pos, label: String::new() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Center,
    Bottom,
}

/// Text placed in data coordinates with a pixel nudge.
#[derive(Clone, Debug)]
pub struct Annotation {
    pub x: f64,
    pub y: f64,
    pub dx: i32,
    pub dy: i32,
    pub text: String,
    pub size: f64,
    pub halign: HAlign,
    pub valign: VAlign,
}

/// One bar: `lo..hi` along the position axis, `base..value` along the value axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bar {
    pub lo: f64,
    pub hi: f64,
    pub base: f64,
    pub value: f64,
}

#[derive(Clone, Debug)]
pub enum Geom {
    Line { points: Vec<(f64, f64)>, width: u32 },
    Points { points: Vec<(f64, f64)> },
    /// Stacked band between two cumulative curves.
    Band { lower: Vec<(f64, f64)>, upper: Vec<(f64, f64)> },
    Bars { bars: Vec<Bar>, horizontal: bool },
}

#[derive(Clone, Debug)]
pub struct SeriesGeom {
    pub name: String,
    pub color: RGBColor,
    pub geom: Geom,
}

/// The single coordinate system of a figure. Limits and ticks start as the
/// drawer's provisional values and are finalized by the formatter.
#[derive(Clone, Debug)]
pub struct Axes {
    pub title: Option<String>,
    pub xlabel: Option<String>,
    pub ylabel: Option<String>,
    pub xlim: (f64, f64),
    pub ylim: (f64, f64),
    pub xticks: Vec<Tick>,
    pub yticks: Vec<Tick>,
    pub series: Vec<SeriesGeom>,
    pub annotations: Vec<Annotation>,
    pub legend: bool,
    /// Legend rows in dataset column order, independent of draw order
    /// (stacked kinds draw series reversed).
    pub legend_entries: Vec<(String, RGBColor)>,
    pub grid: bool,
    pub spines: bool,
    /// X tick label rotation in degrees (quantized at render time).
    pub rot: f64,
    /// Resolved attribution footer (caller source or house notice).
    pub footer: Option<String>,
    /// Bars run along the y axis; values grow rightward.
    pub horizontal: bool,
}

impl Axes {
    fn new() -> Self {
        Self {
            title: None,
            xlabel: None,
            ylabel: None,
            xlim: (0.0, 1.0),
            ylim: (0.0, 1.0),
            xticks: Vec::new(),
            yticks: Vec::new(),
            series: Vec::new(),
            annotations: Vec::new(),
            legend: false,
            legend_entries: Vec::new(),
            grid: false,
            spines: false,
            rot: 0.0,
            footer: None,
            horizontal: false,
        }
    }
}

/// A drawable figure: created fresh per request by a chart drawer, mutated in
/// place by the formatter, then rendered or handed back to the caller. Never
/// cached or reused.
#[derive(Clone, Debug)]
pub struct Figure {
    pub size: (u32, u32),
    pub axes: Axes,
    /// Non-fatal suggestions recorded while formatting (also logged).
    pub advisories: Vec<String>,
}

impl Figure {
    pub fn new(size: (u32, u32)) -> Self {
        Self { size, axes: Axes::new(), advisories: Vec::new() }
    }

    /// Record a non-fatal suggestion; never alters control flow.
    pub fn advise(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        log::warn!("{msg}");
        self.advisories.push(msg);
    }
}
