// File: crates/flint-cli/src/main.rs
// Summary: The `flint` binary: reads a CSV (index in the first column),
// builds the requested chart kind and writes a styled PNG or SVG.

use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use clap::{ArgAction, Parser};
use log::{debug, info};

use flint_charts::{save_fig, ChartKind, ChartOptions, Dataset, ImageFormat};

#[derive(Parser)]
#[command(name = "flint")]
#[command(about = "Generate house-styled charts from CSV data")]
struct Cli {
    /// Input CSV; the first column is the index, remaining columns are series.
    input: PathBuf,

    /// Output path; the extension selects the format unless --format is given.
    #[arg(short, long)]
    outfile: Option<PathBuf>,

    /// Chart kind: line, stacked_area, scatter, vertical_bar, horizontal_bar,
    /// stacked_vbar, stacked_hbar.
    #[arg(short, long, default_value = "line")]
    kind: ChartKind,

    /// Output format (png, svg), overriding the outfile extension.
    #[arg(long)]
    format: Option<ImageFormat>,

    #[arg(long)]
    title: Option<String>,
    /// Attribution line shown beneath the plot.
    #[arg(long)]
    source: Option<String>,
    #[arg(long)]
    xlabel: Option<String>,
    #[arg(long)]
    ylabel: Option<String>,
    /// Suppress the x axis title.
    #[arg(long)]
    xlabel_off: bool,
    /// Suppress the y axis title.
    #[arg(long)]
    ylabel_off: bool,

    #[arg(long)]
    xmin: Option<f64>,
    #[arg(long)]
    xmax: Option<f64>,
    #[arg(long)]
    ymin: Option<f64>,
    #[arg(long)]
    ymax: Option<f64>,

    /// Explicit x tick positions (comma-separated).
    #[arg(long, value_delimiter = ',')]
    xtick_loc: Option<Vec<f64>>,
    /// Explicit y tick positions (comma-separated).
    #[arg(long, value_delimiter = ',')]
    ytick_loc: Option<Vec<f64>>,
    /// Explicit x tick labels (comma-separated).
    #[arg(long, value_delimiter = ',')]
    xticklabels: Option<Vec<String>>,
    /// Explicit y tick labels (comma-separated).
    #[arg(long, value_delimiter = ',')]
    yticklabels: Option<Vec<String>>,

    /// Treat the x axis as years (bare integer labels).
    #[arg(long)]
    xyear: bool,
    /// Treat the y axis as years (bare integer labels).
    #[arg(long)]
    yyear: bool,

    /// X tick label rotation in degrees.
    #[arg(long)]
    rot: Option<f64>,
    #[arg(long)]
    grid: bool,
    #[arg(long)]
    spines: bool,
    /// Label each line at its final point.
    #[arg(long)]
    label_lines: bool,
    /// Label each stacked band at its center.
    #[arg(long)]
    label_area: bool,
    /// Label each bar with its value.
    #[arg(long)]
    label_bars: bool,

    /// Series colors as hex codes (comma-separated), cycling if fewer than
    /// the column count.
    #[arg(long, value_delimiter = ',')]
    color: Option<Vec<String>>,
    #[arg(long)]
    line_thickness: Option<u32>,
    /// Figure size as WIDTHxHEIGHT in pixels.
    #[arg(long)]
    size: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, action = ArgAction::Count)]
    verbose: u8,
    /// Decrease log verbosity (-q warnings only, -qq errors only).
    #[arg(short, action = ArgAction::Count)]
    quiet: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let data = read_dataset(&cli.input)
        .with_context(|| format!("failed to read '{}'", cli.input.display()))?;
    debug!("loaded {} rows, {} columns", data.len(), data.columns().len());

    let outfile = cli
        .outfile
        .clone()
        .unwrap_or_else(|| cli.input.with_extension("png"));
    let opts = cli.to_options()?;

    let written = save_fig(&outfile, &data, cli.kind, cli.format, &opts)
        .with_context(|| format!("failed to write '{}'", outfile.display()))?;
    info!("wrote {}", written.display());
    Ok(())
}

impl Cli {
    fn to_options(&self) -> Result<ChartOptions> {
        let mut opts = ChartOptions {
            title: self.title.clone(),
            source: self.source.clone(),
            xlabel: self.xlabel.clone(),
            ylabel: self.ylabel.clone(),
            xlabel_off: self.xlabel_off,
            ylabel_off: self.ylabel_off,
            xmin: self.xmin,
            xmax: self.xmax,
            ymin: self.ymin,
            ymax: self.ymax,
            xtick_loc: self.xtick_loc.clone(),
            ytick_loc: self.ytick_loc.clone(),
            xticklabels: self.xticklabels.clone(),
            yticklabels: self.yticklabels.clone(),
            xyear: self.xyear,
            yyear: self.yyear,
            rot: self.rot,
            grid: self.grid,
            spines: self.spines,
            label_lines: self.label_lines,
            label_area: self.label_area,
            label_bars: self.label_bars,
            color: self.color.clone(),
            line_thickness: self.line_thickness,
            size: None,
        };
        if let Some(size) = &self.size {
            opts.apply("size", size).context("invalid --size")?;
        }
        Ok(opts)
    }
}

fn init_logging(verbose: u8, quiet: u8) {
    let level = match verbose as i8 - quiet as i8 {
        i8::MIN..=-2 => log::LevelFilter::Error,
        -1 => log::LevelFilter::Warn,
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

/// Load a CSV into a dataset. The first column is the index; it is numeric
/// when every entry parses as a number, categorical otherwise. All remaining
/// columns must be numeric.
fn read_dataset(path: &Path) -> Result<Dataset> {
    let mut rdr = csv::Reader::from_path(path)?;
    let headers = rdr.headers()?.clone();
    ensure!(
        headers.len() >= 2,
        "need an index column and at least one value column, got {}",
        headers.len()
    );

    let mut index_raw: Vec<String> = Vec::new();
    let mut cols: Vec<Vec<f64>> = vec![Vec::new(); headers.len() - 1];
    for (row, record) in rdr.records().enumerate() {
        let record = record?;
        index_raw.push(record.get(0).unwrap_or("").trim().to_string());
        for (i, cell) in record.iter().skip(1).enumerate() {
            let value = cell.trim().parse::<f64>().with_context(|| {
                format!(
                    "row {}: '{}' in column '{}' is not a number",
                    row + 2,
                    cell,
                    &headers[i + 1]
                )
            })?;
            cols[i].push(value);
        }
    }

    let columns: Vec<(String, Vec<f64>)> = headers
        .iter()
        .skip(1)
        .map(str::to_string)
        .zip(cols)
        .collect();
    let numeric: Option<Vec<f64>> =
        index_raw.iter().map(|s| s.parse::<f64>().ok()).collect();
    let data = match numeric {
        Some(values) => Dataset::from_numeric(&headers[0], values, columns)?,
        None => Dataset::from_labels(&headers[0], index_raw, columns)?,
    };
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(name: &str, body: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("flint-cli-tests");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(body.as_bytes()).unwrap();
        path
    }

    #[test]
    fn numeric_index_detected() {
        let path = write_csv("numeric.csv", "Year,GDP\n1970,100\n1971,110\n");
        let data = read_dataset(&path).unwrap();
        assert!(data.index().as_numeric().is_some());
        assert_eq!(data.index_name.as_deref(), Some("Year"));
        assert_eq!(data.columns()[0].values, vec![100.0, 110.0]);
    }

    #[test]
    fn label_index_detected() {
        let path = write_csv("labels.csv", "Region,Exports\nNorth,12\nSouth,9\n");
        let data = read_dataset(&path).unwrap();
        assert!(data.index().as_numeric().is_none());
        assert_eq!(data.len(), 2);
    }

    #[test]
    fn bad_values_are_reported_with_position() {
        let path = write_csv("bad.csv", "Year,GDP\n1970,100\n1971,oops\n");
        let err = read_dataset(&path).unwrap_err();
        assert!(err.to_string().contains("row 3"));
    }
}
