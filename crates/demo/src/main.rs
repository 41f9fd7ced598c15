// File: crates/demo/src/main.rs
// Summary: Demo renders one sample chart per kind into target/out/.

use anyhow::Result;
use flint_charts::{save_fig, ChartKind, ChartOptions, Dataset};

fn main() -> Result<()> {
    env_logger::init();

    let years = Dataset::from_numeric(
        "Year",
        (2008..=2016).map(f64::from).collect(),
        vec![
            (
                "Revenue".to_string(),
                vec![310_000.0, 280_000.0, 340_000.0, 420_000.0, 510_000.0, 560_000.0, 640_000.0, 720_000.0, 810_000.0],
            ),
            (
                "Costs".to_string(),
                vec![220_000.0, 240_000.0, 250_000.0, 290_000.0, 330_000.0, 360_000.0, 410_000.0, 450_000.0, 480_000.0],
            ),
        ],
    )?;

    let regions = Dataset::from_labels(
        "Region",
        vec!["North".into(), "South".into(), "East".into(), "West".into()],
        vec![
            ("Exports".to_string(), vec![120.0, 80.0, 95.0, 140.0]),
            ("Imports".to_string(), vec![60.0, 110.0, 70.0, 90.0]),
        ],
    )?;

    for kind in ChartKind::ALL {
        let data = if kind.needs_numeric_index() { &years } else { &regions };
        let mut opts = ChartOptions::default();
        opts.title = Some(format!("Sample {kind}, 2008-2016"));
        opts.source = Some("Flint sample data".to_string());
        opts.grid = true;
        if kind.needs_numeric_index() {
            opts.xyear = true;
        }
        let out = format!("target/out/{kind}.png");
        let written = save_fig(&out, data, kind, None, &opts)?;
        println!("Wrote {}", written.display());
    }

    Ok(())
}
