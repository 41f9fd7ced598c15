// File: crates/flint-charts/tests/kinds.rs
// Purpose: Every chart kind builds a figure; geometry per kind is correct.

use flint_charts::figure::Geom;
use flint_charts::{create_figure, ChartKind, ChartOptions, Dataset, Error};

fn year_data() -> Dataset {
    Dataset::from_numeric(
        "Year",
        vec![2010.0, 2011.0, 2012.0, 2013.0],
        vec![
            ("Revenue".into(), vec![10.0, 20.0, 15.0, 30.0]),
            ("Costs".into(), vec![5.0, 8.0, 7.0, 12.0]),
        ],
    )
    .expect("valid dataset")
}

fn category_data() -> Dataset {
    Dataset::from_labels(
        "Region",
        vec!["North".into(), "South".into(), "East".into()],
        vec![
            ("Exports".into(), vec![120.0, 80.0, 95.0]),
            ("Imports".into(), vec![60.0, 110.0, 70.0]),
        ],
    )
    .expect("valid dataset")
}

#[test]
fn every_kind_builds_a_figure() {
    let years = year_data();
    let cats = category_data();
    for kind in ChartKind::ALL {
        let data = if kind.needs_numeric_index() { &years } else { &cats };
        let fig = create_figure(data, kind, &ChartOptions::default())
            .unwrap_or_else(|e| panic!("{kind} failed: {e}"));
        assert_eq!(fig.axes.series.len(), 2, "{kind} should plot both columns");
    }
}

#[test]
fn unsupported_kind_fails_before_drawing() {
    let err = "pie".parse::<ChartKind>().unwrap_err();
    assert!(matches!(err, Error::UnsupportedKind(k) if k == "pie"));
}

#[test]
fn empty_dataset_is_rejected() {
    let data = Dataset::from_numeric("x", vec![], vec![]).unwrap();
    let err = create_figure(&data, ChartKind::Line, &ChartOptions::default()).unwrap_err();
    assert!(matches!(err, Error::EmptyData));
}

#[test]
fn line_needs_a_numeric_index() {
    let err = create_figure(&category_data(), ChartKind::Line, &ChartOptions::default())
        .unwrap_err();
    assert!(matches!(err, Error::NonNumericIndex { .. }));
}

#[test]
fn sparse_index_gets_a_tick_per_point() {
    let fig = create_figure(&year_data(), ChartKind::Line, &ChartOptions::default()).unwrap();
    let positions: Vec<f64> = fig.axes.xticks.iter().map(|t| t.pos).collect();
    assert_eq!(positions, vec![2010.0, 2011.0, 2012.0, 2013.0]);
}

#[test]
fn line_end_labels_carry_name_and_value() {
    let data = Dataset::from_numeric(
        "Year",
        vec![2010.0, 2011.0],
        vec![("Revenue".into(), vec![900.0, 1234.0])],
    )
    .unwrap();
    let mut opts = ChartOptions::default();
    opts.label_lines = true;
    let fig = create_figure(&data, ChartKind::Line, &opts).unwrap();
    assert_eq!(fig.axes.annotations.len(), 1);
    assert_eq!(fig.axes.annotations[0].text, "Revenue: 1,234");
}

#[test]
fn stacked_area_bands_are_cumulative() {
    let fig =
        create_figure(&year_data(), ChartKind::StackedArea, &ChartOptions::default()).unwrap();
    let bands: Vec<_> = fig
        .axes
        .series
        .iter()
        .filter_map(|s| match &s.geom {
            Geom::Band { lower, upper } => Some((lower.clone(), upper.clone())),
            _ => None,
        })
        .collect();
    assert_eq!(bands.len(), 2);
    // The second band sits on top of the first.
    assert_eq!(bands[0].1, bands[1].0);
    assert_eq!(bands[0].0[0].1, 0.0);
}

#[test]
fn grouped_bars_offset_within_the_slot() {
    let fig = create_figure(&category_data(), ChartKind::VerticalBar, &ChartOptions::default())
        .unwrap();
    let mut firsts = Vec::new();
    for s in &fig.axes.series {
        if let Geom::Bars { bars, .. } = &s.geom {
            firsts.push(bars[0]);
        }
    }
    assert_eq!(firsts.len(), 2);
    let slot = (2.0 / 3.0) / 2.0;
    assert!((firsts[0].hi - firsts[0].lo - slot).abs() < 1e-9);
    assert!((firsts[1].lo - firsts[0].hi).abs() < 1e-9, "groups pack side by side");
    assert_eq!(firsts[0].base, 0.0);
}

#[test]
fn stacked_bars_have_cumulative_bottoms_in_reverse_draw_order() {
    let fig = create_figure(
        &category_data(),
        ChartKind::StackedVerticalBar,
        &ChartOptions::default(),
    )
    .unwrap();
    // Last column drawn first so the first column lands on top.
    assert_eq!(fig.axes.series[0].name, "Imports");
    assert_eq!(fig.axes.series[1].name, "Exports");
    let bars_of = |name: &str| {
        fig.axes
            .series
            .iter()
            .find(|s| s.name == name)
            .and_then(|s| match &s.geom {
                Geom::Bars { bars, .. } => Some(bars.clone()),
                _ => None,
            })
            .expect("bar geometry")
    };
    let exports = bars_of("Exports");
    let imports = bars_of("Imports");
    assert_eq!(exports[0].base, 0.0);
    assert_eq!(imports[0].base, 120.0);
    assert_eq!(imports[0].value, 180.0);
}

#[test]
fn legend_entries_keep_dataset_column_order() {
    let fig = create_figure(
        &category_data(),
        ChartKind::StackedVerticalBar,
        &ChartOptions::default(),
    )
    .unwrap();
    // Draw order is reversed for stacking; the legend is not.
    assert_eq!(fig.axes.series[0].name, "Imports");
    let names: Vec<&str> = fig.axes.legend_entries.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["Exports", "Imports"]);
}

#[test]
fn bar_labels_use_percent_below_one() {
    let shares = Dataset::from_labels(
        "Group",
        vec!["A".into(), "B".into()],
        vec![("Share".into(), vec![0.25, 0.5])],
    )
    .unwrap();
    let mut opts = ChartOptions::default();
    opts.label_bars = true;
    let fig = create_figure(&shares, ChartKind::VerticalBar, &opts).unwrap();
    let texts: Vec<&str> = fig.axes.annotations.iter().map(|a| a.text.as_str()).collect();
    assert_eq!(texts, vec!["25%", "50%"]);
}

#[test]
fn bar_labels_group_thousands_otherwise() {
    let counts = Dataset::from_labels(
        "Group",
        vec!["A".into(), "B".into()],
        vec![("Count".into(), vec![1500.0, 2750.0])],
    )
    .unwrap();
    let mut opts = ChartOptions::default();
    opts.label_bars = true;
    let fig = create_figure(&counts, ChartKind::VerticalBar, &opts).unwrap();
    let texts: Vec<&str> = fig.axes.annotations.iter().map(|a| a.text.as_str()).collect();
    assert_eq!(texts, vec!["1,500", "2,750"]);
}

#[test]
fn scatter_legend_only_for_multiple_columns() {
    let one = Dataset::from_numeric(
        "x",
        vec![1.0, 2.0, 3.0],
        vec![("a".into(), vec![1.0, 2.0, 3.0])],
    )
    .unwrap();
    let fig = create_figure(&one, ChartKind::Scatter, &ChartOptions::default()).unwrap();
    assert!(!fig.axes.legend);
    let fig = create_figure(&year_data(), ChartKind::Scatter, &ChartOptions::default()).unwrap();
    assert!(fig.axes.legend);
}

#[test]
fn color_override_cycles_over_series() {
    let mut opts = ChartOptions::default();
    opts.color = Some(vec!["#112233".into()]);
    let fig = create_figure(&year_data(), ChartKind::Line, &opts).unwrap();
    for s in &fig.axes.series {
        assert_eq!(s.color, plotters::style::RGBColor(0x11, 0x22, 0x33));
    }
    opts.color = Some(vec!["oops".into()]);
    let err = create_figure(&year_data(), ChartKind::Line, &opts).unwrap_err();
    assert!(matches!(err, Error::InvalidOption { .. }));
}

#[test]
fn empty_color_list_is_rejected() {
    let mut opts = ChartOptions::default();
    opts.color = Some(vec![]);
    let err = create_figure(&year_data(), ChartKind::Line, &opts).unwrap_err();
    assert!(matches!(err, Error::InvalidOption { option, .. } if option == "color"));
}
