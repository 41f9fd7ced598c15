// File: crates/flint-charts/tests/formatting.rs
// Purpose: Validate formatter behavior: limits, tick labels, text cleanup,
// default axis titles, footer and advisories.

use flint_charts::{create_figure, ChartKind, ChartOptions, Dataset};

fn growth_data() -> Dataset {
    Dataset::from_numeric(
        "Year",
        (1970..=2016).map(f64::from).collect(),
        vec![(
            "Real GDP".into(),
            (0..47).map(|i| 400_000.0 + 18_000.0 * i as f64).collect(),
        )],
    )
    .expect("valid dataset")
}

#[test]
fn explicit_limits_are_honored_verbatim() {
    let data = Dataset::from_numeric(
        "x",
        vec![1.0, 2.0, 3.0],
        vec![("v".into(), vec![3.0, 9.0, 15.0])],
    )
    .unwrap();
    let mut opts = ChartOptions::default();
    opts.ymin = Some(1.0);
    opts.ymax = Some(20.0);
    let fig = create_figure(&data, ChartKind::Line, &opts).unwrap();
    assert_eq!(fig.axes.ylim, (1.0, 20.0));
}

#[test]
fn value_axis_defaults_to_zero_and_a_nice_maximum() {
    let data = Dataset::from_numeric(
        "x",
        vec![1.0, 2.0, 3.0],
        vec![("v".into(), vec![3.0, 9.0, 37.0])],
    )
    .unwrap();
    let fig = create_figure(&data, ChartKind::Line, &ChartOptions::default()).unwrap();
    assert_eq!(fig.axes.ylim.0, 0.0);
    assert_eq!(fig.axes.ylim.1, 40.0);
}

#[test]
fn title_year_ranges_use_an_en_dash() {
    let mut opts = ChartOptions::default();
    opts.title = Some("Growth, 1970-2016".into());
    let fig = create_figure(&growth_data(), ChartKind::Line, &opts).unwrap();
    assert_eq!(fig.axes.title.as_deref(), Some("Growth, 1970\u{2013}2016"));
}

#[test]
fn escaped_newlines_become_line_breaks() {
    let mut opts = ChartOptions::default();
    opts.title = Some("Top\\nBottom".into());
    let fig = create_figure(&growth_data(), ChartKind::Line, &opts).unwrap();
    assert_eq!(fig.axes.title.as_deref(), Some("Top\nBottom"));
}

#[test]
fn million_scale_ticks_collapse_to_k() {
    let mut opts = ChartOptions::default();
    opts.ytick_loc = Some(vec![250_000.0, 500_000.0, 750_000.0, 1_000_000.0, 1_250_000.0]);
    let fig = create_figure(&growth_data(), ChartKind::Line, &opts).unwrap();
    let labels: Vec<&str> = fig.axes.yticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, vec!["250K", "500K", "750K", "1,000K", "1,250K"]);
}

#[test]
fn year_axis_renders_bare_integers() {
    let mut opts = ChartOptions::default();
    opts.xyear = true;
    let fig = create_figure(&growth_data(), ChartKind::Line, &opts).unwrap();
    assert!(!fig.axes.xticks.is_empty());
    for t in &fig.axes.xticks {
        assert!(
            t.label.chars().all(|c| c.is_ascii_digit()),
            "year label '{}' should be a bare integer",
            t.label
        );
        assert_eq!(t.label.chars().count(), 4);
    }
}

#[test]
fn derived_zero_tick_is_blanked() {
    let data = Dataset::from_numeric(
        "x",
        vec![1.0, 2.0, 3.0],
        vec![("v".into(), vec![10.0, 25.0, 37.0])],
    )
    .unwrap();
    let fig = create_figure(&data, ChartKind::Line, &ChartOptions::default()).unwrap();
    let zero = fig.axes.yticks.iter().find(|t| t.pos == 0.0).expect("zero tick");
    assert!(zero.label.is_empty());
}

#[test]
fn supplied_tick_labels_win_and_mismatches_advise() {
    let data = Dataset::from_numeric(
        "x",
        vec![1.0, 2.0, 3.0],
        vec![("v".into(), vec![1.0, 2.0, 3.0])],
    )
    .unwrap();
    let mut opts = ChartOptions::default();
    opts.ytick_loc = Some(vec![0.0, 1.0, 2.0]);
    opts.yticklabels = Some(vec!["low".into(), "mid".into()]);
    let fig = create_figure(&data, ChartKind::Line, &opts).unwrap();
    let labels: Vec<&str> = fig.axes.yticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, vec!["low", "mid", ""]);
    assert!(!fig.advisories.is_empty());
}

#[test]
fn axis_titles_default_from_the_data_and_swap_when_horizontal() {
    let cats = Dataset::from_labels(
        "Region",
        vec!["North".into(), "South".into()],
        vec![("Exports".into(), vec![1.0, 2.0])],
    )
    .unwrap();
    let fig = create_figure(&cats, ChartKind::VerticalBar, &ChartOptions::default()).unwrap();
    assert_eq!(fig.axes.xlabel.as_deref(), Some("Region"));
    assert_eq!(fig.axes.ylabel.as_deref(), Some("Exports"));

    let fig = create_figure(&cats, ChartKind::HorizontalBar, &ChartOptions::default()).unwrap();
    assert_eq!(fig.axes.xlabel.as_deref(), Some("Exports"));
    assert_eq!(fig.axes.ylabel.as_deref(), Some("Region"));

    let mut opts = ChartOptions::default();
    opts.xlabel_off = true;
    let fig = create_figure(&cats, ChartKind::VerticalBar, &opts).unwrap();
    assert!(fig.axes.xlabel.is_none());
}

#[test]
fn source_becomes_the_footer_else_the_house_notice() {
    let mut opts = ChartOptions::default();
    opts.source = Some("Bureau of Numbers, 2000-2010 survey".into());
    let fig = create_figure(&growth_data(), ChartKind::Line, &opts).unwrap();
    assert_eq!(
        fig.axes.footer.as_deref(),
        Some("Bureau of Numbers, 2000\u{2013}2010 survey")
    );

    let fig = create_figure(&growth_data(), ChartKind::Line, &ChartOptions::default()).unwrap();
    assert_eq!(fig.axes.footer.as_deref(), Some("Produced with Flint Charts."));
}

#[test]
fn crowded_year_labels_thin_to_every_second() {
    let years: Vec<String> = (2000..2014).map(|y| y.to_string()).collect();
    let data = Dataset::from_labels(
        "Year",
        years,
        vec![("v".into(), (0..14).map(f64::from).collect())],
    )
    .unwrap();
    let fig = create_figure(&data, ChartKind::VerticalBar, &ChartOptions::default()).unwrap();
    let labels: Vec<&str> = fig.axes.xticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels[0], "2000");
    assert_eq!(labels[1], "");
    assert_eq!(labels[2], "2002");
}

#[test]
fn horizontal_bar_labels_wrap_at_thirty_characters() {
    let data = Dataset::from_labels(
        "Program",
        vec!["A very long program name that keeps going".into(), "Short".into()],
        vec![("v".into(), vec![1.0, 2.0])],
    )
    .unwrap();
    let fig = create_figure(&data, ChartKind::HorizontalBar, &ChartOptions::default()).unwrap();
    assert!(fig.axes.yticks[0].label.contains('\n'));
    assert_eq!(fig.axes.yticks[1].label, "Short");
}

#[test]
fn long_category_labels_suggest_a_horizontal_layout() {
    let data = Dataset::from_labels(
        "Program",
        vec!["Unreasonably long label".into(), "Another sizeable one".into()],
        vec![("v".into(), vec![1.0, 2.0])],
    )
    .unwrap();
    let fig = create_figure(&data, ChartKind::VerticalBar, &ChartOptions::default()).unwrap();
    assert!(fig.advisories.iter().any(|a| a.contains("horizontal_bar")));

    let short = Dataset::from_labels(
        "Program",
        vec!["A".into(), "B".into()],
        vec![("v".into(), vec![1.0, 2.0])],
    )
    .unwrap();
    let fig = create_figure(&short, ChartKind::VerticalBar, &ChartOptions::default()).unwrap();
    assert!(fig.advisories.is_empty());
}

#[test]
fn figures_are_deterministic() {
    let mut opts = ChartOptions::default();
    opts.title = Some("Growth, 1970-2016".into());
    let a = create_figure(&growth_data(), ChartKind::Line, &opts).unwrap();
    let b = create_figure(&growth_data(), ChartKind::Line, &opts).unwrap();
    assert_eq!(a.axes.xlim, b.axes.xlim);
    assert_eq!(a.axes.ylim, b.axes.ylim);
    assert_eq!(a.axes.title, b.axes.title);
    assert_eq!(a.axes.yticks, b.axes.yticks);
}

#[test]
fn cosmetic_flags_pass_through() {
    let mut opts = ChartOptions::default();
    opts.grid = true;
    opts.spines = true;
    opts.rot = Some(90.0);
    let fig = create_figure(&growth_data(), ChartKind::Line, &opts).unwrap();
    assert!(fig.axes.grid);
    assert!(fig.axes.spines);
    assert_eq!(fig.axes.rot, 90.0);
}
