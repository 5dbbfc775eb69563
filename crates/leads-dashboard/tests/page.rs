// File: crates/leads-dashboard/tests/page.rs
// Purpose: Properties of the dashboard view tree and its chart mapping.

use chart_core::{AxisKind, CurveType};
use leads_dashboard::page::{AxisSpec, SERIES_NAME};
use leads_dashboard::{dashboard, TITLE, WEEKLY_LEADS};

const DAYS: [&str; 7] = ["Пн", "Вт", "Ср", "Чт", "Пт", "Сб", "Вс"];
const COUNTS: [u32; 7] = [12, 18, 9, 24, 14, 7, 19];

#[test]
fn data_has_one_sample_per_weekday() {
    assert_eq!(WEEKLY_LEADS.len(), 7);
    let days: Vec<&str> = WEEKLY_LEADS.iter().map(|s| s.day).collect();
    let counts: Vec<u32> = WEEKLY_LEADS.iter().map(|s| s.lead_count).collect();
    assert_eq!(days, DAYS);
    assert_eq!(counts, COUNTS);
}

#[test]
fn category_axis_labels_are_the_weekdays_in_order() {
    let page = dashboard();
    assert_eq!(page.category_labels(), DAYS);
    match &page.card.chart.x_axis {
        AxisSpec::Category { data_key, labels } => {
            assert_eq!(*data_key, "day");
            assert_eq!(labels.as_slice(), DAYS);
        }
        other => panic!("expected category axis, got {other:?}"),
    }
    assert_eq!(page.card.chart.y_axis, AxisSpec::Number { data_key: "leadCount" });
}

#[test]
fn rendering_twice_gives_the_same_tree() {
    assert_eq!(dashboard(), dashboard());
    assert_eq!(dashboard().to_chart(), dashboard().to_chart());
}

#[test]
fn page_has_title_and_a_single_lead_series() {
    let page = dashboard();
    assert_eq!(page.heading.text, TITLE);
    assert!(page.heading.text.contains("Метрики по лидам"));
    assert!(page.container.class.contains("min-h-screen"));

    let spec = &page.card.chart;
    assert_eq!(spec.series.len(), 1);
    let series = &spec.series[0];
    assert_eq!(series.name, SERIES_NAME);
    assert_eq!(series.values, COUNTS);
    assert_eq!(series.curve, CurveType::Monotone);
    assert_eq!(series.stroke, "#8884d8");
    assert_eq!(series.stroke_width, 2);
    assert_eq!(page.series_values(), COUNTS);

    assert_eq!(spec.container.width_percent, 100);
    assert_eq!(spec.container.height_px, 300);
    assert_eq!(spec.grid.dash, Some([3, 3]));
    assert!(spec.tooltip.enabled);
}

#[test]
fn chart_mirrors_the_page_configuration() {
    let chart = dashboard().to_chart();
    assert!(chart.validate().is_ok());

    match &chart.x_axis.kind {
        AxisKind::Category(labels) => assert_eq!(labels, &DAYS),
        AxisKind::Number => panic!("x axis should be categorical"),
    }
    assert_eq!(chart.x_axis.data_key, "day");
    assert_eq!((chart.y_axis.min, chart.y_axis.max), (0.0, 24.0));
    let ticks: Vec<f64> = chart.y_axis.ticks().into_iter().map(|t| t.value).collect();
    assert_eq!(ticks, vec![0.0, 6.0, 12.0, 18.0, 24.0]);

    assert_eq!(chart.series.len(), 1);
    let s = &chart.series[0];
    assert_eq!(s.name, "leads");
    assert_eq!(s.values, COUNTS.map(f64::from));
    assert_eq!(s.stroke_width, 2.0);
    assert_eq!(s.color, chart_core::parse_hex_color("#8884d8"));
    assert_eq!(chart.grid.and_then(|g| g.dash), Some((3.0, 3.0)));
    assert!(chart.tooltip.enabled);
}

#[test]
fn tooltip_shows_day_and_count() {
    let chart = dashboard().to_chart();
    let content = chart.tooltip_at(3).expect("thursday in range");
    assert_eq!(content.label, "Чт");
    assert_eq!(content.row_lines(&chart.tooltip.separator), vec!["leads : 24".to_string()]);
    assert!(chart.tooltip_at(7).is_none());
}
