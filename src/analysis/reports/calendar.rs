//! Calendar heatmap report formatter
//!
//! Renders a [`CalendarYearReport`] as:
//! - **Console**: one text calendar per month plus scale table and legend
//! - **JSON**: the raw report with grids, index arrays and labels
//! - **Plotly**: one heatmap chart per month sharing a colour range

use super::utils::{export_json, format_value};
use super::OutputFormat;
use crate::config::HeatmapConfig;
use crate::errors::AppResult;
use crate::types::visualisation::{
    PlotlyAnnotation, PlotlyAxis, PlotlyChart, PlotlyHeatmapTrace, PlotlyLayout, PlotlyShape,
    HIGHLIGHT_COLOUR, MISSING_DAY_COLOUR,
};
use crate::types::{CalendarYearReport, Cell, MonthHeatmap, ScaleTick};

/// Console cell width (day number plus padding)
const CELL_WIDTH: usize = 5;

/// Format a calendar heatmap report
pub fn format_calendar(
    report: &CalendarYearReport,
    settings: &HeatmapConfig,
    format: &OutputFormat,
) -> AppResult<String> {
    match format {
        OutputFormat::Json => export_json(report),
        OutputFormat::Plotly => export_json(&to_plotly_charts(report, settings)),
        OutputFormat::Console => Ok(format_console(report, settings)),
    }
}

fn format_console(report: &CalendarYearReport, settings: &HeatmapConfig) -> String {
    let mut output = String::new();

    output.push_str(&format!("\n📊 {} ({})\n", settings.title, report.year));
    output.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");

    output.push_str(&format!(
        "Days with data: {}    Missing days: {}    Max {}: {}\n\n",
        report.days_with_data,
        report.missing_days,
        settings.value_label,
        report.max_value.map_or("-".to_string(), format_value)
    ));

    for month in &report.months {
        output.push_str(&format_month(month));
        output.push('\n');
    }

    output.push_str(&format_scale_table(&report.scale, settings, "\n"));
    output.push('\n');

    if !report.highlights.is_empty() {
        output.push_str("Highlighted dates:\n");
        for entry in report.legend() {
            output.push_str(&format!("  [] {}\n", entry));
        }
        output.push('\n');
    }

    output.push_str("Legend: · no data, [dd] highlighted day\n");
    output.push_str("      For raw grids, use --format json\n");
    output.push_str("      For heatmap chart data, use --format plotly\n");

    output
}

fn format_month(month: &MonthHeatmap) -> String {
    let mut out = format!("{} {}\n", month.name, month.year);
    out.push_str("     ");
    for label in &month.weekday_labels {
        out.push_str(&format!("{:>width$} ", label, width = CELL_WIDTH - 1));
    }
    out.push('\n');

    for (row, cells) in month.grid.rows().iter().enumerate() {
        out.push_str(&format!("W{:02}  ", month.week_of_row(row)));
        for (col, cell) in cells.iter().enumerate() {
            let day = month.day_labels.get(row).and_then(|r| r[col]);
            let highlighted = month
                .highlights
                .iter()
                .any(|h| h.coordinate.row == row && h.coordinate.col == col);
            out.push_str(&format_cell(*cell, day, highlighted));
        }
        out.push('\n');
    }
    out
}

fn format_cell(cell: Cell, day: Option<u32>, highlighted: bool) -> String {
    match (cell, day) {
        (Cell::Empty, _) | (_, None) => " ".repeat(CELL_WIDTH),
        (_, Some(d)) if highlighted => format!(" [{:>2}]", d),
        (Cell::Missing, Some(_)) => format!("{:>width$} ", "·", width = CELL_WIDTH - 1),
        (Cell::Value(_), Some(d)) => format!("{:>width$} ", d, width = CELL_WIDTH - 1),
    }
}

/// Two-column value / distance table, rows joined with `line_break`
fn format_scale_table(scale: &[ScaleTick], settings: &HeatmapConfig, line_break: &str) -> String {
    let mut rows = vec![format!(
        "{:>8} {:>8}",
        settings.value_label, settings.distance_unit
    )];
    for tick in scale {
        rows.push(format!(
            "{:>8} {:>5.1} {}",
            format_value(tick.value),
            tick.distance,
            settings.distance_unit
        ));
    }
    rows.join(line_break) + line_break
}

/// One Plotly heatmap chart per month
///
/// Every chart uses `zmin = 0` and `zmax` = the year's maximum so colours are
/// comparable across panels.
pub fn to_plotly_charts(report: &CalendarYearReport, settings: &HeatmapConfig) -> Vec<PlotlyChart> {
    let table = format_scale_table(&report.scale, settings, "<br>");
    report
        .months
        .iter()
        .map(|month| month_chart(month, report, settings, &table))
        .collect()
}

fn month_chart(
    month: &MonthHeatmap,
    report: &CalendarYearReport,
    settings: &HeatmapConfig,
    table: &str,
) -> PlotlyChart {
    let mut data = vec![PlotlyHeatmapTrace::values(
        month.grid.value_rows(),
        &settings.value_label,
        report.max_value,
    )];

    if month.grid.rows().iter().flatten().any(Cell::is_missing) {
        let missing: Vec<Vec<Option<f64>>> = month
            .grid
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|c| c.is_missing().then_some(1.0))
                    .collect()
            })
            .collect();
        data.push(PlotlyHeatmapTrace::flat(missing, "No data", MISSING_DAY_COLOUR));
    }

    let weekday_refs: Vec<&str> = month.weekday_labels.iter().map(String::as_str).collect();
    let yaxis = PlotlyAxis::week_rows(
        month.month_anchors.iter().map(|a| a.position).collect(),
        month.month_anchors.iter().map(|a| a.name.clone()).collect(),
    );

    let shapes = month
        .highlights
        .iter()
        .map(|h| PlotlyShape::cell_outline(h.coordinate.row, h.coordinate.col, HIGHLIGHT_COLOUR))
        .collect();

    let mut annotations: Vec<PlotlyAnnotation> = month
        .day_labels
        .iter()
        .enumerate()
        .flat_map(|(row, days)| {
            days.iter()
                .enumerate()
                .filter_map(move |(col, day)| day.map(|d| (row, col, d)))
        })
        .map(|(row, col, d)| PlotlyAnnotation::cell_label(&d.to_string(), col, row))
        .collect();
    annotations.push(PlotlyAnnotation::stats_box(table, 1.02, 0.0));
    if !month.highlights.is_empty() {
        let legend = month
            .highlights
            .iter()
            .map(|h| format!("{}: {}", h.date.format("%Y-%m-%d"), h.label))
            .collect::<Vec<_>>()
            .join("<br>");
        annotations.push(PlotlyAnnotation::stats_box(&legend, 1.02, 0.6));
    }

    PlotlyChart {
        data,
        layout: PlotlyLayout::calendar(
            &format!("{} ({}) - {}", settings.title, month.year, month.name),
            PlotlyAxis::weekdays(&weekday_refs),
            yaxis,
        )
        .with_shapes(shapes)
        .with_annotations(annotations)
        .with_title_font_size(18),
    }
}
