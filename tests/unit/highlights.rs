use crate::common::{date, full_month};
use step_heatmap::calendar::highlight::resolve_all;
use step_heatmap::calendar::{locate, map_month};
use step_heatmap::types::{GridCoordinate, Highlight, SeriesPoint};

#[test]
fn test_highlight_matches_grid_coordinate() {
    let march = full_month(2024, 3);
    let mapped = map_month(&march);
    let idx = march
        .points
        .iter()
        .position(|p| p.date == date(2024, 3, 15))
        .unwrap();

    let found = locate(&Highlight::new(date(2024, 3, 15), "Ides"), &march);

    assert_eq!(
        found,
        Some(GridCoordinate::new(mapped.rows[idx], mapped.cols[idx]))
    );
    assert_eq!(found, Some(GridCoordinate::new(2, 4)));
}

#[test]
fn test_highlight_outside_month_not_found() {
    let march = full_month(2024, 3);
    assert_eq!(
        locate(&Highlight::new(date(2024, 4, 1), "April"), &march),
        None
    );
}

#[test]
fn test_highlight_on_missing_day_still_resolves() {
    let mut march = full_month(2024, 3);
    march.points[14] = SeriesPoint::missing(date(2024, 3, 15));

    let highlights = vec![
        Highlight::new(date(2024, 3, 15), "No data here"),
        Highlight::new(date(2024, 3, 16), "Has data"),
    ];
    let resolved = resolve_all(&highlights, &march);

    assert_eq!(resolved.len(), 2);
    assert_eq!(resolved[0].coordinate, GridCoordinate::new(2, 4));
    assert!(resolved[0].on_missing_day);
    assert!(!resolved[1].on_missing_day);
}

#[test]
fn test_parse_highlight_argument() {
    let h: Highlight = "2024-02-11=Some random event".parse().unwrap();
    assert_eq!(h.date, date(2024, 2, 11));
    assert_eq!(h.label, "Some random event");
    assert_eq!(h.legend_entry(), "2024-02-11: Some random event");

    let with_equals: Highlight = "2024-02-11=a=b".parse().unwrap();
    assert_eq!(with_equals.label, "a=b");

    assert!("2024-02-11".parse::<Highlight>().is_err());
    assert!("2024-13-01=bad month".parse::<Highlight>().is_err());
}
