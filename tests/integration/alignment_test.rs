use netlens::core::net_monitor::{align, Aggregator};

#[test]
fn test_shared_axis_with_absences() {
    let mut agg = Aggregator::new();
    agg.record_event("a.example", 0);
    agg.record_event("b.example", 500);
    agg.record_event("a.example", 1000);

    let view = align(agg.state());

    let axis: Vec<i64> = view.points.iter().map(|p| p.relative_ms).collect();
    assert_eq!(axis, vec![0, 500, 1000]);

    // Absence means "no event at this instant", never zero
    let at_500 = &view.points[1];
    assert!(at_500.samples.get("a.example").is_none());
    assert_eq!(at_500.samples["b.example"].packets, 1);
}

#[test]
fn test_bridges_show_up_on_the_shared_axis() {
    let mut agg = Aggregator::new();
    agg.record_event("a.example", 0);
    // 2000ms gap inserts a flat bridge at 500
    agg.record_event("a.example", 2000);
    agg.record_event("b.example", 2100);

    let view = align(agg.state());
    let axis: Vec<i64> = view.points.iter().map(|p| p.relative_ms).collect();
    assert_eq!(axis, vec![0, 500, 2000, 2100]);

    // The bridge carries the flat pre-gap count
    assert_eq!(view.points[1].samples["a.example"].packets, 1);
    assert_eq!(view.points[2].samples["a.example"].packets, 2);
}

#[test]
fn test_axis_bounds() {
    let mut agg = Aggregator::new();
    agg.record_event("a.example", 0);
    agg.record_event("a.example", 400);
    agg.record_event("a.example", 800);

    let view = align(agg.state());
    assert_eq!(view.x_bounds, [0.0, 800.0 * 1.05]);
    assert_eq!(view.y_bounds, [0.0, 4.0]); // ceil(3 * 1.1)
}

#[test]
fn test_empty_chart_defaults() {
    let agg = Aggregator::new();
    let view = align(agg.state());

    assert!(view.points.is_empty());
    assert_eq!(view.x_bounds, [0.0, 1000.0]);
}
