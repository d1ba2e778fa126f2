use netlens::core::net_monitor::{
    domain_of, Aggregator, RawObservation, DOMAIN_PALETTE,
};

#[test]
fn test_end_to_end_single_domain() {
    // Three events for example.com at 0, 200 and 400ms; all gaps are under
    // the bridge threshold
    let mut agg = Aggregator::new();
    for t in [0, 200, 400] {
        agg.record_event("example.com", t);
    }

    let state = agg.state();
    let metric = &state.domains["example.com"];
    assert_eq!(metric.packets, 3);
    assert_eq!(metric.history.len(), 3);
    assert_eq!(metric.color, DOMAIN_PALETTE[0]);
    assert_eq!(state.totals.sent, 3);
    assert_eq!(state.totals.received, 3);
}

#[test]
fn test_adapter_to_aggregator_pipeline() {
    // The adapter drops what it cannot attribute; the aggregator never sees it
    let entries = [
        "https://api.example.com/v1/session",
        "garbage-entry",
        "https://cdn.example.org/bundle.js",
        "data:image/png;base64,AAAA",
        "https://api.example.com/v1/keys",
    ];

    let mut agg = Aggregator::new();
    let mut now = 0;
    for entry in entries {
        let observation = RawObservation {
            name: entry.to_string(),
        };
        if let Some(domain) = domain_of(&observation) {
            agg.record_event(&domain, now);
            now += 100;
        }
    }

    let state = agg.state();
    assert_eq!(state.totals.sent, 3);
    assert_eq!(state.totals.received, 3);
    assert_eq!(state.domains.len(), 2);
    assert_eq!(state.domains["api.example.com"].packets, 2);
    assert_eq!(state.domains["cdn.example.org"].packets, 1);
}

#[test]
fn test_relative_times_follow_first_event() {
    let mut agg = Aggregator::new();
    agg.record_event("a.example", 1_700_000_000_000);
    agg.record_event("b.example", 1_700_000_000_250);
    agg.record_event("a.example", 1_700_000_000_900);

    let state = agg.state();
    let first = state.first_event_ms.unwrap();
    for metric in state.domains.values() {
        for point in &metric.history {
            assert_eq!(point.relative_ms, point.absolute_ms - first);
        }
    }
}

#[test]
fn test_reset_then_repopulate() {
    let mut agg = Aggregator::new();
    agg.record_event("a.example", 100);
    agg.record_event("b.example", 200);
    assert!(agg.state().has_activity);

    agg.reset();
    assert!(agg.state().is_empty());
    assert!(!agg.state().has_activity);

    agg.record_event("c.example", 300);
    let state = agg.state();
    assert_eq!(state.totals.sent, 1);
    assert_eq!(state.first_event_ms, Some(300));
    assert_eq!(state.domains["c.example"].color, DOMAIN_PALETTE[0]);
}
