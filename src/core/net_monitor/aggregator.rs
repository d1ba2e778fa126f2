use std::collections::hash_map::Entry;

use super::metrics::{palette_color, DomainMetric, HistoryPoint, TelemetrySnapshot};
use super::series::bridge_point;

/// Owns the per-session telemetry state.
///
/// All mutation goes through `record_event` and `reset`; the collection
/// runtime drives both from a single task, so ordering and the
/// first-event-time invariant hold without locks. Events are applied in
/// delivery order and never re-sorted: if the feed delivers out-of-order
/// timestamps, the resulting history reflects delivery order.
#[derive(Debug, Default)]
pub struct Aggregator {
    state: TelemetrySnapshot,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one accepted observation for `domain` at `now_ms`.
    ///
    /// Amortized O(1): a map lookup/insert and an append.
    pub fn record_event(&mut self, domain: &str, now_ms: i64) {
        let state = &mut self.state;
        let first_event_ms = *state.first_event_ms.get_or_insert(now_ms);

        let metric = match state.domains.entry(domain.to_string()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let color = palette_color(state.domain_order.len());
                state.domain_order.push(domain.to_string());
                entry.insert(DomainMetric {
                    packets: 0,
                    history: Vec::new(),
                    color,
                })
            }
        };

        metric.packets += 1;

        // Bridge the idle gap before appending the real point
        if let Some(last) = metric.history.last() {
            if let Some(bridge) = bridge_point(last, now_ms) {
                metric.history.push(bridge);
            }
        }

        metric.history.push(HistoryPoint {
            absolute_ms: now_ms,
            relative_ms: now_ms - first_event_ms,
            packets: metric.packets,
        });

        state.totals.sent += 1;
        state.totals.received += 1;
        state.last_update_ms = now_ms;
        state.has_activity = true;
    }

    /// Replace the whole session state with a fresh empty one. The feed
    /// subscription is not touched; the next event repopulates state.
    pub fn reset(&mut self) {
        self.state = TelemetrySnapshot::default();
    }

    pub fn state(&self) -> &TelemetrySnapshot {
        &self.state
    }

    /// Clone the current state for publication.
    pub fn snapshot(&self) -> TelemetrySnapshot {
        self.state.clone()
    }
}
