//! Shared-time-axis merge of all domain series.
//!
//! Cost is linear in the total number of accumulated history points, so this
//! runs only when a consumer asks for a rendering snapshot, never on the
//! event path.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use super::metrics::TelemetrySnapshot;

/// One domain's sample at a shared-axis instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlignedSample {
    pub packets: u64,
    /// Wall-clock time of the original point, kept so the presentation layer
    /// can show both an elapsed offset and a human-readable time.
    pub absolute_ms: i64,
}

/// One shared-time-axis point. A domain with no sample at this instant is
/// absent from the map, never zero; renderers connect across absences.
#[derive(Debug, Clone, Serialize)]
pub struct AlignedPoint {
    pub relative_ms: i64,
    pub samples: HashMap<String, AlignedSample>,
}

/// Renderer-ready view: aligned points plus axis bounds.
#[derive(Debug, Clone, Serialize)]
pub struct ChartView {
    pub points: Vec<AlignedPoint>,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
}

/// Merge every domain's history onto one shared, ascending time axis.
pub fn align(snapshot: &TelemetrySnapshot) -> ChartView {
    let axis: BTreeSet<i64> = snapshot
        .domains
        .values()
        .flat_map(|m| m.history.iter().map(|p| p.relative_ms))
        .collect();

    let index: HashMap<i64, usize> = axis.iter().enumerate().map(|(i, &t)| (t, i)).collect();

    let mut points: Vec<AlignedPoint> = axis
        .iter()
        .map(|&t| AlignedPoint {
            relative_ms: t,
            samples: HashMap::new(),
        })
        .collect();

    for (domain, metric) in &snapshot.domains {
        for point in &metric.history {
            if let Some(&i) = index.get(&point.relative_ms) {
                // First sample wins if a domain has two points at one instant
                points[i]
                    .samples
                    .entry(domain.clone())
                    .or_insert(AlignedSample {
                        packets: point.packets,
                        absolute_ms: point.absolute_ms,
                    });
            }
        }
    }

    let x_bounds = match axis.iter().next_back() {
        Some(&max) => [0.0, max as f64 * 1.05],
        None => [0.0, 1000.0],
    };

    let max_packets = snapshot
        .domains
        .values()
        .flat_map(|m| m.history.iter().map(|p| p.packets))
        .max()
        .unwrap_or(0)
        .max(1);
    let y_bounds = [0.0, (max_packets as f64 * 1.1).ceil()];

    ChartView {
        points,
        x_bounds,
        y_bounds,
    }
}
