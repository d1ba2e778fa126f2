use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One raw entry from the observation feed. Only the URL string is used;
/// the timestamp is taken from the aggregator's clock at delivery time.
#[derive(Debug, Clone)]
pub struct RawObservation {
    pub name: String,
}

/// RGB color assigned to a domain's chart series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Fixed palette cycled over domains in the order they are first observed.
pub const DOMAIN_PALETTE: [SeriesColor; 5] = [
    SeriesColor { r: 231, g: 110, b: 80 },
    SeriesColor { r: 42, g: 157, b: 144 },
    SeriesColor { r: 82, g: 139, b: 168 },
    SeriesColor { r: 232, g: 196, b: 104 },
    SeriesColor { r: 244, g: 164, b: 98 },
];

/// Palette entry for the k-th distinct domain (0-indexed). Pure function of
/// insertion rank; a domain keeps its color for the whole session.
pub fn palette_color(rank: usize) -> SeriesColor {
    DOMAIN_PALETTE[rank % DOMAIN_PALETTE.len()]
}

/// One point of a domain's packet-count series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryPoint {
    /// Wall-clock time in milliseconds since the Unix epoch
    pub absolute_ms: i64,
    /// Offset from the session's first accepted event
    pub relative_ms: i64,
    /// Cumulative packet count for the domain at this instant
    pub packets: u64,
}

/// Per-domain counters and series. One per distinct domain observed this
/// session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainMetric {
    pub packets: u64,
    pub history: Vec<HistoryPoint>,
    pub color: SeriesColor,
}

/// Session-wide packet counters. Both sides count accepted request events,
/// so `sent == received` always; this is a proxy metric, not true TX/RX.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PacketTotals {
    pub sent: u64,
    pub received: u64,
}

/// Complete telemetry state snapshot published to consumers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub domains: HashMap<String, DomainMetric>,

    /// Domain keys in first-observed order. Color assignment is a function
    /// of position in this list, not of map iteration order.
    pub domain_order: Vec<String>,

    pub totals: PacketTotals,

    /// Timestamp of the first accepted event; set once per session
    pub first_event_ms: Option<i64>,

    pub last_update_ms: i64,

    /// Sticky activity flag; only a reset clears it
    pub has_activity: bool,
}

impl TelemetrySnapshot {
    /// Domains with their metrics, packet count descending. Recomputed per
    /// call; tie order is unspecified.
    pub fn sorted_domains(&self) -> Vec<(&str, &DomainMetric)> {
        let mut out: Vec<(&str, &DomainMetric)> = self
            .domain_order
            .iter()
            .filter_map(|d| self.domains.get(d).map(|m| (d.as_str(), m)))
            .collect();
        out.sort_by(|a, b| b.1.packets.cmp(&a.1.packets));
        out
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}
