//! Network-activity telemetry core.
//!
//! This module provides the business logic for observing resource-load
//! events, attributing them to destination domains, and producing the
//! time-aligned multi-series view consumed by the dashboard.

mod adapter;
mod aggregator;
mod align;
mod metrics;
mod runtime;
mod series;

pub use adapter::{domain_of, feed_task, FeedSource};
pub use aggregator::Aggregator;
pub use align::{align, AlignedPoint, AlignedSample, ChartView};
pub use metrics::{
    palette_color, DomainMetric, HistoryPoint, PacketTotals, RawObservation, SeriesColor,
    TelemetrySnapshot, DOMAIN_PALETTE,
};
pub use runtime::{
    Clock, MonitorCommand, SystemClock, TelemetryHandle, TelemetryRuntime,
};
pub use series::{bridge_point, GAP_THRESHOLD_MS};
