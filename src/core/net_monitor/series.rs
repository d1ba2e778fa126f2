//! Synthetic continuity points for idle gaps.
//!
//! A line drawn strictly between real points would suggest continuous growth
//! across a long idle period. Inserting one flat point into the gap makes the
//! idleness visible instead.

use super::metrics::HistoryPoint;

/// Idle gap (ms) beyond which a bridge point is inserted.
pub const GAP_THRESHOLD_MS: i64 = 1000;

/// Flat bridge point between `last` and an event arriving at
/// `incoming_absolute_ms`, or `None` when the gap is within the threshold.
///
/// Exactly one bridge is produced regardless of how large the gap is, and a
/// domain's first point never bridges (there is no predecessor to call with).
pub fn bridge_point(last: &HistoryPoint, incoming_absolute_ms: i64) -> Option<HistoryPoint> {
    if incoming_absolute_ms - last.absolute_ms > GAP_THRESHOLD_MS {
        Some(HistoryPoint {
            absolute_ms: last.absolute_ms + GAP_THRESHOLD_MS / 2,
            relative_ms: last.relative_ms + GAP_THRESHOLD_MS / 2,
            packets: last.packets,
        })
    } else {
        None
    }
}
