use chrono::{Local, TimeZone};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Format a relative offset in milliseconds as elapsed seconds ("12.3s")
pub fn format_elapsed(relative_ms: i64) -> String {
    format!("{:.1}s", relative_ms as f64 / 1000.0)
}

/// Format an epoch-millisecond timestamp as local wall-clock time with
/// millisecond precision ("14:03:07.123")
pub fn format_clock(absolute_ms: i64) -> String {
    match Local.timestamp_millis_opt(absolute_ms) {
        chrono::LocalResult::Single(dt) => dt.format("%H:%M:%S%.3f").to_string(),
        _ => "--:--:--.---".to_string(),
    }
}

/// Truncate a domain to a display-width budget, appending "..." when it
/// exceeds the limit. Width-aware so IDN domains don't break column layout.
pub fn truncate_domain(domain: &str, max_width: usize) -> String {
    if domain.width() <= max_width {
        return domain.to_string();
    }

    let mut out = String::new();
    let mut w = 0usize;
    for ch in domain.chars() {
        let cw = ch.width().unwrap_or(0);
        if w + cw > max_width.saturating_sub(3) {
            break;
        }
        out.push(ch);
        w += cw;
    }
    out.push_str("...");
    out
}
