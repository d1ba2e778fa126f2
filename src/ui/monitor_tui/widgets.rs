use ratatui::prelude::*;

use crate::core::net_monitor::SeriesColor;

/// Map a palette entry to a terminal color
pub fn series_color(color: SeriesColor) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

/// Activity indicator: yellow while requests are flowing, green when idle
pub fn activity_span(has_activity: bool) -> Span<'static> {
    if has_activity {
        Span::styled("● active", Style::default().fg(Color::Yellow))
    } else {
        Span::styled("● idle", Style::default().fg(Color::Green))
    }
}
