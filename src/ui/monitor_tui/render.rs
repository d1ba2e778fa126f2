use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{Axis, Block, Borders, Cell, Chart, Dataset, GraphType, Paragraph, Row, Table},
};

use super::app::MonitorApp;
use super::widgets::{activity_span, series_color};
use crate::core::net_monitor::align;
use crate::ui::formatters::{format_clock, format_elapsed, truncate_domain};

/// Main render function
pub fn render_ui(frame: &mut Frame, app: &MonitorApp) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Header with totals
            Constraint::Percentage(55), // Chart
            Constraint::Min(6),         // Domain list
            Constraint::Length(1),      // Footer
        ])
        .split(area);

    render_header(frame, chunks[0], app);
    render_chart(frame, chunks[1], app);
    render_domain_list(frame, chunks[2], app);
    render_footer(frame, chunks[3]);

    // Render help overlay if active
    if app.show_help {
        render_help_overlay(frame, area);
    }
}

/// Render header with session-wide totals
fn render_header(frame: &mut Frame, area: Rect, app: &MonitorApp) {
    let totals = app.snapshot.totals;

    let last_seen = if app.snapshot.has_activity {
        format_clock(app.snapshot.last_update_ms)
    } else {
        "-".to_string()
    };

    let title = format!(
        " netlens │ ↑ TX: {} │ ↓ RX: {} │ Last event: {} │ Refresh: {}ms ",
        totals.sent, totals.received, last_seen, app.interval_ms
    );

    // Yellow while traffic is flowing, green when quiet
    let border_color = if app.snapshot.has_activity {
        Color::Yellow
    } else {
        Color::Green
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let status = Line::from(vec![activity_span(app.snapshot.has_activity)]);
    frame.render_widget(Paragraph::new(status), inner);
}

/// Render the multi-series packet chart
fn render_chart(frame: &mut Frame, area: Rect, app: &MonitorApp) {
    let block = Block::default()
        .title(" Network Activity ")
        .borders(Borders::ALL);

    let view = align(&app.snapshot);

    if view.points.is_empty() {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        let empty = Paragraph::new("No network activity recorded")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    // Per-domain (x, y) series from the aligned view; instants where a
    // domain has no sample are skipped so its line connects across them
    let sorted = app.snapshot.sorted_domains();
    let series: Vec<(String, Color, Vec<(f64, f64)>)> = sorted
        .iter()
        .map(|(domain, metric)| {
            let data: Vec<(f64, f64)> = view
                .points
                .iter()
                .filter_map(|point| {
                    point
                        .samples
                        .get(*domain)
                        .map(|s| (point.relative_ms as f64, s.packets as f64))
                })
                .collect();
            ((*domain).to_string(), series_color(metric.color), data)
        })
        .collect();

    let datasets: Vec<Dataset> = series
        .iter()
        .map(|(domain, color, data)| {
            Dataset::default()
                .name(truncate_domain(domain, 24))
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(*color))
                .data(data)
        })
        .collect();

    let x_labels = vec![
        Span::from(format_elapsed(0)),
        Span::from(format_elapsed((view.x_bounds[1] / 2.0) as i64)),
        Span::from(format_elapsed(view.x_bounds[1] as i64)),
    ];
    let y_labels = vec![
        Span::from("0"),
        Span::from(format!("{}", (view.y_bounds[1] / 2.0).round() as u64)),
        Span::from(format!("{}", view.y_bounds[1] as u64)),
    ];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .title("Time since first request")
                .style(Style::default().fg(Color::DarkGray))
                .bounds(view.x_bounds)
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("Packets")
                .style(Style::default().fg(Color::DarkGray))
                .bounds(view.y_bounds)
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}

/// Render the per-domain activity list, most active first
fn render_domain_list(frame: &mut Frame, area: Rect, app: &MonitorApp) {
    let block = Block::default()
        .title(" Domain Activity ")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let sorted = app.snapshot.sorted_domains();
    if sorted.is_empty() {
        let no_data =
            Paragraph::new("No domains observed").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(no_data, inner);
        return;
    }

    let rows: Vec<Row> = sorted
        .iter()
        .take(inner.height as usize)
        .map(|(domain, metric)| {
            Row::new(vec![
                Cell::from("●").style(Style::default().fg(series_color(metric.color))),
                Cell::from(truncate_domain(domain, 40)),
                Cell::from(format!("{}", metric.packets)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(2),
            Constraint::Percentage(80),
            Constraint::Min(8),
        ],
    );
    frame.render_widget(table, inner);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let help = " q: Quit │ r: Reset │ ?: Help ";
    let para = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(para, area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let help_text = r#"
    netlens Network Monitor - Help

    Keyboard Shortcuts:
    ─────────────────────────────────────
    q / Esc     Quit the application
    ? / h       Toggle this help screen
    r           Reset session counters

    The monitor counts completed resource-load
    events per destination domain. Counters are
    in-memory only; reset clears them while the
    feed subscription stays live.
    "#;

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::DarkGray));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .alignment(Alignment::Left);

    // Center the help popup
    let popup_area = centered_rect(60, 50, area);
    frame.render_widget(paragraph, popup_area);
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
