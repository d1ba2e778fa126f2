use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::core::net_monitor::{
    FeedSource, TelemetryHandle, TelemetryRuntime, TelemetrySnapshot,
};

use super::event_handler::MonitorEvent;
use super::render::render_ui;

/// Monitor application state
pub struct MonitorApp {
    pub snapshot: Arc<TelemetrySnapshot>,
    pub handle: TelemetryHandle,
    pub should_quit: bool,
    pub show_help: bool,
    pub interval_ms: u64,
}

impl MonitorApp {
    pub fn new(handle: TelemetryHandle, interval_ms: u64) -> Self {
        let snapshot = handle.latest();
        Self {
            snapshot,
            handle,
            should_quit: false,
            show_help: false,
            interval_ms,
        }
    }

    /// Pull the latest published snapshot
    pub fn refresh_snapshot(&mut self) {
        self.snapshot = self.handle.latest();
    }

    /// Handle keyboard events
    pub fn handle_event(&mut self, event: MonitorEvent) {
        match event {
            MonitorEvent::Quit => self.should_quit = true,
            MonitorEvent::ToggleHelp => self.show_help = !self.show_help,
            MonitorEvent::Reset => self.handle.reset(),
            MonitorEvent::None => {}
        }
    }
}

/// Configuration for the monitor app
#[derive(Debug, Clone)]
pub struct MonitorAppConfig {
    pub interval_ms: u64,
    pub source: FeedSource,
}

impl Default for MonitorAppConfig {
    fn default() -> Self {
        Self {
            interval_ms: 500,
            source: FeedSource::Stdin,
        }
    }
}

/// Run the monitor TUI application
pub fn run_monitor_app(config: MonitorAppConfig) -> Result<()> {
    let runtime =
        TelemetryRuntime::new(config.source.clone()).context("Failed to start telemetry runtime")?;

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Create app
    let mut app = MonitorApp::new(runtime.handle(), config.interval_ms);
    let tick_rate = Duration::from_millis(app.interval_ms);
    let mut last_tick = Instant::now();

    // Main loop
    loop {
        // Draw UI
        terminal.draw(|frame| render_ui(frame, &app))?;

        // Handle events with timeout
        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout).context("Event poll failed")? {
            if let Event::Key(key) = event::read().context("Event read failed")? {
                if key.kind == KeyEventKind::Press {
                    let monitor_event = match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => MonitorEvent::Quit,
                        KeyCode::Char('?') | KeyCode::Char('h') => MonitorEvent::ToggleHelp,
                        KeyCode::Char('r') => MonitorEvent::Reset,
                        _ => MonitorEvent::None,
                    };
                    app.handle_event(monitor_event);
                }
            }
        }

        // Check if should quit
        if app.should_quit {
            break;
        }

        // Refresh snapshot on tick
        if last_tick.elapsed() >= tick_rate {
            app.refresh_snapshot();
            last_tick = Instant::now();
        }
    }

    runtime.shutdown();

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}
