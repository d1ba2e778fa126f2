//! Network monitor command handler.
//!
//! Runs the live telemetry dashboard, or streams snapshots as JSON lines.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::ArgMatches;

use crate::core::config::Config;
use crate::core::net_monitor::{FeedSource, TelemetryRuntime};
use crate::ui::monitor_tui::{run_monitor_app, MonitorAppConfig};

const DEFAULT_INTERVAL_MS: u64 = 500;

/// Execute the monitor command
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config = Config::load().unwrap_or_default();

    // CLI flags win over persisted defaults
    let interval = matches
        .get_one::<u64>("interval")
        .copied()
        .or(config.refresh_interval_ms)
        .unwrap_or(DEFAULT_INTERVAL_MS);

    let source = matches
        .get_one::<String>("input")
        .cloned()
        .or_else(|| config.feed_path.clone())
        .map(|path| FeedSource::File(PathBuf::from(path)))
        .unwrap_or(FeedSource::Stdin);

    if matches.get_flag("json") {
        return run_json_output(source, interval);
    }

    run_monitor_app(MonitorAppConfig {
        interval_ms: interval,
        source,
    })
    .context("Failed to run network monitor")
}

/// Stream telemetry snapshots as JSON lines (for scripting)
fn run_json_output(source: FeedSource, interval_ms: u64) -> Result<()> {
    let runtime = TelemetryRuntime::new(source).context("Failed to start telemetry runtime")?;
    let handle = runtime.handle();

    let running = Arc::new(AtomicBool::new(true));
    let flag = running.clone();
    ctrlc::set_handler(move || flag.store(false, Ordering::SeqCst))
        .context("Failed to install Ctrl-C handler")?;

    // Emit a line whenever the published snapshot moved
    let mut last_emitted: Option<(u64, i64)> = None;

    while running.load(Ordering::SeqCst) {
        let snapshot = handle.latest();
        let marker = (snapshot.totals.sent, snapshot.last_update_ms);

        if last_emitted != Some(marker) {
            println!("{}", serde_json::to_string(snapshot.as_ref())?);
            last_emitted = Some(marker);
        }

        std::thread::sleep(Duration::from_millis(interval_ms));
    }

    runtime.shutdown();
    Ok(())
}
