use std::fs::OpenOptions;
use std::io::Write;
use std::sync::Arc;
use std::time::{Duration, Instant};

use netlens::core::net_monitor::{
    FeedSource, TelemetryHandle, TelemetryRuntime, TelemetrySnapshot,
};
use tempfile::TempDir;

/// Poll the handle until `predicate` holds or a 5s deadline passes.
fn wait_for<F>(handle: &TelemetryHandle, predicate: F) -> Arc<TelemetrySnapshot>
where
    F: Fn(&TelemetrySnapshot) -> bool,
{
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        let snapshot = handle.latest();
        if predicate(&snapshot) {
            return snapshot;
        }
        assert!(
            Instant::now() < deadline,
            "timed out waiting for telemetry state"
        );
        std::thread::sleep(Duration::from_millis(20));
    }
}

#[test]
fn test_file_feed_buffered_then_live() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("requests.log");
    std::fs::write(
        &path,
        "https://a.example/1\nhttps://b.example/2\nnot a url\nhttps://a.example/3\n",
    )
    .unwrap();

    let runtime = TelemetryRuntime::new(FeedSource::File(path.clone())).unwrap();
    let handle = runtime.handle();

    // Existing entries are replayed on subscribe; the garbage line is dropped
    let snapshot = wait_for(&handle, |s| s.totals.sent == 3);
    assert_eq!(snapshot.domains["a.example"].packets, 2);
    assert_eq!(snapshot.domains["b.example"].packets, 1);
    assert!(snapshot.has_activity);

    // Appended entries arrive live
    let mut file = OpenOptions::new().append(true).open(&path).unwrap();
    writeln!(file, "https://c.example/4").unwrap();
    drop(file);

    let snapshot = wait_for(&handle, |s| s.totals.sent == 4);
    assert_eq!(snapshot.domains["c.example"].packets, 1);

    runtime.shutdown();
}

#[test]
fn test_reset_keeps_subscription_live() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("requests.log");
    std::fs::write(&path, "https://a.example/1\nhttps://b.example/2\n").unwrap();

    let runtime = TelemetryRuntime::new(FeedSource::File(path.clone())).unwrap();
    let handle = runtime.handle();

    wait_for(&handle, |s| s.totals.sent == 2);

    handle.reset();
    let snapshot = wait_for(&handle, |s| s.totals.sent == 0 && !s.has_activity);
    assert!(snapshot.domains.is_empty());
    assert!(snapshot.first_event_ms.is_none());

    // The feed is still subscribed: a new entry repopulates immediately
    let mut file = OpenOptions::new().append(true).open(&path).unwrap();
    writeln!(file, "https://d.example/1").unwrap();
    drop(file);

    let snapshot = wait_for(&handle, |s| s.totals.sent == 1);
    assert!(snapshot.domains.contains_key("d.example"));
    assert!(snapshot.has_activity);

    runtime.shutdown();
}

#[test]
fn test_missing_feed_degrades_to_zero_activity() {
    let runtime =
        TelemetryRuntime::new(FeedSource::File("/definitely/not/here.log".into())).unwrap();
    let handle = runtime.handle();

    // The warning is logged once; the monitor just reports nothing
    std::thread::sleep(Duration::from_millis(200));
    let snapshot = handle.latest();
    assert_eq!(snapshot.totals.sent, 0);
    assert!(!snapshot.has_activity);

    runtime.shutdown();
}
