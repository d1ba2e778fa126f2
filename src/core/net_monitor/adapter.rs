//! Event source adapter.
//!
//! Normalizes raw feed entries to destination domains and runs the task that
//! reads the observation feed. Malformed entries are isolated here; nothing
//! that goes wrong in this module reaches the aggregator.

use std::path::{Path, PathBuf};

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::{broadcast, mpsc};
use tokio::time::Duration;
use url::Url;

use crate::error::{NetlensError, Result};

use super::metrics::RawObservation;
use super::runtime::MonitorCommand;

/// How often a tailed file is re-polled after EOF.
const FEED_POLL_MS: u64 = 200;

/// Extract the destination domain (hostname) from a raw feed entry.
///
/// Entries whose URL does not parse, or that carry no host (`data:`,
/// `mailto:` and friends), are dropped: a diagnostic is logged and no state
/// is touched.
pub fn domain_of(entry: &RawObservation) -> Option<String> {
    match Url::parse(&entry.name) {
        Ok(url) => match url.host_str() {
            Some(host) => Some(host.to_string()),
            None => {
                log::debug!("Dropping observation without a host: {:?}", entry.name);
                None
            }
        },
        Err(err) => {
            log::debug!("Dropping unparsable observation {:?}: {}", entry.name, err);
            None
        }
    }
}

/// Where the monitor reads its observation feed from.
#[derive(Debug, Clone, Default)]
pub enum FeedSource {
    /// Newline-delimited URL entries on standard input (live entries only).
    #[default]
    Stdin,

    /// Tail a file: existing lines are replayed as buffered history, then
    /// appended lines are delivered live.
    File(PathBuf),
}

/// Task that reads the observation feed and forwards entries to the
/// aggregator.
///
/// An unavailable feed is a single warning, not an error: the monitor keeps
/// running and reports no activity.
pub async fn feed_task(
    source: FeedSource,
    command_tx: mpsc::Sender<MonitorCommand>,
    mut shutdown: broadcast::Receiver<()>,
) {
    match source {
        FeedSource::Stdin => {
            let reader = BufReader::new(tokio::io::stdin());
            read_live(reader, &command_tx, &mut shutdown).await;
        }
        FeedSource::File(path) => match open_feed(&path).await {
            Ok(file) => follow_file(BufReader::new(file), &command_tx, &mut shutdown).await,
            Err(err) => {
                log::warn!("Observation feed unavailable: {}; reporting no activity", err);
            }
        },
    }
}

async fn open_feed(path: &Path) -> Result<tokio::fs::File> {
    tokio::fs::File::open(path)
        .await
        .map_err(|err| NetlensError::feed(format!("cannot open {}: {}", path.display(), err)))
}

/// Forward lines from a live reader until it closes or shutdown is signaled.
async fn read_live<R>(
    reader: BufReader<R>,
    command_tx: &mpsc::Sender<MonitorCommand>,
    shutdown: &mut broadcast::Receiver<()>,
) where
    R: AsyncRead + Unpin,
{
    let mut lines = reader.lines();

    loop {
        tokio::select! {
            line = lines.next_line() => match line {
                Ok(Some(line)) => {
                    if forward_entry(&line, command_tx).await.is_err() {
                        break;
                    }
                }
                Ok(None) => break,
                Err(err) => {
                    log::warn!("Observation feed read failed: {}", err);
                    break;
                }
            },
            _ = shutdown.recv() => break,
        }
    }
}

/// Drain existing lines, then keep polling for appended ones.
async fn follow_file<R>(
    reader: BufReader<R>,
    command_tx: &mpsc::Sender<MonitorCommand>,
    shutdown: &mut broadcast::Receiver<()>,
) where
    R: AsyncRead + Unpin,
{
    let mut lines = reader.lines();

    loop {
        tokio::select! {
            line = lines.next_line() => match line {
                Ok(Some(line)) => {
                    if forward_entry(&line, command_tx).await.is_err() {
                        break;
                    }
                }
                // EOF means "caught up", not "done": wait for appended lines
                Ok(None) => tokio::time::sleep(Duration::from_millis(FEED_POLL_MS)).await,
                Err(err) => {
                    log::warn!("Observation feed read failed: {}", err);
                    break;
                }
            },
            _ = shutdown.recv() => break,
        }
    }
}

async fn forward_entry(
    line: &str,
    command_tx: &mpsc::Sender<MonitorCommand>,
) -> std::result::Result<(), mpsc::error::SendError<MonitorCommand>> {
    let entry = line.trim();
    if entry.is_empty() {
        return Ok(());
    }

    command_tx
        .send(MonitorCommand::Observe(RawObservation {
            name: entry.to_string(),
        }))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observation(name: &str) -> RawObservation {
        RawObservation {
            name: name.to_string(),
        }
    }

    #[test]
    fn test_domain_of_extracts_hostname() {
        assert_eq!(
            domain_of(&observation("https://api.example.com/v1/keys?id=3")),
            Some("api.example.com".to_string())
        );
        assert_eq!(
            domain_of(&observation("http://cdn.example.org:8080/app.js")),
            Some("cdn.example.org".to_string())
        );
    }

    #[test]
    fn test_domain_of_drops_garbage() {
        assert_eq!(domain_of(&observation("not a url at all")), None);
        assert_eq!(domain_of(&observation("")), None);
    }

    #[test]
    fn test_domain_of_drops_hostless_urls() {
        assert_eq!(domain_of(&observation("data:text/plain,hello")), None);
        assert_eq!(domain_of(&observation("mailto:a@b.example")), None);
    }
}
