//! Replays a recorded JSON-lines event log through the dispatcher.
//!
//! Each non-blank line that does not start with `#` is one [`ChainEvent`].
//! A shutdown signal is only honoured between events, never in the middle of
//! a dispatch.

use crate::chain::ReplayChain;
use dsnotify_core::{NotificationDispatcher, SubsystemError};
use dsnotify_sdk::objects::ChainEvent;
use std::future::Future;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("failed to read event log: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: invalid event: {source}")]
    Parse {
        line: usize,
        source: serde_json::Error,
    },

    #[error("line {line}: {source}")]
    Dispatch {
        line: usize,
        source: SubsystemError,
    },
}

/// Counters reported at the end of a replay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplayStats {
    pub events: u64,
    pub tip_updates: u64,
    pub transactions: u64,
    /// Stopped early by a shutdown signal.
    pub interrupted: bool,
}

impl ReplayStats {
    fn record(&mut self, event: &ChainEvent) {
        self.events += 1;
        match event {
            ChainEvent::UpdatedBlockTip { .. } => self.tip_updates += 1,
            ChainEvent::Transaction { .. } => self.transactions += 1,
            _ => {}
        }
    }
}

/// Parse one log line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str, line_no: usize) -> Result<Option<ChainEvent>, ReplayError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    serde_json::from_str(trimmed)
        .map(Some)
        .map_err(|source| ReplayError::Parse {
            line: line_no,
            source,
        })
}

/// Feed every event from `reader` to `dispatcher` until the input ends or
/// `shutdown` completes.
pub async fn replay<R>(
    dispatcher: &NotificationDispatcher,
    chain: &ReplayChain,
    reader: R,
    shutdown: impl Future<Output = ()>,
) -> Result<ReplayStats, ReplayError>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut stats = ReplayStats::default();
    let mut line_no = 0usize;
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            biased;

            _ = &mut shutdown => {
                info!(line = line_no, "Replay interrupted");
                stats.interrupted = true;
                break;
            }

            line = lines.next_line() => {
                let Some(line) = line? else {
                    debug!(lines = line_no, "Reached end of event log");
                    break;
                };
                line_no += 1;
                let Some(event) = parse_line(&line, line_no)? else {
                    continue;
                };

                debug!(line = line_no, kind = event.kind(), "Replaying event");
                chain.observe(&event);
                let event = chain.mark_initial_download(event);
                dispatcher
                    .dispatch(&event)
                    .map_err(|source| ReplayError::Dispatch { line: line_no, source })?;
                stats.record(&event);
            }
        }
    }

    Ok(stats)
}
