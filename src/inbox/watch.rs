//! Inbox polling watcher.
//!
//! The backend has no push channel; the admin panel refreshes by
//! re-fetching the listing. The watcher does the same on an interval and
//! forwards records not seen before over an mpsc channel.

use std::collections::HashSet;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::message::MessageRecord;
use crate::backend::client::BackendClient;

/// Buffered records before the poller blocks on the consumer.
const CHANNEL_CAPACITY: usize = 64;

/// Maximum backoff between failed polls.
const MAX_BACKOFF: Duration = Duration::from_secs(300);

/// Spawn a watcher that polls the inbox and forwards unseen records.
///
/// Deduplicates by record identity across polls, so a record is delivered
/// once even though every poll re-fetches the full listing. On transport
/// errors the delay between polls doubles up to [`MAX_BACKOFF`] and resets
/// after the next successful fetch. The task exits when the receiver is
/// dropped.
pub fn spawn_inbox_watcher(
    client: BackendClient,
    interval: Duration,
    page_size: usize,
) -> (tokio::task::JoinHandle<()>, mpsc::Receiver<MessageRecord>) {
    let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);

    let handle = tokio::spawn(async move {
        let mut seen: HashSet<String> = HashSet::new();
        let mut delay = interval;

        loop {
            match client.list_messages(page_size).await {
                Ok(records) => {
                    delay = interval;
                    for record in records {
                        if !seen.insert(record.identity()) {
                            continue;
                        }
                        debug!(id = record.id().unwrap_or("-"), "new submission");
                        if tx.send(record).await.is_err() {
                            info!("inbox watcher receiver dropped, stopping");
                            return;
                        }
                    }
                }
                Err(e) => {
                    delay = delay.saturating_mul(2).min(MAX_BACKOFF);
                    warn!(error = %e, backoff_secs = delay.as_secs(), "inbox poll failed");
                }
            }
            tokio::time::sleep(delay).await;
        }
    });

    (handle, rx)
}
