use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use log::{debug, info};
use tokio::sync::watch;

use super::{PortfolioSnapshot, PortfolioState};

/// Holds the published [`PortfolioState`].
///
/// `publish` swaps the whole state in one step, so a reader never sees
/// records from one cycle next to a summary from another. Cycle results
/// arriving with a sequence number at or below the latest completed cycle
/// are discarded.
pub struct SnapshotStore {
    sender: watch::Sender<Arc<PortfolioState>>,
    next_sequence: AtomicU64,
}

impl SnapshotStore {
    pub fn new() -> Self {
        let (sender, _receiver) = watch::channel(Arc::new(PortfolioState::initial()));
        Self {
            sender,
            next_sequence: AtomicU64::new(1),
        }
    }

    /// Reserves the sequence number for a cycle that is about to start.
    pub fn next_sequence(&self) -> u64 {
        self.next_sequence.fetch_add(1, Ordering::SeqCst)
    }

    /// Replaces the published snapshot and clears any error.
    ///
    /// Returns `false` without changing anything if a cycle with the same or
    /// a newer sequence has already completed.
    pub fn publish(&self, snapshot: PortfolioSnapshot) -> bool {
        let sequence = snapshot.sequence;
        let asset_count = snapshot.summary.asset_count;
        let published = self.sender.send_if_modified(|state| {
            if sequence <= state.sequence {
                return false;
            }
            *state = Arc::new(PortfolioState {
                last_update: Some(snapshot.updated_at),
                snapshot: Some(Arc::new(snapshot)),
                last_error: None,
                sequence,
                loading: false,
            });
            true
        });

        if published {
            info!(
                "Published portfolio snapshot #{} with {} assets",
                sequence, asset_count
            );
        } else {
            debug!("Discarded stale portfolio snapshot #{}", sequence);
        }
        published
    }

    /// Records a failed cycle. The previous snapshot stays published.
    ///
    /// Returns `false` if a newer cycle has already completed.
    pub fn record_error(&self, sequence: u64, message: impl Into<String>) -> bool {
        let message = message.into();
        self.sender.send_if_modified(|state| {
            if sequence <= state.sequence {
                return false;
            }
            *state = Arc::new(PortfolioState {
                snapshot: state.snapshot.clone(),
                last_update: state.last_update,
                last_error: Some(message),
                sequence,
                loading: false,
            });
            true
        })
    }

    pub fn current(&self) -> Arc<PortfolioState> {
        self.sender.borrow().clone()
    }

    /// Latest published snapshot, if any cycle has succeeded yet.
    pub fn snapshot(&self) -> Option<Arc<PortfolioSnapshot>> {
        self.sender.borrow().snapshot.clone()
    }

    /// Receiver that is notified on every publish and recorded error.
    pub fn subscribe(&self) -> watch::Receiver<Arc<PortfolioState>> {
        self.sender.subscribe()
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}
