//! Cross-view refresh signal
//!
//! The root view owns a [`RefreshSignal`]; child views hold a
//! [`RefreshListener`] and re-fetch when it reports a change. The counter is
//! never shared as a mutable value.

use tokio::sync::watch;

/// Monotonic invalidation counter, starting at 0
#[derive(Debug)]
pub struct RefreshSignal {
    sender: watch::Sender<u64>,
}

impl Default for RefreshSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl RefreshSignal {
    /// Create a signal with the counter at 0
    pub fn new() -> Self {
        let (sender, _) = watch::channel(0);
        Self { sender }
    }

    /// Get a listener that has already seen the current value
    pub fn subscribe(&self) -> RefreshListener {
        RefreshListener {
            receiver: self.sender.subscribe(),
        }
    }

    /// Increment the counter, waking every listener
    pub fn bump(&self) {
        self.sender.send_modify(|count| *count += 1);
        tracing::debug!("Refresh signal bumped to {}", *self.sender.borrow());
    }

    /// Current counter value
    pub fn current(&self) -> u64 {
        *self.sender.borrow()
    }
}

/// Read-only view of a [`RefreshSignal`]
#[derive(Debug, Clone)]
pub struct RefreshListener {
    receiver: watch::Receiver<u64>,
}

impl RefreshListener {
    /// Returns true once for each batch of bumps since the last call
    pub fn take_change(&mut self) -> bool {
        match self.receiver.has_changed() {
            Ok(true) => {
                self.receiver.borrow_and_update();
                true
            },
            _ => false,
        }
    }

    /// Wait until the signal is bumped
    ///
    /// Returns false once the owning signal has been dropped.
    pub async fn changed(&mut self) -> bool {
        self.receiver.changed().await.is_ok()
    }
}
