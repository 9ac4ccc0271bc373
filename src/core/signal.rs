//! One-shot broadcast signals
//!
//! A signal is a channel nobody ever sends on. Firing it drops the only
//! sender, which disconnects the channel and wakes every waiter at once.
//! Once fired it stays fired.

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender, TryRecvError};
use parking_lot::Mutex;
use std::time::Duration;

/// Create a connected trigger/signal pair
pub(crate) fn signal() -> (Trigger, Signal) {
    let (tx, rx) = bounded(0);
    (
        Trigger {
            tx: Mutex::new(Some(tx)),
        },
        Signal { rx },
    )
}

/// Firing side of a [`Signal`]
///
/// Dropping an unfired trigger fires the signal as well.
#[derive(Debug)]
pub(crate) struct Trigger {
    tx: Mutex<Option<Sender<()>>>,
}

impl Trigger {
    /// Fire the signal; returns `false` if it had already fired
    pub(crate) fn fire(&self) -> bool {
        self.tx.lock().take().is_some()
    }
}

/// Waitable handle on a one-shot event
///
/// Cheap to clone; every clone observes the same event.
#[derive(Debug, Clone)]
pub struct Signal {
    rx: Receiver<()>,
}

impl Signal {
    /// Block until the signal fires
    pub fn wait(&self) {
        // Nothing is ever sent, so recv only returns once disconnected
        let _ = self.rx.recv();
    }

    /// Block until the signal fires or `timeout` elapses
    ///
    /// Returns `true` if the signal fired.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        matches!(
            self.rx.recv_timeout(timeout),
            Err(RecvTimeoutError::Disconnected)
        )
    }

    /// Whether the signal has fired, without blocking
    pub fn is_fired(&self) -> bool {
        matches!(self.rx.try_recv(), Err(TryRecvError::Disconnected))
    }
}
