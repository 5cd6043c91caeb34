use std::sync::mpsc;

use crate::key::Key;

/// Raw key transition as delivered by the platform event source.
///
/// Carries no timestamp: events take effect at the tick that drains them,
/// in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    /// True for a down transition, false for an up.
    pub pressed: bool,
}

/// Cloneable handle delivering raw key events into a timer table's
/// pending queue.
///
/// Obtained from `KeyTimerManager::sink` and handed to whatever event
/// source the caller owns; dropping every sink ends the subscription.
/// Sinks may be moved to other threads. Events sent after the table is
/// gone are discarded.
#[derive(Debug, Clone)]
pub struct KeyEventSink {
    tx: mpsc::Sender<KeyEvent>,
    swallow: bool,
}

impl KeyEventSink {
    pub(crate) fn new(tx: mpsc::Sender<KeyEvent>, swallow: bool) -> Self {
        Self { tx, swallow }
    }

    /// Queue a down event for `key`.
    ///
    /// Returns true when the caller should consume the underlying
    /// platform event instead of letting it propagate further.
    pub fn key_down(&self, key: Key) -> bool {
        let _ = self.tx.send(KeyEvent { key, pressed: true });
        self.swallow
    }

    /// Queue an up event for `key`. Same return contract as
    /// [`KeyEventSink::key_down`].
    pub fn key_up(&self, key: Key) -> bool {
        let _ = self.tx.send(KeyEvent { key, pressed: false });
        self.swallow
    }

    /// Whether events delivered through this sink are marked consumed.
    pub fn swallows_input(&self) -> bool {
        self.swallow
    }
}
