//! Frame-locked keyboard input detection.
//!
//! Converts raw, asynchronously arriving key events into a synchronous,
//! frame-consistent query API:
//!
//! - [`KeyTimerManager`]: per-key hold timers, advanced once per tick
//! - [`KeyEventSink`]: cloneable handle feeding raw events into the table
//! - [`Key`]: symbolic key identifiers with stable key codes
//! - [`KeyTimerConfig`]: construction options
//!
//! Raw down/up notifications are queued as they arrive and applied at the
//! next [`KeyTimerManager::advance`] call, so a key tapped faster than
//! the tick rate still registers as a press and a release instead of
//! being lost between frames.

mod config;
mod event;
mod key;
mod key_timer;
mod timer_manager;

pub use config::KeyTimerConfig;
pub use event::{KeyEvent, KeyEventSink};
pub use key::Key;
pub use key_timer::{EPSILON, KeyTimer, RELEASE_MARKER};
pub use timer_manager::KeyTimerManager;
