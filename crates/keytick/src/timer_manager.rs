use std::sync::mpsc;

use crate::config::KeyTimerConfig;
use crate::event::{KeyEvent, KeyEventSink};
use crate::key::Key;
use crate::key_timer::{EPSILON, KeyTimer};

/// Frame-synchronous view over asynchronously arriving keyboard input.
///
/// Raw down/up notifications are queued as they arrive (via
/// [`KeyTimerManager::notify_key_down`] / [`KeyTimerManager::notify_key_up`]
/// or a [`KeyEventSink`]) and applied in arrival order by
/// [`KeyTimerManager::advance`], once per tick of the driving loop.
/// Between two `advance` calls every query answers from the same
/// consistent snapshot.
pub struct KeyTimerManager {
    /// Dense per-key timers, indexed by `Key::code()`.
    timers: [KeyTimer; Self::SIZE],
    event_tx: mpsc::Sender<KeyEvent>,
    event_rx: mpsc::Receiver<KeyEvent>,
    /// Duration of the most recently advanced tick, seconds.
    last_delta: f64,
    /// Cumulative time across all ticks, seconds.
    game_time: f64,
    swallow_input: bool,
}

impl KeyTimerManager {
    /// Size of the key-code space; all key codes are below this.
    pub const SIZE: usize = 255;

    /// Create a table with default configuration (input swallowed).
    pub fn new() -> Self {
        Self::with_config(KeyTimerConfig::default())
    }

    /// Create a table with the given configuration.
    pub fn with_config(config: KeyTimerConfig) -> Self {
        let (event_tx, event_rx) = mpsc::channel();
        Self {
            timers: [KeyTimer::Neutral; Self::SIZE],
            event_tx,
            event_rx,
            last_delta: 0.0,
            game_time: 0.0,
            swallow_input: config.swallow_input,
        }
    }

    /// New send handle into the pending queue, for wiring up whatever
    /// event source the caller owns.
    pub fn sink(&self) -> KeyEventSink {
        KeyEventSink::new(self.event_tx.clone(), self.swallow_input)
    }

    /// Queue a down event for `key`, applied at the next [`advance`].
    ///
    /// Returns true when the caller should consume the underlying
    /// platform event instead of letting it propagate further.
    ///
    /// [`advance`]: KeyTimerManager::advance
    pub fn notify_key_down(&self, key: Key) -> bool {
        let _ = self.event_tx.send(KeyEvent { key, pressed: true });
        self.swallow_input
    }

    /// Queue an up event for `key`, applied at the next [`advance`].
    /// Same return contract as [`KeyTimerManager::notify_key_down`].
    ///
    /// [`advance`]: KeyTimerManager::advance
    pub fn notify_key_up(&self, key: Key) -> bool {
        let _ = self.event_tx.send(KeyEvent { key, pressed: false });
        self.swallow_input
    }

    /// Advance the table by one tick of `delta_secs` seconds. Call once
    /// per iteration of the driving loop.
    ///
    /// Ages every held key, retires release markers from the previous
    /// tick, then drains the pending queue in arrival order. Deferring
    /// queued events to this point is what keeps a down+up pair arriving
    /// between two ticks observable instead of lost.
    pub fn advance(&mut self, delta_secs: f64) {
        // A negative or non-finite delta would manufacture timer values
        // outside the documented domain.
        let delta = if delta_secs.is_finite() && delta_secs >= 0.0 {
            delta_secs
        } else {
            log::warn!("invalid tick delta {delta_secs}, advancing by zero");
            0.0
        };

        self.last_delta = delta;
        self.game_time += delta;

        for timer in &mut self.timers {
            timer.age(delta);
        }

        while let Ok(event) = self.event_rx.try_recv() {
            let timer = &mut self.timers[event.key.code() as usize];
            if event.pressed {
                timer.press();
            } else {
                timer.release();
            }
        }
    }

    /// True while `key` is held down.
    pub fn is_key_down(&self, key: Key) -> bool {
        self.timer(key).is_down()
    }

    /// True while `key` is up (neutral or just released).
    pub fn is_key_up(&self, key: Key) -> bool {
        !self.is_key_down(key)
    }

    /// True when the press of `key` landed within the just-completed
    /// tick window; the window closes at the following `advance` call.
    pub fn is_new_key_press(&self, key: Key) -> bool {
        match self.timer(key) {
            KeyTimer::Held(secs) => EPSILON <= secs && secs < self.last_delta + EPSILON,
            _ => false,
        }
    }

    /// True for exactly the one tick that processed the release of `key`.
    pub fn is_new_key_release(&self, key: Key) -> bool {
        self.timer(key) == KeyTimer::JustReleased
    }

    /// Seconds `key` has been held: `0.0` when neutral,
    /// [`RELEASE_MARKER`](crate::RELEASE_MARKER) for the tick after a
    /// release.
    pub fn time_pressed(&self, key: Key) -> f64 {
        self.timer(key).as_secs()
    }

    /// [`KeyTimerManager::time_pressed`] in milliseconds.
    pub fn time_pressed_ms(&self, key: Key) -> f64 {
        self.time_pressed(key) * 1000.0
    }

    /// Timer state for `key`, for consumers that want the tagged form.
    pub fn timer(&self, key: Key) -> KeyTimer {
        self.timers[key.code() as usize]
    }

    /// Duration of the most recently advanced tick, seconds.
    pub fn last_delta(&self) -> f64 {
        self.last_delta
    }

    /// Cumulative time across all ticks, seconds.
    pub fn game_time(&self) -> f64 {
        self.game_time
    }

    /// Whether raw events are reported as consumed when queued.
    pub fn swallows_input(&self) -> bool {
        self.swallow_input
    }
}

impl Default for KeyTimerManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_starts_neutral() {
        let manager = KeyTimerManager::new();
        for key in Key::ALL {
            assert!(manager.is_key_up(key));
            assert!(!manager.is_key_down(key));
            assert!(!manager.is_new_key_press(key));
            assert!(!manager.is_new_key_release(key));
            assert_eq!(manager.time_pressed(key), 0.0);
        }
        assert_eq!(manager.game_time(), 0.0);
        assert_eq!(manager.last_delta(), 0.0);
    }

    #[test]
    fn press_applies_at_the_next_advance() {
        let mut manager = KeyTimerManager::new();
        manager.notify_key_down(Key::Space);

        // Not yet visible: the event sits in the queue until the tick.
        assert!(manager.is_key_up(Key::Space));

        manager.advance(0.016);
        assert!(manager.is_key_down(Key::Space));
        assert_eq!(manager.time_pressed(Key::Space), EPSILON);
        assert_eq!(manager.timer(Key::Space), KeyTimer::Held(EPSILON));
    }

    #[test]
    fn hold_duration_is_monotonic() {
        let mut manager = KeyTimerManager::new();
        manager.notify_key_down(Key::J);

        manager.advance(0.5);
        let first = manager.time_pressed(Key::J);
        manager.advance(0.5);
        let second = manager.time_pressed(Key::J);
        manager.advance(0.5);
        let third = manager.time_pressed(Key::J);

        assert_eq!(first, EPSILON);
        assert_eq!(second, first + 0.5);
        assert_eq!(third, second + 0.5);
        assert!(first < second && second < third);
        assert!((third - 1.0).abs() < 2.0 * EPSILON);
    }

    #[test]
    fn new_press_window_closes_after_one_tick() {
        let mut manager = KeyTimerManager::new();
        manager.notify_key_down(Key::Enter);

        manager.advance(0.1);
        assert!(manager.is_new_key_press(Key::Enter));

        manager.advance(0.1);
        assert!(manager.is_key_down(Key::Enter));
        assert!(!manager.is_new_key_press(Key::Enter));
    }

    #[test]
    fn release_marker_then_neutral() {
        let mut manager = KeyTimerManager::new();
        manager.notify_key_down(Key::X);
        manager.advance(0.2);
        assert!(manager.is_key_down(Key::X));

        manager.notify_key_up(Key::X);
        manager.advance(0.2);
        assert!(manager.is_new_key_release(Key::X));
        assert!(manager.is_key_up(Key::X));
        assert_eq!(manager.time_pressed(Key::X), -1.0);
        assert_eq!(manager.time_pressed_ms(Key::X), -1000.0);

        manager.advance(0.2);
        assert!(!manager.is_new_key_release(Key::X));
        assert!(manager.is_key_up(Key::X));
        assert_eq!(manager.time_pressed(Key::X), 0.0);
        assert_eq!(manager.timer(Key::X), KeyTimer::Neutral);
    }

    #[test]
    fn duplicate_downs_in_one_tick_apply_once() {
        let mut manager = KeyTimerManager::new();
        manager.notify_key_down(Key::Space);
        manager.notify_key_down(Key::Space);
        manager.advance(0.016);

        assert_eq!(manager.time_pressed(Key::Space), EPSILON);
    }

    #[test]
    fn repeat_down_does_not_restart_hold() {
        let mut manager = KeyTimerManager::new();
        manager.notify_key_down(Key::W);
        manager.advance(0.5);

        // OS key repeat while held.
        manager.notify_key_down(Key::W);
        manager.advance(0.5);

        // A restart would have reset the duration to EPSILON.
        assert_eq!(manager.time_pressed(Key::W), EPSILON + 0.5);
        assert!(!manager.is_new_key_press(Key::W));
    }

    #[test]
    fn tap_between_ticks_reports_release() {
        let mut manager = KeyTimerManager::new();
        manager.notify_key_down(Key::Q);
        manager.notify_key_up(Key::Q);
        manager.advance(0.016);

        assert!(manager.is_new_key_release(Key::Q));
        assert!(!manager.is_key_down(Key::Q));
    }

    #[test]
    fn re_press_in_the_release_tick_is_dropped() {
        let mut manager = KeyTimerManager::new();
        manager.notify_key_down(Key::Z);
        manager.advance(0.1);

        manager.notify_key_up(Key::Z);
        manager.notify_key_down(Key::Z);
        manager.advance(0.1);

        assert!(manager.is_new_key_release(Key::Z));
        assert!(!manager.is_key_down(Key::Z));

        manager.advance(0.1);
        assert_eq!(manager.timer(Key::Z), KeyTimer::Neutral);
    }

    #[test]
    fn up_without_a_press_still_reports_release() {
        let mut manager = KeyTimerManager::new();
        manager.notify_key_up(Key::F5);
        manager.advance(0.016);

        assert!(manager.is_new_key_release(Key::F5));

        manager.advance(0.016);
        assert_eq!(manager.timer(Key::F5), KeyTimer::Neutral);
    }

    #[test]
    fn zero_delta_press_is_held_but_not_new() {
        let mut manager = KeyTimerManager::new();
        manager.notify_key_down(Key::A);
        manager.advance(0.0);

        assert!(manager.is_key_down(Key::A));
        assert_eq!(manager.time_pressed(Key::A), EPSILON);
        // The new-press window is empty when the tick had no duration.
        assert!(!manager.is_new_key_press(Key::A));
    }

    #[test]
    fn negative_delta_is_treated_as_zero() {
        let mut manager = KeyTimerManager::new();
        manager.notify_key_down(Key::S);
        manager.advance(1.0);
        let held = manager.time_pressed(Key::S);

        manager.advance(-5.0);
        assert_eq!(manager.time_pressed(Key::S), held);
        assert_eq!(manager.game_time(), 1.0);
        assert_eq!(manager.last_delta(), 0.0);
    }

    #[test]
    fn non_finite_delta_is_treated_as_zero() {
        let mut manager = KeyTimerManager::new();
        manager.notify_key_down(Key::D);
        manager.advance(0.25);
        manager.advance(0.25);

        manager.advance(f64::NAN);
        manager.advance(f64::INFINITY);

        assert_eq!(manager.time_pressed(Key::D), EPSILON + 0.25);
        assert_eq!(manager.game_time(), 0.5);
    }

    #[test]
    fn tick_bookkeeping_accumulates() {
        let mut manager = KeyTimerManager::new();
        manager.advance(0.25);
        manager.advance(0.5);

        assert_eq!(manager.last_delta(), 0.5);
        assert_eq!(manager.game_time(), 0.75);
    }

    #[test]
    fn keys_are_independent() {
        let mut manager = KeyTimerManager::new();
        manager.notify_key_down(Key::A);
        manager.notify_key_down(Key::B);
        manager.advance(0.1);

        manager.notify_key_up(Key::A);
        manager.advance(0.1);

        assert!(manager.is_new_key_release(Key::A));
        assert!(manager.is_key_down(Key::B));
        assert!(manager.is_key_up(Key::C));
    }

    #[test]
    fn swallow_decision_follows_config() {
        let swallowing = KeyTimerManager::new();
        assert!(swallowing.swallows_input());
        assert!(swallowing.notify_key_down(Key::A));
        assert!(swallowing.notify_key_up(Key::A));
        assert!(swallowing.sink().key_down(Key::A));

        let passing = KeyTimerManager::with_config(KeyTimerConfig {
            swallow_input: false,
        });
        assert!(!passing.swallows_input());
        assert!(!passing.notify_key_down(Key::A));
        assert!(!passing.notify_key_up(Key::A));
        assert!(!passing.sink().key_up(Key::A));
    }

    #[test]
    fn sink_delivers_across_threads() {
        let mut manager = KeyTimerManager::new();
        let sink = manager.sink();

        let handle = std::thread::spawn(move || {
            sink.key_down(Key::Space);
        });
        handle.join().unwrap();

        manager.advance(0.016);
        assert!(manager.is_key_down(Key::Space));
    }
}
