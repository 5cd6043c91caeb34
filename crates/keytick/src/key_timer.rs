/// Minimal positive hold duration, assigned at the press transition so a
/// fresh press is distinguishable from the neutral state.
pub const EPSILON: f64 = 1e-5;

/// Numeric stand-in reported by `time_pressed` for a key released during
/// the last processed tick. A flag, not a duration.
pub const RELEASE_MARKER: f64 = -1.0;

/// Per-key timer state.
///
/// A key is `Neutral` until a press is processed, `Held` from that tick
/// on (starting at [`EPSILON`] and growing by the tick delta while held),
/// and `JustReleased` for exactly one tick after its release is
/// processed, after which it returns to `Neutral`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum KeyTimer {
    /// Key is up, no recent transition.
    #[default]
    Neutral,
    /// Key is down; the payload is seconds held since the press.
    Held(f64),
    /// Key was released during the most recently processed tick.
    JustReleased,
}

impl KeyTimer {
    /// Advance this timer by one tick of `delta` seconds: held durations
    /// grow, a release marker from the previous tick retires to neutral.
    /// Must run before queue draining so a release applied in the same
    /// tick stays observable until the next one.
    pub(crate) fn age(&mut self, delta: f64) {
        *self = match *self {
            KeyTimer::Held(secs) => KeyTimer::Held(secs + delta),
            KeyTimer::JustReleased => KeyTimer::Neutral,
            KeyTimer::Neutral => KeyTimer::Neutral,
        };
    }

    /// Apply a queued down event. Only a neutral key starts a new hold:
    /// duplicate downs from OS key repeat keep the running duration, and
    /// a re-press landing in the same tick as the release is dropped.
    pub(crate) fn press(&mut self) {
        if *self == KeyTimer::Neutral {
            *self = KeyTimer::Held(EPSILON);
        }
    }

    /// Apply a queued up event. Unconditional: the marker is observable
    /// for one tick even when no press was ever seen.
    pub(crate) fn release(&mut self) {
        *self = KeyTimer::JustReleased;
    }

    /// True while the key is held.
    pub fn is_down(self) -> bool {
        matches!(self, KeyTimer::Held(_))
    }

    /// Numeric view of the timer: seconds held while down, `0.0` when
    /// neutral, [`RELEASE_MARKER`] for the tick after a release.
    pub fn as_secs(self) -> f64 {
        match self {
            KeyTimer::Neutral => 0.0,
            KeyTimer::Held(secs) => secs,
            KeyTimer::JustReleased => RELEASE_MARKER,
        }
    }
}
