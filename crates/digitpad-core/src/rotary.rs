#![forbid(unsafe_code)]

//! Rotary dial input strategies.
//!
//! Two bindings exist for a continuous dial, chosen once when a session is
//! configured:
//!
//! - **Accumulated**: the dial reports fractional motion deltas. A float
//!   accumulator sums them and commits a single ±1 step each time its
//!   magnitude reaches one full detent, then resets to zero so one gesture
//!   tick can never commit a multi-step jump.
//! - **Absolute**: the dial reports its position directly and the value is
//!   the nearest integer.

/// Largest dial position resolved exactly: beyond this, `f64` can no
/// longer represent every integer and round-to-nearest would alias.
pub const MAX_DIAL_POSITION: f64 = 9_007_199_254_740_992.0; // 2^53

/// Accumulates fractional dial deltas into whole ±1 steps.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotaryAccumulator {
    pending: f64,
}

impl RotaryAccumulator {
    /// Create an accumulator at rest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fractional motion accumulated so far.
    #[must_use]
    pub const fn pending(&self) -> f64 {
        self.pending
    }

    /// Feed a motion delta.
    ///
    /// Returns `Some(+1)` or `Some(-1)` when the accumulated motion
    /// crosses a full detent in either direction, resetting the
    /// accumulator to zero; `None` otherwise. Non-finite deltas are
    /// ignored.
    pub fn feed(&mut self, delta: f64) -> Option<i64> {
        if !delta.is_finite() {
            return None;
        }
        self.pending += delta;
        if self.pending >= 1.0 {
            self.pending = 0.0;
            Some(1)
        } else if self.pending <= -1.0 {
            self.pending = 0.0;
            Some(-1)
        } else {
            None
        }
    }

    /// Discard any accumulated motion.
    pub fn reset(&mut self) {
        self.pending = 0.0;
    }
}

/// Resolve an absolute dial position to the nearest detent.
///
/// NaN resolves to zero; positions beyond the exact-`f64` range
/// (infinities included) are pinned to [`MAX_DIAL_POSITION`] first.
#[must_use]
pub fn detent(position: f64) -> i64 {
    if position.is_nan() {
        return 0;
    }
    position.clamp(-MAX_DIAL_POSITION, MAX_DIAL_POSITION).round() as i64
}

/// Dial-binding strategy for a numeric session.
///
/// Selected once at session construction; sessions ignore rotary events of
/// the other flavor rather than switching strategies mid-entry.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RotaryBinding {
    /// Relative motion through a [`RotaryAccumulator`].
    #[default]
    Accumulated,

    /// Direct position reports resolved through [`detent`].
    Absolute,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_detent_motion_does_not_commit() {
        let mut acc = RotaryAccumulator::new();
        assert_eq!(acc.feed(0.6), None);
        assert!((acc.pending() - 0.6).abs() < 1e-9);
    }

    #[test]
    fn second_tick_crosses_threshold_and_resets() {
        let mut acc = RotaryAccumulator::new();
        assert_eq!(acc.feed(0.6), None);
        assert_eq!(acc.feed(0.6), Some(1));
        assert_eq!(acc.pending(), 0.0);
    }

    #[test]
    fn counterclockwise_commits_minus_one() {
        let mut acc = RotaryAccumulator::new();
        assert_eq!(acc.feed(-1.7), Some(-1));
        assert_eq!(acc.pending(), 0.0);
    }

    #[test]
    fn large_tick_commits_single_step() {
        // A wild gesture tick still commits exactly one detent.
        let mut acc = RotaryAccumulator::new();
        assert_eq!(acc.feed(5.3), Some(1));
        assert_eq!(acc.pending(), 0.0);
    }

    #[test]
    fn direction_reversal_cancels_out() {
        let mut acc = RotaryAccumulator::new();
        assert_eq!(acc.feed(0.8), None);
        assert_eq!(acc.feed(-0.5), None);
        assert_eq!(acc.feed(0.3), None);
        assert!((acc.pending() - 0.6).abs() < 1e-9);
    }

    #[test]
    fn non_finite_delta_ignored() {
        let mut acc = RotaryAccumulator::new();
        acc.feed(0.4);
        assert_eq!(acc.feed(f64::NAN), None);
        assert_eq!(acc.feed(f64::INFINITY), None);
        assert!((acc.pending() - 0.4).abs() < 1e-9);
    }

    #[test]
    fn reset_discards_pending() {
        let mut acc = RotaryAccumulator::new();
        acc.feed(0.9);
        acc.reset();
        assert_eq!(acc.pending(), 0.0);
        assert_eq!(acc.feed(0.9), None);
    }

    #[test]
    fn detent_rounds_to_nearest() {
        assert_eq!(detent(4.4), 4);
        assert_eq!(detent(4.5), 5);
        assert_eq!(detent(-2.5), -3);
        assert_eq!(detent(0.0), 0);
    }

    #[test]
    fn detent_handles_pathological_input() {
        assert_eq!(detent(f64::NAN), 0);
        assert_eq!(detent(f64::INFINITY), MAX_DIAL_POSITION as i64);
        assert_eq!(detent(f64::NEG_INFINITY), -(MAX_DIAL_POSITION as i64));
    }
}
