//! Interval gating for frame builds.

use std::time::{Duration, Instant};

/// Default minimum interval between repaints.
pub const DEFAULT_REPAINT_INTERVAL: Duration = Duration::from_millis(15);

/// Decides, on each host idle tick, whether enough time has passed since
/// the last completed paint to justify building a new toolkit frame.
///
/// The host may tick arbitrarily often; this is a lazy cooldown check
/// against a monotonic clock, not a scheduled timer. Two rules:
///
/// 1. Before anything has ever been painted, every tick may build
///    (first-paint bypass).
/// 2. Afterwards, a tick may build only when the elapsed time since the
///    last paint *strictly* exceeds the configured interval.
///
/// The timestamp is recorded when a paint completes — not when a build is
/// attempted or a repaint merely requested — so the gate measures real
/// paint-to-paint spacing.
#[derive(Debug)]
pub struct RepaintGate {
    interval: Duration,
    last_painted: Option<Instant>,
}

impl Default for RepaintGate {
    fn default() -> Self {
        Self::new(DEFAULT_REPAINT_INTERVAL)
    }
}

impl RepaintGate {
    /// Create a gate with the given minimum repaint interval.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_painted: None,
        }
    }

    /// Whether a frame build may proceed at time `now`.
    pub fn should_build(&self, now: Instant) -> bool {
        match self.last_painted {
            None => true,
            Some(last) => now.duration_since(last) > self.interval,
        }
    }

    /// Record that a paint completed at time `now`.
    pub fn mark_painted(&mut self, now: Instant) {
        self.last_painted = Some(now);
    }

    /// Whether any paint has ever completed.
    pub fn has_painted(&self) -> bool {
        self.last_painted.is_some()
    }

    /// The configured minimum repaint interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_build_always_allowed() {
        let gate = RepaintGate::default();
        assert!(gate.should_build(Instant::now()));
    }

    #[test]
    fn test_threshold_is_strict() {
        let mut gate = RepaintGate::new(Duration::from_millis(15));
        let t0 = Instant::now();
        gate.mark_painted(t0);

        assert!(!gate.should_build(t0 + Duration::from_millis(15)));
        assert!(gate.should_build(t0 + Duration::from_micros(15_001)));
    }

    #[test]
    fn test_gate_measures_from_last_paint() {
        let mut gate = RepaintGate::new(Duration::from_millis(15));
        let t0 = Instant::now();
        gate.mark_painted(t0);
        gate.mark_painted(t0 + Duration::from_millis(40));

        assert!(!gate.should_build(t0 + Duration::from_millis(50)));
        assert!(gate.should_build(t0 + Duration::from_millis(56)));
    }
}
