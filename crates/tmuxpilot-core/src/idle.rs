//! Change-based idle detection: content fingerprints and the observation
//! step.
//!
//! The polling loop itself (capture, sleep, deadline) lives with the
//! backend that drives it; this module keeps the fingerprint/timestamp
//! pair as explicit state so one step can be driven from a blocking sleep
//! loop or any other scheduler:
//!
//! - **Change**: a capture whose fingerprint differs from the previous
//!   tick's restarts the quiet period.
//! - **Idle**: the quiet period (`idle_after`) has elapsed since the last
//!   change.
//! - **First sample**: always counts as a change, so `last_change` starts
//!   at loop start and an unchanging target still waits out one full quiet
//!   period before being declared idle.

use std::time::{Duration, Instant};

use sha2::{Digest, Sha256};

/// Default quiet period before a target counts as idle.
pub const DEFAULT_IDLE_TIME: Duration = Duration::from_secs(2);

/// Default pause between polling ticks.
pub const DEFAULT_CHECK_INTERVAL: Duration = Duration::from_millis(500);

/// SHA-256 digest of captured text.
///
/// Used only for equality comparison across polling ticks; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    /// Digest one capture.
    pub fn of(text: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(text.as_bytes());
        Self(hasher.finalize().into())
    }
}

/// Observation state carried between polling ticks of one idle wait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdleState {
    /// Fingerprint of the previous capture. `None` until the first
    /// observation.
    pub last_fingerprint: Option<Fingerprint>,
    /// When the captured content last changed.
    pub last_change: Instant,
}

impl IdleState {
    /// Seed the state at loop start.
    pub fn new(now: Instant) -> Self {
        Self {
            last_fingerprint: None,
            last_change: now,
        }
    }
}

/// Output of one observation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdleOutput {
    /// Whether this capture differed from the previous one.
    pub changed: bool,
    /// Whether the quiet period has elapsed, evaluated after applying this
    /// observation.
    pub idle: bool,
}

/// Step the idle detector with one capture fingerprint.
///
/// Records `now` as the last change whenever `fingerprint` differs from
/// the previous observation, then reports idle once `idle_after` has
/// elapsed since the last change. Pure; the caller drives capture and
/// sleep.
pub fn observe(
    state: &IdleState,
    fingerprint: Fingerprint,
    now: Instant,
    idle_after: Duration,
) -> (IdleState, IdleOutput) {
    let changed = state.last_fingerprint != Some(fingerprint);
    let last_change = if changed { now } else { state.last_change };

    let next = IdleState {
        last_fingerprint: Some(fingerprint),
        last_change,
    };
    let output = IdleOutput {
        changed,
        idle: now.duration_since(last_change) >= idle_after,
    };
    (next, output)
}

// ─── Tests ───────────────────────────────────────────────────────────


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// An unchanged capture is idle exactly when the quiet period has
        /// elapsed since the first observation.
        #[test]
        fn idle_exactly_at_quiet_period(
            idle_ms in 1u64..10_000,
            elapsed_ms in 0u64..20_000,
        ) {
            let idle_after = Duration::from_millis(idle_ms);
            let t0 = Instant::now();
            let steady = Fingerprint::of("steady");

            let (state, _) = observe(&IdleState::new(t0), steady, t0, idle_after);
            let (_, out) = observe(
                &state,
                steady,
                t0 + Duration::from_millis(elapsed_ms),
                idle_after,
            );
            prop_assert_eq!(out.idle, elapsed_ms >= idle_ms);
        }

        /// A differing capture always restarts the quiet period, however
        /// late it arrives.
        #[test]
        fn change_is_never_idle(
            idle_ms in 1u64..10_000,
            elapsed_ms in 0u64..20_000,
            text in ".*",
        ) {
            prop_assume!(text != "steady");
            let idle_after = Duration::from_millis(idle_ms);
            let t0 = Instant::now();

            let (state, _) = observe(&IdleState::new(t0), Fingerprint::of("steady"), t0, idle_after);
            let now = t0 + Duration::from_millis(elapsed_ms);
            let (next, out) = observe(&state, Fingerprint::of(&text), now, idle_after);
            prop_assert!(out.changed);
            prop_assert!(!out.idle);
            prop_assert_eq!(next.last_change, now);
        }
    }
}
