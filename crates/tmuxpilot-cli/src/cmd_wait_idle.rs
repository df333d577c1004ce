//! The `wait_idle` command: poll a pane until its output settles.

use std::time::Duration;

use tmuxpilot_control::{Controller, IdleWaitOpts};

use crate::cli::WaitIdleOpts;

/// Run the wait and report the outcome as an exit code.
///
/// 0 once the pane has gone idle, 1 when the deadline expired first,
/// 2 when the pane or the tmux bridge was unreachable.
pub fn run(pilot: &Controller, opts: &WaitIdleOpts) -> i32 {
    let wait = resolve_opts(opts);
    match pilot.wait_idle(opts.pane.as_deref(), &wait) {
        Ok(true) => {
            println!("idle");
            0
        }
        Ok(false) => {
            eprintln!("timed out waiting for idle");
            1
        }
        Err(err) => {
            eprintln!("{err}");
            2
        }
    }
}

/// Map command-line seconds onto wait options, keeping the defaults
/// for anything absent or unrepresentable.
fn resolve_opts(opts: &WaitIdleOpts) -> IdleWaitOpts {
    let defaults = IdleWaitOpts::default();
    IdleWaitOpts {
        idle_time: secs_or(opts.idle_time, defaults.idle_time),
        check_interval: secs_or(opts.check_interval, defaults.check_interval),
        // A timeout that cannot be represented counts as already expired.
        timeout: opts
            .timeout
            .map(|secs| Duration::try_from_secs_f64(secs).unwrap_or(Duration::ZERO)),
    }
}

fn secs_or(value: Option<f64>, fallback: Duration) -> Duration {
    value
        .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tmuxpilot_control::{DetachedBackend, Mode};

    fn opts(idle_time: Option<f64>, check_interval: Option<f64>, timeout: Option<f64>) -> WaitIdleOpts {
        WaitIdleOpts { pane: None, idle_time, check_interval, timeout }
    }

    #[test]
    fn absent_flags_keep_the_defaults() {
        let wait = resolve_opts(&opts(None, None, None));
        let defaults = IdleWaitOpts::default();
        assert_eq!(wait.idle_time, defaults.idle_time);
        assert_eq!(wait.check_interval, defaults.check_interval);
        assert_eq!(wait.timeout, None);
    }

    #[test]
    fn explicit_flags_override_the_defaults() {
        let wait = resolve_opts(&opts(Some(0.25), Some(0.05), Some(30.0)));
        assert_eq!(wait.idle_time, Duration::from_millis(250));
        assert_eq!(wait.check_interval, Duration::from_millis(50));
        assert_eq!(wait.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn negative_durations_fall_back() {
        let wait = resolve_opts(&opts(Some(-1.0), Some(f64::NAN), Some(-5.0)));
        let defaults = IdleWaitOpts::default();
        assert_eq!(wait.idle_time, defaults.idle_time);
        assert_eq!(wait.check_interval, defaults.check_interval);
        assert_eq!(wait.timeout, Some(Duration::ZERO), "bad timeout should expire at once");
    }

    #[test]
    fn unreachable_backend_exits_two() {
        let pilot = Controller::with_backend(
            Box::new(DetachedBackend::new("robots")),
            Mode::Detached,
            "robots",
        );
        assert_eq!(run(&pilot, &opts(None, None, Some(0.01))), 2);
    }
}
