//! The backend capability trait and per-operation option types.

use std::time::Duration;

use regex::Regex;
use tmuxpilot_core::{DEFAULT_CHECK_INTERVAL, DEFAULT_IDLE_TIME, Target, TargetSpec};
use tmuxpilot_tmux::{ResizeDirection, SplitDirection};

use crate::error::Error;

/// Pause between dispatching text and its delayed Enter.
pub const DEFAULT_ENTER_DELAY: Duration = Duration::from_secs(1);

/// How long a pattern wait runs before reporting no match.
pub const DEFAULT_PATTERN_TIMEOUT: Duration = Duration::from_secs(10);

/// How the Enter key follows dispatched text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Text only, no Enter.
    None,
    /// Enter appended in the same dispatch.
    Immediate,
    /// Text first, then Enter as a second dispatch after this pause.
    ///
    /// Chat-style programs can swallow a same-call Enter while a pasted
    /// burst of text is still landing in their input buffer; the pause
    /// lets the text settle before the return arrives.
    Delayed(Duration),
}

impl Activation {
    /// Combine the `--enter` / `--delay-enter` option pair.
    /// `enter = false` delivers text only, whatever the delay asks;
    /// with Enter on, the delay picks between a same-call key and a
    /// separate delayed dispatch.
    pub fn from_flags(enter: bool, delay: Option<EnterDelay>) -> Self {
        if !enter {
            return Activation::None;
        }
        match delay {
            Some(EnterDelay::Default) => Activation::Delayed(DEFAULT_ENTER_DELAY),
            Some(EnterDelay::Secs(secs)) if secs > 0.0 => {
                // Non-finite values come back as the default pause.
                let pause = Duration::try_from_secs_f64(secs).unwrap_or(DEFAULT_ENTER_DELAY);
                Activation::Delayed(pause)
            }
            _ => Activation::Immediate,
        }
    }
}

/// Parsed value of the `--delay-enter` option: `true` for the default
/// pause, `false` for none, or a pause in seconds. Values of zero or
/// less mean no pause.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnterDelay {
    Immediate,
    Default,
    Secs(f64),
}

impl std::str::FromStr for EnterDelay {
    type Err = ParseEnterDelayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "true" => Ok(EnterDelay::Default),
            "false" => Ok(EnterDelay::Immediate),
            other => match other.parse::<f64>() {
                Ok(secs) if secs > 0.0 => Ok(EnterDelay::Secs(secs)),
                Ok(_) => Ok(EnterDelay::Immediate),
                Err(_) => Err(ParseEnterDelayError),
            },
        }
    }
}

/// Error parsing a `--delay-enter` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEnterDelayError;

impl std::fmt::Display for ParseEnterDelayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("expected `true`, `false`, or a number of seconds")
    }
}

impl std::error::Error for ParseEnterDelayError {}

/// Options for creating a target.
#[derive(Debug, Clone, Default)]
pub struct CreateOpts {
    /// Program to run in the new pane; the default shell when omitted.
    pub command: Option<String>,
    /// Split orientation relative to the current pane.
    pub direction: SplitDirection,
    /// The new pane's share of the parent, in percent.
    pub size_percent: Option<u8>,
    /// Window name, for backends that create windows. Pane backends
    /// ignore it.
    pub window_name: Option<String>,
}

/// Options for an idle wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdleWaitOpts {
    /// Quiet period that counts as idle.
    pub idle_time: Duration,
    /// Pause between capture ticks.
    pub check_interval: Duration,
    /// Overall deadline; `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for IdleWaitOpts {
    fn default() -> Self {
        Self {
            idle_time: DEFAULT_IDLE_TIME,
            check_interval: DEFAULT_CHECK_INTERVAL,
            timeout: None,
        }
    }
}

/// Options for a pattern wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternWaitOpts {
    /// Overall deadline. Expiry is an expected outcome, reported as
    /// `false` rather than an error.
    pub timeout: Duration,
    /// Pause between capture ticks.
    pub check_interval: Duration,
}

impl Default for PatternWaitOpts {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_PATTERN_TIMEOUT,
            check_interval: DEFAULT_CHECK_INTERVAL,
        }
    }
}

/// Uniform operation set every backend implements.
///
/// The attached backend drives panes of the window this process runs in;
/// the detached backend is an interface reservation that fails every
/// call. The waits block the calling thread; nothing here is async.
pub trait Backend {
    /// Create a target, install it as the last-selected reference, and
    /// return its handle.
    fn create(&mut self, opts: &CreateOpts) -> Result<String, Error>;

    /// Destroy a target and return its handle. The pane hosting this
    /// process is refused.
    fn destroy(&mut self, spec: Option<&TargetSpec>) -> Result<String, Error>;

    /// Resolve a spec and install it as the last-selected reference.
    fn select(&mut self, spec: &TargetSpec) -> Result<String, Error>;

    /// Move a target's edge by `amount` cells.
    fn resize(
        &self,
        spec: Option<&TargetSpec>,
        direction: ResizeDirection,
        amount: u32,
    ) -> Result<(), Error>;

    /// Give a target input focus.
    fn focus(&self, spec: Option<&TargetSpec>) -> Result<(), Error>;

    /// Dispatch text, with the Enter key per `activation`.
    fn send(
        &self,
        spec: Option<&TargetSpec>,
        text: &str,
        activation: Activation,
    ) -> Result<(), Error>;

    /// Send one interrupt keystroke (`C-c`).
    fn interrupt(&self, spec: Option<&TargetSpec>) -> Result<(), Error>;

    /// Send one escape keystroke.
    fn escape(&self, spec: Option<&TargetSpec>) -> Result<(), Error>;

    /// Clear the target's screen (`C-l`).
    fn clear(&self, spec: Option<&TargetSpec>) -> Result<(), Error>;

    /// Snapshot the target's rendered text. `lines` reaches that many
    /// lines back into scrollback; `None` captures the visible screen.
    fn capture(&self, spec: Option<&TargetSpec>, lines: Option<u32>) -> Result<String, Error>;

    /// Block until the target's content has not changed for
    /// `opts.idle_time`. Deadline expiry is `Ok(false)`.
    fn wait_for_idle(&self, spec: Option<&TargetSpec>, opts: &IdleWaitOpts) -> Result<bool, Error>;

    /// Block until `pattern` matches the tail of the target's output.
    /// Deadline expiry is `Ok(false)`.
    fn wait_for_pattern(
        &self,
        spec: Option<&TargetSpec>,
        pattern: &Regex,
        opts: &PatternWaitOpts,
    ) -> Result<bool, Error>;

    /// Enumerate the targets of the current container.
    fn list_targets(&self) -> Result<Vec<Target>, Error>;

    /// Attach the controlled session to a terminal.
    fn attach(&self) -> Result<String, Error>;

    /// Tear down whatever the backend set up.
    fn cleanup(&self) -> Result<String, Error>;

    /// Describe the controlled session's windows.
    fn list_windows(&self) -> Result<String, Error>;
}
