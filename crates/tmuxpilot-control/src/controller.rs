//! Mode detection and the caller-facing facade.

use std::str::FromStr;

use regex::Regex;
use tmuxpilot_core::{Target, TargetSpec};
use tmuxpilot_tmux::{ResizeDirection, SystemTmux};

use crate::attached::AttachedBackend;
use crate::backend::{Activation, Backend, CreateOpts, IdleWaitOpts, PatternWaitOpts};
use crate::detached::DetachedBackend;
use crate::error::Error;

/// Which backend drives operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Running inside the tmux session being controlled; operations
    /// address panes of the current window.
    Attached,
    /// Running outside tmux; operations would address windows of a named
    /// session, and all currently fail with `UnsupportedMode`.
    Detached,
}

impl Mode {
    /// Pick a mode from the ambient environment. tmux exports `TMUX` to
    /// every process it hosts, so its presence means attached.
    pub fn detect() -> Self {
        Self::for_env(std::env::var_os("TMUX").is_some())
    }

    /// Mode for a known environment; [`Mode::detect`] reads the real one.
    pub fn for_env(inside_tmux: bool) -> Self {
        if inside_tmux {
            Mode::Attached
        } else {
            Mode::Detached
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Attached => f.write_str("attached"),
            Mode::Detached => f.write_str("detached"),
        }
    }
}

/// Facade over the mode-selected backend.
///
/// Inspects the environment once at construction and never branches on
/// mode afterwards. Owns the caller-facing addressing translation: raw
/// target strings are parsed into [`TargetSpec`]s and pattern strings
/// are compiled before anything reaches the backend.
pub struct Controller {
    backend: Box<dyn Backend>,
    mode: Mode,
    session: String,
}

impl Controller {
    /// Backend per the ambient environment (`TMUX` present or not).
    ///
    /// `socket` addresses a non-default tmux server socket; `session`
    /// names the session a detached controller would manage.
    pub fn from_env(socket: Option<&str>, session: &str) -> Self {
        Self::with_mode(Mode::detect(), socket, session)
    }

    /// Backend for an explicitly chosen mode.
    pub fn with_mode(mode: Mode, socket: Option<&str>, session: &str) -> Self {
        let backend: Box<dyn Backend> = match mode {
            Mode::Attached => {
                let mut tmux = SystemTmux::default();
                if let Some(path) = socket {
                    tmux = tmux.with_socket_path(path);
                }
                Box::new(AttachedBackend::new(tmux))
            }
            Mode::Detached => Box::new(DetachedBackend::new(session)),
        };
        tracing::debug!("controller running in {mode} mode");
        Self {
            backend,
            mode,
            session: session.to_string(),
        }
    }

    /// Facade over a caller-supplied backend, for embedders that bring
    /// their own runner.
    pub fn with_backend(backend: Box<dyn Backend>, mode: Mode, session: &str) -> Self {
        Self {
            backend,
            mode,
            session: session.to_string(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Session name a detached controller manages.
    pub fn session(&self) -> &str {
        &self.session
    }

    fn parse_target(raw: Option<&str>) -> Result<Option<TargetSpec>, Error> {
        raw.map(TargetSpec::from_str).transpose().map_err(Error::from)
    }

    /// Create a pane and remember it as the default target.
    pub fn launch(&mut self, opts: &CreateOpts) -> Result<String, Error> {
        self.backend.create(opts)
    }

    /// Dispatch text to a pane. `target = None` addresses the last
    /// launched or selected pane.
    pub fn send(
        &self,
        target: Option<&str>,
        text: &str,
        activation: Activation,
    ) -> Result<(), Error> {
        let spec = Self::parse_target(target)?;
        self.backend.send(spec.as_ref(), text, activation)
    }

    /// Snapshot a pane's rendered text.
    pub fn capture(&self, target: Option<&str>, lines: Option<u32>) -> Result<String, Error> {
        let spec = Self::parse_target(target)?;
        self.backend.capture(spec.as_ref(), lines)
    }

    /// Enumerate the current container's panes.
    pub fn list_targets(&self) -> Result<Vec<Target>, Error> {
        self.backend.list_targets()
    }

    /// Send a single `C-c`.
    pub fn interrupt(&self, target: Option<&str>) -> Result<(), Error> {
        let spec = Self::parse_target(target)?;
        self.backend.interrupt(spec.as_ref())
    }

    /// Send a single `Escape`.
    pub fn escape(&self, target: Option<&str>) -> Result<(), Error> {
        let spec = Self::parse_target(target)?;
        self.backend.escape(spec.as_ref())
    }

    /// Clear a pane's screen.
    pub fn clear(&self, target: Option<&str>) -> Result<(), Error> {
        let spec = Self::parse_target(target)?;
        self.backend.clear(spec.as_ref())
    }

    /// Destroy a pane; the pane hosting this process is refused.
    pub fn kill(&mut self, target: Option<&str>) -> Result<String, Error> {
        let spec = Self::parse_target(target)?;
        self.backend.destroy(spec.as_ref())
    }

    /// Make a pane the default target for later calls.
    pub fn select(&mut self, target: &str) -> Result<String, Error> {
        let spec = TargetSpec::from_str(target)?;
        self.backend.select(&spec)
    }

    /// Move a pane edge by `amount` cells.
    pub fn resize(
        &self,
        target: Option<&str>,
        direction: ResizeDirection,
        amount: u32,
    ) -> Result<(), Error> {
        let spec = Self::parse_target(target)?;
        self.backend.resize(spec.as_ref(), direction, amount)
    }

    /// Give a pane input focus.
    pub fn focus(&self, target: Option<&str>) -> Result<(), Error> {
        let spec = Self::parse_target(target)?;
        self.backend.focus(spec.as_ref())
    }

    /// Block until a pane goes quiet; `Ok(false)` on deadline expiry.
    pub fn wait_idle(&self, target: Option<&str>, opts: &IdleWaitOpts) -> Result<bool, Error> {
        let spec = Self::parse_target(target)?;
        self.backend.wait_for_idle(spec.as_ref(), opts)
    }

    /// Block until `pattern` matches a pane's recent output; `Ok(false)`
    /// on deadline expiry.
    pub fn wait_for_pattern(
        &self,
        target: Option<&str>,
        pattern: &str,
        opts: &PatternWaitOpts,
    ) -> Result<bool, Error> {
        let spec = Self::parse_target(target)?;
        let compiled = Regex::new(pattern)?;
        self.backend.wait_for_pattern(spec.as_ref(), &compiled, opts)
    }

    /// Attach the controlled session to a terminal.
    pub fn attach(&self) -> Result<String, Error> {
        self.backend.attach()
    }

    /// Tear down whatever the backend set up.
    pub fn cleanup(&self) -> Result<String, Error> {
        self.backend.cleanup()
    }

    /// Describe the controlled session's windows.
    pub fn list_windows(&self) -> Result<String, Error> {
        self.backend.list_windows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_follows_tmux_presence() {
        assert_eq!(Mode::for_env(true), Mode::Attached);
        assert_eq!(Mode::for_env(false), Mode::Detached);
    }

    #[test]
    fn mode_display_names() {
        assert_eq!(Mode::Attached.to_string(), "attached");
        assert_eq!(Mode::Detached.to_string(), "detached");
    }

    #[test]
    fn detached_controller_reports_mode_and_session() {
        let controller = Controller::with_mode(Mode::Detached, None, "robot");
        assert_eq!(controller.mode(), Mode::Detached);
        assert_eq!(controller.session(), "robot");
    }

    #[test]
    fn blank_target_string_rejected_before_dispatch() {
        // The detached backend would answer UnsupportedMode; a parse
        // failure must win because translation happens first.
        let controller = Controller::with_mode(Mode::Detached, None, "robot");
        let err = controller
            .send(Some("   "), "hi", Activation::None)
            .expect_err("blank target");
        assert!(matches!(err, Error::InvalidTarget(_)));
    }

    #[test]
    fn parsed_target_reaches_the_backend() {
        let controller = Controller::with_mode(Mode::Detached, None, "robot");
        let err = controller
            .send(Some("3"), "hi", Activation::None)
            .expect_err("detached");
        assert!(matches!(err, Error::UnsupportedMode("send")));
    }

    #[test]
    fn bad_pattern_rejected_before_dispatch() {
        let controller = Controller::with_mode(Mode::Detached, None, "robot");
        let err = controller
            .wait_for_pattern(None, "(unclosed", &PatternWaitOpts::default())
            .expect_err("bad pattern");
        assert!(matches!(err, Error::InvalidPattern(_)));
    }
}
