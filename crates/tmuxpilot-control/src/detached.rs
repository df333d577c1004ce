//! Detached backend: interface reservation for outside-tmux control.

use regex::Regex;
use tmuxpilot_core::{Target, TargetSpec};
use tmuxpilot_tmux::ResizeDirection;

use crate::backend::{Activation, Backend, CreateOpts, IdleWaitOpts, PatternWaitOpts};
use crate::error::Error;

/// Stand-in for controlling the windows of a separately managed session
/// from outside tmux. Window addressing and cross-invocation persistence
/// for that mode are not settled, so every operation fails with
/// [`Error::UnsupportedMode`] up front; nothing executes partially.
pub struct DetachedBackend {
    session: String,
}

impl DetachedBackend {
    pub fn new(session: impl Into<String>) -> Self {
        Self {
            session: session.into(),
        }
    }

    /// Session this backend will control once implemented.
    pub fn session(&self) -> &str {
        &self.session
    }
}

impl Backend for DetachedBackend {
    fn create(&mut self, _opts: &CreateOpts) -> Result<String, Error> {
        Err(Error::UnsupportedMode("launch"))
    }

    fn destroy(&mut self, _spec: Option<&TargetSpec>) -> Result<String, Error> {
        Err(Error::UnsupportedMode("kill"))
    }

    fn select(&mut self, _spec: &TargetSpec) -> Result<String, Error> {
        Err(Error::UnsupportedMode("select"))
    }

    fn resize(
        &self,
        _spec: Option<&TargetSpec>,
        _direction: ResizeDirection,
        _amount: u32,
    ) -> Result<(), Error> {
        Err(Error::UnsupportedMode("resize"))
    }

    fn focus(&self, _spec: Option<&TargetSpec>) -> Result<(), Error> {
        Err(Error::UnsupportedMode("focus"))
    }

    fn send(
        &self,
        _spec: Option<&TargetSpec>,
        _text: &str,
        _activation: Activation,
    ) -> Result<(), Error> {
        Err(Error::UnsupportedMode("send"))
    }

    fn interrupt(&self, _spec: Option<&TargetSpec>) -> Result<(), Error> {
        Err(Error::UnsupportedMode("interrupt"))
    }

    fn escape(&self, _spec: Option<&TargetSpec>) -> Result<(), Error> {
        Err(Error::UnsupportedMode("escape"))
    }

    fn clear(&self, _spec: Option<&TargetSpec>) -> Result<(), Error> {
        Err(Error::UnsupportedMode("clear"))
    }

    fn capture(&self, _spec: Option<&TargetSpec>, _lines: Option<u32>) -> Result<String, Error> {
        Err(Error::UnsupportedMode("capture"))
    }

    fn wait_for_idle(
        &self,
        _spec: Option<&TargetSpec>,
        _opts: &IdleWaitOpts,
    ) -> Result<bool, Error> {
        Err(Error::UnsupportedMode("wait_idle"))
    }

    fn wait_for_pattern(
        &self,
        _spec: Option<&TargetSpec>,
        _pattern: &Regex,
        _opts: &PatternWaitOpts,
    ) -> Result<bool, Error> {
        Err(Error::UnsupportedMode("wait_for_pattern"))
    }

    fn list_targets(&self) -> Result<Vec<Target>, Error> {
        Err(Error::UnsupportedMode("list_panes"))
    }

    fn attach(&self) -> Result<String, Error> {
        Err(Error::UnsupportedMode("attach"))
    }

    fn cleanup(&self) -> Result<String, Error> {
        Err(Error::UnsupportedMode("cleanup"))
    }

    fn list_windows(&self) -> Result<String, Error> {
        Err(Error::UnsupportedMode("list_windows"))
    }
}
