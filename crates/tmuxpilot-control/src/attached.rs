//! Attached backend: pane control inside the caller's own tmux session.

use std::thread;
use std::time::Instant;

use regex::Regex;
use tmuxpilot_core::{Fingerprint, IdleState, Target, TargetSpec, find_by_index, observe};
use tmuxpilot_tmux::{
    NamedKey, ResizeDirection, TmuxRunner, capture_pane, current_pane, current_session,
    focus_pane, kill_pane, list_panes, resize_pane, send_key, send_text, split_pane,
};

use crate::backend::{Activation, Backend, CreateOpts, IdleWaitOpts, PatternWaitOpts};
use crate::error::Error;

/// Scrollback lines searched by a pattern wait.
const PATTERN_WINDOW_LINES: u32 = 50;

/// Pane controller for the tmux session this process already runs in.
///
/// Holds the runner and at most one piece of state, the last-selected
/// pane handle; everything else lives in the tmux server. Operations
/// address panes of the current window.
pub struct AttachedBackend<R: TmuxRunner> {
    runner: R,
    last_selected: Option<String>,
}

impl<R: TmuxRunner> AttachedBackend<R> {
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            last_selected: None,
        }
    }

    /// Turn a caller identifier into a pane handle.
    ///
    /// `None` falls back to the last-selected pane. An index is matched
    /// against a fresh enumeration on every call, so an index that
    /// shifted under us never resolves through a stale snapshot. A
    /// handle passes through with no existence check; a stale one fails
    /// at first use instead.
    fn resolve(&self, spec: Option<&TargetSpec>) -> Result<String, Error> {
        match spec {
            None => self.last_selected.clone().ok_or(Error::NoTargetSpecified),
            Some(TargetSpec::Index(index)) => {
                let targets = list_panes(&self.runner, None)?;
                find_by_index(&targets, *index)
                    .map(|target| target.handle.clone())
                    .ok_or(Error::NotFound(*index))
            }
            Some(TargetSpec::Handle(handle)) => Ok(handle.clone()),
        }
    }

    /// Capture for a polling tick. A failing capture degrades to empty
    /// text; the loop itself is the retry.
    fn capture_or_empty(&self, handle: &str, lines: Option<u32>) -> String {
        match capture_pane(&self.runner, handle, lines) {
            Ok(text) => text,
            Err(err) => {
                tracing::debug!("capture failed for {handle}: {err}");
                String::new()
            }
        }
    }
}

impl<R: TmuxRunner> Backend for AttachedBackend<R> {
    fn create(&mut self, opts: &CreateOpts) -> Result<String, Error> {
        let handle = split_pane(
            &self.runner,
            opts.direction,
            opts.size_percent,
            opts.command.as_deref(),
        )?;
        tracing::debug!("created pane {handle}");
        self.last_selected = Some(handle.clone());
        Ok(handle)
    }

    fn destroy(&mut self, spec: Option<&TargetSpec>) -> Result<String, Error> {
        let doomed = self.resolve(spec)?;
        // Resolve which pane hosts this process; a failed query refuses
        // the destroy instead of proceeding unguarded.
        let own = current_pane(&self.runner)?;
        if doomed.trim() == own.trim() {
            return Err(Error::SelfTerminationRejected(doomed));
        }
        kill_pane(&self.runner, &doomed)?;
        tracing::debug!("killed pane {doomed}");
        if self.last_selected.as_deref() == Some(doomed.as_str()) {
            self.last_selected = None;
        }
        Ok(doomed)
    }

    fn select(&mut self, spec: &TargetSpec) -> Result<String, Error> {
        let handle = self.resolve(Some(spec))?;
        self.last_selected = Some(handle.clone());
        Ok(handle)
    }

    fn resize(
        &self,
        spec: Option<&TargetSpec>,
        direction: ResizeDirection,
        amount: u32,
    ) -> Result<(), Error> {
        let handle = self.resolve(spec)?;
        resize_pane(&self.runner, &handle, direction, amount)?;
        Ok(())
    }

    fn focus(&self, spec: Option<&TargetSpec>) -> Result<(), Error> {
        let handle = self.resolve(spec)?;
        focus_pane(&self.runner, &handle)?;
        Ok(())
    }

    fn send(
        &self,
        spec: Option<&TargetSpec>,
        text: &str,
        activation: Activation,
    ) -> Result<(), Error> {
        let handle = self.resolve(spec)?;
        match activation {
            Activation::None => send_text(&self.runner, &handle, text, None)?,
            Activation::Immediate => {
                send_text(&self.runner, &handle, text, Some(NamedKey::Enter))?;
            }
            Activation::Delayed(pause) => {
                send_text(&self.runner, &handle, text, None)?;
                thread::sleep(pause);
                send_key(&self.runner, &handle, NamedKey::Enter)?;
            }
        }
        Ok(())
    }

    fn interrupt(&self, spec: Option<&TargetSpec>) -> Result<(), Error> {
        let handle = self.resolve(spec)?;
        send_key(&self.runner, &handle, NamedKey::Interrupt)?;
        Ok(())
    }

    fn escape(&self, spec: Option<&TargetSpec>) -> Result<(), Error> {
        let handle = self.resolve(spec)?;
        send_key(&self.runner, &handle, NamedKey::Escape)?;
        Ok(())
    }

    fn clear(&self, spec: Option<&TargetSpec>) -> Result<(), Error> {
        let handle = self.resolve(spec)?;
        send_key(&self.runner, &handle, NamedKey::Clear)?;
        Ok(())
    }

    fn capture(&self, spec: Option<&TargetSpec>, lines: Option<u32>) -> Result<String, Error> {
        let handle = self.resolve(spec)?;
        Ok(capture_pane(&self.runner, &handle, lines)?)
    }

    fn wait_for_idle(
        &self,
        spec: Option<&TargetSpec>,
        opts: &IdleWaitOpts,
    ) -> Result<bool, Error> {
        let handle = self.resolve(spec)?;
        let start = Instant::now();
        let mut state = IdleState::new(start);
        loop {
            // Compared via elapsed(); `Instant::now() + timeout` can overflow.
            if let Some(timeout) = opts.timeout
                && start.elapsed() >= timeout
            {
                tracing::debug!("idle wait for {handle} timed out");
                return Ok(false);
            }
            let text = self.capture_or_empty(&handle, None);
            let now = Instant::now();
            let (next, output) = observe(&state, Fingerprint::of(&text), now, opts.idle_time);
            state = next;
            if output.idle {
                return Ok(true);
            }
            thread::sleep(opts.check_interval);
        }
    }

    fn wait_for_pattern(
        &self,
        spec: Option<&TargetSpec>,
        pattern: &Regex,
        opts: &PatternWaitOpts,
    ) -> Result<bool, Error> {
        let handle = self.resolve(spec)?;
        let start = Instant::now();
        loop {
            if start.elapsed() >= opts.timeout {
                tracing::debug!("pattern wait for {handle} timed out");
                return Ok(false);
            }
            let text = self.capture_or_empty(&handle, Some(PATTERN_WINDOW_LINES));
            if pattern.is_match(&text) {
                return Ok(true);
            }
            thread::sleep(opts.check_interval);
        }
    }

    fn list_targets(&self) -> Result<Vec<Target>, Error> {
        match list_panes(&self.runner, None) {
            Ok(targets) => Ok(targets),
            Err(err) => {
                tracing::debug!("enumeration failed, degrading to empty: {err}");
                Ok(Vec::new())
            }
        }
    }

    fn attach(&self) -> Result<String, Error> {
        let session = current_session(&self.runner)?;
        Ok(format!("already attached to session {session}"))
    }

    fn cleanup(&self) -> Result<String, Error> {
        Ok("nothing to clean up; panes live in the caller's own session".to_string())
    }

    fn list_windows(&self) -> Result<String, Error> {
        Ok("window listing applies to detached sessions; use list_panes here".to_string())
    }
}
