//! Current-context queries: which pane/window/session hosts this process.

use crate::error::TmuxError;
use crate::executor::TmuxRunner;

/// Pane id hosting the calling process.
///
/// Meaningful only when the caller runs inside tmux; outside, the query
/// fails or answers for some other client, so callers gate on mode first.
pub fn current_pane(runner: &impl TmuxRunner) -> Result<String, TmuxError> {
    display_message(runner, "#{pane_id}")
}

/// Window id of the caller's window.
pub fn current_window(runner: &impl TmuxRunner) -> Result<String, TmuxError> {
    display_message(runner, "#{window_id}")
}

/// Session name of the caller's session.
pub fn current_session(runner: &impl TmuxRunner) -> Result<String, TmuxError> {
    display_message(runner, "#{session_name}")
}

fn display_message(runner: &impl TmuxRunner, format: &str) -> Result<String, TmuxError> {
    let out = runner
        .run(&["display-message", "-p", format])?
        .require_success()?;
    Ok(out.trim().to_string())
}
