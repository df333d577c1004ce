//! Error type for the tmux IO boundary.

use thiserror::Error;

/// Failures crossing the tmux subprocess boundary.
#[derive(Debug, Error)]
pub enum TmuxError {
    /// tmux exited nonzero on a call site that requires success.
    #[error("tmux command failed (exit {status}): {stderr}")]
    CommandFailed { status: i32, stderr: String },

    /// An enumeration line did not match the requested format.
    #[error("failed to parse list-panes line {line_num}: {detail}")]
    Parse { line_num: usize, detail: String },

    /// The tmux client could not be spawned at all.
    #[error("tmux io error: {0}")]
    Io(#[from] std::io::Error),
}
