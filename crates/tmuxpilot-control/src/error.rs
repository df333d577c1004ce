//! Controller error type.

use thiserror::Error;
use tmuxpilot_core::ParseTargetError;
use tmuxpilot_tmux::TmuxError;

/// Errors surfaced by controller operations.
///
/// The first three abort the requested operation with no side effects;
/// none of them is silently defaulted, retried, or overridable.
#[derive(Debug, Error)]
pub enum Error {
    /// No explicit target was given and nothing has been launched or
    /// selected yet.
    #[error("no pane selected; launch one first or pass an explicit target")]
    NoTargetSpecified,

    /// An index identifier matched nothing in the current enumeration.
    #[error("no pane with index {0}")]
    NotFound(u32),

    /// Refused to destroy the pane hosting this process.
    #[error("refusing to kill the pane hosting this process ({0})")]
    SelfTerminationRejected(String),

    /// The active backend does not implement this operation.
    #[error("{0} is unavailable outside tmux; run inside a tmux session")]
    UnsupportedMode(&'static str),

    /// A caller-supplied target string could not be parsed.
    #[error("invalid target: {0}")]
    InvalidTarget(#[from] ParseTargetError),

    /// A caller-supplied pattern could not be compiled.
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// The underlying tmux invocation failed.
    #[error(transparent)]
    Tmux(#[from] TmuxError),
}
