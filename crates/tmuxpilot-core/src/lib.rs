//! tmuxpilot-core: pure controller logic.
//! Target records, caller-supplied identifier parsing, and the
//! change-based idle detection step. No IO and no sleeping; the tmux
//! boundary lives in tmuxpilot-tmux.

pub mod idle;
pub mod target;

pub use idle::{
    DEFAULT_CHECK_INTERVAL, DEFAULT_IDLE_TIME, Fingerprint, IdleOutput, IdleState, observe,
};
pub use target::{ParseTargetError, Target, TargetSpec, find_by_index};
