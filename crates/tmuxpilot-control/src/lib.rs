//! tmuxpilot-control: the controller itself.
//! The backend capability trait, the attached (in-session)
//! implementation, the detached interface stub, and the mode-selecting
//! facade. Holds the only mutable controller state (the last-selected
//! pane) and the only blocking wait loops.

pub mod attached;
pub mod backend;
pub mod controller;
pub mod detached;
pub mod error;

pub use attached::AttachedBackend;
pub use backend::{
    Activation, Backend, CreateOpts, DEFAULT_ENTER_DELAY, DEFAULT_PATTERN_TIMEOUT, EnterDelay,
    IdleWaitOpts, ParseEnterDelayError, PatternWaitOpts,
};
pub use controller::{Controller, Mode};
pub use detached::DetachedBackend;
pub use error::Error;

// Vocabulary types that appear in this crate's public signatures.
pub use tmuxpilot_core::{Target, TargetSpec};
pub use tmuxpilot_tmux::{ResizeDirection, SplitDirection};
