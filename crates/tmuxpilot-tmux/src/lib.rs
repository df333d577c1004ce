//! tmuxpilot-tmux: tmux IO boundary.
//! Subprocess execution behind an injectable runner trait, pane
//! enumeration and capture, and single-verb pane mutations. No policy;
//! what a failure means is decided by the controller in tmuxpilot-control.

pub mod capture;
pub mod context;
pub mod error;
pub mod executor;
pub mod ops;
pub mod pane;

pub use capture::capture_pane;
pub use context::{current_pane, current_session, current_window};
pub use error::TmuxError;
pub use executor::{SystemTmux, TmuxOutput, TmuxRunner};
pub use ops::{
    NamedKey, ResizeDirection, SplitDirection, focus_pane, kill_pane, resize_pane, send_key,
    send_text, split_pane,
};
pub use pane::{LIST_TARGETS_FORMAT, list_panes, parse_list_output};
