//! Single-verb pane mutations: split, kill, keystrokes, resize, focus.

use crate::error::TmuxError;
use crate::executor::TmuxRunner;

/// Which way `split-window` divides the current pane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SplitDirection {
    /// New pane to the right (tmux `-h`).
    #[default]
    Right,
    /// New pane underneath (tmux `-v`).
    Below,
}

impl SplitDirection {
    fn flag(self) -> &'static str {
        match self {
            SplitDirection::Right => "-h",
            SplitDirection::Below => "-v",
        }
    }
}

/// Edge moved by `resize-pane`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeDirection {
    Up,
    Down,
    Left,
    Right,
}

impl ResizeDirection {
    fn flag(self) -> &'static str {
        match self {
            ResizeDirection::Up => "-U",
            ResizeDirection::Down => "-D",
            ResizeDirection::Left => "-L",
            ResizeDirection::Right => "-R",
        }
    }
}

/// Keystrokes with a fixed tmux key name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedKey {
    /// Process interrupt (`C-c`).
    Interrupt,
    /// The escape key.
    Escape,
    /// Screen clear (`C-l`).
    Clear,
    /// Carriage return.
    Enter,
}

impl NamedKey {
    pub fn key_name(self) -> &'static str {
        match self {
            NamedKey::Interrupt => "C-c",
            NamedKey::Escape => "Escape",
            NamedKey::Clear => "C-l",
            NamedKey::Enter => "Enter",
        }
    }
}

/// Split the current pane, returning the new pane's id.
///
/// The new pane runs `command` when given, otherwise the default shell.
/// `size_percent` is the new pane's share of the parent.
pub fn split_pane(
    runner: &impl TmuxRunner,
    direction: SplitDirection,
    size_percent: Option<u8>,
    command: Option<&str>,
) -> Result<String, TmuxError> {
    let size;
    let mut args = vec!["split-window", direction.flag()];
    if let Some(percent) = size_percent {
        size = percent.to_string();
        args.push("-p");
        args.push(&size);
    }
    args.push("-P");
    args.push("-F");
    args.push("#{pane_id}");
    if let Some(command) = command {
        args.push(command);
    }
    let stdout = runner.run(&args)?.require_success()?;
    Ok(stdout.trim().to_string())
}

/// Destroy a pane.
pub fn kill_pane(runner: &impl TmuxRunner, pane_id: &str) -> Result<(), TmuxError> {
    runner.run(&["kill-pane", "-t", pane_id])?.require_success()?;
    Ok(())
}

/// Send literal text, optionally followed by a key name in the same call.
///
/// The `--` terminator keeps text starting with `-` from being read as a
/// flag. Text is deliberately not sent with `-l`: the trailing key name
/// must stay a key name, not literal characters.
pub fn send_text(
    runner: &impl TmuxRunner,
    pane_id: &str,
    text: &str,
    trailing_key: Option<NamedKey>,
) -> Result<(), TmuxError> {
    let mut args = vec!["send-keys", "-t", pane_id, "--", text];
    if let Some(key) = trailing_key {
        args.push(key.key_name());
    }
    runner.run(&args)?.require_success()?;
    Ok(())
}

/// Send one named key, nothing else.
pub fn send_key(runner: &impl TmuxRunner, pane_id: &str, key: NamedKey) -> Result<(), TmuxError> {
    runner
        .run(&["send-keys", "-t", pane_id, key.key_name()])?
        .require_success()?;
    Ok(())
}

/// Move a pane edge by `amount` cells.
pub fn resize_pane(
    runner: &impl TmuxRunner,
    pane_id: &str,
    direction: ResizeDirection,
    amount: u32,
) -> Result<(), TmuxError> {
    let amount = amount.to_string();
    runner
        .run(&["resize-pane", "-t", pane_id, direction.flag(), &amount])?
        .require_success()?;
    Ok(())
}

/// Give a pane input focus.
pub fn focus_pane(runner: &impl TmuxRunner, pane_id: &str) -> Result<(), TmuxError> {
    runner
        .run(&["select-pane", "-t", pane_id])?
        .require_success()?;
    Ok(())
}
