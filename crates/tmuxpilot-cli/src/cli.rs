//! Command-line interface definition using clap.

use clap::{Parser, Subcommand};
use tmuxpilot_control::{EnterDelay, SplitDirection};

/// Drive interactive programs hosted in tmux panes.
#[derive(Parser)]
#[command(name = "tmuxpilot", about = "Drive interactive programs hosted in tmux panes")]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// tmux server socket path (defaults to the ambient server)
    #[arg(long, env = "TMUXPILOT_SOCKET", global = true)]
    pub socket: Option<String>,

    /// Session name used for detached control
    #[arg(long, env = "TMUXPILOT_SESSION", default_value = "tmuxpilot", global = true)]
    pub session: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Launch a program into a new pane and print its handle
    Launch(LaunchOpts),

    /// Type text into a pane
    Send(SendOpts),

    /// Print a pane's rendered text
    Capture(CaptureOpts),

    /// Print the current window's panes as JSON
    #[command(name = "list_panes")]
    ListPanes,

    /// Send Ctrl-C to a pane
    Interrupt(TargetOpts),

    /// Send Escape to a pane
    Escape(TargetOpts),

    /// Destroy a pane
    Kill(TargetOpts),

    /// Block until a pane's output stops changing
    #[command(name = "wait_idle")]
    WaitIdle(WaitIdleOpts),

    /// Attach the controlled session to this terminal
    Attach,

    /// Tear down the controlled session
    Cleanup,

    /// List the controlled session's windows
    #[command(name = "list_windows")]
    ListWindows,

    /// Print the full usage document
    Help,
}

/// Options for `launch`.
#[derive(clap::Args)]
pub struct LaunchOpts {
    /// Program to run; an interactive shell when omitted
    pub command: Option<String>,

    /// Where to split the current pane
    #[arg(long, value_enum, default_value_t = SplitArg::Right)]
    pub split: SplitArg,

    /// New pane's share of the split, in percent
    #[arg(long)]
    pub size: Option<u8>,

    /// Window name for the new pane (detached sessions only)
    #[arg(long)]
    pub name: Option<String>,
}

/// Options for `send`.
#[derive(clap::Args)]
pub struct SendOpts {
    /// Text to type into the pane
    pub text: String,

    /// Target pane, as an index (0, 1, ...) or a handle (%3)
    #[arg(long)]
    pub pane: Option<String>,

    /// Press Enter after the text
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub enter: bool,

    /// Pause between text and Enter: `true` (one second), `false`, or seconds
    #[arg(long, default_value = "true")]
    pub delay_enter: EnterDelay,
}

/// Options for `capture`.
#[derive(clap::Args)]
pub struct CaptureOpts {
    /// Target pane, as an index (0, 1, ...) or a handle (%3)
    #[arg(long)]
    pub pane: Option<String>,

    /// Reach this many lines back into scrollback
    #[arg(long)]
    pub lines: Option<u32>,
}

/// Options for commands that only name a pane.
#[derive(clap::Args)]
pub struct TargetOpts {
    /// Target pane, as an index (0, 1, ...) or a handle (%3)
    #[arg(long)]
    pub pane: Option<String>,
}

/// Options for `wait_idle`.
#[derive(clap::Args)]
pub struct WaitIdleOpts {
    /// Target pane, as an index (0, 1, ...) or a handle (%3)
    #[arg(long)]
    pub pane: Option<String>,

    /// Quiet period in seconds that counts as idle
    #[arg(long)]
    pub idle_time: Option<f64>,

    /// Seconds between capture checks
    #[arg(long)]
    pub check_interval: Option<f64>,

    /// Give up after this many seconds
    #[arg(long)]
    pub timeout: Option<f64>,
}

/// Split orientation accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SplitArg {
    /// New pane to the right
    Right,
    /// New pane underneath
    Below,
}

impl From<SplitArg> for SplitDirection {
    fn from(arg: SplitArg) -> Self {
        match arg {
            SplitArg::Right => SplitDirection::Right,
            SplitArg::Below => SplitDirection::Below,
        }
    }
}
