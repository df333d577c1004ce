//! The `help` subcommand's usage document.
//!
//! Rendered as a plain string so the header can reflect the active
//! mode without touching stdout in tests.

use tmuxpilot_control::Mode;

const USAGE: &str = "\
usage: tmuxpilot [--socket PATH] [--session NAME] <command>

commands:
  launch [COMMAND] [--split right|below] [--size PERCENT] [--name NAME]
      create a pane, optionally running COMMAND, and print its handle
  send TEXT [--pane TARGET] [--enter BOOL] [--delay-enter SPEC]
      type TEXT into a pane; by default Enter follows after a one-second
      pause so a busy program can finish reading the text first
      (SPEC: `true` for the one-second pause, `false` for a same-call
      Enter, or a pause in seconds; --enter false sends no Enter at all)
  capture [--pane TARGET] [--lines N]
      print a pane's text, reaching N lines back into scrollback
  list_panes
      print the current window's panes as JSON
  interrupt [--pane TARGET]
      send Ctrl-C
  escape [--pane TARGET]
      send Escape
  kill [--pane TARGET]
      destroy a pane (never the one hosting this process)
  wait_idle [--pane TARGET] [--idle-time SECS] [--check-interval SECS]
            [--timeout SECS]
      block until the pane's output stops changing; exits 1 on timeout
  attach / cleanup / list_windows
      session-scope operations for detached control
  help
      print this document

targets:
  --pane takes a pane index (0, 1, ...) or a pane handle (%3). Without
  --pane, a command addresses the pane most recently launched or
  selected in the same process; separate invocations should pass
  --pane explicitly.

environment:
  TMUXPILOT_SOCKET    tmux server socket path
  TMUXPILOT_SESSION   session name for detached control
  TMUXPILOT_LOG       log filter (falls back to RUST_LOG, then `warn`)";

/// Render the usage document with a header naming the active mode.
pub fn render(mode: Mode, session: &str) -> String {
    let mut out = String::new();
    out.push_str("tmuxpilot: drive interactive programs hosted in tmux panes\n");
    match mode {
        Mode::Attached => {
            out.push_str("mode: attached (controlling panes of the current window)\n");
        }
        Mode::Detached => {
            out.push_str(&format!(
                "mode: detached (session {session}); commands are unavailable until \
                 detached control lands\n"
            ));
        }
    }
    out.push('\n');
    out.push_str(USAGE);
    out
}
