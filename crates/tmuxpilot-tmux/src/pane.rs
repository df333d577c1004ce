//! Target enumeration: list-panes format string and parser.

use tmuxpilot_core::Target;

use crate::error::TmuxError;
use crate::executor::TmuxRunner;

/// Tab-delimited format string for `tmux list-panes -F`.
pub const LIST_TARGETS_FORMAT: &str =
    "#{pane_id}\t#{pane_index}\t#{pane_title}\t#{pane_active}\t#{pane_width}x#{pane_height}";

/// Enumerate the panes of `container` (the current window when `None`).
///
/// A nonzero exit degrades to an empty enumeration: the container may be
/// gone or the server unreachable, and "nothing listed" is the recoverable
/// shape of both. Spawn-level failures still surface.
pub fn list_panes(
    runner: &impl TmuxRunner,
    container: Option<&str>,
) -> Result<Vec<Target>, TmuxError> {
    let mut args = vec!["list-panes", "-F", LIST_TARGETS_FORMAT];
    if let Some(container) = container {
        args.push("-t");
        args.push(container);
    }
    let output = runner.run(&args)?;
    if !output.success() {
        tracing::debug!(
            status = output.status,
            stderr = output.stderr.trim(),
            "list-panes failed, degrading to empty enumeration"
        );
        return Ok(Vec::new());
    }
    parse_list_output(&output.stdout)
}

/// Parse the raw output of `tmux list-panes -F <LIST_TARGETS_FORMAT>`.
pub fn parse_list_output(output: &str) -> Result<Vec<Target>, TmuxError> {
    let mut targets = Vec::new();
    for (idx, line) in output.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        targets.push(parse_line(trimmed, idx + 1)?);
    }
    Ok(targets)
}

fn parse_line(line: &str, line_num: usize) -> Result<Target, TmuxError> {
    let parts: Vec<&str> = line.split('\t').collect();
    if parts.len() != 5 {
        return Err(TmuxError::Parse {
            line_num,
            detail: format!("expected 5 tab-separated fields, got {}", parts.len()),
        });
    }

    let index = parts[1].parse::<u32>().map_err(|_| TmuxError::Parse {
        line_num,
        detail: format!("bad pane index {:?}", parts[1]),
    })?;
    let (width, height) = parse_dimensions(parts[4]);

    Ok(Target {
        handle: parts[0].to_string(),
        index,
        title: parts[2].to_string(),
        active: parse_bool(parts[3]),
        width,
        height,
    })
}

/// `WxH` cell dimensions; anything malformed falls back to 80x24.
fn parse_dimensions(s: &str) -> (u16, u16) {
    let Some((w, h)) = s.split_once('x') else {
        return (80, 24);
    };
    (w.trim().parse().unwrap_or(80), h.trim().parse().unwrap_or(24))
}

fn parse_bool(s: &str) -> bool {
    matches!(s.trim(), "1" | "true")
}
