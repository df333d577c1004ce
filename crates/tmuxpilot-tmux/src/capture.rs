//! Point-in-time pane capture.

use crate::error::TmuxError;
use crate::executor::TmuxRunner;

/// Snapshot the rendered text of a pane.
///
/// `lines = Some(n)` reaches `n` lines back into scrollback (`-S -n`);
/// `None` captures the visible screen only. The hosted program may still
/// be mid-write; this is a plain read with no settling. A nonzero exit
/// surfaces, so capturing a destroyed pane fails instead of echoing stale
/// text.
pub fn capture_pane(
    runner: &impl TmuxRunner,
    pane_id: &str,
    lines: Option<u32>,
) -> Result<String, TmuxError> {
    let start_line;
    let mut args = vec!["capture-pane", "-p"];
    if let Some(n) = lines {
        start_line = format!("-{n}");
        args.push("-S");
        args.push(&start_line);
    }
    args.push("-t");
    args.push(pane_id);
    let output = runner.run(&args)?.require_success()?;
    Ok(output.trim().to_string())
}
