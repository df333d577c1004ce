//! TmuxRunner trait and SystemTmux (sync subprocess wrapper).

use crate::error::TmuxError;

/// Outcome of one tmux client invocation.
///
/// A nonzero exit is data, not an error: whether it degrades or aborts is
/// decided per call site, so the raw status and stderr travel with the
/// stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TmuxOutput {
    pub stdout: String,
    pub stderr: String,
    pub status: i32,
}

impl TmuxOutput {
    /// Successful invocation with the given stdout.
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
            status: 0,
        }
    }

    /// Failed invocation with the given exit status and stderr.
    pub fn failed(status: i32, stderr: impl Into<String>) -> Self {
        Self {
            stdout: String::new(),
            stderr: stderr.into(),
            status,
        }
    }

    pub fn success(&self) -> bool {
        self.status == 0
    }

    /// Yield stdout, converting a nonzero exit into
    /// [`TmuxError::CommandFailed`].
    pub fn require_success(self) -> Result<String, TmuxError> {
        if self.success() {
            Ok(self.stdout)
        } else {
            Err(TmuxError::CommandFailed {
                status: self.status,
                stderr: self.stderr.trim().to_string(),
            })
        }
    }
}

/// Trait for invoking the tmux client. Enables mock injection for testing.
pub trait TmuxRunner: Send + Sync {
    /// Run one tmux command. `Err` is reserved for spawn-level failures
    /// (binary missing, OS error); a nonzero tmux exit comes back as a
    /// normal [`TmuxOutput`].
    fn run(&self, args: &[&str]) -> Result<TmuxOutput, TmuxError>;
}

impl<T: TmuxRunner + ?Sized> TmuxRunner for &T {
    fn run(&self, args: &[&str]) -> Result<TmuxOutput, TmuxError> {
        (**self).run(args)
    }
}

/// Real tmux client using `std::process::Command`.
pub struct SystemTmux {
    tmux_bin: String,
    socket_path: Option<String>,
    socket_name: Option<String>,
}

impl SystemTmux {
    pub fn new(tmux_bin: impl Into<String>) -> Self {
        Self {
            tmux_bin: tmux_bin.into(),
            socket_path: None,
            socket_name: None,
        }
    }

    /// Address a tmux server by socket file (`tmux -S`).
    #[must_use]
    pub fn with_socket_path(mut self, path: impl Into<String>) -> Self {
        self.socket_path = Some(path.into());
        self
    }

    /// Address a tmux server by socket name (`tmux -L`).
    #[must_use]
    pub fn with_socket_name(mut self, name: impl Into<String>) -> Self {
        self.socket_name = Some(name.into());
        self
    }
}

impl Default for SystemTmux {
    fn default() -> Self {
        Self::new("tmux")
    }
}

impl TmuxRunner for SystemTmux {
    fn run(&self, args: &[&str]) -> Result<TmuxOutput, TmuxError> {
        let mut cmd = std::process::Command::new(&self.tmux_bin);
        // Socket path takes precedence over socket name
        if let Some(ref path) = self.socket_path {
            cmd.args(["-S", path]);
        } else if let Some(ref name) = self.socket_name {
            cmd.args(["-L", name]);
        }
        cmd.args(args);
        let output = cmd.output()?;
        Ok(TmuxOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            status: output.status.code().unwrap_or(-1),
        })
    }
}
