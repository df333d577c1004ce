use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tmuxpilot_control::{
    Activation, AttachedBackend, Controller, CreateOpts, Error, IdleWaitOpts, Mode,
    PatternWaitOpts,
};
use tmuxpilot_tmux::{TmuxError, TmuxOutput, TmuxRunner};

/// In-memory tmux server: panes with live text, lifecycle, and a call
/// log. Cloning shares the server state, so a test can mutate pane
/// content while a backend holds the other clone.
#[derive(Clone)]
struct FakeServer {
    state: Arc<ServerState>,
}

struct ServerState {
    calls: Mutex<Vec<Vec<String>>>,
    panes: Mutex<Vec<FakePane>>,
    next_id: Mutex<u32>,
    own_pane: String,
    churning: Mutex<HashSet<String>>,
}

struct FakePane {
    id: String,
    text: String,
}

impl FakeServer {
    fn new(own_pane: &str) -> Self {
        let state = ServerState {
            calls: Mutex::new(Vec::new()),
            panes: Mutex::new(vec![FakePane {
                id: own_pane.to_string(),
                text: "$ ".to_string(),
            }]),
            next_id: Mutex::new(1),
            own_pane: own_pane.to_string(),
            churning: Mutex::new(HashSet::new()),
        };
        Self {
            state: Arc::new(state),
        }
    }

    fn set_text(&self, id: &str, text: &str) {
        let mut panes = self.state.panes.lock().unwrap();
        if let Some(pane) = panes.iter_mut().find(|pane| pane.id == id) {
            pane.text = text.to_string();
        }
    }

    /// Make a pane's content grow on every capture, like a program that
    /// never stops writing.
    fn churn(&self, id: &str) {
        self.state.churning.lock().unwrap().insert(id.to_string());
    }

    fn calls_for(&self, verb: &str) -> Vec<Vec<String>> {
        self.state
            .calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| call.first().map(String::as_str) == Some(verb))
            .cloned()
            .collect()
    }
}

fn flag_value(args: &[&str], flag: &str) -> Option<String> {
    args.windows(2)
        .find(|pair| pair[0] == flag)
        .map(|pair| pair[1].to_string())
}

impl TmuxRunner for FakeServer {
    fn run(&self, args: &[&str]) -> Result<TmuxOutput, TmuxError> {
        self.state
            .calls
            .lock()
            .unwrap()
            .push(args.iter().map(|arg| arg.to_string()).collect());
        match args.first().copied() {
            Some("list-panes") => {
                let panes = self.state.panes.lock().unwrap();
                let lines: Vec<String> = panes
                    .iter()
                    .enumerate()
                    .map(|(index, pane)| {
                        let active = if pane.id == self.state.own_pane { "1" } else { "0" };
                        format!("{}\t{index}\tshell\t{active}\t120x40", pane.id)
                    })
                    .collect();
                Ok(TmuxOutput::ok(lines.join("\n")))
            }
            Some("capture-pane") => {
                let target = flag_value(args, "-t").unwrap_or_default();
                let churn = self.state.churning.lock().unwrap().contains(&target);
                let mut panes = self.state.panes.lock().unwrap();
                match panes.iter_mut().find(|pane| pane.id == target) {
                    Some(pane) => {
                        if churn {
                            pane.text.push('.');
                        }
                        Ok(TmuxOutput::ok(pane.text.clone()))
                    }
                    None => Ok(TmuxOutput::failed(1, format!("can't find pane: {target}"))),
                }
            }
            Some("send-keys") => {
                let target = flag_value(args, "-t").unwrap_or_default();
                let panes = self.state.panes.lock().unwrap();
                if panes.iter().any(|pane| pane.id == target) {
                    Ok(TmuxOutput::ok(""))
                } else {
                    Ok(TmuxOutput::failed(1, format!("can't find pane: {target}")))
                }
            }
            Some("kill-pane") => {
                let target = flag_value(args, "-t").unwrap_or_default();
                let mut panes = self.state.panes.lock().unwrap();
                let before = panes.len();
                panes.retain(|pane| pane.id != target);
                if panes.len() < before {
                    Ok(TmuxOutput::ok(""))
                } else {
                    Ok(TmuxOutput::failed(1, format!("can't find pane: {target}")))
                }
            }
            Some("display-message") => Ok(TmuxOutput::ok(format!("{}\n", self.state.own_pane))),
            Some("split-window") => {
                let mut next_id = self.state.next_id.lock().unwrap();
                let id = format!("%{next_id}");
                *next_id += 1;
                self.state.panes.lock().unwrap().push(FakePane {
                    id: id.clone(),
                    text: "$ ".to_string(),
                });
                Ok(TmuxOutput::ok(format!("{id}\n")))
            }
            _ => Ok(TmuxOutput::ok("")),
        }
    }
}

fn pilot_for(server: &FakeServer) -> Controller {
    Controller::with_backend(
        Box::new(AttachedBackend::new(server.clone())),
        Mode::Attached,
        "main",
    )
}

fn idle_opts(idle_ms: u64, check_ms: u64, timeout_ms: Option<u64>) -> IdleWaitOpts {
    IdleWaitOpts {
        idle_time: Duration::from_millis(idle_ms),
        check_interval: Duration::from_millis(check_ms),
        timeout: timeout_ms.map(Duration::from_millis),
    }
}

#[test]
fn drive_a_shell_end_to_end() {
    let server = FakeServer::new("%0");
    let mut pilot = pilot_for(&server);

    // Launch a shell pane; it becomes the default target.
    let handle = pilot
        .launch(&CreateOpts {
            command: Some("bash".to_string()),
            ..CreateOpts::default()
        })
        .unwrap();
    assert_eq!(handle, "%1");

    // A fresh prompt stops changing almost immediately.
    let idle = pilot.wait_idle(None, &idle_opts(10, 1, Some(1000))).unwrap();
    assert!(idle, "fresh shell should settle");

    // Type a command; the shell reacts.
    pilot.send(None, "echo hi", Activation::Immediate).unwrap();
    server.set_text("%1", "$ echo hi\nhi\n$ ");

    let screen = pilot.capture(None, None).unwrap();
    assert!(screen.contains("hi"), "capture should show the command output");

    // Both panes enumerate; the launched one is addressable by index.
    let targets = pilot.list_targets().unwrap();
    assert_eq!(targets.len(), 2);
    pilot.send(Some("1"), "pwd", Activation::None).unwrap();
    let sends = server.calls_for("send-keys");
    assert_eq!(sends.last().unwrap()[2], "%1");

    // The pane hosting the controller is protected.
    let guard = pilot.kill(Some("%0")).unwrap_err();
    assert!(matches!(guard, Error::SelfTerminationRejected(_)));

    // Killing the launched pane leaves its handle dead, not stale.
    let killed = pilot.kill(Some("%1")).unwrap();
    assert_eq!(killed, "%1");
    let err = pilot.capture(Some("%1"), None).unwrap_err();
    assert!(matches!(err, Error::Tmux(TmuxError::CommandFailed { .. })));
}

#[test]
fn wait_idle_times_out_while_output_keeps_changing() {
    let server = FakeServer::new("%0");
    let mut pilot = pilot_for(&server);

    let handle = pilot.launch(&CreateOpts::default()).unwrap();
    server.churn(&handle);

    let start = Instant::now();
    let idle = pilot.wait_idle(None, &idle_opts(10, 1, Some(40))).unwrap();
    assert!(!idle, "changing output never settles");
    assert!(start.elapsed() >= Duration::from_millis(40));
}

#[test]
fn pattern_wait_catches_output_as_it_arrives() {
    let server = FakeServer::new("%0");
    let mut pilot = pilot_for(&server);

    let handle = pilot.launch(&CreateOpts::default()).unwrap();
    server.churn(&handle);

    // Churn appends one dot per capture; three dots arrive within a few
    // ticks.
    let found = pilot
        .wait_for_pattern(
            Some(handle.as_str()),
            r"\.\.\.",
            &PatternWaitOpts {
                timeout: Duration::from_secs(2),
                check_interval: Duration::from_millis(1),
            },
        )
        .unwrap();
    assert!(found);
}

#[test]
fn nothing_works_outside_tmux() {
    let mut pilot = Controller::with_mode(Mode::Detached, None, "robot");
    assert_eq!(pilot.mode(), Mode::Detached);

    let err = pilot.launch(&CreateOpts::default()).unwrap_err();
    assert!(matches!(err, Error::UnsupportedMode("launch")));
    let err = pilot.capture(None, None).unwrap_err();
    assert!(matches!(err, Error::UnsupportedMode("capture")));
}
