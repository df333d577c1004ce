//! tmuxpilot binary: parse the command line, pick a backend for the
//! current mode, run one operation, exit.

use clap::Parser;

use tmuxpilot_control::{Activation, Controller, CreateOpts};

mod cli;
mod cmd_wait_idle;
mod help;

/// What a finished command hands back to `main`: a line for stdout,
/// or a bare exit code for commands that report through one.
enum Output {
    Line(String),
    Exit(i32),
}

fn main() -> anyhow::Result<()> {
    let filter = std::env::var("TMUXPILOT_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    let args = cli::Cli::parse();
    let mut pilot = Controller::from_env(args.socket.as_deref(), &args.session);
    tracing::debug!("{} mode, socket {:?}", pilot.mode(), args.socket);

    match run_command(&mut pilot, args.command)? {
        Output::Line(line) => println!("{line}"),
        Output::Exit(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
    }

    Ok(())
}

/// Run one command against the controller and say what to print.
fn run_command(pilot: &mut Controller, command: cli::Command) -> anyhow::Result<Output> {
    let line = match command {
        cli::Command::Launch(opts) => {
            let handle = pilot.launch(&CreateOpts {
                command: opts.command,
                direction: opts.split.into(),
                size_percent: opts.size,
                window_name: opts.name,
            })?;
            format!("launched pane {handle}")
        }
        cli::Command::Send(opts) => {
            let activation = Activation::from_flags(opts.enter, Some(opts.delay_enter));
            pilot.send(opts.pane.as_deref(), &opts.text, activation)?;
            "sent".to_string()
        }
        cli::Command::Capture(opts) => pilot.capture(opts.pane.as_deref(), opts.lines)?,
        cli::Command::ListPanes => {
            let targets = pilot.list_targets()?;
            serde_json::to_string_pretty(&targets)?
        }
        cli::Command::Interrupt(opts) => {
            pilot.interrupt(opts.pane.as_deref())?;
            "sent interrupt".to_string()
        }
        cli::Command::Escape(opts) => {
            pilot.escape(opts.pane.as_deref())?;
            "sent escape".to_string()
        }
        cli::Command::Kill(opts) => {
            let handle = pilot.kill(opts.pane.as_deref())?;
            format!("killed {handle}")
        }
        cli::Command::WaitIdle(opts) => {
            return Ok(Output::Exit(cmd_wait_idle::run(pilot, &opts)));
        }
        cli::Command::Attach => pilot.attach()?,
        cli::Command::Cleanup => pilot.cleanup()?,
        cli::Command::ListWindows => pilot.list_windows()?,
        cli::Command::Help => help::render(pilot.mode(), pilot.session()),
    };
    Ok(Output::Line(line))
}
