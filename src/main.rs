//! Terminal gamepad runner (default binary).
//!
//! Runs the reference `WasdGame` at the requested frame rate: press keys to
//! see which virtual button they map to, `q` to quit.

use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use tui_loop::engine::{run, RunReport, WasdGame};
use tui_loop::input::InputSource;
use tui_loop::term::{signal, StdinTty};
use tui_loop::types::{Error, FrameRate, DEFAULT_ESCAPE_TIMEOUT_MS};

#[derive(Debug, Parser)]
#[command(version, about = "Fixed-rate terminal game loop with raw keyboard input")]
struct Cli {
    /// Frames per second: a positive number, or "inf" for no throttling
    #[arg(long, env = "TUI_LOOP_FPS", default_value = "30")]
    fps: FrameRate,

    /// How long to wait for the rest of an arrow-key escape sequence
    #[arg(long, env = "TUI_LOOP_ESCAPE_TIMEOUT_MS", default_value_t = DEFAULT_ESCAPE_TIMEOUT_MS)]
    escape_timeout_ms: u64,
}

fn main() -> ExitCode {
    // Invalid arguments exit here, before the terminal is touched.
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match play(&cli) {
        Ok(report) => {
            log::info!(
                "{} frames at {}, {:?} asleep",
                report.frames,
                cli.fps,
                report.slept
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            let code = err.downcast_ref::<Error>().map_or(1, Error::exit_code);
            ExitCode::from(code)
        }
    }
}

fn play(cli: &Cli) -> Result<RunReport> {
    signal::install_interrupt_handler().context("installing interrupt handler")?;

    let source = InputSource::new(StdinTty::new())
        .with_escape_timeout(Duration::from_millis(cli.escape_timeout_ms));
    let mut game = WasdGame::with_input_source(source);

    let report = run(&mut game, cli.fps).context("running game loop")?;
    Ok(report)
}
