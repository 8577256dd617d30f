//! Move printer - prints the move sequences of chess pieces.
//!
//! This crate is the command-line boundary around `moves-engine`: it
//! validates arguments and configuration, then renders the generated
//! sequences. No sequence is generated unless validation succeeds.
//!
//! # Modules
//!
//! - [`cli`] - Argument definitions and resolution into a [`cli::Plan`]
//! - [`config`] - TOML configuration loading
//! - [`logging`] - Tracing subscriber setup

pub mod cli;
pub mod config;
mod error;
pub mod logging;

pub use error::CliError;

use clap::error::ErrorKind;
use clap::Parser;
use cli::{Cli, OutputFormat, Plan};
use config::MovesConfig;
use moves_engine::{RenderOptions, Report};
use std::ffi::OsString;
use std::io::Write;

/// Stack granted to the generator thread; recursive generation is one frame per step.
const GENERATOR_STACK_BYTES: usize = 64 * 1024 * 1024;

/// Runs the program with `args` (including the program name).
///
/// Returns the process exit status: 0 on success or help, 1 on any
/// validation, configuration or output failure.
pub fn run<I, T, O, E>(args: I, stdout: &mut O, stderr: &mut E) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    O: Write,
    E: Write,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => return report_parse_error(&err, stdout, stderr),
    };
    logging::init(cli.verbose);

    match execute(&cli, stdout) {
        Ok(()) => 0,
        Err(e) => {
            tracing::debug!(error = ?e, "run aborted");
            let _ = writeln!(stderr, "error: {}", e);
            if e.shows_usage() {
                let _ = write!(stderr, "{}", cli::usage());
            }
            e.exit_code()
        }
    }
}

fn report_parse_error<O: Write, E: Write>(
    err: &clap::Error,
    stdout: &mut O,
    stderr: &mut E,
) -> u8 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = write!(stdout, "{}", err.render());
            0
        }
        _ => {
            let _ = write!(stderr, "{}", err.render());
            1
        }
    }
}

fn execute<O: Write>(cli: &Cli, stdout: &mut O) -> Result<(), CliError> {
    let config = MovesConfig::load(cli.config.as_deref())?;
    let plan = Plan::resolve(cli, &config)?;
    tracing::info!(
        strategy = %plan.strategy,
        knight = ?plan.knight,
        "Generating {}",
        plan.counts.summary()
    );

    let report = generate(plan)?;
    for block in &report.blocks {
        tracing::debug!("{}: {} tokens", block.label(), block.sequence.len());
    }

    match cli.format {
        OutputFormat::Text => {
            let options = RenderOptions {
                banner: !cli.no_banner,
            };
            report.write_to(stdout, &options)?;
        }
        OutputFormat::Json => {
            writeln!(stdout, "{}", report.to_json()?)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn generate(plan: Plan) -> Result<Report, CliError> {
    let handle = std::thread::Builder::new()
        .name("generator".to_string())
        .stack_size(GENERATOR_STACK_BYTES)
        .spawn(move || plan.build_report())?;
    handle.join().map_err(|_| CliError::GeneratorPanicked)?
}
