//! Demo front end for the registration form.
//!
//! This binary delegates to `registration_form::demo_cli` for loading,
//! submitting, and rendering, keeping the flow testable without spawning a
//! process. Accepted submissions print the registration as JSON on stdout;
//! rejected ones print one `path: message` line per failure and exit non-zero.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use registration_form::demo_cli::{CliError, DemoArgs, DemoReport, load_policy, run};

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = DemoArgs::parse();
    match execute(&args) {
        Ok(report) if report.accepted => {
            write_out(io::stdout().lock(), &report.rendered);
            ExitCode::SUCCESS
        }
        Ok(report) => {
            write_out(io::stdout().lock(), &report.rendered);
            ExitCode::from(2)
        }
        Err(err) => {
            write_out(io::stderr().lock(), &err.to_string());
            ExitCode::FAILURE
        }
    }
}

fn execute(args: &DemoArgs) -> Result<DemoReport, CliError> {
    let policy = load_policy()?;
    run(args, policy)
}

fn write_out(mut out: impl Write, message: &str) {
    if let Err(err) = writeln!(out, "{}", message.trim_end()) {
        drop(err);
    }
}
