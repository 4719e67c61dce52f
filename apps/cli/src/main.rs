//! `bs-calc`: evaluate arithmetic expressions over storage sizes.
//!
//! Exit status is 0 on success, 1 when the expression cannot be parsed or
//! evaluated, and 2 when the invocation itself is broken (bad arguments,
//! unreadable configuration, invalid log filter).

mod calc;
mod cli;
mod logging;
mod output;
mod settings;

use std::process::ExitCode;

use anyhow::{Context, Result};
use bytesize::FixedLocale;
use clap::Parser;

use crate::cli::Args;
use crate::logging::LogConfig;
use crate::settings::Settings;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("bs-calc: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();
    let settings = Settings::load(&args).context("failed to load settings")?;
    logging::init(&LogConfig::from_settings(&settings))?;

    let locale = FixedLocale::from_env();
    let expression = args.expression();
    tracing::debug!(%expression, places = settings.places, "evaluating");

    match calc::evaluate(&expression, &locale) {
        Ok(value) => {
            for line in output::render(&value, settings.unit()?, settings.places) {
                println!("{line}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            tracing::debug!(error = ?err, "evaluation failed");
            println!("{err}");
            Ok(ExitCode::FAILURE)
        }
    }
}
