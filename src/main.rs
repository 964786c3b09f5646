mod cli;
mod error;
mod logging;
mod parse;
mod paths;
mod report;
mod types;

use crate::error::{Result, TidySarifError};
use clap::Parser;
use std::path::Path;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn convert(input: &Path, output: &Path) -> Result<usize> {
    let text = std::fs::read_to_string(input).map_err(|source| TidySarifError::ReadInput {
        path: input.display().to_string(),
        source,
    })?;

    let records = parse::parse_diagnostics(&text);
    let rendered = report::render(&records)?;

    std::fs::write(output, rendered).map_err(|source| TidySarifError::WriteOutput {
        path: output.display().to_string(),
        source,
    })?;
    Ok(records.len())
}

fn run() -> Result<i32> {
    // Usage errors exit with 2; --help and --version with 0.
    let cli = cli::Cli::try_parse().unwrap_or_else(|e| e.exit());
    logging::init_logging(cli.log_level());

    let count = convert(&cli.input, &cli.output)?;
    tracing::info!(
        results = count,
        output = %cli.output.display(),
        "wrote sarif"
    );
    Ok(exit_code::SUCCESS)
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
