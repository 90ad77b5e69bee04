mod cli;
mod report;

use std::process::ExitCode;

use clap::Parser;
use padframe::{Config, convert_image};

use crate::cli::Cli;
use crate::report::report_error;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = Config::from(&cli);
    println!("Converting: {}", cli.input.display());

    match convert_image(&cli.input, &cli.output, &config) {
        Ok(report) => {
            log::info!(
                "{}x{} {} -> {}x{} {}",
                report.source_dimensions.0,
                report.source_dimensions.1,
                report.source_format,
                report.output_dimensions.0,
                report.output_dimensions.1,
                report.target_format
            );
            println!("Image converted: {}", cli.output.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn init_logger(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}
