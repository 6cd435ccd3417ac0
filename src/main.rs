use std::process::ExitCode;
use clap::Parser;
use colored::Colorize;
use tracing::{error, info};
use crate::cli::Cli;
use crate::driver::run_script;
use crate::err_output::cli::output_errors_to_cli;
use crate::errors::ErrorReporter;

mod cli;
mod driver;
mod err_output;
mod errors;
mod helpers;
mod iter_util;
mod lexer;
mod parser;
mod runtime;

fn main() -> ExitCode {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let (file_name, source) = match cli.load_script() {
        Ok(script) => script,
        Err(err) => {
            eprintln!("{} could not read {}: {}", "error".red(), cli.script.as_ref().map_or_else(String::new, |x| x.display().to_string()).blue(), err);
            return ExitCode::FAILURE
        }
    };

    let mut reporter = ErrorReporter::for_file(file_name.clone(), &source);
    let transcript = run_script(&mut reporter);

    if cli.json {
        match transcript.to_json() {
            Ok(json) => println!("{}", json),
            Err(err) => {
                error!(%err, "could not serialize transcript");
                return ExitCode::FAILURE
            }
        }
    } else {
        for line in transcript.lines() {
            println!("{}", line);
        }
    }
    output_errors_to_cli(&reporter);
    if !reporter.is_ok() {
        return ExitCode::FAILURE
    }

    if cli.verify {
        let mut rerun_reporter = ErrorReporter::for_file(file_name, &source);
        let first = transcript.digest();
        let second = run_script(&mut rerun_reporter).digest();
        info!(first = %first, second = %second, "transcript digests");
        if first != second {
            eprintln!("{} transcript changed between runs ({} != {})", "error".red(), first, second);
            return ExitCode::FAILURE
        }
        eprintln!("{} sha1 {}", "idempotent".green(), first);
    }
    ExitCode::SUCCESS
}
