//! tarsh CLI entry point.
//!
//! Usage:
//!   tarsh <archive.tar> <log.json>   # Interactive session over the archive

use std::env;
use std::process::ExitCode;

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tarsh_kernel::tools::builtin_schemas;
use tarsh_kernel::{KernelConfig, EXIT};

fn main() -> ExitCode {
    // Initialize tracing (respects RUST_LOG env var)
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let args: Vec<String> = env::args().skip(1).collect();

    match args.as_slice() {
        [flag] if flag == "--help" || flag == "-h" => {
            print_help();
            Ok(ExitCode::SUCCESS)
        }

        [flag] if flag == "--version" || flag == "-V" => {
            println!("tarsh {}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }

        [archive, log] if !archive.starts_with('-') && !log.starts_with('-') => {
            tarsh_repl::run(KernelConfig::new(archive, log))?;
            Ok(ExitCode::SUCCESS)
        }

        _ => {
            eprintln!("Usage: tarsh <archive> <log>");
            eprintln!("Run 'tarsh --help' for usage.");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_help() {
    println!(r#"tarsh v{}

Read-only shell over a tar archive. Commands are recorded and saved as a
JSON array to the log file on exit.

Usage:
  tarsh <archive> <log>        Start a session

Arguments:
  <archive>                    Tar archive to load as the filesystem
  <log>                        File the action log is written to on exit

Options:
  -h, --help                   Show this help
  -V, --version                Show version

Commands:"#, env!("CARGO_PKG_VERSION"));

    let indent = "";
    for schema in builtin_schemas() {
        println!("  {:<28} {}", schema.usage(), schema.description);
        for param in &schema.params {
            println!("{indent:33}<{}>: {}", param.name, param.description);
        }
    }
    println!("  {EXIT:<28} Save the log and quit");
}
