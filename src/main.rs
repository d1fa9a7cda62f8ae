//! treedoc CLI entry point.

use clap::Parser;
use tracing_subscriber::EnvFilter;
use treedoc::cli::{self, Cli, Commands, EXIT_ERROR};

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the report.
    let default_level = if cli.verbose { "treedoc=debug" } else { "treedoc=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let mut stdout = std::io::stdout().lock();
    let result = match cli.command {
        Commands::Extract(args) => cli::run_extract(&args, &mut stdout),
        Commands::Languages => cli::run_languages(&mut stdout),
    };

    let exit_code = match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            EXIT_ERROR
        }
    };

    std::process::exit(exit_code);
}
