use clap::{Parser, Subcommand};
use std::process;
use tracing::error;
use tracing_subscriber::EnvFilter;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Debug-level logging (RUST_LOG takes precedence when set).
    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Turn one short code plus clicked points into a canonical log line.
    Log(cmd::log::LogArgs),
    /// Run the full pipeline over a log file or an event table.
    Analyze(cmd::analyze::AnalyzeArgs),
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let result = match cli.command {
        Commands::Log(args) => cmd::log::run(args),
        Commands::Analyze(args) => cmd::analyze::run(args),
    };

    if let Err(e) = result {
        error!("{}", e);
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
