use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, error};

/// Time-bucketed access statistics for web server logs
#[derive(Parser)]
#[command(name = "loglens")]
#[command(about = "Analyze web server access logs by hour, day, month and year", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze an access log and print time-bucketed statistics
    Analyze {
        /// Path to the log file
        file: PathBuf,

        /// Emit the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Generate a synthetic access log for testing
    Generate {
        /// Path of the file to write
        file: PathBuf,

        /// Number of log entries to generate
        #[arg(short = 'n', long, default_value = "1000")]
        entries: usize,
    },
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .init();

    debug!("loglens started with verbosity level: {}", cli.verbose);

    let result = match cli.command {
        Commands::Analyze { file, json } => run_analyze(&file, json),
        Commands::Generate { file, entries } => run_generate(&file, entries),
    };

    if let Err(e) = result {
        error!("Fatal error: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_analyze(file: &std::path::Path, json: bool) -> anyhow::Result<()> {
    let output = loglens::cli::run_analyze(file, json)?;
    print!("{output}");
    Ok(())
}

fn run_generate(file: &std::path::Path, entries: usize) -> anyhow::Result<()> {
    loglens::cli::run_generate(file, entries)?;
    println!("Wrote {} entries to {}", entries, file.display());
    Ok(())
}
