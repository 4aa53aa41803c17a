use anyhow::Context;
use clap::Parser;
use tempexpr::{perform, CovarianceSetup};
use tracing_subscriber::EnvFilter;

/// Times the sample covariance of a JSON problem file.
#[derive(Debug, Parser)]
#[command(name = "tempexpr-bench")]
struct Cli {
    /// JSON file whose "data" member is {"dim": .., "data": [..]}
    #[arg(value_name = "INPUT")]
    input: String,

    /// Where to write {"time-seconds", "output", "dry-output"}
    #[arg(value_name = "OUTPUT")]
    output: String,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let report = perform(&CovarianceSetup, &cli.input, &cli.output)
        .with_context(|| format!("covariance benchmark on {}", cli.input))?;
    tracing::info!(seconds = report.time_seconds, "finished");
    Ok(())
}
