//! CLI for the LedgerBox document-processing API.

mod client;
mod commands;
mod output;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{auth, config, fields, normalize, results, sample, upload};

/// LedgerBox - upload documents and fetch normalized extraction results
#[derive(Parser)]
#[command(name = "ledgerbox")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the configured API key is accepted
    Auth,

    /// Upload a file for processing
    Upload(upload::UploadArgs),

    /// Fetch and normalize the results of a job
    Results(results::ResultsArgs),

    /// Normalize saved job exports without contacting the API
    Normalize(normalize::NormalizeArgs),

    /// List the output fields of a model
    Fields(fields::FieldsArgs),

    /// Print a sample result for a model
    Sample(sample::SampleArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Auth => auth::run(config_path).await,
        Commands::Upload(args) => upload::run(args, config_path).await,
        Commands::Results(args) => results::run(args, config_path).await,
        Commands::Normalize(args) => normalize::run(args, config_path),
        Commands::Fields(args) => fields::run(args),
        Commands::Sample(args) => sample::run(args),
        Commands::Config(args) => config::run(args, config_path).await,
    }
}
