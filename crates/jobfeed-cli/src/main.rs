mod run;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "jobfeed")]
#[command(about = "Fetch, filter and publish job postings as a static feed")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch postings and write the JSON feed and HTML page (default)
    Run {
        /// Output root; overrides `JOBFEED_OUTPUT_DIR`
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Fetch and filter without writing any files
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the effective configuration with credentials redacted
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = jobfeed_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match cli.command {
        Some(Commands::Config) => println!("{config:#?}"),
        Some(Commands::Run { out_dir, dry_run }) => run::execute(&config, out_dir, dry_run).await?,
        None => run::execute(&config, None, false).await?,
    }

    Ok(())
}
