//! Bird Semantic Search - Entry Point
//!
//! ```text
//! birdsearch [--config <path>]
//! ```
//!
//! Without `--config`, `birdsearch.toml` is looked up in the working
//! directory and the user configuration directory. `BIRDSEARCH__*`
//! environment variables override file values.

use birdsearch::run;
use clap::Parser;

/// Command line interface for Bird Semantic Search
#[derive(Parser, Debug)]
#[command(name = "birdsearch")]
#[command(about = "Bird Semantic Search - query-by-text search over bird species records")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    run(cli.config.as_deref()).await
}
