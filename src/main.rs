//! laqs-backlog - seed Azure Boards from the Draft->LAQS migration table
//!
//! CLI binary that previews or creates the query pipeline tracking work
//! items. Dry run is the default; `--apply` submits for real.

use anyhow::Result;
use clap::Parser;

mod cli;

#[derive(Parser)]
#[command(name = "laqs-backlog")]
#[command(about = "Create Azure Boards work items for the Draft->LAQS query pipeline table")]
#[command(version)]
struct Cli {
    /// Create work items for real instead of previewing them
    #[arg(long)]
    apply: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::run_create(cli.apply).await?;
    Ok(())
}
