//! WQ CLI - Command line tool for annual water quality means.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "wq-cli",
    version,
    about = "Annual dissolved oxygen and turbidity from the open water quality dataset"
)]
struct Cli {
    #[command(subcommand)]
    command: wq_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    wq_cmd::run(cli.command).await
}
