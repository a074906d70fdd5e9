use std::process::ExitCode;

use clap::Parser;
use esports_hub::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Command::Standings(args) => cli::standings::run(args).await.map(|()| ExitCode::SUCCESS),
        Command::Access(args) => cli::access::run(args).await,
    }
}
