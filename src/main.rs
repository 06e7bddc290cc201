mod cli;
mod commands;
mod config;
mod env;
mod error;
mod library;
mod logging;
mod tui;

use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();
    let logging_guard = logging::init();

    if let Err(err) = commands::dispatch(cli).await {
        tracing::error!(error = %err, "command failed");
        eprintln!("{err}");
        drop(logging_guard);
        std::process::exit(1);
    }
}
