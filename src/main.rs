use std::process::ExitCode;
use std::sync::Arc;

use chrono::Utc;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use voy::commands;
use voy::config::{Cli, Command, Config};
use voy::notify::NotificationQueue;
use voy::render;
use voy::state::Board;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Logs go to stderr so stdout stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    if cli.command == Command::Categories {
        print!("{}", render::categories());
        return Ok(ExitCode::SUCCESS);
    }

    let config = Config::load(&cli)?;
    let queue = NotificationQueue::new();
    let board = Board::from_config(&config, Arc::new(queue.clone()))?;

    let report = commands::run(&board, cli.command, Utc::now()).await;
    print!("{}", report.output);

    for notification in queue.drain() {
        eprintln!("{}", render::notification(&notification));
    }

    Ok(if report.ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
