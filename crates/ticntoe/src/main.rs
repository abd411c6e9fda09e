//! TicnToe - hot-seat tic-tac-toe in the terminal.

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use ticntoe::{Cli, Command, Config, Session, SessionEnd, render, replay};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;
    init_tracing(&config);
    info!(
        path = %cli.config.display(),
        found = cli.config.exists(),
        ?config,
        "Configuration resolved"
    );

    match cli.command {
        Command::Play => run_play(config),
        Command::Replay { moves, json } => run_replay(&moves, json, &config),
    }
}

/// Logs go to stderr so they never interleave with the board.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Run the interactive game on stdin/stdout.
fn run_play(config: Config) -> Result<()> {
    info!("Starting interactive game");
    let stdin = io::stdin();
    let mut session = Session::new(config, stdin.lock(), io::stdout());
    match session.run()? {
        SessionEnd::Quit => println!("Bye."),
        SessionEnd::EndOfInput => println!(),
    }
    Ok(())
}

/// Replay moves and print the resulting board or JSON snapshot.
fn run_replay(moves: &[String], json: bool, config: &Config) -> Result<()> {
    let engine = replay(moves, &mut io::stderr())?;

    let mut out = io::stdout().lock();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&engine)?)?;
    } else {
        writeln!(out, "{}", render(&engine, config))?;
        writeln!(out)?;
        writeln!(out, "{}", engine.status_line())?;
    }
    Ok(())
}
