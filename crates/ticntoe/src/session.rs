//! Interactive hot-seat session and non-interactive replay.

use crate::config::{Config, EmptyCell};
use crate::input::{Command, parse_command, parse_coordinates};
use std::io::{self, BufRead, Write};
use ticntoe_core::{GameEngine, Transition};
use tracing::{debug, info, instrument, warn};

const HELP: &str = "\
Commands:
  row,col   place your mark (rows and columns are 0-2, e.g. 1,1 is the center)
  reset     start a new game
  help      show this text
  quit      leave";

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player typed `quit`.
    Quit,
    /// Input was exhausted.
    EndOfInput,
}

/// Renders the board with the configured empty-square style.
pub fn render(engine: &GameEngine, config: &Config) -> String {
    match config.empty_cell() {
        EmptyCell::Numbered => engine.board().display(),
        EmptyCell::Blank => engine.board().display_with(|_| ".".to_string()),
    }
}

/// A terminal game session driving one engine.
#[derive(Debug)]
pub struct Session<R, W> {
    engine: GameEngine,
    config: Config,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session with a fresh engine.
    pub fn new(config: Config, input: R, output: W) -> Self {
        Self {
            engine: GameEngine::new(),
            config,
            input,
            output,
        }
    }

    /// Returns the engine being played.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Consumes the session, returning its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until the player quits or input runs out.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from reading input or writing output.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> io::Result<SessionEnd> {
        info!("Session started");
        self.show_board()?;

        let mut line = String::new();
        loop {
            self.prompt()?;
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                info!("Input closed");
                return Ok(SessionEnd::EndOfInput);
            }

            match parse_command(&line) {
                Command::Move { row, col } => self.handle_move(row, col)?,
                Command::Reset => {
                    self.engine.reset();
                    writeln!(self.output, "New game.")?;
                    self.show_board()?;
                }
                Command::Help => writeln!(self.output, "{}", HELP)?,
                Command::Quit => {
                    info!("Player quit");
                    return Ok(SessionEnd::Quit);
                }
                Command::Unrecognized(text) => {
                    debug!(%text, "Unrecognized input");
                    writeln!(
                        self.output,
                        "Unrecognized input '{}'. Type 'help' for commands.",
                        text
                    )?;
                }
            }
        }
    }

    fn handle_move(&mut self, row: i32, col: i32) -> io::Result<()> {
        match self.engine.try_move(row, col) {
            Ok(Transition::Continue { .. }) => self.show_board(),
            Ok(Transition::Finished(outcome)) => {
                info!(%outcome, "Game finished");
                self.show_board()?;
                writeln!(self.output, "Type 'reset' to play again.")
            }
            Err(error) => writeln!(self.output, "Move rejected: {}.", error),
        }
    }

    fn show_board(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", render(&self.engine, &self.config))?;
        writeln!(self.output)?;
        writeln!(self.output, "{}", self.engine.status_line())
    }

    fn prompt(&mut self) -> io::Result<()> {
        if self.engine.state().is_terminal() {
            write!(self.output, "reset or quit> ")?;
        } else {
            write!(self.output, "{}> ", self.engine.current_player())?;
        }
        self.output.flush()
    }
}

/// Applies `moves` (as `row,col` tokens) to a fresh engine.
///
/// Unparsable and rejected moves are reported on `notices` and skipped.
///
/// # Errors
///
/// Returns any I/O error from writing notices.
#[instrument(skip(notices))]
pub fn replay(moves: &[String], notices: &mut impl Write) -> io::Result<GameEngine> {
    let mut engine = GameEngine::new();
    for token in moves {
        let Some((row, col)) = parse_coordinates(token) else {
            warn!(%token, "Unparsable move");
            writeln!(notices, "Skipping '{}': expected row,col", token)?;
            continue;
        };
        if let Err(error) = engine.try_move(row, col) {
            debug!(%token, %error, "Move rejected");
            writeln!(notices, "Skipping '{}': {}", token, error)?;
        }
    }
    Ok(engine)
}
