//! Terminal front end for the tic-tac-toe engine.
//!
//! This crate is the presentation collaborator: it turns typed input into
//! engine calls and prints the board and status line. All rules live in
//! [`ticntoe_core`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod input;
mod session;

pub use cli::{Cli, Command};
pub use config::{Config, ConfigError, EmptyCell};
pub use input::{Command as InputCommand, parse_command, parse_coordinates};
pub use session::{Session, SessionEnd, render, replay};
