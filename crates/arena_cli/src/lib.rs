//! Command-line arena for tic-tac-toe strategies.
//!
//! The binary is a thin shell: argument parsing ([`cli`]), an optional TOML
//! file ([`config`]), console rendering ([`display`]) and the commands that
//! tie them to the game engine ([`commands`]).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod display;

pub use config::{ArenaConfig, ConfigError};
