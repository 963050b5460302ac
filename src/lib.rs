//! Coin Cartel publisher onboarding client
//!
//! Command-line front end over the onboarding workspace crates: bootstrap
//! (config, tracing, wiring), the clap surface and the command handlers.

pub mod bootstrap;
pub mod cli;
pub mod commands;

pub use commands::CommandOutcome;
