//! CLI interface for ticker-relay
//!
//! Provides subcommands for:
//! - `serve`: Run the HTTP relay and the ticker feed
//! - `config`: Show the effective configuration

mod serve;

pub use serve::ServeArgs;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "ticker-relay")]
#[command(about = "HTTP relay and websocket-fed ticker cache for the HitBTC public API")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP relay and the ticker feed
    Serve(ServeArgs),
    /// Show the effective configuration
    Config,
}
