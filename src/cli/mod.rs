//! CLI definitions.
//!
//! The subcommands are the trigger boundary: the external scheduler either
//! invokes a pass directly or hands over its opaque message token via
//! `trigger`.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "trader")]
#[command(author, version, about = "Scheduled equity swing-trading strategy runner")]
pub struct Cli {
    /// Log level
    #[arg(short, long, default_value = "info")]
    pub log_level: LogLevel,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the daily buy pass
    Buy,
    /// Run the liquidation pass over open positions
    Sell,
    /// Push end-of-day account and order snapshots
    Push,
    /// Decode a scheduler message token and run the matching pass
    Trigger(TriggerArgs),
}

#[derive(clap::Args)]
pub struct TriggerArgs {
    /// Opaque command token from the scheduler (buy, sell, push);
    /// anything else is a no-op
    pub message: String,
}
