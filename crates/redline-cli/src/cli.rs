use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "redline",
    about = "Redline — contract comparison and analysis",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve(ServeArgs),
    /// Compare two contract files line by line
    Diff(DiffArgs),
    /// Analyze a contract file with the completion backend
    Analyze(AnalyzeArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to bind, overriding the config file
    #[arg(long)]
    pub bind: Option<SocketAddr>,
    /// Path to a TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct DiffArgs {
    /// The old contract version
    pub old: PathBuf,
    /// The new contract version
    pub new: PathBuf,
    /// Emit the diff as JSON instead of colored text
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct AnalyzeArgs {
    /// The contract to analyze
    pub file: PathBuf,
    /// Prompt language (en or nl)
    #[arg(long, default_value = "en")]
    pub language: String,
}
