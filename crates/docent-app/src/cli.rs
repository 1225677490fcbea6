use std::path::PathBuf;

use clap::Parser;

/// Docent: chat with a language model about your documents.
#[derive(Parser, Debug)]
#[command(name = "docent", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive override (e.g. debug, docent=trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Model name override.
    #[arg(short = 'm', long)]
    pub model: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
