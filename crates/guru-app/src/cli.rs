use std::path::PathBuf;

use clap::Parser;

/// Grammar Guru: an English grammar coach for Korean speakers, in your terminal.
#[derive(Parser, Debug, Default)]
#[command(name = "guru", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive override (e.g. guru=debug).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Model identifier override.
    #[arg(long)]
    pub model: Option<String>,

    /// Discard the stored conversation and start fresh.
    #[arg(long)]
    pub fresh: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
