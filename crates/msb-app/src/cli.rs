use clap::Parser;
use std::path::PathBuf;

/// MSB: browse up to four sites side by side in one window.
#[derive(Parser, Debug)]
#[command(name = "msb", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error) or a full filter directive.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Start directly in a split with this many panels.
    #[arg(long, value_parser = clap::value_parser!(u32).range(2..=4))]
    pub split: Option<u32>,

    /// Addresses to open, one per panel, in order.
    #[arg(value_name = "URL")]
    pub urls: Vec<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
