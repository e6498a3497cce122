use std::path::PathBuf;

use clap::Parser;

use super::config::LogTarget;

/// Command-line arguments for the tracking client
#[derive(Parser, Debug, Default)]
#[command(name = "tracking")]
#[command(about = "Look up shipments by waybill, delivery order or invoice number")]
#[command(version)]
pub struct Cli {
    /// Tracking identifier to look up once, then exit
    pub identifier: Option<String>,

    /// Page location to load; its `nosm` parameter seeds the first search
    #[arg(long)]
    pub page_url: Option<String>,

    /// Base URL of the logistics API
    #[arg(long, env = "TRACKING_API_BASE_URL")]
    pub api_base_url: Option<String>,

    /// Display language (en or id)
    #[arg(long, env = "TRACKING_LOCALE")]
    pub locale: Option<String>,

    /// RON configuration file (defaults to ./tracking.ron when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Where log output goes
    #[arg(long, value_enum)]
    pub log: Option<LogTarget>,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}
