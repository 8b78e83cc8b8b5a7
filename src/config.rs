//! Runtime configuration, read from command-line flags with environment fallbacks.

use crate::search::engine::DEFAULT_THRESHOLD;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "sitedir")]
#[command(about = "Site directory with fuzzy search", long_about = None)]
#[command(version)]
pub struct Config {
    /// Address the HTTP server listens on
    #[arg(long, env = "SITEDIR_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// JSON file holding all records
    #[arg(long, env = "SITEDIR_DATA", default_value = "data.json")]
    pub data: PathBuf,

    /// Maximum match distance in [0, 1]; lower is stricter
    #[arg(long, env = "SITEDIR_THRESHOLD", default_value_t = DEFAULT_THRESHOLD, value_parser = parse_threshold)]
    pub threshold: f64,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, env = "SITEDIR_LOG", default_value = "info")]
    pub log_level: String,
}

fn parse_threshold(value: &str) -> Result<f64, String> {
    let threshold: f64 = value
        .parse()
        .map_err(|_| format!("`{}` is not a number", value))?;
    if !(0.0..=1.0).contains(&threshold) {
        return Err(format!("threshold must be between 0 and 1, got {}", threshold));
    }
    Ok(threshold)
}
