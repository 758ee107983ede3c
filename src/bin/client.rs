//! pokeclient Binary
//!
//! Queries the Pokemon service for every name in a file.

use clap::Parser;
use pokeclient::cli::Args;
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,pokeclient=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let args = Args::parse();

    tracing::info!("pokeclient v{}", pokeclient::VERSION);

    match pokeclient::run(args.to_config(), &args.in_file, &args.out_file) {
        Ok(summary) => {
            if !summary.skipped.is_empty() {
                let names: Vec<&str> = summary.skipped.iter().map(|s| s.name.as_str()).collect();
                tracing::info!("Skipped names: {}", names.join(", "));
            }
        }
        Err(e) => {
            tracing::error!("Run failed: {}", e);
            std::process::exit(1);
        }
    }
}
