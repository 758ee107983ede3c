//! Command-line arguments
//!
//! Shared by the `pokeclient` binary and its tests.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// pokeclient
#[derive(Parser, Debug)]
#[command(name = "pokeclient")]
#[command(about = "Query the Pokemon service over UDP")]
#[command(version)]
pub struct Args {
    /// File with one Pokemon name per line
    pub in_file: PathBuf,

    /// File to write `name;key:value` lines to
    pub out_file: PathBuf,

    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Receive timeout in milliseconds (0 waits forever)
    #[arg(short, long, default_value = "2000")]
    pub timeout_ms: u64,

    /// Local bind address
    #[arg(short, long, default_value = "0.0.0.0:0")]
    pub bind: String,

    /// Skip names whose reply is truncated instead of keeping partial records
    #[arg(long)]
    pub strict: bool,
}

impl Args {
    /// Build the run config these arguments describe
    pub fn to_config(&self) -> Config {
        Config::builder()
            .server(&self.host, self.port)
            .bind_addr(&self.bind)
            .recv_timeout_ms(self.timeout_ms)
            .strict(self.strict)
            .build()
    }
}
