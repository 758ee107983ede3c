//! Configuration for pokeclient
//!
//! Centralized configuration with sensible defaults.

use crate::error::{PokeError, Result};
use crate::protocol::MAX_NAME_LEN;

/// Main configuration for a client run
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// Server address (host:port)
    pub server_addr: String,

    /// Local address the datagram socket binds to (port 0 = ephemeral)
    pub bind_addr: String,

    /// Receive timeout (milliseconds), 0 blocks until a reply arrives
    pub recv_timeout_ms: u64,

    /// Size of the receive buffer; longer datagrams are truncated by the OS
    pub max_datagram_size: usize,

    // -------------------------------------------------------------------------
    // Protocol Configuration
    // -------------------------------------------------------------------------
    /// Max UTF-8 byte length of a requested name
    pub max_name_len: usize,

    /// Treat malformed replies as failures instead of warnings
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_addr: "127.0.0.1:7777".to_string(),
            bind_addr: "0.0.0.0:0".to_string(),
            recv_timeout_ms: 2000,
            max_datagram_size: 2048,
            max_name_len: MAX_NAME_LEN,
            strict: false,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check the config for values the client cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.server_addr.trim().is_empty() {
            return Err(PokeError::Config("server address is empty".to_string()));
        }
        if self.max_datagram_size == 0 {
            return Err(PokeError::Config(
                "max datagram size must be greater than zero".to_string(),
            ));
        }
        if self.max_name_len > MAX_NAME_LEN {
            return Err(PokeError::Config(format!(
                "max name length {} exceeds protocol limit {}",
                self.max_name_len, MAX_NAME_LEN
            )));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the server address (host:port)
    pub fn server_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.server_addr = addr.into();
        self
    }

    /// Set the server address from a separate host and port
    pub fn server(mut self, host: &str, port: u16) -> Self {
        self.config.server_addr = format!("{}:{}", host, port);
        self
    }

    /// Set the local bind address
    pub fn bind_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.bind_addr = addr.into();
        self
    }

    /// Set the receive timeout (in milliseconds)
    pub fn recv_timeout_ms(mut self, ms: u64) -> Self {
        self.config.recv_timeout_ms = ms;
        self
    }

    /// Set the receive buffer size (in bytes)
    pub fn max_datagram_size(mut self, size: usize) -> Self {
        self.config.max_datagram_size = size;
        self
    }

    /// Set the maximum name length (in bytes)
    pub fn max_name_len(mut self, len: usize) -> Self {
        self.config.max_name_len = len;
        self
    }

    /// Enable or disable strict decoding
    pub fn strict(mut self, strict: bool) -> Self {
        self.config.strict = strict;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
