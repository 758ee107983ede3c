//! # pokeclient
//!
//! A UDP client for the Pokemon attribute service:
//! - Length-prefixed request frames
//! - Delimiter-based reply decoding into typed records
//! - Strictly sequential request/response loop
//! - Per-request failure handling (skip and continue)
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────┐      names       ┌──────────────────────────────┐
//! │  Input file  │ ───────────────▶ │            Client            │
//! └──────────────┘                  │  encode ─▶ send ─▶ receive   │
//!                                   │             ─▶ decode        │
//!                                   └──────┬───────────────┬───────┘
//!                                          │               │
//!                                          ▼               ▼
//!                                   ┌─────────────┐ ┌─────────────┐
//!                                   │  Protocol   │ │  Transport  │
//!                                   │ (codec)     │ │   (UDP)     │
//!                                   └─────────────┘ └─────────────┘
//!                                          │
//!                                          ▼ records
//!                                   ┌─────────────┐
//!                                   │ Output file │
//!                                   └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod network;
pub mod files;
pub mod client;
pub mod cli;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{PokeError, Result};
pub use config::Config;
pub use client::{run, Client, RunSummary, SkippedName};
pub use protocol::EntityRecord;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of pokeclient
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
