//! Client Module
//!
//! Drives the request/response loop against the Pokemon service.
//!
//! ## Responsibilities
//! - Encode each name and send it as one datagram
//! - Wait for exactly one reply before moving on
//! - Decode the reply into an `EntityRecord`
//! - Skip names whose request or reply fails, abort on transport failure
//!
//! ## Late Replies
//! A reply that misses its timeout may still arrive. Queued datagrams are
//! dropped before every send, and a reply echoing a name that already timed
//! out is dropped while waiting, so it never decodes as the next answer.

use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::Path;

use bytes::BytesMut;

use crate::config::Config;
use crate::error::{PokeError, Result};
use crate::files;
use crate::network::{Transport, UdpTransport};
use crate::protocol::{self, EntityRecord, MAX_REQUEST_SIZE};

/// Sequential client over any datagram transport
///
/// Buffers are owned by the client and reset on every request. Decoding
/// state lives only for the duration of one `query`.
pub struct Client<T: Transport> {
    transport: T,
    config: Config,

    /// Outbound frame, cleared before each encode
    request_buf: BytesMut,

    /// Inbound datagram, only the received prefix is ever read
    response_buf: Vec<u8>,

    /// Names whose reply timed out; a late echo of one of them is stale
    abandoned: HashSet<String>,
}

/// A name the run gave up on
#[derive(Debug)]
pub struct SkippedName {
    pub name: String,
    pub reason: PokeError,
}

/// Outcome of a whole run
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Records in input order
    pub records: Vec<EntityRecord>,

    /// Names that produced no record
    pub skipped: Vec<SkippedName>,
}

impl<T: Transport> Client<T> {
    pub fn new(transport: T, config: Config) -> Self {
        let response_buf = vec![0u8; config.max_datagram_size];
        Self {
            transport,
            config,
            request_buf: BytesMut::with_capacity(MAX_REQUEST_SIZE),
            response_buf,
            abandoned: HashSet::new(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Ask the service about one entity
    pub fn query(&mut self, name: &str) -> Result<EntityRecord> {
        protocol::encode_into(name, &mut self.request_buf, self.config.max_name_len)?;

        let dropped = self.transport.discard_pending()?;
        if dropped > 0 {
            tracing::warn!("Dropped {} late datagrams before requesting '{}'", dropped, name);
        }

        self.transport.send(&self.request_buf)?;
        tracing::debug!("Requested '{}' ({} bytes)", name, self.request_buf.len());

        let len = loop {
            let len = match self.transport.receive(&mut self.response_buf) {
                Ok(len) => len,
                Err(PokeError::Io(ref e)) if e.kind() == ErrorKind::TimedOut => {
                    self.abandoned.insert(name.to_string());
                    return Err(PokeError::Timeout {
                        name: name.to_string(),
                        timeout_ms: self.config.recv_timeout_ms,
                    });
                }
                Err(e) => return Err(e),
            };

            match protocol::leading_segment(&self.response_buf[..len]) {
                Some(echo) if echo != name && self.abandoned.contains(echo) => {
                    tracing::warn!("Dropping late reply for '{}' while waiting for '{}'", echo, name);
                }
                _ => break len,
            }
        };

        let decoded = protocol::decode(&self.response_buf[..len], name)?;
        tracing::debug!(
            "Reply for '{}': {} bytes, {} attributes",
            name,
            len,
            decoded.record.len()
        );

        if !decoded.is_clean() {
            let details = decoded
                .warnings
                .iter()
                .map(|w| w.to_string())
                .collect::<Vec<_>>()
                .join("; ");

            if self.config.strict {
                return Err(PokeError::MalformedResponse(details));
            }
            tracing::warn!("Malformed reply for '{}': {}", name, details);
        }

        Ok(decoded.record)
    }

    /// Query every name in order
    ///
    /// Per-request failures are recorded in the summary; any other error
    /// stops the run.
    pub fn run<I, S>(&mut self, names: I) -> Result<RunSummary>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut summary = RunSummary::default();

        for name in names {
            let name = name.as_ref();
            match self.query(name) {
                Ok(record) => summary.records.push(record),
                Err(e) if e.is_skippable() => {
                    tracing::warn!("Skipping '{}': {}", name, e);
                    summary.skipped.push(SkippedName {
                        name: name.to_string(),
                        reason: e,
                    });
                }
                Err(e) => return Err(e),
            }
        }

        Ok(summary)
    }
}

/// Read names from `in_path`, query them over UDP, write lines to `out_path`
pub fn run(config: Config, in_path: &Path, out_path: &Path) -> Result<RunSummary> {
    config.validate()?;

    let names = files::read_names(in_path)?;
    tracing::info!(
        "Querying {} names from {} against {}",
        names.len(),
        in_path.display(),
        config.server_addr
    );

    let transport = UdpTransport::connect(&config)?;
    let mut client = Client::new(transport, config);
    let summary = client.run(&names)?;

    files::write_records(out_path, &summary.records)?;
    tracing::info!(
        "Wrote {} records to {} ({} skipped)",
        summary.records.len(),
        out_path.display(),
        summary.skipped.len()
    );

    Ok(summary)
}
