//! Response decoding
//!
//! Scans a reply datagram byte by byte and rebuilds the entity record.
//!
//! ## Scan
//! - Non-delimiter bytes accumulate into the current text segment.
//! - On `0x00` the segment is decoded as UTF-8:
//!   - equal to the requested name: name echo, nothing else is read
//!   - otherwise: attribute key, followed by a 4-byte big-endian i32
//! - Leftover text at the end of the payload is reported, not decoded.

use std::collections::BTreeMap;
use std::fmt;

use super::EntityRecord;
use crate::error::{PokeError, Result};

/// Segment terminator
pub const DELIMITER: u8 = 0x00;

/// Attribute value: 4 bytes, big-endian i32
pub const VALUE_SIZE: usize = 4;

// =============================================================================
// Cursor
// =============================================================================

/// Bounds-checked read position over an immutable payload
#[derive(Debug, Clone)]
pub struct ResponseCursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> ResponseCursor<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Number of bytes consumed so far
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of bytes not yet consumed
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    /// Consume one byte
    pub fn next_byte(&mut self) -> Option<u8> {
        let byte = *self.bytes.get(self.pos)?;
        self.pos += 1;
        Some(byte)
    }

    /// Consume a big-endian i32
    ///
    /// Returns `None` without moving when fewer than 4 bytes remain.
    pub fn read_i32(&mut self) -> Option<i32> {
        let end = self.pos.checked_add(VALUE_SIZE)?;
        let raw: [u8; VALUE_SIZE] = self.bytes.get(self.pos..end)?.try_into().ok()?;
        self.pos = end;
        Some(i32::from_be_bytes(raw))
    }

    /// Consume everything that is left, returning how many bytes that was
    pub fn skip_remaining(&mut self) -> usize {
        let skipped = self.remaining();
        self.pos = self.bytes.len();
        skipped
    }
}

// =============================================================================
// Decoded Output
// =============================================================================

/// A reply that decoded, possibly with recoverable problems
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedResponse {
    /// The rebuilt record
    pub record: EntityRecord,

    /// Problems found while scanning; the record holds whatever came before
    pub warnings: Vec<DecodeWarning>,

    /// Bytes consumed from the payload
    pub consumed: usize,
}

impl DecodedResponse {
    /// True when the payload was well-formed
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Recoverable decode problems
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeWarning {
    /// Text at the end of the payload with no terminating delimiter
    TrailingSegment { len: usize },

    /// An attribute key whose value is cut short by the end of the payload
    TruncatedValue { key: String, available: usize },
}

impl fmt::Display for DecodeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeWarning::TrailingSegment { len } => {
                write!(f, "{} trailing bytes without delimiter", len)
            }
            DecodeWarning::TruncatedValue { key, available } => write!(
                f,
                "value of '{}' truncated: {} of {} bytes",
                key, available, VALUE_SIZE
            ),
        }
    }
}

// =============================================================================
// Decoding
// =============================================================================

/// Text of the first delimiter-terminated segment, if it is valid UTF-8
pub fn leading_segment(payload: &[u8]) -> Option<&str> {
    let end = payload.iter().position(|&b| b == DELIMITER)?;
    std::str::from_utf8(&payload[..end]).ok()
}

/// Decode a reply to a request for `requested`
///
/// Invalid UTF-8 in any segment fails the whole reply. Truncation does not:
/// the attributes read before it are kept and a warning is attached.
pub fn decode(payload: &[u8], requested: &str) -> Result<DecodedResponse> {
    let mut cursor = ResponseCursor::new(payload);
    let mut text: Vec<u8> = Vec::new();
    let mut segment_start = 0;
    let mut echoed: Option<String> = None;
    let mut attributes = BTreeMap::new();
    let mut warnings = Vec::new();

    while let Some(byte) = cursor.next_byte() {
        if byte != DELIMITER {
            text.push(byte);
            continue;
        }

        let segment = std::str::from_utf8(&text).map_err(|source| PokeError::Decode {
            segment: segment_start,
            source,
        })?;

        if segment == requested {
            echoed = Some(segment.to_owned());
        } else {
            match cursor.read_i32() {
                Some(value) => {
                    attributes.insert(segment.to_owned(), value);
                }
                None => {
                    let available = cursor.skip_remaining();
                    warnings.push(DecodeWarning::TruncatedValue {
                        key: segment.to_owned(),
                        available,
                    });
                }
            }
        }

        text.clear();
        segment_start = cursor.position();
    }

    if !text.is_empty() {
        warnings.push(DecodeWarning::TrailingSegment { len: text.len() });
    }

    let name = echoed.unwrap_or_else(|| requested.to_owned());
    let record = EntityRecord::new(name, attributes)?;

    Ok(DecodedResponse {
        record,
        warnings,
        consumed: cursor.position(),
    })
}
