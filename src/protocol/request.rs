//! Request encoding
//!
//! Frames an entity name as `len (i32 BE) + UTF-8 bytes`.

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{PokeError, Result};

/// Length prefix: 4 bytes, big-endian i32
pub const LENGTH_PREFIX_SIZE: usize = 4;

/// Maximum UTF-8 byte length of a name
pub const MAX_NAME_LEN: usize = 1020;

/// Largest request datagram
pub const MAX_REQUEST_SIZE: usize = LENGTH_PREFIX_SIZE + MAX_NAME_LEN;

/// Encode a name into a fresh request frame
pub fn encode(name: &str) -> Result<Bytes> {
    encode_with_limit(name, MAX_NAME_LEN)
}

/// Encode a name, rejecting names longer than `max_len` bytes
pub fn encode_with_limit(name: &str, max_len: usize) -> Result<Bytes> {
    let mut buf = BytesMut::with_capacity(LENGTH_PREFIX_SIZE + name.len().min(max_len));
    encode_into(name, &mut buf, max_len)?;
    Ok(buf.freeze())
}

/// Encode a name into a reusable buffer
///
/// The buffer is cleared first, so nothing from a previous frame survives.
/// On error it is left empty.
pub fn encode_into(name: &str, buf: &mut BytesMut, max_len: usize) -> Result<()> {
    buf.clear();

    if name.is_empty() {
        return Err(PokeError::EmptyName);
    }

    let encoded = name.as_bytes();
    if encoded.len() > max_len.min(MAX_NAME_LEN) {
        return Err(PokeError::NameTooLong {
            len: encoded.len(),
            max: max_len.min(MAX_NAME_LEN),
        });
    }

    buf.reserve(LENGTH_PREFIX_SIZE + encoded.len());
    buf.put_i32(encoded.len() as i32);
    buf.put_slice(encoded);

    Ok(())
}

/// Decode a request frame back into the name it carries
///
/// The frame must be exactly one prefix plus the announced number of bytes.
pub fn decode_request_frame(bytes: &[u8]) -> Result<String> {
    if bytes.len() < LENGTH_PREFIX_SIZE {
        return Err(PokeError::Protocol(format!(
            "Incomplete request header: expected {} bytes, got {}",
            LENGTH_PREFIX_SIZE,
            bytes.len()
        )));
    }

    let len = i32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    if len < 0 || len as usize > MAX_NAME_LEN {
        return Err(PokeError::Protocol(format!(
            "Invalid name length: {} (max {})",
            len, MAX_NAME_LEN
        )));
    }

    let len = len as usize;
    let body = &bytes[LENGTH_PREFIX_SIZE..];
    if body.len() != len {
        return Err(PokeError::Protocol(format!(
            "Name length mismatch: header says {}, frame carries {}",
            len,
            body.len()
        )));
    }

    std::str::from_utf8(body)
        .map(str::to_owned)
        .map_err(|source| PokeError::Decode {
            segment: LENGTH_PREFIX_SIZE,
            source,
        })
}
