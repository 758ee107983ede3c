//! Protocol Module
//!
//! Defines the datagram protocol spoken with the Pokemon service.
//!
//! ## Request Format
//! ```text
//! ┌──────────┬─────────────────────────────┐
//! │ Len (4)  │     Name (Len bytes)        │
//! └──────────┴─────────────────────────────┘
//! ```
//! `Len` is a big-endian i32, at most 1020.
//!
//! ## Response Format
//! A flat sequence of segments with no outer length:
//! ```text
//! ┌──────────────┬──────┬──────────────────────────┐
//! │ UTF-8 text   │ 0x00 │ Value (4, i32 BE)        │
//! └──────────────┴──────┴──────────────────────────┘
//! ```
//! The value is present only when the text is not the requested name.
//! A segment whose text equals the requested name is the name echo; any
//! other segment is an attribute key. If the service ever sends a key equal
//! to the requested name, the next four bytes are scanned as text. That is
//! how the service's own clients read it, so the decoder does the same.

mod record;
mod request;
mod response;

pub use record::EntityRecord;
pub use request::{
    decode_request_frame, encode, encode_into, encode_with_limit, LENGTH_PREFIX_SIZE,
    MAX_NAME_LEN, MAX_REQUEST_SIZE,
};
pub use response::{
    decode, leading_segment, DecodeWarning, DecodedResponse, ResponseCursor, DELIMITER, VALUE_SIZE,
};
