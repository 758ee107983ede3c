//! Network Module
//!
//! Datagram transport used by the client.
//!
//! ## Model
//! - One socket, one server
//! - Blocking send, blocking receive with an optional timeout
//! - No retransmission: a lost datagram surfaces as a timeout

mod transport;

pub use transport::{Transport, UdpTransport};
