//! Transport Tests
//!
//! These tests verify:
//! - Binding and address resolution
//! - Receive timeout reporting
//! - Dropping queued datagrams
//! - Ignoring datagrams from other peers

use std::io::ErrorKind;
use std::net::UdpSocket;
use std::thread;
use std::time::Duration;

use pokeclient::network::{Transport, UdpTransport};
use pokeclient::{Config, PokeError};

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_pair(timeout_ms: u64) -> (UdpSocket, UdpTransport) {
    let server = UdpSocket::bind("127.0.0.1:0").unwrap();
    let config = Config::builder()
        .server_addr(server.local_addr().unwrap().to_string())
        .bind_addr("127.0.0.1:0")
        .recv_timeout_ms(timeout_ms)
        .build();
    let transport = UdpTransport::connect(&config).unwrap();
    (server, transport)
}

// =============================================================================
// Connect Tests
// =============================================================================

#[test]
fn test_connect_resolves_server() {
    let (server, transport) = setup_pair(100);

    assert_eq!(transport.server(), server.local_addr().unwrap());
    assert_ne!(transport.local_addr().unwrap().port(), 0);
}

#[test]
fn test_connect_unresolvable_address() {
    let config = Config::builder().server_addr("not an address").build();
    assert!(UdpTransport::connect(&config).is_err());
}

// =============================================================================
// Send / Receive Tests
// =============================================================================

#[test]
fn test_send_and_receive() {
    let (server, mut transport) = setup_pair(1000);

    transport.send(b"\x00\x00\x00\x03Mew").unwrap();
    let mut buf = [0u8; 64];
    let (len, from) = server.recv_from(&mut buf).unwrap();
    assert_eq!(&buf[..len], b"\x00\x00\x00\x03Mew");

    server.send_to(b"Mew\0", from).unwrap();
    let len = transport.receive(&mut buf).unwrap();
    assert_eq!(&buf[..len], b"Mew\0");
}

#[test]
fn test_receive_times_out() {
    let (_server, mut transport) = setup_pair(50);

    let mut buf = [0u8; 16];
    match transport.receive(&mut buf) {
        Err(PokeError::Io(e)) => assert_eq!(e.kind(), ErrorKind::TimedOut),
        other => panic!("Expected timed out Io error, got {:?}", other),
    }
}

#[test]
fn test_receive_ignores_other_peers() {
    let (server, mut transport) = setup_pair(1000);
    let stranger = UdpSocket::bind("127.0.0.1:0").unwrap();
    let client_addr = transport.local_addr().unwrap();

    stranger.send_to(b"noise\0", client_addr).unwrap();
    thread::sleep(Duration::from_millis(20));
    server.send_to(b"Mew\0", client_addr).unwrap();

    let mut buf = [0u8; 64];
    let len = transport.receive(&mut buf).unwrap();
    assert_eq!(&buf[..len], b"Mew\0");
}

// =============================================================================
// Discard Tests
// =============================================================================

#[test]
fn test_discard_pending_drops_queued_datagrams() {
    let (server, mut transport) = setup_pair(100);
    let client_addr = transport.local_addr().unwrap();

    server.send_to(b"Pikachu\0", client_addr).unwrap();
    server.send_to(b"Pikachu\0", client_addr).unwrap();
    thread::sleep(Duration::from_millis(50));

    assert_eq!(transport.discard_pending().unwrap(), 2);

    // Nothing left, and the read timeout still applies
    let mut buf = [0u8; 64];
    assert!(transport.receive(&mut buf).is_err());
}

#[test]
fn test_discard_pending_on_empty_socket() {
    let (server, mut transport) = setup_pair(1000);
    assert_eq!(transport.discard_pending().unwrap(), 0);

    // Socket is blocking again afterwards
    let client_addr = transport.local_addr().unwrap();
    let sender = thread::spawn(move || {
        thread::sleep(Duration::from_millis(50));
        server.send_to(b"Mew\0", client_addr).unwrap();
    });

    let mut buf = [0u8; 64];
    let len = transport.receive(&mut buf).unwrap();
    assert_eq!(&buf[..len], b"Mew\0");
    sender.join().unwrap();
}
