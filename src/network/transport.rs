//! Datagram transport
//!
//! The client only needs blocking send/receive against one peer.

use std::io::{self, ErrorKind};
use std::net::{SocketAddr, ToSocketAddrs, UdpSocket};
use std::time::Duration;

use crate::config::Config;
use crate::error::{PokeError, Result};

/// Blocking datagram exchange with a single server
pub trait Transport {
    /// Send one datagram to the server
    fn send(&mut self, payload: &[u8]) -> Result<()>;

    /// Block until one datagram arrives, returning its length
    ///
    /// A reply that does not arrive in time yields an `Io` error of kind
    /// `TimedOut`.
    fn receive(&mut self, buf: &mut [u8]) -> Result<usize>;

    /// Drop every datagram already queued, returning how many were dropped
    fn discard_pending(&mut self) -> Result<usize>;
}

/// UDP socket bound locally and aimed at one server
pub struct UdpTransport {
    socket: UdpSocket,
    server: SocketAddr,

    /// Scratch space for discarded datagrams
    drain_buf: Vec<u8>,
}

impl UdpTransport {
    /// Bind the local socket and resolve the server address
    pub fn connect(config: &Config) -> Result<Self> {
        let server = resolve(&config.server_addr)?;
        let socket = UdpSocket::bind(&config.bind_addr)?;

        if config.recv_timeout_ms > 0 {
            socket.set_read_timeout(Some(Duration::from_millis(config.recv_timeout_ms)))?;
        }

        tracing::debug!(
            "Bound {} for server {}",
            socket
                .local_addr()
                .map(|a| a.to_string())
                .unwrap_or_else(|_| "unknown".to_string()),
            server
        );

        Ok(Self {
            socket,
            server,
            drain_buf: vec![0u8; config.max_datagram_size],
        })
    }

    /// Server the transport talks to
    pub fn server(&self) -> SocketAddr {
        self.server
    }

    /// Local address of the bound socket
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.socket.local_addr()?)
    }

    fn drain(&mut self) -> io::Result<usize> {
        let mut dropped = 0;
        loop {
            match self.socket.recv_from(&mut self.drain_buf) {
                Ok((len, from)) => {
                    tracing::debug!("Discarding {} queued bytes from {}", len, from);
                    dropped += 1;
                }
                Err(ref e) if e.kind() == ErrorKind::WouldBlock => return Ok(dropped),
                // ICMP errors from an earlier send surface here on some platforms
                Err(ref e) if e.kind() == ErrorKind::ConnectionReset => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

impl Transport for UdpTransport {
    fn send(&mut self, payload: &[u8]) -> Result<()> {
        let sent = self.socket.send_to(payload, self.server)?;
        if sent != payload.len() {
            return Err(PokeError::Network(format!(
                "Short send to {}: {} of {} bytes",
                self.server,
                sent,
                payload.len()
            )));
        }
        tracing::trace!("Sent {} bytes to {}", sent, self.server);
        Ok(())
    }

    fn receive(&mut self, buf: &mut [u8]) -> Result<usize> {
        loop {
            match self.socket.recv_from(buf) {
                Ok((len, from)) if from == self.server => {
                    tracing::trace!("Received {} bytes from {}", len, from);
                    return Ok(len);
                }
                Ok((len, from)) => {
                    tracing::debug!("Dropping {} bytes from unexpected peer {}", len, from);
                }
                // Unix reports an expired read timeout as WouldBlock, Windows as TimedOut
                Err(ref e) if matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut) => {
                    return Err(io::Error::new(ErrorKind::TimedOut, "receive timed out").into());
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn discard_pending(&mut self) -> Result<usize> {
        self.socket.set_nonblocking(true)?;
        let drained = self.drain();
        // The read timeout set at connect survives the mode switch
        self.socket.set_nonblocking(false)?;
        Ok(drained?)
    }
}

/// Resolve `host:port` to the first address it names
fn resolve(addr: &str) -> Result<SocketAddr> {
    addr.to_socket_addrs()?
        .next()
        .ok_or_else(|| PokeError::Network(format!("Address '{}' did not resolve", addr)))
}
