use crate::ip_address::IpAddress;
use crate::socket::{log_status, SocketStatus};
use std::io;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

/// A connectionless UDP socket.
///
/// Sending on an unbound socket binds it to an ephemeral port first.
#[derive(Debug)]
pub struct UdpSocket {
    socket: Option<std::net::UdpSocket>,
    blocking: bool,
}

impl Default for UdpSocket {
    fn default() -> Self {
        UdpSocket::new()
    }
}

impl UdpSocket {
    /// The largest payload a single IPv4 datagram can carry.
    pub const MAX_DATAGRAM_SIZE: usize = 65507;

    pub fn new() -> UdpSocket {
        UdpSocket {
            socket: None,
            blocking: true,
        }
    }

    pub fn is_blocking(&self) -> bool {
        self.blocking
    }

    pub fn set_blocking(&mut self, blocking: bool) {
        self.blocking = blocking;
        if let Some(socket) = &self.socket {
            if let Err(err) = socket.set_nonblocking(!blocking) {
                tracing::warn!(%err, "failed to change blocking mode");
            }
        }
    }

    /// Bind to `address:port`. Port zero picks a free port.
    pub fn bind(&mut self, port: u16, address: IpAddress) -> SocketStatus {
        self.unbind();

        if address == IpAddress::BROADCAST {
            tracing::debug!("cannot bind to the broadcast address");
            return SocketStatus::Error;
        }

        match self.open(port, address) {
            Ok(()) => SocketStatus::Done,
            Err(err) => log_status("bind", &err),
        }
    }

    fn open(&mut self, port: u16, address: IpAddress) -> io::Result<()> {
        let socket = std::net::UdpSocket::bind(SocketAddrV4::new(address.into(), port))?;
        socket.set_broadcast(true)?;
        socket.set_nonblocking(!self.blocking)?;
        self.socket = Some(socket);
        Ok(())
    }

    pub fn unbind(&mut self) {
        self.socket = None;
    }

    /// The bound port, zero when unbound.
    pub fn local_port(&self) -> u16 {
        self.socket
            .as_ref()
            .and_then(|socket| socket.local_addr().ok())
            .map_or(0, |addr| addr.port())
    }

    /// Send one datagram to `address:port`.
    pub fn send(&mut self, data: &[u8], address: IpAddress, port: u16) -> SocketStatus {
        if data.len() > Self::MAX_DATAGRAM_SIZE {
            tracing::debug!(
                size = data.len(),
                max = Self::MAX_DATAGRAM_SIZE,
                "datagram too large"
            );
            return SocketStatus::Error;
        }

        if self.socket.is_none() {
            if let Err(err) = self.open(0, IpAddress::ANY) {
                return log_status("bind", &err);
            }
        }

        let Some(socket) = &self.socket else {
            return SocketStatus::Error;
        };

        match socket.send_to(data, SocketAddrV4::new(Ipv4Addr::from(address), port)) {
            Ok(_) => SocketStatus::Done,
            Err(err) => log_status("send", &err),
        }
    }

    /// Receive one datagram into `buffer`.
    ///
    /// Returns the status, the number of bytes received and the sender's address and
    /// port. Datagrams larger than `buffer` are truncated.
    pub fn receive(&mut self, buffer: &mut [u8]) -> (SocketStatus, usize, Option<IpAddress>, u16) {
        if buffer.is_empty() {
            tracing::debug!("receive buffer is empty");
            return (SocketStatus::Error, 0, None, 0);
        }

        let Some(socket) = &self.socket else {
            tracing::debug!("receive called on an unbound socket");
            return (SocketStatus::Error, 0, None, 0);
        };

        match socket.recv_from(buffer) {
            Ok((count, SocketAddr::V4(sender))) => {
                (SocketStatus::Done, count, Some((*sender.ip()).into()), sender.port())
            }
            Ok((count, SocketAddr::V6(sender))) => (
                SocketStatus::Done,
                count,
                sender.ip().to_ipv4_mapped().map(IpAddress::from),
                sender.port(),
            ),
            Err(err) => (log_status("receive", &err), 0, None, 0),
        }
    }
}
