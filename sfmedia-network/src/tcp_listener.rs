use crate::ip_address::IpAddress;
use crate::socket::{log_status, SocketStatus};
use crate::tcp_socket::TcpSocket;
use std::net::{Ipv4Addr, SocketAddrV4};

/// A socket that listens for incoming TCP connections.
#[derive(Debug)]
pub struct TcpListener {
    listener: Option<std::net::TcpListener>,
    blocking: bool,
}

impl Default for TcpListener {
    fn default() -> Self {
        TcpListener::new()
    }
}

impl TcpListener {
    pub fn new() -> TcpListener {
        TcpListener {
            listener: None,
            blocking: true,
        }
    }

    pub fn is_blocking(&self) -> bool {
        self.blocking
    }

    pub fn set_blocking(&mut self, blocking: bool) {
        self.blocking = blocking;
        if let Some(listener) = &self.listener {
            if let Err(err) = listener.set_nonblocking(!blocking) {
                tracing::warn!(%err, "failed to change blocking mode");
            }
        }
    }

    /// Start listening on `address:port`. Port zero picks a free port.
    pub fn listen(&mut self, port: u16, address: IpAddress) -> SocketStatus {
        self.close();

        if address == IpAddress::BROADCAST {
            tracing::debug!("cannot listen on the broadcast address");
            return SocketStatus::Error;
        }

        let bound = std::net::TcpListener::bind(SocketAddrV4::new(Ipv4Addr::from(address), port));
        match bound {
            Ok(listener) => {
                if let Err(err) = listener.set_nonblocking(!self.blocking) {
                    tracing::warn!(%err, "failed to change blocking mode");
                }
                self.listener = Some(listener);
                SocketStatus::Done
            }
            Err(err) => log_status("listen", &err),
        }
    }

    /// Accept one pending connection into `socket`, replacing whatever it was connected to.
    pub fn accept(&mut self, socket: &mut TcpSocket) -> SocketStatus {
        let Some(listener) = &self.listener else {
            tracing::debug!("accept called on a listener that is not listening");
            return SocketStatus::Error;
        };

        match listener.accept() {
            Ok((stream, _)) => {
                socket.disconnect();
                socket.adopt(stream);
                SocketStatus::Done
            }
            Err(err) => log_status("accept", &err),
        }
    }

    pub fn close(&mut self) {
        self.listener = None;
    }

    /// The port being listened on, zero when not listening.
    pub fn local_port(&self) -> u16 {
        self.listener
            .as_ref()
            .and_then(|listener| listener.local_addr().ok())
            .map_or(0, |addr| addr.port())
    }
}
