use crate::ip_address::IpAddress;
use crate::socket::{log_status, SocketStatus};
use sfmedia_common::Time;
use std::io::{self, Read, Write};
use std::net::{Shutdown, SocketAddr, SocketAddrV4, TcpStream};
use std::time::Duration;

/// How long a non-blocking socket waits for a connection when no timeout is given.
pub const NON_BLOCKING_CONNECT_WAIT: Duration = Duration::from_millis(100);

/// The bound on a connection attempt, or `None` to wait indefinitely.
fn connect_wait(blocking: bool, timeout: Time) -> Option<Duration> {
    match Duration::try_from(timeout) {
        Ok(timeout) if !timeout.is_zero() => Some(timeout),
        _ if blocking => None,
        _ => Some(NON_BLOCKING_CONNECT_WAIT),
    }
}

/// A TCP connection.
///
/// Sockets start out blocking. In non-blocking mode, operations that would wait
/// return [`SocketStatus::NotReady`] instead.
#[derive(Debug)]
pub struct TcpSocket {
    stream: Option<TcpStream>,
    blocking: bool,
}

impl Default for TcpSocket {
    fn default() -> Self {
        TcpSocket::new()
    }
}

impl TcpSocket {
    pub fn new() -> TcpSocket {
        TcpSocket {
            stream: None,
            blocking: true,
        }
    }

    pub fn is_blocking(&self) -> bool {
        self.blocking
    }

    pub fn set_blocking(&mut self, blocking: bool) {
        self.blocking = blocking;
        if let Some(stream) = &self.stream {
            if let Err(err) = stream.set_nonblocking(!blocking) {
                tracing::warn!(%err, "failed to change blocking mode");
            }
        }
    }

    /// Connect to `address:port`, closing any previous connection.
    ///
    /// A timeout of zero or less waits for as long as the system allows. A non-blocking socket
    /// given no timeout waits at most [`NON_BLOCKING_CONNECT_WAIT`], and reports
    /// [`SocketStatus::NotReady`] if the attempt runs out of time.
    pub fn connect(&mut self, address: IpAddress, port: u16, timeout: Time) -> SocketStatus {
        self.disconnect();

        let target = SocketAddr::V4(SocketAddrV4::new(address.into(), port));
        let connected = match connect_wait(self.blocking, timeout) {
            Some(wait) => TcpStream::connect_timeout(&target, wait),
            None => TcpStream::connect(target),
        };

        match connected {
            Ok(stream) => {
                self.adopt(stream);
                SocketStatus::Done
            }
            Err(err) if !self.blocking && err.kind() == io::ErrorKind::TimedOut => {
                SocketStatus::NotReady
            }
            Err(err) => log_status("connect", &err),
        }
    }

    pub(crate) fn adopt(&mut self, stream: TcpStream) {
        if let Err(err) = stream.set_nonblocking(!self.blocking) {
            tracing::warn!(%err, "failed to change blocking mode");
        }
        self.stream = Some(stream);
    }

    /// Close the connection. Does nothing when not connected.
    pub fn disconnect(&mut self) {
        if let Some(stream) = self.stream.take() {
            let _ = stream.shutdown(Shutdown::Both);
        }
    }

    pub fn is_connected(&self) -> bool {
        self.stream.is_some()
    }

    /// The local port of the connection, zero when not connected.
    pub fn local_port(&self) -> u16 {
        self.stream
            .as_ref()
            .and_then(|stream| stream.local_addr().ok())
            .map_or(0, |addr| addr.port())
    }

    pub fn remote_address(&self) -> Option<IpAddress> {
        match self.stream.as_ref()?.peer_addr().ok()? {
            SocketAddr::V4(v4) => Some((*v4.ip()).into()),
            SocketAddr::V6(v6) => v6.ip().to_ipv4_mapped().map(IpAddress::from),
        }
    }

    /// The remote port, zero when not connected.
    pub fn remote_port(&self) -> u16 {
        self.stream
            .as_ref()
            .and_then(|stream| stream.peer_addr().ok())
            .map_or(0, |addr| addr.port())
    }

    /// Send all of `data`.
    pub fn send(&mut self, data: &[u8]) -> SocketStatus {
        let (status, sent) = self.send_partial(data);
        if status == SocketStatus::Partial {
            tracing::warn!(
                sent,
                total = data.len(),
                "partial send on a non-blocking socket, use send_partial to resume"
            );
        }
        status
    }

    /// Send as much of `data` as possible, returning the number of bytes sent.
    ///
    /// A non-blocking socket that stops accepting data part way reports
    /// [`SocketStatus::Partial`].
    pub fn send_partial(&mut self, data: &[u8]) -> (SocketStatus, usize) {
        if data.is_empty() {
            tracing::debug!("no data to send");
            return (SocketStatus::Error, 0);
        }

        let Some(stream) = self.stream.as_mut() else {
            return (SocketStatus::Disconnected, 0);
        };

        let mut sent = 0;
        while sent < data.len() {
            match stream.write(&data[sent..]) {
                Ok(0) => return (SocketStatus::Disconnected, sent),
                Ok(count) => sent += count,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => {
                    let status = log_status("send", &err);
                    if status == SocketStatus::NotReady && sent > 0 {
                        return (SocketStatus::Partial, sent);
                    }
                    return (status, sent);
                }
            }
        }

        (SocketStatus::Done, sent)
    }

    /// Receive into `buffer`, returning the number of bytes received.
    ///
    /// An orderly shutdown by the peer reports [`SocketStatus::Disconnected`].
    pub fn receive(&mut self, buffer: &mut [u8]) -> (SocketStatus, usize) {
        if buffer.is_empty() {
            tracing::debug!("receive buffer is empty");
            return (SocketStatus::Error, 0);
        }

        let Some(stream) = self.stream.as_mut() else {
            return (SocketStatus::Disconnected, 0);
        };

        loop {
            match stream.read(buffer) {
                Ok(0) => return (SocketStatus::Disconnected, 0),
                Ok(count) => return (SocketStatus::Done, count),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return (log_status("receive", &err), 0),
            }
        }
    }
}

impl Drop for TcpSocket {
    fn drop(&mut self) {
        self.disconnect();
    }
}
