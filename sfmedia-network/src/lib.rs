//! Networking for sfmedia: IPv4 addresses and blocking or non-blocking TCP and UDP
//! sockets built on `std::net`.
//!
//! Operations report a [`SocketStatus`] instead of an error value so that
//! non-blocking progress (`NotReady`, `Partial`) is an ordinary outcome.

/// IPv4 addresses and name resolution.
pub mod ip_address;
/// Socket operation outcomes.
pub mod socket;
/// HTTP and FTP response codes.
pub mod status;
/// Listening TCP sockets.
pub mod tcp_listener;
/// Connected TCP sockets.
pub mod tcp_socket;
/// UDP sockets.
pub mod udp_socket;

pub use ip_address::IpAddress;
pub use socket::{status_from_io, SocketStatus};
pub use status::{FtpStatus, HttpStatus};
pub use tcp_listener::TcpListener;
pub use tcp_socket::{TcpSocket, NON_BLOCKING_CONNECT_WAIT};
pub use udp_socket::UdpSocket;
