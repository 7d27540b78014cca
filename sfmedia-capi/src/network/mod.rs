//! Network handles: IPv4 addresses, TCP and UDP sockets, and status codes.

pub mod ip_address;
pub mod socket_status;
pub mod status;
pub mod tcp_listener;
pub mod tcp_socket;
pub mod udp_socket;
