use crate::error::assert_non_null;
use crate::ffi::extern_fn;
use crate::handle::{handle_lifecycle, into_handle};
use crate::network::ip_address::sfIpAddress;
use crate::network::socket_status::sfSocketStatus;
use sfmedia::network::{IpAddress, UdpSocket};
use std::ffi::c_void;

/// A connectionless UDP socket.
#[derive(Debug)]
pub struct sfUdpSocket {
    socket: UdpSocket,
}

extern_fn! {
    /// Create a blocking socket that is not bound.
    fn sfUdpSocket_create() -> *mut sfUdpSocket {
        into_handle(sfUdpSocket {
            socket: UdpSocket::new(),
        })
    }
}

handle_lifecycle!(@destroy sfUdpSocket);

extern_fn! {
    /// ## Safety
    /// `socket` must be null or valid.
    fn sfUdpSocket_setBlocking(socket: *mut sfUdpSocket, blocking: bool) mut |socket| {
        socket.socket.set_blocking(blocking);
    }
}

extern_fn! {
    /// ## Safety
    /// `socket` must be null or valid.
    fn sfUdpSocket_isBlocking(socket: *const sfUdpSocket) |socket| -> bool {
        socket.socket.is_blocking()
    }
}

extern_fn! {
    /// The bound port, or 0 when unbound.
    ///
    /// ## Safety
    /// `socket` must be null or valid.
    fn sfUdpSocket_getLocalPort(socket: *const sfUdpSocket) |socket| -> u16 {
        socket.socket.local_port()
    }
}

extern_fn! {
    /// Bind to `address:port`. Port 0 picks a free port.
    ///
    /// ## Safety
    /// `socket` must be null or valid.
    fn sfUdpSocket_bind(socket: *mut sfUdpSocket, port: u16, address: sfIpAddress) mut |socket| -> sfSocketStatus {
        let Some(address) = Option::<IpAddress>::from(address) else {
            tracing::warn!("cannot bind to an invalid address");
            return sfSocketStatus::sfSocketError;
        };
        socket.socket.bind(port, address).into()
    }
}

extern_fn! {
    /// ## Safety
    /// `socket` must be null or valid.
    fn sfUdpSocket_unbind(socket: *mut sfUdpSocket) mut |socket| {
        socket.socket.unbind();
    }
}

extern_fn! {
    /// Send one datagram of `size` bytes to `remoteAddress:remotePort`.
    ///
    /// Datagrams larger than `sfUdpSocket_maxDatagramSize()` are rejected.
    ///
    /// ## Safety
    /// `socket` must be null or valid. `data` must be null or valid for reads of `size` bytes.
    fn sfUdpSocket_send(
        socket: *mut sfUdpSocket,
        data: *const c_void,
        size: usize,
        remote_address: sfIpAddress,
        remote_port: u16
    ) mut |socket| -> sfSocketStatus {
        assert_non_null!(data);
        let Some(remote_address) = Option::<IpAddress>::from(remote_address) else {
            tracing::warn!("cannot send to an invalid address");
            return sfSocketStatus::sfSocketError;
        };
        let data = unsafe { std::slice::from_raw_parts(data.cast::<u8>(), size) };
        socket.socket.send(data, remote_address, remote_port).into()
    }
}

extern_fn! {
    /// Receive one datagram into `data`. Datagrams larger than `size` are truncated.
    ///
    /// The byte count, sender address and sender port are written to the out parameters that
    /// are not null.
    ///
    /// ## Safety
    /// `socket` must be null or valid. `data` must be null or valid for writes of `size` bytes.
    /// Each out parameter must be null or valid for writes.
    fn sfUdpSocket_receive(
        socket: *mut sfUdpSocket,
        data: *mut c_void,
        size: usize,
        received: *mut usize,
        remote_address: *mut sfIpAddress,
        remote_port: *mut u16
    ) mut |socket| -> sfSocketStatus {
        assert_non_null!(data);
        let data = unsafe { std::slice::from_raw_parts_mut(data.cast::<u8>(), size) };
        let (status, count, sender, port) = socket.socket.receive(data);
        unsafe {
            if let Some(received) = received.as_mut() {
                *received = count;
            }
            if let Some(remote_address) = remote_address.as_mut() {
                *remote_address = sender.into();
            }
            if let Some(remote_port) = remote_port.as_mut() {
                *remote_port = port;
            }
        }
        status.into()
    }
}

extern_fn! {
    /// The largest payload a single datagram can carry.
    fn sfUdpSocket_maxDatagramSize() -> u32 {
        UdpSocket::MAX_DATAGRAM_SIZE as u32
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::network::ip_address::{sfIpAddress_Broadcast, sfIpAddress_LocalHost, sfIpAddress_None};

    #[test]
    fn datagrams_over_loopback() {
        unsafe {
            let sender = sfUdpSocket_create();
            let receiver = sfUdpSocket_create();
            assert_eq!(
                sfSocketStatus::sfSocketDone,
                sfUdpSocket_bind(sender, 0, sfIpAddress_LocalHost)
            );
            assert_eq!(
                sfSocketStatus::sfSocketDone,
                sfUdpSocket_bind(receiver, 0, sfIpAddress_LocalHost)
            );
            let port = sfUdpSocket_getLocalPort(receiver);

            let message = b"ping";
            assert_eq!(
                sfSocketStatus::sfSocketDone,
                sfUdpSocket_send(sender, message.as_ptr().cast(), message.len(), sfIpAddress_LocalHost, port)
            );

            let mut buffer = [0u8; 16];
            let mut received = 0;
            let mut address = sfIpAddress_None;
            let mut from = 0;
            assert_eq!(
                sfSocketStatus::sfSocketDone,
                sfUdpSocket_receive(
                    receiver,
                    buffer.as_mut_ptr().cast(),
                    buffer.len(),
                    &mut received,
                    &mut address,
                    &mut from
                )
            );
            assert_eq!(b"ping", &buffer[..received]);
            assert_eq!(sfIpAddress_LocalHost, address);
            assert_eq!(sfUdpSocket_getLocalPort(sender), from);

            sfUdpSocket_setBlocking(receiver, false);
            assert_eq!(
                sfSocketStatus::sfSocketNotReady,
                sfUdpSocket_receive(
                    receiver,
                    buffer.as_mut_ptr().cast(),
                    buffer.len(),
                    std::ptr::null_mut(),
                    std::ptr::null_mut(),
                    std::ptr::null_mut()
                )
            );

            sfUdpSocket_unbind(receiver);
            assert_eq!(0, sfUdpSocket_getLocalPort(receiver));
            sfUdpSocket_destroy(sender);
            sfUdpSocket_destroy(receiver);
        }
    }

    #[test]
    fn rejected_calls() {
        unsafe {
            assert_eq!(65507, sfUdpSocket_maxDatagramSize());
            let socket = sfUdpSocket_create();
            assert_eq!(
                sfSocketStatus::sfSocketError,
                sfUdpSocket_bind(socket, 0, sfIpAddress_None)
            );
            assert_eq!(
                sfSocketStatus::sfSocketError,
                sfUdpSocket_bind(socket, 0, sfIpAddress_Broadcast)
            );
            assert_eq!(
                sfSocketStatus::sfSocketError,
                sfUdpSocket_send(socket, b"x".as_ptr().cast(), 1, sfIpAddress_None, 9)
            );
            assert_eq!(
                sfSocketStatus::sfSocketError,
                sfUdpSocket_send(socket, std::ptr::null(), 1, sfIpAddress_LocalHost, 9)
            );
            assert_eq!(
                sfSocketStatus::sfSocketError,
                sfUdpSocket_receive(
                    socket,
                    std::ptr::null_mut(),
                    0,
                    std::ptr::null_mut(),
                    std::ptr::null_mut(),
                    std::ptr::null_mut()
                )
            );
            sfUdpSocket_destroy(socket);
        }
    }
}
