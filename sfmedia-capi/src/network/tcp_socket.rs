use crate::ctypes::sfTime;
use crate::error::assert_non_null;
use crate::ffi::extern_fn;
use crate::handle::{handle_lifecycle, into_handle};
use crate::network::ip_address::sfIpAddress;
use crate::network::socket_status::sfSocketStatus;
use sfmedia::network::{IpAddress, TcpSocket};
use std::ffi::c_void;

/// A TCP connection.
#[derive(Debug)]
pub struct sfTcpSocket {
    pub(crate) socket: TcpSocket,
}

extern_fn! {
    /// Create a blocking socket that is not connected.
    fn sfTcpSocket_create() -> *mut sfTcpSocket {
        into_handle(sfTcpSocket {
            socket: TcpSocket::new(),
        })
    }
}

handle_lifecycle!(@destroy sfTcpSocket);

extern_fn! {
    /// ## Safety
    /// `socket` must be null or valid.
    fn sfTcpSocket_setBlocking(socket: *mut sfTcpSocket, blocking: bool) mut |socket| {
        socket.socket.set_blocking(blocking);
    }
}

extern_fn! {
    /// ## Safety
    /// `socket` must be null or valid.
    fn sfTcpSocket_isBlocking(socket: *const sfTcpSocket) |socket| -> bool {
        socket.socket.is_blocking()
    }
}

extern_fn! {
    /// The local port of the connection, or 0 when not connected.
    ///
    /// ## Safety
    /// `socket` must be null or valid.
    fn sfTcpSocket_getLocalPort(socket: *const sfTcpSocket) |socket| -> u16 {
        socket.socket.local_port()
    }
}

extern_fn! {
    /// The address of the peer, or `sfIpAddress_None` when not connected.
    ///
    /// ## Safety
    /// `socket` must be null or valid.
    fn sfTcpSocket_getRemoteAddress(socket: *const sfTcpSocket) |socket| -> sfIpAddress {
        socket.socket.remote_address().into()
    }
}

extern_fn! {
    /// The port of the peer, or 0 when not connected.
    ///
    /// ## Safety
    /// `socket` must be null or valid.
    fn sfTcpSocket_getRemotePort(socket: *const sfTcpSocket) |socket| -> u16 {
        socket.socket.remote_port()
    }
}

extern_fn! {
    /// Connect to `remoteAddress:remotePort`, closing any previous connection.
    ///
    /// A `timeout` of zero waits for as long as the system allows. A non-blocking socket given a
    /// zero `timeout` waits briefly instead, and returns `sfSocketNotReady` if that runs out.
    ///
    /// ## Safety
    /// `socket` must be null or valid.
    fn sfTcpSocket_connect(socket: *mut sfTcpSocket, remote_address: sfIpAddress, remote_port: u16, timeout: sfTime) mut |socket| -> sfSocketStatus {
        let Some(remote_address) = Option::<IpAddress>::from(remote_address) else {
            tracing::warn!("cannot connect to an invalid address");
            return sfSocketStatus::sfSocketError;
        };
        socket.socket.connect(remote_address, remote_port, timeout.into()).into()
    }
}

extern_fn! {
    /// Close the connection. Does nothing when not connected.
    ///
    /// ## Safety
    /// `socket` must be null or valid.
    fn sfTcpSocket_disconnect(socket: *mut sfTcpSocket) mut |socket| {
        socket.socket.disconnect();
    }
}

extern_fn! {
    /// Send all `size` bytes of `data`.
    ///
    /// A non-blocking socket may report `sfSocketPartial`; use `sfTcpSocket_sendPartial` to learn
    /// how much was sent.
    ///
    /// ## Safety
    /// `socket` must be null or valid. `data` must be null or valid for reads of `size` bytes.
    fn sfTcpSocket_send(socket: *mut sfTcpSocket, data: *const c_void, size: usize) mut |socket| -> sfSocketStatus {
        assert_non_null!(data);
        let data = unsafe { std::slice::from_raw_parts(data.cast::<u8>(), size) };
        socket.socket.send(data).into()
    }
}

extern_fn! {
    /// Send as much of `data` as possible. The number of bytes sent is written to `sent`.
    ///
    /// ## Safety
    /// `socket` must be null or valid. `data` must be null or valid for reads of `size` bytes.
    /// `sent` must be null or valid for writes.
    fn sfTcpSocket_sendPartial(socket: *mut sfTcpSocket, data: *const c_void, size: usize, sent: *mut usize) mut |socket| -> sfSocketStatus {
        assert_non_null!(data);
        let data = unsafe { std::slice::from_raw_parts(data.cast::<u8>(), size) };
        let (status, count) = socket.socket.send_partial(data);
        if let Some(sent) = unsafe { sent.as_mut() } {
            *sent = count;
        }
        status.into()
    }
}

extern_fn! {
    /// Receive up to `size` bytes into `data`. The number of bytes received is written to
    /// `received`.
    ///
    /// ## Safety
    /// `socket` must be null or valid. `data` must be null or valid for writes of `size` bytes.
    /// `received` must be null or valid for writes.
    fn sfTcpSocket_receive(socket: *mut sfTcpSocket, data: *mut c_void, size: usize, received: *mut usize) mut |socket| -> sfSocketStatus {
        if let Some(received) = unsafe { received.as_mut() } {
            *received = 0;
        }
        assert_non_null!(data);
        let data = unsafe { std::slice::from_raw_parts_mut(data.cast::<u8>(), size) };
        let (status, count) = socket.socket.receive(data);
        if let Some(received) = unsafe { received.as_mut() } {
            *received = count;
        }
        status.into()
    }
}
