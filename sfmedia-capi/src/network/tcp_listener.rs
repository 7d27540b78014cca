use crate::error::assert_non_null;
use crate::ffi::extern_fn;
use crate::handle::{handle_lifecycle, into_handle};
use crate::network::ip_address::sfIpAddress;
use crate::network::socket_status::sfSocketStatus;
use crate::network::tcp_socket::sfTcpSocket;
use sfmedia::network::{IpAddress, SocketStatus, TcpListener, TcpSocket};

/// A socket listening for TCP connections.
#[derive(Debug)]
pub struct sfTcpListener {
    listener: TcpListener,
}

extern_fn! {
    /// Create a blocking listener that is not listening yet.
    fn sfTcpListener_create() -> *mut sfTcpListener {
        into_handle(sfTcpListener {
            listener: TcpListener::new(),
        })
    }
}

handle_lifecycle!(@destroy sfTcpListener);

extern_fn! {
    /// ## Safety
    /// `listener` must be null or valid.
    fn sfTcpListener_setBlocking(listener: *mut sfTcpListener, blocking: bool) mut |listener| {
        listener.listener.set_blocking(blocking);
    }
}

extern_fn! {
    /// ## Safety
    /// `listener` must be null or valid.
    fn sfTcpListener_isBlocking(listener: *const sfTcpListener) |listener| -> bool {
        listener.listener.is_blocking()
    }
}

extern_fn! {
    /// The port being listened on, or 0 when not listening.
    ///
    /// ## Safety
    /// `listener` must be null or valid.
    fn sfTcpListener_getLocalPort(listener: *const sfTcpListener) |listener| -> u16 {
        listener.listener.local_port()
    }
}

extern_fn! {
    /// Listen on `address:port`, closing any previous listening socket. Port 0 picks a free port.
    ///
    /// ## Safety
    /// `listener` must be null or valid.
    fn sfTcpListener_listen(listener: *mut sfTcpListener, port: u16, address: sfIpAddress) mut |listener| -> sfSocketStatus {
        let Some(address) = Option::<IpAddress>::from(address) else {
            tracing::warn!("cannot listen on an invalid address");
            return sfSocketStatus::sfSocketError;
        };
        listener.listener.listen(port, address).into()
    }
}

extern_fn! {
    /// Accept a pending connection.
    ///
    /// On `sfSocketDone` a new socket is written to `connected` and must be destroyed with
    /// `sfTcpSocket_destroy`. Otherwise null is written.
    ///
    /// ## Safety
    /// `listener` must be null or valid. `connected` must be null or valid for writes.
    fn sfTcpListener_accept(listener: *mut sfTcpListener, connected: *mut *mut sfTcpSocket) mut |listener| -> sfSocketStatus {
        assert_non_null!(connected);
        unsafe { connected.write(std::ptr::null_mut()) };

        let mut socket = TcpSocket::new();
        let status = listener.listener.accept(&mut socket);
        if status == SocketStatus::Done {
            unsafe { connected.write(into_handle(sfTcpSocket { socket })) };
        }
        status.into()
    }
}

extern_fn! {
    /// Stop listening. Does nothing when not listening.
    ///
    /// ## Safety
    /// `listener` must be null or valid.
    fn sfTcpListener_close(listener: *mut sfTcpListener) mut |listener| {
        listener.listener.close();
    }
}
