use std::io;

/// The outcome of a socket operation.
#[repr(i32)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SocketStatus {
    /// The operation completed.
    Done = 0,
    /// A non-blocking socket is not ready yet.
    NotReady = 1,
    /// Only part of the data was sent.
    Partial = 2,
    /// The remote end closed the connection.
    Disconnected = 3,
    Error = 4,
}

/// Map an I/O error onto a socket status.
pub fn status_from_io(err: &io::Error) -> SocketStatus {
    match err.kind() {
        io::ErrorKind::WouldBlock => SocketStatus::NotReady,
        io::ErrorKind::ConnectionAborted
        | io::ErrorKind::ConnectionReset
        | io::ErrorKind::TimedOut
        | io::ErrorKind::NotConnected
        | io::ErrorKind::BrokenPipe
        | io::ErrorKind::UnexpectedEof => SocketStatus::Disconnected,
        _ => SocketStatus::Error,
    }
}

pub(crate) fn log_status(operation: &'static str, err: &io::Error) -> SocketStatus {
    let status = status_from_io(err);
    if status != SocketStatus::NotReady {
        tracing::debug!(operation, %err, ?status, "socket operation failed");
    }
    status
}
