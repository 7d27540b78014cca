use crate::ctypes::c_enum;
use crate::ffi::FallbackValue;
use sfmedia::network::SocketStatus;

c_enum!(
    /// The outcome of a socket operation.
    ///
    /// `sfSocketNotReady` is the normal result of a non-blocking call with nothing to do.
    sfSocketStatus => SocketStatus {
        sfSocketDone = Done = 0,
        sfSocketNotReady = NotReady = 1,
        sfSocketPartial = Partial = 2,
        sfSocketDisconnected = Disconnected = 3,
        sfSocketError = Error = 4,
    }
);

impl FallbackValue for sfSocketStatus {
    fn fallback() -> Self {
        sfSocketStatus::sfSocketError
    }
}
