use sfmedia::system::InputStream;
use std::ffi::c_void;

/// Read up to `size` bytes into `data`, returning the number of bytes read or -1 on error.
pub type sfInputStreamReadFunc =
    unsafe extern "C" fn(data: *mut c_void, size: i64, user_data: *mut c_void) -> i64;
/// Move to `position`, returning the new position or -1 on error.
pub type sfInputStreamSeekFunc = unsafe extern "C" fn(position: i64, user_data: *mut c_void) -> i64;
/// Return the current position or -1 on error.
pub type sfInputStreamTellFunc = unsafe extern "C" fn(user_data: *mut c_void) -> i64;
/// Return the total size of the stream or -1 on error.
pub type sfInputStreamGetSizeFunc = unsafe extern "C" fn(user_data: *mut c_void) -> i64;

/// A custom byte source, given as a table of callbacks.
///
/// Any callback may be null, in which case that operation always fails. `userData` is passed
/// back to every callback unchanged. The record is copied by the functions it is passed to,
/// and is only used for the duration of that call.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct sfInputStream {
    pub read: Option<sfInputStreamReadFunc>,
    pub seek: Option<sfInputStreamSeekFunc>,
    pub tell: Option<sfInputStreamTellFunc>,
    pub get_size: Option<sfInputStreamGetSizeFunc>,
    pub user_data: *mut c_void,
}

fn non_negative(value: i64) -> Option<u64> {
    u64::try_from(value).ok()
}

impl InputStream for sfInputStream {
    fn read(&mut self, data: &mut [u8]) -> Option<u64> {
        let read = self.read?;
        let size = i64::try_from(data.len()).ok()?;
        let count = non_negative(unsafe { read(data.as_mut_ptr().cast(), size, self.user_data) })?;
        // a callback claiming more than it was given is broken
        (count <= data.len() as u64).then_some(count)
    }

    fn seek(&mut self, position: u64) -> Option<u64> {
        let seek = self.seek?;
        let position = i64::try_from(position).ok()?;
        non_negative(unsafe { seek(position, self.user_data) })
    }

    fn tell(&mut self) -> Option<u64> {
        let tell = self.tell?;
        non_negative(unsafe { tell(self.user_data) })
    }

    fn size(&mut self) -> Option<u64> {
        let get_size = self.get_size?;
        non_negative(unsafe { get_size(self.user_data) })
    }
}
