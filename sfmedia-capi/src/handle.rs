//! Allocation and release of opaque handles.

/// Move `value` to the heap and hand ownership to the caller.
pub(crate) fn into_handle<T>(value: T) -> *mut T {
    Box::into_raw(Box::new(value))
}

/// Release a handle created by [`into_handle`]. Null is ignored.
///
/// ## Safety
/// `handle` must be null, or a pointer returned by [`into_handle`] for the same `T`
/// that has not been released yet.
pub(crate) unsafe fn drop_handle<T>(handle: *mut T) {
    if handle.is_null() {
        return;
    }
    drop(unsafe { Box::from_raw(handle) });
}

/// Generate the `copy` and `destroy` functions of a handle type.
///
/// `copy` clones the whole wrapper, so cached mirrors are copied and borrowed
/// pointers are copied as pointers.
macro_rules! handle_lifecycle {
    ($handle:ident) => {
        $crate::handle::handle_lifecycle!(@destroy $handle);

        ::paste::paste! {
            $crate::ffi::extern_fn! {
                #[doc = "Copy an existing `" $handle "`."]
                ///
                /// Returns null if the argument is null.
                ///
                /// ## Safety
                /// The argument must be null or a valid handle.
                fn [<$handle _copy>](handle: *const $handle) |handle| -> *mut $handle {
                    $crate::handle::into_handle(handle.clone())
                }
            }
        }
    };
    (@destroy $handle:ident) => {
        ::paste::paste! {
            $crate::ffi::extern_fn! {
                #[doc = "Destroy an existing `" $handle "`. Passing null does nothing."]
                ///
                /// ## Safety
                /// The argument must be null or a valid handle that has not been destroyed.
                fn [<$handle _destroy>](handle: *mut $handle) {
                    unsafe { $crate::handle::drop_handle(handle) }
                }
            }
        }
    };
}

pub(crate) use handle_lifecycle;
