//! Diagnostics for the C API.
//!
//! Rejected calls and engine events are reported through `tracing`. Nothing is printed
//! until a subscriber is installed, either by the host application or with [`sfLog_init`].
use crate::error::try_export;
use crate::ffi::extern_fn;
use std::ffi::{c_char, CStr};
use tracing_subscriber::EnvFilter;

extern_fn! {
    /// Install a subscriber that prints log messages to standard error.
    ///
    /// `filter` uses the `RUST_LOG` directive syntax, for example `"sfmedia_capi=warn"`. If it is
    /// null, the `RUST_LOG` environment variable is used instead, defaulting to `warn`.
    ///
    /// Returns `false` if the filter is invalid or a subscriber is already installed.
    ///
    /// ## Safety
    /// `filter` must be null or a valid nul-terminated string.
    fn sfLog_init(filter: *const c_char) -> bool {
        let filter = if filter.is_null() {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
        } else {
            let directives = unsafe { CStr::from_ptr(filter) };
            let directives = try_export!(directives.to_str());
            match EnvFilter::try_new(directives) {
                Ok(filter) => filter,
                Err(err) => {
                    tracing::warn!(%err, "invalid log filter");
                    return false;
                }
            }
        };

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .with_writer(std::io::stderr)
            .try_init()
            .is_ok()
    }
}
