use crate::ctypes::sfTime;
use crate::ffi::extern_fn;
use crate::handle::{handle_lifecycle, into_handle};
use sfmedia::system::Clock;

/// A running stopwatch.
#[derive(Debug, Clone)]
pub struct sfClock {
    pub(crate) clock: Clock,
}

extern_fn! {
    /// Create a new clock, already running.
    fn sfClock_create() -> *mut sfClock {
        into_handle(sfClock {
            clock: Clock::new(),
        })
    }
}

handle_lifecycle!(sfClock);

extern_fn! {
    /// Get the time elapsed since the clock was last started, restarted or reset.
    ///
    /// ## Safety
    /// `clock` must be null or a valid clock.
    fn sfClock_getElapsedTime(clock: *const sfClock) |clock| -> sfTime {
        clock.clock.elapsed_time().into()
    }
}

extern_fn! {
    /// Whether the clock is running.
    ///
    /// ## Safety
    /// `clock` must be null or a valid clock.
    fn sfClock_isRunning(clock: *const sfClock) |clock| -> bool {
        clock.clock.is_running()
    }
}

extern_fn! {
    /// Resume a stopped clock.
    ///
    /// ## Safety
    /// `clock` must be null or a valid clock.
    fn sfClock_start(clock: *mut sfClock) mut |clock| {
        clock.clock.start();
    }
}

extern_fn! {
    /// Freeze the elapsed time until the clock is started again.
    ///
    /// ## Safety
    /// `clock` must be null or a valid clock.
    fn sfClock_stop(clock: *mut sfClock) mut |clock| {
        clock.clock.stop();
    }
}

extern_fn! {
    /// Restart the clock from zero, returning the time elapsed before the restart.
    ///
    /// ## Safety
    /// `clock` must be null or a valid clock.
    fn sfClock_restart(clock: *mut sfClock) mut |clock| -> sfTime {
        clock.clock.restart().into()
    }
}

extern_fn! {
    /// Stop the clock at zero, returning the time elapsed before the reset.
    ///
    /// ## Safety
    /// `clock` must be null or a valid clock.
    fn sfClock_reset(clock: *mut sfClock) mut |clock| -> sfTime {
        clock.clock.reset().into()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn lifecycle() {
        unsafe {
            let clock = sfClock_create();
            assert!(sfClock_isRunning(clock));
            sfClock_reset(clock);
            assert!(!sfClock_isRunning(clock));
            assert_eq!(sfTime::default(), sfClock_getElapsedTime(clock));

            let copy = sfClock_copy(clock);
            sfClock_start(clock);
            assert!(!sfClock_isRunning(copy));

            sfClock_destroy(clock);
            sfClock_destroy(copy);
            sfClock_destroy(std::ptr::null_mut());
        }
    }

    #[test]
    fn null_clock() {
        unsafe {
            assert!(sfClock_copy(std::ptr::null()).is_null());
            assert!(!sfClock_isRunning(std::ptr::null()));
            assert_eq!(sfTime::default(), sfClock_restart(std::ptr::null_mut()));
        }
    }
}
