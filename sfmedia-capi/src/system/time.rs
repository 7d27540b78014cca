use crate::ctypes::sfTime;
use crate::ffi::extern_fn;
use sfmedia::system::Time;

/// A time of zero.
#[no_mangle]
pub static sfTime_Zero: sfTime = sfTime { microseconds: 0 };

extern_fn! {
    /// Return a time value as a number of seconds.
    fn sfTime_asSeconds(time: sfTime) -> f32 {
        Time::from(time).as_seconds()
    }
}

extern_fn! {
    /// Return a time value as a number of milliseconds.
    fn sfTime_asMilliseconds(time: sfTime) -> i32 {
        Time::from(time).as_milliseconds()
    }
}

extern_fn! {
    /// Return a time value as a number of microseconds.
    fn sfTime_asMicroseconds(time: sfTime) -> i64 {
        time.microseconds
    }
}

extern_fn! {
    /// Construct a time value from a number of seconds.
    fn sfSeconds(amount: f32) -> sfTime {
        Time::seconds(amount).into()
    }
}

extern_fn! {
    /// Construct a time value from a number of milliseconds.
    fn sfMilliseconds(amount: i32) -> sfTime {
        Time::milliseconds(amount).into()
    }
}

extern_fn! {
    /// Construct a time value from a number of microseconds.
    fn sfMicroseconds(amount: i64) -> sfTime {
        Time::microseconds(amount).into()
    }
}

extern_fn! {
    /// Block the calling thread for `duration`. Negative durations return immediately.
    fn sfSleep(duration: sfTime) {
        if let Ok(duration) = std::time::Duration::try_from(Time::from(duration)) {
            std::thread::sleep(duration);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unit_conversions() {
        unsafe {
            let time = sfMilliseconds(1500);
            assert_eq!(1_500_000, sfTime_asMicroseconds(time));
            assert_eq!(1.5, sfTime_asSeconds(time));
            assert_eq!(-2, sfTime_asMilliseconds(sfMicroseconds(-2000)));
            assert_eq!(sfTime_Zero, sfSeconds(0.0));
            sfSleep(sfMicroseconds(-5));
        }
    }
}
