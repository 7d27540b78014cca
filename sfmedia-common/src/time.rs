use std::ops::{Add, AddAssign, Div, Mul, Neg, Rem, Sub, SubAssign};
use std::time::Duration;

/// A span of time with microsecond precision.
///
/// Negative values are allowed.
#[repr(C)]
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time {
    microseconds: i64,
}

impl Time {
    pub const ZERO: Time = Time { microseconds: 0 };

    pub fn seconds(amount: f32) -> Time {
        Time {
            microseconds: (amount * 1_000_000.0) as i64,
        }
    }

    pub const fn milliseconds(amount: i32) -> Time {
        Time {
            microseconds: amount as i64 * 1000,
        }
    }

    pub const fn microseconds(amount: i64) -> Time {
        Time {
            microseconds: amount,
        }
    }

    pub fn as_seconds(self) -> f32 {
        self.microseconds as f32 / 1_000_000.0
    }

    pub const fn as_milliseconds(self) -> i32 {
        (self.microseconds / 1000) as i32
    }

    pub const fn as_microseconds(self) -> i64 {
        self.microseconds
    }
}

impl From<Duration> for Time {
    fn from(value: Duration) -> Self {
        Time::microseconds(i64::try_from(value.as_micros()).unwrap_or(i64::MAX))
    }
}

impl TryFrom<Time> for Duration {
    type Error = std::num::TryFromIntError;

    fn try_from(value: Time) -> Result<Self, Self::Error> {
        Ok(Duration::from_micros(u64::try_from(value.microseconds)?))
    }
}

impl Add for Time {
    type Output = Time;

    fn add(self, rhs: Time) -> Time {
        Time::microseconds(self.microseconds + rhs.microseconds)
    }
}

impl AddAssign for Time {
    fn add_assign(&mut self, rhs: Time) {
        self.microseconds += rhs.microseconds;
    }
}

impl Sub for Time {
    type Output = Time;

    fn sub(self, rhs: Time) -> Time {
        Time::microseconds(self.microseconds - rhs.microseconds)
    }
}

impl SubAssign for Time {
    fn sub_assign(&mut self, rhs: Time) {
        self.microseconds -= rhs.microseconds;
    }
}

impl Neg for Time {
    type Output = Time;

    fn neg(self) -> Time {
        Time::microseconds(-self.microseconds)
    }
}

impl Mul<f32> for Time {
    type Output = Time;

    fn mul(self, rhs: f32) -> Time {
        Time::seconds(self.as_seconds() * rhs)
    }
}

impl Mul<i64> for Time {
    type Output = Time;

    fn mul(self, rhs: i64) -> Time {
        Time::microseconds(self.microseconds * rhs)
    }
}

impl Div<f32> for Time {
    type Output = Time;

    fn div(self, rhs: f32) -> Time {
        Time::seconds(self.as_seconds() / rhs)
    }
}

impl Div<i64> for Time {
    type Output = Time;

    fn div(self, rhs: i64) -> Time {
        Time::microseconds(self.microseconds / rhs)
    }
}

impl Div for Time {
    type Output = f32;

    fn div(self, rhs: Time) -> f32 {
        self.as_seconds() / rhs.as_seconds()
    }
}

impl Rem for Time {
    type Output = Time;

    fn rem(self, rhs: Time) -> Time {
        Time::microseconds(self.microseconds % rhs.microseconds)
    }
}
