use std::ops::{Add, AddAssign, Div, Mul, Neg, Rem, Sub, SubAssign};

/// An angle, stored in degrees.
///
/// Construct with [`Angle::degrees`] or [`Angle::radians`]; the unit is always explicit
/// at the call site. Degrees go in and come out unchanged.
#[derive(Default, Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Angle {
    degrees: f32,
}

fn positive_remainder(a: f32, b: f32) -> f32 {
    let val = a - (a / b).trunc() * b;
    if val >= 0.0 {
        val
    } else {
        val + b
    }
}

impl Angle {
    /// The zero angle.
    pub const ZERO: Angle = Angle { degrees: 0.0 };

    /// Construct an angle from degrees.
    pub const fn degrees(degrees: f32) -> Angle {
        Angle { degrees }
    }

    /// Construct an angle from radians.
    pub fn radians(radians: f32) -> Angle {
        Angle {
            degrees: radians.to_degrees(),
        }
    }

    pub const fn as_degrees(self) -> f32 {
        self.degrees
    }

    pub fn as_radians(self) -> f32 {
        self.degrees.to_radians()
    }

    /// Wrap into `[-180°, 180°)`.
    pub fn wrap_signed(self) -> Angle {
        Angle::degrees(positive_remainder(self.degrees + 180.0, 360.0) - 180.0)
    }

    /// Wrap into `[0°, 360°)`.
    pub fn wrap_unsigned(self) -> Angle {
        Angle::degrees(positive_remainder(self.degrees, 360.0))
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Angle {
        Angle::degrees(self.degrees + rhs.degrees)
    }
}

impl AddAssign for Angle {
    fn add_assign(&mut self, rhs: Angle) {
        self.degrees += rhs.degrees;
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Angle {
        Angle::degrees(self.degrees - rhs.degrees)
    }
}

impl SubAssign for Angle {
    fn sub_assign(&mut self, rhs: Angle) {
        self.degrees -= rhs.degrees;
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        Angle::degrees(-self.degrees)
    }
}

impl Mul<f32> for Angle {
    type Output = Angle;

    fn mul(self, rhs: f32) -> Angle {
        Angle::degrees(self.degrees * rhs)
    }
}

impl Div<f32> for Angle {
    type Output = Angle;

    fn div(self, rhs: f32) -> Angle {
        Angle::degrees(self.degrees / rhs)
    }
}

impl Div for Angle {
    type Output = f32;

    fn div(self, rhs: Angle) -> f32 {
        self.degrees / rhs.degrees
    }
}

impl Rem for Angle {
    type Output = Angle;

    fn rem(self, rhs: Angle) -> Angle {
        Angle::degrees(positive_remainder(self.degrees, rhs.degrees))
    }
}
