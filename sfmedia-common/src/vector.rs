use crate::Angle;
use num_traits::{AsPrimitive, Float};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A two-dimensional vector.
#[repr(C)]
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Vector2<T> {
    pub x: T,
    pub y: T,
}

/// A three-dimensional vector.
#[repr(C)]
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

pub type Vector2f = Vector2<f32>;
pub type Vector2i = Vector2<i32>;
pub type Vector2u = Vector2<u32>;
pub type Vector3f = Vector3<f32>;

impl<T> Vector2<T> {
    pub const fn new(x: T, y: T) -> Self {
        Vector2 { x, y }
    }

    /// Convert each component with an `as` cast.
    pub fn cast<U>(self) -> Vector2<U>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        Vector2::new(self.x.as_(), self.y.as_())
    }
}

impl<T: Copy + Mul<Output = T>> Vector2<T> {
    pub fn component_wise_mul(self, rhs: Self) -> Self {
        Vector2::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl<T: Copy + Div<Output = T>> Vector2<T> {
    pub fn component_wise_div(self, rhs: Self) -> Self {
        Vector2::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl<T: Copy + Mul<Output = T> + Add<Output = T> + Sub<Output = T>> Vector2<T> {
    pub fn dot(self, rhs: Self) -> T {
        self.x * rhs.x + self.y * rhs.y
    }

    /// Z component of the cross product of the two vectors extended to 3D.
    pub fn cross(self, rhs: Self) -> T {
        self.x * rhs.y - self.y * rhs.x
    }

    pub fn length_squared(self) -> T {
        self.dot(self)
    }
}

impl<T: Copy + Neg<Output = T>> Vector2<T> {
    /// The vector rotated by +90°.
    pub fn perpendicular(self) -> Self {
        Vector2::new(-self.y, self.x)
    }
}

impl<T: Float> Vector2<T> {
    pub fn length(self) -> T {
        self.x.hypot(self.y)
    }

    /// Unit vector in the same direction. The zero vector stays zero.
    pub fn normalized(self) -> Self {
        let length = self.length();
        if length == T::zero() {
            self
        } else {
            self / length
        }
    }
}

impl Vector2<f32> {
    /// Signed angle from the +X axis.
    pub fn angle(self) -> Angle {
        Angle::radians(self.y.atan2(self.x))
    }

    pub fn rotated_by(self, phi: Angle) -> Self {
        let (sin, cos) = phi.as_radians().sin_cos();
        Vector2::new(cos * self.x - sin * self.y, sin * self.x + cos * self.y)
    }
}

impl<T> Vector3<T> {
    pub const fn new(x: T, y: T, z: T) -> Self {
        Vector3 { x, y, z }
    }
}

impl<T: Copy + Mul<Output = T> + Add<Output = T> + Sub<Output = T>> Vector3<T> {
    pub fn dot(self, rhs: Self) -> T {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    pub fn cross(self, rhs: Self) -> Self {
        Vector3::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    pub fn length_squared(self) -> T {
        self.dot(self)
    }
}

impl<T: Float> Vector3<T> {
    pub fn length(self) -> T {
        self.length_squared().sqrt()
    }

    pub fn normalized(self) -> Self {
        let length = self.length();
        if length == T::zero() {
            self
        } else {
            self / length
        }
    }
}

macro_rules! impl_vector_ops {
    ($vec:ident { $($field:ident),+ }) => {
        impl<T: Add<Output = T>> Add for $vec<T> {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                $vec { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl<T: AddAssign> AddAssign for $vec<T> {
            fn add_assign(&mut self, rhs: Self) {
                $(self.$field += rhs.$field;)+
            }
        }

        impl<T: Sub<Output = T>> Sub for $vec<T> {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                $vec { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl<T: SubAssign> SubAssign for $vec<T> {
            fn sub_assign(&mut self, rhs: Self) {
                $(self.$field -= rhs.$field;)+
            }
        }

        impl<T: Neg<Output = T>> Neg for $vec<T> {
            type Output = Self;
            fn neg(self) -> Self {
                $vec { $($field: -self.$field),+ }
            }
        }

        impl<T: Copy + Mul<Output = T>> Mul<T> for $vec<T> {
            type Output = Self;
            fn mul(self, rhs: T) -> Self {
                $vec { $($field: self.$field * rhs),+ }
            }
        }

        impl<T: Copy + MulAssign> MulAssign<T> for $vec<T> {
            fn mul_assign(&mut self, rhs: T) {
                $(self.$field *= rhs;)+
            }
        }

        impl<T: Copy + Div<Output = T>> Div<T> for $vec<T> {
            type Output = Self;
            fn div(self, rhs: T) -> Self {
                $vec { $($field: self.$field / rhs),+ }
            }
        }

        impl<T: Copy + DivAssign> DivAssign<T> for $vec<T> {
            fn div_assign(&mut self, rhs: T) {
                $(self.$field /= rhs;)+
            }
        }
    };
}

impl_vector_ops!(Vector2 { x, y });
impl_vector_ops!(Vector3 { x, y, z });
