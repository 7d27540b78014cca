//! Value types shared across the C API and their conversions to and from engine types.
//!
//! Every struct here is `#[repr(C)]`, passed by value, and converts losslessly to and
//! from the engine type it mirrors.
use crate::ffi::fallback_default;
use sfmedia::system::{Color, Rect, Time, Transform, Vector2, Vector3};

macro_rules! c_vector2 {
    ($(#[$meta:meta])* $name:ident, $component:ty) => {
        $(#[$meta])*
        #[repr(C)]
        #[derive(Debug, Copy, Clone, Default, PartialEq)]
        pub struct $name {
            pub x: $component,
            pub y: $component,
        }

        impl $name {
            pub const fn from_native(value: Vector2<$component>) -> Self {
                $name {
                    x: value.x,
                    y: value.y,
                }
            }

            pub const fn to_native(self) -> Vector2<$component> {
                Vector2::new(self.x, self.y)
            }
        }

        impl From<Vector2<$component>> for $name {
            fn from(value: Vector2<$component>) -> Self {
                $name::from_native(value)
            }
        }

        impl From<$name> for Vector2<$component> {
            fn from(value: $name) -> Self {
                value.to_native()
            }
        }
    };
}

c_vector2!(
    /// A 2D vector of floats.
    sfVector2f,
    f32
);
c_vector2!(
    /// A 2D vector of signed integers.
    sfVector2i,
    i32
);
c_vector2!(
    /// A 2D vector of unsigned integers.
    sfVector2u,
    u32
);

/// A 3D vector of floats.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct sfVector3f {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<Vector3<f32>> for sfVector3f {
    fn from(value: Vector3<f32>) -> Self {
        sfVector3f {
            x: value.x,
            y: value.y,
            z: value.z,
        }
    }
}

impl From<sfVector3f> for Vector3<f32> {
    fn from(value: sfVector3f) -> Self {
        Vector3::new(value.x, value.y, value.z)
    }
}

/// An 8-bit per channel RGBA color.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct sfColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl sfColor {
    pub const fn from_native(value: Color) -> Self {
        sfColor {
            r: value.r,
            g: value.g,
            b: value.b,
            a: value.a,
        }
    }

    pub const fn to_native(self) -> Color {
        Color::rgba(self.r, self.g, self.b, self.a)
    }
}

impl From<Color> for sfColor {
    fn from(value: Color) -> Self {
        sfColor::from_native(value)
    }
}

impl From<sfColor> for Color {
    fn from(value: sfColor) -> Self {
        value.to_native()
    }
}

macro_rules! c_rect {
    ($(#[$meta:meta])* $name:ident, $vector:ident, $component:ty) => {
        $(#[$meta])*
        #[repr(C)]
        #[derive(Debug, Copy, Clone, Default, PartialEq)]
        pub struct $name {
            pub position: $vector,
            pub size: $vector,
        }

        impl From<Rect<$component>> for $name {
            fn from(value: Rect<$component>) -> Self {
                $name {
                    position: value.position.into(),
                    size: value.size.into(),
                }
            }
        }

        impl From<$name> for Rect<$component> {
            fn from(value: $name) -> Self {
                Rect::new(value.position.into(), value.size.into())
            }
        }
    };
}

c_rect!(
    /// A rectangle of floats, given by its top-left corner and size.
    sfFloatRect,
    sfVector2f,
    f32
);
c_rect!(
    /// A rectangle of integers, given by its top-left corner and size.
    sfIntRect,
    sfVector2i,
    i32
);

/// A span of time in microseconds.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct sfTime {
    pub microseconds: i64,
}

impl From<Time> for sfTime {
    fn from(value: Time) -> Self {
        sfTime {
            microseconds: value.as_microseconds(),
        }
    }
}

impl From<sfTime> for Time {
    fn from(value: sfTime) -> Self {
        Time::microseconds(value.microseconds)
    }
}

/// A 3x3 transform matrix, stored row by row.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct sfTransform {
    pub matrix: [f32; 9],
}

impl sfTransform {
    pub const fn from_native(value: &Transform) -> Self {
        let m = value.matrix();
        sfTransform {
            matrix: [m[0], m[4], m[12], m[1], m[5], m[13], m[3], m[7], m[15]],
        }
    }

    pub const fn to_native(self) -> Transform {
        let m = self.matrix;
        Transform::new(m[0], m[1], m[2], m[3], m[4], m[5], m[6], m[7], m[8])
    }
}

impl From<Transform> for sfTransform {
    fn from(value: Transform) -> Self {
        sfTransform::from_native(&value)
    }
}

impl From<sfTransform> for Transform {
    fn from(value: sfTransform) -> Self {
        value.to_native()
    }
}

/// Declare a C enumeration that mirrors an engine enumeration value for value.
macro_rules! c_enum {
    ($(#[$meta:meta])* $name:ident => $native:ident { $($variant:ident = $native_variant:ident = $value:literal,)* }) => {
        $(#[$meta])*
        #[repr(i32)]
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant = $value,)*
        }

        $(
            const _: () = assert!($native::$native_variant as i32 == $value);
        )*

        impl $name {
            /// Every variant, in declaration order.
            pub const VARIANTS: &'static [$name] = &[$($name::$variant,)*];

            pub const fn from_native(value: $native) -> Self {
                match value {
                    $($native::$native_variant => $name::$variant,)*
                }
            }

            pub const fn to_native(self) -> $native {
                match self {
                    $($name::$variant => $native::$native_variant,)*
                }
            }
        }

        impl From<$native> for $name {
            fn from(value: $native) -> Self {
                $name::from_native(value)
            }
        }

        impl From<$name> for $native {
            fn from(value: $name) -> Self {
                value.to_native()
            }
        }
    };
}

pub(crate) use c_enum;

fallback_default!(
    sfVector2f,
    sfVector2i,
    sfVector2u,
    sfVector3f,
    sfColor,
    sfFloatRect,
    sfIntRect,
    sfTime,
    sfTransform,
);

#[cfg(test)]
mod test {
    use super::*;
    use sfmedia::system::{FloatRect, Vector2f, Vector3f};

    #[test]
    fn vectors_round_trip() {
        let native = Vector2f::new(-1.5, 2.25);
        assert_eq!(native, Vector2f::from(sfVector2f::from(native)));
        let c = sfVector2i { x: i32::MIN, y: i32::MAX };
        assert_eq!(c, sfVector2i::from(Vector2::<i32>::from(c)));
        let c = sfVector3f { x: 1.0, y: -0.0, z: f32::MAX };
        assert_eq!(c, sfVector3f::from(Vector3f::from(c)));
    }

    #[test]
    fn rect_round_trip() {
        let native = FloatRect::new(Vector2f::new(1.0, 2.0), Vector2f::new(-3.0, 4.5));
        let c = sfFloatRect::from(native);
        assert_eq!(sfVector2f { x: -3.0, y: 4.5 }, c.size);
        assert_eq!(native, FloatRect::from(c));
    }

    #[test]
    fn time_is_microseconds() {
        let c = sfTime::from(Time::milliseconds(3));
        assert_eq!(3000, c.microseconds);
        assert_eq!(Time::microseconds(i64::MIN), Time::from(sfTime { microseconds: i64::MIN }));
    }

    #[test]
    fn transform_layout() {
        let c = sfTransform {
            matrix: [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0],
        };
        let native = Transform::from(c);
        let m = native.matrix();
        assert_eq!([1.0, 4.0, 7.0], [m[0], m[1], m[3]]);
        assert_eq!([2.0, 5.0, 8.0], [m[4], m[5], m[7]]);
        assert_eq!([3.0, 6.0, 9.0], [m[12], m[13], m[15]]);
        assert_eq!(c, sfTransform::from(native));
        assert_eq!(
            [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
            sfTransform::from(Transform::IDENTITY).matrix
        );
    }

    #[test]
    fn color_round_trip() {
        let c = sfColor { r: 1, g: 2, b: 3, a: 4 };
        assert_eq!(c, sfColor::from(Color::from(c)));
        assert_eq!(Color::rgba(1, 2, 3, 4), Color::from(c));
    }
}
