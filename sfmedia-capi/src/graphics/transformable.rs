//! Position, rotation, scale and origin accessors shared by every transformable handle.
//!
//! Rotations cross the boundary in degrees.
use crate::ffi::extern_fn;
use crate::handle::{handle_lifecycle, into_handle};
use sfmedia::graphics::Transformable;

/// Generate the transformable accessors of a handle whose `$field` implements
/// [`AsTransformable`](sfmedia::graphics::AsTransformable).
macro_rules! transformable_fns {
    ($handle:ident, $field:ident) => {
        ::paste::paste! {
            $crate::ffi::extern_fn! {
                /// ## Safety
                /// The handle must be null or valid.
                fn [<$handle _setPosition>](object: *mut $handle, position: $crate::ctypes::sfVector2f) mut |object| {
                    use ::sfmedia::graphics::AsTransformable;
                    object.$field.transformable_mut().set_position(position.into());
                }
            }

            $crate::ffi::extern_fn! {
                /// Set the absolute rotation in degrees.
                ///
                /// ## Safety
                /// The handle must be null or valid.
                fn [<$handle _setRotation>](object: *mut $handle, angle: f32) mut |object| {
                    use ::sfmedia::graphics::AsTransformable;
                    object.$field.transformable_mut().set_rotation(::sfmedia::system::Angle::degrees(angle));
                }
            }

            $crate::ffi::extern_fn! {
                /// ## Safety
                /// The handle must be null or valid.
                fn [<$handle _setScale>](object: *mut $handle, scale: $crate::ctypes::sfVector2f) mut |object| {
                    use ::sfmedia::graphics::AsTransformable;
                    object.$field.transformable_mut().set_scale(scale.into());
                }
            }

            $crate::ffi::extern_fn! {
                /// Set the local origin that position, rotation and scale are relative to.
                ///
                /// ## Safety
                /// The handle must be null or valid.
                fn [<$handle _setOrigin>](object: *mut $handle, origin: $crate::ctypes::sfVector2f) mut |object| {
                    use ::sfmedia::graphics::AsTransformable;
                    object.$field.transformable_mut().set_origin(origin.into());
                }
            }

            $crate::ffi::extern_fn! {
                /// ## Safety
                /// The handle must be null or valid.
                fn [<$handle _getPosition>](object: *const $handle) |object| -> $crate::ctypes::sfVector2f {
                    use ::sfmedia::graphics::AsTransformable;
                    object.$field.transformable().position().into()
                }
            }

            $crate::ffi::extern_fn! {
                /// The rotation in degrees, in `[0, 360)`.
                ///
                /// ## Safety
                /// The handle must be null or valid.
                fn [<$handle _getRotation>](object: *const $handle) |object| -> f32 {
                    use ::sfmedia::graphics::AsTransformable;
                    object.$field.transformable().rotation().as_degrees()
                }
            }

            $crate::ffi::extern_fn! {
                /// ## Safety
                /// The handle must be null or valid.
                fn [<$handle _getScale>](object: *const $handle) |object| -> $crate::ctypes::sfVector2f {
                    use ::sfmedia::graphics::AsTransformable;
                    object.$field.transformable().scale().into()
                }
            }

            $crate::ffi::extern_fn! {
                /// ## Safety
                /// The handle must be null or valid.
                fn [<$handle _getOrigin>](object: *const $handle) |object| -> $crate::ctypes::sfVector2f {
                    use ::sfmedia::graphics::AsTransformable;
                    object.$field.transformable().origin().into()
                }
            }

            $crate::ffi::extern_fn! {
                /// Move by `offset` relative to the current position.
                ///
                /// ## Safety
                /// The handle must be null or valid.
                fn [<$handle _move>](object: *mut $handle, offset: $crate::ctypes::sfVector2f) mut |object| {
                    use ::sfmedia::graphics::AsTransformable;
                    object.$field.transformable_mut().move_by(offset.into());
                }
            }

            $crate::ffi::extern_fn! {
                /// Rotate by `angle` degrees relative to the current rotation.
                ///
                /// ## Safety
                /// The handle must be null or valid.
                fn [<$handle _rotate>](object: *mut $handle, angle: f32) mut |object| {
                    use ::sfmedia::graphics::AsTransformable;
                    object.$field.transformable_mut().rotate(::sfmedia::system::Angle::degrees(angle));
                }
            }

            $crate::ffi::extern_fn! {
                /// Multiply the current scale by `factors`.
                ///
                /// ## Safety
                /// The handle must be null or valid.
                fn [<$handle _scale>](object: *mut $handle, factors: $crate::ctypes::sfVector2f) mut |object| {
                    use ::sfmedia::graphics::AsTransformable;
                    object.$field.transformable_mut().scale_by(factors.into());
                }
            }

            $crate::ffi::extern_fn! {
                /// The combined transform of the object.
                ///
                /// ## Safety
                /// The handle must be null or valid.
                fn [<$handle _getTransform>](object: *const $handle) |object| -> $crate::ctypes::sfTransform {
                    use ::sfmedia::graphics::AsTransformable;
                    object.$field.transformable().transform().into()
                }
            }

            $crate::ffi::extern_fn! {
                /// The inverse of the combined transform of the object.
                ///
                /// ## Safety
                /// The handle must be null or valid.
                fn [<$handle _getInverseTransform>](object: *const $handle) |object| -> $crate::ctypes::sfTransform {
                    use ::sfmedia::graphics::AsTransformable;
                    object.$field.transformable().inverse_transform().into()
                }
            }
        }
    };
}

pub(crate) use transformable_fns;

/// A free-standing set of position, rotation, scale and origin.
#[derive(Debug, Clone, Default)]
pub struct sfTransformable {
    pub(crate) transformable: Transformable,
}

extern_fn! {
    /// Create an identity transformable.
    fn sfTransformable_create() -> *mut sfTransformable {
        into_handle(sfTransformable::default())
    }
}

handle_lifecycle!(sfTransformable);
transformable_fns!(sfTransformable, transformable);

#[cfg(test)]
mod test {
    use super::*;
    use crate::ctypes::sfVector2f;
    use crate::graphics::transform::sfTransform_transformPoint;

    #[test]
    fn degrees_at_the_boundary() {
        unsafe {
            let object = sfTransformable_create();
            sfTransformable_setRotation(object, -90.0);
            assert_eq!(270.0, sfTransformable_getRotation(object));
            sfTransformable_rotate(object, 100.0);
            assert_eq!(10.0, sfTransformable_getRotation(object));
            for degrees in [1.0, 7.0, 100.0, 123.0, 359.0, 0.1] {
                sfTransformable_setRotation(object, degrees);
                assert_eq!(degrees, sfTransformable_getRotation(object));
            }
            sfTransformable_destroy(object);
        }
    }

    #[test]
    fn transform_follows_state() {
        unsafe {
            let object = sfTransformable_create();
            sfTransformable_setOrigin(object, sfVector2f { x: 5.0, y: 5.0 });
            sfTransformable_setPosition(object, sfVector2f { x: 10.0, y: 0.0 });
            sfTransformable_setScale(object, sfVector2f { x: 1.0, y: 2.0 });
            sfTransformable_scale(object, sfVector2f { x: 2.0, y: 1.0 });
            sfTransformable_move(object, sfVector2f { x: 1.0, y: 1.0 });
            assert_eq!(sfVector2f { x: 11.0, y: 1.0 }, sfTransformable_getPosition(object));
            assert_eq!(sfVector2f { x: 2.0, y: 2.0 }, sfTransformable_getScale(object));

            let transform = sfTransformable_getTransform(object);
            let point = sfTransform_transformPoint(&transform, sfVector2f { x: 6.0, y: 5.0 });
            assert_eq!(sfVector2f { x: 13.0, y: 1.0 }, point);

            let inverse = sfTransformable_getInverseTransform(object);
            let back = sfTransform_transformPoint(&inverse, point);
            assert!((back.x - 6.0).abs() < 1e-4 && (back.y - 5.0).abs() < 1e-4);

            let copy = sfTransformable_copy(object);
            sfTransformable_setOrigin(object, sfVector2f::default());
            assert_eq!(sfVector2f { x: 5.0, y: 5.0 }, sfTransformable_getOrigin(copy));

            sfTransformable_destroy(object);
            sfTransformable_destroy(copy);
        }
    }

    #[test]
    fn null_is_ignored() {
        unsafe {
            sfTransformable_setPosition(std::ptr::null_mut(), sfVector2f { x: 1.0, y: 1.0 });
            assert_eq!(sfVector2f::default(), sfTransformable_getPosition(std::ptr::null()));
            assert_eq!(0.0, sfTransformable_getRotation(std::ptr::null()));
        }
    }
}
