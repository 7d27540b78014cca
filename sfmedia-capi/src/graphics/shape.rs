//! Circles, rectangles, convex polygons and shapes whose points come from C callbacks.
use crate::ctypes::sfVector2f;
use crate::error::assert_some;
use crate::ffi::extern_fn;
use crate::graphics::texture::sfTexture;
use crate::graphics::transformable::transformable_fns;
use crate::handle::{handle_lifecycle, into_handle};
use sfmedia::graphics::{
    CircleShape, ConvexShape, RectangleShape, Shape, ShapePoints, Texture,
};
use sfmedia::system::{IntRect, Vector2, Vector2f};
use std::ffi::c_void;

/// Return the number of points of the shape.
pub type sfShapeGetPointCountCallback = unsafe extern "C" fn(user_data: *mut c_void) -> usize;
/// Return the point at `index`, which is always below the current point count.
pub type sfShapeGetPointCallback =
    unsafe extern "C" fn(index: usize, user_data: *mut c_void) -> sfVector2f;

/// The outline of an [`sfShape`], read through its callbacks.
#[derive(Debug, Copy, Clone)]
pub(crate) struct CallbackPoints {
    get_point_count: sfShapeGetPointCountCallback,
    get_point: sfShapeGetPointCallback,
    user_data: *mut c_void,
}

impl ShapePoints for CallbackPoints {
    fn point_count(&self) -> usize {
        unsafe { (self.get_point_count)(self.user_data) }
    }

    fn point(&self, index: usize) -> Vector2f {
        unsafe { (self.get_point)(index, self.user_data) }.into()
    }
}

/// Point the texture rectangle at the whole texture when asked to, or when a shape with no
/// texture and no rectangle is given its first texture.
fn attach_texture<P: ShapePoints>(
    shape: &mut Shape<P>,
    current: *const sfTexture,
    texture: &Texture,
    reset_rect: bool,
) {
    if reset_rect || (current.is_null() && shape.texture_rect() == IntRect::default()) {
        shape.set_texture_rect(IntRect::new(Vector2::new(0, 0), texture.size().cast()));
    }
}

/// Generate the accessors every shape handle has in common.
macro_rules! shape_fns {
    ($handle:ident) => {
        ::paste::paste! {
            $crate::ffi::extern_fn! {
                /// Attach a texture, or detach it by passing null. The shape only keeps a pointer.
                ///
                /// ## Safety
                /// The handle must be null or valid. `texture` must be null or valid, and must stay
                /// valid while the shape uses it.
                fn [<$handle _setTexture>](shape: *mut $handle, texture: *const sfTexture, reset_rect: bool) mut |shape| {
                    if let Some(native) = unsafe { texture.as_ref() } {
                        attach_texture(&mut shape.shape, shape.texture, &native.texture, reset_rect);
                    }
                    shape.texture = texture;
                }
            }

            $crate::ffi::extern_fn! {
                /// The texture last attached to the shape, or null.
                ///
                /// ## Safety
                /// The handle must be null or valid.
                fn [<$handle _getTexture>](shape: *const $handle) |shape| -> *const sfTexture {
                    shape.texture
                }
            }

            $crate::ffi::extern_fn! {
                /// ## Safety
                /// The handle must be null or valid.
                fn [<$handle _setTextureRect>](shape: *mut $handle, rect: $crate::ctypes::sfIntRect) mut |shape| {
                    shape.shape.set_texture_rect(rect.into());
                }
            }

            $crate::ffi::extern_fn! {
                /// ## Safety
                /// The handle must be null or valid.
                fn [<$handle _getTextureRect>](shape: *const $handle) |shape| -> $crate::ctypes::sfIntRect {
                    shape.shape.texture_rect().into()
                }
            }

            $crate::ffi::extern_fn! {
                /// ## Safety
                /// The handle must be null or valid.
                fn [<$handle _setFillColor>](shape: *mut $handle, color: $crate::ctypes::sfColor) mut |shape| {
                    shape.shape.set_fill_color(color.into());
                }
            }

            $crate::ffi::extern_fn! {
                /// ## Safety
                /// The handle must be null or valid.
                fn [<$handle _getFillColor>](shape: *const $handle) |shape| -> $crate::ctypes::sfColor {
                    shape.shape.fill_color().into()
                }
            }

            $crate::ffi::extern_fn! {
                /// ## Safety
                /// The handle must be null or valid.
                fn [<$handle _setOutlineColor>](shape: *mut $handle, color: $crate::ctypes::sfColor) mut |shape| {
                    shape.shape.set_outline_color(color.into());
                }
            }

            $crate::ffi::extern_fn! {
                /// ## Safety
                /// The handle must be null or valid.
                fn [<$handle _getOutlineColor>](shape: *const $handle) |shape| -> $crate::ctypes::sfColor {
                    shape.shape.outline_color().into()
                }
            }

            $crate::ffi::extern_fn! {
                /// Set the outline thickness. Negative values grow the outline inwards.
                ///
                /// ## Safety
                /// The handle must be null or valid.
                fn [<$handle _setOutlineThickness>](shape: *mut $handle, thickness: f32) mut |shape| {
                    shape.shape.set_outline_thickness(thickness);
                }
            }

            $crate::ffi::extern_fn! {
                /// ## Safety
                /// The handle must be null or valid.
                fn [<$handle _getOutlineThickness>](shape: *const $handle) |shape| -> f32 {
                    shape.shape.outline_thickness()
                }
            }

            $crate::ffi::extern_fn! {
                /// ## Safety
                /// The handle must be null or valid.
                fn [<$handle _getPointCount>](shape: *const $handle) |shape| -> usize {
                    shape.shape.point_count()
                }
            }

            $crate::ffi::extern_fn! {
                /// The point at `index` in local coordinates, or the origin if `index` is out of range.
                ///
                /// ## Safety
                /// The handle must be null or valid.
                fn [<$handle _getPoint>](shape: *const $handle, index: usize) |shape| -> sfVector2f {
                    if index >= shape.shape.point_count() {
                        return $crate::error::SfError::InvalidParameter("index").export();
                    }
                    shape.shape.point(index).into()
                }
            }

            $crate::ffi::extern_fn! {
                /// The centroid of the filled area in local coordinates.
                ///
                /// ## Safety
                /// The handle must be null or valid.
                fn [<$handle _getGeometricCenter>](shape: *const $handle) |shape| -> sfVector2f {
                    shape.shape.geometric_center().into()
                }
            }

            $crate::ffi::extern_fn! {
                /// ## Safety
                /// The handle must be null or valid.
                fn [<$handle _getLocalBounds>](shape: *const $handle) |shape| -> $crate::ctypes::sfFloatRect {
                    shape.shape.local_bounds().into()
                }
            }

            $crate::ffi::extern_fn! {
                /// ## Safety
                /// The handle must be null or valid.
                fn [<$handle _getGlobalBounds>](shape: *const $handle) |shape| -> $crate::ctypes::sfFloatRect {
                    shape.shape.global_bounds().into()
                }
            }
        }

        transformable_fns!($handle, shape);
    };
}

/// A shape whose points are provided by C callbacks.
///
/// The callbacks are read whenever the geometry is rebuilt: on creation, when the outline
/// thickness changes, and on [`sfShape_update`].
#[derive(Debug, Clone)]
pub struct sfShape {
    pub(crate) shape: Shape<CallbackPoints>,
    pub(crate) texture: *const sfTexture,
}

extern_fn! {
    /// Create a shape from point callbacks. Both callbacks are required.
    ///
    /// ## Safety
    /// The callbacks must be safe to call with `userData` for as long as the shape exists.
    fn sfShape_create(
        get_point_count: Option<sfShapeGetPointCountCallback>,
        get_point: Option<sfShapeGetPointCallback>,
        user_data: *mut c_void
    ) -> *mut sfShape {
        assert_some!(get_point_count);
        assert_some!(get_point);
        let points = CallbackPoints {
            get_point_count,
            get_point,
            user_data,
        };
        into_handle(sfShape {
            shape: Shape::new(points),
            texture: std::ptr::null(),
        })
    }
}

handle_lifecycle!(sfShape);
shape_fns!(sfShape);

extern_fn! {
    /// Rebuild the geometry after the points behind the callbacks changed.
    ///
    /// ## Safety
    /// `shape` must be null or valid.
    fn sfShape_update(shape: *mut sfShape) mut |shape| {
        shape.shape.update();
    }
}

/// A circle approximated by a regular polygon.
#[derive(Debug, Clone)]
pub struct sfCircleShape {
    pub(crate) shape: CircleShape,
    pub(crate) texture: *const sfTexture,
}

extern_fn! {
    /// Create a circle of radius zero with 30 points.
    fn sfCircleShape_create() -> *mut sfCircleShape {
        into_handle(sfCircleShape {
            shape: CircleShape::circle(0.0, 30),
            texture: std::ptr::null(),
        })
    }
}

handle_lifecycle!(sfCircleShape);
shape_fns!(sfCircleShape);

extern_fn! {
    /// ## Safety
    /// `shape` must be null or valid.
    fn sfCircleShape_setRadius(shape: *mut sfCircleShape, radius: f32) mut |shape| {
        shape.shape.set_radius(radius);
    }
}

extern_fn! {
    /// ## Safety
    /// `shape` must be null or valid.
    fn sfCircleShape_getRadius(shape: *const sfCircleShape) |shape| -> f32 {
        shape.shape.radius()
    }
}

extern_fn! {
    /// Set how many points approximate the circle.
    ///
    /// ## Safety
    /// `shape` must be null or valid.
    fn sfCircleShape_setPointCount(shape: *mut sfCircleShape, count: usize) mut |shape| {
        shape.shape.set_point_count(count);
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone)]
pub struct sfRectangleShape {
    pub(crate) shape: RectangleShape,
    pub(crate) texture: *const sfTexture,
}

extern_fn! {
    /// Create an empty rectangle.
    fn sfRectangleShape_create() -> *mut sfRectangleShape {
        into_handle(sfRectangleShape {
            shape: RectangleShape::rectangle(Vector2f::new(0.0, 0.0)),
            texture: std::ptr::null(),
        })
    }
}

handle_lifecycle!(sfRectangleShape);
shape_fns!(sfRectangleShape);

extern_fn! {
    /// ## Safety
    /// `shape` must be null or valid.
    fn sfRectangleShape_setSize(shape: *mut sfRectangleShape, size: sfVector2f) mut |shape| {
        shape.shape.set_size(size.into());
    }
}

extern_fn! {
    /// ## Safety
    /// `shape` must be null or valid.
    fn sfRectangleShape_getSize(shape: *const sfRectangleShape) |shape| -> sfVector2f {
        shape.shape.size().into()
    }
}

/// A polygon given point by point, which must stay convex.
#[derive(Debug, Clone)]
pub struct sfConvexShape {
    pub(crate) shape: ConvexShape,
    pub(crate) texture: *const sfTexture,
}

extern_fn! {
    /// Create a convex shape with no points.
    fn sfConvexShape_create() -> *mut sfConvexShape {
        into_handle(sfConvexShape {
            shape: ConvexShape::convex(0),
            texture: std::ptr::null(),
        })
    }
}

handle_lifecycle!(sfConvexShape);
shape_fns!(sfConvexShape);

extern_fn! {
    /// Resize to `count` points. New points start at the origin.
    ///
    /// ## Safety
    /// `shape` must be null or valid.
    fn sfConvexShape_setPointCount(shape: *mut sfConvexShape, count: usize) mut |shape| {
        shape.shape.set_point_count(count);
    }
}

extern_fn! {
    /// Move one point. Out of range indices are ignored.
    ///
    /// ## Safety
    /// `shape` must be null or valid.
    fn sfConvexShape_setPoint(shape: *mut sfConvexShape, index: usize, point: sfVector2f) mut |shape| {
        shape.shape.set_point(index, point.into());
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ctypes::{sfColor, sfIntRect, sfVector2i, sfVector2u};
    use crate::graphics::texture::{sfTexture_create, sfTexture_destroy};

    unsafe extern "C" fn point_count(user_data: *mut c_void) -> usize {
        unsafe { &*user_data.cast::<Vec<sfVector2f>>() }.len()
    }

    unsafe extern "C" fn point(index: usize, user_data: *mut c_void) -> sfVector2f {
        (unsafe { &*user_data.cast::<Vec<sfVector2f>>() })[index]
    }

    fn triangle() -> Vec<sfVector2f> {
        vec![
            sfVector2f { x: 0.0, y: 0.0 },
            sfVector2f { x: 6.0, y: 0.0 },
            sfVector2f { x: 0.0, y: 3.0 },
        ]
    }

    #[test]
    fn callbacks_drive_geometry() {
        let points = Box::into_raw(Box::new(triangle()));
        unsafe {
            let shape = sfShape_create(Some(point_count), Some(point), points.cast());
            assert_eq!(3, sfShape_getPointCount(shape));
            assert_eq!(sfVector2f { x: 6.0, y: 0.0 }, sfShape_getPoint(shape, 1));
            assert_eq!(sfVector2f::default(), sfShape_getPoint(shape, 3));
            assert_eq!(sfVector2f { x: 6.0, y: 3.0 }, sfShape_getLocalBounds(shape).size);

            (*points).push(sfVector2f { x: 6.0, y: 6.0 });
            (*points).swap(2, 3);
            assert_eq!(sfVector2f { x: 6.0, y: 3.0 }, sfShape_getLocalBounds(shape).size);
            sfShape_update(shape);
            assert_eq!(4, sfShape_getPointCount(shape));
            assert_eq!(sfVector2f { x: 6.0, y: 6.0 }, sfShape_getLocalBounds(shape).size);

            sfShape_destroy(shape);
            drop(Box::from_raw(points));
        }
    }

    #[test]
    fn missing_callbacks_are_rejected() {
        unsafe {
            assert!(sfShape_create(None, Some(point), std::ptr::null_mut()).is_null());
            assert!(sfShape_create(Some(point_count), None, std::ptr::null_mut()).is_null());
        }
    }

    #[test]
    fn circle_and_rectangle() {
        unsafe {
            let circle = sfCircleShape_create();
            assert_eq!(30, sfCircleShape_getPointCount(circle));
            sfCircleShape_setRadius(circle, 10.0);
            sfCircleShape_setPointCount(circle, 4);
            assert_eq!(10.0, sfCircleShape_getRadius(circle));
            let bounds = sfCircleShape_getLocalBounds(circle);
            assert!((bounds.size.x - 20.0).abs() < 1e-4);

            let rectangle = sfRectangleShape_create();
            sfRectangleShape_setSize(rectangle, sfVector2f { x: 10.0, y: 20.0 });
            sfRectangleShape_setOutlineThickness(rectangle, 2.0);
            let bounds = sfRectangleShape_getLocalBounds(rectangle);
            assert_eq!(sfVector2f { x: -2.0, y: -2.0 }, bounds.position);
            assert_eq!(sfVector2f { x: 14.0, y: 24.0 }, bounds.size);
            assert_eq!(sfVector2f { x: 5.0, y: 10.0 }, sfRectangleShape_getGeometricCenter(rectangle));

            sfRectangleShape_setPosition(rectangle, sfVector2f { x: 1.0, y: 1.0 });
            assert_eq!(
                sfVector2f { x: -1.0, y: -1.0 },
                sfRectangleShape_getGlobalBounds(rectangle).position
            );

            sfCircleShape_destroy(circle);
            sfRectangleShape_destroy(rectangle);
        }
    }

    #[test]
    fn convex_points_and_copies() {
        unsafe {
            let shape = sfConvexShape_create();
            sfConvexShape_setPointCount(shape, 3);
            sfConvexShape_setPoint(shape, 1, sfVector2f { x: 4.0, y: 0.0 });
            sfConvexShape_setPoint(shape, 2, sfVector2f { x: 0.0, y: 4.0 });
            sfConvexShape_setPoint(shape, 9, sfVector2f { x: 9.0, y: 9.0 });
            sfConvexShape_setFillColor(shape, sfColor { r: 10, g: 20, b: 30, a: 40 });

            let copy = sfConvexShape_copy(shape);
            sfConvexShape_setPoint(shape, 1, sfVector2f { x: 8.0, y: 0.0 });
            sfConvexShape_setOutlineColor(shape, sfColor::default());

            assert_eq!(sfVector2f { x: 4.0, y: 0.0 }, sfConvexShape_getPoint(copy, 1));
            assert_eq!(sfColor { r: 10, g: 20, b: 30, a: 40 }, sfConvexShape_getFillColor(copy));
            assert_eq!(sfColor { r: 255, g: 255, b: 255, a: 255 }, sfConvexShape_getOutlineColor(copy));
            assert_eq!(0.0, sfConvexShape_getOutlineThickness(copy));

            sfConvexShape_destroy(shape);
            sfConvexShape_destroy(copy);
        }
    }

    #[test]
    fn callback_shape_copies_are_independent() {
        let points = Box::into_raw(Box::new(triangle()));
        unsafe {
            let shape = sfShape_create(Some(point_count), Some(point), points.cast());
            sfShape_setFillColor(shape, sfColor { r: 1, g: 2, b: 3, a: 4 });
            let copy = sfShape_copy(shape);

            sfShape_setFillColor(shape, sfColor::default());
            sfShape_setPosition(shape, sfVector2f { x: 5.0, y: 5.0 });
            (*points).push(sfVector2f { x: 6.0, y: 6.0 });
            (*points).swap(2, 3);
            sfShape_update(shape);

            assert_eq!(sfColor { r: 1, g: 2, b: 3, a: 4 }, sfShape_getFillColor(copy));
            assert_eq!(sfVector2f::default(), sfShape_getPosition(copy));
            assert_eq!(sfVector2f { x: 6.0, y: 3.0 }, sfShape_getLocalBounds(copy).size);

            sfShape_destroy(shape);
            sfShape_update(copy);
            assert_eq!(sfVector2f { x: 6.0, y: 6.0 }, sfShape_getLocalBounds(copy).size);

            sfShape_destroy(copy);
            drop(Box::from_raw(points));
        }
    }

    #[test]
    fn circle_copies_are_independent() {
        unsafe {
            let texture = sfTexture_create(sfVector2u { x: 8, y: 8 });
            let circle = sfCircleShape_create();
            sfCircleShape_setRadius(circle, 4.0);
            sfCircleShape_setPointCount(circle, 6);
            sfCircleShape_setTexture(circle, texture, true);
            let copy = sfCircleShape_copy(circle);

            sfCircleShape_setRadius(circle, 9.0);
            sfCircleShape_setPointCount(circle, 12);
            sfCircleShape_setFillColor(circle, sfColor::default());
            sfCircleShape_setTexture(circle, std::ptr::null(), false);

            assert_eq!(4.0, sfCircleShape_getRadius(copy));
            assert_eq!(6, sfCircleShape_getPointCount(copy));
            assert_eq!(sfColor { r: 255, g: 255, b: 255, a: 255 }, sfCircleShape_getFillColor(copy));
            assert_eq!(texture.cast_const(), sfCircleShape_getTexture(copy));
            assert!(sfCircleShape_getTexture(circle).is_null());

            sfCircleShape_destroy(circle);
            assert_eq!(4.0, sfCircleShape_getRadius(copy));
            sfCircleShape_destroy(copy);
            sfTexture_destroy(texture);
        }
    }

    #[test]
    fn convex_point_count_after_copy() {
        unsafe {
            let shape = sfConvexShape_create();
            sfConvexShape_setPointCount(shape, 3);
            sfConvexShape_setPoint(shape, 2, sfVector2f { x: 0.0, y: 4.0 });
            let copy = sfConvexShape_copy(shape);

            sfConvexShape_setPointCount(shape, 5);
            sfConvexShape_destroy(shape);

            assert_eq!(3, sfConvexShape_getPointCount(copy));
            assert_eq!(sfVector2f { x: 0.0, y: 4.0 }, sfConvexShape_getPoint(copy, 2));
            sfConvexShape_destroy(copy);
        }
    }

    #[test]
    fn texture_rect_follows_texture() {
        unsafe {
            let first = sfTexture_create(sfVector2u { x: 16, y: 8 });
            let second = sfTexture_create(sfVector2u { x: 32, y: 32 });
            let shape = sfRectangleShape_create();
            let full = |x, y| sfIntRect {
                position: sfVector2i::default(),
                size: sfVector2i { x, y },
            };

            sfRectangleShape_setTexture(shape, first, false);
            assert_eq!(full(16, 8), sfRectangleShape_getTextureRect(shape));
            sfRectangleShape_setTexture(shape, second, false);
            assert_eq!(full(16, 8), sfRectangleShape_getTextureRect(shape));
            sfRectangleShape_setTexture(shape, second, true);
            assert_eq!(full(32, 32), sfRectangleShape_getTextureRect(shape));
            assert_eq!(second.cast_const(), sfRectangleShape_getTexture(shape));

            sfRectangleShape_setTexture(shape, std::ptr::null(), true);
            assert!(sfRectangleShape_getTexture(shape).is_null());
            assert_eq!(full(32, 32), sfRectangleShape_getTextureRect(shape));

            sfRectangleShape_destroy(shape);
            sfTexture_destroy(first);
            sfTexture_destroy(second);
        }
    }
}
