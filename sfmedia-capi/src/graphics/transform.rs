use crate::ctypes::{sfFloatRect, sfTransform, sfVector2f};
use crate::ffi::extern_fn;
use sfmedia::system::{Angle, Transform};

/// The identity transform.
#[no_mangle]
pub static sfTransform_Identity: sfTransform = sfTransform::from_native(&Transform::IDENTITY);

/// Apply `apply` to the engine transform behind `transform` and store the result back.
fn edit(transform: &mut sfTransform, apply: impl FnOnce(&mut Transform)) {
    let mut native = Transform::from(*transform);
    apply(&mut native);
    *transform = native.into();
}

extern_fn! {
    /// Construct a transform from the nine entries of a 3x3 matrix, given row by row.
    #[allow(clippy::too_many_arguments)]
    fn sfTransform_fromMatrix(
        a00: f32, a01: f32, a02: f32,
        a10: f32, a11: f32, a12: f32,
        a20: f32, a21: f32, a22: f32
    ) -> sfTransform {
        Transform::new(a00, a01, a02, a10, a11, a12, a20, a21, a22).into()
    }
}

extern_fn! {
    /// Write the transform as a 4x4 column-major matrix of 16 floats.
    ///
    /// ## Safety
    /// `transform` must be null or valid. `matrix` must be null or valid for 16 float writes.
    fn sfTransform_getMatrix(transform: *const sfTransform, matrix: *mut f32) |transform| {
        crate::error::assert_non_null!(matrix);
        let native = Transform::from(*transform);
        let out = unsafe { std::slice::from_raw_parts_mut(matrix, 16) };
        out.copy_from_slice(native.matrix());
    }
}

extern_fn! {
    /// The inverse of the transform, or the identity if it has none.
    ///
    /// ## Safety
    /// `transform` must be null or valid.
    fn sfTransform_getInverse(transform: *const sfTransform) |transform| -> sfTransform {
        Transform::from(*transform).inverse().into()
    }
}

extern_fn! {
    /// Apply the transform to a point.
    ///
    /// ## Safety
    /// `transform` must be null or valid.
    fn sfTransform_transformPoint(transform: *const sfTransform, point: sfVector2f) |transform| -> sfVector2f {
        Transform::from(*transform).transform_point(point.into()).into()
    }
}

extern_fn! {
    /// The axis-aligned bounding rect of a transformed rect.
    ///
    /// ## Safety
    /// `transform` must be null or valid.
    fn sfTransform_transformRect(transform: *const sfTransform, rect: sfFloatRect) |transform| -> sfFloatRect {
        Transform::from(*transform).transform_rect(&rect.into()).into()
    }
}

extern_fn! {
    /// Combine `transform` with `other`, storing the result in `transform`.
    ///
    /// ## Safety
    /// `transform` and `other` must be null or valid.
    fn sfTransform_combine(transform: *mut sfTransform, other: *const sfTransform) |other|; mut |transform| {
        let other = Transform::from(*other);
        edit(transform, |native| {
            native.combine(&other);
        });
    }
}

extern_fn! {
    /// Combine the transform with a translation.
    ///
    /// ## Safety
    /// `transform` must be null or valid.
    fn sfTransform_translate(transform: *mut sfTransform, offset: sfVector2f) mut |transform| {
        edit(transform, |native| {
            native.translate(offset.into());
        });
    }
}

extern_fn! {
    /// Combine the transform with a rotation of `angle` degrees.
    ///
    /// ## Safety
    /// `transform` must be null or valid.
    fn sfTransform_rotate(transform: *mut sfTransform, angle: f32) mut |transform| {
        edit(transform, |native| {
            native.rotate(Angle::degrees(angle));
        });
    }
}

extern_fn! {
    /// Combine the transform with a rotation of `angle` degrees around `center`.
    ///
    /// ## Safety
    /// `transform` must be null or valid.
    fn sfTransform_rotateWithCenter(transform: *mut sfTransform, angle: f32, center: sfVector2f) mut |transform| {
        edit(transform, |native| {
            native.rotate_around(Angle::degrees(angle), center.into());
        });
    }
}

extern_fn! {
    /// Combine the transform with a scaling.
    ///
    /// ## Safety
    /// `transform` must be null or valid.
    fn sfTransform_scale(transform: *mut sfTransform, scale: sfVector2f) mut |transform| {
        edit(transform, |native| {
            native.scale(scale.into());
        });
    }
}

extern_fn! {
    /// Combine the transform with a scaling around `center`.
    ///
    /// ## Safety
    /// `transform` must be null or valid.
    fn sfTransform_scaleWithCenter(transform: *mut sfTransform, scale: sfVector2f, center: sfVector2f) mut |transform| {
        edit(transform, |native| {
            native.scale_around(scale.into(), center.into());
        });
    }
}

extern_fn! {
    /// Whether two transforms are equal.
    ///
    /// ## Safety
    /// `left` and `right` must be null or valid.
    fn sfTransform_equal(left: *const sfTransform, right: *const sfTransform) |left, right| -> bool {
        Transform::from(*left) == Transform::from(*right)
    }
}
