use crate::{Angle, FloatRect, Vector2f};
use std::ops::{Mul, MulAssign};

/// A 3x3 affine transform.
///
/// The matrix is stored as a 4x4 column-major array so it can be handed to
/// graphics APIs unchanged. Only the nine entries that form the 3x3 matrix
/// `[a00 a01 a02; a10 a11 a12; a20 a21 a22]` are ever non-trivial:
///
/// ```text
/// [ a00 a10  0  a20
///   a01 a11  0  a21
///    0   0   1   0
///   a02 a12  0  a22 ]
/// ```
#[derive(Debug, Copy, Clone)]
pub struct Transform {
    matrix: [f32; 16],
}

impl Default for Transform {
    fn default() -> Self {
        Transform::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0);

    /// Construct from the nine entries of a 3x3 matrix, given row by row.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        a00: f32,
        a01: f32,
        a02: f32,
        a10: f32,
        a11: f32,
        a12: f32,
        a20: f32,
        a21: f32,
        a22: f32,
    ) -> Transform {
        Transform {
            matrix: [
                a00, a10, 0.0, a20, a01, a11, 0.0, a21, 0.0, 0.0, 1.0, 0.0, a02, a12, 0.0, a22,
            ],
        }
    }

    /// The 4x4 column-major matrix.
    pub const fn matrix(&self) -> &[f32; 16] {
        &self.matrix
    }

    /// The inverse transform, or the identity if this transform is not invertible.
    pub fn inverse(&self) -> Transform {
        let m = &self.matrix;
        let det = m[0] * (m[15] * m[5] - m[7] * m[13]) - m[1] * (m[15] * m[4] - m[7] * m[12])
            + m[3] * (m[13] * m[4] - m[5] * m[12]);

        if det == 0.0 {
            return Transform::IDENTITY;
        }

        Transform::new(
            (m[15] * m[5] - m[7] * m[13]) / det,
            -(m[15] * m[4] - m[7] * m[12]) / det,
            (m[13] * m[4] - m[5] * m[12]) / det,
            -(m[15] * m[1] - m[3] * m[13]) / det,
            (m[15] * m[0] - m[3] * m[12]) / det,
            -(m[13] * m[0] - m[1] * m[12]) / det,
            (m[7] * m[1] - m[3] * m[5]) / det,
            -(m[7] * m[0] - m[3] * m[4]) / det,
            (m[5] * m[0] - m[1] * m[4]) / det,
        )
    }

    pub fn transform_point(&self, point: Vector2f) -> Vector2f {
        let m = &self.matrix;
        Vector2f::new(
            m[0] * point.x + m[4] * point.y + m[12],
            m[1] * point.x + m[5] * point.y + m[13],
        )
    }

    /// The axis-aligned bounding box of the transformed rectangle.
    pub fn transform_rect(&self, rect: &FloatRect) -> FloatRect {
        let corners = [
            self.transform_point(rect.position),
            self.transform_point(Vector2f::new(rect.position.x, rect.position.y + rect.size.y)),
            self.transform_point(Vector2f::new(rect.position.x + rect.size.x, rect.position.y)),
            self.transform_point(rect.position + rect.size),
        ];

        let mut left = corners[0].x;
        let mut top = corners[0].y;
        let mut right = corners[0].x;
        let mut bottom = corners[0].y;

        for corner in &corners[1..] {
            left = left.min(corner.x);
            top = top.min(corner.y);
            right = right.max(corner.x);
            bottom = bottom.max(corner.y);
        }

        FloatRect::new(
            Vector2f::new(left, top),
            Vector2f::new(right - left, bottom - top),
        )
    }

    /// Post-multiply by `other`, so that `other` is applied first.
    pub fn combine(&mut self, other: &Transform) -> &mut Self {
        let a = &self.matrix;
        let b = &other.matrix;

        *self = Transform::new(
            a[0] * b[0] + a[4] * b[1] + a[12] * b[3],
            a[0] * b[4] + a[4] * b[5] + a[12] * b[7],
            a[0] * b[12] + a[4] * b[13] + a[12] * b[15],
            a[1] * b[0] + a[5] * b[1] + a[13] * b[3],
            a[1] * b[4] + a[5] * b[5] + a[13] * b[7],
            a[1] * b[12] + a[5] * b[13] + a[13] * b[15],
            a[3] * b[0] + a[7] * b[1] + a[15] * b[3],
            a[3] * b[4] + a[7] * b[5] + a[15] * b[7],
            a[3] * b[12] + a[7] * b[13] + a[15] * b[15],
        );

        self
    }

    pub fn translate(&mut self, offset: Vector2f) -> &mut Self {
        let translation = Transform::new(1.0, 0.0, offset.x, 0.0, 1.0, offset.y, 0.0, 0.0, 1.0);
        self.combine(&translation)
    }

    pub fn rotate(&mut self, angle: Angle) -> &mut Self {
        let (sin, cos) = angle.as_radians().sin_cos();
        let rotation = Transform::new(cos, -sin, 0.0, sin, cos, 0.0, 0.0, 0.0, 1.0);
        self.combine(&rotation)
    }

    pub fn rotate_around(&mut self, angle: Angle, center: Vector2f) -> &mut Self {
        let (sin, cos) = angle.as_radians().sin_cos();
        let rotation = Transform::new(
            cos,
            -sin,
            center.x * (1.0 - cos) + center.y * sin,
            sin,
            cos,
            center.y * (1.0 - cos) - center.x * sin,
            0.0,
            0.0,
            1.0,
        );
        self.combine(&rotation)
    }

    pub fn scale(&mut self, factors: Vector2f) -> &mut Self {
        let scaling = Transform::new(factors.x, 0.0, 0.0, 0.0, factors.y, 0.0, 0.0, 0.0, 1.0);
        self.combine(&scaling)
    }

    pub fn scale_around(&mut self, factors: Vector2f, center: Vector2f) -> &mut Self {
        let scaling = Transform::new(
            factors.x,
            0.0,
            center.x * (1.0 - factors.x),
            0.0,
            factors.y,
            center.y * (1.0 - factors.y),
            0.0,
            0.0,
            1.0,
        );
        self.combine(&scaling)
    }
}

impl PartialEq for Transform {
    fn eq(&self, other: &Self) -> bool {
        let a = &self.matrix;
        let b = &other.matrix;
        [0, 1, 3, 4, 5, 7, 12, 13, 15]
            .into_iter()
            .all(|index| a[index] == b[index])
    }
}

impl Mul for Transform {
    type Output = Transform;

    fn mul(mut self, rhs: Transform) -> Transform {
        self.combine(&rhs);
        self
    }
}

impl MulAssign for Transform {
    fn mul_assign(&mut self, rhs: Transform) {
        self.combine(&rhs);
    }
}

impl Mul<Vector2f> for Transform {
    type Output = Vector2f;

    fn mul(self, rhs: Vector2f) -> Vector2f {
        self.transform_point(rhs)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn approx(a: &Transform, b: &Transform) -> bool {
        a.matrix
            .iter()
            .zip(b.matrix.iter())
            .all(|(x, y)| (x - y).abs() < 1e-5)
    }

    #[test]
    fn identity_inverse() {
        assert_eq!(Transform::IDENTITY, Transform::IDENTITY.inverse());
    }

    #[test]
    fn double_inverse() {
        let transform = Transform::new(2.0, 1.0, 3.0, 0.5, 4.0, -2.0, 0.0, 0.0, 1.0);
        assert!(approx(&transform, &transform.inverse().inverse()));
        assert!(approx(
            &Transform::IDENTITY,
            &(transform * transform.inverse())
        ));
    }

    #[test]
    fn singular_inverse_is_identity() {
        let singular = Transform::new(1.0, 2.0, 0.0, 2.0, 4.0, 0.0, 0.0, 0.0, 1.0);
        assert_eq!(Transform::IDENTITY, singular.inverse());
    }

    #[test]
    fn matrix_layout() {
        let transform = Transform::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        assert_eq!(
            &[1.0, 4.0, 0.0, 7.0, 2.0, 5.0, 0.0, 8.0, 0.0, 0.0, 1.0, 0.0, 3.0, 6.0, 0.0, 9.0],
            transform.matrix()
        );
    }

    #[test]
    fn translate_then_scale() {
        let mut transform = Transform::IDENTITY;
        transform
            .translate(Vector2f::new(10.0, 5.0))
            .scale(Vector2f::new(2.0, 3.0));
        assert_eq!(
            Vector2f::new(12.0, 8.0),
            transform.transform_point(Vector2f::new(1.0, 1.0))
        );
    }

    #[test]
    fn rotated_rect_bounds() {
        let mut transform = Transform::IDENTITY;
        transform.rotate(Angle::degrees(90.0));
        let bounds = transform.transform_rect(&FloatRect::new(
            Vector2f::new(0.0, 0.0),
            Vector2f::new(10.0, 5.0),
        ));
        assert!((bounds.position.x + 5.0).abs() < 1e-4);
        assert!(bounds.position.y.abs() < 1e-4);
        assert!((bounds.size.x - 5.0).abs() < 1e-4);
        assert!((bounds.size.y - 10.0).abs() < 1e-4);
    }
}
