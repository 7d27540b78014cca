use sfmedia_common::{Angle, Transform, Vector2f};

/// Position, rotation, scale and origin of a drawable, composed lazily into a [`Transform`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transformable {
    origin: Vector2f,
    position: Vector2f,
    rotation: Angle,
    scale: Vector2f,
}

impl Default for Transformable {
    fn default() -> Self {
        Transformable {
            origin: Vector2f::new(0.0, 0.0),
            position: Vector2f::new(0.0, 0.0),
            rotation: Angle::ZERO,
            scale: Vector2f::new(1.0, 1.0),
        }
    }
}

impl Transformable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> Vector2f {
        self.position
    }

    pub fn set_position(&mut self, position: Vector2f) {
        self.position = position;
    }

    /// The rotation, always in `[0, 360)` degrees.
    pub fn rotation(&self) -> Angle {
        self.rotation
    }

    pub fn set_rotation(&mut self, angle: Angle) {
        self.rotation = angle.wrap_unsigned();
    }

    pub fn scale(&self) -> Vector2f {
        self.scale
    }

    pub fn set_scale(&mut self, factors: Vector2f) {
        self.scale = factors;
    }

    pub fn origin(&self) -> Vector2f {
        self.origin
    }

    pub fn set_origin(&mut self, origin: Vector2f) {
        self.origin = origin;
    }

    pub fn move_by(&mut self, offset: Vector2f) {
        self.position += offset;
    }

    pub fn rotate(&mut self, angle: Angle) {
        self.set_rotation(self.rotation + angle);
    }

    pub fn scale_by(&mut self, factors: Vector2f) {
        self.scale = self.scale.component_wise_mul(factors);
    }

    pub fn transform(&self) -> Transform {
        let angle = -self.rotation.as_radians();
        let (sine, cosine) = angle.sin_cos();
        let sxc = self.scale.x * cosine;
        let syc = self.scale.y * cosine;
        let sxs = self.scale.x * sine;
        let sys = self.scale.y * sine;
        let tx = -self.origin.x * sxc - self.origin.y * sys + self.position.x;
        let ty = self.origin.x * sxs - self.origin.y * syc + self.position.y;

        Transform::new(sxc, sys, tx, -sxs, syc, ty, 0.0, 0.0, 1.0)
    }

    pub fn inverse_transform(&self) -> Transform {
        self.transform().inverse()
    }
}

/// Access to the [`Transformable`] state embedded in a drawable.
pub trait AsTransformable {
    fn transformable(&self) -> &Transformable;
    fn transformable_mut(&mut self) -> &mut Transformable;
}

impl AsTransformable for Transformable {
    fn transformable(&self) -> &Transformable {
        self
    }

    fn transformable_mut(&mut self) -> &mut Transformable {
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rotation_wraps() {
        let mut transformable = Transformable::new();
        transformable.set_rotation(Angle::degrees(-90.0));
        assert_eq!(270.0, transformable.rotation().as_degrees());
        transformable.rotate(Angle::degrees(100.0));
        assert_eq!(10.0, transformable.rotation().as_degrees());
    }

    #[test]
    fn origin_is_subtracted() {
        let mut transformable = Transformable::new();
        transformable.set_origin(Vector2f::new(5.0, 5.0));
        transformable.set_position(Vector2f::new(10.0, 0.0));
        transformable.set_scale(Vector2f::new(2.0, 2.0));

        let point = transformable.transform().transform_point(Vector2f::new(5.0, 5.0));
        assert_eq!(Vector2f::new(10.0, 0.0), point);
        let point = transformable.transform().transform_point(Vector2f::new(6.0, 5.0));
        assert_eq!(Vector2f::new(12.0, 0.0), point);
    }

    #[test]
    fn inverse_maps_back() {
        let mut transformable = Transformable::new();
        transformable.set_position(Vector2f::new(3.0, -4.0));
        transformable.set_rotation(Angle::degrees(30.0));
        let point = Vector2f::new(7.0, 2.0);
        let back = transformable
            .inverse_transform()
            .transform_point(transformable.transform().transform_point(point));
        assert!((back - point).length() < 1e-4);
    }
}
