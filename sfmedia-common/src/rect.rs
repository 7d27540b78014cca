use crate::vector::Vector2;
use num_traits::{AsPrimitive, Num};

/// An axis-aligned rectangle defined by its top-left corner and size.
///
/// Sizes may be negative; containment and intersection normalise the
/// rectangle first.
#[repr(C)]
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rect<T> {
    pub position: Vector2<T>,
    pub size: Vector2<T>,
}

pub type FloatRect = Rect<f32>;
pub type IntRect = Rect<i32>;

fn min_of<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}

fn max_of<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        b
    } else {
        a
    }
}

impl<T> Rect<T> {
    pub const fn new(position: Vector2<T>, size: Vector2<T>) -> Self {
        Rect { position, size }
    }

    pub fn cast<U>(self) -> Rect<U>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        Rect::new(self.position.cast(), self.size.cast())
    }
}

impl<T: Num + PartialOrd + Copy> Rect<T> {
    fn extents(&self) -> (T, T, T, T) {
        let x2 = self.position.x + self.size.x;
        let y2 = self.position.y + self.size.y;
        (
            min_of(self.position.x, x2),
            max_of(self.position.x, x2),
            min_of(self.position.y, y2),
            max_of(self.position.y, y2),
        )
    }

    /// Whether `point` lies inside the rectangle.
    ///
    /// The left and top edges are inclusive, the right and bottom edges exclusive.
    pub fn contains(&self, point: Vector2<T>) -> bool {
        let (min_x, max_x, min_y, max_y) = self.extents();
        point.x >= min_x && point.x < max_x && point.y >= min_y && point.y < max_y
    }

    /// The overlapping area of two rectangles, if they overlap.
    pub fn find_intersection(&self, other: &Rect<T>) -> Option<Rect<T>> {
        let (r1_min_x, r1_max_x, r1_min_y, r1_max_y) = self.extents();
        let (r2_min_x, r2_max_x, r2_min_y, r2_max_y) = other.extents();

        let left = max_of(r1_min_x, r2_min_x);
        let top = max_of(r1_min_y, r2_min_y);
        let right = min_of(r1_max_x, r2_max_x);
        let bottom = min_of(r1_max_y, r2_max_y);

        if left < right && top < bottom {
            Some(Rect::new(
                Vector2::new(left, top),
                Vector2::new(right - left, bottom - top),
            ))
        } else {
            None
        }
    }

    pub fn center(&self) -> Vector2<T> {
        let two = T::one() + T::one();
        Vector2::new(
            self.position.x + self.size.x / two,
            self.position.y + self.size.y / two,
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn contains_is_half_open() {
        let rect = IntRect::new(Vector2::new(0, 0), Vector2::new(10, 10));
        assert!(rect.contains(Vector2::new(0, 0)));
        assert!(rect.contains(Vector2::new(9, 9)));
        assert!(!rect.contains(Vector2::new(10, 10)));
        assert!(!rect.contains(Vector2::new(10, 5)));
    }

    #[test]
    fn contains_negative_size() {
        let rect = FloatRect::new(Vector2::new(10.0, 10.0), Vector2::new(-10.0, -10.0));
        assert!(rect.contains(Vector2::new(5.0, 5.0)));
        assert!(!rect.contains(Vector2::new(10.0, 10.0)));
    }

    #[test]
    fn intersects() {
        let a = IntRect::new(Vector2::new(0, 0), Vector2::new(10, 10));
        let b = IntRect::new(Vector2::new(5, 5), Vector2::new(10, 10));
        assert_eq!(
            Some(IntRect::new(Vector2::new(5, 5), Vector2::new(5, 5))),
            a.find_intersection(&b)
        );

        let c = IntRect::new(Vector2::new(10, 0), Vector2::new(5, 5));
        assert_eq!(None, a.find_intersection(&c));
    }

    #[test]
    fn center() {
        let rect = FloatRect::new(Vector2::new(2.0, 4.0), Vector2::new(4.0, 8.0));
        assert_eq!(Vector2::new(4.0, 8.0), rect.center());
    }
}
