use crate::ctypes::{sfFloatRect, sfIntRect, sfVector2f, sfVector2i};
use crate::ffi::extern_fn;
use sfmedia::system::Rect;

macro_rules! rect_fns {
    ($rect:ident, $vector:ident, $component:ty) => {
        ::paste::paste! {
            extern_fn! {
                /// Whether `point` lies inside the rect. The right and bottom edges are excluded.
                ///
                /// ## Safety
                /// `rect` must be null or valid.
                fn [<$rect _contains>](rect: *const $rect, point: $vector) |rect| -> bool {
                    Rect::<$component>::from(*rect).contains(point.into())
                }
            }

            extern_fn! {
                /// Whether two rects overlap.
                ///
                /// If `intersection` is not null, the overlapping area is written to it, or an
                /// empty rect when they do not overlap.
                ///
                /// ## Safety
                /// `rect1` and `rect2` must be null or valid. `intersection` must be null or
                /// valid for writes.
                fn [<$rect _intersects>](
                    rect1: *const $rect,
                    rect2: *const $rect,
                    intersection: *mut $rect
                ) |rect1, rect2| -> bool {
                    let overlap = Rect::<$component>::from(*rect1)
                        .find_intersection(&Rect::from(*rect2));
                    if !intersection.is_null() {
                        unsafe { intersection.write(overlap.unwrap_or_default().into()) };
                    }
                    overlap.is_some()
                }
            }

            extern_fn! {
                /// The center point of the rect.
                fn [<$rect _getCenter>](rect: $rect) -> $vector {
                    Rect::<$component>::from(rect).center().into()
                }
            }
        }
    };
}

rect_fns!(sfFloatRect, sfVector2f, f32);
rect_fns!(sfIntRect, sfVector2i, i32);
