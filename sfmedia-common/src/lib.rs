//! Value types shared by every sfmedia module.
//!
//! Everything here is a plain value with no identity: vectors, angles, rectangles,
//! colors, durations and 2D transforms. The only types with behaviour over time are
//! [`Clock`](clock::Clock) and the [`InputStream`](stream::InputStream) family.

/// Angle type with explicit units.
pub mod angle;
/// Stopwatch measuring elapsed [`Time`](time::Time).
pub mod clock;
/// RGBA colors with saturating arithmetic.
pub mod color;
/// Axis-aligned rectangles.
pub mod rect;
/// User-implementable byte streams.
pub mod stream;
/// Microsecond precision durations.
pub mod time;
/// 3x3 affine transforms.
pub mod transform;
/// 2D and 3D vectors.
pub mod vector;
/// Window creation value types.
pub mod window;

pub use angle::Angle;
pub use clock::Clock;
pub use color::Color;
pub use rect::{FloatRect, IntRect, Rect};
pub use time::Time;
pub use transform::Transform;
pub use vector::{Vector2, Vector2f, Vector2i, Vector2u, Vector3, Vector3f};
