use crate::transformable::{AsTransformable, Transformable};
use sfmedia_common::{Color, FloatRect, IntRect, Vector2f};
use std::f32::consts::PI;

/// The geometry of a shape: an ordered outline of points.
pub trait ShapePoints {
    fn point_count(&self) -> usize;

    /// The point at `index`. Indices are always below [`point_count`](ShapePoints::point_count).
    fn point(&self, index: usize) -> Vector2f;
}

/// A circle approximated by a regular polygon.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle {
    pub radius: f32,
    pub point_count: usize,
}

impl Default for Circle {
    fn default() -> Self {
        Circle {
            radius: 0.0,
            point_count: 30,
        }
    }
}

impl ShapePoints for Circle {
    fn point_count(&self) -> usize {
        self.point_count
    }

    fn point(&self, index: usize) -> Vector2f {
        let angle = index as f32 * 2.0 * PI / self.point_count as f32 - PI / 2.0;
        Vector2f::new(
            self.radius * (1.0 + angle.cos()),
            self.radius * (1.0 + angle.sin()),
        )
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rectangle {
    pub size: Vector2f,
}

impl ShapePoints for Rectangle {
    fn point_count(&self) -> usize {
        4
    }

    fn point(&self, index: usize) -> Vector2f {
        match index {
            1 => Vector2f::new(self.size.x, 0.0),
            2 => self.size,
            3 => Vector2f::new(0.0, self.size.y),
            _ => Vector2f::new(0.0, 0.0),
        }
    }
}

/// A polygon given point by point. It must stay convex to render correctly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Convex {
    pub points: Vec<Vector2f>,
}

impl Convex {
    /// Resize to `count` points. New points start at the origin.
    pub fn set_point_count(&mut self, count: usize) {
        self.points.resize(count, Vector2f::new(0.0, 0.0));
    }
}

impl ShapePoints for Convex {
    fn point_count(&self) -> usize {
        self.points.len()
    }

    fn point(&self, index: usize) -> Vector2f {
        self.points.get(index).copied().unwrap_or_default()
    }
}

/// A vertex of the generated geometry.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vertex {
    pub position: Vector2f,
    pub color: Color,
    pub tex_coords: Vector2f,
}

/// A filled, outlined polygon whose outline is provided by `P`.
///
/// Geometry is rebuilt by [`update`](Shape::update) whenever the points or the
/// outline thickness change. Custom point providers that change on their own must
/// call `update` themselves.
#[derive(Debug, Clone)]
pub struct Shape<P> {
    points: P,
    fill_color: Color,
    outline_color: Color,
    outline_thickness: f32,
    texture_rect: IntRect,
    transformable: Transformable,
    vertices: Vec<Vertex>,
    outline_vertices: Vec<Vertex>,
    inside_bounds: FloatRect,
    bounds: FloatRect,
}

pub type CircleShape = Shape<Circle>;
pub type RectangleShape = Shape<Rectangle>;
pub type ConvexShape = Shape<Convex>;

impl<P: ShapePoints> Shape<P> {
    pub fn new(points: P) -> Shape<P> {
        let mut shape = Shape {
            points,
            fill_color: Color::WHITE,
            outline_color: Color::WHITE,
            outline_thickness: 0.0,
            texture_rect: IntRect::default(),
            transformable: Transformable::default(),
            vertices: Vec::new(),
            outline_vertices: Vec::new(),
            inside_bounds: FloatRect::default(),
            bounds: FloatRect::default(),
        };
        shape.update();
        shape
    }

    pub fn points(&self) -> &P {
        &self.points
    }

    /// Change the geometry and rebuild.
    pub fn edit_points(&mut self, edit: impl FnOnce(&mut P)) {
        edit(&mut self.points);
        self.update();
    }

    pub fn point_count(&self) -> usize {
        self.points.point_count()
    }

    pub fn point(&self, index: usize) -> Vector2f {
        self.points.point(index)
    }

    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
        self.update_fill_colors();
    }

    pub fn outline_color(&self) -> Color {
        self.outline_color
    }

    pub fn set_outline_color(&mut self, color: Color) {
        self.outline_color = color;
        self.update_outline_colors();
    }

    pub fn outline_thickness(&self) -> f32 {
        self.outline_thickness
    }

    pub fn set_outline_thickness(&mut self, thickness: f32) {
        self.outline_thickness = thickness;
        self.update();
    }

    pub fn texture_rect(&self) -> IntRect {
        self.texture_rect
    }

    pub fn set_texture_rect(&mut self, rect: IntRect) {
        self.texture_rect = rect;
        self.update_tex_coords();
    }

    /// The filled vertices as a triangle fan, centroid first and first point repeated last.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// The outline as a triangle strip.
    pub fn outline_vertices(&self) -> &[Vertex] {
        &self.outline_vertices
    }

    /// The centroid of the fill area.
    pub fn geometric_center(&self) -> Vector2f {
        let count = self.points.point_count();
        match count {
            0 => Vector2f::new(0.0, 0.0),
            1 => self.points.point(0),
            2 => (self.points.point(0) + self.points.point(1)) / 2.0,
            _ => {
                let mut centroid = Vector2f::new(0.0, 0.0);
                let mut twice_area = 0.0;
                let mut previous = self.points.point(count - 1);
                for index in 0..count {
                    let current = self.points.point(index);
                    let product = previous.cross(current);
                    twice_area += product;
                    centroid += (current + previous) * product;
                    previous = current;
                }

                if twice_area != 0.0 {
                    centroid / (3.0 * twice_area)
                } else {
                    self.inside_bounds.center()
                }
            }
        }
    }

    pub fn local_bounds(&self) -> FloatRect {
        self.bounds
    }

    pub fn global_bounds(&self) -> FloatRect {
        self.transformable.transform().transform_rect(&self.bounds)
    }

    /// Rebuild the fill and outline geometry from the current points.
    pub fn update(&mut self) {
        let count = self.points.point_count();
        if count < 3 {
            self.vertices.clear();
            self.outline_vertices.clear();
            self.inside_bounds = FloatRect::default();
            self.bounds = FloatRect::default();
            return;
        }

        self.vertices.resize(count + 2, Vertex::default());
        for index in 0..count {
            self.vertices[index + 1].position = self.points.point(index);
        }
        self.vertices[count + 1].position = self.vertices[1].position;
        self.inside_bounds = vertex_bounds(&self.vertices[1..]);
        self.vertices[0].position = self.inside_bounds.center();

        self.update_fill_colors();
        self.update_tex_coords();
        self.update_outline();
    }

    fn update_fill_colors(&mut self) {
        for vertex in &mut self.vertices {
            vertex.color = self.fill_color;
        }
    }

    fn update_tex_coords(&mut self) {
        let rect = self.texture_rect.cast::<f32>();
        let bounds = self.inside_bounds;
        for vertex in &mut self.vertices {
            let ratio_x = if bounds.size.x > 0.0 {
                (vertex.position.x - bounds.position.x) / bounds.size.x
            } else {
                0.0
            };
            let ratio_y = if bounds.size.y > 0.0 {
                (vertex.position.y - bounds.position.y) / bounds.size.y
            } else {
                0.0
            };
            vertex.tex_coords = Vector2f::new(
                rect.position.x + rect.size.x * ratio_x,
                rect.position.y + rect.size.y * ratio_y,
            );
        }
    }

    fn update_outline(&mut self) {
        if self.outline_thickness == 0.0 {
            self.outline_vertices.clear();
            self.bounds = self.inside_bounds;
            return;
        }

        let count = self.vertices.len() - 2;
        self.outline_vertices
            .resize((count + 1) * 2, Vertex::default());

        let center = self.vertices[0].position;
        for index in 0..count {
            let current = index + 1;
            let previous = if index == 0 { count } else { current - 1 };
            let next = current + 1;

            let p0 = self.vertices[previous].position;
            let p1 = self.vertices[current].position;
            let p2 = self.vertices[next].position;

            let mut n1 = edge_normal(p0, p1);
            let mut n2 = edge_normal(p1, p2);

            // Normals must point away from the center.
            if n1.dot(center - p1) > 0.0 {
                n1 = -n1;
            }
            if n2.dot(center - p1) > 0.0 {
                n2 = -n2;
            }

            let factor = 1.0 + (n1.x * n2.x + n1.y * n2.y);
            let normal = (n1 + n2) / factor;

            self.outline_vertices[index * 2].position = p1;
            self.outline_vertices[index * 2 + 1].position = p1 + normal * self.outline_thickness;
        }

        self.outline_vertices[count * 2].position = self.outline_vertices[0].position;
        self.outline_vertices[count * 2 + 1].position = self.outline_vertices[1].position;

        self.update_outline_colors();
        self.bounds = vertex_bounds(&self.outline_vertices);
    }

    fn update_outline_colors(&mut self) {
        for vertex in &mut self.outline_vertices {
            vertex.color = self.outline_color;
        }
    }
}

impl<P> AsTransformable for Shape<P> {
    fn transformable(&self) -> &Transformable {
        &self.transformable
    }

    fn transformable_mut(&mut self) -> &mut Transformable {
        &mut self.transformable
    }
}

impl CircleShape {
    pub fn circle(radius: f32, point_count: usize) -> CircleShape {
        Shape::new(Circle {
            radius,
            point_count,
        })
    }

    pub fn radius(&self) -> f32 {
        self.points.radius
    }

    pub fn set_radius(&mut self, radius: f32) {
        self.edit_points(|circle| circle.radius = radius);
    }

    pub fn set_point_count(&mut self, count: usize) {
        self.edit_points(|circle| circle.point_count = count);
    }
}

impl RectangleShape {
    pub fn rectangle(size: Vector2f) -> RectangleShape {
        Shape::new(Rectangle { size })
    }

    pub fn size(&self) -> Vector2f {
        self.points.size
    }

    pub fn set_size(&mut self, size: Vector2f) {
        self.edit_points(|rectangle| rectangle.size = size);
    }
}

impl ConvexShape {
    pub fn convex(point_count: usize) -> ConvexShape {
        let mut convex = Convex::default();
        convex.set_point_count(point_count);
        Shape::new(convex)
    }

    pub fn set_point_count(&mut self, count: usize) {
        self.edit_points(|convex| convex.set_point_count(count));
    }

    /// Move one point. Out of range indices are ignored.
    pub fn set_point(&mut self, index: usize, point: Vector2f) {
        self.edit_points(|convex| {
            if let Some(slot) = convex.points.get_mut(index) {
                *slot = point;
            }
        });
    }
}

fn edge_normal(p1: Vector2f, p2: Vector2f) -> Vector2f {
    let normal = Vector2f::new(p1.y - p2.y, p2.x - p1.x);
    let length = normal.length();
    if length != 0.0 {
        normal / length
    } else {
        normal
    }
}

fn vertex_bounds(vertices: &[Vertex]) -> FloatRect {
    let Some(first) = vertices.first() else {
        return FloatRect::default();
    };

    let (mut left, mut top) = (first.position.x, first.position.y);
    let (mut right, mut bottom) = (left, top);
    for vertex in &vertices[1..] {
        left = left.min(vertex.position.x);
        top = top.min(vertex.position.y);
        right = right.max(vertex.position.x);
        bottom = bottom.max(vertex.position.y);
    }

    FloatRect::new(
        Vector2f::new(left, top),
        Vector2f::new(right - left, bottom - top),
    )
}
