//! Drawable scene objects

use std::fmt;

use crate::foundation::math::Point3;
use crate::render::DrawContext;
use crate::scene::World;

/// Anything that can issue draw commands into a [`DrawContext`]
///
/// Rendering never changes the drawable; it only records commands.
pub trait Drawable {
    /// Issue this drawable's draw commands
    fn render(&self, ctx: &mut dyn DrawContext);
}

/// A drawable node of the scene graph
///
/// The built-in variants cover the primitives the scaffold knows how to build;
/// `Custom` is the extension point for anything else.
pub enum Object {
    /// Single point
    Vertex(Vertex),
    /// Line segment
    Line(Line),
    /// Filled triangle
    Triangle(Triangle),
    /// Nested world, drawn in place
    World(World),
    /// User-defined drawable
    Custom(Box<dyn Drawable>),
}

impl Object {
    /// Wrap a user-defined drawable
    pub fn custom(drawable: impl Drawable + 'static) -> Self {
        Self::Custom(Box::new(drawable))
    }

    /// Short name of the variant, for logging
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Vertex(_) => "vertex",
            Self::Line(_) => "line",
            Self::Triangle(_) => "triangle",
            Self::World(_) => "world",
            Self::Custom(_) => "custom",
        }
    }
}

impl Drawable for Object {
    fn render(&self, ctx: &mut dyn DrawContext) {
        match self {
            Self::Vertex(vertex) => vertex.render(ctx),
            Self::Line(line) => line.render(ctx),
            Self::Triangle(triangle) => triangle.render(ctx),
            Self::World(world) => world.render(ctx),
            Self::Custom(drawable) => drawable.render(ctx),
        }
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertex(vertex) => f.debug_tuple("Vertex").field(vertex).finish(),
            Self::Line(line) => f.debug_tuple("Line").field(line).finish(),
            Self::Triangle(triangle) => f.debug_tuple("Triangle").field(triangle).finish(),
            Self::World(world) => f.debug_tuple("World").field(world).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Single point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    position: Point3,
}

impl Vertex {
    /// Create a point drawable
    pub const fn new(position: Point3) -> Self {
        Self { position }
    }

    /// Where the point is
    pub const fn position(&self) -> &Point3 {
        &self.position
    }
}

impl Drawable for Vertex {
    fn render(&self, ctx: &mut dyn DrawContext) {
        ctx.draw_point(&self.position);
    }
}

/// Line segment between two points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    endpoints: [Point3; 2],
}

impl Line {
    /// Create a line drawable
    pub const fn new(from: Point3, to: Point3) -> Self {
        Self {
            endpoints: [from, to],
        }
    }

    /// Start and end point
    pub const fn endpoints(&self) -> &[Point3; 2] {
        &self.endpoints
    }
}

impl Drawable for Line {
    fn render(&self, ctx: &mut dyn DrawContext) {
        ctx.draw_line(&self.endpoints[0], &self.endpoints[1]);
    }
}

/// Triangle with vertices kept in construction order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    vertices: [Point3; 3],
}

impl Triangle {
    /// Create a triangle drawable
    pub const fn new(vertices: [Point3; 3]) -> Self {
        Self { vertices }
    }

    /// The three vertices, in construction order
    pub const fn vertices(&self) -> &[Point3; 3] {
        &self.vertices
    }
}

impl Drawable for Triangle {
    fn render(&self, ctx: &mut dyn DrawContext) {
        ctx.draw_triangle(&self.vertices);
    }
}

impl From<Vertex> for Object {
    fn from(vertex: Vertex) -> Self {
        Self::Vertex(vertex)
    }
}

impl From<Line> for Object {
    fn from(line: Line) -> Self {
        Self::Line(line)
    }
}

impl From<Triangle> for Object {
    fn from(triangle: Triangle) -> Self {
        Self::Triangle(triangle)
    }
}

impl From<World> for Object {
    fn from(world: World) -> Self {
        Self::World(world)
    }
}

impl From<Box<dyn Drawable>> for Object {
    fn from(drawable: Box<dyn Drawable>) -> Self {
        Self::Custom(drawable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{HeadlessBackend, RenderCommand};

    #[test]
    fn test_triangle_issues_single_draw() {
        let vertices = [
            Point3::new(-0.6, -0.4, 0.0),
            Point3::new(0.6, -0.4, 0.0),
            Point3::new(0.0, 0.6, 0.0),
        ];
        let mut backend = HeadlessBackend::new(640, 480);
        let handle = backend.handle();

        Object::from(Triangle::new(vertices)).render(&mut backend);

        assert_eq!(handle.commands(), vec![RenderCommand::Triangle(vertices)]);
    }

    #[test]
    fn test_line_and_vertex_draws() {
        let mut backend = HeadlessBackend::new(640, 480);
        let handle = backend.handle();
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 2.0, 3.0);

        Object::from(Line::new(a, b)).render(&mut backend);
        Object::from(Vertex::new(b)).render(&mut backend);

        assert_eq!(
            handle.commands(),
            vec![RenderCommand::Line(a, b), RenderCommand::Point(b)]
        );
    }

    #[test]
    fn test_object_kind_names() {
        assert_eq!(Object::from(Vertex::new(Point3::origin())).kind(), "vertex");
        assert_eq!(Object::from(World::new()).kind(), "world");
    }
}
