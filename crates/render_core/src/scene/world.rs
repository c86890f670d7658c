//! World container

use crate::render::DrawContext;
use crate::scene::{Drawable, Object};

/// Ordered collection of objects, drawn in insertion order
///
/// The world owns everything added to it and drops each object exactly once
/// when it is dropped itself. Objects are moved in, so a world can never end up
/// inside its own collection.
#[derive(Debug, Default)]
pub struct World {
    objects: Vec<Object>,
}

impl World {
    /// Create an empty world
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an object; later objects draw on top of earlier ones
    pub fn add_object(&mut self, object: impl Into<Object>) {
        let object = object.into();
        log::trace!("Adding {} as object #{}", object.kind(), self.objects.len());
        self.objects.push(object);
    }

    /// Number of direct children
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the world has no children
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Direct children in draw order
    pub fn iter(&self) -> std::slice::Iter<'_, Object> {
        self.objects.iter()
    }
}

impl Drawable for World {
    fn render(&self, ctx: &mut dyn DrawContext) {
        for object in &self.objects {
            object.render(ctx);
        }
    }
}

impl<O: Into<Object>> Extend<O> for World {
    fn extend<I: IntoIterator<Item = O>>(&mut self, iter: I) {
        for object in iter {
            self.add_object(object);
        }
    }
}

impl<'a> IntoIterator for &'a World {
    type Item = &'a Object;
    type IntoIter = std::slice::Iter<'a, Object>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Point3;
    use crate::render::{HeadlessBackend, RenderCommand};
    use crate::scene::{Triangle, Vertex};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Drawable that logs its renders and its drop into a shared journal
    struct Tracer {
        name: &'static str,
        journal: Rc<RefCell<Vec<String>>>,
    }

    impl Tracer {
        fn object(name: &'static str, journal: &Rc<RefCell<Vec<String>>>) -> Object {
            Object::custom(Self {
                name,
                journal: Rc::clone(journal),
            })
        }
    }

    impl Drawable for Tracer {
        fn render(&self, _ctx: &mut dyn DrawContext) {
            self.journal.borrow_mut().push(format!("render {}", self.name));
        }
    }

    impl Drop for Tracer {
        fn drop(&mut self) {
            self.journal.borrow_mut().push(format!("drop {}", self.name));
        }
    }

    fn count(journal: &Rc<RefCell<Vec<String>>>, entry: &str) -> usize {
        journal.borrow().iter().filter(|e| *e == entry).count()
    }

    #[test]
    fn test_empty_world_drop_and_render() {
        let world = World::new();
        let mut backend = HeadlessBackend::new(1, 1);
        let handle = backend.handle();

        world.render(&mut backend);
        drop(world);

        assert!(handle.commands().is_empty());
    }

    #[test]
    fn test_drop_destroys_each_object_once() {
        let journal = Rc::new(RefCell::new(Vec::new()));
        let mut world = World::new();
        let names = ["a", "b", "c", "d", "e", "f", "g", "h"];
        for name in names {
            world.add_object(Tracer::object(name, &journal));
        }
        assert_eq!(world.len(), names.len());
        assert!(journal.borrow().is_empty());

        drop(world);

        for name in names {
            assert_eq!(count(&journal, &format!("drop {name}")), 1);
        }
        assert_eq!(journal.borrow().len(), names.len());
    }

    #[test]
    fn test_render_follows_insertion_order() {
        let journal = Rc::new(RefCell::new(Vec::new()));
        let mut world = World::new();
        world.add_object(Tracer::object("a", &journal));
        world.add_object(Tracer::object("b", &journal));
        world.add_object(Tracer::object("c", &journal));

        let mut backend = HeadlessBackend::new(1, 1);
        world.render(&mut backend);

        assert_eq!(*journal.borrow(), vec!["render a", "render b", "render c"]);
    }

    #[test]
    fn test_nested_world_draws_in_place() {
        let p = |x: f64| Point3::new(x, 0.0, 0.0);
        let mut inner = World::new();
        inner.add_object(Vertex::new(p(2.0)));
        inner.add_object(Vertex::new(p(3.0)));

        let mut outer = World::new();
        outer.add_object(Vertex::new(p(1.0)));
        outer.add_object(inner);
        outer.add_object(Triangle::new([p(4.0), p(5.0), p(6.0)]));

        let mut backend = HeadlessBackend::new(1, 1);
        let handle = backend.handle();
        outer.render(&mut backend);

        assert_eq!(
            handle.commands(),
            vec![
                RenderCommand::Point(p(1.0)),
                RenderCommand::Point(p(2.0)),
                RenderCommand::Point(p(3.0)),
                RenderCommand::Triangle([p(4.0), p(5.0), p(6.0)]),
            ]
        );
    }

    #[test]
    fn test_nested_world_drops_children() {
        let journal = Rc::new(RefCell::new(Vec::new()));
        let mut inner = World::new();
        inner.add_object(Tracer::object("inner", &journal));
        let mut outer = World::new();
        outer.add_object(Tracer::object("outer", &journal));
        outer.add_object(inner);

        drop(outer);

        assert_eq!(count(&journal, "drop inner"), 1);
        assert_eq!(count(&journal, "drop outer"), 1);
    }

    #[test]
    fn test_extend_appends_in_order() {
        let mut world = World::new();
        world.extend([Vertex::new(Point3::origin()), Vertex::new(Point3::new(1.0, 1.0, 1.0))]);

        let kinds: Vec<_> = world.iter().map(Object::kind).collect();
        assert_eq!(kinds, vec!["vertex", "vertex"]);
    }
}
