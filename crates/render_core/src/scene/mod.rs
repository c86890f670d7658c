//! Scene content
//!
//! Drawables know nothing about windows or backends beyond the
//! [`DrawContext`](crate::render::DrawContext) they are rendered into.
//!
//! - **`object`**: the closed set of drawable variants
//! - **`world`**: ordered container that owns its objects
//! - **`factory`**: construction of objects from raw coordinate buffers

pub mod factory;
pub mod object;
pub mod world;

pub use factory::{GeometryError, ObjectFactory};
pub use object::{Drawable, Line, Object, Triangle, Vertex};
pub use world::World;
