//! # Render Core
//!
//! A minimal real-time rendering scaffold: a window, a scene graph of drawable
//! objects and a per-frame render loop paced by the display refresh.
//!
//! ## Features
//!
//! - **Backend Agnostic Scene**: Objects, worlds and cameras only talk to the
//!   [`render::RenderBackend`] trait
//! - **Exclusive Ownership**: Worlds own their objects, windows own their camera
//!   and keyboard delegate; nothing is reference counted
//! - **Linear Event Flow**: Backend events are queued by the present step and
//!   drained after it returns
//! - **Headless Backend**: Records every command so the loop can be tested without
//!   a display
//! - **GLFW Backend**: OpenGL window behind the `glfw-backend` feature
//!
//! ## Quick Start
//!
//! ```rust
//! use render_core::prelude::*;
//!
//! let mut world = World::new();
//! let mut object_factories = ObjectFactory::slot();
//! world.add_object(object_factories.get_instance().create_triangle(&[
//!     -0.6, -0.4, 0.0,
//!      0.6, -0.4, 0.0,
//!      0.0,  0.6, 0.0,
//! ]));
//! object_factories.delete_instance();
//!
//! let mut window_factory = HeadlessWindowFactory::default();
//! let mut window = window_factory
//!     .create_window(640, 480, "Test")
//!     .expect("headless windows always open");
//!
//! window.set_world(Some(&world));
//! window.clear();
//! window.draw();
//! window.swap_buffers();
//! assert!(!window.should_close());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod config;
pub mod foundation;
pub mod input;
pub mod render;
pub mod scene;

/// Common imports for scaffold users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, WindowConfig},
        foundation::{
            math::{Mat4, OrthoVolume, Point3},
            singleton::Singleton,
        },
        input::{CloseOnKey, Key, KeyAction, KeyEvent, KeyboardDelegate, Modifiers},
        render::{
            default_window_factory, window_factory_slot, Camera, CameraFactory, DrawContext,
            HeadlessBackend, HeadlessHandle, HeadlessWindowFactory, OrthographicCamera,
            RenderBackend, RenderCommand, Viewport, Window, WindowError, WindowEvent,
            WindowFactory,
        },
        scene::{
            Drawable, GeometryError, Line, Object, ObjectFactory, Triangle, Vertex, World,
        },
    };
}
