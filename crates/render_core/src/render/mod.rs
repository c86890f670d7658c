//! Rendering and windowing
//!
//! - **`backend`**: the [`RenderBackend`] / [`DrawContext`] contract
//! - **`camera`**: [`Camera`] trait, the fixed [`OrthographicCamera`] and its factory
//! - **`window`**: application-facing [`Window`] and [`WindowFactory`]
//! - **`headless`**: in-memory backend for tests and display-less runs
//! - **`opengl`**: GLFW + OpenGL backend (feature `glfw-backend`)

pub mod backend;
pub mod camera;
pub mod headless;
#[cfg(feature = "glfw-backend")]
pub mod opengl;
pub mod window;

pub use backend::{DrawContext, RenderBackend, Viewport, WindowEvent};
pub use camera::{Camera, CameraFactory, OrthographicCamera};
pub use headless::{HeadlessBackend, HeadlessHandle, HeadlessWindowFactory, RenderCommand};
pub use window::{
    default_window_factory, window_factory_slot, Window, WindowError, WindowFactory,
};
