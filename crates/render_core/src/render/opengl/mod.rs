//! GLFW window with a legacy OpenGL context
//!
//! Drawing uses fixed-function immediate mode, which is all the scaffold's
//! primitives need.

mod gl;
mod window;

pub use window::{GlfwBackend, GlfwWindowFactory};
