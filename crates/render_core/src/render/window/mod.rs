//! Window management subsystem
//!
//! ```text
//! ┌─────────────────────────────────┐
//! │     Application Code            │
//! └─────────────┬───────────────────┘
//!               │ Uses
//!         ┌─────▼─────┐
//!         │  Window   │ ← Public API (handle.rs)
//!         └─────┬─────┘
//!               │ Uses
//!      ┌────────▼────────┐
//!      │ RenderBackend   │ ← Backend contract (../backend.rs)
//!      │ trait           │
//!      └────────┬────────┘
//!               │ Implemented by
//!   ┌───────────▼───────────┐
//!   │ opengl::GlfwBackend   │ ← GLFW + OpenGL (../opengl/window.rs)
//!   │ HeadlessBackend       │ ← In-memory recorder (../headless.rs)
//!   └───────────────────────┘
//! ```
//!
//! - **`handle`**: the application-facing [`Window`]
//! - **`factory`**: [`WindowFactory`] and backend selection

pub mod factory;
pub mod handle;

pub use factory::{
    default_window_factory, window_factory_slot, WindowError, WindowFactory, WindowResult,
};
pub use handle::Window;
