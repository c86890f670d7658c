//! Backend-agnostic rendering and windowing traits
//!
//! These traits are the whole surface the scene and window layers use. A backend
//! supplies window close state, buffer clearing, presentation with event
//! collection, viewport and projection setup, key-event routing and the draw
//! primitives.

use crate::foundation::math::{Mat4, Point3};
use crate::input::KeyEvent;

/// Sink for draw commands
///
/// Drawables render into this; they never see the rest of the backend.
pub trait DrawContext {
    /// Draw a single point
    fn draw_point(&mut self, point: &Point3);

    /// Draw a line segment
    fn draw_line(&mut self, from: &Point3, to: &Point3);

    /// Draw a filled triangle, vertices in the given order
    fn draw_triangle(&mut self, vertices: &[Point3; 3]);
}

/// Window and frame operations a backend must provide
///
/// # Threading
/// Backends are driven from the render-loop thread only; no `Send` bound.
pub trait RenderBackend: DrawContext {
    /// Short backend name for logs
    fn name(&self) -> &'static str;

    /// Whether a close has been requested for the window
    fn should_close(&self) -> bool;

    /// Request or cancel window closure
    fn set_should_close(&mut self, should_close: bool);

    /// Reset color and depth buffers to the background
    fn clear(&mut self);

    /// Present the finished frame and collect pending window events
    ///
    /// Blocks on vertical sync when the backend paces presentation. Events are
    /// returned in the order the backend received them; nothing is dispatched
    /// from inside this call.
    fn present(&mut self) -> Vec<WindowEvent>;

    /// Current framebuffer size in pixels
    fn framebuffer_size(&self) -> (u32, u32);

    /// Map normalized device coordinates onto a framebuffer region
    fn set_viewport(&mut self, viewport: Viewport);

    /// Load the combined view-projection transform
    fn set_projection(&mut self, projection: &Mat4);

    /// Start reporting key events from `present`
    fn enable_key_events(&mut self);

    /// This backend as a plain draw target
    fn as_draw_context(&mut self) -> &mut dyn DrawContext;
}

/// Framebuffer region in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Viewport {
    /// Left edge
    pub x: i32,
    /// Bottom edge
    pub y: i32,
    /// Width
    pub width: u32,
    /// Height
    pub height: u32,
}

impl Viewport {
    /// Viewport covering a whole framebuffer of the given size
    pub const fn full(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }
}

/// Window events reported by [`RenderBackend::present`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    /// Framebuffer was resized
    FramebufferResized {
        /// New width in pixels
        width: u32,
        /// New height in pixels
        height: u32,
    },

    /// Key input
    Key(KeyEvent),

    /// Window close requested by the user
    CloseRequested,
}
