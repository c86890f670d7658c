//! Headless backend
//!
//! Records every command it receives instead of talking to a GPU. A
//! [`HeadlessHandle`] shares the backend's state so tests (or a driver without a
//! display) can inject window events and inspect what was drawn after the
//! backend has been moved into a window.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::config::WindowConfig;
use crate::foundation::math::{Mat4, Point3};
use crate::input::KeyEvent;
use crate::render::backend::{DrawContext, RenderBackend, Viewport, WindowEvent};
use crate::render::window::{Window, WindowError, WindowFactory};

/// One recorded backend call
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Buffers cleared
    Clear,
    /// Viewport set
    Viewport(Viewport),
    /// View-projection transform loaded
    Projection(Mat4),
    /// Point drawn
    Point(Point3),
    /// Line drawn
    Line(Point3, Point3),
    /// Triangle drawn
    Triangle([Point3; 3]),
    /// Frame presented
    Present,
}

impl RenderCommand {
    /// Whether this command draws geometry
    pub const fn is_draw(&self) -> bool {
        matches!(self, Self::Point(_) | Self::Line(..) | Self::Triangle(_))
    }
}

#[derive(Debug, Default)]
struct HeadlessState {
    commands: Vec<RenderCommand>,
    pending: VecDeque<WindowEvent>,
    framebuffer: (u32, u32),
    should_close: bool,
    key_events: bool,
    presents: u64,
    released: bool,
}

/// Backend that records commands in memory
#[derive(Debug)]
pub struct HeadlessBackend {
    state: Rc<RefCell<HeadlessState>>,
}

impl HeadlessBackend {
    /// Create a backend with a framebuffer of the given size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            state: Rc::new(RefCell::new(HeadlessState {
                framebuffer: (width, height),
                ..HeadlessState::default()
            })),
        }
    }

    /// Handle sharing this backend's state
    pub fn handle(&self) -> HeadlessHandle {
        HeadlessHandle {
            state: Rc::clone(&self.state),
        }
    }

    fn record(&self, command: RenderCommand) {
        self.state.borrow_mut().commands.push(command);
    }
}

impl Drop for HeadlessBackend {
    fn drop(&mut self) {
        self.state.borrow_mut().released = true;
    }
}

impl DrawContext for HeadlessBackend {
    fn draw_point(&mut self, point: &Point3) {
        self.record(RenderCommand::Point(*point));
    }

    fn draw_line(&mut self, from: &Point3, to: &Point3) {
        self.record(RenderCommand::Line(*from, *to));
    }

    fn draw_triangle(&mut self, vertices: &[Point3; 3]) {
        self.record(RenderCommand::Triangle(*vertices));
    }
}

impl RenderBackend for HeadlessBackend {
    fn name(&self) -> &'static str {
        "headless"
    }

    fn should_close(&self) -> bool {
        self.state.borrow().should_close
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.state.borrow_mut().should_close = should_close;
    }

    fn clear(&mut self) {
        self.record(RenderCommand::Clear);
    }

    fn present(&mut self) -> Vec<WindowEvent> {
        let mut state = self.state.borrow_mut();
        state.presents += 1;
        state.commands.push(RenderCommand::Present);

        let key_events = state.key_events;
        let events: Vec<_> = state
            .pending
            .drain(..)
            .filter(|event| key_events || !matches!(event, WindowEvent::Key(_)))
            .collect();
        events
    }

    fn framebuffer_size(&self) -> (u32, u32) {
        self.state.borrow().framebuffer
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        self.record(RenderCommand::Viewport(viewport));
    }

    fn set_projection(&mut self, projection: &Mat4) {
        self.record(RenderCommand::Projection(*projection));
    }

    fn enable_key_events(&mut self) {
        self.state.borrow_mut().key_events = true;
    }

    fn as_draw_context(&mut self) -> &mut dyn DrawContext {
        self
    }
}

/// Shared view of a [`HeadlessBackend`]
#[derive(Debug, Clone)]
pub struct HeadlessHandle {
    state: Rc<RefCell<HeadlessState>>,
}

impl HeadlessHandle {
    /// Every command recorded so far
    pub fn commands(&self) -> Vec<RenderCommand> {
        self.state.borrow().commands.clone()
    }

    /// Recorded draw commands only
    pub fn draw_commands(&self) -> Vec<RenderCommand> {
        self.state
            .borrow()
            .commands
            .iter()
            .filter(|command| command.is_draw())
            .cloned()
            .collect()
    }

    /// Take and clear the recorded commands
    pub fn take_commands(&self) -> Vec<RenderCommand> {
        std::mem::take(&mut self.state.borrow_mut().commands)
    }

    /// Queue an event for the next present
    pub fn push_event(&self, event: WindowEvent) {
        self.state.borrow_mut().pending.push_back(event);
    }

    /// Queue a key event for the next present
    pub fn push_key(&self, event: KeyEvent) {
        self.push_event(WindowEvent::Key(event));
    }

    /// Change the framebuffer size and queue the matching resize event
    pub fn resize(&self, width: u32, height: u32) {
        self.state.borrow_mut().framebuffer = (width, height);
        self.push_event(WindowEvent::FramebufferResized { width, height });
    }

    /// Queue a user close request
    pub fn request_close(&self) {
        self.push_event(WindowEvent::CloseRequested);
    }

    /// Backend close flag
    pub fn should_close(&self) -> bool {
        self.state.borrow().should_close
    }

    /// Whether key events are being reported
    pub fn key_events_enabled(&self) -> bool {
        self.state.borrow().key_events
    }

    /// Number of presented frames
    pub fn present_count(&self) -> u64 {
        self.state.borrow().presents
    }

    /// Whether the backend has been dropped
    pub fn is_released(&self) -> bool {
        self.state.borrow().released
    }
}

/// Factory for headless windows
///
/// Keeps a handle to every backend it creates so callers can drive them.
#[derive(Debug, Default)]
pub struct HeadlessWindowFactory {
    handles: Vec<HeadlessHandle>,
    failure: Option<String>,
}

impl HeadlessWindowFactory {
    /// Factory whose backend initialization always fails with `reason`
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            handles: Vec::new(),
            failure: Some(reason.into()),
        }
    }

    /// Handles of all backends created so far, oldest first
    pub fn handles(&self) -> &[HeadlessHandle] {
        &self.handles
    }

    /// Handle of the most recently created backend
    pub fn last_handle(&self) -> Option<&HeadlessHandle> {
        self.handles.last()
    }

    /// Create a headless window and return it together with its handle
    pub fn create_with_handle<'w>(
        &mut self,
        config: &WindowConfig,
    ) -> Result<(Window<'w>, HeadlessHandle), WindowError> {
        let window = self.create_window_from_config(config)?;
        let handle = self
            .last_handle()
            .cloned()
            .ok_or_else(|| WindowError::InitializationFailed("no headless backend recorded".into()))?;
        Ok((window, handle))
    }
}

impl WindowFactory for HeadlessWindowFactory {
    fn backend_name(&self) -> &'static str {
        "headless"
    }

    fn create_backend(
        &mut self,
        config: &WindowConfig,
    ) -> Result<Box<dyn RenderBackend>, WindowError> {
        if let Some(reason) = &self.failure {
            return Err(WindowError::InitializationFailed(reason.clone()));
        }
        let backend = HeadlessBackend::new(config.width, config.height);
        self.handles.push(backend.handle());
        Ok(Box::new(backend))
    }
}
