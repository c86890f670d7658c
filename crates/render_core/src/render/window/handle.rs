//! Application-facing window
//!
//! A [`Window`] owns its backend, its camera and an optional keyboard delegate,
//! and borrows the [`World`] it draws. The render loop is
//!
//! ```text
//! while !window.should_close() {
//!     window.clear();
//!     window.draw();
//!     window.swap_buffers();
//! }
//! ```
//!
//! `swap_buffers` is the only place window events are handled. The backend
//! returns them from its present call; the window queues them and dispatches
//! them after the backend has returned, so resize and key handling run on the
//! loop's own stack rather than inside a backend callback.

use std::collections::VecDeque;
use std::fmt;

use crate::foundation::singleton::Singleton;
use crate::input::{KeyEvent, KeyboardDelegate};
use crate::render::backend::{RenderBackend, Viewport, WindowEvent};
use crate::render::camera::{Camera, CameraFactory};
use crate::scene::{Drawable, World};

/// Window with its camera, attached world and keyboard delegate
pub struct Window<'w> {
    keyboard_delegate: Option<Box<dyn KeyboardDelegate>>,
    delegate_generation: u64,
    camera: Box<dyn Camera>,
    world: Option<&'w World>,
    pending_events: VecDeque<WindowEvent>,
    frames: u64,
    backend: Box<dyn RenderBackend>,
}

impl<'w> Window<'w> {
    /// Wrap a backend, taking its camera from a short-lived camera factory
    pub fn new(backend: Box<dyn RenderBackend>) -> Self {
        let mut cameras = CameraFactory::slot();
        Self::with_camera_factory(backend, &mut cameras)
    }

    /// Wrap a backend, taking exactly one camera from `cameras`
    ///
    /// The factory instance is deleted again before this returns; the slot is
    /// only needed for the duration of construction.
    pub fn with_camera_factory(
        backend: Box<dyn RenderBackend>,
        cameras: &mut Singleton<CameraFactory>,
    ) -> Self {
        let camera = cameras.get_instance().create_camera();
        cameras.delete_instance();

        let mut window = Self {
            keyboard_delegate: None,
            delegate_generation: 0,
            camera,
            world: None,
            pending_events: VecDeque::new(),
            frames: 0,
            backend,
        };
        log::info!("Created {} window", window.backend.name());

        window.apply_framebuffer_size();
        window
    }

    /// Whether a close has been requested
    pub fn should_close(&self) -> bool {
        self.backend.should_close()
    }

    /// Request or cancel closing the window
    pub fn set_should_close(&mut self, should_close: bool) {
        self.backend.set_should_close(should_close);
    }

    /// Clear color and depth buffers
    pub fn clear(&mut self) {
        self.backend.clear();
    }

    /// Render the attached world; does nothing when none is attached
    pub fn draw(&mut self) {
        if let Some(world) = self.world {
            world.render(self.backend.as_draw_context());
        }
    }

    /// Present the frame, then handle the events the backend collected
    pub fn swap_buffers(&mut self) {
        let events = self.backend.present();
        self.frames += 1;
        log::trace!("Frame {} presented with {} events", self.frames, events.len());

        self.pending_events.extend(events);
        while let Some(event) = self.pending_events.pop_front() {
            self.handle_event(event);
        }
    }

    /// Run one `clear`, `draw`, `swap_buffers` iteration
    pub fn run_frame(&mut self) {
        self.clear();
        self.draw();
        self.swap_buffers();
    }

    /// Run frames until a close is requested
    ///
    /// Returns the number of frames this call rendered.
    pub fn run_until_closed(&mut self) -> u64 {
        let start = self.frames;
        log::info!("Starting render loop...");
        while !self.should_close() {
            self.run_frame();
        }
        let rendered = self.frames - start;
        log::info!("Render loop finished after {} frames", rendered);
        rendered
    }

    /// Handle one window event
    ///
    /// Resizes re-query the backend rather than trusting the event payload, so
    /// several queued resizes settle on the size the framebuffer has now.
    fn handle_event(&mut self, event: WindowEvent) {
        match event {
            WindowEvent::FramebufferResized { .. } => self.apply_framebuffer_size(),
            WindowEvent::Key(key_event) => self.dispatch_key(key_event),
            WindowEvent::CloseRequested => {
                log::debug!("Close requested");
                self.backend.set_should_close(true);
            }
        }
    }

    /// Currently attached world
    pub fn world(&self) -> Option<&'w World> {
        self.world
    }

    /// Attach a world, or detach with `None`
    ///
    /// The window only borrows the world; the previous one is left untouched.
    pub fn set_world(&mut self, world: Option<&'w World>) {
        self.world = world;
    }

    /// The window's camera
    pub fn camera(&self) -> &dyn Camera {
        self.camera.as_ref()
    }

    /// The window's camera, mutably
    ///
    /// Changes take effect the next time the camera is applied, which happens
    /// on the next framebuffer resize.
    pub fn camera_mut(&mut self) -> &mut dyn Camera {
        self.camera.as_mut()
    }

    /// Install a keyboard delegate, dropping the previous one
    pub fn set_keyboard_delegate(&mut self, delegate: Box<dyn KeyboardDelegate>) {
        if let Some(previous) = self.keyboard_delegate.replace(delegate) {
            log::debug!("Replacing keyboard delegate");
            drop(previous);
        }
        self.delegate_generation += 1;
        self.backend.enable_key_events();
    }

    /// Remove and drop the keyboard delegate
    pub fn clear_keyboard_delegate(&mut self) {
        if self.keyboard_delegate.take().is_some() {
            log::debug!("Removed keyboard delegate");
        }
        self.delegate_generation += 1;
    }

    /// Whether a keyboard delegate is installed
    pub fn has_keyboard_delegate(&self) -> bool {
        self.keyboard_delegate.is_some()
    }

    /// Number of frames presented so far
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Current framebuffer size in pixels
    pub fn framebuffer_size(&self) -> (u32, u32) {
        self.backend.framebuffer_size()
    }

    fn apply_framebuffer_size(&mut self) {
        let (width, height) = self.backend.framebuffer_size();
        log::debug!("Framebuffer size {}x{}", width, height);
        self.backend.set_viewport(Viewport::full(width, height));
        self.camera.look(&mut *self.backend);
    }

    fn dispatch_key(&mut self, event: KeyEvent) {
        let Some(mut delegate) = self.keyboard_delegate.take() else {
            log::trace!("Key event without delegate: {:?}", event);
            return;
        };

        let generation = self.delegate_generation;
        delegate.key_callback(self, event);

        // A delegate installed or cleared during the callback wins.
        if self.delegate_generation == generation {
            self.keyboard_delegate = Some(delegate);
        }
    }
}

impl fmt::Debug for Window<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Window")
            .field("backend", &self.backend.name())
            .field("has_world", &self.world.is_some())
            .field("has_keyboard_delegate", &self.keyboard_delegate.is_some())
            .field("frames", &self.frames)
            .finish_non_exhaustive()
    }
}

impl Drop for Window<'_> {
    fn drop(&mut self) {
        log::info!(
            "Destroying {} window after {} frames",
            self.backend.name(),
            self.frames
        );
    }
}
