//! Window management using GLFW
//!
//! Provides window creation, presentation and event collection on an OpenGL
//! context.

use std::ffi::c_void;

use glfw::Context;

use super::gl::{self, Gl};
use crate::config::WindowConfig;
use crate::foundation::math::{Mat4, Point3};
use crate::input::{Key, KeyAction, KeyEvent, Modifiers};
use crate::render::backend::{DrawContext, RenderBackend, Viewport, WindowEvent};
use crate::render::window::{WindowError, WindowFactory, WindowResult};

/// GLFW window wrapper with proper resource management
///
/// Dropping it destroys the native window; GLFW itself terminates once its
/// last handle is gone.
pub struct GlfwBackend {
    gl: Gl,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
    window: glfw::PWindow,
    glfw: glfw::Glfw,
}

impl GlfwBackend {
    /// Initialize GLFW, open the window and make its context current
    pub fn new(config: &WindowConfig) -> WindowResult<Self> {
        let mut glfw = glfw::init(glfw::fail_on_errors)
            .map_err(|e| WindowError::InitializationFailed(format!("{e:?}")))?;

        glfw.window_hint(glfw::WindowHint::ClientApi(glfw::ClientApiHint::OpenGl));
        glfw.window_hint(glfw::WindowHint::Resizable(true));

        let (mut window, events) = glfw
            .create_window(
                config.width,
                config.height,
                &config.title,
                glfw::WindowMode::Windowed,
            )
            .ok_or_else(|| WindowError::CreationFailed {
                width: config.width,
                height: config.height,
                title: config.title.clone(),
            })?;

        window.set_framebuffer_size_polling(true);
        window.set_close_polling(true);
        window.make_current();
        glfw.set_swap_interval(if config.vsync {
            glfw::SwapInterval::Sync(1)
        } else {
            glfw::SwapInterval::None
        });

        let gl = Gl::load(|name| window.get_proc_address(name) as *const c_void)?;
        let [red, green, blue, alpha] = config.clear_color;
        gl.clear_color(red, green, blue, alpha);

        log::debug!("GLFW window ready, vsync {}", config.vsync);
        Ok(Self {
            gl,
            events,
            window,
            glfw,
        })
    }
}

impl DrawContext for GlfwBackend {
    fn draw_point(&mut self, point: &Point3) {
        self.gl.begin(gl::POINTS);
        self.gl.vertex(point.x, point.y, point.z);
        self.gl.end();
    }

    fn draw_line(&mut self, from: &Point3, to: &Point3) {
        self.gl.begin(gl::LINES);
        self.gl.vertex(from.x, from.y, from.z);
        self.gl.vertex(to.x, to.y, to.z);
        self.gl.end();
    }

    fn draw_triangle(&mut self, vertices: &[Point3; 3]) {
        self.gl.begin(gl::TRIANGLES);
        for v in vertices {
            self.gl.vertex(v.x, v.y, v.z);
        }
        self.gl.end();
    }
}

impl RenderBackend for GlfwBackend {
    fn name(&self) -> &'static str {
        "glfw"
    }

    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    fn clear(&mut self) {
        self.gl.clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT);
    }

    fn present(&mut self) -> Vec<WindowEvent> {
        self.window.swap_buffers();
        self.glfw.poll_events();
        glfw::flush_messages(&self.events)
            .filter_map(|(_, event)| translate_event(event))
            .collect()
    }

    fn framebuffer_size(&self) -> (u32, u32) {
        let (width, height) = self.window.get_framebuffer_size();
        (to_pixels(width), to_pixels(height))
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        self.gl.viewport(
            viewport.x,
            viewport.y,
            i32::try_from(viewport.width).unwrap_or(i32::MAX),
            i32::try_from(viewport.height).unwrap_or(i32::MAX),
        );
    }

    fn set_projection(&mut self, projection: &Mat4) {
        let mut columns = [0.0; 16];
        columns.copy_from_slice(projection.as_slice());

        self.gl.matrix_mode(gl::PROJECTION);
        self.gl.load_matrix(&columns);
        self.gl.matrix_mode(gl::MODELVIEW);
        self.gl.load_identity();
    }

    fn enable_key_events(&mut self) {
        self.window.set_key_polling(true);
    }

    fn as_draw_context(&mut self) -> &mut dyn DrawContext {
        self
    }
}

fn to_pixels(size: i32) -> u32 {
    u32::try_from(size).unwrap_or(0)
}

fn translate_event(event: glfw::WindowEvent) -> Option<WindowEvent> {
    match event {
        glfw::WindowEvent::FramebufferSize(width, height) => Some(WindowEvent::FramebufferResized {
            width: to_pixels(width),
            height: to_pixels(height),
        }),
        glfw::WindowEvent::Key(key, scancode, action, mods) => Some(WindowEvent::Key(KeyEvent {
            key: Key(key as i32),
            scancode,
            action: match action {
                glfw::Action::Release => KeyAction::Release,
                glfw::Action::Press => KeyAction::Press,
                glfw::Action::Repeat => KeyAction::Repeat,
            },
            mods: Modifiers::from_bits_truncate(u32::try_from(mods.bits()).unwrap_or(0)),
        })),
        glfw::WindowEvent::Close => Some(WindowEvent::CloseRequested),
        _ => None,
    }
}

/// Factory for GLFW windows
#[derive(Debug, Default)]
pub struct GlfwWindowFactory;

impl WindowFactory for GlfwWindowFactory {
    fn backend_name(&self) -> &'static str {
        "glfw"
    }

    fn create_backend(&mut self, config: &WindowConfig) -> WindowResult<Box<dyn RenderBackend>> {
        Ok(Box::new(GlfwBackend::new(config)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(action: glfw::Action, mods: glfw::Modifiers) -> Option<WindowEvent> {
        translate_event(glfw::WindowEvent::Key(glfw::Key::Escape, 9, action, mods))
    }

    #[test]
    fn test_key_actions_translate() {
        let cases = [
            (glfw::Action::Press, KeyAction::Press),
            (glfw::Action::Release, KeyAction::Release),
            (glfw::Action::Repeat, KeyAction::Repeat),
        ];
        for (action, expected) in cases {
            assert_eq!(
                key_event(action, glfw::Modifiers::empty()),
                Some(WindowEvent::Key(KeyEvent::new(
                    Key::ESCAPE,
                    9,
                    expected,
                    Modifiers::empty()
                )))
            );
        }
    }

    #[test]
    fn test_modifier_bits_translate() {
        let glfw_mods = glfw::Modifiers::Shift
            | glfw::Modifiers::Control
            | glfw::Modifiers::Alt
            | glfw::Modifiers::Super
            | glfw::Modifiers::CapsLock
            | glfw::Modifiers::NumLock;

        let Some(WindowEvent::Key(event)) = key_event(glfw::Action::Press, glfw_mods) else {
            panic!("key event was not translated");
        };
        assert_eq!(event.mods, Modifiers::all());

        let Some(WindowEvent::Key(event)) = key_event(glfw::Action::Press, glfw::Modifiers::Alt)
        else {
            panic!("key event was not translated");
        };
        assert_eq!(event.mods, Modifiers::ALT);
    }

    #[test]
    fn test_key_codes_match_glfw() {
        for (glfw_key, key) in [
            (glfw::Key::Space, Key::SPACE),
            (glfw::Key::A, Key::A),
            (glfw::Key::W, Key::W),
            (glfw::Key::Escape, Key::ESCAPE),
            (glfw::Key::Up, Key::UP),
        ] {
            let event = translate_event(glfw::WindowEvent::Key(
                glfw_key,
                0,
                glfw::Action::Press,
                glfw::Modifiers::empty(),
            ));
            assert_eq!(event, Some(WindowEvent::Key(KeyEvent::press(key))));
        }
    }

    #[test]
    fn test_window_events_translate() {
        assert_eq!(
            translate_event(glfw::WindowEvent::FramebufferSize(800, -1)),
            Some(WindowEvent::FramebufferResized {
                width: 800,
                height: 0
            })
        );
        assert_eq!(
            translate_event(glfw::WindowEvent::Close),
            Some(WindowEvent::CloseRequested)
        );
        assert_eq!(translate_event(glfw::WindowEvent::Focus(true)), None);
    }
}
