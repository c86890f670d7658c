//! Window factories and backend selection

use thiserror::Error;

use crate::config::WindowConfig;
use crate::foundation::singleton::Singleton;
use crate::render::backend::RenderBackend;
use crate::render::window::Window;

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// Windowing system could not be initialized (no display, driver error)
    #[error("Window system initialization failed: {0}")]
    InitializationFailed(String),

    /// Window creation failed
    #[error("Window creation failed for {width}x{height} \"{title}\"")]
    CreationFailed {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Requested title
        title: String,
    },

    /// Zero-sized window requested
    #[error("Invalid window dimensions {width}x{height}")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },

    /// A required OpenGL entry point is not exported by the driver
    #[error("OpenGL function {0} is not available")]
    MissingGlFunction(&'static str),
}

/// Result alias for window operations
pub type WindowResult<T> = Result<T, WindowError>;

/// Creates windows on one particular backend
///
/// Implementors only provide [`WindowFactory::create_backend`]; validation,
/// camera setup and the fatal `_or_die` variants are shared.
pub trait WindowFactory {
    /// Backend name for logs
    fn backend_name(&self) -> &'static str;

    /// Initialize the backend and open its native window
    fn create_backend(&mut self, config: &WindowConfig) -> WindowResult<Box<dyn RenderBackend>>;

    /// Create a window from full settings
    fn create_window_from_config<'w>(&mut self, config: &WindowConfig) -> WindowResult<Window<'w>> {
        if config.width == 0 || config.height == 0 {
            return Err(WindowError::InvalidDimensions {
                width: config.width,
                height: config.height,
            });
        }

        log::info!(
            "Creating {}x{} \"{}\" window on {} backend",
            config.width,
            config.height,
            config.title,
            self.backend_name()
        );
        let backend = self.create_backend(config)?;
        Ok(Window::new(backend))
    }

    /// Create a window with default settings apart from size and title
    fn create_window<'w>(&mut self, width: u32, height: u32, title: &str) -> WindowResult<Window<'w>> {
        self.create_window_from_config(&WindowConfig::new(width, height, title))
    }

    /// Create a window or terminate the process
    ///
    /// Backend failure is unrecoverable here: the error is logged, a diagnostic
    /// goes to stderr and the process exits with status 1. This never returns
    /// an error.
    fn create_window_or_die<'w>(&mut self, width: u32, height: u32, title: &str) -> Window<'w> {
        self.create_window(width, height, title)
            .unwrap_or_else(|err| die(&err))
    }

    /// [`WindowFactory::create_window_or_die`] with full settings
    fn create_window_from_config_or_die<'w>(&mut self, config: &WindowConfig) -> Window<'w> {
        self.create_window_from_config(config)
            .unwrap_or_else(|err| die(&err))
    }
}

fn die(err: &WindowError) -> ! {
    log::error!("cannot create window: {}", err);
    eprintln!("cannot create window: {err}");
    std::process::exit(1)
}

/// Factory for the backend compiled into this build
///
/// GLFW when the `glfw-backend` feature is enabled, headless otherwise.
pub fn default_window_factory() -> Box<dyn WindowFactory> {
    #[cfg(feature = "glfw-backend")]
    {
        Box::new(crate::render::opengl::GlfwWindowFactory::default())
    }
    #[cfg(not(feature = "glfw-backend"))]
    {
        Box::new(crate::render::HeadlessWindowFactory::default())
    }
}

/// Empty slot that lazily creates the default window factory
pub fn window_factory_slot() -> Singleton<Box<dyn WindowFactory>> {
    Singleton::new(default_window_factory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{HeadlessWindowFactory, RenderCommand};

    #[test]
    fn test_create_window_uses_requested_size() {
        let mut factory = HeadlessWindowFactory::default();
        let window = factory.create_window(640, 480, "Test").unwrap();

        assert_eq!(window.framebuffer_size(), (640, 480));
        let handle = factory.last_handle().unwrap();
        assert!(matches!(
            handle.commands().first(),
            Some(RenderCommand::Viewport(viewport)) if viewport.width == 640 && viewport.height == 480
        ));
    }

    #[test]
    fn test_zero_size_rejected_before_backend() {
        let mut factory = HeadlessWindowFactory::default();
        let err = factory.create_window(0, 480, "Test").unwrap_err();

        assert!(matches!(err, WindowError::InvalidDimensions { width: 0, height: 480 }));
        assert!(factory.handles().is_empty());
    }

    #[test]
    fn test_backend_failure_propagates() {
        let mut factory = HeadlessWindowFactory::failing("no display");
        let err = factory.create_window(640, 480, "Test").unwrap_err();
        assert!(matches!(err, WindowError::InitializationFailed(_)));
    }

    const DIE_CHILD_ENV: &str = "RENDER_CORE_DIE_CHILD";

    /// Re-run `test` alone in a child process with the child guard set
    fn run_in_child(test: &str) -> std::process::Output {
        std::process::Command::new(std::env::current_exe().unwrap())
            .args([test, "--exact", "--nocapture", "--test-threads=1"])
            .env(DIE_CHILD_ENV, "1")
            .output()
            .unwrap()
    }

    fn assert_died_with_diagnostic(output: &std::process::Output) {
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert_eq!(output.status.code(), Some(1), "stderr: {stderr}");
        assert!(stderr.contains("cannot create window"), "stderr: {stderr}");
        assert!(stderr.contains("no display"), "stderr: {stderr}");
    }

    #[test]
    fn test_create_window_or_die_exits_with_diagnostic() {
        if std::env::var_os(DIE_CHILD_ENV).is_some() {
            let mut factory = HeadlessWindowFactory::failing("no display");
            let _window = factory.create_window_or_die(640, 480, "Test");
            return;
        }

        let output = run_in_child(
            "render::window::factory::tests::test_create_window_or_die_exits_with_diagnostic",
        );
        assert_died_with_diagnostic(&output);
    }

    #[test]
    fn test_create_window_from_config_or_die_exits_with_diagnostic() {
        if std::env::var_os(DIE_CHILD_ENV).is_some() {
            let mut factory = HeadlessWindowFactory::failing("no display");
            let _window = factory.create_window_from_config_or_die(&WindowConfig::default());
            return;
        }

        let output = run_in_child(
            "render::window::factory::tests::test_create_window_from_config_or_die_exits_with_diagnostic",
        );
        assert_died_with_diagnostic(&output);
    }

    #[test]
    fn test_create_window_or_die_returns_window_on_success() {
        let mut factory = HeadlessWindowFactory::default();
        let window = factory.create_window_or_die(320, 240, "Alive");
        assert_eq!(window.framebuffer_size(), (320, 240));
    }

    #[test]
    fn test_factory_slot_lifecycle() {
        let mut slot = Singleton::new(|| -> Box<dyn WindowFactory> {
            Box::new(HeadlessWindowFactory::default())
        });

        assert_eq!(slot.get_instance().backend_name(), "headless");
        let generation = slot.generation();
        slot.get_instance();
        assert_eq!(slot.generation(), generation);

        assert!(slot.delete_instance());
        assert!(!slot.delete_instance());
        slot.get_instance();
        assert_eq!(slot.generation(), generation + 1);
    }

    #[cfg(not(feature = "glfw-backend"))]
    #[test]
    fn test_default_factory_is_headless_without_glfw() {
        let mut slot = window_factory_slot();
        assert_eq!(slot.get_instance().backend_name(), "headless");
    }
}
