//! # Camera
//!
//! The scaffold uses a single fixed orthographic camera. Its view volume is
//! `[-10, 10] x [-10, 10]` with depth `[0, 1]` and does not follow the window's
//! aspect ratio: non-square framebuffers stretch the scene. That is a known
//! limitation of the fixed camera, not something resize handling corrects.

use crate::foundation::math::{Mat4, OrthoVolume};
use crate::foundation::singleton::Singleton;
use crate::render::backend::RenderBackend;

/// View and projection state that can be applied to a backend
pub trait Camera {
    /// World-to-camera transform
    fn view_matrix(&self) -> Mat4;

    /// Camera-to-clip transform
    fn projection_matrix(&self) -> Mat4;

    /// Combined transform, projection applied last
    fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Apply this camera to the backend's current context
    ///
    /// Called when the window is created and after every framebuffer resize.
    fn look(&self, backend: &mut dyn RenderBackend) {
        backend.set_projection(&self.view_projection_matrix());
    }
}

/// Fixed orthographic camera looking down -Z from the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthographicCamera {
    volume: OrthoVolume,
}

impl OrthographicCamera {
    /// View volume every window camera uses
    pub const DEFAULT_VOLUME: OrthoVolume = OrthoVolume::new(-10.0, 10.0, -10.0, 10.0, 0.0, 1.0);

    /// Create a camera over the given volume
    pub const fn new(volume: OrthoVolume) -> Self {
        Self { volume }
    }

    /// View volume of this camera
    pub const fn volume(&self) -> &OrthoVolume {
        &self.volume
    }
}

impl Default for OrthographicCamera {
    fn default() -> Self {
        Self::new(Self::DEFAULT_VOLUME)
    }
}

impl Camera for OrthographicCamera {
    fn view_matrix(&self) -> Mat4 {
        Mat4::identity()
    }

    fn projection_matrix(&self) -> Mat4 {
        self.volume.to_matrix()
    }
}

/// Builds the camera implementation windows use
#[derive(Debug, Default)]
pub struct CameraFactory;

impl CameraFactory {
    /// Empty slot that lazily creates a camera factory
    pub fn slot() -> Singleton<Self> {
        Singleton::default()
    }

    /// Create the fixed orthographic camera
    pub fn create_camera(&self) -> Box<dyn Camera> {
        Box::new(OrthographicCamera::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{HeadlessBackend, RenderCommand};
    use approx::assert_relative_eq;

    #[test]
    fn test_default_volume() {
        let camera = OrthographicCamera::default();
        let volume = camera.volume();
        assert_relative_eq!(volume.left, -10.0);
        assert_relative_eq!(volume.right, 10.0);
        assert_relative_eq!(volume.bottom, -10.0);
        assert_relative_eq!(volume.top, 10.0);
        assert_relative_eq!(volume.near, 0.0);
        assert_relative_eq!(volume.far, 1.0);
    }

    #[test]
    fn test_look_loads_projection() {
        let camera = CameraFactory.create_camera();
        let mut backend = HeadlessBackend::new(640, 480);
        let handle = backend.handle();

        camera.look(&mut backend);

        let expected = Mat4::new_orthographic(-10.0, 10.0, -10.0, 10.0, 0.0, 1.0);
        match handle.commands().as_slice() {
            [RenderCommand::Projection(m)] => assert_relative_eq!(*m, expected),
            other => panic!("unexpected commands: {other:?}"),
        }
    }

    #[test]
    fn test_view_is_identity() {
        let camera = OrthographicCamera::default();
        assert_eq!(camera.view_matrix(), Mat4::identity());
        assert_eq!(camera.view_projection_matrix(), camera.projection_matrix());
    }
}
