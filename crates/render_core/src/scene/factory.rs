//! Object factory
//!
//! Builds drawables from flat coordinate buffers. The fixed-size entry points
//! take arrays, so a wrong coordinate count does not compile; the `try_`
//! variants accept slices and reject wrong lengths at the call.

use thiserror::Error;

use crate::foundation::math::{points_from_coords, Point3};
use crate::foundation::singleton::Singleton;
use crate::scene::{Line, Triangle, Vertex};

/// Geometry construction errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// The coordinate buffer does not hold exactly the expected number of values
    #[error("{shape} needs exactly {expected} coordinates, got {actual}")]
    CoordinateCount {
        /// Shape being built
        shape: &'static str,
        /// Coordinates the shape needs
        expected: usize,
        /// Coordinates supplied
        actual: usize,
    },
}

/// Builds the concrete drawable variants
#[derive(Debug, Default)]
pub struct ObjectFactory {
    created: u64,
}

impl ObjectFactory {
    /// Empty slot that lazily creates an object factory
    pub fn slot() -> Singleton<Self> {
        Singleton::default()
    }

    /// Triangle from three consecutive `x, y, z` triples
    pub fn create_triangle(&mut self, vertexes: &[f64; 9]) -> Triangle {
        self.created += 1;
        Triangle::new(collect_points(vertexes))
    }

    /// Line from two consecutive `x, y, z` triples
    pub fn create_line(&mut self, vertexes: &[f64; 6]) -> Line {
        self.created += 1;
        let [from, to]: [Point3; 2] = collect_points(vertexes);
        Line::new(from, to)
    }

    /// Point from one `x, y, z` triple
    pub fn create_vertex(&mut self, vertex: &[f64; 3]) -> Vertex {
        self.created += 1;
        Vertex::new(Point3::new(vertex[0], vertex[1], vertex[2]))
    }

    /// Triangle from a buffer that must hold exactly nine coordinates
    pub fn try_create_triangle(&mut self, vertexes: &[f64]) -> Result<Triangle, GeometryError> {
        let vertexes = exact::<9>("triangle", vertexes)?;
        Ok(self.create_triangle(vertexes))
    }

    /// Line from a buffer that must hold exactly six coordinates
    pub fn try_create_line(&mut self, vertexes: &[f64]) -> Result<Line, GeometryError> {
        let vertexes = exact::<6>("line", vertexes)?;
        Ok(self.create_line(vertexes))
    }

    /// Point from a buffer that must hold exactly three coordinates
    pub fn try_create_vertex(&mut self, vertex: &[f64]) -> Result<Vertex, GeometryError> {
        let vertex = exact::<3>("vertex", vertex)?;
        Ok(self.create_vertex(vertex))
    }

    /// Number of objects this factory has built
    pub fn created(&self) -> u64 {
        self.created
    }
}

fn exact<'a, const N: usize>(
    shape: &'static str,
    coords: &'a [f64],
) -> Result<&'a [f64; N], GeometryError> {
    coords.try_into().map_err(|_| {
        log::warn!("Rejected {shape} with {} coordinates", coords.len());
        GeometryError::CoordinateCount {
            shape,
            expected: N,
            actual: coords.len(),
        }
    })
}

fn collect_points<const C: usize, const P: usize>(coords: &[f64; C]) -> [Point3; P] {
    let mut points = [Point3::origin(); P];
    for (slot, point) in points.iter_mut().zip(points_from_coords(coords)) {
        *slot = point;
    }
    points
}
