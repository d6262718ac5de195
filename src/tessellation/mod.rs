mod tessellate_cube;
mod tessellate_sphere;

pub use tessellate_cube::TessellateCube;
pub use tessellate_sphere::TessellateSphere;

use crate::error::{Result, TessellationError};
use crate::math::{transform_direction, transform_point, Matrix4, Point3, Vector3, TOLERANCE};

/// Parameters controlling tessellation quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TessellationParams {
    /// Number of segments around a sphere (and half as many pole to pole, at least 2).
    pub segments: usize,
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self { segments: 24 }
    }
}

impl TessellationParams {
    /// Smallest segment count that still encloses a volume.
    pub const MIN_SEGMENTS: usize = 3;

    /// Largest segment count; keeps vertex indices well inside `u32`.
    pub const MAX_SEGMENTS: usize = 256;

    fn validate(&self) -> Result<()> {
        if !(Self::MIN_SEGMENTS..=Self::MAX_SEGMENTS).contains(&self.segments) {
            return Err(TessellationError::InvalidParameters(format!(
                "segments must be in {}..={}, got {}",
                Self::MIN_SEGMENTS,
                Self::MAX_SEGMENTS,
                self.segments
            ))
            .into());
        }
        Ok(())
    }
}

/// A triangle mesh approximation of a surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Vertex normals.
    pub normals: Vec<Vector3>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Appends another mesh, re-basing its indices.
    #[allow(clippy::cast_possible_truncation)]
    pub fn merge(&mut self, other: &TriangleMesh) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.normals.extend_from_slice(&other.normals);
        self.indices
            .extend(other.indices.iter().map(|t| [t[0] + base, t[1] + base, t[2] + base]));
    }

    /// Returns a copy with every vertex and normal transformed by `matrix`.
    ///
    /// `matrix` must be rigid or uniformly scaled; normals are re-normalised, and
    /// collapse to zero under a degenerate matrix.
    #[must_use]
    pub fn transformed(&self, matrix: &Matrix4) -> TriangleMesh {
        TriangleMesh {
            vertices: self
                .vertices
                .iter()
                .map(|p| transform_point(matrix, p))
                .collect(),
            normals: self
                .normals
                .iter()
                .map(|n| {
                    transform_direction(matrix, n)
                        .try_normalize(TOLERANCE)
                        .unwrap_or_else(Vector3::zeros)
                })
                .collect(),
            indices: self.indices.clone(),
        }
    }

    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }
}
