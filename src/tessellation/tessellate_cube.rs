use crate::error::{GeometryError, Result};
use crate::geometry::FaceDirection;
use crate::math::positive;

use super::TriangleMesh;

/// Tessellates a cube centred on the origin into a flat-shaded mesh.
///
/// Each face gets its own four vertices so normals stay sharp at the edges.
pub struct TessellateCube {
    edge_length: f64,
}

impl TessellateCube {
    /// Creates a new `TessellateCube` operation.
    #[must_use]
    pub fn new(edge_length: f64) -> Self {
        Self { edge_length }
    }

    /// Executes the tessellation, returning 24 vertices and 12 triangles.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidDimension`] if the edge length is not positive.
    #[allow(clippy::cast_possible_truncation)]
    pub fn execute(&self) -> Result<TriangleMesh> {
        let edge = positive(self.edge_length).ok_or(GeometryError::InvalidDimension {
            parameter: "edge_length",
            value: self.edge_length,
        })?;
        let half = edge / 2.0;

        let mut mesh = TriangleMesh::default();
        mesh.vertices.reserve(24);
        mesh.normals.reserve(24);
        mesh.indices.reserve(12);

        for direction in FaceDirection::ALL {
            let n = direction.normal();
            let u = direction.tangent_u() * half;
            let v = direction.tangent_v() * half;
            let center = n * half;
            let base = mesh.vertices.len() as u32;

            // Counter-clockwise seen from outside since u x v = n.
            for corner in [-u - v, u - v, u + v, -u + v] {
                mesh.vertices.push((center + corner).into());
                mesh.normals.push(n);
            }
            mesh.indices.push([base, base + 1, base + 2]);
            mesh.indices.push([base, base + 2, base + 3]);
        }

        Ok(mesh)
    }
}
