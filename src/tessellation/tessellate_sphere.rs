use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::error::{GeometryError, Result};
use crate::math::{positive, Point3, Vector3};

use super::{TessellationParams, TriangleMesh};

/// Tessellates a sphere into a latitude/longitude grid.
pub struct TessellateSphere {
    center: Point3,
    radius: f64,
    params: TessellationParams,
}

impl TessellateSphere {
    /// Creates a new `TessellateSphere` operation.
    #[must_use]
    pub fn new(center: Point3, radius: f64, params: TessellationParams) -> Self {
        Self {
            center,
            radius,
            params,
        }
    }

    /// Executes the tessellation.
    ///
    /// The grid has `segments` columns and `max(segments / 2, 2)` rows. Pole rows
    /// keep their duplicated vertices, which is harmless for rendering.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive or the segment count is
    /// below [`TessellationParams::MIN_SEGMENTS`].
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn execute(&self) -> Result<TriangleMesh> {
        let radius = positive(self.radius).ok_or(GeometryError::InvalidDimension {
            parameter: "radius",
            value: self.radius,
        })?;
        self.params.validate()?;

        let n_u = self.params.segments;
        let n_v = (n_u / 2).max(2);
        let cols = n_u + 1;
        let rows = n_v + 1;

        let mut mesh = TriangleMesh::default();
        mesh.vertices.reserve(rows * cols);
        mesh.normals.reserve(rows * cols);
        mesh.indices.reserve(n_u * n_v * 2);

        for iv in 0..rows {
            let lat = -FRAC_PI_2 + PI * iv as f64 / n_v as f64;
            let (sin_lat, cos_lat) = lat.sin_cos();
            for iu in 0..cols {
                let lon = TAU * iu as f64 / n_u as f64;
                let (sin_lon, cos_lon) = lon.sin_cos();
                let n = Vector3::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat);
                mesh.vertices.push(self.center + n * radius);
                mesh.normals.push(n);
            }
        }

        for iv in 0..n_v {
            for iu in 0..n_u {
                let i00 = (iv * cols + iu) as u32;
                let i10 = (iv * cols + iu + 1) as u32;
                let i01 = ((iv + 1) * cols + iu) as u32;
                let i11 = ((iv + 1) * cols + iu + 1) as u32;
                mesh.indices.push([i00, i10, i11]);
                mesh.indices.push([i00, i11, i01]);
            }
        }

        Ok(mesh)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn vertices_lie_on_the_sphere() {
        let center = Point3::new(1.0, -2.0, 0.5);
        let mesh = TessellateSphere::new(center, 0.192, TessellationParams::default())
            .execute()
            .unwrap();
        for (p, n) in mesh.vertices.iter().zip(&mesh.normals) {
            assert_relative_eq!((p - center).norm(), 0.192, epsilon = 1e-12);
            assert_relative_eq!(n.norm(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn grid_size_follows_segments() {
        let mesh = TessellateSphere::new(Point3::origin(), 1.0, TessellationParams { segments: 8 })
            .execute()
            .unwrap();
        assert_eq!(mesh.vertices.len(), 9 * 5);
        assert_eq!(mesh.triangle_count(), 8 * 4 * 2);
    }

    #[test]
    fn indices_are_in_range() {
        let mesh = TessellateSphere::new(Point3::origin(), 1.0, TessellationParams { segments: 3 })
            .execute()
            .unwrap();
        let len = mesh.vertices.len() as u32;
        assert!(mesh.indices.iter().flatten().all(|&i| i < len));
    }

    #[test]
    fn triangles_wind_outward() {
        let center = Point3::new(0.5, 0.0, -1.0);
        let mesh = TessellateSphere::new(center, 1.0, TessellationParams { segments: 12 })
            .execute()
            .unwrap();
        let mut checked = 0;
        for tri in &mesh.indices {
            let [a, b, c] = tri.map(|i| mesh.vertices[i as usize]);
            let face_normal = (b - a).cross(&(c - a));
            // Pole rows collapse one edge to a point.
            if face_normal.norm() < 1e-12 {
                continue;
            }
            let centroid = Point3::from((a.coords + b.coords + c.coords) / 3.0);
            assert!(face_normal.dot(&(centroid - center)) > 0.0);
            checked += 1;
        }
        assert!(checked > mesh.triangle_count() / 2);
    }

    #[test]
    fn invalid_inputs_fail() {
        let params = TessellationParams::default();
        assert!(TessellateSphere::new(Point3::origin(), 0.0, params).execute().is_err());
        assert!(
            TessellateSphere::new(Point3::origin(), 1.0, TessellationParams { segments: 1 })
                .execute()
                .is_err()
        );
    }
}
