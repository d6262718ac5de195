use serde::{Deserialize, Serialize};

use crate::geometry::FaceDirection;
use crate::math::{transform_direction, transform_point, Matrix4, Point3, Vector3};
use crate::tessellation::TriangleMesh;

use super::material::{PipMaterial, SurfaceMaterial};

/// Pixel extent of the canvas the die is drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Square viewport.
    #[must_use]
    pub fn square(size: u32) -> Self {
        Self::new(size, size)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Width over height.
    #[must_use]
    pub fn aspect(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height.max(1))
    }
}

/// Perspective camera looking at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Point3,
    /// Vertical field of view in degrees.
    pub fov_degrees: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Point3::new(3.0, 2.0, 5.0),
            fov_degrees: 40.0,
        }
    }
}

/// Image-based lighting preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentPreset {
    /// Dark, low-key reflections.
    #[default]
    Night,
    /// Neutral softbox reflections.
    Studio,
    /// Warm, low-sun reflections.
    Sunset,
}

/// A distant light aimed at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// Where the light shines from.
    pub position: Point3,
    /// Light intensity multiplier.
    pub intensity: f64,
    /// Whether the die casts a shadow under this light.
    pub cast_shadow: bool,
}

/// Lights surrounding the die.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lighting {
    /// Uniform fill light intensity.
    pub ambient_intensity: f64,
    /// Key light.
    pub directional: DirectionalLight,
    /// Image-based reflections.
    pub environment: EnvironmentPreset,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient_intensity: 0.6,
            directional: DirectionalLight {
                position: Point3::new(5.0, 5.0, 5.0),
                intensity: 1.4,
                cast_shadow: true,
            },
            environment: EnvironmentPreset::Night,
        }
    }
}

/// One pip drawn as a sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipInstance {
    /// Face the pip belongs to.
    pub face: FaceDirection,
    /// Centre in scene coordinates, after the die transform.
    pub center: Point3,
    /// Sphere radius.
    pub radius: f64,
}

impl PipInstance {
    /// Maps the unit pip sphere onto this pip.
    ///
    /// The die transform is rigid, so rotating the sphere is unnecessary.
    #[must_use]
    pub fn matrix(&self) -> Matrix4 {
        Matrix4::new_translation(&self.center.coords) * Matrix4::new_scaling(self.radius)
    }
}

/// Everything needed to draw the die once.
///
/// Meshes are borrowed from the renderer that composed the frame.
#[derive(Debug, Clone)]
pub struct Frame<'a> {
    /// Canvas the frame is drawn into.
    pub viewport: Viewport,
    pub camera: Camera,
    pub lighting: Lighting,
    /// Rigid transform of the die: float pose after rotation.
    pub die_transform: Matrix4,
    /// Unit cube mesh.
    pub body_mesh: &'a TriangleMesh,
    /// Die transform scaled to the edge length.
    pub body_transform: Matrix4,
    pub body_material: SurfaceMaterial,
    /// Unit sphere mesh shared by every pip.
    pub pip_mesh: &'a TriangleMesh,
    pub pip_material: PipMaterial,
    pub pips: Vec<PipInstance>,
}

impl Frame<'_> {
    /// Scene-space position of the die centre.
    #[must_use]
    pub fn die_center(&self) -> Point3 {
        transform_point(&self.die_transform, &Point3::origin())
    }

    /// Scene-space direction of a face normal.
    #[must_use]
    pub fn face_normal(&self, face: FaceDirection) -> Vector3 {
        transform_direction(&self.die_transform, &face.normal())
    }

    /// Flattens body and pips into one scene-space mesh.
    #[must_use]
    pub fn world_mesh(&self) -> TriangleMesh {
        let mut mesh = self.body_mesh.transformed(&self.body_transform);
        for pip in &self.pips {
            mesh.merge(&self.pip_mesh.transformed(&pip.matrix()));
        }
        mesh
    }
}
