use crate::math::{Point3, Rotation3, Vector2, Vector3};

use super::FaceDirection;

/// Size-independent proportions of the pips relative to the cube.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DieProportions {
    /// Corner pip distance from the face centre, as a fraction of the edge length.
    pub spread_ratio: f64,
    /// Pip radius as a fraction of the edge length.
    pub pip_radius_ratio: f64,
    /// Absolute lift of the pips above the cube surface.
    pub surface_offset: f64,
}

impl Default for DieProportions {
    fn default() -> Self {
        Self {
            spread_ratio: 0.28,
            pip_radius_ratio: 0.08,
            surface_offset: 0.01,
        }
    }
}

/// A single pip on a face.
#[derive(Debug, Clone, PartialEq)]
pub struct Mark {
    /// Offset within the face plane along `(tangent_u, tangent_v)`.
    pub offset: Vector2,
    /// Pip radius.
    pub radius: f64,
    /// Position in die-local coordinates.
    pub position: Point3,
}

/// One of the six faces of the die, with its pips.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    /// Outward direction identifying the face.
    pub direction: FaceDirection,
    /// Number of pips, 1..=6.
    pub mark_count: u8,
    /// Centre of the pip plane, lifted off the surface along the normal.
    pub center: Point3,
    /// Pips in layout order.
    pub marks: Vec<Mark>,
}

impl Face {
    /// Outward unit normal.
    #[must_use]
    pub fn normal(&self) -> Vector3 {
        self.direction.normal()
    }

    /// Tangent basis `(u, v)` spanning the face plane.
    #[must_use]
    pub fn tangent_basis(&self) -> (Vector3, Vector3) {
        (self.direction.tangent_u(), self.direction.tangent_v())
    }
}

/// Rotational pose of the die, in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orientation {
    /// Rotation about the X axis.
    pub pitch: f64,
    /// Rotation about the Y axis.
    pub yaw: f64,
}

impl Orientation {
    #[must_use]
    pub fn new(pitch: f64, yaw: f64) -> Self {
        Self { pitch, yaw }
    }

    /// Rotation applying pitch then yaw in intrinsic X-Y order.
    #[must_use]
    pub fn rotation(&self) -> Rotation3 {
        Rotation3::from_axis_angle(&Vector3::x_axis(), self.pitch)
            * Rotation3::from_axis_angle(&Vector3::y_axis(), self.yaw)
    }
}

/// A six-sided die with precomputed pips.
///
/// Faces are fixed at construction; only the orientation changes afterwards.
/// Built by [`crate::operations::BuildDie`].
#[derive(Debug, Clone, PartialEq)]
pub struct Die {
    edge_length: f64,
    proportions: DieProportions,
    faces: [Face; 6],
    orientation: Orientation,
}

impl Die {
    pub(crate) fn from_faces(
        edge_length: f64,
        proportions: DieProportions,
        faces: [Face; 6],
    ) -> Self {
        Self {
            edge_length,
            proportions,
            faces,
            orientation: Orientation::default(),
        }
    }

    #[must_use]
    pub fn edge_length(&self) -> f64 {
        self.edge_length
    }

    #[must_use]
    pub fn proportions(&self) -> &DieProportions {
        &self.proportions
    }

    /// Faces in [`FaceDirection::ALL`] order.
    #[must_use]
    pub fn faces(&self) -> &[Face; 6] {
        &self.faces
    }

    #[must_use]
    pub fn face(&self, direction: FaceDirection) -> &Face {
        &self.faces[direction.index()]
    }

    #[must_use]
    pub fn mark_count(&self, direction: FaceDirection) -> u8 {
        self.face(direction).mark_count
    }

    /// Iterates over every pip on every face.
    pub fn marks(&self) -> impl Iterator<Item = &Mark> {
        self.faces.iter().flat_map(|f| f.marks.iter())
    }

    /// Total number of pips (21 for a standard die).
    #[must_use]
    pub fn mark_total(&self) -> usize {
        self.faces.iter().map(|f| f.marks.len()).sum()
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }
}
