use crate::math::{Matrix4, Rotation3, Vector3};

/// Gentle hovering motion applied to the whole die on top of its spin.
///
/// The pose is a pure function of elapsed time and only ever moves the die as a
/// rigid body; pip positions are untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatMotion {
    /// Animation speed multiplier.
    pub speed: f64,
    /// Scale of the vertical bob.
    pub float_intensity: f64,
    /// Scale of the accompanying tilt.
    pub rotation_intensity: f64,
}

impl Default for FloatMotion {
    fn default() -> Self {
        Self {
            speed: 1.5,
            float_intensity: 1.2,
            rotation_intensity: 0.2,
        }
    }
}

/// Whole-die offset produced by [`FloatMotion`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatPose {
    /// Vertical translation.
    pub offset_y: f64,
    /// Tilt angles about X, Y and Z, in radians.
    pub tilt: Vector3,
}

impl Default for FloatPose {
    fn default() -> Self {
        Self {
            offset_y: 0.0,
            tilt: Vector3::zeros(),
        }
    }
}

impl FloatPose {
    /// Tilt as `Rx · Ry · Rz`, the same X-then-Y-then-Z order as [`Orientation::rotation`].
    ///
    /// [`Orientation::rotation`]: crate::geometry::Orientation::rotation
    #[must_use]
    pub fn tilt_rotation(&self) -> Rotation3 {
        Rotation3::from_axis_angle(&Vector3::x_axis(), self.tilt.x)
            * Rotation3::from_axis_angle(&Vector3::y_axis(), self.tilt.y)
            * Rotation3::from_axis_angle(&Vector3::z_axis(), self.tilt.z)
    }

    /// Rigid transform: tilt, then lift.
    #[must_use]
    pub fn matrix(&self) -> Matrix4 {
        Matrix4::new_translation(&Vector3::new(0.0, self.offset_y, 0.0))
            * self.tilt_rotation().to_homogeneous()
    }
}

impl FloatMotion {
    /// A motion that never moves the die.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            speed: 0.0,
            float_intensity: 0.0,
            rotation_intensity: 0.0,
        }
    }

    /// Pose after `elapsed_seconds`.
    #[must_use]
    pub fn pose_at(&self, elapsed_seconds: f64) -> FloatPose {
        let phase = elapsed_seconds * self.speed / 4.0;
        let (sin, cos) = phase.sin_cos();
        FloatPose {
            offset_y: sin / 10.0 * self.float_intensity,
            tilt: Vector3::new(cos / 8.0, sin / 8.0, sin / 20.0) * self.rotation_intensity,
        }
    }

    /// Largest vertical excursion this motion can produce.
    #[must_use]
    pub fn max_offset(&self) -> f64 {
        self.float_intensity.abs() / 10.0
    }
}
