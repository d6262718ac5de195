use crate::geometry::Orientation;

/// Time-driven spin of the die.
///
/// Pitch grows linearly. Yaw grows linearly with a slow sinusoidal wobble on
/// top, so the motion does not visibly loop over short windows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationDriver {
    /// Pitch rate in radians per second.
    pub base_pitch_rate: f64,
    /// Yaw rate in radians per second.
    pub base_yaw_rate: f64,
    /// Wobble amplitude in radians.
    pub amplitude: f64,
    /// Wobble angular frequency in radians per second.
    pub wobble_rate: f64,
}

impl Default for RotationDriver {
    fn default() -> Self {
        Self {
            base_pitch_rate: 0.35,
            base_yaw_rate: 0.25,
            amplitude: 0.3,
            wobble_rate: 0.2,
        }
    }
}

impl RotationDriver {
    /// Orientation after `elapsed_seconds` since the die was created.
    #[must_use]
    pub fn orientation_at(&self, elapsed_seconds: f64) -> Orientation {
        let t = elapsed_seconds;
        Orientation {
            pitch: t * self.base_pitch_rate,
            yaw: t * self.base_yaw_rate + self.amplitude * (t * self.wobble_rate).sin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn starts_at_rest() {
        let o = RotationDriver::default().orientation_at(0.0);
        assert_relative_eq!(o.pitch, 0.0);
        assert_relative_eq!(o.yaw, 0.0);
    }

    #[test]
    fn same_time_gives_same_orientation() {
        let driver = RotationDriver::default();
        for t in [0.0, 0.016, 1.0, 12.5, 3600.0] {
            assert_eq!(driver.orientation_at(t), driver.orientation_at(t));
        }
    }

    #[test]
    fn follows_linear_plus_wobble() {
        let driver = RotationDriver::default();
        let t = 10.0;
        let o = driver.orientation_at(t);
        assert_relative_eq!(o.pitch, 3.5, epsilon = 1e-12);
        assert_relative_eq!(o.yaw, 2.5 + 0.3 * 2.0_f64.sin(), epsilon = 1e-12);
    }

    #[test]
    fn yaw_is_not_purely_linear() {
        let driver = RotationDriver::default();
        let a = driver.orientation_at(1.0).yaw;
        let b = driver.orientation_at(2.0).yaw;
        assert!((b - 2.0 * a).abs() > 1e-6);
    }

    #[test]
    fn wobble_stays_within_amplitude() {
        let driver = RotationDriver::default();
        for i in 0..1000 {
            let t = f64::from(i) * 0.37;
            let linear = t * driver.base_yaw_rate;
            let yaw = driver.orientation_at(t).yaw;
            assert!((yaw - linear).abs() <= driver.amplitude + 1e-12);
        }
    }
}
