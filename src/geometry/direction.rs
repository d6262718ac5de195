use crate::math::Vector3;

/// One of the six outward face directions of an axis-aligned cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceDirection {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

impl FaceDirection {
    /// All six directions, in face-index order.
    pub const ALL: [FaceDirection; 6] = [
        FaceDirection::PosX,
        FaceDirection::NegX,
        FaceDirection::PosY,
        FaceDirection::NegY,
        FaceDirection::PosZ,
        FaceDirection::NegZ,
    ];

    /// Stable index of this direction into [`FaceDirection::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::PosX => 0,
            Self::NegX => 1,
            Self::PosY => 2,
            Self::NegY => 3,
            Self::PosZ => 4,
            Self::NegZ => 5,
        }
    }

    /// The direction on the other side of the cube.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::PosX => Self::NegX,
            Self::NegX => Self::PosX,
            Self::PosY => Self::NegY,
            Self::NegY => Self::PosY,
            Self::PosZ => Self::NegZ,
            Self::NegZ => Self::PosZ,
        }
    }

    /// Outward unit normal.
    #[must_use]
    pub fn normal(self) -> Vector3 {
        match self {
            Self::PosX => Vector3::x(),
            Self::NegX => -Vector3::x(),
            Self::PosY => Vector3::y(),
            Self::NegY => -Vector3::y(),
            Self::PosZ => Vector3::z(),
            Self::NegZ => -Vector3::z(),
        }
    }

    /// In-face "right" direction as seen from outside the cube.
    ///
    /// Fixed per direction so layouts never mirror when the cube is resized.
    #[must_use]
    pub fn tangent_u(self) -> Vector3 {
        match self {
            Self::PosX => -Vector3::z(),
            Self::NegX => Vector3::z(),
            Self::PosY | Self::NegY | Self::PosZ => Vector3::x(),
            Self::NegZ => -Vector3::x(),
        }
    }

    /// In-face "up" direction as seen from outside the cube.
    ///
    /// `tangent_u × tangent_v` always equals [`FaceDirection::normal`].
    #[must_use]
    pub fn tangent_v(self) -> Vector3 {
        match self {
            Self::PosX | Self::NegX | Self::PosZ | Self::NegZ => Vector3::y(),
            Self::PosY => -Vector3::z(),
            Self::NegY => Vector3::z(),
        }
    }

    /// Pip count of this face under the standard die convention.
    #[must_use]
    pub fn standard_mark_count(self) -> u8 {
        match self {
            Self::PosZ => 1,
            Self::NegZ => 6,
            Self::PosX => 3,
            Self::NegX => 4,
            Self::PosY => 5,
            Self::NegY => 2,
        }
    }

    /// Short label such as `+X`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::PosX => "+X",
            Self::NegX => "-X",
            Self::PosY => "+Y",
            Self::NegY => "-Y",
            Self::PosZ => "+Z",
            Self::NegZ => "-Z",
        }
    }
}

impl std::fmt::Display for FaceDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn opposite_is_an_involution_and_flips_the_normal() {
        for dir in FaceDirection::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_ne!(dir.opposite(), dir);
            assert_relative_eq!(dir.opposite().normal(), -dir.normal());
        }
    }

    #[test]
    fn opposite_faces_sum_to_seven() {
        for dir in FaceDirection::ALL {
            let sum = dir.standard_mark_count() + dir.opposite().standard_mark_count();
            assert_eq!(sum, 7, "{dir} + {} = {sum}", dir.opposite());
        }
    }

    #[test]
    fn standard_counts_cover_one_to_six() {
        let mut counts: Vec<u8> = FaceDirection::ALL
            .iter()
            .map(|d| d.standard_mark_count())
            .collect();
        counts.sort_unstable();
        assert_eq!(counts, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn tangent_basis_is_orthonormal_and_right_handed() {
        for dir in FaceDirection::ALL {
            let (u, v, n) = (dir.tangent_u(), dir.tangent_v(), dir.normal());
            assert_relative_eq!(u.norm(), 1.0);
            assert_relative_eq!(v.norm(), 1.0);
            assert_relative_eq!(u.dot(&v), 0.0);
            assert_relative_eq!(u.dot(&n), 0.0);
            assert_relative_eq!(v.dot(&n), 0.0);
            assert_relative_eq!(u.cross(&v), n);
        }
    }

    #[test]
    fn index_matches_all_order() {
        for (i, dir) in FaceDirection::ALL.iter().enumerate() {
            assert_eq!(dir.index(), i);
        }
    }
}
