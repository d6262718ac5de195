use crate::error::{GeometryError, Result};
use crate::math::Vector2;

/// Unit pip patterns for counts 1..=6, in multiples of the spread.
///
/// `u` points right and `v` points up, as seen from outside the face.
const PATTERNS: [&[(i8, i8)]; 6] = [
    &[(0, 0)],
    &[(-1, 1), (1, -1)],
    &[(-1, 1), (0, 0), (1, -1)],
    &[(-1, 1), (1, 1), (-1, -1), (1, -1)],
    &[(-1, 1), (1, 1), (0, 0), (-1, -1), (1, -1)],
    &[(-1, -1), (-1, 0), (-1, 1), (1, -1), (1, 0), (1, 1)],
];

/// Maps a mark count to the canonical pip offsets within a face.
///
/// Every offset is built from `{-spread, 0, +spread}`, so the whole pattern
/// scales uniformly with `spread`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceLayout {
    spread: f64,
}

impl FaceLayout {
    /// Creates a layout with the given spread (distance from the face centre
    /// to a corner pip along each tangent axis).
    #[must_use]
    pub fn new(spread: f64) -> Self {
        Self { spread }
    }

    /// Returns the spread unit.
    #[must_use]
    pub fn spread(&self) -> f64 {
        self.spread
    }

    /// Returns the unit pattern for `count` as `(u, v)` multipliers.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidMarkCount`] if `count` is not in `1..=6`.
    pub fn pattern(count: u8) -> Result<&'static [(i8, i8)]> {
        match count {
            1..=6 => Ok(PATTERNS[usize::from(count - 1)]),
            _ => Err(GeometryError::InvalidMarkCount(count).into()),
        }
    }

    /// Returns the `(u, v)` offsets of the pips for `count`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidMarkCount`] if `count` is not in `1..=6`.
    pub fn layout(&self, count: u8) -> Result<Vec<Vector2>> {
        let pattern = Self::pattern(count)?;
        Ok(pattern
            .iter()
            .map(|&(u, v)| Vector2::new(f64::from(u) * self.spread, f64::from(v) * self.spread))
            .collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PipcubeError;

    fn is_center(offset: &Vector2) -> bool {
        offset.x == 0.0 && offset.y == 0.0
    }

    #[test]
    fn layout_has_exactly_count_distinct_offsets() {
        let layout = FaceLayout::new(0.5);
        for count in 1..=6 {
            let offsets = layout.layout(count).unwrap();
            assert_eq!(offsets.len(), usize::from(count));
            for (i, a) in offsets.iter().enumerate() {
                for b in &offsets[i + 1..] {
                    assert_ne!(a, b, "duplicate offset for count {count}");
                }
            }
        }
    }

    #[test]
    fn odd_counts_have_one_center_pip_even_counts_none() {
        let layout = FaceLayout::new(1.0);
        for count in 1..=6u8 {
            let centers = layout
                .layout(count)
                .unwrap()
                .iter()
                .filter(|o| is_center(o))
                .count();
            let expected = usize::from(count % 2 == 1);
            assert_eq!(centers, expected, "count {count}");
        }
    }

    #[test]
    fn offsets_use_only_three_levels() {
        let layout = FaceLayout::new(0.7);
        for count in 1..=6 {
            for o in layout.layout(count).unwrap() {
                for c in [o.x, o.y] {
                    assert!(c == 0.0 || c == 0.7 || c == -0.7, "unexpected coordinate {c}");
                }
            }
        }
    }

    #[test]
    fn six_is_two_columns_of_three() {
        let offsets = FaceLayout::new(1.0).layout(6).unwrap();
        let left: Vec<_> = offsets.iter().filter(|o| o.x < 0.0).collect();
        let right: Vec<_> = offsets.iter().filter(|o| o.x > 0.0).collect();
        assert_eq!(left.len(), 3);
        assert_eq!(right.len(), 3);
        for column in [left, right] {
            let mut vs: Vec<f64> = column.iter().map(|o| o.y).collect();
            vs.sort_by(f64::total_cmp);
            assert_eq!(vs, vec![-1.0, 0.0, 1.0]);
        }
    }

    #[test]
    fn two_uses_opposite_corners() {
        let offsets = FaceLayout::new(1.0).layout(2).unwrap();
        assert_eq!(offsets, vec![Vector2::new(-1.0, 1.0), Vector2::new(1.0, -1.0)]);
    }

    #[test]
    fn five_is_four_plus_center() {
        let layout = FaceLayout::new(1.0);
        let four = layout.layout(4).unwrap();
        let five = layout.layout(5).unwrap();
        assert!(four.iter().all(|o| five.contains(o)));
        assert!(five.iter().any(is_center));
    }

    #[test]
    fn out_of_range_counts_fail() {
        let layout = FaceLayout::new(1.0);
        for count in [0, 7, 255] {
            let err = layout.layout(count).unwrap_err();
            assert!(matches!(
                err,
                PipcubeError::Geometry(GeometryError::InvalidMarkCount(c)) if c == count
            ));
        }
    }
}
