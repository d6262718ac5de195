use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::geometry::{Die, DieProportions, Face, FaceDirection, FaceLayout, Mark};
use crate::math::{positive, Point3};

/// Builds a die of a given edge length with the standard pip convention.
pub struct BuildDie {
    edge_length: f64,
    proportions: DieProportions,
}

impl BuildDie {
    /// Creates a new `BuildDie` operation with default proportions.
    #[must_use]
    pub fn new(edge_length: f64) -> Self {
        Self {
            edge_length,
            proportions: DieProportions::default(),
        }
    }

    /// Overrides the pip proportions.
    #[must_use]
    pub fn with_proportions(mut self, proportions: DieProportions) -> Self {
        self.proportions = proportions;
        self
    }

    /// Executes the operation, computing every face and pip.
    ///
    /// Face centres sit at `edge_length / 2 + surface_offset` along each normal.
    /// Pip offsets come from [`FaceLayout`] with `spread = spread_ratio * edge_length`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidDimension`] if the edge length or a ratio is
    /// not positive, and [`GeometryError::CrowdedLayout`] if pips would touch each
    /// other or cross a face edge.
    pub fn execute(&self) -> Result<Die> {
        let edge_length =
            positive(self.edge_length).ok_or(GeometryError::InvalidDimension {
                parameter: "edge_length",
                value: self.edge_length,
            })?;
        check_proportions(&self.proportions)?;

        let spread = self.proportions.spread_ratio * edge_length;
        let radius = self.proportions.pip_radius_ratio * edge_length;
        let lift = edge_length / 2.0 + self.proportions.surface_offset;
        let layout = FaceLayout::new(spread);

        let [px, nx, py, ny, pz, nz] =
            FaceDirection::ALL.map(|direction| build_face(direction, &layout, radius, lift));
        let faces = [px?, nx?, py?, ny?, pz?, nz?];
        let die = Die::from_faces(edge_length, self.proportions, faces);
        debug!(
            edge_length,
            spread,
            radius,
            marks = die.mark_total(),
            "built die"
        );
        Ok(die)
    }
}

/// Projects the layout for `direction` onto its face.
fn build_face(
    direction: FaceDirection,
    layout: &FaceLayout,
    radius: f64,
    lift: f64,
) -> Result<Face> {
    let mark_count = direction.standard_mark_count();
    let center = Point3::from(direction.normal() * lift);
    let (tu, tv) = (direction.tangent_u(), direction.tangent_v());
    let marks = layout
        .layout(mark_count)?
        .into_iter()
        .map(|offset| Mark {
            offset,
            radius,
            position: center + tu * offset.x + tv * offset.y,
        })
        .collect();
    Ok(Face {
        direction,
        mark_count,
        center,
        marks,
    })
}

/// Checks that pips fit their face for every edge length.
///
/// All quantities scale with the edge length, so the checks run on a unit cube.
fn check_proportions(p: &DieProportions) -> Result<()> {
    positive(p.spread_ratio).ok_or(GeometryError::InvalidDimension {
        parameter: "spread_ratio",
        value: p.spread_ratio,
    })?;
    positive(p.pip_radius_ratio).ok_or(GeometryError::InvalidDimension {
        parameter: "pip_radius_ratio",
        value: p.pip_radius_ratio,
    })?;
    if !(p.surface_offset.is_finite() && p.surface_offset >= 0.0) {
        return Err(GeometryError::InvalidDimension {
            parameter: "surface_offset",
            value: p.surface_offset,
        }
        .into());
    }

    let half_width = 0.5;
    let crosses_edge = p.spread_ratio + p.pip_radius_ratio >= half_width;
    let pips_touch = p.spread_ratio <= 2.0 * p.pip_radius_ratio;
    if crosses_edge || pips_touch {
        return Err(GeometryError::CrowdedLayout {
            spread: p.spread_ratio,
            radius: p.pip_radius_ratio,
            half_width,
        }
        .into());
    }
    Ok(())
}
