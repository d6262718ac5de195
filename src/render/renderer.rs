use tracing::{debug, trace};

use crate::error::Result;
use crate::geometry::{Die, Orientation};
use crate::math::{transform_point, Matrix4, Point3};
use crate::operations::FloatPose;
use crate::tessellation::{TessellateCube, TessellateSphere, TessellationParams, TriangleMesh};

use super::material::{PipMaterial, SurfaceMaterial};
use super::scene::{Camera, Frame, Lighting, PipInstance, Viewport};

/// Presentation settings for [`DieRenderer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    pub camera: Camera,
    pub lighting: Lighting,
    pub body_material: SurfaceMaterial,
    pub pip_material: PipMaterial,
    pub tessellation: TessellationParams,
    /// Host windows narrower than this hide the die entirely.
    pub min_host_width: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            camera: Camera::default(),
            lighting: Lighting::default(),
            body_material: SurfaceMaterial::default(),
            pip_material: PipMaterial::default(),
            tessellation: TessellationParams::default(),
            min_host_width: 768,
        }
    }
}

/// Host drawing target: a canvas embedded in a wider window.
pub trait RenderSurface {
    /// Extent of the canvas the die is drawn into, or `None` when no rendering
    /// context exists.
    fn viewport(&self) -> Option<Viewport>;

    /// Width of the window hosting the canvas, in pixels.
    fn host_width(&self) -> u32;

    /// Draws a composed frame.
    fn present(&mut self, frame: &Frame<'_>);

    /// Whether the hosting view is still alive.
    fn is_open(&self) -> bool {
        true
    }
}

/// Why a frame was not drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The surface has no rendering context.
    NoContext,
    /// The canvas has zero area.
    EmptyViewport,
    /// The host window is narrower than [`RenderSettings::min_host_width`].
    TooNarrow { width: u32, min_width: u32 },
}

/// Result of [`DieRenderer::draw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
    Drawn,
    Skipped(SkipReason),
}

/// Composes a [`Die`] and its current pose into drawable frames.
///
/// Holds only immutable unit meshes; every frame is a pure function of its
/// inputs.
#[derive(Debug, Clone)]
pub struct DieRenderer {
    settings: RenderSettings,
    body_mesh: TriangleMesh,
    pip_mesh: TriangleMesh,
}

impl DieRenderer {
    /// Creates a renderer, tessellating the unit cube and unit pip sphere.
    ///
    /// # Errors
    ///
    /// Returns an error if the tessellation parameters are invalid.
    pub fn new(settings: RenderSettings) -> Result<Self> {
        let body_mesh = TessellateCube::new(1.0).execute()?;
        let pip_mesh =
            TessellateSphere::new(Point3::origin(), 1.0, settings.tessellation).execute()?;
        debug!(
            body_triangles = body_mesh.triangle_count(),
            pip_triangles = pip_mesh.triangle_count(),
            "renderer ready"
        );
        Ok(Self {
            settings,
            body_mesh,
            pip_mesh,
        })
    }

    #[must_use]
    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Rigid transform placing the die in the scene: float pose after rotation.
    #[must_use]
    pub fn die_transform(orientation: Orientation, float_pose: &FloatPose) -> Matrix4 {
        float_pose.matrix() * orientation.rotation().to_homogeneous()
    }

    /// Composes one frame for `viewport`.
    ///
    /// The die itself is only read; pips are moved into scene space per frame.
    #[must_use]
    pub fn render(
        &self,
        die: &Die,
        orientation: Orientation,
        float_pose: &FloatPose,
        viewport: Viewport,
    ) -> Frame<'_> {
        let die_transform = Self::die_transform(orientation, float_pose);
        let pips = die
            .faces()
            .iter()
            .flat_map(|face| {
                face.marks.iter().map(move |mark| PipInstance {
                    face: face.direction,
                    center: transform_point(&die_transform, &mark.position),
                    radius: mark.radius,
                })
            })
            .collect();

        Frame {
            viewport,
            camera: self.settings.camera,
            lighting: self.settings.lighting,
            die_transform,
            body_mesh: &self.body_mesh,
            body_transform: die_transform * Matrix4::new_scaling(die.edge_length()),
            body_material: self.settings.body_material,
            pip_mesh: &self.pip_mesh,
            pip_material: self.settings.pip_material,
            pips,
        }
    }

    /// Renders onto `surface`, or does nothing if the surface cannot show the die.
    pub fn draw<S: RenderSurface + ?Sized>(
        &self,
        surface: &mut S,
        die: &Die,
        orientation: Orientation,
        float_pose: &FloatPose,
    ) -> DrawOutcome {
        let viewport = match self.check_surface(surface.viewport(), surface.host_width()) {
            Ok(viewport) => viewport,
            Err(reason) => {
                trace!(?reason, "skipping die frame");
                return DrawOutcome::Skipped(reason);
            }
        };
        let frame = self.render(die, orientation, float_pose, viewport);
        surface.present(&frame);
        DrawOutcome::Drawn
    }

    fn check_surface(
        &self,
        viewport: Option<Viewport>,
        host_width: u32,
    ) -> std::result::Result<Viewport, SkipReason> {
        let viewport = viewport.ok_or(SkipReason::NoContext)?;
        if viewport.is_empty() {
            return Err(SkipReason::EmptyViewport);
        }
        if host_width < self.settings.min_host_width {
            return Err(SkipReason::TooNarrow {
                width: host_width,
                min_width: self.settings.min_host_width,
            });
        }
        Ok(viewport)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::geometry::FaceDirection;
    use crate::math::Vector3;
    use crate::operations::{BuildDie, FloatMotion};

    /// Surface that records how many frames it was shown.
    ///
    /// Hosted in a desktop-width window unless `host_width` is changed.
    pub(crate) struct RecordingSurface {
        pub viewport: Option<Viewport>,
        pub host_width: u32,
        pub frames: usize,
        pub last_pip_count: usize,
        pub last_viewport: Option<Viewport>,
        pub open_for: Option<usize>,
    }

    impl RecordingSurface {
        pub fn new(viewport: Option<Viewport>) -> Self {
            Self {
                viewport,
                host_width: 1280,
                frames: 0,
                last_pip_count: 0,
                last_viewport: None,
                open_for: None,
            }
        }
    }

    impl RenderSurface for RecordingSurface {
        fn viewport(&self) -> Option<Viewport> {
            self.viewport
        }

        fn host_width(&self) -> u32 {
            self.host_width
        }

        fn present(&mut self, frame: &Frame<'_>) {
            self.frames += 1;
            self.last_pip_count = frame.pips.len();
            self.last_viewport = Some(frame.viewport);
        }

        fn is_open(&self) -> bool {
            match self.open_for {
                Some(limit) => self.frames < limit,
                None => true,
            }
        }
    }

    fn setup() -> (Die, DieRenderer) {
        let die = BuildDie::new(2.4).execute().unwrap();
        let renderer = DieRenderer::new(RenderSettings::default()).unwrap();
        (die, renderer)
    }

    #[test]
    fn frame_has_one_instance_per_pip() {
        let (die, renderer) = setup();
        let frame = renderer.render(
            &die,
            Orientation::default(),
            &FloatPose::default(),
            Viewport::square(700),
        );
        assert_eq!(frame.pips.len(), 21);
        assert_eq!(frame.body_mesh.triangle_count(), 12);
    }

    #[test]
    fn identity_pose_keeps_pips_in_place() {
        let (die, renderer) = setup();
        let frame = renderer.render(
            &die,
            Orientation::default(),
            &FloatPose::default(),
            Viewport::square(700),
        );
        for (pip, mark) in frame.pips.iter().zip(die.marks()) {
            assert_relative_eq!(pip.center, mark.position, epsilon = 1e-12);
        }
    }

    #[test]
    fn rendering_is_idempotent() {
        let (die, renderer) = setup();
        let orientation = Orientation::new(0.7, -1.3);
        let pose = FloatMotion::default().pose_at(3.0);
        let a = renderer.render(&die, orientation, &pose, Viewport::square(700));
        let b = renderer.render(&die, orientation, &pose, Viewport::square(700));
        assert_eq!(a.pips, b.pips);
        assert_eq!(a.die_transform, b.die_transform);
    }

    #[test]
    fn float_pose_moves_the_whole_die_only() {
        let (die, renderer) = setup();
        let before = die.clone();
        let pose = FloatPose {
            offset_y: 0.1,
            tilt: Vector3::zeros(),
        };
        let frame = renderer.render(&die, Orientation::default(), &pose, Viewport::square(700));
        for (pip, mark) in frame.pips.iter().zip(die.marks()) {
            assert_relative_eq!(pip.center.y, mark.position.y + 0.1, epsilon = 1e-12);
        }
        assert_eq!(die, before);
        assert_relative_eq!(frame.die_center(), Point3::new(0.0, 0.1, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn rotated_pips_stay_on_their_rotated_faces() {
        let (die, renderer) = setup();
        let orientation = Orientation::new(0.4, 1.1);
        let frame = renderer.render(&die, orientation, &FloatPose::default(), Viewport::square(700));
        let lift = die.edge_length() / 2.0 + die.proportions().surface_offset;
        for pip in &frame.pips {
            let n = frame.face_normal(pip.face);
            assert_relative_eq!(pip.center.coords.dot(&n), lift, epsilon = 1e-9);
        }
        let up = frame.face_normal(FaceDirection::PosY);
        assert_relative_eq!(up.norm(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn world_mesh_contains_body_and_pips() {
        let (die, renderer) = setup();
        let frame = renderer.render(
            &die,
            Orientation::default(),
            &FloatPose::default(),
            Viewport::square(700),
        );
        let mesh = frame.world_mesh();
        let expected = 12 + 21 * renderer.pip_mesh.triangle_count();
        assert_eq!(mesh.triangle_count(), expected);
        // Body corners reach half the edge length.
        assert!(mesh.vertices[..24].iter().all(|p| (p.x.abs() - 1.2).abs() < 1e-12));
    }

    #[test]
    fn missing_context_degrades_to_no_op() {
        let (die, renderer) = setup();
        let mut surface = RecordingSurface::new(None);
        let outcome = renderer.draw(&mut surface, &die, Orientation::default(), &FloatPose::default());
        assert_eq!(outcome, DrawOutcome::Skipped(SkipReason::NoContext));
        assert_eq!(surface.frames, 0);
    }

    #[test]
    fn narrow_host_or_empty_canvas_is_skipped() {
        let (die, renderer) = setup();
        let mut narrow = RecordingSurface::new(Some(Viewport::square(700)));
        narrow.host_width = 375;
        let outcome = renderer.draw(&mut narrow, &die, Orientation::default(), &FloatPose::default());
        assert_eq!(
            outcome,
            DrawOutcome::Skipped(SkipReason::TooNarrow {
                width: 375,
                min_width: 768
            })
        );
        let mut empty = RecordingSurface::new(Some(Viewport::new(0, 0)));
        let outcome = renderer.draw(&mut empty, &die, Orientation::default(), &FloatPose::default());
        assert_eq!(outcome, DrawOutcome::Skipped(SkipReason::EmptyViewport));
        assert_eq!(narrow.frames + empty.frames, 0);
    }

    #[test]
    fn canvas_smaller_than_breakpoint_is_drawn_in_a_wide_host() {
        let (die, renderer) = setup();
        let mut surface = RecordingSurface::new(Some(Viewport::square(700)));
        surface.host_width = 768;
        let outcome = renderer.draw(&mut surface, &die, Orientation::default(), &FloatPose::default());
        assert_eq!(outcome, DrawOutcome::Drawn);
        assert_eq!(surface.frames, 1);
        assert_eq!(surface.last_pip_count, 21);
        assert_eq!(surface.last_viewport, Some(Viewport::square(700)));
    }
}
