use tracing::{info, trace, warn};

use crate::geometry::Die;
use crate::operations::{FloatMotion, RotationDriver};

use super::renderer::{DieRenderer, DrawOutcome, RenderSurface, SkipReason};

/// Drives one die through successive frames.
///
/// Single-threaded: each tick advances the orientation and draws at most once.
/// Owns the die for its whole lifetime.
#[derive(Debug)]
pub struct DieAnimation {
    die: Die,
    renderer: DieRenderer,
    driver: RotationDriver,
    float: FloatMotion,
    last_skip: Option<SkipReason>,
}

impl DieAnimation {
    #[must_use]
    pub fn new(die: Die, renderer: DieRenderer, driver: RotationDriver, float: FloatMotion) -> Self {
        Self {
            die,
            renderer,
            driver,
            float,
            last_skip: None,
        }
    }

    #[must_use]
    pub fn die(&self) -> &Die {
        &self.die
    }

    #[must_use]
    pub fn renderer(&self) -> &DieRenderer {
        &self.renderer
    }

    /// Advances to `elapsed_seconds` and draws onto `surface` if it can show the die.
    pub fn frame<S: RenderSurface + ?Sized>(
        &mut self,
        elapsed_seconds: f64,
        surface: &mut S,
    ) -> DrawOutcome {
        let orientation = self.driver.orientation_at(elapsed_seconds);
        self.die.set_orientation(orientation);
        let pose = self.float.pose_at(elapsed_seconds);
        let outcome = self.renderer.draw(surface, &self.die, orientation, &pose);

        let skip = match outcome {
            DrawOutcome::Drawn => None,
            DrawOutcome::Skipped(reason) => Some(reason),
        };
        if skip != self.last_skip {
            if let Some(reason) = skip {
                warn!(?reason, "die hidden on this surface");
            }
            self.last_skip = skip;
        }
        trace!(elapsed_seconds, ?outcome, "frame");
        outcome
    }

    /// Runs one frame per tick until the ticks run out or the surface closes.
    ///
    /// Returns the number of frames actually drawn.
    pub fn run<S, I>(&mut self, ticks: I, surface: &mut S) -> usize
    where
        S: RenderSurface + ?Sized,
        I: IntoIterator<Item = f64>,
    {
        let mut drawn = 0;
        for elapsed in ticks {
            if !surface.is_open() {
                info!(drawn, "surface closed, stopping die animation");
                return drawn;
            }
            if self.frame(elapsed, surface) == DrawOutcome::Drawn {
                drawn += 1;
            }
        }
        drawn
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::config::Config;
    use crate::operations::BuildDie;
    use crate::render::renderer::tests::RecordingSurface;
    use crate::render::{RenderSettings, Viewport};

    fn animation() -> DieAnimation {
        let die = BuildDie::new(2.4).execute().unwrap();
        let renderer = DieRenderer::new(RenderSettings::default()).unwrap();
        DieAnimation::new(die, renderer, RotationDriver::default(), FloatMotion::default())
    }

    fn ticks(n: u32) -> impl Iterator<Item = f64> {
        (0..n).map(|i| f64::from(i) / 60.0)
    }

    #[test]
    fn frame_updates_orientation_only() {
        let mut anim = animation();
        let faces_before = anim.die().faces().clone();
        let mut surface = RecordingSurface::new(Some(Viewport::square(800)));
        anim.frame(2.0, &mut surface);

        let expected = RotationDriver::default().orientation_at(2.0);
        assert_relative_eq!(anim.die().orientation().pitch, expected.pitch);
        assert_relative_eq!(anim.die().orientation().yaw, expected.yaw);
        assert_eq!(anim.die().faces(), &faces_before);
    }

    #[test]
    fn run_draws_every_tick_on_an_open_surface() {
        let mut anim = animation();
        let mut surface = RecordingSurface::new(Some(Viewport::square(800)));
        assert_eq!(anim.run(ticks(30), &mut surface), 30);
        assert_eq!(surface.frames, 30);
    }

    #[test]
    fn run_stops_when_the_surface_closes() {
        let mut anim = animation();
        let mut surface = RecordingSurface::new(Some(Viewport::square(800)));
        surface.open_for = Some(5);
        assert_eq!(anim.run(ticks(100), &mut surface), 5);
        assert_eq!(surface.frames, 5);
    }

    #[test]
    fn run_on_unavailable_surface_draws_nothing() {
        let mut anim = animation();
        let mut surface = RecordingSurface::new(None);
        assert_eq!(anim.run(ticks(10), &mut surface), 0);
        // The orientation still advances.
        assert!(anim.die().orientation().pitch > 0.0);
    }

    #[test]
    fn default_config_draws_every_frame() {
        let config = Config::default();
        let die = config.build_die().execute().unwrap();
        let renderer = DieRenderer::new(config.render_settings()).unwrap();
        let mut anim =
            DieAnimation::new(die, renderer, config.rotation_driver(), config.float_motion());
        let mut surface = RecordingSurface::new(Some(config.viewport()));

        assert_eq!(anim.run(ticks(60), &mut surface), 60);
        assert_eq!(surface.frames, 60);
        assert_eq!(surface.last_viewport, Some(Viewport::square(700)));
    }

    #[test]
    fn narrow_host_hides_the_die_but_keeps_spinning() {
        let mut anim = animation();
        let mut surface = RecordingSurface::new(Some(Viewport::square(700)));
        surface.host_width = 375;
        assert_eq!(anim.run(ticks(10), &mut surface), 0);
        assert!(anim.die().orientation().pitch > 0.0);
    }
}
