//! Pipcube frame dump: animates the die headlessly and logs what each frame draws.
//!
//! Usage:
//! ```text
//! cargo run --example frames                       # built-in defaults
//! cargo run --example frames -- pipcube.toml       # custom config
//! cargo run --example frames -- pipcube.toml 240   # custom frame count
//! cargo run --example frames -- pipcube.toml 240 375  # phone-width host window
//! ```

use pipcube::render::{DieAnimation, DieRenderer, Frame, RenderSurface, Viewport};
use pipcube::{Config, Result};

/// Desktop window width used when none is given.
const DEFAULT_HOST_WIDTH: u32 = 1280;

/// Headless canvas that logs a summary of every presented frame.
struct LogSurface {
    viewport: Viewport,
    host_width: u32,
    presented: usize,
}

impl RenderSurface for LogSurface {
    fn viewport(&self) -> Option<Viewport> {
        Some(self.viewport)
    }

    fn host_width(&self) -> u32 {
        self.host_width
    }

    fn present(&mut self, frame: &Frame<'_>) {
        self.presented += 1;
        let center = frame.die_center();
        let mesh = frame.world_mesh();
        tracing::info!(
            frame = self.presented,
            pips = frame.pips.len(),
            canvas = frame.viewport.width,
            triangles = mesh.triangle_count(),
            center_y = center.y,
            "presented"
        );
    }
}

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for pipcube and this demo.
    // Override with RUST_LOG (e.g. RUST_LOG=pipcube=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("frames=info".parse().unwrap_or_default())
        .add_directive("pipcube=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let frame_count: u32 = args.next().and_then(|n| n.parse().ok()).unwrap_or(120);
    let host_width: u32 = args
        .next()
        .and_then(|n| n.parse().ok())
        .unwrap_or(DEFAULT_HOST_WIDTH);

    let die = config.build_die().execute()?;
    let renderer = DieRenderer::new(config.render_settings())?;
    let mut animation = DieAnimation::new(
        die,
        renderer,
        config.rotation_driver(),
        config.float_motion(),
    );

    let mut surface = LogSurface {
        viewport: config.viewport(),
        host_width,
        presented: 0,
    };

    let ticks = (0..frame_count).map(|i| f64::from(i) / 60.0);
    let drawn = animation.run(ticks, &mut surface);
    tracing::info!(drawn, "done");
    Ok(())
}
