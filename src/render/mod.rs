mod frame_loop;
mod material;
mod renderer;
mod scene;

pub use frame_loop::DieAnimation;
pub use material::{Color, PipMaterial, SurfaceMaterial};
pub use renderer::{DieRenderer, DrawOutcome, RenderSettings, RenderSurface, SkipReason};
pub use scene::{
    Camera, DirectionalLight, EnvironmentPreset, Frame, Lighting, PipInstance, Viewport,
};
