mod build_die;
mod float;
mod rotation;

pub use build_die::BuildDie;
pub use float::{FloatMotion, FloatPose};
pub use rotation::RotationDriver;
