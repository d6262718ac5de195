//! Procedurally laid-out six-sided die: pip geometry, idle animation and
//! frame composition, plus the editable page copy shown around it.

pub mod config;
pub mod content;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod render;
pub mod tessellation;

pub use config::Config;
pub use error::{PipcubeError, Result};
