pub mod die;
pub mod direction;
pub mod layout;

pub use die::{Die, DieProportions, Face, Mark, Orientation};
pub use direction::FaceDirection;
pub use layout::FaceLayout;
