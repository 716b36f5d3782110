//! Geographic calculators: great-circle distance and hiking time.

pub mod great_circle;
pub mod hiking;

pub use great_circle::{GreatCircleInput, GreatCircleResult};
pub use hiking::{HikingInput, HikingResult};
