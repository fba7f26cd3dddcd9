pub mod catalog;
pub mod construction;
pub mod error;
pub mod geometry;
pub mod math;
pub mod tessellation;

pub use construction::{build, build_up_to_step, ConstructionEngine, GeometryResult, STEP_COUNT};
pub use error::{FlagcraftError, Result};
