pub mod curve;

pub use curve::{Arc, Circle, Curve, CurveDomain, Segment};
