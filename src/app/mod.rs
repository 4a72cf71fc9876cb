//! Application-Layer: hält Splines und regeneriert ihre Meshes bei Änderungen.

pub mod spline_ribbon;

pub use spline_ribbon::{SplineOverrides, SplineRibbon};
