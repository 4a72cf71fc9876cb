//! Geteilte Bausteine: Konfiguration, Szenen-Datei und reine Spline-Geometrie.
//!
//! Enthält Typen, die sowohl vom Mesh-Builder als auch vom Anwendungs-Layer
//! genutzt werden, ohne dass diese sich gegenseitig kennen.

pub mod options;
mod scene;
pub mod spline_geometry;

pub use options::RibbonOptions;
pub use options::{MAX_SUBDIVISIONS, SMOOTHING_ITERATIONS};
pub use scene::RibbonScene;
