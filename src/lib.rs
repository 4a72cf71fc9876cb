//! Spline-Ribbon: erzeugt Band-Meshes entlang kubischer Splines.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
mod error;
pub mod mesh;
pub mod shared;

pub use app::{SplineOverrides, SplineRibbon};
pub use core::{
    Aabb, ControlPoint, FnAttributes, NoAttributes, OffsetMode, PointAttributes, PointData,
    PointDataKind, PointDataOfKind,
};
pub use error::RibbonError;
pub use mesh::{generate_ribbon, RibbonMesh, RibbonMeshBuilder, RibbonScratch, RibbonVertex};
pub use shared::{RibbonOptions, RibbonScene};
