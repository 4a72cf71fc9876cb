//! Core-Domänentypen: Kontrollpunkte, Punkt-Daten, Bounding-Boxen.

pub mod bounds;
pub mod control_point;
pub mod point_data;

pub use bounds::Aabb;
pub use control_point::{collect_positions, ControlPoint, OffsetMode};
pub use point_data::{
    FnAttributes, NoAttributes, PointAttributes, PointData, PointDataKind, PointDataOfKind,
};
