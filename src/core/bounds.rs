//! Achsparallele Bounding-Box für Ribbon-Punkte.

use glam::{Affine3A, Vec2, Vec3};
use serde::Serialize;

/// Achsparallele Bounding-Box im Welt-Raum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Berechnet die Box aus lokalen Punkten, transformiert nach Welt-Koordinaten.
    ///
    /// Liefert `None` bei weniger als 2 Punkten, da dann kein Mesh existiert.
    pub fn from_points(points: &[Vec3], local_to_world: &Affine3A) -> Option<Self> {
        if points.len() < 2 {
            return None;
        }

        let first = local_to_world.transform_point3(points[0]);
        let (min, max) = points[1..]
            .iter()
            .map(|p| local_to_world.transform_point3(*p))
            .fold((first, first), |(min, max), p| (min.min(p), max.max(p)));

        Some(Self { min, max })
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Horizontale Grundfläche `(min_xz, max_xz)`.
    pub fn rect_xz(&self) -> (Vec2, Vec2) {
        (
            Vec2::new(self.min.x, self.min.z),
            Vec2::new(self.max.x, self.max.z),
        )
    }
}
