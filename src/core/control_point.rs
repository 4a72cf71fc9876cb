//! Vom Benutzer platzierter Kontrollpunkt einer Spline.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::point_data::PointData;

/// Lage des Ribbons relativ zur Mittellinie der Spline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OffsetMode {
    /// Ribbon liegt vollständig links der Spline
    Left,
    /// Ribbon ist um die Spline zentriert
    #[default]
    Center,
    /// Ribbon liegt vollständig rechts der Spline
    Right,
}

impl OffsetMode {
    /// Liefert die Offset-Radien `(links, rechts)` für den gegebenen Spline-Radius.
    ///
    /// Die Gesamtbreite ist in allen Modi `2 * radius`: `Left`/`Right` legen das
    /// komplette Band auf eine Seite, `Center` teilt es gleichmäßig auf.
    pub fn side_radii(self, radius: f32) -> (f32, f32) {
        match self {
            OffsetMode::Left => (radius * 2.0, 0.0),
            OffsetMode::Center => (radius, radius),
            OffsetMode::Right => (0.0, radius * 2.0),
        }
    }
}

fn default_radius_multiplier() -> f32 {
    1.0
}

/// Ein Kontrollpunkt, durch den die Kurve verläuft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    /// Position im Raum des Aufrufers
    pub position: Vec3,
    /// Multiplikator für den Spline-Radius an diesem Punkt
    #[serde(default = "default_radius_multiplier")]
    pub radius_multiplier: f32,
    /// Optionale Punkt-Daten (Flow, Foam, Waves, ...)
    #[serde(default)]
    pub data: Option<PointData>,
}

impl ControlPoint {
    /// Erstellt einen Kontrollpunkt mit Radius-Multiplikator 1.0 und ohne Daten.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            radius_multiplier: default_radius_multiplier(),
            data: None,
        }
    }

    /// Setzt den Radius-Multiplikator (Builder-Stil).
    pub fn with_radius_multiplier(mut self, radius_multiplier: f32) -> Self {
        self.radius_multiplier = radius_multiplier;
        self
    }

    /// Hängt Punkt-Daten an (Builder-Stil).
    pub fn with_data(mut self, data: PointData) -> Self {
        self.data = Some(data);
        self
    }
}

/// Sammelt die Positionen einer Kontrollpunkt-Liste in `out`.
pub fn collect_positions(points: &[ControlPoint], out: &mut Vec<Vec3>) {
    out.clear();
    out.extend(points.iter().map(|p| p.position));
}
