//! Wiederverwendbare Zwischenpuffer für die Ribbon-Generierung.

use glam::{Vec3, Vec4};

/// Vom Aufrufer gehaltene Scratch-Buffer (vermeidet per-Aufruf-Allokation).
///
/// Jeder Puffer wird pro Aufruf auf die aktuelle Sample-Anzahl gebracht und
/// vollständig überschrieben. Nicht zwischen gleichzeitigen Generierungen teilen.
#[derive(Debug, Default, Clone)]
pub struct RibbonScratch {
    pub(super) positions: Vec<Vec3>,
    pub(super) hull: Vec<Vec3>,
    pub(super) centerline: Vec<Vec3>,
    pub(super) left: Vec<Vec3>,
    pub(super) right: Vec<Vec3>,
    pub(super) smoothed: Vec<Vec3>,
    pub(super) radius_multipliers: Vec<f32>,
    pub(super) custom_data: Vec<Vec4>,
}

impl RibbonScratch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bringt alle Sample-Puffer auf `sample_count` Einträge (genullt).
    pub(super) fn prepare(&mut self, sample_count: usize) {
        for buffer in [
            &mut self.centerline,
            &mut self.left,
            &mut self.right,
            &mut self.smoothed,
        ] {
            buffer.clear();
            buffer.resize(sample_count, Vec3::ZERO);
        }
        self.radius_multipliers.clear();
        self.radius_multipliers.resize(sample_count, 0.0);
        self.custom_data.clear();
        self.custom_data.resize(sample_count, Vec4::ZERO);
    }

    /// Verwirft alle Zwischenergebnisse (Kapazität bleibt erhalten).
    pub fn reset(&mut self) {
        self.positions.clear();
        self.hull.clear();
        self.centerline.clear();
        self.left.clear();
        self.right.clear();
        self.smoothed.clear();
        self.radius_multipliers.clear();
        self.custom_data.clear();
    }

    /// Hull-Array der letzten Generierung (Durchgangspunkte + Handles).
    pub fn hull(&self) -> &[Vec3] {
        &self.hull
    }

    /// Abgetastete Mittellinie der letzten Generierung.
    pub fn centerline(&self) -> &[Vec3] {
        &self.centerline
    }

    /// Linke Offset-Polyline (nach Overlap-Korrektur und Glättung, Welt-Raum).
    pub fn left_offsets(&self) -> &[Vec3] {
        &self.left
    }

    /// Rechte Offset-Polyline (nach Overlap-Korrektur und Glättung, Welt-Raum).
    pub fn right_offsets(&self) -> &[Vec3] {
        &self.right
    }

    /// Interpolierte Radius-Multiplikatoren pro Sample.
    pub fn radius_multipliers(&self) -> &[f32] {
        &self.radius_multipliers
    }

    /// Sample-Anzahl der letzten Generierung.
    pub fn sample_count(&self) -> usize {
        self.centerline.len()
    }
}
