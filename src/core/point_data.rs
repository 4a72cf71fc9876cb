//! Punkt-Daten an Kontrollpunkten und die Lookup-Schnittstelle für den Mesh-Builder.
//!
//! Jede Feature-Art (Flow, Foam, Waves, Absorption, Scattering) schreibt genau einen
//! `Vec4` in den UV1-Kanal des Ribbons. Der Builder fragt die Werte ausschließlich über
//! [`PointAttributes`] ab und kennt die konkreten Typen nicht.

use glam::Vec4;
use serde::{Deserialize, Serialize};

use super::control_point::ControlPoint;

// ── Standardwerte ──────────────────────────────────────────────────

/// Standard-Fließgeschwindigkeit entlang der Spline.
pub const DEFAULT_FLOW_VELOCITY: f32 = 2.0;
/// Standard-Schaummenge.
pub const DEFAULT_FOAM_AMOUNT: f32 = 1.0;
/// Standard-Gewicht für Wellen.
pub const DEFAULT_WAVE_WEIGHT: f32 = 1.0;
/// Standard-Gewicht für Farb-Daten (Absorption/Scattering).
pub const DEFAULT_COLOR_WEIGHT: f32 = 1.0;

/// Art der Punkt-Daten, die ein Ribbon konsumiert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointDataKind {
    Flow,
    Foam,
    Waves,
    Absorption,
    Scattering,
}

impl PointDataKind {
    /// Feature-Standardwert, wenn ein Punkt keine Daten dieser Art trägt.
    ///
    /// Farb-Features haben keinen sinnvollen festen Default und liefern `None`;
    /// der Aufrufer muss dann selbst einen Wert setzen.
    pub fn default_data(self) -> Option<Vec4> {
        match self {
            PointDataKind::Flow => Some(Vec4::new(DEFAULT_FLOW_VELOCITY, 0.0, 0.0, 0.0)),
            PointDataKind::Foam => Some(Vec4::new(DEFAULT_FOAM_AMOUNT, 0.0, 0.0, 0.0)),
            PointDataKind::Waves => Some(Vec4::new(DEFAULT_WAVE_WEIGHT, 0.0, 0.0, 0.0)),
            PointDataKind::Absorption | PointDataKind::Scattering => None,
        }
    }
}

/// An einem Kontrollpunkt hängende Daten.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum PointData {
    /// Fließgeschwindigkeit in Spline-Richtung (negativ = umgekehrt)
    Flow { velocity: f32 },
    /// Menge des emittierten Schaums
    Foam { amount: f32 },
    /// Gewichtsmultiplikator für Wellen
    Waves { weight: f32 },
    /// Absorptionsfarbe (bereits in Absorptionskoeffizienten umgerechnet)
    Absorption {
        #[serde(default)]
        override_absorption: bool,
        #[serde(default)]
        absorption: Vec4,
        #[serde(default = "default_color_weight")]
        weight: f32,
    },
    /// Scattering-Farbe (linear)
    Scattering {
        #[serde(default)]
        override_scattering: bool,
        #[serde(default)]
        color: Vec4,
        #[serde(default = "default_color_weight")]
        weight: f32,
    },
}

fn default_color_weight() -> f32 {
    DEFAULT_COLOR_WEIGHT
}

impl PointData {
    /// Art dieser Daten.
    pub fn kind(&self) -> PointDataKind {
        match self {
            PointData::Flow { .. } => PointDataKind::Flow,
            PointData::Foam { .. } => PointDataKind::Foam,
            PointData::Waves { .. } => PointDataKind::Waves,
            PointData::Absorption { .. } => PointDataKind::Absorption,
            PointData::Scattering { .. } => PointDataKind::Scattering,
        }
    }

    /// Löst die Daten gegen den Ribbon-Default auf.
    ///
    /// Skalare Features ignorieren den Default. Farb-Features überschreiben entweder
    /// den kompletten Wert oder nur das Gewicht in `w`.
    pub fn resolve(&self, default: Vec4) -> Vec4 {
        match *self {
            PointData::Flow { velocity } => Vec4::new(velocity, 0.0, 0.0, 0.0),
            PointData::Foam { amount } => Vec4::new(amount, 0.0, 0.0, 0.0),
            PointData::Waves { weight } => Vec4::new(weight, 0.0, 0.0, 0.0),
            PointData::Absorption {
                override_absorption,
                absorption,
                weight,
            } => {
                if override_absorption {
                    absorption
                } else {
                    default.truncate().extend(weight)
                }
            }
            PointData::Scattering {
                override_scattering,
                color,
                weight,
            } => {
                if override_scattering {
                    color
                } else {
                    default.truncate().extend(weight)
                }
            }
        }
    }
}

/// Liefert optionale Attribut-Werte pro Kontrollpunkt-Index.
///
/// `None` bedeutet: der Punkt trägt keine Daten, der Builder verwendet den Default.
pub trait PointAttributes {
    fn attribute(&self, index: usize, default: Vec4) -> Option<Vec4>;

    /// Attribut oder Default.
    fn attribute_or(&self, index: usize, default: Vec4) -> Vec4 {
        self.attribute(index, default).unwrap_or(default)
    }
}

/// Ribbon ohne eigene Punkt-Daten (z.B. Level-Splines).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAttributes;

impl PointAttributes for NoAttributes {
    fn attribute(&self, _index: usize, _default: Vec4) -> Option<Vec4> {
        None
    }
}

impl PointAttributes for [Option<Vec4>] {
    fn attribute(&self, index: usize, _default: Vec4) -> Option<Vec4> {
        self.get(index).copied().flatten()
    }
}

impl PointAttributes for Vec<Option<Vec4>> {
    fn attribute(&self, index: usize, default: Vec4) -> Option<Vec4> {
        self.as_slice().attribute(index, default)
    }
}

/// Liest die an den Kontrollpunkten hängenden Daten einer bestimmten Art.
///
/// Daten anderer Art zählen als "keine Daten".
#[derive(Debug, Clone, Copy)]
pub struct PointDataOfKind<'a> {
    points: &'a [ControlPoint],
    kind: PointDataKind,
}

impl<'a> PointDataOfKind<'a> {
    pub fn new(points: &'a [ControlPoint], kind: PointDataKind) -> Self {
        Self { points, kind }
    }
}

impl PointAttributes for PointDataOfKind<'_> {
    fn attribute(&self, index: usize, default: Vec4) -> Option<Vec4> {
        self.points
            .get(index)
            .and_then(|p| p.data.as_ref())
            .filter(|data| data.kind() == self.kind)
            .map(|data| data.resolve(default))
    }
}

/// Adapter für Closures `Fn(index, default) -> Option<Vec4>`.
pub struct FnAttributes<F>(pub F);

impl<F> PointAttributes for FnAttributes<F>
where
    F: Fn(usize, Vec4) -> Option<Vec4>,
{
    fn attribute(&self, index: usize, default: Vec4) -> Option<Vec4> {
        (self.0)(index, default)
    }
}
