//! Zentrale Konfiguration für die Ribbon-Generierung.
//!
//! `RibbonOptions` enthält alle pro Spline einstellbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use glam::{Affine3A, Vec4};
use serde::{Deserialize, Serialize};

use crate::core::OffsetMode;

// ── Spline ──────────────────────────────────────────────────────────

/// Standard-Radius des Ribbons (halbe Gesamtbreite).
pub const DEFAULT_RADIUS: f32 = 10.0;
/// Standard-Subdivision-Stufe.
pub const DEFAULT_SUBDIVISIONS: u32 = 1;
/// Obergrenze für die Subdivision-Stufe (Sample-Abstand ~0.002 Einheiten).
pub const MAX_SUBDIVISIONS: u32 = 12;

// ── Sampling ────────────────────────────────────────────────────────

/// Sample-Abstand bei Subdivision -1; halbiert sich pro Stufe.
pub const BASE_SAMPLE_SPACING: f32 = 16.0;
/// Untergrenze der geschätzten Kurvenlänge.
pub const MIN_LENGTH_ESTIMATE: f32 = 1.0;
/// Anzahl Glättungs-Iterationen auf den Offset-Polylines.
pub const SMOOTHING_ITERATIONS: usize = 5;

/// Einstellungen einer Spline für die Ribbon-Generierung.
///
/// Wird als TOML gespeichert; `world_to_local` wird nicht serialisiert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RibbonOptions {
    /// Start- und Endpunkt verbinden (ab 3 Punkten)
    pub closed: bool,
    /// Lage des Ribbons relativ zur Spline
    pub offset: OffsetMode,
    /// Halbe Breite des Ribbons
    pub radius: f32,
    /// Geometrie-Dichte: jede Stufe halbiert den Sample-Abstand.
    /// Werte über [`MAX_SUBDIVISIONS`] werden bei der Generierung darauf begrenzt.
    pub subdivisions: u32,
    /// UV1-Wert für Punkte ohne eigene Daten (`None` = Feature-Default bzw. null)
    pub default_data: Option<Vec4>,
    /// Transformation der Vertices in den lokalen Raum des Aufrufers
    #[serde(skip)]
    pub world_to_local: Affine3A,
}

impl Default for RibbonOptions {
    fn default() -> Self {
        Self {
            closed: false,
            offset: OffsetMode::default(),
            radius: DEFAULT_RADIUS,
            subdivisions: DEFAULT_SUBDIVISIONS,
            default_data: None,
            world_to_local: Affine3A::IDENTITY,
        }
    }
}

impl RibbonOptions {
    /// Lädt Optionen aus einer TOML-Datei. Fehlt die Datei oder ist sie fehlerhaft,
    /// werden die Standardwerte verwendet.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Ribbon-Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert die Optionen als TOML.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Ribbon-Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Standard-Pfad der Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("spline-ribbon"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("spline_ribbon.toml")
    }

    /// Subdivision-Stufe, auf [`MAX_SUBDIVISIONS`] begrenzt.
    pub fn effective_subdivisions(&self) -> u32 {
        if self.subdivisions > MAX_SUBDIVISIONS {
            log::warn!(
                "Subdivisions {} zu hoch, begrenze auf {}",
                self.subdivisions,
                MAX_SUBDIVISIONS
            );
        }
        self.subdivisions.min(MAX_SUBDIVISIONS)
    }

    /// Sample-Abstand entlang der Spline: `16 / 2^(subdivisions + 1)`.
    pub fn sample_spacing(&self) -> f32 {
        BASE_SAMPLE_SPACING / 2f32.powi(self.effective_subdivisions() as i32 + 1)
    }
}
