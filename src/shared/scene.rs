//! Spline-Szene als TOML-Datei: Optionen, Punkt-Daten-Art und Kontrollpunkte.
//!
//! Beispiel:
//!
//! ```toml
//! data_kind = "Flow"
//!
//! [options]
//! closed = false
//! radius = 2.0
//!
//! [[points]]
//! position = [0.0, 0.0, 0.0]
//! data = { kind = "Flow", velocity = 3.0 }
//!
//! [[points]]
//! position = [10.0, 0.0, 0.0]
//! radius_multiplier = 0.5
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};

use super::RibbonOptions;
use crate::core::{ControlPoint, PointDataKind};

/// Vollständige Eingabe für eine Ribbon-Generierung.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RibbonScene {
    /// Spline-Optionen; fehlen sie, gilt die globale Optionen-Datei
    #[serde(default)]
    pub options: Option<RibbonOptions>,
    /// Welche Punkt-Daten in UV1 landen (`None` = keine)
    #[serde(default)]
    pub data_kind: Option<PointDataKind>,
    #[serde(default)]
    pub points: Vec<ControlPoint>,
}

impl RibbonScene {
    /// Parst eine Szene aus TOML-Text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let scene: Self = toml::from_str(content).context("Spline-Szene fehlerhaft")?;
        Ok(scene)
    }

    /// Lädt eine Szene aus einer TOML-Datei.
    pub fn load_from_file(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Szene nicht lesbar: {}", path.display()))?;
        let scene = Self::from_toml(&content)?;
        log::info!(
            "Szene geladen aus {}: {} Kontrollpunkte",
            path.display(),
            scene.points.len()
        );
        Ok(scene)
    }

    /// Optionen der Szene oder, falls keine angegeben, `fallback`.
    pub fn options_or(&self, fallback: impl FnOnce() -> RibbonOptions) -> RibbonOptions {
        self.options.clone().unwrap_or_else(fallback)
    }
}
