//! Fehlertypen der Geometrie-Pipeline.

use thiserror::Error;

/// Fehler bei Hull-Aufbau oder Ribbon-Generierung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RibbonError {
    /// Weniger als 2 Kontrollpunkte, es kann keine Kurve entstehen.
    #[error("Zu wenige Kontrollpunkte: {count} (mindestens 2 benötigt)")]
    InsufficientPoints { count: usize },
}
