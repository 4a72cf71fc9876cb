//! Halter für eine Spline und ihr generiertes Ribbon-Mesh.
//!
//! Sammelt Änderungen über ein Dirty-Flag und generiert erst bei `update()` neu.
//! Schlägt die Generierung fehl, werden Mesh und Bounds verworfen.

use glam::{Affine3A, Vec2};

use crate::core::{Aabb, ControlPoint, NoAttributes, PointDataKind, PointDataOfKind};
use crate::mesh::{RibbonMesh, RibbonMeshBuilder};
use crate::shared::RibbonOptions;
use crate::RibbonError;

/// Überschreibt Radius und Subdivisions der Spline für einen einzelnen Konsumenten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplineOverrides {
    pub radius: f32,
    pub subdivisions: u32,
}

/// Spline mit Kontrollpunkten, Einstellungen und zuletzt generiertem Mesh.
#[derive(Debug)]
pub struct SplineRibbon {
    points: Vec<ControlPoint>,
    options: RibbonOptions,
    overrides: Option<SplineOverrides>,
    /// Welche Punkt-Daten ins Mesh geschrieben werden (`None` = keine)
    data_kind: Option<PointDataKind>,
    builder: RibbonMeshBuilder,
    mesh: Option<RibbonMesh>,
    bounds: Option<Aabb>,
    dirty: bool,
}

impl SplineRibbon {
    /// Erstellt einen neuen Halter; das Mesh wird beim ersten `update()` erzeugt.
    pub fn new(points: Vec<ControlPoint>, options: RibbonOptions) -> Self {
        Self {
            points,
            options,
            overrides: None,
            data_kind: None,
            builder: RibbonMeshBuilder::new(),
            mesh: None,
            bounds: None,
            dirty: true,
        }
    }

    /// Legt fest, welche Punkt-Daten-Art das Ribbon konsumiert.
    ///
    /// Ohne `default_data` in den Optionen gilt der Feature-Default (siehe
    /// [`effective_options`](Self::effective_options)).
    pub fn with_data_kind(mut self, kind: PointDataKind) -> Self {
        self.data_kind = Some(kind);
        self.dirty = true;
        self
    }

    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    pub fn options(&self) -> &RibbonOptions {
        &self.options
    }

    pub fn data_kind(&self) -> Option<PointDataKind> {
        self.data_kind
    }

    /// Ersetzt alle Kontrollpunkte.
    pub fn set_points(&mut self, points: Vec<ControlPoint>) {
        self.points = points;
        self.dirty = true;
    }

    /// Mutabler Zugriff auf die Punkte; markiert die Spline als geändert.
    pub fn points_mut(&mut self) -> &mut Vec<ControlPoint> {
        self.dirty = true;
        &mut self.points
    }

    pub fn set_options(&mut self, options: RibbonOptions) {
        if self.options != options {
            self.options = options;
            self.dirty = true;
        }
    }

    pub fn set_overrides(&mut self, overrides: Option<SplineOverrides>) {
        if self.overrides != overrides {
            self.overrides = overrides;
            self.dirty = true;
        }
    }

    /// Markiert die Spline als geändert (z.B. nach externer Punkt-Bearbeitung).
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Effektive Optionen inkl. Overrides und Feature-Default der Punkt-Daten.
    pub fn effective_options(&self) -> RibbonOptions {
        let mut options = self.options.clone();
        if let Some(overrides) = self.overrides {
            options.radius = overrides.radius;
            options.subdivisions = overrides.subdivisions;
        }
        if options.default_data.is_none() {
            options.default_data = self.data_kind.and_then(PointDataKind::default_data);
        }
        options
    }

    /// Generiert das Mesh neu, falls sich seit dem letzten Aufruf etwas geändert hat.
    ///
    /// `local_to_world` wird für die Welt-Bounds verwendet. Liefert `Ok(true)` wenn neu
    /// generiert wurde. Im Fehlerfall sind Mesh und Bounds danach leer.
    pub fn update(&mut self, local_to_world: &Affine3A) -> Result<bool, RibbonError> {
        if !self.dirty {
            return Ok(false);
        }
        self.dirty = false;

        let options = self.effective_options();
        let result = match self.data_kind {
            Some(kind) => {
                let lookup = PointDataOfKind::new(&self.points, kind);
                self.builder.generate(&self.points, &options, &lookup)
            }
            None => self.builder.generate(&self.points, &options, &NoAttributes),
        };

        match result {
            Ok(mesh) => {
                self.bounds = mesh.world_bounds(local_to_world);
                self.mesh = Some(mesh);
                Ok(true)
            }
            Err(e) => {
                log::debug!("Ribbon verworfen: {}", e);
                self.mesh = None;
                self.bounds = None;
                Err(e)
            }
        }
    }

    pub fn mesh(&self) -> Option<&RibbonMesh> {
        self.mesh.as_ref()
    }

    /// Welt-Bounds des zuletzt generierten Meshes.
    pub fn bounds(&self) -> Option<Aabb> {
        self.bounds
    }

    /// Horizontale Grundfläche `(min_xz, max_xz)`; ohne Mesh ein Null-Rechteck.
    pub fn rect_xz(&self) -> (Vec2, Vec2) {
        self.bounds
            .map(|b| b.rect_xz())
            .unwrap_or((Vec2::ZERO, Vec2::ZERO))
    }

    /// Zugriff auf die Zwischenergebnisse der letzten Generierung (z.B. für Gizmos).
    pub fn builder(&self) -> &RibbonMeshBuilder {
        &self.builder
    }
}
