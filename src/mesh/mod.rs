//! Ribbon-Mesh-Generierung entlang einer kubischen Spline.
//!
//! Aufgeteilt in:
//! - `sampling`: Abtastung der Mittellinie, Interpolation der Punkt-Daten
//! - `offset`: Offset-Polylines, Naht, Overlap-Korrektur, Glättung
//! - `assemble`: Vertex-Paare, UV-Kanäle, Indizes
//! - `scratch`: wiederverwendbare Zwischenpuffer

mod assemble;
mod offset;
mod sampling;
mod scratch;

pub use assemble::{RibbonMesh, RibbonVertex};
pub use offset::{resolve_overlaps, smooth_polyline};
pub use scratch::RibbonScratch;

use glam::Vec4;

use crate::core::{collect_positions, ControlPoint, PointAttributes};
use crate::shared::spline_geometry::{build_cubic_hull, chord_length, through_point_count};
use crate::shared::{RibbonOptions, SMOOTHING_ITERATIONS};
use crate::RibbonError;

use offset::{compute_offsets, weld_seam};
use sampling::{interpolate_point_data, sample_centerline, sample_count};

/// Erzeugt ein Ribbon-Mesh aus Kontrollpunkten.
///
/// Alle Zwischenergebnisse landen in `scratch` und werden bei jedem Aufruf komplett
/// neu berechnet. Bei weniger als 2 Punkten wird `scratch` geleert und
/// [`RibbonError::InsufficientPoints`] geliefert; der Aufrufer muss ein zuvor
/// gehaltenes Mesh verwerfen.
pub fn generate_ribbon<A: PointAttributes + ?Sized>(
    points: &[ControlPoint],
    options: &RibbonOptions,
    attributes: &A,
    scratch: &mut RibbonScratch,
) -> Result<RibbonMesh, RibbonError> {
    let n = points.len();
    if n < 2 {
        scratch.reset();
        return Err(RibbonError::InsufficientPoints { count: n });
    }

    let closed = options.closed && n > 2;
    if options.closed && !closed {
        log::warn!("Geschlossene Spline mit nur {} Punkten wird offen behandelt", n);
    }
    let through_count = through_point_count(n, closed);

    collect_positions(points, &mut scratch.positions);
    if let Err(e) = build_cubic_hull(&scratch.positions, closed, &mut scratch.hull) {
        scratch.reset();
        return Err(e);
    }

    let length = chord_length(&scratch.positions, through_count);
    let count = sample_count(length, options.sample_spacing());
    scratch.prepare(count);

    sample_centerline(&scratch.hull, through_count, &mut scratch.centerline);
    interpolate_point_data(
        points,
        attributes,
        options.default_data.unwrap_or(Vec4::ZERO),
        &mut scratch.radius_multipliers,
        &mut scratch.custom_data,
    );

    compute_offsets(
        &scratch.centerline,
        &scratch.radius_multipliers,
        options.offset.side_radii(options.radius),
        closed,
        &mut scratch.left,
        &mut scratch.right,
    );

    if closed {
        weld_seam(&mut scratch.right);
    }

    // Rückläufige Punkte würden gespiegelte Dreiecke erzeugen
    resolve_overlaps(&mut scratch.left, &scratch.centerline);
    resolve_overlaps(&mut scratch.right, &scratch.centerline);

    // Overlap-Korrektur kann das Nahtende verschieben; Glättung lässt Endpunkte fix
    if closed {
        weld_seam(&mut scratch.right);
    }

    smooth_polyline(&mut scratch.left, &mut scratch.smoothed, SMOOTHING_ITERATIONS);
    smooth_polyline(&mut scratch.right, &mut scratch.smoothed, SMOOTHING_ITERATIONS);

    let mesh = RibbonMesh::assemble(
        &scratch.left,
        &scratch.right,
        &scratch.custom_data,
        &options.world_to_local,
        closed,
    );

    log::debug!(
        "Ribbon generiert: {} Punkte, Länge ~{:.1}, {} Samples, {} Dreiecke",
        n,
        length,
        count,
        mesh.triangle_count()
    );

    Ok(mesh)
}

/// Mesh-Builder mit eigenem Scratch-Speicher für wiederholte Generierungen.
#[derive(Debug, Default)]
pub struct RibbonMeshBuilder {
    scratch: RibbonScratch,
}

impl RibbonMeshBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Siehe [`generate_ribbon`].
    pub fn generate<A: PointAttributes + ?Sized>(
        &mut self,
        points: &[ControlPoint],
        options: &RibbonOptions,
        attributes: &A,
    ) -> Result<RibbonMesh, RibbonError> {
        generate_ribbon(points, options, attributes, &mut self.scratch)
    }

    /// Zwischenergebnisse der letzten Generierung (Mittellinie, Offsets, ...).
    pub fn scratch(&self) -> &RibbonScratch {
        &self.scratch
    }
}

#[cfg(test)]
mod tests;
