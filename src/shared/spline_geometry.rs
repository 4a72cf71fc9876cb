//! Reine Geometrie-Funktionen für kubische Bezier-Splines durch Kontrollpunkte.
//!
//! Layer-neutral: arbeitet nur auf Positionen (`&[Vec3]`) und kennt weder
//! Punkt-Daten noch Mesh-Typen.
//!
//! Hull-Layout für `n` Durchgangspunkte (`(n - 1) * 3 + 1` Einträge):
//!
//! ```text
//!   P0  out0  in1  P1  out1  in2  P2 ...
//!   ^              ^              ^
//!   Durchgangspunkte (jeder dritte Eintrag)
//! ```

use glam::Vec3;

use crate::RibbonError;

/// Skalierung der Tangenten-Handles relativ zur Sehnenlänge.
///
/// Bei rautenförmig gesetzten Punkten ergibt dieser Wert nahezu einen Kreis.
pub const TANGENT_SCALE: f32 = 0.39;

/// Anzahl Durchgangspunkte inkl. synthetischem Schlusspunkt.
///
/// Geschlossene Splines erhalten eine Kopie des ersten Punkts am Ende, aber nur
/// ab 3 Punkten. Bei 2 Punkten bleibt die Spline offen.
pub fn through_point_count(point_count: usize, closed: bool) -> usize {
    if closed && point_count > 2 {
        point_count + 1
    } else {
        point_count
    }
}

/// Länge des Hull-Arrays für `through_count` Durchgangspunkte.
pub fn hull_len(through_count: usize) -> usize {
    through_count.saturating_sub(1) * 3 + 1
}

/// Zerlegt `t ∈ [0, 1]` in Segment-Index und lokales Alpha.
///
/// Der Endpunkt `t = 1` wird auf das letzte Segment mit `alpha = 1` geklemmt.
pub fn segment_at(t: f32, through_count: usize) -> (usize, f32) {
    let last = through_count.saturating_sub(1);
    let tpts = t * last as f32;
    let index = (tpts.floor().max(0.0) as usize).min(last);
    let alpha = tpts - index as f32;

    if index == last && last > 0 {
        (last - 1, 1.0)
    } else {
        (index, alpha)
    }
}

/// Gemittelte Tangente an Punkt `idx` aus den vorhandenen Nachbarn.
///
/// Gilt für ausgehende und eingehende Handles gleichermaßen (C1-Stetigkeit).
/// Geschlossene Splines verwenden Wrap-Around-Nachbarn, offene nur die existierenden.
fn averaged_tangent(points: &[Vec3], idx: usize, closed: bool) -> Vec3 {
    let n = points.len();
    let before = match idx.checked_sub(1) {
        Some(i) => Some(i),
        None if closed => Some(n - 1),
        None => None,
    };
    let after = if idx + 1 < n {
        Some(idx + 1)
    } else if closed {
        Some(idx + 1 - n)
    } else {
        None
    };

    let mut tangent = Vec3::ZERO;
    let mut weight = 0.0;
    if let Some(b) = before {
        tangent += points[idx] - points[b];
        weight += 1.0;
    }
    if let Some(a) = after {
        tangent += points[a] - points[idx];
        weight += 1.0;
    }

    if weight > 0.0 {
        tangent / weight
    } else {
        Vec3::ZERO
    }
}

/// Spiegelt `tangent` an der Richtung `axis` (`v + 2 * (proj - v)`).
fn mirror_about(tangent: Vec3, axis: Vec3) -> Vec3 {
    let dir = axis.normalize_or_zero();
    let nearest = tangent.dot(dir) * dir;
    tangent + 2.0 * (nearest - tangent)
}

/// Baut das Hull-Array (Durchgangspunkte + Handles) für kubische Interpolation.
///
/// `closed` wird bei weniger als 3 Punkten ignoriert. Das Ergebnis wird in `hull`
/// geschrieben (vorheriger Inhalt wird verworfen).
pub fn build_cubic_hull(
    points: &[Vec3],
    closed: bool,
    hull: &mut Vec<Vec3>,
) -> Result<(), RibbonError> {
    hull.clear();

    let n = points.len();
    if n < 2 {
        return Err(RibbonError::InsufficientPoints { count: n });
    }

    let closed = closed && n > 2;
    let len = hull_len(through_point_count(n, closed));
    hull.reserve(len);

    for i in 0..len {
        let spi = (i / 3) % n;
        let spi_next = (spi + 1) % n;
        let chord = (points[spi_next] - points[spi]).length();

        let handle = match i % 3 {
            0 => points[spi],
            1 => {
                // Ausgehendes Handle
                let tangent = if i == 1 && !closed {
                    mirror_about(
                        averaged_tangent(points, spi + 1, closed),
                        points[spi + 1] - points[spi],
                    )
                } else {
                    averaged_tangent(points, spi, closed)
                };
                points[spi] + TANGENT_SCALE * tangent.normalize_or_zero() * chord
            }
            _ => {
                // Eingehendes Handle
                let tangent = if i == len - 2 && !closed {
                    mirror_about(
                        averaged_tangent(points, spi_next - 1, closed),
                        points[spi_next - 1] - points[spi_next],
                    )
                } else {
                    averaged_tangent(points, spi_next, closed)
                };
                points[spi_next] - TANGENT_SCALE * tangent.normalize_or_zero() * chord
            }
        };
        hull.push(handle);
    }

    Ok(())
}

/// Berechnet einen Punkt auf einem kubischen Bezier-Segment (t ∈ [0, 1]).
pub fn cubic_bezier_point(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * t * u * u * p1 + 3.0 * t * t * u * p2 + t * t * t * p3
}

/// Wertet die Hull-Spline bei `t ∈ [0, 1]` über die gesamte Kurve aus.
///
/// `through_count` ist die Anzahl Durchgangspunkte (inkl. synthetischem Schlusspunkt).
pub fn interpolate_cubic(through_count: usize, hull: &[Vec3], t: f32) -> Vec3 {
    if through_count < 2 || hull.len() < hull_len(through_count) {
        return hull.first().copied().unwrap_or(Vec3::ZERO);
    }

    let (segment, alpha) = segment_at(t, through_count);
    let i = segment * 3;
    cubic_bezier_point(hull[i], hull[i + 1], hull[i + 2], hull[i + 3], alpha)
}

/// Lineare Interpolation entlang einer Polyline (Fallback für 2-Punkt-Kurven).
pub fn interpolate_linear(points: &[Vec3], t: f32) -> Vec3 {
    if points.len() < 2 {
        return points.first().copied().unwrap_or(Vec3::ZERO);
    }

    let (segment, alpha) = segment_at(t, points.len());
    points[segment].lerp(points[segment + 1], alpha)
}

/// Geschätzte Kurvenlänge als Summe der Sehnen zwischen Durchgangspunkten.
///
/// Bei `through_count > points.len()` (geschlossen) wird die Schluss-Sehne mitgezählt.
pub fn chord_length(points: &[Vec3], through_count: usize) -> f32 {
    if points.is_empty() {
        return 0.0;
    }
    (1..through_count)
        .map(|i| points[i % points.len()].distance(points[i - 1]))
        .sum()
}
