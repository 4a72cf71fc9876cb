//! Offset-Polylines links/rechts der Mittellinie: Berechnung, Naht, Overlap-Korrektur, Glättung.

use glam::Vec3;

/// Horizontale Normale einer Tangente (XZ um 90° gedreht, Y verworfen).
pub(super) fn horizontal_normal(tangent: Vec3) -> Vec3 {
    Vec3::new(tangent.z, 0.0, -tangent.x).normalize_or_zero()
}

/// Indizes der Nachbar-Samples für die lokale Tangente.
///
/// Offen: auf den gültigen Bereich geklemmt. Geschlossen: Wrap-Around.
fn neighbor_indices(i: usize, count: usize, closed: bool) -> (usize, usize) {
    if closed {
        let before = if i == 0 { count - 1 } else { i - 1 };
        (before, (i + 1) % count)
    } else {
        (i.saturating_sub(1), (i + 1).min(count - 1))
    }
}

/// Berechnet linke und rechte Offset-Punkte pro Sample.
///
/// `radii` sind die Seiten-Radien `(links, rechts)` aus dem Offset-Modus.
pub(super) fn compute_offsets(
    centerline: &[Vec3],
    radius_multipliers: &[f32],
    radii: (f32, f32),
    closed: bool,
    left: &mut [Vec3],
    right: &mut [Vec3],
) {
    let count = centerline.len();
    let (radius_left, radius_right) = radii;

    for i in 0..count {
        let (before, after) = neighbor_indices(i, count, closed);
        let normal = horizontal_normal(centerline[after] - centerline[before]);
        let multiplier = radius_multipliers[i];

        left[i] = centerline[i] - radius_left * multiplier * normal;
        right[i] = centerline[i] + radius_right * multiplier * normal;
    }
}

/// Verschweißt die Naht einer geschlossenen Spline: erster und letzter Punkt
/// werden durch ihren Mittelpunkt ersetzt.
pub(super) fn weld_seam(points: &mut [Vec3]) {
    let Some(last) = points.len().checked_sub(1) else {
        return;
    };
    let mid = points[0].lerp(points[last], 0.5);
    points[0] = mid;
    points[last] = mid;
}

/// Stellt sicher, dass sich die Punkte immer "vorwärts" entlang der Mittellinie bewegen.
///
/// Ein Punkt, dessen Bewegung gegenüber dem letzten guten Punkt nicht in Richtung der
/// Mittellinien-Tangente zeigt (in der XZ-Ebene), wird auf die XZ-Position des letzten
/// guten Punkts gesetzt. Seine Höhe bleibt erhalten, damit ungültige Punkte nicht auf
/// einen einzigen Punkt kollabieren.
pub fn resolve_overlaps(points: &mut [Vec3], centerline: &[Vec3]) {
    if points.len() < 2 {
        return;
    }

    let mut last_good = points[1];
    for i in 1..points.len().min(centerline.len()) {
        let point = points[i];
        let mut tangent_spline = centerline[i] - centerline[i - 1];
        let mut movement = point - last_good;
        tangent_spline.y = 0.0;
        movement.y = 0.0;

        if movement.dot(tangent_spline) > 0.0 {
            last_good = point;
        } else {
            points[i] = Vec3::new(last_good.x, point.y, last_good.z);
        }
    }
}

/// Glättet die inneren Punkte mit einem 3-Punkt-Boxfilter; Endpunkte bleiben fix.
///
/// Pro Iteration werden alle neuen Werte aus dem vorherigen Stand berechnet;
/// `scratch` muss mindestens so lang wie `points` sein.
pub fn smooth_polyline(points: &mut [Vec3], scratch: &mut [Vec3], iterations: usize) {
    let count = points.len();
    if count < 3 {
        return;
    }

    for _ in 0..iterations {
        for i in 1..count - 1 {
            scratch[i] = 0.5 * (points[i - 1] + points[i + 1]);
        }
        points[1..count - 1].copy_from_slice(&scratch[1..count - 1]);
    }
}
