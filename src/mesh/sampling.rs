//! Abtastung der Mittellinie und Interpolation der Punkt-Daten pro Sample.

use glam::{Vec3, Vec4};

use crate::core::{ControlPoint, PointAttributes};
use crate::shared::options::MIN_LENGTH_ESTIMATE;
use crate::shared::spline_geometry::interpolate_cubic;

/// Sample-Anzahl aus geschätzter Länge und Sample-Abstand (mindestens 1).
pub(super) fn sample_count(length_estimate: f32, spacing: f32) -> usize {
    let length = length_estimate.max(MIN_LENGTH_ESTIMATE);
    ((length / spacing).ceil() as usize).max(1)
}

/// Hermite-Glättung `3t² - 2t³` mit auf [0, 1] geklemmtem `t`.
pub(super) fn smooth_step(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Parameter `t ∈ [0, 1]` des Samples `i` bei `count` Samples.
pub(super) fn sample_t(i: usize, count: usize) -> f32 {
    if count < 2 {
        0.0
    } else {
        i as f32 / (count - 1) as f32
    }
}

/// Tastet die Hull-Spline gleichmäßig im Parameter ab.
///
/// Sample 0 wird direkt aus dem Hull übernommen (kein Rundungsfehler an der Naht).
pub(super) fn sample_centerline(hull: &[Vec3], through_count: usize, out: &mut [Vec3]) {
    let Some(first) = hull.first() else {
        return;
    };
    let count = out.len();
    for (i, sample) in out.iter_mut().enumerate() {
        *sample = if i == 0 {
            *first
        } else {
            interpolate_cubic(through_count, hull, sample_t(i, count))
        };
    }
}

/// Interpoliert Radius-Multiplikator und Punkt-Daten pro Sample.
///
/// Klammerpunkte werden über `t * (n - 1)` im Kontrollpunkt-Raum bestimmt, das
/// Gewicht zwischen beiden ist geglättet. Fehlende Daten fallen auf `default` zurück.
pub(super) fn interpolate_point_data<A: PointAttributes + ?Sized>(
    points: &[ControlPoint],
    attributes: &A,
    default: Vec4,
    radius_out: &mut [f32],
    data_out: &mut [Vec4],
) {
    let n = points.len();
    if n == 0 {
        return;
    }
    let count = radius_out.len().min(data_out.len());
    let last = n - 1;

    for i in 0..count {
        if i == 0 {
            radius_out[0] = points[0].radius_multiplier;
            data_out[0] = attributes.attribute_or(0, default);
            continue;
        }

        let tpts = sample_t(i, count) * last as f32;
        let k = (tpts.floor().max(0.0) as usize).min(last);
        let next = (k + 1).min(last);
        let weight = smooth_step(tpts - k as f32);

        let r0 = points[k].radius_multiplier;
        let r1 = points[next].radius_multiplier;
        radius_out[i] = r0 + (r1 - r0) * weight;

        let d0 = attributes.attribute_or(k, default);
        let d1 = attributes.attribute_or(next, default);
        data_out[i] = d0.lerp(d1, weight);
    }
}
