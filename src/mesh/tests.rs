use super::*;
use crate::core::{NoAttributes, OffsetMode, PointData, PointDataKind, PointDataOfKind};
use approx::assert_abs_diff_eq;
use glam::{Vec3, Vec4};

fn points_from(positions: &[Vec3]) -> Vec<ControlPoint> {
    positions.iter().copied().map(ControlPoint::new).collect()
}

fn square_loop() -> Vec<ControlPoint> {
    points_from(&[
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(10.0, 0.0, 0.0),
        Vec3::new(10.0, 0.0, 10.0),
        Vec3::new(0.0, 0.0, 10.0),
    ])
}

/// Viertelkreis mit Radius 100 und gleich langen Sehnen.
fn gentle_arc() -> Vec<ControlPoint> {
    let positions: Vec<Vec3> = (0..4)
        .map(|i| {
            let a = (i as f32 * 30.0).to_radians();
            Vec3::new(a.sin() * 100.0, 0.0, 100.0 - a.cos() * 100.0)
        })
        .collect();
    points_from(&positions)
}

// ── Fehlerfälle ──

#[test]
fn test_too_few_points_fails_and_clears_scratch() {
    let mut scratch = RibbonScratch::new();
    let options = RibbonOptions::default();
    generate_ribbon(&square_loop(), &options, &NoAttributes, &mut scratch).unwrap();
    assert!(scratch.sample_count() > 0);

    let single = points_from(&[Vec3::ONE]);
    let result = generate_ribbon(&single, &options, &NoAttributes, &mut scratch);

    assert_eq!(result, Err(RibbonError::InsufficientPoints { count: 1 }));
    assert_eq!(scratch.sample_count(), 0);
    assert!(scratch.hull().is_empty());

    let result = generate_ribbon(&[], &options, &NoAttributes, &mut scratch);
    assert_eq!(result, Err(RibbonError::InsufficientPoints { count: 0 }));
}

// ── Mittellinie ──

#[test]
fn test_first_sample_is_first_control_point() {
    let points = points_from(&[
        Vec3::new(0.3, 1.7, -2.9),
        Vec3::new(7.1, 0.2, 4.4),
        Vec3::new(-3.3, 0.0, 12.8),
    ]);
    let mut builder = RibbonMeshBuilder::new();
    builder
        .generate(&points, &RibbonOptions::default(), &NoAttributes)
        .unwrap();

    assert_eq!(builder.scratch().centerline()[0], points[0].position);
}

#[test]
fn test_two_points_give_straight_strip() {
    let points = points_from(&[Vec3::ZERO, Vec3::new(20.0, 0.0, 0.0)]);
    let options = RibbonOptions {
        radius: 1.5,
        subdivisions: 0,
        ..Default::default()
    };
    let mut builder = RibbonMeshBuilder::new();
    let mesh = builder.generate(&points, &options, &NoAttributes).unwrap();

    assert_eq!(mesh.sample_count(), 3);
    for pair in mesh.vertices.chunks_exact(2) {
        assert_abs_diff_eq!(pair[0].z, 1.5, epsilon = 1e-5);
        assert_abs_diff_eq!(pair[1].z, -1.5, epsilon = 1e-5);
        assert_abs_diff_eq!(pair[0].x, pair[1].x, epsilon = 1e-5);
    }
    // Vorwärts entlang X, keine Rückläufer
    for w in mesh.vertices.chunks_exact(2).collect::<Vec<_>>().windows(2) {
        assert!(w[1][0].x > w[0][0].x);
    }
}

// ── Geschlossene Splines ──

#[test]
fn test_closed_square_welds_right_seam() {
    let options = RibbonOptions {
        closed: true,
        radius: 0.5,
        ..Default::default()
    };
    let mut builder = RibbonMeshBuilder::new();
    let mesh = builder
        .generate(&square_loop(), &options, &NoAttributes)
        .unwrap();

    assert!(mesh.closed);
    assert_eq!(builder.scratch().hull().len(), 13);

    let last = mesh.sample_count() - 1;
    assert_eq!(mesh.vertices[1], mesh.vertices[2 * last + 1]);
    let right = builder.scratch().right_offsets();
    assert_eq!(right[0], right[last]);
}

#[test]
fn test_sharp_uneven_loop_keeps_welded_seam() {
    let points = points_from(&[
        Vec3::new(2.0, 0.0, 17.0),
        Vec3::new(49.0, 0.0, 47.0),
        Vec3::new(18.0, 0.0, 19.0),
    ]);
    let options = RibbonOptions {
        closed: true,
        offset: OffsetMode::Right,
        radius: 1.0,
        subdivisions: 2,
        ..Default::default()
    };
    let mut builder = RibbonMeshBuilder::new();
    let mesh = builder.generate(&points, &options, &NoAttributes).unwrap();

    let last = mesh.sample_count() - 1;
    let right = builder.scratch().right_offsets();
    assert_eq!(right[0], right[last]);
    assert_eq!(mesh.vertices[1], mesh.vertices[2 * last + 1]);
}

#[test]
fn test_closed_with_two_points_is_demoted_to_open() {
    let points = points_from(&[Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0)]);
    let open = RibbonOptions::default();
    let closed = RibbonOptions {
        closed: true,
        ..Default::default()
    };

    let mesh_open =
        generate_ribbon(&points, &open, &NoAttributes, &mut RibbonScratch::new()).unwrap();
    let mesh_closed =
        generate_ribbon(&points, &closed, &NoAttributes, &mut RibbonScratch::new()).unwrap();

    assert!(!mesh_closed.closed);
    assert_eq!(mesh_open, mesh_closed);
}

// ── Offset-Modi ──

#[test]
fn test_one_sided_modes_keep_full_width() {
    let points = points_from(&[
        Vec3::ZERO,
        Vec3::new(10.0, 0.0, 0.0),
        Vec3::new(20.0, 0.0, 0.0),
    ]);

    for (mode, left_z, right_z) in [
        (OffsetMode::Left, 4.0, 0.0),
        (OffsetMode::Center, 2.0, -2.0),
        (OffsetMode::Right, 0.0, -4.0),
    ] {
        let options = RibbonOptions {
            offset: mode,
            radius: 2.0,
            ..Default::default()
        };
        let mesh = generate_ribbon(&points, &options, &NoAttributes, &mut RibbonScratch::new())
            .unwrap();

        for pair in mesh.vertices.chunks_exact(2) {
            assert_abs_diff_eq!(pair[0].distance(pair[1]), 4.0, epsilon = 1e-5);
            assert_abs_diff_eq!(pair[0].z, left_z, epsilon = 1e-5);
            assert_abs_diff_eq!(pair[1].z, right_z, epsilon = 1e-5);
        }
    }
}

#[test]
fn test_radius_multiplier_scales_width() {
    let mut points = points_from(&[Vec3::ZERO, Vec3::new(16.0, 0.0, 0.0)]);
    points[0].radius_multiplier = 0.5;
    points[1].radius_multiplier = 0.5;
    let mesh = generate_ribbon(
        &points,
        &RibbonOptions {
            radius: 3.0,
            ..Default::default()
        },
        &NoAttributes,
        &mut RibbonScratch::new(),
    )
    .unwrap();

    for pair in mesh.vertices.chunks_exact(2) {
        assert_abs_diff_eq!(pair[0].distance(pair[1]), 3.0, epsilon = 1e-5);
    }
}

// ── Overlap / Glättung ──

#[test]
fn test_gentle_curve_offsets_move_forward() {
    let points = gentle_arc();
    let options = RibbonOptions {
        radius: 2.0,
        ..Default::default()
    };
    let mut builder = RibbonMeshBuilder::new();
    builder.generate(&points, &options, &NoAttributes).unwrap();

    let scratch = builder.scratch();
    let centerline = scratch.centerline();
    for polyline in [scratch.left_offsets(), scratch.right_offsets()] {
        for i in 1..polyline.len() {
            let mut step = polyline[i] - polyline[i - 1];
            let mut tangent = centerline[i] - centerline[i - 1];
            step.y = 0.0;
            tangent.y = 0.0;
            assert!(step.dot(tangent) > 0.0, "Sample {} läuft rückwärts", i);
        }
    }
}

#[test]
fn test_hairpin_produces_finite_mesh() {
    let points = points_from(&[
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(20.0, 0.0, 0.0),
        Vec3::new(20.5, 0.0, 1.0),
        Vec3::new(0.0, 0.0, 2.0),
    ]);
    let options = RibbonOptions {
        radius: 3.0,
        subdivisions: 3,
        ..Default::default()
    };
    let mut builder = RibbonMeshBuilder::new();
    let mesh = builder.generate(&points, &options, &NoAttributes).unwrap();

    assert!(mesh.vertices.iter().all(|v| v.is_finite()));
    assert_eq!(mesh.triangle_count(), 2 * (mesh.sample_count() - 1));
}

// ── Punkt-Daten ──

#[test]
fn test_custom_data_lands_in_uv1() {
    let points = vec![
        ControlPoint::new(Vec3::ZERO).with_data(PointData::Flow { velocity: 4.0 }),
        ControlPoint::new(Vec3::new(10.0, 0.0, 0.0)),
        ControlPoint::new(Vec3::new(20.0, 0.0, 0.0)).with_data(PointData::Flow { velocity: -4.0 }),
    ];
    let options = RibbonOptions {
        default_data: PointDataKind::Flow.default_data(),
        subdivisions: 1,
        ..Default::default()
    };
    let lookup = PointDataOfKind::new(&points, PointDataKind::Flow);
    let mesh =
        generate_ribbon(&points, &options, &lookup, &mut RibbonScratch::new()).unwrap();

    let last = mesh.vertex_count() - 1;
    assert_eq!(mesh.uv1[0], Vec4::new(4.0, 0.0, 0.0, 0.0));
    assert_eq!(mesh.uv1[1], mesh.uv1[0]);
    assert_eq!(mesh.uv1[last], Vec4::new(-4.0, 0.0, 0.0, 0.0));

    // Sample in der Mitte trifft Punkt 1 ohne Daten → Default
    let mid = mesh.sample_count() / 2;
    assert_abs_diff_eq!(mesh.uv1[2 * mid].x, 2.0, epsilon = 1e-4);
}

// ── Scratch / Determinismus ──

#[test]
fn test_reused_scratch_matches_fresh_scratch() {
    let options = RibbonOptions {
        subdivisions: 3,
        ..Default::default()
    };
    let mut reused = RibbonScratch::new();
    generate_ribbon(&gentle_arc(), &options, &NoAttributes, &mut reused).unwrap();

    let small = square_loop();
    let from_reused = generate_ribbon(&small, &options, &NoAttributes, &mut reused).unwrap();
    let from_fresh =
        generate_ribbon(&small, &options, &NoAttributes, &mut RibbonScratch::new()).unwrap();

    assert_eq!(from_reused, from_fresh);
    assert_eq!(reused.sample_count(), from_fresh.sample_count());
}
