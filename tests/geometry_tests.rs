use approx::assert_relative_eq;
use glam::Vec3;
use site_layout_editor::render::{self, build_belt_mesh, build_rails, build_supports, BeltParams};
use site_layout_editor::{
    build_rounded_curve, paths_collide, sample_motion, snap_point, AppController, AppIntent,
    AppState, EditorKey, PathError, SnapKind, SnapTargets, SnapThresholds, TravelDirection,
};

fn default_thresholds() -> SnapThresholds {
    SnapThresholds {
        point: 0.5,
        segment: 0.3,
        axis_offset: 0.5,
    }
}

fn l_shape() -> Vec<Vec3> {
    vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(5.0, 0.0, 0.0),
        Vec3::new(5.0, 0.0, 5.0),
    ]
}

#[test]
fn test_rounded_l_shape_scenario() {
    let rounded = build_rounded_curve(&l_shape(), 1.0).expect("L-Form muss glättbar sein");

    assert_relative_eq!(rounded.curve.length(), 9.623, epsilon = 1e-3);
    assert_eq!(rounded.curvatures, vec![0.0, 1.0, 0.0]);
}

#[test]
fn test_too_few_points_is_a_typed_error() {
    let result = build_rounded_curve(&[Vec3::ZERO], 1.0);
    assert!(matches!(result, Err(PathError::TooFewPoints { count: 1 })));
}

#[test]
fn test_curvature_bounds() {
    let points = vec![
        Vec3::ZERO,
        Vec3::new(3.0, 0.0, 0.0),
        Vec3::new(3.0, 0.0, 0.5),
        Vec3::new(9.0, 0.0, 4.0),
        Vec3::new(9.0, 0.0, 4.0),
        Vec3::new(0.0, 0.0, 9.0),
    ];
    let radius = 0.8;
    let rounded = build_rounded_curve(&points, radius).expect("gültiger Pfad");

    assert_eq!(rounded.curvatures.len(), points.len());
    assert_eq!(rounded.curvatures[0], 0.0);
    assert_eq!(*rounded.curvatures.last().unwrap(), 0.0);
    for &c in &rounded.curvatures {
        // 0 oder 1 / Blend-Distanz mit Blend-Distanz ∈ [0.001, r]
        assert!(c == 0.0 || (c >= 1.0 / radius - 1e-4 && c <= 1000.0));
    }
}

#[test]
fn test_snap_scenario_returns_existing_waypoint() {
    let path = [Vec3::ZERO, Vec3::new(4.0, 0.0, 0.0)];
    let targets = SnapTargets {
        paths: vec![&path],
        ..Default::default()
    };
    let result = snap_point(Vec3::new(0.2, 0.0, 0.1), &targets, &default_thresholds());

    assert_eq!(result.position, Vec3::ZERO);
    assert_eq!(result.kind, SnapKind::Point);
}

#[test]
fn test_snap_priority_point_segment_axis() {
    let path = [Vec3::new(0.0, 0.0, 0.0), Vec3::new(10.0, 0.0, 0.0)];
    let targets = SnapTargets {
        paths: vec![&path],
        loose_points: Vec::new(),
        anchor: Some(Vec3::new(20.0, 0.0, 20.0)),
    };
    let thresholds = default_thresholds();

    assert_eq!(
        snap_point(Vec3::new(9.8, 0.0, 0.1), &targets, &thresholds).kind,
        SnapKind::Point
    );
    assert_eq!(
        snap_point(Vec3::new(5.0, 0.0, 0.1), &targets, &thresholds).kind,
        SnapKind::Segment
    );
    assert_eq!(
        snap_point(Vec3::new(20.2, 0.0, 7.0), &targets, &thresholds).kind,
        SnapKind::AxisX
    );
    assert_eq!(
        snap_point(Vec3::new(13.0, 0.0, 7.0), &targets, &thresholds).kind,
        SnapKind::None
    );
}

#[test]
fn test_collision_scenarios() {
    let base = l_shape();
    let far: Vec<Vec3> = base.iter().map(|&p| p + Vec3::new(0.0, 0.0, 2.0)).collect();
    let near: Vec<Vec3> = base.iter().map(|&p| p + Vec3::new(0.0, 0.0, 0.5)).collect();

    assert!(!paths_collide(
        &[base[0], base[1]],
        &[far[0], far[1]],
        1.0
    ));
    assert!(paths_collide(&base, &near, 1.0));
    assert_eq!(
        paths_collide(&base, &near, 1.0),
        paths_collide(&near, &base, 1.0)
    );
}

#[test]
fn test_parallel_paths_beyond_width_never_collide() {
    let base = l_shape();
    let diagonal = [Vec3::ZERO, Vec3::new(3.0, 0.0, 4.0)];
    let diagonal_normal = Vec3::new(4.0, 0.0, -3.0) / 5.0;

    for i in 1..=100 {
        let d = 1.0 + 0.04 * i as f32;
        let bent: Vec<Vec3> = base.iter().map(|&p| p + Vec3::new(d, 0.0, -d)).collect();
        let moved: Vec<Vec3> = diagonal.iter().map(|&p| p + diagonal_normal * d).collect();

        assert!(!paths_collide(&base, &bent, 1.0), "L-Form, Abstand {d}");
        assert!(!paths_collide(&bent, &base, 1.0), "L-Form, Abstand {d}");
        assert!(!paths_collide(&diagonal, &moved, 1.0), "diagonal, Abstand {d}");
        assert!(!paths_collide(&moved, &diagonal, 1.0), "diagonal, Abstand {d}");
    }
}

#[test]
fn test_belt_rails_and_supports_for_l_shape() {
    let curve = build_rounded_curve(&l_shape(), 0.8).expect("gültiger Pfad").curve;
    let mesh = build_belt_mesh(
        &curve,
        &BeltParams {
            half_width: 0.45,
            height: -0.1,
            divisions: 500,
        },
    );

    assert_eq!(mesh.vertices.len(), 500 * 6);
    assert!(mesh.vertices.iter().all(|v| v.position[1] == -0.1));
    assert!(mesh
        .vertices
        .iter()
        .all(|v| (0.0..=1.0).contains(&v.path_position)));

    let rails = build_rails(&curve, 0.45, -0.1, 500, 0.64).expect("Schienen");
    assert!(rails.left.length() > 0.0);
    assert!(rails.right.length() > 0.0);
    // Innenseite (links bei Rechtskurve nach +z) ist kürzer als außen
    assert!((rails.left.length() - rails.right.length()).abs() > 0.1);

    let supports = build_supports(&curve, 0.45, 1.0);
    assert_eq!(supports.interval_count, curve.length().floor() as usize);
    assert_eq!(supports.anchors.len(), supports.interval_count + 1);
}

#[test]
fn test_motion_sampler_forward_and_reverse() {
    let curve = build_rounded_curve(&l_shape(), 1.0).expect("gültiger Pfad").curve;

    let start = sample_motion(&curve, 0.0, TravelDirection::Forward);
    assert_eq!(start.position, Vec3::ZERO);
    assert_relative_eq!(start.forward.x, 1.0, epsilon = 1e-5);

    let end = sample_motion(&curve, 1.0, TravelDirection::Reverse);
    assert_relative_eq!(end.position.z, 5.0, epsilon = 1e-5);
    assert_relative_eq!(end.forward.z, -1.0, epsilon = 1e-5);
}

#[test]
fn test_frame_geometry_from_session() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    for (x, z) in [(0.0, 0.0), (6.0, 0.0), (6.0, 6.0)] {
        controller
            .handle_intent(
                &mut state,
                AppIntent::PointerClicked {
                    world_pos: Vec3::new(x, 0.0, z),
                },
            )
            .expect("PointerClicked darf nicht fehlschlagen");
    }
    controller
        .handle_intent(
            &mut state,
            AppIntent::KeyPressed {
                key: EditorKey::Enter,
            },
        )
        .expect("KeyPressed darf nicht fehlschlagen");
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                world_pos: Vec3::new(-8.0, 0.0, -8.0),
            },
        )
        .expect("PointerMoved darf nicht fehlschlagen");

    let scene = controller.build_render_scene(&state);
    let frame = render::build_frame_geometry(&scene);

    assert_eq!(frame.conveyors.len(), 1);
    let conveyor = &frame.conveyors[0];
    assert_eq!(
        conveyor.belt.triangle_count(),
        state.options.belt_divisions * 2
    );
    assert!(conveyor.rails.is_some());
    // Krümmung je Vertex kommt aus der Kurve: Linie 0, Eck-Blend 1 / 0.8
    let curve = &scene.conveyors[0].curve;
    assert!(conveyor.belt.vertices.iter().all(|v| v.curvature == 0.0
        || (v.curvature - 1.25).abs() < 1e-5));
    assert!(conveyor.belt.vertices.iter().any(|v| v.curvature > 0.0));
    assert_relative_eq!(curve.curvature_at(0.5), 1.25, epsilon = 1e-5);
    assert_relative_eq!(
        conveyor.uniforms.conveyor_length,
        scene.conveyors[0].curve.length(),
        epsilon = 1e-6
    );
    assert!(frame.preview.is_empty());
    assert!(frame.material_count() == 0);
}
