//! Wiedergabe: Fahrzeuge, Transportgüter und Kamera-Flug pro Tick.
//!
//! `advance` ist eine reine Funktion `(Zustand, Szene, dt) → Zustand`.
//! Die Szene wird aus dem Layout abgeleitet und bei jeder Änderung neu gebaut.

use super::state::LayoutState;
use crate::core::{build_rounded_curve, sample_motion, MotionSample, SmoothCurve, TravelDirection};
use crate::shared::EditorOptions;
use glam::{Quat, Vec3};

/// Zustand der Kamera-Fahrt entlang des ersten Förderbands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRigState {
    /// Normalisierter Fortschritt auf der Kurve, geklemmt auf [0, 1]
    pub progress: f32,
    /// Index des nächsten nicht erreichten Kamera-Ziels
    pub target_index: usize,
    pub look_at: Vec3,
    pub position: Vec3,
}

impl Default for CameraRigState {
    fn default() -> Self {
        Self {
            progress: 0.0,
            target_index: 0,
            look_at: Vec3::ZERO,
            position: Vec3::ZERO,
        }
    }
}

/// Laufzeit-Zustand der Wiedergabe.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaybackState {
    pub playing: bool,
    /// Sekunden seit Start der Wiedergabe
    pub elapsed: f32,
    /// Geglättete Ausrichtung je Fahrzeug (Index = Fahrzeug-Pfad)
    pub vehicle_orientations: Vec<Quat>,
    pub camera: CameraRigState,
}

/// Aus dem Layout abgeleitete Kurven für die Wiedergabe.
#[derive(Debug, Clone, Default)]
pub struct PlaybackScene {
    pub conveyors: Vec<SmoothCurve>,
    pub vehicles: Vec<SmoothCurve>,
    pub camera_targets: Vec<Vec3>,
}

impl PlaybackScene {
    /// Glättet alle fertigen, zeichenbaren Pfade.
    pub fn from_layout(layout: &LayoutState, options: &EditorOptions) -> Self {
        let curves = |paths: &[crate::core::Path], radius: f32| -> Vec<SmoothCurve> {
            paths
                .iter()
                .filter_map(|p| build_rounded_curve(p.points(), radius).ok())
                .map(|rounded| rounded.curve)
                .collect()
        };

        Self {
            conveyors: curves(&layout.conveyors, options.conveyor_bend_radius),
            vehicles: curves(&layout.vehicles, options.vehicle_bend_radius),
            camera_targets: layout.camera_targets.values().copied().collect(),
        }
    }
}

/// Pendelfahrt eines Fahrzeugs: Kurvenparameter und Fahrtrichtung zum Zeitpunkt `elapsed`.
///
/// Eine Strecke dauert `T = L / speed`. Innerhalb eines Zyklus `τ mod 2T`
/// fährt das Fahrzeug zuerst vorwärts (`u = t`), danach zurück (`u = 1 - t`).
pub fn vehicle_travel(elapsed: f32, speed: f32, length: f32) -> (f32, TravelDirection) {
    if length <= f32::EPSILON || speed <= 0.0 {
        return (0.0, TravelDirection::Forward);
    }
    let leg_time = length / speed;
    let cycle = elapsed.rem_euclid(2.0 * leg_time);
    let t = (cycle.rem_euclid(leg_time) / leg_time).clamp(0.0, 1.0);
    if cycle < leg_time {
        (t, TravelDirection::Forward)
    } else {
        (1.0 - t, TravelDirection::Reverse)
    }
}

/// Posen der Transportgüter eines Bands zum Zeitpunkt `elapsed`.
///
/// `count = ceil(L / gap)`, Gut `i` bei `t = (i·gap/L + τ·speed/L) mod 1`,
/// angehoben um die Belt-Höhe.
pub fn material_poses(curve: &SmoothCurve, options: &EditorOptions, elapsed: f32) -> Vec<MotionSample> {
    let length = curve.length();
    if length <= f32::EPSILON || options.material_gap <= 0.0 {
        return Vec::new();
    }

    let count = (length / options.material_gap).ceil() as usize;
    let travel = elapsed * options.belt_speed / length;
    (0..count)
        .map(|i| {
            let offset = i as f32 * options.material_gap / length;
            let t = (offset + travel).rem_euclid(1.0);
            let mut sample = sample_motion(curve, t, TravelDirection::Forward);
            sample.position.y += options.belt_height;
            sample
        })
        .collect()
}

/// Setzt die Kamera an den Start des ersten Bands (Beginn der Wiedergabe).
pub fn reset_camera(scene: &PlaybackScene, options: &EditorOptions) -> CameraRigState {
    let start = scene
        .conveyors
        .first()
        .map_or(Vec3::ZERO, SmoothCurve::start);
    CameraRigState {
        progress: 0.0,
        target_index: 0,
        look_at: start,
        position: start + Vec3::from_array(options.camera_iso_offset),
    }
}

fn advance_camera(
    camera: &CameraRigState,
    scene: &PlaybackScene,
    options: &EditorOptions,
    dt: f32,
) -> CameraRigState {
    let Some(curve) = scene.conveyors.first() else {
        return *camera;
    };

    let length = curve.length();
    let progress = if length > f32::EPSILON {
        (camera.progress + dt * options.camera_speed / length).clamp(0.0, 1.0)
    } else {
        1.0
    };
    let path_position = curve.point_at(progress);

    let mut target_index = camera.target_index;
    for (i, target) in scene
        .camera_targets
        .iter()
        .enumerate()
        .skip(camera.target_index)
    {
        if path_position.distance(*target) < options.camera_target_reach_radius {
            target_index = i + 1;
        }
    }
    if target_index != camera.target_index {
        log::debug!("Kamera-Ziel erreicht, nächstes Ziel: {}", target_index);
    }

    let goal = scene
        .camera_targets
        .get(target_index)
        .copied()
        .unwrap_or(path_position);

    CameraRigState {
        progress,
        target_index,
        look_at: camera.look_at.lerp(goal, options.camera_look_smoothing),
        position: path_position + Vec3::from_array(options.camera_iso_offset),
    }
}

/// Einen Tick weiterrechnen. Pausiert → unveränderter Zustand.
pub fn advance(
    state: &PlaybackState,
    scene: &PlaybackScene,
    options: &EditorOptions,
    dt: f32,
) -> PlaybackState {
    if !state.playing {
        return state.clone();
    }

    let elapsed = state.elapsed + dt.max(0.0);

    let vehicle_orientations = scene
        .vehicles
        .iter()
        .enumerate()
        .map(|(i, curve)| {
            let (t, direction) = vehicle_travel(elapsed, options.vehicle_speed, curve.length());
            let target = sample_motion(curve, t, direction).orientation;
            match state.vehicle_orientations.get(i) {
                Some(previous) => previous
                    .slerp(target, options.vehicle_turn_smoothing)
                    .normalize(),
                None => target,
            }
        })
        .collect();

    PlaybackState {
        playing: true,
        elapsed,
        vehicle_orientations,
        camera: advance_camera(&state.camera, scene, options, dt.max(0.0)),
    }
}

/// Aktuelle Fahrzeug-Pose mit geglätteter Ausrichtung.
pub fn vehicle_pose(
    curve: &SmoothCurve,
    index: usize,
    state: &PlaybackState,
    options: &EditorOptions,
) -> MotionSample {
    let (t, direction) = vehicle_travel(state.elapsed, options.vehicle_speed, curve.length());
    let mut sample = sample_motion(curve, t, direction);
    if let Some(orientation) = state.vehicle_orientations.get(index) {
        sample.orientation = *orientation;
    }
    sample
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Path;
    use approx::assert_relative_eq;

    fn straight_curve(length: f32) -> SmoothCurve {
        build_rounded_curve(&[Vec3::ZERO, Vec3::new(length, 0.0, 0.0)], 1.0)
            .expect("gültiger Pfad")
            .curve
    }

    #[test]
    fn test_vehicle_travel_goes_back_and_forth() {
        // 20 Einheiten bei 5 u/s: T = 4 s
        let (t, direction) = vehicle_travel(1.0, 5.0, 20.0);
        assert_relative_eq!(t, 0.25, epsilon = 1e-6);
        assert_eq!(direction, TravelDirection::Forward);

        let (t, direction) = vehicle_travel(5.0, 5.0, 20.0);
        assert_relative_eq!(t, 0.75, epsilon = 1e-5);
        assert_eq!(direction, TravelDirection::Reverse);

        let (t, direction) = vehicle_travel(9.0, 5.0, 20.0);
        assert_relative_eq!(t, 0.25, epsilon = 1e-5);
        assert_eq!(direction, TravelDirection::Forward);

        assert_eq!(vehicle_travel(3.0, 5.0, 0.0), (0.0, TravelDirection::Forward));
    }

    #[test]
    fn test_vehicle_returns_towards_start_on_second_leg() {
        let curve = straight_curve(20.0);
        let options = EditorOptions::default();
        let pose_at = |elapsed: f32| {
            let state = PlaybackState {
                playing: true,
                elapsed,
                ..Default::default()
            };
            vehicle_pose(&curve, 0, &state, &options)
        };

        let early = pose_at(5.0);
        let later = pose_at(6.0);
        assert_relative_eq!(early.position.x, 15.0, epsilon = 1e-3);
        assert!(later.position.x < early.position.x);
        assert_relative_eq!(later.position.x, 10.0, epsilon = 1e-3);

        let tangent = curve.tangent_at(0.5);
        assert_relative_eq!(later.forward.x, -tangent.x, epsilon = 1e-5);
        assert_relative_eq!(later.forward.z, -tangent.z, epsilon = 1e-5);
    }

    #[test]
    fn test_advance_turns_vehicle_around_on_return_leg() {
        let mut layout = LayoutState::new();
        layout
            .vehicles
            .push(Path::from_points(vec![Vec3::ZERO, Vec3::new(20.0, 0.0, 0.0)]));
        let options = EditorOptions::default();
        let scene = PlaybackScene::from_layout(&layout, &options);
        let state = PlaybackState {
            playing: true,
            elapsed: 4.9,
            ..Default::default()
        };

        let next = advance(&state, &scene, &options, 0.2);
        let facing = next.vehicle_orientations[0] * Vec3::Z;
        assert_relative_eq!(facing.x, -1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_material_count_and_height() {
        let options = EditorOptions::default();
        let poses = material_poses(&straight_curve(6.0), &options, 0.0);

        // ceil(6 / 1.5) = 4
        assert_eq!(poses.len(), 4);
        assert_relative_eq!(poses[1].position.x, 1.5, epsilon = 1e-4);
        assert_relative_eq!(poses[0].position.y, options.belt_height, epsilon = 1e-6);
    }

    #[test]
    fn test_materials_move_with_belt() {
        let options = EditorOptions::default();
        let curve = straight_curve(6.0);
        let poses = material_poses(&curve, &options, 1.0);
        assert_relative_eq!(poses[0].position.x, options.belt_speed, epsilon = 1e-4);
    }

    #[test]
    fn test_paused_playback_is_unchanged() {
        let state = PlaybackState::default();
        let scene = PlaybackScene::default();
        let next = advance(&state, &scene, &EditorOptions::default(), 0.5);
        assert_eq!(next, state);
    }

    #[test]
    fn test_advance_is_reproducible() {
        let mut layout = LayoutState::new();
        layout.vehicles.push(Path::from_points(vec![
            Vec3::ZERO,
            Vec3::new(20.0, 0.0, 0.0),
            Vec3::new(20.0, 0.0, 20.0),
        ]));
        let options = EditorOptions::default();
        let scene = PlaybackScene::from_layout(&layout, &options);
        let start = PlaybackState {
            playing: true,
            ..Default::default()
        };

        let run = |steps: usize| {
            (0..steps).fold(start.clone(), |s, _| advance(&s, &scene, &options, 1.0 / 60.0))
        };
        assert_eq!(run(30), run(30));
        assert_relative_eq!(run(30).elapsed, 0.5, epsilon = 1e-4);
        assert_eq!(run(1).vehicle_orientations.len(), 1);
    }

    #[test]
    fn test_camera_follows_first_conveyor_and_reaches_targets() {
        let mut layout = LayoutState::new();
        layout
            .conveyors
            .push(Path::from_points(vec![Vec3::ZERO, Vec3::new(4.0, 0.0, 0.0)]));
        layout.add_camera_target(Vec3::new(1.0, 0.0, 0.5));
        layout.add_camera_target(Vec3::new(30.0, 0.0, 30.0));
        let options = EditorOptions::default();
        let scene = PlaybackScene::from_layout(&layout, &options);

        let mut state = PlaybackState {
            playing: true,
            camera: reset_camera(&scene, &options),
            ..Default::default()
        };
        assert_eq!(state.camera.position, Vec3::new(10.0, 10.0, 10.0));

        // 2 u/s auf 4 Einheiten: nach 0.5 s bei x = 1
        for _ in 0..5 {
            state = advance(&state, &scene, &options, 0.1);
        }
        assert_relative_eq!(state.camera.progress, 0.25, epsilon = 1e-4);
        assert_eq!(state.camera.target_index, 1);
        assert_relative_eq!(state.camera.position.x, 11.0, epsilon = 1e-3);

        for _ in 0..100 {
            state = advance(&state, &scene, &options, 0.1);
        }
        assert_eq!(state.camera.progress, 1.0);
        assert_eq!(state.camera.target_index, 1);
    }
}
