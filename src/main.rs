//! Site Layout Editor (headless).
//!
//! Spielt eine Beispiel-Sitzung über den Intent-Fluss ab: zwei Förderbänder,
//! ein Fahrzeug-Pfad, Kamera-Ziele, dann einige Sekunden Wiedergabe.
//! Die erzeugte Geometrie wird als Statistik geloggt.

use glam::Vec3;
use site_layout_editor::{
    render, AppController, AppIntent, AppState, DrawMode, EditorKey, EditorOptions,
};

/// Frames der Wiedergabe (2 s bei 60 Hz).
const DEMO_FRAMES: usize = 120;
const FRAME_DT: f32 = 1.0 / 60.0;

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "Site Layout Editor v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    // Optionen aus TOML laden (Argument oder neben der Binary)
    let config_path = std::env::args()
        .nth(1)
        .map(std::path::PathBuf::from)
        .unwrap_or_else(EditorOptions::config_path);
    let options = EditorOptions::load_from_file(&config_path);

    let mut state = AppState::with_options(options);
    let mut controller = AppController::new();

    draw_demo_layout(&mut controller, &mut state)?;

    controller.handle_intent(&mut state, AppIntent::TogglePlaybackRequested)?;
    for _ in 0..DEMO_FRAMES {
        controller.handle_intent(&mut state, AppIntent::FrameAdvanced { dt: FRAME_DT })?;
    }

    let scene = controller.build_render_scene(&state);
    let frame = render::build_frame_geometry(&scene);

    log::info!(
        "Layout: {} Bänder, {} Fahrzeug-Pfade, {} Kamera-Ziele",
        state.conveyor_count(),
        state.vehicle_count(),
        state.layout.camera_targets.len()
    );
    for (i, conveyor) in frame.conveyors.iter().enumerate() {
        log::info!(
            "Band {}: Länge {:.2}, {} Dreiecke ({} Bytes), {} Stützen, {} Güter",
            i,
            conveyor.uniforms.conveyor_length,
            conveyor.belt.triangle_count(),
            conveyor.belt.as_bytes().len(),
            conveyor.supports.anchors.len(),
            conveyor.materials.len()
        );
    }
    log::info!(
        "Frame: {} Belt-Dreiecke, {} Stützen, {} Güter, {} Fahrzeuge",
        frame.belt_triangle_count(),
        frame.support_count(),
        frame.material_count(),
        frame.vehicles.len()
    );
    if let Some(camera) = scene.camera {
        log::info!(
            "Kamera bei {:?}, Blick auf {:?} (Fortschritt {:.3})",
            camera.position,
            camera.look_at,
            state.playback.camera.progress
        );
    }
    log::info!("{} Commands ausgeführt", state.command_log.len());

    // Layout aus dem Journal rekonstruieren
    let mut replayed = AppState::with_options(state.options.clone());
    controller.replay_layout(&mut replayed, &state.command_log)?;
    log::info!(
        "Replay: {} Bänder, {} Fahrzeug-Pfade, {} Kamera-Ziele (identisch: {})",
        replayed.conveyor_count(),
        replayed.vehicle_count(),
        replayed.layout.camera_targets.len(),
        replayed.layout.conveyors == state.layout.conveyors
            && replayed.layout.vehicles == state.layout.vehicles
    );

    Ok(())
}

/// Zeichnet einen Pfad per Hover + Klick und schließt ihn mit Enter ab.
fn draw_path(
    controller: &mut AppController,
    state: &mut AppState,
    points: &[Vec3],
) -> anyhow::Result<()> {
    for &world_pos in points {
        controller.handle_intent(state, AppIntent::PointerMoved { world_pos })?;
        controller.handle_intent(state, AppIntent::PointerClicked { world_pos })?;
    }
    controller.handle_intent(
        state,
        AppIntent::KeyPressed {
            key: EditorKey::Enter,
        },
    )
}

fn draw_demo_layout(controller: &mut AppController, state: &mut AppState) -> anyhow::Result<()> {
    let v = |x: f32, z: f32| Vec3::new(x, 0.0, z);

    draw_path(
        controller,
        state,
        &[
            v(-50.0, 0.0),
            v(-3.0, 0.0),
            v(-3.0, 5.0),
            v(1.0, 5.0),
            v(1.0, 8.0),
            v(1.0, 9.0),
            v(5.0, 9.0),
            v(5.0, 20.0),
            v(0.0, 20.0),
            v(0.0, 50.0),
        ],
    )?;
    draw_path(
        controller,
        state,
        &[
            v(50.0, 0.0),
            v(0.0, 0.0),
            v(0.0, -4.0),
            v(3.0, -4.0),
            v(3.0, -7.0),
            v(3.0, -9.0),
            v(5.0, -9.0),
            v(5.0, -13.0),
            v(5.0, -20.0),
            v(0.0, -20.0),
            v(0.0, -50.0),
        ],
    )?;

    // Kreuzt das erste Band: der zweite Punkt wird verworfen, der
    // 1-Punkt-Entwurf wird nicht übernommen
    draw_path(controller, state, &[v(-20.0, -5.0), v(-20.0, 5.0)])?;
    if let Some(warning) = state.ui.warning_text() {
        log::info!(
            "Erwartete Warnung: {} (Entwurf offen mit {} Punkt)",
            warning,
            state.layout.conveyor_draft.len()
        );
    }

    controller.handle_intent(
        state,
        AppIntent::SetDrawModeRequested {
            mode: DrawMode::Vehicle,
        },
    )?;
    draw_path(
        controller,
        state,
        &[v(-30.0, -30.0), v(30.0, -30.0), v(30.0, 30.0), v(-30.0, 30.0)],
    )?;

    controller.handle_intent(
        state,
        AppIntent::SetDrawModeRequested {
            mode: DrawMode::CameraTarget,
        },
    )?;
    for world_pos in [v(-45.0, 2.0), v(-10.0, 4.0), v(3.0, 14.0)] {
        controller.handle_intent(state, AppIntent::PointerClicked { world_pos })?;
    }

    Ok(())
}
