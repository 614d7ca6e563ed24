//! Handler für Wiedergabe, Frame-Ticks und Modifikatoren.

use crate::app::playback::{self, PlaybackScene, PlaybackState};
use crate::app::AppState;

/// Startet oder stoppt die Wiedergabe. Start setzt Zeit und Kamera zurück.
pub fn toggle(state: &mut AppState) {
    if state.playback.playing {
        state.playback.playing = false;
        log::info!("Wiedergabe angehalten nach {:.2}s", state.playback.elapsed);
        return;
    }

    let scene = PlaybackScene::from_layout(&state.layout, &state.options);
    state.playback = PlaybackState {
        playing: true,
        elapsed: 0.0,
        vehicle_orientations: Vec::new(),
        camera: playback::reset_camera(&scene, &state.options),
    };
    log::info!(
        "Wiedergabe gestartet: {} Bänder, {} Fahrzeuge, {} Kamera-Ziele",
        scene.conveyors.len(),
        scene.vehicles.len(),
        scene.camera_targets.len()
    );
}

/// Rechnet einen Frame weiter und lässt transiente Warnungen ablaufen.
pub fn advance_frame(state: &mut AppState, dt: f32) {
    state.ui.tick(dt);
    if !state.playback.playing {
        return;
    }
    let scene = PlaybackScene::from_layout(&state.layout, &state.options);
    state.playback = playback::advance(&state.playback, &scene, &state.options, dt);
}

/// Setzt den Ctrl-Zustand (Achsen-Lock beim Ziehen).
pub fn set_axis_lock_modifier(state: &mut AppState, held: bool) {
    state.editor.ctrl_held = held;
}
