//! Handler für Zeichenmodus, Wegpunkte und Pfad-Abschluss.

use crate::app::state::DrawMode;
use crate::app::use_cases;
use crate::app::use_cases::commit_waypoint::CommitOutcome;
use crate::app::AppState;
use crate::core::SnapResult;
use glam::Vec3;

/// Übernimmt die gesnappte Hover-Position für die Vorschau.
pub fn update_hover(state: &mut AppState, snap: SnapResult) {
    state.editor.hover = Some(snap);
}

/// Hängt einen Wegpunkt an den aktiven Pfad an.
pub fn add_waypoint(state: &mut AppState, position: Vec3) {
    match use_cases::commit_waypoint::commit_waypoint(state, position) {
        CommitOutcome::Appended => {}
        CommitOutcome::RejectedOverlap => {
            log::info!("Wegpunkt {:?} verworfen: Überschneidung", position);
        }
        CommitOutcome::NoActivePath => {
            log::warn!("Wegpunkt ohne aktiven Pfad ignoriert ({:?})", state.editor.mode);
        }
    }
}

/// Friert den aktiven Pfad ein und beginnt einen neuen (ab 2 Punkten).
pub fn finish_path(state: &mut AppState) {
    let mode = state.editor.mode;
    if !state.layout.finish_draft(mode) {
        log::debug!("Pfad ({:?}) hat weniger als 2 Punkte, bleibt in Bearbeitung", mode);
        return;
    }
    log::info!(
        "Pfad abgeschlossen ({:?}): {} Bänder, {} Fahrzeug-Pfade",
        mode,
        state.layout.conveyors.len(),
        state.layout.vehicles.len()
    );
    state.editor.phase = state.editor.phase.on_path_finished();
}

/// Wechselt den Zeichenmodus. Pfade in Bearbeitung bleiben pro Modus erhalten.
pub fn set_draw_mode(state: &mut AppState, mode: DrawMode) {
    if state.editor.phase.is_dragging() {
        return;
    }
    state.editor.mode = mode;
    state.editor.hover = None;
    let draft_active = state.has_active_draft();
    state.editor.phase = state.editor.phase.on_reset(draft_active);
    log::info!("Zeichenmodus: {:?}", mode);
}

/// Entfernt alle Pfade, Kamera-Ziele und Auswahl; stoppt die Wiedergabe.
pub fn clear_all(state: &mut AppState) {
    state.layout.clear();
    state.editor.selected_target = None;
    state.editor.hover = None;
    state.editor.phase = state.editor.phase.on_reset(false);
    state.playback = Default::default();
    log::info!("Layout geleert");
}
