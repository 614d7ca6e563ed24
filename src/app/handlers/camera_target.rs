//! Handler für Kamera-Ziele: Anlegen, Auswahl, Ziehen, Löschen.

use crate::app::AppState;
use glam::Vec3;

/// Legt ein Kamera-Ziel an.
pub fn add(state: &mut AppState, position: Vec3) {
    let id = state.layout.add_camera_target(position);
    log::info!("Kamera-Ziel {} angelegt bei {:?}", id, position);
}

/// Setzt oder löscht die Auswahl. Unbekannte IDs heben die Auswahl auf.
pub fn select(state: &mut AppState, target_id: Option<u64>) {
    state.editor.selected_target =
        target_id.filter(|id| state.layout.camera_targets.contains_key(id));
}

/// Beginnt das Ziehen eines Kamera-Ziels.
pub fn begin_drag(state: &mut AppState, target_id: u64) {
    let Some(origin) = state.layout.camera_targets.get(&target_id).copied() else {
        log::warn!("Kamera-Ziel {} existiert nicht", target_id);
        return;
    };
    state.editor.phase = state.editor.phase.on_drag_started(target_id, origin);
}

/// Verschiebt ein Kamera-Ziel.
pub fn move_to(state: &mut AppState, target_id: u64, position: Vec3) {
    if !state.layout.move_camera_target(target_id, position) {
        log::warn!("Kamera-Ziel {} existiert nicht", target_id);
    }
}

/// Beendet das Ziehen. Die Auswahl bleibt erhalten.
pub fn end_drag(state: &mut AppState) {
    let draft_active = state.has_active_draft();
    state.editor.phase = state.editor.phase.on_drag_ended(draft_active);
}

/// Löscht ein Kamera-Ziel samt Auswahl.
pub fn delete(state: &mut AppState, target_id: u64) {
    if state.layout.remove_camera_target(target_id).is_some() {
        log::info!("Kamera-Ziel {} gelöscht", target_id);
    }
    if state.editor.selected_target == Some(target_id) {
        state.editor.selected_target = None;
    }
    if state.editor.phase.dragged_target().map(|(id, _)| id) == Some(target_id) {
        end_drag(state);
    }
}
