//! Use-Case: Wegpunkt an den aktiven Pfad anhängen.
//!
//! Im Förderband-Modus wird das neue Segment `[letzter Punkt, neuer Punkt]`
//! gegen alle fertigen Bänder geprüft. Bei Überschneidung wird nur der neue
//! Punkt verworfen und eine transiente Warnung gesetzt.

use crate::app::state::DrawMode;
use crate::app::AppState;
use crate::core::paths_collide;
use glam::Vec3;

/// Warnungstext bei überlappenden Bändern.
pub const OVERLAP_WARNING: &str = "Conveyors cannot overlap!";

/// Ergebnis eines Commit-Versuchs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Punkt wurde angehängt
    Appended,
    /// Neues Segment würde ein fertiges Band schneiden
    RejectedOverlap,
    /// Aktiver Modus hat keinen Pfad (Kamera-Modus)
    NoActivePath,
}

/// Prüft, ob das Segment `last → candidate` ein fertiges Band schneidet.
pub fn overlaps_conveyors(state: &AppState, last: Vec3, candidate: Vec3) -> bool {
    let segment = [last, candidate];
    state
        .layout
        .conveyors
        .iter()
        .any(|conveyor| paths_collide(&segment, conveyor.points(), state.options.conveyor_width))
}

/// Hängt `position` an den Pfad des aktiven Modus an.
pub fn commit_waypoint(state: &mut AppState, position: Vec3) -> CommitOutcome {
    let mode = state.editor.mode;
    let Some(draft) = state.layout.draft(mode) else {
        return CommitOutcome::NoActivePath;
    };

    if mode == DrawMode::Conveyor && state.options.reject_conveyor_overlap {
        if let Some(last) = draft.last() {
            if overlaps_conveyors(state, last, position) {
                let duration = state.options.warning_duration_secs;
                state.ui.show_warning(OVERLAP_WARNING, duration);
                return CommitOutcome::RejectedOverlap;
            }
        }
    }

    let extended = draft.with_point(position);
    log::debug!(
        "Wegpunkt {:?} angehängt ({:?}, jetzt {} Punkte)",
        position,
        mode,
        extended.len()
    );
    state.layout.set_draft(mode, extended);
    state.editor.phase = state.editor.phase.on_waypoint_added();
    CommitOutcome::Appended
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Path;

    fn state_with_conveyor() -> AppState {
        let mut state = AppState::new();
        state.layout.conveyors.push(Path::from_points(vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(10.0, 0.0, 0.0),
        ]));
        state
    }

    #[test]
    fn test_crossing_segment_is_rejected() {
        let mut state = state_with_conveyor();
        assert_eq!(
            commit_waypoint(&mut state, Vec3::new(5.0, 0.0, -5.0)),
            CommitOutcome::Appended
        );
        assert_eq!(
            commit_waypoint(&mut state, Vec3::new(5.0, 0.0, 5.0)),
            CommitOutcome::RejectedOverlap
        );

        assert_eq!(state.layout.conveyor_draft.len(), 1);
        assert_eq!(state.ui.warning_text(), Some(OVERLAP_WARNING));
        assert_eq!(state.layout.conveyors[0].len(), 2);
    }

    #[test]
    fn test_vehicle_paths_may_cross() {
        let mut state = state_with_conveyor();
        state.editor.mode = DrawMode::Vehicle;
        commit_waypoint(&mut state, Vec3::new(5.0, 0.0, -5.0));
        assert_eq!(
            commit_waypoint(&mut state, Vec3::new(5.0, 0.0, 5.0)),
            CommitOutcome::Appended
        );
        assert!(state.ui.warning.is_none());
    }

    #[test]
    fn test_disabled_overlap_check_accepts_crossing() {
        let mut state = state_with_conveyor();
        state.options.reject_conveyor_overlap = false;
        commit_waypoint(&mut state, Vec3::new(5.0, 0.0, -5.0));
        assert_eq!(
            commit_waypoint(&mut state, Vec3::new(5.0, 0.0, 5.0)),
            CommitOutcome::Appended
        );
    }

    #[test]
    fn test_camera_mode_has_no_path() {
        let mut state = AppState::new();
        state.editor.mode = DrawMode::CameraTarget;
        assert_eq!(
            commit_waypoint(&mut state, Vec3::ZERO),
            CommitOutcome::NoActivePath
        );
    }
}
