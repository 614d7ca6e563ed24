//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState, CommandLog};
use crate::shared::RenderScene;

/// Orchestriert Eingabe-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Zeichnen ===
            AppCommand::UpdateHover { snap } => handlers::drawing::update_hover(state, snap),
            AppCommand::AddWaypoint { position } => {
                handlers::drawing::add_waypoint(state, position)
            }
            AppCommand::FinishPath => handlers::drawing::finish_path(state),
            AppCommand::SetDrawMode { mode } => handlers::drawing::set_draw_mode(state, mode),
            AppCommand::ClearAll => handlers::drawing::clear_all(state),

            // === Kamera-Ziele ===
            AppCommand::AddCameraTarget { position } => {
                handlers::camera_target::add(state, position)
            }
            AppCommand::SelectCameraTarget { target_id } => {
                handlers::camera_target::select(state, target_id)
            }
            AppCommand::BeginTargetDrag { target_id } => {
                handlers::camera_target::begin_drag(state, target_id)
            }
            AppCommand::MoveCameraTarget {
                target_id,
                position,
            } => handlers::camera_target::move_to(state, target_id, position),
            AppCommand::EndTargetDrag => handlers::camera_target::end_drag(state),
            AppCommand::DeleteCameraTarget { target_id } => {
                handlers::camera_target::delete(state, target_id)
            }

            // === Eingabe-Modifikatoren ===
            AppCommand::SetAxisLockModifier { held } => {
                handlers::playback::set_axis_lock_modifier(state, held)
            }

            // === Wiedergabe ===
            AppCommand::TogglePlayback => handlers::playback::toggle(state),
            AppCommand::AdvanceFrame { dt } => handlers::playback::advance_frame(state, dt),

            // === Optionen ===
            AppCommand::ApplyOptions { options } => handlers::options::apply(state, *options),
            AppCommand::SaveOptions { path } => handlers::options::save(state, &path)?,
        }

        Ok(())
    }

    /// Wendet die Layout-Edits eines Journals auf `state` an.
    ///
    /// Fehler, wenn das Journal gekürzt wurde und der Sitzungsbeginn fehlt.
    pub fn replay_layout(
        &mut self,
        state: &mut AppState,
        journal: &CommandLog,
    ) -> anyhow::Result<()> {
        anyhow::ensure!(
            !journal.is_truncated(),
            "Command-Journal ist gekürzt, Layout nicht rekonstruierbar"
        );
        let edits: Vec<AppCommand> = journal.layout_edits().cloned().collect();
        log::info!("Spiele {} Layout-Edits erneut ab", edits.len());
        for command in edits {
            self.handle_command(state, command)?;
        }
        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen State.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
