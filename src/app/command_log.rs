//! Sitzungs-Journal der ausgeführten Commands.
//!
//! Die Layout-Edits des Journals lassen sich mit
//! [`AppController::replay_layout`](super::AppController::replay_layout)
//! auf einen frischen State anwenden.

use super::AppCommand;

/// Ausgeführte Commands in Reihenfolge, begrenzt auf `MAX_ENTRIES`.
#[derive(Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
    /// Anzahl verworfener ältester Einträge
    dropped: usize,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;

    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt einen ausgeführten Command an. Bei vollem Journal wird die
    /// ältere Hälfte verworfen.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            let drop_count = Self::MAX_ENTRIES / 2;
            self.entries.drain(..drop_count);
            self.dropped += drop_count;
            log::debug!("Command-Journal gekürzt ({} verworfen)", self.dropped);
        }
        self.entries.push(command.clone());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `true`, wenn der Sitzungsbeginn nicht mehr im Journal steht.
    pub fn is_truncated(&self) -> bool {
        self.dropped > 0
    }

    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }

    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.last()
    }

    /// Nur die Commands, die das Layout verändern (siehe [`AppCommand::is_layout_edit`]).
    pub fn layout_edits(&self) -> impl Iterator<Item = &AppCommand> + '_ {
        self.entries.iter().filter(|c| c.is_layout_edit())
    }
}
