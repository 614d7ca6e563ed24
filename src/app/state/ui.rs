//! UI-nahe Zustände (transiente Warnungen).

/// Warnung mit Restlaufzeit.
#[derive(Debug, Clone, PartialEq)]
pub struct TransientWarning {
    pub message: String,
    pub remaining_secs: f32,
}

/// UI-Zustand ohne eigene Darstellung.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub warning: Option<TransientWarning>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zeigt eine Warnung für `duration_secs` (ersetzt eine bestehende).
    pub fn show_warning(&mut self, message: impl Into<String>, duration_secs: f32) {
        let message = message.into();
        log::warn!("{}", message);
        self.warning = Some(TransientWarning {
            message,
            remaining_secs: duration_secs,
        });
    }

    /// Zählt die Restlaufzeit herunter und entfernt abgelaufene Warnungen.
    pub fn tick(&mut self, dt: f32) {
        if let Some(warning) = self.warning.as_mut() {
            warning.remaining_secs -= dt;
            if warning.remaining_secs <= 0.0 {
                self.warning = None;
            }
        }
    }

    /// Aktueller Warnungstext.
    pub fn warning_text(&self) -> Option<&str> {
        self.warning.as_ref().map(|w| w.message.as_str())
    }
}
