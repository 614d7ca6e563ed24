//! Layout-Daten: Förderbänder, Fahrzeug-Pfade und Kamera-Ziele.

use super::editor::DrawMode;
use crate::core::Path;
use glam::Vec3;
use indexmap::IndexMap;

/// Alle vom Nutzer gezeichneten Pfade und Kamera-Ziele einer Sitzung.
#[derive(Debug, Clone, Default)]
pub struct LayoutState {
    /// Fertige Förderbänder (eingefroren)
    pub conveyors: Vec<Path>,
    /// Fertige Fahrzeug-Pfade (eingefroren)
    pub vehicles: Vec<Path>,
    /// Förderband in Bearbeitung
    pub conveyor_draft: Path,
    /// Fahrzeug-Pfad in Bearbeitung
    pub vehicle_draft: Path,
    /// Kamera-Ziele in Einfüge-Reihenfolge
    pub camera_targets: IndexMap<u64, Vec3>,
    next_target_id: u64,
}

impl LayoutState {
    /// Erstellt ein leeres Layout.
    pub fn new() -> Self {
        Self {
            next_target_id: 1,
            ..Default::default()
        }
    }

    /// Pfad in Bearbeitung für den Modus (Kamera-Modus hat keinen).
    pub fn draft(&self, mode: DrawMode) -> Option<&Path> {
        match mode {
            DrawMode::Conveyor => Some(&self.conveyor_draft),
            DrawMode::Vehicle => Some(&self.vehicle_draft),
            DrawMode::CameraTarget => None,
        }
    }

    /// Ersetzt den Pfad in Bearbeitung (Copy-on-Write: alter Pfad bleibt unberührt).
    pub fn set_draft(&mut self, mode: DrawMode, path: Path) {
        match mode {
            DrawMode::Conveyor => self.conveyor_draft = path,
            DrawMode::Vehicle => self.vehicle_draft = path,
            DrawMode::CameraTarget => {
                log::warn!("Kamera-Modus hat keinen Pfad in Bearbeitung");
            }
        }
    }

    /// Friert den Pfad in Bearbeitung ein und beginnt einen neuen, leeren.
    ///
    /// Pfade mit weniger als zwei Punkten werden nicht übernommen und bleiben
    /// in Bearbeitung. Gibt `true` zurück, wenn ein Pfad übernommen wurde.
    pub fn finish_draft(&mut self, mode: DrawMode) -> bool {
        let (draft, finished) = match mode {
            DrawMode::Conveyor => (&mut self.conveyor_draft, &mut self.conveyors),
            DrawMode::Vehicle => (&mut self.vehicle_draft, &mut self.vehicles),
            DrawMode::CameraTarget => return false,
        };
        if !draft.is_drawable() {
            return false;
        }
        finished.push(std::mem::take(draft));
        true
    }

    /// Fertige Pfade eines Modus.
    pub fn finished(&self, mode: DrawMode) -> &[Path] {
        match mode {
            DrawMode::Conveyor => &self.conveyors,
            DrawMode::Vehicle => &self.vehicles,
            DrawMode::CameraTarget => &[],
        }
    }

    /// Alle Pfade (fertig und in Bearbeitung) aller Modi.
    pub fn all_paths(&self) -> impl Iterator<Item = &Path> + '_ {
        self.conveyors
            .iter()
            .chain(std::iter::once(&self.conveyor_draft))
            .chain(self.vehicles.iter())
            .chain(std::iter::once(&self.vehicle_draft))
    }

    /// Fügt ein Kamera-Ziel hinzu und gibt dessen ID zurück.
    pub fn add_camera_target(&mut self, position: Vec3) -> u64 {
        let id = self.next_target_id.max(1);
        self.next_target_id = id + 1;
        self.camera_targets.insert(id, position);
        id
    }

    /// Verschiebt ein Kamera-Ziel. `false`, wenn die ID unbekannt ist.
    pub fn move_camera_target(&mut self, id: u64, position: Vec3) -> bool {
        match self.camera_targets.get_mut(&id) {
            Some(target) => {
                *target = position;
                true
            }
            None => false,
        }
    }

    /// Entfernt ein Kamera-Ziel unter Beibehaltung der Reihenfolge.
    pub fn remove_camera_target(&mut self, id: u64) -> Option<Vec3> {
        self.camera_targets.shift_remove(&id)
    }

    /// Entfernt alle Pfade und Kamera-Ziele.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Anzahl aller fertigen Pfade und Kamera-Ziele.
    pub fn item_count(&self) -> usize {
        self.conveyors.len() + self.vehicles.len() + self.camera_targets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_draft_freezes_and_resets() {
        let mut layout = LayoutState::new();
        let draft = Path::new().with_point(Vec3::ZERO).with_point(Vec3::X);
        layout.set_draft(DrawMode::Conveyor, draft);

        assert!(layout.finish_draft(DrawMode::Conveyor));
        assert_eq!(layout.conveyors.len(), 1);
        assert!(layout.conveyor_draft.is_empty());
        assert!(!layout.finish_draft(DrawMode::Conveyor));
    }

    #[test]
    fn test_single_point_draft_stays_open() {
        let mut layout = LayoutState::new();
        layout.set_draft(DrawMode::Vehicle, Path::from_points(vec![Vec3::ONE]));

        assert!(!layout.finish_draft(DrawMode::Vehicle));
        assert!(layout.vehicles.is_empty());
        assert_eq!(layout.vehicle_draft.points(), &[Vec3::ONE]);
    }

    #[test]
    fn test_camera_targets_keep_order_after_removal() {
        let mut layout = LayoutState::new();
        let a = layout.add_camera_target(Vec3::X);
        let b = layout.add_camera_target(Vec3::Y);
        let c = layout.add_camera_target(Vec3::Z);

        assert_eq!(layout.remove_camera_target(b), Some(Vec3::Y));
        let ids: Vec<u64> = layout.camera_targets.keys().copied().collect();
        assert_eq!(ids, vec![a, c]);
        assert!(layout.move_camera_target(c, Vec3::ONE));
        assert!(!layout.move_camera_target(b, Vec3::ONE));
    }
}
