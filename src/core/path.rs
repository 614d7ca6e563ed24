//! Wegpunkte und Pfade.
//!
//! Ein `Path` ist eine unveränderliche, geordnete Wegpunkt-Folge. Anhängen
//! erzeugt einen neuen Pfad (Copy-on-Write), bestehende Punkte werden nie
//! in-place verändert.

use glam::Vec3;
use std::sync::Arc;

/// Vom Nutzer platzierter 3D-Punkt. Zeichnen erfolgt auf der Bodenebene (y ≈ 0).
pub type Waypoint = Vec3;

/// Fehler bei der Geometrie-Erzeugung aus einem Pfad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// Kurven, Belts und Kollisionen brauchen mindestens zwei Wegpunkte
    #[error("Pfad benötigt mindestens 2 Wegpunkte, hat {count}")]
    TooFewPoints { count: usize },
}

/// Geordnete Wegpunkt-Folge. Die Einfüge-Reihenfolge bestimmt die Fahrtrichtung.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    points: Arc<[Waypoint]>,
}

impl Default for Path {
    fn default() -> Self {
        Self::new()
    }
}

impl Path {
    /// Minimale Punktzahl für Kurve, Belt und Kollisionstest.
    pub const MIN_DRAWABLE_POINTS: usize = 2;

    /// Erstellt einen leeren Pfad.
    pub fn new() -> Self {
        Self {
            points: Arc::from(Vec::new()),
        }
    }

    /// Erstellt einen Pfad aus einer Punktliste.
    pub fn from_points(points: impl Into<Vec<Waypoint>>) -> Self {
        Self {
            points: Arc::from(points.into()),
        }
    }

    /// Read-only Sicht auf alle Wegpunkte.
    pub fn points(&self) -> &[Waypoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Letzter Wegpunkt (Anker für Achsen-Snap und Kollisionsprüfung).
    pub fn last(&self) -> Option<Waypoint> {
        self.points.last().copied()
    }

    /// `true`, wenn der Pfad Geometrie erzeugen darf (≥ 2 Punkte).
    pub fn is_drawable(&self) -> bool {
        self.points.len() >= Self::MIN_DRAWABLE_POINTS
    }

    /// Liefert die Punkte, falls der Pfad zeichenbar ist.
    pub fn drawable_points(&self) -> Result<&[Waypoint], PathError> {
        if self.is_drawable() {
            Ok(&self.points)
        } else {
            Err(PathError::TooFewPoints {
                count: self.points.len(),
            })
        }
    }

    /// Neuer Pfad mit zusätzlichem Endpunkt. `self` bleibt unverändert.
    pub fn with_point(&self, point: Waypoint) -> Self {
        let mut points = Vec::with_capacity(self.points.len() + 1);
        points.extend_from_slice(&self.points);
        points.push(point);
        Self::from_points(points)
    }

    /// Aufeinanderfolgende Punktpaare (Kanten des Pfads).
    pub fn edges(&self) -> impl Iterator<Item = (Waypoint, Waypoint)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    /// Länge der ungeglätteten Polyline.
    pub fn polyline_length(&self) -> f32 {
        self.edges().map(|(a, b)| a.distance(b)).sum()
    }
}

impl From<Vec<Waypoint>> for Path {
    fn from(points: Vec<Waypoint>) -> Self {
        Self::from_points(points)
    }
}
