//! GPU-nahe Vertex- und Instanz-Typen (`#[repr(C)]`, bytemuck `Pod`).

use bytemuck::{Pod, Zeroable};
use glam::{Quat, Vec3};

/// Vertex der Belt-Oberfläche.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct BeltVertex {
    /// Welt-Position
    pub position: [f32; 3],
    /// Normalisierte Bogenlänge `d ∈ [0, 1]`
    pub path_position: f32,
    /// Krümmung des Kurven-Primitivs an dieser Stelle
    pub curvature: f32,
    /// -1 linke Kante, +1 rechte Kante
    pub lateral: f32,
    /// (d, 0 links / 1 rechts)
    pub uv: [f32; 2],
}

impl BeltVertex {
    /// Erstellt einen Belt-Vertex; `uv` folgt aus `d` und der Seite.
    pub fn new(position: Vec3, path_position: f32, curvature: f32, lateral: f32) -> Self {
        let v = if lateral > 0.0 { 1.0 } else { 0.0 };
        Self {
            position: position.to_array(),
            path_position,
            curvature,
            lateral,
            uv: [path_position, v],
        }
    }
}

/// Vertex für Linien-Geometrie (Vorschau, Schienen).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    /// RGBA-Farbe
    pub color: [f32; 4],
}

impl LineVertex {
    pub fn new(position: Vec3, color: [f32; 4]) -> Self {
        Self {
            position: position.to_array(),
            color,
        }
    }
}

/// Instanz-Daten für Meshes mit Pose (Fahrzeuge, Güter, Stützen, Kamera-Ziele).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct InstanceRaw {
    pub position: [f32; 3],
    /// Gleichmäßige Skalierung
    pub scale: f32,
    /// Rotation als Quaternion (x, y, z, w)
    pub rotation: [f32; 4],
}

impl InstanceRaw {
    pub fn new(position: Vec3, rotation: Quat, scale: f32) -> Self {
        Self {
            position: position.to_array(),
            scale,
            rotation: rotation.to_array(),
        }
    }
}

/// Uniforms des Streifen-Shaders eines Förderbands.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct StripeUniforms {
    pub belt_color: [f32; 4],
    pub stripe_color: [f32; 4],
    /// Laufzeit in Sekunden
    pub time: f32,
    /// Band-Geschwindigkeit
    pub speed: f32,
    pub stripe_width: f32,
    pub gap_width: f32,
    /// Bogenlänge der Band-Kurve
    pub conveyor_length: f32,
    /// Stärke der Krümmungskompensation
    pub curvature_factor: f32,
    pub belt_half_width: f32,
    pub _padding: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gpu_layouts_are_packed() {
        assert_eq!(std::mem::size_of::<BeltVertex>(), 32);
        assert_eq!(std::mem::size_of::<LineVertex>(), 28);
        assert_eq!(std::mem::size_of::<InstanceRaw>(), 32);
        assert_eq!(std::mem::size_of::<StripeUniforms>() % 16, 0);
    }

    #[test]
    fn test_belt_vertex_uv_follows_side() {
        let left = BeltVertex::new(Vec3::ZERO, 0.25, 0.0, -1.0);
        let right = BeltVertex::new(Vec3::ZERO, 0.25, 0.0, 1.0);
        assert_eq!(left.uv, [0.25, 0.0]);
        assert_eq!(right.uv, [0.25, 1.0]);
    }
}
