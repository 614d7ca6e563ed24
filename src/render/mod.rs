//! Render-fertige Geometrie aus der `RenderScene`.
//!
//! Der Host-Renderer lädt die hier erzeugten Vertex-, Instanz- und
//! Uniform-Puffer hoch. Shader und Scene-Graph leben außerhalb dieses Crates.

mod belt_mesh;
mod frames;
mod preview;
mod rails;
mod stripe;
mod types;

pub use crate::shared::RenderScene;
pub use belt_mesh::{build_belt_mesh, BeltMesh, BeltParams};
pub use frames::{ground_normal, sample_frames, CurveFrame};
pub use preview::build_preview_lines;
pub use rails::{build_rails, build_supports, RailSet, SupportAnchor, SupportLayout};
pub use types::{BeltVertex, InstanceRaw, LineVertex, StripeUniforms};

use crate::shared::{ConveyorScene, EditorOptions};
use glam::Quat;

/// Skalierung der Kamera-Ziel-Marker (selektiert / normal).
const TARGET_SCALE_SELECTED: f32 = 1.5;
const TARGET_SCALE: f32 = 1.0;

/// Geometrie eines einzelnen Förderbands.
#[derive(Debug, Clone)]
pub struct ConveyorGeometry {
    pub belt: BeltMesh,
    /// Fehlt nur, wenn die Schienen nicht geglättet werden konnten
    pub rails: Option<RailSet>,
    pub supports: SupportLayout,
    pub uniforms: StripeUniforms,
    pub materials: Vec<InstanceRaw>,
}

/// Alle Puffer eines Frames.
#[derive(Debug, Clone, Default)]
pub struct FrameGeometry {
    pub conveyors: Vec<ConveyorGeometry>,
    pub vehicles: Vec<InstanceRaw>,
    pub camera_targets: Vec<InstanceRaw>,
    pub preview: Vec<LineVertex>,
}

impl FrameGeometry {
    /// Summe aller Belt-Dreiecke.
    pub fn belt_triangle_count(&self) -> usize {
        self.conveyors.iter().map(|c| c.belt.triangle_count()).sum()
    }

    /// Summe aller Stützen-Stationen.
    pub fn support_count(&self) -> usize {
        self.conveyors.iter().map(|c| c.supports.anchors.len()).sum()
    }

    /// Summe aller Transportgüter.
    pub fn material_count(&self) -> usize {
        self.conveyors.iter().map(|c| c.materials.len()).sum()
    }
}

/// Belt-Parameter aus den Optionen.
pub fn belt_params(options: &EditorOptions) -> BeltParams {
    BeltParams {
        half_width: options.belt_half_width(),
        height: options.belt_height,
        divisions: options.belt_divisions,
    }
}

fn build_conveyor(conveyor: &ConveyorScene, options: &EditorOptions, time: f32) -> ConveyorGeometry {
    let belt = build_belt_mesh(&conveyor.curve, &belt_params(options));
    let rails = match build_rails(
        &conveyor.curve,
        options.rail_offset(),
        options.belt_height,
        options.belt_divisions,
        options.rail_radius(),
    ) {
        Ok(rails) => Some(rails),
        Err(e) => {
            log::warn!("Schienen konnten nicht erzeugt werden: {}", e);
            None
        }
    };
    let supports = build_supports(&conveyor.curve, options.rail_offset(), options.support_spacing);
    let uniforms = StripeUniforms::from_options(options, conveyor.curve.length(), time);
    let materials = conveyor
        .materials
        .iter()
        .map(|m| InstanceRaw::new(m.position, m.orientation, 1.0))
        .collect();

    ConveyorGeometry {
        belt,
        rails,
        supports,
        uniforms,
        materials,
    }
}

/// Baut alle Frame-Puffer aus der Szene.
pub fn build_frame_geometry(scene: &RenderScene) -> FrameGeometry {
    let options = &scene.options;

    let conveyors = scene
        .conveyors
        .iter()
        .map(|c| build_conveyor(c, options, scene.time))
        .collect();

    let vehicles = scene
        .vehicles
        .iter()
        .map(|v| InstanceRaw::new(v.pose.position, v.pose.orientation, 1.0))
        .collect();

    let camera_targets = scene
        .camera_targets
        .iter()
        .map(|t| {
            let scale = if t.selected {
                TARGET_SCALE_SELECTED
            } else {
                TARGET_SCALE
            };
            InstanceRaw::new(t.position, Quat::IDENTITY, scale)
        })
        .collect();

    let preview = build_preview_lines(
        &scene.preview,
        options.preview_line_width,
        options.preview_color,
    );

    FrameGeometry {
        conveyors,
        vehicles,
        camera_targets,
        preview,
    }
}
