//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `render` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;

pub use options::EditorOptions;
pub use options::{SNAP_AXIS_OFFSET, SNAP_LINE_THRESHOLD, SNAP_POINT_THRESHOLD};
pub use render_scene::{
    CameraPose, CameraTargetMarker, ConveyorScene, PreviewScene, RenderScene, VehicleScene,
};
