//! Use-Cases der Application-Layer-Orchestrierung.

pub mod commit_waypoint;
pub mod snapping;
