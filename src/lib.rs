//! World Camera
//!
//! A 2D camera for scrollable, zoomable game worlds, with clamped world/screen
//! transforms and tick-driven transitions.

/// Camera transitions driven by a per-frame tick (pan, zoom, fit-to-rect, follow)
pub mod action;

/// Invariant checks and reports for camera state
pub mod audit;

/// Camera geometry: clamping, coordinate transforms and fitting
pub mod camera;

/// Profile-based configuration loading
pub mod config;

pub use action::{ActionEvent, ActionRunner, CameraAction, Easing, Follow, Tween};
pub use camera::{Bounds, Camera, CameraError, CameraState, WorldNode};
pub use config::CameraConfig;
