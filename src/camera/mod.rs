//! Camera model for a scrollable, zoomable 2D world
//!
//! A [`Camera`] maps a rectangular world onto a fixed-size viewport. Its state is
//! the world point shown at the viewport center plus a zoom scale, and every
//! mutation re-clamps that state so the visible rectangle never leaves the world.
//!
//! Screen space has its origin at the viewport's bottom-left corner, with y up,
//! matching the world's convention.

mod bounds;
mod error;
mod fit;

pub use bounds::Bounds;
pub use error::CameraError;
pub use fit::{FitSpace, FitTarget, Padding, fit_bounds};

use glam::{Affine2, Vec2};
use tracing::{debug, warn};

use crate::action::Easing;
use crate::config::CameraConfig;

/// Default upper bound on the zoom scale
pub const DEFAULT_MAX_ZOOM: f32 = 2.65;

/// Anything that can report the bounds of the world a camera looks at
///
/// The camera snapshots the bounds at construction (and on [`Camera::resize_world`]);
/// it never holds on to the node itself.
pub trait WorldNode {
    fn bounds(&self) -> Bounds;
}

impl WorldNode for Bounds {
    fn bounds(&self) -> Bounds {
        *self
    }
}

/// A bare size is a world anchored at the origin
///
/// The size is kept as given, so a negative extent reaches the camera's
/// validation instead of being flipped into a positive one.
impl WorldNode for Vec2 {
    fn bounds(&self) -> Bounds {
        Bounds {
            min: Vec2::ZERO,
            max: *self,
        }
    }
}

/// The mutable part of a camera: where it looks and how far it is zoomed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// World point mapped to the viewport center
    pub position: Vec2,
    /// World-to-screen magnification
    pub zoom: f32,
}

/// Camera over a fixed world, projected onto a viewport
#[derive(Debug, Clone)]
pub struct Camera {
    world: Bounds,
    viewport: Vec2,
    state: CameraState,
    min_zoom: f32,
    max_zoom: f32,
    default_easing: Easing,
}

impl Camera {
    /// Creates a camera showing the whole world, centered
    ///
    /// Fails with [`CameraError::InvalidArgument`] if any world or viewport
    /// dimension is non-positive or not finite.
    pub fn new(world: &impl WorldNode, viewport_size: Vec2) -> Result<Self, CameraError> {
        let world = world.bounds();
        validate_extent("world size", world.size())?;
        if !world.is_finite() {
            return Err(CameraError::invalid("world bounds", world));
        }
        validate_extent("viewport size", viewport_size)?;

        let min_zoom = min_zoom_for(world.size(), viewport_size)?;
        let mut camera = Self {
            world,
            viewport: viewport_size,
            state: CameraState {
                position: world.center(),
                zoom: min_zoom,
            },
            min_zoom,
            max_zoom: DEFAULT_MAX_ZOOM,
            default_easing: Easing::default(),
        };
        camera.reclamp();

        debug!(
            world.width = world.width(),
            world.height = world.height(),
            viewport.width = viewport_size.x,
            viewport.height = viewport_size.y,
            min_zoom,
            "Camera created"
        );
        Ok(camera)
    }

    /// Creates a camera using the viewport, zoom limit and easing from configuration
    pub fn from_config(world: &impl WorldNode, config: &CameraConfig) -> Result<Self, CameraError> {
        config.validate()?;
        let mut camera = Self::new(world, config.viewport.size())?;
        camera.set_max_zoom(config.camera.max_zoom)?;
        camera.default_easing = config.camera.default_easing;
        Ok(camera)
    }

    /// Builder method to set the easing hint handed to transitions
    pub fn with_default_easing(mut self, easing: Easing) -> Self {
        self.default_easing = easing;
        self
    }

    // Accessors

    pub fn world_bounds(&self) -> Bounds {
        self.world
    }

    pub fn viewport_size(&self) -> Vec2 {
        self.viewport
    }

    pub fn state(&self) -> CameraState {
        self.state
    }

    pub fn zoom_scale(&self) -> f32 {
        self.state.zoom
    }

    pub fn position_in_world(&self) -> Vec2 {
        self.state.position
    }

    /// Smallest zoom at which no area outside the world is visible
    pub fn min_zoom(&self) -> f32 {
        self.min_zoom
    }

    /// Configured upper zoom bound
    ///
    /// When this is below [`Camera::min_zoom`] the minimum wins, see [`Camera::clamp_zoom`].
    pub fn max_zoom(&self) -> f32 {
        self.max_zoom
    }

    pub fn default_easing(&self) -> Easing {
        self.default_easing
    }

    pub fn set_default_easing(&mut self, easing: Easing) {
        self.default_easing = easing;
    }

    // Coordinate transforms

    /// Converts a world point to screen coordinates
    pub fn world_to_screen(&self, world_point: Vec2) -> Vec2 {
        (world_point - self.state.position) * self.state.zoom + self.viewport / 2.0
    }

    /// Converts a screen point to world coordinates; inverse of [`Camera::world_to_screen`]
    pub fn screen_to_world(&self, screen_point: Vec2) -> Vec2 {
        (screen_point - self.viewport / 2.0) / self.state.zoom + self.state.position
    }

    /// Where the camera's own position lands on screen (the viewport center)
    pub fn position_in_screen_coords(&self) -> Vec2 {
        self.world_to_screen(self.state.position)
    }

    /// Transform a renderer applies to the world node to show the current view
    pub fn world_transform(&self) -> Affine2 {
        Affine2::from_scale_angle_translation(
            Vec2::splat(self.state.zoom),
            0.0,
            self.viewport / 2.0 - self.state.position * self.state.zoom,
        )
    }

    /// The part of the world currently visible, in world coordinates
    pub fn visible_world_rect(&self) -> Bounds {
        Bounds::from_center_size(self.state.position, self.visible_extent_at(self.state.zoom))
    }

    fn visible_extent_at(&self, zoom: f32) -> Vec2 {
        self.viewport / zoom
    }

    // Clamp resolvers (pure)

    /// Clamps a zoom scale to `[min_zoom, max(max_zoom, min_zoom)]`
    ///
    /// Infinities clamp like any other value; NaN resolves to the current zoom.
    pub fn clamp_zoom(&self, zoom: f32) -> f32 {
        if zoom.is_nan() {
            return self.state.zoom;
        }
        zoom.clamp(self.min_zoom, self.max_zoom.max(self.min_zoom))
    }

    /// Clamps a camera position so the visible rectangle at `zoom` stays inside the world
    ///
    /// Each axis is handled on its own: when the visible extent covers the whole
    /// world on that axis the position is pinned to the world's center, otherwise
    /// it is clamped to `[min + half, max - half]`. Non-finite components resolve
    /// to the current position on that axis.
    pub fn clamp_position_at(&self, position: Vec2, zoom: f32) -> Vec2 {
        let half = self.visible_extent_at(zoom) / 2.0;
        let current = self.state.position;
        let x = if position.x.is_finite() { position.x } else { current.x };
        let y = if position.y.is_finite() { position.y } else { current.y };

        Vec2::new(
            clamp_axis(x, half.x, self.world.min.x, self.world.max.x),
            clamp_axis(y, half.y, self.world.min.y, self.world.max.y),
        )
    }

    /// The state [`Camera::set_visible_world_rect`] would produce for `rect`
    pub fn state_for_visible_rect(&self, rect: &Bounds) -> CameraState {
        let zoom = self.clamp_zoom(self.zoom_for_rect(rect));
        CameraState {
            zoom,
            position: self.clamp_position_at(rect.center(), zoom),
        }
    }

    // Setters

    /// Sets the zoom scale, clamped, and re-clamps the position at the new zoom
    pub fn set_zoom_scale(&mut self, zoom: f32) {
        if zoom.is_nan() {
            warn!(zoom, "Ignoring NaN zoom scale");
            return;
        }

        let clamped = self.clamp_zoom(zoom);
        if clamped != zoom {
            debug!(requested = zoom, clamped, "Zoom scale clamped");
        }

        self.state.zoom = clamped;
        self.state.position = self.clamp_position_at(self.state.position, clamped);
    }

    /// Moves the camera to look at `position`, clamped at the current zoom
    pub fn set_position_in_world(&mut self, position: Vec2) {
        if !position.is_finite() {
            warn!(?position, "Ignoring non-finite camera position");
            return;
        }

        let clamped = self.clamp_position_at(position, self.state.zoom);
        if clamped != position {
            debug!(requested = ?position, ?clamped, "Camera position clamped");
        }

        self.state.position = clamped;
    }

    /// Shows `rect` as closely as possible
    ///
    /// Picks the largest zoom at which the whole rectangle fits (so one axis may
    /// show more than asked, never less), clamps it, then centers on the
    /// rectangle. Zoom goes first because the position clamp depends on it.
    pub fn set_visible_world_rect(&mut self, rect: Bounds) {
        if !rect.is_finite() {
            warn!(?rect, "Ignoring non-finite visible rect");
            return;
        }

        let target = self.state_for_visible_rect(&rect);
        self.set_zoom_scale(target.zoom);
        self.set_position_in_world(rect.center());
    }

    /// Applies a full state: zoom first, then position
    pub fn set_state(&mut self, state: CameraState) {
        self.set_zoom_scale(state.zoom);
        self.set_position_in_world(state.position);
    }

    /// Sets the upper zoom bound and re-clamps the current state
    pub fn set_max_zoom(&mut self, max_zoom: f32) -> Result<(), CameraError> {
        if !(max_zoom.is_finite() && max_zoom > 0.0) {
            return Err(CameraError::invalid("max zoom", max_zoom));
        }
        if max_zoom < self.min_zoom {
            debug!(
                max_zoom,
                min_zoom = self.min_zoom,
                "Max zoom below min zoom, min zoom takes precedence"
            );
        }

        self.max_zoom = max_zoom;
        self.reclamp();
        Ok(())
    }

    // Resize

    /// Updates the viewport size, recomputing the minimum zoom and re-clamping
    ///
    /// An invalid size is rejected and the camera is left untouched.
    pub fn resize_viewport(&mut self, viewport_size: Vec2) -> Result<(), CameraError> {
        if let Err(e) = validate_extent("viewport size", viewport_size) {
            warn!(error = %e, "Rejected viewport resize");
            return Err(e);
        }

        let min_zoom = match min_zoom_for(self.world.size(), viewport_size) {
            Ok(min_zoom) => min_zoom,
            Err(e) => {
                warn!(error = %e, "Rejected viewport resize");
                return Err(e);
            }
        };

        self.viewport = viewport_size;
        self.min_zoom = min_zoom;
        self.reclamp();

        debug!(
            viewport.width = viewport_size.x,
            viewport.height = viewport_size.y,
            min_zoom = self.min_zoom,
            "Viewport resized"
        );
        Ok(())
    }

    /// Updates the world bounds, recomputing the minimum zoom and re-clamping
    ///
    /// An invalid world is rejected and the camera is left untouched.
    pub fn resize_world(&mut self, world: &impl WorldNode) -> Result<(), CameraError> {
        let world = world.bounds();
        let validated = validate_extent("world size", world.size())
            .and_then(|_| {
                if world.is_finite() {
                    Ok(())
                } else {
                    Err(CameraError::invalid("world bounds", world))
                }
            })
            .and_then(|_| min_zoom_for(world.size(), self.viewport));
        let min_zoom = match validated {
            Ok(min_zoom) => min_zoom,
            Err(e) => {
                warn!(error = %e, "Rejected world resize");
                return Err(e);
            }
        };

        self.world = world;
        self.min_zoom = min_zoom;
        self.reclamp();

        debug!(
            world.width = world.width(),
            world.height = world.height(),
            min_zoom = self.min_zoom,
            "World resized"
        );
        Ok(())
    }

    fn reclamp(&mut self) {
        self.set_zoom_scale(self.state.zoom);
    }
}

/// Zoom at which the world exactly fills the viewport on the tighter axis
///
/// Sizes that are valid on their own can still overflow or underflow the
/// ratio; those pairs are rejected.
fn min_zoom_for(world_size: Vec2, viewport_size: Vec2) -> Result<f32, CameraError> {
    let ratio = viewport_size / world_size;
    let min_zoom = ratio.x.max(ratio.y);
    if min_zoom.is_finite() && min_zoom > 0.0 {
        Ok(min_zoom)
    } else {
        Err(CameraError::invalid("min zoom", min_zoom))
    }
}

fn clamp_axis(value: f32, half: f32, min: f32, max: f32) -> f32 {
    if 2.0 * half >= max - min {
        (min + max) / 2.0
    } else {
        value.clamp(min + half, max - half)
    }
}

fn validate_extent(what: &'static str, size: Vec2) -> Result<(), CameraError> {
    if size.is_finite() && size.x > 0.0 && size.y > 0.0 {
        Ok(())
    } else {
        Err(CameraError::invalid(what, size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn camera() -> Camera {
        Camera::new(&Vec2::new(1000.0, 500.0), Vec2::new(400.0, 400.0)).unwrap()
    }

    #[test]
    fn test_new_starts_fully_zoomed_out_and_centered() {
        let camera = camera();
        assert!((camera.zoom_scale() - 0.8).abs() < EPS);
        assert_eq!(camera.zoom_scale(), camera.min_zoom());
        assert_eq!(camera.position_in_world(), Vec2::new(500.0, 250.0));
        assert_eq!(camera.max_zoom(), DEFAULT_MAX_ZOOM);
    }

    #[test]
    fn test_new_rejects_non_positive_sizes() {
        let viewport = Vec2::new(400.0, 400.0);
        assert!(matches!(
            Camera::new(&Vec2::new(0.0, 500.0), viewport),
            Err(CameraError::InvalidArgument { .. })
        ));
        assert!(matches!(
            Camera::new(&Vec2::new(1000.0, -1.0), viewport),
            Err(CameraError::InvalidArgument { .. })
        ));
        assert!(matches!(
            Camera::new(&Vec2::new(1000.0, 500.0), Vec2::new(400.0, 0.0)),
            Err(CameraError::InvalidArgument { .. })
        ));
        assert!(matches!(
            Camera::new(&Vec2::new(f32::INFINITY, 500.0), viewport),
            Err(CameraError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_world_with_offset_origin() {
        let world = Bounds::from_origin_size(Vec2::new(-100.0, 50.0), Vec2::new(200.0, 100.0));
        let camera = Camera::new(&world, Vec2::new(100.0, 100.0)).unwrap();
        assert_eq!(camera.position_in_world(), Vec2::new(0.0, 100.0));
        assert!((camera.min_zoom() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_position_in_screen_coords_is_viewport_center() {
        let mut camera = camera();
        camera.set_zoom_scale(2.0);
        camera.set_position_in_world(Vec2::new(300.0, 200.0));
        let screen = camera.position_in_screen_coords();
        assert!((screen - Vec2::new(200.0, 200.0)).length() < EPS);
    }

    #[test]
    fn test_world_transform_agrees_with_world_to_screen() {
        let mut camera = camera();
        camera.set_zoom_scale(1.7);
        camera.set_position_in_world(Vec2::new(610.0, 180.0));
        for p in [Vec2::ZERO, Vec2::new(1000.0, 500.0), Vec2::new(123.0, 456.0)] {
            let a = camera.world_transform().transform_point2(p);
            let b = camera.world_to_screen(p);
            assert!((a - b).length() < EPS, "{a:?} != {b:?}");
        }
    }

    #[test]
    fn test_set_zoom_scale_clamps_both_ends() {
        let mut camera = camera();
        camera.set_zoom_scale(0.1);
        assert!((camera.zoom_scale() - 0.8).abs() < EPS);
        camera.set_zoom_scale(100.0);
        assert_eq!(camera.zoom_scale(), DEFAULT_MAX_ZOOM);
    }

    #[test]
    fn test_zoom_out_reclamps_position() {
        let mut camera = camera();
        camera.set_zoom_scale(DEFAULT_MAX_ZOOM);
        camera.set_position_in_world(Vec2::new(80.0, 80.0));
        camera.set_zoom_scale(1.0);
        // 400x400 visible at zoom 1
        assert_eq!(camera.position_in_world(), Vec2::new(200.0, 200.0));
    }

    #[test]
    fn test_non_finite_input_keeps_state() {
        let mut camera = camera();
        camera.set_zoom_scale(2.0);
        let before = camera.state();

        camera.set_zoom_scale(f32::NAN);
        camera.set_position_in_world(Vec2::new(f32::NAN, f32::INFINITY));
        camera.set_visible_world_rect(Bounds {
            min: Vec2::ZERO,
            max: Vec2::splat(f32::NAN),
        });

        assert_eq!(camera.state(), before);
    }

    #[test]
    fn test_set_max_zoom() {
        let mut camera = camera();
        camera.set_zoom_scale(2.5);
        camera.set_max_zoom(1.5).unwrap();
        assert_eq!(camera.zoom_scale(), 1.5);

        assert!(camera.set_max_zoom(0.0).is_err());
        assert!(camera.set_max_zoom(f32::NAN).is_err());
        assert_eq!(camera.max_zoom(), 1.5);
    }

    #[test]
    fn test_max_zoom_below_min_zoom_keeps_min() {
        let mut camera = camera();
        camera.set_max_zoom(0.5).unwrap();
        assert!((camera.zoom_scale() - camera.min_zoom()).abs() < EPS);
        camera.set_zoom_scale(2.0);
        assert!((camera.zoom_scale() - camera.min_zoom()).abs() < EPS);
    }

    #[test]
    fn test_resize_world_recomputes_min_zoom() {
        let mut camera = camera();
        camera.resize_world(&Vec2::new(400.0, 400.0)).unwrap();
        assert!((camera.min_zoom() - 1.0).abs() < EPS);
        assert!((camera.zoom_scale() - 1.0).abs() < EPS);
        assert_eq!(camera.position_in_world(), Vec2::new(200.0, 200.0));
    }

    #[test]
    fn test_rejected_resize_keeps_state() {
        let mut camera = camera();
        camera.set_zoom_scale(2.0);
        camera.set_position_in_world(Vec2::new(700.0, 300.0));
        let before = camera.state();

        assert!(camera.resize_viewport(Vec2::new(-5.0, 400.0)).is_err());
        assert!(camera.resize_world(&Vec2::new(1000.0, 0.0)).is_err());

        assert_eq!(camera.state(), before);
        assert_eq!(camera.viewport_size(), Vec2::new(400.0, 400.0));
        assert_eq!(camera.world_bounds().size(), Vec2::new(1000.0, 500.0));
    }

    #[test]
    fn test_negative_world_size_is_rejected() {
        let viewport = Vec2::new(400.0, 400.0);
        assert!(matches!(
            Camera::new(&Vec2::new(1000.0, -500.0), viewport),
            Err(CameraError::InvalidArgument { what: "world size", .. })
        ));
        assert!(matches!(
            Camera::new(
                &Bounds {
                    min: Vec2::new(10.0, 0.0),
                    max: Vec2::new(0.0, 10.0),
                },
                viewport
            ),
            Err(CameraError::InvalidArgument { .. })
        ));

        let mut camera = camera();
        let before = camera.state();
        assert!(camera.resize_world(&Vec2::new(-1000.0, 500.0)).is_err());
        assert_eq!(camera.world_bounds().max, Vec2::new(1000.0, 500.0));
        assert_eq!(camera.state(), before);
    }

    #[test]
    fn test_unrepresentable_min_zoom_is_rejected() {
        // min zoom overflows to infinity
        assert!(matches!(
            Camera::new(&Vec2::splat(1e-20), Vec2::splat(1e20)),
            Err(CameraError::InvalidArgument { what: "min zoom", .. })
        ));
        // min zoom underflows to zero
        assert!(matches!(
            Camera::new(&Vec2::splat(1e30), Vec2::splat(1e-20)),
            Err(CameraError::InvalidArgument { what: "min zoom", .. })
        ));

        let mut camera = camera();
        camera.set_zoom_scale(2.0);
        let before = camera.state();

        assert!(camera.resize_viewport(Vec2::splat(1e-44)).is_err());
        assert_eq!(camera.viewport_size(), Vec2::new(400.0, 400.0));
        assert!(camera.resize_world(&Vec2::splat(1e-38)).is_err());
        assert_eq!(camera.world_bounds().size(), Vec2::new(1000.0, 500.0));

        assert_eq!(camera.state(), before);
        assert!(camera.min_zoom().is_finite());
    }

    #[test]
    fn test_partly_non_finite_position_is_ignored() {
        let mut camera = camera();
        camera.set_zoom_scale(2.0);
        camera.set_position_in_world(Vec2::new(300.0, 200.0));

        camera.set_position_in_world(Vec2::new(f32::NAN, 100.0));
        assert_eq!(camera.position_in_world(), Vec2::new(300.0, 200.0));

        camera.set_position_in_world(Vec2::new(700.0, f32::NEG_INFINITY));
        assert_eq!(camera.position_in_world(), Vec2::new(300.0, 200.0));
    }
}
