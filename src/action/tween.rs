//! Tweened camera transitions: pan, zoom, pan+zoom and fit-to-rect

use glam::Vec2;

use super::{ActionStatus, CameraAction, Easing};
use crate::camera::{Bounds, Camera, CameraState};

/// Where a tween is headed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweenTarget {
    /// Pan to a world position at the current zoom
    Position(Vec2),
    /// Zoom in place; the position moves only as far as the clamp requires
    Zoom(f32),
    PositionZoom { position: Vec2, zoom: f32 },
    /// Target visible world rectangle
    Rect(Bounds),
}

/// Interpolates the camera from its state at start to a target over a duration
///
/// The target is resolved to its clamped, reachable state when the tween
/// starts, so the motion never stalls against a world edge part way through.
#[derive(Debug, Clone)]
pub struct Tween {
    target: TweenTarget,
    duration: f32,
    elapsed: f32,
    easing: Option<Easing>,
    from: CameraState,
    to: CameraState,
}

impl Tween {
    pub fn new(target: TweenTarget, duration: f32) -> Self {
        let placeholder = CameraState {
            position: Vec2::ZERO,
            zoom: 1.0,
        };
        Self {
            target,
            duration,
            elapsed: 0.0,
            easing: None,
            from: placeholder,
            to: placeholder,
        }
    }

    pub fn move_to(position: Vec2, duration: f32) -> Self {
        Self::new(TweenTarget::Position(position), duration)
    }

    pub fn zoom_to(zoom: f32, duration: f32) -> Self {
        Self::new(TweenTarget::Zoom(zoom), duration)
    }

    pub fn move_to_position_zoom(position: Vec2, zoom: f32, duration: f32) -> Self {
        Self::new(TweenTarget::PositionZoom { position, zoom }, duration)
    }

    pub fn move_to_rect(rect: Bounds, duration: f32) -> Self {
        Self::new(TweenTarget::Rect(rect), duration)
    }

    /// Overrides the camera's default easing for this tween
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = Some(easing);
        self
    }

    pub fn target(&self) -> TweenTarget {
        self.target
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Linear progress in `[0, 1]`
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            if self.elapsed > 0.0 { 1.0 } else { 0.0 }
        } else {
            (self.elapsed / self.duration).min(1.0)
        }
    }

    /// The reachable state this tween ends in; valid once started
    pub fn resolved_target(&self) -> CameraState {
        self.to
    }

    fn resolve(&self, camera: &Camera) -> CameraState {
        let from = camera.state();
        match self.target {
            TweenTarget::Position(position) => CameraState {
                zoom: from.zoom,
                position: camera.clamp_position_at(position, from.zoom),
            },
            TweenTarget::Zoom(zoom) => {
                let zoom = camera.clamp_zoom(zoom);
                CameraState {
                    zoom,
                    position: camera.clamp_position_at(from.position, zoom),
                }
            }
            TweenTarget::PositionZoom { position, zoom } => {
                let zoom = camera.clamp_zoom(zoom);
                CameraState {
                    zoom,
                    position: camera.clamp_position_at(position, zoom),
                }
            }
            TweenTarget::Rect(rect) => camera.state_for_visible_rect(&rect),
        }
    }
}

impl CameraAction for Tween {
    fn start(&mut self, camera: &Camera) {
        self.from = camera.state();
        self.to = self.resolve(camera);
        self.easing.get_or_insert(camera.default_easing());
    }

    fn step(&mut self, camera: &mut Camera, delta_time: f32) -> ActionStatus {
        // Zero-length tweens still count as having run once
        self.elapsed += delta_time.max(f32::MIN_POSITIVE);
        let t = self.progress();

        if t >= 1.0 {
            camera.set_state(self.to);
            return ActionStatus::Finished;
        }

        let k = self.easing.unwrap_or_default().apply(t);
        camera.set_state(CameraState {
            zoom: self.from.zoom + (self.to.zoom - self.from.zoom) * k,
            position: self.from.position.lerp(self.to.position, k),
        });
        ActionStatus::Running
    }

    fn name(&self) -> &str {
        match self.target {
            TweenTarget::Position(_) => "move_to",
            TweenTarget::Zoom(_) => "zoom_to",
            TweenTarget::PositionZoom { .. } => "move_to_position_zoom",
            TweenTarget::Rect(_) => "move_to_rect",
        }
    }
}
