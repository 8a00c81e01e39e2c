//! Keeps the camera centered on a moving target

use std::cell::Cell;
use std::rc::{Rc, Weak};

use glam::Vec2;
use tracing::debug;

use super::{ActionStatus, CameraAction};
use crate::camera::Camera;

/// A followed entity, queried for its world position every tick
///
/// Returning `None` means the target is gone and the follow ends.
pub trait FollowTarget {
    fn world_position(&self) -> Option<Vec2>;
}

impl FollowTarget for Rc<Cell<Vec2>> {
    fn world_position(&self) -> Option<Vec2> {
        Some(self.get())
    }
}

impl FollowTarget for Rc<Cell<Option<Vec2>>> {
    fn world_position(&self) -> Option<Vec2> {
        self.get()
    }
}

/// The follow ends once every strong handle to the target is dropped
impl FollowTarget for Weak<Cell<Vec2>> {
    fn world_position(&self) -> Option<Vec2> {
        self.upgrade().map(|cell| cell.get())
    }
}

/// Re-centers the camera on its target each tick, subject to the usual clamp
///
/// There is no smoothing here; wrap the target or chain tweens for that.
pub struct Follow<T: FollowTarget> {
    target: T,
    ticks: u64,
}

impl<T: FollowTarget> Follow<T> {
    pub fn new(target: T) -> Self {
        Self { target, ticks: 0 }
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    /// Number of ticks the camera was re-centered
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl<T: FollowTarget> CameraAction for Follow<T> {
    fn step(&mut self, camera: &mut Camera, _delta_time: f32) -> ActionStatus {
        match self.target.world_position() {
            Some(position) => {
                camera.set_position_in_world(position);
                self.ticks += 1;
                ActionStatus::Running
            }
            None => {
                debug!(ticks = self.ticks, "Follow target gone");
                ActionStatus::Finished
            }
        }
    }

    fn name(&self) -> &str {
        "follow"
    }
}
