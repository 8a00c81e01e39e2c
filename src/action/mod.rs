//! Time-driven camera actions
//!
//! Actions move a [`Camera`] over several frames by calling its setters each
//! tick. The camera itself has no notion of a transition in progress; the
//! [`ActionRunner`] owns that, and reports completion as returned events.

mod easing;
mod follow;
mod tween;

pub use easing::Easing;
pub use follow::{Follow, FollowTarget};
pub use tween::{Tween, TweenTarget};

use tracing::{debug, info};

use crate::camera::{Camera, CameraState};

/// Whether an action wants to keep running after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionStatus {
    Running,
    Finished,
}

/// Trait implemented by everything the runner can drive
pub trait CameraAction {
    /// Called once, right before the first step
    ///
    /// Actions capture their start values here rather than at construction so
    /// they pick up whatever the camera looks like when they actually begin.
    fn start(&mut self, _camera: &Camera) {}

    /// Advances the action by `delta_time` seconds
    fn step(&mut self, camera: &mut Camera, delta_time: f32) -> ActionStatus;

    /// Returns the name/identifier of this action
    fn name(&self) -> &str;
}

/// Handle to an action submitted to an [`ActionRunner`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActionId(u64);

/// Something that happened to an action during a tick
#[derive(Debug, Clone, PartialEq)]
pub enum ActionEvent {
    /// The action completed; `state` is the camera state right after its last step
    Finished {
        id: ActionId,
        name: String,
        state: CameraState,
    },
    /// The action was removed with [`ActionRunner::stop`] or [`ActionRunner::stop_all`]
    Stopped { id: ActionId, name: String },
}

impl ActionEvent {
    pub fn id(&self) -> ActionId {
        match self {
            ActionEvent::Finished { id, .. } | ActionEvent::Stopped { id, .. } => *id,
        }
    }
}

struct RunningAction {
    id: ActionId,
    action: Box<dyn CameraAction>,
    started: bool,
}

/// Drives camera actions from a per-frame tick
pub struct ActionRunner {
    /// Total number of ticks processed while not paused
    tick_count: u64,
    /// Total scaled time elapsed in seconds
    elapsed: f64,
    /// Time scale multiplier (1.0 = normal speed, 0.0 = frozen, 2.0 = 2x speed)
    time_scale: f32,
    paused: bool,
    next_id: u64,
    actions: Vec<RunningAction>,
    /// Stop notifications waiting for the next tick
    stopped: Vec<(ActionId, String)>,
}

impl ActionRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the time scale
    pub fn with_time_scale(mut self, scale: f32) -> Self {
        self.set_time_scale(scale);
        self
    }

    /// Submits an action; it starts on the next tick
    pub fn run(&mut self, action: impl CameraAction + 'static) -> ActionId {
        let id = ActionId(self.next_id);
        self.next_id += 1;
        debug!(id = id.0, name = action.name(), "Action queued");
        self.actions.push(RunningAction {
            id,
            action: Box::new(action),
            started: false,
        });
        id
    }

    /// Removes an action; a [`ActionEvent::Stopped`] is reported on the next tick
    pub fn stop(&mut self, id: ActionId) -> bool {
        match self.actions.iter().position(|a| a.id == id) {
            Some(index) => {
                let running = self.actions.remove(index);
                self.stopped.push((id, running.action.name().to_string()));
                true
            }
            None => false,
        }
    }

    /// Removes every action
    pub fn stop_all(&mut self) {
        for running in self.actions.drain(..) {
            self.stopped
                .push((running.id, running.action.name().to_string()));
        }
    }

    /// Steps every action against `camera` and returns what finished or stopped
    ///
    /// Actions step in submission order. Nothing steps while paused, but
    /// pending stop notifications are still delivered.
    pub fn tick(&mut self, camera: &mut Camera, delta_time: f32) -> Vec<ActionEvent> {
        let mut events: Vec<ActionEvent> = self
            .stopped
            .drain(..)
            .map(|(id, name)| ActionEvent::Stopped { id, name })
            .collect();

        if self.paused {
            return events;
        }

        let scaled_delta = delta_time.max(0.0) * self.time_scale;
        self.tick_count += 1;
        self.elapsed += scaled_delta as f64;

        self.actions.retain_mut(|running| {
            if !running.started {
                running.action.start(camera);
                running.started = true;
                info!(id = running.id.0, name = running.action.name(), "Action started");
            }

            match running.action.step(camera, scaled_delta) {
                ActionStatus::Running => true,
                ActionStatus::Finished => {
                    let state = camera.state();
                    info!(
                        id = running.id.0,
                        name = running.action.name(),
                        zoom = state.zoom,
                        position = ?state.position,
                        "Action finished"
                    );
                    events.push(ActionEvent::Finished {
                        id: running.id,
                        name: running.action.name().to_string(),
                        state,
                    });
                    false
                }
            }
        });

        events
    }

    /// Returns true if the action is still queued or running
    pub fn is_running(&self, id: ActionId) -> bool {
        self.actions.iter().any(|a| a.id == id)
    }

    /// Number of live actions
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Total scaled time elapsed in seconds
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Sets the time scale multiplier; negative values are treated as 0
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.max(0.0);
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }
}

impl Default for ActionRunner {
    fn default() -> Self {
        Self {
            tick_count: 0,
            elapsed: 0.0,
            time_scale: 1.0,
            paused: false,
            next_id: 0,
            actions: Vec::new(),
            stopped: Vec::new(),
        }
    }
}
