//! World/screen transforms are mutual inverses

use glam::Vec2;

use crate::audit::check::{CheckResult, InvariantCheck, tolerance};
use crate::camera::Camera;

pub struct RoundTripCheck;

impl RoundTripCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RoundTripCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl InvariantCheck for RoundTripCheck {
    fn name(&self) -> &'static str {
        "Transform Round Trip"
    }

    fn description(&self) -> Option<&'static str> {
        Some("screen_to_world and world_to_screen invert each other")
    }

    fn check(&self, camera: &Camera) -> CheckResult {
        let world = camera.world_bounds();
        let viewport = camera.viewport_size();
        let tol = tolerance(world.size().max_element().max(viewport.max_element()));

        let world_samples = [
            world.min,
            world.max,
            Vec2::new(world.min.x, world.max.y),
            Vec2::new(world.max.x, world.min.y),
            world.center(),
        ];
        let screen_samples = [Vec2::ZERO, viewport, viewport / 2.0, Vec2::new(viewport.x, 0.0)];

        let mut worst = 0.0_f32;
        for p in world_samples {
            worst = worst.max((camera.screen_to_world(camera.world_to_screen(p)) - p).length());
        }
        for s in screen_samples {
            worst = worst.max((camera.world_to_screen(camera.screen_to_world(s)) - s).length());
        }

        let details = format!(
            "  samples: {}\n  worst error: {worst:e}\n  tolerance: {tol:e}",
            world_samples.len() + screen_samples.len()
        );
        if worst <= tol {
            CheckResult::pass(format!("worst error {worst:.2e}")).with_details(details)
        } else {
            CheckResult::fail(format!("worst error {worst:.2e} exceeds {tol:.2e}")).with_details(details)
        }
    }
}
