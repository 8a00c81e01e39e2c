//! The visible rectangle never leaves the world

use crate::audit::check::{CheckResult, InvariantCheck, tolerance};
use crate::camera::Camera;

/// Checks each axis: inside the world, or centered when the view covers the whole axis
pub struct ContainmentCheck;

impl ContainmentCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ContainmentCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl InvariantCheck for ContainmentCheck {
    fn name(&self) -> &'static str {
        "Containment"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Visible world rect stays inside world bounds")
    }

    fn check(&self, camera: &Camera) -> CheckResult {
        let world = camera.world_bounds();
        let visible = camera.visible_world_rect();
        let mut details = Vec::new();
        let mut violations = 0;

        for (axis, label) in [(0, "x"), (1, "y")] {
            let world_extent = world.size()[axis];
            let visible_extent = visible.size()[axis];
            let tol = tolerance(world_extent);

            let held = if visible_extent >= world_extent - tol {
                let offset = (visible.center()[axis] - world.center()[axis]).abs();
                details.push(format!(
                    "  {label}: view covers world ({visible_extent:.2} >= {world_extent:.2}), center offset {offset:.4}"
                ));
                offset <= tol
            } else {
                details.push(format!(
                    "  {label}: visible [{:.2}, {:.2}] in world [{:.2}, {:.2}]",
                    visible.min[axis], visible.max[axis], world.min[axis], world.max[axis]
                ));
                visible.min[axis] >= world.min[axis] - tol && visible.max[axis] <= world.max[axis] + tol
            };

            if !held {
                violations += 1;
            }
        }

        let details = details.join("\n");
        if violations > 0 {
            CheckResult::fail(format!("visible rect escapes the world on {violations} axis(es)"))
                .with_details(details)
        } else {
            CheckResult::pass("visible rect inside world").with_details(details)
        }
    }
}
