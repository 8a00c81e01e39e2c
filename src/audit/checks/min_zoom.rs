//! The minimum zoom matches the world/viewport ratio on the tighter axis

use crate::audit::check::{CheckResult, InvariantCheck};
use crate::camera::Camera;

pub struct MinZoomCheck;

impl MinZoomCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MinZoomCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl InvariantCheck for MinZoomCheck {
    fn name(&self) -> &'static str {
        "Min Zoom"
    }

    fn description(&self) -> Option<&'static str> {
        Some("min_zoom == max(viewport_w / world_w, viewport_h / world_h)")
    }

    fn check(&self, camera: &Camera) -> CheckResult {
        let ratio = camera.viewport_size() / camera.world_bounds().size();
        let expected = ratio.x.max(ratio.y);
        let actual = camera.min_zoom();

        if (actual - expected).abs() <= 1e-5 * expected {
            CheckResult::pass(format!("min zoom {actual:.4}"))
        } else {
            CheckResult::fail(format!("min zoom {actual:.4}, expected {expected:.4}"))
        }
    }
}
