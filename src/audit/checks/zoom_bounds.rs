//! Zoom stays between the derived minimum and the configured maximum

use crate::audit::check::{CheckResult, InvariantCheck, tolerance};
use crate::camera::Camera;

pub struct ZoomBoundsCheck;

impl ZoomBoundsCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ZoomBoundsCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl InvariantCheck for ZoomBoundsCheck {
    fn name(&self) -> &'static str {
        "Zoom Bounds"
    }

    fn description(&self) -> Option<&'static str> {
        Some("min_zoom <= zoom_scale <= max_zoom")
    }

    fn check(&self, camera: &Camera) -> CheckResult {
        let zoom = camera.zoom_scale();
        let min = camera.min_zoom();
        let max = camera.max_zoom();
        let ceiling = max.max(min);
        let tol = tolerance(ceiling);

        let details = format!("  zoom: {zoom}\n  min_zoom: {min}\n  max_zoom: {max}");

        if zoom < min - tol || zoom > ceiling + tol {
            return CheckResult::fail(format!("zoom {zoom:.4} outside [{min:.4}, {ceiling:.4}]"))
                .with_details(details);
        }
        if max < min {
            return CheckResult::warn(format!(
                "max zoom {max:.4} is below min zoom {min:.4}; camera is pinned at min zoom"
            ))
            .with_details(details);
        }

        CheckResult::pass(format!("zoom {zoom:.4} within [{min:.4}, {max:.4}]")).with_details(details)
    }
}
