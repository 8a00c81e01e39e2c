//! Clamping the same request twice gives the same state

use crate::audit::check::{CheckResult, InvariantCheck};
use crate::camera::Camera;

/// Probes a clone of the camera with positions inside, on and outside the world edges
pub struct ClampIdempotenceCheck;

impl ClampIdempotenceCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ClampIdempotenceCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl InvariantCheck for ClampIdempotenceCheck {
    fn name(&self) -> &'static str {
        "Clamp Idempotence"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Repeating a setter with the same input is a no-op")
    }

    fn check(&self, camera: &Camera) -> CheckResult {
        let world = camera.world_bounds();
        let reach = world.size() * 2.0;
        let probes = [
            world.min,
            world.max,
            world.center(),
            world.min - reach,
            world.max + reach,
        ];

        let mut probe = camera.clone();
        let mut mismatches = Vec::new();

        for p in probes {
            probe.set_position_in_world(p);
            let first = probe.state();
            probe.set_position_in_world(p);
            if probe.state() != first {
                mismatches.push(format!("  position {p:?}: {first:?} then {:?}", probe.state()));
            }
        }

        for zoom in [0.0, camera.min_zoom(), camera.max_zoom(), f32::MAX] {
            probe.set_zoom_scale(zoom);
            let first = probe.state();
            probe.set_zoom_scale(zoom);
            if probe.state() != first {
                mismatches.push(format!("  zoom {zoom}: {first:?} then {:?}", probe.state()));
            }
        }

        if mismatches.is_empty() {
            CheckResult::pass("setters are idempotent")
        } else {
            CheckResult::fail(format!("{} probe(s) drifted", mismatches.len()))
                .with_details(mismatches.join("\n"))
        }
    }
}
