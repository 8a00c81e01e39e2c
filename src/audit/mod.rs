//! Invariant audits for cameras
//!
//! Runs a set of checks against a camera and reports which invariants hold.
//! Useful for:
//! - Validating a configured camera at startup
//! - Tests that drive a camera through many states
//! - Debugging clamp or resize behavior
//!
//! # Example
//!
//! ```no_run
//! use glam::Vec2;
//! use world_camera::Camera;
//! use world_camera::audit::{Auditor, checks::*};
//!
//! let camera = Camera::new(&Vec2::new(1000.0, 500.0), Vec2::new(400.0, 400.0)).unwrap();
//! let report = Auditor::new()
//!     .add_check(ZoomBoundsCheck::new())
//!     .add_check(ContainmentCheck::new())
//!     .run(&camera);
//!
//! if report.is_healthy() {
//!     println!("All invariants hold!");
//! }
//! ```

pub mod check;
pub mod checks;
pub mod reporter;
pub mod runner;

pub use check::{CheckResult, CheckStatus, InvariantCheck};
pub use reporter::{format_report, print_report};
pub use runner::{AuditEntry, AuditReport, Auditor};

use crate::camera::Camera;

/// Auditor preloaded with every built-in check
pub fn default_auditor() -> Auditor {
    Auditor::new()
        .add_check(checks::ZoomBoundsCheck::new())
        .add_check(checks::MinZoomCheck::new())
        .add_check(checks::ContainmentCheck::new())
        .add_check(checks::RoundTripCheck::new())
        .add_check(checks::ClampIdempotenceCheck::new())
}

/// Runs all built-in checks against `camera`
pub fn run_all_checks(camera: &Camera) -> AuditReport {
    default_auditor().run(camera)
}
