//! Core invariant check trait and types

use std::time::Duration;

use crate::camera::Camera;

/// Status of an invariant check, ordered from best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CheckStatus {
    Pass,
    /// Holds, but something about the configuration is suspicious
    Warn,
    Fail,
}

impl CheckStatus {
    /// Returns true if the invariant holds (Pass or Warn)
    pub fn is_ok(&self) -> bool {
        *self != CheckStatus::Fail
    }

    pub fn is_fail(&self) -> bool {
        *self == CheckStatus::Fail
    }

    pub fn label(&self) -> &'static str {
        match self {
            CheckStatus::Pass => "PASS",
            CheckStatus::Warn => "WARN",
            CheckStatus::Fail => "FAIL",
        }
    }

    /// Returns the label colored by severity
    pub fn as_colored_str(&self) -> String {
        use colored::Colorize;
        let label = self.label();
        match self {
            CheckStatus::Pass => label.green().to_string(),
            CheckStatus::Warn => label.yellow().to_string(),
            CheckStatus::Fail => label.red().bold().to_string(),
        }
    }
}

/// Result of an invariant check
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub status: CheckStatus,
    /// Brief message describing the result
    pub message: String,
    /// Optional per-sample breakdown
    pub details: Option<String>,
    pub duration: Duration,
}

impl CheckResult {
    fn with_status(status: CheckStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            details: None,
            duration: Duration::ZERO,
        }
    }

    pub fn pass(message: impl Into<String>) -> Self {
        Self::with_status(CheckStatus::Pass, message)
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self::with_status(CheckStatus::Warn, message)
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self::with_status(CheckStatus::Fail, message)
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

/// A property every camera must satisfy, checked against one camera
///
/// Checks only read the camera; any probing happens on a clone.
pub trait InvariantCheck {
    fn name(&self) -> &'static str;

    fn check(&self, camera: &Camera) -> CheckResult;

    fn description(&self) -> Option<&'static str> {
        None
    }
}

/// Tolerance for comparing lengths of magnitude `scale`
pub(crate) fn tolerance(scale: f32) -> f32 {
    1e-4 * scale.abs().max(1.0)
}
