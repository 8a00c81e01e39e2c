//! Runs invariant checks against a camera and collects the results

use std::time::Instant;

use tracing::{debug, warn};

use super::check::{CheckResult, CheckStatus, InvariantCheck};
use crate::camera::Camera;

/// One check's outcome inside a report
#[derive(Debug, Clone)]
pub struct AuditEntry {
    pub name: &'static str,
    pub description: Option<&'static str>,
    pub result: CheckResult,
}

/// Results from running an audit
#[derive(Debug)]
pub struct AuditReport {
    /// Entries in the order the checks were registered
    pub entries: Vec<AuditEntry>,
    pub total: usize,
    pub passed: usize,
    pub warned: usize,
    pub failed: usize,
}

impl AuditReport {
    fn from_entries(entries: Vec<AuditEntry>) -> Self {
        let count = |status: CheckStatus| entries.iter().filter(|e| e.result.status == status).count();
        let (passed, warned, failed) = (
            count(CheckStatus::Pass),
            count(CheckStatus::Warn),
            count(CheckStatus::Fail),
        );

        Self {
            total: entries.len(),
            passed,
            warned,
            failed,
            entries,
        }
    }

    /// Returns true if no invariant was violated
    pub fn is_healthy(&self) -> bool {
        self.failed == 0
    }

    pub fn has_warnings(&self) -> bool {
        self.warned > 0
    }

    /// Most severe status in the report; an empty report passes
    pub fn worst_status(&self) -> CheckStatus {
        self.entries
            .iter()
            .map(|e| e.result.status)
            .max()
            .unwrap_or(CheckStatus::Pass)
    }

    /// Process exit code for this report
    /// 0 = all pass, 1 = any fail, 2 = any warn (but no fail)
    pub fn exit_code(&self) -> i32 {
        match self.worst_status() {
            CheckStatus::Pass => 0,
            CheckStatus::Fail => 1,
            CheckStatus::Warn => 2,
        }
    }

    pub fn result(&self, name: &str) -> Option<&CheckResult> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| &e.result)
    }
}

/// A reusable set of invariant checks
///
/// Unlike a one-shot runner, an auditor can be run against any number of cameras.
pub struct Auditor {
    checks: Vec<Box<dyn InvariantCheck>>,
}

impl Auditor {
    /// Creates an auditor with no checks
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    pub fn add_check<C: InvariantCheck + 'static>(mut self, check: C) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Runs every registered check against `camera`
    pub fn run(&self, camera: &Camera) -> AuditReport {
        let entries = self
            .checks
            .iter()
            .map(|check| {
                let start = Instant::now();
                let result = check.check(camera).with_duration(start.elapsed());

                if result.status.is_fail() {
                    warn!(check = check.name(), message = %result.message, "Invariant violated");
                } else {
                    debug!(check = check.name(), status = ?result.status, "Invariant checked");
                }

                AuditEntry {
                    name: check.name(),
                    description: check.description(),
                    result,
                }
            })
            .collect();

        AuditReport::from_entries(entries)
    }
}

impl Default for Auditor {
    fn default() -> Self {
        Self::new()
    }
}
