//! Plan validation: load, classify, decide

use log::info;
use std::path::Path;
use std::process::ExitCode;

use crate::error::PlanError;
use crate::plan::ChangePlan;
use crate::policy::{Violation, find_violations};

/// Outcome of validating a readable plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// No protected resource is deleted or replaced
    Success,
    /// Protected resources scheduled for deletion or replacement, in plan order
    Violations(Vec<Violation>),
}

/// Process-level result of a validation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictCode {
    Success = 0,
    ViolationsFound = 1,
    InputError = 2,
}

impl VerdictCode {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<VerdictCode> for ExitCode {
    fn from(code: VerdictCode) -> Self {
        ExitCode::from(code.code())
    }
}

impl Verdict {
    pub fn code(&self) -> VerdictCode {
        match self {
            Self::Success => VerdictCode::Success,
            Self::Violations(_) => VerdictCode::ViolationsFound,
        }
    }

    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::Success => &[],
            Self::Violations(v) => v,
        }
    }
}

/// Validates plans against one protected address prefix
#[derive(Debug, Clone)]
pub struct Validator {
    address_prefix: String,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(crate::DEFAULT_ADDRESS_PREFIX)
    }
}

impl Validator {
    pub fn new(address_prefix: impl Into<String>) -> Self {
        Self {
            address_prefix: address_prefix.into(),
        }
    }

    /// Validate an already parsed plan
    pub fn check(&self, plan: &ChangePlan) -> Verdict {
        let violations = find_violations(plan, &self.address_prefix);
        info!(
            "Checked {} resource changes against prefix '{}': {} violations",
            plan.resource_changes.len(),
            self.address_prefix,
            violations.len()
        );
        if violations.is_empty() {
            Verdict::Success
        } else {
            Verdict::Violations(violations)
        }
    }

    /// Load the plan at `plan_path` and validate it
    pub fn validate(&self, plan_path: impl AsRef<Path>) -> Result<Verdict, PlanError> {
        let plan = ChangePlan::load(plan_path)?;
        Ok(self.check(&plan))
    }
}

/// Validate the plan at `plan_path`, folding input errors into the verdict code
pub fn validate(plan_path: impl AsRef<Path>, address_prefix: &str) -> VerdictCode {
    match Validator::new(address_prefix).validate(plan_path) {
        Ok(verdict) => verdict.code(),
        Err(_) => VerdictCode::InputError,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const PREFIX: &str = crate::DEFAULT_ADDRESS_PREFIX;

    fn write_plan(temp: &TempDir, content: &str) -> std::path::PathBuf {
        let path = temp.path().join("plan.json");
        fs::write(&path, content).unwrap();
        path
    }

    fn single(address: &str, actions: &str) -> String {
        format!(r#"{{"resource_changes": [{{"address": "{}", "change": {{"actions": {}}}}}]}}"#, address, actions)
    }

    #[test]
    fn test_empty_plan_succeeds() {
        let temp = TempDir::new().unwrap();
        let path = write_plan(&temp, r#"{"resource_changes": []}"#);

        assert_eq!(validate(&path, PREFIX), VerdictCode::Success);
    }

    #[test]
    fn test_delete_of_data_disk_fails() {
        let temp = TempDir::new().unwrap();
        let path = write_plan(&temp, &single("google_compute_disk.data_primary", r#"["delete"]"#));

        let verdict = Validator::default().validate(&path).unwrap();
        assert_eq!(verdict.code(), VerdictCode::ViolationsFound);
        assert_eq!(verdict.violations()[0].address, "google_compute_disk.data_primary");
        assert_eq!(verdict.violations()[0].actions, vec!["delete"]);
    }

    #[test]
    fn test_replace_of_data_disk_fails() {
        let temp = TempDir::new().unwrap();
        let path = write_plan(&temp, &single("google_compute_disk.data_primary", r#"["delete", "create"]"#));

        assert_eq!(validate(&path, PREFIX), VerdictCode::ViolationsFound);
    }

    #[test]
    fn test_update_of_data_disk_succeeds() {
        let temp = TempDir::new().unwrap();
        let path = write_plan(&temp, &single("google_compute_disk.data_primary", r#"["update"]"#));

        assert_eq!(validate(&path, PREFIX), VerdictCode::Success);
    }

    #[test]
    fn test_delete_of_unprotected_disk_succeeds() {
        let temp = TempDir::new().unwrap();
        let path = write_plan(&temp, &single("google_compute_disk.other_log", r#"["delete"]"#));

        assert_eq!(validate(&path, PREFIX), VerdictCode::Success);
    }

    #[test]
    fn test_missing_file_is_input_error() {
        let temp = TempDir::new().unwrap();

        assert_eq!(validate(temp.path().join("missing.json"), PREFIX), VerdictCode::InputError);
    }

    #[test]
    fn test_invalid_json_is_input_error() {
        let temp = TempDir::new().unwrap();
        let path = write_plan(&temp, "resource_changes: [");

        assert_eq!(validate(&path, PREFIX), VerdictCode::InputError);
    }

    #[test]
    fn test_validation_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let path = write_plan(
            &temp,
            r#"{"resource_changes": [
                {"address": "google_compute_disk.data_b", "change": {"actions": ["delete"]}},
                {"address": "google_compute_disk.data_a", "change": {"actions": ["create", "delete"]}}
            ]}"#,
        );
        let validator = Validator::default();

        let first = validator.validate(&path).unwrap();
        let second = validator.validate(&path).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.violations().len(), 2);
        assert_eq!(first.violations()[0].address, "google_compute_disk.data_b");
    }

    #[test]
    fn test_verdict_codes() {
        assert_eq!(VerdictCode::Success.code(), 0);
        assert_eq!(VerdictCode::ViolationsFound.code(), 1);
        assert_eq!(VerdictCode::InputError.code(), 2);
    }
}
