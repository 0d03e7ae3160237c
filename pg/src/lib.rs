//! PlanGuard - protected data disk guard for infrastructure plans
//!
//! Reads the JSON rendering of a planned infrastructure change and fails when
//! any resource whose address starts with the protected prefix is scheduled
//! for deletion or for a destroy-and-recreate replacement.
//!
//! # Input
//!
//! ```text
//! {
//!   "resource_changes": [
//!     { "address": "google_compute_disk.data_primary",
//!       "change": { "actions": ["delete", "create"] } }
//!   ]
//! }
//! ```
//!
//! # Example
//!
//! ```ignore
//! use planguard::{Validator, Verdict};
//!
//! let validator = Validator::new(planguard::DEFAULT_ADDRESS_PREFIX);
//! match validator.validate("plan.json")? {
//!     Verdict::Success => println!("safe"),
//!     Verdict::Violations(v) => eprintln!("{} unsafe changes", v.len()),
//! }
//! ```

pub mod cli;
pub mod config;
mod error;
mod plan;
mod policy;
pub mod report;
mod validator;

pub use error::PlanError;
pub use plan::{Change, ChangePlan, ResourceChange};
pub use policy::{Violation, find_violations, is_unsafe};
pub use validator::{Validator, Verdict, VerdictCode, validate};

/// Address prefix marking persistent data disks
pub const DEFAULT_ADDRESS_PREFIX: &str = "google_compute_disk.data_";
