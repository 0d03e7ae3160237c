//! Protected resource policy: which planned actions destroy data

use log::debug;
use serde::Serialize;
use std::collections::BTreeSet;

use crate::plan::ChangePlan;

const DELETE: &str = "delete";
const CREATE: &str = "create";

/// A protected resource scheduled for an unsafe action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub address: String,
    /// Actions in document order
    pub actions: Vec<String>,
}

/// Whether an action set deletes or replaces the resource
///
/// `{delete, create}` is the plan's representation of a replacement. It is
/// listed on its own even though any set holding `delete` already qualifies.
pub fn is_unsafe(actions: &BTreeSet<&str>) -> bool {
    let replace = BTreeSet::from([DELETE, CREATE]);
    actions.contains(DELETE) || *actions == replace
}

/// Collect unsafe changes to resources whose address starts with `prefix`
///
/// Violations come back in the order their records appear in the plan.
pub fn find_violations(plan: &ChangePlan, prefix: &str) -> Vec<Violation> {
    plan.resource_changes
        .iter()
        .filter(|rc| rc.address.starts_with(prefix))
        .filter(|rc| {
            let unsafe_change = is_unsafe(&rc.action_set());
            debug!("{} actions={:?} unsafe={}", rc.address, rc.change.actions, unsafe_change);
            unsafe_change
        })
        .map(|rc| Violation {
            address: rc.address.clone(),
            actions: rc.change.actions.clone(),
        })
        .collect()
}
