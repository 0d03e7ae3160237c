//! Change plan document model and loading

use log::debug;
use serde::{Deserialize, Deserializer};
use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

use crate::error::PlanError;

/// Root of a planned infrastructure change
///
/// Only `resource_changes` is read; every other key of the document is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ChangePlan {
    #[serde(default, deserialize_with = "null_as_default")]
    pub resource_changes: Vec<ResourceChange>,
}

/// One resource's planned transition
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResourceChange {
    /// Resource instance address, e.g. `google_compute_disk.data_primary`
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub change: Change,
}

/// The `change` block of a resource change
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Change {
    /// Action tokens in document order (`create`, `update`, `delete`, `no-op`, `read`)
    #[serde(default, deserialize_with = "null_as_default")]
    pub actions: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ResourceChange {
    /// Actions as a set; order and duplicates carry no meaning
    pub fn action_set(&self) -> BTreeSet<&str> {
        self.change.actions.iter().map(String::as_str).collect()
    }
}

impl ChangePlan {
    /// Load a plan from a JSON file
    ///
    /// A missing path is reported before any read is attempted. Read, encoding
    /// and syntax failures all surface as [`PlanError::Malformed`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PlanError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(PlanError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let malformed = |source| PlanError::Malformed {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(|e| malformed(serde_json::Error::io(e)))?;
        let plan: ChangePlan = serde_json::from_reader(BufReader::new(file)).map_err(malformed)?;

        debug!(
            "Loaded plan {} with {} resource changes",
            path.display(),
            plan.resource_changes.len()
        );
        Ok(plan)
    }
}

impl FromStr for ChangePlan {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}
