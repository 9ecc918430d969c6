//! Coverage and policy type lookups
//!
//! Both lists are read-only and fetched from the backend each time the
//! policy form mounts.

use serde::{Deserialize, Serialize};

use core_kernel::{CoverageId, PolicyTypeId};

/// A coverage option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coverage {
    pub coverage_id: CoverageId,
    pub coverage_name: String,
}

/// A policy type option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyType {
    pub type_id: PolicyTypeId,
    pub type_name: String,
}
