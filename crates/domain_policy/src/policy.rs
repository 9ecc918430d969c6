//! Policy transfer objects

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use core_kernel::{CoverageId, CustomerId, PolicyId, PolicyTypeId, Premium};

/// A policy as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    pub policy_id: PolicyId,
    /// Generated by the backend, never supplied by the client
    pub policy_number: String,
    /// Stored as the backend has it; only new policies are checked for a
    /// positive premium
    pub premium: Decimal,
    pub customer_id: CustomerId,
    pub coverage_id: CoverageId,
    pub policy_type_id: PolicyTypeId,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_date: Option<NaiveDateTime>,
}

/// Payload for creating a policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPolicy {
    pub premium: Premium,
    pub coverage_id: CoverageId,
    pub policy_type_id: PolicyTypeId,
    pub customer_id: CustomerId,
}

/// Accepts RFC 3339, naive date-times and plain dates
///
/// The backend serialises its creation timestamp without a fixed format;
/// unreadable values become `None` rather than failing the whole list.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_timestamp))
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.naive_utc());
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(ts);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
