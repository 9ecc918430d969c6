//! Policy form draft
//!
//! The policy number is generated server-side, so the draft only carries
//! the premium and the three selections.

use validator::Validate;

use core_kernel::{CoverageId, CustomerId, IdParseError, PolicyTypeId, Premium};

use crate::error::PolicyError;
use crate::policy::NewPolicy;

/// Wire names of the editable fields, in form order
pub const POLICY_FIELDS: [&str; 4] = ["customerId", "coverageId", "policyTypeId", "premium"];

/// Editable policy fields as entered
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct PolicyDraft {
    #[validate(length(min = 1))]
    pub premium: String,
    #[validate(length(min = 1))]
    pub coverage_id: String,
    #[validate(length(min = 1))]
    pub policy_type_id: String,
    #[validate(length(min = 1))]
    pub customer_id: String,
}

impl PolicyDraft {
    /// Sets a field by its wire name
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> Result<(), PolicyError> {
        let slot = match field {
            "premium" => &mut self.premium,
            "coverageId" => &mut self.coverage_id,
            "policyTypeId" => &mut self.policy_type_id,
            "customerId" => &mut self.customer_id,
            other => return Err(PolicyError::UnknownField(other.to_string())),
        };
        *slot = value.into();
        Ok(())
    }

    /// Reads a field by its wire name
    pub fn get(&self, field: &str) -> Option<&str> {
        let value = match field {
            "premium" => &self.premium,
            "coverageId" => &self.coverage_id,
            "policyTypeId" => &self.policy_type_id,
            "customerId" => &self.customer_id,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Checks that every field is filled in
    pub fn check_required(&self) -> Result<(), PolicyError> {
        self.validate().map_err(|errors| {
            let mut missing: Vec<String> = errors
                .field_errors()
                .keys()
                .map(|k| k.to_string())
                .collect();
            missing.sort();
            PolicyError::MissingFields(missing)
        })
    }

    /// Converts the draft into a create payload
    pub fn to_new_policy(&self) -> Result<NewPolicy, PolicyError> {
        self.check_required()?;

        Ok(NewPolicy {
            premium: self.premium.parse::<Premium>()?,
            coverage_id: self
                .coverage_id
                .parse::<CoverageId>()
                .map_err(|e| invalid("coverageId", e))?,
            policy_type_id: self
                .policy_type_id
                .parse::<PolicyTypeId>()
                .map_err(|e| invalid("policyTypeId", e))?,
            customer_id: self
                .customer_id
                .parse::<CustomerId>()
                .map_err(|e| invalid("customerId", e))?,
        })
    }

    /// Clears every field
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn invalid(field: &'static str, err: IdParseError) -> PolicyError {
    PolicyError::invalid(field, err.to_string())
}
