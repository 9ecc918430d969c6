//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use chrono::{NaiveDate, NaiveDateTime};
use core_kernel::{
    CityId, CoverageId, CustomerId, OccupationId, PolicyId, PolicyTypeId,
};
use domain_customer::{Customer, Gender};
use domain_policy::Policy;
use rust_decimal::Decimal;

use crate::fixtures::{CustomerFixtures, PolicyFixtures};

/// Builder for customer records
pub struct TestCustomerBuilder {
    customer: Customer,
}

impl Default for TestCustomerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestCustomerBuilder {
    /// Starts from the Asha fixture
    pub fn new() -> Self {
        Self {
            customer: CustomerFixtures::asha(),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.customer.customer_id = CustomerId::new(id);
        self
    }

    pub fn with_name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.customer.first_name = first.into();
        self.customer.last_name = last.into();
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.customer.gender = gender;
        self
    }

    pub fn with_dob(mut self, dob: NaiveDate) -> Self {
        self.customer.dob = dob;
        self
    }

    pub fn with_mobile(mut self, mobile: impl Into<String>) -> Self {
        self.customer.mobile_number = mobile.into();
        self
    }

    /// Sets the city, optionally with the joined display name
    pub fn with_city(mut self, id: i64, name: Option<&str>) -> Self {
        self.customer.city_id = CityId::new(id);
        self.customer.city_name = name.map(str::to_string);
        self
    }

    pub fn with_occupation(mut self, id: i64) -> Self {
        self.customer.occupation_id = OccupationId::new(id);
        self
    }

    pub fn build(self) -> Customer {
        self.customer
    }
}

/// Builder for policy records
pub struct TestPolicyBuilder {
    policy: Policy,
}

impl Default for TestPolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPolicyBuilder {
    /// Starts from the health policy fixture
    pub fn new() -> Self {
        Self {
            policy: PolicyFixtures::health_policy(),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.policy.policy_id = PolicyId::new(id);
        self
    }

    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.policy.policy_number = number.into();
        self
    }

    pub fn with_premium(mut self, amount: Decimal) -> Self {
        self.policy.premium = amount;
        self
    }

    pub fn with_customer(mut self, id: i64) -> Self {
        self.policy.customer_id = CustomerId::new(id);
        self
    }

    pub fn with_coverage(mut self, id: i64) -> Self {
        self.policy.coverage_id = CoverageId::new(id);
        self
    }

    pub fn with_policy_type(mut self, id: i64) -> Self {
        self.policy.policy_type_id = PolicyTypeId::new(id);
        self
    }

    pub fn with_created_date(mut self, created: Option<NaiveDateTime>) -> Self {
        self.policy.created_date = created;
        self
    }

    pub fn build(self) -> Policy {
        self.policy
    }
}
