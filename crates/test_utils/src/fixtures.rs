//! Pre-built Test Fixtures
//!
//! Provides ready-to-use records and backend replies. Reply fixtures come in
//! the three envelope shapes the backend uses.

use chrono::{NaiveDate, NaiveDateTime};
use core_kernel::{
    CityId, CountryId, CoverageId, CustomerId, OccupationId, PolicyId, PolicyTypeId, StateId,
};
use domain_customer::{City, Customer, Gender, NewCustomer};
use domain_policy::{Coverage, Policy, PolicyType};
use rust_decimal_macros::dec;
use serde_json::{json, Value};

/// Fixture for customer records
pub struct CustomerFixtures;

impl CustomerFixtures {
    /// Customer 3, a Chennai engineer
    pub fn asha() -> Customer {
        Self::new_asha().with_id(CustomerId::new(3))
    }

    /// Asha as the create form submits her
    pub fn new_asha() -> NewCustomer {
        NewCustomer {
            first_name: "Asha".to_string(),
            last_name: "Raman".to_string(),
            gender: Gender::Female,
            dob: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            mobile_number: "9876543210".to_string(),
            city_id: CityId::new(1),
            state_id: StateId::new(1),
            country_id: CountryId::new(1),
            occupation_id: OccupationId::new(1),
        }
    }

    /// Customer 4, a Toronto teacher
    pub fn liam() -> Customer {
        Customer {
            customer_id: CustomerId::new(4),
            first_name: "Liam".to_string(),
            last_name: "Walsh".to_string(),
            gender: Gender::Male,
            dob: NaiveDate::from_ymd_opt(1984, 11, 2).unwrap(),
            mobile_number: "4165550199".to_string(),
            city_id: CityId::new(4),
            city_name: None,
            state_id: StateId::new(4),
            country_id: CountryId::new(4),
            occupation_id: OccupationId::new(3),
        }
    }
}

/// Fixture for lookup lists
pub struct CatalogFixtures;

impl CatalogFixtures {
    pub fn cities() -> Vec<City> {
        vec![
            City { city_id: CityId::new(1), city_name: "Chennai".to_string() },
            City { city_id: CityId::new(4), city_name: "Toronto".to_string() },
        ]
    }

    pub fn coverages() -> Vec<Coverage> {
        vec![
            Coverage { coverage_id: CoverageId::new(1), coverage_name: "Basic".to_string() },
            Coverage { coverage_id: CoverageId::new(2), coverage_name: "Comprehensive".to_string() },
        ]
    }

    pub fn policy_types() -> Vec<PolicyType> {
        vec![
            PolicyType { type_id: PolicyTypeId::new(1), type_name: "Health".to_string() },
            PolicyType { type_id: PolicyTypeId::new(2), type_name: "Motor".to_string() },
        ]
    }
}

/// Fixture for policy records
pub struct PolicyFixtures;

impl PolicyFixtures {
    /// Policy 7, held by customer 3
    pub fn health_policy() -> Policy {
        Policy {
            policy_id: PolicyId::new(7),
            policy_number: "POL-2024-000007".to_string(),
            premium: dec!(1500.00),
            customer_id: CustomerId::new(3),
            coverage_id: CoverageId::new(2),
            policy_type_id: PolicyTypeId::new(1),
            created_date: Some(Self::created_at()),
        }
    }

    pub fn created_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }
}

/// Fixture for backend response bodies
pub struct ResponseFixtures;

impl ResponseFixtures {
    /// `{ success: true, data: { <field>: <payload> } }`
    pub fn wrapped(field: &str, payload: Value) -> Value {
        json!({ "success": true, "message": "OK", "data": { field: payload } })
    }

    /// `{ successMessage, <field>: <payload> }`
    pub fn messaged(message: &str, field: &str, payload: Value) -> Value {
        json!({ "successMessage": message, field: payload })
    }

    /// `{ <field>: <payload> }`
    pub fn bare(field: &str, payload: Value) -> Value {
        json!({ field: payload })
    }

    pub fn failure(message: &str) -> Value {
        json!({ "failureMessage": message })
    }

    pub fn wrapped_customer_list(customers: &[Customer]) -> Value {
        Self::wrapped("customerListDTO", json!(customers))
    }

    pub fn wrapped_customer(customer: &Customer) -> Value {
        Self::wrapped("customerDTO", json!(customer))
    }

    pub fn city_list(cities: &[City]) -> Value {
        Self::bare("cityListDTO", json!(cities))
    }

    pub fn coverage_list(coverages: &[Coverage]) -> Value {
        Self::bare("coverageListDTO", json!(coverages))
    }

    pub fn policy_type_list(types: &[PolicyType]) -> Value {
        Self::bare("policyTypeListDTO", json!(types))
    }

    pub fn policy_list(policies: &[Policy]) -> Value {
        Self::wrapped("policyListDTO", json!(policies))
    }

    pub fn created_policy(policy: &Policy) -> Value {
        Self::messaged("Policy created", "policyDTO", json!(policy))
    }
}
