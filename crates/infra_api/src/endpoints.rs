//! Backend endpoint table
//!
//! What is decided once per endpoint: method, path, the payload field the
//! record lives under, and whether a missing field means "empty list" or
//! "record not found". Envelope shape is not decided here; every endpoint
//! accepts all three shapes.

use crate::transport::HttpMethod;

/// How an endpoint's payload field is read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// A collection; a missing field degrades to an empty list
    List,
    /// A single record; a missing field fails with `missing`
    Item { missing: &'static str },
}

/// One backend operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub name: &'static str,
    pub method: HttpMethod,
    /// Path template; `{id}` is substituted for item routes
    pub path: &'static str,
    pub field: &'static str,
    pub cardinality: Cardinality,
}

impl Endpoint {
    /// Renders the path, substituting the id when the template has one
    pub fn path_for(&self, id: Option<i64>) -> String {
        match id {
            Some(id) => self.path.replace("{id}", &id.to_string()),
            None => self.path.to_string(),
        }
    }
}

pub const LIST_CITIES: Endpoint = Endpoint {
    name: "list_cities",
    method: HttpMethod::Get,
    path: "/api/cities",
    field: "cityListDTO",
    cardinality: Cardinality::List,
};

pub const LIST_CUSTOMERS: Endpoint = Endpoint {
    name: "list_customers",
    method: HttpMethod::Get,
    path: "/api/customers",
    field: "customerListDTO",
    cardinality: Cardinality::List,
};

pub const GET_CUSTOMER: Endpoint = Endpoint {
    name: "get_customer",
    method: HttpMethod::Get,
    path: "/api/customers/{id}",
    field: "customerDTO",
    cardinality: Cardinality::Item {
        missing: "Customer data not found in response.",
    },
};

pub const CREATE_CUSTOMER: Endpoint = Endpoint {
    name: "create_customer",
    method: HttpMethod::Post,
    path: "/api/customers",
    field: "customerDTO",
    cardinality: Cardinality::Item {
        missing: "Created customer data not found in response.",
    },
};

pub const UPDATE_CUSTOMER: Endpoint = Endpoint {
    name: "update_customer",
    method: HttpMethod::Put,
    path: "/api/customers/{id}",
    field: "customerDTO",
    cardinality: Cardinality::Item {
        missing: "Updated customer data not found in response.",
    },
};

pub const LIST_COVERAGES: Endpoint = Endpoint {
    name: "list_coverages",
    method: HttpMethod::Get,
    path: "/api/coverages",
    field: "coverageListDTO",
    cardinality: Cardinality::List,
};

pub const LIST_POLICY_TYPES: Endpoint = Endpoint {
    name: "list_policy_types",
    method: HttpMethod::Get,
    path: "/api/policy-types",
    field: "policyTypeListDTO",
    cardinality: Cardinality::List,
};

pub const LIST_POLICIES: Endpoint = Endpoint {
    name: "list_policies",
    method: HttpMethod::Get,
    path: "/api/policies",
    field: "policyListDTO",
    cardinality: Cardinality::List,
};

pub const GET_POLICY: Endpoint = Endpoint {
    name: "get_policy",
    method: HttpMethod::Get,
    path: "/api/policies/{id}",
    field: "policyDTO",
    cardinality: Cardinality::Item {
        missing: "Policy data not found in response.",
    },
};

pub const CREATE_POLICY: Endpoint = Endpoint {
    name: "create_policy",
    method: HttpMethod::Post,
    path: "/api/policies",
    field: "policyDTO",
    cardinality: Cardinality::Item {
        missing: "Created policy data not found in response.",
    },
};

/// Every endpoint the client knows
pub const ALL: [&Endpoint; 10] = [
    &LIST_CITIES,
    &LIST_CUSTOMERS,
    &GET_CUSTOMER,
    &CREATE_CUSTOMER,
    &UPDATE_CUSTOMER,
    &LIST_COVERAGES,
    &LIST_POLICY_TYPES,
    &LIST_POLICIES,
    &GET_POLICY,
    &CREATE_POLICY,
];
