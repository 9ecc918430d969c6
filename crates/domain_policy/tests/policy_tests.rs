//! Policy draft and wire format tests

use domain_policy::{Policy, PolicyDraft, PolicyError, POLICY_FIELDS};
use rust_decimal_macros::dec;
use serde_json::json;

use core_kernel::{CoverageId, CustomerId, PolicyTypeId};

#[test]
fn test_draft_converts_to_create_payload() {
    let mut draft = PolicyDraft::default();
    for (field, value) in POLICY_FIELDS.iter().zip(["3", "1", "2", "100"]) {
        draft.set(field, value).unwrap();
    }

    let new = draft.to_new_policy().unwrap();
    assert_eq!(new.customer_id, CustomerId::new(3));
    assert_eq!(new.coverage_id, CoverageId::new(1));
    assert_eq!(new.policy_type_id, PolicyTypeId::new(2));
    assert_eq!(new.premium.amount(), dec!(100));

    let body = serde_json::to_value(&new).unwrap();
    assert!(body.get("policyNumber").is_none());
    assert_eq!(body["coverageId"], 1);
}

#[test]
fn test_presence_checked_before_premium() {
    let mut draft = PolicyDraft::default();
    draft.set("premium", "-5").unwrap();
    assert!(matches!(draft.to_new_policy(), Err(PolicyError::MissingFields(_))));
}

#[test]
fn test_negative_premium_rejected() {
    let mut draft = PolicyDraft::default();
    for (field, value) in POLICY_FIELDS.iter().zip(["3", "1", "2", "-5"]) {
        draft.set(field, value).unwrap();
    }
    assert!(matches!(draft.to_new_policy(), Err(PolicyError::InvalidPremium(_))));
}

#[test]
fn test_policy_reads_minimal_backend_record() {
    let policy: Policy = serde_json::from_value(json!({
        "policyId": 9,
        "policyNumber": "PN-9",
        "premium": 100,
        "customerId": 3,
        "coverageId": 1,
        "policyTypeId": 2
    }))
    .unwrap();

    assert_eq!(policy.policy_number, "PN-9");
    assert!(policy.created_date.is_none());
}
