//! Property-Based Test Generators
//!
//! Provides proptest strategies for backend replies and the records inside
//! them.

use chrono::NaiveDate;
use core_kernel::{CityId, CountryId, CustomerId, OccupationId, Premium, StateId};
use domain_customer::{Customer, Gender};
use proptest::prelude::*;
use rust_decimal::Decimal;
use serde_json::{Map, Value};

/// Strategy for arbitrary JSON values, nested up to a few levels
pub fn json_value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[a-zA-Z0-9 ]{0,12}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            proptest::collection::btree_map("[a-zA-Z]{1,8}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

/// Strategy for JSON objects, including ones that use envelope keys
pub fn json_object_strategy() -> impl Strategy<Value = Value> {
    let key = prop_oneof![
        Just("success".to_string()),
        Just("data".to_string()),
        Just("message".to_string()),
        Just("successMessage".to_string()),
        Just("failureMessage".to_string()),
        "[a-zA-Z]{1,8}",
    ];
    proptest::collection::btree_map(key, json_value_strategy(), 0..5)
        .prop_map(|m| Value::Object(m.into_iter().collect()))
}

/// Strategy for messages that are blank or whitespace only
pub fn blank_message_strategy() -> impl Strategy<Value = String> {
    "[ \t\n]{0,4}"
}

/// Strategy for messages with at least one visible character
pub fn message_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 .,!]{0,30}"
}

/// Strategy for HTTP error statuses
pub fn error_status_strategy() -> impl Strategy<Value = u16> {
    prop_oneof![400u16..500u16, 500u16..600u16]
}

/// Strategy for premiums between 0.01 and 1,000,000.00
pub fn premium_strategy() -> impl Strategy<Value = Premium> {
    (1i64..100_000_000i64).prop_map(|minor| {
        Premium::new(Decimal::new(minor, 2)).expect("generated premium is positive")
    })
}

/// Strategy for customer records
pub fn customer_strategy() -> impl Strategy<Value = Customer> {
    (
        1i64..100_000,
        "[A-Z][a-z]{1,10}",
        "[A-Z][a-z]{1,10}",
        prop_oneof![Just(Gender::Male), Just(Gender::Female), Just(Gender::Other)],
        0i64..20_000,
        "[6-9][0-9]{9}",
        (1i64..9, 1i64..9, 1i64..9, 1i64..7),
    )
        .prop_map(|(id, first, last, gender, days, mobile, (city, state, country, occupation))| {
            let epoch = NaiveDate::from_ymd_opt(1950, 1, 1).expect("valid date");
            Customer {
                customer_id: CustomerId::new(id),
                first_name: first,
                last_name: last,
                gender,
                dob: epoch + chrono::Duration::days(days),
                mobile_number: mobile,
                city_id: CityId::new(city),
                city_name: None,
                state_id: StateId::new(state),
                country_id: CountryId::new(country),
                occupation_id: OccupationId::new(occupation),
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_customer::CustomerDraft;

    proptest! {
        #[test]
        fn generated_objects_are_objects(value in json_object_strategy()) {
            prop_assert!(value.is_object());
        }

        #[test]
        fn blank_messages_are_blank(msg in blank_message_strategy()) {
            prop_assert!(msg.trim().is_empty());
        }

        #[test]
        fn messages_are_not_blank(msg in message_strategy()) {
            prop_assert!(!msg.trim().is_empty());
        }

        #[test]
        fn draft_preserves_every_editable_field(customer in customer_strategy()) {
            let draft = CustomerDraft::from_customer(&customer);
            prop_assert_eq!(draft.to_customer(customer.customer_id).unwrap(), customer);
        }

        #[test]
        fn premiums_are_positive(premium in premium_strategy()) {
            prop_assert!(premium.amount() > Decimal::ZERO);
        }
    }
}
