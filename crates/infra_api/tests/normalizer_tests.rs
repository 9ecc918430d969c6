//! Property tests for response and failure normalization

use infra_api::{decode_body, normalize_response, RequestFailure, ResponseEnvelope, FALLBACK_MESSAGE};
use proptest::prelude::*;
use serde_json::{json, Value};
use test_utils::{
    blank_message_strategy, error_status_strategy, json_object_strategy, json_value_strategy,
    message_strategy,
};

#[test]
fn test_absent_and_null_bodies_normalize_to_none() {
    assert_eq!(normalize_response(None), None);
    assert_eq!(normalize_response(Some(Value::Null)), None);
}

#[test]
fn test_wrapped_with_null_data_is_null_payload() {
    let body = json!({ "success": true, "data": null });
    assert_eq!(normalize_response(Some(body)), Some(Value::Null));
}

#[test]
fn test_success_flag_must_be_boolean() {
    let body = json!({ "success": "yes", "data": { "x": 1 } });
    assert_eq!(normalize_response(Some(body.clone())), Some(body));
}

#[test]
fn test_plain_text_error_body() {
    let failure = RequestFailure::from_response(500, decode_body("Internal Server Error"));
    assert_eq!(failure.message(), "Internal Server Error");
}

#[test]
fn test_failure_without_anything_uses_fallback() {
    assert_eq!(RequestFailure::default().message(), FALLBACK_MESSAGE);
}

proptest! {
    #[test]
    fn wrapped_bodies_yield_their_data(success in any::<bool>(), data in json_value_strategy()) {
        let body = json!({ "success": success, "message": "note", "data": data.clone() });
        prop_assert_eq!(normalize_response(Some(body)), Some(data));
    }

    #[test]
    fn messaged_bodies_are_their_own_payload(
        message in message_strategy(),
        payload in json_value_strategy(),
    ) {
        let body = json!({ "successMessage": message, "policyDTO": payload });
        prop_assert_eq!(normalize_response(Some(body.clone())), Some(body));
    }

    #[test]
    fn objects_without_envelope_keys_pass_through(
        entries in proptest::collection::btree_map("[a-z]{3,8}", json_value_strategy(), 0..4)
    ) {
        let body = Value::Object(entries.into_iter().collect());
        prop_assume!(body.get("success").is_none() && body.get("successMessage").is_none());
        prop_assert_eq!(normalize_response(Some(body.clone())), Some(body));
    }

    #[test]
    fn classification_never_panics(body in json_object_strategy()) {
        let envelope = ResponseEnvelope::classify(body);
        let _ = envelope.rejection();
        let _ = envelope.success_message();
        let _ = envelope.into_payload();
    }

    #[test]
    fn failure_message_is_never_empty(
        status in proptest::option::of(error_status_strategy()),
        body in proptest::option::of(json_value_strategy()),
    ) {
        let failure = RequestFailure {
            status,
            body,
            transport_message: None,
        };
        prop_assert!(!failure.message().trim().is_empty());
    }

    #[test]
    fn failure_message_key_wins(
        status in error_status_strategy(),
        failure in message_strategy(),
        other in message_strategy(),
    ) {
        let body = json!({ "failureMessage": failure.clone(), "message": other });
        prop_assert_eq!(RequestFailure::from_response(status, Some(body)).message(), failure);
    }

    #[test]
    fn blank_failure_message_falls_through(
        status in error_status_strategy(),
        blank in blank_message_strategy(),
        message in message_strategy(),
    ) {
        let body = json!({ "failureMessage": blank, "message": message.clone() });
        prop_assert_eq!(RequestFailure::from_response(status, Some(body)).message(), message);
    }

    #[test]
    fn status_is_reported_when_body_is_silent(status in error_status_strategy()) {
        let failure = RequestFailure::from_response(status, None);
        prop_assert_eq!(failure.message(), format!("Request failed with status code {}", status));
    }
}
