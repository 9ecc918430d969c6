//! Sales API client
//!
//! One method per backend operation. Each issues exactly one request,
//! classifies the response envelope, and reads the endpoint's payload
//! field. Failures of any kind come back as a `ClientError` whose message
//! is ready to show.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_api::{ClientConfig, SalesClient};
//!
//! let client = SalesClient::from_config(&ClientConfig::default())?;
//! for customer in client.list_customers().await? {
//!     println!("{}", customer.full_name());
//! }
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info_span, warn, Instrument};

use core_kernel::{CustomerId, PolicyId};
use domain_customer::{City, Customer, NewCustomer};
use domain_policy::{Coverage, NewPolicy, Policy, PolicyType};

use crate::config::ClientConfig;
use crate::endpoints::{self, Cardinality, Endpoint};
use crate::envelope::{decode_body, ResponseEnvelope};
use crate::error::{ClientError, ClientResult};
use crate::failure::RequestFailure;
use crate::http::HttpTransport;
use crate::transport::{ApiRequest, Transport};

/// A record the server just created, with its confirmation note
#[derive(Debug, Clone, PartialEq)]
pub struct Created<T> {
    pub record: T,
    /// The server's `successMessage`, when it sent one
    pub message: Option<String>,
}

/// Payload of a successful call, after envelope unwrapping
#[derive(Debug, Default)]
struct Reply {
    payload: Option<Value>,
    message: Option<String>,
}

/// Client for the insurance sales backend
#[derive(Clone)]
pub struct SalesClient {
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for SalesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SalesClient").finish_non_exhaustive()
    }
}

impl SalesClient {
    /// Creates a client over any transport
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Creates a client that talks HTTP to the configured backend
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::new(Arc::new(HttpTransport::new(config)?)))
    }

    // Customers

    pub async fn list_customers(&self) -> ClientResult<Vec<Customer>> {
        let reply = self.call(&endpoints::LIST_CUSTOMERS, None, None).await?;
        read_list(&endpoints::LIST_CUSTOMERS, reply)
    }

    pub async fn get_customer(&self, id: CustomerId) -> ClientResult<Customer> {
        let reply = self.call(&endpoints::GET_CUSTOMER, Some(id.value()), None).await?;
        read_item(&endpoints::GET_CUSTOMER, reply).map(|created| created.record)
    }

    pub async fn create_customer(&self, customer: &NewCustomer) -> ClientResult<Created<Customer>> {
        let body = to_body(customer)?;
        let reply = self.call(&endpoints::CREATE_CUSTOMER, None, Some(body)).await?;
        read_item(&endpoints::CREATE_CUSTOMER, reply)
    }

    /// Replaces the customer stored under `id` with `customer`
    ///
    /// The body always carries `id` as its `customerId`.
    pub async fn update_customer(&self, id: CustomerId, customer: &Customer) -> ClientResult<Customer> {
        let mut body = to_body(customer)?;
        if let Some(map) = body.as_object_mut() {
            map.insert("customerId".to_string(), Value::from(id.value()));
        }
        let reply = self.call(&endpoints::UPDATE_CUSTOMER, Some(id.value()), Some(body)).await?;
        read_item(&endpoints::UPDATE_CUSTOMER, reply).map(|updated| updated.record)
    }

    pub async fn list_cities(&self) -> ClientResult<Vec<City>> {
        let reply = self.call(&endpoints::LIST_CITIES, None, None).await?;
        read_list(&endpoints::LIST_CITIES, reply)
    }

    // Policies

    pub async fn list_policies(&self) -> ClientResult<Vec<Policy>> {
        let reply = self.call(&endpoints::LIST_POLICIES, None, None).await?;
        read_list(&endpoints::LIST_POLICIES, reply)
    }

    pub async fn get_policy(&self, id: PolicyId) -> ClientResult<Policy> {
        let reply = self.call(&endpoints::GET_POLICY, Some(id.value()), None).await?;
        read_item(&endpoints::GET_POLICY, reply).map(|created| created.record)
    }

    pub async fn create_policy(&self, policy: &NewPolicy) -> ClientResult<Created<Policy>> {
        let body = to_body(policy)?;
        let reply = self.call(&endpoints::CREATE_POLICY, None, Some(body)).await?;
        read_item(&endpoints::CREATE_POLICY, reply)
    }

    pub async fn list_coverages(&self) -> ClientResult<Vec<Coverage>> {
        let reply = self.call(&endpoints::LIST_COVERAGES, None, None).await?;
        read_list(&endpoints::LIST_COVERAGES, reply)
    }

    pub async fn list_policy_types(&self) -> ClientResult<Vec<PolicyType>> {
        let reply = self.call(&endpoints::LIST_POLICY_TYPES, None, None).await?;
        read_list(&endpoints::LIST_POLICY_TYPES, reply)
    }

    /// Sends one request and unwraps the envelope
    async fn call(
        &self,
        endpoint: &Endpoint,
        id: Option<i64>,
        body: Option<Value>,
    ) -> ClientResult<Reply> {
        let request = ApiRequest::new(endpoint.method, endpoint.path_for(id), body);
        let span = info_span!(
            "api_call",
            endpoint = endpoint.name,
            request_id = %request.id,
        );

        async move {
            debug!(method = %request.method, path = %request.path, "Sending request");

            let response = match self.transport.send(request).await {
                Ok(response) => response,
                Err(error) => {
                    let message = error.to_failure().message();
                    warn!(%error, "Request got no response");
                    return Err(ClientError::Failed(message));
                }
            };

            let body = decode_body(&response.body);
            if !response.is_success() {
                let message = RequestFailure::from_response(response.status, body).message();
                warn!(status = response.status, %message, "Request failed");
                return Err(ClientError::Failed(message));
            }

            let Some(body) = body else {
                debug!(status = response.status, "Response had no body");
                return Ok(Reply::default());
            };

            let envelope = ResponseEnvelope::classify(body);
            if let Some(reason) = envelope.rejection() {
                warn!(status = response.status, %reason, "Server reported a failure");
                return Err(ClientError::Rejected(reason));
            }

            let message = envelope.success_message().map(str::to_string);
            Ok(Reply {
                payload: Some(envelope.into_payload()),
                message,
            })
        }
        .instrument(span)
        .await
    }
}

fn to_body<T: Serialize>(value: &T) -> ClientResult<Value> {
    serde_json::to_value(value)
        .map_err(|e| ClientError::Failed(RequestFailure::request_error(e).message()))
}

/// Removes the endpoint's field from the payload; `null` counts as absent
fn take_field(endpoint: &Endpoint, payload: Option<Value>) -> Option<Value> {
    match payload {
        Some(Value::Object(mut map)) => map.remove(endpoint.field).filter(|v| !v.is_null()),
        _ => None,
    }
}

fn read_list<T: DeserializeOwned>(endpoint: &Endpoint, reply: Reply) -> ClientResult<Vec<T>> {
    debug_assert_eq!(endpoint.cardinality, Cardinality::List);

    match take_field(endpoint, reply.payload) {
        Some(value) => serde_json::from_value(value).map_err(|e| {
            warn!(endpoint = endpoint.name, error = %e, "List payload did not decode");
            ClientError::unexpected(format!("{}: {}", endpoint.field, e))
        }),
        None => {
            warn!(
                endpoint = endpoint.name,
                field = endpoint.field,
                "Response did not contain the list field, returning an empty list"
            );
            Ok(Vec::new())
        }
    }
}

fn read_item<T: DeserializeOwned>(endpoint: &Endpoint, reply: Reply) -> ClientResult<Created<T>> {
    let missing = match endpoint.cardinality {
        Cardinality::Item { missing } => missing,
        Cardinality::List => "Data not found in response.",
    };

    let value = take_field(endpoint, reply.payload)
        .ok_or_else(|| ClientError::MissingData(missing.to_string()))?;

    let record = serde_json::from_value(value).map_err(|e| {
        warn!(endpoint = endpoint.name, error = %e, "Record payload did not decode");
        ClientError::unexpected(format!("{}: {}", endpoint.field, e))
    })?;

    Ok(Created {
        record,
        message: reply.message,
    })
}
