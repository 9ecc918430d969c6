//! Recording mock transport
//!
//! Replies are served in the order they were queued; every request is
//! recorded so tests can assert on what was (or was not) sent.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::Notify;

use crate::transport::{ApiRequest, RawResponse, Transport, TransportError};

/// A queued reply
#[derive(Debug, Clone)]
pub enum MockReply {
    Respond(RawResponse),
    Fail(TransportError),
}

/// In-memory transport for tests
#[derive(Debug, Default)]
pub struct MockTransport {
    replies: Mutex<VecDeque<MockReply>>,
    requests: Mutex<Vec<ApiRequest>>,
    gate: Option<Arc<Notify>>,
}

impl MockTransport {
    /// Creates a mock with no queued replies
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a JSON reply
    pub fn with_json(self, status: u16, body: Value) -> Self {
        self.with_text(status, body.to_string())
    }

    /// Queues a raw text reply
    pub fn with_text(self, status: u16, body: impl Into<String>) -> Self {
        lock(&self.replies).push_back(MockReply::Respond(RawResponse {
            status,
            body: body.into(),
        }));
        self
    }

    /// Queues a transport failure
    pub fn with_failure(self, error: TransportError) -> Self {
        lock(&self.replies).push_back(MockReply::Fail(error));
        self
    }

    /// Holds every reply until the gate is notified
    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Returns the requests received so far
    pub fn requests(&self) -> Vec<ApiRequest> {
        lock(&self.requests).clone()
    }

    /// Returns how many requests were received
    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        let url = request.path.clone();
        lock(&self.requests).push(request);

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        match lock(&self.replies).pop_front() {
            Some(MockReply::Respond(response)) => Ok(response),
            Some(MockReply::Fail(error)) => Err(error),
            None => Err(TransportError::NoResponse {
                url,
                message: "no reply queued".to_string(),
            }),
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
