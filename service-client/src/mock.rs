//! In-memory transport with scripted replies
//!
//! Replies are queued per `(method, path)`. The last reply of a queue is
//! sticky, so a page may reload any number of times against it. Every
//! request is recorded for assertions on method, path, query and body.

use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::http::{HttpClient, Query};
use crate::{ClientError, ClientResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
}

/// Scripted outcome of one request
#[derive(Debug, Clone)]
pub enum MockReply {
    /// HTTP 200 with this JSON body
    Json(Value),
    /// Non-success status with this body
    Status(u16, Value),
    /// Transport failure, no response at all
    Offline(String),
}

impl MockReply {
    /// `{success: true, data}`
    pub fn data(data: Value) -> Self {
        Self::Json(serde_json::json!({ "success": true, "data": data }))
    }

    /// `{success: true, message}`
    pub fn done(message: &str) -> Self {
        Self::Json(serde_json::json!({ "success": true, "message": message }))
    }

    /// HTTP 200 carrying `{success: false, message}`
    pub fn rejected(message: &str) -> Self {
        Self::Json(serde_json::json!({ "success": false, "message": message }))
    }

    pub fn unauthorized() -> Self {
        Self::Status(401, serde_json::json!({ "success": false, "message": "Unauthorized" }))
    }
}

/// A request as seen by the mock
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

#[derive(Debug, Default)]
pub struct MockHttpClient {
    replies: Mutex<HashMap<(Method, String), VecDeque<MockReply>>>,
    requests: Mutex<Vec<RecordedRequest>>,
    token: Option<String>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Queue a reply for `method path`
    pub fn on(&self, method: Method, path: &str, reply: MockReply) -> &Self {
        self.replies
            .lock()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(reply);
        self
    }

    /// All requests issued so far
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    /// Requests issued for `method path`
    pub fn requests_to(&self, method: Method, path: &str) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .cloned()
            .collect()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    fn respond<T: DeserializeOwned>(&self, request: RecordedRequest) -> ClientResult<T> {
        let key = (request.method, request.path.clone());
        self.requests.lock().push(request);

        let reply = {
            let mut replies = self.replies.lock();
            match replies.get_mut(&key) {
                Some(queue) if queue.len() > 1 => queue.pop_front(),
                Some(queue) => queue.front().cloned(),
                None => None,
            }
        };

        match reply {
            Some(MockReply::Json(body)) => Ok(serde_json::from_value(body)?),
            Some(MockReply::Status(status, body)) => {
                Err(ClientError::from_status(status, &body.to_string()))
            }
            Some(MockReply::Offline(reason)) => Err(ClientError::Internal(reason)),
            None => Err(ClientError::from_status(404, "")),
        }
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get_with_query<T: DeserializeOwned>(&self, path: &str, query: &Query) -> ClientResult<T> {
        self.respond(RecordedRequest {
            method: Method::Get,
            path: path.to_string(),
            query: query.to_vec(),
            body: None,
        })
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let body = serde_json::to_value(body)?;
        self.respond(RecordedRequest {
            method: Method::Post,
            path: path.to_string(),
            query: Vec::new(),
            body: Some(body),
        })
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let body = serde_json::to_value(body)?;
        self.respond(RecordedRequest {
            method: Method::Put,
            path: path.to_string(),
            query: Vec::new(),
            body: Some(body),
        })
    }

    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ServiceOfficeApi;
    use crate::api::paths;

    #[tokio::test]
    async fn test_last_reply_is_sticky() {
        let mock = MockHttpClient::new();
        mock.on(Method::Get, paths::PAST_SERVICE_ROOMS, MockReply::data(serde_json::json!(["101"])))
            .on(Method::Get, paths::PAST_SERVICE_ROOMS, MockReply::data(serde_json::json!(["101", 202])));
        let api = ServiceOfficeApi::new(mock);

        assert_eq!(api.list_past_service_rooms().await.unwrap(), ["101"]);
        assert_eq!(api.list_past_service_rooms().await.unwrap(), ["101", "202"]);
        assert_eq!(api.list_past_service_rooms().await.unwrap(), ["101", "202"]);
        assert_eq!(api.http().request_count(), 3);
    }

    #[tokio::test]
    async fn test_unscripted_route_is_not_found() {
        let api = ServiceOfficeApi::new(MockHttpClient::new());
        let err = api.list_due_services().await.unwrap_err();
        assert!(matches!(err, ClientError::Api { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_complete_sends_empty_object() {
        let mock = MockHttpClient::new();
        mock.on(Method::Put, "/viewdueservices/42/complete", MockReply::done("Marked complete"));
        let api = ServiceOfficeApi::new(mock);

        let message = api.complete_service_request(42).await.unwrap();
        assert_eq!(message.as_deref(), Some("Marked complete"));

        let sent = api.http().requests();
        assert_eq!(sent[0].body, Some(serde_json::json!({})));
    }
}
