//! Stateless HTTP request builder and response parser for the employee API.
//!
//! # Design
//! `EmployeeClient` holds only a `base_url`. `build_create_employee` turns a
//! `FormState` into an `HttpRequest`; `parse_create_employee` turns the
//! `HttpResponse` the host got back into either the server's success
//! message or an `ApiError`. The caller executes the round-trip in between.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateEmployeeReply, ErrorReply, FormState};

/// Where the employee service listens unless told otherwise.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Collection path appended to the base URL.
pub const EMPLOYEES_PATH: &str = "/employees";

/// Synchronous, stateless client for the employee API.
#[derive(Debug, Clone)]
pub struct EmployeeClient {
    base_url: String,
}

impl Default for EmployeeClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl EmployeeClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn employees_url(&self) -> String {
        format!("{}{EMPLOYEES_PATH}", self.base_url)
    }

    pub fn build_create_employee(&self, input: &FormState) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.employees_url(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// Returns the server's `message` on any 2xx status. A 2xx body without
    /// a message yields `Ok(None)`; a 2xx body that is not JSON at all is a
    /// `Deserialization` error.
    pub fn parse_create_employee(&self, response: HttpResponse) -> Result<Option<String>, ApiError> {
        check_status(&response)?;
        if response.body.trim().is_empty() {
            return Ok(None);
        }
        let reply: CreateEmployeeReply = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::Deserialization(e.to_string()))?;
        Ok(reply.message)
    }
}

/// Map non-2xx statuses to `ApiError::HttpError`, keeping the server's
/// message when the body carries one.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    let message = serde_json::from_str::<ErrorReply>(&response.body)
        .ok()
        .and_then(ErrorReply::into_message);
    Err(ApiError::HttpError {
        status: response.status,
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> EmployeeClient {
        EmployeeClient::new("http://localhost:5000")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn build_create_employee_produces_correct_request() {
        let input = FormState {
            employee_id: "E1".to_string(),
            name: "Ann".to_string(),
            ..FormState::default()
        };
        let req = client().build_create_employee(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:5000/employees");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["EmployeeID"], "E1");
        assert_eq!(body["Name"], "Ann");
        assert_eq!(body["Role"], "");
        assert_eq!(body.as_object().unwrap().len(), 7);
    }

    #[test]
    fn default_client_targets_localhost_5000() {
        assert_eq!(EmployeeClient::default().employees_url(), "http://localhost:5000/employees");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = EmployeeClient::new("http://example.test:8080//");
        assert_eq!(client.employees_url(), "http://example.test:8080/employees");
    }

    #[test]
    fn parse_success_returns_message() {
        let msg = client()
            .parse_create_employee(response(201, r#"{"message":"Created"}"#))
            .unwrap();
        assert_eq!(msg.as_deref(), Some("Created"));
    }

    #[test]
    fn parse_success_accepts_any_2xx() {
        let msg = client()
            .parse_create_employee(response(200, r#"{"message":"ok"}"#))
            .unwrap();
        assert_eq!(msg.as_deref(), Some("ok"));
    }

    #[test]
    fn parse_success_without_message() {
        assert_eq!(client().parse_create_employee(response(201, r#"{}"#)).unwrap(), None);
        assert_eq!(client().parse_create_employee(response(204, "")).unwrap(), None);
    }

    #[test]
    fn parse_success_bad_json() {
        let err = client()
            .parse_create_employee(response(201, "not json"))
            .unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn parse_failure_keeps_server_message() {
        let err = client()
            .parse_create_employee(response(409, r#"{"message":"Employee already exists"}"#))
            .unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 409, .. }));
        assert_eq!(err.server_message(), Some("Employee already exists"));
    }

    #[test]
    fn parse_failure_reads_wrapped_message() {
        let err = client()
            .parse_create_employee(response(400, r#"{"error":{"message":"bad input"}}"#))
            .unwrap_err();
        assert_eq!(err.server_message(), Some("bad input"));
    }

    #[test]
    fn parse_failure_without_json_body() {
        let err = client()
            .parse_create_employee(response(500, "internal error"))
            .unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, message: None }));
    }
}
