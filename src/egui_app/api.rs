/**
 * Request Wrapper
 *
 * Single chokepoint for outbound API calls. Every request goes through
 * [`ApiClient::request`], which:
 *
 * - attaches `Authorization: Bearer <token>` when a token is held, and
 *   omits the header entirely otherwise
 * - serializes JSON bodies and sets the content-type only when the caller
 *   has not already set one
 * - treats HTTP 204 as a successful empty result
 * - parses JSON response bodies when the content-type says JSON, and passes
 *   raw text through otherwise
 * - normalizes every non-2xx status into one structured error shape
 * - never follows redirects, so a 401 is surfaced instead of silently
 *   landing on a login redirect
 */

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::egui_app::config::Config;

/// Fallback message when the server gives nothing usable
pub const GENERIC_ERROR_MESSAGE: &str = "Erreur API";

/// Normalized response body
#[derive(Debug, Clone, PartialEq)]
pub enum ApiBody {
    /// 204 or an empty body
    Empty,
    /// JSON body
    Json(serde_json::Value),
    /// Anything the server sent without a JSON content-type
    Text(String),
}

/// The single error contract exposed to the rest of the client
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Non-2xx HTTP response with a best-effort message
    #[error("{message}")]
    Http { status: u16, message: String },
    /// Transport-level failure (DNS, refused connection, invalid payload)
    #[error("network error: {0}")]
    Network(String),
}

impl ApiError {
    /// Whether this error is the 401 "stale token" signal
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, ApiError::Http { status: 401, .. })
    }
}

/// HTTP client bound to a base URL and an optional bearer token
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
    client: Client,
}

impl ApiClient {
    /// Build a client for the configured API
    ///
    /// Redirects are disabled: redirect handling is the caller's
    /// responsibility.
    pub fn new(config: &Config, token: Option<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            base_url: config.server_url().to_string(),
            token,
            client,
        })
    }

    /// Perform a request with default headers
    pub fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<ApiBody, ApiError> {
        self.request_with_headers(method, path, HeaderMap::new(), body)
    }

    /// Perform a request with caller-supplied headers
    ///
    /// Caller headers win: the bearer header and the content-type are only
    /// filled in when the caller has not set them.
    pub fn request_with_headers(
        &self,
        method: Method,
        path: &str,
        mut headers: HeaderMap,
        body: Option<&serde_json::Value>,
    ) -> Result<ApiBody, ApiError> {
        let url = if path.starts_with("http") {
            path.to_string()
        } else {
            format!("{}{}", self.base_url, path)
        };

        headers
            .entry(ACCEPT)
            .or_insert(HeaderValue::from_static("application/json"));

        if let Some(token) = &self.token {
            if !headers.contains_key(AUTHORIZATION) {
                let value = HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|e| ApiError::Network(e.to_string()))?;
                headers.insert(AUTHORIZATION, value);
            }
        }

        let mut request = self.client.request(method, url);

        if let Some(body) = body {
            if !headers.contains_key(CONTENT_TYPE) {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            }
            let payload =
                serde_json::to_vec(body).map_err(|e| ApiError::Network(e.to_string()))?;
            request = request.body(payload);
        }

        let response = request
            .headers(headers)
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            return Ok(ApiBody::Empty);
        }

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.contains("application/json"))
            .unwrap_or(false);

        let text = response
            .text()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if status.is_success() {
            if text.is_empty() {
                Ok(ApiBody::Empty)
            } else if is_json {
                serde_json::from_str(&text)
                    .map(ApiBody::Json)
                    .map_err(|e| ApiError::Network(format!("invalid JSON response: {}", e)))
            } else {
                Ok(ApiBody::Text(text))
            }
        } else {
            let data = if is_json {
                serde_json::from_str::<serde_json::Value>(&text).ok()
            } else {
                None
            };
            Err(ApiError::Http {
                status: status.as_u16(),
                message: error_message(data.as_ref(), status),
            })
        }
    }

    /// GET a JSON resource
    pub fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        decode(self.request(Method::GET, path, None)?)
    }

    /// POST a JSON body and decode the JSON response
    pub fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T, ApiError> {
        decode(self.request(Method::POST, path, Some(body))?)
    }

    /// POST without a body, ignoring the response payload
    pub fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        self.request(Method::POST, path, None).map(|_| ())
    }
}

fn decode<T: DeserializeOwned>(body: ApiBody) -> Result<T, ApiError> {
    match body {
        ApiBody::Json(value) => serde_json::from_value(value)
            .map_err(|e| ApiError::Network(format!("unexpected response shape: {}", e))),
        _ => Err(ApiError::Network("expected a JSON response".to_string())),
    }
}

/// Derive a user-facing message from an error response
///
/// Precedence: server `message` field, then the first entry of a
/// field-keyed `errors` map, then the HTTP status line, then a generic
/// fallback.
pub fn error_message(data: Option<&serde_json::Value>, status: StatusCode) -> String {
    if let Some(data) = data {
        if let Some(message) = data.get("message").and_then(|m| m.as_str()) {
            if !message.is_empty() {
                return message.to_string();
            }
        }

        let first_field_error = data
            .get("errors")
            .and_then(|e| e.as_object())
            .and_then(|errors| errors.values().next())
            .and_then(|v| v.as_array())
            .and_then(|a| a.first())
            .and_then(|m| m.as_str());
        if let Some(message) = first_field_error {
            return message.to_string();
        }
    }

    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::AppConfig;
    use serde_json::json;

    fn client_for(url: &str, token: Option<&str>) -> ApiClient {
        let config = Config::with_builder(AppConfig::builder().api_base_url(url.to_string()))
            .expect("valid test config");
        ApiClient::new(&config, token.map(str::to_string)).expect("client builds")
    }

    #[test]
    fn test_error_message_prefers_message_field() {
        let data = json!({"message": "Unauthenticated.", "errors": {"email": ["nope"]}});
        assert_eq!(
            error_message(Some(&data), StatusCode::UNAUTHORIZED),
            "Unauthenticated."
        );
    }

    #[test]
    fn test_error_message_falls_back_to_first_field_error() {
        let data = json!({"errors": {"email": ["Les identifiants fournis sont incorrects."]}});
        assert_eq!(
            error_message(Some(&data), StatusCode::UNPROCESSABLE_ENTITY),
            "Les identifiants fournis sont incorrects."
        );
    }

    #[test]
    fn test_error_message_falls_back_to_status_line() {
        let data = json!({"detail": "something else"});
        assert_eq!(
            error_message(Some(&data), StatusCode::BAD_GATEWAY),
            "Bad Gateway"
        );
        assert_eq!(error_message(None, StatusCode::NOT_FOUND), "Not Found");
    }

    #[test]
    fn test_attaches_bearer_when_token_held() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api/me")
            .match_header("authorization", "Bearer tok_1")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"ok":true}"#)
            .create();

        let client = client_for(&server.url(), Some("tok_1"));
        let body = client.request(Method::GET, "/api/me", None).unwrap();
        assert_eq!(body, ApiBody::Json(json!({"ok": true})));
        mock.assert();
    }

    #[test]
    fn test_omits_authorization_without_token() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/api/login")
            .match_header("authorization", mockito::Matcher::Missing)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"ok":true}"#)
            .create();

        let client = client_for(&server.url(), None);
        client
            .request(Method::POST, "/api/login", Some(&json!({"a": 1})))
            .unwrap();
        mock.assert();
    }

    #[test]
    fn test_204_is_successful_empty_result() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/api/logout")
            .with_status(204)
            .create();

        let client = client_for(&server.url(), Some("tok_1"));
        let body = client.request(Method::POST, "/api/logout", None).unwrap();
        assert_eq!(body, ApiBody::Empty);
    }

    #[test]
    fn test_422_surfaces_field_error_message() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/api/login")
            .with_status(422)
            .with_header("content-type", "application/json")
            .with_body(r#"{"errors":{"email":["Les identifiants fournis sont incorrects."]}}"#)
            .create();

        let client = client_for(&server.url(), None);
        let err = client
            .request(Method::POST, "/api/login", Some(&json!({})))
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Http {
                status: 422,
                message: "Les identifiants fournis sont incorrects.".to_string(),
            }
        );
    }

    #[test]
    fn test_redirects_are_not_followed() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/api/me")
            .with_status(302)
            .with_header("location", "/login")
            .create();

        let client = client_for(&server.url(), Some("tok_1"));
        let err = client.request(Method::GET, "/api/me", None).unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 302, .. }));
    }

    #[test]
    fn test_non_json_body_passes_through_as_text() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/health")
            .with_status(200)
            .with_header("content-type", "text/plain")
            .with_body("ok")
            .create();

        let client = client_for(&server.url(), None);
        let body = client.request(Method::GET, "/health", None).unwrap();
        assert_eq!(body, ApiBody::Text("ok".to_string()));
    }

    #[test]
    fn test_is_unauthenticated_only_for_401() {
        let unauth = ApiError::Http {
            status: 401,
            message: "Unauthenticated.".to_string(),
        };
        let forbidden = ApiError::Http {
            status: 403,
            message: "Forbidden".to_string(),
        };
        assert!(unauth.is_unauthenticated());
        assert!(!forbidden.is_unauthenticated());
        assert!(!ApiError::Network("offline".to_string()).is_unauthenticated());
    }
}
