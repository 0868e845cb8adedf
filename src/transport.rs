use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, USER_AGENT};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::{ClockifyError, Result};

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "X-Api-Key";

// ---------------------------------------------------------------------------
// Transport base
// ---------------------------------------------------------------------------

/// Authenticated HTTP access to one Clockify base URL.
///
/// Every resource client borrows a `Transport`. Paths are appended to the
/// base URL verbatim, so they carry their own leading `/`, trailing `/` and
/// query string.
#[derive(Debug, Clone)]
pub struct Transport {
    base_url: String,
    api_key: String,
    http: Client,
}

impl Transport {
    pub fn new(api_key: &str, base_url: &str, config: &ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let key = HeaderValue::from_str(api_key)
            .map_err(|e| ClockifyError::Config(format!("Invalid API key header value: {e}")))?;
        headers.insert(HeaderName::from_static("x-api-key"), key);
        if let Some(ref agent) = config.user_agent {
            let agent = HeaderValue::from_str(agent)
                .map_err(|e| ClockifyError::Config(format!("Invalid user agent: {e}")))?;
            headers.insert(USER_AGENT, agent);
        }

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ClockifyError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            http,
        })
    }

    /// Transport for the `global` API host of `config`.
    pub fn global(config: &ClientConfig) -> Result<Self> {
        Self::new(&config.api_key, &config.global_base_url(), config)
    }

    /// Transport for the `reports` API host of `config`.
    pub fn reports(config: &ClientConfig) -> Result<Self> {
        Self::new(&config.api_key, &config.reports_base_url(), config)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Build the full URL for a given path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    // ---- verbs -------------------------------------------------------------

    pub fn get(&self, path: &str) -> Result<Option<serde_json::Value>> {
        self.send("GET", path, self.http.get(self.url(path)))
    }

    pub fn post<P: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &P,
    ) -> Result<Option<serde_json::Value>> {
        self.send("POST", path, self.http.post(self.url(path)).json(payload))
    }

    /// `PUT` with an optional JSON body; `None` sends no body at all.
    pub fn put<P: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: Option<&P>,
    ) -> Result<Option<serde_json::Value>> {
        let mut request = self.http.put(self.url(path));
        if let Some(body) = payload {
            request = request.json(body);
        }
        self.send("PUT", path, request)
    }

    pub fn delete(&self, path: &str) -> Result<Option<serde_json::Value>> {
        self.send("DELETE", path, self.http.delete(self.url(path)))
    }

    // ---- typed wrappers ----------------------------------------------------

    pub fn get_as<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        decode(self.get(path)?)
    }

    pub fn post_as<T: DeserializeOwned, P: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &P,
    ) -> Result<Option<T>> {
        decode(self.post(path, payload)?)
    }

    pub fn put_as<T: DeserializeOwned, P: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: Option<&P>,
    ) -> Result<Option<T>> {
        decode(self.put(path, payload)?)
    }

    fn send(
        &self,
        verb: &str,
        path: &str,
        request: RequestBuilder,
    ) -> Result<Option<serde_json::Value>> {
        tracing::debug!(verb, url = %self.url(path), "clockify request");
        let response = request.send()?;
        handle_response(verb, path, response)
    }
}

// ---------------------------------------------------------------------------
// Response handling
// ---------------------------------------------------------------------------

/// Map a status code to its outcome: 200/201/202 carry a JSON body, 204/205
/// carry none, everything else is an error.
fn handle_response(verb: &str, path: &str, response: Response) -> Result<Option<serde_json::Value>> {
    let status = response.status().as_u16();
    tracing::debug!(verb, path, status, "clockify response");

    match status {
        204 | 205 => Ok(None),
        200..=202 => {
            let text = response.text()?;
            if text.trim().is_empty() {
                return Ok(None);
            }
            Ok(Some(serde_json::from_str(&text)?))
        }
        _ => {
            let body = read_error_body(verb, path, status, response.text());
            tracing::warn!(verb, path, status, %body, "clockify API error");
            Err(ClockifyError::Http { status, body })
        }
    }
}

/// A body that cannot be read is logged and reported as `null`.
fn read_error_body(
    verb: &str,
    path: &str,
    status: u16,
    text: reqwest::Result<String>,
) -> serde_json::Value {
    match text {
        Ok(text) => error_body(&text),
        Err(e) => {
            tracing::warn!(verb, path, status, error = %e, "failed to read clockify error body");
            serde_json::Value::Null
        }
    }
}

fn error_body(text: &str) -> serde_json::Value {
    if text.trim().is_empty() {
        return serde_json::Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| serde_json::Value::String(text.to_string()))
}

fn decode<T: DeserializeOwned>(value: Option<serde_json::Value>) -> Result<Option<T>> {
    value
        .map(|v| serde_json::from_value(v).map_err(ClockifyError::from))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn url_is_base_plus_path() {
        let config = ClientConfig::new("apikey123", "baz.co/");
        let transport = Transport::global(&config).unwrap();
        assert_eq!(transport.base_url(), "https://global.baz.co");
        assert_eq!(transport.api_key(), "apikey123");
        assert_eq!(transport.url("/bar/"), "https://global.baz.co/bar/");
    }

    #[test]
    fn reports_transport_uses_reports_host() {
        let config = ClientConfig::new("apikey", "baz.co");
        let transport = Transport::reports(&config).unwrap();
        assert_eq!(transport.base_url(), "https://reports.baz.co");
    }

    #[test]
    fn api_key_with_newline_is_rejected() {
        let config = ClientConfig::new("bad\nkey", "baz.co");
        let err = Transport::global(&config).unwrap_err();
        assert!(matches!(err, ClockifyError::Config(_)));
    }

    #[test]
    fn error_body_keeps_json_or_raw_text() {
        assert_eq!(error_body(r#"{"message":"nope"}"#), json!({"message": "nope"}));
        assert_eq!(error_body("Internal Server Error"), json!("Internal Server Error"));
        assert_eq!(error_body("  "), serde_json::Value::Null);
    }

    #[test]
    fn unreadable_error_body_becomes_null() {
        let read_failure = Client::new().get("not a url").send().map(|_| String::new());
        assert!(read_failure.is_err());
        let body = read_error_body("GET", "/bar/", 500, read_failure);
        assert_eq!(body, serde_json::Value::Null);

        let body = read_error_body("GET", "/bar/", 500, Ok(r#"{"message":"nope"}"#.into()));
        assert_eq!(body, json!({"message": "nope"}));
    }

    #[test]
    fn decode_passes_absent_through() {
        let none: Option<Vec<String>> = decode(None).unwrap();
        assert!(none.is_none());
        let some: Option<Vec<String>> = decode(Some(json!(["a", "b"]))).unwrap();
        assert_eq!(some, Some(vec!["a".to_string(), "b".to_string()]));
        assert!(decode::<Vec<String>>(Some(json!({"a": 1}))).is_err());
    }
}
