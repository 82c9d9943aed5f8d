//! Response classification.
//!
//! Every response is read fully into a [`RawResponse`] and run through
//! [`classify`], which either hands it back untouched (2xx) or turns it into
//! the matching [`Error`] variant.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{Error, Result};

/// A fully-read HTTP response.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub body: String,
}

impl RawResponse {
    /// Returns `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Decode a `{"data": ...}` envelope and return its payload.
    pub fn data<T: DeserializeOwned>(&self) -> Result<T> {
        #[derive(serde::Deserialize)]
        struct ApiResponse<T> {
            data: T,
        }

        let envelope: ApiResponse<T> = self.json()?;
        Ok(envelope.data)
    }
}

/// Map a response onto `Ok` (2xx) or a typed [`Error`].
///
/// | Status | Error |
/// |---|---|
/// | 401 | [`Error::Authentication`] |
/// | 404 | [`Error::NotFound`] |
/// | 422 | [`Error::Validation`] |
/// | 429 | [`Error::RateLimited`] |
/// | 500-599 | [`Error::Server`] |
/// | other | [`Error::Api`] |
pub fn classify(response: RawResponse) -> Result<RawResponse> {
    if response.is_success() {
        return Ok(response);
    }

    let status = response.status;
    let parsed: Option<Value> = serde_json::from_str(&response.body).ok();
    let message = extract_message(parsed.as_ref(), &response.body, status);

    let err = match status {
        401 => Error::Authentication {
            message,
            status: Some(status),
        },
        404 => Error::NotFound {
            message,
            status: Some(status),
        },
        422 => Error::Validation {
            message,
            errors: parsed
                .as_ref()
                .and_then(|body| body.get("errors"))
                .filter(|errors| !errors.is_null())
                .cloned(),
            status: Some(status),
        },
        429 => Error::RateLimited {
            message,
            status: Some(status),
        },
        500..=599 => Error::Server {
            message,
            status: Some(status),
        },
        _ => Error::Api {
            status,
            message,
            body: response.body,
        },
    };

    Err(err)
}

/// Message precedence: JSON `message`, JSON `errors`, raw body, `HTTP <code>`.
fn extract_message(parsed: Option<&Value>, raw: &str, status: u16) -> String {
    if let Some(Value::Object(body)) = parsed {
        match body.get("message") {
            Some(Value::String(m)) if !m.is_empty() => return m.clone(),
            Some(v) if !v.is_null() && !v.is_string() => return v.to_string(),
            _ => {}
        }
        match body.get("errors") {
            Some(Value::String(e)) if !e.is_empty() => return e.clone(),
            Some(e) if !e.is_null() && !e.is_string() => return render_errors(e),
            _ => {}
        }
    }

    let raw = raw.trim();
    if raw.is_empty() {
        format!("HTTP {status}")
    } else {
        raw.to_string()
    }
}

fn render_errors(errors: &Value) -> String {
    match errors {
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join("; "),
        other => other.to_string(),
    }
}
