// File: src/request.rs
// Purpose: Per-request facts the handlers branch on (HTMX trigger, response format)

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::ACCEPT, request::Parts, StatusCode},
};
use regform::{ErrorSet, Field};

/// Hidden input carrying the fields that failed the last submit
pub const FAILED_INPUT: &str = "failed";

#[derive(Debug, PartialEq, Eq)]
pub enum RequestMode {
    Html,
    Json,
}

#[derive(Debug, Clone)]
pub struct FormRequest {
    /// Sent by htmx rather than a plain browser navigation
    pub is_htmx: bool,
    /// `name` of the input whose change triggered the request
    pub trigger_name: Option<String>,
    pub accepts_html: bool,
    pub accepts_json: bool,
}

#[async_trait]
impl<S> FromRequestParts<S> for FormRequest
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let is_htmx = parts.headers.contains_key("hx-request");

        let trigger_name = parts
            .headers
            .get("hx-trigger-name")
            .and_then(|v| v.to_str().ok())
            .filter(|name| !name.is_empty())
            .map(str::to_string);

        let accept = parts
            .headers
            .get(ACCEPT)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        Ok(FormRequest {
            is_htmx,
            trigger_name,
            accepts_html: accept.contains("text/html"),
            accepts_json: accept.contains("application/json"),
        })
    }
}

impl FormRequest {
    /// JSON only when asked for and HTML was not; browsers always get HTML.
    pub fn preferred_mode(&self) -> RequestMode {
        if self.accepts_json && !self.accepts_html && !self.is_htmx {
            RequestMode::Json
        } else {
            RequestMode::Html
        }
    }
}

/// Last submitted value for `name`, empty when absent (unchecked checkbox)
pub fn field_value<'a>(fields: &'a [(String, String)], name: &str) -> &'a str {
    fields
        .iter()
        .rev()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
        .unwrap_or("")
}

/// Rebuild the displayed errors from the comma-separated `failed` input
pub fn failed_fields(fields: &[(String, String)]) -> ErrorSet {
    let failed = field_value(fields, FAILED_INPUT)
        .split(',')
        .filter_map(|key| key.trim().parse::<Field>().ok());
    ErrorSet::for_fields(failed)
}
