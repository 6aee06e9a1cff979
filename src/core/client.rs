//! Client for the TfL line status endpoint.
//!
//! [`StatusClient`] performs one blocking GET per invocation and maps the response into
//! [`StatusRecord`]s in the order the API returned them. Non-success statuses, transport
//! failures and bodies that do not match the expected shape all surface as upstream errors.
//!
//! # Public API
//! - [`StatusSource`]: Anything that can produce status records for a selection
//! - [`StatusClient`]: HTTP implementation backed by `ureq`
//! - [`StatusRecord`]: One line's current condition

use crate::core::{
    config::{Credentials, Settings},
    error::{Result, TubeStatsError},
    selector::LineSelector,
};
use serde::Deserialize;

const STATUS_PATH_TEMPLATE: &str = "/Line/{lines}/Status";

/// One line's current condition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRecord {
    pub id: String,
    pub name: String,
    /// `None` when the API sent no usable status entry
    pub severity_description: Option<String>,
    pub reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LinePayload {
    id: String,
    name: String,
    #[serde(default)]
    line_statuses: Vec<LineStatusPayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LineStatusPayload {
    status_severity_description: Option<String>,
    reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorPayload {
    message: String,
}

impl From<LinePayload> for StatusRecord {
    fn from(payload: LinePayload) -> Self {
        // Only the first status entry is reported
        let (severity_description, reason) = payload
            .line_statuses
            .into_iter()
            .next()
            .map(|status| (status.status_severity_description, status.reason))
            .unwrap_or((None, None));

        Self {
            id: payload.id,
            name: payload.name,
            severity_description,
            reason,
        }
    }
}

/// Parse a successful status response body
pub fn parse_status_body(body: &[u8]) -> Result<Vec<StatusRecord>> {
    let payload: Vec<LinePayload> =
        serde_json::from_slice(body).map_err(TubeStatsError::upstream_body)?;
    Ok(payload.into_iter().map(StatusRecord::from).collect())
}

/// Error text for a failed response: the API's `message` field when present, the raw body otherwise
fn upstream_message(reason: Option<&str>, body: &str) -> String {
    let detail = serde_json::from_str::<ApiErrorPayload>(body)
        .map(|payload| payload.message)
        .unwrap_or_else(|_| body.trim().to_string());

    match (reason, detail.is_empty()) {
        (Some(reason), true) => reason.to_string(),
        (Some(reason), false) => format!("{reason}: {detail}"),
        (None, true) => "no response body".to_string(),
        (None, false) => detail,
    }
}

/// Source of line status records
pub trait StatusSource {
    fn fetch_statuses(&self, selector: &LineSelector) -> Result<Vec<StatusRecord>>;
}

/// Blocking HTTP client for the TfL unified API
pub struct StatusClient {
    agent: ureq::Agent,
    credentials: Credentials,
    api_base: String,
}

impl StatusClient {
    pub fn new(settings: Settings) -> Self {
        // Status codes are inspected here rather than turned into transport errors
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            credentials: settings.credentials,
            api_base: settings.api_base,
        }
    }

    /// Endpoint URL without the credential query
    pub fn status_url(&self, selector: &LineSelector) -> String {
        format!(
            "{}{}",
            self.api_base,
            STATUS_PATH_TEMPLATE.replace("{lines}", &selector.query_segment())
        )
    }
}

impl StatusSource for StatusClient {
    fn fetch_statuses(&self, selector: &LineSelector) -> Result<Vec<StatusRecord>> {
        let url = self.status_url(selector);
        log::debug!("GET {url}");

        let mut response = self
            .agent
            .get(url.as_str())
            .query("app_id", &self.credentials.app_id)
            .query("app_key", &self.credentials.app_key)
            .call()?;

        let status = response.status();
        // Raw bytes so a non-UTF-8 body is reported as a body error
        let body = response.body_mut().read_to_vec()?;
        log::debug!("TfL API responded with {status} ({} bytes)", body.len());

        if !status.is_success() {
            return Err(TubeStatsError::upstream_status(
                status.as_u16(),
                upstream_message(status.canonical_reason(), &String::from_utf8_lossy(&body)),
            ));
        }

        parse_status_body(&body)
    }
}
