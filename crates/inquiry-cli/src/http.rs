//! Blocking HTTP submit capability.

use reqwest::blocking::Client;
use serde_json::json;
use tracing::debug;

use inquiry_model::{FormField, InquiryPayload};
use inquiry_submit::{Ack, SubmitCapability, SubmitError};

/// Inquiries endpoint of the public contacts API server.
pub const DEFAULT_ENDPOINT: &str =
    "https://my-json-server.typicode.com/tundeojediran/contacts-api-server/inquiries";

/// Posts inquiries as JSON to a write endpoint.
pub struct HttpSubmitCapability {
    client: Client,
    endpoint: String,
}

impl HttpSubmitCapability {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

/// Wire shape expected by the inquiries endpoint: the payload nested under a
/// `userData` key.
pub fn wrap_payload<F: FormField>(payload: &InquiryPayload<F>) -> serde_json::Value {
    json!({ "userData": payload })
}

impl<F: FormField> SubmitCapability<F> for HttpSubmitCapability {
    fn submit(&self, payload: &InquiryPayload<F>) -> Result<Ack, SubmitError> {
        debug!(endpoint = %self.endpoint, id = %payload.id, "posting inquiry");
        let response = self
            .client
            .post(self.endpoint.as_str())
            .json(&wrap_payload(payload))
            .send()
            .map_err(|error| SubmitError::Transport(error.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Rejected(format!("HTTP {status}")));
        }
        let body: Option<serde_json::Value> = response.json().ok();
        let remote_id = body
            .as_ref()
            .and_then(|body| body.get("id"))
            .map(|id| id.as_str().map_or_else(|| id.to_string(), String::from));
        Ok(Ack { remote_id })
    }
}
