use crate::delivery_client::DeliveryClient;
use crate::dispatch_result::DispatchResult;
use crate::email_envelope::EmailEnvelope;
use crate::http_gateway::HttpGateway;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::instrument;

#[derive(Deserialize)]
struct SendEmailResponse {
    id: Option<String>,
}

/// Sends envelopes through the Resend `POST /emails` endpoint.
#[derive(Clone)]
pub struct ResendDeliveryClient {
    http_gateway: HttpGateway,
    base_url: String,
    api_key: String,
}

impl ResendDeliveryClient {
    pub fn new(
        http_gateway: HttpGateway,
        base_url: &str,
        api_key: &str,
    ) -> Self {
        Self {
            http_gateway,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }
}

#[async_trait]
impl DeliveryClient for ResendDeliveryClient {
    #[instrument(skip_all, name = "send_to_resend")]
    async fn send(
        &self,
        envelope: &EmailEnvelope,
    ) -> DispatchResult {
        let result = self
            .http_gateway
            .client
            .post(format!("{}/emails", self.base_url))
            .bearer_auth(&self.api_key)
            .json(envelope)
            .send()
            .await;

        let response = match result {
            Ok(response) => response,
            Err(error) => return DispatchResult::failed(&format!("Failed to reach email provider cause {error}")),
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(error) => return DispatchResult::failed(&format!("Failed to read email provider response with status {status} cause {error}")),
        };

        if !status.is_success() {
            return DispatchResult::failed(&format!("Email provider responded with status {status} and body {body}"));
        }

        match serde_json::from_str::<SendEmailResponse>(&body) {
            Ok(SendEmailResponse { id: Some(id) }) if !id.is_empty() => DispatchResult::sent(&id),
            Ok(_) => DispatchResult::failed(&format!("Email provider responded with status {status} but no message id, body {body}")),
            Err(error) => DispatchResult::failed(&format!("Failed to decode email provider response {body} cause {error}")),
        }
    }
}
