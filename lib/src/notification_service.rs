use crate::appointment::AppointmentNotificationRequest;
use crate::appointment_composer::AppointmentComposer;
use crate::delivery_client::DeliveryClient;
use crate::dispatch_result::DispatchResult;
use crate::error::NotificationError;
use crate::http_gateway::HttpGateway;
use crate::notifier_resources::NotifierResources;
use crate::resend_delivery_client::ResendDeliveryClient;
use futures::FutureExt;
use serde_json::Value;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::instrument;

#[derive(Clone)]
pub struct AppointmentNotificationService {
    composer: AppointmentComposer,
    delivery_client: Arc<dyn DeliveryClient>,
}

impl AppointmentNotificationService {
    pub fn new(
        composer: AppointmentComposer,
        delivery_client: Arc<dyn DeliveryClient>,
    ) -> Self {
        Self { composer, delivery_client }
    }

    pub fn from_resources(resources: &NotifierResources) -> Result<Self, NotificationError> {
        let http_gateway = HttpGateway::new(resources.http_timeout_in_millis())?;
        let delivery_client = ResendDeliveryClient::new(http_gateway, resources.resend_base_url(), &resources.resend_api_key);

        Ok(Self::new(AppointmentComposer::new(resources.sender()), Arc::new(delivery_client)))
    }

    /// Validates the payload, composes the confirmation and dispatches it
    /// exactly once. Returns the provider's message id.
    #[instrument(skip_all, name = "send_appointment_email")]
    pub async fn notify(
        &self,
        payload: &Value,
    ) -> Result<String, NotificationError> {
        let request = AppointmentNotificationRequest::from_payload(payload)?;
        let envelope = self.composer.compose(&request);

        let result = AssertUnwindSafe(self.delivery_client.send(&envelope))
            .catch_unwind()
            .await
            .unwrap_or_else(|panic| DispatchResult::failed(&format!("Delivery client panicked: {}", panic_message(&*panic))));

        match result {
            DispatchResult::Sent { message_id } => Ok(message_id),
            DispatchResult::Failed { error_detail } => Err(NotificationError::delivery(&error_detail)),
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(message) = panic.downcast_ref::<&str>() {
        *message
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown"
    }
}
