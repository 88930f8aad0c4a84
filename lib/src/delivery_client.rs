use crate::dispatch_result::DispatchResult;
use crate::email_envelope::EmailEnvelope;
use async_trait::async_trait;

/// Transmits a composed envelope to an email provider.
///
/// Implementations report every failure through [`DispatchResult::Failed`]
/// and must make at most one transmission attempt per call.
#[async_trait]
pub trait DeliveryClient: Send + Sync {
    async fn send(
        &self,
        envelope: &EmailEnvelope,
    ) -> DispatchResult;
}
