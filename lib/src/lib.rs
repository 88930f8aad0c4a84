pub mod appointment;
pub mod appointment_composer;
pub mod delivery_client;
pub mod dispatch_result;
pub mod email_envelope;
pub mod environment;
pub mod error;
pub mod http_gateway;
pub mod notification_service;
pub mod notifier_resources;
pub mod resend_delivery_client;
pub mod shutdown;
