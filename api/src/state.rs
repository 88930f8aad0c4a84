use appointment_notifier::error::NotificationError;
use appointment_notifier::notification_service::AppointmentNotificationService;
use appointment_notifier::notifier_resources::NotifierResources;

#[derive(Clone)]
pub struct AppState {
    pub notification_service: AppointmentNotificationService,
}

impl AppState {
    pub fn new() -> Result<Self, NotificationError> {
        let resources = NotifierResources::from_env()?;
        let notification_service = AppointmentNotificationService::from_resources(&resources)?;

        Ok(Self { notification_service })
    }
}
