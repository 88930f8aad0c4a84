use crate::infra::axum::AppJson;
use crate::infra::error::AppError;
use crate::state::AppState;
use axum::extract::State;
use axum::routing::post;
use axum::Router;
use serde::Serialize;
use serde_json::Value;

pub const EMAIL_SENT_SUCCESSFULLY: &str = "Email sent successfully";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendAppointmentEmailResponse {
    pub message: &'static str,
    pub email_id: String,
}

pub struct AppointmentEmailRoutes;

impl AppointmentEmailRoutes {
    pub fn routes(app_state: &AppState) -> Router {
        Router::new().route("/", post(send_appointment_email_handler)).with_state(app_state.clone())
    }
}

async fn send_appointment_email_handler(
    State(app_state): State<AppState>,
    AppJson(payload): AppJson<Value>,
) -> Result<AppJson<SendAppointmentEmailResponse>, AppError> {
    let email_id = app_state.notification_service.notify(&payload).await?;

    Ok(AppJson(SendAppointmentEmailResponse {
        message: EMAIL_SENT_SUCCESSFULLY,
        email_id,
    }))
}
