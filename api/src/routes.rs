use crate::controller::appointment_email::routes::AppointmentEmailRoutes;
use crate::controller::health::routes::HealthRoutes;
use crate::infra::axum::handle_panic;
use crate::state::AppState;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;

pub struct Routes;

impl Routes {
    pub fn routes(app_state: &AppState) -> Router {
        Router::new()
            .nest("/health", HealthRoutes::routes())
            .nest("/api/send-appointment-email", AppointmentEmailRoutes::routes(app_state))
            .layer(CatchPanicLayer::custom(handle_panic))
    }
}
