use crate::error::NotificationError;
use serde_json::{Map, Value};

pub const DEFAULT_APPOINTMENT_TYPE: &str = "General Consultation";
pub const DEFAULT_DURATION: &str = "30 min";
pub const DEFAULT_PRICE: &str = "$0";

const USER_EMAIL: &str = "userEmail";
const DOCTOR_NAME: &str = "doctorName";
const APPOINTMENT_DATE: &str = "appointmentDate";
const APPOINTMENT_TIME: &str = "appointmentTime";
const APPOINTMENT_TYPE: &str = "appointmentType";
const DURATION: &str = "duration";
const PRICE: &str = "price";

/// Appointment data needed to confirm a booking by email. Date and time are
/// opaque strings and are forwarded verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentNotificationRequest {
    pub recipient_email: String,
    pub doctor_name: String,
    pub appointment_date: String,
    pub appointment_time: String,
    pub appointment_type: Option<String>,
    pub duration: Option<String>,
    pub price: Option<String>,
}

impl AppointmentNotificationRequest {
    /// Builds a request from an untyped JSON body.
    ///
    /// A body that is not a JSON object is an internal error. A required field
    /// that is absent, empty or not a string fails validation as a whole.
    pub fn from_payload(payload: &Value) -> Result<Self, NotificationError> {
        let fields = payload
            .as_object()
            .ok_or_else(|| NotificationError::internal(&format!("Expected a JSON object payload, got {}", kind_of(payload))))?;

        let required = [USER_EMAIL, DOCTOR_NAME, APPOINTMENT_DATE, APPOINTMENT_TIME];
        let missing = required
            .iter()
            .filter(|key| text_field(fields, key).is_none())
            .copied()
            .collect::<Vec<_>>();

        match (
            text_field(fields, USER_EMAIL),
            text_field(fields, DOCTOR_NAME),
            text_field(fields, APPOINTMENT_DATE),
            text_field(fields, APPOINTMENT_TIME),
        ) {
            (Some(recipient_email), Some(doctor_name), Some(appointment_date), Some(appointment_time)) => Ok(Self {
                recipient_email,
                doctor_name,
                appointment_date,
                appointment_time,
                appointment_type: text_field(fields, APPOINTMENT_TYPE),
                duration: text_field(fields, DURATION),
                price: text_field(fields, PRICE),
            }),
            _ => Err(NotificationError::validation(&format!("Missing required fields: {}", missing.join(", ")))),
        }
    }

    pub fn appointment_type(&self) -> &str {
        self.appointment_type.as_deref().unwrap_or(DEFAULT_APPOINTMENT_TYPE)
    }

    pub fn duration(&self) -> &str {
        self.duration.as_deref().unwrap_or(DEFAULT_DURATION)
    }

    pub fn price(&self) -> &str {
        self.price.as_deref().unwrap_or(DEFAULT_PRICE)
    }
}

fn text_field(
    fields: &Map<String, Value>,
    key: &str,
) -> Option<String> {
    fields
        .get(key)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
