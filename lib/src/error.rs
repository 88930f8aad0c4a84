use std::fmt;

pub const MISSING_REQUIRED_FIELDS: &str = "Missing required fields";
pub const FAILED_TO_SEND_EMAIL: &str = "Failed to send email";
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

#[derive(Debug, Clone, PartialEq)]
pub struct NotificationError {
    pub status_code: u16,
    pub cause: String,
    pub message: Option<String>,
}

impl NotificationError {
    pub fn new(
        cause: &str,
        message: &str,
    ) -> Self {
        Self {
            status_code: 500,
            cause: cause.to_string(),
            message: Some(message.to_string()),
        }
    }

    /// Required appointment data is missing. `cause` is for operators only.
    pub fn validation(cause: &str) -> Self {
        Self {
            status_code: 400,
            cause: cause.to_string(),
            message: Some(MISSING_REQUIRED_FIELDS.to_string()),
        }
    }

    /// The delivery provider rejected or never received the envelope.
    pub fn delivery(cause: &str) -> Self {
        Self::new(cause, FAILED_TO_SEND_EMAIL)
    }

    pub fn internal(cause: &str) -> Self {
        Self::new(cause, INTERNAL_SERVER_ERROR)
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code)
    }
}

impl std::error::Error for NotificationError {}

impl fmt::Display for NotificationError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.cause)
    }
}
