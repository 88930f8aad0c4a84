use crate::appointment_composer::DEFAULT_SENDER;
use crate::environment::Environment;
use crate::error::NotificationError;

pub const DEFAULT_RESEND_BASE_URL: &str = "https://api.resend.com";
pub const DEFAULT_HTTP_TIMEOUT_IN_MILLIS: u64 = 3000;

#[derive(Clone)]
pub struct NotifierResources {
    pub resend_api_key: String,
    pub resend_base_url: Option<String>,
    pub sender: Option<String>,
    pub http_timeout_in_millis: Option<u64>,
}

impl NotifierResources {
    pub fn new(resend_api_key: &str) -> Self {
        Self {
            resend_api_key: resend_api_key.to_string(),
            resend_base_url: None,
            sender: None,
            http_timeout_in_millis: None,
        }
    }

    /// Fails when `RESEND_API_KEY` is absent so the process never starts
    /// without delivery credentials.
    pub fn from_env() -> Result<Self, NotificationError> {
        let resend_api_key = Environment::required("RESEND_API_KEY")?;

        Ok(Self::new(&resend_api_key)
            .with_resend_base_url(&Environment::string("RESEND_BASE_URL", DEFAULT_RESEND_BASE_URL))
            .with_sender(&Environment::string("EMAIL_FROM", DEFAULT_SENDER))
            .with_http_timeout_in_millis(Environment::u64("HTTP_TIMEOUT_IN_MILLIS", DEFAULT_HTTP_TIMEOUT_IN_MILLIS)?))
    }

    pub fn with_resend_base_url(
        self,
        resend_base_url: &str,
    ) -> Self {
        Self {
            resend_base_url: Some(resend_base_url.trim_end_matches('/').to_string()),
            ..self
        }
    }

    pub fn with_sender(
        self,
        sender: &str,
    ) -> Self {
        Self {
            sender: Some(sender.to_string()),
            ..self
        }
    }

    pub fn with_http_timeout_in_millis(
        self,
        http_timeout_in_millis: u64,
    ) -> Self {
        Self {
            http_timeout_in_millis: Some(http_timeout_in_millis),
            ..self
        }
    }

    pub fn resend_base_url(&self) -> &str {
        self.resend_base_url.as_deref().unwrap_or(DEFAULT_RESEND_BASE_URL)
    }

    pub fn sender(&self) -> &str {
        self.sender.as_deref().unwrap_or(DEFAULT_SENDER)
    }

    pub fn http_timeout_in_millis(&self) -> u64 {
        self.http_timeout_in_millis.unwrap_or(DEFAULT_HTTP_TIMEOUT_IN_MILLIS)
    }
}
