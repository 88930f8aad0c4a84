use serde::{Deserialize, Serialize};

/// Fully composed message, serialized as the provider's request body.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct EmailEnvelope {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
    pub text: String,
}
