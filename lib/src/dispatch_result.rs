/// Outcome of a single hand-off to the delivery provider.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchResult {
    Sent { message_id: String },
    Failed { error_detail: String },
}

impl DispatchResult {
    pub fn sent(message_id: &str) -> Self {
        Self::Sent {
            message_id: message_id.to_string(),
        }
    }

    pub fn failed(error_detail: &str) -> Self {
        Self::Failed {
            error_detail: error_detail.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Sent { .. })
    }

    pub fn message_id(&self) -> Option<&str> {
        match self {
            Self::Sent { message_id } => Some(message_id),
            Self::Failed { .. } => None,
        }
    }

    pub fn error_detail(&self) -> Option<&str> {
        match self {
            Self::Sent { .. } => None,
            Self::Failed { error_detail } => Some(error_detail),
        }
    }
}
