use thiserror::Error;

/// Failure reported by a backend collaborator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error("Failed to send request: {0}")]
    Transport(String),

    #[error("HTTP {status}: {body}")]
    Rejected {
        status: u16,
        /// Message from the structured error body, if any
        message: Option<String>,
        body: String,
    },

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl BackendError {
    /// Message the backend itself provided, if it sent one
    pub fn provided_message(&self) -> Option<&str> {
        match self {
            BackendError::Rejected {
                message: Some(m), ..
            } => Some(m.as_str()),
            _ => None,
        }
    }

    /// Structured message when present, otherwise the serialized error
    pub fn best_message(&self) -> String {
        if let Some(m) = self.provided_message() {
            return m.to_string();
        }
        match self {
            BackendError::Rejected { status, body, .. } if body.trim().is_empty() => {
                format!("HTTP {status}")
            }
            BackendError::Rejected { body, .. } => body.clone(),
            other => other.to_string(),
        }
    }
}
