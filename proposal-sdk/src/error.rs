use thiserror::Error;

/// Message stored when the server answers with a non-success status.
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate PDF";

/// Message stored when a failure carries no text of its own.
pub const FALLBACK_MESSAGE: &str = "Unexpected error";

/// Error types for proposal form and document generation operations
#[derive(Error, Debug)]
pub enum ProposalError {
    /// The request could not be sent or no response was received
    #[error("Network error: {source}")]
    Transport {
        #[from]
        source: reqwest::Error,
    },

    /// A response was received but its status indicates failure
    #[error("Server rejected the request (status {status})")]
    ServerRejection { status: u16 },

    /// Any other failure while reading the response or saving the document
    #[error("Unexpected error: {message}")]
    Unexpected { message: String },

    /// JSON serialization or parsing error
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },

    /// Local file I/O error
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// A field name outside the fixed proposal field set
    #[error("Unknown field: {name}")]
    UnknownField { name: String },
}

impl ProposalError {
    /// Create a server rejection error
    pub fn server_rejection(status: u16) -> Self {
        Self::ServerRejection { status }
    }

    /// Create an unexpected error
    pub fn unexpected<S: Into<String>>(message: S) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Create an unknown field error
    pub fn unknown_field<S: Into<String>>(name: S) -> Self {
        Self::UnknownField { name: name.into() }
    }

    /// The human-readable message stored in the submission state.
    ///
    /// Server error bodies are never inspected: a rejection always maps to
    /// [`GENERATION_FAILED_MESSAGE`].
    pub fn user_message(&self) -> String {
        match self {
            Self::ServerRejection { .. } => GENERATION_FAILED_MESSAGE.to_string(),
            Self::Unexpected { message } if message.trim().is_empty() => {
                FALLBACK_MESSAGE.to_string()
            }
            Self::Unexpected { message } => message.clone(),
            other => other.to_string(),
        }
    }
}
