use std::fmt;

use proposal_sdk::ProposalError;

/// Main error type for the carbon-proposal CLI
#[derive(Debug)]
pub enum CliError {
    /// Configuration-related errors
    Config(String),
    /// File I/O errors
    Io(std::io::Error),
    /// Malformed proposal input (input file, field overrides)
    Input(String),
    /// Document generation failed; carries the message shown to the user
    Generation(String),
    /// Generic errors from anyhow
    Other(anyhow::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Input(msg) => write!(f, "Invalid input: {msg}"),
            CliError::Generation(msg) => write!(f, "{msg}"),
            CliError::Other(err) => write!(f, "Error: {err}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(err) => Some(err),
            CliError::Other(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl CliError {
    /// Get the exit code for this error type
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config(_) => 2,
            CliError::Io(_) => 3,
            CliError::Input(_) => 4,
            CliError::Generation(_) => 5,
            CliError::Other(_) => 1,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io(err)
    }
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::Other(err)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Input(err.to_string())
    }
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::Config(err.to_string())
    }
}

impl From<ProposalError> for CliError {
    fn from(err: ProposalError) -> Self {
        match err {
            ProposalError::UnknownField { .. } | ProposalError::Serialization { .. } => {
                CliError::Input(err.to_string())
            }
            ProposalError::Io { source } => CliError::Io(source),
            other => CliError::Generation(other.user_message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_field_maps_to_input() {
        let err: CliError = ProposalError::unknown_field("deadline").into();
        assert_eq!(err.exit_code(), 4);
        assert_eq!(err.to_string(), "Invalid input: Unknown field: deadline");
    }

    #[test]
    fn test_rejection_maps_to_generation() {
        let err: CliError = ProposalError::server_rejection(500).into();
        assert_eq!(err.exit_code(), 5);
        assert_eq!(err.to_string(), "Failed to generate PDF");
    }
}
