use std::fmt;

/// Custom error type for Traffic Manager operations
#[derive(Debug)]
pub enum VtmError {
    /// Missing or invalid settings (URL, credentials)
    Config(String),
    /// Resource type is not one of the known categories
    UnknownResource(String),
    /// HTTP request failed (connection, TLS, timeout)
    Http(reqwest::Error),
    /// API returned a non-success status
    Api { status: u16, message: String },
    /// Response body could not be parsed
    Parse(String),
    /// Data returned by the API breaks an assumption of a projection
    Invariant(String),
}

impl VtmError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            VtmError::Config(_) | VtmError::UnknownResource(_) => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for VtmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VtmError::Config(msg) => write!(f, "Configuration error: {}", msg),
            VtmError::UnknownResource(key) => write!(
                f,
                "Unknown resource type '{}'. resource types: {}",
                key,
                crate::vtm::ResourceType::keys().join(",")
            ),
            VtmError::Http(e) => write!(f, "HTTP request failed: {}", e),
            VtmError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            VtmError::Parse(msg) => write!(f, "Parse error: {}", msg),
            VtmError::Invariant(msg) => write!(f, "Invariant violation: {}", msg),
        }
    }
}

impl std::error::Error for VtmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VtmError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for VtmError {
    fn from(err: reqwest::Error) -> Self {
        VtmError::Http(err)
    }
}

impl From<serde_json::Error> for VtmError {
    fn from(err: serde_json::Error) -> Self {
        VtmError::Parse(err.to_string())
    }
}

impl From<dialoguer::Error> for VtmError {
    fn from(err: dialoguer::Error) -> Self {
        VtmError::Config(format!("could not read input: {}", err))
    }
}

/// Result type alias for Traffic Manager operations
pub type Result<T> = std::result::Result<T, VtmError>;
