//! Error types for the desktop shell

/// Errors that can occur in desktop shell operations
///
/// Registry mutations themselves are infallible (unknown keys are silent
/// no-ops), so errors only arise at the edges: configuration input and the
/// serialization boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesktopError {
    /// Desktop configuration could not be parsed
    Config(String),

    /// JSON serialization or deserialization failed
    Serialization(String),
}

impl std::fmt::Display for DesktopError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "invalid desktop configuration: {}", msg),
            Self::Serialization(msg) => write!(f, "serialization error: {}", msg),
        }
    }
}

impl std::error::Error for DesktopError {}

/// Result type alias for desktop operations
pub type DesktopResult<T> = Result<T, DesktopError>;
