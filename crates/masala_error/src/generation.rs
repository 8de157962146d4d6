//! Generation error types.
//!
//! One externally observable failure covers every cause: transport errors,
//! provider rejections, and responses that do not parse into the expected
//! shape. The kind is logged at the boundary and never surfaced to callers.

/// Generation error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GenerationErrorKind {
    /// HTTP/network error reaching the provider
    #[display("HTTP request failed: {}", _0)]
    Http(String),

    /// Provider returned a non-success status
    #[display("API error (status {}): {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from the provider
        message: String,
    },

    /// Provider response body could not be parsed
    #[display("Response parsing failed: {}", _0)]
    ResponseParsing(String),

    /// Generated content did not parse as a JSON object
    #[display("Generated object not schema-conformant: {}", _0)]
    SchemaConformance(String),

    /// Inbound request body could not be deserialized
    #[display("Invalid request: {}", _0)]
    InvalidRequest(String),

    /// Client was misconfigured
    #[display("Configuration error: {}", _0)]
    Configuration(String),
}

/// Generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use masala_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::Http("connection refused".into()));
/// assert!(format!("{}", err).contains("connection refused"));
/// ```
#[derive(Debug, Clone)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Generation Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for GenerationError {}

impl From<crate::ConfigError> for GenerationError {
    #[track_caller]
    fn from(err: crate::ConfigError) -> Self {
        GenerationError::new(GenerationErrorKind::Configuration(err.message))
    }
}
