//! Error types for generation.

use mock_provider::ProviderError;

/// Error type for generator operations.
///
/// Malformed override strings, unparsable JSON arguments and unknown
/// declarations are not errors; they fall back to a default value.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// The requested locale is unknown or incomplete
    #[error(transparent)]
    InvalidLocale(#[from] ProviderError),

    /// A fallible override function failed
    #[error("Generation failed at '{path}': {message}")]
    Fault {
        /// Field path of the failing node
        path: String,
        /// Error reported by the override
        message: String,
    },
}
