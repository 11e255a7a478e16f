//! Network error kinds surfaced to the view models

use thiserror::Error;

/// Errors produced by the network client and the user repository.
///
/// The `Display` text is what the UI shows in an error state, so every
/// variant renders a non-empty sentence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// The request could not be built or the transport failed
    #[error("Could not reach the server. Check your connection and try again.")]
    UrlError,
    /// Empty body, or a body that does not decode into the expected type
    #[error("The server returned data that could not be read.")]
    CannotParseData,
    /// Catch-all for failures without a more specific kind
    #[error("Something went wrong. Please try again.")]
    GenericError,
    /// The server answered with a non-success status
    #[error("The server returned an invalid response.")]
    InvalidResponse,
    /// JSON decoding failed; the repository reports `CannotParseData` instead
    #[error("The response could not be decoded.")]
    DecodingError,
}
