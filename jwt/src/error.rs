//! Error types for token parsing, signing and verification.

use thiserror::Error;

/// Result type for token operations.
pub type JwtResult<T> = std::result::Result<T, JwtError>;

/// Errors surfaced by the token engine.
///
/// A failed signature check and a token that could not be parsed are kept
/// distinct so callers can log and alert on them differently; operational
/// failures inside an algorithm travel through
/// [`JwtError::SigningAlgorithmFailure`] instead of being folded into
/// either.
#[derive(Debug, Error)]
pub enum JwtError {
    /// Structural violation: wrong segment count, undecodable base64url, or
    /// undecodable header/payload JSON.
    #[error("malformed token: {0}")]
    MalformedToken(String),

    /// The algorithm's verify routine ran and reported the signature
    /// invalid.
    #[error("signature verification failed")]
    SignatureVerificationFailed,

    /// An algorithm-specific failure during sign, or during verify when the
    /// check could not be attempted at all.
    #[error("signing algorithm failure: {0}")]
    SigningAlgorithmFailure(#[from] AlgorithmError),

    /// Malformed base64 input at the codec layer.
    #[error("invalid base64: {0}")]
    EncodingError(String),
}

impl JwtError {
    /// Create a [`JwtError::MalformedToken`] from any displayable cause.
    #[must_use]
    pub fn malformed(cause: impl std::fmt::Display) -> Self {
        Self::MalformedToken(cause.to_string())
    }
}

/// Algorithm-specific causes wrapped by
/// [`JwtError::SigningAlgorithmFailure`].
#[derive(Debug, Error)]
pub enum AlgorithmError {
    /// A signing operation was requested with a verify-only key.
    #[error("private key required for signing")]
    PrivateKeyRequired,

    /// Key material could not be parsed or is unusable.
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// The underlying crypto primitive failed.
    #[error("primitive failure: {0}")]
    Primitive(String),
}

impl AlgorithmError {
    /// Create an `InvalidKey` error.
    #[must_use]
    pub fn invalid_key(msg: impl Into<String>) -> Self {
        Self::InvalidKey(msg.into())
    }

    /// Create a `Primitive` error.
    #[must_use]
    pub fn primitive(msg: impl Into<String>) -> Self {
        Self::Primitive(msg.into())
    }
}
