//! Error types for license issuing and verification.
//!
//! Failures fall into two classes with opposite contracts. [`LicenseError`]
//! covers misuse at the integration boundary (unusable key material, a
//! payload that is not an object) and is returned loudly. [`DecodeError`]
//! covers everything that can go wrong while reading end-user-supplied
//! license text; the public API collapses these into `false` / `None` /
//! [`LicenseInfo::Rejected`](crate::LicenseInfo::Rejected) so untrusted
//! input can never crash the host.

use thiserror::Error;

/// Caller-side errors. These indicate API misuse and are never swallowed.
#[derive(Debug, Error)]
pub enum LicenseError {
    /// The private key PEM could not be parsed as a PKCS#8 DSA key.
    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),

    /// The public key PEM could not be parsed as an SPKI DSA key.
    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    /// The payload value is not a JSON object.
    #[error("license payload must be a JSON object, got {0}")]
    PayloadNotObject(&'static str),

    /// Signature generation failed.
    #[error("signing failed: {0}")]
    Signing(String),

    /// The signature hex is too long for the 4-digit length field.
    #[error("signature of {0} hex chars does not fit the frame length field")]
    OversizedSignature(usize),

    /// Payload serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Failures while reading untrusted license text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// No content lines remained after stripping the marker lines.
    #[error("license text contains no key material")]
    EmptyBody,

    /// The unwrapped body is shorter than the 2-char format version tag.
    #[error("license body is shorter than the format version tag")]
    MissingVersion,

    /// The body after the version tag is not valid base64.
    #[error("invalid base64 in license body: {0}")]
    Base64(String),

    /// The signature length field is not a 4-digit decimal number.
    #[error("invalid signature length field")]
    BadLengthField,

    /// The declared signature length exceeds the frame content.
    #[error("signature length {declared} exceeds frame content of {available} bytes")]
    Truncated { declared: usize, available: usize },

    /// The embedded signature is not ASCII hex text.
    #[error("signature field is not hex text")]
    BadSignatureField,

    /// The payload bytes are not a JSON object.
    #[error("license payload is not a JSON object: {0}")]
    Payload(String),
}

/// Result type for license operations.
pub type LicenseResult<T> = Result<T, LicenseError>;
