//! Binary frame joining a signature to the payload bytes it covers.
//!
//! Wire layout, innermost first: a 4-digit zero-padded decimal ASCII field
//! holding the character length of the signature hex string, the signature
//! hex itself, then the serialized payload bytes. That buffer is
//! base64-encoded (standard alphabet, padded) and the 2-char format version
//! tag is prepended as plain text, outside the base64.

use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::error::{DecodeError, LicenseError, LicenseResult};

/// Format version tag written into every issued license.
pub const FORMAT_VERSION: &str = "01";

const VERSION_LEN: usize = 2;
const SIG_LEN_DIGITS: usize = 4;
const MAX_SIGNATURE_HEX_LEN: usize = 9999;

/// A decoded frame: version tag, signature, and the exact payload bytes
/// the signature covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedFrame {
    /// 2-char format version tag. Read and retained, not branched on.
    pub version: String,
    /// Hex-encoded DER signature.
    pub signature_hex: String,
    /// Serialized payload, byte for byte as signed.
    pub payload: Vec<u8>,
}

/// Builds the frame text for a signature and payload.
///
/// # Errors
///
/// Returns [`LicenseError::OversizedSignature`] if the signature hex cannot
/// be described by the 4-digit length field.
pub fn encode(version: &str, signature_hex: &str, payload: &[u8]) -> LicenseResult<String> {
    debug_assert_eq!(version.len(), VERSION_LEN, "version tag must be 2 chars");

    if signature_hex.len() > MAX_SIGNATURE_HEX_LEN {
        return Err(LicenseError::OversizedSignature(signature_hex.len()));
    }

    let mut content = Vec::with_capacity(SIG_LEN_DIGITS + signature_hex.len() + payload.len());
    content.extend_from_slice(format!("{:04}", signature_hex.len()).as_bytes());
    content.extend_from_slice(signature_hex.as_bytes());
    content.extend_from_slice(payload);

    Ok(format!("{version}{}", STANDARD.encode(&content)))
}

/// Parses frame text back into a [`SignedFrame`].
///
/// Frame text comes out of untrusted license blocks; every malformation is
/// a typed [`DecodeError`], never a panic.
pub fn decode(frame_text: &str) -> Result<SignedFrame, DecodeError> {
    if frame_text.len() < VERSION_LEN || !frame_text.is_char_boundary(VERSION_LEN) {
        return Err(DecodeError::MissingVersion);
    }
    let (version, body) = frame_text.split_at(VERSION_LEN);

    let content = STANDARD
        .decode(body)
        .map_err(|e| DecodeError::Base64(e.to_string()))?;

    if content.len() < SIG_LEN_DIGITS {
        return Err(DecodeError::BadLengthField);
    }
    let (len_field, rest) = content.split_at(SIG_LEN_DIGITS);
    if !len_field.iter().all(u8::is_ascii_digit) {
        return Err(DecodeError::BadLengthField);
    }
    let declared = len_field
        .iter()
        .fold(0usize, |n, b| n * 10 + usize::from(b - b'0'));

    if declared > rest.len() {
        return Err(DecodeError::Truncated {
            declared,
            available: rest.len(),
        });
    }
    let (signature, payload) = rest.split_at(declared);
    let signature_hex = std::str::from_utf8(signature)
        .map_err(|_| DecodeError::BadSignatureField)?
        .to_string();

    Ok(SignedFrame {
        version: version.to_string(),
        signature_hex,
        payload: payload.to_vec(),
    })
}
