//! License issuing and verification operations.
//!
//! Creation runs payload → serialize → sign → frame → wrap. Verification
//! runs the codec in reverse, checks the signature over the recovered
//! payload bytes, then checks the validity window. Each stage hands its
//! failure to the next as a typed `Result`; the public surface collapses
//! untrusted-input failures into `false` / `None` / [`LicenseInfo::Rejected`]
//! so end-user-supplied text can never crash the host. Key-material problems
//! are caller errors and stay loud.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{DecodeError, LicenseResult};
use crate::frame::{self, FORMAT_VERSION, SignedFrame};
use crate::payload::LicensePayload;
use crate::signing::{SigningKey, VerifyingKey};
use crate::wrap;

/// Outcome of a full license check.
///
/// Either verification could not proceed at all, or both the signature and
/// the validity window were evaluated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LicenseInfo {
    /// The signature failed or no payload could be recovered. Nothing
    /// further was evaluated.
    Rejected {
        /// Human-readable reason.
        error: String,
    },
    /// Signature verified and payload recovered.
    Verified {
        /// The recovered payload.
        payload: LicensePayload,
        /// Always true in this variant; a failed signature rejects early.
        is_signature_valid: bool,
        /// Whether the reference instant falls before the expiry instant.
        is_in_validity_period: bool,
        /// Conjunction of the two checks.
        is_valid: bool,
    },
}

impl LicenseInfo {
    /// True when the license is both authentic and current.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Verified { is_valid: true, .. })
    }

    /// The rejection reason, if verification could not proceed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Rejected { error } => Some(error),
            Self::Verified { .. } => None,
        }
    }
}

/// Creates a wrapped license text for a payload.
///
/// # Errors
///
/// Fails loudly on unusable key material or a payload that cannot be
/// serialized; nothing is ever silently issued.
pub fn create(
    private_key_pem: &str,
    payload: &LicensePayload,
    licensee: Option<&str>,
) -> LicenseResult<String> {
    let signing_key = SigningKey::from_pem(private_key_pem)?;
    let payload_bytes = payload.to_bytes()?;
    let signature_hex = signing_key.sign_hex(&payload_bytes)?;
    let frame_text = frame::encode(FORMAT_VERSION, &signature_hex, &payload_bytes)?;

    Ok(wrap::wrap(&frame_text, licensee))
}

/// Creates a license from an arbitrary JSON value.
///
/// # Errors
///
/// Additionally to [`create`], rejects any value that is not a JSON
/// object: `null`, arrays, and scalars are caller errors, not licenses.
pub fn create_from_value(
    private_key_pem: &str,
    payload: Value,
    licensee: Option<&str>,
) -> LicenseResult<String> {
    let payload = LicensePayload::from_value(payload)?;
    create(private_key_pem, &payload, licensee)
}

/// Checks whether `license_text` carries a valid signature for `public_key_pem`.
///
/// # Errors
///
/// `Err` only for an unusable public key. Malformed or tampered license
/// text is untrusted input and comes back as `Ok(false)`.
pub fn verify(public_key_pem: &str, license_text: &str) -> LicenseResult<bool> {
    let verifying_key = VerifyingKey::from_pem(public_key_pem)?;

    match recover_frame(license_text) {
        Ok(frame) => {
            let is_valid = verifying_key.verify_hex(&frame.payload, &frame.signature_hex);
            if !is_valid {
                debug!("License signature check failed");
            }
            Ok(is_valid)
        }
        Err(e) => {
            debug!("License text did not decode: {e}");
            Ok(false)
        }
    }
}

/// Recovers the payload from a license text without checking the signature.
///
/// Any stage failure yields `None`. Callers wanting trust must pair this
/// with [`verify`]; on its own it only inspects what the text claims.
#[must_use]
pub fn extract_payload(license_text: &str) -> Option<LicensePayload> {
    let frame = match recover_frame(license_text) {
        Ok(frame) => frame,
        Err(e) => {
            debug!("License text did not decode: {e}");
            return None;
        }
    };

    match LicensePayload::from_slice(&frame.payload) {
        Ok(payload) => Some(payload),
        Err(e) => {
            debug!("License payload did not deserialize: {e}");
            None
        }
    }
}

/// Runs the full verification pipeline and reports the result.
///
/// The stages gate sequentially: an invalid signature rejects before the
/// payload is touched, an unrecoverable payload rejects before the window
/// check. The validity window is `reference < isd + days * 86400s`, strict:
/// the instant exactly at the boundary is already expired. A missing or
/// unparsable issue date or day count places the license outside its window
/// rather than rejecting it. `reference` defaults to now.
///
/// # Errors
///
/// `Err` only for an unusable public key.
pub fn license_info(
    public_key_pem: &str,
    license_text: &str,
    reference: Option<DateTime<Utc>>,
) -> LicenseResult<LicenseInfo> {
    if !verify(public_key_pem, license_text)? {
        return Ok(LicenseInfo::Rejected {
            error: "license signature is invalid".to_string(),
        });
    }

    let Some(payload) = extract_payload(license_text) else {
        return Ok(LicenseInfo::Rejected {
            error: "could not recover payload from license text".to_string(),
        });
    };

    let reference = reference.unwrap_or_else(Utc::now);
    let is_in_validity_period = payload.expires_at().is_some_and(|expiry| reference < expiry);

    Ok(LicenseInfo::Verified {
        payload,
        is_signature_valid: true,
        is_in_validity_period,
        is_valid: is_in_validity_period,
    })
}

fn recover_frame(license_text: &str) -> Result<SignedFrame, DecodeError> {
    let raw = wrap::unwrap(license_text).ok_or(DecodeError::EmptyBody)?;
    frame::decode(&raw)
}
