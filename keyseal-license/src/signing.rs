//! DSA over SHA-1 ("DSS1") signing and verification for license payloads.
//!
//! Signatures are DER-encoded and travel through the frame as lowercase hex
//! text. Key material arrives as PEM strings (PKCS#8 for the private key,
//! SPKI for the public key); key loading and storage stay outside this
//! crate.

use dsa::{
    Signature as DsaSignature, SigningKey as DsaSigningKey, VerifyingKey as DsaVerifyingKey,
};
use pkcs8::{DecodePrivateKey, DecodePublicKey};
use sha1::{Digest, Sha1};
use signature::{DigestSigner, DigestVerifier, SignatureEncoding};

use crate::error::{LicenseError, LicenseResult};

/// DSA signing key (secret). Held by the issuer only.
pub struct SigningKey(DsaSigningKey);

/// DSA verifying key (public). Distributed with the host application.
pub struct VerifyingKey(DsaVerifyingKey);

impl SigningKey {
    /// Parses a PKCS#8 PEM private key.
    ///
    /// # Errors
    ///
    /// Returns [`LicenseError::InvalidPrivateKey`] on malformed PEM or a
    /// non-DSA key. Signing with bad key material is caller misuse and
    /// fails loudly.
    pub fn from_pem(pem: &str) -> LicenseResult<Self> {
        DsaSigningKey::from_pkcs8_pem(pem)
            .map(Self)
            .map_err(|e| LicenseError::InvalidPrivateKey(e.to_string()))
    }

    /// Signs `message` and returns the DER signature hex-encoded.
    pub fn sign_hex(&self, message: &[u8]) -> LicenseResult<String> {
        let signature: DsaSignature = self
            .0
            .try_sign_digest(Sha1::new_with_prefix(message))
            .map_err(|e| LicenseError::Signing(e.to_string()))?;

        Ok(hex::encode(signature.to_vec()))
    }
}

impl VerifyingKey {
    /// Parses an SPKI PEM public key.
    ///
    /// # Errors
    ///
    /// Returns [`LicenseError::InvalidPublicKey`] on malformed PEM or a
    /// non-DSA key.
    pub fn from_pem(pem: &str) -> LicenseResult<Self> {
        DsaVerifyingKey::from_public_key_pem(pem)
            .map(Self)
            .map_err(|e| LicenseError::InvalidPublicKey(e.to_string()))
    }

    /// Checks a hex-encoded signature against `message`.
    ///
    /// The signature travels inside untrusted license text, so every
    /// failure (odd-length hex, garbage DER, cryptographic rejection)
    /// maps to `false` and nothing here can panic or return an error.
    #[must_use]
    pub fn verify_hex(&self, message: &[u8], signature_hex: &str) -> bool {
        let Ok(der) = hex::decode(signature_hex) else {
            return false;
        };
        let Ok(signature) = DsaSignature::try_from(der.as_slice()) else {
            return false;
        };

        self.0
            .verify_digest(Sha1::new_with_prefix(message), &signature)
            .is_ok()
    }
}
