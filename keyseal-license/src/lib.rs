//! Offline license keys for Keyseal.
//!
//! Issues and verifies compact, human-copyable license blocks. A license
//! carries an arbitrary JSON payload (issue date, validity length, licensee
//! attributes) and a DSA/SHA-1 signature; a verifier holding only the
//! public key confirms authenticity and time-validity with no server
//! round-trip.
//!
//! # License Text Format
//!
//! ```text
//! ---BEGIN LICENSE KEY---
//! ---This personal license is issued to Alice.---        (optional)
//! <base64 body, wrapped at 64 columns>
//! ---END LICENSE KEY---
//! ```
//!
//! The unwrapped body is `<2-char version><base64 blob>`; the blob is a
//! 4-digit decimal length field, the hex-encoded DER signature it measures,
//! and the serialized JSON payload the signature covers.
//!
//! # Design Principles
//!
//! - **Offline verification**: no network, no persisted state, pure
//!   functions over the caller's key strings and license text
//! - **Untrusted input never crashes**: malformed or tampered license text
//!   degrades to `false` / `None` / a rejected report
//! - **Loud caller errors**: unusable key material and non-object payloads
//!   fail fast with typed errors

mod error;
pub mod frame;
mod license;
mod payload;
mod signing;
pub mod wrap;

pub use error::{DecodeError, LicenseError, LicenseResult};
pub use frame::{FORMAT_VERSION, SignedFrame};
pub use license::{LicenseInfo, create, create_from_value, extract_payload, license_info, verify};
pub use payload::{ISSUE_DATE_KEY, LicensePayload, VALIDITY_DAYS_KEY};
pub use signing::{SigningKey, VerifyingKey};
pub use wrap::{FOOTER, HEADER};
