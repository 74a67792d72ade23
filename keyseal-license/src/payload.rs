//! License payload: the issuer-defined data that gets signed.
//!
//! A payload is a JSON object. Two keys drive the validity check, `isd`
//! (issue date, ISO-8601) and `days` (validity length); everything else
//! passes through the codec untouched. Key order is preserved from
//! construction to serialization, and the signature always covers the exact
//! serialized bytes embedded in the frame, so verifiers never re-serialize.

use crate::error::{DecodeError, LicenseError, LicenseResult};
use chrono::{DateTime, Duration, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Payload key holding the ISO-8601 issue date.
pub const ISSUE_DATE_KEY: &str = "isd";

/// Payload key holding the validity length in days.
pub const VALIDITY_DAYS_KEY: &str = "days";

const SECS_PER_DAY: i64 = 24 * 60 * 60;

/// An ordered JSON object carrying the licensed attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LicensePayload {
    fields: Map<String, Value>,
}

impl LicensePayload {
    /// Creates a payload with the issue date and validity length seeded.
    #[must_use]
    pub fn new(issued_at: DateTime<Utc>, days: u64) -> Self {
        let mut fields = Map::new();
        fields.insert(
            ISSUE_DATE_KEY.to_string(),
            Value::String(issued_at.to_rfc3339_opts(SecondsFormat::Secs, true)),
        );
        fields.insert(VALIDITY_DAYS_KEY.to_string(), Value::from(days));
        Self { fields }
    }

    /// Builds a payload from an arbitrary JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`LicenseError::PayloadNotObject`] for anything that is not
    /// an object: `null`, arrays, and scalars cannot be licensed.
    pub fn from_value(value: Value) -> LicenseResult<Self> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            Value::Null => Err(LicenseError::PayloadNotObject("null")),
            Value::Array(_) => Err(LicenseError::PayloadNotObject("an array")),
            Value::Bool(_) => Err(LicenseError::PayloadNotObject("a boolean")),
            Value::Number(_) => Err(LicenseError::PayloadNotObject("a number")),
            Value::String(_) => Err(LicenseError::PayloadNotObject("a string")),
        }
    }

    /// Adds a field, builder style.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Inserts a field, returning the previous value if the key existed.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(key.into(), value.into())
    }

    /// Looks up a field by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Returns the underlying ordered map.
    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Serializes the payload to the exact bytes the signature covers.
    pub fn to_bytes(&self) -> LicenseResult<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Deserializes a payload from frame bytes.
    ///
    /// Anything that is not a JSON object is a [`DecodeError`]; license
    /// text is untrusted and must never panic the caller.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DecodeError> {
        serde_json::from_slice(bytes).map_err(|e| DecodeError::Payload(e.to_string()))
    }

    /// Parses the `isd` field.
    ///
    /// Accepts a full RFC 3339 timestamp or a bare `YYYY-MM-DD` date, which
    /// is taken as midnight UTC. Returns `None` when the field is missing or
    /// malformed.
    #[must_use]
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.fields.get(ISSUE_DATE_KEY)?.as_str()?;

        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts.with_timezone(&Utc));
        }

        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()?
            .and_hms_opt(0, 0, 0)
            .map(|naive| naive.and_utc())
    }

    /// Returns the `days` field as a non-negative integer.
    #[must_use]
    pub fn validity_days(&self) -> Option<u64> {
        self.fields.get(VALIDITY_DAYS_KEY)?.as_u64()
    }

    /// Computes the expiry instant: issue date plus `days` days.
    ///
    /// `None` when either validity field is missing or malformed, or when
    /// the arithmetic would overflow the timestamp range.
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        let issued_at = self.issued_at()?;
        let secs = i64::try_from(self.validity_days()?)
            .ok()?
            .checked_mul(SECS_PER_DAY)?;
        issued_at.checked_add_signed(Duration::try_seconds(secs)?)
    }
}
