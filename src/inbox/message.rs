//! Read-side view over raw contact submissions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::extractors::{dial_uri, extract_phone, PhoneField};

/// One contact submission as returned by the backend.
///
/// The backend guarantees no schema beyond a handful of conventional
/// fields (`_id`, `name`, `email`, `message`, `createdAt`, `read`), so the
/// raw JSON is kept as-is and read through accessors; each returns an
/// `Option` or a default because any field may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageRecord(Value);

impl MessageRecord {
    /// Wrap a raw JSON value as a submission record.
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The raw record.
    pub fn raw(&self) -> &Value {
        &self.0
    }

    /// Database id, when present.
    pub fn id(&self) -> Option<&str> {
        self.0.get("_id").and_then(Value::as_str)
    }

    /// Sender name.
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    /// Sender email.
    pub fn email(&self) -> Option<&str> {
        self.0.get("email").and_then(Value::as_str)
    }

    /// Message body.
    pub fn body(&self) -> Option<&str> {
        self.0.get("message").and_then(Value::as_str)
    }

    /// Submission timestamp, when present and RFC 3339.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.0
            .get("createdAt")
            .and_then(Value::as_str)
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Whether the admin has marked the submission read. Absent means no.
    pub fn is_read(&self) -> bool {
        self.0.get("read").and_then(Value::as_bool).unwrap_or(false)
    }

    /// Best-effort phone number discovered anywhere in the record.
    pub fn phone(&self) -> Option<PhoneField> {
        extract_phone(&self.0)
    }

    /// `tel:` URI for the discovered phone, when one can be formed.
    pub fn phone_dial_uri(&self) -> Option<String> {
        self.phone().and_then(|field| dial_uri(&field.value))
    }

    /// Stable identity for deduplication across polls: the database id when
    /// present, otherwise the full serialized record.
    pub fn identity(&self) -> String {
        match self.id() {
            Some(id) => id.to_owned(),
            None => self.0.to_string(),
        }
    }
}
