//! BSON to JSON conversion.
//!
//! Produces the same JSON a browser client would get from the original
//! dashboard backend: object ids as hex strings, dates as RFC 3339 strings
//! with millisecond precision, binary data as base64, everything else as
//! relaxed Extended JSON.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::SecondsFormat;
use mongodb::bson::{Bson, Document};
use serde_json::Value;

use insight_core::Record;

/// Convert a single BSON value to JSON.
#[must_use]
pub fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        // Always three fractional digits, as `Date.prototype.toJSON` prints.
        Bson::DateTime(dt) => {
            Value::String(dt.to_chrono().to_rfc3339_opts(SecondsFormat::Millis, true))
        }
        Bson::Binary(binary) => Value::String(STANDARD.encode(&binary.bytes)),
        Bson::Document(doc) => Value::Object(document_to_record(doc)),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}

/// Convert a stored document to a [`Record`], keeping field order.
#[must_use]
pub fn document_to_record(doc: Document) -> Record {
    doc.into_iter()
        .map(|(key, value)| (key, bson_to_json(value)))
        .collect()
}
