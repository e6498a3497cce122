//! Classification of the loosely typed tracking payload into [`NormalizedResult`].
//!
//! Evaluation order is fixed: status code, then `data`, then `noref`, then
//! `sekolah`. The first populated shape wins.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Status code the tracking endpoint uses for a successful lookup.
pub const STATUS_OK: i64 = 200;

/// Stored in place of a status code that is not an integral number.
pub const UNRECOGNIZED_STATUS: i64 = i64::MIN;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseStatus {
    /// Integral numbers are kept (`200.0` reads as 200); anything else,
    /// including the string `"200"`, becomes [`UNRECOGNIZED_STATUS`].
    #[serde(deserialize_with = "lenient_code")]
    pub code: i64,
    #[serde(default, deserialize_with = "lenient_message")]
    pub message: Option<String>,
}

/// Payload exactly as the endpoint returned it.
///
/// The optional payload fields stay untyped so that `null`, missing or
/// wrong-typed values never fail decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTrackingResponse {
    pub status: ResponseStatus,
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub noref: Value,
    #[serde(default)]
    pub sekolah: Value,
}

impl RawTrackingResponse {
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NormalizedResult {
    Detail(DetailRecord),
    ReferenceList(Vec<ReferenceRecord>),
    SchoolRecord(Map<String, Value>),
    /// `message` is the server's text when it sent one; `None` renders the generic text.
    NotFound { message: Option<String> },
}

/// A single shipment record, kept verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailRecord(Value);

impl DetailRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.as_object().and_then(|fields| fields.get(key))
    }

    pub fn text(&self, key: &str) -> Option<String> {
        self.get(key).and_then(scalar_text)
    }
}

/// One entry of the fallback reference list.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceRecord(Value);

const REFERENCE_LABEL_KEYS: [&str; 4] = ["referensi", "msm", "sp", "noref"];

impl ReferenceRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Display text: the first known identifier field, else the record itself.
    pub fn label(&self) -> String {
        if let Some(fields) = self.0.as_object() {
            for key in REFERENCE_LABEL_KEYS {
                if let Some(text) = fields.get(key).and_then(scalar_text) {
                    return text;
                }
            }
        }
        scalar_text(&self.0).unwrap_or_else(|| self.0.to_string())
    }
}

/// Classify a raw response. Pure and total.
pub fn normalize(raw: &RawTrackingResponse) -> NormalizedResult {
    if raw.status.code != STATUS_OK {
        let message = raw
            .status
            .message
            .as_deref()
            .map(str::trim)
            .filter(|message| !message.is_empty())
            .map(ToOwned::to_owned);
        return NormalizedResult::NotFound { message };
    }

    if let Some(first) = non_empty_array(&raw.data).and_then(|items| items.first()) {
        return NormalizedResult::Detail(DetailRecord::new(first.clone()));
    }

    if let Some(items) = non_empty_array(&raw.noref) {
        return NormalizedResult::ReferenceList(
            items.iter().cloned().map(ReferenceRecord::new).collect(),
        );
    }

    if let Some(record) = raw.sekolah.as_object().filter(|record| !record.is_empty()) {
        return NormalizedResult::SchoolRecord(record.clone());
    }

    NormalizedResult::NotFound { message: None }
}

fn non_empty_array(value: &Value) -> Option<&Vec<Value>> {
    value.as_array().filter(|items| !items.is_empty())
}

/// Render a scalar as text. Empty strings and `null` count as absent;
/// nested arrays and objects are serialized.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) if text.trim().is_empty() => None,
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Array(items) if items.is_empty() => None,
        Value::Object(fields) if fields.is_empty() => None,
        other => Some(other.to_string()),
    }
}

const ADDRESS_KEYS: [&str; 3] = ["address", "formatted", "name"];

/// Address fields arrive either as plain text or as a nested record.
///
/// For a record the first present of `address`, `formatted`, `name` wins;
/// without any of them the record is serialized so nothing is lost.
pub fn address_text(value: &Value) -> Option<String> {
    match value {
        Value::Object(fields) => {
            for key in ADDRESS_KEYS {
                if let Some(text) = fields.get(key).and_then(scalar_text) {
                    return Some(text);
                }
            }
            scalar_text(value)
        }
        other => scalar_text(other),
    }
}

/// JavaScript-style truthiness for a coordinate.
///
/// Numbers count when non-zero. Strings count when non-empty and numeric, so
/// `"0"` is kept as 0.0 while `""` is absent.
pub fn truthy_coordinate(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64().filter(|n| n.is_finite() && *n != 0.0),
        Value::String(text) => text.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

fn lenient_code<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let code = match &value {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|code| code.is_finite() && code.fract() == 0.0)
                .map(|code| code as i64)
        }),
        _ => None,
    };
    Ok(code.unwrap_or(UNRECOGNIZED_STATUS))
}

fn lenient_message<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    })
}
