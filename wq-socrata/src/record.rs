//! Raw records as returned by the Socrata JSON API.

use crate::error::{Result, SocrataError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// JSON key of the dissolved oxygen reading (mg/L).
pub const OXYGEN_KEY: &str = "oxigeno_disuelto";
/// JSON key of the turbidity reading (NTU).
pub const TURBIDITY_KEY: &str = "turbiedad";
/// JSON key of the measurement timestamp.
pub const DATE_KEY: &str = "fecha_de_la_medicion";

/// The three fields a record must carry to be usable.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Field {
    DissolvedOxygen,
    Turbidity,
    MeasurementDate,
}

impl Field {
    pub const REQUIRED: [Field; 3] = [
        Field::DissolvedOxygen,
        Field::Turbidity,
        Field::MeasurementDate,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Field::DissolvedOxygen => OXYGEN_KEY,
            Field::Turbidity => TURBIDITY_KEY,
            Field::MeasurementDate => DATE_KEY,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One element of the API response.
///
/// Only the three required fields are typed; every other column is kept
/// as-is in `other`. Values stay as raw JSON because the API usually
/// string-encodes numbers but is not guaranteed to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "oxigeno_disuelto", default, skip_serializing_if = "Option::is_none")]
    pub dissolved_oxygen: Option<Value>,
    #[serde(rename = "turbiedad", default, skip_serializing_if = "Option::is_none")]
    pub turbidity: Option<Value>,
    #[serde(rename = "fecha_de_la_medicion", default, skip_serializing_if = "Option::is_none")]
    pub measured_at: Option<Value>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl RawRecord {
    pub fn get(&self, field: Field) -> Option<&Value> {
        match field {
            Field::DissolvedOxygen => self.dissolved_oxygen.as_ref(),
            Field::Turbidity => self.turbidity.as_ref(),
            Field::MeasurementDate => self.measured_at.as_ref(),
        }
    }

    /// Whether `field` is present and non-empty.
    ///
    /// Absent, `null` and blank strings count as missing. A zero reading,
    /// as `0` or `"0"`, is present.
    pub fn has(&self, field: Field) -> bool {
        match self.get(field) {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.trim().is_empty(),
            Some(_) => true,
        }
    }

    /// First required field that is missing, if any.
    pub fn missing_field(&self) -> Option<Field> {
        Field::REQUIRED.into_iter().find(|field| !self.has(*field))
    }

    /// Value of `field` as text, for string-encoded columns.
    pub fn text(&self, field: Field) -> Option<&str> {
        match self.get(field) {
            Some(Value::String(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Convert a decoded response into records.
    ///
    /// Array elements that are not objects become empty records, so they
    /// are dropped by validation like any other incomplete row.
    pub fn records_from_value(value: Value) -> Result<Vec<RawRecord>> {
        match value {
            Value::Array(items) => Ok(items
                .into_iter()
                .map(|item| serde_json::from_value(item).unwrap_or_default())
                .collect()),
            Value::Object(map) => {
                let message = map
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("JSON object instead of a record array");
                Err(SocrataError::UnexpectedShape(message.to_string()))
            }
            other => Err(SocrataError::UnexpectedShape(format!(
                "expected a JSON array of records, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Parse a response body string into records.
    pub fn parse_response(body: &str) -> Result<Vec<RawRecord>> {
        let value: Value = serde_json::from_str(body)?;
        RawRecord::records_from_value(value)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
