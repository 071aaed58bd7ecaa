//! Validated measurements reduced from raw records.

use crate::record::{Field, RawRecord};
use chrono::TimeZone;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use wq_utils::dates::calendar_year_in;
use wq_utils::numbers::parse_leading_float;

/// A usable reading: the local calendar year and both metrics.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct Measurement {
    pub year: i32,
    /// Dissolved oxygen in mg/L
    pub oxygen: f64,
    /// Turbidity in NTU
    pub turbidity: f64,
}

/// Why a raw record did not become a measurement.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Rejection {
    MissingField(Field),
    NotNumeric(Field),
    InvalidDate,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::MissingField(field) => write!(f, "missing field {field}"),
            Rejection::NotNumeric(field) => write!(f, "non-numeric {field}"),
            Rejection::InvalidDate => f.write_str("unparseable measurement date"),
        }
    }
}

impl Measurement {
    /// Validate a raw record and reduce it to a measurement.
    ///
    /// The year is taken in `tz`; callers normally pass `chrono::Local`.
    pub fn from_record<Tz: TimeZone>(record: &RawRecord, tz: &Tz) -> Result<Self, Rejection> {
        if let Some(field) = record.missing_field() {
            return Err(Rejection::MissingField(field));
        }
        let year = record
            .text(Field::MeasurementDate)
            .and_then(|raw| calendar_year_in(raw, tz).ok())
            .ok_or(Rejection::InvalidDate)?;
        let oxygen = numeric(record, Field::DissolvedOxygen)?;
        let turbidity = numeric(record, Field::Turbidity)?;
        Ok(Measurement {
            year,
            oxygen,
            turbidity,
        })
    }
}

fn numeric(record: &RawRecord, field: Field) -> Result<f64, Rejection> {
    let value = match record.get(field) {
        Some(Value::String(s)) => parse_leading_float(s),
        Some(Value::Number(n)) => n.as_f64().filter(|v| v.is_finite()),
        _ => None,
    };
    value.ok_or(Rejection::NotNumeric(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn record(json: &str) -> RawRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_valid_record() {
        let r = record(
            r#"{"oxigeno_disuelto":"6.0","turbiedad":"10","fecha_de_la_medicion":"2020-03-01T00:00:00.000"}"#,
        );
        assert_eq!(
            Measurement::from_record(&r, &Utc),
            Ok(Measurement {
                year: 2020,
                oxygen: 6.0,
                turbidity: 10.0
            })
        );
    }

    #[test]
    fn test_missing_field() {
        let r = record(r#"{"oxigeno_disuelto":"","turbiedad":"5","fecha_de_la_medicion":"2021-01-01"}"#);
        assert_eq!(
            Measurement::from_record(&r, &Utc),
            Err(Rejection::MissingField(Field::DissolvedOxygen))
        );
    }

    #[test]
    fn test_non_numeric_value_rejects_whole_record() {
        let r = record(r#"{"oxigeno_disuelto":"7.1","turbiedad":"N/A","fecha_de_la_medicion":"2021-01-01"}"#);
        assert_eq!(
            Measurement::from_record(&r, &Utc),
            Err(Rejection::NotNumeric(Field::Turbidity))
        );
        let r = record(r#"{"oxigeno_disuelto":"s.d.","turbiedad":"3","fecha_de_la_medicion":"2021-01-01"}"#);
        assert_eq!(
            Measurement::from_record(&r, &Utc),
            Err(Rejection::NotNumeric(Field::DissolvedOxygen))
        );
        let r = record(r#"{"oxigeno_disuelto":true,"turbiedad":"3","fecha_de_la_medicion":"2021-01-01"}"#);
        assert_eq!(
            Measurement::from_record(&r, &Utc),
            Err(Rejection::NotNumeric(Field::DissolvedOxygen))
        );
    }

    #[test]
    fn test_numeric_json_and_zero() {
        let r = record(r#"{"oxigeno_disuelto":8.25,"turbiedad":0,"fecha_de_la_medicion":"2022-06-01"}"#);
        let m = Measurement::from_record(&r, &Utc).unwrap();
        assert_eq!(m.oxygen, 8.25);
        assert_eq!(m.turbidity, 0.0);
    }

    #[test]
    fn test_invalid_date() {
        let r = record(r#"{"oxigeno_disuelto":"7","turbiedad":"3","fecha_de_la_medicion":"ayer"}"#);
        assert_eq!(Measurement::from_record(&r, &Utc), Err(Rejection::InvalidDate));
        let r = record(r#"{"oxigeno_disuelto":"7","turbiedad":"3","fecha_de_la_medicion":20200101}"#);
        assert_eq!(Measurement::from_record(&r, &Utc), Err(Rejection::InvalidDate));
    }

    #[test]
    fn test_year_boundary_in_negative_offset() {
        let west = FixedOffset::west_opt(5 * 3600).unwrap();
        let floating = record(
            r#"{"oxigeno_disuelto":"7","turbiedad":"3","fecha_de_la_medicion":"2019-12-31T00:00:00.000"}"#,
        );
        assert_eq!(Measurement::from_record(&floating, &west).unwrap().year, 2019);

        let bare = record(
            r#"{"oxigeno_disuelto":"7","turbiedad":"3","fecha_de_la_medicion":"2020-01-01"}"#,
        );
        assert_eq!(Measurement::from_record(&bare, &west).unwrap().year, 2019);
        assert_eq!(Measurement::from_record(&bare, &Utc).unwrap().year, 2020);

        let zoned = record(
            r#"{"oxigeno_disuelto":"7","turbiedad":"3","fecha_de_la_medicion":"2020-01-01T03:00:00Z"}"#,
        );
        assert_eq!(Measurement::from_record(&zoned, &west).unwrap().year, 2019);
        assert_eq!(Measurement::from_record(&zoned, &Utc).unwrap().year, 2020);
    }
}
