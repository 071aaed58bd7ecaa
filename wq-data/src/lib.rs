//! Data processing for water quality measurements.
//!
//! This crate turns raw API records into the annual series the charts and
//! the CLI consume: validate, bucket by year, average, order.

pub use annual::{AnnualSeries, FilterSummary, YearBucket, YearlyBuckets};
pub use pipeline::{aggregate, aggregate_response, Aggregation};

/// Year buckets and annual means
pub mod annual {
    use serde::Serialize;
    use std::collections::BTreeMap;
    use std::fmt;
    use wq_socrata::measurement::{Measurement, Rejection};
    use wq_utils::numbers::{format_hundredths, round_to_hundredths};

    /// Readings collected for one year, in processing order.
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct YearBucket {
        pub oxygen: Vec<f64>,
        pub turbidity: Vec<f64>,
    }

    /// Buckets keyed by year. A bucket exists only once a value was pushed.
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct YearlyBuckets {
        buckets: BTreeMap<i32, YearBucket>,
    }

    impl YearlyBuckets {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn push(&mut self, measurement: &Measurement) {
            let bucket = self.buckets.entry(measurement.year).or_default();
            bucket.oxygen.push(measurement.oxygen);
            bucket.turbidity.push(measurement.turbidity);
        }

        pub fn get(&self, year: i32) -> Option<&YearBucket> {
            self.buckets.get(&year)
        }

        pub fn len(&self) -> usize {
            self.buckets.len()
        }

        pub fn is_empty(&self) -> bool {
            self.buckets.is_empty()
        }

        /// Reduce every bucket to its rounded means, years ascending.
        pub fn annual_series(&self) -> AnnualSeries {
            let mut series = AnnualSeries::default();
            for (year, bucket) in &self.buckets {
                // Buckets are never empty, see `push`.
                let (Some(oxygen), Some(turbidity)) = (mean(&bucket.oxygen), mean(&bucket.turbidity))
                else {
                    continue;
                };
                series.years.push(*year);
                series.oxygen.push(round_to_hundredths(oxygen));
                series.turbidity.push(round_to_hundredths(turbidity));
            }
            series
        }
    }

    impl Extend<Measurement> for YearlyBuckets {
        fn extend<I: IntoIterator<Item = Measurement>>(&mut self, iter: I) {
            for measurement in iter {
                self.push(&measurement);
            }
        }
    }

    impl FromIterator<Measurement> for YearlyBuckets {
        fn from_iter<I: IntoIterator<Item = Measurement>>(iter: I) -> Self {
            let mut buckets = YearlyBuckets::new();
            buckets.extend(iter);
            buckets
        }
    }

    /// Arithmetic mean, `None` for an empty slice.
    pub fn mean(values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }

    /// Three parallel sequences: years ascending and the rounded means
    /// for each of them.
    #[derive(Debug, Clone, Default, PartialEq, Serialize)]
    pub struct AnnualSeries {
        pub years: Vec<i32>,
        /// Mean dissolved oxygen per year (mg/L)
        pub oxygen: Vec<f64>,
        /// Mean turbidity per year (NTU)
        pub turbidity: Vec<f64>,
    }

    /// One row of an [`AnnualSeries`].
    #[derive(Debug, Clone, Copy, PartialEq, Serialize)]
    pub struct AnnualMean {
        pub year: i32,
        pub oxygen: f64,
        pub turbidity: f64,
    }

    impl AnnualSeries {
        pub fn len(&self) -> usize {
            self.years.len()
        }

        pub fn is_empty(&self) -> bool {
            self.years.is_empty()
        }

        /// Year labels for the chart axis.
        pub fn labels(&self) -> Vec<String> {
            self.years.iter().map(|year| year.to_string()).collect()
        }

        pub fn rows(&self) -> impl Iterator<Item = AnnualMean> + '_ {
            self.years
                .iter()
                .zip(&self.oxygen)
                .zip(&self.turbidity)
                .map(|((year, oxygen), turbidity)| AnnualMean {
                    year: *year,
                    oxygen: *oxygen,
                    turbidity: *turbidity,
                })
        }

        /// Oxygen means as two-decimal strings, e.g. `7.00`.
        pub fn oxygen_text(&self) -> Vec<String> {
            self.oxygen.iter().copied().map(format_hundredths).collect()
        }

        /// Turbidity means as two-decimal strings.
        pub fn turbidity_text(&self) -> Vec<String> {
            self.turbidity.iter().copied().map(format_hundredths).collect()
        }
    }

    /// Counts of records kept and dropped during validation.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
    pub struct FilterSummary {
        pub total: usize,
        pub kept: usize,
        pub missing_field: usize,
        pub not_numeric: usize,
        pub invalid_date: usize,
    }

    impl FilterSummary {
        pub fn record(&mut self, outcome: &Result<Measurement, Rejection>) {
            self.total += 1;
            match outcome {
                Ok(_) => self.kept += 1,
                Err(Rejection::MissingField(_)) => self.missing_field += 1,
                Err(Rejection::NotNumeric(_)) => self.not_numeric += 1,
                Err(Rejection::InvalidDate) => self.invalid_date += 1,
            }
        }

        pub fn dropped(&self) -> usize {
            self.total - self.kept
        }
    }

    impl fmt::Display for FilterSummary {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(
                f,
                "kept {} of {} records ({} missing a field, {} non-numeric, {} bad date)",
                self.kept, self.total, self.missing_field, self.not_numeric, self.invalid_date
            )
        }
    }

}

/// Records-to-series pipeline
pub mod pipeline {
    use crate::annual::{AnnualSeries, FilterSummary, YearlyBuckets};
    use chrono::TimeZone;
    use log::info;
    use wq_socrata::error::Result;
    use wq_socrata::measurement::Measurement;
    use wq_socrata::record::RawRecord;

    /// The annual series plus how the input was filtered.
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Aggregation {
        pub series: AnnualSeries,
        pub summary: FilterSummary,
    }

    /// Validate, bucket and average `records`, taking years in `tz`.
    ///
    /// Invalid records are counted in the summary and otherwise ignored.
    pub fn aggregate<'a, Tz, I>(records: I, tz: &Tz) -> Aggregation
    where
        Tz: TimeZone,
        I: IntoIterator<Item = &'a RawRecord>,
    {
        let mut summary = FilterSummary::default();
        let mut buckets = YearlyBuckets::new();
        for record in records {
            let outcome = Measurement::from_record(record, tz);
            summary.record(&outcome);
            if let Ok(measurement) = outcome {
                buckets.push(&measurement);
            }
        }
        let series = buckets.annual_series();
        info!("{}; {} years", summary, series.len());
        Aggregation { series, summary }
    }

    /// Decode a response body and aggregate it.
    ///
    /// Fails only when the body itself is unusable; bad rows never fail.
    pub fn aggregate_response<Tz: TimeZone>(body: &str, tz: &Tz) -> Result<Aggregation> {
        let records = RawRecord::parse_response(body)?;
        Ok(aggregate(&records, tz))
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::{FixedOffset, Utc};
        use wq_socrata::error::SocrataError;

        const SCENARIO: &str = r#"[
            {"oxigeno_disuelto":"6.0","turbiedad":"10","fecha_de_la_medicion":"2020-03-01"},
            {"oxigeno_disuelto":"8.0","turbiedad":"14","fecha_de_la_medicion":"2020-08-01"},
            {"oxigeno_disuelto":"","turbiedad":"5","fecha_de_la_medicion":"2021-01-01"}
        ]"#;

        #[test]
        fn test_scenario_excludes_incomplete_year() {
            let aggregation = aggregate_response(SCENARIO, &Utc).unwrap();
            let series = aggregation.series;
            assert_eq!(series.years, vec![2020]);
            assert_eq!(series.oxygen_text(), vec!["7.00"]);
            assert_eq!(series.turbidity_text(), vec!["12.00"]);
            assert_eq!(aggregation.summary.kept, 2);
            assert_eq!(aggregation.summary.missing_field, 1);
        }

        #[test]
        fn test_non_numeric_record_contributes_nothing() {
            let body = r#"[
                {"oxigeno_disuelto":"7.0","turbiedad":"4","fecha_de_la_medicion":"2019-01-10"},
                {"oxigeno_disuelto":"100","turbiedad":"n.d.","fecha_de_la_medicion":"2019-02-10"},
                {"oxigeno_disuelto":"bajo","turbiedad":"90","fecha_de_la_medicion":"2019-03-10"}
            ]"#;
            let aggregation = aggregate_response(body, &Utc).unwrap();
            assert_eq!(aggregation.series.oxygen, vec![7.0]);
            assert_eq!(aggregation.series.turbidity, vec![4.0]);
            assert_eq!(aggregation.summary.not_numeric, 2);
        }

        #[test]
        fn test_mean_is_sum_over_count() {
            let body = r#"[
                {"oxigeno_disuelto":"5.1","turbiedad":"1.11","fecha_de_la_medicion":"2018-01-01"},
                {"oxigeno_disuelto":"6.2","turbiedad":"2.22","fecha_de_la_medicion":"2018-05-01"},
                {"oxigeno_disuelto":"7.4","turbiedad":"3.34","fecha_de_la_medicion":"2018-09-01"}
            ]"#;
            let series = aggregate_response(body, &Utc).unwrap().series;
            assert_eq!(series.oxygen_text(), vec!["6.23"]);
            assert_eq!(series.turbidity_text(), vec!["2.22"]);
        }

        #[test]
        fn test_years_unique_ascending_and_deterministic() {
            let body = r#"[
                {"oxigeno_disuelto":"1","turbiedad":"1","fecha_de_la_medicion":"2022-01-01"},
                {"oxigeno_disuelto":"2","turbiedad":"2","fecha_de_la_medicion":"2009-01-01"},
                {"oxigeno_disuelto":"3","turbiedad":"3","fecha_de_la_medicion":"2022-06-01"},
                {"oxigeno_disuelto":"4","turbiedad":"4","fecha_de_la_medicion":"2015-01-01"}
            ]"#;
            let first = aggregate_response(body, &Utc).unwrap();
            let second = aggregate_response(body, &Utc).unwrap();
            assert_eq!(first, second);
            assert_eq!(first.series.years, vec![2009, 2015, 2022]);
            assert!(first.series.years.windows(2).all(|w| w[0] < w[1]));
            assert_eq!(first.series.len(), first.series.oxygen.len());
            assert_eq!(first.series.len(), first.series.turbidity.len());
        }

        #[test]
        fn test_local_year_boundary() {
            let west = FixedOffset::west_opt(3 * 3600).unwrap();
            let body = r#"[
                {"oxigeno_disuelto":"4","turbiedad":"8","fecha_de_la_medicion":"2020-01-01"},
                {"oxigeno_disuelto":"6","turbiedad":"2","fecha_de_la_medicion":"2020-01-01T01:00:00Z"},
                {"oxigeno_disuelto":"9","turbiedad":"1","fecha_de_la_medicion":"2020-01-01T00:00:00.000"}
            ]"#;
            let local = aggregate_response(body, &west).unwrap().series;
            assert_eq!(local.years, vec![2019, 2020]);
            assert_eq!(local.oxygen, vec![5.0, 9.0]);
            assert_eq!(local.turbidity, vec![5.0, 1.0]);

            let utc = aggregate_response(body, &Utc).unwrap().series;
            assert_eq!(utc.years, vec![2020]);
            assert_eq!(utc.oxygen_text(), vec!["6.33"]);
        }

        #[test]
        fn test_means_match_browser_two_decimal_text() {
            let body = r#"[
                {"oxigeno_disuelto":"1.115","turbiedad":"2.675","fecha_de_la_medicion":"2018-06-01"},
                {"oxigeno_disuelto":"2.125","turbiedad":"8.345","fecha_de_la_medicion":"2019-06-01"}
            ]"#;
            let series = aggregate_response(body, &Utc).unwrap().series;
            assert_eq!(series.oxygen_text(), vec!["1.11", "2.13"]);
            assert_eq!(series.turbidity_text(), vec!["2.67", "8.34"]);
            assert_eq!(series.oxygen, vec![1.11, 2.13]);
        }

        #[test]
        fn test_empty_and_unusable_bodies() {
            let aggregation = aggregate_response("[]", &Utc).unwrap();
            assert!(aggregation.series.is_empty());
            assert_eq!(aggregation.summary.total, 0);

            assert!(matches!(
                aggregate_response("not json", &Utc),
                Err(SocrataError::ResponseParse(_))
            ));
        }
    }
}
