//! Fetch and aggregate the dataset for the CLI.

use crate::output::{render, OutputFormat};
use crate::SourceArgs;
use anyhow::Context;
use chrono::{Local, Utc};
use log::info;
use std::time::Duration;
use wq_data::pipeline::{aggregate, Aggregation};
use wq_socrata::client::WaterQualityClient;
use wq_socrata::endpoint::Endpoint;

/// Fetch records from `source` and aggregate them per calendar year.
pub async fn fetch_aggregation(source: &SourceArgs) -> anyhow::Result<Aggregation> {
    let endpoint = Endpoint::new(source.endpoint.clone(), source.limit);
    let client = WaterQualityClient::new(endpoint, Duration::from_secs(source.timeout_secs))?;
    let records = client
        .fetch_records()
        .await
        .with_context(|| format!("Failed to load records from {}", client.endpoint().url()))?;

    let aggregation = if source.utc {
        aggregate(&records, &Utc)
    } else {
        aggregate(&records, &Local)
    };
    Ok(aggregation)
}

/// Print or write the annual series.
pub async fn run_annual(
    source: &SourceArgs,
    format: OutputFormat,
    output: Option<&str>,
) -> anyhow::Result<()> {
    let aggregation = fetch_aggregation(source).await?;
    if aggregation.series.is_empty() {
        anyhow::bail!("No valid records: {}", aggregation.summary);
    }

    let text = render(&aggregation.series, format)?;
    match output {
        Some(path) => {
            std::fs::write(path, &text).with_context(|| format!("Failed to write {}", path))?;
            info!("Wrote {} years to {}", aggregation.series.len(), path);
        }
        None => print!("{}", text),
    }
    Ok(())
}

/// Print the filtering summary.
pub async fn run_summary(source: &SourceArgs) -> anyhow::Result<()> {
    let aggregation = fetch_aggregation(source).await?;
    let summary = &aggregation.summary;
    println!("records received: {}", summary.total);
    println!("records kept:     {}", summary.kept);
    println!("missing a field:  {}", summary.missing_field);
    println!("non-numeric:      {}", summary.not_numeric);
    println!("bad date:         {}", summary.invalid_date);
    println!("years:            {}", aggregation.series.len());
    Ok(())
}
