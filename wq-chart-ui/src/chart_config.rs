//! Chart.js configuration objects.
//!
//! These structs serialize to the exact JSON shape `new Chart(canvas, config)`
//! expects, so the JS side only has to `JSON.parse` and hand it over.

use serde::{Serialize, Serializer};
use wq_data::annual::AnnualSeries;
use wq_utils::numbers::format_hundredths;

/// Entry animation length for both persistent charts.
pub const ANIMATION_MS: u32 = 1500;
/// Bar color of the dissolved oxygen series.
pub const OXYGEN_COLOR: &str = "#1976d2";
/// Bar color of the turbidity series.
pub const TURBIDITY_COLOR: &str = "#ff9800";

pub const OXYGEN_LABEL: &str = "Annual mean dissolved oxygen (mg/L)";
pub const TURBIDITY_LABEL: &str = "Annual mean turbidity (NTU)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Bar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    /// Serialized as two-decimal strings (`"7.00"`).
    #[serde(serialize_with = "serialize_hundredths")]
    pub data: Vec<f64>,
    pub background_color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintain_aspect_ratio: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<Animation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<Scales>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Animation {
    pub duration: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scales {
    pub y: Axis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub begin_at_zero: bool,
}

fn serialize_hundredths<S: Serializer>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(values.iter().copied().map(format_hundredths))
}

impl Dataset {
    pub fn new(label: &str, data: Vec<f64>, color: &str) -> Self {
        Self {
            label: label.to_string(),
            data,
            background_color: color.to_string(),
        }
    }
}

impl ChartConfig {
    /// One bar per year: mean dissolved oxygen.
    pub fn annual_oxygen(series: &AnnualSeries) -> Self {
        Self {
            chart_type: ChartType::Bar,
            data: ChartData {
                labels: series.labels(),
                datasets: vec![Dataset::new(OXYGEN_LABEL, series.oxygen.clone(), OXYGEN_COLOR)],
            },
            options: ChartOptions {
                responsive: true,
                animation: Some(Animation {
                    duration: ANIMATION_MS,
                }),
                ..Default::default()
            },
        }
    }

    /// Grouped bars per year: mean oxygen next to mean turbidity, y from zero.
    pub fn oxygen_vs_turbidity(series: &AnnualSeries) -> Self {
        Self {
            chart_type: ChartType::Bar,
            data: ChartData {
                labels: series.labels(),
                datasets: vec![
                    Dataset::new(OXYGEN_LABEL, series.oxygen.clone(), OXYGEN_COLOR),
                    Dataset::new(TURBIDITY_LABEL, series.turbidity.clone(), TURBIDITY_COLOR),
                ],
            },
            options: ChartOptions {
                responsive: true,
                animation: Some(Animation {
                    duration: ANIMATION_MS,
                }),
                scales: Some(Scales {
                    y: Axis {
                        begin_at_zero: true,
                    },
                }),
                ..Default::default()
            },
        }
    }

    /// Same type and data, sized to fill the overlay.
    pub fn enlarged(&self) -> Self {
        Self {
            chart_type: self.chart_type,
            data: self.data.clone(),
            options: ChartOptions {
                responsive: true,
                maintain_aspect_ratio: Some(false),
                ..Default::default()
            },
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn series() -> AnnualSeries {
        AnnualSeries {
            years: vec![2019, 2020],
            oxygen: vec![7.0, 6.25],
            turbidity: vec![12.0, 3.5],
        }
    }

    #[test]
    fn test_annual_oxygen_json() {
        let config = ChartConfig::annual_oxygen(&series());
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "bar",
                "data": {
                    "labels": ["2019", "2020"],
                    "datasets": [{
                        "label": OXYGEN_LABEL,
                        "data": ["7.00", "6.25"],
                        "backgroundColor": "#1976d2"
                    }]
                },
                "options": {
                    "responsive": true,
                    "animation": { "duration": 1500 }
                }
            })
        );
    }

    #[test]
    fn test_comparison_json() {
        let config = ChartConfig::oxygen_vs_turbidity(&series());
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["data"]["datasets"].as_array().unwrap().len(), 2);
        assert_eq!(value["data"]["datasets"][1]["data"], json!(["12.00", "3.50"]));
        assert_eq!(value["data"]["datasets"][1]["backgroundColor"], json!("#ff9800"));
        assert_eq!(value["options"]["scales"], json!({ "y": { "beginAtZero": true } }));
        assert_eq!(value["options"]["animation"], json!({ "duration": 1500 }));
    }

    #[test]
    fn test_enlarged_keeps_data_and_drops_aspect_ratio() {
        let config = ChartConfig::oxygen_vs_turbidity(&series());
        let enlarged = config.enlarged();
        assert_eq!(enlarged.chart_type, config.chart_type);
        assert_eq!(enlarged.data, config.data);
        let value = serde_json::to_value(&enlarged).unwrap();
        assert_eq!(
            value["options"],
            json!({ "responsive": true, "maintainAspectRatio": false })
        );
    }

    #[test]
    fn test_empty_series() {
        let config = ChartConfig::annual_oxygen(&AnnualSeries::default());
        let json = config.to_json().unwrap();
        assert!(json.contains(r#""labels":[]"#));
        assert!(json.contains(r#""data":[]"#));
    }
}
