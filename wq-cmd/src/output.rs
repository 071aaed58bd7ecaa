//! Text renderings of an annual series.

use clap::ValueEnum;
use wq_data::annual::AnnualSeries;
use wq_utils::numbers::format_hundredths;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns for the terminal
    Table,
    /// Array of `{year, oxygen, turbidity}` objects
    Json,
    /// `year,oxygen_mg_l,turbidity_ntu` with a header row
    Csv,
}

pub fn render(series: &AnnualSeries, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(series)),
        OutputFormat::Json => render_json(series),
        OutputFormat::Csv => render_csv(series),
    }
}

pub fn render_table(series: &AnnualSeries) -> String {
    let mut out = format!("{:<6} {:>14} {:>15}\n", "year", "oxygen (mg/L)", "turbidity (NTU)");
    for row in series.rows() {
        out.push_str(&format!(
            "{:<6} {:>14} {:>15}\n",
            row.year,
            format_hundredths(row.oxygen),
            format_hundredths(row.turbidity)
        ));
    }
    out
}

pub fn render_json(series: &AnnualSeries) -> anyhow::Result<String> {
    let rows: Vec<_> = series.rows().collect();
    let mut text = serde_json::to_string_pretty(&rows)?;
    text.push('\n');
    Ok(text)
}

pub fn render_csv(series: &AnnualSeries) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["year", "oxygen_mg_l", "turbidity_ntu"])?;
    for row in series.rows() {
        writer.write_record([
            row.year.to_string(),
            format_hundredths(row.oxygen),
            format_hundredths(row.turbidity),
        ])?;
    }
    let bytes = writer.into_inner().map_err(|e| anyhow::anyhow!("{}", e))?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> AnnualSeries {
        AnnualSeries {
            years: vec![2019, 2020],
            oxygen: vec![6.5, 7.0],
            turbidity: vec![20.25, 12.0],
        }
    }

    #[test]
    fn test_table() {
        let text = render_table(&series());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("year"));
        assert_eq!(lines[1], "2019             6.50           20.25");
        assert_eq!(lines[2], "2020             7.00           12.00");
    }

    #[test]
    fn test_csv() {
        let text = render_csv(&series()).unwrap();
        assert_eq!(
            text,
            "year,oxygen_mg_l,turbidity_ntu\n2019,6.50,20.25\n2020,7.00,12.00\n"
        );
    }

    #[test]
    fn test_json() {
        let text = render(&series(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[1]["year"], 2020);
        assert_eq!(value[1]["oxygen"], 7.0);
        assert_eq!(value[0]["turbidity"], 20.25);
    }

    #[test]
    fn test_empty_series_has_only_header() {
        let text = render_csv(&AnnualSeries::default()).unwrap();
        assert_eq!(text, "year,oxygen_mg_l,turbidity_ntu\n");
        assert_eq!(render_table(&AnnualSeries::default()).lines().count(), 1);
    }
}
