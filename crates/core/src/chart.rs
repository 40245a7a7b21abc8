//! Chart data parsing and inline rendering.
//!
//! Data points arrive as comma-separated `label:value` pairs, e.g.
//! `2020:15,2021:23,2022:35`, and are rendered as an HTML table with a
//! proportional bar per row.

use std::fmt::Write;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::html::escape_html;
use crate::{PostsmithError, Result};

/// A single labeled value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
}

/// Ordered chart data. Order is preserved for rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataPoints(Vec<DataPoint>);

impl DataPoints {
    pub fn new(points: Vec<DataPoint>) -> Self {
        Self(points)
    }

    /// Parses the compact `label:value,label:value` format.
    ///
    /// Blank segments are skipped, so `""` yields an empty sequence. A
    /// segment without a colon, with an empty label, or with a value that is
    /// not a finite number is rejected rather than dropped. The value is taken
    /// after the last colon, so labels may themselves contain colons.
    ///
    /// # Example
    ///
    /// ```rust
    /// use postsmith_core::DataPoints;
    ///
    /// let points = DataPoints::parse("2020:15,2021:23").unwrap();
    /// assert_eq!(points.len(), 2);
    /// assert!(DataPoints::parse("2020:abc").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let mut points = Vec::new();

        for segment in input.split(',') {
            let pair = segment.trim();
            if pair.is_empty() {
                continue;
            }

            let (label, value) = pair
                .rsplit_once(':')
                .ok_or_else(|| PostsmithError::InvalidDataPoints(format!("missing ':' in pair {pair:?}")))?;

            let label = label.trim();
            if label.is_empty() {
                return Err(PostsmithError::InvalidDataPoints(format!("empty label in pair {pair:?}")));
            }

            let value = value.trim();
            let number = value
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or_else(|| PostsmithError::InvalidDataPoints(format!("value {value:?} for {label:?} is not a number")))?;

            points.push(DataPoint { label: label.to_string(), value: number });
        }

        Ok(Self(points))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DataPoint> {
        self.0.iter()
    }

    /// Pairs as `(label, value)` tuples, in order.
    pub fn pairs(&self) -> Vec<(&str, f64)> {
        self.0.iter().map(|p| (p.label.as_str(), p.value)).collect()
    }
}

impl FromStr for DataPoints {
    type Err = PostsmithError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A titled dataset ready to be rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub points: DataPoints,
}

impl Default for ChartSpec {
    fn default() -> Self {
        let points = [("2020", 15.0), ("2021", 23.0), ("2022", 35.0), ("2023", 48.0), ("2024", 62.0)]
            .into_iter()
            .map(|(label, value)| DataPoint { label: label.to_string(), value })
            .collect();

        Self { title: "Solar Installation Growth (%)".to_string(), points: DataPoints(points) }
    }
}

/// Renders the dataset as a captioned table with one bar per row.
///
/// Bar widths are relative to the largest value; non-positive maxima render
/// empty bars.
pub fn render_chart(chart: &ChartSpec) -> String {
    let max = chart.points.iter().map(|p| p.value).fold(f64::MIN, f64::max);

    let mut html = String::new();
    html.push_str("<figure class=\"data-visualization\">\n");
    html.push_str("<table class=\"chart-table\">\n");
    let _ = writeln!(html, "<caption>{}</caption>", escape_html(&chart.title));
    html.push_str("<thead><tr><th scope=\"col\">Label</th><th scope=\"col\">Value</th><th scope=\"col\">Share of peak</th></tr></thead>\n");
    html.push_str("<tbody>\n");

    for point in chart.points.iter() {
        let width = if max > 0.0 { (point.value.max(0.0) / max * 100.0).round() } else { 0.0 };
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td>{}</td><td><div class=\"chart-bar\" style=\"width: {}%\" aria-hidden=\"true\"></div></td></tr>",
            escape_html(&point.label),
            point.value,
            width
        );
    }

    html.push_str("</tbody>\n</table>\n</figure>\n");
    html
}
