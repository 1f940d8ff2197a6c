//! Small `{label, value}` sequences handed to the bar charts.

use serde::{Deserialize, Serialize};

use crate::calculator::CalculatorOutput;
use crate::projection::{PROJECTION, PROJECTION_PRICES_SEK};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Annual revenue (Mkr) at the fixed comparison price points.
pub fn revenue_comparison(output: &CalculatorOutput) -> Vec<SeriesPoint> {
    output
        .comparison
        .iter()
        .map(|p| SeriesPoint::new(format!("{} kr", p.price_sek), p.annual_mkr))
        .collect()
}

/// Impressions next to unique reach.
pub fn reach_series(output: &CalculatorOutput) -> Vec<SeriesPoint> {
    vec![
        SeriesPoint::new("Visningar", output.ads.monthly_impressions as f64),
        SeriesPoint::new("Unik reach", output.ads.unique_reach as f64),
    ]
}

/// One profit group per adoption row of the projection table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfitGroup {
    pub adoption: String,
    /// Profit (Mkr) keyed by price label, e.g. `"19 kr"`.
    pub bars: Vec<SeriesPoint>,
}

pub fn profit_series() -> Vec<ProfitGroup> {
    PROJECTION
        .iter()
        .map(|row| ProfitGroup {
            adoption: format!("{}%", row.adoption_pct),
            bars: PROJECTION_PRICES_SEK
                .iter()
                .zip(row.profit_mkr)
                .map(|(price, profit)| SeriesPoint::new(format!("{price} kr"), profit))
                .collect(),
        })
        .collect()
}

/// Largest value across the given points, used to scale bar heights.
pub fn max_value<'a>(points: impl IntoIterator<Item = &'a SeriesPoint>) -> f64 {
    points.into_iter().map(|p| p.value).fold(0.0, f64::max)
}
