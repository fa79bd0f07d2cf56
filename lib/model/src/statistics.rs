use serde::Serialize;

/// Aggregates of the first-hour reading over all measurements of a station and magnitude.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedStat {
    pub station: String,
    pub magnitude: String,
    /// The number of measurements that contributed a reading.
    pub count: u64,
    /// The mean reading, rounded to two decimal places.
    pub average: Option<f64>,
    pub max: Option<f64>,
    pub min: Option<f64>,
}
