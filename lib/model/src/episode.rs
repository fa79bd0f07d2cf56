use serde::Serialize;

/// Joins the population measures of an episode that has more than one.
pub const POPULATION_MEASURE_SEPARATOR: &str = " | ";

/// An activation of the high ozone pollution protocol.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OzoneEpisode {
    pub episode_uri: String,
    pub start_date: String,
    pub end_date: String,
    pub scenario: Option<String>,
    /// All measures recommended to the population, joined by
    /// [`POPULATION_MEASURE_SEPARATOR`].
    pub population_measures: Option<String>,
}

impl OzoneEpisode {
    /// Splits [`Self::population_measures`] into the individual measures.
    pub fn population_measure_list(&self) -> Vec<&str> {
        self.population_measures
            .as_deref()
            .map(|measures| {
                measures
                    .split(POPULATION_MEASURE_SEPARATOR)
                    .map(str::trim)
                    .filter(|measure| !measure.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}
