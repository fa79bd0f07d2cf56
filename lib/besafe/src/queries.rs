use crate::error::QueryError;
use crate::graph::{GraphProvider, InMemoryGraph};
use crate::listing::sort_codes;
use crate::mapper::{map_solutions, DistinctValue, FromSolution};
use crate::query::{
    aggregated_statistics_query, distinct_values_query, filtered_measurements_query,
    linked_measurements_query, measurements_query, ozone_episodes_query, SelectQueryBuilder,
};
use besafe_model::vocab::air;
use besafe_model::{
    AggregatedStat, EpisodeFilter, HourlyMeasurement, LinkedDataFilter, LinkedMeasurement,
    Measurement, MeasurementFilter, OzoneEpisode, StatisticsFilter,
};
use oxigraph::model::NamedNodeRef;
use tracing::debug;

/// The air quality operations, evaluated against a shared read-only graph.
///
/// Every operation runs a single query and returns all the records it produces, in the order
/// fixed by the query.
#[derive(Clone)]
pub struct AirQualityQueries<G = InMemoryGraph> {
    graph: G,
}

impl<G: GraphProvider> AirQualityQueries<G> {
    pub fn new(graph: G) -> Self {
        Self { graph }
    }

    /// Up to 200 measurements with their first-hour reading.
    pub fn measurements(&self) -> Result<Vec<Measurement>, QueryError> {
        self.run(&measurements_query())
    }

    /// Up to 500 measurements with all their hourly readings.
    pub fn filtered_measurements(
        &self,
        filter: &MeasurementFilter,
    ) -> Result<Vec<HourlyMeasurement>, QueryError> {
        self.run(&filtered_measurements_query(filter))
    }

    /// The ozone episodes within the bounds of `filter`, latest first.
    pub fn ozone_episodes(&self, filter: &EpisodeFilter) -> Result<Vec<OzoneEpisode>, QueryError> {
        self.run(&ozone_episodes_query(filter))
    }

    /// Up to `filter.limit` measurements with their external links.
    pub fn linked_measurements(
        &self,
        filter: &LinkedDataFilter,
    ) -> Result<Vec<LinkedMeasurement>, QueryError> {
        self.run(&linked_measurements_query(filter))
    }

    /// Statistics of the first-hour reading per station and magnitude.
    pub fn aggregated_statistics(
        &self,
        filter: &StatisticsFilter,
    ) -> Result<Vec<AggregatedStat>, QueryError> {
        self.run(&aggregated_statistics_query(filter))
    }

    /// The distinct station ids, sorted.
    pub fn stations(&self) -> Result<Vec<String>, QueryError> {
        self.distinct_codes(air::STATION)
    }

    /// The distinct magnitude codes, sorted.
    pub fn magnitudes(&self) -> Result<Vec<String>, QueryError> {
        self.distinct_codes(air::MAGNITUDE)
    }

    fn distinct_codes(&self, predicate: NamedNodeRef<'_>) -> Result<Vec<String>, QueryError> {
        let values: Vec<DistinctValue> = self.run(&distinct_values_query(predicate))?;
        Ok(sort_codes(values.into_iter().map(|value| value.0)))
    }

    fn run<T: FromSolution>(&self, query: &SelectQueryBuilder) -> Result<Vec<T>, QueryError> {
        debug!(query = %query, "Evaluating query");
        let records: Vec<T> = map_solutions(self.graph.select(query.build()?)?)?;
        debug!(records = records.len(), "Mapped query solutions");
        Ok(records)
    }
}
