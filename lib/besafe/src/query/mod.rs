//! The SPARQL queries behind each air quality operation.
//!
//! Every function returns a [`SelectQueryBuilder`], so callers can inspect the query text
//! before it is parsed and evaluated.

mod builder;
pub mod vars;

pub use builder::*;

use besafe_model::vocab::{air, owl, rdf, xsd};
use besafe_model::{
    DateTime, EpisodeFilter, Hour, LinkedDataFilter, MeasurementFilter, StatisticsFilter,
    POPULATION_MEASURE_SEPARATOR,
};
use oxigraph::model::{Literal, NamedNodeRef, Variable};

/// The maximum number of rows of the basic measurement listing.
pub const MEASUREMENTS_LIMIT: usize = 200;
/// The maximum number of rows of the filtered measurement listing.
pub const FILTERED_MEASUREMENTS_LIMIT: usize = 500;

fn string_literal(value: Option<&String>) -> Option<Literal> {
    value.map(|value| Literal::new_simple_literal(value.as_str()))
}

fn date_time_literal(value: Option<&DateTime>) -> Option<Literal> {
    value.map(|value| Literal::new_typed_literal(value.to_string(), xsd::DATE_TIME))
}

/// `?measurement a vocab:MedicionAire` plus the station, date and magnitude of the measurement.
fn measurement_patterns() -> SelectQueryBuilder {
    let measurement = vars::MEASUREMENT.into_owned();
    SelectQueryBuilder::new()
        .pattern(measurement.clone(), rdf::TYPE, air::MEASUREMENT)
        .pattern(measurement.clone(), air::STATION, vars::STATION.into_owned())
        .pattern(measurement.clone(), air::DATE, vars::DATE.into_owned())
        .pattern(measurement, air::MAGNITUDE, vars::MAGNITUDE.into_owned())
}

fn ordered_by_date_station_magnitude(query: SelectQueryBuilder) -> SelectQueryBuilder {
    query
        .order_by(vars::DATE.into_owned())
        .order_by(vars::STATION.into_owned())
        .order_by(vars::MAGNITUDE.into_owned())
}

fn optional_sampling_point() -> TriplePattern {
    TriplePattern::new(
        vars::MEASUREMENT.into_owned(),
        air::SAMPLING_POINT,
        vars::SAMPLING_POINT.into_owned(),
    )
}

/// The basic listing: every measurement with its first-hour reading.
pub fn measurements_query() -> SelectQueryBuilder {
    let query = measurement_patterns()
        .select(vars::STATION.into_owned())
        .select(vars::DATE.into_owned())
        .select(vars::MAGNITUDE.into_owned())
        .select(vars::VALUE.into_owned())
        .pattern(
            vars::MEASUREMENT.into_owned(),
            air::hour(Hour::H01),
            vars::VALUE.into_owned(),
        );
    ordered_by_date_station_magnitude(query).limit(MEASUREMENTS_LIMIT)
}

/// The filtered listing: measurements with all their hourly readings.
///
/// Each hour is matched in its own `OPTIONAL` group, so a missing hour leaves its variable
/// unbound instead of dropping the measurement.
pub fn filtered_measurements_query(filter: &MeasurementFilter) -> SelectQueryBuilder {
    let mut query = measurement_patterns()
        .select(vars::STATION.into_owned())
        .select(vars::DATE.into_owned())
        .select(vars::MAGNITUDE.into_owned())
        .select(vars::SAMPLING_POINT.into_owned())
        .optional([optional_sampling_point()]);
    for hour in Hour::ALL {
        let variable = Variable::new_unchecked(hour.variable_name());
        query = query.select(variable.clone()).optional([TriplePattern::new(
            vars::MEASUREMENT.into_owned(),
            air::hour(hour),
            variable,
        )]);
    }
    let query = query
        .filter(
            vars::STATION.into_owned(),
            Comparison::Equal,
            string_literal(filter.station.as_ref()),
        )
        .filter(
            vars::DATE.into_owned(),
            Comparison::Equal,
            date_time_literal(filter.date.as_ref()),
        );
    ordered_by_date_station_magnitude(query).limit(FILTERED_MEASUREMENTS_LIMIT)
}

/// Ozone episodes with their population measures joined by `" | "`, latest first.
pub fn ozone_episodes_query(filter: &EpisodeFilter) -> SelectQueryBuilder {
    let episode = vars::EPISODE.into_owned();
    SelectQueryBuilder::new()
        .select(episode.clone())
        .select(vars::START.into_owned())
        .select(vars::END.into_owned())
        .select(vars::SCENARIO.into_owned())
        .select_group_concat(
            vars::MEASURE.into_owned(),
            POPULATION_MEASURE_SEPARATOR,
            vars::MEASURES.into_owned(),
        )
        .pattern(episode.clone(), rdf::TYPE, air::OZONE_EPISODE)
        .pattern(episode.clone(), air::EPISODE_START, vars::START.into_owned())
        .pattern(episode.clone(), air::EPISODE_END, vars::END.into_owned())
        .optional([TriplePattern::new(
            episode.clone(),
            air::SCENARIO,
            vars::SCENARIO.into_owned(),
        )])
        .optional([TriplePattern::new(
            episode.clone(),
            air::POPULATION_MEASURE,
            vars::MEASURE.into_owned(),
        )])
        .filter(
            vars::START.into_owned(),
            Comparison::GreaterOrEqual,
            date_time_literal(filter.start.as_ref()),
        )
        .filter(
            vars::END.into_owned(),
            Comparison::LessOrEqual,
            date_time_literal(filter.end.as_ref()),
        )
        .group_by(episode)
        .group_by(vars::START.into_owned())
        .group_by(vars::END.into_owned())
        .group_by(vars::SCENARIO.into_owned())
        .order_by_desc(vars::START.into_owned())
}

/// `?concept a <class> ; vocab:codigo ?code ; owl:sameAs ?link`
fn concept_link(
    concept: Variable,
    class: NamedNodeRef<'_>,
    code: Variable,
    link: Variable,
) -> [TriplePattern; 3] {
    [
        TriplePattern::new(concept.clone(), rdf::TYPE, class),
        TriplePattern::new(concept.clone(), air::CODE, code),
        TriplePattern::new(concept, owl::SAME_AS, link),
    ]
}

/// Measurements with the external links of the measurement, its magnitude and its station.
pub fn linked_measurements_query(filter: &LinkedDataFilter) -> SelectQueryBuilder {
    let query = measurement_patterns()
        .select(vars::MEASUREMENT.into_owned())
        .select(vars::STATION.into_owned())
        .select(vars::DATE.into_owned())
        .select(vars::MAGNITUDE.into_owned())
        .select(vars::SAMPLING_POINT.into_owned())
        .select(vars::MEASUREMENT_LINK.into_owned())
        .select(vars::MAGNITUDE_LINK.into_owned())
        .select(vars::STATION_LINK.into_owned())
        .optional([optional_sampling_point()])
        .optional([TriplePattern::new(
            vars::MEASUREMENT.into_owned(),
            owl::SAME_AS,
            vars::MEASUREMENT_LINK.into_owned(),
        )])
        .optional(concept_link(
            vars::MAGNITUDE_CONCEPT.into_owned(),
            air::MAGNITUDE_CONCEPT,
            vars::MAGNITUDE.into_owned(),
            vars::MAGNITUDE_LINK.into_owned(),
        ))
        .optional(concept_link(
            vars::STATION_CONCEPT.into_owned(),
            air::STATION_CONCEPT,
            vars::STATION.into_owned(),
            vars::STATION_LINK.into_owned(),
        ))
        .filter(
            vars::STATION.into_owned(),
            Comparison::Equal,
            string_literal(filter.station.as_ref()),
        )
        .filter(
            vars::MAGNITUDE.into_owned(),
            Comparison::Equal,
            string_literal(filter.magnitude.as_ref()),
        );
    ordered_by_date_station_magnitude(query).limit(filter.limit)
}

/// Count, average, maximum and minimum of the first-hour reading per station and magnitude.
pub fn aggregated_statistics_query(filter: &StatisticsFilter) -> SelectQueryBuilder {
    let value = vars::VALUE.into_owned();
    measurement_patterns()
        .select(vars::STATION.into_owned())
        .select(vars::MAGNITUDE.into_owned())
        .select_aggregate(Aggregate::Count, value.clone(), vars::COUNT.into_owned())
        .select_aggregate(Aggregate::Avg, value.clone(), vars::AVERAGE.into_owned())
        .select_aggregate(Aggregate::Max, value.clone(), vars::MAX.into_owned())
        .select_aggregate(Aggregate::Min, value.clone(), vars::MIN.into_owned())
        .optional([TriplePattern::new(
            vars::MEASUREMENT.into_owned(),
            air::hour(Hour::H01),
            value,
        )])
        .filter(
            vars::STATION.into_owned(),
            Comparison::Equal,
            string_literal(filter.station.as_ref()),
        )
        .filter(
            vars::MAGNITUDE.into_owned(),
            Comparison::Equal,
            string_literal(filter.magnitude.as_ref()),
        )
        .filter(
            vars::DATE.into_owned(),
            Comparison::Equal,
            date_time_literal(filter.date.as_ref()),
        )
        .group_by(vars::STATION.into_owned())
        .group_by(vars::MAGNITUDE.into_owned())
        .order_by(vars::STATION.into_owned())
        .order_by(vars::MAGNITUDE.into_owned())
}

/// The distinct values of `predicate` on measurements, bound to [`vars::VALUE`].
pub fn distinct_values_query(predicate: NamedNodeRef<'_>) -> SelectQueryBuilder {
    let measurement = vars::MEASUREMENT.into_owned();
    SelectQueryBuilder::new()
        .distinct()
        .select(vars::VALUE.into_owned())
        .pattern(measurement.clone(), rdf::TYPE, air::MEASUREMENT)
        .pattern(measurement, predicate, vars::VALUE.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use besafe_model::{parse_timestamp, DayBound};

    #[test]
    fn every_query_parses() {
        let date = parse_timestamp("2025-05-08", DayBound::Start).unwrap();
        let queries = [
            measurements_query(),
            filtered_measurements_query(&MeasurementFilter::default()),
            filtered_measurements_query(&MeasurementFilter::new(
                Some("11".to_owned()),
                Some(date),
            )),
            ozone_episodes_query(&EpisodeFilter::default()),
            ozone_episodes_query(&EpisodeFilter::new(Some(date), Some(date))),
            linked_measurements_query(&LinkedDataFilter::default()),
            linked_measurements_query(&LinkedDataFilter::new(
                Some("11".to_owned()),
                Some("8".to_owned()),
                Some(5),
            )),
            aggregated_statistics_query(&StatisticsFilter::default()),
            aggregated_statistics_query(&StatisticsFilter::new(
                Some("11".to_owned()),
                Some("8".to_owned()),
                Some(date),
            )),
            distinct_values_query(air::STATION),
        ];
        for query in queries {
            if let Err(error) = query.build() {
                panic!("{error}\n{query}");
            }
        }
    }

    #[test]
    fn listing_limits() {
        assert!(measurements_query().to_string().ends_with("LIMIT 200"));
        assert!(filtered_measurements_query(&MeasurementFilter::default())
            .to_string()
            .ends_with("LIMIT 500"));
        assert!(linked_measurements_query(&LinkedDataFilter::default())
            .to_string()
            .ends_with("LIMIT 100"));
        assert!(!ozone_episodes_query(&EpisodeFilter::default())
            .to_string()
            .contains("LIMIT"));
        assert!(!aggregated_statistics_query(&StatisticsFilter::default())
            .to_string()
            .contains("LIMIT"));
    }

    #[test]
    fn unfiltered_queries_have_no_filter() {
        assert!(!measurements_query().has_filter());
        assert!(!filtered_measurements_query(&MeasurementFilter::default()).has_filter());
        assert!(!ozone_episodes_query(&EpisodeFilter::default()).has_filter());
        assert!(!linked_measurements_query(&LinkedDataFilter::default()).has_filter());
        assert!(!aggregated_statistics_query(&StatisticsFilter::default()).has_filter());
    }

    #[test]
    fn filtered_listing_reads_every_hour() {
        let text = filtered_measurements_query(&MeasurementFilter::default()).to_string();
        assert!(text.contains("OPTIONAL { ?measurement <http://example.org/vocab#H01> ?h01 . }"));
        assert!(text.contains("OPTIONAL { ?measurement <http://example.org/vocab#H24> ?h24 . }"));
        assert!(text.contains("ORDER BY ?date ?station ?magnitude"));
    }

    #[test]
    fn date_filters_are_typed() {
        let date = parse_timestamp("2025-05-08", DayBound::Start).unwrap();
        let text =
            filtered_measurements_query(&MeasurementFilter::new(None, Some(date))).to_string();
        assert!(
            text.contains(
                "FILTER (?date = \"2025-05-08T00:00:00Z\"^^<http://www.w3.org/2001/XMLSchema#dateTime>)"
            ),
            "{text}"
        );
    }

    #[test]
    fn episode_bounds() {
        let start = parse_timestamp("2025-06-01", DayBound::Start).unwrap();
        let end = parse_timestamp("2025-06-30", DayBound::End).unwrap();
        let text = ozone_episodes_query(&EpisodeFilter::new(Some(start), Some(end))).to_string();
        assert!(text.contains("?start >= \"2025-06-01T00:00:00Z\""), "{text}");
        assert!(text.contains("&& ?end <= \"2025-06-30T23:59:59Z\""), "{text}");
        assert!(text.ends_with("ORDER BY DESC(?start)"), "{text}");
    }
}
