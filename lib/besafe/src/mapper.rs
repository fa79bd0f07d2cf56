use crate::error::{MappingError, QueryError};
use crate::query::vars;
use besafe_model::{
    AggregatedStat, Hour, HourlyMeasurement, HourlyReadings, LinkedMeasurement, Measurement,
    OzoneEpisode,
};
use oxigraph::model::{Term, VariableRef};
use oxigraph::sparql::{QuerySolution, QuerySolutionIter};

/// Builds a record from a single query solution.
pub trait FromSolution: Sized {
    fn from_solution(solution: &QuerySolution) -> Result<Self, MappingError>;
}

/// Maps every solution of `solutions` to a record, keeping the order of the solutions.
pub fn map_solutions<T: FromSolution>(solutions: QuerySolutionIter) -> Result<Vec<T>, QueryError> {
    solutions
        .map(|solution| -> Result<T, QueryError> { Ok(T::from_solution(&solution?)?) })
        .collect()
}

/// The lexical form of a term: the value of a literal, the IRI of a named node.
fn lexical(term: &Term) -> String {
    match term {
        Term::Literal(literal) => literal.value().to_owned(),
        Term::NamedNode(node) => node.as_str().to_owned(),
        term => term.to_string(),
    }
}

fn optional_string(solution: &QuerySolution, variable: VariableRef<'_>) -> Option<String> {
    solution
        .get(variable.as_str())
        .map(lexical)
        .filter(|value| !value.is_empty())
}

fn required_string(
    solution: &QuerySolution,
    variable: VariableRef<'static>,
) -> Result<String, MappingError> {
    solution
        .get(variable.as_str())
        .map(lexical)
        .ok_or(MappingError::Unbound(variable.as_str()))
}

fn optional_number(
    solution: &QuerySolution,
    variable: &'static str,
) -> Result<Option<f64>, MappingError> {
    let Some(value) = solution.get(variable).map(lexical) else {
        return Ok(None);
    };
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|error| MappingError::NotANumber {
            variable,
            value: value.to_owned(),
            error,
        })
}

fn required_number(
    solution: &QuerySolution,
    variable: VariableRef<'static>,
) -> Result<f64, MappingError> {
    optional_number(solution, variable.as_str())?.ok_or(MappingError::Unbound(variable.as_str()))
}

/// An unbound count is zero.
fn count(solution: &QuerySolution, variable: VariableRef<'static>) -> Result<u64, MappingError> {
    let Some(value) = solution.get(variable.as_str()).map(lexical) else {
        return Ok(0);
    };
    value
        .trim()
        .parse()
        .map_err(|error| MappingError::NotACount {
            variable: variable.as_str(),
            value,
            error,
        })
}

pub(crate) fn round_to_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl FromSolution for Measurement {
    fn from_solution(solution: &QuerySolution) -> Result<Self, MappingError> {
        Ok(Self {
            station: required_string(solution, vars::STATION)?,
            date: required_string(solution, vars::DATE)?,
            magnitude: required_string(solution, vars::MAGNITUDE)?,
            value: required_number(solution, vars::VALUE)?,
        })
    }
}

impl FromSolution for HourlyMeasurement {
    fn from_solution(solution: &QuerySolution) -> Result<Self, MappingError> {
        let mut hours = HourlyReadings::new();
        for hour in Hour::ALL {
            hours.set(hour, optional_number(solution, hour.variable_name())?);
        }
        Ok(Self {
            station: required_string(solution, vars::STATION)?,
            date: required_string(solution, vars::DATE)?,
            magnitude: required_string(solution, vars::MAGNITUDE)?,
            sampling_point: optional_string(solution, vars::SAMPLING_POINT),
            hours,
        })
    }
}

impl FromSolution for OzoneEpisode {
    fn from_solution(solution: &QuerySolution) -> Result<Self, MappingError> {
        Ok(Self {
            episode_uri: required_string(solution, vars::EPISODE)?,
            start_date: required_string(solution, vars::START)?,
            end_date: required_string(solution, vars::END)?,
            scenario: optional_string(solution, vars::SCENARIO),
            population_measures: optional_string(solution, vars::MEASURES),
        })
    }
}

impl FromSolution for LinkedMeasurement {
    fn from_solution(solution: &QuerySolution) -> Result<Self, MappingError> {
        Ok(Self {
            measurement_uri: required_string(solution, vars::MEASUREMENT)?,
            station: required_string(solution, vars::STATION)?,
            date: required_string(solution, vars::DATE)?,
            magnitude: required_string(solution, vars::MAGNITUDE)?,
            sampling_point: optional_string(solution, vars::SAMPLING_POINT),
            measurement_link: optional_string(solution, vars::MEASUREMENT_LINK),
            magnitude_link: optional_string(solution, vars::MAGNITUDE_LINK),
            station_link: optional_string(solution, vars::STATION_LINK),
        })
    }
}

impl FromSolution for AggregatedStat {
    fn from_solution(solution: &QuerySolution) -> Result<Self, MappingError> {
        let count = count(solution, vars::COUNT)?;
        // AVG over no reading is 0 in SPARQL, not "no average".
        let (average, max, min) = if count == 0 {
            (None, None, None)
        } else {
            (
                optional_number(solution, vars::AVERAGE.as_str())?.map(round_to_two_decimals),
                optional_number(solution, vars::MAX.as_str())?,
                optional_number(solution, vars::MIN.as_str())?,
            )
        };
        Ok(Self {
            station: required_string(solution, vars::STATION)?,
            magnitude: required_string(solution, vars::MAGNITUDE)?,
            count,
            average,
            max,
            min,
        })
    }
}

/// A single value of a distinct value listing.
pub(crate) struct DistinctValue(pub String);

impl FromSolution for DistinctValue {
    fn from_solution(solution: &QuerySolution) -> Result<Self, MappingError> {
        required_string(solution, vars::VALUE).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxigraph::model::vocab::xsd;
    use oxigraph::model::{Literal, NamedNode, Variable};
    use std::sync::Arc;

    fn solution(bindings: Vec<(&str, Term)>) -> QuerySolution {
        let (variables, values): (Vec<_>, Vec<_>) = bindings
            .into_iter()
            .map(|(name, term)| (Variable::new_unchecked(name), Some(term)))
            .unzip();
        QuerySolution::from((Arc::<[Variable]>::from(variables), values))
    }

    fn literal(value: &str) -> Term {
        Literal::new_simple_literal(value).into()
    }

    fn decimal(value: &str) -> Term {
        Literal::new_typed_literal(value, xsd::DECIMAL).into()
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_to_two_decimals(30.5625), 30.56);
        assert_eq!(round_to_two_decimals(52.75), 52.75);
        assert_eq!(round_to_two_decimals(41.0), 41.0);
        assert_eq!(round_to_two_decimals(1.005_1), 1.01);
    }

    #[test]
    fn hourly_measurement_keeps_missing_hours_empty() {
        let measurement = HourlyMeasurement::from_solution(&solution(vec![
            ("station", literal("11")),
            ("date", literal("2025-05-07T00:00:00Z")),
            ("magnitude", literal("8")),
            ("h01", decimal("40.0")),
            ("h03", decimal("35")),
        ]))
        .unwrap();
        assert_eq!(measurement.station, "11");
        assert_eq!(measurement.sampling_point, None);
        assert_eq!(measurement.hours.get(Hour::H01), Some(40.0));
        assert_eq!(measurement.hours.get(Hour::H02), None);
        assert_eq!(measurement.hours.get(Hour::H03), Some(35.0));
        assert_eq!(measurement.hours.count_present(), 2);
    }

    #[test]
    fn named_nodes_map_to_their_iri() {
        let episode = OzoneEpisode::from_solution(&solution(vec![
            (
                "episode",
                NamedNode::new_unchecked("http://example.org/episode/1").into(),
            ),
            ("start", literal("2025-06-10T00:00:00Z")),
            ("end", literal("2025-06-12T23:59:59Z")),
            ("measures", literal("")),
        ]))
        .unwrap();
        assert_eq!(episode.episode_uri, "http://example.org/episode/1");
        assert_eq!(episode.scenario, None);
        assert_eq!(episode.population_measures, None);
    }

    #[test]
    fn empty_groups_have_no_statistics() {
        let stat = AggregatedStat::from_solution(&solution(vec![
            ("station", literal("36")),
            ("magnitude", literal("12")),
            ("count", Literal::from(0).into()),
            ("average", Literal::from(0).into()),
        ]))
        .unwrap();
        assert_eq!(stat.count, 0);
        assert_eq!(stat.average, None);
        assert_eq!(stat.max, None);
        assert_eq!(stat.min, None);
    }

    #[test]
    fn statistics_round_only_the_average() {
        let stat = AggregatedStat::from_solution(&solution(vec![
            ("station", literal("8")),
            ("magnitude", literal("8")),
            ("count", Literal::from(2).into()),
            ("average", decimal("30.5625")),
            ("max", decimal("31.0")),
            ("min", decimal("30.125")),
        ]))
        .unwrap();
        assert_eq!(stat.count, 2);
        assert_eq!(stat.average, Some(30.56));
        assert_eq!(stat.max, Some(31.0));
        assert_eq!(stat.min, Some(30.125));
    }

    #[test]
    fn unbound_count_is_zero() {
        let stat = AggregatedStat::from_solution(&solution(vec![
            ("station", literal("8")),
            ("magnitude", literal("8")),
        ]))
        .unwrap();
        assert_eq!(stat.count, 0);
    }

    #[test]
    fn mapping_errors() {
        let error = Measurement::from_solution(&solution(vec![
            ("station", literal("11")),
            ("date", literal("2025-05-07T00:00:00Z")),
            ("magnitude", literal("8")),
            ("value", literal("n/a")),
        ]))
        .err();
        assert!(
            matches!(error, Some(MappingError::NotANumber { variable: "value", .. })),
            "{error:?}"
        );

        let error = Measurement::from_solution(&solution(vec![("station", literal("11"))])).err();
        assert!(matches!(error, Some(MappingError::Unbound("date"))), "{error:?}");
    }
}
