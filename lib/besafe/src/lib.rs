#![doc = include_str!("../README.md")]
#![doc(test(attr(deny(warnings))))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod config;
pub mod error;
mod graph;
mod listing;
mod mapper;
pub mod query;
mod queries;

pub use config::{rdf_format_from_name, GraphConfig};
pub use graph::{GraphProvider, InMemoryGraph};
pub use listing::sort_codes;
pub use mapper::{map_solutions, FromSolution};
pub use queries::AirQualityQueries;

pub use besafe_model::{
    parse_optional_timestamp, parse_timestamp, AggregatedStat, DayBound, EpisodeFilter,
    FilterError, Hour, HourlyMeasurement, HourlyReadings, LinkedDataFilter, LinkedMeasurement,
    Measurement, MeasurementFilter, OzoneEpisode, StatisticsFilter,
};

pub mod model {
    pub use besafe_model::*;
}

pub mod io {
    pub use oxigraph::io::{RdfFormat, RdfParser};
}
