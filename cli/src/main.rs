use crate::cli::{Args, Command, GraphArgs};
use crate::output::{print_codes, print_records};
use anyhow::Context;
use besafe::{
    parse_optional_timestamp, rdf_format_from_name, AirQualityQueries, DayBound, EpisodeFilter,
    GraphConfig, InMemoryGraph, LinkedDataFilter, MeasurementFilter, StatisticsFilter,
};
use besafe_web::ServerConfig;
use clap::Parser;
use std::io;
use tracing_subscriber::EnvFilter;

mod cli;
mod output;

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing();

    let queries = AirQualityQueries::new(load_graph(&args.graph)?);
    let output = args.output;
    match args.command {
        Command::Serve { bind, cors } => {
            besafe_web::serve(ServerConfig {
                queries,
                bind,
                cors,
            })
            .await
        }
        Command::Measurements => {
            print_records(&queries.measurements()?, output, &mut io::stdout().lock())
        }
        Command::Filtered { station, date } => {
            let filter = MeasurementFilter::new(
                station,
                parse_optional_timestamp(date.as_deref(), DayBound::Start)?,
            );
            print_records(
                &queries.filtered_measurements(&filter)?,
                output,
                &mut io::stdout().lock(),
            )
        }
        Command::Episodes { start, end } => {
            let filter = EpisodeFilter::new(
                parse_optional_timestamp(start.as_deref(), DayBound::Start)?,
                parse_optional_timestamp(end.as_deref(), DayBound::End)?,
            );
            print_records(
                &queries.ozone_episodes(&filter)?,
                output,
                &mut io::stdout().lock(),
            )
        }
        Command::Linked {
            station,
            magnitude,
            limit,
        } => {
            let filter = LinkedDataFilter::new(station, magnitude, Some(limit));
            print_records(
                &queries.linked_measurements(&filter)?,
                output,
                &mut io::stdout().lock(),
            )
        }
        Command::Statistics {
            station,
            magnitude,
            date,
        } => {
            let filter = StatisticsFilter::new(
                station,
                magnitude,
                parse_optional_timestamp(date.as_deref(), DayBound::Start)?,
            );
            print_records(
                &queries.aggregated_statistics(&filter)?,
                output,
                &mut io::stdout().lock(),
            )
        }
        Command::Stations => print_codes(&queries.stations()?, output, &mut io::stdout().lock()),
        Command::Magnitudes => {
            print_codes(&queries.magnitudes()?, output, &mut io::stdout().lock())
        }
    }
}

/// Logs to stderr, so that stdout only carries query results.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();
}

fn load_graph(args: &GraphArgs) -> anyhow::Result<InMemoryGraph> {
    let mut config = GraphConfig::new(args.data.clone());
    if let Some(format) = &args.format {
        config = config.with_format(
            rdf_format_from_name(format)
                .with_context(|| format!("The file format '{format}' is unknown"))?,
        );
    }
    if let Some(base) = &args.base {
        config = config.with_base_iri(base);
    }
    InMemoryGraph::load(&config)
        .with_context(|| format!("Failed to load the graph from {}", args.data.display()))
}
