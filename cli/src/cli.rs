use crate::output::OutputFormat;
use clap::{Args as ClapArgs, Parser, Subcommand, ValueHint};
use std::path::PathBuf;

#[derive(Parser)]
#[command(about, version, name = "besafe")]
/// BeSafe command line tool and HTTP server for the Madrid air quality graph
pub struct Args {
    #[command(flatten)]
    pub graph: GraphArgs,
    /// How query results are printed
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(ClapArgs)]
pub struct GraphArgs {
    /// File holding the air quality graph
    #[arg(short, long, env = "BESAFE_DATA", value_hint = ValueHint::FilePath)]
    pub data: PathBuf,
    /// The format of the graph file
    ///
    /// It can be an extension like "ttl" or a MIME type like "text/turtle".
    ///
    /// By default the format is guessed from the file extension.
    #[arg(long)]
    pub format: Option<String>,
    /// Base IRI of the graph file
    #[arg(long, value_hint = ValueHint::Url)]
    pub base: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the BeSafe HTTP server
    Serve {
        /// Host and port to listen to
        #[arg(short, long, env = "BESAFE_BIND", default_value = "localhost:7878", value_hint = ValueHint::Hostname)]
        bind: String,
        /// Allows cross-origin requests
        #[arg(long)]
        cors: bool,
    },
    /// List measurements with their first-hour reading (at most 200)
    Measurements,
    /// List measurements with all their hourly readings (at most 500)
    Filtered {
        /// Only keep the measurements of this station
        #[arg(long)]
        station: Option<String>,
        /// Only keep the measurements of this day
        ///
        /// Either a date like "2025-05-08" or a timestamp like "2025-05-08T00:00:00Z".
        #[arg(long)]
        date: Option<String>,
    },
    /// List ozone episodes, latest first
    Episodes {
        /// Only keep the episodes starting at or after this date
        #[arg(long)]
        start: Option<String>,
        /// Only keep the episodes ending at or before this date
        #[arg(long)]
        end: Option<String>,
    },
    /// List measurements with their links to external datasets
    Linked {
        #[arg(long)]
        station: Option<String>,
        #[arg(long)]
        magnitude: Option<String>,
        /// Maximum number of measurements to list
        #[arg(long, default_value_t = besafe::model::DEFAULT_LINKED_LIMIT)]
        limit: usize,
    },
    /// Aggregate the first-hour readings per station and magnitude
    Statistics {
        #[arg(long)]
        station: Option<String>,
        #[arg(long)]
        magnitude: Option<String>,
        /// Only aggregate the measurements of this day
        #[arg(long)]
        date: Option<String>,
    },
    /// List the stations of the graph
    Stations,
    /// List the magnitudes of the graph
    Magnitudes,
}
