use oxigraph::model::IriParseError;
use oxigraph::sparql::{EvaluationError, SparqlSyntaxError};
use oxigraph::store::{LoaderError, StorageError};
use std::io;
use std::num::{ParseFloatError, ParseIntError};
use std::path::PathBuf;

/// An error raised while loading the air quality graph.
#[derive(Debug, thiserror::Error)]
pub enum GraphLoadError {
    /// The graph file cannot be opened.
    #[error("Cannot read the graph file '{}'", path.display())]
    Io {
        /// The file that was requested.
        path: PathBuf,
        #[source]
        error: io::Error,
    },
    /// No format was configured and the file extension is unknown.
    #[error("The RDF format of '{}' cannot be guessed from its extension", path.display())]
    UnknownFormat {
        /// The file that was requested.
        path: PathBuf,
    },
    /// The base IRI is invalid.
    #[error("Invalid base IRI '{iri}': {error}")]
    InvalidBaseIri {
        /// The IRI itself.
        iri: String,
        /// The parsing error.
        #[source]
        error: IriParseError,
    },
    /// An error raised while parsing the file or inserting it into the store.
    #[error(transparent)]
    Loader(#[from] LoaderError),
    /// An error raised by the store itself.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// An error raised while evaluating one of the air quality queries.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The generated query text is not valid SPARQL.
    #[error("The generated query is not valid SPARQL: {0}")]
    Build(#[from] SparqlSyntaxError),
    /// The engine failed to evaluate the query.
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
    /// The query returned something else than a solution sequence.
    #[error("Expected query solutions, but the query returned {0}")]
    UnexpectedResults(&'static str),
    /// A solution cannot be turned into a record.
    #[error(transparent)]
    Mapping(#[from] MappingError),
}

/// An error raised while turning a query solution into a record.
#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    /// A variable that every solution must bind is unbound.
    #[error("The variable '{0}' is not bound")]
    Unbound(&'static str),
    /// A numeric field is bound to something else than a number.
    #[error("The value '{value}' of '{variable}' is not a number")]
    NotANumber {
        variable: &'static str,
        value: String,
        #[source]
        error: ParseFloatError,
    },
    /// A count field is bound to something else than a non-negative integer.
    #[error("The value '{value}' of '{variable}' is not a count")]
    NotACount {
        variable: &'static str,
        value: String,
        #[source]
        error: ParseIntError,
    },
}
