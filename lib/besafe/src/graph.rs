use crate::config::GraphConfig;
use crate::error::{GraphLoadError, QueryError};
use oxigraph::io::RdfParser;
use oxigraph::sparql::{Query, QueryResults, QuerySolutionIter};
use oxigraph::store::{StorageError, Store};
use std::fs::File;
use std::io::{BufReader, Read};
use std::sync::Arc;
use tracing::info;

/// Gives the query layer access to the loaded air quality graph.
///
/// The graph is read-only from the perspective of the query layer. An implementation is
/// created once, usually at startup, and then shared by all queries.
pub trait GraphProvider: Send + Sync {
    /// Evaluates a `SELECT` query and returns its solutions.
    fn select(&self, query: Query) -> Result<QuerySolutionIter, QueryError>;
}

impl<T: GraphProvider + ?Sized> GraphProvider for Arc<T> {
    fn select(&self, query: Query) -> Result<QuerySolutionIter, QueryError> {
        (**self).select(query)
    }
}

/// A [`GraphProvider`] backed by an in-memory Oxigraph [`Store`].
#[derive(Clone)]
pub struct InMemoryGraph {
    store: Store,
}

impl InMemoryGraph {
    /// Loads the graph described by `config`.
    pub fn load(config: &GraphConfig) -> Result<Self, GraphLoadError> {
        let parser = config.parser()?;
        let file = File::open(&config.path).map_err(|error| GraphLoadError::Io {
            path: config.path.clone(),
            error,
        })?;
        let graph = Self::from_reader(parser, BufReader::new(file))?;
        info!(
            path = %config.path.display(),
            triples = graph.len()?,
            "Loaded air quality graph"
        );
        Ok(graph)
    }

    /// Parses a graph from `reader`.
    pub fn from_reader(
        parser: impl Into<RdfParser>,
        reader: impl Read,
    ) -> Result<Self, GraphLoadError> {
        let store = Store::new()?;
        store.load_from_reader(parser, reader)?;
        Ok(Self { store })
    }

    /// Returns the number of triples in the graph.
    pub fn len(&self) -> Result<usize, StorageError> {
        self.store.len()
    }

    pub fn is_empty(&self) -> Result<bool, StorageError> {
        self.store.is_empty()
    }
}

impl GraphProvider for InMemoryGraph {
    fn select(&self, query: Query) -> Result<QuerySolutionIter, QueryError> {
        match self.store.query(query)? {
            QueryResults::Solutions(solutions) => Ok(solutions),
            QueryResults::Boolean(_) => Err(QueryError::UnexpectedResults("a boolean")),
            QueryResults::Graph(_) => Err(QueryError::UnexpectedResults("a graph")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxigraph::io::RdfFormat;

    const DATA: &str = r#"
@prefix vocab: <http://example.org/vocab#> .
vocab:m1 a vocab:MedicionAire ; vocab:estacion "11" .
"#;

    #[test]
    fn loads_from_reader() {
        let graph = InMemoryGraph::from_reader(RdfFormat::Turtle, DATA.as_bytes()).unwrap();
        assert_eq!(graph.len().unwrap(), 2);
        assert!(!graph.is_empty().unwrap());
    }

    #[test]
    fn rejects_invalid_data() {
        let error =
            InMemoryGraph::from_reader(RdfFormat::Turtle, "vocab:m1 a".as_bytes()).err();
        assert!(matches!(error, Some(GraphLoadError::Loader(_))));
    }

    #[test]
    fn missing_file() {
        let error = InMemoryGraph::load(&GraphConfig::new("does/not/exist.ttl")).err();
        assert!(matches!(error, Some(GraphLoadError::Io { .. })));
    }

    #[test]
    fn only_select_queries_are_accepted() {
        let graph = InMemoryGraph::from_reader(RdfFormat::Turtle, DATA.as_bytes()).unwrap();
        let query = Query::parse("ASK { ?s ?p ?o }", None).unwrap();
        let error = graph.select(query).err();
        assert!(matches!(error, Some(QueryError::UnexpectedResults(_))));

        let query = Query::parse("SELECT ?s WHERE { ?s ?p ?o }", None).unwrap();
        assert_eq!(graph.select(query).unwrap().count(), 2);
    }
}
