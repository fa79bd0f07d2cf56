use crate::error::GraphLoadError;
use oxigraph::io::{RdfFormat, RdfParser};
use std::ffi::OsStr;
use std::path::PathBuf;

/// Describes where the air quality graph is loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphConfig {
    /// The file holding the graph.
    pub path: PathBuf,
    /// The serialization of the file. Guessed from the file extension if `None`.
    pub format: Option<RdfFormat>,
    /// The base IRI relative IRIs in the file are resolved against.
    pub base_iri: Option<String>,
}

impl GraphConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            format: None,
            base_iri: None,
        }
    }

    #[must_use]
    pub fn with_format(mut self, format: RdfFormat) -> Self {
        self.format = Some(format);
        self
    }

    #[must_use]
    pub fn with_base_iri(mut self, base_iri: impl Into<String>) -> Self {
        self.base_iri = Some(base_iri.into());
        self
    }

    /// Returns the configured format or the one matching the file extension.
    pub fn format(&self) -> Result<RdfFormat, GraphLoadError> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        self.path
            .extension()
            .and_then(OsStr::to_str)
            .and_then(RdfFormat::from_extension)
            .ok_or_else(|| GraphLoadError::UnknownFormat {
                path: self.path.clone(),
            })
    }

    /// Creates the parser for the graph file.
    pub fn parser(&self) -> Result<RdfParser, GraphLoadError> {
        let mut parser = RdfParser::from_format(self.format()?);
        if let Some(base_iri) = &self.base_iri {
            parser = parser.with_base_iri(base_iri).map_err(|error| {
                GraphLoadError::InvalidBaseIri {
                    iri: base_iri.clone(),
                    error,
                }
            })?;
        }
        Ok(parser)
    }
}

/// Looks up a format by file extension (`ttl`) or media type (`text/turtle`).
pub fn rdf_format_from_name(name: &str) -> Option<RdfFormat> {
    RdfFormat::from_extension(name).or_else(|| RdfFormat::from_media_type(name))
}
