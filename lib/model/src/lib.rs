//! Record and filter types shared by the BeSafe query layer and its front ends.
//!
//! The records mirror the rows the query layer produces for the Madrid air quality graph.
//! None of them are ever written back to the graph.

mod episode;
mod error;
mod filter;
mod linked;
mod measurement;
mod statistics;
pub mod vocab;

pub use episode::*;
pub use error::*;
pub use filter::*;
pub use linked::*;
pub use measurement::*;
pub use statistics::*;

// Re-export the RDF types the filters and the vocabulary are expressed in.
pub use oxrdf::{Literal, LiteralRef, NamedNode, NamedNodeRef, Variable, VariableRef};
pub use oxsdatatypes::{Date, DateTime, ParseDateTimeError};
