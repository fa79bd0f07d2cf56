//! IRIs of the air quality vocabulary.

/// Terms of the dataset vocabulary `<http://example.org/vocab#>`.
pub mod air {
    use crate::{Hour, NamedNode, NamedNodeRef};

    /// The namespace of the vocabulary.
    pub const NAMESPACE: &str = "http://example.org/vocab#";

    /// The class of daily air quality measurements.
    pub const MEASUREMENT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/vocab#MedicionAire");
    /// The station that took a measurement.
    pub const STATION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/vocab#estacion");
    /// The day of a measurement, an `xsd:dateTime`.
    pub const DATE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/vocab#fecha");
    /// The measured magnitude (pollutant code).
    pub const MAGNITUDE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/vocab#magnitud");
    /// The sampling point of a measurement.
    pub const SAMPLING_POINT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/vocab#puntoMuestreo");

    /// The class of ozone pollution episodes.
    pub const OZONE_EPISODE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/vocab#EpisodioOzono");
    pub const EPISODE_START: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/vocab#fechaInicio");
    pub const EPISODE_END: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/vocab#fechaFin");
    pub const SCENARIO: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/vocab#escenario");
    /// A measure recommended to the population. An episode may have several.
    pub const POPULATION_MEASURE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/vocab#medidaPoblacion");

    /// The class of station concepts.
    pub const STATION_CONCEPT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/vocab#Estacion");
    /// The class of magnitude concepts.
    pub const MAGNITUDE_CONCEPT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/vocab#Magnitud");
    /// The code that ties a concept to the literal used in measurements.
    pub const CODE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/vocab#codigo");

    /// The predicate holding the reading of `hour`, e.g. `vocab:H07`.
    pub fn hour(hour: Hour) -> NamedNode {
        NamedNode::new_unchecked(format!("{NAMESPACE}{hour}"))
    }
}

/// [OWL](https://www.w3.org/TR/owl2-overview/) vocabulary.
pub mod owl {
    use crate::NamedNodeRef;

    /// Links a resource to an external resource denoting the same thing.
    pub const SAME_AS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#sameAs");
}

pub use oxrdf::vocab::{rdf, xsd};
