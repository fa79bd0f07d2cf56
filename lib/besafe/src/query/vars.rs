//! The variables bound by the air quality queries.

use oxigraph::model::VariableRef;

pub const MEASUREMENT: VariableRef<'static> = VariableRef::new_unchecked("measurement");
pub const STATION: VariableRef<'static> = VariableRef::new_unchecked("station");
pub const DATE: VariableRef<'static> = VariableRef::new_unchecked("date");
pub const MAGNITUDE: VariableRef<'static> = VariableRef::new_unchecked("magnitude");
pub const SAMPLING_POINT: VariableRef<'static> = VariableRef::new_unchecked("samplingPoint");
/// A reading, or a distinct value in the derived lists.
pub const VALUE: VariableRef<'static> = VariableRef::new_unchecked("value");

pub const EPISODE: VariableRef<'static> = VariableRef::new_unchecked("episode");
pub const START: VariableRef<'static> = VariableRef::new_unchecked("start");
pub const END: VariableRef<'static> = VariableRef::new_unchecked("end");
pub const SCENARIO: VariableRef<'static> = VariableRef::new_unchecked("scenario");
/// A single population measure, before aggregation.
pub const MEASURE: VariableRef<'static> = VariableRef::new_unchecked("measure");
/// The joined population measures of an episode.
pub const MEASURES: VariableRef<'static> = VariableRef::new_unchecked("measures");

pub const COUNT: VariableRef<'static> = VariableRef::new_unchecked("count");
pub const AVERAGE: VariableRef<'static> = VariableRef::new_unchecked("average");
pub const MAX: VariableRef<'static> = VariableRef::new_unchecked("max");
pub const MIN: VariableRef<'static> = VariableRef::new_unchecked("min");

pub const MEASUREMENT_LINK: VariableRef<'static> = VariableRef::new_unchecked("measurementLink");
pub const MAGNITUDE_LINK: VariableRef<'static> = VariableRef::new_unchecked("magnitudeLink");
pub const STATION_LINK: VariableRef<'static> = VariableRef::new_unchecked("stationLink");
pub const MAGNITUDE_CONCEPT: VariableRef<'static> =
    VariableRef::new_unchecked("magnitudeConcept");
pub const STATION_CONCEPT: VariableRef<'static> = VariableRef::new_unchecked("stationConcept");
