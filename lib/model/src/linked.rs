use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// A measurement together with the external resources it is linked to through `owl:sameAs`.
///
/// Each of the links may be present or absent independently of the others. The serialized form
/// also carries the [`wikidataLink`](LinkedMeasurement::wikidata_link) chosen among them.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkedMeasurement {
    pub measurement_uri: String,
    pub station: String,
    pub date: String,
    pub magnitude: String,
    pub sampling_point: Option<String>,
    /// The external resource denoting the measurement itself.
    pub measurement_link: Option<String>,
    /// The external resource denoting the measured magnitude.
    pub magnitude_link: Option<String>,
    /// The external resource denoting the station.
    pub station_link: Option<String>,
}

impl LinkedMeasurement {
    /// The most specific external link of the measurement.
    ///
    /// Prefers the link of the measurement over the one of its magnitude, and the latter over
    /// the one of its station.
    pub fn wikidata_link(&self) -> Option<&str> {
        self.measurement_link
            .as_deref()
            .or(self.magnitude_link.as_deref())
            .or(self.station_link.as_deref())
    }
}

impl Serialize for LinkedMeasurement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut record = serializer.serialize_struct("LinkedMeasurement", 9)?;
        record.serialize_field("measurementUri", &self.measurement_uri)?;
        record.serialize_field("station", &self.station)?;
        record.serialize_field("date", &self.date)?;
        record.serialize_field("magnitude", &self.magnitude)?;
        record.serialize_field("samplingPoint", &self.sampling_point)?;
        record.serialize_field("measurementLink", &self.measurement_link)?;
        record.serialize_field("magnitudeLink", &self.magnitude_link)?;
        record.serialize_field("stationLink", &self.station_link)?;
        record.serialize_field("wikidataLink", &self.wikidata_link())?;
        record.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_carries_the_chosen_wikidata_link() {
        let measurement = LinkedMeasurement {
            measurement_uri: "http://example.org/vocab#m1".to_owned(),
            station: "11".to_owned(),
            date: "2025-05-07T00:00:00Z".to_owned(),
            magnitude: "8".to_owned(),
            sampling_point: Some("28079011_8_8".to_owned()),
            measurement_link: None,
            magnitude_link: Some("http://www.wikidata.org/entity/Q1".to_owned()),
            station_link: Some("http://www.wikidata.org/entity/Q2".to_owned()),
        };
        let json = serde_json::to_value(&measurement).unwrap();
        assert_eq!(json["measurementUri"], "http://example.org/vocab#m1");
        assert_eq!(json["samplingPoint"], "28079011_8_8");
        assert_eq!(json["measurementLink"], serde_json::Value::Null);
        assert_eq!(json["magnitudeLink"], "http://www.wikidata.org/entity/Q1");
        assert_eq!(json["stationLink"], "http://www.wikidata.org/entity/Q2");
        assert_eq!(json["wikidataLink"], "http://www.wikidata.org/entity/Q1");
    }

    #[test]
    fn wikidata_link_prefers_the_most_specific_link() {
        let mut measurement = LinkedMeasurement {
            measurement_uri: "http://example.org/vocab#m1".to_owned(),
            station: "11".to_owned(),
            date: "2025-05-07T00:00:00Z".to_owned(),
            magnitude: "8".to_owned(),
            sampling_point: None,
            measurement_link: None,
            magnitude_link: None,
            station_link: Some("http://www.wikidata.org/entity/Q2".to_owned()),
        };
        assert_eq!(measurement.wikidata_link(), Some("http://www.wikidata.org/entity/Q2"));

        measurement.magnitude_link = Some("http://www.wikidata.org/entity/Q1".to_owned());
        assert_eq!(measurement.wikidata_link(), Some("http://www.wikidata.org/entity/Q1"));

        measurement.station_link = None;
        measurement.magnitude_link = None;
        assert_eq!(measurement.wikidata_link(), None);
    }
}
