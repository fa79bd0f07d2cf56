use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// One of the 24 hourly reading slots of a daily measurement.
///
/// The slots are numbered from 1 (`H01`) to 24 (`H24`), as in the source dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Hour {
    H01,
    H02,
    H03,
    H04,
    H05,
    H06,
    H07,
    H08,
    H09,
    H10,
    H11,
    H12,
    H13,
    H14,
    H15,
    H16,
    H17,
    H18,
    H19,
    H20,
    H21,
    H22,
    H23,
    H24,
}

impl Hour {
    /// All hours in ascending order.
    pub const ALL: [Hour; 24] = [
        Hour::H01,
        Hour::H02,
        Hour::H03,
        Hour::H04,
        Hour::H05,
        Hour::H06,
        Hour::H07,
        Hour::H08,
        Hour::H09,
        Hour::H10,
        Hour::H11,
        Hour::H12,
        Hour::H13,
        Hour::H14,
        Hour::H15,
        Hour::H16,
        Hour::H17,
        Hour::H18,
        Hour::H19,
        Hour::H20,
        Hour::H21,
        Hour::H22,
        Hour::H23,
        Hour::H24,
    ];

    /// Returns the hour with the given number (1 to 24).
    pub fn from_number(number: u8) -> Option<Self> {
        let index = usize::from(number).checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    /// The number of this hour, from 1 to 24.
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// The zero-based position of this hour in [`Hour::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// The name of the SPARQL variable that binds the reading of this hour (e.g. `h07`).
    pub fn variable_name(self) -> &'static str {
        const NAMES: [&str; 24] = [
            "h01", "h02", "h03", "h04", "h05", "h06", "h07", "h08", "h09", "h10", "h11", "h12",
            "h13", "h14", "h15", "h16", "h17", "h18", "h19", "h20", "h21", "h22", "h23", "h24",
        ];
        NAMES[self.index()]
    }

    /// The JSON field name of this hour (e.g. `hour07`).
    pub fn field_name(self) -> String {
        format!("hour{:02}", self.number())
    }
}

impl fmt::Display for Hour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "H{:02}", self.number())
    }
}

/// The readings of a measurement, one optional value per [`Hour`].
///
/// A station may report some hours of a day and omit others. An omitted hour is `None`, never
/// zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HourlyReadings {
    values: [Option<f64>; 24],
}

impl HourlyReadings {
    /// Creates readings where no hour is present.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, hour: Hour) -> Option<f64> {
        self.values[hour.index()]
    }

    pub fn set(&mut self, hour: Hour, value: Option<f64>) {
        self.values[hour.index()] = value;
    }

    /// Iterates over all hours, present or not.
    pub fn iter(&self) -> impl Iterator<Item = (Hour, Option<f64>)> + '_ {
        Hour::ALL.into_iter().map(|hour| (hour, self.get(hour)))
    }

    /// Iterates over the hours that have a reading.
    pub fn present(&self) -> impl Iterator<Item = (Hour, f64)> + '_ {
        self.iter()
            .filter_map(|(hour, value)| value.map(|value| (hour, value)))
    }

    /// Returns the number of hours that have a reading.
    pub fn count_present(&self) -> usize {
        self.values.iter().filter(|value| value.is_some()).count()
    }
}

impl FromIterator<(Hour, f64)> for HourlyReadings {
    fn from_iter<T: IntoIterator<Item = (Hour, f64)>>(iter: T) -> Self {
        let mut readings = Self::new();
        for (hour, value) in iter {
            readings.set(hour, Some(value));
        }
        readings
    }
}

impl Serialize for HourlyReadings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Hour::ALL.len()))?;
        for (hour, value) in self.iter() {
            map.serialize_entry(&hour.field_name(), &value)?;
        }
        map.end()
    }
}

/// A measurement of the basic listing, reduced to the reading of the first hour.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    pub station: String,
    pub date: String,
    pub magnitude: String,
    pub value: f64,
}

/// A measurement with all of its hourly readings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyMeasurement {
    pub station: String,
    pub date: String,
    pub magnitude: String,
    pub sampling_point: Option<String>,
    #[serde(flatten)]
    pub hours: HourlyReadings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hour_numbers_round_trip() {
        for hour in Hour::ALL {
            assert_eq!(Hour::from_number(hour.number()), Some(hour));
        }
        assert_eq!(Hour::from_number(0), None);
        assert_eq!(Hour::from_number(25), None);
    }

    #[test]
    fn hour_names() {
        assert_eq!(Hour::H07.to_string(), "H07");
        assert_eq!(Hour::H07.variable_name(), "h07");
        assert_eq!(Hour::H24.field_name(), "hour24");
    }

    #[test]
    fn missing_hours_stay_empty() {
        let readings: HourlyReadings = [(Hour::H01, 12.5), (Hour::H03, 0.0)].into_iter().collect();
        assert_eq!(readings.get(Hour::H01), Some(12.5));
        assert_eq!(readings.get(Hour::H02), None);
        assert_eq!(readings.get(Hour::H03), Some(0.0));
        assert_eq!(readings.count_present(), 2);
        assert_eq!(
            readings.present().map(|(hour, _)| hour).collect::<Vec<_>>(),
            vec![Hour::H01, Hour::H03]
        );
    }

    #[test]
    fn hourly_measurement_serializes_every_hour() {
        let measurement = HourlyMeasurement {
            station: "11".to_owned(),
            date: "2025-05-08T00:00:00Z".to_owned(),
            magnitude: "8".to_owned(),
            sampling_point: None,
            hours: [(Hour::H02, 41.0)].into_iter().collect(),
        };
        let json = serde_json::to_value(&measurement).unwrap();
        assert_eq!(json["station"], "11");
        assert_eq!(json["samplingPoint"], serde_json::Value::Null);
        assert_eq!(json["hour01"], serde_json::Value::Null);
        assert_eq!(json["hour02"], 41.0);
        assert_eq!(json["hour24"], serde_json::Value::Null);
        assert_eq!(json.as_object().unwrap().len(), 4 + 24);
    }
}
