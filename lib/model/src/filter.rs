use crate::FilterError;
use oxsdatatypes::{Date, DateTime};
use std::str::FromStr;

/// The number of linked measurements returned when the caller does not ask for a limit.
pub const DEFAULT_LINKED_LIMIT: usize = 100;

/// Which end of a day a plain date stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayBound {
    /// `00:00:00Z`, used for equality filters and lower bounds.
    Start,
    /// `23:59:59Z`, used for upper bounds.
    End,
}

impl DayBound {
    fn time(self) -> &'static str {
        match self {
            DayBound::Start => "00:00:00",
            DayBound::End => "23:59:59",
        }
    }
}

/// Parses a date filter.
///
/// Accepts an `xsd:dateTime` with a timezone (e.g. `2025-05-08T00:00:00Z`) or a plain
/// `YYYY-MM-DD` date that is expanded to the given end of the day in UTC.
pub fn parse_timestamp(value: &str, bound: DayBound) -> Result<DateTime, FilterError> {
    let value = value.trim();
    match DateTime::from_str(value) {
        Ok(timestamp) if timestamp.timezone_offset().is_none() => {
            Err(FilterError::MissingTimezone {
                value: value.to_owned(),
            })
        }
        Ok(timestamp) => Ok(timestamp),
        Err(error) => Date::from_str(value)
            .ok()
            .and_then(|_| DateTime::from_str(&format!("{value}T{}Z", bound.time())).ok())
            .ok_or_else(|| FilterError::InvalidTimestamp {
                value: value.to_owned(),
                error,
            }),
    }
}

/// Like [`parse_timestamp`], but an absent or empty value means "no filter".
pub fn parse_optional_timestamp(
    value: Option<&str>,
    bound: DayBound,
) -> Result<Option<DateTime>, FilterError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_timestamp(value, bound).map(Some),
    }
}

/// An empty filter value is the same as no filter value.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

/// Filters of the hourly measurement listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasurementFilter {
    pub station: Option<String>,
    pub date: Option<DateTime>,
}

impl MeasurementFilter {
    pub fn new(station: Option<String>, date: Option<DateTime>) -> Self {
        Self {
            station: non_empty(station),
            date,
        }
    }

    /// Returns `true` if no filter is set.
    pub fn is_empty(&self) -> bool {
        self.station.is_none() && self.date.is_none()
    }
}

/// Bounds of the ozone episode listing.
///
/// An episode matches if it starts at or after `start` and ends at or before `end`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EpisodeFilter {
    pub start: Option<DateTime>,
    pub end: Option<DateTime>,
}

impl EpisodeFilter {
    pub fn new(start: Option<DateTime>, end: Option<DateTime>) -> Self {
        Self { start, end }
    }
}

/// Filters of the linked measurement listing.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkedDataFilter {
    pub station: Option<String>,
    pub magnitude: Option<String>,
    /// The maximum number of rows to return.
    pub limit: usize,
}

impl LinkedDataFilter {
    pub fn new(station: Option<String>, magnitude: Option<String>, limit: Option<usize>) -> Self {
        Self {
            station: non_empty(station),
            magnitude: non_empty(magnitude),
            limit: limit.unwrap_or(DEFAULT_LINKED_LIMIT),
        }
    }
}

impl Default for LinkedDataFilter {
    fn default() -> Self {
        Self::new(None, None, None)
    }
}

/// Filters of the aggregated statistics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatisticsFilter {
    pub station: Option<String>,
    pub magnitude: Option<String>,
    pub date: Option<DateTime>,
}

impl StatisticsFilter {
    pub fn new(
        station: Option<String>,
        magnitude: Option<String>,
        date: Option<DateTime>,
    ) -> Self {
        Self {
            station: non_empty(station),
            magnitude: non_empty(magnitude),
            date,
        }
    }
}
