use oxsdatatypes::ParseDateTimeError;

/// An error raised while turning caller input into a query filter.
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    /// The value is neither an `xsd:dateTime` nor a plain `YYYY-MM-DD` date.
    #[error("Invalid date '{value}', expected an ISO 8601 date time such as 2025-05-08T00:00:00Z")]
    InvalidTimestamp {
        /// The rejected input.
        value: String,
        /// The parsing error.
        #[source]
        error: ParseDateTimeError,
    },
    /// The value is a date time without a timezone, which cannot be compared with the
    /// timestamps of the graph.
    #[error("Invalid date '{value}', the timezone is missing (e.g. 2025-05-08T00:00:00Z)")]
    MissingTimezone {
        /// The rejected input.
        value: String,
    },
}
