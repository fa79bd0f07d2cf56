use besafe::{
    AggregatedStat, Hour, HourlyMeasurement, LinkedMeasurement, Measurement, OzoneEpisode,
};
use clap::ValueEnum;
use prettytable::{row, Cell, Row, Table};
use serde::Serialize;
use std::collections::BTreeSet;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// An aligned table followed by a summary line
    Table,
    /// A JSON array
    Json,
}

/// A record that can be printed as a table row.
pub trait TableRecord {
    fn header() -> Row;

    fn row(&self) -> Row;

    /// The station of the record, if it has one.
    fn station(&self) -> Option<&str> {
        None
    }

    /// The magnitude of the record, if it has one.
    fn magnitude(&self) -> Option<&str> {
        None
    }
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map(|value| value.to_string()).unwrap_or_default()
}

impl TableRecord for Measurement {
    fn header() -> Row {
        row!["Station", "Date", "Magnitude", "H01"]
    }

    fn row(&self) -> Row {
        row![self.station, self.date, self.magnitude, self.value]
    }

    fn station(&self) -> Option<&str> {
        Some(&self.station)
    }

    fn magnitude(&self) -> Option<&str> {
        Some(&self.magnitude)
    }
}

impl TableRecord for HourlyMeasurement {
    fn header() -> Row {
        let mut header = row!["Station", "Date", "Magnitude", "Sampling point"];
        for hour in Hour::ALL {
            header.add_cell(Cell::new(&hour.to_string()));
        }
        header
    }

    fn row(&self) -> Row {
        let mut row = row![
            self.station,
            self.date,
            self.magnitude,
            optional(self.sampling_point.as_deref())
        ];
        for (_, value) in self.hours.iter() {
            row.add_cell(Cell::new(&optional(value)));
        }
        row
    }

    fn station(&self) -> Option<&str> {
        Some(&self.station)
    }

    fn magnitude(&self) -> Option<&str> {
        Some(&self.magnitude)
    }
}

impl TableRecord for OzoneEpisode {
    fn header() -> Row {
        row!["Episode", "Start", "End", "Scenario", "Population measures"]
    }

    fn row(&self) -> Row {
        row![
            self.episode_uri,
            self.start_date,
            self.end_date,
            optional(self.scenario.as_deref()),
            optional(self.population_measures.as_deref())
        ]
    }
}

impl TableRecord for LinkedMeasurement {
    fn header() -> Row {
        row!["Measurement", "Station", "Date", "Magnitude", "Sampling point", "Wikidata"]
    }

    fn row(&self) -> Row {
        row![
            self.measurement_uri,
            self.station,
            self.date,
            self.magnitude,
            optional(self.sampling_point.as_deref()),
            optional(self.wikidata_link())
        ]
    }

    fn station(&self) -> Option<&str> {
        Some(&self.station)
    }

    fn magnitude(&self) -> Option<&str> {
        Some(&self.magnitude)
    }
}

impl TableRecord for AggregatedStat {
    fn header() -> Row {
        row!["Station", "Magnitude", "Count", "Average", "Max", "Min"]
    }

    fn row(&self) -> Row {
        row![
            self.station,
            self.magnitude,
            self.count,
            optional(self.average),
            optional(self.max),
            optional(self.min)
        ]
    }

    fn station(&self) -> Option<&str> {
        Some(&self.station)
    }

    fn magnitude(&self) -> Option<&str> {
        Some(&self.magnitude)
    }
}

/// Counts the rows, distinct stations and distinct magnitudes of `records`.
pub fn summary<T: TableRecord>(records: &[T]) -> String {
    let stations: BTreeSet<_> = records.iter().filter_map(T::station).collect();
    let magnitudes: BTreeSet<_> = records.iter().filter_map(T::magnitude).collect();
    if stations.is_empty() && magnitudes.is_empty() {
        format!("{} rows", records.len())
    } else {
        format!(
            "{} rows, {} stations, {} magnitudes",
            records.len(),
            stations.len(),
            magnitudes.len()
        )
    }
}

pub fn print_records<T: TableRecord + Serialize>(
    records: &[T],
    format: OutputFormat,
    writer: &mut impl Write,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, records)?;
            writeln!(writer)?;
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_titles(T::header());
            for record in records {
                table.add_row(record.row());
            }
            table.print(&mut *writer)?;
            writeln!(writer, "{}", summary(records))?;
        }
    }
    Ok(())
}

/// Prints station or magnitude codes, one per line.
pub fn print_codes(
    codes: &[String],
    format: OutputFormat,
    writer: &mut impl Write,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *writer, codes)?;
            writeln!(writer)?;
        }
        OutputFormat::Table => {
            for code in codes {
                writeln!(writer, "{code}")?;
            }
        }
    }
    Ok(())
}
