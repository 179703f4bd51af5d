//! Lenient parsing of GTFS delimited text into records.
//!
//! Columns are located by header name. A missing column or a short record
//! reads as the empty string; numbers and times that do not parse fall back
//! to zero. Such repairs are counted so the loader can report them, but they
//! never reject a row or a table.

use std::collections::HashMap;
use std::str::FromStr;

use csv::StringRecord;
use tracing::debug;

use crate::domain::{Route, ServiceTime, Stop, StopTime, Trip};

/// Records parsed from one table, with the number of rows that needed repair.
#[derive(Debug)]
pub(crate) struct Parsed<T> {
    pub records: Vec<T>,
    pub repaired: usize,
}

/// A header-indexed delimited table.
#[derive(Debug, Default)]
pub(crate) struct DelimitedTable {
    columns: HashMap<String, usize>,
    records: Vec<StringRecord>,
}

impl DelimitedTable {
    /// Parse comma-delimited text whose first line is the header.
    ///
    /// Each non-blank line after the header is one record. Blank lines are
    /// skipped and fields are trimmed.
    pub fn parse(text: &str) -> Self {
        let mut lines = text.lines();

        let columns = lines
            .next()
            .map(|header| {
                split_line(header.trim_start_matches('\u{feff}'))
                    .iter()
                    .enumerate()
                    .map(|(idx, name)| (name.to_string(), idx))
                    .collect()
            })
            .unwrap_or_default();

        let records = lines
            .filter(|line| !line.trim().is_empty())
            .map(split_line)
            .collect();

        Self { columns, records }
    }

    /// Iterate over data rows.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.records.iter().map(move |record| Row {
            columns: &self.columns,
            record,
        })
    }
}

/// Split one line into trimmed fields.
///
/// Every `"` toggles quoting and is dropped; a delimiter inside quotes is
/// literal. An unbalanced quote runs to the end of the line and no further.
fn split_line(line: &str) -> StringRecord {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut quoted = false;

    for c in line.chars() {
        match c {
            '"' => quoted = !quoted,
            ',' if !quoted => fields.push(std::mem::take(&mut current).trim().to_string()),
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());

    StringRecord::from(fields)
}

/// One data row, read by column name.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Row<'a> {
    columns: &'a HashMap<String, usize>,
    record: &'a StringRecord,
}

impl<'a> Row<'a> {
    /// Field value, or "" when the column or field is missing.
    pub fn get(&self, column: &str) -> &'a str {
        self.columns
            .get(column)
            .and_then(|&idx| self.record.get(idx))
            .unwrap_or("")
    }

    /// Non-empty field value.
    pub fn get_non_empty(&self, column: &str) -> Option<&'a str> {
        Some(self.get(column)).filter(|v| !v.is_empty())
    }

    #[cfg(test)]
    fn field_count(&self) -> usize {
        self.record.len()
    }

    /// Parse a field, falling back to the default. Sets `repaired` when a
    /// non-empty value fails to parse.
    fn parse_or_default<T: FromStr + Default>(&self, column: &str, repaired: &mut bool) -> T {
        let raw = self.get(column);
        if raw.is_empty() {
            return T::default();
        }
        raw.parse().unwrap_or_else(|_| {
            *repaired = true;
            T::default()
        })
    }

    fn time_or_midnight(&self, column: &str, repaired: &mut bool) -> ServiceTime {
        let raw = self.get(column);
        if raw.is_empty() {
            return ServiceTime::MIDNIGHT;
        }
        ServiceTime::parse(raw).unwrap_or_else(|e| {
            debug!(column, value = raw, error = %e, "Unparseable stop time");
            *repaired = true;
            ServiceTime::MIDNIGHT
        })
    }
}

/// Parse `stops.txt`.
pub(crate) fn parse_stops(table: &DelimitedTable) -> Parsed<Stop> {
    collect(table, |row, repaired| {
        Stop::new(
            row.get("stop_id"),
            row.get("stop_name"),
            row.parse_or_default("stop_lat", repaired),
            row.parse_or_default("stop_lon", repaired),
        )
    })
}

/// Parse `routes.txt`.
pub(crate) fn parse_routes(table: &DelimitedTable) -> Parsed<Route> {
    collect(table, |row, _| Route {
        id: row.get("route_id").to_string(),
        long_name: row.get("route_long_name").to_string(),
        short_name: row.get("route_short_name").to_string(),
    })
}

/// Parse `trips.txt`.
pub(crate) fn parse_trips(table: &DelimitedTable) -> Parsed<Trip> {
    collect(table, |row, _| Trip {
        id: row.get("trip_id").to_string(),
        route_id: row.get("route_id").to_string(),
        headsign: row.get("trip_headsign").to_string(),
    })
}

/// Parse `stop_times.txt`, in file order.
pub(crate) fn parse_stop_times(table: &DelimitedTable) -> Parsed<StopTime> {
    collect(table, |row, repaired| StopTime {
        trip_id: row.get("trip_id").to_string(),
        stop_id: row.get("stop_id").to_string(),
        arrival: row.time_or_midnight("arrival_time", repaired),
        departure: row.time_or_midnight("departure_time", repaired),
        sequence: row.parse_or_default("stop_sequence", repaired),
        headsign: row.get_non_empty("stop_headsign").map(String::from),
    })
}

fn collect<T>(table: &DelimitedTable, mut build: impl FnMut(Row<'_>, &mut bool) -> T) -> Parsed<T> {
    let mut repaired = 0;
    let records = table
        .rows()
        .map(|row| {
            let mut row_repaired = false;
            let record = build(row, &mut row_repaired);
            if row_repaired {
                repaired += 1;
            }
            record
        })
        .collect();

    Parsed { records, repaired }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_field_keeps_delimiter() {
        let table = DelimitedTable::parse("stop_name,stop_id,stop_lat,stop_lon\n\"Toronto, ON\",UN,43.6,-79.4\n");
        let row = table.rows().next().unwrap();

        assert_eq!(row.field_count(), 4);
        assert_eq!(row.get("stop_name"), "Toronto, ON");
        assert_eq!(row.get("stop_id"), "UN");
        assert_eq!(row.get("stop_lat"), "43.6");
        assert_eq!(row.get("stop_lon"), "-79.4");
    }

    #[test]
    fn quote_inside_field_toggles() {
        let table = DelimitedTable::parse("stop_name,stop_id\nToronto \"Union, ON\",UN\n");
        let row = table.rows().next().unwrap();

        assert_eq!(row.field_count(), 2);
        assert_eq!(row.get("stop_name"), "Toronto Union, ON");
        assert_eq!(row.get("stop_id"), "UN");
    }

    #[test]
    fn unbalanced_quote_stays_on_its_line() {
        let table = DelimitedTable::parse(
            "trip_id,arrival_time,departure_time,stop_id,stop_sequence\n\
             T1,08:00:00,08:00:00,\"UN,1\n\
             T1,08:10:00,08:10:00,OR,2\n\
             T1,08:15:00,08:15:00,OL,3\n\
             T1,08:20:00,08:20:00,RI,4\n",
        );
        let parsed = parse_stop_times(&table);

        assert_eq!(parsed.records.len(), 4);
        assert_eq!(parsed.records[0].stop_id, "UN,1");
        assert_eq!(parsed.records[0].sequence, 0);

        let stops: Vec<_> = parsed.records[1..].iter().map(|st| st.stop_id.as_str()).collect();
        assert_eq!(stops, ["OR", "OL", "RI"]);
        assert_eq!(parsed.records[3].sequence, 4);
    }

    #[test]
    fn row_of_empty_fields_is_kept() {
        let table = DelimitedTable::parse("route_id,route_short_name\nLW,LW\n,\n");
        assert_eq!(table.rows().count(), 2);
        assert_eq!(table.rows().nth(1).unwrap().get("route_id"), "");
    }

    #[test]
    fn blank_lines_are_skipped() {
        let table = DelimitedTable::parse("route_id,route_long_name\nLW,Lakeshore West\n\n   \nLE,Lakeshore East\n");
        assert_eq!(table.rows().count(), 2);
    }

    #[test]
    fn fields_are_trimmed() {
        let table = DelimitedTable::parse("stop_id, stop_name\n UN , Union Station \n");
        let row = table.rows().next().unwrap();
        assert_eq!(row.get("stop_id"), "UN");
        assert_eq!(row.get("stop_name"), "Union Station");
    }

    #[test]
    fn missing_columns_and_fields_read_empty() {
        let table = DelimitedTable::parse("stop_id,stop_name,stop_lat\nUN\n");
        let row = table.rows().next().unwrap();
        assert_eq!(row.get("stop_id"), "UN");
        assert_eq!(row.get("stop_name"), "");
        assert_eq!(row.get("stop_lat"), "");
        assert_eq!(row.get("no_such_column"), "");
        assert_eq!(row.get_non_empty("stop_name"), None);
    }

    #[test]
    fn header_byte_order_mark_is_ignored() {
        let table = DelimitedTable::parse("\u{feff}stop_id,stop_name\nUN,Union Station\n");
        let row = table.rows().next().unwrap();
        assert_eq!(row.get("stop_id"), "UN");
    }

    #[test]
    fn crlf_line_endings() {
        let table = DelimitedTable::parse("trip_id,route_id\r\nT1,LW\r\nT2,LE\r\n");
        assert_eq!(table.rows().count(), 2);
        assert_eq!(table.rows().nth(1).unwrap().get("route_id"), "LE");
    }

    #[test]
    fn empty_text_has_no_rows() {
        assert_eq!(DelimitedTable::parse("").rows().count(), 0);
        assert_eq!(DelimitedTable::parse("stop_id,stop_name\n").rows().count(), 0);
    }

    #[test]
    fn stops_with_bad_coordinates_default_to_zero() {
        let table = DelimitedTable::parse(
            "stop_id,stop_name,stop_lat,stop_lon\nUN,Union Station,43.645,-79.380\nOR,Oriole GO,north,\n",
        );
        let parsed = parse_stops(&table);

        assert_eq!(parsed.records.len(), 2);
        assert_eq!(parsed.records[0].lat, 43.645);
        assert_eq!(parsed.records[1].lat, 0.0);
        assert_eq!(parsed.records[1].lon, 0.0);
        assert_eq!(parsed.repaired, 1);
    }

    #[test]
    fn malformed_stop_time_is_repaired_not_dropped() {
        let table = DelimitedTable::parse(
            "trip_id,arrival_time,departure_time,stop_id,stop_sequence,stop_headsign\n\
             T1,soon,08:00:00,UN,first,\n\
             T1,08:30:00,08:31:00,OR,2,Richmond Hill\n",
        );
        let parsed = parse_stop_times(&table);

        assert_eq!(parsed.records.len(), 2);
        assert_eq!(parsed.repaired, 1);

        let first = &parsed.records[0];
        assert_eq!(first.arrival, ServiceTime::MIDNIGHT);
        assert_eq!(first.departure, ServiceTime::from_hms(8, 0, 0));
        assert_eq!(first.sequence, 0);
        assert_eq!(first.headsign, None);

        assert_eq!(parsed.records[1].headsign.as_deref(), Some("Richmond Hill"));
    }

    #[test]
    fn routes_and_trips() {
        let routes = parse_routes(&DelimitedTable::parse(
            "route_id,route_short_name,route_long_name\nRH,RH,Richmond Hill\n",
        ));
        assert_eq!(routes.records[0].long_name, "Richmond Hill");
        assert_eq!(routes.records[0].short_name, "RH");

        let trips = parse_trips(&DelimitedTable::parse(
            "route_id,service_id,trip_id,trip_headsign\nRH,WD,T1,Bloomington GO\n",
        ));
        assert_eq!(trips.records[0].id, "T1");
        assert_eq!(trips.records[0].route_id, "RH");
        assert_eq!(trips.records[0].headsign, "Bloomington GO");
    }
}
