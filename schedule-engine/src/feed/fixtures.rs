//! A small GO Transit-shaped feed shared by unit tests.
//!
//! Trips (trip id order):
//!
//! - `GHOST`: UN 10:00 → OR 10:30, no trips.txt entry
//! - `LE-2530`: UN 25:30 → KE 25:45 → SC 25:55
//! - `RH-0800`: UN 08:00 → OR 08:21 → OL 08:25 → RI 08:40
//! - `RH-1450`: UN 14:50 → OR 15:20 → RI 15:35
//! - `RH-2350`: UN 23:50 → OR 24:10 → RI 24:20
//! - `RH-S0700`: RI 07:00 → OR 07:15 → UN 07:40 (southbound)
//! - `ST-0900`: UN 09:00 → KE 09:20 → MK 09:45 (headsign override at MK)

use super::{RawTables, Timetable};

const STOPS: &str = "\
stop_id,stop_name,stop_lat,stop_lon
UN,Union Station,43.645195,-79.380600
BL,Bloor GO,43.658500,-79.444500
KE,Kennedy GO,43.732600,-79.263600
OR,Oriole GO,43.766100,-79.365400
OL,Old Cummer GO,43.794200,-79.371300
RI,Richmond Hill GO,43.875100,-79.426300
SC,Scarborough GO,43.716700,-79.256700
MK,Markham GO,43.882800,-79.262400
";

const ROUTES: &str = "\
route_id,agency_id,route_short_name,route_long_name,route_type
RH,GO,RH,Richmond Hill,2
ST,GO,ST,Stouffville,2
LE,GO,LE,Lakeshore East,2
";

const TRIPS: &str = "\
route_id,service_id,trip_id,trip_headsign
RH,WD,RH-0800,Richmond Hill GO
RH,WD,RH-1450,Richmond Hill GO
RH,WD,RH-2350,Richmond Hill GO
RH,WD,RH-S0700,Union Station
ST,WD,ST-0900,Lincolnville GO
LE,WD,LE-2530,Oshawa GO
";

const STOP_TIMES: &str = "\
trip_id,arrival_time,departure_time,stop_id,stop_sequence,stop_headsign
RH-0800,08:00:00,08:00:00,UN,1,
RH-0800,08:20:00,08:21:00,OR,2,
RH-0800,08:25:00,08:25:00,OL,5,
RH-0800,08:40:00,08:40:00,RI,10,
RH-1450,14:50:00,14:50:00,UN,1,
RH-1450,15:20:00,15:20:00,OR,2,
RH-1450,15:35:00,15:35:00,RI,3,
RH-S0700,07:00:00,07:00:00,RI,1,
RH-S0700,07:15:00,07:15:00,OR,2,
RH-S0700,07:40:00,07:40:00,UN,3,
RH-2350,24:20:00,24:20:00,RI,3,
RH-2350,24:10:00,24:10:00,OR,2,
RH-2350,23:50:00,23:50:00,UN,1,
ST-0900,09:00:00,09:00:00,UN,1,
ST-0900,09:20:00,09:20:00,KE,2,
ST-0900,09:45:00,09:45:00,MK,3,Markham GO
LE-2530,25:30:00,25:30:00,UN,1,
LE-2530,25:45:00,25:45:00,KE,2,
LE-2530,25:55:00,25:55:00,SC,3,
GHOST,10:00:00,10:00:00,UN,1,
GHOST,10:30:00,10:30:00,OR,2,
";

/// Raw text of the fixture tables.
pub(crate) fn raw_tables() -> RawTables {
    RawTables {
        stops: STOPS.to_string(),
        routes: ROUTES.to_string(),
        trips: TRIPS.to_string(),
        stop_times: STOP_TIMES.to_string(),
    }
}

/// The fixture feed, parsed.
pub(crate) fn timetable() -> Timetable {
    Timetable::from_tables(&raw_tables())
}
