//! Static registry of the feed tables and their expected columns.
//!
//! The registry drives both column reconciliation (which columns the
//! transformer keeps, fills, or drops) and type coercion (how raw CSV text
//! becomes a typed cell). `FEED_TABLES` is ordered parent-to-child so it can
//! be iterated directly for loading and reversed for truncation.

/// Semantic type of a feed column, deciding its coercion rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Text,
    Integer,
    Float,
    Boolean,
    Date,
}

/// How a column participates in the target table's constraints.
///
/// The pipeline itself never enforces these; required-column violations are
/// left to the database. They are recorded so the registry fully describes
/// the target schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Key,
    Required,
    Optional,
}

#[derive(Debug)]
pub struct ColumnDef {
    pub name: &'static str,
    pub ty: ColumnType,
    pub role: Role,
}

#[derive(Debug)]
pub struct TableDef {
    /// Target database table.
    pub table: &'static str,
    /// Source member file inside the feed archive.
    pub file: &'static str,
    /// Expected columns, in insert order.
    pub columns: &'static [ColumnDef],
}

const fn col(name: &'static str, ty: ColumnType, role: Role) -> ColumnDef {
    ColumnDef { name, ty, role }
}

use ColumnType::{Boolean, Date, Float, Integer, Text};
use Role::{Key, Optional, Required};

/// The six feed tables in load order (parents before children).
pub const FEED_TABLES: &[TableDef] = &[
    TableDef {
        table: "agency",
        file: "agency.txt",
        columns: &[
            col("agency_id", Text, Key),
            col("agency_name", Text, Required),
            col("agency_url", Text, Required),
            col("agency_timezone", Text, Required),
            col("agency_lang", Text, Optional),
            col("agency_phone", Text, Optional),
        ],
    },
    TableDef {
        table: "stops",
        file: "stops.txt",
        columns: &[
            col("stop_id", Text, Key),
            col("stop_code", Text, Optional),
            col("stop_name", Text, Required),
            col("stop_lat", Float, Required),
            col("stop_lon", Float, Required),
            col("location_type", Integer, Optional),
            col("parent_station", Text, Optional),
        ],
    },
    TableDef {
        table: "routes",
        file: "routes.txt",
        columns: &[
            col("route_id", Text, Key),
            col("agency_id", Text, Optional),
            col("route_short_name", Text, Optional),
            col("route_long_name", Text, Optional),
            col("route_desc", Text, Optional),
            col("route_type", Integer, Required),
            col("route_url", Text, Optional),
            col("route_color", Text, Optional),
            col("route_text_color", Text, Optional),
        ],
    },
    TableDef {
        table: "calendar",
        file: "calendar.txt",
        columns: &[
            col("service_id", Text, Key),
            col("monday", Boolean, Required),
            col("tuesday", Boolean, Required),
            col("wednesday", Boolean, Required),
            col("thursday", Boolean, Required),
            col("friday", Boolean, Required),
            col("saturday", Boolean, Required),
            col("sunday", Boolean, Required),
            col("start_date", Date, Required),
            col("end_date", Date, Required),
        ],
    },
    TableDef {
        table: "trips",
        file: "trips.txt",
        columns: &[
            col("trip_id", Text, Key),
            col("route_id", Text, Required),
            col("service_id", Text, Required),
            col("trip_headsign", Text, Optional),
            col("direction_id", Integer, Optional),
            col("shape_id", Text, Optional),
        ],
    },
    TableDef {
        table: "stop_times",
        file: "stop_times.txt",
        columns: &[
            col("trip_id", Text, Key),
            col("stop_id", Text, Key),
            col("stop_sequence", Integer, Key),
            col("arrival_time", Text, Optional),
            col("departure_time", Text, Optional),
            col("pickup_type", Integer, Optional),
            col("drop_off_type", Integer, Optional),
            col("shape_dist_traveled", Float, Optional),
        ],
    },
];

/// Look up a feed table definition by target table name.
#[cfg(test)]
pub fn table(name: &str) -> Option<&'static TableDef> {
    FEED_TABLES.iter().find(|t| t.table == name)
}
