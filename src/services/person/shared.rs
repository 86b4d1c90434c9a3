use chrono::{DateTime, Local, NaiveDate};
use rusqlite::types::Type;
use rusqlite::{self, Result};

use crate::models::occasion::OccasionType;
use crate::utils::date::parse_calendar_date;

pub(crate) fn to_local_datetime(column: usize, value: String) -> Result<DateTime<Local>> {
    DateTime::parse_from_rfc3339(&value)
        .map(|dt| dt.with_timezone(&Local))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(e)))
}

pub(crate) fn to_calendar_date(column: usize, value: String) -> Result<NaiveDate> {
    parse_calendar_date(&value)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(e)))
}

pub(crate) fn to_occasion_type(column: usize, value: String) -> Result<OccasionType> {
    value
        .parse::<OccasionType>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(column, Type::Text, e.into()))
}
