//! Temporal composition: merge the `date` and `time` columns into one
//! `datetime` column.

use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use polars::prelude::{DataFrame, NamedFrom, Series};

use rides_model::EtlError;
use rides_model::columns::{DATE, DATETIME, TIME};

use crate::data_utils::{has_column, value_str};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Compose `date` + `time` into a `datetime` column and drop the sources.
///
/// A no-op when either source column is absent. Rows where both parts are
/// null get a null `datetime`; a half-present or unparseable pair is fatal.
pub fn compose_datetime(mut df: DataFrame) -> Result<DataFrame> {
    if !has_column(&df, DATE) || !has_column(&df, TIME) {
        return Ok(df);
    }
    let mut values: Vec<Option<String>> = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let date = value_str(&df, DATE, idx);
        let time = value_str(&df, TIME, idx);
        match (date, time) {
            (None, None) => values.push(None),
            (date, time) => {
                let date = date.unwrap_or_default();
                let time = time.unwrap_or_default();
                values.push(Some(compose_pair(&date, &time)?));
            }
        }
    }
    df.with_column(Series::new(DATETIME.into(), values))?;
    let df = df.drop(DATE)?;
    Ok(df.drop(TIME)?)
}

fn compose_pair(date: &str, time: &str) -> Result<String> {
    let parse_error = || EtlError::TemporalParse {
        value: format!("{date} {time}"),
    };
    let date = NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| parse_error())?;
    let time = NaiveTime::parse_from_str(time, TIME_FORMAT).map_err(|_| parse_error())?;
    Ok(date.and_time(time).format(DATETIME_FORMAT).to_string())
}
