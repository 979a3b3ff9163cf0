/*
 * Copyright © 2024, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use chrono::{DateTime, Days, Local, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize,Deserializer,de::{Error as DeError}};
use std::time::Duration;
use parse_duration::parse;

// simple Duration ctors that do not require unstable std features
#[inline] pub fn secs (n: u64)->Duration { Duration::from_secs(n) }
#[inline] pub fn hours (n: u64)->Duration { Duration::from_secs(n * 3600) }

/// this should be used wherever we might have to use sim clock instead of wall clock
#[inline]
pub fn utc_now()->DateTime<Utc> {
    Utc::now()
}

/// the current UTC calendar date (which is what satellite products use for acquisition dates)
#[inline]
pub fn utc_today()->NaiveDate {
    utc_now().date_naive()
}

/// the calendar date of the local wall clock
#[inline]
pub fn local_today()->NaiveDate {
    Local::now().date_naive()
}

/// the `n_days` most recent calendar dates up to and including `today`, oldest first.
/// Returns an empty vec for `n_days == 0`
pub fn recent_dates (today: NaiveDate, n_days: u32)->Vec<NaiveDate> {
    (0..n_days as u64).rev()
        .filter_map( |d| today.checked_sub_days( Days::new(d)))
        .collect()
}

/// the first date of a `n_days` range that ends (inclusive) with `last`
pub fn range_start (last: NaiveDate, n_days: u32)->NaiveDate {
    let d = (n_days.max(1) - 1) as u64;
    last.checked_sub_days( Days::new(d)).unwrap_or(NaiveDate::MIN)
}

const DATE_FORMATS: [&str;2] = ["%Y-%m-%d", "%Y/%m/%d"];
const DATETIME_FORMATS: [&str;3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// lenient calendar date parser for tabular sources. Accepts plain dates, naive datetimes and
/// RFC 3339 timestamps (of which only the date part is used). Leading/trailing whitespace is ignored
pub fn parse_naive_date (s: &str)->Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() { return None }

    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) { return Some(d) }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) { return Some(dt.date()) }
    }
    DateTime::parse_from_rfc3339(s).ok().map( |dt| dt.date_naive())
}

/// compact date spec as used in file names (e.g. "20240105")
pub fn compact_date_string (date: &NaiveDate)->String {
    date.format("%Y%m%d").to_string()
}

//--- serde support

/// deserialize a Duration from a human readable spec such as "1h" or "30s"
pub fn deserialize_duration <'a,D>(deserializer: D) -> Result<Duration,D::Error>
    where D: Deserializer<'a>
{
    String::deserialize(deserializer).and_then( |string| {
        parse(string.as_str())
            .map_err( |e| D::Error::custom(format!("{:?}",e)))
    })
}
