/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
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
#![allow(unused)]

use chrono::NaiveDate;
use serde::Deserialize;
use odin_common::datetime::{compact_date_string, deserialize_duration, parse_naive_date, range_start, recent_dates, utc_now, utc_today};

// run with "cargo test --test test_datetime -- --nocapture"

fn date (y: i32, m: u32, d: u32)->NaiveDate { NaiveDate::from_ymd_opt(y,m,d).unwrap() }

#[test]
fn test_parse_naive_date() {
    let d = Some( date(2024,1,5));
    assert_eq!( parse_naive_date("2024-01-05"), d);
    assert_eq!( parse_naive_date(" 2024/01/05 "), d);
    assert_eq!( parse_naive_date("2024-01-05 13:45:00"), d);
    assert_eq!( parse_naive_date("2024-01-05T13:45:00"), d);
    assert_eq!( parse_naive_date("2024-01-05 13:45"), d);
    assert_eq!( parse_naive_date("2024-01-05T23:45:00-07:00"), d);

    assert_eq!( parse_naive_date("bad-value"), None);
    assert_eq!( parse_naive_date(""), None);
    assert_eq!( parse_naive_date("2024-02-30"), None);
}

#[test]
fn test_recent_dates() {
    let dates = recent_dates( date(2024,3,2), 3);
    println!("{dates:?}");
    assert_eq!( dates, vec![ date(2024,2,29), date(2024,3,1), date(2024,3,2) ]);
    assert!( recent_dates( date(2024,3,2), 0).is_empty());
}

#[test]
fn test_range_start() {
    assert_eq!( range_start( date(2024,1,10), 1), date(2024,1,10));
    assert_eq!( range_start( date(2024,1,10), 10), date(2024,1,1));
    assert_eq!( range_start( date(2024,1,10), 0), date(2024,1,10));
}

#[test]
fn test_compact_date() {
    assert_eq!( compact_date_string( &date(2024,1,5)), "20240105");
}

#[derive(Deserialize)]
struct Timing {
    #[serde(deserialize_with="deserialize_duration")]
    timeout: std::time::Duration
}

#[test]
fn test_deserialize_duration() {
    let timing: Timing = serde_json::from_str( r#"{"timeout": "90s"}"#).unwrap();
    assert_eq!( timing.timeout.as_secs(), 90);

    let timing: Timing = serde_json::from_str( r#"{"timeout": "2h"}"#).unwrap();
    assert_eq!( timing.timeout.as_secs(), 7200);

    assert!( serde_json::from_str::<Timing>( r#"{"timeout": "soon"}"#).is_err());
}

#[test]
fn test_utc_today() {
    // FIRMS acquisition dates are UTC, so date windows have to be based on the UTC calendar date
    let before = utc_now().date_naive();
    let today = utc_today();
    let after = utc_now().date_naive();
    println!("UTC today: {today}");
    assert!( today >= before && today <= after);
}
