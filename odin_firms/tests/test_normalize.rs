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

use std::path::Path;
use odin_firms::{Field, RawTable, RecordSet, firms::adapt_product_table, normalize::{canonical_name, normalize}};

// run with "cargo test --test test_normalize -- --nocapture"

fn fixture_table ()->RawTable {
    let data = std::fs::read_to_string( Path::new("tests/firms_viirs_mex.csv")).unwrap();
    RawTable::from_csv_str( &data).unwrap()
}

#[test]
fn test_rename_source_columns() {
    let table = RawTable::from_strs(
        &["latitude", "longitude", "brightness"],
        &[ &["20.5", "-99.5", "330.2"], &["21.0", "-100.0", "301.0"] ]
    );
    let rs = normalize( &table);
    println!("{:?}", rs.schema());

    assert_eq!( rs.len(), 2);
    assert_eq!( rs.schema().fields(), &[Field::Lat, Field::Lon, Field::Brightness]);
    assert!( rs.schema().extra_columns().is_empty());

    let r = &rs.records()[0];
    assert_eq!( r.lat, Some(20.5));
    assert_eq!( r.lon, Some(-99.5));
    assert_eq!( r.brightness, Some(330.2));
    assert_eq!( rs.records()[1].position(), Some((21.0,-100.0)));
}

#[test]
fn test_canonical_name() {
    assert_eq!( canonical_name("acq_date"), "date");
    assert_eq!( canonical_name("acq_time"), "time");
    assert_eq!( canonical_name("confidence"), "confidence");
    assert_eq!( canonical_name("frp"), "frp");
    assert_eq!( canonical_name("Latitude"), "Latitude"); // case sensitive
}

#[test]
fn test_empty_payload() {
    let rs = normalize( &RawTable::default());
    assert!( rs.is_empty());
    assert!( rs.schema().fields().is_empty());

    let rs = normalize( &RawTable::from_csv_str("").unwrap());
    assert!( rs.is_empty());

    // header only
    let rs = normalize( &RawTable::from_csv_str("latitude,longitude,acq_date\n").unwrap());
    assert!( rs.is_empty());
    assert!( rs.has_field(Field::Date));
}

#[test]
fn test_pass_through_columns() {
    let table = RawTable::from_strs(
        &["latitude", "longitude", "frp", "daynight"],
        &[ &["20.5", "-99.5", "1.2", "D"], &["21.0", "-100.0", "", "N"] ]
    );
    let rs = normalize( &table);

    assert_eq!( rs.schema().extra_columns(), &["frp".to_string(), "daynight".to_string()]);
    assert_eq!( rs.records()[0].extra, vec![Some("1.2".to_string()), Some("D".to_string())]);
    assert_eq!( rs.records()[1].extra, vec![None, Some("N".to_string())]);
}

#[test]
fn test_first_mapping_wins() {
    // both map to "lat" - the second one is passed through under its own name
    let table = RawTable::from_strs( &["latitude", "lat", "longitude"], &[ &["20.0", "30.0", "-99.0"] ]);
    let rs = normalize( &table);

    assert_eq!( rs.records()[0].lat, Some(20.0));
    assert_eq!( rs.schema().extra_columns(), &["lat".to_string()]);
    assert_eq!( rs.records()[0].extra, vec![Some("30.0".to_string())]);
}

#[test]
fn test_malformed_values() {
    let table = RawTable::from_strs(
        &["latitude", "longitude", "brightness", "confidence"],
        &[ &["abc", "-99.0", "NaN", ""], &["20.0", "-99.0", "inf", "high"], &["20.0"] ] // last row is short
    );
    let rs = normalize( &table);
    assert_eq!( rs.len(), 3);

    let r0 = &rs.records()[0];
    assert_eq!( r0.lat, None);
    assert_eq!( r0.lon, Some(-99.0));
    assert_eq!( r0.brightness, None);
    assert_eq!( r0.confidence, None);

    assert_eq!( rs.records()[1].brightness, None);
    assert_eq!( rs.records()[2].lon, None);
}

#[test]
fn test_fixture() {
    let mut table = fixture_table();
    println!("headers: {:?}", table.headers);
    assert_eq!( table.len(), 7);

    adapt_product_table( &mut table, &[("bright_ti4".to_string(), "brightness".to_string())]);
    let rs = normalize( &table);

    for r in rs.iter() { println!("{:?}", r) }

    assert_eq!( rs.len(), 7);
    assert_eq!( rs.schema().fields(), &Field::ALL);
    assert_eq!( rs.schema().extra_columns().len(), 8);
    assert_eq!( rs.schema().extra_columns()[0], "country_id");

    let r = &rs.records()[1];
    assert_eq!( r.brightness, Some(367.2));
    assert_eq!( r.date.as_deref(), Some("2024-01-02"));
    assert_eq!( r.time.as_deref(), Some("1930"));
    assert_eq!( r.confidence.as_deref(), Some("high"));
    assert_eq!( r.satellite.as_deref(), Some("N"));

    assert_eq!( rs.records()[4].lat, None); // missing latitude
    assert_eq!( rs.records()[5].confidence.as_deref(), Some("x")); // unknown code is kept
}
