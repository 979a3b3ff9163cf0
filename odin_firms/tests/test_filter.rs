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

use odin_firms::{Confidence, Field, FireRecord, RawTable, RecordSet, Schema, normalize::normalize};
use odin_firms::filter::{filter_by_bounds, filter_by_confidence, parse_bounds, ConfidenceFilter, GeoBounds};

// run with "cargo test --test test_filter -- --nocapture"

fn geo_records ()->RecordSet {
    normalize( &RawTable::from_strs(
        &["latitude", "longitude", "confidence"],
        &[
            &["20.0", "-100.0", "high"],   // on the SW corner
            &["21.0", "-99.0", "nominal"], // on the NE corner
            &["20.5", "-99.5", "high"],
            &["22.0", "-99.5", "low"],     // north of box
            &["20.5", "-101.0", "high"],   // west of box
            &["", "-99.5", "high"],        // not mappable
        ]
    ))
}

fn confidence_records ()->RecordSet {
    let confs = ["high", "high", "high", "nominal", "nominal", "low"];
    let records = confs.iter().map( |c| FireRecord { confidence: Some(c.to_string()), ..Default::default() }).collect();
    RecordSet::new( Schema::new( [Field::Confidence], Vec::new()), records)
}

#[test]
fn test_bounds_inclusive() {
    let rs = geo_records();
    let bounds = GeoBounds::from_lat_lon_ranges( 20.0, 21.0, -100.0, -99.0);
    let res = filter_by_bounds( &rs, &bounds);

    for r in res.iter() { println!("{:?}", r.position()) }
    assert_eq!( res.len(), 3);
    assert!( res.iter().all( |r| r.position().is_some()));
    assert_eq!( res.schema(), rs.schema());
}

#[test]
fn test_bounds_without_coordinates() {
    let rs = confidence_records();
    let bounds = GeoBounds::from_lat_lon_ranges( 20.0, 21.0, -100.0, -99.0);
    let res = filter_by_bounds( &rs, &bounds);
    assert_eq!( res.len(), rs.len()); // no lat/lon columns -> unchanged
}

#[test]
fn test_inverted_bounds() {
    let rs = geo_records();
    let bounds = GeoBounds::from_lat_lon_ranges( 21.0, 20.0, -100.0, -99.0);
    assert!( filter_by_bounds( &rs, &bounds).is_empty());
}

#[test]
fn test_confidence_filter() {
    let rs = confidence_records();

    assert_eq!( filter_by_confidence( &rs, None).len(), 6);
    assert_eq!( filter_by_confidence( &rs, Some(Confidence::High)).len(), 3);
    assert_eq!( filter_by_confidence( &rs, Some(Confidence::Nominal)).len(), 2);
    assert_eq!( filter_by_confidence( &rs, Some(Confidence::Low)).len(), 1);

    assert_eq!( ConfidenceFilter::All.apply(&rs).len(), 6);
    assert_eq!( ConfidenceFilter::High.apply(&rs).len(), 3);
}

#[test]
fn test_confidence_filter_exact_match() {
    let records = ["High", " high", "high"].iter()
        .map( |c| FireRecord { confidence: Some(c.to_string()), ..Default::default() })
        .collect();
    let rs = RecordSet::new( Schema::new( [Field::Confidence], Vec::new()), records);
    assert_eq!( filter_by_confidence( &rs, Some(Confidence::High)).len(), 1);
}

#[test]
fn test_parse_confidence_filter() {
    assert_eq!( "all".parse::<ConfidenceFilter>(), Ok(ConfidenceFilter::All));
    assert_eq!( "Todos".parse::<ConfidenceFilter>(), Ok(ConfidenceFilter::All));
    assert_eq!( "alta".parse::<ConfidenceFilter>(), Ok(ConfidenceFilter::High));
    assert_eq!( "normal".parse::<ConfidenceFilter>(), Ok(ConfidenceFilter::Nominal));
    assert_eq!( "BAJA".parse::<ConfidenceFilter>(), Ok(ConfidenceFilter::Low));

    let res = "medium".parse::<ConfidenceFilter>();
    println!("{:?}", res);
    assert!( res.is_err());

    assert_eq!( ConfidenceFilter::Nominal.to_string(), "nominal");
    assert_eq!( ConfidenceFilter::All.to_string(), "all");
}

#[test]
fn test_parse_bounds() {
    let b = parse_bounds("20, 21, -100, -99").unwrap();
    assert_eq!( b.south, 20.0);
    assert_eq!( b.north, 21.0);
    assert_eq!( b.west, -100.0);
    assert_eq!( b.east, -99.0);

    assert!( parse_bounds("20,21,-100").is_err());
    assert!( parse_bounds("20,21,west,-99").is_err());
}
