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
use odin_firms::{Confidence, Field, sample::{generate_sample, SampleConfig}, filter::GeoBounds, summary::summarize};

// run with "cargo test --test test_sample -- --nocapture"

fn today ()->NaiveDate { NaiveDate::from_ymd_opt(2024,1,7).unwrap() }

#[test]
fn test_deterministic() {
    let config = SampleConfig::default();
    let rs1 = generate_sample( &config, today(), Some(42));
    let rs2 = generate_sample( &config, today(), Some(42));
    let rs3 = generate_sample( &config, today(), Some(43));

    assert_eq!( rs1, rs2);
    assert_ne!( rs1, rs3);
    println!("{}", summarize(&rs1));
}

#[test]
fn test_within_config() {
    let config = SampleConfig::default();
    let rs = generate_sample( &config, today(), Some(1));
    let b = &config.bounds;

    assert_eq!( rs.len(), config.size);
    assert!( !rs.has_field(Field::Time));

    let first_day = NaiveDate::from_ymd_opt(2024,1,1).unwrap();
    for r in rs.iter() {
        let (lat,lon) = r.position().unwrap();
        assert!( lat >= b.south && lat <= b.north, "lat {lat} out of bounds");
        assert!( lon >= b.west && lon <= b.east, "lon {lon} out of bounds");

        let brightness = r.brightness.unwrap();
        assert!( brightness >= config.min_brightness && brightness <= config.max_brightness);

        assert!( r.confidence_level().is_some());

        let date = r.acq_date().unwrap();
        assert!( date >= first_day && date <= today());

        assert_eq!( r.satellite.as_deref(), Some("VIIRS_SNPP"));
    }
}

#[test]
fn test_custom_config() {
    let config = SampleConfig {
        size: 5,
        bounds: GeoBounds::from_lat_lon_ranges( 10.0, 10.0, -90.0, -90.0), // degenerate box
        min_brightness: 500.0,
        max_brightness: 300.0, // inverted
        n_days: 1,
        satellite: "TEST".to_string(),
    };
    let rs = generate_sample( &config, today(), Some(7));

    assert_eq!( rs.len(), 5);
    for r in rs.iter() {
        assert_eq!( r.position(), Some((10.0,-90.0)));
        let brightness = r.brightness.unwrap();
        assert!( (300.0..=500.0).contains(&brightness));
        assert_eq!( r.acq_date(), Some(today()));
    }
}

#[test]
fn test_empty_sample() {
    let config = SampleConfig { size: 0, ..SampleConfig::default() };
    let rs = generate_sample( &config, today(), None);
    assert!( rs.is_empty());
    assert_eq!( summarize(&rs).total_fires, 0);
}
