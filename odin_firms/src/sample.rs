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

//! synthetic fire records for development and for when live data is not available

use chrono::NaiveDate;
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Serialize,Deserialize};
use odin_common::datetime::recent_dates;
use crate::{Confidence, Field, FireRecord, RecordSet, Schema, filter::GeoBounds};

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct SampleConfig {
    pub size: usize,
    pub bounds: GeoBounds,
    pub min_brightness: f64,
    pub max_brightness: f64,
    pub n_days: u32,
    pub satellite: String,
}

impl Default for SampleConfig {
    /// 50 hotspots within the approximate extent of Mexico over the last week
    fn default()->Self {
        SampleConfig {
            size: 50,
            bounds: GeoBounds::from_lat_lon_ranges( 14.5, 32.5, -118.0, -86.0),
            min_brightness: 300.0,
            max_brightness: 500.0,
            n_days: 7,
            satellite: "VIIRS_SNPP".to_string(),
        }
    }
}

/// generate sample records for the `n_days` up to and including `today`. With a `seed` the result is reproducible,
/// otherwise the generator is seeded from the OS
pub fn generate_sample (config: &SampleConfig, today: NaiveDate, seed: Option<u64>)->RecordSet {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng()
    };
    generate_sample_with_rng( config, today, &mut rng)
}

pub fn generate_sample_with_rng<R: Rng> (config: &SampleConfig, today: NaiveDate, rng: &mut R)->RecordSet {
    let dates = recent_dates( today, config.n_days.max(1));
    let b = &config.bounds;

    let records = (0..config.size).map( |_| {
        let lat = uniform( rng, b.south, b.north);
        let lon = uniform( rng, b.west, b.east);
        let brightness = uniform( rng, config.min_brightness, config.max_brightness);
        let confidence = Confidence::ALL[ rng.random_range(0..Confidence::ALL.len())];
        let date = dates[ rng.random_range(0..dates.len())];

        FireRecord {
            lat: Some(lat),
            lon: Some(lon),
            brightness: Some(brightness),
            date: Some( date.to_string()),
            time: None,
            confidence: Some( confidence.to_string()),
            satellite: Some( config.satellite.clone()),
            extra: Vec::new()
        }
    }).collect();

    let schema = Schema::new( [Field::Lat, Field::Lon, Field::Brightness, Field::Confidence, Field::Date, Field::Satellite], Vec::new());
    RecordSet::new( schema, records)
}

// random_range panics on inverted ranges, which we don't want to depend on the config
fn uniform<R: Rng> (rng: &mut R, a: f64, b: f64)->f64 {
    let (lo,hi) = if a <= b { (a,b) } else { (b,a) };
    if lo == hi { lo } else { rng.random_range( lo..=hi) }
}
