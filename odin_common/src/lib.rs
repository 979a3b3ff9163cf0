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

use serde::{Serialize,Deserialize};
use num::Num;

pub mod macros;
pub mod fs;
pub mod datetime;
pub mod net;

/// a generic bounding box without semantics for the coordinate type.
/// For geographic boxes `west`/`east` are the min/max longitudes and `south`/`north` the min/max latitudes
#[repr(C)]
#[derive(Debug,Copy,Clone,Serialize,Deserialize,PartialEq)]
pub struct BoundingBox <T: Num> {
    pub west: T,
    pub south: T,
    pub east: T,
    pub north: T
}

impl <T: Num + Copy + PartialOrd> BoundingBox<T> {
    pub fn new(west: T, south: T, east: T, north: T)->Self {
        BoundingBox{ west, south, east, north}
    }

    /// ctor for the (min_lat,max_lat,min_lon,max_lon) argument order that is common for geographic queries
    pub fn from_lat_lon_ranges (min_lat: T, max_lat: T, min_lon: T, max_lon: T)->Self {
        BoundingBox{ west: min_lon, south: min_lat, east: max_lon, north: max_lat }
    }

    /// is (x,y) inside or on the boundary of this box. Note this is never true if west > east or south > north
    #[inline]
    pub fn contains (&self, x: T, y: T)->bool {
        x >= self.west && x <= self.east && y >= self.south && y <= self.north
    }
}

/// a simple incremental min/max/avg accumulator
#[derive(Debug,Clone)]
pub struct MinMaxAvg {
    pub n: usize,
    pub min: f64,
    pub max: f64,
    pub avg: f64
}

impl MinMaxAvg {
    pub fn new()->Self { MinMaxAvg { n: 0, min: f64::MAX, max: f64::MIN, avg: f64::NAN } }

    /// add a new observation
    pub fn add (&mut self, x: f64) {
        self.n += 1;

        if self.n > 1 {
            self.avg = self.avg + (x - self.avg) / self.n as f64;
            if x < self.min { self.min = x }
            if x > self.max { self.max = x }
        } else {
            self.min = x;
            self.max = x;
            self.avg = x;
        }
    }

    pub fn is_empty (&self)->bool { self.n == 0 }

    /// the average or the provided fallback if there were no observations
    pub fn avg_or (&self, fallback: f64)->f64 {
        if self.n > 0 { self.avg } else { fallback }
    }
}

impl Default for MinMaxAvg {
    fn default()->Self { MinMaxAvg::new() }
}

impl FromIterator<f64> for MinMaxAvg {
    fn from_iter<I: IntoIterator<Item=f64>> (iter: I)->Self {
        let mut mma = MinMaxAvg::new();
        for x in iter { mma.add(x) }
        mma
    }
}
