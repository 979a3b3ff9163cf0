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

use std::fmt;
use chrono::NaiveDate;
use serde::{Serialize,Deserialize};
use odin_common::MinMaxAvg;
use crate::{Confidence, Field, RecordSet};

/// what we show for values that can't be computed
pub const NOT_AVAILABLE: &str = "N/A";

/// the display statistics of a record set. Each value is computed on its own so that a missing
/// column only affects the value that needs it
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct Summary {
    pub total_fires: usize,
    pub avg_brightness: f64,
    pub high_confidence: usize,
    pub date_range: String,
}

impl Summary {
    pub fn empty ()->Self {
        Summary { total_fires: 0, avg_brightness: 0.0, high_confidence: 0, date_range: NOT_AVAILABLE.to_string() }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let avg = if self.avg_brightness > 0.0 { format!("{:.1} K", self.avg_brightness) } else { NOT_AVAILABLE.to_string() };
        write!(f, "fires: {}, avg brightness: {}, high confidence: {}, dates: {}",
               self.total_fires, avg, self.high_confidence, self.date_range)
    }
}

pub fn summarize (rs: &RecordSet)->Summary {
    Summary {
        total_fires: rs.len(),
        avg_brightness: avg_brightness(rs),
        high_confidence: high_confidence_count(rs),
        date_range: format_date_range( date_span(rs)),
    }
}

/// mean over all records that have a brightness value, 0 if there are none
pub fn avg_brightness (rs: &RecordSet)->f64 {
    if !rs.has_field(Field::Brightness) { return 0.0 }
    rs.iter().filter_map( |r| r.brightness).collect::<MinMaxAvg>().avg_or(0.0)
}

pub fn high_confidence_count (rs: &RecordSet)->usize {
    if !rs.has_field(Field::Confidence) { return 0 }
    rs.iter().filter( |r| r.confidence_level() == Some(Confidence::High)).count()
}

/// earliest and latest parseable date. Values that do not parse are ignored
pub fn date_span (rs: &RecordSet)->Option<(NaiveDate,NaiveDate)> {
    if !rs.has_field(Field::Date) { return None }

    rs.iter().filter_map( |r| r.acq_date()).fold( None, |acc, d| {
        match acc {
            None => Some((d,d)),
            Some((min,max)) => Some( (min.min(d), max.max(d)) )
        }
    })
}

pub fn format_date_range (span: Option<(NaiveDate,NaiveDate)>)->String {
    match span {
        Some((min,max)) => format!("{} a {}", min, max),
        None => NOT_AVAILABLE.to_string()
    }
}
