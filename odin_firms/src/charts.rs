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

//! data series for the dashboard charts (timeline, confidence distribution, brightness histogram)

use std::collections::BTreeMap;
use chrono::NaiveDate;
use serde::{Serialize,Deserialize};
use odin_common::MinMaxAvg;
use crate::{Confidence, Field, RecordSet, errors::Result, summary::{summarize, Summary}};

pub const DEFAULT_HISTOGRAM_BINS: usize = 30;

#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: usize,
}

/// number of fires per day in chronological order. Records without a parseable date are skipped
pub fn daily_counts (rs: &RecordSet)->Vec<DailyCount> {
    if !rs.has_field(Field::Date) { return Vec::new() }

    let mut map: BTreeMap<NaiveDate,usize> = BTreeMap::new();
    for date in rs.iter().filter_map( |r| r.acq_date()) {
        *map.entry(date).or_insert(0) += 1;
    }
    map.into_iter().map( |(date,count)| DailyCount{ date, count }).collect()
}

/// record counts per canonical confidence category. Unknown values are not counted
#[derive(Debug,Clone,Copy,Default,PartialEq,Eq,Serialize,Deserialize)]
pub struct ConfidenceDistribution {
    pub high: usize,
    pub nominal: usize,
    pub low: usize,
}

impl ConfidenceDistribution {
    pub fn get (&self, c: Confidence)->usize {
        match c {
            Confidence::High => self.high,
            Confidence::Nominal => self.nominal,
            Confidence::Low => self.low,
        }
    }

    pub fn total (&self)->usize { self.high + self.nominal + self.low }

    /// (category, count) in display order
    pub fn entries (&self)->Vec<(Confidence,usize)> {
        Confidence::ALL.iter().map( |c| (*c, self.get(*c))).collect()
    }
}

pub fn confidence_distribution (rs: &RecordSet)->ConfidenceDistribution {
    let mut dist = ConfidenceDistribution::default();
    if rs.has_field(Field::Confidence) {
        for r in rs.iter() {
            match r.confidence_level() {
                Some(Confidence::High) => dist.high += 1,
                Some(Confidence::Nominal) => dist.nominal += 1,
                Some(Confidence::Low) => dist.low += 1,
                None => {}
            }
        }
    }
    dist
}

/// bar color of the confidence chart
pub fn confidence_color (c: Confidence)->&'static str {
    match c {
        Confidence::High => "red",
        Confidence::Nominal => "orange",
        Confidence::Low => "yellow",
    }
}

#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// equal width brightness bins over the [min,max] range of the present values. The last bin includes its upper bound
pub fn brightness_histogram (rs: &RecordSet, n_bins: usize)->Vec<HistogramBin> {
    if !rs.has_field(Field::Brightness) { return Vec::new() }

    let values: Vec<f64> = rs.iter().filter_map( |r| r.brightness).collect();
    let stats: MinMaxAvg = values.iter().copied().collect();
    if stats.is_empty() { return Vec::new() }

    if stats.min == stats.max {
        return vec![ HistogramBin { lower: stats.min, upper: stats.max, count: values.len() } ]
    }

    let n_bins = n_bins.max(1);
    let width = (stats.max - stats.min) / n_bins as f64;
    let mut bins: Vec<HistogramBin> = (0..n_bins).map( |i| {
        let lower = stats.min + i as f64 * width;
        let upper = if i == n_bins-1 { stats.max } else { stats.min + (i+1) as f64 * width };
        HistogramBin { lower, upper, count: 0 }
    }).collect();

    for v in values {
        let idx = (((v - stats.min) / width).floor() as usize).min(n_bins-1);
        bins[idx].count += 1;
    }
    bins
}

/// everything the chart views need, in one serializable bundle
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct ChartData {
    pub summary: Summary,
    pub timeline: Vec<DailyCount>,
    pub confidence: ConfidenceDistribution,
    pub brightness: Vec<HistogramBin>,
}

impl ChartData {
    pub fn new (rs: &RecordSet)->Self {
        ChartData {
            summary: summarize(rs),
            timeline: daily_counts(rs),
            confidence: confidence_distribution(rs),
            brightness: brightness_histogram(rs, DEFAULT_HISTOGRAM_BINS),
        }
    }

    pub fn to_json_pretty (&self)->Result<String> {
        Ok( serde_json::to_string_pretty(self)? )
    }
}
