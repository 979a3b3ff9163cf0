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

use std::{fmt, str::FromStr};
use serde::{Serialize,Deserialize};
use odin_common::BoundingBox;
use crate::{Confidence, Field, RecordSet};

/// geographic filter rectangle in degrees (west/east = min/max lon, south/north = min/max lat)
pub type GeoBounds = BoundingBox<f64>;

/// records with `lat` in [south,north] and `lon` in [west,east] (both inclusive). If the set does not have
/// a lat or lon column at all we return it unchanged. Inverted bounds yield an empty set
pub fn filter_by_bounds (rs: &RecordSet, bounds: &GeoBounds)->RecordSet {
    if !(rs.has_field(Field::Lat) && rs.has_field(Field::Lon)) {
        return rs.clone()
    }

    rs.filtered( |r| {
        match r.position() {
            Some((lat,lon)) => bounds.contains( lon, lat),
            None => false
        }
    })
}

/// records with exactly the given confidence value, or all records if there is no value
pub fn filter_by_confidence (rs: &RecordSet, confidence: Option<Confidence>)->RecordSet {
    match confidence {
        Some(c) => rs.filtered( |r| r.confidence.as_deref() == Some(c.as_str())),
        None => rs.clone()
    }
}

/// the user level confidence selection
#[derive(Debug,Clone,Copy,PartialEq,Eq,Default,Serialize,Deserialize)]
#[serde(rename_all="lowercase")]
pub enum ConfidenceFilter {
    #[default]
    All,
    High,
    Nominal,
    Low
}

impl ConfidenceFilter {
    pub fn confidence (&self)->Option<Confidence> {
        match self {
            ConfidenceFilter::All => None,
            ConfidenceFilter::High => Some(Confidence::High),
            ConfidenceFilter::Nominal => Some(Confidence::Nominal),
            ConfidenceFilter::Low => Some(Confidence::Low),
        }
    }

    pub fn apply (&self, rs: &RecordSet)->RecordSet {
        filter_by_confidence( rs, self.confidence())
    }
}

/// accepts the canonical names and the labels of the dashboard UI (Todos/Alta/Normal/Baja)
impl FromStr for ConfidenceFilter {
    type Err = String;

    fn from_str (s: &str)->Result<Self,Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "todos" => Ok(ConfidenceFilter::All),
            "high" | "alta" => Ok(ConfidenceFilter::High),
            "nominal" | "normal" => Ok(ConfidenceFilter::Nominal),
            "low" | "baja" => Ok(ConfidenceFilter::Low),
            other => Err( format!("unknown confidence filter '{other}' (use all|high|nominal|low)"))
        }
    }
}

impl fmt::Display for ConfidenceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.confidence() {
            Some(c) => write!(f, "{c}"),
            None => write!(f, "all")
        }
    }
}

/// parse a "min_lat,max_lat,min_lon,max_lon" spec
pub fn parse_bounds (spec: &str)->Result<GeoBounds,String> {
    let vs: Vec<f64> = spec.split(',')
        .map( |s| s.trim().parse::<f64>().map_err( |e| format!("invalid bounds value '{s}': {e}")))
        .collect::<Result<Vec<f64>,String>>()?;

    if let [min_lat, max_lat, min_lon, max_lon] = vs[..] {
        Ok( GeoBounds::from_lat_lon_ranges( min_lat, max_lat, min_lon, max_lon) )
    } else {
        Err( format!("bounds need 4 values (min_lat,max_lat,min_lon,max_lon), got {}", vs.len()))
    }
}
