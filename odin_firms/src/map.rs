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

//! map layer data (markers and heatmap). Only mappable records (with lat and lon) show up here

use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde::Serialize;
use serde_json::json;
use crate::{Confidence, Field, FireRecord, RecordSet, errors::Result};

/// default map center if there is nothing to show (approximate center of Mexico)
pub const DEFAULT_CENTER: (f64,f64) = (23.6345, -102.5528);

/// heatmap weight for records without brightness
pub const DEFAULT_HEAT_WEIGHT: f64 = 300.0;

/// mean (lat,lon) of all mappable records, [`DEFAULT_CENTER`] if there are none
pub fn map_center (rs: &RecordSet)->(f64,f64) {
    let (n, lat_sum, lon_sum) = rs.iter()
        .filter_map( |r| r.position())
        .fold( (0usize, 0.0, 0.0), |(n,a,b), (lat,lon)| (n+1, a+lat, b+lon));

    if n > 0 { (lat_sum / n as f64, lon_sum / n as f64) } else { DEFAULT_CENTER }
}

#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize)]
pub struct MarkerStyle {
    pub color: &'static str,
    pub icon: &'static str,
    pub group: &'static str,
}

/// markers are grouped by confidence. Anything that is not high or low (including unknown) is shown as nominal
pub fn marker_style (confidence: Option<Confidence>)->MarkerStyle {
    match confidence {
        Some(Confidence::High) => MarkerStyle { color: "red", icon: "fire", group: "high_confidence" },
        Some(Confidence::Low) => MarkerStyle { color: "orange", icon: "info-sign", group: "low_confidence" },
        _ => MarkerStyle { color: "darkred", icon: "fire", group: "nominal_confidence" },
    }
}

/// [lat, lon, weight] triples
pub fn heatmap_points (rs: &RecordSet)->Vec<[f64;3]> {
    rs.iter().filter_map( |r| {
        r.position().map( |(lat,lon)| [lat, lon, r.brightness.unwrap_or(DEFAULT_HEAT_WEIGHT)])
    }).collect()
}

/// heatmap layer as JSON array of [lat,lon,weight] triples
pub fn heatmap_json (rs: &RecordSet)->Result<String> {
    Ok( serde_json::to_string( &heatmap_points(rs))? )
}

/// point features for all mappable records, with the canonical values and marker style as properties
pub fn to_geojson (rs: &RecordSet)->FeatureCollection {
    let features = rs.iter().filter_map( |r| {
        r.position().map( |(lat,lon)| marker_feature( rs, r, lat, lon))
    }).collect();

    FeatureCollection { bbox: None, features, foreign_members: None }
}

fn marker_feature (rs: &RecordSet, r: &FireRecord, lat: f64, lon: f64)->Feature {
    let mut props = JsonObject::new();

    for field in rs.schema().fields() {
        match field {
            Field::Lat | Field::Lon => {} // that's the geometry
            Field::Brightness => { props.insert( field.name().to_string(), json!(r.brightness)); }
            _ => { props.insert( field.name().to_string(), json!(r.value_string(*field))); }
        }
    }

    let style = marker_style( r.confidence_level());
    props.insert( "marker_color".to_string(), json!(style.color));
    props.insert( "marker_icon".to_string(), json!(style.icon));
    props.insert( "group".to_string(), json!(style.group));

    Feature {
        bbox: None,
        geometry: Some( Geometry::new( Value::Point( vec![lon, lat]))),
        id: None,
        properties: Some(props),
        foreign_members: None
    }
}
