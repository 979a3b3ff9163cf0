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

//! command line tool to retrieve, filter and summarize FIRMS active fire detections, with optional
//! CSV, GeoJSON, heatmap and chart data export

use std::{io::Write, sync::Arc};
use anyhow::Result;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use odin_common::{check_cli, define_cli, datetime::local_today, fs::create_file_in_dir};
use odin_firms::{
    RecordSet, load_config,
    cache::FetchCache,
    charts::ChartData,
    export::{export_file_name, write_csv},
    filter::{filter_by_bounds, parse_bounds, ConfidenceFilter, GeoBounds},
    firms::{FireRequest, FirmsConfig, FirmsSource},
    loader::{DataMode, FireDataLoader, LoaderConfig},
    map::{heatmap_json, map_center, to_geojson},
    summary::summarize
};

const DEFAULT_CONFIG: &str = "firms.ron";

define_cli! { ARGS [about="show_firms - summarize active fire detections from NASA FIRMS"] =
    sample: bool                [help="use generated sample data instead of live data", short, long],
    config: Option<String>      [help="pathname of FirmsConfig RON file", long],
    country: Option<String>     [help="ISO-3 country code (overrides config)", short, long],
    days: Option<u32>           [help="number of days back (1-30, overrides config)", short, long, value_parser=clap::value_parser!(u32).range(1..=30)],
    confidence: ConfidenceFilter [help="confidence filter: all|high|nominal|low", long, default_value="all"],
    bbox: Option<GeoBounds>     [help="geographic filter 'min_lat,max_lat,min_lon,max_lon'", long, value_parser=parse_bounds, allow_hyphen_values=true],
    seed: Option<u64>           [help="random seed for sample data", long],
    csv: bool                   [help="export filtered records as CSV", long],
    geojson: bool               [help="export map markers as GeoJSON", long],
    heatmap: bool               [help="export heatmap points as JSON", long],
    charts: bool                [help="export chart series as JSON", long],
    json: bool                  [help="print summary as JSON", long],
    output: String              [help="directory for exported files", short, long, default_value="."]
}

#[tokio::main]
async fn main()->Result<()> {
    check_cli!(ARGS);

    // this only succeeds if there is no global subscriber set yet
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())  // use RUST_LOG to set max level
        .try_init();

    let config = get_config()?;
    let request = FireRequest::new(
        &config.source,
        ARGS.country.as_deref().unwrap_or( &config.country),
        ARGS.days.unwrap_or( config.days_back)
    )?;

    let mut loader_config = LoaderConfig::from(&config);
    loader_config.seed = ARGS.seed;

    let loader = FireDataLoader::new( FirmsSource::new(&config)?, FetchCache::new(config.cache_ttl), loader_config);
    let mode = if ARGS.sample { DataMode::Sample } else { DataMode::Live };
    let data = loader.load( mode, &request).await;

    let records = apply_filters( &data.records);
    let summary = summarize( &records);

    if ARGS.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{} for {} ({} days): {}", data.origin, request.country, request.days_back, summary);
        let (lat,lon) = map_center( &records);
        println!("map center: {:.4},{:.4}", lat, lon);
    }

    export( &request, &records)?;
    Ok(())
}

fn get_config ()->Result<FirmsConfig> {
    if let Some(path) = &ARGS.config {
        Ok( load_config( path)? )
    } else {
        match load_config( DEFAULT_CONFIG) {
            Ok(config) => Ok(config),
            Err(e) => {
                warn!("no usable {DEFAULT_CONFIG} ({e}), using defaults");
                Ok( FirmsConfig::default() )
            }
        }
    }
}

fn apply_filters (rs: &Arc<RecordSet>)->RecordSet {
    let rs = match &ARGS.bbox {
        Some(bounds) => filter_by_bounds( rs, bounds),
        None => rs.as_ref().clone()
    };
    ARGS.confidence.apply( &rs)
}

fn export (request: &FireRequest, rs: &RecordSet)->Result<()> {
    let out_dir = &ARGS.output;
    let base_name = export_file_name( &request.country, &local_today());

    if ARGS.csv {
        let (path,file) = create_file_in_dir( out_dir, &base_name)?;
        write_csv( rs, file)?;
        println!("exported {} records to {:?}", rs.len(), path);
    }

    if ARGS.geojson {
        let (path,mut file) = create_file_in_dir( out_dir, &base_name.replace(".csv", ".geojson"))?;
        let fc = to_geojson( rs);
        file.write_all( serde_json::to_string(&fc)?.as_bytes())?;
        println!("exported {} map features to {:?}", fc.features.len(), path);
    }

    if ARGS.heatmap {
        let (path,mut file) = create_file_in_dir( out_dir, &base_name.replace(".csv", "_heatmap.json"))?;
        file.write_all( heatmap_json( rs)?.as_bytes())?;
        println!("exported heatmap points to {:?}", path);
    }

    if ARGS.charts {
        let (path,mut file) = create_file_in_dir( out_dir, &base_name.replace(".csv", "_charts.json"))?;
        file.write_all( ChartData::new( rs).to_json_pretty()?.as_bytes())?;
        println!("exported chart data to {:?}", path);
    }

    Ok(())
}
