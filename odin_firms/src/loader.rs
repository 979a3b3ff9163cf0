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

use std::{fmt, str::FromStr, sync::Arc};
use serde::{Serialize,Deserialize};
use tracing::{info, warn};
use odin_common::datetime::local_today;
use crate::{
    RecordSet,
    cache::{CacheKey, FetchCache},
    errors::Result,
    firms::{FetchOutcome, FireDataSource, FireRequest, FirmsConfig},
    normalize::normalize,
    sample::{generate_sample, SampleConfig}
};

/// the cache source key we use for generated data
pub const SAMPLE_SOURCE: &str = "sample";

#[derive(Debug,Clone,Copy,PartialEq,Eq,Default,Serialize,Deserialize)]
#[serde(rename_all="lowercase")]
pub enum DataMode {
    #[default] Live,
    Sample
}

impl FromStr for DataMode {
    type Err = String;
    fn from_str (s: &str)->std::result::Result<Self,Self::Err> {
        match s.to_lowercase().as_str() {
            "live" | "real" => Ok(DataMode::Live),
            "sample" | "demo" => Ok(DataMode::Sample),
            _ => Err( format!("unknown data mode '{s}'"))
        }
    }
}

/// where the records of a load came from
#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
pub enum DataOrigin {
    /// live records (possibly from cache)
    Live,
    /// the live source answered but had no fires
    LiveEmpty,
    /// the live source failed (or was empty and configured to fall back) and we show generated data
    SampleFallback,
    /// generated data was requested
    Sample,
}

impl DataOrigin {
    pub fn is_sample (&self)->bool {
        matches!( self, DataOrigin::Sample | DataOrigin::SampleFallback)
    }
}

impl fmt::Display for DataOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DataOrigin::Live => "live data",
            DataOrigin::LiveEmpty => "live data (no fires)",
            DataOrigin::SampleFallback => "sample data (live data not available)",
            DataOrigin::Sample => "sample data",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug,Clone)]
pub struct LoadedData {
    pub origin: DataOrigin,
    pub records: Arc<RecordSet>,
}

/// what the loader needs to know besides the data source
#[derive(Debug,Clone)]
pub struct LoaderConfig {
    pub sample_on_empty: bool,
    pub sample: SampleConfig,
    pub seed: Option<u64>,
}

impl From<&FirmsConfig> for LoaderConfig {
    fn from (config: &FirmsConfig)->Self {
        LoaderConfig { sample_on_empty: config.sample_on_empty, sample: config.sample.clone(), seed: None }
    }
}

/// obtains a normalized record set for a request, using a TTL cache in front of the data source and
/// generated sample data if the source fails. Failures of the source are never propagated
pub struct FireDataLoader<S> where S: FireDataSource {
    source: S,
    cache: FetchCache<Arc<RecordSet>>,
    config: LoaderConfig,
}

impl<S> FireDataLoader<S> where S: FireDataSource {
    pub fn new (source: S, cache: FetchCache<Arc<RecordSet>>, config: LoaderConfig)->Self {
        FireDataLoader { source, cache, config }
    }

    pub fn source (&self)->&S { &self.source }
    pub fn cache (&self)->&FetchCache<Arc<RecordSet>> { &self.cache }

    pub async fn load (&self, mode: DataMode, request: &FireRequest)->LoadedData {
        match mode {
            DataMode::Sample => self.load_sample( request),
            DataMode::Live => self.load_live( request).await
        }
    }

    fn load_sample (&self, request: &FireRequest)->LoadedData {
        let key = CacheKey::new( SAMPLE_SOURCE, &request.country, request.days_back);
        let records = match self.cache.get(&key) {
            Some(rs) => rs,
            None => {
                let rs = Arc::new( self.generate());
                self.cache.insert( key, rs.clone());
                rs
            }
        };
        LoadedData { origin: DataOrigin::Sample, records }
    }

    async fn load_live (&self, request: &FireRequest)->LoadedData {
        let key = CacheKey::from(request);
        if let Some(records) = self.cache.get(&key) {
            info!("using cached data for {}/{} ({} days)", request.source, request.country, request.days_back);
            let origin = if records.is_empty() { DataOrigin::LiveEmpty } else { DataOrigin::Live };
            return LoadedData { origin, records }
        }

        match self.fetch_normalized( request).await {
            Ok(rs) => {
                if rs.is_empty() && self.config.sample_on_empty {
                    warn!("no fires in live data, showing sample data");
                    return self.fallback()
                }

                info!("loaded {} fire records", rs.len());
                let records = Arc::new(rs);
                self.cache.insert( key, records.clone());
                let origin = if records.is_empty() { DataOrigin::LiveEmpty } else { DataOrigin::Live };
                LoadedData { origin, records }
            }
            Err(e) => {
                warn!("failed to retrieve live data: {e}, showing sample data");
                self.fallback()
            }
        }
    }

    async fn fetch_normalized (&self, request: &FireRequest)->Result<RecordSet> {
        match self.source.fetch( request).await? {
            FetchOutcome::Live(table) => Ok( normalize(&table)),
            FetchOutcome::Empty => Ok( RecordSet::empty())
        }
    }

    // fallbacks are not cached so that the next load tries the live source again
    fn fallback (&self)->LoadedData {
        LoadedData { origin: DataOrigin::SampleFallback, records: Arc::new( self.generate()) }
    }

    fn generate (&self)->RecordSet {
        generate_sample( &self.config.sample, local_today(), self.config.seed)
    }
}
