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

//! retrieval of active fire data from the FIRMS country API
//! see https://firms.modaps.eosdis.nasa.gov/api/country/ for available sources and country codes

use std::time::Duration;
use async_trait::async_trait;
use chrono::{Days, NaiveDate};
use reqwest::Client;
use serde::{Serialize,Deserialize};
use tracing::{debug, info};
use odin_common::{datetime::{self, deserialize_duration, range_start, utc_today}, net::{self, get_text}};
use crate::{Field, RawTable, normalize::canonical_name, errors::{invalid_request, op_failed, OdinFirmsError, Result}, sample::SampleConfig};

/// FIRMS does not accept day ranges above this
pub const MAX_DAY_RANGE: u32 = 10;

/// the range of supported `days_back` request values
pub const DAYS_BACK_RANGE: std::ops::RangeInclusive<u32> = 1..=30;

/// env var that is used if the config does not have a map key
pub const MAP_KEY_ENV: &str = "FIRMS_MAP_KEY";

#[derive(Debug,Clone,Deserialize)]
#[serde(default)]
pub struct FirmsConfig {
    pub base_url: String,
    pub map_key: String,  // keep this private - it is rate limited
    pub source: String,
    pub country: String,
    pub days_back: u32,

    #[serde(deserialize_with="deserialize_duration")]
    pub timeout: Duration,

    #[serde(deserialize_with="deserialize_duration")]
    pub cache_ttl: Duration,

    /// show sample data if the live source returns no fires (default is to show no fires)
    pub sample_on_empty: bool,

    /// (product column, canonical source column) pairs applied before normalization
    pub column_aliases: Vec<(String,String)>,

    pub sample: SampleConfig,
}

impl Default for FirmsConfig {
    fn default()->Self {
        FirmsConfig {
            base_url: "https://firms.modaps.eosdis.nasa.gov".to_string(),
            map_key: String::new(),
            source: "VIIRS_SNPP_NRT".to_string(),
            country: "MEX".to_string(),
            days_back: 7,
            timeout: datetime::secs(30),
            cache_ttl: datetime::hours(1),
            sample_on_empty: false,
            column_aliases: vec![ ("bright_ti4".to_string(), "brightness".to_string()) ],
            sample: SampleConfig::default(),
        }
    }
}

impl FirmsConfig {
    /// the configured key or the value of FIRMS_MAP_KEY
    pub fn effective_map_key (&self)->String {
        if !self.map_key.is_empty() {
            self.map_key.clone()
        } else {
            std::env::var(MAP_KEY_ENV).unwrap_or_default()
        }
    }

    /// request with the configured defaults
    pub fn default_request (&self)->Result<FireRequest> {
        FireRequest::new( &self.source, &self.country, self.days_back)
    }
}

/// what to retrieve. The country (region) code is not interpreted, it is just passed on to the server
#[derive(Debug,Clone,PartialEq,Eq,Hash,Serialize,Deserialize)]
pub struct FireRequest {
    pub source: String,
    pub country: String,
    pub days_back: u32,
}

impl FireRequest {
    pub fn new (source: impl ToString, country: impl ToString, days_back: u32)->Result<Self> {
        if !DAYS_BACK_RANGE.contains(&days_back) {
            return Err( invalid_request!("days_back {} not in {:?}", days_back, DAYS_BACK_RANGE))
        }
        Ok( FireRequest { source: source.to_string(), country: country.to_string(), days_back } )
    }
}

/// result of a successful retrieval. We distinguish between "got no fires" and failure (which is an `Err`)
#[derive(Debug,Clone,PartialEq)]
pub enum FetchOutcome {
    Live(RawTable),
    Empty
}

impl FetchOutcome {
    pub fn from_table (table: RawTable)->Self {
        if table.is_empty() { FetchOutcome::Empty } else { FetchOutcome::Live(table) }
    }
}

/// the abstraction of where fire data comes from. This is a single best-effort retrieval - no retries
#[async_trait]
pub trait FireDataSource: Send + Sync {
    async fn fetch (&self, request: &FireRequest)->Result<FetchOutcome>;
}

/* #region FIRMS country API ****************************************************************************************/

/// (start_date, n_days) chunks that cover `days_back` days up to and including `today`
pub fn day_range_chunks (today: NaiveDate, days_back: u32)->Vec<(NaiveDate,u32)> {
    let mut chunks = Vec::new();
    let mut start = range_start( today, days_back);
    let mut remaining = days_back;

    while remaining > 0 {
        let n = remaining.min(MAX_DAY_RANGE);
        chunks.push( (start,n));
        remaining -= n;
        match start.checked_add_days( Days::new(n as u64)) {
            Some(d) => start = d,
            None => break
        }
    }
    chunks
}

/// according to https://firms.modaps.eosdis.nasa.gov/api/country/
///   [BASE_URL]/api/country/csv/[MAP_KEY]/[SOURCE]/[COUNTRY_CODE]/[DAY_RANGE]/[DATE]
///    e.g. /api/country/csv/abcdef0123456789/VIIRS_SNPP_NRT/MEX/7/2024-01-01
/// where DATE is the first day of the range
pub fn request_url (base_url: &str, map_key: &str, request: &FireRequest, start: NaiveDate, n_days: u32)->String {
    format!("{}/api/country/csv/{}/{}/{}/{}/{}",
            base_url.trim_end_matches('/'), map_key, request.source, request.country, n_days, start)
}

/// all URLs we need to cover the requested day range
pub fn request_urls (base_url: &str, map_key: &str, request: &FireRequest, today: NaiveDate)->Vec<String> {
    day_range_chunks( today, request.days_back).into_iter()
        .map( |(start,n)| request_url( base_url, map_key, request, start, n))
        .collect()
}

/// VIIRS products use single letter confidence codes
pub fn canonical_confidence_code (code: &str)->Option<String> {
    match code {
        "h" => Some("high".to_string()),
        "n" => Some("nominal".to_string()),
        "l" => Some("low".to_string()),
        _ => None
    }
}

/// turn product specific columns and values into what the normalizer expects. Aliases are only applied
/// if the table does not already have the target column
pub fn adapt_product_table (table: &mut RawTable, column_aliases: &[(String,String)]) {
    for (from,to) in column_aliases {
        if !table.has_column(to) {
            table.rename_column( from, to);
        }
    }
    table.map_column_values( "confidence", canonical_confidence_code);
}

/// FIRMS reports some errors (e.g. "Invalid MAP_KEY." or transaction limits) as plain text with a 200 status.
/// Anything that does not have location columns is not a fire table, no matter how the text splits into columns
pub fn check_payload (body: &str, table: &RawTable)->Result<()> {
    let has_field = |field: Field| table.headers.iter().any( |h| canonical_name(h) == field.name());

    if has_field(Field::Lat) && has_field(Field::Lon) {
        Ok(())
    } else {
        let msg: String = body.trim().chars().take(120).collect();
        Err( op_failed!("unexpected FIRMS response: {}", msg))
    }
}

/// the live FIRMS data source
pub struct FirmsSource {
    base_url: String,
    map_key: String,
    column_aliases: Vec<(String,String)>,
    client: Client,
}

impl FirmsSource {
    pub fn new (config: &FirmsConfig)->Result<Self> {
        let client = net::client_with_timeout( config.timeout)?;
        Ok( FirmsSource {
            base_url: config.base_url.clone(),
            map_key: config.effective_map_key(),
            column_aliases: config.column_aliases.clone(),
            client
        })
    }

    /// parse and adapt a CSV response body
    pub fn parse_payload (&self, body: &str)->Result<RawTable> {
        let mut table = RawTable::from_csv_str(body)?;
        if !body.trim().is_empty() {
            check_payload( body, &table)?;
        }
        adapt_product_table( &mut table, &self.column_aliases);
        Ok(table)
    }

    /// the URLs for `request`, with the day window ending on the current UTC date (FIRMS dates are UTC)
    pub fn current_request_urls (&self, request: &FireRequest)->Vec<String> {
        request_urls( &self.base_url, &self.map_key, request, utc_today())
    }

    /// parse the responses for all chunks of a request and join them by column name
    pub fn merge_payloads<'a> (&self, bodies: impl IntoIterator<Item=&'a str>)->Result<RawTable> {
        let mut table = RawTable::default();
        for body in bodies {
            let chunk = self.parse_payload( body)?;
            debug!("got {} rows", chunk.len());
            table.append( chunk);
        }
        Ok(table)
    }
}

#[async_trait]
impl FireDataSource for FirmsSource {
    async fn fetch (&self, request: &FireRequest)->Result<FetchOutcome> {
        if self.map_key.is_empty() {
            return Err( op_failed!("no FIRMS map key (set {} or configure map_key)", MAP_KEY_ENV))
        }

        let mut bodies = Vec::new();
        for url in self.current_request_urls( request) {
            info!("retrieving {}", net::redact( &url, &self.map_key));
            bodies.push( get_text( &self.client, &url, &None).await?);
        }

        let table = self.merge_payloads( bodies.iter().map( |b| b.as_str()))?;
        Ok( FetchOutcome::from_table(table) )
    }
}

/* #endregion FIRMS country API */
