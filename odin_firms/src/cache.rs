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

//! time limited cache for retrieved fire data. Entries are keyed by what was requested so that
//! repeated loads within the TTL do not hit the (rate limited) server again

use std::time::Duration;
use chrono::{DateTime, TimeDelta, Utc};
use dashmap::DashMap;
use odin_common::datetime::utc_now;
use crate::firms::FireRequest;

#[derive(Debug,Clone,PartialEq,Eq,Hash)]
pub struct CacheKey {
    pub source: String,
    pub region: String,
    pub days_back: u32,
}

impl CacheKey {
    pub fn new (source: impl ToString, region: impl ToString, days_back: u32)->Self {
        CacheKey { source: source.to_string(), region: region.to_string(), days_back }
    }
}

impl From<&FireRequest> for CacheKey {
    fn from (req: &FireRequest)->Self {
        CacheKey::new( &req.source, &req.country, req.days_back)
    }
}

struct CacheEntry<V> {
    value: V,
    stored: DateTime<Utc>,
}

/// a concurrent TTL cache. Values should be cheap to clone (e.g. `Arc<RecordSet>`).
/// The `.._at` variants take an explicit time so that expiration does not depend on the wall clock
pub struct FetchCache<V> {
    ttl: TimeDelta,
    entries: DashMap<CacheKey,CacheEntry<V>>,
}

impl<V> FetchCache<V> where V: Clone {
    pub fn new (ttl: Duration)->Self {
        let ttl = TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX);
        FetchCache { ttl, entries: DashMap::new() }
    }

    pub fn ttl (&self)->TimeDelta { self.ttl }

    pub fn get (&self, key: &CacheKey)->Option<V> {
        self.get_at( key, utc_now())
    }

    /// value for `key` if it was stored less than TTL before `now`. Expired entries are removed
    pub fn get_at (&self, key: &CacheKey, now: DateTime<Utc>)->Option<V> {
        if let Some(e) = self.entries.get(key) {
            if self.is_live( &e, now) { return Some(e.value.clone()) }
        }

        // checked again under the shard lock, a concurrently refreshed entry is kept
        self.entries.remove_if( key, |_,e| !self.is_live(e, now));
        None
    }

    pub fn insert (&self, key: CacheKey, value: V) {
        self.insert_at( key, value, utc_now())
    }

    pub fn insert_at (&self, key: CacheKey, value: V, now: DateTime<Utc>) {
        self.entries.insert( key, CacheEntry { value, stored: now });
    }

    /// drop all expired entries, returning the number of removed entries
    pub fn purge_expired (&self, now: DateTime<Utc>)->usize {
        let len_before = self.entries.len();
        self.entries.retain( |_,e| self.is_live(e,now));
        len_before - self.entries.len()
    }

    pub fn clear (&self) { self.entries.clear() }

    pub fn len (&self)->usize { self.entries.len() }
    pub fn is_empty (&self)->bool { self.entries.is_empty() }

    fn is_live (&self, e: &CacheEntry<V>, now: DateTime<Utc>)->bool {
        match now.signed_duration_since(e.stored).checked_sub( &self.ttl) {
            Some(d) => d < TimeDelta::zero(),
            None => true
        }
    }
}
