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

//! fire detection records from NASA's Fire Information for Resource Management System (FIRMS).
//!
//! The core of this crate is a set of pure functions that turn a loosely typed tabular payload into
//! a canonical [`RecordSet`] ([`normalize`]), narrow it down ([`filter`]) and derive display
//! statistics from it ([`summary`], [`charts`], [`map`]). Retrieval ([`firms`]), caching ([`cache`]),
//! orchestration with sample data fallback ([`loader`]) and file export ([`export`]) sit around this core.

use std::{fmt, path::{Path,PathBuf}, str::FromStr};
use serde::{Serialize,Deserialize};
use chrono::NaiveDate;
use odin_common::{datetime::parse_naive_date, fs::filepath_contents_as_string};

pub mod errors;
use errors::{OdinFirmsError,Result};

pub mod table;
pub use table::RawTable;

pub mod normalize;
pub mod filter;
pub mod summary;
pub mod sample;
pub mod charts;
pub mod map;
pub mod export;
pub mod firms;
pub mod cache;
pub mod loader;

/* #region canonical schema *************************************************************************************/

/// the canonical columns all processing steps agree on
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,PartialOrd,Ord,Serialize,Deserialize)]
#[serde(rename_all="lowercase")]
pub enum Field {
    Lat, Lon, Brightness, Date, Time, Confidence, Satellite
}

impl Field {
    /// all canonical fields in schema (export) order
    pub const ALL: [Field;7] = [
        Field::Lat, Field::Lon, Field::Brightness, Field::Date, Field::Time, Field::Confidence, Field::Satellite
    ];

    pub fn name (&self)->&'static str {
        match self {
            Field::Lat => "lat",
            Field::Lon => "lon",
            Field::Brightness => "brightness",
            Field::Date => "date",
            Field::Time => "time",
            Field::Confidence => "confidence",
            Field::Satellite => "satellite"
        }
    }

    /// exact (case sensitive) lookup of canonical column names
    pub fn from_name (name: &str)->Option<Field> {
        Field::ALL.iter().find( |f| f.name() == name).copied()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// the qualitative reliability label assigned by the satellite product
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Serialize,Deserialize)]
#[serde(rename_all="lowercase")]
pub enum Confidence {
    Low, Nominal, High
}

impl Confidence {
    pub const ALL: [Confidence;3] = [Confidence::High, Confidence::Nominal, Confidence::Low];

    pub fn as_str (&self)->&'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Nominal => "nominal",
            Confidence::High => "high"
        }
    }

    /// canonical values only - this is case sensitive and does not trim
    pub fn parse (s: &str)->Option<Confidence> {
        match s {
            "high" => Some(Confidence::High),
            "nominal" => Some(Confidence::Nominal),
            "low" => Some(Confidence::Low),
            _ => None
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Confidence {
    type Err = String;
    fn from_str (s: &str)->std::result::Result<Self,Self::Err> {
        Confidence::parse(s).ok_or_else( || format!("not a confidence value: '{s}'"))
    }
}

/* #endregion canonical schema */

/* #region records **********************************************************************************************/

/// one satellite-observed thermal anomaly in canonical form.
/// All canonical values are optional since sources might not provide them. `date` and `confidence`
/// keep the source text so that exports reproduce what we got; use [`FireRecord::acq_date`] and
/// [`FireRecord::confidence_level`] to interpret them
#[derive(Debug,Clone,Default,PartialEq,Serialize,Deserialize)]
pub struct FireRecord {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub brightness: Option<f64>,  // Kelvin
    pub date: Option<String>,
    pub time: Option<String>,     // as provided by source (FIRMS: HHMM UTC)
    pub confidence: Option<String>,
    pub satellite: Option<String>,

    /// values of pass-through columns, in the order of [`Schema::extra_columns`]
    #[serde(default, skip_serializing_if="Vec::is_empty")]
    pub extra: Vec<Option<String>>,
}

impl FireRecord {
    /// parsed calendar date, `None` if there is no date or it cannot be parsed
    pub fn acq_date (&self)->Option<NaiveDate> {
        self.date.as_deref().and_then( parse_naive_date)
    }

    /// canonical confidence category, `None` if missing or not one of the canonical values
    pub fn confidence_level (&self)->Option<Confidence> {
        self.confidence.as_deref().and_then( Confidence::parse)
    }

    /// (lat,lon) if the record is mappable
    pub fn position (&self)->Option<(f64,f64)> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some((lat,lon)),
            _ => None
        }
    }

    /// textual representation of a canonical value (used for export)
    pub fn value_string (&self, field: Field)->Option<String> {
        match field {
            Field::Lat => self.lat.map( |v| v.to_string()),
            Field::Lon => self.lon.map( |v| v.to_string()),
            Field::Brightness => self.brightness.map( |v| v.to_string()),
            Field::Date => self.date.clone(),
            Field::Time => self.time.clone(),
            Field::Confidence => self.confidence.clone(),
            Field::Satellite => self.satellite.clone(),
        }
    }
}

/// the columns of a [`RecordSet`]: which canonical fields are present and which other columns were passed through.
/// We keep this separate from the record values since a missing column is not the same as a missing value
#[derive(Debug,Clone,Default,PartialEq,Serialize,Deserialize)]
pub struct Schema {
    fields: Vec<Field>,
    extra_columns: Vec<String>,
}

impl Schema {
    pub fn new (fields: impl IntoIterator<Item=Field>, extra_columns: Vec<String>)->Self {
        let mut fields: Vec<Field> = fields.into_iter().collect();
        fields.sort();
        fields.dedup();
        Schema { fields, extra_columns }
    }

    /// all canonical fields, no pass-through columns
    pub fn canonical ()->Self {
        Schema::new( Field::ALL, Vec::new())
    }

    pub fn has (&self, field: Field)->bool { self.fields.contains(&field) }

    /// present canonical fields in schema order
    pub fn fields (&self)->&[Field] { &self.fields }

    pub fn extra_columns (&self)->&[String] { &self.extra_columns }

    /// all column names, canonical ones first
    pub fn column_names (&self)->Vec<&str> {
        self.fields.iter().map( |f| f.name())
            .chain( self.extra_columns.iter().map( |s| s.as_str()))
            .collect()
    }
}

/// a collection of fire records sharing the same schema. Order carries no meaning.
/// Record sets are not modified once created - filters return new sets
#[derive(Debug,Clone,Default,PartialEq,Serialize,Deserialize)]
pub struct RecordSet {
    schema: Schema,
    records: Vec<FireRecord>,
}

impl RecordSet {
    pub fn new (schema: Schema, records: Vec<FireRecord>)->Self {
        RecordSet { schema, records }
    }

    pub fn empty ()->Self { RecordSet::default() }

    pub fn schema (&self)->&Schema { &self.schema }
    pub fn records (&self)->&[FireRecord] { &self.records }
    pub fn iter (&self)->impl Iterator<Item=&FireRecord> { self.records.iter() }

    pub fn len (&self)->usize { self.records.len() }
    pub fn is_empty (&self)->bool { self.records.is_empty() }

    pub fn has_field (&self, field: Field)->bool { self.schema.has(field) }

    /// new set with the same schema that only contains the records matching `pred`
    pub fn filtered<F> (&self, pred: F)->RecordSet where F: Fn(&FireRecord)->bool {
        let records = self.records.iter().filter( |r| pred(r)).cloned().collect();
        RecordSet { schema: self.schema.clone(), records }
    }

    pub fn to_json (&self)->Result<String> {
        Ok( serde_json::to_string(self)? )
    }
}

/* #endregion records */

/// load a RON config file. If `filename` is not an existing path we look it up in `$ODIN_ROOT/configs/odin_firms/`
/// and then in the `configs/` dir of this crate
pub fn load_config<C> (filename: &str)->Result<C> where C: for<'a> Deserialize<'a> {
    let path = find_config_file(filename).ok_or_else( || OdinFirmsError::ConfigNotFoundError(filename.to_string()))?;
    let data = filepath_contents_as_string(&path)?;
    Ok( ron::from_str(&data)? )
}

fn find_config_file (filename: &str)->Option<PathBuf> {
    let path = Path::new(filename);
    if path.is_file() { return Some(path.to_path_buf()) }

    if let Ok(root) = std::env::var("ODIN_ROOT") {
        let p = Path::new(&root).join("configs").join(env!("CARGO_PKG_NAME")).join(filename);
        if p.is_file() { return Some(p) }
    }

    let p = Path::new(env!("CARGO_MANIFEST_DIR")).join("configs").join(filename);
    if p.is_file() { Some(p) } else { None }
}
