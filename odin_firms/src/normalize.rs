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

//! mapping of raw source tables onto the canonical record schema.
//! This is the only place that knows about source column names - everything downstream just uses [`Field`]s

use crate::{Field, FireRecord, RawTable, RecordSet, Schema};

/// source column name -> canonical column name
pub const RENAME_TABLE: [(&str,&str);6] = [
    ("latitude",   "lat"),
    ("longitude",  "lon"),
    ("brightness", "brightness"),
    ("acq_date",   "date"),
    ("acq_time",   "time"),
    ("confidence", "confidence"),
];

/// the column name after renaming. Names that are not in [`RENAME_TABLE`] stay as they are
pub fn canonical_name (column: &str)->&str {
    RENAME_TABLE.iter()
        .find( |(src,_)| *src == column)
        .map( |(_,dst)| *dst)
        .unwrap_or(column)
}

/// where the value of a canonical field or pass-through column comes from
struct ColumnMap {
    fields: Vec<(Field,usize)>,
    extras: Vec<(String,usize)>,
}

impl ColumnMap {
    fn new (headers: &[String])->Self {
        let mut fields: Vec<(Field,usize)> = Vec::new();
        let mut extras: Vec<(String,usize)> = Vec::new();

        for (idx,header) in headers.iter().enumerate() {
            match Field::from_name( canonical_name(header)) {
                // first column that maps to a field wins, later ones are passed through under their own name
                Some(field) if !fields.iter().any( |(f,_)| *f == field) => fields.push( (field,idx)),
                _ => extras.push( (header.clone(),idx))
            }
        }

        ColumnMap { fields, extras }
    }

    fn schema (&self)->Schema {
        Schema::new( self.fields.iter().map( |(f,_)| *f), self.extras.iter().map( |(n,_)| n.clone()).collect())
    }
}

/// turn a raw table into a canonical record set. This never fails - an empty table gives an empty set,
/// and cells that are empty or cannot be parsed into the canonical value type become missing values
pub fn normalize (table: &RawTable)->RecordSet {
    if table.headers.is_empty() {
        return RecordSet::empty()
    }

    let cols = ColumnMap::new( &table.headers);
    let records = table.rows.iter().map( |row| {
        let cell = |idx: usize| row.get(idx).map( |s| s.as_str());
        let mut rec = FireRecord::default();

        for (field,idx) in &cols.fields {
            let v = cell(*idx);
            match field {
                Field::Lat => rec.lat = parse_number(v),
                Field::Lon => rec.lon = parse_number(v),
                Field::Brightness => rec.brightness = parse_number(v),
                Field::Date => rec.date = non_empty(v),
                Field::Time => rec.time = non_empty(v),
                Field::Confidence => rec.confidence = non_empty(v),
                Field::Satellite => rec.satellite = non_empty(v),
            }
        }
        rec.extra = cols.extras.iter().map( |(_,idx)| non_empty( cell(*idx))).collect();
        rec
    }).collect();

    RecordSet::new( cols.schema(), records)
}

fn non_empty (cell: Option<&str>)->Option<String> {
    cell.map( |s| s.trim()).filter( |s| !s.is_empty()).map( |s| s.to_string())
}

// note that Rust parses "NaN" and "inf", which we do not want to leak into aggregates
fn parse_number (cell: Option<&str>)->Option<f64> {
    cell.and_then( |s| s.trim().parse::<f64>().ok()).filter( |v| v.is_finite())
}
