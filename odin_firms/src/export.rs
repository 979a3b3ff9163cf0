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

use std::io;
use chrono::NaiveDate;
use odin_common::datetime::compact_date_string;
use crate::{RecordSet, errors::Result};

/// write records as CSV: present canonical columns in schema order, then pass-through columns.
/// Missing values are written as empty cells
pub fn write_csv (rs: &RecordSet, writer: impl io::Write)->Result<()> {
    let mut w = csv::Writer::from_writer(writer);
    let schema = rs.schema();

    w.write_record( schema.column_names())?;

    for r in rs.iter() {
        let mut row: Vec<String> = schema.fields().iter()
            .map( |f| r.value_string(*f).unwrap_or_default())
            .collect();
        for i in 0..schema.extra_columns().len() {
            row.push( r.extra.get(i).cloned().flatten().unwrap_or_default());
        }
        w.write_record( &row)?;
    }

    w.flush()?;
    Ok(())
}

pub fn to_csv_string (rs: &RecordSet)->Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    write_csv( rs, &mut buf)?;
    Ok( String::from_utf8_lossy(&buf).into_owned() )
}

/// download file name, e.g. "fires_MEX_20240105.csv"
pub fn export_file_name (country: &str, date: &NaiveDate)->String {
    format!("fires_{}_{}.csv", country, compact_date_string(date))
}
