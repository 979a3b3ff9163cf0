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
use serde::{Serialize,Deserialize};
use crate::errors::Result;

/// the raw tabular payload we get from data sources: named columns with untyped (string) cells.
/// Rows can be shorter than the header, missing cells are treated as empty
#[derive(Debug,Clone,Default,PartialEq,Serialize,Deserialize)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new (headers: Vec<String>, rows: Vec<Vec<String>>)->Self {
        RawTable { headers, rows }
    }

    /// convenience ctor for literal tables
    pub fn from_strs (headers: &[&str], rows: &[&[&str]])->Self {
        let headers = headers.iter().map( |s| s.to_string()).collect();
        let rows = rows.iter().map( |r| r.iter().map( |s| s.to_string()).collect()).collect();
        RawTable { headers, rows }
    }

    /// parse CSV data with a header line. Cells are trimmed, rows with differing lengths are accepted
    pub fn from_csv_reader (reader: impl io::Read)->Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader.headers()?.iter().map( |s| s.to_string()).collect();
        let mut rows = Vec::new();
        for res in csv_reader.records() {
            let rec = res?;
            rows.push( rec.iter().map( |s| s.to_string()).collect());
        }

        Ok( RawTable { headers, rows } )
    }

    pub fn from_csv_str (s: &str)->Result<Self> {
        if s.trim().is_empty() {
            Ok( RawTable::default() )
        } else {
            Self::from_csv_reader( s.as_bytes())
        }
    }

    pub fn is_empty (&self)->bool { self.rows.is_empty() }
    pub fn len (&self)->usize { self.rows.len() }

    pub fn column_index (&self, name: &str)->Option<usize> {
        self.headers.iter().position( |h| h == name)
    }

    pub fn has_column (&self, name: &str)->bool { self.column_index(name).is_some() }

    /// cell value, `None` for cells beyond the row length
    pub fn cell (&self, row: usize, col: usize)->Option<&str> {
        self.rows.get(row).and_then( |r| r.get(col)).map( |s| s.as_str())
    }

    /// rename column `from` to `to`. This is a no-op if there is no `from` column
    pub fn rename_column (&mut self, from: &str, to: &str)->bool {
        if let Some(idx) = self.column_index(from) {
            self.headers[idx] = to.to_string();
            true
        } else {
            false
        }
    }

    /// replace the values of column `name` according to `f`, which returns `None` for values to keep
    pub fn map_column_values<F> (&mut self, name: &str, f: F) where F: Fn(&str)->Option<String> {
        if let Some(idx) = self.column_index(name) {
            for row in self.rows.iter_mut() {
                if let Some(cell) = row.get_mut(idx) {
                    if let Some(new_val) = f(cell) {
                        *cell = new_val;
                    }
                }
            }
        }
    }

    /// append the rows of another table. Columns are matched by name, columns that only exist in `other`
    /// are added (with empty cells for our existing rows)
    pub fn append (&mut self, other: RawTable) {
        if self.headers.is_empty() && self.rows.is_empty() {
            *self = other;
            return
        }

        let idx_map: Vec<usize> = other.headers.iter().map( |h| {
            match self.column_index(h) {
                Some(i) => i,
                None => {
                    self.headers.push( h.clone());
                    self.headers.len() - 1
                }
            }
        }).collect();

        let n_cols = self.headers.len();
        for row in self.rows.iter_mut() {
            row.resize( n_cols, String::new());
        }

        for row in other.rows {
            let mut new_row = vec![String::new(); n_cols];
            for (i,cell) in row.into_iter().enumerate() {
                if let Some(&j) = idx_map.get(i) { new_row[j] = cell; }
            }
            self.rows.push( new_row);
        }
    }
}
