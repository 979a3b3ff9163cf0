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
#![allow(unused)]

use odin_common::{datetime::secs, net::{client_with_timeout, redact}};

#[test]
fn test_redact() {
    let url = "https://firms.modaps.eosdis.nasa.gov/api/country/csv/0123abcd/VIIRS_SNPP_NRT/MEX/1/2024-01-01";
    let s = redact( url, "0123abcd");
    println!("{s}");
    assert_eq!( s, "https://firms.modaps.eosdis.nasa.gov/api/country/csv/***/VIIRS_SNPP_NRT/MEX/1/2024-01-01");
    assert_eq!( redact( url, ""), url);
}

#[test]
fn test_client() {
    assert!( client_with_timeout( secs(5)).is_ok());
}
