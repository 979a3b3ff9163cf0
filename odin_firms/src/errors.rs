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

use thiserror::Error;

pub type Result<T> = std::result::Result<T, OdinFirmsError>;
 
#[derive(Error,Debug)]
pub enum OdinFirmsError {

   #[error("IO error {0}")]
   IOError( #[from] std::io::Error),

   #[error("http error {0}")]
   HttpError( #[from] reqwest::Error),

   #[error("net error {0}")]
   NetError( #[from] odin_common::net::OdinNetError),

   #[error("CSV error {0}")]
   CsvError( #[from] csv::Error),

   #[error("config RON error {0}")]
   RonError( #[from] ron::error::SpannedError),

   #[error("JSON error {0}")]
   JsonError( #[from] serde_json::Error),

   #[error("config not found {0}")]
   ConfigNotFoundError(String),

   #[error("invalid request {0}")]
   InvalidRequestError(String),

   #[error("operation failed {0}")]
   OpFailedError(String),
}

macro_rules! op_failed {
    ($fmt:literal $(, $arg:expr )* ) => {
        OdinFirmsError::OpFailedError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use op_failed;

macro_rules! invalid_request {
    ($fmt:literal $(, $arg:expr )* ) => {
        OdinFirmsError::InvalidRequestError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use invalid_request;
