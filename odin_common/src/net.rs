/*
 * Copyright © 2024, United States Government, as represented by the Administrator of
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

///! common utility functions for network operations

use std::time::Duration;
use reqwest::{header::HeaderMap, Client, StatusCode};

use crate::define_error;

define_error!{ pub OdinNetError =
    NotFoundError(String) : "not found {0}",
    HttpError(#[from] reqwest::Error) : "http error: {0}",
    OpFailed(String) : "operation failed: {0}"
}

pub type Result<T> = std::result::Result<T, OdinNetError>;

/// build a client with the given request timeout
pub fn client_with_timeout (timeout: Duration)->Result<Client> {
    Ok( Client::builder().timeout(timeout).build()? )
}

/// retrieve the body of a text resource (e.g. CSV) via HTTP GET.
/// Only a `200 OK` status counts as success
pub async fn get_text (client: &Client, url: &str, opt_headers: &Option<HeaderMap>) -> Result<String> {
    let mut req = client.get(url);
    if let Some(headermap) = &opt_headers {
        req = req.headers(headermap.clone())
    }

    let response = req.send().await?;

    match response.status() {
        StatusCode::OK => {
            Ok( response.text().await? )
        }
        StatusCode::NOT_FOUND => {
            Err( OdinNetError::NotFoundError(format!("{url}")))
        }
        other => {
            Err( OdinNetError::OpFailed(format!("response status {other:?}")))
        }
    }
}

/// replace the value of a path element in a URL that should not show up in logs (e.g. access keys)
pub fn redact (url: &str, secret: &str)->String {
    if secret.is_empty() { url.to_string() } else { url.replace( secret, "***") }
}
