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

use overhead_common::define_error;

// failures of a single FlightSource request. Either variant aborts a fetch cycle
// if it happens during the area listing, and counts as a failed attempt for detail lookups
define_error!{ pub SourceError =
    Connectivity(String) : "flight source not reachable: {0}",
    Malformed(String) : "malformed flight source response: {0}"
}

impl From<reqwest::Error> for SourceError {
    fn from (e: reqwest::Error)->Self {
        if e.is_decode() || e.is_body() {
            SourceError::Malformed( e.to_string())
        } else {
            SourceError::Connectivity( e.to_string())
        }
    }
}

impl From<serde_json::Error> for SourceError {
    fn from (e: serde_json::Error)->Self { SourceError::Malformed( e.to_string()) }
}

define_error!{ pub FlightsError =
    IOError( #[from] std::io::Error ) : "IO error: {0}",
    HttpError( #[from] reqwest::Error ) : "http error: {0}",
    SerdeError( #[from] serde_json::Error) : "JSON error: {0}"
}

pub type Result<T> = std::result::Result<T,FlightsError>;
