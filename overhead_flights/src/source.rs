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

//! the seam between the overhead fetcher and the flight service it queries

use std::fmt;
use serde::{Serialize,Deserialize};
use overhead_common::{geo::Zone, is_none};
use crate::errors::SourceError;

/// raw per-aircraft entry of an area listing, before any detail lookup
#[derive(Debug,Clone,Default,PartialEq,Serialize,Deserialize)]
pub struct FlightSummary {
    pub id: String, // service specific flight id used for detail lookups
    #[serde(skip_serializing_if="is_none")] pub icao24: Option<String>,
    #[serde(skip_serializing_if="is_none")] pub callsign: Option<String>,
    #[serde(skip_serializing_if="is_none")] pub number: Option<String>,
    #[serde(skip_serializing_if="is_none")] pub latitude: Option<f64>,
    #[serde(skip_serializing_if="is_none")] pub longitude: Option<f64>,
    #[serde(skip_serializing_if="is_none")] pub heading: Option<f64>,
    #[serde(skip_serializing_if="is_none")] pub altitude: Option<i64>,
    #[serde(skip_serializing_if="is_none")] pub ground_speed: Option<i64>,
    #[serde(skip_serializing_if="is_none")] pub vertical_speed: Option<i64>,
    #[serde(skip_serializing_if="is_none")] pub squawk: Option<String>,
    #[serde(skip_serializing_if="is_none")] pub aircraft_code: Option<String>,
    #[serde(skip_serializing_if="is_none")] pub registration: Option<String>,
    #[serde(skip_serializing_if="is_none")] pub origin_iata: Option<String>,
    #[serde(skip_serializing_if="is_none")] pub destination_iata: Option<String>,
    #[serde(skip_serializing_if="is_none")] pub airline_icao: Option<String>,
    #[serde(skip_serializing_if="is_none")] pub on_ground: Option<bool>,
    #[serde(skip_serializing_if="is_none")] pub time: Option<i64>, // epoch secs of last position
}

impl fmt::Display for FlightSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "{} ({})", self.id, self.callsign.as_deref().unwrap_or("?"))
    }
}

#[derive(Debug,Clone,Default,PartialEq,Serialize,Deserialize)]
pub struct AirportPlace {
    pub iata: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
}

/// what a detail lookup adds to a [`FlightSummary`]
#[derive(Debug,Clone,Default,PartialEq,Serialize,Deserialize)]
pub struct FlightDetails {
    pub plane: Option<String>,
    pub origin: AirportPlace,
    pub destination: AirportPlace,
}

/// abstraction for flight data services. Implementations are called from the fetch thread and
/// are expected to block until they have a response or a (network) timeout
pub trait FlightSource: Send + Sync {
    /// all aircraft currently inside `zone`, in no particular order
    fn flights (&self, zone: &Zone)->Result<Vec<FlightSummary>,SourceError>;

    /// enrichment data for a single aircraft of a previous [`FlightSource::flights`] result
    fn details (&self, flight: &FlightSummary)->Result<FlightDetails,SourceError>;
}
