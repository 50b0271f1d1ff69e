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

use std::{fmt, sync::Arc};
use serde::{Serialize,Deserialize};
use overhead_common::is_none;

pub mod errors;

pub mod source;
use source::{FlightSummary, FlightDetails};

pub mod fr24;
pub mod dump;
pub mod overhead;

/// field values the flight services use to say "we don't know"
pub const BLANK_FIELDS: [&str;3] = ["", "N/A", "NONE"];

/// the immutable set of flights we currently track. Published wholesale by the [`overhead::Overhead`]
/// fetcher and never mutated afterwards, so cloning is just a reference count increment
pub type Snapshot = Arc<Vec<Flight>>;

pub fn empty_snapshot ()->Snapshot { Arc::new( Vec::new()) }

/// the display-ready data model for a tracked aircraft. All fields are optional, it is up to
/// the renderer to show placeholders for missing values
#[derive(Debug,Clone,Default,PartialEq,Serialize,Deserialize)]
pub struct Flight {
    #[serde(skip_serializing_if="is_none")] pub callsign: Option<String>,
    #[serde(skip_serializing_if="is_none")] pub number: Option<String>,

    #[serde(skip_serializing_if="is_none")] pub altitude: Option<i64>,       // ft
    #[serde(skip_serializing_if="is_none")] pub ground_speed: Option<i64>,   // kt
    #[serde(skip_serializing_if="is_none")] pub vertical_speed: Option<i64>, // ft/min
    #[serde(skip_serializing_if="is_none")] pub latitude: Option<f64>,
    #[serde(skip_serializing_if="is_none")] pub longitude: Option<f64>,

    #[serde(skip_serializing_if="is_none")] pub origin: Option<String>,      // IATA
    #[serde(skip_serializing_if="is_none")] pub destination: Option<String>, // IATA
    #[serde(skip_serializing_if="is_none")] pub origin_city: Option<String>,
    #[serde(skip_serializing_if="is_none")] pub origin_region: Option<String>,
    #[serde(skip_serializing_if="is_none")] pub destination_city: Option<String>,
    #[serde(skip_serializing_if="is_none")] pub destination_region: Option<String>,
    #[serde(skip_serializing_if="is_none")] pub origin_label: Option<String>,
    #[serde(skip_serializing_if="is_none")] pub destination_label: Option<String>,

    #[serde(skip_serializing_if="is_none")] pub plane: Option<String>,
}

impl Flight {
    /// merge a raw feed entry with its detail lookup. IATA codes from the feed take precedence,
    /// the details fill in what is missing plus the city/region we need for route labels
    pub fn from_summary_and_details (summary: &FlightSummary, details: FlightDetails)->Self {
        let origin = clean_blank_opt( &summary.origin_iata).or( details.origin.iata);
        let destination = clean_blank_opt( &summary.destination_iata).or( details.destination.iata);

        let origin_city = details.origin.city;
        let origin_region = details.origin.region;
        let destination_city = details.destination.city;
        let destination_region = details.destination.region;

        let origin_label = label( origin.as_deref(), origin_city.as_deref(), origin_region.as_deref());
        let destination_label = label( destination.as_deref(), destination_city.as_deref(), destination_region.as_deref());

        Flight {
            callsign: clean_blank_opt( &summary.callsign),
            number: clean_blank_opt( &summary.number),
            altitude: summary.altitude,
            ground_speed: summary.ground_speed,
            vertical_speed: summary.vertical_speed,
            latitude: summary.latitude,
            longitude: summary.longitude,
            origin, destination,
            origin_city, origin_region, destination_city, destination_region,
            origin_label, destination_label,
            plane: details.plane.and_then( |s| clean_blank(&s))
        }
    }

    pub fn with_callsign (callsign: &str)->Self {
        Flight { callsign: clean_blank(callsign), ..Flight::default() }
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "Flight( cs: {:?}", self.callsign)?;
        if let Some(alt) = self.altitude { write!( f, ", alt: {alt}")?; }
        if let Some(gs) = self.ground_speed { write!( f, ", spd: {gs}")?; }
        if let Some(vs) = self.vertical_speed { write!( f, ", vr: {vs}")?; }
        if let Some(o) = &self.origin_label { write!( f, ", from: \"{o}\"")?; }
        if let Some(d) = &self.destination_label { write!( f, ", to: \"{d}\"")?; }
        if let Some(p) = &self.plane { write!( f, ", plane: \"{p}\"")?; }
        write!( f, " )")
    }
}

/// normalize a service string: trim and turn known "blank" markers into None
pub fn clean_blank (s: &str)->Option<String> {
    let s = s.trim();
    let upper = s.to_uppercase();
    if BLANK_FIELDS.contains( &upper.as_str()) { None } else { Some(s.to_string()) }
}

pub fn clean_blank_opt (s: &Option<String>)->Option<String> {
    s.as_deref().and_then( clean_blank)
}

/// human readable airport label such as "LHR London, England". Parts that are missing are skipped,
/// without a place this is just the code and without a code just the place
pub fn label (iata: Option<&str>, city: Option<&str>, region: Option<&str>)->Option<String> {
    let place = [city, region].into_iter()
        .flatten()
        .filter( |s| !s.is_empty())
        .collect::<Vec<&str>>()
        .join(", ");
    let iata = iata.filter( |s| !s.is_empty());

    match (iata, place.is_empty()) {
        (Some(code), false) => Some( format!("{code} {place}")),
        (Some(code), true) => Some( code.to_string()),
        (None, false) => Some( place),
        (None, true) => None
    }
}
