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

//! [`FlightSource`] implementation for the public Flightradar24 JSON endpoints. The area listing
//! is a JSON object that maps flight ids to positional arrays, the detail lookup is a nested
//! object of which we only pick the aircraft model and the airports

use std::time::Duration;
use reqwest::{blocking::Client, StatusCode};
use serde::{Serialize,Deserialize};
use serde_json::Value;
use tracing::{debug,trace};
use overhead_common::{datetime::{secs, deserialize_duration,serialize_duration}, geo::Zone};
use crate::{clean_blank, errors::{Result, SourceError}, source::{AirportPlace, FlightDetails, FlightSource, FlightSummary}};

#[derive(Serialize,Deserialize,Debug,Clone)]
#[serde(default)]
pub struct Fr24Config {
    pub feed_url: String,
    pub details_url: String,
    pub user_agent: String,
    #[serde(serialize_with="serialize_duration",deserialize_with="deserialize_duration")]
    pub timeout: Duration,
}

impl Default for Fr24Config {
    fn default()->Self {
        Fr24Config {
            feed_url: "https://data-cloud.flightradar24.com/zones/fcgi/feed.js".to_string(),
            details_url: "https://data-live.flightradar24.com/clickhandler/".to_string(),
            user_agent: "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0".to_string(),
            timeout: secs(10),
        }
    }
}

pub struct Fr24Source {
    config: Fr24Config,
    client: Client,
}

impl Fr24Source {
    pub fn new (config: Fr24Config)->Result<Self> {
        let client = Client::builder()
            .user_agent( config.user_agent.as_str())
            .timeout( config.timeout)
            .build()?;
        Ok( Fr24Source { config, client } )
    }

    fn get_json (&self, url: &str, query: &[(&str,&str)])->std::result::Result<Value,SourceError> {
        let response = self.client.get( url).query( query).send()?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err( SourceError::Connectivity( format!("{url} returned {status}")))
        }

        let text = response.text()?;
        Ok( serde_json::from_str( &text)? )
    }
}

impl FlightSource for Fr24Source {
    fn flights (&self, zone: &Zone)->std::result::Result<Vec<FlightSummary>,SourceError> {
        let bounds = zone.bounds_string();
        let query = [ ("bounds", bounds.as_str()), ("faa","1"), ("satellite","1"), ("mlat","1"), ("flarm","1"),
                      ("adsb","1"), ("gnd","0"), ("air","1"), ("vehicles","0"), ("estimated","1"), ("maxage","14400"),
                      ("gliders","1"), ("stats","0") ];

        let json = self.get_json( &self.config.feed_url, &query)?;
        let flights = parse_feed( &json)?;
        debug!("{} flights in zone {}", flights.len(), bounds);
        Ok(flights)
    }

    fn details (&self, flight: &FlightSummary)->std::result::Result<FlightDetails,SourceError> {
        let json = self.get_json( &self.config.details_url, &[ ("flight", flight.id.as_str()) ])?;
        let details = parse_details( &json)?;
        trace!("details for {flight}: {details:?}");
        Ok(details)
    }
}

/* #region feed parsing **********************************************************************************/

/// parse the area listing. Top level entries that are not flight arrays ("full_count", "version", "stats")
/// are skipped.
///
/// positional array fields:
///    0: ICAO 24 bit address
///    1: latitude
///    2: longitude
///    3: heading
///    4: altitude (ft)
///    5: ground speed (kt)
///    6: squawk
///    7: radar
///    8: aircraft code
///    9: registration
///   10: time (epoch secs)
///   11: origin IATA
///   12: destination IATA
///   13: flight number
///   14: on ground (0/1)
///   15: vertical speed (ft/min)
///   16: callsign
///   17: glider flag
///   18: airline ICAO
pub fn parse_feed (json: &Value)->std::result::Result<Vec<FlightSummary>,SourceError> {
    let Some(entries) = json.as_object() else {
        return Err( SourceError::Malformed( "flight feed is not a JSON object".to_string()))
    };

    let flights = entries.iter()
        .filter_map( |(id,v)| v.as_array().map( |fields| parse_feed_entry( id, fields)))
        .collect();
    Ok(flights)
}

fn parse_feed_entry (id: &str, fields: &[Value])->FlightSummary {
    let str_at = |i: usize| fields.get(i).and_then( Value::as_str).and_then( clean_blank);
    let f64_at = |i: usize| fields.get(i).and_then( Value::as_f64);
    let i64_at = |i: usize| fields.get(i).and_then( |v| v.as_i64().or_else( || v.as_f64().map( |x| x.round() as i64)));

    FlightSummary {
        id: id.to_string(),
        icao24: str_at(0),
        latitude: f64_at(1),
        longitude: f64_at(2),
        heading: f64_at(3),
        altitude: i64_at(4),
        ground_speed: i64_at(5),
        squawk: str_at(6),
        aircraft_code: str_at(8),
        registration: str_at(9),
        time: i64_at(10),
        origin_iata: str_at(11),
        destination_iata: str_at(12),
        number: str_at(13),
        on_ground: i64_at(14).map( |v| v != 0),
        vertical_speed: i64_at(15),
        callsign: str_at(16),
        airline_icao: str_at(18),
    }
}

/* #endregion feed parsing */

/* #region details parsing *******************************************************************************/

/// parse a detail lookup response. Only a non-object response is considered malformed, missing
/// nested fields just leave the respective values empty
pub fn parse_details (json: &Value)->std::result::Result<FlightDetails,SourceError> {
    if !json.is_object() {
        return Err( SourceError::Malformed( "flight details are not a JSON object".to_string()))
    }

    Ok( FlightDetails {
        plane: get_str( json, &["aircraft","model","text"]),
        origin: get_in( json, &["airport","origin"]).map( airport_place).unwrap_or_default(),
        destination: get_in( json, &["airport","destination"]).map( airport_place).unwrap_or_default(),
    })
}

fn airport_place (airport: &Value)->AirportPlace {
    let iata = get_str( airport, &["code","iata"]).or_else( || get_str( airport, &["iata"]));

    let city = get_str( airport, &["position","region","city"])
        .or_else( || get_str( airport, &["position","city"]));

    let region = get_in( airport, &["position","region"]).and_then( |r| {
        if let Some(s) = r.as_str() {
            clean_blank(s)
        } else {
            get_str( r, &["region"]).or_else( || get_str( r, &["name"])).or_else( || get_str( r, &["code"]))
        }
    });

    AirportPlace { iata, city, region }
}

/// nested object lookup that treats JSON null like a missing key
pub fn get_in<'a> (v: &'a Value, path: &[&str])->Option<&'a Value> {
    let mut cur = v;
    for key in path {
        cur = cur.get(key)?;
        if cur.is_null() { return None }
    }
    Some(cur)
}

fn get_str (v: &Value, path: &[&str])->Option<String> {
    get_in( v, path).and_then( Value::as_str).and_then( clean_blank)
}

/* #endregion details parsing */
