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

use serde_json::json;
use overhead_flights::{clean_blank, label, fr24::{parse_details, parse_feed}, errors::SourceError, source::FlightSummary, Flight};

/// run with "cargo test test_parse_feed -- --nocapture"

#[test]
fn test_parse_feed () {
    let json = json!({
        "full_count": 12345,
        "version": 4,
        "3a4b5c6d": ["4CA87C", 51.47, -0.45, 270, 12000, 280, "4521", "F-EGLL1", "A320", "G-EUUA", 1760000000,
                     "LHR", "GLA", "BA1480", 0, 1536, "BAW1480", 0, "BAW"],
        "3a4b5c6e": ["400F01", 51.9, -0.3, 90, 3000, 180, "", "T-EGSS", "B738", "EI-DCL", 1760000000,
                     "", "N/A", "", 0, -640, "RYR56TH", 0, "RYR"],
        "stats": { "total": { "ads-b": 300 } }
    });

    let mut flights = parse_feed( &json).unwrap();
    flights.sort_by( |a,b| a.id.cmp( &b.id));
    for f in &flights { println!("{f:?}"); }
    assert_eq!( 2, flights.len());

    let f = &flights[0];
    assert_eq!( "3a4b5c6d", f.id);
    assert_eq!( Some("BAW1480"), f.callsign.as_deref());
    assert_eq!( Some("BA1480"), f.number.as_deref());
    assert_eq!( Some(12000), f.altitude);
    assert_eq!( Some(280), f.ground_speed);
    assert_eq!( Some(1536), f.vertical_speed);
    assert_eq!( Some(51.47), f.latitude);
    assert_eq!( Some("LHR"), f.origin_iata.as_deref());
    assert_eq!( Some(false), f.on_ground);

    let f = &flights[1];
    assert_eq!( Some(-640), f.vertical_speed);
    assert_eq!( None, f.origin_iata);
    assert_eq!( None, f.destination_iata); // "N/A"
    assert_eq!( None, f.number);
}

#[test]
fn test_parse_malformed () {
    assert!( matches!( parse_feed( &json!([1,2,3])), Err(SourceError::Malformed(_))));
    assert!( matches!( parse_details( &json!("nope")), Err(SourceError::Malformed(_))));
}

#[test]
fn test_parse_details () {
    let json = json!({
        "aircraft": { "model": { "code": "A320", "text": "Airbus A320-232" } },
        "airport": {
            "origin": {
                "code": { "iata": "LHR", "icao": "EGLL" },
                "position": { "region": { "city": "London" }, "country": { "code": "GB", "name": "United Kingdom" } }
            },
            "destination": {
                "iata": "GLA",
                "position": { "city": "Glasgow", "region": "Scotland" }
            }
        }
    });

    let details = parse_details( &json).unwrap();
    println!("{details:?}");
    assert_eq!( Some("Airbus A320-232"), details.plane.as_deref());
    assert_eq!( Some("LHR"), details.origin.iata.as_deref());
    assert_eq!( Some("London"), details.origin.city.as_deref());
    assert_eq!( None, details.origin.region);
    assert_eq!( Some("GLA"), details.destination.iata.as_deref());
    assert_eq!( Some("Glasgow"), details.destination.city.as_deref());
    assert_eq!( Some("Scotland"), details.destination.region.as_deref());

    // null airports and a missing model are fine
    let details = parse_details( &json!({ "aircraft": null, "airport": { "origin": null } })).unwrap();
    assert_eq!( None, details.plane);
    assert_eq!( None, details.origin.iata);

    // feed codes win over detail codes
    let summary = FlightSummary { id: "x".into(), origin_iata: Some("LGW".into()), callsign: Some("N/A".into()), ..FlightSummary::default() };
    let flight = Flight::from_summary_and_details( &summary, parse_details( &json).unwrap());
    println!("{flight}");
    assert_eq!( Some("LGW London"), flight.origin_label.as_deref());
    assert_eq!( Some("GLA Glasgow, Scotland"), flight.destination_label.as_deref());
    assert_eq!( None, flight.callsign);
}

#[test]
fn test_label () {
    assert_eq!( Some("LHR London, England".to_string()), label( Some("LHR"), Some("London"), Some("England")));
    assert_eq!( Some("LHR London".to_string()), label( Some("LHR"), Some("London"), None));
    assert_eq!( Some("LHR".to_string()), label( Some("LHR"), None, None));
    assert_eq!( Some("London, England".to_string()), label( None, Some("London"), Some("England")));
    assert_eq!( None, label( None, None, None));
    assert_eq!( None, label( Some(""), Some(""), None));
}

#[test]
fn test_clean_blank () {
    assert_eq!( None, clean_blank(""));
    assert_eq!( None, clean_blank("n/a"));
    assert_eq!( None, clean_blank(" None "));
    assert_eq!( Some("BAW12".to_string()), clean_blank("BAW12 "));
}
