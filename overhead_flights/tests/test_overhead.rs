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

use std::{collections::HashMap, sync::{Arc,Mutex,atomic::{AtomicBool,Ordering}}, thread, time::{Duration,Instant}};
use overhead_common::geo::{HomeLocation,Zone};
use overhead_flights::{
    errors::SourceError,
    overhead::{filter_by_altitude, rank_by_distance, Overhead, OverheadConfig},
    source::{AirportPlace, FlightDetails, FlightSource, FlightSummary}
};

/// unit tests for the overhead fetcher, using a scripted in-memory source
/// run with "cargo test test_take_data -- --nocapture"

#[derive(Clone,Default)]
struct MockSource {
    list: Arc<Mutex<Option<Vec<FlightSummary>>>>, // None means the service is not reachable
    failures: Arc<Mutex<HashMap<String,usize>>>,  // remaining failing detail attempts per flight id
    calls: Arc<Mutex<HashMap<String,usize>>>,
    gate: Option<Arc<AtomicBool>>,                // if set, listing blocks until this is true
}

impl MockSource {
    fn new (list: Vec<FlightSummary>)->Self {
        MockSource { list: Arc::new( Mutex::new( Some(list))), ..MockSource::default() }
    }

    fn fail_details (&self, id: &str, n: usize) {
        self.failures.lock().unwrap().insert( id.to_string(), n);
    }

    fn calls (&self, id: &str)->usize {
        *self.calls.lock().unwrap().get(id).unwrap_or(&0)
    }
}

impl FlightSource for MockSource {
    fn flights (&self, zone: &Zone)->Result<Vec<FlightSummary>,SourceError> {
        if let Some(gate) = &self.gate {
            while !gate.load( Ordering::Relaxed) { thread::sleep( Duration::from_millis(5)); }
        }
        self.list.lock().unwrap().clone().ok_or( SourceError::Connectivity("no route to host".to_string()))
    }

    fn details (&self, flight: &FlightSummary)->Result<FlightDetails,SourceError> {
        *self.calls.lock().unwrap().entry( flight.id.clone()).or_insert(0) += 1;

        if let Some(n) = self.failures.lock().unwrap().get_mut( &flight.id) {
            if *n > 0 {
                *n -= 1;
                return Err( SourceError::Malformed( format!("no details for {}", flight.id)))
            }
        }

        Ok( FlightDetails {
            plane: Some("Airbus A320".to_string()),
            origin: AirportPlace { iata: Some("LHR".into()), city: Some("London".into()), region: Some("England".into()) },
            destination: AirportPlace { iata: Some("GLA".into()), city: Some("Glasgow".into()), region: None },
        })
    }
}

fn summary (id: &str, callsign: &str, lat: f64, lon: f64, altitude: i64)->FlightSummary {
    FlightSummary {
        id: id.to_string(),
        callsign: Some(callsign.to_string()),
        latitude: Some(lat),
        longitude: Some(lon),
        altitude: Some(altitude),
        ..FlightSummary::default()
    }
}

fn test_config ()->OverheadConfig {
    OverheadConfig { rate_limit_delay: Duration::ZERO, ..OverheadConfig::default() }
}

fn callsigns (overhead: &Overhead)->Vec<String> {
    overhead.take_data().iter().filter_map( |f| f.callsign.clone()).collect()
}

fn wait_until_idle (overhead: &Overhead) {
    let t0 = Instant::now();
    while overhead.processing() {
        assert!( t0.elapsed() < Duration::from_secs(5), "fetch cycle did not terminate");
        thread::sleep( Duration::from_millis(5));
    }
}

#[test]
fn test_take_data () {
    let source = MockSource::new( vec![
        summary( "1", "BA1", 51.6, -0.1, 10000),
        summary( "2", "KL2", 51.4, -0.2, 20000),
    ]);
    let overhead = Overhead::new( test_config(), source);
    assert!( overhead.data_is_empty());
    assert!( !overhead.new_data());

    assert!( overhead.fetch_now());
    println!("{overhead:?}");

    // polling does not consume
    assert!( overhead.new_data());
    assert!( overhead.new_data());
    assert!( !overhead.processing());

    let data = overhead.take_data();
    for f in data.iter() { println!("  {f}"); }
    assert_eq!( 2, data.len());
    assert_eq!( Some("LHR London, England"), data[0].origin_label.as_deref());
    assert_eq!( Some("GLA Glasgow"), data[0].destination_label.as_deref());
    assert!( !overhead.new_data());
    assert!( !overhead.data_is_empty());
}

#[test]
fn test_trigger_while_processing () {
    let gate = Arc::new( AtomicBool::new(false));
    let source = MockSource { gate: Some(gate.clone()), ..MockSource::new( vec![ summary( "1", "BA1", 51.6, -0.1, 10000)]) };
    let overhead = Overhead::new( test_config(), source);

    assert!( overhead.trigger());
    assert!( overhead.processing());
    assert!( !overhead.trigger()); // no-op, first cycle still running
    assert!( !overhead.fetch_now());
    assert!( overhead.processing());

    gate.store( true, Ordering::Relaxed);
    wait_until_idle( &overhead);

    assert!( overhead.new_data());
    assert_eq!( vec!["BA1".to_string()], callsigns( &overhead));
}

#[test]
fn test_list_failure_keeps_snapshot () {
    let source = MockSource::new( vec![ summary( "1", "BA1", 51.6, -0.1, 10000)]);
    let list = source.list.clone();
    let overhead = Overhead::new( test_config(), source);

    assert!( overhead.fetch_now());
    let before = overhead.take_data();

    *list.lock().unwrap() = None; // service goes away
    assert!( overhead.fetch_now());

    assert!( !overhead.new_data());
    assert!( !overhead.processing());
    let after = overhead.take_data();
    assert!( Arc::ptr_eq( &before, &after));
}

#[test]
fn test_retry_isolation () {
    let source = MockSource::new( vec![
        summary( "1", "BA1", 51.51, -0.12, 10000),
        summary( "2", "KL2", 51.6, -0.2, 10000),
        summary( "3", "LH3", 52.0, 0.5, 10000),
    ]);
    source.fail_details( "1", 2);          // succeeds on the last attempt
    source.fail_details( "2", usize::MAX); // never succeeds
    let calls_seen = source.clone();

    let overhead = Overhead::new( test_config(), source);
    assert!( overhead.fetch_now());

    let cs = callsigns( &overhead);
    println!("published: {cs:?}");
    assert_eq!( vec!["BA1".to_string(), "LH3".to_string()], cs);
    assert_eq!( 3, calls_seen.calls("1"));
    assert_eq!( 3, calls_seen.calls("2"));
    assert_eq!( 1, calls_seen.calls("3"));
}

#[test]
fn test_max_lookup () {
    let home = HomeLocation::default();
    let list: Vec<FlightSummary> = (0..7).rev()
        .map( |i| summary( &i.to_string(), &format!("CS{i}"), home.latitude + 0.1 * i as f64, home.longitude, 10000))
        .collect();
    let source = MockSource::new( list);
    let calls_seen = source.clone();

    let overhead = Overhead::new( test_config(), source);
    assert!( overhead.fetch_now());

    let cs = callsigns( &overhead);
    println!("closest: {cs:?}");
    assert_eq!( vec!["CS0","CS1","CS2","CS3","CS4"], cs);
    assert_eq!( 0, calls_seen.calls("5"));
    assert_eq!( 0, calls_seen.calls("6"));
}

#[test]
fn test_altitude_bounds () {
    let mut no_alt = summary( "5", "NOALT", 51.0, 0.0, 0);
    no_alt.altitude = None;

    let candidates = vec![
        summary( "1", "MIN", 51.0, 0.0, 0),
        summary( "2", "LOW", 51.0, 0.0, 1),
        summary( "3", "HIGH", 51.0, 0.0, 44999),
        summary( "4", "MAX", 51.0, 0.0, 45000),
        no_alt,
    ];

    let kept: Vec<String> = filter_by_altitude( candidates, 0, 45000).into_iter().map( |c| c.id).collect();
    assert_eq!( vec!["2","3"], kept);
}

#[test]
fn test_stable_ranking () {
    let home = HomeLocation::default();
    let candidates = vec![
        summary( "far", "FAR", 53.0, 1.0, 10000),
        summary( "a", "A", 51.6, -0.1, 10000),
        summary( "b", "B", 51.6, -0.1, 10000),
        FlightSummary { id: "nopos".to_string(), altitude: Some(10000), ..FlightSummary::default() },
        summary( "c", "C", 51.6, -0.1, 10000),
    ];

    let ranked: Vec<String> = rank_by_distance( candidates, &home).into_iter().map( |c| c.id).collect();
    println!("ranked: {ranked:?}");
    assert_eq!( vec!["a","b","c","far","nopos"], ranked);
}
