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

//! the background fetcher that keeps the snapshot of flights overhead up to date

use std::{fmt, sync::{Arc,Mutex,MutexGuard}, thread, time::Duration};
use serde::{Serialize,Deserialize};
use tracing::{debug,info,warn,error};
use overhead_common::{datetime::{secs, deserialize_duration,serialize_duration}, geo::{Zone,HomeLocation,distance_from_home_km}};
use crate::{
    empty_snapshot, Flight, Snapshot,
    dump::{DumpConfig,FlightDumper},
    errors::SourceError,
    fr24::Fr24Config,
    source::{FlightSource,FlightSummary}
};

pub const RETRIES: usize = 3;
pub const MAX_FLIGHT_LOOKUP: usize = 5;
pub const MAX_ALTITUDE: i64 = 45000; // ft
pub const MIN_ALTITUDE: i64 = 0; // ft

#[derive(Serialize,Deserialize,Debug,Clone)]
pub struct OverheadConfig {
    #[serde(default)]
    pub zone: Zone,
    #[serde(default)]
    pub home: HomeLocation,

    #[serde(default="default_min_altitude")]
    pub min_altitude: i64,
    #[serde(default="default_max_altitude")]
    pub max_altitude: i64,

    /// how many of the closest flights get a detail lookup
    #[serde(default="default_max_lookup")]
    pub max_lookup: usize,

    /// detail lookup attempts per flight
    #[serde(default="default_retries")]
    pub retries: usize,

    /// pause before each detail lookup attempt
    #[serde(default="default_rate_limit_delay", serialize_with="serialize_duration",deserialize_with="deserialize_duration")]
    pub rate_limit_delay: Duration,

    #[serde(default)]
    pub source: Fr24Config,

    #[serde(default)]
    pub dump: Option<DumpConfig>,
}

fn default_min_altitude()->i64 { MIN_ALTITUDE }
fn default_max_altitude()->i64 { MAX_ALTITUDE }
fn default_max_lookup()->usize { MAX_FLIGHT_LOOKUP }
fn default_retries()->usize { RETRIES }
fn default_rate_limit_delay()->Duration { secs(1) }

impl Default for OverheadConfig {
    fn default()->Self {
        OverheadConfig {
            zone: Zone::default(),
            home: HomeLocation::default(),
            min_altitude: MIN_ALTITUDE,
            max_altitude: MAX_ALTITUDE,
            max_lookup: MAX_FLIGHT_LOOKUP,
            retries: RETRIES,
            rate_limit_delay: default_rate_limit_delay(),
            source: Fr24Config::default(),
            dump: None
        }
    }
}

/// the state we share between the fetch thread and the display loop. Always accessed through one
/// short lock, never held across I/O
#[derive(Debug)]
struct FetchState {
    processing: bool,
    new_data: bool,
    data: Snapshot,
}

struct OverheadInner {
    config: OverheadConfig,
    source: Box<dyn FlightSource>,
    dumper: Option<FlightDumper>,
    state: Mutex<FetchState>,
}

/// the fetcher. This is a cheap to clone handle so that the fetch thread can own a reference
/// while the display loop polls the same state
#[derive(Clone)]
pub struct Overhead {
    inner: Arc<OverheadInner>
}

impl fmt::Debug for Overhead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state();
        write!( f, "Overhead( processing: {}, new: {}, flights: {} )", state.processing, state.new_data, state.data.len())
    }
}

impl Overhead {
    /// create a fetcher for the given source. If the config has a dump section we try to start a
    /// [`FlightDumper`], failing to do so only disables dumping
    pub fn new (config: OverheadConfig, source: impl FlightSource + 'static)->Self {
        let dumper = config.dump.as_ref().and_then( |dump_config| {
            match FlightDumper::start( dump_config.clone()) {
                Ok(dumper) => { info!("dumping flight listings to {:?}", dump_config.path); Some(dumper) }
                Err(e) => { warn!("flight dump disabled: {e}"); None }
            }
        });

        let state = Mutex::new( FetchState { processing: false, new_data: false, data: empty_snapshot() });
        Overhead { inner: Arc::new( OverheadInner { config, source: Box::new(source), dumper, state }) }
    }

    pub fn config (&self)->&OverheadConfig { &self.inner.config }

    fn state (&self)->MutexGuard<'_,FetchState> {
        // a poisoned lock only means a fetch thread panicked, the state itself is always consistent
        self.inner.state.lock().unwrap_or_else( |e| e.into_inner())
    }

    /// start a fetch cycle on a background thread unless one is already running. Returns true if a
    /// new cycle was started
    pub fn trigger (&self)->bool {
        if !self.claim() { return false }

        let this = self.clone();
        match thread::Builder::new().name( "overhead-fetch".to_string()).spawn( move || this.run_cycle()) {
            Ok(_) => true,
            Err(e) => {
                error!("failed to spawn fetch thread: {e}");
                self.state().processing = false;
                false
            }
        }
    }

    /// run a fetch cycle on the calling thread. Returns false if another cycle is in progress
    pub fn fetch_now (&self)->bool {
        if !self.claim() { return false }
        self.run_cycle();
        true
    }

    /// whether there is a published snapshot that has not been consumed yet
    pub fn new_data (&self)->bool { self.state().new_data }

    pub fn processing (&self)->bool { self.state().processing }

    /// consume the current snapshot, which clears the `new_data` flag
    pub fn take_data (&self)->Snapshot {
        let mut state = self.state();
        state.new_data = false;
        state.data.clone()
    }

    pub fn data_is_empty (&self)->bool { self.state().data.is_empty() }

    /// atomically test-and-set `processing`
    fn claim (&self)->bool {
        let mut state = self.state();
        if state.processing {
            false
        } else {
            state.processing = true;
            state.new_data = false;
            true
        }
    }

    fn run_cycle (&self) {
        match self.fetch_flights() {
            Ok(flights) => {
                info!("publishing {} flights", flights.len());
                let mut state = self.state();
                state.data = Arc::new( flights);
                state.new_data = true;
                state.processing = false;
            }
            Err(e) => {
                warn!("fetch cycle aborted: {e}");
                let mut state = self.state();
                state.new_data = false;
                state.processing = false;
            }
        }
    }

    fn fetch_flights (&self)->Result<Vec<Flight>,SourceError> {
        let config = &self.inner.config;
        let candidates = self.inner.source.flights( &config.zone)?;
        debug!("{} flights in {}", candidates.len(), config.zone);

        if let Some(dumper) = &self.inner.dumper {
            dumper.submit( config.zone.bounds_string(), &candidates);
        }

        let candidates = filter_by_altitude( candidates, config.min_altitude, config.max_altitude);
        let mut candidates = rank_by_distance( candidates, &config.home);
        candidates.truncate( config.max_lookup);

        Ok( candidates.iter().filter_map( |c| self.enrich( c)).collect() )
    }

    /// get details for a candidate, retrying up to the configured budget. None if all attempts failed
    fn enrich (&self, candidate: &FlightSummary)->Option<Flight> {
        let config = &self.inner.config;

        for attempt in 1..=config.retries {
            thread::sleep( config.rate_limit_delay);
            match self.inner.source.details( candidate) {
                Ok(details) => return Some( Flight::from_summary_and_details( candidate, details)),
                Err(e) => debug!("details for {candidate} failed (attempt {attempt}/{}): {e}", config.retries)
            }
        }

        debug!("dropping {candidate}");
        None
    }
}

/// keep candidates with an altitude strictly between the bounds
pub fn filter_by_altitude (candidates: Vec<FlightSummary>, min_altitude: i64, max_altitude: i64)->Vec<FlightSummary> {
    candidates.into_iter()
        .filter( |c| c.altitude.is_some_and( |alt| alt > min_altitude && alt < max_altitude))
        .collect()
}

/// order candidates by ascending distance from home. This is a stable sort, candidates at the
/// same distance stay in input order
pub fn rank_by_distance (candidates: Vec<FlightSummary>, home: &HomeLocation)->Vec<FlightSummary> {
    let mut ranked: Vec<(f64,FlightSummary)> = candidates.into_iter()
        .map( |c| (distance_from_home_km( home, c.latitude, c.longitude, c.altitude.map( |a| a as f64)), c))
        .collect();
    ranked.sort_by( |a,b| a.0.total_cmp( &b.0));
    ranked.into_iter().map( |(_,c)| c).collect()
}
