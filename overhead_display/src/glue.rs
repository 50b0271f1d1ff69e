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

//! the callbacks that connect the display loop with the [`Overhead`] fetcher: picking up new
//! snapshots, triggering refreshes and rotating through the flights of a snapshot

use std::collections::HashSet;
use tracing::{debug,info};
use overhead_flights::{overhead::Overhead, Flight, Snapshot};
use crate::{scene::DisplayState, scheduler::FrameCallback};

/// the identity set of a snapshot
pub fn callsigns (flights: &[Flight])->HashSet<Option<&str>> {
    flights.iter().map( |f| f.callsign.as_deref()).collect()
}

/// did we switch between idle (no flights) and active mode
pub fn mode_changed (prev: &[Flight], new: &[Flight])->bool {
    prev.is_empty() != new.is_empty()
}

pub fn data_is_different (prev: &[Flight], new: &[Flight])->bool {
    callsigns( prev) != callsigns( new)
}

/// what happened when a new snapshot was applied
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub struct Transition {
    pub mode_changed: bool,
    pub data_is_different: bool,
    pub reset: bool,
}

/// take over a new snapshot. A different set of flights replaces the current one and resets the
/// cursor. The whole surface is cleared and a scene reset requested if the mode changed, or if we
/// were showing flights that are now different
pub fn apply_snapshot (state: &mut DisplayState, new: Snapshot)->Transition {
    let mode_changed = mode_changed( &state.flights, &new);
    let data_is_different = data_is_different( &state.flights, &new);
    let reset = mode_changed || (state.has_flights() && data_is_different);

    if data_is_different {
        state.cursor.reset();
        state.flights = new;
    }

    if reset {
        state.surface.clear();
        state.request_reset();
    }

    Transition { mode_changed, data_is_different, reset }
}

/// should we start another fetch cycle. Not while one is running or a finished one has not been
/// consumed yet (starting a cycle clears `new_data`), and only once all flights have been shown
/// (or there is at most one)
pub fn should_refresh (processing: bool, new_data: bool, looped: bool, n_flights: usize)->bool {
    !processing && !new_data && (looped || n_flights <= 1)
}

pub struct CheckForLoadedData {
    overhead: Overhead,
}

impl CheckForLoadedData {
    pub fn new (overhead: Overhead)->Self { CheckForLoadedData { overhead } }
}

impl FrameCallback<DisplayState> for CheckForLoadedData {
    fn on_tick (&mut self, frame: u64, state: &mut DisplayState) {
        if self.overhead.new_data() {
            let t = apply_snapshot( state, self.overhead.take_data());
            debug!("frame {frame}: new snapshot with {} flights {t:?}", state.flights.len());
            if t.mode_changed {
                info!("switching to {} mode", if state.has_flights() { "flight" } else { "idle" });
            }
        }
    }
}

pub struct GrabNewData {
    overhead: Overhead,
}

impl GrabNewData {
    pub fn new (overhead: Overhead)->Self { GrabNewData { overhead } }
}

impl FrameCallback<DisplayState> for GrabNewData {
    fn on_tick (&mut self, frame: u64, state: &mut DisplayState) {
        let o = &self.overhead;
        if should_refresh( o.processing(), o.new_data(), state.cursor.looped(), state.flights.len()) {
            if o.trigger() { debug!("frame {frame}: triggered fetch"); }
        }
    }
}

/// advance the cursor if there is more than one flight to show
pub fn rotate_flights (_frame: u64, state: &mut DisplayState) {
    let n = state.flights.len();
    if n > 1 {
        state.cursor.advance( n);
    }
}

