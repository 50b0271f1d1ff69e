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

//! the frame driven display side: a [`surface::Surface`] to draw on, the [`scheduler::Scheduler`]
//! that runs all scenes, and the glue that feeds them with snapshots from the fetcher

use std::time::Duration;
use serde::{Serialize,Deserialize};
use overhead_common::datetime::{secs, deserialize_duration,serialize_duration};
use overhead_flights::overhead::Overhead;

pub mod errors;
pub mod surface;
pub mod scheduler;
pub mod scene;
pub mod marquee;
pub mod glue;
pub mod scenes;

use errors::Result;
use scene::DisplayState;
use scheduler::Scheduler;
use glue::{CheckForLoadedData, GrabNewData, rotate_flights};
use scenes::{BannerScene, DayScene, FlightDetailsScene, JourneyScene, TelemetryScene, DEFAULT_BLANK_FILLER};

#[derive(Serialize,Deserialize,Debug,Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub frames_per_second: u32,

    /// how often we look for a new snapshot
    #[serde(serialize_with="serialize_duration",deserialize_with="deserialize_duration")]
    pub check_every: Duration,

    /// how often we consider triggering a new fetch cycle
    #[serde(serialize_with="serialize_duration",deserialize_with="deserialize_duration")]
    pub refresh_every: Duration,

    /// how long each flight of a snapshot is shown
    #[serde(serialize_with="serialize_duration",deserialize_with="deserialize_duration")]
    pub rotate_every: Duration,

    /// how long the flight details line rests before scrolling
    #[serde(serialize_with="serialize_duration",deserialize_with="deserialize_duration")]
    pub hold: Duration,

    pub banner_text: String,
    pub journey_home_code: Option<String>,
    pub journey_blank_filler: String,

    /// show the ALT/GS/VS block instead of the scrolling flight details line
    pub show_telemetry: bool,
}

impl Default for DisplayConfig {
    fn default()->Self {
        DisplayConfig {
            frames_per_second: 10,
            check_every: secs(5),
            refresh_every: secs(30),
            rotate_every: secs(10),
            hold: secs(1),
            banner_text: "Overhead Flight Tracker".to_string(),
            journey_home_code: Some("GLA".to_string()),
            journey_blank_filler: DEFAULT_BLANK_FILLER.to_string(),
            show_telemetry: false,
        }
    }
}

impl DisplayConfig {
    pub fn frame_period (&self)->Duration {
        Duration::from_secs_f64( 1.0 / self.frames_per_second.max(1) as f64)
    }

    /// number of frames (at least one) that cover the given duration
    pub fn frames (&self, dur: Duration)->u64 {
        ((dur.as_secs_f64() * self.frames_per_second.max(1) as f64).round() as u64).max(1)
    }
}

/// set up the scheduler with the glue callbacks and all scenes. Snapshot checks come first so
/// that a reset is done before any scene draws in the same frame
pub fn create_scheduler (config: &DisplayConfig, overhead: &Overhead)->Result<Scheduler<DisplayState>> {
    let mut scheduler = Scheduler::new( config.frame_period());

    scheduler.register( "check_for_loaded_data", config.frames( config.check_every), CheckForLoadedData::new( overhead.clone()))?;

    scheduler.register( "banner", 1, BannerScene::new( config.banner_text.as_str()))?;
    scheduler.register( "day", config.frames( secs(1)), DayScene::new())?;
    scheduler.register( "journey", 1, JourneyScene::new( config.journey_home_code.clone(), config.journey_blank_filler.as_str()))?;
    if config.show_telemetry {
        scheduler.register( "telemetry", 1, TelemetryScene::new())?;
    } else {
        scheduler.register( "flight_details", 1, FlightDetailsScene::new( config.frames( config.hold)))?;
    }

    scheduler.register( "rotate_flights", config.frames( config.rotate_every), rotate_flights)?;
    scheduler.register( "grab_new_data", config.frames( config.refresh_every), GrabNewData::new( overhead.clone()))?;

    Ok(scheduler)
}
