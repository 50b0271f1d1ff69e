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

use overhead_flights::Flight;
use crate::{
    scene::{fmt_int, vs_colour, DisplayState, StaticText},
    scheduler::FrameCallback,
    surface::{Color, Font}
};

pub const TELEMETRY_X: i32 = 0;
pub const TELEMETRY_Y: i32 = 12;
pub const LINE_SPACING: i32 = 6;
pub const LEFT_PAD: i32 = 1;

/// the ALT, GS and VS lines with their colors
pub fn telemetry_lines (flight: &Flight)->[(String,Color);3] {
    [
        (format!("ALT {}ft", fmt_int( flight.altitude)), Color::WHITE),
        (format!("GS {}kt", fmt_int( flight.ground_speed)), Color::WHITE),
        (format!("VS {}fpm", fmt_int( flight.vertical_speed)), vs_colour( flight.vertical_speed)),
    ]
}

/// compact three line telemetry block below the journey band. This never clears a rectangle, it
/// only undraws the lines it drew before
#[derive(Default)]
pub struct TelemetryScene {
    lines: [StaticText;3],
}

impl TelemetryScene {
    pub fn new ()->Self { TelemetryScene::default() }
}

impl FrameCallback<DisplayState> for TelemetryScene {
    fn on_tick (&mut self, _frame: u64, state: &mut DisplayState) {
        let flights = state.flights.clone();
        let surface = state.surface.as_mut();

        match flights.get( state.cursor.index()) {
            Some(flight) => {
                let x = TELEMETRY_X + LEFT_PAD;
                for (i,(text,color)) in telemetry_lines( flight).iter().enumerate() {
                    let y = TELEMETRY_Y + LINE_SPACING * (i as i32 + 1);
                    self.lines[i].show( surface, Font::Small, x, y, *color, text, None);
                }
            }
            None => {
                for line in self.lines.iter_mut() { line.clear( surface) }
            }
        }
    }

    fn on_reset (&mut self, _state: &mut DisplayState) {
        for line in self.lines.iter_mut() { line.forget() }
    }
}
