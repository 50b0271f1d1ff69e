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
    marquee::{Marquee, Wrap},
    scene::{fmt_int, vs_colour, DisplayState, StaticText},
    scheduler::FrameCallback,
    surface::{Color, Font, Rect, Surface, PANEL_WIDTH}
};

pub const BAR_Y: i32 = 18;
pub const BAR_COLOR: Color = Color::GREEN;

pub const FLIGHT_LINE_Y: i32 = 25;
pub const FLIGHT_LINE_REGION: Rect = Rect::new( 0, BAR_Y + 1, 50, 26);
pub const HOLD_X: i32 = 1;

pub const DATA_INDEX_POSITION: (i32,i32) = (52, 25);
pub const DATA_INDEX_COLOR: Color = Color::GREY;

/// "<id>  ALT <alt>ft  GS <gs>kt  VS <vs>fpm", with the callsign falling back to the flight number
pub fn flight_line (flight: &Flight)->String {
    let id = flight.callsign.as_deref().filter( |s| !s.trim().is_empty())
        .or( flight.number.as_deref().filter( |s| !s.trim().is_empty()))
        .unwrap_or( "FLIGHT");

    format!("{}  ALT {}ft  GS {}kt  VS {}fpm", id.trim(), fmt_int( flight.altitude), fmt_int( flight.ground_speed), fmt_int( flight.vertical_speed))
}

/// flight mode divider bar, "n/m" index and a scrolling line with the flight id and kinematics.
/// The line holds at the left edge for `hold_frames` before it starts to scroll
pub struct FlightDetailsScene {
    marquee: Marquee,
    index: StaticText,
    bar_drawn: bool,
}

impl FlightDetailsScene {
    pub fn new (hold_frames: u64)->Self {
        let marquee = Marquee::new( Font::Small, FLIGHT_LINE_REGION, FLIGHT_LINE_Y, Wrap::Hold)
            .with_rest( HOLD_X)
            .with_hold( hold_frames);

        FlightDetailsScene { marquee, index: StaticText::default(), bar_drawn: false }
    }

    pub fn marquee (&self)->&Marquee { &self.marquee }

    fn draw_bar (surface: &mut dyn Surface, color: Color) {
        surface.draw_line( 0, BAR_Y, PANEL_WIDTH-1, BAR_Y, color);
    }
}

impl FrameCallback<DisplayState> for FlightDetailsScene {
    fn on_tick (&mut self, _frame: u64, state: &mut DisplayState) {
        let flights = state.flights.clone();
        let idx = state.cursor.index();
        let surface = state.surface.as_mut();

        let Some(flight) = flights.get( idx) else {
            self.marquee.clear( surface);
            self.index.clear( surface);
            if self.bar_drawn {
                Self::draw_bar( surface, Color::BLACK);
                self.bar_drawn = false;
            }
            return
        };

        if !self.bar_drawn {
            Self::draw_bar( surface, BAR_COLOR);
            self.bar_drawn = true;
        }

        if flights.len() > 1 {
            let index = format!("{}/{}", idx + 1, flights.len());
            self.index.show( surface, Font::ExtraSmall, DATA_INDEX_POSITION.0, DATA_INDEX_POSITION.1, DATA_INDEX_COLOR, &index, None);
        } else {
            self.index.clear( surface);
        }

        self.marquee.set_text( surface, &flight_line( flight));
        self.marquee.tick( surface, vs_colour( flight.vertical_speed));
    }

    fn on_reset (&mut self, _state: &mut DisplayState) {
        self.marquee.reset();
        self.index.forget();
        self.bar_drawn = false;
    }
}
