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

use chrono::{Datelike, Local, Weekday};
use crate::{
    scene::{DisplayState, StaticText},
    scheduler::FrameCallback,
    surface::{Color, Font}
};

pub const DAY_POSITION: (i32,i32) = (44, 16);
pub const DAY_COLOR: Color = Color::PINK_DARK;

const DAY_NAMES: [&str;7] = ["Mon", "Tues", "Wed", "Thurs", "Fri", "Sat", "Sun"];

pub fn day_name (weekday: Weekday)->&'static str {
    DAY_NAMES[weekday.num_days_from_monday() as usize]
}

fn local_weekday ()->Weekday { Local::now().weekday() }

/// idle mode day-of-week. Meant to be registered with a one second period, only redraws when the
/// day changes
pub struct DayScene {
    today: fn()->Weekday,
    text: StaticText,
}

impl DayScene {
    pub fn new ()->Self { DayScene::with_clock( local_weekday) }

    pub fn with_clock (today: fn()->Weekday)->Self {
        DayScene { today, text: StaticText::default() }
    }
}

impl Default for DayScene {
    fn default()->Self { DayScene::new() }
}

impl FrameCallback<DisplayState> for DayScene {
    fn on_tick (&mut self, _frame: u64, state: &mut DisplayState) {
        let surface = state.surface.as_mut();

        if !state.flights.is_empty() {
            self.text.clear( surface);
            return
        }

        let day = day_name( (self.today)());
        self.text.show( surface, Font::ExtraSmall, DAY_POSITION.0, DAY_POSITION.1, DAY_COLOR, day, None);
    }

    fn on_reset (&mut self, _state: &mut DisplayState) {
        self.text.forget();
    }
}
