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

use crate::{
    marquee::{Marquee, Wrap},
    scene::DisplayState,
    scheduler::FrameCallback,
    surface::{Color, Font, Rect, PANEL_WIDTH}
};

pub const BANNER_Y: i32 = 30;
pub const BANNER_STRIP: Rect = Rect::new( 0, 24, PANEL_WIDTH-1, 31);
pub const BANNER_COLOR: Color = Color::PINK_DARK;

/// idle mode banner that scrolls through the bottom strip and re-enters from the right edge
pub struct BannerScene {
    text: String,
    marquee: Marquee,
    active: bool,
}

impl BannerScene {
    pub fn new (text: impl Into<String>)->Self {
        BannerScene {
            text: text.into(),
            marquee: Marquee::new( Font::Regular, BANNER_STRIP, BANNER_Y, Wrap::Edge),
            active: false
        }
    }

    pub fn marquee (&self)->&Marquee { &self.marquee }
}

impl FrameCallback<DisplayState> for BannerScene {
    fn on_tick (&mut self, _frame: u64, state: &mut DisplayState) {
        let surface = state.surface.as_mut();

        if !state.flights.is_empty() {
            if self.active {
                self.marquee.clear( surface);
                self.active = false;
            }
            return
        }

        if !self.active {
            self.marquee.set_text( surface, &self.text);
            self.active = true;
        }
        self.marquee.tick( surface, BANNER_COLOR);
    }

    fn on_reset (&mut self, _state: &mut DisplayState) {
        self.marquee.reset();
    }
}
