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
    scene::{DisplayState, StaticText},
    scheduler::FrameCallback,
    surface::{Color, Font, Rect, Surface, PANEL_WIDTH}
};

pub const JOURNEY_HEIGHT: i32 = 12;
pub const JOURNEY_COLOR: Color = Color::YELLOW;

pub const ARROW_TIP: (i32,i32) = (34, 7);
pub const ARROW_WIDTH: i32 = 4;
pub const ARROW_HEIGHT: i32 = 8;
pub const ARROW_COLOR: Color = Color::ORANGE;

pub const LEFT_REGION: Rect = Rect::new( 0, 0, ARROW_TIP.0 - ARROW_WIDTH - 1, JOURNEY_HEIGHT - 1);
pub const RIGHT_REGION: Rect = Rect::new( ARROW_TIP.0 + 1, 0, PANEL_WIDTH - 1, JOURNEY_HEIGHT - 1);
pub const PADDING: i32 = 1;

pub const DEFAULT_BLANK_FILLER: &str = " ? ";

/// one side of the journey band. Labels that fit are drawn once, wider ones scroll
struct JourneySide {
    region: Rect,
    fixed: StaticText,
    marquee: Marquee,
    scrolling: bool,
    shown: Option<(String,Font)>,
}

impl JourneySide {
    fn new (region: Rect)->Self {
        let inner_width = region.width() - 2*PADDING;
        let marquee = Marquee::new( Font::Large, region, region.y1, Wrap::Edge)
            .with_origin( region.x0 + PADDING)
            .with_rest( inner_width);

        JourneySide { region, fixed: StaticText::default(), marquee, scrolling: false, shown: None }
    }

    fn inner_width (&self)->i32 { self.region.width() - 2*PADDING }

    fn show (&mut self, surface: &mut dyn Surface, text: &str, font: Font) {
        let changed = match &self.shown {
            Some((t,f)) => t != text || *f != font,
            None => true
        };

        if changed {
            self.clear( surface);

            let width = font.measure( text);
            if width <= self.inner_width() {
                self.fixed.show( surface, font, self.region.x0 + PADDING, self.region.y1, JOURNEY_COLOR, text, Some(self.region));
                self.scrolling = false;
            } else {
                self.marquee.set_font( surface, font);
                self.marquee.set_text_measured( surface, text, width);
                self.scrolling = true;
            }
            self.shown = Some( (text.to_string(), font));
        }

        if self.scrolling {
            self.marquee.tick( surface, JOURNEY_COLOR);
        }
    }

    fn clear (&mut self, surface: &mut dyn Surface) {
        self.fixed.clear( surface);
        self.marquee.clear( surface);
        self.scrolling = false;
        self.shown = None;
    }

    fn forget (&mut self) {
        self.fixed.forget();
        self.marquee.reset();
        self.shown = None;
    }

    fn is_drawn (&self)->bool { self.shown.is_some() }
}

/// flight mode origin -> destination band at the top of the panel
pub struct JourneyScene {
    home_code: Option<String>,
    blank_filler: String,
    left: JourneySide,
    right: JourneySide,
    arrow_drawn: bool,
}

impl JourneyScene {
    /// `home_code` is the IATA code that is highlighted with a bold font
    pub fn new (home_code: Option<String>, blank_filler: impl Into<String>)->Self {
        JourneyScene {
            home_code,
            blank_filler: blank_filler.into(),
            left: JourneySide::new( LEFT_REGION),
            right: JourneySide::new( RIGHT_REGION),
            arrow_drawn: false
        }
    }

    fn font_for (&self, code: Option<&str>)->Font {
        match (code, self.home_code.as_deref()) {
            (Some(code), Some(home)) if code == home => Font::LargeBold,
            _ => Font::Large
        }
    }

    fn label<'a> (&'a self, label: Option<&'a str>, code: Option<&'a str>)->&'a str {
        label.filter( |s| !s.is_empty())
            .or( code.filter( |s| !s.is_empty()))
            .unwrap_or( self.blank_filler.as_str())
    }
}

fn arrow_area ()->Rect {
    Rect::new( ARROW_TIP.0 - ARROW_WIDTH, ARROW_TIP.1 - ARROW_HEIGHT/2, ARROW_TIP.0, ARROW_TIP.1 + ARROW_HEIGHT/2)
}

pub fn draw_arrow (surface: &mut dyn Surface) {
    let area = arrow_area();
    surface.fill_rect( area.x0, area.y0, area.x1, area.y1, Color::BLACK);
    surface.set_pixel( ARROW_TIP.0, ARROW_TIP.1, ARROW_COLOR);

    let (mut y0, mut y1) = (area.y0, area.y1);
    for x in area.x0..ARROW_TIP.0 {
        surface.draw_line( x, y0, x, y1, ARROW_COLOR);
        y0 += 1;
        y1 -= 1;
    }
}

pub fn undraw_arrow (surface: &mut dyn Surface) {
    let area = arrow_area();
    surface.fill_rect( area.x0, area.y0, area.x1, area.y1, Color::BLACK);
}

impl FrameCallback<DisplayState> for JourneyScene {
    fn on_tick (&mut self, _frame: u64, state: &mut DisplayState) {
        let flights = state.flights.clone();
        let surface = state.surface.as_mut();

        let Some(flight) = flights.get( state.cursor.index()) else {
            if self.left.is_drawn() || self.right.is_drawn() {
                self.left.clear( surface);
                self.right.clear( surface);
            }
            if self.arrow_drawn {
                undraw_arrow( surface);
                self.arrow_drawn = false;
            }
            return
        };

        if !self.arrow_drawn {
            draw_arrow( surface);
            self.arrow_drawn = true;
        }

        let origin = self.label( flight.origin_label.as_deref(), flight.origin.as_deref()).to_string();
        let origin_font = self.font_for( flight.origin.as_deref());
        self.left.show( surface, &origin, origin_font);

        let destination = self.label( flight.destination_label.as_deref(), flight.destination.as_deref()).to_string();
        let destination_font = self.font_for( flight.destination.as_deref());
        self.right.show( surface, &destination, destination_font);
    }

    fn on_reset (&mut self, state: &mut DisplayState) {
        self.left.forget();
        self.right.forget();
        self.arrow_drawn = false;

        if state.has_flights() {
            draw_arrow( state.surface.as_mut());
            self.arrow_drawn = true;
        }
    }
}
