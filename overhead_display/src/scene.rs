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

//! the state shared by all scenes and the building blocks they use to draw without leaving
//! stale pixels behind

use overhead_flights::{empty_snapshot, Flight, Snapshot};
use crate::{errors::Result, scheduler::FrameState, surface::{Color, Font, Rect, Surface}};

/// vertical speeds within +- this band (ft/min) count as level flight
pub const VS_LEVEL_BAND: i64 = 300;

/// placeholder for missing numbers
pub const NO_VALUE: &str = "--";

/// which flight of the current snapshot is shown, and whether we have cycled through all of them
#[derive(Debug,Clone,Copy,Default,PartialEq,Eq)]
pub struct SceneCursor {
    index: usize,
    looped: bool,
}

impl SceneCursor {
    pub fn index (&self)->usize { self.index }

    pub fn looped (&self)->bool { self.looped }

    /// move to the next of `len` flights, setting `looped` when wrapping around to the first one
    pub fn advance (&mut self, len: usize) {
        if len == 0 {
            self.index = 0;
        } else {
            self.index = (self.index + 1) % len;
            if self.index == 0 { self.looped = true }
        }
    }

    pub fn reset (&mut self) {
        self.index = 0;
        self.looped = false;
    }
}

/// what the scheduler threads through all scene callbacks
pub struct DisplayState {
    pub surface: Box<dyn Surface>,
    pub flights: Snapshot,
    pub cursor: SceneCursor,
    reset_requested: bool,
}

impl DisplayState {
    pub fn new (surface: Box<dyn Surface>)->Self {
        DisplayState { surface, flights: empty_snapshot(), cursor: SceneCursor::default(), reset_requested: false }
    }

    pub fn has_flights (&self)->bool { !self.flights.is_empty() }

    /// the flight the cursor points to, if any
    pub fn current_flight (&self)->Option<&Flight> {
        self.flights.get( self.cursor.index())
    }

    /// ask the scheduler to call `on_reset` of all scenes before the next callback runs
    pub fn request_reset (&mut self) { self.reset_requested = true }
}

impl FrameState for DisplayState {
    fn take_reset (&mut self)->bool {
        std::mem::take( &mut self.reset_requested)
    }

    fn swap (&mut self)->Result<()> { self.surface.swap() }
}

/// text that has been drawn and can be erased again by drawing it in black
#[derive(Debug,Clone,PartialEq)]
pub struct DrawnText {
    pub font: Font,
    pub x: i32,
    pub y: i32,
    pub text: String,
    pub clip: Option<Rect>,
}

impl DrawnText {
    pub fn draw (font: Font, x: i32, y: i32, color: Color, text: &str, clip: Option<Rect>, surface: &mut dyn Surface)->Self {
        let drawn = DrawnText { font, x, y, text: text.to_string(), clip };
        drawn.draw_with( surface, color);
        drawn
    }

    pub fn undraw (&self, surface: &mut dyn Surface) {
        self.draw_with( surface, Color::BLACK);
    }

    fn draw_with (&self, surface: &mut dyn Surface, color: Color)->i32 {
        match &self.clip {
            Some(clip) => surface.draw_text_in( clip, self.font, self.x, self.y, color, &self.text),
            None => surface.draw_text( self.font, self.x, self.y, color, &self.text)
        }
    }
}

/// static text content that is either cleared or drawn. Redrawing the same text is a no-op,
/// different text replaces the previous one
#[derive(Debug,Clone,Default)]
pub struct StaticText {
    last: Option<(DrawnText,Color)>,
}

impl StaticText {
    pub fn show (&mut self, surface: &mut dyn Surface, font: Font, x: i32, y: i32, color: Color, text: &str, clip: Option<Rect>) {
        if let Some((last,last_color)) = &self.last {
            if last.font == font && last.x == x && last.y == y && last.text == text && last.clip == clip && *last_color == color { return }
            last.undraw( surface);
        }
        self.last = Some( (DrawnText::draw( font, x, y, color, text, clip, surface), color));
    }

    /// erase what we drew last, if anything
    pub fn clear (&mut self, surface: &mut dyn Surface) {
        if let Some((last,_)) = self.last.take() {
            last.undraw( surface);
        }
    }

    /// forget what we drew without erasing it (the surface was cleared by someone else)
    pub fn forget (&mut self) { self.last = None }

    pub fn is_drawn (&self)->bool { self.last.is_some() }
}

pub fn vs_colour (vertical_speed: Option<i64>)->Color {
    match vertical_speed {
        Some(vs) if vs > VS_LEVEL_BAND => Color::GREEN,
        Some(vs) if vs < -VS_LEVEL_BAND => Color::RED,
        _ => Color::YELLOW
    }
}

pub fn fmt_int (v: Option<i64>)->String {
    v.map( |v| v.to_string()).unwrap_or_else( || NO_VALUE.to_string())
}
