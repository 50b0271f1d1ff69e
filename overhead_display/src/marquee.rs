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

//! horizontally scrolling text. A marquee holds its text at a rest offset for a number of
//! frames, then scrolls it left by `step` pixels per tick. Once the text plus a gap has left the
//! region it either holds again ([`Wrap::Hold`]) or continues from the starting edge ([`Wrap::Edge`]).
//!
//! Each tick first erases the previous rendering by redrawing it in black, which only touches
//! pixels that actually belong to the text

use crate::{scene::DrawnText, surface::{Color, Font, Rect, Surface}};

pub const DEFAULT_GAP: i32 = 18;

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum Wrap {
    /// go back to the rest offset and hold again
    Hold,
    /// continue scrolling in from the starting edge
    Edge,
}

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum MarqueePhase {
    Idle,
    Hold,
    Scrolling,
}

#[derive(Debug,Clone)]
pub struct Marquee {
    font: Font,
    region: Rect,
    origin_x: i32, // absolute x of offset 0
    y: i32,        // baseline
    rest: i32,
    gap: i32,
    step: i32,
    hold: u64,
    wrap: Wrap,

    text: Option<String>,
    width: Option<i32>,
    offset: i32,
    phase: MarqueePhase,
    hold_left: u64,
    drawn: Option<DrawnText>,
}

impl Marquee {
    /// a marquee clipped to `region` with its baseline at `y`. Edge marquees rest just outside the
    /// right border of the region, hold marquees at its left border
    pub fn new (font: Font, region: Rect, y: i32, wrap: Wrap)->Self {
        let rest = match wrap {
            Wrap::Edge => region.width(),
            Wrap::Hold => 0
        };

        Marquee {
            font, region, origin_x: region.x0, y, rest, gap: DEFAULT_GAP, step: 1, hold: 0, wrap,
            text: None, width: None, offset: rest, phase: MarqueePhase::Idle, hold_left: 0, drawn: None
        }
    }

    pub fn with_origin (mut self, origin_x: i32)->Self { self.origin_x = origin_x; self }
    pub fn with_rest (mut self, rest: i32)->Self { self.rest = rest; self.offset = rest; self }
    pub fn with_gap (mut self, gap: i32)->Self { self.gap = gap; self }
    pub fn with_step (mut self, step: i32)->Self { self.step = step.max(1); self }
    pub fn with_hold (mut self, frames: u64)->Self { self.hold = frames; self }

    pub fn text (&self)->Option<&str> { self.text.as_deref() }
    pub fn offset (&self)->i32 { self.offset }
    pub fn rest (&self)->i32 { self.rest }
    pub fn phase (&self)->MarqueePhase { self.phase }

    /// measured text width, available after the first tick unless it was passed in with the text
    pub fn width (&self)->Option<i32> { self.width }

    /// the region's width, i.e. how far an edge marquee starts from its origin
    pub fn region_width (&self)->i32 { self.region.width() }

    /// change the content. Same text is a no-op, new text is measured on the next tick and starts with a hold
    pub fn set_text (&mut self, surface: &mut dyn Surface, text: &str) {
        self.set_content( surface, text, None)
    }

    /// like [`Marquee::set_text`] for callers that already measured `text` in our font
    pub fn set_text_measured (&mut self, surface: &mut dyn Surface, text: &str, width: i32) {
        self.set_content( surface, text, Some(width))
    }

    fn set_content (&mut self, surface: &mut dyn Surface, text: &str, width: Option<i32>) {
        if self.text.as_deref() == Some(text) {
            if self.width.is_none() { self.width = width }
            return
        }

        self.undraw( surface);
        self.text = Some( text.to_string());
        self.width = width;
        self.restart();
    }

    /// switching fonts requires a new measurement and restarts the marquee
    pub fn set_font (&mut self, surface: &mut dyn Surface, font: Font) {
        if self.font == font { return }

        self.undraw( surface);
        self.font = font;
        self.width = None;
        if self.text.is_some() { self.restart() }
    }

    /// erase and drop the content
    pub fn clear (&mut self, surface: &mut dyn Surface) {
        self.undraw( surface);
        self.text = None;
        self.width = None;
        self.offset = self.rest;
        self.phase = MarqueePhase::Idle;
    }

    /// the surface got cleared by somebody else. Forget what we drew and start over
    pub fn reset (&mut self) {
        self.drawn = None;
        if self.text.is_some() { self.restart() }
    }

    fn restart (&mut self) {
        self.offset = self.rest;
        if self.hold > 0 {
            self.phase = MarqueePhase::Hold;
            self.hold_left = self.hold;
        } else {
            self.phase = MarqueePhase::Scrolling;
            self.hold_left = 0;
        }
    }

    fn undraw (&mut self, surface: &mut dyn Surface) {
        if let Some(drawn) = self.drawn.take() {
            drawn.undraw( surface);
        }
    }


    /// redraw at the current offset in `color` and advance the state machine
    pub fn tick (&mut self, surface: &mut dyn Surface, color: Color) {
        let Some(text) = self.text.clone() else { return };

        let width = match self.width {
            Some(w) => w,
            None => {
                let w = self.font.measure( &text);
                self.width = Some(w);
                w
            }
        };

        self.undraw( surface);
        self.drawn = Some( DrawnText::draw( self.font, self.origin_x + self.offset, self.y, color, &text, Some(self.region), surface));

        match self.phase {
            MarqueePhase::Hold => {
                self.hold_left = self.hold_left.saturating_sub(1);
                if self.hold_left == 0 { self.phase = MarqueePhase::Scrolling }
            }
            MarqueePhase::Scrolling => {
                self.offset -= self.step;
                if self.offset + width + self.gap <= 0 {
                    match self.wrap {
                        Wrap::Hold => self.restart(),
                        Wrap::Edge => self.offset = self.rest,
                    }
                }
            }
            MarqueePhase::Idle => {}
        }
    }
}
