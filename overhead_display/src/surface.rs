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

//! the drawing target scenes render into. [`FrameCanvas`] is an `embedded-graphics` draw target,
//! the [`Surface`] trait gives scenes object safe access to it plus a swap. Lines, rectangles and
//! text of all surfaces are rasterized into a canvas the same way, which is what makes "undraw"
//! (redrawing in the background color) exact

use std::{convert::Infallible, fmt, io::{self,Write}};
use embedded_graphics::{
    draw_target::{DrawTarget, DrawTargetExt},
    geometry::{OriginDimensions, Point, Size},
    mono_font::{ascii::{FONT_4X6, FONT_5X7, FONT_5X8, FONT_6X13, FONT_6X13_BOLD}, MonoFont, MonoTextStyle},
    pixelcolor::{Rgb888, RgbColor},
    primitives::{Line, Primitive, PrimitiveStyle, Rectangle},
    text::{renderer::TextRenderer, Baseline, Text},
    Drawable, Pixel
};
use crossterm::{cursor::MoveTo, queue, style::{self, Print, ResetColor, SetBackgroundColor, SetForegroundColor}, terminal::{Clear, ClearType}};
use crate::errors::Result;

pub const PANEL_WIDTH: i32 = 64;
pub const PANEL_HEIGHT: i32 = 32;

/// the panel palette
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Default)]
pub struct Color { pub r: u8, pub g: u8, pub b: u8 }

impl Color {
    pub const BLACK: Color = Color::rgb( 0, 0, 0);
    pub const WHITE: Color = Color::rgb( 255, 255, 255);
    pub const GREY: Color = Color::rgb( 192, 192, 192);
    pub const RED: Color = Color::rgb( 255, 0, 0);
    pub const GREEN: Color = Color::rgb( 0, 200, 0);
    pub const YELLOW: Color = Color::rgb( 255, 255, 0);
    pub const ORANGE: Color = Color::rgb( 255, 165, 0);
    pub const PINK_DARK: Color = Color::rgb( 180, 40, 140);

    pub const fn rgb (r: u8, g: u8, b: u8)->Self { Color { r, g, b } }

    pub fn is_black (&self)->bool { *self == Color::BLACK }
}

impl From<Color> for Rgb888 {
    fn from (c: Color)->Self { Rgb888::new( c.r, c.g, c.b) }
}

impl From<Rgb888> for Color {
    fn from (c: Rgb888)->Self { Color::rgb( c.r(), c.g(), c.b()) }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// named handles for the mono fonts we use on the panel
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash)]
pub enum Font {
    ExtraSmall,
    Small,
    Regular,
    Large,
    LargeBold,
}

impl Font {
    pub fn mono_font (&self)->&'static MonoFont<'static> {
        match self {
            Font::ExtraSmall => &FONT_4X6,
            Font::Small => &FONT_5X7,
            Font::Regular => &FONT_5X8,
            Font::Large => &FONT_6X13,
            Font::LargeBold => &FONT_6X13_BOLD,
        }
    }

    /// horizontal distance between two consecutive characters
    pub fn advance (&self)->i32 {
        let font = self.mono_font();
        (font.character_size.width + font.character_spacing) as i32
    }

    /// advance width of `text` without drawing it
    pub fn measure (&self, text: &str)->i32 {
        let style = MonoTextStyle::new( self.mono_font(), Rgb888::WHITE);
        style.measure_string( text, Point::zero(), Baseline::Alphabetic).next_position.x
    }
}

/// inclusive pixel rectangle for layout constants
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub struct Rect { pub x0: i32, pub y0: i32, pub x1: i32, pub y1: i32 }

impl Rect {
    pub const fn new (x0: i32, y0: i32, x1: i32, y1: i32)->Self { Rect { x0, y0, x1, y1 } }

    pub fn width (&self)->i32 { self.x1 - self.x0 + 1 }
    pub fn height (&self)->i32 { self.y1 - self.y0 + 1 }

    pub fn rectangle (&self)->Rectangle {
        Rectangle::with_corners( Point::new( self.x0, self.y0), Point::new( self.x1, self.y1))
    }
}

fn infallible<T> (res: std::result::Result<T,Infallible>)->T {
    match res {
        Ok(v) => v,
        Err(e) => match e {}
    }
}

pub trait Surface {
    fn canvas (&self)->&FrameCanvas;
    fn canvas_mut (&mut self)->&mut FrameCanvas;

    /// make what has been drawn so far visible
    fn swap (&mut self)->Result<()>;

    fn width (&self)->i32 { self.canvas().width }
    fn height (&self)->i32 { self.canvas().height }

    fn bounds (&self)->Rect { Rect::new( 0, 0, self.width()-1, self.height()-1) }

    fn set_pixel (&mut self, x: i32, y: i32, color: Color) {
        infallible( Pixel( Point::new( x, y), Rgb888::from( color)).draw( self.canvas_mut()))
    }

    /// None if the coordinates are outside the surface
    fn get_pixel (&self, x: i32, y: i32)->Option<Color> {
        self.canvas().pixel( x, y).map( Color::from)
    }

    fn clear (&mut self) {
        infallible( DrawTarget::clear( self.canvas_mut(), Rgb888::BLACK))
    }

    /// fill the rectangle spanned by the two (inclusive) corners
    fn fill_rect (&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let area = Rectangle::with_corners( Point::new( x0, y0), Point::new( x1, y1));
        infallible( self.canvas_mut().fill_solid( &area, color.into()))
    }

    fn draw_line (&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let line = Line::new( Point::new( x0, y0), Point::new( x1, y1))
            .into_styled( PrimitiveStyle::with_stroke( Rgb888::from( color), 1));
        infallible( line.draw( self.canvas_mut()))
    }

    /// draw text with its baseline at `y` and return the advance width. Pixels outside the surface are clipped
    fn draw_text (&mut self, font: Font, x: i32, y: i32, color: Color, text: &str)->i32 {
        let bounds = self.bounds();
        self.draw_text_in( &bounds, font, x, y, color, text)
    }

    /// draw text that is additionally clipped to `clip`
    fn draw_text_in (&mut self, clip: &Rect, font: Font, x: i32, y: i32, color: Color, text: &str)->i32 {
        let style = MonoTextStyle::new( font.mono_font(), Rgb888::from( color));
        let mut target = self.canvas_mut().clipped( &clip.rectangle());
        let next = infallible( Text::with_baseline( text, Point::new( x, y), style, Baseline::Alphabetic).draw( &mut target));
        next.x - x
    }
}

/// in-memory surface. Drawing goes into a persistent canvas, `swap()` copies it into the visible
/// frame and counts the number of swaps
#[derive(Debug,Clone)]
pub struct FrameCanvas {
    width: i32,
    height: i32,
    canvas: Vec<Rgb888>,
    visible: Vec<Rgb888>,
    swaps: u64,
}

impl FrameCanvas {
    pub fn new (width: i32, height: i32)->Self {
        let len = (width.max(0) * height.max(0)) as usize;
        FrameCanvas { width, height, canvas: vec![Rgb888::BLACK; len], visible: vec![Rgb888::BLACK; len], swaps: 0 }
    }

    pub fn panel ()->Self { FrameCanvas::new( PANEL_WIDTH, PANEL_HEIGHT) }

    pub fn swaps (&self)->u64 { self.swaps }

    pub fn pixel (&self, x: i32, y: i32)->Option<Rgb888> {
        self.index( x, y).map( |i| self.canvas[i])
    }

    /// what was visible after the last swap
    pub fn visible_pixel (&self, x: i32, y: i32)->Option<Color> {
        self.index( x, y).map( |i| self.visible[i].into())
    }

    /// number of pixels in the canvas that are not black
    pub fn lit_pixels (&self)->usize {
        self.canvas.iter().filter( |c| **c != Rgb888::BLACK).count()
    }

    pub fn lit_pixels_in (&self, rect: &Rect)->usize {
        let mut n = 0;
        for y in rect.y0..=rect.y1 {
            for x in rect.x0..=rect.x1 {
                if self.pixel( x, y).is_some_and( |c| c != Rgb888::BLACK) { n += 1 }
            }
        }
        n
    }

    fn index (&self, x: i32, y: i32)->Option<usize> {
        if x >= 0 && x < self.width && y >= 0 && y < self.height { Some( (y * self.width + x) as usize) } else { None }
    }
}

impl OriginDimensions for FrameCanvas {
    fn size (&self)->Size { Size::new( self.width.max(0) as u32, self.height.max(0) as u32) }
}

impl DrawTarget for FrameCanvas {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I> (&mut self, pixels: I)->std::result::Result<(),Self::Error> where I: IntoIterator<Item = Pixel<Self::Color>> {
        for Pixel(p, color) in pixels {
            if let Some(i) = self.index( p.x, p.y) { self.canvas[i] = color }
        }
        Ok(())
    }
}

impl Surface for FrameCanvas {
    fn canvas (&self)->&FrameCanvas { self }
    fn canvas_mut (&mut self)->&mut FrameCanvas { self }

    fn swap (&mut self)->Result<()> {
        self.visible.copy_from_slice( &self.canvas);
        self.swaps += 1;
        Ok(())
    }
}

/// preview surface that renders a [`FrameCanvas`] into a truecolor terminal, using upper half
/// block characters so that each text row shows two pixel rows. Only changed frames are written
pub struct TerminalSurface<W: Write = io::Stdout> {
    canvas: FrameCanvas,
    out: W,
    last_rendered: Option<Vec<Rgb888>>,
}

impl TerminalSurface<io::Stdout> {
    pub fn stdout (width: i32, height: i32)->Self { TerminalSurface::new( width, height, io::stdout()) }
}

fn term_color (c: Rgb888)->style::Color {
    style::Color::Rgb { r: c.r(), g: c.g(), b: c.b() }
}

impl<W: Write> TerminalSurface<W> {
    pub fn new (width: i32, height: i32, out: W)->Self {
        TerminalSurface { canvas: FrameCanvas::new( width, height), out, last_rendered: None }
    }

    pub fn writer (&self)->&W { &self.out }

    fn render (&mut self)->io::Result<()> {
        let canvas = &self.canvas;
        let visible = |x: i32, y: i32| canvas.index( x, y).map( |i| canvas.visible[i]).unwrap_or( Rgb888::BLACK);

        for row in 0..(canvas.height + 1) / 2 {
            queue!( self.out, MoveTo( 0, row as u16))?;
            for x in 0..canvas.width {
                let (top, bottom) = (visible( x, 2*row), visible( x, 2*row + 1));
                queue!( self.out, SetForegroundColor( term_color( top)), SetBackgroundColor( term_color( bottom)), Print('\u{2580}'))?;
            }
            queue!( self.out, ResetColor)?;
        }

        self.out.flush()
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn canvas (&self)->&FrameCanvas { &self.canvas }
    fn canvas_mut (&mut self)->&mut FrameCanvas { &mut self.canvas }

    fn swap (&mut self)->Result<()> {
        self.canvas.swap()?;
        if self.last_rendered.as_ref() != Some( &self.canvas.visible) {
            if self.last_rendered.is_none() { queue!( self.out, Clear( ClearType::All))?; }
            self.render()?;
            self.last_rendered = Some( self.canvas.visible.clone());
        }
        Ok(())
    }
}
