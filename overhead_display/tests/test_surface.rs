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

use embedded_graphics::{
    geometry::{Point, Size},
    pixelcolor::{Rgb888, RgbColor},
    primitives::{Primitive, PrimitiveStyle, Rectangle},
    Drawable
};
use overhead_display::surface::{Color, Font, FrameCanvas, Rect, Surface, TerminalSurface};

// run with "cargo test test_surface -- --nocapture"

#[test]
fn test_canvas_draw_target () {
    let mut canvas = FrameCanvas::new( 8, 4);

    // partially outside, only the visible part ends up in the canvas
    Rectangle::new( Point::new( 6, 2), Size::new( 4, 4))
        .into_styled( PrimitiveStyle::with_fill( Rgb888::RED))
        .draw( &mut canvas).unwrap();

    println!("lit: {}", canvas.lit_pixels());
    assert_eq!( 4, canvas.lit_pixels());
    assert_eq!( Some(Color::RED), canvas.get_pixel( 7, 3));
    assert_eq!( None, canvas.get_pixel( 8, 3));

    canvas.clear();
    assert_eq!( 0, canvas.lit_pixels());
}

#[test]
fn test_draw_line () {
    let mut canvas = FrameCanvas::panel();
    canvas.draw_line( 0, 0, 9, 4, Color::ORANGE);
    assert_eq!( Some(Color::ORANGE), canvas.get_pixel( 0, 0));
    assert_eq!( Some(Color::ORANGE), canvas.get_pixel( 9, 4));
    assert_eq!( 10, canvas.lit_pixels()); // one pixel per column for a shallow line

    canvas.fill_rect( 0, 10, 3, 11, Color::GREEN);
    assert_eq!( 8, canvas.lit_pixels_in( &Rect::new( 0, 10, 63, 31)));
}

#[test]
fn test_draw_text () {
    let mut canvas = FrameCanvas::panel();
    for font in [Font::ExtraSmall, Font::Small, Font::Regular, Font::Large, Font::LargeBold] {
        canvas.clear();
        let advance = canvas.draw_text( font, 2, 20, Color::WHITE, "BA123");
        println!("{font:?}: advance {advance}, lit {}", canvas.lit_pixels());
        assert_eq!( font.measure( "BA123"), advance);
        assert_eq!( 5 * font.advance(), advance);
        assert!( canvas.lit_pixels() > 0);

        // redrawing in the background color leaves nothing behind
        canvas.draw_text( font, 2, 20, Color::BLACK, "BA123");
        assert_eq!( 0, canvas.lit_pixels());
    }
    assert_eq!( 0, Font::Small.measure( ""));
}

#[test]
fn test_draw_text_clipped () {
    let mut canvas = FrameCanvas::panel();
    let clip = Rect::new( 10, 0, 20, 31);

    let advance = canvas.draw_text_in( &clip, Font::Regular, 0, 10, Color::YELLOW, "OVERHEAD TRACKER");
    assert_eq!( Font::Regular.measure( "OVERHEAD TRACKER"), advance);

    let n = canvas.lit_pixels();
    println!("clipped text pixels: {n}");
    assert!( n > 0);
    assert_eq!( n, canvas.lit_pixels_in( &clip));
}

#[test]
fn test_terminal_surface () {
    let mut surface = TerminalSurface::new( 4, 4, Vec::<u8>::new());

    surface.set_pixel( 1, 1, Color::RED);
    surface.swap().unwrap();
    let n = surface.writer().len();
    let out = String::from_utf8_lossy( surface.writer()).to_string();
    println!("first frame: {n} bytes");
    assert!( out.contains( '\u{2580}'));
    assert_eq!( Some(Color::RED), surface.canvas().visible_pixel( 1, 1));

    // unchanged frames are not written again
    surface.swap().unwrap();
    assert_eq!( n, surface.writer().len());

    surface.set_pixel( 2, 2, Color::GREEN);
    surface.swap().unwrap();
    assert!( surface.writer().len() > n);
    assert_eq!( Some(Color::GREEN), surface.canvas().visible_pixel( 2, 2));
}
