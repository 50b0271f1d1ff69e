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

use std::sync::Arc;
use chrono::Weekday;
use overhead_flights::Flight;
use overhead_display::{
    scene::{vs_colour, DisplayState, NO_VALUE},
    scheduler::FrameCallback,
    scenes::*,
    surface::{Color, FrameCanvas, Rect, Surface, PANEL_HEIGHT, PANEL_WIDTH}
};

// run with "cargo test test_journey -- --nocapture"

fn panel_state ()->DisplayState { DisplayState::new( Box::new( FrameCanvas::panel())) }

fn lit_in (surface: &dyn Surface, rect: &Rect)->usize {
    let mut n = 0;
    for y in rect.y0..=rect.y1 {
        for x in rect.x0..=rect.x1 {
            if surface.get_pixel( x, y).is_some_and( |c| !c.is_black()) { n += 1 }
        }
    }
    n
}

fn lit (surface: &dyn Surface)->usize {
    lit_in( surface, &Rect::new( 0, 0, PANEL_WIDTH-1, PANEL_HEIGHT-1))
}

fn colors_in (surface: &dyn Surface, rect: &Rect)->Vec<Color> {
    let mut colors: Vec<Color> = Vec::new();
    for y in rect.y0..=rect.y1 {
        for x in rect.x0..=rect.x1 {
            if let Some(c) = surface.get_pixel( x, y) { if !c.is_black() && !colors.contains( &c) { colors.push(c) } }
        }
    }
    colors
}

fn ba123 ()->Flight {
    Flight {
        callsign: Some("BA123".into()),
        altitude: Some(35000), ground_speed: Some(450), vertical_speed: Some(-1200),
        origin: Some("LHR".into()), destination: Some("GLA".into()),
        ..Flight::default()
    }
}

#[test]
fn test_banner () {
    let mut state = panel_state();
    let mut banner = BannerScene::new( "OVERHEAD");

    for frame in 1..=20 { banner.on_tick( frame, &mut state) }
    let n = lit_in( state.surface.as_ref(), &BANNER_STRIP);
    println!("banner pixels after 20 frames: {n}");
    assert!( n > 0);
    assert_eq!( n, lit( state.surface.as_ref())); // nothing outside of the strip

    state.flights = Arc::new( vec![ba123()]);
    banner.on_tick( 21, &mut state);
    assert_eq!( 0, lit( state.surface.as_ref()));

    banner.on_tick( 22, &mut state);
    assert_eq!( 0, lit( state.surface.as_ref()));
}

#[test]
fn test_day () {
    assert_eq!( "Thurs", day_name( Weekday::Thu));
    assert_eq!( "Sun", day_name( Weekday::Sun));

    let mut state = panel_state();
    let mut day = DayScene::with_clock( || Weekday::Wed);

    day.on_tick( 1, &mut state);
    let day_area = Rect::new( DAY_POSITION.0, DAY_POSITION.1 - 6, PANEL_WIDTH-1, DAY_POSITION.1 + 1);
    let n = lit( state.surface.as_ref());
    println!("day pixels: {n}");
    assert!( n > 0);
    assert_eq!( n, lit_in( state.surface.as_ref(), &day_area));
    assert_eq!( vec![DAY_COLOR], colors_in( state.surface.as_ref(), &day_area));

    day.on_tick( 2, &mut state);
    assert_eq!( n, lit( state.surface.as_ref()));

    state.flights = Arc::new( vec![ba123()]);
    day.on_tick( 3, &mut state);
    assert_eq!( 0, lit( state.surface.as_ref()));
}

#[test]
fn test_journey () {
    let mut state = panel_state();
    let mut journey = JourneyScene::new( Some("GLA".into()), DEFAULT_BLANK_FILLER);

    state.flights = Arc::new( vec![ba123()]);
    journey.on_tick( 1, &mut state);

    let (left, right) = (lit_in( state.surface.as_ref(), &LEFT_REGION), lit_in( state.surface.as_ref(), &RIGHT_REGION));
    println!("journey pixels: left={left}, right={right}");
    assert_eq!( Some(ARROW_COLOR), state.surface.get_pixel( ARROW_TIP.0, ARROW_TIP.1));
    assert!( left > 0 && right > 0);

    // home airport is bold, so the same label without a home code lights fewer pixels
    let mut plain_state = panel_state();
    let mut plain = JourneyScene::new( None, DEFAULT_BLANK_FILLER);
    plain_state.flights = Arc::new( vec![ba123()]);
    plain.on_tick( 1, &mut plain_state);
    assert_eq!( left, lit_in( plain_state.surface.as_ref(), &LEFT_REGION));
    assert!( right > lit_in( plain_state.surface.as_ref(), &RIGHT_REGION));

    // a global clear followed by a reset redraws the arrow
    state.surface.clear();
    journey.on_reset( &mut state);
    assert_eq!( Some(ARROW_COLOR), state.surface.get_pixel( ARROW_TIP.0, ARROW_TIP.1));

    state.flights = Arc::new( Vec::new());
    journey.on_tick( 2, &mut state);
    assert_eq!( 0, lit( state.surface.as_ref()));
}

#[test]
fn test_journey_blank_filler () {
    let mut state = panel_state();
    let mut journey = JourneyScene::new( None, "?");

    state.flights = Arc::new( vec![Flight::with_callsign("XX1")]);
    journey.on_tick( 1, &mut state);
    assert!( lit_in( state.surface.as_ref(), &LEFT_REGION) > 0);
    assert!( lit_in( state.surface.as_ref(), &RIGHT_REGION) > 0);
}

#[test]
fn test_flight_line () {
    let flight = ba123();
    let line = flight_line( &flight);
    println!("{line}");
    assert_eq!( "BA123  ALT 35000ft  GS 450kt  VS -1200fpm", line);

    let flight = Flight { number: Some("BA123".into()), ..Flight::default() };
    assert_eq!( format!("BA123  ALT {NO_VALUE}ft  GS {NO_VALUE}kt  VS {NO_VALUE}fpm"), flight_line( &flight));

    assert!( flight_line( &Flight::default()).starts_with( "FLIGHT  "));
}

#[test]
fn test_vs_colour () {
    assert_eq!( Color::GREEN, vs_colour( Some(1000)));
    assert_eq!( Color::RED, vs_colour( Some(-1000)));
    assert_eq!( Color::YELLOW, vs_colour( Some(300)));
    assert_eq!( Color::YELLOW, vs_colour( Some(-300)));
    assert_eq!( Color::YELLOW, vs_colour( None));
}

#[test]
fn test_flight_details () {
    let index_area = Rect::new( DATA_INDEX_POSITION.0, BAR_Y + 1, PANEL_WIDTH-1, PANEL_HEIGHT-1);

    let mut state = panel_state();
    let mut details = FlightDetailsScene::new( 10);

    state.flights = Arc::new( vec![ba123()]);
    details.on_tick( 1, &mut state);

    assert_eq!( Some(BAR_COLOR), state.surface.get_pixel( 0, BAR_Y));
    assert_eq!( Some(BAR_COLOR), state.surface.get_pixel( PANEL_WIDTH-1, BAR_Y));
    assert!( lit_in( state.surface.as_ref(), &FLIGHT_LINE_REGION) > 0);
    assert_eq!( 0, lit_in( state.surface.as_ref(), &index_area)); // single flight has no index

    // descending flight is drawn in red
    assert_eq!( vec![Color::RED], colors_in( state.surface.as_ref(), &FLIGHT_LINE_REGION));

    state.flights = Arc::new( vec![ba123(), Flight::with_callsign("KL2")]);
    details.on_tick( 2, &mut state);
    assert!( lit_in( state.surface.as_ref(), &index_area) > 0);

    state.flights = Arc::new( Vec::new());
    details.on_tick( 3, &mut state);
    assert_eq!( 0, lit( state.surface.as_ref()));
}

#[test]
fn test_telemetry () {
    let lines = telemetry_lines( &ba123());
    assert_eq!( ("ALT 35000ft".to_string(), Color::WHITE), lines[0]);
    assert_eq!( ("GS 450kt".to_string(), Color::WHITE), lines[1]);
    assert_eq!( ("VS -1200fpm".to_string(), Color::RED), lines[2]);

    let mut state = panel_state();
    let mut telemetry = TelemetryScene::new();

    state.flights = Arc::new( vec![ba123()]);
    telemetry.on_tick( 1, &mut state);
    let n = lit( state.surface.as_ref());
    assert!( n > 0);

    let mut climbing = ba123();
    climbing.vertical_speed = Some(800);
    state.flights = Arc::new( vec![climbing]);
    telemetry.on_tick( 2, &mut state);
    // rows below the GS baseline only hold the VS line
    let vs_area = Rect::new( 0, TELEMETRY_Y + 2*LINE_SPACING + 1, PANEL_WIDTH-1, TELEMETRY_Y + 3*LINE_SPACING);
    assert_eq!( vec![Color::GREEN], colors_in( state.surface.as_ref(), &vs_area));

    state.flights = Arc::new( Vec::new());
    telemetry.on_tick( 3, &mut state);
    assert_eq!( 0, lit( state.surface.as_ref()));
}
