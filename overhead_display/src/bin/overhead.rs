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

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use overhead_common::{config::load_config_or_default, process::set_ctrlc_handler};
use overhead_flights::{fr24::Fr24Source, overhead::{Overhead, OverheadConfig}};
use overhead_display::{create_scheduler, scene::DisplayState, surface::{FrameCanvas, Surface, TerminalSurface, PANEL_HEIGHT, PANEL_WIDTH}, DisplayConfig};

#[derive(Parser, Debug)]
#[command(version, about, long_about = "show the flights overhead on a 64x32 pixel panel")]
pub struct Args {
    /// fetcher config (zone, home location, altitude limits, source)
    #[arg(short,long, default_value = "overhead.ron")]
    pub config: String,

    /// display config (frame rate, periods, banner)
    #[arg(short,long, default_value = "display.ron")]
    pub display: String,

    /// render the panel in the terminal
    #[arg(long)]
    pub preview: bool,

    /// run one fetch cycle, print the snapshot as JSON and exit
    #[arg(long)]
    pub once: bool,
}

fn main ()->Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::from_default_env())  // use RUST_LOG to set max level
        .with_writer( std::io::stderr)
        .init();

    let args = Args::parse();

    let config: OverheadConfig = load_config_or_default( &args.config)?;
    let source = Fr24Source::new( config.source.clone())?;
    let overhead = Overhead::new( config, source);

    if args.once {
        overhead.fetch_now();
        let data = overhead.take_data();
        println!("{}", serde_json::to_string_pretty( data.as_ref())?);
        return Ok(())
    }

    let display_config: DisplayConfig = load_config_or_default( &args.display)?;
    let surface: Box<dyn Surface> = if args.preview {
        Box::new( TerminalSurface::stdout( PANEL_WIDTH, PANEL_HEIGHT))
    } else {
        Box::new( FrameCanvas::panel())
    };
    let mut state = DisplayState::new( surface);
    let mut scheduler = create_scheduler( &display_config, &overhead)?;

    let stop_handle = scheduler.stop_handle();
    set_ctrlc_handler( move || stop_handle.stop())?;

    overhead.trigger();
    info!("press ctrl-c to stop");
    scheduler.run( &mut state)?;

    Ok(())
}
