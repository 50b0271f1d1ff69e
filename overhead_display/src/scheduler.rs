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

//! a cooperative, frame counted scheduler. Each registered callback is invoked every `period`
//! frames with the current frame number, in registration order, followed by a surface swap.
//! All callbacks run on the scheduler thread and must not block

use std::{fmt, sync::{Arc,atomic::{AtomicBool,Ordering}}, thread, time::{Duration,Instant}};
use tracing::{debug,info};
use crate::errors::{DisplayError, Result};

/// what the scheduler needs from the state it passes to its callbacks
pub trait FrameState {
    /// return and clear a pending scene-wide reset request
    fn take_reset (&mut self)->bool;

    fn swap (&mut self)->Result<()>;
}

pub trait FrameCallback<S> {
    fn on_tick (&mut self, frame: u64, state: &mut S);

    /// called for all registered callbacks when a reset was requested. Nothing to do by default
    fn on_reset (&mut self, _state: &mut S) {}
}

impl<S,F> FrameCallback<S> for F where F: FnMut(u64,&mut S) {
    fn on_tick (&mut self, frame: u64, state: &mut S) { self(frame, state) }
}

struct Registration<S> {
    name: String,
    period: u64,
    callback: Box<dyn FrameCallback<S>>,
}

/// can be used from other threads (e.g. a ctrl-c handler) to terminate [`Scheduler::run`]
#[derive(Clone)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn stop (&self) { self.0.store( true, Ordering::Relaxed) }
}

pub struct Scheduler<S> {
    frame: u64,
    frame_period: Duration,
    registrations: Vec<Registration<S>>,
    stop: Arc<AtomicBool>,
}

impl<S> fmt::Debug for Scheduler<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let regs: Vec<(&str,u64)> = self.registrations.iter().map( |r| (r.name.as_str(), r.period)).collect();
        write!( f, "Scheduler( frame: {}, period: {:?}, callbacks: {:?} )", self.frame, self.frame_period, regs)
    }
}

impl<S> Scheduler<S> where S: FrameState {
    pub fn new (frame_period: Duration)->Self {
        Scheduler { frame: 0, frame_period, registrations: Vec::new(), stop: Arc::new( AtomicBool::new(false)) }
    }

    /// the number of ticks executed so far
    pub fn frame (&self)->u64 { self.frame }

    pub fn frame_period (&self)->Duration { self.frame_period }

    pub fn register (&mut self, name: impl Into<String>, period: u64, callback: impl FrameCallback<S> + 'static)->Result<()> {
        let name = name.into();
        if period == 0 {
            return Err( DisplayError::InvalidPeriod( format!("{name} has period 0")))
        }
        if self.registrations.iter().any( |r| r.name == name) {
            return Err( DisplayError::DuplicateCallback( name))
        }

        debug!("registered {name} every {period} frames");
        self.registrations.push( Registration { name, period, callback: Box::new(callback) });
        Ok(())
    }

    pub fn names (&self)->Vec<&str> {
        self.registrations.iter().map( |r| r.name.as_str()).collect()
    }

    /// execute one frame: invoke all due callbacks and then swap
    pub fn tick (&mut self, state: &mut S)->Result<()> {
        self.frame += 1;
        let frame = self.frame;

        for i in 0..self.registrations.len() {
            let reg = &mut self.registrations[i];
            if frame % reg.period == 0 {
                reg.callback.on_tick( frame, state);

                if state.take_reset() {
                    debug!("scene reset requested by {} in frame {frame}", self.registrations[i].name);
                    self.reset( state);
                }
            }
        }

        state.swap()
    }

    /// invoke `on_reset` of all callbacks in registration order
    pub fn reset (&mut self, state: &mut S) {
        for reg in self.registrations.iter_mut() {
            reg.callback.on_reset( state);
        }
    }

    /// run ticks at the configured frame rate until stopped. If a frame takes longer than the frame
    /// period we do not try to catch up, i.e. the frame counter is never skipped
    pub fn run (&mut self, state: &mut S)->Result<()> {
        info!("running {} callbacks at {:?} per frame", self.registrations.len(), self.frame_period);
        let mut next = Instant::now();

        while !self.stop.load( Ordering::Relaxed) {
            self.tick( state)?;

            next += self.frame_period;
            let now = Instant::now();
            if next > now {
                thread::sleep( next - now);
            } else {
                next = now;
            }
        }

        info!("scheduler stopped after {} frames", self.frame);
        Ok(())
    }

    /// run a fixed number of ticks without pacing
    pub fn run_frames (&mut self, n: u64, state: &mut S)->Result<()> {
        for _ in 0..n { self.tick( state)? }
        Ok(())
    }

    pub fn stop (&self) { self.stop.store( true, Ordering::Relaxed) }

    pub fn stop_handle (&self)->StopHandle { StopHandle( self.stop.clone()) }
}
