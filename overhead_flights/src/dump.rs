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

//! optional JSONL dump of raw area listings. Records are queued through a bounded channel and
//! written by a background thread so that a slow disk never stalls a fetch cycle. If the queue
//! is full the record is dropped

use std::{fs::{self,OpenOptions}, io::{BufWriter,Write}, path::PathBuf, sync::{Arc,Mutex,atomic::{AtomicBool,Ordering}}, thread::{self,JoinHandle}, time::{Duration,Instant}};
use serde::{Serialize,Deserialize};
use kanal::{Sender,Receiver,ReceiveErrorTimeout};
use tracing::{debug,warn,error};
use overhead_common::datetime::{millis, secs, deserialize_duration, serialize_duration, local_now, local_datetime_string, EpochMillis};
use crate::{errors::Result, source::FlightSummary};

#[derive(Serialize,Deserialize,Debug,Clone)]
pub struct DumpConfig {
    pub path: PathBuf,

    /// min time between two records
    #[serde(default="default_interval", serialize_with="serialize_duration",deserialize_with="deserialize_duration")]
    pub interval: Duration,

    /// max time records stay buffered before they get written
    #[serde(default="default_flush_every", serialize_with="serialize_duration",deserialize_with="deserialize_duration")]
    pub flush_every: Duration,

    #[serde(default="default_max_queue")]
    pub max_queue: usize,
}

fn default_interval()->Duration { secs(30) }
fn default_flush_every()->Duration { secs(3) }
fn default_max_queue()->usize { 10 }

impl DumpConfig {
    pub fn new (path: impl Into<PathBuf>)->Self {
        DumpConfig { path: path.into(), interval: default_interval(), flush_every: default_flush_every(), max_queue: default_max_queue() }
    }
}

/// one line of the dump file
#[derive(Serialize,Deserialize,Debug,Clone)]
pub struct DumpRecord {
    pub ts: i64, // epoch secs
    pub ts_iso: String,
    pub bounds: String,
    pub count: usize,
    pub flights: Vec<FlightSummary>,
}

impl DumpRecord {
    pub fn new (bounds: String, flights: Vec<FlightSummary>)->Self {
        DumpRecord {
            ts: EpochMillis::now().secs(),
            ts_iso: local_datetime_string( &local_now()),
            bounds,
            count: flights.len(),
            flights
        }
    }
}

pub struct FlightDumper {
    config: DumpConfig,
    tx: Sender<DumpRecord>,
    keep_running: Arc<AtomicBool>,
    last_submit: Mutex<Option<Instant>>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl FlightDumper {
    /// create the dump directory (if needed) and start the writer thread
    pub fn start (config: DumpConfig)->Result<Self> {
        if let Some(dir) = config.path.parent() {
            if !dir.as_os_str().is_empty() { fs::create_dir_all( dir)?; }
        }

        let (tx,rx) = kanal::bounded( config.max_queue.max(1));
        let keep_running = Arc::new( AtomicBool::new(true));

        let path = config.path.clone();
        let flush_every = config.flush_every;
        let kr = keep_running.clone();
        let task = thread::Builder::new()
            .name( "flight-dump".to_string())
            .spawn( move || {
                if let Err(e) = write_records( path, flush_every, rx, kr) {
                    error!("flight dump writer terminated: {e}");
                }
            })?;

        Ok( FlightDumper { config, tx, keep_running, last_submit: Mutex::new(None), task: Mutex::new( Some(task)) } )
    }

    /// queue a listing if the dump interval has passed since the last queued record.
    /// Returns true if the record was accepted
    pub fn submit (&self, bounds: String, flights: &[FlightSummary])->bool {
        let now = Instant::now();
        let mut last_submit = self.last_submit.lock().unwrap_or_else( |e| e.into_inner());
        if let Some(last) = *last_submit {
            if now.duration_since(last) < self.config.interval { return false }
        }

        match self.tx.try_send( DumpRecord::new( bounds, flights.to_vec())) {
            Ok(true) => { *last_submit = Some(now); true }
            Ok(false) => { warn!("flight dump queue full, record dropped"); false }
            Err(_) => { warn!("flight dump writer closed, record dropped"); false }
        }
    }

    /// stop the writer thread after it has written everything that is queued
    pub fn stop (&self) {
        self.keep_running.store( false, Ordering::Relaxed);
        let task = self.task.lock().unwrap_or_else( |e| e.into_inner()).take();
        if let Some(task) = task {
            if task.join().is_err() { error!("flight dump writer panicked"); }
        }
    }
}

impl Drop for FlightDumper {
    fn drop (&mut self) { self.stop() }
}

fn write_records (path: PathBuf, flush_every: Duration, rx: Receiver<DumpRecord>, keep_running: Arc<AtomicBool>)->Result<()> {
    let file = OpenOptions::new().create(true).append(true).open( &path)?;
    let mut writer = BufWriter::new( file);
    let mut pending = 0;
    let mut last_flush = Instant::now();

    loop {
        match rx.recv_timeout( millis(200)) {
            Ok(record) => {
                serde_json::to_writer( &mut writer, &record)?;
                writer.write_all( b"\n")?;
                pending += 1;
            }
            Err(ReceiveErrorTimeout::Timeout) => {
                if !keep_running.load( Ordering::Relaxed) { break }
            }
            Err(_) => break
        }

        if pending > 0 && last_flush.elapsed() >= flush_every {
            writer.flush()?;
            debug!("flushed {pending} records to {path:?}");
            pending = 0;
            last_flush = Instant::now();
        }
    }

    // drain what is still queued
    while let Ok(Some(record)) = rx.try_recv() {
        serde_json::to_writer( &mut writer, &record)?;
        writer.write_all( b"\n")?;
    }
    writer.flush()?;
    Ok(())
}
