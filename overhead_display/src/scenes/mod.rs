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

//! the concrete scenes of the 64x32 panel. Idle mode shows the banner and the day of the week,
//! flight mode the journey band plus either the flight details line or the telemetry block

mod banner;
pub use banner::*;

mod day;
pub use day::*;

mod journey;
pub use journey::*;

mod flight_details;
pub use flight_details::*;

mod telemetry;
pub use telemetry::*;
