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

use std::ops::Sub;
use serde::{Serialize,Deserialize};
use crate::{sin, cos, rad, sqrt, pow2};

/// note that we do not use uom here to allow for abstract coordinate systems. Callers decide
/// on the length unit (our distance ranking uses km)
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct Cartesian3 {
    pub x: f64,
    pub y: f64,
    pub z: f64
}

impl Cartesian3 {
    /// project a lat/lon position (degrees) onto a sphere with the given radius.
    /// The y axis points to the north pole, z to (lat=0,lon=0) and x to (lat=0,lon=90).
    /// Since this is continuous over the whole sphere there is no discontinuity at the antimeridian
    pub fn from_spherical_degrees (lat_deg: f64, lon_deg: f64, radius: f64)->Cartesian3 {
        let lat = rad(lat_deg);
        let lon = rad(lon_deg);

        Cartesian3 {
            x: radius * cos(lat) * sin(lon),
            y: radius * sin(lat),
            z: radius * cos(lat) * cos(lon),
        }
    }

    pub fn length(&self) -> f64 {
        sqrt( pow2(self.x) + pow2(self.y) + pow2(self.z))
    }

    /// straight line (chord) distance between two points
    pub fn distance_to (&self, p: &Cartesian3)->f64 {
        (*p - *self).length()
    }
}

impl std::fmt::Display for Cartesian3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[ {}, {}, {} ]", self.x, self.y, self.z)
    }
}

impl Sub for Cartesian3 {
    type Output = Self;

    fn sub (self, rhs: Self) -> Self {
        Cartesian3 { x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z }
    }
}
