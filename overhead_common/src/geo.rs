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

use std::fmt;
use serde::{Serialize,Deserialize};
use uom::si::{f64::Length, length::{foot,kilometer}};
use crate::{cartesian3::Cartesian3, geo_constants::{EARTH_RADIUS_KM, FAR_AWAY_KM}};

/// rectangular query zone given by its top-left and bottom-right corners (degrees)
#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq)]
pub struct Zone {
    pub tl_y: f64, // north
    pub tl_x: f64, // west
    pub br_y: f64, // south
    pub br_x: f64, // east
}

impl Zone {
    pub fn new (tl_y: f64, tl_x: f64, br_y: f64, br_x: f64)->Self {
        Zone { tl_y, tl_x, br_y, br_x }
    }

    /// the "north,south,west,east" bounds string used by flight feed queries
    pub fn bounds_string (&self)->String {
        format!("{},{},{},{}", self.tl_y, self.br_y, self.tl_x, self.br_x)
    }

    pub fn contains (&self, lat: f64, lon: f64)->bool {
        lat <= self.tl_y && lat >= self.br_y && lon >= self.tl_x && lon <= self.br_x
    }
}

impl Default for Zone {
    fn default()->Self { Zone::new( 62.61, -13.07, 49.71, 3.46) } // British isles
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Zone( n:{}, w:{}, s:{}, e:{} )", self.tl_y, self.tl_x, self.br_y, self.br_x)
    }
}

/// the observer location we rank aircraft against. `radius_km` is the distance from the earth
/// center, i.e. normally just the mean earth radius
#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq)]
pub struct HomeLocation {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default="default_home_radius")]
    pub radius_km: f64,
}

fn default_home_radius()->f64 { EARTH_RADIUS_KM }

impl HomeLocation {
    pub fn new (latitude: f64, longitude: f64)->Self {
        HomeLocation { latitude, longitude, radius_km: EARTH_RADIUS_KM }
    }

    pub fn to_cartesian3 (&self)->Cartesian3 {
        Cartesian3::from_spherical_degrees( self.latitude, self.longitude, self.radius_km)
    }
}

impl Default for HomeLocation {
    fn default()->Self { HomeLocation::new( 51.509865, -0.118092) } // London
}

/// radius of the sphere an aircraft at the given altitude moves on
pub fn radius_at_altitude_km (altitude_ft: f64)->f64 {
    EARTH_RADIUS_KM + Length::new::<foot>(altitude_ft).get::<kilometer>()
}

/// straight line distance (km) between home and an aircraft position, both projected into the same
/// earth-centered cartesian frame. This avoids the discontinuities of angular distance and takes the
/// altitude into account. Positions that are incomplete are reported as [`FAR_AWAY_KM`]
pub fn distance_from_home_km (home: &HomeLocation, lat: Option<f64>, lon: Option<f64>, altitude_ft: Option<f64>)->f64 {
    match (lat, lon, altitude_ft) {
        (Some(lat), Some(lon), Some(alt)) if lat.is_finite() && lon.is_finite() && alt.is_finite() => {
            let p = Cartesian3::from_spherical_degrees( lat, lon, radius_at_altitude_km(alt));
            p.distance_to( &home.to_cartesian3())
        }
        _ => FAR_AWAY_KM
    }
}
