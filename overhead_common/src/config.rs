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

//! RON based configuration loading. Config structs are plain serde types, this module only
//! knows how to find and parse them

use std::{env, fs, path::{Path,PathBuf}};
use serde::Deserialize;
use tracing::warn;
use crate::define_error;

/// env var that can point to a directory with config files
pub const CONFIG_DIR_VAR: &str = "OVERHEAD_CONFIGS";

define_error!{ pub ConfigError =
    IOError( #[from] std::io::Error ) : "config IO error {0}",
    RonError( #[from] ron::error::SpannedError ) : "config RON error {0}",
    NotFound(String) : "config not found {0}"
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// parse a config from a RON string
pub fn config_from_str<C> (s: &str) -> Result<C> where C: for <'a> Deserialize<'a> {
    Ok( ron::de::from_str(s)? )
}

/// load a config from an explicit path
pub fn load_config_path<C,P> (path: P) -> Result<C> where C: for <'a> Deserialize<'a>, P: AsRef<Path> {
    let data = fs::read( path.as_ref())?;
    Ok( ron::de::from_bytes( data.as_slice())? )
}

/// look up a config file by name: an existing path is used as is, otherwise we try
/// `$OVERHEAD_CONFIGS/<filename>` and then `./configs/<filename>`
pub fn find_config_file (filename: &str) -> Option<PathBuf> {
    let path = PathBuf::from(filename);
    if path.is_file() { return Some(path) }

    if let Ok(dir) = env::var(CONFIG_DIR_VAR) {
        let path = Path::new(&dir).join(filename);
        if path.is_file() { return Some(path) }
    }

    let path = Path::new("configs").join(filename);
    if path.is_file() { Some(path) } else { None }
}

/// load config using the [`find_config_file`] lookup
pub fn load_config<C> (filename: &str) -> Result<C> where C: for <'a> Deserialize<'a> {
    match find_config_file( filename) {
        Some(path) => load_config_path( &path),
        None => Err( ConfigError::NotFound( filename.to_string()))
    }
}

/// like [`load_config`] but falls back to the `Default` value if there is no such config file.
/// Files that exist but do not parse are still errors
pub fn load_config_or_default<C> (filename: &str) -> Result<C> where C: for <'a> Deserialize<'a> + Default {
    match load_config( filename) {
        Err(ConfigError::NotFound(_)) => {
            warn!("no config file {filename}, using defaults");
            Ok( C::default())
        }
        other => other
    }
}
