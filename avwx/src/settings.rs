// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Station settings.
//!
//! The settings are restored from and persisted to a [`SettingsStore`]
//! provided by the host. They are changed by the configuration page, which
//! responds with its options as JSON.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use log::{debug, warn};
use serde::{Deserialize, Deserializer, Serialize};

use crate::Error;

/// Station used if none or an invalid one is configured.
pub const DEFAULT_STATION: &str = "KJFK";

/// Store key of the configured station.
pub const STATION_KEY: &str = "stationID";
/// Store key of the nearest station flag.
pub const NEAREST_KEY: &str = "getNearest";
const CONFIG_PAGE_URL: &str =
    "http://mdupont.com/Pebble-Config/pebble-metar-watchface-setup-3-2.html";

/// A four char station identifier, e.g. `KJFK`.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StationId(String);

impl StationId {
    /// Creates a station identifier.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStation`] if the identifier is not four chars long.
    ///
    /// [`InvalidStation`]: Error::InvalidStation
    pub fn try_new(ident: &str) -> Result<Self, Error> {
        if ident.chars().count() == 4 {
            Ok(Self(ident.to_uppercase()))
        } else {
            Err(Error::InvalidStation {
                ident: ident.to_string(),
            })
        }
    }

    /// Creates a station identifier or falls back to [`DEFAULT_STATION`] if
    /// the identifier is invalid.
    pub fn new_or_default(ident: &str) -> Self {
        Self::try_new(ident).unwrap_or_else(|e| {
            warn!("{e}, using {DEFAULT_STATION}");
            Self::default()
        })
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for StationId {
    fn default() -> Self {
        Self(DEFAULT_STATION.to_string())
    }
}

impl FromStr for StationId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_new(s)
    }
}

impl TryFrom<String> for StationId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_new(&value)
    }
}

impl From<StationId> for String {
    fn from(value: StationId) -> Self {
        value.0
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Key-value storage of the host that survives restarts.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: String);
}

impl SettingsStore for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.insert(key.to_string(), value);
    }
}

/// The options returned by the configuration page.
#[derive(Clone, Eq, PartialEq, Debug, Default, Deserialize)]
pub struct ConfigOptions {
    /// The station to report or an empty string to keep the current one.
    #[serde(rename = "stationID", default)]
    pub station_id: String,
    /// Whether to report the station nearest to the device.
    #[serde(rename = "getNearest", default, deserialize_with = "flag")]
    pub get_nearest: bool,
}

/// Reads a flag that is either a boolean or its string representation.
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Text(s) => s == "true",
    })
}

#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Settings {
    /// The configured station.
    pub station: StationId,
    /// Report the station nearest to the device instead of the configured.
    pub nearest: bool,
}

impl Settings {
    /// Restores the settings from the store.
    ///
    /// Missing or invalid values are replaced by their defaults.
    pub fn restore<S: SettingsStore>(store: &S) -> Self {
        let station = store
            .get(STATION_KEY)
            .map_or_else(StationId::default, |ident| StationId::new_or_default(&ident));
        let nearest = store.get(NEAREST_KEY).is_some_and(|v| v == "true");

        debug!("restored settings (station={station}, nearest={nearest})");
        Self { station, nearest }
    }

    /// Persists the settings to the store.
    pub fn persist<S: SettingsStore>(&self, store: &mut S) {
        store.set(STATION_KEY, self.station.to_string());
        store.set(NEAREST_KEY, self.nearest.to_string());
    }

    /// Applies the options from the configuration page.
    ///
    /// An empty station keeps the current station whereas the nearest flag is
    /// always taken.
    pub fn apply(&mut self, options: ConfigOptions) {
        if !options.station_id.is_empty() {
            self.station = StationId::new_or_default(&options.station_id);
        }

        self.nearest = options.get_nearest;
    }

    /// Applies the JSON response of the configuration page.
    ///
    /// An empty response means the page was closed without saving.
    ///
    /// # Errors
    ///
    /// Returns an error if the response is no valid JSON object of
    /// [`ConfigOptions`].
    pub fn apply_response(&mut self, response: &str) -> Result<(), Error> {
        if response.is_empty() {
            return Ok(());
        }

        let options: ConfigOptions = serde_json::from_str(response)?;
        debug!("applying {:?}", options);
        self.apply(options);
        Ok(())
    }

    /// Returns the URL of the configuration page showing these settings.
    pub fn config_page_url(&self) -> String {
        format!(
            "{CONFIG_PAGE_URL}?station={}&near={}",
            self.station, self.nearest
        )
    }
}
