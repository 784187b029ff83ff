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

use log::warn;
use metar::FlightRules;
use serde::{Deserialize, Serialize};

use crate::payload::{report_from_html, rules_from_json, StationRules};
use crate::StationId;

/// Message key of the station on the display.
pub const KEY_STATION: u32 = 0;
/// Message key of the condition on the display.
pub const KEY_CONDITION: u32 = 1;

/// The outcome of an update that is shown on the display.
#[derive(Clone, PartialEq, Debug)]
pub enum Status {
    /// The flight rules reported by a station.
    Report { station: String, rules: FlightRules },
    /// The service failed or responded with an error.
    UpstreamError,
    /// The nearest station is requested but the device can't be located.
    NeedLocation,
}

impl Status {
    /// Creates the status from the service's response.
    ///
    /// A JSON response is taken as is whereas the report embedded in an HTML
    /// page is parsed and classified.
    pub fn from_payload(body: &str, station: &StationId) -> Self {
        if body.trim_start().starts_with('{') {
            Self::from_json(body)
        } else {
            Self::from_html(body, station)
        }
    }

    /// Creates the status from a JSON response.
    pub fn from_json(body: &str) -> Self {
        match rules_from_json(body) {
            Ok(StationRules { station, rules }) => Self::Report { station, rules },
            Err(e) => {
                warn!("{e}");
                Self::UpstreamError
            }
        }
    }

    /// Creates the status from the station's report embedded in an HTML page.
    pub fn from_html(html: &str, station: &StationId) -> Self {
        Self::Report {
            station: station.to_string(),
            rules: report_from_html(html, station).flight_rules,
        }
    }

    /// Returns the message that is sent to the display.
    pub fn message(&self) -> Message {
        let (station, condition) = match self {
            Self::Report { station, rules } => (station.as_str(), rules.code()),
            Self::UpstreamError => ("GOT", "ERR"),
            Self::NeedLocation => ("NEED", "GEO"),
        };

        Message {
            station: station.to_string(),
            condition: condition.to_string(),
        }
    }
}

/// The key-value message sent to the display.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "KEY_STATION")]
    pub station: String,
    #[serde(rename = "KEY_CONDITION")]
    pub condition: String,
}
