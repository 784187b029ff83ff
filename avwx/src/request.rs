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

use std::fmt;

use crate::StationId;

/// Base URL of the METAR service.
pub const API_URL: &str = "http://avwx.rest/api/metar.php";

/// A geographic position in decimal degrees.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

/// A request of the station's report.
#[derive(Clone, PartialEq, Debug)]
pub enum Request {
    /// Report of the station.
    Station(StationId),
    /// Report of the station nearest to the position.
    Nearest(Position),
}

impl Request {
    /// Returns the URL that responds with the report as JSON.
    pub fn url(&self) -> String {
        match self {
            Self::Station(station) => format!("{API_URL}?station={station}&format=JSON"),
            Self::Nearest(Position {
                latitude,
                longitude,
            }) => format!("{API_URL}?lat={latitude}&lon={longitude}&format=JSON"),
        }
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Station(station) => write!(f, "report of {station}"),
            Self::Nearest(pos) => {
                write!(f, "report nearest to {}, {}", pos.latitude, pos.longitude)
            }
        }
    }
}
