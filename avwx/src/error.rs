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

#[derive(Clone, PartialEq, Debug)]
pub enum Error {
    /// The station identifier is not exactly four chars long.
    InvalidStation { ident: String },
    /// The host failed to fetch the report.
    Fetch(String),
    /// The host failed to locate the device.
    Location(String),
    /// The host failed to deliver the status to the display.
    Delivery(String),
    /// The payload is no valid JSON or doesn't have the expected shape.
    Json(String),
    /// The upstream service reported an error.
    Upstream(String),
    /// A required key is missing in the upstream response.
    MissingKey(&'static str),
    /// The HTML page doesn't contain the station's report.
    MissingReport { station: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStation { ident } => {
                write!(f, "station \"{ident}\" should be four chars long")
            }
            Self::Fetch(e) => write!(f, "fetch failed: {e}"),
            Self::Location(e) => write!(f, "location unavailable: {e}"),
            Self::Delivery(e) => write!(f, "delivery failed: {e}"),
            Self::Json(e) => write!(f, "JSON error: {e}"),
            Self::Upstream(e) => write!(f, "upstream error: {e}"),
            Self::MissingKey(key) => write!(f, "missing required key: {key}"),
            Self::MissingReport { station } => {
                write!(f, "no report found for station {station}")
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}
