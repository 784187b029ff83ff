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

//! Upstream payloads.
//!
//! The service responds either with JSON that already carries the flight
//! rules or with an HTML page that embeds the raw report in a `code` element:
//!
//! ```html
//! <code>KJFK 181851Z 18005KT 10SM BKN030 OVC050 22/18 A2992 RMK AO2</code>
//! ```

use log::{debug, warn};
use metar::{FlightRules, Report};
use serde_json::{Map, Value};

use crate::{Error, StationId};

const ERROR_KEY: &str = "Error";
const FLIGHT_RULES_KEY: &str = "Flight-Rules";
const STATION_KEY: &str = "Station";
const REMARKS: &str = " RMK ";

/// The flight rules of a station as reported by the service.
#[derive(Clone, PartialEq, Debug)]
pub struct StationRules {
    pub station: String,
    pub rules: FlightRules,
}

/// Reads the flight rules from a JSON response.
///
/// The flight rules are taken as they are without parsing any report. An
/// unknown category is [`FlightRules::Unknown`].
///
/// # Errors
///
/// Returns an error if the response has an `Error` key, has no
/// `Flight-Rules` key or is no JSON object.
pub fn rules_from_json(body: &str) -> Result<StationRules, Error> {
    let object: Map<String, Value> = serde_json::from_str(body)?;

    if let Some(err) = object.get(ERROR_KEY) {
        return Err(Error::Upstream(match err {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }));
    }

    let rules = object
        .get(FLIGHT_RULES_KEY)
        .ok_or(Error::MissingKey(FLIGHT_RULES_KEY))?;

    let rules = match rules.as_str().map(str::parse::<FlightRules>) {
        Some(Ok(rules)) => rules,
        _ => {
            warn!("unknown flight rules {rules}");
            FlightRules::Unknown
        }
    };

    let station = object
        .get(STATION_KEY)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    debug!("{station} reports {rules}");
    Ok(StationRules { station, rules })
}

/// Isolates the station's raw report from an HTML page.
///
/// The report is the text following `<code>` and the station up to the next
/// tag, without remarks.
///
/// # Errors
///
/// Returns [`MissingReport`] if the page contains no report of the station.
///
/// [`MissingReport`]: Error::MissingReport
pub fn extract_report<'a>(html: &'a str, station: &StationId) -> Result<&'a str, Error> {
    let marker = format!("<code>{station} ");

    let start = html
        .find(&marker)
        .map(|index| index + marker.len())
        .ok_or_else(|| Error::MissingReport {
            station: station.to_string(),
        })?;

    let body = &html[start..];
    let body = &body[..body.find('<').unwrap_or(body.len())];
    let body = &body[..body.find(REMARKS).unwrap_or(body.len())];

    Ok(body)
}

/// Parses the station's report embedded in an HTML page.
///
/// A page without report is logged and parsed as empty report, which results
/// in IFR.
pub fn report_from_html(html: &str, station: &StationId) -> Report {
    let raw = extract_report(html, station).unwrap_or_else(|e| {
        warn!("{e}");
        ""
    });

    Report::parse(raw)
}
