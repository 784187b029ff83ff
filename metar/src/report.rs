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

use log::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::fields::*;
use crate::rules::{self, FlightRules};
use crate::{Field, Tokens};

/// Shown for an altimeter setting that isn't reported.
pub const ALTIMETER_SENTINEL: &str = ".....";
/// Shown for a temperature or dewpoint that isn't reported.
pub const TEMPERATURE_SENTINEL: &str = "...";
/// Shown for an observation time that isn't reported.
pub const TIME_SENTINEL: &str = "..:..Z";
/// Shown for a wind direction that isn't reported.
pub const WIND_DIRECTION_SENTINEL: &str = "...°";
/// Shown for a wind speed that isn't reported.
pub const WIND_SPEED_SENTINEL: &str = "..KT";
/// Shown for a visibility that isn't reported.
pub const VISIBILITY_SENTINEL: &str = "...";

/// Markers that are removed before any field is claimed.
const MARKERS: [&str; 2] = ["AUTO", "CLR"];
/// Report types that may precede the report body.
const REPORT_TYPES: [&str; 2] = ["METAR", "SPECI"];
/// Everything from here on are remarks.
const REMARKS: &str = " RMK ";

/// A parsed METAR report.
///
/// Every field that isn't found in the report is `None` and has its
/// sentinel returned by the `*_str` accessors. The report is always built from
/// a single raw report; parsing never fails.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Report {
    pub altimeter: Option<Altimeter>,
    pub temperature: Option<Temperature>,
    pub dewpoint: Option<Temperature>,
    pub time: Option<ObservationTime>,
    pub wind: Option<Wind>,
    pub visibility: Option<Visibility>,
    /// All cloud layers in the order in which they are reported.
    pub clouds: Vec<CloudLayer>,
    /// Tokens that are no field of this report, e.g. present weather.
    pub remainder: Vec<String>,
    pub flight_rules: FlightRules,
}

impl Report {
    /// Parses the report's body.
    ///
    /// The body may be preceded by the report type (`METAR` or `SPECI`) and
    /// is followed by the station identifier. Remarks are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use metar::{FlightRules, Report};
    ///
    /// let report = Report::parse("KJFK 181851Z 18005KT 10SM BKN030 OVC050 22/18 A2992");
    /// assert_eq!(report.time_str(), "18:51Z");
    /// assert_eq!(report.flight_rules, FlightRules::Vfr);
    /// ```
    pub fn parse(raw: &str) -> Self {
        let body = strip_remarks(raw);
        let mut tokens = Tokens::new(body);

        strip_markers(&mut tokens);

        let altimeter = tokens.claim_back::<Altimeter>();
        let (temperature, dewpoint) = temperatures(&mut tokens);

        // the station identifier or whatever is in its place
        if let Some(token) = tokens.pop_front() {
            trace!("skipping token {token}");
        }

        let time = tokens.claim_front::<ObservationTime>();
        let wind = tokens.claim_front::<Wind>();
        if let Some(variation) = tokens.claim_front::<WindVariation>() {
            trace!("ignoring {variation:?}");
        }

        let visibility = visibility(&mut tokens);

        // runway visual range
        tokens.discard(|t| t.starts_with('R') && t.contains('/'));

        let clouds = tokens.claim_all::<CloudLayer>();
        let flight_rules = rules::classify(visibility.as_ref(), &clouds);

        let report = Self {
            altimeter,
            temperature,
            dewpoint,
            time,
            wind,
            visibility,
            clouds,
            remainder: tokens.into_remainder(),
            flight_rules,
        };

        debug!("parsed report: {:?}", report);
        report
    }

    /// Returns the altimeter setting or its sentinel.
    pub fn altimeter_str(&self) -> &str {
        self.altimeter
            .as_ref()
            .map_or(ALTIMETER_SENTINEL, Altimeter::as_str)
    }

    /// Returns the temperature or its sentinel.
    pub fn temperature_str(&self) -> &str {
        self.temperature
            .as_ref()
            .map_or(TEMPERATURE_SENTINEL, Temperature::as_str)
    }

    /// Returns the dewpoint or its sentinel.
    pub fn dewpoint_str(&self) -> &str {
        self.dewpoint
            .as_ref()
            .map_or(TEMPERATURE_SENTINEL, Temperature::as_str)
    }

    /// Returns the observation time or its sentinel.
    pub fn time_str(&self) -> &str {
        self.time
            .as_ref()
            .map_or(TIME_SENTINEL, ObservationTime::as_str)
    }

    /// Returns the wind direction or its sentinel.
    pub fn wind_direction_str(&self) -> &str {
        self.wind
            .as_ref()
            .map_or(WIND_DIRECTION_SENTINEL, Wind::direction)
    }

    /// Returns the wind speed or its sentinel.
    pub fn wind_speed_str(&self) -> &str {
        self.wind.as_ref().map_or(WIND_SPEED_SENTINEL, Wind::speed)
    }

    /// Returns the visibility or its sentinel.
    pub fn visibility_str(&self) -> &str {
        self.visibility
            .as_ref()
            .map_or(VISIBILITY_SENTINEL, Visibility::as_str)
    }

    /// Returns the ceiling in hundreds of feet.
    pub fn ceiling(&self) -> u16 {
        rules::ceiling(&self.clouds)
    }

    /// Returns a summary of the cloud layers.
    ///
    /// The summary contains the last two reported layers separated by a space
    /// with the highest layer last. Note that the ceiling is determined from
    /// all layers and may not be part of the summary.
    pub fn clouds_summary(&self) -> String {
        let skip = self.clouds.len().saturating_sub(2);
        self.clouds[skip..]
            .iter()
            .map(CloudLayer::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<&str> for Report {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

fn strip_remarks(raw: &str) -> &str {
    match raw.find(REMARKS) {
        Some(index) => &raw[..index],
        None => raw,
    }
}

fn strip_markers(tokens: &mut Tokens<'_>) {
    if tokens.front().is_some_and(|t| REPORT_TYPES.contains(&t)) {
        tokens.pop_front();
    }

    for marker in MARKERS {
        if tokens.remove_first(marker) {
            trace!("removed marker {marker}");
        }
    }
}

fn temperatures(tokens: &mut Tokens<'_>) -> (Option<Temperature>, Option<Temperature>) {
    match tokens.claim_back::<Temperatures>() {
        Some(Temperatures {
            temperature,
            dewpoint,
        }) => (temperature, dewpoint),
        None => (None, None),
    }
}

/// Claims the visibility from the first or the first two tokens.
fn visibility(tokens: &mut Tokens<'_>) -> Option<Visibility> {
    let first = tokens.front()?;

    if Visibility::matches(first) {
        return tokens.claim_front();
    }

    match tokens.get(1) {
        Some(second) if Visibility::is_mixed(first, second) => {
            tokens.skip(2);
            Visibility::from_mixed(first, second).ok()
        }
        _ => {
            trace!("no visibility at {first}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_remarks() {
        assert_eq!(strip_remarks("A2992 RMK AO2"), "A2992");
        assert_eq!(strip_remarks("A2992"), "A2992");
    }

    #[test]
    fn strips_markers() {
        let mut tokens = Tokens::new("METAR KJFK AUTO 181851Z CLR 10SM");
        strip_markers(&mut tokens);
        assert_eq!(tokens.into_remainder(), vec!["KJFK", "181851Z", "10SM"]);
    }

    #[test]
    fn claims_mixed_visibility() {
        let mut tokens = Tokens::new("1 1/2SM BR");
        let vis = visibility(&mut tokens).expect("visibility should be claimed");
        assert_eq!(vis.as_str(), "1.5");
        assert_eq!(tokens.into_remainder(), vec!["BR"]);
    }

    #[test]
    fn keeps_token_without_visibility() {
        let mut tokens = Tokens::new("5000 BR");
        assert_eq!(visibility(&mut tokens), None);
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn summarizes_last_two_layers() {
        let report = Report::parse("KJFK 181851Z 18005KT 10SM FEW008 BKN030 OVC050 22/18 A2992");
        assert_eq!(report.clouds_summary(), "BKN030 OVC050");
        assert_eq!(report.ceiling(), 30);

        let report = Report::parse("KJFK 181851Z 18005KT 10SM OVC005 22/18 A2992");
        assert_eq!(report.clouds_summary(), "OVC005");

        let report = Report::parse("KJFK 181851Z 18005KT 10SM 22/18 A2992");
        assert_eq!(report.clouds_summary(), "");
    }

    #[test]
    fn ceiling_may_be_outside_summary() {
        let report = Report::parse("KJFK 181851Z 18005KT 10SM BKN004 SCT030 FEW050 22/18 A2992");
        assert_eq!(report.clouds_summary(), "SCT030 FEW050");
        assert_eq!(report.ceiling(), 4);
        assert_eq!(report.flight_rules, FlightRules::Lifr);
    }
}
