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

//! Flight rules classification.
//!
//! The category is derived from the visibility and the ceiling, where the
//! more restrictive of both wins:
//!
//! | Category | Visibility  | Ceiling         |
//! |----------|-------------|-----------------|
//! | LIFR     | below 1 SM  | below 500 ft    |
//! | IFR      | below 3 SM  | below 1,000 ft  |
//! | MVFR     | below 5 SM  | below 3,000 ft  |
//! | VFR      | otherwise   | otherwise       |
//!
//! A value at a boundary falls into the better category.

use std::fmt;
use std::str::FromStr;

use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::fields::{CloudLayer, Visibility};
use crate::Error;

/// The ceiling in hundreds of feet if no layer constitutes a ceiling.
pub const UNLIMITED_CEILING: u16 = 99;

/// Flight rules category ordered from least to most restrictive.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FlightRules {
    /// Visual flight rules.
    #[cfg_attr(feature = "serde", serde(rename = "VFR"))]
    Vfr,
    /// Marginal visual flight rules.
    #[cfg_attr(feature = "serde", serde(rename = "MVFR"))]
    Mvfr,
    /// Instrument flight rules.
    #[cfg_attr(feature = "serde", serde(rename = "IFR"))]
    Ifr,
    /// Low instrument flight rules.
    #[cfg_attr(feature = "serde", serde(rename = "LIFR"))]
    Lifr,
    /// The category couldn't be determined.
    #[cfg_attr(feature = "serde", serde(rename = "ERR"))]
    Unknown,
}

impl FlightRules {
    /// Returns the category's code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Vfr => "VFR",
            Self::Mvfr => "MVFR",
            Self::Ifr => "IFR",
            Self::Lifr => "LIFR",
            Self::Unknown => "ERR",
        }
    }

    /// Classifies the visibility in statute miles and the ceiling in hundreds
    /// of feet.
    pub fn from_conditions(visibility: f32, ceiling: u16) -> Self {
        if visibility < 1.0 || ceiling < 5 {
            Self::Lifr
        } else if visibility < 3.0 || ceiling < 10 {
            Self::Ifr
        } else if visibility < 5.0 || ceiling < 30 {
            Self::Mvfr
        } else {
            Self::Vfr
        }
    }
}

impl FromStr for FlightRules {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "VFR" => Ok(Self::Vfr),
            "MVFR" => Ok(Self::Mvfr),
            "IFR" => Ok(Self::Ifr),
            "LIFR" => Ok(Self::Lifr),
            _ => Err(Error::InvalidFlightRules {
                code: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for FlightRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Returns the ceiling in hundreds of feet.
///
/// The ceiling is the base of the first layer that is broken, overcast or an
/// obscuration. Partially reported layers are skipped. Without any such layer
/// the ceiling is [`UNLIMITED_CEILING`].
pub fn ceiling(layers: &[CloudLayer]) -> u16 {
    layers
        .iter()
        .filter(|layer| layer.is_ceiling())
        .find_map(CloudLayer::base)
        .unwrap_or(UNLIMITED_CEILING)
}

/// Classifies the flight rules from the visibility and cloud layers.
///
/// A report without visibility is classified as [`FlightRules::Ifr`] since
/// a missing visibility must never result in visual flight rules.
pub fn classify(visibility: Option<&Visibility>, layers: &[CloudLayer]) -> FlightRules {
    let ceiling = ceiling(layers);

    let rules = match visibility {
        Some(visibility) => FlightRules::from_conditions(visibility.statute_miles(), ceiling),
        None => FlightRules::Ifr,
    };

    debug!(
        "classified {rules} (visibility={}, ceiling={ceiling})",
        visibility.map_or("none", Visibility::as_str)
    );
    rules
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Field;

    fn layers(tokens: &[&str]) -> Vec<CloudLayer> {
        tokens
            .iter()
            .map(|t| CloudLayer::from_token(t).expect("layer should parse"))
            .collect()
    }

    #[test]
    fn classifies_conditions() {
        assert_eq!(FlightRules::from_conditions(10.0, 99), FlightRules::Vfr);
        assert_eq!(FlightRules::from_conditions(4.0, 99), FlightRules::Mvfr);
        assert_eq!(FlightRules::from_conditions(4.0, 25), FlightRules::Mvfr);
        assert_eq!(FlightRules::from_conditions(4.0, 8), FlightRules::Ifr);
        assert_eq!(FlightRules::from_conditions(2.0, 99), FlightRules::Ifr);
        assert_eq!(FlightRules::from_conditions(0.5, 99), FlightRules::Lifr);
        assert_eq!(FlightRules::from_conditions(10.0, 4), FlightRules::Lifr);
    }

    #[test]
    fn boundaries_are_better_category() {
        assert_eq!(FlightRules::from_conditions(5.0, 30), FlightRules::Vfr);
        assert_eq!(FlightRules::from_conditions(3.0, 10), FlightRules::Mvfr);
        assert_eq!(FlightRules::from_conditions(1.0, 5), FlightRules::Ifr);
    }

    #[test]
    fn ceiling_is_first_broken_layer() {
        assert_eq!(ceiling(&layers(&["FEW010", "BKN030", "OVC050"])), 30);
        assert_eq!(ceiling(&layers(&["BKN///", "OVC050"])), 50);
        assert_eq!(ceiling(&layers(&["VV002"])), 2);
        assert_eq!(ceiling(&layers(&["FEW010", "SCT020"])), UNLIMITED_CEILING);
        assert_eq!(ceiling(&[]), UNLIMITED_CEILING);
    }

    #[test]
    fn missing_visibility_is_ifr() {
        assert_eq!(classify(None, &[]), FlightRules::Ifr);
        assert_eq!(classify(None, &layers(&["OVC002"])), FlightRules::Ifr);
    }

    #[test]
    fn classifies_with_layers() {
        let vis = Visibility::from_token("10SM").expect("visibility should parse");
        assert_eq!(classify(Some(&vis), &[]), FlightRules::Vfr);
        assert_eq!(
            classify(Some(&vis), &layers(&["SCT008", "BKN012"])),
            FlightRules::Mvfr
        );
    }

    #[test]
    fn parses_codes() {
        assert_eq!("LIFR".parse(), Ok(FlightRules::Lifr));
        assert_eq!(FlightRules::Mvfr.to_string(), "MVFR");
        assert!("ERR".parse::<FlightRules>().is_err());
    }
}
