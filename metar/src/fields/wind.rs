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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::field::{substr, unexpected};
use crate::{Error, Field};

/// Surface wind as direction and speed, e.g. `18012G20KT`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Wind {
    direction: String,
    speed: String,
}

impl Wind {
    /// The direction the wind is blowing from with a degree mark, e.g. `180°`.
    #[inline]
    pub fn direction(&self) -> &str {
        &self.direction
    }

    /// The speed including gusts and unit, e.g. `12G20KT`.
    #[inline]
    pub fn speed(&self) -> &str {
        &self.speed
    }

    /// Returns the direction in degree or `None` if the wind is variable.
    pub fn degrees(&self) -> Option<u16> {
        parse_digits!(u16, self.direction.trim_end_matches('°')).ok()
    }

    /// Returns the sustained wind speed in knots.
    pub fn knots(&self) -> Option<u16> {
        let end = self
            .speed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(self.speed.len());
        parse_digits!(u16, &self.speed[..end]).ok()
    }

    /// Returns the gust speed in knots if the wind is gusting.
    pub fn gusts(&self) -> Option<u16> {
        let (_, gusts) = self.speed.split_once('G')?;
        let end = gusts
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(gusts.len());
        parse_digits!(u16, &gusts[..end]).ok()
    }
}

impl Field for Wind {
    const NAME: &'static str = "wind";

    fn matches(token: &str) -> bool {
        token.ends_with("KT") || token.ends_with("KTS") || (token.len() > 7 && token.contains('G'))
    }

    fn from_token(token: &str) -> Result<Self, Error> {
        if !Self::matches(token) {
            return Err(unexpected::<Self>(token, "dddffKT or dddffGggKT"));
        }

        Ok(Self {
            direction: format!("{}°", substr(token, 0, 3)),
            speed: substr(token, 3, token.len()).to_string(),
        })
    }
}

impl fmt::Display for Wind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.direction, self.speed)
    }
}

/// Variation of the wind direction, e.g. `180V240`.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct WindVariation {
    pub from: u16,
    pub to: u16,
}

impl Field for WindVariation {
    const NAME: &'static str = "wind variation";

    fn matches(token: &str) -> bool {
        token.len() == 7
            && token.as_bytes()[3] == b'V'
            && parse_digits!(u16, substr(token, 0, 3)).is_ok()
            && parse_digits!(u16, substr(token, 4, 7)).is_ok()
    }

    fn from_token(token: &str) -> Result<Self, Error> {
        if !Self::matches(token) {
            return Err(unexpected::<Self>(token, "dddVddd"));
        }

        Ok(Self {
            from: parse_digits!(u16, substr(token, 0, 3))?,
            to: parse_digits!(u16, substr(token, 4, 7))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wind() {
        let wind = Wind::from_token("18005KT").expect("wind should parse");
        assert_eq!(wind.direction(), "180°");
        assert_eq!(wind.speed(), "05KT");
        assert_eq!(wind.degrees(), Some(180));
        assert_eq!(wind.knots(), Some(5));
        assert_eq!(wind.gusts(), None);
    }

    #[test]
    fn parses_gusting_wind() {
        let wind = Wind::from_token("18012G20KT").expect("wind should parse");
        assert_eq!(wind.direction(), "180°");
        assert_eq!(wind.speed(), "12G20KT");
        assert_eq!(wind.knots(), Some(12));
        assert_eq!(wind.gusts(), Some(20));
    }

    #[test]
    fn parses_variable_wind() {
        let wind = Wind::from_token("VRB03KT").expect("wind should parse");
        assert_eq!(wind.direction(), "VRB°");
        assert_eq!(wind.degrees(), None);
        assert_eq!(wind.knots(), Some(3));
    }

    #[test]
    fn matches_gusts_without_unit() {
        assert!(Wind::matches("27015G25"));
        assert!(Wind::matches("27015KTS"));
        assert!(!Wind::matches("10SM"));
    }

    #[test]
    fn parses_variation() {
        assert_eq!(
            WindVariation::from_token("180V240"),
            Ok(WindVariation { from: 180, to: 240 })
        );
        assert!(!WindVariation::matches("18005KT"));
        assert!(!WindVariation::matches("ABCVDEF"));
    }
}
