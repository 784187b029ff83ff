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

/// Observation time in UTC as `HH:MMZ`.
///
/// The token is `DDHHMMZ`. The day of month is kept apart from the time.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObservationTime {
    day: Option<u8>,
    time: String,
}

impl ObservationTime {
    /// Returns the time formatted as `HH:MMZ`.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.time
    }

    /// The day of month if the report included it.
    #[inline]
    pub fn day(&self) -> Option<u8> {
        self.day
    }

    pub fn hour(&self) -> Option<u8> {
        parse_digits!(u8, substr(&self.time, 0, 2)).ok()
    }

    pub fn minute(&self) -> Option<u8> {
        parse_digits!(u8, substr(&self.time, 3, 5)).ok()
    }
}

impl Field for ObservationTime {
    const NAME: &'static str = "observation time";

    fn matches(token: &str) -> bool {
        token.ends_with('Z')
    }

    fn from_token(token: &str) -> Result<Self, Error> {
        if !Self::matches(token) {
            return Err(unexpected::<Self>(token, "DDHHMMZ"));
        }

        // the day is omitted only by reports that give HHMMZ
        let (day, hhmm) = match token.len() {
            7 => (
                parse_digits!(u8, substr(token, 0, 2)).ok(),
                substr(token, 2, token.len()),
            ),
            _ => (None, token),
        };

        Ok(Self {
            day,
            time: format!("{}:{}", substr(hhmm, 0, 2), substr(hhmm, 2, hhmm.len())),
        })
    }
}

impl fmt::Display for ObservationTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_time() {
        let t = ObservationTime::from_token("181851Z").expect("time should parse");
        assert_eq!(t.as_str(), "18:51Z");
        assert_eq!(t.day(), Some(18));
        assert_eq!(t.hour(), Some(18));
        assert_eq!(t.minute(), Some(51));
    }

    #[test]
    fn parses_time_without_day() {
        let t = ObservationTime::from_token("1851Z").expect("time should parse");
        assert_eq!(t.as_str(), "18:51Z");
        assert_eq!(t.day(), None);
    }

    #[test]
    fn rejects_other_tokens() {
        assert!(!ObservationTime::matches("18005KT"));
    }
}
