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

use super::Fraction;
use crate::field::{substr, unexpected};
use crate::{Error, Field};

/// Metric code for a visibility of 10 km or more.
pub const METRIC_UNLIMITED: &str = "9999";

/// Prevailing visibility in statute miles.
///
/// The visibility is reported as at most three chars where a leading zero is
/// dropped, e.g. `10`, `1.5` or `.25`. The value in statute miles is the one
/// that is reported.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Visibility {
    text: String,
    miles: f32,
}

impl Visibility {
    /// Creates a visibility from a value in statute miles.
    pub fn from_miles(value: f64) -> Self {
        let s = value.to_string();
        let text = match s.strip_prefix('0') {
            Some(fractional) if !fractional.is_empty() => substr(fractional, 0, 3),
            // a zero visibility would otherwise be shown as nothing
            Some(_) => "0",
            None => substr(&s, 0, 3),
        };

        Self {
            text: text.to_string(),
            miles: text.parse().unwrap_or(value as f32),
        }
    }

    /// Creates a visibility from a mixed number like `1 1/2SM` that is split
    /// into two tokens.
    ///
    /// # Errors
    ///
    /// Returns an error if the tokens aren't a whole number followed by a
    /// fraction in statute miles.
    pub fn from_mixed(whole: &str, fraction: &str) -> Result<Self, Error> {
        if !Self::is_mixed(whole, fraction) {
            return Err(unexpected::<Self>(whole, "whole number followed by a fraction in SM"));
        }

        let whole: Fraction = whole.parse()?;
        let fraction: Fraction = fraction.trim_end_matches("SM").parse()?;
        Ok(Self::from_miles((whole + fraction).value()))
    }

    /// Returns `true` if the two tokens form a mixed number visibility.
    pub fn is_mixed(whole: &str, fraction: &str) -> bool {
        !whole.is_empty()
            && whole.bytes().all(|b| b.is_ascii_digit())
            && fraction.ends_with("SM")
            && fraction.contains('/')
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn statute_miles(&self) -> f32 {
        self.miles
    }
}

impl Field for Visibility {
    const NAME: &'static str = "visibility";

    fn matches(token: &str) -> bool {
        token.contains("SM") || token == METRIC_UNLIMITED
    }

    fn from_token(token: &str) -> Result<Self, Error> {
        if token == METRIC_UNLIMITED {
            return Ok(Self::from_miles(10.0));
        }

        let Some((value, _)) = token.split_once("SM") else {
            return Err(unexpected::<Self>(token, "statute miles or 9999"));
        };

        // P6SM is more than and M1/4SM less than the value
        let value = value
            .strip_prefix('P')
            .or_else(|| value.strip_prefix('M'))
            .unwrap_or(value);

        Ok(Self::from_miles(value.parse::<Fraction>()?.value()))
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_statute_miles() {
        let vis = Visibility::from_token("3SM").expect("visibility should parse");
        assert_eq!(vis.as_str(), "3");
        assert_eq!(vis.statute_miles(), 3.0);

        let vis = Visibility::from_token("10SM").expect("visibility should parse");
        assert_eq!(vis.as_str(), "10");
    }

    #[test]
    fn parses_metric_unlimited() {
        let vis = Visibility::from_token("9999").expect("visibility should parse");
        assert_eq!(vis.as_str(), "10");
        assert_eq!(vis.statute_miles(), 10.0);
    }

    #[test]
    fn drops_leading_zero() {
        let vis = Visibility::from_token("1/2SM").expect("visibility should parse");
        assert_eq!(vis.as_str(), ".5");
        assert_eq!(vis.statute_miles(), 0.5);

        let vis = Visibility::from_token("1/16SM").expect("visibility should parse");
        assert_eq!(vis.as_str(), ".06");

        let vis = Visibility::from_token("0SM").expect("visibility should parse");
        assert_eq!(vis.as_str(), "0");
    }

    #[test]
    fn parses_mixed_numbers() {
        let vis = Visibility::from_mixed("1", "1/2SM").expect("visibility should parse");
        assert_eq!(vis.as_str(), "1.5");
        assert_eq!(vis.statute_miles(), 1.5);

        // truncated to three chars
        let vis = Visibility::from_mixed("2", "3/4SM").expect("visibility should parse");
        assert_eq!(vis.as_str(), "2.7");
    }

    #[test]
    fn parses_bounds() {
        let vis = Visibility::from_token("P6SM").expect("visibility should parse");
        assert_eq!(vis.as_str(), "6");

        let vis = Visibility::from_token("M1/4SM").expect("visibility should parse");
        assert_eq!(vis.as_str(), ".25");
    }

    #[test]
    fn rejects_invalid_visibility() {
        assert!(!Visibility::matches("5000"));
        assert!(Visibility::from_token("1/0SM").is_err());
        assert!(Visibility::from_mixed("1", "1/2").is_err());
    }
}
