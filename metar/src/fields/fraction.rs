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
use std::ops::Add;
use std::str::FromStr;

use crate::Error;

/// A non-negative rational number as used by statute mile visibilities.
///
/// Parsed from a whole number (`10`) or a simple fraction (`1/2`). A mixed
/// number like `1 1/2` is the [sum](Add) of a whole number and a fraction.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct Fraction {
    numer: u32,
    denom: u32,
}

impl Fraction {
    /// Creates a whole number.
    pub const fn whole(value: u32) -> Self {
        Self {
            numer: value,
            denom: 1,
        }
    }

    #[inline]
    pub fn numer(&self) -> u32 {
        self.numer
    }

    #[inline]
    pub fn denom(&self) -> u32 {
        self.denom
    }

    /// Returns the value as decimal.
    #[inline]
    pub fn value(&self) -> f64 {
        self.numer as f64 / self.denom as f64
    }
}

impl FromStr for Fraction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (numer, denom) = match s.split_once('/') {
            Some((numer, denom)) => (parse_digits!(u32, numer)?, parse_digits!(u32, denom)?),
            None => (parse_digits!(u32, s)?, 1),
        };

        if denom == 0 {
            Err(Error::ZeroDenominator {
                token: s.to_string(),
            })
        } else {
            Ok(Self { numer, denom })
        }
    }
}

impl Add for Fraction {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        if self.denom == rhs.denom {
            Self {
                numer: self.numer.saturating_add(rhs.numer),
                denom: self.denom,
            }
        } else {
            Self {
                numer: (self.numer.saturating_mul(rhs.denom))
                    .saturating_add(rhs.numer.saturating_mul(self.denom)),
                denom: self.denom.saturating_mul(rhs.denom),
            }
        }
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.denom {
            1 => write!(f, "{}", self.numer),
            _ => write!(f, "{}/{}", self.numer, self.denom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whole_numbers() {
        assert_eq!("10".parse(), Ok(Fraction::whole(10)));
    }

    #[test]
    fn parses_fractions() {
        let f: Fraction = "3/4".parse().expect("fraction should parse");
        assert_eq!((f.numer(), f.denom()), (3, 4));
        assert_eq!(f.value(), 0.75);
    }

    #[test]
    fn adds_mixed_numbers() {
        let half: Fraction = "1/2".parse().expect("fraction should parse");
        assert_eq!((Fraction::whole(1) + half).value(), 1.5);

        let sixteenth: Fraction = "1/16".parse().expect("fraction should parse");
        let quarter: Fraction = "1/4".parse().expect("fraction should parse");
        assert_eq!((quarter + sixteenth).value(), 0.3125);
    }

    #[test]
    fn rejects_invalid_fractions() {
        assert_eq!(
            "1/0".parse::<Fraction>(),
            Err(Error::ZeroDenominator {
                token: "1/0".to_string()
            })
        );
        assert!("1/2/3".parse::<Fraction>().is_err());
        assert!("".parse::<Fraction>().is_err());
        assert!("-1".parse::<Fraction>().is_err());
    }
}
