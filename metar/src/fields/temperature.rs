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

use crate::field::unexpected;
use crate::{Error, Field};

/// A temperature in whole degrees Celsius, e.g. `-05`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Temperature(String);

impl Temperature {
    /// Creates a temperature from one side of the temperature/dewpoint
    /// group where `M` denotes a negative value.
    fn from_group(s: &str) -> Option<Self> {
        if s.is_empty() {
            None
        } else {
            Some(Self(s.replacen('M', "-", 1)))
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the temperature in degrees Celsius.
    pub fn celsius(&self) -> Option<i8> {
        self.0.parse().ok()
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The temperature and dewpoint group, e.g. `22/18` or `M05/M10`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Temperatures {
    pub temperature: Option<Temperature>,
    pub dewpoint: Option<Temperature>,
}

impl Field for Temperatures {
    const NAME: &'static str = "temperature/dewpoint";

    fn matches(token: &str) -> bool {
        token.contains('/')
    }

    fn from_token(token: &str) -> Result<Self, Error> {
        if !Self::matches(token) {
            return Err(unexpected::<Self>(token, "temperature/dewpoint"));
        }

        let mut groups = token.split('/');

        Ok(Self {
            temperature: groups.next().and_then(Temperature::from_group),
            dewpoint: groups.next().and_then(Temperature::from_group),
        })
    }
}
