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

/// Altimeter setting in inches of mercury.
///
/// The setting is kept as reported with a decimal point inserted after the
/// first two digits, e.g. `A2992` is `29.92`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Altimeter(String);

impl Altimeter {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the setting in inches of mercury if the digits form a number.
    pub fn inches_hg(&self) -> Option<f32> {
        self.0.parse().ok()
    }
}

impl Field for Altimeter {
    const NAME: &'static str = "altimeter";

    fn matches(token: &str) -> bool {
        token.starts_with('A')
    }

    fn from_token(token: &str) -> Result<Self, Error> {
        if !Self::matches(token) {
            return Err(unexpected::<Self>(token, "A followed by four digits"));
        }

        Ok(Self(format!(
            "{}.{}",
            substr(token, 1, 3),
            substr(token, 3, 5)
        )))
    }
}

impl fmt::Display for Altimeter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
