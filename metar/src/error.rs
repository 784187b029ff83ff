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

use std::error;
use std::fmt;

#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Error {
    /// The token doesn't have the shape of the field.
    UnexpectedToken {
        field: &'static str,
        token: String,
        expected: &'static str,
    },
    /// The token should contain only digits.
    NotANumber { token: String },
    /// A fraction with zero as denominator.
    ZeroDenominator { token: String },
    /// A flight rules code that is none of VFR, MVFR, IFR or LIFR.
    InvalidFlightRules { code: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken {
                field,
                token,
                expected,
            } => {
                write!(f, "found \"{token}\" as {field} but should be {expected}")
            }
            Self::NotANumber { token } => {
                write!(f, "token should be a number but is \"{token}\"")
            }
            Self::ZeroDenominator { token } => {
                write!(f, "fraction \"{token}\" has a zero denominator")
            }
            Self::InvalidFlightRules { code } => {
                write!(f, "\"{code}\" should be VFR, MVFR, IFR or LIFR")
            }
        }
    }
}

impl error::Error for Error {}
