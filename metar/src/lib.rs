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

//! METAR parser and flight rules classifier.
//!
//! This crate parses the body of a METAR report into its [fields] and derives
//! the [flight rules] from the reported visibility and ceiling. Fields are not
//! tagged in a METAR but identified by their position and shape. The parser
//! therefore claims the fields in a fixed order from a stream of [`Tokens`],
//! where each claimed token is removed before the next field is looked for.
//!
//! Parsing never fails. A field that isn't found is `None` and the report
//! returns a sentinel for it instead, e.g. `.....` for the altimeter setting.
//! A report without visibility is classified as IFR.
//!
//! # Examples
//!
//! ```
//! use metar::{FlightRules, Report};
//!
//! let report = Report::parse("METAR KJFK 181851Z 18005KT 10SM BKN030 OVC050 22/18 A2992 RMK AO2");
//!
//! assert_eq!(report.time_str(), "18:51Z");
//! assert_eq!(report.wind_direction_str(), "180°");
//! assert_eq!(report.wind_speed_str(), "05KT");
//! assert_eq!(report.visibility_str(), "10");
//! assert_eq!(report.altimeter_str(), "29.92");
//! assert_eq!(report.ceiling(), 30);
//! assert_eq!(report.flight_rules, FlightRules::Vfr);
//! ```
//!
//! [fields]: crate::fields
//! [flight rules]: crate::rules

#[macro_use]
mod macros;

mod error;
mod field;
mod report;
mod tokens;

pub mod fields;
pub mod rules;

pub use error::Error;
pub use field::Field;
pub use report::*;
pub use rules::FlightRules;
pub use tokens::Tokens;
