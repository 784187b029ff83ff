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

//! The fields of a METAR report.

mod altimeter;
mod cloud;
mod fraction;
mod temperature;
mod time;
mod visibility;
mod wind;

pub use altimeter::Altimeter;
pub use cloud::{CloudLayer, Cover};
pub use fraction::Fraction;
pub use temperature::{Temperature, Temperatures};
pub use time::ObservationTime;
pub use visibility::{Visibility, METRIC_UNLIMITED};
pub use wind::{Wind, WindVariation};
