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

//! Flight rules of a weather station for a companion display.
//!
//! The [`Updater`] requests the report of the configured station or of the
//! station nearest to the device, turns the response into a [`Status`] and
//! delivers its [`Message`] to the display. Fetching, locating, delivering
//! and storing the [`Settings`] are left to the host, which implements
//! [`Fetch`], [`Locate`], [`Deliver`] and [`SettingsStore`].
//!
//! # Examples
//!
//! ```
//! use avwx::*;
//!
//! struct Service;
//!
//! impl Fetch for Service {
//!     fn fetch(&mut self, url: &str) -> Result<String, Error> {
//!         assert!(url.ends_with("station=KJFK&format=JSON"));
//!         Ok(r#"{"Station": "KJFK", "Flight-Rules": "VFR"}"#.to_string())
//!     }
//! }
//!
//! struct NoGps;
//!
//! impl Locate for NoGps {
//!     fn locate(&mut self) -> Result<Position, Error> {
//!         Err(Error::Location("no GPS".to_string()))
//!     }
//! }
//!
//! struct Display(Vec<Message>);
//!
//! impl Deliver for Display {
//!     fn deliver(&mut self, message: &Message) -> Result<(), Error> {
//!         self.0.push(message.clone());
//!         Ok(())
//!     }
//! }
//!
//! let mut updater = Updater::new(Settings::default(), Service, NoGps, Display(Vec::new()));
//! let status = updater.handle_update();
//!
//! assert_eq!(status.message().condition, "VFR");
//! ```

mod error;
mod request;
mod settings;
mod status;
mod update;

pub mod payload;

pub use error::Error;
pub use request::{Position, Request, API_URL};
pub use settings::*;
pub use status::*;
pub use update::*;
