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

use log::{debug, info, warn};

use crate::{Error, Message, Position, Request, Settings, Status};

/// Fetches the body of a URL.
pub trait Fetch {
    /// # Errors
    ///
    /// Returns [`Error::Fetch`] if the request fails.
    fn fetch(&mut self, url: &str) -> Result<String, Error>;
}

/// Locates the device.
pub trait Locate {
    /// # Errors
    ///
    /// Returns [`Error::Location`] if the position is unavailable.
    fn locate(&mut self) -> Result<Position, Error>;
}

/// Delivers a message to the display.
pub trait Deliver {
    /// # Errors
    ///
    /// Returns [`Error::Delivery`] if the message couldn't be sent.
    fn deliver(&mut self, message: &Message) -> Result<(), Error>;
}

/// Updates the display with the flight rules of the configured station.
#[derive(Debug)]
pub struct Updater<F, L, D> {
    settings: Settings,
    fetcher: F,
    locator: L,
    display: D,
}

impl<F, L, D> Updater<F, L, D>
where
    F: Fetch,
    L: Locate,
    D: Deliver,
{
    pub fn new(settings: Settings, fetcher: F, locator: L, display: D) -> Self {
        Self {
            settings,
            fetcher,
            locator,
            display,
        }
    }

    #[inline]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[inline]
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// The display the status is delivered to.
    #[inline]
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Returns the request for the configured or the nearest station.
    ///
    /// # Errors
    ///
    /// Returns an error if the nearest station is requested but the device
    /// can't be located.
    pub fn request(&mut self) -> Result<Request, Error> {
        if self.settings.nearest {
            self.locator.locate().map(Request::Nearest)
        } else {
            Ok(Request::Station(self.settings.station.clone()))
        }
    }

    /// Fetches the station's flight rules and sends them to the display.
    ///
    /// The returned status is sent even if the update failed. A failed
    /// delivery is only logged.
    pub fn handle_update(&mut self) -> Status {
        let status = match self.request() {
            Ok(request) => self.fetch_status(&request),
            Err(e) => {
                warn!("error requesting location: {e}");
                Status::NeedLocation
            }
        };

        match self.display.deliver(&status.message()) {
            Ok(()) => debug!("status sent to display"),
            Err(e) => warn!("error sending status to display: {e}"),
        }

        status
    }

    fn fetch_status(&mut self, request: &Request) -> Status {
        let url = request.url();
        info!("fetching {request} from {url}");

        match self.fetcher.fetch(&url) {
            Ok(body) => {
                debug!("received {} bytes", body.len());
                Status::from_payload(&body, &self.settings.station)
            }
            Err(e) => {
                warn!("{e}");
                Status::UpstreamError
            }
        }
    }
}
