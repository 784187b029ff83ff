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

//! JavaScript bindings of the METAR parser and the station settings.

use std::collections::HashMap;

use avwx::{Request, Settings, StationId, Status, NEAREST_KEY, STATION_KEY};
use metar::Report;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

#[wasm_bindgen(js_name = Report)]
pub struct JsReport {
    inner: Report,
}

#[wasm_bindgen(js_class = Report)]
impl JsReport {
    #[wasm_bindgen(constructor)]
    pub fn new(raw: &str) -> Self {
        Self {
            inner: Report::parse(raw),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn altimeter(&self) -> String {
        self.inner.altimeter_str().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn temperature(&self) -> String {
        self.inner.temperature_str().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn dewpoint(&self) -> String {
        self.inner.dewpoint_str().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn time(&self) -> String {
        self.inner.time_str().to_string()
    }

    #[wasm_bindgen(getter, js_name = windDirection)]
    pub fn wind_direction(&self) -> String {
        self.inner.wind_direction_str().to_string()
    }

    #[wasm_bindgen(getter, js_name = windSpeed)]
    pub fn wind_speed(&self) -> String {
        self.inner.wind_speed_str().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn visibility(&self) -> String {
        self.inner.visibility_str().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn clouds(&self) -> String {
        self.inner.clouds_summary()
    }

    #[wasm_bindgen(getter)]
    pub fn ceiling(&self) -> u16 {
        self.inner.ceiling()
    }

    #[wasm_bindgen(getter, js_name = flightRules)]
    pub fn flight_rules(&self) -> String {
        self.inner.flight_rules.to_string()
    }

    #[wasm_bindgen(js_name = toJSON)]
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.inner)?)
    }
}

#[wasm_bindgen(js_name = Settings)]
pub struct JsSettings {
    inner: Settings,
}

#[wasm_bindgen(js_class = Settings)]
impl JsSettings {
    /// Creates the settings from the stored values, which fall back to their
    /// defaults if missing or invalid.
    #[wasm_bindgen(constructor)]
    pub fn new(station: Option<String>, nearest: Option<String>) -> Self {
        let mut store: HashMap<String, String> = HashMap::new();
        if let Some(station) = station {
            store.insert(STATION_KEY.to_string(), station);
        }
        if let Some(nearest) = nearest {
            store.insert(NEAREST_KEY.to_string(), nearest);
        }

        Self {
            inner: Settings::restore(&store),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn station(&self) -> String {
        self.inner.station.to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn nearest(&self) -> bool {
        self.inner.nearest
    }

    #[wasm_bindgen(js_name = applyResponse)]
    pub fn apply_response(&mut self, response: &str) -> Result<(), JsError> {
        Ok(self.inner.apply_response(response)?)
    }

    #[wasm_bindgen(getter, js_name = configPageUrl)]
    pub fn config_page_url(&self) -> String {
        self.inner.config_page_url()
    }

    /// The URL of the configured station's report.
    #[wasm_bindgen(getter, js_name = stationUrl)]
    pub fn station_url(&self) -> String {
        Request::Station(self.inner.station.clone()).url()
    }
}

/// Returns the display message for the service's response.
#[wasm_bindgen(js_name = statusMessage)]
pub fn status_message(body: &str, station: &str) -> Result<JsValue, JsError> {
    let station: StationId = station.parse()?;
    let message = Status::from_payload(body, &station).message();
    Ok(serde_wasm_bindgen::to_value(&message)?)
}
