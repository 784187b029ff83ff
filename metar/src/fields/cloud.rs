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

/// The sky cover of a cloud layer.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Cover {
    /// No clouds below 12,000 ft detected by an automated station (CLR).
    Clear,
    /// No clouds observed (SKC).
    SkyClear,
    /// 1 to 2 oktas (FEW).
    Few,
    /// 3 to 4 oktas (SCT).
    Scattered,
    /// 5 to 7 oktas (BKN).
    Broken,
    /// 8 oktas (OVC).
    Overcast,
    /// The sky is obscured and the vertical visibility is reported (VV).
    VerticalVisibility,
}

impl Cover {
    /// Returns the cover's code as reported.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Clear => "CLR",
            Self::SkyClear => "SKC",
            Self::Few => "FEW",
            Self::Scattered => "SCT",
            Self::Broken => "BKN",
            Self::Overcast => "OVC",
            Self::VerticalVisibility => "VV",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "CLR" => Some(Self::Clear),
            "SKC" => Some(Self::SkyClear),
            "FEW" => Some(Self::Few),
            "SCT" => Some(Self::Scattered),
            "BKN" => Some(Self::Broken),
            "OVC" => Some(Self::Overcast),
            _ => None,
        }
    }
}

/// A cloud layer, e.g. `BKN030` or the vertical visibility `VV003`.
///
/// The layer keeps the reported code and base of at most six chars. Any
/// suffix like the cloud type in `BKN030CB` is dropped.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CloudLayer {
    cover: Cover,
    code: String,
}

impl CloudLayer {
    #[inline]
    pub fn cover(&self) -> Cover {
        self.cover
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.code
    }

    /// Returns the layer's base in hundreds of feet.
    ///
    /// Returns `None` if the base is not reported, e.g. for `SKC` or `BKN///`.
    pub fn base(&self) -> Option<u16> {
        let start = self.cover.code().len();
        parse_digits!(u16, substr(&self.code, start, start + 3)).ok()
    }

    /// Returns `true` if the layer constitutes a ceiling.
    ///
    /// Broken, overcast and obscured layers are ceilings unless the layer is
    /// only partially reported with slashes.
    pub fn is_ceiling(&self) -> bool {
        matches!(
            self.cover,
            Cover::Broken | Cover::Overcast | Cover::VerticalVisibility
        ) && !self.code.contains('/')
    }
}

impl Field for CloudLayer {
    const NAME: &'static str = "cloud layer";

    fn matches(token: &str) -> bool {
        Cover::from_code(substr(token, 0, 3)).is_some()
            || (token.len() == 5 && token.starts_with("VV"))
    }

    fn from_token(token: &str) -> Result<Self, Error> {
        let cover = match Cover::from_code(substr(token, 0, 3)) {
            Some(cover) => cover,
            None if token.len() == 5 && token.starts_with("VV") => Cover::VerticalVisibility,
            None => {
                return Err(unexpected::<Self>(
                    token,
                    "CLR, SKC, FEW, SCT, BKN, OVC or VV with base",
                ))
            }
        };

        Ok(Self {
            cover,
            code: substr(token, 0, 6).to_string(),
        })
    }
}

impl fmt::Display for CloudLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_layers() {
        let layer = CloudLayer::from_token("BKN030").expect("layer should parse");
        assert_eq!(layer.cover(), Cover::Broken);
        assert_eq!(layer.base(), Some(30));
        assert!(layer.is_ceiling());

        let layer = CloudLayer::from_token("FEW250").expect("layer should parse");
        assert_eq!(layer.base(), Some(250));
        assert!(!layer.is_ceiling());
    }

    #[test]
    fn parses_vertical_visibility() {
        let layer = CloudLayer::from_token("VV003").expect("layer should parse");
        assert_eq!(layer.cover(), Cover::VerticalVisibility);
        assert_eq!(layer.base(), Some(3));
        assert!(layer.is_ceiling());
        assert!(!CloudLayer::matches("VV0030"));
    }

    #[test]
    fn truncates_cloud_type() {
        let layer = CloudLayer::from_token("OVC008CB").expect("layer should parse");
        assert_eq!(layer.as_str(), "OVC008");
        assert_eq!(layer.base(), Some(8));
    }

    #[test]
    fn partial_layer_is_no_ceiling() {
        let layer = CloudLayer::from_token("BKN///").expect("layer should parse");
        assert_eq!(layer.base(), None);
        assert!(!layer.is_ceiling());
    }

    #[test]
    fn rejects_other_tokens() {
        assert!(!CloudLayer::matches("BR"));
        assert!(!CloudLayer::matches("10SM"));
        assert!(CloudLayer::from_token("-RA").is_err());
    }
}
