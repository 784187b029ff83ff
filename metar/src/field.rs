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

use crate::Error;

/// A METAR field that is claimed from a single whitespace separated token.
///
/// Fields are identified by their shape and not by any tag. The report
/// pipeline asks a field whether it [`matches`](Field::matches) the token at
/// the position where the field is expected and claims the token only then.
pub trait Field: Sized {
    /// Name of the field as used in error messages and logs.
    const NAME: &'static str;

    /// Returns `true` if the token has the shape of this field.
    fn matches(token: &str) -> bool;

    /// Parse this field from a token.
    ///
    /// # Errors
    ///
    /// Returns an error if the token doesn't match the field or its content
    /// can't be interpreted.
    fn from_token(token: &str) -> Result<Self, Error>;
}

/// Returns the token's chars in the range `start..end` clamped to the token's
/// length.
///
/// METAR tokens are ASCII; an empty string is returned if the range would
/// split a multi-byte char.
#[inline]
pub(crate) fn substr(token: &str, start: usize, end: usize) -> &str {
    let end = end.min(token.len());
    let start = start.min(end);
    token.get(start..end).unwrap_or("")
}

/// Returns an error that the token doesn't have the shape of field `F`.
pub(crate) fn unexpected<F: Field>(token: &str, expected: &'static str) -> Error {
    Error::UnexpectedToken {
        field: F::NAME,
        token: token.to_string(),
        expected,
    }
}
