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

/// Parses a string of ASCII digits into an unsigned integer.
///
/// Evaluates to `Err(Error::NotANumber)` if the string is empty, contains
/// anything but digits or overflows the target type.
macro_rules! parse_digits {
    ($t:ty, $s:expr) => {{
        let s: &str = $s;
        if s.is_empty() || !s.bytes().all(|byte| byte.is_ascii_digit()) {
            None
        } else {
            s.bytes().try_fold(0 as $t, |acc, byte| {
                acc.checked_mul(10)?.checked_add((byte & 0x0F) as $t)
            })
        }
        .ok_or_else(|| $crate::Error::NotANumber {
            token: s.to_string(),
        })
    }};
}
