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

use std::collections::VecDeque;
use std::fmt;

use log::trace;

use crate::Field;

/// The whitespace separated tokens of a raw report.
///
/// Fields claim tokens from either end of the stream. A claimed token is
/// removed so that fields parsed later never see it. The order in which the
/// fields are claimed is therefore part of the parser.
#[derive(Clone, PartialEq, Eq)]
pub struct Tokens<'a> {
    tokens: VecDeque<&'a str>,
}

impl<'a> Tokens<'a> {
    /// Splits the report at single spaces.
    ///
    /// Empty tokens, as produced by repeated spaces, are dropped.
    pub fn new(report: &'a str) -> Self {
        Self {
            tokens: report.split(' ').filter(|t| !t.is_empty()).collect(),
        }
    }

    /// The number of unclaimed tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if all tokens are claimed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns the token at the index counted from the front.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.tokens.get(index).copied()
    }

    #[inline]
    pub fn front(&self) -> Option<&'a str> {
        self.tokens.front().copied()
    }

    #[inline]
    pub fn back(&self) -> Option<&'a str> {
        self.tokens.back().copied()
    }

    /// Removes the first token that equals `literal`.
    ///
    /// Returns `true` if a token was removed.
    pub fn remove_first(&mut self, literal: &str) -> bool {
        match self.tokens.iter().position(|&t| t == literal) {
            Some(index) => {
                self.tokens.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes and returns the first token without looking at it.
    #[inline]
    pub fn pop_front(&mut self) -> Option<&'a str> {
        self.tokens.pop_front()
    }

    /// Removes the first `n` tokens.
    #[inline]
    pub fn skip(&mut self, n: usize) -> &mut Self {
        self.tokens.drain(..n.min(self.tokens.len()));
        self
    }

    /// Claims the first token if it matches the field `F`.
    ///
    /// A matching token is removed even if the field can't be parsed from it,
    /// in which case `None` is returned just like for a non-matching token.
    pub fn claim_front<F: Field>(&mut self) -> Option<F> {
        let token = Self::matching::<F>(self.front())?;
        self.tokens.pop_front();
        Self::parse(token)
    }

    /// Claims the last token if it matches the field `F`.
    ///
    /// See [`claim_front`](Tokens::claim_front) for the handling of tokens
    /// that match but can't be parsed.
    pub fn claim_back<F: Field>(&mut self) -> Option<F> {
        let token = Self::matching::<F>(self.back())?;
        self.tokens.pop_back();
        Self::parse(token)
    }

    /// Claims every token that matches the field `F`.
    ///
    /// The tokens are scanned from the last to the first, but the returned
    /// fields are in the order in which their tokens appear in the report.
    pub fn claim_all<F: Field>(&mut self) -> Vec<F> {
        let mut fields = VecDeque::new();

        for index in (0..self.tokens.len()).rev() {
            if F::matches(self.tokens[index]) {
                if let Some(token) = self.tokens.remove(index) {
                    if let Some(field) = Self::parse(token) {
                        fields.push_front(field);
                    }
                }
            }
        }

        fields.into()
    }

    /// Drops every token for which `f` returns `true`.
    pub fn discard<P>(&mut self, mut f: P)
    where
        P: FnMut(&str) -> bool,
    {
        self.tokens.retain(|t| {
            let discard = f(*t);
            if discard {
                trace!("discarding token {t}");
            }
            !discard
        });
    }

    /// Returns the unclaimed tokens as owned strings.
    pub fn into_remainder(self) -> Vec<String> {
        self.tokens.into_iter().map(str::to_owned).collect()
    }

    fn matching<F: Field>(token: Option<&'a str>) -> Option<&'a str> {
        match token {
            Some(token) if F::matches(token) => Some(token),
            Some(token) => {
                trace!("no {} at {token}", F::NAME);
                None
            }
            None => {
                trace!("no {} in empty report", F::NAME);
                None
            }
        }
    }

    fn parse<F: Field>(token: &str) -> Option<F> {
        match F::from_token(token) {
            Ok(field) => {
                trace!("claimed {} from token {token}", F::NAME);
                Some(field)
            }
            Err(err) => {
                trace!("claimed {} token but failed to parse it: {err}", F::NAME);
                None
            }
        }
    }
}

impl fmt::Debug for Tokens<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.tokens.iter()).finish()
    }
}
