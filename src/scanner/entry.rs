/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use crate::{
    mark::Mark,
    token::{Marker, Token},
};

/// A [`Token`] annotated with the stream positions it
/// starts and ends at.
///
/// The marks are None when the owning Scanner was built
/// with [`O_ZEROED`](super::O_ZEROED).
#[derive(Debug, Clone, PartialEq)]
pub struct TokenEntry
{
    token: Token,
    start: Option<Mark>,
    end:   Option<Mark>,
}

impl TokenEntry
{
    pub(in crate::scanner) fn new(token: Token, start: Option<Mark>, end: Option<Mark>) -> Self
    {
        Self { token, start, end }
    }

    pub fn token(&self) -> &Token
    {
        &self.token
    }

    pub fn marker(&self) -> Marker
    {
        self.token.marker()
    }

    pub fn start(&self) -> Option<&Mark>
    {
        self.start.as_ref()
    }

    pub fn end(&self) -> Option<&Mark>
    {
        self.end.as_ref()
    }

    pub fn into_token(self) -> Token
    {
        self.token
    }
}

impl PartialEq<Token> for TokenEntry
{
    fn eq(&self, other: &Token) -> bool
    {
        &self.token == other
    }
}
