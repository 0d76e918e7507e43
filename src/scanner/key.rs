/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Simple key bookkeeping.
//!
//! A "simple" key is an unquoted-by-structure mapping key:
//! one written without a leading '?'. The scanner cannot
//! know a token starts such a key until it later meets the
//! ':' that makes it one, so every token that *could* be a
//! key is remembered as a [`SimpleKey`] candidate, per flow
//! level. When a ':' arrives the candidate for the current
//! level is promoted, splicing a Key token into the queue
//! at the position the candidate recorded.
//!
//! A candidate cannot stay valid forever. YAML limits
//! simple keys to a single line and 1024 characters, so a
//! candidate whose line or distance budget is exceeded goes
//! stale and is dropped; if it was required to become a key
//! (block context, sitting exactly at the indent level)
//! that staleness is a syntax error.

use crate::mark::Mark;

/// Maximum distance in codepoints a ':' may trail its key
const MAX_KEY_DISTANCE: usize = 1024;

/// A token position which may retroactively become a
/// mapping key
#[derive(Debug, Clone)]
pub(in crate::scanner) struct SimpleKey
{
    /// Stream-absolute number of the token this candidate
    /// points at
    token_number: usize,

    /// Whether this position *must* be a key if the line it
    /// sits on produces one
    required: bool,

    /// Reader state at the candidate, for staleness checks
    /// and the eventual Key token's position
    index:  usize,
    line:   usize,
    column: usize,
    mark:   Option<Mark>,
}

impl SimpleKey
{
    pub fn new(
        token_number: usize,
        required: bool,
        index: usize,
        line: usize,
        column: usize,
        mark: Option<Mark>,
    ) -> Self
    {
        Self {
            token_number,
            required,
            index,
            line,
            column,
            mark,
        }
    }

    pub fn token_number(&self) -> usize
    {
        self.token_number
    }

    pub fn required(&self) -> bool
    {
        self.required
    }

    pub fn column(&self) -> usize
    {
        self.column
    }

    pub fn mark(&self) -> Option<&Mark>
    {
        self.mark.as_ref()
    }

    /// Whether the reader has moved somewhere this
    /// candidate can no longer reach: off its line, or more
    /// than 1024 codepoints past it
    pub fn is_stale(&self, index: usize, line: usize) -> bool
    {
        line != self.line || index.saturating_sub(self.index) > MAX_KEY_DISTANCE
    }
}
