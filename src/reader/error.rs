/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Error types returned from the [`yamlex::reader`](super)
//! module.

use std::{error::Error as StdError, fmt, io, sync::Arc};

/// Type alias of the `Result`s returned from this module
pub type ReaderResult<T> = std::result::Result<T, ReaderError>;

/// Possible errors that can occur while decoding YAML byte
/// streams into characters
#[derive(Debug)]
pub enum ReaderError
{
    /// Encountered an invalid or truncated UTF8 sequence
    UTF8
    {
        /// Name of the offending stream
        label:    Arc<str>,
        /// Codepoint index the broken sequence would have
        /// decoded to
        position: usize,
    },

    /// Encountered a codepoint that YAML forbids from
    /// appearing in a character stream
    NonPrintable
    {
        /// Name of the offending stream
        label:     Arc<str>,
        /// The forbidden codepoint
        codepoint: char,
        /// Codepoint index it was decoded at
        position:  usize,
    },

    /// Catch all wrapper for any underlying IO errors
    /// reported to us
    IO(io::Error),
}

impl fmt::Display for ReaderError
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self
        {
            ReaderError::UTF8 { label, position } => write!(
                f,
                "malformed UTF-8 sequence in \"{}\", at index {}",
                label, position
            ),
            ReaderError::NonPrintable {
                label,
                codepoint,
                position,
            } => write!(
                f,
                "special characters are not allowed: in \"{}\", at index {}, found U+{:04X}",
                label, position, *codepoint as u32
            ),
            ReaderError::IO(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl StdError for ReaderError
{
    fn source(&self) -> Option<&(dyn StdError + 'static)>
    {
        match self
        {
            ReaderError::IO(ref e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ReaderError
{
    fn from(e: io::Error) -> Self
    {
        Self::IO(e)
    }
}
