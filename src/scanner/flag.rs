/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use bitflags::bitflags;

/// An empty, zeroed flag set, with all other flags
/// disabled. A Scanner built with this set records no
/// marks: tokens carry no positions and errors lose their
/// caret snippets, in exchange for skipping all per line
/// bookkeeping.
pub const O_ZEROED: Flags = Flags::empty();

/// Track the position of every token and error. Tokens
/// carry the [`Mark`]s they start and end at, and errors
/// render a snippet of the offending line.
///
/// [`Mark`]: crate::mark::Mark
pub const O_MARKS: Flags = Flags::MARKS;

bitflags! {
    /// Directives controlling various behaviors of the Scanner,
    /// see each O_ variant for an explanation of how each works
    pub struct Flags: u32 {
        const MARKS = 0b00000001;
    }
}

impl Default for Flags
{
    fn default() -> Self
    {
        O_MARKS
    }
}

/// Construction time configuration of a [`Scanner`] and its
/// underlying reader
///
/// [`Scanner`]: crate::scanner::Scanner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions
{
    /// Name used when referring to the stream in
    /// diagnostics
    pub label: String,

    /// Size in bytes of the chunks read from the underlying
    /// source
    pub buffer_size: usize,

    /// Behavior flags, see the O_ constants
    pub flags: Flags,
}

impl ScanOptions
{
    pub fn label<T>(mut self, label: T) -> Self
    where
        T: Into<String>,
    {
        self.label = label.into();

        self
    }

    pub fn buffer_size(mut self, size: usize) -> Self
    {
        self.buffer_size = size;

        self
    }

    pub fn flags(mut self, flags: Flags) -> Self
    {
        self.flags = flags;

        self
    }
}

impl Default for ScanOptions
{
    fn default() -> Self
    {
        Self {
            label:       "<stream>".into(),
            buffer_size: DEFAULT_BUFFER_SIZE,
            flags:       Flags::default(),
        }
    }
}

const DEFAULT_BUFFER_SIZE: usize = 8 * 1024;
