/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::{error::Error as StdError, fmt};

use crate::{reader::ReaderError, scanner::ScanError};

/// Result typedef used throughout this library's public API
pub type Result<T> = std::result::Result<T, Error>;

/// Unified type representing all possible errors which can
/// occur during library usage.
pub struct Error
{
    inner: Box<ErrorKind>,
}

impl Error
{
    /// Categorize the error into one of the following:
    ///
    /// - [`Category::IO`] The underlying byte stream
    ///   surfaced an error while doing IO
    /// - [`Category::Data`] The byte stream was not valid
    ///   UTF-8, or contained codepoints YAML forbids
    /// - [`Category::Syntax`] The YAML stream was
    ///   syntactically invalid
    pub fn classify(&self) -> Category
    {
        match &*self.inner
        {
            ErrorKind::Reader(ReaderError::IO(_)) => Category::IO,
            ErrorKind::Reader(_) => Category::Data,
            ErrorKind::Scan(_) => Category::Syntax,
        }
    }

    fn new(kind: ErrorKind) -> Self
    {
        Self {
            inner: Box::new(kind),
        }
    }
}

/// Rough category of an [`Error`].
///
/// Useful for making decisions upon encountering an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category
{
    /// The underlying byte stream returned an error while
    /// attempting IO
    IO,

    /// There was an issue with the bytes of the stream
    /// itself (e.g: a broken UTF-8 sequence)
    Data,

    /// The YAML stream was not syntactically valid
    Syntax,
}

enum ErrorKind
{
    Reader(ReaderError),
    Scan(ScanError),
}

impl fmt::Debug for Error
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match &*self.inner
        {
            ErrorKind::Reader(e) => f.debug_tuple("Reader").field(e).finish(),
            ErrorKind::Scan(e) => f.debug_tuple("Scan").field(e).finish(),
        }
    }
}

impl fmt::Display for Error
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match &*self.inner
        {
            ErrorKind::Reader(e) => fmt::Display::fmt(e, f),
            ErrorKind::Scan(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl StdError for Error
{
    fn source(&self) -> Option<&(dyn StdError + 'static)>
    {
        match &*self.inner
        {
            ErrorKind::Reader(e) => Some(e),
            ErrorKind::Scan(e) => Some(e),
        }
    }
}

impl From<ReaderError> for Error
{
    fn from(err: ReaderError) -> Self
    {
        Self::new(ErrorKind::Reader(err))
    }
}

impl From<ScanError> for Error
{
    fn from(err: ScanError) -> Self
    {
        Self::new(ErrorKind::Scan(err))
    }
}
