/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! This library tokenizes YAML byte streams.
//!
//! It exposes a pull based [`Scanner`] which reads from any
//! [`std::io::Read`] source and produces the token sequence
//! of the stream, one token per call, together with the
//! stream positions each token covers.
//!
//! No parsing, composing or schema resolution happens here;
//! higher layers are expected to consume the token stream.

#![allow(clippy::suspicious_else_formatting)]

pub mod error;
pub mod mark;
pub mod reader;
pub mod scanner;
pub mod token;

mod queue;

pub use crate::{
    error::{Error, Result},
    mark::Mark,
    reader::StreamReader,
    scanner::{ScanOptions, Scanner, TokenEntry},
    token::{DirectiveValue, Marker, ScalarStyle, Token},
};
