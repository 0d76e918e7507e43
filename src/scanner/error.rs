/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Error types returned from the
//! [`yamlex::scanner`](super) module.
//!
//! A [`ScanError`] pairs a problem description with the
//! position it was detected at, and optionally the
//! position of the surrounding construct ("while scanning a
//! directive, ..."), so a two level diagnostic can be
//! rendered with caret snippets for both.

use std::{error::Error as StdError, fmt};

use crate::mark::Mark;

/// Type alias of the `Result`s returned from this module
pub type ScanResult<T> = std::result::Result<T, ScanError>;

/// A syntax error detected while scanning a YAML stream
#[derive(Debug, Clone, PartialEq)]
pub struct ScanError
{
    context:      Option<&'static str>,
    context_mark: Option<Mark>,
    problem:      String,
    problem_mark: Option<Mark>,
}

impl ScanError
{
    /// An error detected inside a named construct, e.g
    /// "while scanning a directive"
    pub(in crate::scanner) fn new<T>(
        context: &'static str,
        context_mark: Option<Mark>,
        problem: T,
        problem_mark: Option<Mark>,
    ) -> Self
    where
        T: Into<String>,
    {
        Self {
            context: Some(context),
            context_mark,
            problem: problem.into(),
            problem_mark,
        }
    }

    /// An error with no surrounding construct
    pub(in crate::scanner) fn plain<T>(problem: T, problem_mark: Option<Mark>) -> Self
    where
        T: Into<String>,
    {
        Self {
            context: None,
            context_mark: None,
            problem: problem.into(),
            problem_mark,
        }
    }

    /// The construct being scanned when the error was
    /// detected, if any
    pub fn context(&self) -> Option<&str>
    {
        self.context
    }

    /// Where that construct began
    pub fn context_mark(&self) -> Option<&Mark>
    {
        self.context_mark.as_ref()
    }

    /// Description of the problem
    pub fn problem(&self) -> &str
    {
        &self.problem
    }

    /// Where the problem was detected
    pub fn problem_mark(&self) -> Option<&Mark>
    {
        self.problem_mark.as_ref()
    }
}

impl fmt::Display for ScanError
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        if let Some(context) = self.context
        {
            f.write_str(context)?;

            if let Some(mark) = &self.context_mark
            {
                write!(f, " {}", mark)?;
            }

            f.write_str("\n")?;
        }

        f.write_str(&self.problem)?;

        if let Some(mark) = &self.problem_mark
        {
            write!(f, " {}", mark)?;
        }

        Ok(())
    }
}

impl StdError for ScanError {}

/// Render a codepoint for error messages, preferring the
/// escape mnemonic of otherwise invisible characters
pub(in crate::scanner) fn char_repr(c: char) -> String
{
    match crate::scanner::scalar::escape::mnemonic(c)
    {
        Some(m) => format!("'\\{}' ({})", m, c as u32),
        None => format!("'{}' ({})", c, c as u32),
    }
}
