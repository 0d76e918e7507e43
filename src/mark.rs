/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! A [`Mark`] is an immutable snapshot of a position in the
//! underlying stream, recorded as the reader decodes it.
//! Marks bound every token produced by the scanner and
//! contextualize every error, carrying enough of the
//! surrounding line to render a caret snippet pointing at
//! the exact codepoint.

use std::{fmt, sync::Arc};

const SNIPPET_INDENT: usize = 4;
const SNIPPET_MAX_LENGTH: usize = 75;

/// A position in the character stream, with enough of the
/// surrounding line retained to print helpful diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mark
{
    label:  Arc<str>,
    index:  usize,
    line:   usize,
    column: usize,
    before: Box<str>,
    after:  Box<str>,
}

impl Mark
{
    pub(crate) fn new(
        label: Arc<str>,
        index: usize,
        line: usize,
        column: usize,
        before: String,
        after: String,
    ) -> Self
    {
        Self {
            label,
            index,
            line,
            column,
            before: before.into_boxed_str(),
            after: after.into_boxed_str(),
        }
    }

    /// Name of the stream this position belongs to
    pub fn label(&self) -> &str
    {
        &self.label
    }

    /// Codepoint offset from the start of the stream,
    /// 0 based
    pub fn index(&self) -> usize
    {
        self.index
    }

    /// Line of the stream, 0 based
    pub fn line(&self) -> usize
    {
        self.line
    }

    /// Codepoint offset into the line, 0 based
    pub fn column(&self) -> usize
    {
        self.column
    }

    /// Render the line this mark points into, with a caret
    /// under the marked column
    pub fn get_snippet(&self) -> String
    {
        self.snippet(SNIPPET_INDENT, SNIPPET_MAX_LENGTH)
    }

    /// As [`get_snippet`](#method.get_snippet), with
    /// explicit layout bounds
    pub fn snippet(&self, indent: usize, max_length: usize) -> String
    {
        let half = std::cmp::max(max_length / 2, 5) - 1;

        let (head, before) = clamp_tail(&self.before, half);
        let (tail, after) = clamp_head(&self.after, half);

        let pad = " ".repeat(indent);
        let caret_at = head.len() + before.chars().count();

        format!(
            "{pad}{head}{before}{after}{tail}\n{pad}{caret}^",
            pad = pad,
            head = head,
            before = before,
            after = after,
            tail = tail,
            caret = " ".repeat(caret_at)
        )
    }
}

impl fmt::Display for Mark
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(
            f,
            "in \"{}\", line {}, column {}:\n{}",
            self.label,
            self.line + 1,
            self.column + 1,
            self.get_snippet()
        )
    }
}

/// Keep at most .limit trailing codepoints of .s, prefixing
/// an ellipsis if anything was cut
fn clamp_tail(s: &str, limit: usize) -> (&'static str, &str)
{
    let count = s.chars().count();

    if count <= limit
    {
        return ("", s);
    }

    let cut = count - (limit - 4);
    let at = s
        .char_indices()
        .nth(cut)
        .map(|(at, _)| at)
        .unwrap_or_else(|| s.len());

    ("... ", &s[at..])
}

/// Keep at most .limit leading codepoints of .s, appending
/// an ellipsis if anything was cut
fn clamp_head(s: &str, limit: usize) -> (&'static str, &str)
{
    let count = s.chars().count();

    if count <= limit
    {
        return ("", s);
    }

    let keep = limit - 4;
    let at = s
        .char_indices()
        .nth(keep)
        .map(|(at, _)| at)
        .unwrap_or_else(|| s.len());

    (" ...", &s[..at])
}
