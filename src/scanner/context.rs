/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::ops::Add;

pub(in crate::scanner) const STARTING_INDENT: Indent = Indent(None);

/// Manages the current YAML context. Contexts are mutually
/// exclusive, that is, you cannot be in both a Flow and
/// Block context simultaneously. It is possible to have
/// deeper levels of Flow nested inside of Flow or Block
/// contexts, but a Block context can never be nested inside
/// a Flow context, so indentation bookkeeping is suspended
/// entirely while the flow level is nonzero.
#[derive(Debug, Clone, Default)]
pub(in crate::scanner) struct Context
{
    // Flow context fields
    flow: usize,

    // Block context fields
    indent:  Indent,
    indents: Vec<Indent>,
}

impl Context
{
    /// Instantiate a new Context
    pub fn new() -> Self
    {
        Self {
            flow:    0,
            indent:  STARTING_INDENT,
            indents: Vec::new(),
        }
    }

    /// Get the current flow level
    pub fn flow(&self) -> usize
    {
        self.flow
    }

    /// Check if we are currently in the flow context
    pub fn is_flow(&self) -> bool
    {
        self.flow != 0
    }

    /// Check if we are currently in the block context
    pub fn is_block(&self) -> bool
    {
        !self.is_flow()
    }

    /// Enter a nested flow collection, returning the new
    /// level, or None on overflow
    pub fn flow_increment(&mut self) -> Option<usize>
    {
        let new = self.flow.checked_add(1)?;
        self.flow = new;

        Some(new)
    }

    /// Leave a flow collection, returning the new level, or
    /// None if we were not inside one
    pub fn flow_decrement(&mut self) -> Option<usize>
    {
        let new = self.flow.checked_sub(1)?;
        self.flow = new;

        Some(new)
    }

    /// Get the current indent level
    pub fn indent(&self) -> Indent
    {
        self.indent
    }

    /// Push the current indent level and adopt .column as
    /// the new one, if it is deeper. Returns whether a
    /// level was pushed.
    pub fn add_indent(&mut self, column: usize) -> bool
    {
        if self.indent < column
        {
            self.indents.push(self.indent);
            self.indent = column.into();

            return true;
        }

        false
    }

    /// Pop one indent level, returning the newly current
    /// one
    pub fn pop_indent(&mut self) -> Indent
    {
        self.indent = self.indents.pop().unwrap_or(STARTING_INDENT);

        self.indent
    }
}

/// A wrapper around usize, that allows us to express the
/// "-1"nth indent without needing to use a signed type.
/// This occurs when we have not yet encountered the first
/// map or sequence node, and thus the entire document could
/// be a scalar, in which case we don't really have an
/// indent so to speak, hence the "-1"nth-ness
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub(in crate::scanner) struct Indent(Option<usize>);

impl From<usize> for Indent
{
    fn from(indent: usize) -> Self
    {
        Self(Some(indent))
    }
}

impl From<Option<usize>> for Indent
{
    fn from(maybe: Option<usize>) -> Self
    {
        Self(maybe)
    }
}

impl PartialEq<usize> for Indent
{
    fn eq(&self, other: &usize) -> bool
    {
        match self.0
        {
            Some(ref indent) => indent == other,
            None => false,
        }
    }
}

impl PartialOrd<usize> for Indent
{
    fn partial_cmp(&self, other: &usize) -> Option<std::cmp::Ordering>
    {
        match self.0
        {
            Some(indent) => indent.partial_cmp(other),
            None => Some(std::cmp::Ordering::Less),
        }
    }
}

impl Add<usize> for Indent
{
    type Output = usize;

    fn add(self, rhs: usize) -> Self::Output
    {
        match self.0
        {
            Some(indent) => indent + rhs,
            None => rhs,
        }
    }
}
