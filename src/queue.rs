/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! The Queue is an order preserving buffer with O(1)
//! push/pop at the ends and O(n) insertion at an arbitrary
//! index.
//!
//! Insertion mid queue is rare, only occurring when a
//! deferred mapping key must be placed before tokens that
//! were buffered after it, and never more than a handful of
//! elements deep.

use std::{
    collections::VecDeque,
    fmt::{self, Debug},
    iter::FromIterator,
};

/// A FIFO buffer which additionally allows items to be
/// spliced in before entries already queued
pub(crate) struct Queue<T>
{
    inner: VecDeque<T>,
}

impl<T> Queue<T>
{
    pub fn new() -> Self
    {
        Self::default()
    }

    /// Append an item to the back of the queue
    pub fn push(&mut self, item: T)
    {
        self.inner.push_back(item)
    }

    /// Remove the item at the front of the queue, if any
    pub fn pop(&mut self) -> Option<T>
    {
        self.inner.pop_front()
    }

    /// View the item at the front of the queue, if any
    pub fn front(&self) -> Option<&T>
    {
        self.inner.front()
    }

    /// Place an item before the entry currently at .index,
    /// shifting that entry and all entries behind it
    ///
    /// ## Panics
    ///
    /// If .index is greater than the queue's length
    pub fn insert(&mut self, index: usize, item: T)
    {
        self.inner.insert(index, item)
    }

    pub fn len(&self) -> usize
    {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.inner.is_empty()
    }
}

impl<T> Default for Queue<T>
{
    fn default() -> Self
    {
        Queue {
            inner: Default::default(),
        }
    }
}

impl<T> Extend<T> for Queue<T>
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I)
    {
        self.inner.extend(iter)
    }
}

impl<T> FromIterator<T> for Queue<T>
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self
    {
        Self {
            inner: VecDeque::from_iter(iter),
        }
    }
}

impl<T> IntoIterator for Queue<T>
{
    type Item = T;

    type IntoIter = <VecDeque<T> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter
    {
        self.inner.into_iter()
    }
}

impl<T> Clone for Queue<T>
where
    T: Clone,
{
    fn clone(&self) -> Self
    {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Debug for Queue<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.debug_list().entries(self.inner.iter()).finish()
    }
}
