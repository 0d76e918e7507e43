/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Scalar scanning, split by style family: block
//! (literal/folded), flow (quoted) and plain.

pub(in crate::scanner) mod block;
pub(in crate::scanner) mod escape;
pub(in crate::scanner) mod flow;
pub(in crate::scanner) mod plain;
