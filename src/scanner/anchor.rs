/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Scanning of anchors (`&name`) and the aliases (`*name`)
//! that reference them. The two share a grammar, differing
//! only in indicator and token.

use crate::{
    error::Result,
    reader::StreamReader,
    scanner::{
        entry::TokenEntry,
        error::{char_repr, ScanError},
    },
    token::Token,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(in crate::scanner) enum AnchorKind
{
    Anchor,
    Alias,
}

/// Scan an anchor or alias, reader pointing at the '&' or
/// '*' indicator
pub(in crate::scanner) fn scan_anchor(
    reader: &mut StreamReader,
    kind: AnchorKind,
) -> Result<TokenEntry>
{
    let context = match kind
    {
        AnchorKind::Anchor => "while scanning an anchor",
        AnchorKind::Alias => "while scanning an alias",
    };

    let start = reader.mark();
    reader.advance(1)?;

    let mut length = 0;

    while isWordChar!(reader.peek(length)?)
    {
        length += 1;
    }

    if length == 0
    {
        return Err(ScanError::new(
            context,
            start,
            format!(
                "expected an alphabetic or numeric character, but found {}",
                char_repr(reader.peek(0)?)
            ),
            reader.mark(),
        )
        .into());
    }

    let name = reader.prefix_advance(length)?;
    let c = reader.peek(0)?;

    if !isBlankZ!(c) && !matches!(c, '?' | ':' | ',' | ']' | '}' | '%' | '@' | '`')
    {
        return Err(ScanError::new(
            context,
            start,
            format!(
                "expected an alphabetic or numeric character, but found {}",
                char_repr(c)
            ),
            reader.mark(),
        )
        .into());
    }

    let end = reader.mark();

    let token = match kind
    {
        AnchorKind::Anchor => Token::Anchor(name),
        AnchorKind::Alias => Token::Alias(name),
    };

    Ok(TokenEntry::new(token, start, end))
}
