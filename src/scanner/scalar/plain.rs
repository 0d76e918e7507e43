/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Scanning of plain (unquoted) scalars.
//!
//! Plain scalars have the most context dependent stop rules
//! of any token: a ':' only terminates one when followed by
//! a blank (or, in flow context, a flow indicator), flow
//! indicators only terminate inside flow collections, and a
//! continuation line must be indented past the enclosing
//! block level.

use crate::{
    error::Result,
    reader::StreamReader,
    scanner::{context::Context, entry::TokenEntry, scan_line_break},
    token::{ScalarStyle, Token},
};

/// Scan a plain scalar, reader pointing at its first
/// codepoint.
///
/// .allow_simple_key is owned by the Scanner; scanning
/// flips it as line breaks inside the scalar are consumed.
pub(in crate::scanner) fn scan_plain_scalar(
    reader: &mut StreamReader,
    cxt: &Context,
    allow_simple_key: &mut bool,
) -> Result<TokenEntry>
{
    let flow = cxt.is_flow();

    let mut chunks = String::new();
    let mut spaces = String::new();

    let start = reader.mark();
    let mut end = start.clone();

    loop
    {
        if reader.peek(0)? == '#'
        {
            break;
        }

        let mut length = 0;

        loop
        {
            let c = reader.peek(length)?;

            if isBlankZ!(c)
            {
                break;
            }

            if c == ':'
            {
                let next = reader.peek(length + 1)?;

                if isBlankZ!(next) || (flow && isFlowIndicator!(next))
                {
                    break;
                }
            }

            if flow && matches!(c, ',' | '?' | '[' | ']' | '{' | '}')
            {
                break;
            }

            length += 1;
        }

        if length == 0
        {
            break;
        }

        *allow_simple_key = false;

        chunks.push_str(&spaces);
        chunks.push_str(&reader.prefix_advance(length)?);

        end = reader.mark();

        spaces = scan_plain_spaces(reader, allow_simple_key)?;

        if spaces.is_empty()
            || reader.peek(0)? == '#'
            || (cxt.is_block() && cxt.indent() >= reader.column())
        {
            break;
        }
    }

    Ok(TokenEntry::new(
        Token::Scalar(chunks, ScalarStyle::Plain),
        start,
        end,
    ))
}

/// Consume the whitespace between two chunks of a plain
/// scalar, folding line breaks. Returns the text to join
/// the chunks with, empty if the scalar cannot continue.
fn scan_plain_spaces(reader: &mut StreamReader, allow_simple_key: &mut bool) -> Result<String>
{
    let mut length = 0;

    while isBlank!(reader.peek(length)?)
    {
        length += 1;
    }

    let whitespaces = reader.prefix_advance(length)?;

    let line_break = match scan_line_break(reader)?
    {
        Some(brk) => brk,
        None => return Ok(whitespaces),
    };

    // A break here means whatever follows could be a key
    *allow_simple_key = true;

    if at_document_indicator(reader)?
    {
        return Ok(String::new());
    }

    let mut breaks = String::new();

    loop
    {
        if reader.peek(0)? == ' '
        {
            reader.advance(1)?;
        }
        else if let Some(brk) = scan_line_break(reader)?
        {
            breaks.push(brk);

            if at_document_indicator(reader)?
            {
                return Ok(String::new());
            }
        }
        else
        {
            break;
        }
    }

    if line_break != '\n'
    {
        Ok(format!("{}{}", line_break, breaks))
    }
    else if breaks.is_empty()
    {
        Ok(" ".into())
    }
    else
    {
        Ok(breaks)
    }
}

/// Does a document boundary start at the read head?
///
/// Note the asymmetry: '---' terminates unconditionally,
/// '...' only when followed by a blank or break.
fn at_document_indicator(reader: &mut StreamReader) -> Result<bool>
{
    let prefix = reader.prefix(3)?;

    Ok(prefix == "---" || (prefix == "..." && isBlankZ!(reader.peek(3)?)))
}
