/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Scanning of literal (`|`) and folded (`>`) block
//! scalars.
//!
//! The indicator line may carry a chomping indicator
//! (`-` strip, `+` keep, absent clip) and an explicit
//! indentation increment (1-9), in either order. Without an
//! increment the content indentation is auto detected from
//! the first non empty line.

use crate::{
    error::Result,
    mark::Mark,
    reader::StreamReader,
    scanner::{
        context::Indent,
        entry::TokenEntry,
        error::{char_repr, ScanError},
        scan_line_break,
    },
    token::{ScalarStyle, Token},
};

const CONTEXT: &str = "while scanning a block scalar";

/// Scan a block scalar, reader pointing at the `|` or `>`
/// indicator. .current_indent is the enclosing block level,
/// which the content must be indented past.
pub(in crate::scanner) fn scan_block_scalar(
    reader: &mut StreamReader,
    style: ScalarStyle,
    current_indent: Indent,
) -> Result<TokenEntry>
{
    let folded = style == ScalarStyle::Folded;
    let start = reader.mark();

    reader.advance(1)?;

    let header = scan_indicators(reader, &start)?;
    scan_ignored_line(reader, &start)?;

    let min_indent = usize::max(current_indent + 1, 1);

    let (mut breaks, indent, mut end) = match header.increment
    {
        None =>
        {
            let (breaks, max_indent, end) = scan_indentation(reader)?;

            (breaks, usize::max(min_indent, max_indent), end)
        },
        Some(increment) =>
        {
            let indent = min_indent + increment - 1;
            let (breaks, end) = scan_breaks(reader, indent)?;

            (breaks, indent, end)
        },
    };

    let mut chunks = String::new();
    let mut line_break: Option<char> = None;

    while reader.column() == indent && reader.peek(0)? != '\0'
    {
        chunks.push_str(&breaks);

        let leading_non_space = !isBlank!(reader.peek(0)?);

        let mut length = 0;
        while !isBreakZ!(reader.peek(length)?)
        {
            length += 1;
        }

        chunks.push_str(&reader.prefix_advance(length)?);

        line_break = scan_line_break(reader)?;

        let (next_breaks, next_end) = scan_breaks(reader, indent)?;
        breaks = next_breaks;
        end = next_end;

        if !(reader.column() == indent && reader.peek(0)? != '\0')
        {
            break;
        }

        // Folding: join two content lines with a space, but only
        // when neither side is more indented and no blank line
        // sits between them
        if folded && line_break == Some('\n') && leading_non_space && !isBlank!(reader.peek(0)?)
        {
            if breaks.is_empty()
            {
                chunks.push(' ');
            }
        }
        else if let Some(brk) = line_break
        {
            chunks.push(brk);
        }
    }

    if header.chomp != Chomp::Strip
    {
        if let Some(brk) = line_break
        {
            chunks.push(brk);
        }
    }

    if header.chomp == Chomp::Keep
    {
        chunks.push_str(&breaks);
    }

    Ok(TokenEntry::new(Token::Scalar(chunks, style), start, end))
}

/// What to do with the trailing breaks of a block scalar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Chomp
{
    /// Keep the final break, drop the rest (default)
    Clip,
    /// Drop every trailing break
    Strip,
    /// Keep every trailing break
    Keep,
}

struct Header
{
    chomp:     Chomp,
    increment: Option<usize>,
}

/// Scan the chomping and indentation indicators following
/// the style indicator, accepting them in either order
fn scan_indicators(reader: &mut StreamReader, start: &Option<Mark>) -> Result<Header>
{
    let mut chomp = Chomp::Clip;
    let mut increment = None;

    let c = reader.peek(0)?;

    if c == '-' || c == '+'
    {
        chomp = if c == '-' { Chomp::Strip } else { Chomp::Keep };
        reader.advance(1)?;

        if let Some(digit) = reader.peek(0)?.to_digit(10)
        {
            if digit == 0
            {
                return Err(ScanError::new(
                    CONTEXT,
                    start.clone(),
                    "expected indentation indicator in the range 1-9, but found 0",
                    reader.mark(),
                )
                .into());
            }

            increment = Some(digit as usize);
            reader.advance(1)?;
        }
    }
    else if let Some(digit) = c.to_digit(10)
    {
        if digit == 0
        {
            return Err(ScanError::new(
                CONTEXT,
                start.clone(),
                "expected indentation indicator in the range 1-9, but found 0",
                reader.mark(),
            )
            .into());
        }

        increment = Some(digit as usize);
        reader.advance(1)?;

        let c = reader.peek(0)?;

        if c == '-' || c == '+'
        {
            chomp = if c == '-' { Chomp::Strip } else { Chomp::Keep };
            reader.advance(1)?;
        }
    }

    let c = reader.peek(0)?;

    if !isSpaceZ!(c)
    {
        return Err(ScanError::new(
            CONTEXT,
            start.clone(),
            format!(
                "expected chomping or indentation indicators, but found {}",
                char_repr(c)
            ),
            reader.mark(),
        )
        .into());
    }

    Ok(Header { chomp, increment })
}

/// Consume the remainder of the indicator line: blanks, an
/// optional comment, and the line break
fn scan_ignored_line(reader: &mut StreamReader, start: &Option<Mark>) -> Result<()>
{
    while reader.peek(0)? == ' '
    {
        reader.advance(1)?;
    }

    if reader.peek(0)? == '#'
    {
        while !isBreakZ!(reader.peek(0)?)
        {
            reader.advance(1)?;
        }
    }

    let c = reader.peek(0)?;

    if scan_line_break(reader)?.is_none() && c != '\0'
    {
        return Err(ScanError::new(
            CONTEXT,
            start.clone(),
            format!("expected a comment or a line break, but found {}", char_repr(c)),
            reader.mark(),
        )
        .into());
    }

    Ok(())
}

/// Auto detect the content indentation: consume leading
/// blank lines, recording the deepest column seen
fn scan_indentation(reader: &mut StreamReader) -> Result<(String, usize, Option<Mark>)>
{
    let mut breaks = String::new();
    let mut max_indent = 0;
    let mut end = reader.mark();

    loop
    {
        let c = reader.peek(0)?;

        if c == ' '
        {
            reader.advance(1)?;

            if reader.column() > max_indent
            {
                max_indent = reader.column();
            }
        }
        else if let Some(brk) = scan_line_break(reader)?
        {
            breaks.push(brk);
            end = reader.mark();
        }
        else
        {
            break;
        }
    }

    Ok((breaks, max_indent, end))
}

/// Consume breaks and indentation up to .indent, returning
/// the breaks of any blank lines passed over
fn scan_breaks(reader: &mut StreamReader, indent: usize) -> Result<(String, Option<Mark>)>
{
    let mut chunks = String::new();
    let mut end = reader.mark();

    while reader.column() < indent && reader.peek(0)? == ' '
    {
        reader.advance(1)?;
    }

    while let Some(brk) = scan_line_break(reader)?
    {
        chunks.push(brk);
        end = reader.mark();

        while reader.column() < indent && reader.peek(0)? == ' '
        {
            reader.advance(1)?;
        }
    }

    Ok((chunks, end))
}
