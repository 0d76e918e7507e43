/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Scanning of node tags and the pieces shared with %TAG
//! directives.
//!
//! A tag takes one of three shapes:
//!
//! ```yaml
//! !!str 'shorthand, handle + suffix'
//! !<tag:yaml.org,2002:str> 'verbatim, no handle'
//! ! 'non specific'
//! ```

use crate::{
    error::Result,
    mark::Mark,
    reader::StreamReader,
    scanner::{
        entry::TokenEntry,
        error::{char_repr, ScanError},
    },
    token::Token,
};

/// Scan a node tag, reader pointing at the leading '!'
pub(in crate::scanner) fn scan_tag(reader: &mut StreamReader) -> Result<TokenEntry>
{
    let start = reader.mark();
    let c = reader.peek(1)?;

    let (handle, suffix);

    if c == '<'
    {
        // Verbatim tag: !<...>
        reader.advance(2)?;

        handle = None;
        suffix = scan_tag_uri(reader, "tag", &start)?;

        if reader.peek(0)? != '>'
        {
            return Err(ScanError::new(
                "while scanning a tag",
                start,
                format!("expected '>', but found {}", char_repr(reader.peek(0)?)),
                reader.mark(),
            )
            .into());
        }

        reader.advance(1)?;
    }
    else if isBlankZ!(c)
    {
        // Non specific tag: a bare '!'
        handle = None;
        suffix = "!".into();

        reader.advance(1)?;
    }
    else
    {
        // Shorthand: find out whether a second '!' closes a
        // handle before the tag's end
        let mut use_handle = false;
        let mut length = 1;
        let mut probe = c;

        while !isSpaceZ!(probe)
        {
            if probe == '!'
            {
                use_handle = true;
                break;
            }

            length += 1;
            probe = reader.peek(length)?;
        }

        handle = match use_handle
        {
            true => Some(scan_tag_handle(reader, "tag", &start)?),
            false =>
            {
                reader.advance(1)?;

                Some("!".into())
            },
        };

        suffix = scan_tag_uri(reader, "tag", &start)?;
    }

    let c = reader.peek(0)?;

    if !isSpaceZ!(c)
    {
        return Err(ScanError::new(
            "while scanning a tag",
            start,
            format!("expected ' ', but found {}", char_repr(c)),
            reader.mark(),
        )
        .into());
    }

    let end = reader.mark();

    Ok(TokenEntry::new(Token::Tag(handle, suffix), start, end))
}

/// Scan a tag handle: a '!', optionally followed by word
/// characters and a closing '!'
pub(in crate::scanner) fn scan_tag_handle(
    reader: &mut StreamReader,
    what: &'static str,
    start: &Option<Mark>,
) -> Result<String>
{
    let c = reader.peek(0)?;

    if c != '!'
    {
        return Err(ScanError::new(
            context_for(what),
            start.clone(),
            format!("expected '!', but found {}", char_repr(c)),
            reader.mark(),
        )
        .into());
    }

    let mut length = 1;
    let mut c = reader.peek(length)?;

    // Only the primary handle '!' stands alone; any run of
    // word characters must be closed by a second '!'
    if c != ' '
    {
        while isWordChar!(c)
        {
            length += 1;
            c = reader.peek(length)?;
        }

        if c != '!'
        {
            reader.advance(length)?;

            return Err(ScanError::new(
                context_for(what),
                start.clone(),
                format!("expected '!', but found {}", char_repr(c)),
                reader.mark(),
            )
            .into());
        }

        length += 1;
    }

    reader.prefix_advance(length).map_err(Into::into)
}

/// Scan the URI portion of a tag or %TAG directive,
/// resolving %NN escapes
pub(in crate::scanner) fn scan_tag_uri(
    reader: &mut StreamReader,
    what: &'static str,
    start: &Option<Mark>,
) -> Result<String>
{
    let mut chunks = String::new();
    let mut length = 0;

    loop
    {
        let c = reader.peek(length)?;

        if !is_uri_char(c)
        {
            break;
        }

        if c == '%'
        {
            chunks.push_str(&reader.prefix_advance(length)?);
            length = 0;

            chunks.push_str(&scan_uri_escapes(reader, what, start)?);
        }
        else
        {
            length += 1;
        }
    }

    if length != 0
    {
        chunks.push_str(&reader.prefix_advance(length)?);
    }

    if chunks.is_empty()
    {
        return Err(ScanError::new(
            context_for(what),
            start.clone(),
            format!("expected URI, but found {}", char_repr(reader.peek(0)?)),
            reader.mark(),
        )
        .into());
    }

    Ok(chunks)
}

/// Decode a run of %NN escapes into the UTF-8 string they
/// spell
fn scan_uri_escapes(
    reader: &mut StreamReader,
    what: &'static str,
    start: &Option<Mark>,
) -> Result<String>
{
    let beginning = reader.mark();
    let mut bytes = Vec::new();

    while reader.peek(0)? == '%'
    {
        let one = reader.peek(1)?;
        let two = reader.peek(2)?;

        if !(isHex!(one) && isHex!(two))
        {
            return Err(ScanError::new(
                context_for(what),
                start.clone(),
                format!(
                    "expected URI escape sequence of 2 hexadecimal numbers, but found {} and {}",
                    char_repr(one),
                    char_repr(two)
                ),
                reader.mark(),
            )
            .into());
        }

        let byte = (hex_value(one) << 4) | hex_value(two);
        bytes.push(byte);

        reader.advance(3)?;
    }

    String::from_utf8(bytes).map_err(|_| {
        ScanError::new(
            context_for(what),
            start.clone(),
            "expected a URI in UTF-8",
            beginning,
        )
        .into()
    })
}

fn hex_value(c: char) -> u8
{
    c.to_digit(16).unwrap_or(0) as u8
}

fn context_for(what: &'static str) -> &'static str
{
    match what
    {
        "directive" => "while scanning a directive",
        _ => "while scanning a tag",
    }
}

/// Characters permitted in a tag URI
fn is_uri_char(c: char) -> bool
{
    isWordChar!(c)
        || matches!(
            c,
            '-' | ';'
                | '/'
                | '?'
                | ':'
                | '@'
                | '&'
                | '='
                | '+'
                | '$'
                | ','
                | '.'
                | '!'
                | '~'
                | '*'
                | '\''
                | '('
                | ')'
                | '['
                | ']'
                | '%'
        )
}
