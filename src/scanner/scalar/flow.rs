/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Scanning of single and double quoted scalars.
//!
//! Both styles may span lines, folding each line break into
//! a single space unless followed by further breaks. Single
//! quoted scalars know exactly one escape, `''`; double
//! quoted scalars carry the full escape table.

use crate::{
    error::Result,
    mark::Mark,
    reader::StreamReader,
    scanner::{
        entry::TokenEntry,
        error::{char_repr, ScanError},
        scalar::escape,
        scan_line_break,
    },
    token::{ScalarStyle, Token},
};

/// Scan a quoted scalar, reader pointing at the opening
/// quote
pub(in crate::scanner) fn scan_flow_scalar(
    reader: &mut StreamReader,
    style: ScalarStyle,
) -> Result<TokenEntry>
{
    let double = style == ScalarStyle::DoubleQuote;
    let start = reader.mark();

    let quote = reader.peek(0)?;
    reader.advance(1)?;

    let mut chunks = String::new();

    scan_nonspaces(reader, double, &start, &mut chunks)?;

    while reader.peek(0)? != quote
    {
        scan_spaces(reader, &start, &mut chunks)?;
        scan_nonspaces(reader, double, &start, &mut chunks)?;
    }

    reader.advance(1)?;
    let end = reader.mark();

    Ok(TokenEntry::new(Token::Scalar(chunks, style), start, end))
}

/// Consume everything up to the next whitespace, quote or
/// escape, resolving quote doubling and escape sequences as
/// they appear
fn scan_nonspaces(
    reader: &mut StreamReader,
    double: bool,
    start: &Option<Mark>,
    chunks: &mut String,
) -> Result<()>
{
    loop
    {
        let mut length = 0;

        loop
        {
            let c = reader.peek(length)?;

            if isBlankZ!(c) || matches!(c, '\'' | '"' | '\\')
            {
                break;
            }

            length += 1;
        }

        if length != 0
        {
            chunks.push_str(&reader.prefix_advance(length)?);
        }

        let c = reader.peek(0)?;

        if !double && c == '\'' && reader.peek(1)? == '\''
        {
            chunks.push('\'');
            reader.advance(2)?;
        }
        else if (double && c == '\'') || (!double && matches!(c, '"' | '\\'))
        {
            chunks.push(c);
            reader.advance(1)?;
        }
        else if double && c == '\\'
        {
            reader.advance(1)?;
            scan_escape(reader, start, chunks)?;
        }
        else
        {
            return Ok(());
        }
    }
}

/// Resolve one escape sequence, reader pointing just past
/// the backslash
fn scan_escape(reader: &mut StreamReader, start: &Option<Mark>, chunks: &mut String) -> Result<()>
{
    let c = reader.peek(0)?;

    if let Some(replacement) = escape::replacement(c)
    {
        chunks.push(replacement);
        reader.advance(1)?;

        return Ok(());
    }

    if let Some(width) = escape::code_width(c)
    {
        reader.advance(1)?;

        let hex = reader.prefix(width)?;

        if hex.chars().count() != width || !hex.chars().all(|c| isHex!(c))
        {
            return Err(ScanError::new(
                "while scanning a double-quoted scalar",
                start.clone(),
                format!(
                    "expected escape sequence of {} hexadecimal numbers, but found: {}",
                    width, hex
                ),
                reader.mark(),
            )
            .into());
        }

        let decimal = u32::from_str_radix(&hex, 16).ok();
        let decoded = decimal.and_then(char::from_u32);

        match decoded
        {
            Some(decoded) => chunks.push(decoded),
            None =>
            {
                return Err(ScanError::new(
                    "while scanning a double-quoted scalar",
                    start.clone(),
                    "found an invalid Unicode character escape code",
                    reader.mark(),
                )
                .into())
            },
        }

        reader.advance(width)?;

        return Ok(());
    }

    if scan_line_break(reader)?.is_some()
    {
        let breaks = scan_breaks(reader, start)?;
        chunks.push_str(&breaks);

        return Ok(());
    }

    Err(ScanError::new(
        "while scanning a double-quoted scalar",
        start.clone(),
        format!("found unknown escape character {}", char_repr(c)),
        reader.mark(),
    )
    .into())
}

/// Consume a run of blanks and breaks inside the scalar,
/// applying YAML's folding rules
fn scan_spaces(reader: &mut StreamReader, start: &Option<Mark>, chunks: &mut String) -> Result<()>
{
    let mut length = 0;

    while isBlank!(reader.peek(length)?)
    {
        length += 1;
    }

    let whitespaces = reader.prefix_advance(length)?;

    let c = reader.peek(0)?;

    if c == '\0'
    {
        return Err(ScanError::new(
            "while scanning a quoted scalar",
            start.clone(),
            "found unexpected end of stream",
            reader.mark(),
        )
        .into());
    }

    match scan_line_break(reader)?
    {
        Some(line_break) =>
        {
            let breaks = scan_breaks(reader, start)?;

            if line_break != '\n'
            {
                chunks.push(line_break);
            }
            else if breaks.is_empty()
            {
                chunks.push(' ');
            }

            chunks.push_str(&breaks);
        },
        None => chunks.push_str(&whitespaces),
    }

    Ok(())
}

/// Consume any further blank lines, collecting their breaks
fn scan_breaks(reader: &mut StreamReader, start: &Option<Mark>) -> Result<String>
{
    let mut chunks = String::new();

    loop
    {
        let prefix = reader.prefix(3)?;

        if (prefix == "---" || prefix == "...") && isBlankZ!(reader.peek(3)?)
        {
            return Err(ScanError::new(
                "while scanning a quoted scalar",
                start.clone(),
                "found unexpected document separator",
                reader.mark(),
            )
            .into());
        }

        while isBlank!(reader.peek(0)?)
        {
            reader.advance(1)?;
        }

        match scan_line_break(reader)?
        {
            Some(brk) => chunks.push(brk),
            None => return Ok(chunks),
        }
    }
}

#[cfg(test)]
mod tests
{
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::scanner::flag::ScanOptions;

    fn scan(data: &str, style: ScalarStyle) -> Result<Token>
    {
        let mut reader = StreamReader::from_str(data, ScanOptions::default());

        scan_flow_scalar(&mut reader, style).map(TokenEntry::into_token)
    }

    #[test]
    fn single_quote_simple() -> Result<()>
    {
        let token = scan("'hello world'", ScalarStyle::SingleQuote)?;

        assert_eq!(
            token,
            Token::Scalar("hello world".into(), ScalarStyle::SingleQuote)
        );

        Ok(())
    }

    #[test]
    fn single_quote_doubling() -> Result<()>
    {
        let token = scan("'it''s'", ScalarStyle::SingleQuote)?;

        assert_eq!(token, Token::Scalar("it's".into(), ScalarStyle::SingleQuote));

        Ok(())
    }

    #[test]
    fn double_quote_escapes() -> Result<()>
    {
        let token = scan(r#""tab\there\nnext""#, ScalarStyle::DoubleQuote)?;

        assert_eq!(
            token,
            Token::Scalar("tab\there\nnext".into(), ScalarStyle::DoubleQuote)
        );

        Ok(())
    }

    #[test]
    fn double_quote_hex_escapes() -> Result<()>
    {
        let token = scan(r#""\x41é\U0001F600""#, ScalarStyle::DoubleQuote)?;

        assert_eq!(
            token,
            Token::Scalar("A\u{e9}\u{1F600}".into(), ScalarStyle::DoubleQuote)
        );

        Ok(())
    }

    #[test]
    fn multiline_folds_to_space() -> Result<()>
    {
        let token = scan("'first\nsecond'", ScalarStyle::SingleQuote)?;

        assert_eq!(
            token,
            Token::Scalar("first second".into(), ScalarStyle::SingleQuote)
        );

        Ok(())
    }

    #[test]
    fn blank_line_keeps_break() -> Result<()>
    {
        let token = scan("'first\n\nsecond'", ScalarStyle::SingleQuote)?;

        assert_eq!(
            token,
            Token::Scalar("first\nsecond".into(), ScalarStyle::SingleQuote)
        );

        Ok(())
    }

    #[test]
    fn unknown_escape_errors()
    {
        let result = scan(r#""\q""#, ScalarStyle::DoubleQuote);

        assert!(result.is_err());
    }

    #[test]
    fn bad_hex_escape_errors()
    {
        let result = scan(r#""\x4z""#, ScalarStyle::DoubleQuote);

        assert!(result.is_err());
    }

    #[test]
    fn unterminated_errors()
    {
        let result = scan("'no terminus", ScalarStyle::SingleQuote);

        assert!(result.is_err());
    }

    #[test]
    fn document_separator_inside_errors()
    {
        let result = scan("'text\n--- '", ScalarStyle::SingleQuote);

        assert!(result.is_err());
    }
}
