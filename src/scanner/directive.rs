/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Scanning of directives: `%YAML <major>.<minor>`,
//! `%TAG <handle> <prefix>`, and reserved directives whose
//! value is carried verbatim.

use atoi::atoi;

use crate::{
    error::Result,
    mark::Mark,
    reader::StreamReader,
    scanner::{
        entry::TokenEntry,
        error::{char_repr, ScanError},
        scan_line_break,
        tag::{scan_tag_handle, scan_tag_uri},
    },
    token::{DirectiveValue, Token},
};

const CONTEXT: &str = "while scanning a directive";

/// Scan a directive, reader pointing at the '%' indicator
pub(in crate::scanner) fn scan_directive(reader: &mut StreamReader) -> Result<TokenEntry>
{
    let start = reader.mark();
    reader.advance(1)?;

    let name = scan_directive_name(reader, &start)?;

    let (value, end) = match name.as_str()
    {
        "YAML" =>
        {
            let value = scan_version_value(reader, &start)?;

            (Some(value), reader.mark())
        },
        "TAG" =>
        {
            let value = scan_tag_value(reader, &start)?;

            (Some(value), reader.mark())
        },
        _ =>
        {
            // A reserved directive; its value is everything up to
            // the line's end, kept verbatim
            while reader.peek(0)? == ' '
            {
                reader.advance(1)?;
            }

            let mut length = 0;
            while !isBreakZ!(reader.peek(length)?)
            {
                length += 1;
            }

            let rest = reader.prefix_advance(length)?;
            let end = reader.mark();

            let value = match rest.is_empty()
            {
                true => None,
                false => Some(DirectiveValue::Reserved(rest)),
            };

            (value, end)
        },
    };

    scan_ignored_line(reader, &start)?;

    Ok(TokenEntry::new(Token::Directive(name, value), start, end))
}

fn scan_directive_name(reader: &mut StreamReader, start: &Option<Mark>) -> Result<String>
{
    let mut length = 0;

    while isWordChar!(reader.peek(length)?)
    {
        length += 1;
    }

    if length == 0
    {
        return Err(ScanError::new(
            CONTEXT,
            start.clone(),
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

    if !isSpaceZ!(c)
    {
        return Err(ScanError::new(
            CONTEXT,
            start.clone(),
            format!(
                "expected an alphabetic or numeric character, but found {}",
                char_repr(c)
            ),
            reader.mark(),
        )
        .into());
    }

    Ok(name)
}

fn scan_version_value(reader: &mut StreamReader, start: &Option<Mark>) -> Result<DirectiveValue>
{
    while reader.peek(0)? == ' '
    {
        reader.advance(1)?;
    }

    let major = scan_version_number(reader, start)?;

    if reader.peek(0)? != '.'
    {
        return Err(ScanError::new(
            CONTEXT,
            start.clone(),
            format!(
                "expected a digit or '.', but found {}",
                char_repr(reader.peek(0)?)
            ),
            reader.mark(),
        )
        .into());
    }

    reader.advance(1)?;

    let minor = scan_version_number(reader, start)?;
    let c = reader.peek(0)?;

    if !isSpaceZ!(c)
    {
        return Err(ScanError::new(
            CONTEXT,
            start.clone(),
            format!("expected a digit or ' ', but found {}", char_repr(c)),
            reader.mark(),
        )
        .into());
    }

    Ok(DirectiveValue::Version(major, minor))
}

fn scan_version_number(reader: &mut StreamReader, start: &Option<Mark>) -> Result<u32>
{
    let mut length = 0;

    while reader.peek(length)?.is_ascii_digit()
    {
        length += 1;
    }

    if length == 0
    {
        return Err(ScanError::new(
            CONTEXT,
            start.clone(),
            format!("expected a digit, but found {}", char_repr(reader.peek(0)?)),
            reader.mark(),
        )
        .into());
    }

    let digits = reader.prefix_advance(length)?;

    atoi::<u32>(digits.as_bytes()).ok_or_else(|| {
        ScanError::new(
            CONTEXT,
            start.clone(),
            format!("found an invalid version number: {}", digits),
            reader.mark(),
        )
        .into()
    })
}

fn scan_tag_value(reader: &mut StreamReader, start: &Option<Mark>) -> Result<DirectiveValue>
{
    while reader.peek(0)? == ' '
    {
        reader.advance(1)?;
    }

    let handle = scan_tag_handle(reader, "directive", start)?;

    if reader.peek(0)? != ' '
    {
        return Err(ScanError::new(
            CONTEXT,
            start.clone(),
            format!("expected ' ', but found {}", char_repr(reader.peek(0)?)),
            reader.mark(),
        )
        .into());
    }

    while reader.peek(0)? == ' '
    {
        reader.advance(1)?;
    }

    let prefix = scan_tag_uri(reader, "directive", start)?;
    let c = reader.peek(0)?;

    if !isSpaceZ!(c)
    {
        return Err(ScanError::new(
            CONTEXT,
            start.clone(),
            format!("expected ' ', but found {}", char_repr(c)),
            reader.mark(),
        )
        .into());
    }

    Ok(DirectiveValue::Tag(handle, prefix))
}

/// Consume trailing blanks, an optional comment, and the
/// terminating line break
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

#[cfg(test)]
mod tests
{
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::scanner::flag::ScanOptions;

    fn scan(data: &str) -> Result<Token>
    {
        let mut reader = StreamReader::from_str(data, ScanOptions::default());

        scan_directive(&mut reader).map(TokenEntry::into_token)
    }

    #[test]
    fn yaml_version() -> Result<()>
    {
        let token = scan("%YAML 1.1\n")?;

        assert_eq!(
            token,
            Token::Directive("YAML".into(), Some(DirectiveValue::Version(1, 1)))
        );

        Ok(())
    }

    #[test]
    fn yaml_version_multidigit() -> Result<()>
    {
        let token = scan("%YAML 10.23\n")?;

        assert_eq!(
            token,
            Token::Directive("YAML".into(), Some(DirectiveValue::Version(10, 23)))
        );

        Ok(())
    }

    #[test]
    fn tag_named_handle() -> Result<()>
    {
        let token = scan("%TAG !e! tag:example.com,2000:app/\n")?;

        assert_eq!(
            token,
            Token::Directive(
                "TAG".into(),
                Some(DirectiveValue::Tag(
                    "!e!".into(),
                    "tag:example.com,2000:app/".into()
                ))
            )
        );

        Ok(())
    }

    #[test]
    fn tag_primary_handle() -> Result<()>
    {
        let token = scan("%TAG ! !local-\n")?;

        assert_eq!(
            token,
            Token::Directive(
                "TAG".into(),
                Some(DirectiveValue::Tag("!".into(), "!local-".into()))
            )
        );

        Ok(())
    }

    #[test]
    fn reserved_keeps_value() -> Result<()>
    {
        let token = scan("%FOO bar baz\n")?;

        assert_eq!(
            token,
            Token::Directive(
                "FOO".into(),
                Some(DirectiveValue::Reserved("bar baz".into()))
            )
        );

        Ok(())
    }

    #[test]
    fn reserved_without_value() -> Result<()>
    {
        let token = scan("%FOO\n")?;

        assert_eq!(token, Token::Directive("FOO".into(), None));

        Ok(())
    }

    #[test]
    fn trailing_comment_is_ignored() -> Result<()>
    {
        let token = scan("%YAML 1.2 # comment\n")?;

        assert_eq!(
            token,
            Token::Directive("YAML".into(), Some(DirectiveValue::Version(1, 2)))
        );

        Ok(())
    }

    #[test]
    fn missing_version_errors()
    {
        assert!(scan("%YAML \n").is_err());
    }

    #[test]
    fn non_numeric_version_errors()
    {
        assert!(scan("%YAML 1.x\n").is_err());
    }

    #[test]
    fn garbage_after_version_errors()
    {
        assert!(scan("%YAML 1.1x\n").is_err());
    }

    #[test]
    fn unclosed_directive_handle_errors()
    {
        assert!(scan("%TAG !bad tag:example.com\n").is_err());
    }

    #[test]
    fn empty_name_errors()
    {
        assert!(scan("% \n").is_err());
    }
}
