/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! This module exposes the [`Scanner`], which tokenizes a
//! YAML character stream on demand.
//!
//! Tokens are pulled one at a time with [`next`], but are
//! produced into an internal queue, because a handful of
//! YAML constructs can only be recognized retroactively:
//! a plain scalar followed by ': ' turns out to have been a
//! mapping key, and the Key (and possibly the start of the
//! mapping itself) must be spliced in *before* tokens that
//! were already buffered. The queue plus the simple key
//! candidate table make that splice an O(small) operation
//! rather than a re-scan.
//!
//! [`next`]: Scanner::next

#[macro_use]
mod macros;

mod anchor;
mod context;
mod directive;
mod entry;
mod error;
pub(crate) mod flag;
mod key;
mod scalar;
mod tag;

#[cfg(test)]
mod tests;

use std::{collections::BTreeMap, io};

use crate::{
    error::Result,
    queue::Queue,
    reader::{StreamReader, NUL},
    scanner::{
        anchor::{scan_anchor, AnchorKind},
        context::{Context, Indent, STARTING_INDENT},
        directive::scan_directive,
        key::SimpleKey,
        scalar::{block::scan_block_scalar, flow::scan_flow_scalar, plain::scan_plain_scalar},
        tag::scan_tag,
    },
    token::{Marker, ScalarStyle, Token},
};

pub use self::{
    entry::TokenEntry,
    error::{ScanError, ScanResult},
    flag::{Flags, ScanOptions, O_MARKS, O_ZEROED},
};

use self::scalar::escape;

/// The YAML tokenizer.
///
/// Owns its reader and produces [`TokenEntry`]s on demand,
/// starting with [`Token::StreamStart`] and ending with
/// [`Token::StreamEnd`], after which [`has_next`] reports
/// false.
///
/// [`has_next`]: Scanner::has_next
#[derive(Debug)]
pub struct Scanner
{
    reader: StreamReader,

    /// Tokens scanned but not yet handed to the caller
    queue: Queue<TokenEntry>,
    /// Count of tokens the caller has consumed, making
    /// .taken + .queue.len() the number of the next token
    /// scanned
    taken: usize,
    /// Set once StreamEnd has been produced
    done:  bool,

    context: Context,

    /// Simple key candidates, by flow level
    simple_keys:      BTreeMap<usize, SimpleKey>,
    /// Whether the next token could start a simple key;
    /// true at line starts and after indicators that open a
    /// key position
    allow_simple_key: bool,
}

impl Scanner
{
    /// Scan the given byte source
    pub fn new<T>(source: T, opts: ScanOptions) -> Self
    where
        T: io::Read + 'static,
    {
        Self::with_reader(StreamReader::new(source, opts))
    }

    /// Scan an in-memory string
    pub fn from_str(data: &str, opts: ScanOptions) -> Self
    {
        Self::with_reader(StreamReader::from_str(data, opts))
    }

    pub fn with_reader(reader: StreamReader) -> Self
    {
        let mut scanner = Self {
            reader,

            queue: Queue::new(),
            taken: 0,
            done: false,

            context: Context::new(),

            simple_keys: BTreeMap::new(),
            allow_simple_key: true,
        };

        scanner.fetch_stream_start();

        scanner
    }

    /// Whether another token remains in the stream
    pub fn has_next(&mut self) -> Result<bool>
    {
        self.check(&[])
    }

    /// Whether the next token's [`Marker`] is one of
    /// .markers; an empty slice matches any token
    pub fn check(&mut self, markers: &[Marker]) -> Result<bool>
    {
        self.fetch_while_needed()?;

        match self.queue.front()
        {
            Some(entry) => Ok(markers.is_empty() || markers.contains(&entry.marker())),
            None => Ok(false),
        }
    }

    /// The next token, without consuming it
    pub fn peek(&mut self) -> Result<&TokenEntry>
    {
        self.fetch_while_needed()?;

        match self.queue.front()
        {
            Some(entry) => Ok(entry),
            None => Err(self.exhausted()),
        }
    }

    /// Consume and return the next token
    pub fn next(&mut self) -> Result<TokenEntry>
    {
        self.fetch_while_needed()?;

        match self.queue.pop()
        {
            Some(entry) =>
            {
                self.taken += 1;

                Ok(entry)
            },
            None => Err(self.exhausted()),
        }
    }

    fn exhausted(&self) -> crate::error::Error
    {
        ScanError::plain("all tokens have been consumed", self.reader.mark()).into()
    }

    fn fetch_while_needed(&mut self) -> Result<()>
    {
        while self.need_more_tokens()?
        {
            self.fetch_more_tokens()?;
        }

        Ok(())
    }

    /// More tokens must be scanned if the queue is empty,
    /// or if its head could yet become a mapping key
    fn need_more_tokens(&mut self) -> Result<bool>
    {
        if self.done
        {
            return Ok(false);
        }

        if self.queue.is_empty()
        {
            return Ok(true);
        }

        self.stale_simple_keys()?;

        let next_possible = self.simple_keys.values().next().map(SimpleKey::token_number);

        Ok(next_possible == Some(self.taken))
    }

    /// Scan the token(s) starting at the next content
    /// character, dispatching on what it is
    fn fetch_more_tokens(&mut self) -> Result<()>
    {
        self.scan_to_next_token()?;
        self.stale_simple_keys()?;

        let column = self.reader.column();
        self.unwind_indent(column.into());

        let c = self.reader.peek(0)?;

        if c == NUL
        {
            return self.fetch_stream_end();
        }

        if c == '%' && self.reader.column() == 0
        {
            return self.fetch_directive();
        }

        if c == '-' && self.check_document_indicator("---")?
        {
            return self.fetch_document_indicator(Token::DocumentStart);
        }

        if c == '.' && self.check_document_indicator("...")?
        {
            return self.fetch_document_indicator(Token::DocumentEnd);
        }

        match c
        {
            '[' => return self.fetch_flow_collection_start(Token::FlowSequenceStart),
            '{' => return self.fetch_flow_collection_start(Token::FlowMappingStart),
            ']' => return self.fetch_flow_collection_end(Token::FlowSequenceEnd),
            '}' => return self.fetch_flow_collection_end(Token::FlowMappingEnd),
            ',' => return self.fetch_flow_entry(),
            _ =>
            {},
        }

        if c == '-' && self.check_follows_blank()?
        {
            return self.fetch_block_entry();
        }

        if c == '?' && self.check_key()?
        {
            return self.fetch_key();
        }

        if c == ':' && self.check_value()?
        {
            return self.fetch_value();
        }

        match c
        {
            '*' => return self.fetch_anchor(AnchorKind::Alias),
            '&' => return self.fetch_anchor(AnchorKind::Anchor),
            '!' => return self.fetch_tag(),
            '\'' => return self.fetch_flow_scalar(ScalarStyle::SingleQuote),
            '"' => return self.fetch_flow_scalar(ScalarStyle::DoubleQuote),
            '|' if self.context.is_block() =>
            {
                return self.fetch_block_scalar(ScalarStyle::Literal)
            },
            '>' if self.context.is_block() => return self.fetch_block_scalar(ScalarStyle::Folded),
            _ =>
            {},
        }

        if self.check_plain()?
        {
            return self.fetch_plain();
        }

        let mut repr = match escape::mnemonic(c)
        {
            Some(m) => format!("\\{}", m),
            None => c.to_string(),
        };

        if c == '\t'
        {
            repr.push_str("(TAB)");
        }

        Err(ScanError::new(
            "while scanning for the next token",
            None,
            format!(
                "found character '{}' that cannot start any token. (Do not use {} for indentation)",
                repr, repr
            ),
            self.reader.mark(),
        )
        .into())
    }

    /// Skip whitespace, comments and line breaks up to the
    /// next content character
    fn scan_to_next_token(&mut self) -> Result<()>
    {
        if self.reader.index() == 0 && self.reader.peek(0)? == '\u{FEFF}'
        {
            self.reader.advance(1)?;
        }

        loop
        {
            let mut length = 0;

            // Tabs may precede any token; only content
            // indentation is space-only, and the scalar
            // scanners enforce that themselves
            while isBlank!(self.reader.peek(length)?)
            {
                length += 1;
            }

            if length != 0
            {
                self.reader.advance(length)?;
            }

            if self.reader.peek(0)? == '#'
            {
                let mut length = 0;

                while !isBreakZ!(self.reader.peek(length)?)
                {
                    length += 1;
                }

                if length != 0
                {
                    self.reader.advance(length)?;
                }
            }

            match scan_line_break(&mut self.reader)?
            {
                Some(_) =>
                {
                    if self.context.is_block()
                    {
                        self.allow_simple_key = true;
                    }
                },
                None => return Ok(()),
            }
        }
    }

    /// Drop key candidates the reader has moved out of
    /// reach of; a required candidate going stale is an
    /// error
    fn stale_simple_keys(&mut self) -> Result<()>
    {
        let index = self.reader.index();
        let line = self.reader.line();

        let mut stale = Vec::new();

        for (&level, key) in self.simple_keys.iter()
        {
            if key.is_stale(index, line)
            {
                if key.required()
                {
                    return Err(ScanError::new(
                        "while scanning a simple key",
                        key.mark().cloned(),
                        "could not find expected ':'",
                        self.reader.mark(),
                    )
                    .into());
                }

                stale.push(level);
            }
        }

        for level in stale
        {
            self.simple_keys.remove(&level);
        }

        Ok(())
    }

    /// Remember the current position as a key candidate for
    /// the current flow level, replacing any previous one
    fn save_simple_key(&mut self) -> Result<()>
    {
        let required =
            self.context.is_block() && self.context.indent() == self.reader.column();

        if required && !self.allow_simple_key
        {
            return Err(ScanError::plain(
                "a simple key is required only if it is the first token in the current line",
                self.reader.mark(),
            )
            .into());
        }

        if self.allow_simple_key
        {
            self.remove_simple_key()?;

            let token_number = self.taken + self.queue.len();
            let key = SimpleKey::new(
                token_number,
                required,
                self.reader.index(),
                self.reader.line(),
                self.reader.column(),
                self.reader.mark(),
            );

            self.simple_keys.insert(self.context.flow(), key);
        }

        Ok(())
    }

    /// Drop the candidate for the current flow level; an
    /// error if it was required
    fn remove_simple_key(&mut self) -> Result<()>
    {
        if let Some(key) = self.simple_keys.remove(&self.context.flow())
        {
            if key.required()
            {
                return Err(ScanError::new(
                    "while scanning a simple key",
                    key.mark().cloned(),
                    "could not find expected ':'",
                    self.reader.mark(),
                )
                .into());
            }
        }

        Ok(())
    }

    /// Pop indentation levels deeper than .column, emitting
    /// a BlockEnd for each
    fn unwind_indent(&mut self, column: Indent)
    {
        if self.context.is_flow()
        {
            return;
        }

        while self.context.indent() > column
        {
            let mark = self.reader.mark();

            self.context.pop_indent();
            self.queue
                .push(TokenEntry::new(Token::BlockEnd, mark.clone(), mark));
        }
    }

    fn fetch_stream_start(&mut self)
    {
        let mark = self.reader.mark();

        self.queue
            .push(TokenEntry::new(Token::StreamStart, mark.clone(), mark));
    }

    fn fetch_stream_end(&mut self) -> Result<()>
    {
        self.unwind_indent(STARTING_INDENT);
        self.remove_simple_key()?;

        self.allow_simple_key = false;
        self.simple_keys.clear();

        let mark = self.reader.mark();

        self.queue
            .push(TokenEntry::new(Token::StreamEnd, mark.clone(), mark));
        self.done = true;

        Ok(())
    }

    fn fetch_directive(&mut self) -> Result<()>
    {
        self.unwind_indent(STARTING_INDENT);
        self.remove_simple_key()?;
        self.allow_simple_key = false;

        let entry = scan_directive(&mut self.reader)?;
        self.queue.push(entry);

        Ok(())
    }

    fn fetch_document_indicator(&mut self, token: Token) -> Result<()>
    {
        self.unwind_indent(STARTING_INDENT);
        self.remove_simple_key()?;
        self.allow_simple_key = false;

        let start = self.reader.mark();
        self.reader.advance(3)?;
        let end = self.reader.mark();

        self.queue.push(TokenEntry::new(token, start, end));

        Ok(())
    }

    fn fetch_flow_collection_start(&mut self, token: Token) -> Result<()>
    {
        self.save_simple_key()?;

        if self.context.flow_increment().is_none()
        {
            return Err(ScanError::plain(
                "found more nested flow collections than can be tracked",
                self.reader.mark(),
            )
            .into());
        }

        self.allow_simple_key = true;

        let start = self.reader.mark();
        self.reader.advance(1)?;
        let end = self.reader.mark();

        self.queue.push(TokenEntry::new(token, start, end));

        Ok(())
    }

    fn fetch_flow_collection_end(&mut self, token: Token) -> Result<()>
    {
        self.remove_simple_key()?;

        if self.context.flow_decrement().is_none()
        {
            let indicator = match token
            {
                Token::FlowSequenceEnd => ']',
                _ => '}',
            };

            return Err(ScanError::plain(
                format!("found '{}' outside of any flow collection", indicator),
                self.reader.mark(),
            )
            .into());
        }

        self.allow_simple_key = false;

        let start = self.reader.mark();
        self.reader.advance(1)?;
        let end = self.reader.mark();

        self.queue.push(TokenEntry::new(token, start, end));

        Ok(())
    }

    fn fetch_flow_entry(&mut self) -> Result<()>
    {
        self.allow_simple_key = true;
        self.remove_simple_key()?;

        let start = self.reader.mark();
        self.reader.advance(1)?;
        let end = self.reader.mark();

        self.queue.push(TokenEntry::new(Token::FlowEntry, start, end));

        Ok(())
    }

    fn fetch_block_entry(&mut self) -> Result<()>
    {
        if self.context.is_block()
        {
            if !self.allow_simple_key
            {
                return Err(ScanError::plain(
                    "sequence entries are not allowed here",
                    self.reader.mark(),
                )
                .into());
            }

            if self.context.add_indent(self.reader.column())
            {
                let mark = self.reader.mark();

                self.queue.push(TokenEntry::new(
                    Token::BlockSequenceStart,
                    mark.clone(),
                    mark,
                ));
            }
        }

        self.allow_simple_key = true;
        self.remove_simple_key()?;

        let start = self.reader.mark();
        self.reader.advance(1)?;
        let end = self.reader.mark();

        self.queue.push(TokenEntry::new(Token::BlockEntry, start, end));

        Ok(())
    }

    fn fetch_key(&mut self) -> Result<()>
    {
        if self.context.is_block()
        {
            if !self.allow_simple_key
            {
                return Err(ScanError::plain(
                    "mapping keys are not allowed here",
                    self.reader.mark(),
                )
                .into());
            }

            if self.context.add_indent(self.reader.column())
            {
                let mark = self.reader.mark();

                self.queue.push(TokenEntry::new(
                    Token::BlockMappingStart,
                    mark.clone(),
                    mark,
                ));
            }
        }

        self.allow_simple_key = self.context.is_block();
        self.remove_simple_key()?;

        let start = self.reader.mark();
        self.reader.advance(1)?;
        let end = self.reader.mark();

        self.queue.push(TokenEntry::new(Token::Key, start, end));

        Ok(())
    }

    fn fetch_value(&mut self) -> Result<()>
    {
        match self.simple_keys.remove(&self.context.flow())
        {
            // The buffered token the candidate points at was a key
            // after all; splice Key (and, on a first key, the
            // mapping start) in front of it
            Some(key) =>
            {
                let at = key.token_number() - self.taken;

                self.queue.insert(
                    at,
                    TokenEntry::new(Token::Key, key.mark().cloned(), key.mark().cloned()),
                );

                if self.context.is_block() && self.context.add_indent(key.column())
                {
                    self.queue.insert(
                        at,
                        TokenEntry::new(
                            Token::BlockMappingStart,
                            key.mark().cloned(),
                            key.mark().cloned(),
                        ),
                    );
                }

                self.allow_simple_key = false;
            },
            None =>
            {
                if self.context.is_block()
                {
                    if !self.allow_simple_key
                    {
                        return Err(ScanError::plain(
                            "mapping values are not allowed here",
                            self.reader.mark(),
                        )
                        .into());
                    }

                    if self.context.add_indent(self.reader.column())
                    {
                        let mark = self.reader.mark();

                        self.queue.push(TokenEntry::new(
                            Token::BlockMappingStart,
                            mark.clone(),
                            mark,
                        ));
                    }
                }

                self.allow_simple_key = self.context.is_block();
                self.remove_simple_key()?;
            },
        }

        let start = self.reader.mark();
        self.reader.advance(1)?;
        let end = self.reader.mark();

        self.queue.push(TokenEntry::new(Token::Value, start, end));

        Ok(())
    }

    fn fetch_anchor(&mut self, kind: AnchorKind) -> Result<()>
    {
        self.save_simple_key()?;
        self.allow_simple_key = false;

        let entry = scan_anchor(&mut self.reader, kind)?;
        self.queue.push(entry);

        Ok(())
    }

    fn fetch_tag(&mut self) -> Result<()>
    {
        self.save_simple_key()?;
        self.allow_simple_key = false;

        let entry = scan_tag(&mut self.reader)?;
        self.queue.push(entry);

        Ok(())
    }

    fn fetch_block_scalar(&mut self, style: ScalarStyle) -> Result<()>
    {
        self.allow_simple_key = true;
        self.remove_simple_key()?;

        let entry = scan_block_scalar(&mut self.reader, style, self.context.indent())?;
        self.queue.push(entry);

        Ok(())
    }

    fn fetch_flow_scalar(&mut self, style: ScalarStyle) -> Result<()>
    {
        self.save_simple_key()?;
        self.allow_simple_key = false;

        let entry = scan_flow_scalar(&mut self.reader, style)?;
        self.queue.push(entry);

        Ok(())
    }

    fn fetch_plain(&mut self) -> Result<()>
    {
        self.save_simple_key()?;
        self.allow_simple_key = false;

        let entry =
            scan_plain_scalar(&mut self.reader, &self.context, &mut self.allow_simple_key)?;
        self.queue.push(entry);

        Ok(())
    }

    fn check_document_indicator(&mut self, which: &str) -> Result<bool>
    {
        Ok(self.reader.column() == 0
            && self.reader.prefix(3)? == which
            && isBlankZ!(self.reader.peek(3)?))
    }

    /// Is the indicator at the head followed by a blank,
    /// break or end of stream?
    fn check_follows_blank(&mut self) -> Result<bool>
    {
        Ok(isBlankZ!(self.reader.peek(1)?))
    }

    fn check_key(&mut self) -> Result<bool>
    {
        match self.context.is_flow()
        {
            true => Ok(true),
            false => self.check_follows_blank(),
        }
    }

    fn check_value(&mut self) -> Result<bool>
    {
        match self.context.is_flow()
        {
            true => Ok(true),
            false => self.check_follows_blank(),
        }
    }

    /// Could the head character start a plain scalar?
    fn check_plain(&mut self) -> Result<bool>
    {
        let c = self.reader.peek(0)?;

        let head_ok = !isBlankZ!(c)
            && !matches!(
                c,
                '-' | '?'
                    | ':'
                    | ','
                    | '['
                    | ']'
                    | '{'
                    | '}'
                    | '#'
                    | '&'
                    | '*'
                    | '!'
                    | '|'
                    | '>'
                    | '\''
                    | '"'
                    | '%'
                    | '@'
                    | '`'
            );

        if head_ok
        {
            return Ok(true);
        }

        // '-', and in block context '?' and ':', may still start
        // one if no blank follows
        let next_ok = !isBlankZ!(self.reader.peek(1)?);

        Ok(next_ok && (c == '-' || (self.context.is_block() && matches!(c, '?' | ':'))))
    }
}

/// Consume one line break at the head, normalizing CR, CRLF
/// and NEL to '\n' while preserving LS and PS
pub(in crate::scanner) fn scan_line_break(reader: &mut StreamReader) -> Result<Option<char>>
{
    let c = reader.peek(0)?;

    match c
    {
        '\r' =>
        {
            let amount = if reader.peek(1)? == '\n' { 2 } else { 1 };
            reader.advance(amount)?;

            Ok(Some('\n'))
        },
        '\n' | '\u{85}' =>
        {
            reader.advance(1)?;

            Ok(Some('\n'))
        },
        '\u{2028}' | '\u{2029}' =>
        {
            reader.advance(1)?;

            Ok(Some(c))
        },
        _ => Ok(None),
    }
}
