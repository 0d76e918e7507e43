/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! This module exposes [`StreamReader`], a buffered,
//! position tracking character window over any
//! [`std::io::Read`] source.
//!
//! The reader decodes UTF-8 incrementally, refilling its
//! window in fixed size chunks as the scanner looks ahead.
//! A multi byte sequence split across a chunk boundary is
//! held back until the next refill completes it; a sequence
//! that can never complete is an error.
//!
//! Reads past the end of the stream are not an error:
//! [`peek`](StreamReader::peek) returns a NUL sentinel,
//! which no YAML stream may otherwise contain, and which
//! the scanner treats as end of stream everywhere.

mod error;

use std::{collections::VecDeque, io, str, sync::Arc};

use crate::{
    mark::Mark,
    scanner::flag::{ScanOptions, O_MARKS},
};

pub use self::error::{ReaderError, ReaderResult};

/// Sentinel returned when peeking past the end of stream
pub(crate) const NUL: char = '\0';

/// Codepoints of the line this mark sits in that are kept
/// for its snippet
const MARK_LOOKAHEAD: usize = 40;

/// A buffered character stream over an owned byte source,
/// tracking the codepoint index, line and column of its
/// read head
pub struct StreamReader
{
    source: Box<dyn io::Read>,

    /// Bytes read but not yet decoded; at most one partial
    /// UTF-8 sequence
    pending: Vec<u8>,
    /// Decoded codepoints not yet consumed
    buffer:  VecDeque<char>,
    eof:     bool,

    chunk_size:  usize,
    label:       Arc<str>,
    track_marks: bool,
    /// Consumed codepoints of the current line, kept for
    /// mark snippets
    line_buffer: String,

    index:  usize,
    line:   usize,
    column: usize,
}

impl StreamReader
{
    pub fn new<T>(source: T, opts: ScanOptions) -> Self
    where
        T: io::Read + 'static,
    {
        Self {
            source: Box::new(source),

            pending: Vec::new(),
            buffer: VecDeque::new(),
            eof: false,

            chunk_size: usize::max(opts.buffer_size, 1),
            label: opts.label.into(),
            track_marks: opts.flags.contains(O_MARKS),
            line_buffer: String::new(),

            index: 0,
            line: 0,
            column: 0,
        }
    }

    pub fn from_str(data: &str, opts: ScanOptions) -> Self
    {
        Self::new(io::Cursor::new(data.as_bytes().to_vec()), opts)
    }

    /// Codepoint offset of the read head from stream start
    pub fn index(&self) -> usize
    {
        self.index
    }

    /// Line of the read head, 0 based
    pub fn line(&self) -> usize
    {
        self.line
    }

    /// Codepoint offset of the read head into its line
    pub fn column(&self) -> usize
    {
        self.column
    }

    /// The codepoint .offset positions ahead of the read
    /// head, or NUL if the stream ends before it
    pub fn peek(&mut self, offset: usize) -> ReaderResult<char>
    {
        self.ensure(offset)?;

        Ok(self.buffer.get(offset).copied().unwrap_or(NUL))
    }

    /// Consume .amount codepoints, updating index, line and
    /// column as each one passes the read head
    pub fn advance(&mut self, amount: usize) -> ReaderResult<()>
    {
        self.ensure(amount.saturating_sub(1))?;

        for _ in 0..amount
        {
            let c = match self.buffer.pop_front()
            {
                Some(c) => c,
                None => break,
            };

            self.index += 1;

            // A lone carriage return is a line break, but the \r of
            // a \r\n pair is not; the pair breaks once, on the \n
            if c == '\r'
            {
                self.ensure(0)?;
            }

            let broke_line = matches!(c, '\n' | '\u{85}' | '\u{2028}' | '\u{2029}')
                || (c == '\r' && self.buffer.front() != Some(&'\n'));

            if broke_line
            {
                self.line += 1;
                self.column = 0;

                if self.track_marks
                {
                    self.line_buffer.clear();
                }
            }
            else if c != '\u{FEFF}'
            {
                self.column += 1;

                if self.track_marks
                {
                    self.line_buffer.push(c);
                }
            }
        }

        Ok(())
    }

    /// The next .length codepoints without consuming them,
    /// clamped to the remaining stream
    pub fn prefix(&mut self, length: usize) -> ReaderResult<String>
    {
        self.ensure(length.saturating_sub(1))?;

        Ok(self.buffer.iter().take(length).collect())
    }

    /// Consume and return the next .length codepoints.
    ///
    /// The span must not contain a line break; the column
    /// is bumped wholesale rather than per codepoint.
    pub fn prefix_advance(&mut self, length: usize) -> ReaderResult<String>
    {
        self.ensure(length.saturating_sub(1))?;

        let take = usize::min(length, self.buffer.len());
        let text: String = self.buffer.drain(..take).collect();

        self.index += take;
        self.column += take;

        if self.track_marks
        {
            self.line_buffer.push_str(&text);
        }

        Ok(text)
    }

    /// Refill the window until at least .lookahead + 1
    /// codepoints are buffered, or the stream ends
    pub fn ensure(&mut self, lookahead: usize) -> ReaderResult<()>
    {
        while !self.eof && self.buffer.len() <= lookahead
        {
            self.refill()?;
        }

        Ok(())
    }

    /// Snapshot the read head's position, or None if mark
    /// tracking is disabled
    pub fn mark(&self) -> Option<Mark>
    {
        if !self.track_marks
        {
            return None;
        }

        let after: String = self
            .buffer
            .iter()
            .copied()
            .take_while(|c| !is_break(*c))
            .take(MARK_LOOKAHEAD)
            .collect();

        Some(Mark::new(
            self.label.clone(),
            self.index,
            self.line,
            self.column,
            self.line_buffer.clone(),
            after,
        ))
    }

    fn refill(&mut self) -> ReaderResult<()>
    {
        let mut chunk = vec![0; self.chunk_size];
        let read = self.source.read(&mut chunk)?;

        if read == 0
        {
            self.eof = true;

            // A partial sequence that EOF cut short can never
            // complete
            if !self.pending.is_empty()
            {
                return Err(self.utf8_error());
            }

            return Ok(());
        }

        self.pending.extend_from_slice(&chunk[..read]);
        self.decode_pending()
    }

    fn decode_pending(&mut self) -> ReaderResult<()>
    {
        let pending = std::mem::take(&mut self.pending);

        let valid = match str::from_utf8(&pending)
        {
            Ok(_) => pending.len(),
            Err(e) => match e.error_len()
            {
                // The tail is a sequence the next chunk may complete
                None => e.valid_up_to(),
                Some(_) => return Err(self.utf8_error()),
            },
        };

        let (decodable, partial) = pending.split_at(valid);
        let text = match str::from_utf8(decodable)
        {
            Ok(text) => text,
            Err(_) => return Err(self.utf8_error()),
        };

        for c in text.chars()
        {
            if !is_printable(c)
            {
                return Err(ReaderError::NonPrintable {
                    label:     self.label.clone(),
                    codepoint: c,
                    position:  self.index + self.buffer.len(),
                });
            }

            self.buffer.push_back(c);
        }

        self.pending = partial.to_vec();

        Ok(())
    }

    fn utf8_error(&self) -> ReaderError
    {
        ReaderError::UTF8 {
            label:    self.label.clone(),
            position: self.index + self.buffer.len(),
        }
    }
}

impl std::fmt::Debug for StreamReader
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        f.debug_struct("StreamReader")
            .field("source", &"dyn <std::io::Read>")
            .field("label", &self.label)
            .field("index", &self.index)
            .field("line", &self.line)
            .field("column", &self.column)
            .field("buffered", &self.buffer.len())
            .field("eof", &self.eof)
            .finish()
    }
}

/// Codepoints YAML allows in a character stream: TAB, line
/// breaks, and the printable planes minus surrogates,
/// U+FFFE and U+FFFF
fn is_printable(c: char) -> bool
{
    matches!(c,
        '\t' | '\n' | '\r' | '\u{85}'
        | '\u{20}'..='\u{7E}'
        | '\u{A0}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}

fn is_break(c: char) -> bool
{
    matches!(c, '\n' | '\r' | '\u{85}' | '\u{2028}' | '\u{2029}')
}

#[cfg(test)]
mod tests
{
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::scanner::flag::O_ZEROED;

    fn reader(data: &str) -> StreamReader
    {
        StreamReader::from_str(data, ScanOptions::default())
    }

    #[test]
    fn peek_past_end_is_nul() -> ReaderResult<()>
    {
        let mut r = reader("ab");

        assert_eq!(r.peek(0)?, 'a');
        assert_eq!(r.peek(1)?, 'b');
        assert_eq!(r.peek(2)?, NUL);
        assert_eq!(r.peek(100)?, NUL);

        Ok(())
    }

    #[test]
    fn advance_tracks_position() -> ReaderResult<()>
    {
        let mut r = reader("ab\ncd");

        r.advance(2)?;
        assert_eq!((r.index(), r.line(), r.column()), (2, 0, 2));

        r.advance(1)?;
        assert_eq!((r.index(), r.line(), r.column()), (3, 1, 0));

        r.advance(2)?;
        assert_eq!((r.index(), r.line(), r.column()), (5, 1, 2));

        Ok(())
    }

    #[test]
    fn crlf_breaks_once() -> ReaderResult<()>
    {
        let mut r = reader("a\r\nb");

        r.advance(3)?;

        assert_eq!((r.line(), r.column()), (1, 0));
        assert_eq!(r.peek(0)?, 'b');

        Ok(())
    }

    #[test]
    fn lone_cr_breaks() -> ReaderResult<()>
    {
        let mut r = reader("a\rb");

        r.advance(2)?;

        assert_eq!((r.line(), r.column()), (1, 0));

        Ok(())
    }

    #[test]
    fn bom_does_not_advance_column() -> ReaderResult<()>
    {
        let mut r = reader("\u{FEFF}a");

        r.advance(1)?;

        assert_eq!((r.index(), r.column()), (1, 0));
        assert_eq!(r.peek(0)?, 'a');

        Ok(())
    }

    #[test]
    fn prefix_does_not_consume() -> ReaderResult<()>
    {
        let mut r = reader("hello");

        assert_eq!(r.prefix(3)?, "hel");
        assert_eq!(r.peek(0)?, 'h');

        Ok(())
    }

    #[test]
    fn prefix_advance_consumes() -> ReaderResult<()>
    {
        let mut r = reader("hello");

        assert_eq!(r.prefix_advance(3)?, "hel");
        assert_eq!((r.index(), r.column()), (3, 3));
        assert_eq!(r.peek(0)?, 'l');

        Ok(())
    }

    #[test]
    fn multibyte_sequence_split_across_refills() -> ReaderResult<()>
    {
        // U+2713 is three bytes in UTF-8; a two byte chunk size
        // forces the sequence to straddle a refill boundary
        let opts = ScanOptions::default().buffer_size(2);
        let mut r = StreamReader::from_str("a\u{2713}b", opts);

        assert_eq!(r.peek(0)?, 'a');
        assert_eq!(r.peek(1)?, '\u{2713}');
        assert_eq!(r.peek(2)?, 'b');

        Ok(())
    }

    #[test]
    fn truncated_sequence_at_eof_errors()
    {
        // First two bytes of a three byte sequence
        let mut r = StreamReader::new(
            io::Cursor::new(vec![0xE2, 0x9C]),
            ScanOptions::default(),
        );

        assert!(matches!(r.peek(0), Err(ReaderError::UTF8 { .. })));
    }

    #[test]
    fn invalid_sequence_errors()
    {
        let mut r = StreamReader::new(
            io::Cursor::new(vec![b'a', 0xFF, b'b']),
            ScanOptions::default(),
        );

        assert!(matches!(r.peek(0), Err(ReaderError::UTF8 { .. })));
    }

    #[test]
    fn non_printable_errors()
    {
        let mut r = reader("a\u{7}b");

        let err = r.peek(0);

        assert!(matches!(
            err,
            Err(ReaderError::NonPrintable {
                codepoint: '\u{7}',
                position: 1,
                ..
            })
        ));
    }

    #[test]
    fn mark_snapshots_position() -> ReaderResult<()>
    {
        let mut r = reader("key: value\nnext");

        r.advance(5)?;

        let mark = r.mark().ok_or_else(|| {
            ReaderError::IO(io::Error::new(io::ErrorKind::Other, "expected a mark"))
        })?;

        assert_eq!((mark.index(), mark.line(), mark.column()), (5, 0, 5));
        assert_eq!(mark.snippet(0, 75), "key: value\n     ^");

        Ok(())
    }

    #[test]
    fn zeroed_options_disable_marks() -> ReaderResult<()>
    {
        let opts = ScanOptions::default().flags(O_ZEROED);
        let mut r = StreamReader::from_str("data", opts);

        r.advance(1)?;

        assert!(r.mark().is_none());

        Ok(())
    }
}
