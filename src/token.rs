/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! The closed set of tokens a YAML stream can be broken
//! into, plus the small satellite types they carry.

/// Tokens that may be emitted by a YAML scanner
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token
{
    /// Virtual token for stream start, always the first
    /// token emitted
    StreamStart,

    /// Virtual token for stream end, always the last token
    /// emitted
    StreamEnd,

    /// A directive: its name, and the parsed value for
    /// `%YAML` and `%TAG` forms
    Directive(String, Option<DirectiveValue>),

    /// Start of a document: `---`
    DocumentStart,

    /// End of a document: `...`
    DocumentEnd,

    /// Start of a block sequence, e.g:
    ///
    /// ```yaml
    /// - one
    /// - two
    /// ```
    BlockSequenceStart,

    /// Start of a block mapping, e.g:
    ///
    /// ```yaml
    /// key: value
    /// ```
    BlockMappingStart,

    /// End of a block sequence or mapping
    BlockEnd,

    /// Start of a flow sequence: `[`
    FlowSequenceStart,

    /// End of a flow sequence: `]`
    FlowSequenceEnd,

    /// Start of a flow mapping: `{`
    FlowMappingStart,

    /// End of a flow mapping: `}`
    FlowMappingEnd,

    /// An entry in a block sequence: `- `
    BlockEntry,

    /// An entry in a flow collection: `,`
    FlowEntry,

    /// A mapping key, explicit (`? `) or deferred from a
    /// simple key candidate
    Key,

    /// A mapping value: `: `
    Value,

    /// An alias referencing an anchor: `*name`
    Alias(String),

    /// An anchor naming the next node: `&name`
    Anchor(String),

    /// A node tag: shorthand `(handle, suffix)`, verbatim
    /// or non specific with no handle
    Tag(Option<String>, String),

    /// Scalar content and the style it was written in
    Scalar(String, ScalarStyle),
}

impl Token
{
    /// The [`Marker`] variant of this token
    pub fn marker(&self) -> Marker
    {
        match self
        {
            Token::StreamStart => Marker::StreamStart,
            Token::StreamEnd => Marker::StreamEnd,
            Token::Directive(..) => Marker::Directive,
            Token::DocumentStart => Marker::DocumentStart,
            Token::DocumentEnd => Marker::DocumentEnd,
            Token::BlockSequenceStart => Marker::BlockSequenceStart,
            Token::BlockMappingStart => Marker::BlockMappingStart,
            Token::BlockEnd => Marker::BlockEnd,
            Token::FlowSequenceStart => Marker::FlowSequenceStart,
            Token::FlowSequenceEnd => Marker::FlowSequenceEnd,
            Token::FlowMappingStart => Marker::FlowMappingStart,
            Token::FlowMappingEnd => Marker::FlowMappingEnd,
            Token::BlockEntry => Marker::BlockEntry,
            Token::FlowEntry => Marker::FlowEntry,
            Token::Key => Marker::Key,
            Token::Value => Marker::Value,
            Token::Alias(_) => Marker::Alias,
            Token::Anchor(_) => Marker::Anchor,
            Token::Tag(..) => Marker::Tag,
            Token::Scalar(..) => Marker::Scalar,
        }
    }
}

/// The variants of [`Token`] without any associated data,
/// useful for checking the head of a token stream without
/// touching payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker
{
    StreamStart,
    StreamEnd,
    Directive,
    DocumentStart,
    DocumentEnd,
    BlockSequenceStart,
    BlockMappingStart,
    BlockEnd,
    FlowSequenceStart,
    FlowSequenceEnd,
    FlowMappingStart,
    FlowMappingEnd,
    BlockEntry,
    FlowEntry,
    Key,
    Value,
    Alias,
    Anchor,
    Tag,
    Scalar,
}

/// The parsed payload of a `%YAML` or `%TAG` directive, or
/// the raw text of a reserved one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectiveValue
{
    /// `%YAML <major>.<minor>`
    Version(u32, u32),

    /// `%TAG <handle> <prefix>`
    Tag(String, String),

    /// Any other directive, value kept verbatim
    Reserved(String),
}

/// The five styles a YAML scalar can be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarStyle
{
    Plain,
    SingleQuote,
    DoubleQuote,
    Literal,
    Folded,
}

impl ScalarStyle
{
    /// Whether the scalar was written without any quoting
    /// or block indicator
    pub fn plain(self) -> bool
    {
        matches!(self, ScalarStyle::Plain)
    }
}

#[cfg(test)]
mod tests
{
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn marker_tracks_variant()
    {
        let tokens = [
            (Token::Scalar("hello".into(), ScalarStyle::Plain), Marker::Scalar),
            (Token::Anchor("anchor".into()), Marker::Anchor),
            (Token::Directive("YAML".into(), Some(DirectiveValue::Version(1, 1))), Marker::Directive),
            (Token::Key, Marker::Key),
        ];

        for (token, marker) in &tokens
        {
            assert_eq!(token.marker(), *marker);
        }
    }

    #[test]
    fn style_plain_predicate()
    {
        assert!(ScalarStyle::Plain.plain());
        assert!(!ScalarStyle::SingleQuote.plain());
        assert!(!ScalarStyle::Literal.plain());
    }
}
