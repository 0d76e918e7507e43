/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Test cases for the scalar styles as they appear in a
//! stream; the per style corner cases live with their
//! scanning code.

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn plain_folds_across_lines()
{
    let data = "a\n b";
    let mut s = scanner(data);

    tokens!(s =>
        | StreamStart                               => "expected start of stream",
        | Scalar("a b".into(), Plain)               => "expected a folded plain scalar",
        | StreamEnd                                 => "expected end of stream",
        @ None                                      => "expected stream to be finished"
    );
}

#[test]
fn plain_stops_at_comment()
{
    let data = "word # and a comment";
    let mut s = scanner(data);

    tokens!(s =>
        | StreamStart                               => "expected start of stream",
        | Scalar("word".into(), Plain)              => "expected a scalar",
        | StreamEnd                                 => "expected end of stream",
        @ None                                      => "expected stream to be finished"
    );
}

#[test]
fn single_quoted()
{
    let data = "'hello ''quoted'' world'";
    let mut s = scanner(data);

    tokens!(s =>
        | StreamStart                               => "expected start of stream",
        | Scalar("hello 'quoted' world".into(), SingleQuote) => "expected a scalar",
        | StreamEnd                                 => "expected end of stream",
        @ None                                      => "expected stream to be finished"
    );
}

#[test]
fn double_quoted_escapes()
{
    let data = r#""tab\there ☺""#;
    let mut s = scanner(data);

    tokens!(s =>
        | StreamStart                               => "expected start of stream",
        | Scalar("tab\there \u{263A}".into(), DoubleQuote) => "expected a scalar",
        | StreamEnd                                 => "expected end of stream",
        @ None                                      => "expected stream to be finished"
    );
}

#[test]
fn literal_keeps_line_breaks()
{
    let data = "|\n  line one\n  line two\n";
    let mut s = scanner(data);

    tokens!(s =>
        | StreamStart                               => "expected start of stream",
        | Scalar("line one\nline two\n".into(), Literal) => "expected a literal scalar",
        | StreamEnd                                 => "expected end of stream",
        @ None                                      => "expected stream to be finished"
    );
}

#[test]
fn folded_joins_lines()
{
    let data = ">\n a\n b\n\n c\n";
    let mut s = scanner(data);

    tokens!(s =>
        | StreamStart                               => "expected start of stream",
        | Scalar("a b\nc\n".into(), Folded)         => "expected a folded scalar",
        | StreamEnd                                 => "expected end of stream",
        @ None                                      => "expected stream to be finished"
    );
}

#[test]
fn block_scalar_as_mapping_value()
{
    let data = "key: |\n  text\n";
    let mut s = scanner(data);

    tokens!(s =>
        | StreamStart                               => "expected start of stream",
        | BlockMappingStart                         => "expected the start of a block mapping",
        | Key                                       => "expected an implicit key",
        | Scalar("key".into(), Plain)               => "expected a scalar",
        | Value                                     => "expected a value",
        | Scalar("text\n".into(), Literal)          => "expected a literal scalar",
        | BlockEnd                                  => "expected the end of a block mapping",
        | StreamEnd                                 => "expected end of stream",
        @ None                                      => "expected stream to be finished"
    );
}

#[test]
fn strip_chomped_literal()
{
    let data = "|-\n  text\n\n";
    let mut s = scanner(data);

    tokens!(s =>
        | StreamStart                               => "expected start of stream",
        | Scalar("text".into(), Literal)            => "expected a stripped literal scalar",
        | StreamEnd                                 => "expected end of stream",
        @ None                                      => "expected stream to be finished"
    );
}

#[test]
fn unterminated_quoted_errors()
{
    assert!(scan_all("'no end in sight").is_err());
}

#[test]
fn unknown_escape_errors()
{
    assert!(scan_all(r#""bad \q escape""#).is_err());
}
