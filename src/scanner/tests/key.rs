/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Test cases specific to mapping keys, explicit or
//! implicit.

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn implicit_simple()
{
    let data = "a: 1";
    let mut s = scanner(data);

    tokens!(s =>
        | StreamStart                               => "expected start of stream",
        | BlockMappingStart                         => "expected the start of a block mapping",
        | Key                                       => "expected an implicit key",
        | Scalar("a".into(), Plain)                 => "expected a scalar",
        | Value                                     => "expected a value",
        | Scalar("1".into(), Plain)                 => "expected a scalar",
        | BlockEnd                                  => "expected the end of a block mapping",
        | StreamEnd                                 => "expected end of stream",
        @ None                                      => "expected stream to be finished"
    );
}

#[test]
fn value_after_multiline_plain_errors()
{
    // The plain scalar continues across the line break,
    // folding to 'a b', so the ':' lands mid scalar where
    // no key candidate exists and none may start
    let data = "a\nb: c";

    assert!(scan_all(data).is_err());
}

#[test]
fn explicit_simple()
{
    let data = "
? 'an explicit key'
: 'a value'
";
    let mut s = scanner(data);

    tokens!(s =>
        | StreamStart                               => "expected start of stream",
        | BlockMappingStart                         => "expected the start of a block mapping",
        | Key                                       => "expected an explicit key",
        | Scalar("an explicit key".into(), SingleQuote) => "expected a scalar",
        | Value                                     => "expected a value",
        | Scalar("a value".into(), SingleQuote)     => "expected a scalar",
        | BlockEnd                                  => "expected the end of a block mapping",
        | StreamEnd                                 => "expected end of stream",
        @ None                                      => "expected stream to be finished"
    );
}

#[test]
fn explicit_key_missing_value()
{
    // A value is implied by the explicit key, and can be
    // omitted from the document, while still being valid
    // YAML
    let data = "? 'sub mapping key': 'sub mapping value'";
    let mut s = scanner(data);

    tokens!(s =>
        | StreamStart                               => "expected start of stream",
        | BlockMappingStart                         => "expected the start of a block mapping",
        | Key                                       => "expected an explicit key",
        | BlockMappingStart                         => "expected the start of a block mapping",
        | Key                                       => "expected an implicit key",
        | Scalar("sub mapping key".into(), SingleQuote) => "expected a scalar",
        | Value                                     => "expected a value",
        | Scalar("sub mapping value".into(), SingleQuote) => "expected a scalar",
        | BlockEnd                                  => "expected the end of a block mapping",
        | BlockEnd                                  => "expected the end of a block mapping",
        | StreamEnd                                 => "expected end of stream",
        @ None                                      => "expected stream to be finished"
    );
}

#[test]
fn sibling_keys_share_one_mapping()
{
    let data = "a: 1\nb: 2";
    let mut s = scanner(data);

    tokens!(s =>
        | StreamStart                               => "expected start of stream",
        | BlockMappingStart                         => "expected the start of a block mapping",
        | Key                                       => "expected an implicit key",
        | Scalar("a".into(), Plain)                 => "expected a scalar",
        | Value                                     => "expected a value",
        | Scalar("1".into(), Plain)                 => "expected a scalar",
        | Key                                       => "expected an implicit key",
        | Scalar("b".into(), Plain)                 => "expected a scalar",
        | Value                                     => "expected a value",
        | Scalar("2".into(), Plain)                 => "expected a scalar",
        | BlockEnd                                  => "expected the end of a block mapping",
        | StreamEnd                                 => "expected end of stream",
        @ None                                      => "expected stream to be finished"
    );
}

#[test]
fn quoted_keys()
{
    let data = "'single': 1\n\"double\": 2";
    let mut s = scanner(data);

    tokens!(s =>
        | StreamStart                               => "expected start of stream",
        | BlockMappingStart                         => "expected the start of a block mapping",
        | Key                                       => "expected an implicit key",
        | Scalar("single".into(), SingleQuote)      => "expected a scalar",
        | Value                                     => "expected a value",
        | Scalar("1".into(), Plain)                 => "expected a scalar",
        | Key                                       => "expected an implicit key",
        | Scalar("double".into(), DoubleQuote)      => "expected a scalar",
        | Value                                     => "expected a value",
        | Scalar("2".into(), Plain)                 => "expected a scalar",
        | BlockEnd                                  => "expected the end of a block mapping",
        | StreamEnd                                 => "expected end of stream",
        @ None                                      => "expected stream to be finished"
    );
}

#[test]
fn required_key_cannot_span_lines()
{
    // 'b' sits at the mapping's indent so it must become a
    // key on its own line, and never does
    let data = "a: 1\nb\nc: 2";

    assert!(scan_all(data).is_err());
}

#[test]
fn oversized_key_errors()
{
    let data = format!("{}: 1", "a".repeat(1100));

    assert!(scan_all(&data).is_err());
}

#[test]
fn value_without_key_position_errors()
{
    // The second ':' on the line has no candidate left to
    // promote, and a new key is not allowed mid line
    let data = "a: b: c";

    assert!(scan_all(data).is_err());
}
