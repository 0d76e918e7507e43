/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Test cases for anchors and aliases in a stream.

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn anchored_value_aliased()
{
    let data = "base: &anchor value\nother: *anchor";
    let mut s = scanner(data);

    tokens!(s =>
        | StreamStart                               => "expected start of stream",
        | BlockMappingStart                         => "expected the start of a block mapping",
        | Key                                       => "expected an implicit key",
        | Scalar("base".into(), Plain)              => "expected a scalar",
        | Value                                     => "expected a value",
        | Anchor("anchor".into())                   => "expected an anchor",
        | Scalar("value".into(), Plain)             => "expected a scalar",
        | Key                                       => "expected an implicit key",
        | Scalar("other".into(), Plain)             => "expected a scalar",
        | Value                                     => "expected a value",
        | Alias("anchor".into())                    => "expected an alias",
        | BlockEnd                                  => "expected the end of a block mapping",
        | StreamEnd                                 => "expected end of stream",
        @ None                                      => "expected stream to be finished"
    );
}

#[test]
fn anchored_sequence_entries()
{
    let data = "- &a 1\n- *a";
    let mut s = scanner(data);

    tokens!(s =>
        | StreamStart                               => "expected start of stream",
        | BlockSequenceStart                        => "expected the start of a block sequence",
        | BlockEntry                                => "expected a sequence entry",
        | Anchor("a".into())                        => "expected an anchor",
        | Scalar("1".into(), Plain)                 => "expected a scalar",
        | BlockEntry                                => "expected a sequence entry",
        | Alias("a".into())                         => "expected an alias",
        | BlockEnd                                  => "expected the end of a block sequence",
        | StreamEnd                                 => "expected end of stream",
        @ None                                      => "expected stream to be finished"
    );
}

#[test]
fn anchored_key()
{
    // The anchor, not the scalar after it, is the key
    // candidate; the Key splices in before both
    let data = "&k key: value";
    let mut s = scanner(data);

    tokens!(s =>
        | StreamStart                               => "expected start of stream",
        | BlockMappingStart                         => "expected the start of a block mapping",
        | Key                                       => "expected an implicit key",
        | Anchor("k".into())                        => "expected an anchor",
        | Scalar("key".into(), Plain)               => "expected a scalar",
        | Value                                     => "expected a value",
        | Scalar("value".into(), Plain)             => "expected a scalar",
        | BlockEnd                                  => "expected the end of a block mapping",
        | StreamEnd                                 => "expected end of stream",
        @ None                                      => "expected stream to be finished"
    );
}

#[test]
fn empty_anchor_name_errors()
{
    assert!(scan_all("&  oops").is_err());
}
