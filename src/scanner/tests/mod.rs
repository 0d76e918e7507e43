/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */


mod anchor;
mod key;
mod scalar;

pub(self) use pretty_assertions::assert_eq;

pub(self) use crate::{
    error::Result,
    scanner::{flag::ScanOptions, Scanner},
    token::{
        DirectiveValue,
        ScalarStyle::*,
        Token::{self, *},
    },
};

pub(self) fn scanner(data: &str) -> Scanner
{
    Scanner::from_str(data, ScanOptions::default())
}

/// Drain the entire stream, collecting the bare tokens;
/// mostly useful for asserting that a stream errors
pub(self) fn scan_all(data: &str) -> Result<Vec<Token>>
{
    let mut scanner = scanner(data);
    let mut tokens = Vec::new();

    while scanner.has_next()?
    {
        tokens.push(scanner.next()?.into_token());
    }

    Ok(tokens)
}

#[test]
fn empty()
{
    let data = "";
    let mut s = scanner(data);

    tokens!(s =>
        | StreamStart                               => "expected start of stream",
        | StreamEnd                                 => "expected end of stream",
        @ None                                      => "expected stream to be finished"
    );
}

#[test]
fn chomp_comments()
{
    let data = "  # a comment\n\n#one two three\n       #four!";
    let mut s = scanner(data);

    tokens!(s =>
        | StreamStart                               => "expected start of stream",
        | StreamEnd                                 => "expected end of stream",
        @ None                                      => "expected stream to be finished"
    );
}

#[test]
fn next_past_the_end_errors()
{
    let mut s = scanner("");

    let mut drain = || -> Result<()> {
        while s.has_next()?
        {
            s.next()?;
        }

        Ok(())
    };

    assert!(drain().is_ok());
    assert!(s.next().is_err());
}

#[test]
fn check_matches_head_marker() -> Result<()>
{
    use crate::token::Marker;

    let mut s = scanner("a");

    assert!(s.check(&[Marker::StreamStart])?);
    assert!(!s.check(&[Marker::Scalar])?);

    s.next()?;

    assert!(s.check(&[Marker::Scalar, Marker::StreamEnd])?);

    Ok(())
}
