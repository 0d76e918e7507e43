/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Escape sequence tables for double quoted scalars.
//!
//! YAML recognizes two escape shapes after a backslash: a
//! one character mnemonic that maps directly to a
//! replacement codepoint, and a hex form (`\x`, `\u`, `\U`)
//! whose width determines how many hex digits follow.

/// Replacement codepoint of a single character escape, if
/// the character is one
pub(in crate::scanner) fn replacement(c: char) -> Option<char>
{
    let r = match c
    {
        '0' => '\0',
        'a' => '\u{7}',
        'b' => '\u{8}',
        't' | '\t' => '\t',
        'n' => '\n',
        'v' => '\u{B}',
        'f' => '\u{C}',
        'r' => '\r',
        'e' => '\u{1B}',
        ' ' => ' ',
        '"' => '"',
        '/' => '/',
        '\\' => '\\',
        'N' => '\u{85}',
        '_' => '\u{A0}',
        'L' => '\u{2028}',
        'P' => '\u{2029}',
        _ => return None,
    };

    Some(r)
}

/// Number of hex digits following a hex escape introducer,
/// if the character is one
pub(in crate::scanner) fn code_width(c: char) -> Option<usize>
{
    match c
    {
        'x' => Some(2),
        'u' => Some(4),
        'U' => Some(8),
        _ => None,
    }
}

/// The escape mnemonic that would produce this codepoint,
/// used when rendering it in diagnostics
pub(in crate::scanner) fn mnemonic(c: char) -> Option<char>
{
    let m = match c
    {
        '\0' => '0',
        '\u{7}' => 'a',
        '\u{8}' => 'b',
        '\t' => 't',
        '\n' => 'n',
        '\u{B}' => 'v',
        '\u{C}' => 'f',
        '\r' => 'r',
        '\u{1B}' => 'e',
        '\u{85}' => 'N',
        '\u{A0}' => '_',
        '\u{2028}' => 'L',
        '\u{2029}' => 'P',
        _ => return None,
    };

    Some(m)
}

#[cfg(test)]
mod tests
{
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn replacement_table()
    {
        assert_eq!(replacement('n'), Some('\n'));
        assert_eq!(replacement('0'), Some('\0'));
        assert_eq!(replacement('L'), Some('\u{2028}'));
        assert_eq!(replacement('\t'), Some('\t'));
        assert_eq!(replacement(' '), Some(' '));
        assert_eq!(replacement('q'), None);
    }

    #[test]
    fn hex_widths()
    {
        assert_eq!(code_width('x'), Some(2));
        assert_eq!(code_width('u'), Some(4));
        assert_eq!(code_width('U'), Some(8));
        assert_eq!(code_width('X'), None);
    }

    #[test]
    fn mnemonic_inverts_replacement()
    {
        for c in "0abtnvfreN_LP".chars()
        {
            let replaced = replacement(c);

            assert_eq!(replaced.and_then(mnemonic), Some(c));
        }
    }
}
