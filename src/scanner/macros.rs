//! This module contains the various character class macros
//! used by lib/scanner.
//!
//! Each one takes a single codepoint, typically fresh from
//! [`StreamReader::peek`], and answers a set membership
//! question. NUL is the reader's end of stream sentinel, so
//! the *Z variants treat it as a member.
//!
//! [`StreamReader::peek`]: crate::reader::StreamReader::peek

/// Is the codepoint a space or tab?
macro_rules! isBlank {
    ($c:expr) => {
        matches!($c, ' ' | '\t')
    };
}

/// Is the codepoint one of YAML's five line breaks?
macro_rules! isBreak {
    ($c:expr) => {
        matches!($c, '\n' | '\r' | '\u{85}' | '\u{2028}' | '\u{2029}')
    };
}

/// Is the codepoint a line break or end of stream?
macro_rules! isBreakZ {
    ($c:expr) => {
        isBreak!($c) || $c == '\0'
    };
}

/// Is the codepoint a space, tab, line break or end of
/// stream?
macro_rules! isBlankZ {
    ($c:expr) => {
        isBlank!($c) || isBreakZ!($c)
    };
}

/// Is the codepoint a space, line break or end of stream?
/// Notably, excludes tabs
macro_rules! isSpaceZ {
    ($c:expr) => {
        $c == ' ' || isBreakZ!($c)
    };
}

/// Is the codepoint legal in a directive name, anchor or
/// alias name, or tag handle?
macro_rules! isWordChar {
    ($c:expr) => {
        $c.is_ascii_alphanumeric() || $c == '-' || $c == '_'
    };
}

/// Is the codepoint an indicator that structures a flow
/// collection?
macro_rules! isFlowIndicator {
    ($c:expr) => {
        matches!($c, ',' | '[' | ']' | '{' | '}')
    };
}

/// Is the codepoint a hexadecimal digit?
macro_rules! isHex {
    ($c:expr) => {
        $c.is_ascii_hexdigit()
    };
}
