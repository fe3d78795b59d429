//! VIMSON Format Reference
//!
//! This module documents the VIMSON format as implemented by this library.
//!
//! # Overview
//!
//! VIMSON is a textual serialization format compatible with Vim script data
//! literals: the text this library emits can be pasted into a Vim script
//! `let` statement, and a literal copied out of Vim script parses back. It
//! is structurally similar to JSON but follows Vim's lexical rules, which
//! differ in several load-bearing ways: single-quoted strings are the norm,
//! trailing commas are mandatory on write, booleans have no lexeme of their
//! own, and numbers carry Vim's octal/hex radix rules.
//!
//! # Core Syntax
//!
//! ## Dictionaries
//!
//! ```text
//! {'name':'Alice','age':30,}
//! ```
//!
//! **Rules**:
//! - Keys are always quoted strings (single- or double-quoted); bare words
//!   are rejected
//! - An empty key `''` is legal
//! - Duplicate keys collapse to the last occurrence
//! - The writer terminates every entry with a comma, including the last;
//!   the reader accepts entries with or without separating commas
//!
//! ## Lists
//!
//! ```text
//! ['hoge',1,0.0,0,]
//! ```
//!
//! Same comma rules as dictionaries. `[]`, `[1]`, and `[1,]` all parse.
//!
//! ## Strings
//!
//! Two quoting forms with different escape rules:
//!
//! **Single-quoted**: no backslash escaping at all. The only escape is a
//! doubled quote, which decodes to one literal quote:
//!
//! ```text
//! 'it''s'       decodes to  it's
//! 'C:\path'     decodes to  C:\path   (backslash is ordinary)
//! ```
//!
//! **Double-quoted**: backslash escaping:
//!
//! | Escape | Meaning |
//! |--------|---------|
//! | `\N` .. `\NNN` | code point from 1-3 octal digits |
//! | `\xN`, `\xNN` (also `\X`) | code point from 1-2 hex digits |
//! | `\uNNNN`, `\UNNNN` | code point from exactly 4 hex digits |
//! | `\b` | backspace (0x08) |
//! | `\e` | escape (0x1B) |
//! | `\f` | form feed (0x0C) |
//! | `\n` | newline |
//! | `\r` | carriage return |
//! | `\t` | tab |
//! | `\"` | quote |
//! | `\\` | backslash |
//!
//! Any other character after a backslash is a parse failure.
//!
//! The writer always emits the single-quoted form and performs no escaping,
//! so strings containing a single quote cannot be written (the call fails
//! rather than producing invalid output).
//!
//! ## Numbers
//!
//! ```text
//! 42        decimal integer
//! -17       sign is part of the literal
//! 0777      octal (leading zero): 511
//! 0778      reclassified decimal: 778 (8 is not an octal digit)
//! 0xff      hex: 255
//! 0.5       float
//! -0.003e+3 float with exponent: -3.0
//! ```
//!
//! **Radix rules**: a leading `0` selects octal, but any digit outside
//! `0`-`7` in the run reclassifies the whole literal as decimal. `0x`/`0X`
//! selects hex. A `.` or `e`/`E` after the digit run re-lexes the literal as
//! a float regardless of which radix path it started on; a hex literal is
//! never reinterpreted as a float. Integer literals outside the `i64` range
//! fail to parse.
//!
//! The writer prints whole floats with a `.0` suffix (`3.0`, not `3`) so
//! they re-parse as floats.
//!
//! ## Booleans
//!
//! Written as the bare digits `1` and `0`, exactly the integer literals.
//! A reader cannot distinguish a written boolean from an integer; see the
//! [`value`](crate::value) module docs for how the library models this.
//!
//! # Whitespace
//!
//! Space, tab, and carriage return may appear anywhere between tokens. A
//! newline is whitespace only when immediately followed by a backslash
//! (Vim's line-continuation convention); a bare newline is not skipped:
//!
//! ```text
//! {'a':
//! \ 1,}
//! ```
//!
//! parses the same as `{'a':1,}`.
//!
//! # Edge Cases
//!
//! - Empty input is an error, not an empty value
//! - One `parse` call consumes exactly one value; trailing text is left
//!   unconsumed
//! - End of input inside an open structure is an error; no partial value is
//!   returned
//!
//! # Limitations
//!
//! - **Map keys**: must be strings
//! - **No nil**: the format has no null/none lexeme
//! - **Booleans**: indistinguishable from `0`/`1` integers on read
//! - **Floats**: non-finite values (`NaN`, infinities) have no textual form
//! - **Comments**: not supported

// This module contains only documentation; no implementation code
