// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Splitting source text into tokens. Tokens are slices of the
//! source; nothing is interpreted here, that's left to
//! [read](../read/index.html). Whitespace and commas only separate
//! tokens and never show up as tokens themselves.
//!
//! There are three kinds of tokens:
//!
//! * single characters: `(` `)` `$` `@` `'` `:`
//! * strings: `"` up to the next `"` that is not preceded by a
//!   backslash, or to the end of the input if there is none
//! * words: everything else up to the next separator, punctuation
//!   character or `"`

use crate::pos::Pos;

fn take_while_and_rest<'s>(
    s: &'s str, pred: impl Fn(char) -> bool
) -> (&'s str, &'s str) {
    if let Some(i) = s.find(|c| ! pred(c)) {
        (&s[0..i], &s[i..])
    } else {
        (s, "")
    }
}

pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ','
}

pub fn is_punctuation(c: char) -> bool {
    matches!(c, '(' | ')' | '$' | '@' | '\'' | ':')
}

pub fn is_word_char(c: char) -> bool {
    ! is_separator(c) && ! is_punctuation(c) && c != '"'
}

/// `s` must start with `"`. Returns the length of the string literal
/// at the start of `s`, and whether it has its closing quote.
fn scan_string(s: &str) -> (usize, bool) {
    let mut escaped = false;
    for (i, c) in s.char_indices().skip(1) {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '"' {
            return (i + 1, true)
        }
    }
    (s.len(), false)
}

/// Whether a string token ends with its closing quote; the lexer
/// lets unterminated strings through as tokens running to the end of
/// the input.
pub fn string_is_closed(token: &str) -> bool {
    token.starts_with('"') && scan_string(token) == (token.len(), true)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenWithPos<'s>(pub &'s str, pub Pos);

/// A cursor over the tokens of a source string. The next token is
/// always scanned ahead, so that `peek` is free.
#[derive(Debug, Clone)]
pub struct Tokenizer<'s> {
    source: &'s str,
    rest: &'s str,
    pos: Pos,
    current: Option<TokenWithPos<'s>>,
}

impl<'s> Tokenizer<'s> {
    pub fn new(source: &'s str) -> Tokenizer<'s> {
        let mut ts = Tokenizer {
            source,
            rest: source,
            pos: Pos::default(),
            current: None,
        };
        ts.current = ts.scan_token();
        ts
    }

    /// Start over from the beginning of the source.
    pub fn restart(&mut self) {
        self.rest = self.source;
        self.pos = Pos::default();
        self.current = self.scan_token();
    }

    /// The next token, `None` at the end of the input.
    pub fn peek(&self) -> Option<&'s str> {
        self.current.map(|TokenWithPos(t, _)| t)
    }

    pub fn peek_with_pos(&self) -> Option<TokenWithPos<'s>> {
        self.current
    }

    /// Position of the next token, or of the end of the input.
    pub fn pos(&self) -> Pos {
        match self.current {
            Some(TokenWithPos(_, pos)) => pos,
            None => self.pos
        }
    }

    /// Return the next token and move past it.
    pub fn pop(&mut self) -> Option<&'s str> {
        self.next().map(|TokenWithPos(t, _)| t)
    }

    fn consume(&mut self, n: usize) -> &'s str {
        let (taken, rest) = self.rest.split_at(n);
        self.pos = self.pos.advance(taken);
        self.rest = rest;
        taken
    }

    fn scan_token(&mut self) -> Option<TokenWithPos<'s>> {
        let (separators, _) = take_while_and_rest(self.rest, is_separator);
        self.consume(separators.len());
        let c = self.rest.chars().next()?;
        let start = self.pos;
        let len =
            if is_punctuation(c) {
                c.len_utf8()
            } else if c == '"' {
                scan_string(self.rest).0
            } else {
                let (word, _) = take_while_and_rest(self.rest, is_word_char);
                word.len()
            };
        Some(TokenWithPos(self.consume(len), start))
    }
}

impl<'s> Iterator for Tokenizer<'s> {
    type Item = TokenWithPos<'s>;

    fn next(&mut self) -> Option<TokenWithPos<'s>> {
        let t = self.current;
        if t.is_some() {
            self.current = self.scan_token();
        }
        t
    }
}
