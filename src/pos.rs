// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::cmp::Eq;

/// Both line and col are zero based; Emacs uses 1-based line
/// numbering, so line is incremented by 1 in Display. Columns count
/// characters, not bytes.

#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct Pos {
    pub line: u32,
    pub col: u32,
}

impl Pos {
    /// The position right after `s`, when `s` starts at `self`.
    pub fn advance(self, s: &str) -> Pos {
        let mut p = self;
        for c in s.chars() {
            p = if c == '\n' {
                Pos { line: p.line + 1, col: 0 }
            } else {
                Pos { line: p.line, col: p.col + 1 }
            };
        }
        p
    }

    /// Move a position found inside a single line of input to where
    /// that line sits in a larger stream.
    pub fn offset(self, line: u32, col: u32) -> Pos {
        if self.line == 0 {
            Pos { line, col: self.col + col }
        } else {
            Pos { line: self.line + line, col: self.col }
        }
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
           -> Result<(), std::fmt::Error> {
        // This, when prefixed with a Debug style path string, is
        // following the Emacs convention for location information.
        f.write_fmt(format_args!("@{}.{}", self.line + 1, self.col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_counts_chars_and_lines() {
        let p = Pos::default().advance("ab\ncdé");
        assert_eq!(p, Pos { line: 1, col: 3 });
        assert_eq!(p.to_string(), "@2.3");
    }

    #[test]
    fn offset_into_stream() {
        let p = Pos { line: 0, col: 4 }.offset(6, 2);
        assert_eq!(p, Pos { line: 6, col: 6 });
    }
}
