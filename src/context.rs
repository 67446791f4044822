// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Where nift text comes from (a file, standard input, ...), for
//! error messages. Positions inside the text are kept separately, see
//! [Pos](../pos/struct.Pos.html).

use crate::pos::Pos;
use std::{path::PathBuf, fmt::{Formatter, Debug, Display}};

pub trait Context : Debug + Send + Sync {
    /// The source with a position, written after the error message
    /// and a space; starts with "in" or "from".
    fn format_with_pos(&self, p: Pos, f: &mut Formatter<'_>)
                       -> Result<(), std::fmt::Error>;
    /// Just the source, written before a colon and the error message.
    fn format_without_pos(&self, f: &mut Formatter<'_>)
                          -> Result<(), std::fmt::Error>;

    fn to_string_without_pos(&self) -> String {
        format!("{}", &SourceOnly(self))
    }

    fn to_string_with_pos(&self, p: Pos) -> String {
        format!("{}", &SourceAt(self, p))
    }
}

// Formatter can't be constructed directly, so go through Display.
struct SourceOnly<'t, T: Context + ?Sized>(&'t T);
impl<'t, T: Context + ?Sized> Display for SourceOnly<'t, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        self.0.format_without_pos(f)
    }
}

struct SourceAt<'t, T: Context + ?Sized>(&'t T, Pos);
impl<'t, T: Context + ?Sized> Display for SourceAt<'t, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        self.0.format_with_pos(self.1, f)
    }
}


/// A nift file, shown as its quoted path.
#[derive(Debug)]
pub struct FileContext {
    pub path: PathBuf
}

impl Context for FileContext {
    fn format_with_pos(&self, pos: Pos, f: &mut Formatter<'_>)
                       -> Result<(), std::fmt::Error> {
        write!(f, "in {:?}{}", &self.path, pos)
    }
    fn format_without_pos(&self, f: &mut Formatter<'_>)
                          -> Result<(), std::fmt::Error> {
        write!(f, "{:?}", &self.path)
    }
}

/// A source without a path, like standard input; shown in
/// parentheses.
#[derive(Debug)]
pub struct SpecialContext {
    name: String
}

impl SpecialContext {
    pub fn new(name: &str) -> SpecialContext {
        SpecialContext { name: name.to_string() }
    }
}

impl Context for SpecialContext {
    fn format_with_pos(&self, pos: Pos, f: &mut Formatter<'_>)
                       -> Result<(), std::fmt::Error> {
        write!(f, "from ({}){}", &self.name, pos)
    }
    fn format_without_pos(&self, f: &mut Formatter<'_>)
                          -> Result<(), std::fmt::Error> {
        write!(f, "({})", &self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatting() {
        let pos = Pos { line: 2, col: 5 };
        let file = FileContext { path: PathBuf::from("page.nift") };
        assert_eq!(file.to_string_without_pos(), "\"page.nift\"");
        assert_eq!(file.to_string_with_pos(pos), "in \"page.nift\"@3.5");
        let special = SpecialContext::new("stdin");
        assert_eq!(special.to_string_without_pos(), "(stdin)");
        assert_eq!(special.to_string_with_pos(pos), "from (stdin)@3.5");
    }

    #[test]
    fn through_trait_objects() {
        let container: Box<dyn Context> = Box::new(SpecialContext::new("repl"));
        assert_eq!(container.to_string_with_pos(Pos::default()), "from (repl)@1.0");
    }
}
