// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! In-memory representation of nift data.

//! A [Form](Form) is a number, a symbol, a string, or a table. Tables
//! are the only composite: an ordered sequence of [Entry](Entry)
//! values, each either a bare form or a `:key value` pair. Trees are
//! built once by the reader and are not modified afterwards; there
//! are no cycles.

use crate::number::format_number;
use std::fmt::Write;
use kstring::KString;

#[derive(Debug, Clone, PartialEq)]
pub enum Form {
    Number(f64),
    Symbol(KString),
    /// The text between the quotes, backslash sequences left as they
    /// were in the source.
    String(KString),
    Table(Vec<Entry>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Item(Form),
    Pair { key: Form, value: Form },
}

impl Form {
    pub fn number(n: f64) -> Form {
        Form::Number(n)
    }

    pub fn symbol(s: &str) -> Form {
        Form::Symbol(KString::from_ref(s))
    }

    pub fn string(s: &str) -> Form {
        Form::String(KString::from_ref(s))
    }

    pub fn table(entries: impl IntoIterator<Item = Entry>) -> Form {
        Form::Table(entries.into_iter().collect())
    }

    pub fn is_scalar(&self) -> bool {
        ! matches!(self, Form::Table(_))
    }

    /// The text of a symbol or string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Form::Symbol(s) | Form::String(s) => Some(s.as_str()),
            _ => None
        }
    }

    /// Text for any scalar, numbers included.
    pub fn scalar_text(&self) -> Option<String> {
        match self {
            Form::Number(n) => Some(format_number(*n)),
            Form::Symbol(s) | Form::String(s) => Some(s.to_string()),
            Form::Table(_) => None
        }
    }

    pub fn entries(&self) -> Option<&[Entry]> {
        match self {
            Form::Table(v) => Some(v),
            _ => None
        }
    }
}

impl Entry {
    pub fn item(form: Form) -> Entry {
        Entry::Item(form)
    }

    pub fn pair(key: Form, value: Form) -> Entry {
        Entry::Pair { key, value }
    }
}

// Only the first double quote gets a backslash. Strings holding more
// than one quote therefore do not print back to what was read; see
// the tests in `print`.
fn fmt_string(f: &mut std::fmt::Formatter<'_>, s: &str)
              -> Result<(), std::fmt::Error> {
    f.write_char('"')?;
    f.write_str(&s.replacen('"', "\\\"", 1))?;
    f.write_char('"')
}

impl std::fmt::Display for Form {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
           -> Result<(), std::fmt::Error> {
        match self {
            Form::Number(n) => f.write_str(&format_number(*n)),
            Form::Symbol(s) => f.write_str(s),
            Form::String(s) => fmt_string(f, s),
            Form::Table(v) => {
                f.write_char('(')?;
                for (i, entry) in v.iter().enumerate() {
                    if i > 0 {
                        f.write_char(' ')?;
                    }
                    entry.fmt(f)?;
                }
                f.write_char(')')
            }
        }
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
           -> Result<(), std::fmt::Error> {
        match self {
            Entry::Item(form) => form.fmt(f),
            Entry::Pair { key, value } => {
                f.write_fmt(format_args!(":{} {}", key, value))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_table() {
        let form = Form::table([
            Entry::item(Form::symbol("meta")),
            Entry::pair(Form::symbol("encoding"), Form::symbol("utf-8")),
            Entry::item(Form::number(2.0)),
            Entry::item(Form::table([])),
        ]);
        assert_eq!(form.to_string(), "(meta :encoding utf-8 2 ())");
    }

    #[test]
    fn scalar_accessors() {
        assert_eq!(Form::string("hi").as_text(), Some("hi"));
        assert_eq!(Form::number(1.5).as_text(), None);
        assert_eq!(Form::number(1.5).scalar_text().as_deref(), Some("1.5"));
        assert!(! Form::table([]).is_scalar());
        assert_eq!(Form::table([]).scalar_text(), None);
    }
}
