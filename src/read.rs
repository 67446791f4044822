// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Building [Form](../value/enum.Form.html) trees from source text.

use crate::pos::Pos;
use crate::context::{self, Context};
use crate::number::read_number;
use crate::parse::{Tokenizer, TokenWithPos, string_is_closed};
use crate::settings::{Format, NIFT_FORMAT};
use crate::value::{Form, Entry};
use std::fmt::{Formatter, Display};
use std::io::Read;
use std::path::Path;
use std::fs::File;
use kstring::KString;
use thiserror::Error;
use tracing::trace;

#[derive(Error, Debug)]
pub enum ReadError {
    #[error("{0}")]
    IO(std::io::Error),
    #[error("unexpected ')'")]
    UnexpectedCloseParen,
    #[error("premature EOF while expecting ')' for '('")]
    UnterminatedTable,
    #[error("expected key after ':'")]
    MissingKey,
    #[error("expected value after ':'")]
    MissingValue,
    #[error("premature EOF in string starting")]
    UnterminatedString,
    #[error("nesting too deep")]
    NestingTooDeep,
    #[error("no form to read")]
    MissingForm,
}

#[derive(Error, Debug)]
#[error("{err} {pos}")]
pub struct ReadErrorWithPos {
    pub err: ReadError,
    pub pos: Pos
}

impl ReadError {
    pub fn at(self, p: Pos) -> ReadErrorWithPos {
        ReadErrorWithPos {
            err: self,
            pos: p
        }
    }
}

impl ReadErrorWithPos {
    /// Attach the source or sink the error came from.
    pub fn in_context(self, container: Box<dyn Context>) -> ReadErrorWithPosContext {
        ReadErrorWithPosContext {
            err_with_pos: self,
            container
        }
    }
}

#[derive(Error, Debug)]
pub struct ReadErrorWithPosContext {
    pub err_with_pos: ReadErrorWithPos,
    pub container: Box<dyn Context>
}

impl Display for ReadErrorWithPosContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        f.write_fmt(format_args!("{} ",
                                 self.err_with_pos.err))?;
        self.container.format_with_pos(self.err_with_pos.pos, f)?;
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum ReadErrorWithContext {
    #[error("{}: {0}", .1.to_string_without_pos())]
    IO(std::io::Error, Box<dyn Context>)
}

#[derive(Error, Debug)]
pub enum ReadErrorWithLocation {
    #[error("{0}")]
    PC(Box<ReadErrorWithPosContext>),
    #[error("{0}")]
    IO(Box<ReadErrorWithContext>)
}


// Transform an IO error without Pos context
fn io_add_file<T>(
    r: Result<T, std::io::Error>,
    path: &Path
) -> Result<T, ReadErrorWithLocation>
{
    r.map_err(|e| ReadErrorWithLocation::IO(Box::new(
        ReadErrorWithContext::IO(
            e,
            Box::new(context::FileContext { path: path.to_path_buf() })))))
}

// Transform ReadErrorWithPos adding file
fn rewp_add_file<T>(
    r: Result<T, ReadErrorWithPos>,
    path: &Path
) -> Result<T, ReadErrorWithLocation>
{
    r.map_err(|e| ReadErrorWithLocation::PC(Box::new(
        e.in_context(Box::new(context::FileContext { path: path.to_path_buf() })))))
}


fn read_string(t: &str, pos: Pos) -> Result<Form, ReadErrorWithPos> {
    if ! string_is_closed(t) {
        return Err(ReadError::UnterminatedString.at(pos))
    }
    Ok(Form::String(KString::from_ref(&t[1..t.len() - 1])))
}

// Read the next form, `None` at the end of the input.
fn read_form(
    ts: &mut Tokenizer<'_>,
    depth_fuel: u32,
) -> Result<Option<Form>, ReadErrorWithPos>
{
    let TokenWithPos(t, pos) = match ts.peek_with_pos() {
        Some(tp) => tp,
        None => return Ok(None)
    };
    match t {
        "(" => {
            if depth_fuel == 0 {
                return Err(ReadError::NestingTooDeep.at(pos))
            }
            ts.pop();
            let entries = slurp(ts, Some(pos), depth_fuel - 1)?;
            Ok(Some(Form::Table(entries)))
        }
        ")" => Err(ReadError::UnexpectedCloseParen.at(pos)),
        _ => {
            ts.pop();
            if t.starts_with('"') {
                read_string(t, pos).map(Some)
            } else if t.starts_with(|c: char| c.is_ascii_digit()) {
                Ok(Some(Form::Number(read_number(t))))
            } else {
                // includes the reserved single characters @ $ '
                Ok(Some(Form::Symbol(KString::from_ref(t))))
            }
        }
    }
}

// The key or value after a ':'; a ')' or the end of the input in
// its place is reported as `missing`.
fn read_after_colon(
    ts: &mut Tokenizer<'_>,
    depth_fuel: u32,
    missing: ReadError,
) -> Result<Form, ReadErrorWithPos>
{
    let pos = ts.pos();
    if ts.peek() == Some(")") {
        return Err(missing.at(pos))
    }
    match read_form(ts, depth_fuel)? {
        Some(form) => Ok(form),
        None => Err(missing.at(pos))
    }
}

// Read entries up to the `)` matching the `(` at `opening` (which
// has already been consumed), or up to the end of the input if
// `opening` is None.
fn slurp(
    ts: &mut Tokenizer<'_>,
    opening: Option<Pos>,
    depth_fuel: u32,
) -> Result<Vec<Entry>, ReadErrorWithPos>
{
    let mut v = Vec::new();
    while let Some(TokenWithPos(t, pos)) = ts.peek_with_pos() {
        match t {
            ")" => {
                if opening.is_some() {
                    ts.pop();
                    return Ok(v)
                }
                return Err(ReadError::UnexpectedCloseParen.at(pos))
            }
            ":" => {
                ts.pop();
                let key = read_after_colon(ts, depth_fuel, ReadError::MissingKey)?;
                let value = read_after_colon(ts, depth_fuel, ReadError::MissingValue)?;
                v.push(Entry::Pair { key, value });
            }
            _ => {
                if let Some(form) = read_form(ts, depth_fuel)? {
                    v.push(Entry::Item(form));
                }
            }
        }
    }
    if let Some(startpos) = opening {
        Err(ReadError::UnterminatedTable.at(startpos))
    } else {
        Ok(v)
    }
}

/// Read `source` as the entries of an implicit top-level table.
pub fn read(source: &str) -> Result<Form, ReadErrorWithPos> {
    read_with(source, &NIFT_FORMAT)
}

pub fn read_with(
    source: &str,
    format: &Format,
) -> Result<Form, ReadErrorWithPos>
{
    trace!(len = source.len(), root_table = format.root_table, "read");
    let mut ts = Tokenizer::new(source);
    if format.root_table {
        let entries = slurp(&mut ts, None, format.max_depth)?;
        Ok(Form::Table(entries))
    } else {
        let pos = ts.pos();
        read_form(&mut ts, format.max_depth)?
            .ok_or_else(|| ReadError::MissingForm.at(pos))
    }
}

/// Read the whole of `fh` (which must be UTF-8) and parse it.
pub fn read_all(
    fh: impl Read,
) -> Result<Form, ReadErrorWithPos>
{
    let mut fh = fh;
    let mut source = String::new();
    fh.read_to_string(&mut source)
        .map_err(|e| ReadError::IO(e).at(Pos::default()))?;
    read(&source)
}

pub fn read_file(path: &Path) -> Result<Form, ReadErrorWithLocation> {
    let fh = io_add_file(File::open(path), path)?;
    let v = rewp_add_file(read_all(fh), path)?;
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SINGLE_FORM_FORMAT;

    fn sym(s: &str) -> Form {
        Form::symbol(s)
    }

    fn read_err(s: &str) -> ReadErrorWithPos {
        match read(s) {
            Err(e) => e,
            Ok(f) => panic!("expected an error reading {:?}, got {}", s, f)
        }
    }

    #[test]
    fn root_wrapping() {
        assert_eq!(read("").unwrap(), Form::table([]));
        assert_eq!(read("a 1").unwrap(),
                   Form::table([Entry::item(sym("a")),
                                Entry::item(Form::number(1.0))]));
    }

    #[test]
    fn table_order_is_kept() {
        let form = read("(a :k1 v1 b :k2 v2)").unwrap();
        assert_eq!(form, Form::table([Entry::item(Form::table([
            Entry::item(sym("a")),
            Entry::pair(sym("k1"), sym("v1")),
            Entry::item(sym("b")),
            Entry::pair(sym("k2"), sym("v2")),
        ]))]));
    }

    #[test]
    fn duplicate_keys_are_kept() {
        let form = read(":a 1 :a 2").unwrap();
        assert_eq!(form.entries().map(|v| v.len()), Some(2));
    }

    #[test]
    fn commas_are_whitespace() {
        assert_eq!(read("(a, b)").unwrap(), read("(a b)").unwrap());
    }

    #[test]
    fn scenario() {
        let form = read(r#"(meta :encoding utf-8) (title "Hi")"#).unwrap();
        assert_eq!(form, Form::table([
            Entry::item(Form::table([
                Entry::item(sym("meta")),
                Entry::pair(sym("encoding"), sym("utf-8")),
            ])),
            Entry::item(Form::table([
                Entry::item(sym("title")),
                Entry::item(Form::string("Hi")),
            ])),
        ]));
    }

    #[test]
    fn nested_keys_and_values() {
        let form = read(":(a) (b c)").unwrap();
        assert_eq!(form, Form::table([Entry::pair(
            Form::table([Entry::item(sym("a"))]),
            Form::table([Entry::item(sym("b")), Entry::item(sym("c"))]))]));
    }

    #[test]
    fn numbers_are_lenient() {
        match read("12abc").unwrap().entries() {
            Some([Entry::Item(Form::Number(n))]) => assert!(n.is_nan()),
            other => panic!("unexpected {:?}", other)
        }
        // a leading '-' or '.' makes a symbol
        assert_eq!(read("-5 .5").unwrap(),
                   Form::table([Entry::item(sym("-5")), Entry::item(sym(".5"))]));
    }

    #[test]
    fn strings_are_not_unescaped() {
        let form = read(r#""a\"b""#).unwrap();
        assert_eq!(form, Form::table([Entry::item(Form::string(r#"a\"b"#))]));
    }

    #[test]
    fn reserved_characters_are_symbols() {
        assert_eq!(read("@ $x '").unwrap(), Form::table([
            Entry::item(sym("@")),
            Entry::item(sym("$")),
            Entry::item(sym("x")),
            Entry::item(sym("'")),
        ]));
    }

    #[test]
    fn unterminated_table() {
        let e = read_err("(a b");
        assert!(matches!(e.err, ReadError::UnterminatedTable));
        assert_eq!(e.pos, Pos { line: 0, col: 0 });
        assert!(matches!(read_err("(a (b)").err, ReadError::UnterminatedTable));
    }

    #[test]
    fn unexpected_close_paren() {
        let e = read_err(")");
        assert!(matches!(e.err, ReadError::UnexpectedCloseParen));
        assert_eq!(e.to_string(), "unexpected ')' @1.0");
        assert!(matches!(read_err("(a)) b").err, ReadError::UnexpectedCloseParen));
    }

    #[test]
    fn missing_key_or_value() {
        assert!(matches!(read_err("(a :)").err, ReadError::MissingKey));
        assert!(matches!(read_err("a :").err, ReadError::MissingKey));
        assert!(matches!(read_err("(:k)").err, ReadError::MissingValue));
        assert!(matches!(read_err(":k").err, ReadError::MissingValue));
        // errors inside the key or value are passed on as they are
        assert!(matches!(read_err(":(k v").err, ReadError::UnterminatedTable));
    }

    #[test]
    fn unterminated_string() {
        let e = read_err("(a \"bc)");
        assert!(matches!(e.err, ReadError::UnterminatedString));
        assert_eq!(e.pos, Pos { line: 0, col: 3 });
        let e = read_err(r#"x "ab\"#);
        assert!(matches!(e.err, ReadError::UnterminatedString));
        assert_eq!(e.pos, Pos { line: 0, col: 2 });
    }

    #[test]
    fn nesting_limit() {
        let deep = format!("{}{}", "(".repeat(600), ")".repeat(600));
        assert!(matches!(read_err(&deep).err, ReadError::NestingTooDeep));
        let ok = format!("{}{}", "(".repeat(400), ")".repeat(400));
        assert!(read(&ok).is_ok());
    }

    #[test]
    fn single_form() {
        let form = read_with("(a) (b)", &SINGLE_FORM_FORMAT).unwrap();
        assert_eq!(form, Form::table([Entry::item(sym("a"))]));
        assert_eq!(read_with("7", &SINGLE_FORM_FORMAT).unwrap(), Form::number(7.0));
        let e = read_with("  ", &SINGLE_FORM_FORMAT).unwrap_err();
        assert!(matches!(e.err, ReadError::MissingForm));
    }

    #[test]
    fn from_reader() {
        let form = read_all("a\n(b".as_bytes());
        match form {
            Err(e) => {
                assert!(matches!(e.err, ReadError::UnterminatedTable));
                assert_eq!(e.pos, Pos { line: 1, col: 0 });
            }
            Ok(f) => panic!("unexpected {}", f)
        }
    }
}
