// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! nift is a small notation usable both for data and for markup:
//!
//! ```text
//! html
//! :lang en
//! (meta :encoding utf-8)
//! (title "My Website")
//! ```
//!
//! Words are symbols, words starting with a digit are numbers, text in
//! double quotes is a string, and parentheses make tables. A table
//! holds positional entries and `:key value` pairs, in any order.
//! Commas count as whitespace.
//!
//! * `nift::parse` gives direct access to the tokenizer,
//!   `nift::read` builds a [Form](value::Form) tree, and
//!   `nift::print` writes it back as text.
//!
//! * `nift::json` and `nift::html` project a tree into JSON values and
//!   HTML text.
//!
//! * `nift::repl` runs a line-oriented read-evaluate-print loop over
//!   any `Read`/`Write` pair.
//!
//! Evaluation does nothing yet; forms evaluate to themselves.

pub mod buffered_lines;
pub mod context;
pub mod eval;
pub mod html;
pub mod json;
pub mod number;
pub mod parse;
pub mod pos;
pub mod print;
pub mod read;
pub mod repl;
pub mod settings;
pub mod value;

pub use eval::{evaluate, rep};
pub use print::print;
pub use read::read;
pub use value::{Form, Entry};
