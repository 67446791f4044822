// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Settings for reading, and for the line-oriented front end.

#[derive(Debug)]
pub struct Format {
    /// Wrap the whole source in an implicit table, so that it may
    /// hold any number of top-level forms. Otherwise only the first
    /// form is read.
    pub root_table: bool,
    /// How deeply tables may nest before reading gives up.
    pub max_depth: u32,
}

pub const NIFT_FORMAT : Format = Format {
    root_table: true,
    max_depth: 500,
    // ^ the limit with default settings on Linux is around 1200
};

pub const SINGLE_FORM_FORMAT : Format = Format {
    root_table: false,
    max_depth: 500,
};


#[derive(Debug)]
pub struct Modes {
    /// Write `PROMPT` before each line is read.
    pub prompt: bool,
}

pub const PROMPT: &str = "nift> ";

#[derive(Debug)]
pub struct Settings<'t> {
    pub format: &'t Format,
    pub modes: &'t Modes,
}
