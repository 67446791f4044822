// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Writing forms back as nift text. The formatting itself is the
//! `Display` implementation of [Form](../value/enum.Form.html).
//! Whitespace and commas from the source are not kept: entries are
//! separated by exactly one space, so that printing what was read
//! gives the same text as before.

use crate::value::Form;
use std::io::Write;
use std::path::Path;
use std::fs::File;

pub fn print(form: &Form) -> String {
    form.to_string()
}

/// Write each form on its own line.
pub fn write_all<'t>(
    out: impl Write,
    forms: impl IntoIterator<Item = &'t Form>
) -> Result<(), std::io::Error> {
    let mut out = out; // for `File`
    for form in forms.into_iter() {
        writeln!(out, "{}", form)?;
    }
    out.flush()
}

pub fn write_file<'t>(path: &Path, forms: impl IntoIterator<Item = &'t Form>)
                      -> Result<(), std::io::Error> {
    write_all(File::create(path)?, forms)
}
