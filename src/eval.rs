// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The read-evaluate-print pipeline.

use crate::print::print;
use crate::read::{read_with, ReadErrorWithPos};
use crate::settings::{Format, NIFT_FORMAT};
use crate::value::Form;

/// Forms currently evaluate to themselves. Readers and printers only
/// meet here, so an evaluator can be put in without touching either.
pub fn evaluate(form: Form) -> Form {
    form
}

/// `print(evaluate(read(source)))`
pub fn rep(source: &str) -> Result<String, ReadErrorWithPos> {
    rep_with(source, &NIFT_FORMAT)
}

pub fn rep_with(source: &str, format: &Format) -> Result<String, ReadErrorWithPos> {
    let form = read_with(source, format)?;
    Ok(print(&evaluate(form)))
}
