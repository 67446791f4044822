// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Line-oriented read-evaluate-print loop: every non-empty input line
//! is read as nift source and answered with its printed form.

use crate::buffered_lines::buffered_lines;
use crate::context::SpecialContext;
use crate::eval::rep_with;
use crate::settings::{Settings, PROMPT};
use std::io::{Read, Write};
use anyhow::Result;
use tracing::debug;

fn prompt(out: &mut impl Write, settings: &Settings) -> Result<()> {
    if settings.modes.prompt {
        out.write_all(PROMPT.as_bytes())?;
        out.flush()?;
    }
    Ok(())
}

/// Run until `input` ends. Answers go to `output`; a line that fails
/// to read gets its error written to `errors` instead, and the loop
/// goes on with the next line. `name` says where `input` comes from,
/// for the error messages.
pub fn run(
    input: impl Read,
    output: impl Write,
    errors: impl Write,
    name: &str,
    settings: &Settings,
) -> Result<()> {
    let (mut output, mut errors) = (output, errors);
    prompt(&mut output, settings)?;
    for r in buffered_lines(input) {
        let (line, lineno) = r?;
        let trimmed = line.trim();
        if ! trimmed.is_empty() {
            match rep_with(trimmed, settings.format) {
                Ok(answer) => writeln!(output, "{}", answer)?,
                Err(e) => {
                    debug!(lineno, "{}", e);
                    let leading = line.chars().take_while(|c| c.is_whitespace()).count();
                    let pos = e.pos.offset(lineno, leading as u32);
                    let e = e.err.at(pos).in_context(Box::new(SpecialContext::new(name)));
                    writeln!(errors, "error: {}", e)?;
                    errors.flush()?;
                }
            }
        }
        prompt(&mut output, settings)?;
    }
    output.flush()?;
    Ok(())
}
