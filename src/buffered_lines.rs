// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Get lines and their (zero based) line numbers from anything
//! implementing `Read`, decoding UTF-8 strictly.

//! Lines are yielded as soon as their newline has been read, which is
//! what an interactive reader needs; `\r\n` endings are accepted.

use std::io::{self, Read};
use anyhow::{Result, anyhow};
use utf8::BufReadDecoder;
use genawaiter::rc::Gen;


fn finish_line(line: &mut String) -> String {
    if line.ends_with('\r') {
        line.pop();
    }
    std::mem::take(line)
}

pub fn buffered_lines<R>(
    fh: R
) -> impl Iterator<Item=Result<(String, u32)>>
    where R: Read
{
    Gen::new(|co| async move {
        let mut inp = BufReadDecoder::new(io::BufReader::new(fh));
        let mut line = String::new();
        let mut lineno: u32 = 0;
        loop {
            if let Some(r) = inp.next_strict() {
                match r {
                    Ok(x) => {
                        for c in x.chars() {
                            if c == '\n' {
                                co.yield_(Ok((finish_line(&mut line), lineno))).await;
                                lineno += 1;
                            } else {
                                line.push(c);
                            }
                        }
                    },
                    Err(e) => {
                        co.yield_(Err(anyhow!("buffered_lines: line {}: {}",
                                              lineno + 1, e))).await;
                        return;
                    }
                }
            } else {
                if ! line.is_empty() {
                    co.yield_(Ok((finish_line(&mut line), lineno))).await;
                }
                return;
            }
        }
    }).into_iter()
}
